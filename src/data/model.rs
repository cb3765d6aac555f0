// ---------------------------------------------------------------------------
// Measurement – one row of the sweep
// ---------------------------------------------------------------------------

/// A single point of an oscilloscope frequency sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Stimulus frequency in Hz.
    pub frequency_hz: f64,
    /// Input amplitude in volts.
    pub v_in: f64,
    /// Output amplitude in volts.
    pub v_out: f64,
}

// ---------------------------------------------------------------------------
// MeasurementTable – the complete loaded sweep
// ---------------------------------------------------------------------------

/// The full parsed sweep, in file row order. Immutable after loading.
#[derive(Debug, Clone, Default)]
pub struct MeasurementTable {
    pub records: Vec<Measurement>,
}

impl MeasurementTable {
    pub fn from_records(records: Vec<Measurement>) -> Self {
        MeasurementTable { records }
    }

    /// Number of measurement points.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the sweep is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The frequency axis, index-aligned with `records`.
    pub fn frequencies(&self) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(|m| m.frequency_hz)
    }
}
