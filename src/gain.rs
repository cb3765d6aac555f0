use crate::data::model::MeasurementTable;
use crate::error::DomainError;

// ---------------------------------------------------------------------------
// Amplitude ratio ↔ decibel conversion
// ---------------------------------------------------------------------------

/// Convert an amplitude ratio to decibels.
pub fn ratio_to_db(ratio: f64) -> f64 {
    20.0 * ratio.log10()
}

/// Convert decibels back to an amplitude ratio.
pub fn db_to_ratio(db: f64) -> f64 {
    10.0_f64.powf(db / 20.0)
}

/// Compute the gain series in dB, one entry per measurement, index-aligned
/// with the table.
///
/// A measurement with `v_in == 0` or a non-positive `v_out / v_in` ratio is
/// rejected with a [`DomainError`] naming the row (1-based, matching the
/// loader's numbering); no NaN or infinity ever enters the series.
pub fn gain_series(table: &MeasurementTable) -> Result<Vec<f64>, DomainError> {
    table
        .records
        .iter()
        .enumerate()
        .map(|(idx, m)| {
            let row = idx + 1;
            if m.v_in == 0.0 {
                return Err(DomainError::ZeroInput { row });
            }
            let ratio = m.v_out / m.v_in;
            if ratio <= 0.0 {
                return Err(DomainError::NonPositiveRatio { row, ratio });
            }
            Ok(ratio_to_db(ratio))
        })
        .collect()
}
