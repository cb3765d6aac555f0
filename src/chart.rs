use std::path::Path;

use plotters::prelude::*;

use crate::data::model::MeasurementTable;
use crate::error::RenderError;

// ---------------------------------------------------------------------------
// Chart layout constants
// ---------------------------------------------------------------------------

/// Output bitmap size: 6.4 in x 4.8 in at 600 dpi.
pub const IMAGE_WIDTH: u32 = 3840;
pub const IMAGE_HEIGHT: u32 = 2880;

pub const CHART_TITLE: &str = "FIR High-Pass Filter";
pub const X_AXIS_LABEL: &str = "Frequency [Hz]";
pub const Y_AXIS_LABEL: &str = "Mag(H) [dB]";
/// Legend entry for the single series: the configured cutoff frequency.
pub const SERIES_LABEL: &str = "fc = 5 kHz";

const LINE_COLOR: RGBColor = RGBColor(0x4c, 0x72, 0xb0);
const LINE_WIDTH: u32 = 6;

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Render the gain-vs-frequency line chart and write it as a PNG.
///
/// `gains_db` must be index-aligned with the table's records.
pub fn render(
    table: &MeasurementTable,
    gains_db: &[f64],
    path: &Path,
) -> Result<(), RenderError> {
    render_inner(table, gains_db, path).map_err(|message| RenderError::Backend {
        path: path.to_path_buf(),
        message,
    })
}

/// Drawing body. `plotters` error types are generic over the backend, so the
/// chain is flattened to a message at this boundary.
fn render_inner(table: &MeasurementTable, gains_db: &[f64], path: &Path) -> Result<(), String> {
    let x_range = padded_range(table.frequencies(), 0.0);
    let y_range = padded_range(gains_db.iter().copied(), 0.05);

    let root = BitMapBackend::new(path, (IMAGE_WIDTH, IMAGE_HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| e.to_string())?;

    let mut chart = ChartBuilder::on(&root)
        .caption(CHART_TITLE, ("sans-serif", 90))
        .margin(40)
        .x_label_area_size(140)
        .y_label_area_size(180)
        .build_cartesian_2d(x_range, y_range)
        .map_err(|e| e.to_string())?;

    chart
        .configure_mesh()
        .x_desc(X_AXIS_LABEL)
        .y_desc(Y_AXIS_LABEL)
        .axis_desc_style(("sans-serif", 60))
        .label_style(("sans-serif", 45))
        .draw()
        .map_err(|e| e.to_string())?;

    chart
        .draw_series(LineSeries::new(
            table.frequencies().zip(gains_db.iter().copied()),
            LINE_COLOR.stroke_width(LINE_WIDTH),
        ))
        .map_err(|e| e.to_string())?
        .label(SERIES_LABEL)
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 60, y)], LINE_COLOR.stroke_width(LINE_WIDTH))
        });

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .label_font(("sans-serif", 55))
        .position(SeriesLabelPosition::UpperRight)
        .draw()
        .map_err(|e| e.to_string())?;

    root.present().map_err(|e| e.to_string())?;
    Ok(())
}

/// Min..max of `values`, widened by `headroom` of the span on each side.
/// A constant series is padded to a unit span so the axis stays non-empty.
fn padded_range(values: impl Iterator<Item = f64>, headroom: f64) -> std::ops::Range<f64> {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });

    let span = max - min;
    if span.abs() < f64::EPSILON {
        return (min - 0.5)..(max + 0.5);
    }
    (min - span * headroom)..(max + span * headroom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Measurement;
    use tempfile::TempDir;

    fn table(points: &[(f64, f64, f64)]) -> MeasurementTable {
        MeasurementTable::from_records(
            points
                .iter()
                .map(|&(frequency_hz, v_in, v_out)| Measurement {
                    frequency_hz,
                    v_in,
                    v_out,
                })
                .collect(),
        )
    }

    #[test]
    fn writes_a_nonempty_png() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("chart.png");

        let t = table(&[(1000.0, 1.0, 1.0), (5000.0, 1.0, 0.707), (10000.0, 1.0, 0.1)]);
        let gains = [0.0, -3.01, -20.0];

        render(&t, &gains, &out).unwrap();

        let meta = std::fs::metadata(&out).unwrap();
        assert!(meta.len() > 0);
    }

    #[test]
    fn constant_series_still_renders() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("flat.png");

        let t = table(&[(1000.0, 1.0, 1.0), (2000.0, 1.0, 1.0)]);
        let gains = [0.0, 0.0];

        render(&t, &gains, &out).unwrap();
        assert!(out.exists());
    }

    #[test]
    fn unwritable_path_is_a_render_error() {
        let t = table(&[(1000.0, 1.0, 1.0), (2000.0, 1.0, 0.5)]);
        let gains = [0.0, -6.02];

        let err = render(&t, &gains, Path::new("no/such/dir/chart.png")).unwrap_err();
        assert!(matches!(err, RenderError::Backend { .. }));
    }

    #[test]
    fn padded_range_widens_both_ends() {
        let r = padded_range([0.0, 10.0].into_iter(), 0.1);
        assert!((r.start - -1.0).abs() < 1e-12);
        assert!((r.end - 11.0).abs() < 1e-12);
    }

    #[test]
    fn padded_range_handles_constant_input() {
        let r = padded_range([3.0, 3.0].into_iter(), 0.05);
        assert!(r.start < 3.0 && r.end > 3.0);
    }
}
