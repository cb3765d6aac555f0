use std::path::Path;

use crate::error::DataFormatError;

use super::model::{Measurement, MeasurementTable};

/// Header name of the frequency column.
pub const FREQUENCY_COLUMN: &str = "Freq";
/// Header name of the input-amplitude column.
pub const V_IN_COLUMN: &str = "V_i";
/// Header name of the output-amplitude column.
pub const V_OUT_COLUMN: &str = "V_o";

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Load a measurement sweep from a CSV file.
///
/// Layout: header row naming at least [`FREQUENCY_COLUMN`], [`V_IN_COLUMN`]
/// and [`V_OUT_COLUMN`]; one measurement per data row. Columns may appear in
/// any order and extra columns are ignored. Row order is preserved.
///
/// Errors number rows 1-based from the first data row.
pub fn load_csv(path: &Path) -> Result<MeasurementTable, DataFormatError> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| DataFormatError::Open {
        path: path.to_path_buf(),
        source: e,
    })?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| DataFormatError::Open {
            path: path.to_path_buf(),
            source: e,
        })?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let freq_idx = column_index(&headers, FREQUENCY_COLUMN)?;
    let v_in_idx = column_index(&headers, V_IN_COLUMN)?;
    let v_out_idx = column_index(&headers, V_OUT_COLUMN)?;

    let mut records = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let row = row_no + 1;
        let record = result.map_err(|e| DataFormatError::MalformedRow { row, source: e })?;

        records.push(Measurement {
            frequency_hz: parse_field(&record, freq_idx, FREQUENCY_COLUMN, row)?,
            v_in: parse_field(&record, v_in_idx, V_IN_COLUMN, row)?,
            v_out: parse_field(&record, v_out_idx, V_OUT_COLUMN, row)?,
        });
    }

    if records.is_empty() {
        return Err(DataFormatError::Empty);
    }

    Ok(MeasurementTable::from_records(records))
}

fn column_index(headers: &[String], name: &'static str) -> Result<usize, DataFormatError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or(DataFormatError::MissingColumn(name))
}

fn parse_field(
    record: &csv::StringRecord,
    idx: usize,
    column: &'static str,
    row: usize,
) -> Result<f64, DataFormatError> {
    let raw = record.get(idx).unwrap_or("");
    raw.trim()
        .parse::<f64>()
        .ok()
        // "NaN" and "inf" parse, but are not measurements.
        .filter(|v| v.is_finite())
        .ok_or_else(|| DataFormatError::NotANumber {
            row,
            column,
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_csv(dir: &TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("sweep.csv");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_rows_in_file_order() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "Freq,V_i,V_o\n1000,1.0,1.0\n5000,1.0,0.707\n10000,1.0,0.1\n");

        let table = load_csv(&path).unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.records[0].frequency_hz, 1000.0);
        assert_eq!(table.records[1].v_out, 0.707);
        assert_eq!(table.records[2].frequency_hz, 10000.0);
    }

    #[test]
    fn accepts_reordered_and_extra_columns() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "V_o,comment,Freq,V_i\n0.5, bench run ,2000,1.0\n");

        let table = load_csv(&path).unwrap();

        assert_eq!(table.records[0].frequency_hz, 2000.0);
        assert_eq!(table.records[0].v_in, 1.0);
        assert_eq!(table.records[0].v_out, 0.5);
    }

    #[test]
    fn trims_whitespace_around_values() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "Freq,V_i,V_o\n 1000 , 1.0 , 0.5 \n");

        let table = load_csv(&path).unwrap();
        assert_eq!(table.records[0].v_out, 0.5);
    }

    #[test]
    fn missing_column_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "Freq,V_i\n1000,1.0\n");

        let err = load_csv(&path).unwrap_err();
        assert!(matches!(err, DataFormatError::MissingColumn(V_OUT_COLUMN)));
    }

    #[test]
    fn non_numeric_value_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "Freq,V_i,V_o\n1000,1.0,ok\n");

        let err = load_csv(&path).unwrap_err();
        match err {
            DataFormatError::NotANumber { row, column, value } => {
                assert_eq!(row, 1);
                assert_eq!(column, V_OUT_COLUMN);
                assert_eq!(value, "ok");
            }
            other => panic!("expected NotANumber, got {other:?}"),
        }
    }

    #[test]
    fn wrong_field_count_row_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "Freq,V_i,V_o\n1000,1.0\n");

        let err = load_csv(&path).unwrap_err();
        assert!(matches!(err, DataFormatError::MalformedRow { row: 1, .. }));
    }

    #[test]
    fn non_finite_value_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "Freq,V_i,V_o\n1000,NaN,0.5\n");

        let err = load_csv(&path).unwrap_err();
        assert!(matches!(err, DataFormatError::NotANumber { .. }));
    }

    #[test]
    fn header_only_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "Freq,V_i,V_o\n");

        let err = load_csv(&path).unwrap_err();
        assert!(matches!(err, DataFormatError::Empty));
    }

    #[test]
    fn missing_file_is_rejected() {
        let err = load_csv(Path::new("does/not/exist.csv")).unwrap_err();
        assert!(matches!(err, DataFormatError::Open { .. }));
    }
}
