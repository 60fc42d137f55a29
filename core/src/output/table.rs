use csv::Writer;
use std::path::Path;

use crate::feed::FlightRecord;
use crate::output::OutputResult;

/// Writes one CSV row per flight, replacing any existing file.
///
/// The header comes from the first record's field names. Returns the number
/// of data rows written; an empty slice leaves an empty file.
pub fn write_csv<P: AsRef<Path>>(path: P, flights: &[FlightRecord]) -> OutputResult<usize> {
    let mut writer = Writer::from_path(path)?;
    let Some(first) = flights.first() else {
        writer.flush()?;
        return Ok(0);
    };

    writer.write_record(first.field_names())?;
    for flight in flights {
        writer.write_record(flight.to_row())?;
    }
    writer.flush()?;
    Ok(flights.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::record::fixtures::record;

    fn read_rows(path: &Path) -> (Vec<String>, Vec<Vec<String>>) {
        let mut reader = csv::Reader::from_path(path).unwrap();
        let header = reader
            .headers()
            .unwrap()
            .iter()
            .map(str::to_string)
            .collect();
        let rows = reader
            .records()
            .map(|row| row.unwrap().iter().map(str::to_string).collect())
            .collect();
        (header, rows)
    }

    #[test]
    fn header_then_rows_in_input_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flights.csv");
        let flights = vec![record("4007f5", 4.93), record("400a1b", 61.25)];

        assert_eq!(write_csv(&path, &flights).unwrap(), 2);

        let (header, rows) = read_rows(&path);
        assert_eq!(header, FlightRecord::FIELD_NAMES.to_vec());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][3], "4007f5");
        assert_eq!(rows[1][3], "400a1b");
        assert_eq!(rows[1][2], "61.25");

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 3);
        assert!(text.starts_with("timestamp,time,distance,icao24,callsign,"));
    }

    #[test]
    fn sensor_lists_are_quoted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flights.csv");
        let mut flight = record("4007f5", 4.93);
        flight.sensors = Some(vec![1, 2]);

        write_csv(&path, &[flight]).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"[1, 2]\""), "{text}");
        let (_, rows) = read_rows(&path);
        assert_eq!(rows[0][15], "[1, 2]");
    }

    #[test]
    fn unknown_fields_write_empty_cells() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flights.csv");
        let mut flight = record("4007f5", 4.93);
        flight.origin_country = None;
        flight.on_ground = None;
        flight.position_source = None;

        write_csv(&path, &[flight]).unwrap();

        let (header, rows) = read_rows(&path);
        assert_eq!(rows[0].len(), header.len());
        assert_eq!(rows[0][5], "");
        assert_eq!(rows[0][11], "");
        assert_eq!(rows[0][19], "");
    }

    #[test]
    fn empty_input_leaves_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flights.csv");
        std::fs::write(&path, "stale").unwrap();

        assert_eq!(write_csv(&path, &[]).unwrap(), 0);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }
}
