use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::feed::FlightRecord;
use crate::output::OutputResult;

/// Filtered view of one upstream response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub timestamp: i64,
    pub time: String,
    pub flights: Vec<FlightRecord>,
}

impl Snapshot {
    pub fn new(timestamp: i64, time: impl Into<String>, flights: Vec<FlightRecord>) -> Self {
        Self {
            timestamp,
            time: time.into(),
            flights,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    /// Reads a snapshot previously written by [`crate::output::write_json`].
    pub fn load<P: AsRef<Path>>(path: P) -> OutputResult<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn nearest(&self) -> Option<&FlightRecord> {
        self.flights
            .iter()
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }
}
