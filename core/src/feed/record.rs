use serde::{Deserialize, Serialize};

/// A state that survived the radius filter, with derived fields attached.
///
/// Field order is the persisted column order. Absent telemetry serializes as
/// `null` rather than being skipped so every record carries the same fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightRecord {
    pub timestamp: i64,
    pub time: String,
    /// Kilometres from the reference point.
    pub distance: f64,
    pub icao24: Option<String>,
    pub callsign: Option<String>,
    pub origin_country: Option<String>,
    pub last_contact: Option<i64>,
    pub last_contact_time: Option<String>,
    pub longitude: f64,
    pub latitude: f64,
    pub baro_altitude: Option<f64>,
    pub on_ground: Option<bool>,
    pub velocity: Option<f64>,
    pub true_track: Option<f64>,
    pub vertical_rate: Option<f64>,
    pub sensors: Option<Vec<i64>>,
    pub geo_altitude: Option<f64>,
    pub squawk: Option<String>,
    pub spi: Option<bool>,
    pub position_source: Option<u8>,
}

impl FlightRecord {
    pub const FIELD_NAMES: [&'static str; 20] = [
        "timestamp",
        "time",
        "distance",
        "icao24",
        "callsign",
        "origin_country",
        "last_contact",
        "last_contact_time",
        "longitude",
        "latitude",
        "baro_altitude",
        "on_ground",
        "velocity",
        "true_track",
        "vertical_rate",
        "sensors",
        "geo_altitude",
        "squawk",
        "spi",
        "position_source",
    ];

    /// Field names in persisted order.
    pub fn field_names(&self) -> &'static [&'static str] {
        &Self::FIELD_NAMES
    }

    /// One flat text cell per field, aligned with [`FlightRecord::FIELD_NAMES`].
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.timestamp.to_string(),
            self.time.clone(),
            self.distance.to_string(),
            opt_cell(&self.icao24),
            opt_cell(&self.callsign),
            opt_cell(&self.origin_country),
            opt_cell(&self.last_contact),
            opt_cell(&self.last_contact_time),
            self.longitude.to_string(),
            self.latitude.to_string(),
            opt_cell(&self.baro_altitude),
            opt_cell(&self.on_ground),
            opt_cell(&self.velocity),
            opt_cell(&self.true_track),
            opt_cell(&self.vertical_rate),
            self.sensors.as_deref().map(list_cell).unwrap_or_default(),
            opt_cell(&self.geo_altitude),
            opt_cell(&self.squawk),
            opt_cell(&self.spi),
            opt_cell(&self.position_source),
        ]
    }
}

fn opt_cell<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(ToString::to_string).unwrap_or_default()
}

fn list_cell(values: &[i64]) -> String {
    let inner = values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{inner}]")
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::FlightRecord;

    pub fn record(icao24: &str, distance: f64) -> FlightRecord {
        FlightRecord {
            timestamp: 1_700_000_000,
            time: "2023-11-14 22:13:20".into(),
            distance,
            icao24: Some(icao24.into()),
            callsign: Some("EZY19AB".into()),
            origin_country: Some("United Kingdom".into()),
            last_contact: Some(1_699_999_998),
            last_contact_time: Some("2023-11-14 22:13:18".into()),
            longitude: -2.3,
            latitude: 53.4,
            baro_altitude: Some(1219.2),
            on_ground: Some(false),
            velocity: Some(95.5),
            true_track: Some(231.4),
            vertical_rate: None,
            sensors: None,
            geo_altitude: Some(1280.16),
            squawk: Some("6363".into()),
            spi: Some(false),
            position_source: Some(0),
        }
    }
}
