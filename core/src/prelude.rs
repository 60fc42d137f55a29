use serde::{Deserialize, Serialize};

use crate::feed::StateResponse;

/// Default point of interest: Manchester Airport.
pub const DEFAULT_LATITUDE: f64 = 53.3588;
pub const DEFAULT_LONGITUDE: f64 = -2.2727;
/// Default search radius in kilometres.
pub const DEFAULT_RADIUS_KM: f64 = 100.0;
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Area of interest: a reference point and the radius around it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AreaConfig {
    pub latitude: f64,
    pub longitude: f64,
    pub radius_km: f64,
}

impl Default for AreaConfig {
    fn default() -> Self {
        Self {
            latitude: DEFAULT_LATITUDE,
            longitude: DEFAULT_LONGITUDE,
            radius_km: DEFAULT_RADIUS_KM,
        }
    }
}

impl AreaConfig {
    pub fn new(latitude: f64, longitude: f64, radius_km: f64) -> Self {
        Self {
            latitude,
            longitude,
            radius_km,
        }
    }

    /// Lat/lon box `(lamin, lomin, lamax, lomax)` that encloses the radius.
    ///
    /// Only a coarse pre-filter for the upstream query; the haversine check
    /// still decides what is kept.
    pub fn bounding_box(&self) -> (f64, f64, f64, f64) {
        let lat_span = self.radius_km / KM_PER_DEGREE;
        let cos_lat = self.latitude.to_radians().cos().abs().max(1e-6);
        let lon_span = (self.radius_km / (KM_PER_DEGREE * cos_lat)).min(180.0);
        (
            (self.latitude - lat_span).max(-90.0),
            (self.longitude - lon_span).max(-180.0),
            (self.latitude + lat_span).min(90.0),
            (self.longitude + lon_span).min(180.0),
        )
    }
}

const KM_PER_DEGREE: f64 = 111.195;

/// Everything the filter needs to shape a snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterConfig {
    pub area: AreaConfig,
    pub date_format: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            area: AreaConfig::default(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl FilterConfig {
    pub fn new(area: AreaConfig, date_format: impl Into<String>) -> Self {
        Self {
            area,
            date_format: date_format.into(),
        }
    }
}

/// Failures while retrieving or decoding the upstream feed.
#[derive(thiserror::Error, Debug)]
pub enum FeedError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("upstream returned status {0}")]
    Status(u16),
    #[error("malformed feed: {0}")]
    Decode(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for FeedError {
    fn from(err: serde_json::Error) -> Self {
        FeedError::Decode(err.to_string())
    }
}

pub type FeedResult<T> = Result<T, FeedError>;

/// Anything that can hand over one `/states/all` response.
pub trait StateSource {
    fn fetch(&self) -> FeedResult<StateResponse>;

    /// Short label for log lines.
    fn describe(&self) -> String;
}
