pub mod geo;
pub mod stats;

pub use geo::{haversine_distance, DistanceOptions, DistanceUnit, EARTH_RADIUS_M};
pub use stats::StatsHelper;
