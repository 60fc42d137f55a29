//! Geo-filtering and record shaping for OpenSky state vectors.
//!
//! Raw `/states/all` responses are decoded into named fields, narrowed to a
//! radius around a reference point, and shaped into flat flight records that
//! persist as JSON or CSV.

pub mod feed;
pub mod math;
pub mod output;
pub mod prelude;
pub mod processing;
pub mod telemetry;

pub use feed::{FlightRecord, Snapshot, StateResponse, StateVector};
pub use prelude::{AreaConfig, FeedError, FeedResult, FilterConfig, StateSource};
pub use processing::{FilterOutput, GeoFilter};
