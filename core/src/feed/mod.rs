pub mod record;
pub mod response;
pub mod snapshot;
pub mod state;

pub use record::FlightRecord;
pub use response::StateResponse;
pub use snapshot::Snapshot;
pub use state::StateVector;
