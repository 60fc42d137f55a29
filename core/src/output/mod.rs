pub mod json;
pub mod table;

pub use json::write_json;
pub use table::write_csv;

/// Failures while persisting or reloading a snapshot.
#[derive(thiserror::Error, Debug)]
pub enum OutputError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

pub type OutputResult<T> = Result<T, OutputError>;
