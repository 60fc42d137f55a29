pub mod file;
pub mod http;

pub use file::FileSource;
pub use http::OpenSkyClient;
