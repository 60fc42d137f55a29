use flightcore::prelude::{FeedResult, StateSource};
use flightcore::StateResponse;
use std::fs;
use std::path::PathBuf;

/// Replays a saved `/states/all` body from disk.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StateSource for FileSource {
    fn fetch(&self) -> FeedResult<StateResponse> {
        let bytes = fs::read(&self.path)?;
        StateResponse::from_slice(&bytes)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flightcore::prelude::FeedError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn reads_saved_response() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(
            br#"{"time":1700000000,"states":[["4007f5","EZY19AB ","United Kingdom",null,1700000000,-2.3,53.4,null,false,null,null,null,null,null,null,false,0]]}"#,
        )
        .unwrap();
        let source = FileSource::new(temp.path());
        let response = source.fetch().unwrap();
        assert_eq!(response.states.len(), 1);
        assert_eq!(response.states[0].icao24.as_deref(), Some("4007f5"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().join("nope.json"));
        assert!(matches!(source.fetch(), Err(FeedError::Io(_))));
    }

    #[test]
    fn garbage_is_decode_error() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"<html>rate limited</html>").unwrap();
        let source = FileSource::new(temp.path());
        assert!(matches!(source.fetch(), Err(FeedError::Decode(_))));
    }
}
