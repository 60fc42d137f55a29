use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::feed::Snapshot;
use crate::output::OutputResult;

/// Writes the snapshot as one JSON document, replacing any existing file.
pub fn write_json<P: AsRef<Path>>(path: P, snapshot: &Snapshot) -> OutputResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer(&mut writer, snapshot)?;
    writer.flush()?;
    Ok(())
}
