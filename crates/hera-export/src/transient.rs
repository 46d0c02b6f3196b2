//! Scoped transient snapshot file.
//!
//! The file exists exactly as long as the [`TransientSnapshot`] value; it is
//! removed when the value is dropped, whichever way the export returns.

use crate::config::ExportConfig;
use crate::error::Result;
use hera_core::Snapshot;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

pub struct TransientSnapshot {
    file: NamedTempFile,
}

impl TransientSnapshot {
    /// Write `snapshot` as pretty JSON into a fresh temporary file.
    pub fn write(snapshot: &Snapshot, config: &ExportConfig) -> Result<Self> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(&config.file_prefix).suffix(".json");
        let mut file = match &config.temp_dir {
            Some(dir) => builder.tempfile_in(dir)?,
            None => builder.tempfile()?,
        };

        snapshot.to_writer_pretty(file.as_file_mut())?;
        file.as_file_mut().flush()?;
        tracing::debug!(path = %file.path().display(), "wrote transient snapshot");
        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

impl Drop for TransientSnapshot {
    fn drop(&mut self) {
        tracing::debug!(path = %self.file.path().display(), "releasing transient snapshot");
    }
}
