use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{ConsolidateError, Result};
use crate::model::ConsolidatedEntry;

/// Writes consolidated entries, one per line.
#[derive(Debug)]
pub struct TableWriter<W: Write> {
    writer: W,
    path: PathBuf,
}

impl TableWriter<BufWriter<File>> {
    /// Creates (or truncates) the consolidated table file.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|source| ConsolidateError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(BufWriter::new(file), path))
    }
}

impl<W: Write> TableWriter<W> {
    pub fn new(writer: W, path: impl Into<PathBuf>) -> Self {
        Self {
            writer,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write_entry(&mut self, entry: &ConsolidatedEntry<'_>) -> Result<()> {
        writeln!(self.writer, "{entry}").map_err(|source| self.write_error(source))
    }

    /// Flushes buffered output and hands back the underlying sink.
    pub fn finish(mut self) -> Result<W> {
        self.writer
            .flush()
            .map_err(|source| self.write_error(source))?;
        Ok(self.writer)
    }

    fn write_error(&self, source: std::io::Error) -> ConsolidateError {
        ConsolidateError::Write {
            path: self.path.clone(),
            source,
        }
    }
}
