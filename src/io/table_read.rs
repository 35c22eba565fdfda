use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use tracing::trace;

use crate::error::{ConsolidateError, Result};
use crate::model::{LinePair, Record};

/// Reads phrase table lines from a buffered stream, enforcing a maximum line
/// length and counting lines from 1.
#[derive(Debug)]
pub struct TableReader<R> {
    reader: R,
    path: PathBuf,
    max_line_length: usize,
    lines_read: usize,
}

impl TableReader<BufReader<File>> {
    /// Opens a table file for reading.
    pub fn open(path: &Path, max_line_length: usize) -> Result<Self> {
        let file = File::open(path).map_err(|source| ConsolidateError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(BufReader::new(file), path, max_line_length))
    }
}

impl<R: BufRead> TableReader<R> {
    /// Wraps an already open stream. `path` is only used in error messages.
    pub fn new(reader: R, path: impl Into<PathBuf>, max_line_length: usize) -> Self {
        Self {
            reader,
            path: path.into(),
            max_line_length,
            lines_read: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    /// Reads the next line without its trailing newline. Returns `None` at
    /// end of stream. A final line without a newline is still returned.
    pub fn read_line(&mut self) -> Result<Option<String>> {
        let line = self.lines_read + 1;
        let limit = self.max_line_length;
        let mut buffer = Vec::new();

        // One byte past the limit is enough to tell an overlong line apart.
        let read = (&mut self.reader)
            .take((limit as u64).saturating_add(1))
            .read_until(b'\n', &mut buffer)
            .map_err(|source| ConsolidateError::Read {
                path: self.path.clone(),
                line,
                source,
            })?;
        if read == 0 {
            return Ok(None);
        }
        self.lines_read = line;

        if buffer.last() == Some(&b'\n') {
            buffer.pop();
        }
        if buffer.len() >= limit {
            return Err(ConsolidateError::LineTooLong {
                path: self.path.clone(),
                line,
                length: buffer.len(),
                limit,
            });
        }

        String::from_utf8(buffer)
            .map(Some)
            .map_err(|_| ConsolidateError::InvalidUtf8 {
                path: self.path.clone(),
                line,
            })
    }

    /// Reads and splits the next line.
    pub fn read_record(&mut self) -> Result<Option<Record>> {
        Ok(self.read_line()?.map(|line| Record::parse(&line)))
    }
}

/// Reads the direct and indirect tables in lockstep.
#[derive(Debug)]
pub struct LinePairReader<D, I> {
    direct: TableReader<D>,
    indirect: TableReader<I>,
    line: usize,
}

impl<D: BufRead, I: BufRead> LinePairReader<D, I> {
    pub fn new(direct: TableReader<D>, indirect: TableReader<I>) -> Self {
        Self {
            direct,
            indirect,
            line: 0,
        }
    }

    pub fn direct_path(&self) -> &Path {
        self.direct.path()
    }

    pub fn indirect_path(&self) -> &Path {
        self.indirect.path()
    }

    /// Number of complete pairs returned so far.
    pub fn pairs_read(&self) -> usize {
        self.line
    }

    /// Returns the next pair, or `None` once both tables are exhausted at the
    /// same line. A table ending before the other is an error.
    pub fn next_pair(&mut self) -> Result<Option<LinePair>> {
        let line = self.line + 1;
        let direct = self.direct.read_record()?;
        let indirect = self.indirect.read_record()?;

        match (direct, indirect) {
            (Some(direct), Some(indirect)) => {
                self.line = line;
                trace!(line, "read line pair");
                Ok(Some(LinePair {
                    line,
                    direct,
                    indirect,
                }))
            }
            (None, None) => Ok(None),
            (None, Some(_)) => Err(ConsolidateError::StreamLengthMismatch {
                line,
                exhausted: self.direct.path().to_path_buf(),
                remaining: self.indirect.path().to_path_buf(),
            }),
            (Some(_), None) => Err(ConsolidateError::StreamLengthMismatch {
                line,
                exhausted: self.indirect.path().to_path_buf(),
                remaining: self.direct.path().to_path_buf(),
            }),
        }
    }
}
