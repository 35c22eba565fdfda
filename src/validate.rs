use std::path::Path;

use crate::config::ConsolidateConfig;
use crate::error::{ConsolidateError, PhraseSide, Result};
use crate::model::{LinePair, Record};

/// Checks that a line pair is well formed and that both tables describe the
/// same phrase pair.
pub fn check_pair(
    config: &ConsolidateConfig,
    pair: &LinePair,
    direct_path: &Path,
    indirect_path: &Path,
) -> Result<()> {
    check_field_count(
        &pair.direct,
        config.direct_field_count(),
        direct_path,
        pair.line,
    )?;
    check_field_count(
        &pair.indirect,
        config.indirect_field_count(),
        indirect_path,
        pair.line,
    )?;
    check_phrase(pair, PhraseSide::Target)?;
    check_phrase(pair, PhraseSide::Source)
}

fn check_field_count(record: &Record, expected: usize, path: &Path, line: usize) -> Result<()> {
    if record.len() != expected {
        return Err(ConsolidateError::FieldCount {
            path: path.to_path_buf(),
            line,
            expected,
            found: record.len(),
        });
    }
    Ok(())
}

fn check_phrase(pair: &LinePair, side: PhraseSide) -> Result<()> {
    let (direct, indirect) = match side {
        PhraseSide::Target => (pair.direct.target(), pair.indirect.target()),
        PhraseSide::Source => (pair.direct.source(), pair.indirect.source()),
    };
    if direct != indirect {
        return Err(ConsolidateError::PhraseMismatch {
            line: pair.line,
            side,
            direct: direct.to_string(),
            indirect: indirect.to_string(),
        });
    }
    Ok(())
}
