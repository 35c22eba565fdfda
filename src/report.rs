use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::consolidate::ConsolidateSummary;
use crate::error::{ConsolidateError, Result};

/// Machine readable record of a finished run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub direct: PathBuf,
    pub indirect: PathBuf,
    pub output: PathBuf,
    #[serde(flatten)]
    pub summary: ConsolidateSummary,
}

/// Writes the report as pretty printed JSON.
pub fn write_report(path: &Path, report: &RunReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json).map_err(|source| ConsolidateError::Write {
        path: path.to_path_buf(),
        source,
    })
}
