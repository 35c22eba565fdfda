use std::io::{BufRead, Write};
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::config::ConsolidateConfig;
use crate::error::Result;
use crate::io::table_read::{LinePairReader, TableReader};
use crate::io::table_write::TableWriter;
use crate::label::split_rule_labels;
use crate::model::{ConsolidatedEntry, LinePair};
use crate::validate::check_pair;

/// Line pairs between two progress messages.
pub const PROGRESS_INTERVAL: usize = 100_000;

/// Outcome of a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConsolidateSummary {
    /// Number of line pairs read and written.
    pub line_count: usize,
    pub hierarchical: bool,
    pub log_prob: bool,
    pub phrase_count_feature: &'static str,
}

/// Merges a direct and an indirect table into one consolidated table.
#[derive(Debug, Clone, Copy, Default)]
pub struct Consolidator {
    config: ConsolidateConfig,
}

impl Consolidator {
    pub fn new(config: ConsolidateConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConsolidateConfig {
        &self.config
    }

    /// Processes every line pair, writing one output line per pair. Stops at
    /// the first error; lines already written are not retracted.
    pub fn run<D, I, W>(
        &self,
        direct: TableReader<D>,
        indirect: TableReader<I>,
        mut output: TableWriter<W>,
    ) -> Result<ConsolidateSummary>
    where
        D: BufRead,
        I: BufRead,
        W: Write,
    {
        self.config.validate()?;
        let mut pairs = LinePairReader::new(direct, indirect);

        while let Some(pair) = pairs.next_pair()? {
            check_pair(
                &self.config,
                &pair,
                pairs.direct_path(),
                pairs.indirect_path(),
            )?;
            output.write_entry(&self.build_entry(&pair)?)?;

            if pair.line % PROGRESS_INTERVAL == 0 {
                info!(lines = pair.line, "consolidated line pairs");
            }
        }

        output.finish()?;
        let summary = ConsolidateSummary {
            line_count: pairs.pairs_read(),
            hierarchical: self.config.hierarchical,
            log_prob: self.config.log_prob,
            phrase_count_feature: self.config.phrase_count_feature(),
        };
        info!(line_count = summary.line_count, "consolidation finished");
        Ok(summary)
    }

    /// Builds the output entry for a validated pair.
    pub fn build_entry<'a>(&self, pair: &'a LinePair) -> Result<ConsolidatedEntry<'a>> {
        let phrase_count = self.config.phrase_count_feature();
        let direct = &pair.direct;
        let indirect = &pair.indirect;

        if !self.config.hierarchical {
            return Ok(ConsolidatedEntry::Phrase {
                target: direct.target(),
                source: direct.source(),
                indirect_score: indirect.field(2),
                direct_score: direct.field(2),
                phrase_count,
            });
        }

        let labels = split_rule_labels(direct, pair.line)?;
        Ok(ConsolidatedEntry::Rule {
            source: labels.source,
            target: labels.target,
            alignment: direct.field(2),
            indirect_score: indirect.field(2),
            direct_score: direct.field(3),
            phrase_count,
        })
    }
}

/// Consolidates two in-memory or otherwise already open streams. Errors name
/// the streams `direct`, `indirect` and `output`.
pub fn consolidate_streams<D, I, W>(
    direct: D,
    indirect: I,
    output: W,
    config: &ConsolidateConfig,
) -> Result<ConsolidateSummary>
where
    D: BufRead,
    I: BufRead,
    W: Write,
{
    Consolidator::new(*config).run(
        TableReader::new(direct, "direct", config.max_line_length),
        TableReader::new(indirect, "indirect", config.max_line_length),
        TableWriter::new(output, "output"),
    )
}

/// Consolidates the tables at `direct` and `indirect` into `output`. Every
/// file is closed by the time this returns, whether or not it succeeded.
#[instrument(
    level = "info",
    skip_all,
    fields(
        direct = %direct.display(),
        indirect = %indirect.display(),
        output = %output.display()
    )
)]
pub fn consolidate_files(
    direct: &Path,
    indirect: &Path,
    output: &Path,
    config: &ConsolidateConfig,
) -> Result<ConsolidateSummary> {
    config.validate()?;
    let direct_reader = TableReader::open(direct, config.max_line_length)?;
    let indirect_reader = TableReader::open(indirect, config.max_line_length)?;
    let writer = TableWriter::create(output)?;
    debug!(
        hierarchical = config.hierarchical,
        log_prob = config.log_prob,
        max_line_length = config.max_line_length,
        "opened tables"
    );

    Consolidator::new(*config).run(direct_reader, indirect_reader, writer)
}
