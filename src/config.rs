use crate::error::{ConsolidateError, Result};

/// Lines whose length reaches this many bytes are rejected unless a different
/// limit is configured.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 10_000;

/// Phrase count feature written in log-probability mode.
pub const LOG_PROB_PHRASE_COUNT: &str = "1";
/// Phrase count feature written in linear-probability mode.
pub const LINEAR_PHRASE_COUNT: &str = "2.718";

/// Immutable settings for one consolidation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsolidateConfig {
    /// Direct records carry a fourth field and labelled phrases.
    pub hierarchical: bool,
    /// Scores are log-probabilities.
    pub log_prob: bool,
    /// Exclusive upper bound on line length, in bytes.
    pub max_line_length: usize,
}

impl Default for ConsolidateConfig {
    fn default() -> Self {
        Self::new(false, false)
    }
}

impl ConsolidateConfig {
    pub fn new(hierarchical: bool, log_prob: bool) -> Self {
        Self {
            hierarchical,
            log_prob,
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
        }
    }

    pub fn with_max_line_length(mut self, max_line_length: usize) -> Self {
        self.max_line_length = max_line_length;
        self
    }

    /// Rejects settings that could never accept a line.
    pub fn validate(&self) -> Result<()> {
        if self.max_line_length == 0 {
            return Err(ConsolidateError::Config(
                "maximum line length must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Number of fields every direct record must have.
    pub fn direct_field_count(&self) -> usize {
        if self.hierarchical { 4 } else { 3 }
    }

    /// Number of fields every indirect record must have.
    pub fn indirect_field_count(&self) -> usize {
        3
    }

    /// Constant feature appended to every output line.
    pub fn phrase_count_feature(&self) -> &'static str {
        if self.log_prob {
            LOG_PROB_PHRASE_COUNT
        } else {
            LINEAR_PHRASE_COUNT
        }
    }
}
