use std::fmt;

use crate::fields::{FIELD_DELIMITER, split_fields};

/// One parsed line of a phrase table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    fields: Vec<String>,
}

impl Record {
    /// Parses a line (without its newline) into a record.
    pub fn parse(line: &str) -> Self {
        Self {
            fields: split_fields(line).into_iter().map(str::to_owned).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the field at `index`, or an empty string when absent.
    pub fn field(&self, index: usize) -> &str {
        self.fields.get(index).map(String::as_str).unwrap_or_default()
    }

    /// Field 0.
    pub fn target(&self) -> &str {
        self.field(0)
    }

    /// Field 1.
    pub fn source(&self) -> &str {
        self.field(1)
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}

/// A direct and an indirect record read from the same line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinePair {
    /// 1-based line number shared by both records.
    pub line: usize,
    pub direct: Record,
    pub indirect: Record,
}

/// A hierarchical phrase split into its nonterminal label and its words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabeledPhrase<'a> {
    pub label: &'a str,
    pub content: &'a str,
}

/// A consolidated output line, borrowing from the records it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsolidatedEntry<'a> {
    /// `target ||| source ||| indirect direct feature`
    Phrase {
        target: &'a str,
        source: &'a str,
        indirect_score: &'a str,
        direct_score: &'a str,
        phrase_count: &'a str,
    },
    /// `slabel tlabel ||| source ||| target ||| alignment ||| indirect direct feature`
    Rule {
        source: LabeledPhrase<'a>,
        target: LabeledPhrase<'a>,
        alignment: &'a str,
        indirect_score: &'a str,
        direct_score: &'a str,
        phrase_count: &'a str,
    },
}

impl fmt::Display for ConsolidatedEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsolidatedEntry::Phrase {
                target,
                source,
                indirect_score,
                direct_score,
                phrase_count,
            } => write!(
                f,
                "{target}{FIELD_DELIMITER}{source}{FIELD_DELIMITER}\
                 {indirect_score} {direct_score} {phrase_count}"
            ),
            ConsolidatedEntry::Rule {
                source,
                target,
                alignment,
                indirect_score,
                direct_score,
                phrase_count,
            } => write!(
                f,
                "{} {}{FIELD_DELIMITER}{}{FIELD_DELIMITER}{}{FIELD_DELIMITER}\
                 {alignment}{FIELD_DELIMITER}{indirect_score} {direct_score} {phrase_count}",
                source.label, target.label, source.content, target.content
            ),
        }
    }
}
