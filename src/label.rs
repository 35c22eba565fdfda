//! Label splitting for hierarchical rules, whose phrases look like
//! `"NP the house"`.

use crate::error::{ConsolidateError, PhraseSide, Result};
use crate::model::{LabeledPhrase, Record};

/// Labels and words of both sides of a hierarchical rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleLabels<'a> {
    pub source: LabeledPhrase<'a>,
    pub target: LabeledPhrase<'a>,
}

/// Splits a phrase at its first space into label and content.
pub fn split_label(value: &str, side: PhraseSide, line: usize) -> Result<LabeledPhrase<'_>> {
    value
        .split_once(' ')
        .map(|(label, content)| LabeledPhrase { label, content })
        .ok_or_else(|| ConsolidateError::MissingLabel {
            line,
            side,
            value: value.to_string(),
        })
}

/// Splits both phrase fields of a direct rule record.
pub fn split_rule_labels(direct: &Record, line: usize) -> Result<RuleLabels<'_>> {
    let target = split_label(direct.target(), PhraseSide::Target, line)?;
    let source = split_label(direct.source(), PhraseSide::Source, line)?;
    Ok(RuleLabels { source, target })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_at_first_space_only() {
        let phrase = split_label("NP the big house", PhraseSide::Source, 1).expect("labelled");
        assert_eq!(phrase.label, "NP");
        assert_eq!(phrase.content, "the big house");
    }

    #[test]
    fn trailing_space_gives_empty_content() {
        let phrase = split_label("X ", PhraseSide::Target, 1).expect("labelled");
        assert_eq!(phrase.label, "X");
        assert_eq!(phrase.content, "");
    }

    #[test]
    fn missing_space_reports_line_and_value() {
        let error = split_label("casa", PhraseSide::Target, 7).expect_err("no label");
        assert_eq!(
            error.to_string(),
            "expected target as 'label words' in line 7: 'casa'"
        );
    }

    #[test]
    fn rule_labels_follow_record_columns() {
        let record = Record::parse("X casa ||| NP house ||| 0-0 ||| 0.3");
        let labels = split_rule_labels(&record, 1).expect("labelled");
        assert_eq!(labels.target.label, "X");
        assert_eq!(labels.target.content, "casa");
        assert_eq!(labels.source.label, "NP");
        assert_eq!(labels.source.content, "house");
    }
}
