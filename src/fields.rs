//! Splitting of table lines into `" ||| "`-delimited fields.

/// Separator between the fields of a phrase table line.
pub const FIELD_DELIMITER: &str = " ||| ";

/// Splits a line into its fields.
///
/// Scanning resumes on the trailing space of each delimiter, so in
/// `"a ||| ||| b"` the two delimiters share a space and enclose an empty
/// field. Empty fields are kept: the result always holds one more field than
/// delimiters found.
pub fn split_fields(line: &str) -> Vec<&str> {
    let mut fields = Vec::new();
    let mut start = 0;
    let mut cursor = 0;

    while let Some(offset) = line[cursor..].find(FIELD_DELIMITER) {
        let at = cursor + offset;
        fields.push(&line[start.min(at)..at]);
        start = at + FIELD_DELIMITER.len();
        cursor = start - 1;
    }

    fields.push(&line[start.min(line.len())..]);
    fields
}

/// Joins fields back into a single line.
pub fn join_fields<S: AsRef<str>>(fields: &[S]) -> String {
    fields
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(FIELD_DELIMITER)
}
