use thiserror::Error;

/// Fatal conditions raised while validating arguments or parsing the table.
///
/// Every variant aborts the whole run; there is no partial-success mode.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A required numeric field failed to parse.
    #[error("line {line}, field {field}: malformed value `{text}`")]
    MalformedField {
        /// 1-based input line number, counting the header row.
        line: u64,
        /// 0-based field index within the record.
        field: usize,
        /// The offending field text, after quote stripping.
        text: String,
    },
    /// The project prefix contains a character that can't appear in a
    /// generated symbol.
    #[error("project prefix `{0}` contains a non-printable character")]
    InvalidPrefix(String),
}
