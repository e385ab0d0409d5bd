//! Codec error types.

/// Error parsing a navigation data file.
///
/// Location-carrying variants report 1-based line and column numbers.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("line {line}, column {column}: unexpected character {found:?}")]
    UnexpectedChar {
        found: char,
        line: usize,
        column: usize,
    },

    #[error("line {line}, column {column}: unterminated string literal")]
    UnterminatedString { line: usize, column: usize },

    #[error("line {line}, column {column}: unterminated block comment")]
    UnterminatedComment { line: usize, column: usize },

    #[error("line {line}, column {column}: invalid escape sequence \\{escape}")]
    InvalidEscape {
        escape: String,
        line: usize,
        column: usize,
    },

    #[error("line {line}, column {column}: expected {expected}, found {found}")]
    Unexpected {
        expected: &'static str,
        found: String,
        line: usize,
        column: usize,
    },

    #[error("input defines no NAVTREE variable")]
    MissingTree,
}
