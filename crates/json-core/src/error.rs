//! Error types for JSON parsing.

use thiserror::Error;

/// The grammar rule that failed. Every variant is a terminal syntax error;
/// there is no recoverable class.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Nothing but whitespace was supplied.
    #[error("empty input")]
    EmptyInput,

    /// Input ended inside an object, array, string or literal.
    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("invalid boolean literal")]
    InvalidBoolean,

    #[error("invalid null literal")]
    InvalidNull,

    #[error("numbers cannot have leading zeroes")]
    LeadingZero,

    /// Empty digit run, or a span that does not match the JSON number grammar.
    #[error("invalid number")]
    InvalidNumber,

    /// The literal is well-formed but its magnitude does not fit in an `f64`.
    #[error("number out of range")]
    NumberOutOfRange,

    #[error("unterminated string")]
    UnterminatedString,

    /// Unknown escape character, or a `\u` escape without four hex digits.
    #[error("invalid escape sequence")]
    InvalidEscape,

    /// A `\u` escape names half of a surrogate pair without its partner.
    #[error("invalid unicode surrogate")]
    InvalidSurrogate,

    /// A raw U+0000..=U+001F character inside a string literal.
    #[error("unescaped control character U+{:04X} in string", code_point(.0))]
    ControlCharacter(char),

    #[error("expected string key")]
    ExpectedKey,

    #[error("expected ':' after object key")]
    ExpectedColon,

    #[error("expected ',' or '}}'")]
    ExpectedCommaOrBrace,

    #[error("expected ',' or ']'")]
    ExpectedCommaOrBracket,

    #[error("trailing comma before closing bracket")]
    TrailingComma,

    /// Non-whitespace content after a complete top-level value.
    #[error("trailing characters")]
    TrailingCharacters,

    #[error("nesting exceeds maximum depth of {limit}")]
    NestingTooDeep { limit: usize },
}

fn code_point(c: &char) -> u32 {
    u32::from(*c)
}

/// A syntax error with the position where the failing rule stopped.
///
/// `offset` is a byte index into the input. `line` and `column` are 1-based;
/// the column counts characters, not bytes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at line {line}, column {column}")]
pub struct ParseError {
    pub kind: ErrorKind,
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl ParseError {
    /// Build an error for `kind` at byte `offset` of `input`, resolving the
    /// line and column eagerly so the error never outlives the input.
    pub(crate) fn at(input: &str, offset: usize, kind: ErrorKind) -> Self {
        let mut offset = offset.min(input.len());
        while !input.is_char_boundary(offset) {
            offset -= 1;
        }
        let before = &input[..offset];
        let line = before.matches('\n').count() + 1;
        let column = before
            .rsplit('\n')
            .next()
            .map_or(0, |tail| tail.chars().count())
            + 1;
        Self {
            kind,
            offset,
            line,
            column,
        }
    }
}

/// Convenience alias used throughout json-core.
pub type Result<T> = std::result::Result<T, ParseError>;
