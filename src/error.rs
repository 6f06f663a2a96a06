//! Error types for xdmjson

use std::fmt;
use thiserror::Error;

/// Position in source text
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pos {
    pub offset: usize,
    pub line: u32,
    pub col: u32,
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.offset, self.line, self.col)
    }
}

impl Pos {
    pub const fn new(offset: usize, line: u32, col: u32) -> Self {
        Self { offset, line, col }
    }
}

/// Span representing a range in source text
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    pub start: Pos,
    pub end: Pos,
}

impl Span {
    pub const fn new(start: Pos, end: Pos) -> Self {
        Self { start, end }
    }

    pub const fn empty() -> Self {
        Self {
            start: Pos::new(0, 0, 0),
            end: Pos::new(0, 0, 0),
        }
    }
}

/// Error kind for detailed categorization
///
/// Every kind except [`ErrorKind::InvalidOptions`] is a syntax error: callers
/// that only care about the two-way split should use
/// [`Error::is_syntax_error`] and [`Error::is_type_error`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidToken,
    UnterminatedString,
    InvalidEscapeSequence,
    InvalidUnicodeEscape,
    UnpairedSurrogate,
    IllegalCharacter { codepoint: u32 },
    InvalidNumber,
    Expected { expected: String, found: String },
    TrailingContent,
    InvalidOptions { option: String, found: String },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidToken => write!(f, "invalid token"),
            Self::UnterminatedString => write!(f, "unterminated string"),
            Self::InvalidEscapeSequence => write!(f, "invalid escape sequence"),
            Self::InvalidUnicodeEscape => write!(f, "invalid unicode escape"),
            Self::UnpairedSurrogate => write!(f, "unpaired surrogate in unicode escape"),
            Self::IllegalCharacter { codepoint } => {
                write!(f, "character U+{codepoint:04X} is not a legal XML character")
            }
            Self::InvalidNumber => write!(f, "invalid number"),
            Self::Expected { expected, found } => {
                write!(f, "expected {expected}, found {found}")
            }
            Self::TrailingContent => write!(f, "unexpected content after top-level value"),
            Self::InvalidOptions { option, found } => {
                write!(f, "invalid value for option '{option}': {found}")
            }
        }
    }
}

/// Main error type for xdmjson
#[derive(Error, Clone, Debug, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    span: Span,
    message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, span: Span) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            span,
            message,
        }
    }

    pub fn with_message(kind: ErrorKind, span: Span, message: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Create error at specific position
    pub fn at(kind: ErrorKind, pos: Pos) -> Self {
        Self::new(kind, Span::new(pos, pos))
    }

    /// True for every lexical, grammar, escape, or character-legality failure
    pub fn is_syntax_error(&self) -> bool {
        !self.is_type_error()
    }

    /// True when the options argument had the wrong shape
    pub fn is_type_error(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidOptions { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error at {}: {}", self.span.start, self.message)
    }
}

/// Result type alias for xdmjson
pub type Result<T> = std::result::Result<T, Error>;
