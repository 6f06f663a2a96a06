//! Token types for the JSON lexer

use crate::error::Span;

/// JSON token types
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    // Structural
    LeftBrace,    // {
    RightBrace,   // }
    LeftBracket,  // [
    RightBracket, // ]
    Colon,        // :
    Comma,        // ,

    // Literals
    Null,
    True,
    False,

    // Values
    String(String),
    Number(f64),

    // Special
    Eof,
}

impl TokenKind {
    /// Get token name for error messages
    pub const fn name(&self) -> &'static str {
        match self {
            Self::LeftBrace => "'{'",
            Self::RightBrace => "'}'",
            Self::LeftBracket => "'['",
            Self::RightBracket => "']'",
            Self::Colon => "':'",
            Self::Comma => "','",
            Self::Null => "null",
            Self::True => "true",
            Self::False => "false",
            Self::String(_) => "string",
            Self::Number(_) => "number",
            Self::Eof => "end of input",
        }
    }

    /// Check if token can start a value production
    pub const fn is_value(&self) -> bool {
        matches!(
            self,
            Self::Null
                | Self::True
                | Self::False
                | Self::String(_)
                | Self::Number(_)
                | Self::LeftBrace
                | Self::LeftBracket
        )
    }

    /// Check if token is a scalar (non-container) value
    pub const fn is_scalar(&self) -> bool {
        matches!(
            self,
            Self::Null | Self::True | Self::False | Self::String(_) | Self::Number(_)
        )
    }
}

/// Token with source location
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}
