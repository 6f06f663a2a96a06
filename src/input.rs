//! Input abstraction for different sources

use crate::error::{Error, ErrorKind, Pos, Result};

/// Input source abstraction
///
/// The parser works on a fully materialized text value, so the source is held
/// as a validated `&str`; byte sources are checked for UTF-8 up front.
#[derive(Clone, Debug)]
pub struct Input<'a> {
    source: &'a str,
    filename: Option<&'a str>,
}

impl<'a> Input<'a> {
    /// Create from string
    pub const fn from_str(source: &'a str) -> Self {
        Self {
            source,
            filename: None,
        }
    }

    /// Create from byte slice, validating UTF-8
    pub fn from_bytes(source: &'a [u8]) -> Result<Self> {
        let source = std::str::from_utf8(source).map_err(|e| {
            Error::with_message(
                ErrorKind::InvalidToken,
                crate::error::Span::new(
                    Pos::new(e.valid_up_to(), 0, 0),
                    Pos::new(e.valid_up_to(), 0, 0),
                ),
                "input is not valid UTF-8",
            )
        })?;
        Ok(Self {
            source,
            filename: None,
        })
    }

    /// Set filename for error reporting
    pub const fn with_filename(mut self, filename: &'a str) -> Self {
        self.filename = Some(filename);
        self
    }

    /// Get source text
    pub const fn as_str(&self) -> &str {
        self.source
    }

    /// Get source bytes
    pub const fn as_bytes(&self) -> &[u8] {
        self.source.as_bytes()
    }

    /// Get filename if set
    pub const fn filename(&self) -> Option<&str> {
        self.filename
    }

    /// Get length in bytes
    pub const fn len(&self) -> usize {
        self.source.len()
    }

    /// Check if empty
    pub const fn is_empty(&self) -> bool {
        self.source.is_empty()
    }
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(s: &'a str) -> Self {
        Self::from_str(s)
    }
}
