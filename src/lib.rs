//! xdmjson - JSON parser producing XDM-style ordered maps and 1-based arrays
//!
//! Parses a JSON text into a value model in which objects are ordered
//! string-keyed maps, arrays are 1-based integer-keyed sequences, numbers are
//! doubles, and `null` becomes an absence marker. Escape decoding and the
//! top-level grammar variant are controlled per call through [`Options`].
//!
//! # Quick Start
//!
//! ```
//! use xdmjson::from_str;
//! # fn main() -> Result<(), xdmjson::Error> {
//! let value = from_str(r#"{"name": "John", "age": 30}"#)?;
//! let name = value
//!     .as_object()
//!     .and_then(|obj| obj.get("name"))
//!     .and_then(|v| v.as_string())
//!     .unwrap_or_default();
//! assert_eq!(name, "John");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub use error::{Error, ErrorKind, Pos, Result, Span};

pub mod input;
pub use input::Input;

pub mod lexer;
pub use lexer::{Cursor, JsonLexer, Token, TokenKind};

pub mod value;
pub use value::{Array, Object, Value};

pub mod json;
pub use json::{Event, JsonSpec, Options, Parser};

/// Parse JSON from string with default options
pub fn from_str(s: &str) -> Result<Value> {
    let input = Input::from_str(s);
    let mut parser = Parser::new(input.as_bytes());
    parser.parse_value()
}

/// Parse JSON from string with explicit options
pub fn from_str_with_options(s: &str, options: Options) -> Result<Value> {
    let input = Input::from_str(s);
    let mut parser = Parser::with_options(input.as_bytes(), options);
    parser.parse_value()
}

/// Parse JSON from bytes, validating UTF-8 first
pub fn from_bytes(bytes: &[u8]) -> Result<Value> {
    let input = Input::from_bytes(bytes)?;
    let mut parser = Parser::new(input.as_bytes());
    parser.parse_value()
}

/// Parse JSON from bytes with explicit options
pub fn from_bytes_with_options(bytes: &[u8], options: Options) -> Result<Value> {
    let input = Input::from_bytes(bytes)?;
    let mut parser = Parser::with_options(input.as_bytes(), options);
    parser.parse_value()
}
