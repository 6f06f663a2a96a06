//! Per-call parser configuration

use crate::error::{Error, ErrorKind, Pos, Result};
use crate::value::{Object, Value};

/// Grammar variant governing what may appear at the top level
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum JsonSpec {
    /// Any value production is accepted at the top level
    #[default]
    Ecma262,
    /// Only an object or array is accepted at the top level
    Rfc4627,
}

impl JsonSpec {
    /// Resolve a variant from its option-string name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ECMA-262" => Some(Self::Ecma262),
            "RFC4627" => Some(Self::Rfc4627),
            _ => None,
        }
    }

    /// Option-string name of this variant
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Ecma262 => "ECMA-262",
            Self::Rfc4627 => "RFC4627",
        }
    }
}

/// Configuration for one parse call
///
/// Resolved once before parsing begins and immutable afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Options {
    /// Top-level grammar variant
    pub spec: JsonSpec,
    /// Decode escapes and validate character legality, or pass escape text
    /// through literally
    pub unescape: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            spec: JsonSpec::Ecma262,
            unescape: true,
        }
    }
}

impl Options {
    pub const fn new(spec: JsonSpec, unescape: bool) -> Self {
        Self { spec, unescape }
    }

    pub const fn with_spec(mut self, spec: JsonSpec) -> Self {
        self.spec = spec;
        self
    }

    pub const fn with_unescape(mut self, unescape: bool) -> Self {
        self.unescape = unescape;
        self
    }

    /// Resolve options from a loosely typed options value
    ///
    /// The value must be a map; anything else is a type error.
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Object(map) => Self::from_object(map),
            other => Err(type_error("options", other.type_name())),
        }
    }

    /// Resolve options from an options map
    ///
    /// Unrecognized entries are ignored. A recognized entry with the wrong
    /// shape is a type error, raised before any parsing happens.
    pub fn from_object(map: &Object) -> Result<Self> {
        let mut options = Self::default();
        for (key, value) in map.iter() {
            match key.as_str() {
                "spec" => {
                    let name = value
                        .as_string()
                        .ok_or_else(|| type_error("spec", value.type_name()))?;
                    options.spec = JsonSpec::from_name(name)
                        .ok_or_else(|| type_error("spec", name))?;
                }
                "unescape" => {
                    options.unescape = value
                        .as_bool()
                        .ok_or_else(|| type_error("unescape", value.type_name()))?;
                }
                _ => {}
            }
        }
        Ok(options)
    }
}

fn type_error(option: &str, found: &str) -> Error {
    Error::at(
        ErrorKind::InvalidOptions {
            option: option.to_string(),
            found: found.to_string(),
        },
        Pos::default(),
    )
}
