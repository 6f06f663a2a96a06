//! Construction-plan events emitted by the grammar parser

use crate::value::Value;

/// Events describing the value under construction
///
/// The event stream is the intermediate form between the grammar and the
/// finished value: containers open and close in source order, keys always
/// immediately precede the value they label.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Start of a JSON object
    ObjectStart,
    /// End of a JSON object
    ObjectEnd,
    /// Start of a JSON array
    ArrayStart,
    /// End of a JSON array
    ArrayEnd,
    /// Object member key (always followed by the member's value)
    Key(String),
    /// Scalar value, or `Value::Null` for the absence marker
    Value(Value),
}
