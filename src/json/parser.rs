//! JSON grammar parser
//!
//! A pull parser over [`JsonLexer`]: `next_event` checks the grammar and
//! emits the construction plan, `parse_value` folds that plan into a
//! [`Value`]. Container nesting lives on an explicit frame stack, so input
//! depth is bounded by the heap rather than the native call stack.

use crate::error::{Error, ErrorKind, Result};
use crate::json::event::Event;
use crate::json::options::{JsonSpec, Options};
use crate::lexer::json::JsonLexer;
use crate::lexer::{Token, TokenKind};
use crate::value::{Array, Object, Value};

/// Progress inside an object frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ObjectState {
    /// After `{`: a key or `}`
    KeyOrEnd,
    /// After a comma: a key only
    Key,
    /// After a key: `:`
    Colon,
    /// After `:`: a value
    Value,
    /// After a member value: `,` or `}`
    CommaOrEnd,
}

/// Progress inside an array frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ArrayState {
    /// After `[`: a value or `]`
    ValueOrEnd,
    /// After a comma: a value only
    Value,
    /// After an element: `,` or `]`
    CommaOrEnd,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Frame {
    Object(ObjectState),
    Array(ArrayState),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RootState {
    /// The top-level value has not started yet
    Start,
    /// The top-level value is complete; only whitespace may remain
    Done,
}

/// Pull-based JSON parser
#[derive(Debug)]
pub struct Parser<'a> {
    lexer: JsonLexer<'a>,
    options: Options,
    frames: Vec<Frame>,
    root: RootState,
}

impl<'a> Parser<'a> {
    /// Create a new parser with default options
    pub fn new(input: &'a [u8]) -> Self {
        Self::with_options(input, Options::default())
    }

    /// Create a new parser with explicit options
    pub fn with_options(input: &'a [u8], options: Options) -> Self {
        Self {
            lexer: JsonLexer::with_unescape(input, options.unescape),
            options,
            frames: Vec::new(),
            root: RootState::Start,
        }
    }

    /// Options this parser was created with
    pub const fn options(&self) -> Options {
        self.options
    }

    /// Get the next event, or `None` once the input is fully consumed
    ///
    /// The first grammar violation aborts the parse; there is no recovery.
    pub fn next_event(&mut self) -> Result<Option<Event>> {
        loop {
            let token = self.lexer.next_token()?;

            let Some(frame) = self.frames.last().copied() else {
                match self.root {
                    RootState::Start => {
                        if self.options.spec == JsonSpec::Rfc4627
                            && !matches!(
                                token.kind,
                                TokenKind::LeftBrace | TokenKind::LeftBracket
                            )
                        {
                            return Err(self.expected_error("'{' or '['", &token));
                        }
                        self.root = RootState::Done;
                        return self.begin_value(token);
                    }
                    RootState::Done => {
                        return if token.kind == TokenKind::Eof {
                            Ok(None)
                        } else {
                            Err(Error::at(ErrorKind::TrailingContent, token.span.start))
                        };
                    }
                }
            };

            match frame {
                Frame::Object(state) => match state {
                    ObjectState::KeyOrEnd => match token.kind {
                        TokenKind::RightBrace => return self.end_container(Event::ObjectEnd),
                        TokenKind::String(key) => {
                            self.set_frame(Frame::Object(ObjectState::Colon));
                            return Ok(Some(Event::Key(key)));
                        }
                        _ => return Err(self.expected_error("string key or '}'", &token)),
                    },
                    ObjectState::Key => match token.kind {
                        TokenKind::String(key) => {
                            self.set_frame(Frame::Object(ObjectState::Colon));
                            return Ok(Some(Event::Key(key)));
                        }
                        _ => return Err(self.expected_error("string key", &token)),
                    },
                    ObjectState::Colon => match token.kind {
                        TokenKind::Colon => {
                            self.set_frame(Frame::Object(ObjectState::Value));
                        }
                        _ => return Err(self.expected_error("':'", &token)),
                    },
                    ObjectState::Value => {
                        self.set_frame(Frame::Object(ObjectState::CommaOrEnd));
                        return self.begin_value(token);
                    }
                    ObjectState::CommaOrEnd => match token.kind {
                        TokenKind::Comma => {
                            self.set_frame(Frame::Object(ObjectState::Key));
                        }
                        TokenKind::RightBrace => return self.end_container(Event::ObjectEnd),
                        _ => return Err(self.expected_error("',' or '}'", &token)),
                    },
                },
                Frame::Array(state) => match state {
                    ArrayState::ValueOrEnd => match token.kind {
                        TokenKind::RightBracket => return self.end_container(Event::ArrayEnd),
                        _ => {
                            self.set_frame(Frame::Array(ArrayState::CommaOrEnd));
                            return self.begin_value(token);
                        }
                    },
                    ArrayState::Value => {
                        // A `]` here is a trailing comma.
                        self.set_frame(Frame::Array(ArrayState::CommaOrEnd));
                        return self.begin_value(token);
                    }
                    ArrayState::CommaOrEnd => match token.kind {
                        TokenKind::Comma => {
                            self.set_frame(Frame::Array(ArrayState::Value));
                        }
                        TokenKind::RightBracket => return self.end_container(Event::ArrayEnd),
                        _ => return Err(self.expected_error("',' or ']'", &token)),
                    },
                },
            }
        }
    }

    /// Parse the complete input into a [`Value`]
    ///
    /// Consumes events to the end of input, so trailing content after the
    /// top-level value is always detected.
    pub fn parse_value(&mut self) -> Result<Value> {
        let mut objects: Vec<Object> = Vec::new();
        let mut arrays: Vec<Array> = Vec::new();
        // Key context saved per container; `None` for array elements and the
        // top-level value.
        let mut keys: Vec<Option<String>> = Vec::new();
        let mut pending_key: Option<String> = None;

        while let Some(event) = self.next_event()? {
            let completed = match event {
                Event::ObjectStart => {
                    keys.push(pending_key.take());
                    objects.push(Object::new());
                    continue;
                }
                Event::ArrayStart => {
                    keys.push(pending_key.take());
                    arrays.push(Array::new());
                    continue;
                }
                Event::Key(key) => {
                    pending_key = Some(key);
                    continue;
                }
                Event::ObjectEnd => {
                    let object = objects
                        .pop()
                        .ok_or_else(|| self.stream_error("unmatched object end"))?;
                    self.attach(
                        Value::Object(object),
                        keys.pop().flatten(),
                        &mut objects,
                        &mut arrays,
                    )?
                }
                Event::ArrayEnd => {
                    let array = arrays
                        .pop()
                        .ok_or_else(|| self.stream_error("unmatched array end"))?;
                    self.attach(
                        Value::Array(array),
                        keys.pop().flatten(),
                        &mut objects,
                        &mut arrays,
                    )?
                }
                Event::Value(value) => {
                    self.attach(value, pending_key.take(), &mut objects, &mut arrays)?
                }
            };

            if let Some(root) = completed {
                return self.finish(root);
            }
        }

        Err(self.stream_error("input ended before a value was complete"))
    }

    // Helper methods

    /// Emit the event opening or carrying one value production
    fn begin_value(&mut self, token: Token) -> Result<Option<Event>> {
        match token.kind {
            TokenKind::LeftBrace => {
                self.frames.push(Frame::Object(ObjectState::KeyOrEnd));
                Ok(Some(Event::ObjectStart))
            }
            TokenKind::LeftBracket => {
                self.frames.push(Frame::Array(ArrayState::ValueOrEnd));
                Ok(Some(Event::ArrayStart))
            }
            TokenKind::Null => Ok(Some(Event::Value(Value::Null))),
            TokenKind::True => Ok(Some(Event::Value(Value::Bool(true)))),
            TokenKind::False => Ok(Some(Event::Value(Value::Bool(false)))),
            TokenKind::String(s) => Ok(Some(Event::Value(Value::String(s)))),
            TokenKind::Number(n) => Ok(Some(Event::Value(Value::Number(n)))),
            _ => Err(self.expected_error("value", &token)),
        }
    }

    fn end_container(&mut self, event: Event) -> Result<Option<Event>> {
        self.frames.pop();
        Ok(Some(event))
    }

    fn set_frame(&mut self, frame: Frame) {
        if let Some(slot) = self.frames.last_mut() {
            *slot = frame;
        }
    }

    /// Place a finished value in its parent, or return it as the root
    fn attach(
        &self,
        value: Value,
        key: Option<String>,
        objects: &mut Vec<Object>,
        arrays: &mut Vec<Array>,
    ) -> Result<Option<Value>> {
        if let Some(key) = key {
            // A keyed value always belongs to the innermost open object:
            // arrays never produce keys.
            let object = objects
                .last_mut()
                .ok_or_else(|| self.stream_error("key outside of an object"))?;
            object.insert(key, value);
            Ok(None)
        } else if let Some(array) = arrays.last_mut() {
            array.push(value);
            Ok(None)
        } else {
            Ok(Some(value))
        }
    }

    /// Require end of input after the root value
    fn finish(&mut self, value: Value) -> Result<Value> {
        match self.next_event()? {
            None => Ok(value),
            Some(_) => Err(Error::at(
                ErrorKind::TrailingContent,
                self.lexer.position(),
            )),
        }
    }

    fn stream_error(&self, message: &str) -> Error {
        Error::with_message(
            ErrorKind::InvalidToken,
            crate::error::Span::new(self.lexer.position(), self.lexer.position()),
            message.to_string(),
        )
    }

    fn expected_error(&self, expected: &str, token: &Token) -> Error {
        Error::new(
            ErrorKind::Expected {
                expected: expected.to_string(),
                found: token.kind.name().to_string(),
            },
            token.span,
        )
    }
}
