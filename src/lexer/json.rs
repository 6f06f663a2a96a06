//! JSON-specific lexer

use crate::error::{Error, ErrorKind, Pos, Result, Span};
use crate::lexer::cursor::Cursor;
use crate::lexer::escape;
use crate::lexer::token::{Token, TokenKind};

/// JSON lexer that tokenizes JSON input
///
/// String literals are decoded (or copied verbatim, when `unescape` is off)
/// as they are lexed, so a returned string token already carries its final
/// character content.
#[derive(Clone, Debug)]
pub struct JsonLexer<'a> {
    cursor: Cursor<'a>,
    unescape: bool,
}

impl<'a> JsonLexer<'a> {
    /// Create a new JSON lexer from input bytes
    pub const fn new(input: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(input),
            unescape: true,
        }
    }

    /// Create a new JSON lexer with explicit escape handling
    pub const fn with_unescape(input: &'a [u8], unescape: bool) -> Self {
        Self {
            cursor: Cursor::new(input),
            unescape,
        }
    }

    /// Current cursor position
    pub const fn position(&self) -> Pos {
        self.cursor.position()
    }

    /// Get the next token from the input
    pub fn next_token(&mut self) -> Result<Token> {
        self.cursor.skip_whitespace();

        let start = self.cursor.position();

        let kind = match self.cursor.current() {
            None => TokenKind::Eof,
            Some(b) => match b {
                b'{' => {
                    self.cursor.advance();
                    TokenKind::LeftBrace
                }
                b'}' => {
                    self.cursor.advance();
                    TokenKind::RightBrace
                }
                b'[' => {
                    self.cursor.advance();
                    TokenKind::LeftBracket
                }
                b']' => {
                    self.cursor.advance();
                    TokenKind::RightBracket
                }
                b':' => {
                    self.cursor.advance();
                    TokenKind::Colon
                }
                b',' => {
                    self.cursor.advance();
                    TokenKind::Comma
                }
                b'"' => self.lex_string()?,
                b'n' => self.lex_keyword(b"null", TokenKind::Null)?,
                b't' => self.lex_keyword(b"true", TokenKind::True)?,
                b'f' => self.lex_keyword(b"false", TokenKind::False)?,
                b'-' | b'0'..=b'9' => self.lex_number()?,
                _ => {
                    return Err(Error::at(ErrorKind::InvalidToken, start));
                }
            },
        };

        let end = self.cursor.position();
        Ok(Token::new(kind, Span::new(start, end)))
    }

    /// Lex a string literal
    fn lex_string(&mut self) -> Result<TokenKind> {
        // Consume opening quote
        self.cursor.advance();

        let mut result = String::new();

        loop {
            match self.cursor.current() {
                None => {
                    return Err(Error::at(
                        ErrorKind::UnterminatedString,
                        self.cursor.position(),
                    ));
                }
                Some(b'"') => {
                    self.cursor.advance();
                    break;
                }
                Some(b'\\') => {
                    if self.unescape {
                        escape::decode_escape(&mut self.cursor, &mut result)?;
                    } else {
                        escape::copy_escape(&mut self.cursor, &mut result)?;
                    }
                }
                // Raw control characters are never allowed inside a literal.
                Some(b) if b < 0x20 => {
                    return Err(Error::at(
                        ErrorKind::IllegalCharacter {
                            codepoint: u32::from(b),
                        },
                        self.cursor.position(),
                    ));
                }
                Some(_) => {
                    let Some(c) = self.cursor.current_char() else {
                        return Err(Error::at(ErrorKind::InvalidToken, self.cursor.position()));
                    };
                    if self.unescape {
                        escape::ensure_xml_char(c, self.cursor.position())?;
                    }
                    result.push(c);
                    self.cursor.advance_char(c);
                }
            }
        }

        Ok(TokenKind::String(result))
    }

    /// Lex one of the keyword literals as an exact match
    fn lex_keyword(&mut self, word: &'static [u8], kind: TokenKind) -> Result<TokenKind> {
        let pos = self.cursor.position();
        if self.cursor.peek_bytes(word.len()) != Some(word) {
            return Err(Error::at(ErrorKind::InvalidToken, pos));
        }
        // `truefoo` and `falsehood` are single bad tokens, not keyword plus
        // trailing garbage.
        if let Some(next) = self.cursor.peek(word.len()) {
            if next.is_ascii_alphanumeric() || next == b'_' {
                return Err(Error::at(ErrorKind::InvalidToken, pos));
            }
        }
        self.cursor.advance_by(word.len());
        Ok(kind)
    }

    /// Lex a number literal
    fn lex_number(&mut self) -> Result<TokenKind> {
        let start = self.cursor.pos();
        let start_pos = self.cursor.position();

        // Optional minus sign
        if self.cursor.current() == Some(b'-') {
            self.cursor.advance();
        }

        // Integer part; a leading zero must stand alone
        match self.cursor.current() {
            Some(b'0') => {
                self.cursor.advance();
                if matches!(self.cursor.current(), Some(b'0'..=b'9')) {
                    return Err(Error::at(ErrorKind::InvalidNumber, start_pos));
                }
            }
            Some(b'1'..=b'9') => {
                self.cursor.advance();
                while let Some(b'0'..=b'9') = self.cursor.current() {
                    self.cursor.advance();
                }
            }
            _ => {
                return Err(Error::at(ErrorKind::InvalidNumber, self.cursor.position()));
            }
        }

        // Optional fraction part
        if self.cursor.current() == Some(b'.') {
            self.cursor.advance();
            if !matches!(self.cursor.current(), Some(b'0'..=b'9')) {
                return Err(Error::at(ErrorKind::InvalidNumber, self.cursor.position()));
            }
            while let Some(b'0'..=b'9') = self.cursor.current() {
                self.cursor.advance();
            }
        }

        // Optional exponent part
        if matches!(self.cursor.current(), Some(b'e') | Some(b'E')) {
            self.cursor.advance();
            if matches!(self.cursor.current(), Some(b'+') | Some(b'-')) {
                self.cursor.advance();
            }
            if !matches!(self.cursor.current(), Some(b'0'..=b'9')) {
                return Err(Error::at(ErrorKind::InvalidNumber, self.cursor.position()));
            }
            while let Some(b'0'..=b'9') = self.cursor.current() {
                self.cursor.advance();
            }
        }

        let num_str = std::str::from_utf8(self.cursor.slice_from(start))
            .map_err(|_| Error::at(ErrorKind::InvalidNumber, self.cursor.position()))?;

        let num = num_str
            .parse::<f64>()
            .map_err(|_| Error::at(ErrorKind::InvalidNumber, self.cursor.position()))?;

        Ok(TokenKind::Number(num))
    }
}

impl<'a> Iterator for JsonLexer<'a> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(token) => {
                if token.kind == TokenKind::Eof {
                    None
                } else {
                    Some(Ok(token))
                }
            }
            Err(e) => Some(Err(e)),
        }
    }
}
