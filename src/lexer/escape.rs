//! Backslash-escape handling inside string literals
//!
//! Two modes, selected by the `unescape` option: decoding resolves escapes to
//! their characters (combining surrogate pairs) and checks every resulting
//! codepoint against the legal XML ranges; verbatim mode copies the escape
//! text through unchanged, only enforcing that the escape itself is
//! well-formed JSON.

use crate::error::{Error, ErrorKind, Pos, Result};
use crate::lexer::cursor::Cursor;

/// Decode one escape sequence, cursor positioned on the backslash
pub(crate) fn decode_escape(cursor: &mut Cursor<'_>, out: &mut String) -> Result<()> {
    let start = cursor.position();
    cursor.advance();

    let Some(b) = cursor.current() else {
        return Err(Error::at(ErrorKind::InvalidEscapeSequence, start));
    };

    let c = match b {
        b'"' => '"',
        b'\\' => '\\',
        b'/' => '/',
        b'b' => '\u{8}',
        b'f' => '\u{C}',
        b'n' => '\n',
        b'r' => '\r',
        b't' => '\t',
        b'u' => {
            cursor.advance();
            let unit = hex4(cursor, start)?;
            let c = combine_units(cursor, unit, start)?;
            ensure_xml_char(c, start)?;
            out.push(c);
            return Ok(());
        }
        _ => return Err(Error::at(ErrorKind::InvalidEscapeSequence, start)),
    };
    cursor.advance();
    ensure_xml_char(c, start)?;
    out.push(c);
    Ok(())
}

/// Copy one escape sequence verbatim, cursor positioned on the backslash
///
/// The escape grammar is still enforced; only decoding and character-legality
/// validation are skipped.
pub(crate) fn copy_escape(cursor: &mut Cursor<'_>, out: &mut String) -> Result<()> {
    let start = cursor.position();
    cursor.advance();

    match cursor.current() {
        Some(b @ (b'"' | b'\\' | b'/' | b'b' | b'f' | b'n' | b'r' | b't')) => {
            out.push('\\');
            out.push(char::from(b));
            cursor.advance();
            Ok(())
        }
        Some(b'u') => {
            out.push('\\');
            out.push('u');
            cursor.advance();
            for _ in 0..4 {
                match cursor.current() {
                    Some(b) if b.is_ascii_hexdigit() => {
                        out.push(char::from(b));
                        cursor.advance();
                    }
                    _ => return Err(Error::at(ErrorKind::InvalidUnicodeEscape, start)),
                }
            }
            Ok(())
        }
        _ => Err(Error::at(ErrorKind::InvalidEscapeSequence, start)),
    }
}

/// Check a codepoint against the legal XML character ranges
pub(crate) fn ensure_xml_char(c: char, pos: Pos) -> Result<()> {
    let cp = u32::from(c);
    match cp {
        0x9 | 0xA | 0xD | 0x20..=0xD7FF | 0xE000..=0xFFFD | 0x1_0000..=0x10_FFFF => Ok(()),
        _ => Err(Error::at(ErrorKind::IllegalCharacter { codepoint: cp }, pos)),
    }
}

/// Read exactly four hexadecimal digits as one UTF-16 code unit
fn hex4(cursor: &mut Cursor<'_>, start: Pos) -> Result<u32> {
    let mut code: u32 = 0;
    for _ in 0..4 {
        let digit = match cursor.current() {
            Some(b @ b'0'..=b'9') => u32::from(b - b'0'),
            Some(b @ b'a'..=b'f') => u32::from(b - b'a') + 10,
            Some(b @ b'A'..=b'F') => u32::from(b - b'A') + 10,
            _ => return Err(Error::at(ErrorKind::InvalidUnicodeEscape, start)),
        };
        code = code * 16 + digit;
        cursor.advance();
    }
    Ok(code)
}

/// Resolve one code unit to a character, consuming the low half of a
/// surrogate pair when needed
fn combine_units(cursor: &mut Cursor<'_>, unit: u32, start: Pos) -> Result<char> {
    if (0xD800..=0xDBFF).contains(&unit) {
        // High surrogate: the low half must follow immediately as another
        // unicode escape.
        if cursor.current() != Some(b'\\') || cursor.peek(1) != Some(b'u') {
            return Err(Error::at(ErrorKind::UnpairedSurrogate, start));
        }
        cursor.advance_by(2);
        let low = hex4(cursor, start)?;
        if !(0xDC00..=0xDFFF).contains(&low) {
            return Err(Error::at(ErrorKind::UnpairedSurrogate, start));
        }
        let cp = 0x1_0000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
        return char::from_u32(cp).ok_or_else(|| Error::at(ErrorKind::UnpairedSurrogate, start));
    }
    if (0xDC00..=0xDFFF).contains(&unit) {
        return Err(Error::at(ErrorKind::UnpairedSurrogate, start));
    }
    char::from_u32(unit).ok_or_else(|| Error::at(ErrorKind::InvalidUnicodeEscape, start))
}
