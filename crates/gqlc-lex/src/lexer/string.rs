//! String literal scanning.
//!
//! Grammar:
//!
//! ```text
//! "([^"\\\u000A\u000D]|\\(u[0-9a-fA-F]{4}|["\\/bfnrt]))*"
//! ```
//!
//! The token value is the decoded content without the surrounding quotes,
//! while the token span covers both quote runes. Decoding is lazy: as long
//! as no escape sequence has been seen, the value stays a borrowed slice of
//! the source; the first escape copies the accumulated prefix into an owned
//! buffer and decoding continues there.

use std::borrow::Cow;

use crate::error::{LexError, LexErrorKind};
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    pub(crate) fn read_string(&mut self) -> Result<Token<'a>, LexError> {
        let input = self.cursor.input();
        let input_len = input.len();

        // created on the first escape sequence only
        let mut buf: Option<String> = None;

        // the opening quote is part of the span but not the value
        self.start += 1;
        self.start_runes += 1;

        while let Some(b) = self.cursor.first() {
            if b == b'\n' || b == b'\r' {
                break;
            }
            if b < 0x20 && b != b'\t' {
                return Err(self.make_error(LexErrorKind::InvalidCharacterInString(b)));
            }

            match b {
                b'"' => {
                    let mut token = self.make_token(TokenKind::String);
                    // cover the quotes in the span without including them
                    // in the value
                    token.span.start -= 1;
                    token.span.end += 1;

                    if let Some(decoded) = buf {
                        token.value = Cow::Owned(decoded);
                    }

                    self.cursor.bump(1);

                    return Ok(token);
                }

                b'\\' => {
                    if self.cursor.byte_pos() + 1 >= input_len {
                        self.cursor.bump(1);
                        return Err(self.make_error(LexErrorKind::TruncatedEscape));
                    }

                    let decoded = buf
                        .get_or_insert_with(|| input[self.start..self.cursor.byte_pos()].to_string());

                    let escape = input.as_bytes()[self.cursor.byte_pos() + 1];

                    if escape == b'u' {
                        if self.cursor.byte_pos() + 6 >= input_len {
                            self.cursor.bump(1);
                            let rest = &input.as_bytes()[self.cursor.byte_pos()..];
                            let excerpt = String::from_utf8_lossy(rest).into_owned();
                            return Err(self.make_error(LexErrorKind::InvalidEscape(excerpt)));
                        }

                        let hex_start = self.cursor.byte_pos() + 2;
                        match unhex(&input.as_bytes()[hex_start..hex_start + 4]) {
                            Some(ch) => {
                                decoded.push(ch);
                                self.cursor.bump(6);
                            }
                            None => {
                                self.cursor.bump(1);
                                let pos = self.cursor.byte_pos();
                                let excerpt =
                                    String::from_utf8_lossy(&input.as_bytes()[pos..pos + 5])
                                        .into_owned();
                                return Err(self.make_error(LexErrorKind::InvalidEscape(excerpt)));
                            }
                        }
                    } else {
                        match escape {
                            b'"' | b'/' | b'\\' => decoded.push(char::from(escape)),
                            b'b' => decoded.push('\u{0008}'),
                            b'f' => decoded.push('\u{000c}'),
                            b'n' => decoded.push('\n'),
                            b'r' => decoded.push('\r'),
                            b't' => decoded.push('\t'),
                            _ => {
                                self.cursor.bump(1);
                                let excerpt = char::from(escape).to_string();
                                return Err(self.make_error(LexErrorKind::InvalidEscape(excerpt)));
                            }
                        }
                        self.cursor.bump(2);
                    }
                }

                _ => {
                    if b < 0x80 {
                        self.cursor.bump(1);
                        if let Some(decoded) = buf.as_mut() {
                            decoded.push(char::from(b));
                        }
                    } else {
                        let ch = self.cursor.bump_rune();
                        if let Some(decoded) = buf.as_mut() {
                            decoded.push(ch);
                        }
                    }
                }
            }
        }

        Err(self.make_error(LexErrorKind::UnterminatedString))
    }
}

/// Decodes four hex digits into the character they name.
///
/// Values that are not Unicode scalar values (surrogate halves) decode to
/// U+FFFD. Returns `None` on any non-hex byte.
fn unhex(bytes: &[u8]) -> Option<char> {
    let mut value: u32 = 0;
    for &b in bytes {
        let digit = match b {
            b'0'..=b'9' => b - b'0',
            b'a'..=b'f' => b - b'a' + 10,
            b'A'..=b'F' => b - b'A' + 10,
            _ => return None,
        };
        value = (value << 4) | u32::from(digit);
    }
    Some(char::from_u32(value).unwrap_or('\u{fffd}'))
}
