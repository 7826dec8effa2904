//! Number scanning.
//!
//! Grammar:
//!
//! ```text
//! Int:   -?(0|[1-9][0-9]*)
//! Float: -?(0|[1-9][0-9]*)(\.[0-9]+)?((E|e)(+|-)?[0-9]+)?
//! ```
//!
//! A number is a float exactly when a fraction or exponent is present.

use crate::error::{LexError, LexErrorKind};
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    pub(crate) fn read_number(&mut self) -> Result<Token<'a>, LexError> {
        let mut float = false;

        // back up to the first byte so the scanner sees the whole number
        self.cursor.back_up(1);

        self.accept_byte(&[b'-']);

        if self.accept_byte(&[b'0']) {
            // a leading zero must stand alone: 0123 is not a valid Int
            let consumed = self.accept_digits();
            if consumed != 0 {
                self.cursor.back_up(consumed);
                let got = self.describe_next();
                return Err(self.make_error(LexErrorKind::UnexpectedDigitAfterZero(got)));
            }
        } else if self.accept_digits() == 0 {
            let got = self.describe_next();
            return Err(self.make_error(LexErrorKind::ExpectedDigit(got)));
        }

        if self.accept_byte(&[b'.']) {
            float = true;

            if self.accept_digits() == 0 {
                let got = self.describe_next();
                return Err(self.make_error(LexErrorKind::ExpectedDigit(got)));
            }
        }

        if self.accept_byte(&[b'e', b'E']) {
            float = true;

            self.accept_byte(&[b'-', b'+']);

            if self.accept_digits() == 0 {
                let got = self.describe_next();
                return Err(self.make_error(LexErrorKind::ExpectedDigit(got)));
            }
        }

        if float {
            Ok(self.make_token(TokenKind::Float))
        } else {
            Ok(self.make_token(TokenKind::Int))
        }
    }

    /// Consumes the next byte if it matches any of `accepted`.
    fn accept_byte(&mut self, accepted: &[u8]) -> bool {
        match self.cursor.first() {
            Some(b) if accepted.contains(&b) => {
                self.cursor.bump(1);
                true
            }
            _ => false,
        }
    }

    /// Consumes a run of ASCII digits, returning how many were consumed.
    fn accept_digits(&mut self) -> usize {
        let mut consumed = 0;
        while matches!(self.cursor.first(), Some(b'0'..=b'9')) {
            self.cursor.bump(1);
            consumed += 1;
        }
        consumed
    }

    /// A human-readable description of the next byte, for error messages:
    /// the byte quoted, or `<EOF>`. Allocates, so only used on error paths.
    fn describe_next(&self) -> String {
        match self.cursor.first() {
            Some(b) => format!("\"{}\"", char::from(b)),
            None => "<EOF>".to_string(),
        }
    }
}
