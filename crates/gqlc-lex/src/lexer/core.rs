//! Core lexer implementation.
//!
//! This module contains the `Lexer` struct, the main dispatch over the next
//! byte, whitespace and byte-order-mark skipping, and the one-token peek
//! buffer. The individual token scanners live in the sibling modules.

use std::borrow::Cow;

use gqlc_util::Span;

use crate::cursor::Cursor;
use crate::error::{LexError, LexErrorKind};
use crate::token::{Token, TokenKind};

/// Lexer for the GraphQL query and schema language.
///
/// The lexer borrows the source text and produces tokens on demand. It is
/// single-owner: one logical thread of control drives `read_token`, no I/O
/// or blocking occurs, and a lexical error halts the stream at the offending
/// position (there is no recovery).
pub struct Lexer<'a> {
    /// Scanning cursor over the source.
    pub(crate) cursor: Cursor<'a>,

    /// Byte offset where the current token begins.
    pub(crate) start: usize,

    /// Rune offset where the current token begins.
    pub(crate) start_runes: usize,

    /// Line number at the start of the current token.
    ///
    /// Block strings may span lines, so the values at token start are
    /// snapshotted here; the live cursor values are used for errors.
    start_line: u32,

    /// Line-start rune offset at the start of the current token.
    start_line_runes: usize,

    /// Cached one-token lookahead.
    peeked: Option<Result<Token<'a>, LexError>>,

    /// The most recently returned token.
    last_token: Token<'a>,

    /// Set once iteration yields an error, which character errors do not
    /// advance past; the iterator then terminates instead of re-reading.
    halted: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer positioned before the first character of `input`.
    pub fn new(input: &'a str) -> Self {
        Self {
            cursor: Cursor::new(input),
            start: 0,
            start_runes: 0,
            start_line: 1,
            start_line_runes: 0,
            peeked: None,
            last_token: Token::default(),
            halted: false,
        }
    }

    /// Returns the next token, advancing the cursor.
    ///
    /// Whitespace, commas, byte-order marks, and comments between tokens are
    /// skipped. At end of input an `EOF` token is returned, and keeps being
    /// returned on every further call.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] whose span points at the position scanning had
    /// reached. After an error, `last_token` reports an `Invalid` token with
    /// that span; subsequent calls restart from the current cursor, but
    /// callers are expected to stop.
    pub fn read_token(&mut self) -> Result<Token<'a>, LexError> {
        let result = match self.peeked.take() {
            Some(cached) => cached,
            None => self.scan_token(),
        };
        self.last_token = match &result {
            Ok(token) => token.clone(),
            Err(err) => Token::invalid(err.span()),
        };
        result
    }

    /// Returns the token the next `read_token` will return, without
    /// consuming it.
    ///
    /// The lookahead is one token deep: repeated calls return the same token
    /// until `read_token` consumes it. If the lookahead fails to lex, the
    /// `Invalid` placeholder is returned here and the error itself surfaces
    /// from the next `read_token`.
    pub fn peek_token(&mut self) -> Token<'a> {
        let cached = match self.peeked.take() {
            Some(cached) => cached,
            None => self.read_token(),
        };
        let token = match &cached {
            Ok(token) => token.clone(),
            Err(err) => Token::invalid(err.span()),
        };
        self.peeked = Some(cached);
        token
    }

    /// The most recently returned token.
    ///
    /// Before the first read this is the default `Invalid` token. Peeking
    /// counts as a read for this purpose.
    pub fn last_token(&self) -> Token<'a> {
        self.last_token.clone()
    }

    /// Skips insignificant input, records the token start, and dispatches on
    /// the first byte of the next token.
    fn scan_token(&mut self) -> Result<Token<'a>, LexError> {
        loop {
            self.skip_ignored();

            self.start = self.cursor.byte_pos();
            self.start_runes = self.cursor.rune_pos();
            self.start_line = self.cursor.line();
            self.start_line_runes = self.cursor.line_start_runes();

            let Some(b) = self.cursor.first() else {
                return Ok(self.make_token(TokenKind::Eof));
            };
            self.cursor.bump(1);

            match b {
                b'!' => return Ok(self.make_token(TokenKind::Bang)),
                b'#' => {
                    // a Comment token is produced but never surfaced
                    self.read_comment();
                    continue;
                }
                b'$' => return Ok(self.make_token(TokenKind::Dollar)),
                b'&' => return Ok(self.make_token(TokenKind::Amp)),
                b'(' => return Ok(self.make_token(TokenKind::ParenL)),
                b')' => return Ok(self.make_token(TokenKind::ParenR)),
                b'.' => {
                    if self.cursor.peek_byte(0) == Some(b'.')
                        && self.cursor.peek_byte(1) == Some(b'.')
                    {
                        self.cursor.bump(2);
                        return Ok(self.make_token(TokenKind::Spread));
                    }
                    // a lone dot falls through to the error path below
                }
                b':' => return Ok(self.make_token(TokenKind::Colon)),
                b'=' => return Ok(self.make_token(TokenKind::Equals)),
                b'@' => return Ok(self.make_token(TokenKind::At)),
                b'[' => return Ok(self.make_token(TokenKind::BracketL)),
                b']' => return Ok(self.make_token(TokenKind::BracketR)),
                b'{' => return Ok(self.make_token(TokenKind::BraceL)),
                b'}' => return Ok(self.make_token(TokenKind::BraceR)),
                b'|' => return Ok(self.make_token(TokenKind::Pipe)),
                b'_' | b'A'..=b'Z' | b'a'..=b'z' => return Ok(self.read_name()),
                b'-' | b'0'..=b'9' => return self.read_number(),
                b'"' => {
                    if self.cursor.peek_byte(0) == Some(b'"')
                        && self.cursor.peek_byte(1) == Some(b'"')
                    {
                        return self.read_block_string();
                    }
                    return self.read_string();
                }
                _ => {}
            }

            self.cursor.back_up(1);

            if b < 0x20 && !matches!(b, 0x09 | 0x0a | 0x0d) {
                return Err(self.make_error(LexErrorKind::InvalidCharacter(b)));
            }
            if b == b'\'' {
                return Err(self.make_error(LexErrorKind::SingleQuote));
            }
            return Err(self.make_error(LexErrorKind::UnexpectedCharacter(char::from(b))));
        }
    }

    /// Advances over whitespace between tokens: tab, space, comma (which is
    /// insignificant in GraphQL), line terminators, and the UTF-8 byte-order
    /// mark. `\n`, `\r`, and `\r\n` each count as exactly one line break.
    fn skip_ignored(&mut self) {
        while let Some(b) = self.cursor.first() {
            match b {
                b'\t' | b' ' | b',' => self.cursor.bump(1),
                b'\n' => {
                    self.cursor.bump(1);
                    self.cursor.start_new_line();
                }
                b'\r' => {
                    self.cursor.bump(1);
                    if self.cursor.first() == Some(b'\n') {
                        self.cursor.bump(1);
                    }
                    self.cursor.start_new_line();
                }
                // byte order mark; checked byte-wise as this is the hot path
                0xef => {
                    if self.cursor.peek_byte(1) == Some(0xbb)
                        && self.cursor.peek_byte(2) == Some(0xbf)
                    {
                        self.cursor.bump_rune();
                    } else {
                        return;
                    }
                }
                _ => return,
            }
        }
    }

    /// Builds a token of `kind` over the current `start..cursor` range.
    ///
    /// The value is the borrowed source slice; string scanners overwrite it
    /// with decoded content where escapes forced an allocation.
    pub(crate) fn make_token(&self, kind: TokenKind) -> Token<'a> {
        Token {
            kind,
            value: Cow::Borrowed(self.cursor.slice_from(self.start)),
            span: Span::new(
                self.start_runes,
                self.cursor.rune_pos(),
                self.start_line,
                (self.start_runes - self.start_line_runes + 1) as u32,
            ),
        }
    }

    /// Builds an error whose span starts at the current token and whose
    /// line/column point at the position the scanner has reached.
    pub(crate) fn make_error(&self, kind: LexErrorKind) -> LexError {
        LexError::new(
            kind,
            Span::new(
                self.start_runes,
                self.cursor.rune_pos(),
                self.cursor.line(),
                (self.cursor.rune_pos() - self.cursor.line_start_runes() + 1) as u32,
            ),
        )
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>, LexError>;

    /// Yields tokens until `EOF` (exclusive) or the first error (inclusive);
    /// after an error the stream is halted and only `None` follows.
    fn next(&mut self) -> Option<Self::Item> {
        if self.halted {
            return None;
        }
        match self.read_token() {
            Ok(token) if token.kind == TokenKind::Eof => None,
            Err(err) => {
                self.halted = true;
                Some(Err(err))
            }
            result => Some(result),
        }
    }
}
