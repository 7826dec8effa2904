//! Name scanning.
//!
//! Names are identifier-shaped: `[_A-Za-z][_0-9A-Za-z]*`. The first
//! character has already been consumed by the dispatch.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    pub(crate) fn read_name(&mut self) -> Token<'a> {
        while let Some(b) = self.cursor.first() {
            if b == b'_' || b.is_ascii_alphanumeric() {
                self.cursor.bump(1);
            } else {
                break;
            }
        }

        self.make_token(TokenKind::Name)
    }
}
