//! Comment scanning.
//!
//! A comment runs from `#` to the end of the line:
//!
//! ```text
//! #[\u0009\u0020-\uFFFF]*
//! ```
//!
//! The line terminator is not part of the comment; it is consumed by the
//! following whitespace pass. The dispatch loop discards the token this
//! scanner produces, so comments never appear in the output stream.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    pub(crate) fn read_comment(&mut self) -> Token<'a> {
        while let Some(ch) = self.cursor.peek_rune() {
            // any source character except line terminators and controls
            if ch == '\t' || ch > '\u{001f}' {
                self.cursor.bump_rune();
            } else {
                break;
            }
        }

        self.make_token(TokenKind::Comment)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Lexer, TokenKind};

    #[test]
    fn test_comment_to_end_of_line() {
        let mut lexer = Lexer::new("#comment\ntoken");
        let token = lexer.read_token().expect("lex ok");
        assert_eq!(token.kind, TokenKind::Name);
        assert_eq!(token.value, "token");
        assert_eq!(token.span.line, 2);
    }

    #[test]
    fn test_comment_at_eof() {
        let mut lexer = Lexer::new("x # trailing");
        lexer.read_token().expect("name");
        let token = lexer.read_token().expect("eof");
        assert_eq!(token.kind, TokenKind::Eof);
    }

    #[test]
    fn test_comment_may_contain_anything_printable() {
        let mut lexer = Lexer::new("# \"'$...@é😀\t,\r42");
        let token = lexer.read_token().expect("lex ok");
        assert_eq!(token.kind, TokenKind::Int);
        assert_eq!(token.value, "42");
        assert_eq!(token.span.line, 2);
    }

    #[test]
    fn test_consecutive_comments() {
        let mut lexer = Lexer::new("#a\n#b\n#c\nname");
        let token = lexer.read_token().expect("lex ok");
        assert_eq!(token.value, "name");
        assert_eq!(token.span.line, 4);
    }

    #[test]
    fn test_only_comment_yields_eof() {
        let mut lexer = Lexer::new("# nothing else");
        let token = lexer.read_token().expect("eof");
        assert_eq!(token.kind, TokenKind::Eof);
    }
}
