//! Block string scanning.
//!
//! Block strings are delimited by `"""` and may span lines. Within the body
//! only one escape exists, `\"""` for a literal `"""`; every other backslash
//! is literal. Line terminators are normalized to `\n` while collecting the
//! raw body, which is then cooked by
//! [`normalize_block_string`](crate::normalize_block_string).

use std::borrow::Cow;

use crate::block_string::normalize_block_string;
use crate::error::{LexError, LexErrorKind};
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    pub(crate) fn read_block_string(&mut self) -> Result<Token<'a>, LexError> {
        let input = self.cursor.input();

        // block strings always decode, so the buffer is not lazy here
        let mut raw = String::new();

        // the opening delimiter: the dispatch consumed the first quote
        self.start += 3;
        self.start_runes += 3;
        self.cursor.bump(2);

        while let Some(b) = self.cursor.first() {
            let pos = self.cursor.byte_pos();

            if b == b'"' && input.as_bytes()[pos..].starts_with(b"\"\"\"") {
                let mut token = self.make_token(TokenKind::BlockString);
                // cover the delimiters in the span without including them
                // in the value; the column moves back with the span start
                token.span.start -= 3;
                token.span.end += 3;
                token.span.column -= 3;
                token.value = Cow::Owned(normalize_block_string(&raw));

                self.cursor.bump(3);

                return Ok(token);
            }

            if b < 0x20 && !matches!(b, b'\t' | b'\n' | b'\r') {
                return Err(self.make_error(LexErrorKind::InvalidCharacterInString(b)));
            }

            if b == b'\\' && input.as_bytes()[pos..].starts_with(b"\\\"\"\"") {
                raw.push_str("\"\"\"");
                self.cursor.bump(4);
            } else if b == b'\r' {
                self.cursor.bump(1);
                if self.cursor.first() == Some(b'\n') {
                    self.cursor.bump(1);
                }
                raw.push('\n');
                self.cursor.start_new_line();
            } else if b == b'\n' {
                self.cursor.bump(1);
                raw.push('\n');
                self.cursor.start_new_line();
            } else if b < 0x80 {
                self.cursor.bump(1);
                raw.push(char::from(b));
            } else {
                raw.push(self.cursor.bump_rune());
            }
        }

        Err(self.make_error(LexErrorKind::UnterminatedString))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_block(source: &str) -> Result<Token<'_>, LexError> {
        let mut lexer = Lexer::new(source);
        lexer.read_token()
    }

    #[test]
    fn test_simple_block_string() {
        let token = lex_block(r#""""simple""""#).expect("lex ok");
        assert_eq!(token.kind, TokenKind::BlockString);
        assert_eq!(token.value, "simple");
    }

    #[test]
    fn test_span_covers_delimiters() {
        let token = lex_block(r#" """ white space """ "#).expect("lex ok");
        assert_eq!(token.value, " white space ");
        assert_eq!(token.span.start, 1);
        assert_eq!(token.span.end, 20);
        // the column points at the opening delimiter, not the content
        assert_eq!(token.span.column, 2);
    }

    #[test]
    fn test_single_quotes_inside() {
        let token = lex_block(r#""""contains " quote""""#).expect("lex ok");
        assert_eq!(token.value, "contains \" quote");
    }

    #[test]
    fn test_escaped_triple_quote() {
        let token = lex_block(r#""""contains \""" triplequote""""#).expect("lex ok");
        assert_eq!(token.value, "contains \"\"\" triplequote");
    }

    #[test]
    fn test_other_backslashes_are_literal() {
        let token = lex_block(r#""""unescaped \n\r\b\t\f \u1234""""#).expect("lex ok");
        assert_eq!(token.value, "unescaped \\n\\r\\b\\t\\f \\u1234");

        let token = lex_block(r#""""slashes \\ \/""""#).expect("lex ok");
        assert_eq!(token.value, "slashes \\\\ \\/");
    }

    #[test]
    fn test_multiline_value_is_normalized() {
        let token = lex_block("\"\"\"\n\n    spans\n      multiple\n        lines\n\n    \"\"\"")
            .expect("lex ok");
        assert_eq!(token.value, "spans\n  multiple\n    lines");
    }

    #[test]
    fn test_line_terminators_normalize_identically() {
        let lf = lex_block("\"\"\"a\nb\"\"\"").expect("lex ok");
        let cr = lex_block("\"\"\"a\rb\"\"\"").expect("lex ok");
        let crlf = lex_block("\"\"\"a\r\nb\"\"\"").expect("lex ok");
        assert_eq!(lf.value, "a\nb");
        assert_eq!(cr.value, lf.value);
        assert_eq!(crlf.value, lf.value);
    }

    #[test]
    fn test_crlf_spans_count_runes() {
        // \r\n is two runes in the span even though it is one line break
        let lf = lex_block("\"\"\"a\nb\"\"\"").expect("lex ok");
        let crlf = lex_block("\"\"\"a\r\nb\"\"\"").expect("lex ok");
        assert_eq!(lf.span.end + 1, crlf.span.end);
    }

    #[test]
    fn test_token_position_is_its_first_rune() {
        let mut lexer = Lexer::new("one\n\"\"\"a\nb\"\"\" two");
        lexer.read_token().expect("one");
        let block = lexer.read_token().expect("block");
        assert_eq!(block.span.line, 2);
        assert_eq!(block.span.column, 1);
    }

    #[test]
    fn test_lines_inside_block_are_counted() {
        let mut lexer = Lexer::new("\"\"\"a\nb\nc\"\"\"\nafter");
        lexer.read_token().expect("block");
        let after = lexer.read_token().expect("after");
        assert_eq!(after.span.line, 4);
        assert_eq!(after.span.column, 1);
    }

    #[test]
    fn test_unicode_content() {
        let token = lex_block("\"\"\"unicode é 😀\"\"\" x").expect("lex ok");
        assert_eq!(token.value, "unicode é 😀");
        // 11 content runes plus two three-rune delimiters
        assert_eq!(token.span.end - token.span.start, 17);
    }

    #[test]
    fn test_unterminated_block() {
        for source in ["\"\"\"no end", "\"\"\"almost\"\"", "\"\"\""] {
            let err = lex_block(source).expect_err("unterminated");
            assert_eq!(err.message(), "Unterminated string.");
        }
    }

    #[test]
    fn test_control_byte_in_block() {
        let err = lex_block("\"\"\"bell \u{0007}\"\"\"").expect_err("control byte");
        assert_eq!(err.message(), "Invalid character within String: \"\\u0007\".");
    }

    #[test]
    fn test_tab_and_newlines_allowed() {
        let token = lex_block("\"\"\"a\tb\nc\"\"\"").expect("lex ok");
        assert_eq!(token.value, "a\tb\nc");
    }
}
