//! Token kinds and the token record produced by the lexer.

use std::borrow::Cow;
use std::fmt;

use gqlc_util::Span;

/// The kind of a lexical token.
///
/// This is the closed set of shapes the GraphQL grammar defines at the
/// lexical level. `Comment` is part of the set but never surfaces from
/// [`Lexer::read_token`](crate::Lexer::read_token): comments are skipped
/// between tokens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A token that failed to lex.
    #[default]
    Invalid,
    /// End of input.
    Eof,
    /// `!`
    Bang,
    /// `$`
    Dollar,
    /// `&`
    Amp,
    /// `(`
    ParenL,
    /// `)`
    ParenR,
    /// `...`
    Spread,
    /// `:`
    Colon,
    /// `=`
    Equals,
    /// `@`
    At,
    /// `[`
    BracketL,
    /// `]`
    BracketR,
    /// `{`
    BraceL,
    /// `}`
    BraceR,
    /// `|`
    Pipe,
    /// `[_A-Za-z][_0-9A-Za-z]*`
    Name,
    /// An integer literal.
    Int,
    /// A float literal (a number with a fraction and/or exponent).
    Float,
    /// A single-quoted string literal.
    String,
    /// A triple-quoted block string literal.
    BlockString,
    /// A `#` comment. Never emitted by the lexer.
    Comment,
}

impl TokenKind {
    /// The canonical name of this kind, e.g. `"Name"` or `"BraceL"`.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Invalid => "Invalid",
            TokenKind::Eof => "EOF",
            TokenKind::Bang => "Bang",
            TokenKind::Dollar => "Dollar",
            TokenKind::Amp => "Amp",
            TokenKind::ParenL => "ParenL",
            TokenKind::ParenR => "ParenR",
            TokenKind::Spread => "Spread",
            TokenKind::Colon => "Colon",
            TokenKind::Equals => "Equals",
            TokenKind::At => "At",
            TokenKind::BracketL => "BracketL",
            TokenKind::BracketR => "BracketR",
            TokenKind::BraceL => "BraceL",
            TokenKind::BraceR => "BraceR",
            TokenKind::Pipe => "Pipe",
            TokenKind::Name => "Name",
            TokenKind::Int => "Int",
            TokenKind::Float => "Float",
            TokenKind::String => "String",
            TokenKind::BlockString => "BlockString",
            TokenKind::Comment => "Comment",
        }
    }

    /// Returns true for single- and multi-character punctuator kinds.
    pub fn is_punctuator(self) -> bool {
        matches!(
            self,
            TokenKind::Bang
                | TokenKind::Dollar
                | TokenKind::Amp
                | TokenKind::ParenL
                | TokenKind::ParenR
                | TokenKind::Spread
                | TokenKind::Colon
                | TokenKind::Equals
                | TokenKind::At
                | TokenKind::BracketL
                | TokenKind::BracketR
                | TokenKind::BraceL
                | TokenKind::BraceR
                | TokenKind::Pipe
        )
    }
}

impl fmt::Display for TokenKind {
    /// Punctuators render as their literal characters, everything else by
    /// its canonical name.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TokenKind::Eof => "<EOF>",
            TokenKind::Invalid => "<Invalid>",
            TokenKind::Bang => "!",
            TokenKind::Dollar => "$",
            TokenKind::Amp => "&",
            TokenKind::ParenL => "(",
            TokenKind::ParenR => ")",
            TokenKind::Spread => "...",
            TokenKind::Colon => ":",
            TokenKind::Equals => "=",
            TokenKind::At => "@",
            TokenKind::BracketL => "[",
            TokenKind::BracketR => "]",
            TokenKind::BraceL => "{",
            TokenKind::BraceR => "}",
            TokenKind::Pipe => "|",
            other => other.name(),
        };
        f.write_str(s)
    }
}

/// A single lexical token.
///
/// `value` is the token's semantic text: the source slice for punctuators,
/// names, and numbers, and the decoded content (without the surrounding
/// quotes) for strings. It borrows from the source unless decoding had to
/// allocate.
///
/// The span is measured in runes and, for string tokens, covers the
/// surrounding quote characters even though `value` excludes them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub value: Cow<'a, str>,
    pub span: Span,
}

impl Token<'_> {
    /// The placeholder token reported for a failed read.
    pub(crate) fn invalid(span: Span) -> Self {
        Token {
            kind: TokenKind::Invalid,
            value: Cow::Borrowed(""),
            span,
        }
    }
}

impl Default for Token<'_> {
    fn default() -> Self {
        Token::invalid(Span::DUMMY)
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.kind, self.value)
    }
}
