//! Lexical error values.
//!
//! Error messages are part of the lexer's contract: parsers and tooling
//! surface them verbatim, so each variant's display form is fixed here and
//! pinned by tests. A [`LexError`] also carries the span the scanner had
//! reached when it detected the problem.

use gqlc_util::Span;
use thiserror::Error;

/// The reason a read failed.
///
/// The display form of each variant is the exact diagnostic text reported
/// to users.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    /// A control byte (other than tab and line terminators) at top level.
    ///
    /// The byte value is rendered as a four-digit decimal escape, matching
    /// the reference implementations.
    #[error("Cannot contain the invalid character \"\\u{0:04}\".")]
    InvalidCharacter(u8),

    /// A stray `'`, with a hint towards `"`.
    #[error("Unexpected single quote character ('), did you mean to use a double quote (\")?")]
    SingleQuote,

    /// A byte that cannot start any token.
    #[error("Cannot parse the unexpected character \"{0}\".")]
    UnexpectedCharacter(char),

    /// A leading `0` followed by another digit, e.g. `0123`.
    ///
    /// The payload is the offending input description: the next byte quoted,
    /// or `<EOF>`.
    #[error("Invalid number, unexpected digit after 0: {0}.")]
    UnexpectedDigitAfterZero(String),

    /// A digit was required (after `-`, `.`, or an exponent marker) but the
    /// input held something else. Same payload convention as above.
    #[error("Invalid number, expected digit but got: {0}.")]
    ExpectedDigit(String),

    /// A control byte (other than tab) inside a string literal.
    #[error("Invalid character within String: \"\\u{0:04}\".")]
    InvalidCharacterInString(u8),

    /// A backslash as the final byte of the input.
    #[error("Invalid character escape sequence.")]
    TruncatedEscape,

    /// An unknown escape letter, or a truncated/non-hex `\uXXXX` sequence.
    /// The payload is the offending source excerpt after the backslash.
    #[error("Invalid character escape sequence: \\{0}.")]
    InvalidEscape(String),

    /// End of input (or a bare line terminator) before the closing quote.
    #[error("Unterminated string.")]
    UnterminatedString,
}

/// A lexical error with the position at which scanning halted.
///
/// The caller is expected to stop reading tokens after receiving one; the
/// lexer performs no recovery.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct LexError {
    kind: LexErrorKind,
    span: Span,
}

impl LexError {
    pub(crate) fn new(kind: LexErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// The failure classification, carrying the contract message.
    pub fn kind(&self) -> &LexErrorKind {
        &self.kind
    }

    /// The span the scanner had reached: `start` is the token start,
    /// `end`/`column` the offending position.
    pub fn span(&self) -> Span {
        self.span
    }

    /// The diagnostic message, identical to the `Display` output.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}
