//! gqlc-lex - Lexer for the GraphQL query and schema language
//!
//! This crate turns GraphQL request and schema strings into a forward-only
//! stream of tokens with source positions, ready for a parser to consume.
//!
//! The lexer borrows its input, allocates only when a string literal
//! contains escape sequences (or is a block string), and tracks positions
//! both in bytes (for slicing) and in Unicode code points (for diagnostics).
//!
//! # Modules
//!
//! - [`lexer`] - The scanner itself
//! - [`token`] - Token kinds and the token record
//! - [`error`] - Lexical error values
//! - [`block_string`] - Block-string value normalization
//!
//! # Example
//!
//! ```
//! use gqlc_lex::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new("{ hero { name } }");
//! let token = lexer.read_token().unwrap();
//! assert_eq!(token.kind, TokenKind::BraceL);
//!
//! let token = lexer.read_token().unwrap();
//! assert_eq!(token.kind, TokenKind::Name);
//! assert_eq!(token.value, "hero");
//! ```

pub mod block_string;
mod cursor;
mod edge_cases;
pub mod error;
pub mod lexer;
pub mod token;

pub use block_string::normalize_block_string;
pub use error::{LexError, LexErrorKind};
pub use lexer::Lexer;
pub use token::{Token, TokenKind};
