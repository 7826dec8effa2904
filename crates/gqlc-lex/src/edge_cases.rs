//! Cross-cutting edge case tests for gqlc-lex.
