//! gqlc-util - Foundation Types
//!
//! This crate provides the fundamental types shared by the crates of the
//! gqlc GraphQL front end.
//!
//! # Modules
//!
//! - [`span`] - Source location tracking in Unicode code points
//!
//! # Example
//!
//! ```
//! use gqlc_util::Span;
//!
//! let span = Span::new(4, 9, 1, 5);
//! assert_eq!(span.len(), 5);
//! assert!(span.contains(6));
//! ```

pub mod span;

pub use span::Span;
