//! Error types for the skimmer library.
//!
//! This module provides the error type shared across the crate, covering:
//! - Listing input that could not be read
//! - Query strings that tokenize to nothing
//! - Query syntax errors found during parsing
//!
//! Formatting irregularities inside the listing text are deliberately NOT
//! errors: a line the extractor does not recognize is skipped, and a year
//! value that is not exactly four digits leaves the field absent. Only the
//! query side of the pipeline is strict.
//!
//! # Examples
//!
//! ```
//! use skimmer::{error::SkimmerError, query};
//!
//! match query::compile(r#"xx:"foo""#) {
//!   Err(SkimmerError::InvalidToken(token)) => assert!(token.starts_with("xx:")),
//!   other => panic!("expected an invalid token error, got {other:?}"),
//! }
//! ```

use thiserror::Error;

/// Error type alias used for the [`skimmer`](crate) crate.
pub type Result<T> = core::result::Result<T, SkimmerError>;

/// Errors that can occur while loading a listing or compiling a query.
#[derive(Error, Debug)]
pub enum SkimmerError {
  /// The listing file could not be found or read.
  ///
  /// Raised only by the file-based entry point
  /// [`extract_path`](crate::extract::extract_path); extraction from an
  /// in-memory string never fails.
  #[error(transparent)]
  Io(#[from] std::io::Error),

  /// The query string contained no recognizable tokens.
  ///
  /// This occurs when the query is empty, all whitespace, or made up
  /// entirely of text the tokenizer drops (e.g. bare words without a
  /// field prefix).
  #[error("query contained no recognizable tokens")]
  EmptyQuery,

  /// A token in the query does not match any recognized field-term shape.
  ///
  /// Carries the offending token so callers can report it, e.g. a term
  /// with an unknown field prefix such as `xx:"foo"`, or a `year:` value
  /// that is not exactly four unquoted digits.
  #[error("invalid token \"{0}\" in query")]
  InvalidToken(String),

  /// A structurally valid token appeared where the grammar does not allow
  /// it, e.g. a stray closing parenthesis or two field terms with no
  /// operator between them.
  #[error("unexpected token \"{0}\" in query")]
  UnexpectedToken(String),

  /// The query ended where the grammar required more input, e.g. after a
  /// trailing operator or inside an unclosed parenthesized group.
  #[error("query ended unexpectedly")]
  UnexpectedEnd,
}
