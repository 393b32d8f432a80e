//! The field-scoped boolean query language.
//!
//! A query selects records by field-scoped terms combined with `AND`, `OR`,
//! and parentheses:
//!
//! ```text
//! ti:"machine learning" AND (au:"Jane Smith" OR year:2022)
//! ```
//!
//! Compilation runs in two stages, split across this module's children:
//!
//! - [`token`]: lexes the raw query string into a token sequence. Never
//!   fails; text it cannot recognize is dropped (and logged).
//! - [`parse`]: recursive-descent parser turning tokens into a
//!   [`predicate::Predicate`] tree. Syntax problems are reported as typed
//!   errors rather than terminating anything; exiting on a bad query is a
//!   caller concern.
//!
//! `AND` and `OR` carry equal precedence and fold strictly left-to-right,
//! so `a OR b AND c` parses as `(a OR b) AND c`. This matches the behavior
//! of previously saved queries and is covered by tests; parentheses force
//! any other grouping.

use crate::error::{Result, SkimmerError};

pub mod parse;
pub mod predicate;
pub mod token;

/// Compiles a query string into an executable predicate.
///
/// Convenience wrapper running [`token::tokenize`] and [`parse::parse`].
///
/// # Errors
///
/// - [`SkimmerError::EmptyQuery`] when nothing in the query tokenizes.
/// - Any error of [`parse::parse`] for syntactically invalid queries.
///
/// # Examples
///
/// ```
/// use skimmer::{query, record::PaperRecord};
///
/// let predicate = query::compile(r#"ti:volatility AND year:2021"#)?;
///
/// let mut paper = PaperRecord::new("Realized Volatility Forecasting");
/// paper.year = Some(2021);
/// assert!(predicate.matches(&paper));
/// # Ok::<(), skimmer::error::SkimmerError>(())
/// ```
pub fn compile(query: &str) -> Result<predicate::Predicate> {
  let tokens = token::tokenize(query);
  if tokens.is_empty() {
    return Err(SkimmerError::EmptyQuery);
  }
  parse::parse(&tokens)
}
