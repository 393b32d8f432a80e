//! Re-parsing and boolean filtering of saved arXiv results listings.
//!
//! `skimmer` consumes the human-readable `[N]  Title : ...` block format
//! that arXiv search tooling writes to disk, re-extracts structured paper
//! records from it, and selects the subset matching a small field-scoped
//! query language:
//!
//! - Field terms scope a match to one attribute: `ti:` (title substring),
//!   `au:` (exact author), `cat:` (exact category), `year:` (exact year).
//! - Terms combine with `AND`, `OR`, and parentheses. The two operators
//!   carry equal precedence and fold left-to-right in the order written,
//!   so `a OR b AND c` means `(a OR b) AND c`; parenthesize to group.
//! - Double quotes allow spaces inside a value: `ti:"time series"`.
//!
//! Filtering preserves the order of the listing, and filtered records
//! render back into the same block format, so output from one pass is
//! valid input for the next.
//!
//! # Getting Started
//!
//! ```
//! use skimmer::{format::render, skim};
//!
//! # fn main() -> Result<(), skimmer::error::SkimmerError> {
//! let listing = "Found 2 papers matching the query.
//!
//! [1]  Title    : Deep Learning for
//!                 Time Series
//!     Authors   : Jane Smith, John Doe
//!     Year      : 2021
//!     Category  : cs.LG
//!     PDF Link  : https://arxiv.org/pdf/2101.00001
//!
//! [2]  Title    : Convex Optimization
//!     Authors   : John Doe
//!     Year      : 2004
//! ";
//!
//! let matched = skim(listing, r#"ti:"time series" AND au:"jane smith""#)?;
//! assert_eq!(matched.len(), 1);
//! assert_eq!(matched[0].title, "Deep Learning for Time Series");
//!
//! println!("{}", render(&matched));
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`record`]: The extracted paper record type
//! - [`extract`]: Line-oriented extraction of records from listing text
//! - [`query`]: Tokenizer, parser, and predicate evaluation for the query
//!   language
//! - [`format`]: Rendering records back into listing text
//! - [`error`]: Error types shared across the crate
//!
//! # Design Philosophy
//!
//! The whole pipeline is a synchronous batch transform: the listing is read
//! into memory once, scanned in a single pass, and the compiled predicate
//! is applied eagerly to each record. Query syntax errors abort the
//! operation; formatting irregularities inside the listing never do, since
//! a malformed line is skipped and extraction continues.

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use tracing::debug;

pub mod error;
pub mod extract;
pub mod format;
pub mod query;
pub mod record;

use crate::{error::Result, record::PaperRecord};

/// Common types for ergonomic imports.
///
/// # Usage
///
/// ```
/// use skimmer::prelude::*;
///
/// fn example() -> Result<Vec<PaperRecord>> {
///   let predicate = skimmer::query::compile("year:2021")?;
///   Ok(predicate.filter(Vec::new()))
/// }
/// ```
pub mod prelude {
  pub use crate::{
    error::{Result, SkimmerError},
    query::predicate::Predicate,
    record::PaperRecord,
  };
}

/// Filters a saved results listing with a query string in one call.
///
/// Compiles `query` into a [`query::predicate::Predicate`], extracts every
/// record from `listing`, and returns the records matching the predicate in
/// their original order.
///
/// # Errors
///
/// Fails if the query is empty or syntactically invalid; listing text
/// itself never causes an error (unrecognized lines are skipped).
///
/// # Examples
///
/// ```
/// let listing = "Found 1 papers matching the query.
///
/// [1]  Title    : An Example Paper
///     Year      : 2021
/// ";
/// let matched = skimmer::skim(listing, "ti:example")?;
/// assert_eq!(matched.len(), 1);
/// # Ok::<(), skimmer::error::SkimmerError>(())
/// ```
pub fn skim(listing: &str, query: &str) -> Result<Vec<PaperRecord>> {
  let predicate = query::compile(query)?;
  let papers = extract::extract(listing);
  let matched = predicate.filter(papers);
  debug!("query matched {} papers", matched.len());
  Ok(matched)
}
