//! Boolean predicates over paper records.
//!
//! A compiled query is an explicit predicate tree: field terms at the
//! leaves, `And`/`Or` nodes above them. Keeping the tree as data (rather
//! than composing closures) makes the parser's left-to-right fold visible
//! in the shape of the result, so tests can assert on structure instead of
//! on evaluation order.

use std::fmt;

use crate::record::PaperRecord;

/// A single field-scoped query atom, with the field kind decided at
/// tokenization and the match value case-folded once.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldTerm {
  /// `ti:` substring match against the title.
  Title(String),
  /// `au:` whole-name match against one author.
  Author(String),
  /// `year:` exact match against the publication year.
  Year(u16),
  /// `cat:` exact match against the category token.
  Category(String),
}

impl FieldTerm {
  /// Decodes a `prefix:value` lexeme into a field term.
  ///
  /// Returns `None` when the prefix is not a recognized field or a `year:`
  /// value is not exactly four unquoted digits. Values for the text fields
  /// are unquoted and lowercased here so evaluation never re-folds.
  pub(crate) fn decode(lexeme: &str) -> Option<Self> {
    let (prefix, raw) = lexeme.split_once(':')?;
    match prefix.to_ascii_lowercase().as_str() {
      "ti" => Some(Self::Title(unquote(raw).to_lowercase())),
      "au" => Some(Self::Author(unquote(raw).to_lowercase())),
      "cat" => Some(Self::Category(unquote(raw).to_lowercase())),
      "year" if raw.len() == 4 && raw.bytes().all(|b| b.is_ascii_digit()) =>
        raw.parse().ok().map(Self::Year),
      _ => None,
    }
  }

  /// Tests this term against one record.
  ///
  /// An absent field never matches: a record without a year fails every
  /// `year:` term rather than erroring.
  pub fn matches(&self, paper: &PaperRecord) -> bool {
    match self {
      Self::Title(value) => paper.title.to_lowercase().contains(value),
      Self::Author(value) => paper.authors.iter().any(|author| author.to_lowercase() == *value),
      Self::Year(value) => paper.year == Some(*value),
      Self::Category(value) =>
        paper.category.as_deref().is_some_and(|category| category.to_lowercase() == *value),
    }
  }
}

/// Strips one pair of surrounding double quotes, if both are present.
///
/// A lone quote is left in place; `ti:"unclosed` really does carry the
/// quote character into its match value, mirroring how the lexer accepted
/// the chunk.
fn unquote(raw: &str) -> &str {
  raw.strip_prefix('"').and_then(|rest| rest.strip_suffix('"')).unwrap_or(raw)
}

impl fmt::Display for FieldTerm {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Title(value) => write!(f, "ti:\"{value}\""),
      Self::Author(value) => write!(f, "au:\"{value}\""),
      Self::Year(value) => write!(f, "year:{value}"),
      Self::Category(value) => write!(f, "cat:\"{value}\""),
    }
  }
}

/// A compiled query: a boolean function of a [`PaperRecord`], represented
/// as an explicit tree.
///
/// Built by [`parse`](crate::query::parse::parse) or the
/// [`compile`](crate::query::compile) convenience wrapper. Evaluation is a
/// recursive visit with standard short-circuiting; the tree shape already
/// encodes the parser's left-to-right operator fold, so `a OR b AND c`
/// arrives here as `And(Or(a, b), c)`.
///
/// # Examples
///
/// ```
/// use skimmer::{query, record::PaperRecord};
///
/// let predicate = query::compile(r#"au:"jane smith" OR year:2004"#)?;
/// let paper = PaperRecord::new("Convex Optimization");
/// assert!(!predicate.matches(&paper));
/// # Ok::<(), skimmer::error::SkimmerError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
  /// A single field term.
  Leaf(FieldTerm),
  /// Both sub-predicates must match.
  And(Box<Predicate>, Box<Predicate>),
  /// At least one sub-predicate must match.
  Or(Box<Predicate>, Box<Predicate>),
}

impl Predicate {
  /// Evaluates this predicate against one record. Records are never
  /// mutated, and evaluation never fails.
  pub fn matches(&self, paper: &PaperRecord) -> bool {
    match self {
      Self::Leaf(term) => term.matches(paper),
      Self::And(left, right) => left.matches(paper) && right.matches(paper),
      Self::Or(left, right) => left.matches(paper) || right.matches(paper),
    }
  }

  /// Keeps the records matching this predicate, preserving the input
  /// order and multiplicities: a straight filter, no sorting and no
  /// deduplication.
  pub fn filter(&self, papers: Vec<PaperRecord>) -> Vec<PaperRecord> {
    papers.into_iter().filter(|paper| self.matches(paper)).collect()
  }
}
