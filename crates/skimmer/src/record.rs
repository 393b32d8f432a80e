//! The paper record type extracted from a results listing.

use serde::{Deserialize, Serialize};

/// One structured paper entry extracted from listing text.
///
/// A record is created when the extractor recognizes a `[N]  Title : ...`
/// header line, so `title` is always non-empty; every other field defaults
/// to absent/empty and is filled in as the corresponding field line is
/// consumed. Continuation lines of a wrapped title are joined with single
/// spaces.
///
/// # Examples
///
/// ```
/// use skimmer::record::PaperRecord;
///
/// let paper = PaperRecord::new("Deep Learning for Time Series");
/// assert!(paper.authors.is_empty());
/// assert_eq!(paper.year, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperRecord {
  /// The paper's full title, with wrapped lines re-joined
  pub title:    String,
  /// Author names in listing order, trimmed, empty entries dropped
  pub authors:  Vec<String>,
  /// Four-digit publication year, absent when missing or unparsable
  pub year:     Option<u16>,
  /// Primary category token (e.g. `cs.LG`)
  pub category: Option<String>,
  /// URL of the paper's PDF
  pub pdf_link: Option<String>,
}

impl PaperRecord {
  /// Creates a record with the given title and all other fields absent.
  pub fn new(title: impl Into<String>) -> Self {
    Self {
      title:    title.into(),
      authors:  Vec::new(),
      year:     None,
      category: None,
      pdf_link: None,
    }
  }
}
