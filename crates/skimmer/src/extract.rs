//! Line-oriented extraction of paper records from saved listing text.
//!
//! A results listing is semi-structured: free-form preamble, then a line
//! starting with `Found` that opens the listing section, then repeating
//! record blocks of the form
//!
//! ```text
//! [1]  Title    : Deep Learning for
//!                 Time Series
//!     Authors   : Jane Smith, John Doe
//!     Year      : 2021
//!     Category  : cs.LG
//!     PDF Link  : https://arxiv.org/pdf/2101.00001
//! ```
//!
//! Extraction runs a small finite-state machine over the lines (see
//! [`ScanState`]). It never fails on malformed input: a line that matches
//! no pattern is skipped, and a field value that does not parse leaves the
//! field absent. Field lines are recognized independently of their order
//! inside a block, but wrapped-title continuation lines are only absorbed
//! between a header line and the first recognized field line.

use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{error::Result, record::PaperRecord};

lazy_static! {
  /// `[N]  Title : ...` header line opening a new record.
  static ref HEADER: Regex = Regex::new(r"(?i)^\s*\[(\d+)\]\s+Title\s*:\s*(.+)$").unwrap();
  /// `Authors : ...` field line, comma-separated names.
  static ref AUTHORS: Regex = Regex::new(r"(?i)^\s*Authors\s*:\s*(.+)$").unwrap();
  /// `Year : YYYY` field line; anything but exactly four digits stays unmatched.
  static ref YEAR: Regex = Regex::new(r"(?i)^\s*Year\s*:\s*(\d{4})\s*$").unwrap();
  /// `Category : token` field line; the token must span the rest of the line.
  static ref CATEGORY: Regex = Regex::new(r"(?i)^\s*Category\s*:\s*([\w.\-]+)\s*$").unwrap();
  /// `PDF Link : url` field line; only http(s) URLs are accepted.
  static ref PDF_LINK: Regex = Regex::new(r"(?i)^\s*PDF\s+Link\s*:\s*(https?://\S+)\s*$").unwrap();
}

/// States of the line scanner.
///
/// The ambiguity this machine resolves is the wrapped title: an indented
/// line that matches no field pattern is title text only while the scanner
/// is still [`ScanState::AccumulatingTitle`]; anywhere else it is noise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
  /// Before the `Found ...` marker that opens the listing section.
  Seeking,
  /// Inside the listing section, between records or field lines.
  InListing,
  /// Immediately after a header line, still absorbing wrapped title text.
  AccumulatingTitle,
}

/// Extracts every paper record from listing text, in listing order.
///
/// Never fails: text before the `Found` marker is ignored wholesale, and
/// unrecognizable lines inside the listing section are skipped. Field lines
/// seen before any header line are dropped, so every returned record has a
/// non-empty title.
///
/// # Examples
///
/// ```
/// let listing = "Found 1 papers matching the query.
///
/// [1]  Title    : An Example Paper
///     Authors   : Jane Smith
///     Year      : 2021
/// ";
/// let papers = skimmer::extract::extract(listing);
/// assert_eq!(papers.len(), 1);
/// assert_eq!(papers[0].year, Some(2021));
/// ```
pub fn extract(text: &str) -> Vec<PaperRecord> {
  let mut papers = Vec::new();
  let mut current: Option<PaperRecord> = None;
  let mut state = ScanState::Seeking;

  for line in text.lines() {
    if state == ScanState::Seeking {
      if line.trim().starts_with("Found") {
        state = ScanState::InListing;
      }
      continue;
    }

    if let Some(header) = HEADER.captures(line) {
      if let Some(paper) = current.take() {
        papers.push(paper);
      }
      current = Some(PaperRecord::new(header[2].trim()));
      state = ScanState::AccumulatingTitle;
      continue;
    }

    if let Some(field) = AUTHORS.captures(line) {
      if let Some(paper) = current.as_mut() {
        paper.authors = split_authors(&field[1]);
      }
      state = ScanState::InListing;
      continue;
    }

    if let Some(field) = YEAR.captures(line) {
      if let Some(paper) = current.as_mut() {
        paper.year = field[1].parse().ok();
      }
      state = ScanState::InListing;
      continue;
    }

    if let Some(field) = CATEGORY.captures(line) {
      if let Some(paper) = current.as_mut() {
        paper.category = Some(field[1].to_string());
      }
      state = ScanState::InListing;
      continue;
    }

    if let Some(field) = PDF_LINK.captures(line) {
      if let Some(paper) = current.as_mut() {
        paper.pdf_link = Some(field[1].to_string());
      }
      state = ScanState::InListing;
      continue;
    }

    if state == ScanState::AccumulatingTitle {
      if !line.trim().is_empty() && line.starts_with([' ', '\t']) {
        // An indented non-field line this early is wrapped title text.
        if let Some(paper) = current.as_mut() {
          paper.title.push(' ');
          paper.title.push_str(line.trim());
        }
        continue;
      }
      state = ScanState::InListing;
    }

    trace!("skipping unrecognized listing line: {line:?}");
  }

  if let Some(paper) = current.take() {
    papers.push(paper);
  }

  debug!("extracted {} papers from listing", papers.len());
  papers
}

/// Extracts paper records from a listing file on disk.
///
/// The only fallible step is reading the file; the extraction itself
/// tolerates any content. See [`extract`].
pub fn extract_path(path: impl AsRef<Path>) -> Result<Vec<PaperRecord>> {
  let text = std::fs::read_to_string(path)?;
  Ok(extract(&text))
}

/// Splits a comma-separated author list, trimming each name and dropping
/// entries that are empty after the trim.
fn split_authors(names: &str) -> Vec<String> {
  names.split(',').map(str::trim).filter(|name| !name.is_empty()).map(String::from).collect()
}
