use std::io::Write;

use skimmer::{
  error::SkimmerError,
  extract::{extract, extract_path},
};

use crate::{TestResult, SAMPLE_LISTING};

/// Extraction of well-formed and partially malformed listing blocks.
mod listing_blocks {
  use super::*;

  #[test]
  fn extracts_all_records_in_listing_order() {
    let papers = extract(SAMPLE_LISTING);
    assert_eq!(papers.len(), 3);
    assert_eq!(papers[0].title, "Deep Learning for Time Series");
    assert_eq!(papers[1].title, "Attention Is All You Need");
    assert_eq!(papers[2].title, "Notes on Convex Optimization");
  }

  #[test]
  fn wrapped_title_joins_with_single_spaces() {
    let listing = "Found 1 papers\n\
                   [1]  Title    : Deep Learning for\n    Time Series\n";
    let papers = extract(listing);
    assert_eq!(papers[0].title, "Deep Learning for Time Series");
  }

  #[test]
  fn captures_every_field_of_a_complete_block() {
    let paper = &extract(SAMPLE_LISTING)[0];
    assert_eq!(paper.authors, vec!["Jane Smith", "John Doe"]);
    assert_eq!(paper.year, Some(2021));
    assert_eq!(paper.category.as_deref(), Some("cs.LG"));
    assert_eq!(paper.pdf_link.as_deref(), Some("https://arxiv.org/pdf/2101.00001v1"));
  }

  #[test]
  fn missing_and_malformed_fields_stay_absent() {
    let paper = &extract(SAMPLE_LISTING)[2];
    assert_eq!(paper.year, None, "a non-numeric year must not be captured");
    assert_eq!(paper.category, None);
    assert_eq!(paper.pdf_link, None);
  }

  #[test]
  fn last_record_is_finalized_at_end_of_input() {
    let listing = "Found 1 papers\n[1]  Title    : Trailing Record";
    let papers = extract(listing);
    assert_eq!(papers.len(), 1);
    assert_eq!(papers[0].title, "Trailing Record");
  }

  #[test]
  fn listing_without_found_marker_yields_nothing() {
    let listing = "[1]  Title    : Unmarked\n    Year      : 2021\n";
    assert!(extract(listing).is_empty());
  }
}

/// The file-based entry point.
mod listing_files {
  use super::*;

  #[test]
  fn reads_a_listing_from_disk() -> TestResult<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("arxiv_search_output.txt");
    let mut file = std::fs::File::create(&path)?;
    file.write_all(SAMPLE_LISTING.as_bytes())?;

    let papers = extract_path(&path)?;
    assert_eq!(papers.len(), 3);
    Ok(())
  }

  #[test]
  fn missing_file_reports_an_io_error() {
    let result = extract_path("definitely/not/a/real/listing.txt");
    assert!(matches!(result, Err(SkimmerError::Io(_))));
  }
}
