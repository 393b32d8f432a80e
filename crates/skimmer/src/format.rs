//! Rendering of paper records back into listing text.
//!
//! The output mirrors the block format the extractor consumes: a
//! `Found ...` section marker, then one block per record with the title
//! wrapped across indented continuation lines. A rendered listing can
//! be re-extracted and re-filtered. Absent fields render as placeholders
//! (`N/A`, `No PDF Link`) chosen so they do not re-parse as field values.

use crate::record::PaperRecord;

/// Target total line width for wrapped titles.
const WRAP_WIDTH: usize = 80;

/// Indent of title continuation lines, aligned under the title text.
const TITLE_INDENT: &str = "                ";

/// Renders records as listing text, in the order given.
///
/// An empty sequence renders as a human-readable "no papers" message
/// instead of an empty string or an error.
///
/// # Examples
///
/// ```
/// use skimmer::{format::render, record::PaperRecord};
///
/// let mut paper = PaperRecord::new("Convex Optimization");
/// paper.year = Some(2004);
///
/// let listing = render(&[paper]);
/// assert!(listing.starts_with("Found 1 papers"));
/// assert!(listing.contains("Year      : 2004"));
///
/// assert_eq!(render(&[]), "No papers found matching the criteria.\n");
/// ```
pub fn render(papers: &[PaperRecord]) -> String {
  if papers.is_empty() {
    return String::from("No papers found matching the criteria.\n");
  }

  let mut out = format!("Found {} papers matching the query.\n\n", papers.len());
  for (index, paper) in papers.iter().enumerate() {
    render_paper(&mut out, index + 1, paper);
  }
  out
}

/// Appends one record block, numbered from 1.
fn render_paper(out: &mut String, index: usize, paper: &PaperRecord) {
  wrap_title(out, &format!("[{index}]  Title    : "), &paper.title);

  let authors =
    if paper.authors.is_empty() { "N/A".to_string() } else { paper.authors.join(", ") };
  out.push_str(&format!("    Authors   : {authors}\n"));

  match paper.year {
    Some(year) => out.push_str(&format!("    Year      : {year}\n")),
    None => out.push_str("    Year      : N/A\n"),
  }

  out.push_str(&format!("    Category  : {}\n", paper.category.as_deref().unwrap_or("N/A")));
  let pdf_link = paper.pdf_link.as_deref().unwrap_or("No PDF Link");
  out.push_str(&format!("    PDF Link  : {pdf_link}\n"));

  out.push('\n');
  out.push_str(&"-".repeat(WRAP_WIDTH));
  out.push('\n');
}

/// Appends the title prefixed by `lead`, wrapping on whitespace so no line
/// exceeds [`WRAP_WIDTH`] unless a single word does.
fn wrap_title(out: &mut String, lead: &str, title: &str) {
  let mut line = String::from(lead);
  let mut line_is_bare = true;

  for word in title.split_whitespace() {
    if !line_is_bare && line.len() + word.len() + 1 > WRAP_WIDTH {
      out.push_str(&line);
      out.push('\n');
      line = String::from(TITLE_INDENT);
      line_is_bare = true;
    }
    if !line_is_bare {
      line.push(' ');
    }
    line.push_str(word);
    line_is_bare = false;
  }

  out.push_str(&line);
  out.push('\n');
}
