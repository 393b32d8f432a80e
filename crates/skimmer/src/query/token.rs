//! Tokenizer for the query mini-language.
//!
//! Lexing is a single left-to-right pass that repeatedly matches the
//! longest recognizable pattern at each position: operators, parentheses,
//! and `prefix:value` field terms, with double quotes allowing spaces in a
//! value. Whitespace separates tokens and is never itself a token.
//!
//! The tokenizer never fails. Text that matches nothing (bare words,
//! stray punctuation) is dropped from the stream, with a warning logged
//! so dropped input is at least visible. The one exception is a
//! field-shaped chunk whose prefix is not a recognized field (`xx:"foo"`):
//! that survives as [`Token::Word`] so the parser can reject the query and
//! name the offending token, instead of silently matching nothing.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::warn;

use crate::query::predicate::FieldTerm;

lazy_static! {
  /// Master lexeme pattern; alternatives ordered so quoted field values
  /// win over unquoted ones at the same position.
  static ref LEXEME: Regex =
    Regex::new(r#"(?i)\(|\)|\b(?:AND|OR)\b|\w+:"[^"]*"|\w+:[^\s()]+"#).unwrap();
}

/// One lexical unit of a query string.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
  /// The `AND` operator.
  And,
  /// The `OR` operator.
  Or,
  /// An opening parenthesis.
  LParen,
  /// A closing parenthesis.
  RParen,
  /// A field term with a recognized field prefix, decoded during lexing.
  Term(FieldTerm),
  /// A field-shaped chunk with an unrecognized prefix, kept verbatim so
  /// the parser can reject it by name.
  Word(String),
}

impl fmt::Display for Token {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::And => write!(f, "AND"),
      Self::Or => write!(f, "OR"),
      Self::LParen => write!(f, "("),
      Self::RParen => write!(f, ")"),
      Self::Term(term) => write!(f, "{term}"),
      Self::Word(word) => write!(f, "{word}"),
    }
  }
}

/// Lexes a query string into an ordered token sequence.
///
/// Operators and field prefixes are case-insensitive. Unrecognized text is
/// dropped (see the module docs for the `Word` exception); callers decide
/// whether an empty result is an error.
///
/// # Examples
///
/// ```
/// use skimmer::query::token::{tokenize, Token};
///
/// let tokens = tokenize(r#"ti:"time series" and year:2021"#);
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[1], Token::And);
/// ```
pub fn tokenize(query: &str) -> Vec<Token> {
  let mut tokens = Vec::new();
  let mut scanned_to = 0;

  for lexeme in LEXEME.find_iter(query) {
    let skipped = query[scanned_to..lexeme.start()].trim();
    if !skipped.is_empty() {
      warn!("dropping unrecognized query text: {skipped:?}");
    }
    scanned_to = lexeme.end();
    tokens.push(classify(lexeme.as_str()));
  }

  let skipped = query[scanned_to..].trim();
  if !skipped.is_empty() {
    warn!("dropping unrecognized query text: {skipped:?}");
  }

  tokens
}

/// Maps one matched lexeme onto its token.
fn classify(lexeme: &str) -> Token {
  match lexeme {
    "(" => Token::LParen,
    ")" => Token::RParen,
    _ if lexeme.eq_ignore_ascii_case("and") => Token::And,
    _ if lexeme.eq_ignore_ascii_case("or") => Token::Or,
    _ => match FieldTerm::decode(lexeme) {
      Some(term) => Token::Term(term),
      None => Token::Word(lexeme.to_string()),
    },
  }
}
