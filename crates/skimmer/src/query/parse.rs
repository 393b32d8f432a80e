//! Recursive-descent parser for tokenized queries.
//!
//! Grammar:
//!
//! ```text
//! expr := term (("AND" | "OR") term)*
//! term := field_term | "(" expr ")"
//! ```
//!
//! The operator repetition in `expr` is combined as a left fold: `AND` and
//! `OR` carry equal precedence, and each operator applies to everything
//! parsed so far. `a OR b AND c` therefore becomes `And(Or(a, b), c)`.
//! Parenthesized groups parse recursively and enter the enclosing fold as
//! one opaque term, which is the only way to force a different grouping.

use tracing::trace;

use crate::{
  error::{Result, SkimmerError},
  query::{predicate::Predicate, token::Token},
};

/// Parses a token sequence into a predicate tree.
///
/// # Errors
///
/// - [`SkimmerError::InvalidToken`] for a chunk that lexed as field-shaped
///   but has no recognized field prefix.
/// - [`SkimmerError::UnexpectedToken`] for a token the grammar does not
///   allow at its position, including trailing input after a complete
///   expression.
/// - [`SkimmerError::UnexpectedEnd`] when the sequence stops where the
///   grammar required more, e.g. after a trailing operator.
///
/// # Examples
///
/// ```
/// use skimmer::query::{parse::parse, predicate::Predicate, token::tokenize};
///
/// let predicate = parse(&tokenize("ti:a OR ti:b AND ti:c"))?;
/// assert!(matches!(predicate, Predicate::And(..)));
/// # Ok::<(), skimmer::error::SkimmerError>(())
/// ```
pub fn parse(tokens: &[Token]) -> Result<Predicate> {
  let mut parser = Parser { tokens, position: 0 };
  let predicate = parser.expression()?;
  match parser.next_token() {
    Some(trailing) => Err(SkimmerError::UnexpectedToken(trailing.to_string())),
    None => {
      trace!("compiled predicate: {predicate:?}");
      Ok(predicate)
    },
  }
}

/// Cursor over the token sequence being parsed.
struct Parser<'t> {
  /// The full token sequence.
  tokens:   &'t [Token],
  /// Index of the next token to consume.
  position: usize,
}

impl Parser<'_> {
  /// Returns the next token without consuming it.
  fn peek(&self) -> Option<&Token> {
    self.tokens.get(self.position)
  }

  /// Consumes and returns the next token.
  fn next_token(&mut self) -> Option<Token> {
    let token = self.tokens.get(self.position).cloned();
    if token.is_some() {
      self.position += 1;
    }
    token
  }

  /// `expr := term (("AND" | "OR") term)*`, combined as a left fold.
  fn expression(&mut self) -> Result<Predicate> {
    let mut combined = self.term()?;
    loop {
      match self.peek() {
        Some(Token::And) => {
          self.position += 1;
          let right = self.term()?;
          combined = Predicate::And(Box::new(combined), Box::new(right));
        },
        Some(Token::Or) => {
          self.position += 1;
          let right = self.term()?;
          combined = Predicate::Or(Box::new(combined), Box::new(right));
        },
        _ => return Ok(combined),
      }
    }
  }

  /// `term := field_term | "(" expr ")"`
  fn term(&mut self) -> Result<Predicate> {
    match self.next_token() {
      Some(Token::Term(term)) => Ok(Predicate::Leaf(term)),
      Some(Token::LParen) => {
        let inner = self.expression()?;
        match self.next_token() {
          Some(Token::RParen) => Ok(inner),
          Some(other) => Err(SkimmerError::UnexpectedToken(other.to_string())),
          None => Err(SkimmerError::UnexpectedEnd),
        }
      },
      Some(Token::Word(word)) => Err(SkimmerError::InvalidToken(word)),
      Some(other) => Err(SkimmerError::UnexpectedToken(other.to_string())),
      None => Err(SkimmerError::UnexpectedEnd),
    }
  }
}
