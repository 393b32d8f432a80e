use skimmer::{
  error::SkimmerError,
  query::{
    compile,
    parse::parse,
    predicate::{FieldTerm, Predicate},
    token::tokenize,
  },
};

use crate::titled;

/// Leaf shorthand for tree-shape assertions.
fn leaf(term: FieldTerm) -> Box<Predicate> {
  Box::new(Predicate::Leaf(term))
}

/// Parser output shapes and parser failures.
mod parsing {
  use super::*;

  #[test]
  fn operators_fold_left_to_right_without_precedence() -> crate::TestResult<()> {
    let predicate = parse(&tokenize("ti:a OR ti:b AND ti:c"))?;
    let inner_or =
      Predicate::Or(leaf(FieldTerm::Title("a".into())), leaf(FieldTerm::Title("b".into())));
    let expected = Predicate::And(Box::new(inner_or), leaf(FieldTerm::Title("c".into())));
    assert_eq!(predicate, expected);
    Ok(())
  }

  #[test]
  fn parentheses_group_into_a_single_term() -> crate::TestResult<()> {
    let predicate = parse(&tokenize("ti:a OR (ti:b AND ti:c)"))?;
    let inner_and =
      Predicate::And(leaf(FieldTerm::Title("b".into())), leaf(FieldTerm::Title("c".into())));
    let expected = Predicate::Or(leaf(FieldTerm::Title("a".into())), Box::new(inner_and));
    assert_eq!(predicate, expected);
    Ok(())
  }

  #[test]
  fn unknown_field_prefix_is_a_fatal_invalid_token() {
    match compile(r#"xx:"foo""#) {
      Err(SkimmerError::InvalidToken(token)) => assert_eq!(token, r#"xx:"foo""#),
      other => panic!("expected InvalidToken, got {other:?}"),
    }
  }

  #[test]
  fn empty_query_is_rejected() {
    assert!(matches!(compile(""), Err(SkimmerError::EmptyQuery)));
    assert!(matches!(compile("just some words"), Err(SkimmerError::EmptyQuery)));
  }

  #[test]
  fn trailing_operator_is_rejected() {
    assert!(matches!(compile("ti:a AND"), Err(SkimmerError::UnexpectedEnd)));
  }

  #[test]
  fn unbalanced_parentheses_are_rejected() {
    assert!(matches!(compile("(ti:a OR ti:b"), Err(SkimmerError::UnexpectedEnd)));
    assert!(matches!(compile("ti:a )"), Err(SkimmerError::UnexpectedToken(_))));
  }

  #[test]
  fn adjacent_terms_without_an_operator_are_rejected() {
    assert!(matches!(compile("ti:a ti:b"), Err(SkimmerError::UnexpectedToken(_))));
  }
}

/// Leaf predicate semantics per field kind.
mod matching {
  use super::*;

  #[test]
  fn title_matches_case_insensitive_substrings() -> crate::TestResult<()> {
    let predicate = compile(r#"ti:"time series""#)?;
    assert!(predicate.matches(&titled("Deep Learning for Time Series")));
    assert!(predicate.matches(&titled("TIME SERIES METHODS")));
    assert!(!predicate.matches(&titled("Convex Optimization")));
    Ok(())
  }

  #[test]
  fn empty_title_value_matches_any_titled_record() -> crate::TestResult<()> {
    let predicate = compile(r#"ti:"""#)?;
    assert!(predicate.matches(&titled("Anything At All")));
    Ok(())
  }

  #[test]
  fn author_matches_whole_names_only() -> crate::TestResult<()> {
    let mut paper = titled("Some Paper");
    paper.authors = vec!["John Doe".into(), "Jane Smith".into()];

    assert!(compile(r#"au:"john doe""#)?.matches(&paper));
    assert!(!compile(r#"au:"John""#)?.matches(&paper), "partial author names must not match");
    Ok(())
  }

  #[test]
  fn year_matches_exactly() -> crate::TestResult<()> {
    let mut paper = titled("Some Paper");
    paper.year = Some(2021);

    assert!(compile("year:2021")?.matches(&paper));
    assert!(!compile("year:2022")?.matches(&paper));
    Ok(())
  }

  #[test]
  fn category_matches_exactly_and_case_insensitively() -> crate::TestResult<()> {
    let mut paper = titled("Some Paper");
    paper.category = Some("cs.LG".into());

    assert!(compile("cat:CS.lg")?.matches(&paper));
    assert!(!compile("cat:cs")?.matches(&paper));
    Ok(())
  }

  #[test]
  fn absent_fields_never_match() -> crate::TestResult<()> {
    let paper = titled("Some Paper");
    assert!(!compile("year:2021")?.matches(&paper));
    assert!(!compile("cat:cs.LG")?.matches(&paper));
    assert!(!compile(r#"au:"john doe""#)?.matches(&paper));
    Ok(())
  }
}

/// The documented left-fold evaluation order, end to end.
mod fold_order {
  use super::*;

  #[test]
  fn or_then_and_folds_as_written() -> crate::TestResult<()> {
    let papers = vec![titled("x"), titled("y"), titled("z")];

    // (ti:"x" OR ti:"y") AND ti:"z": no single title satisfies both sides.
    let predicate = compile(r#"ti:"x" OR ti:"y" AND ti:"z""#)?;
    assert!(predicate.filter(papers).is_empty());
    Ok(())
  }

  #[test]
  fn parentheses_restore_conventional_grouping() -> crate::TestResult<()> {
    let papers = vec![titled("x"), titled("y"), titled("z")];

    let predicate = compile(r#"ti:"x" OR (ti:"y" AND ti:"z")"#)?;
    let matched = predicate.filter(papers);
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].title, "x");
    Ok(())
  }
}
