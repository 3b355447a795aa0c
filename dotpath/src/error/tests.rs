//! Unit tests for error construction, display and aggregation.

use rstest::rstest;
use std::sync::Arc;

use super::DotpathError;

#[rstest]
#[case::not_found(
    DotpathError::path_not_found("c", "a.b.c"),
    "path 'a.b.c' not found: missing segment 'c'"
)]
#[case::conflict(
    DotpathError::path_conflict("y", "x"),
    "cannot set 'y': 'x' does not hold a mapping"
)]
#[case::invalid_input(
    DotpathError::InvalidInput { argument: 2, found: "int" },
    "argument 2 is not a mapping (found int)"
)]
#[case::empty_delimiter(DotpathError::EmptyDelimiter, "path delimiter must not be empty")]
fn renders_messages(#[case] err: DotpathError, #[case] expected: &str) {
    assert_eq!(err.to_string(), expected);
}

#[test]
fn single_owned_error_is_unwrapped() {
    let outcome = DotpathError::try_aggregate(vec![DotpathError::invalid_input_arc(1, "bool")]);
    assert!(
        matches!(outcome, Some(DotpathError::InvalidInput { argument: 1, .. })),
        "expected InvalidInput, got {outcome:?}"
    );
}

#[test]
fn single_shared_error_stays_aggregated() {
    let shared = DotpathError::invalid_input_arc(1, "bool");
    let outcome = DotpathError::try_aggregate(vec![Arc::clone(&shared)]);
    match outcome {
        Some(DotpathError::Aggregate(aggregate)) => assert_eq!(aggregate.len(), 1),
        other => panic!("expected Aggregate, got {other:?}"),
    }
}

#[test]
fn multiple_errors_are_numbered() {
    let outcome = DotpathError::try_aggregate(vec![
        DotpathError::invalid_input_arc(1, "int"),
        DotpathError::invalid_input_arc(3, "string"),
    ]);
    let Some(DotpathError::Aggregate(aggregate)) = outcome else {
        panic!("expected Aggregate");
    };
    let display = aggregate.to_string();
    assert!(display.starts_with("1: argument 1"), "got {display}");
    assert!(display.contains("\n2: argument 3"), "got {display}");
    let owned: Vec<_> = aggregate.into_iter().collect();
    assert_eq!(owned.len(), 2);
}

#[test]
fn try_aggregate_none_on_empty() {
    assert!(DotpathError::try_aggregate(Vec::<Arc<DotpathError>>::new()).is_none());
}

#[test]
fn json_errors_become_decode_failures() {
    let Err(source) = serde_json::from_str::<serde_json::Value>("{") else {
        panic!("expected a parse failure");
    };
    let err = DotpathError::from(source);
    assert!(
        matches!(&err, DotpathError::Decode { path, .. } if path == "json"),
        "unexpected error: {err:?}"
    );
}
