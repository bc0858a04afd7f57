//! Integration tests for serde support.
//!
//! `Pair` serializes as a two-element sequence, so zipped results read the
//! same as a list of tuples.

#![cfg(all(feature = "serde", feature = "sequence"))]

use rstest::rstest;
use seqfn::sequence::{Pair, zip};

#[rstest]
fn test_pair_serializes_as_two_element_array() {
    let pair = Pair::new(1, "one".to_string());
    let json = serde_json::to_string(&pair).unwrap();
    assert_eq!(json, r#"[1,"one"]"#);
}

#[rstest]
fn test_pair_json_roundtrip() {
    let pair = Pair::new(3.5, vec![true, false]);
    let json = serde_json::to_string(&pair).unwrap();
    let restored: Pair<f64, Vec<bool>> = serde_json::from_str(&json).unwrap();
    assert_eq!(pair, restored);
}

#[rstest]
fn test_zipped_sequence_matches_tuple_encoding() {
    let pairs = zip(&[1, 2], &['x', 'y']);
    let tuples: Vec<(i32, char)> = vec![(1, 'x'), (2, 'y')];

    assert_eq!(
        serde_json::to_string(&pairs).unwrap(),
        serde_json::to_string(&tuples).unwrap()
    );

    let restored: Vec<Pair<i32, char>> =
        serde_json::from_str(&serde_json::to_string(&tuples).unwrap()).unwrap();
    assert_eq!(restored, pairs);
}

#[rstest]
fn test_pair_rejects_wrong_arity() {
    let result: Result<Pair<i32, i32>, _> = serde_json::from_str("[1, 2, 3]");
    assert!(result.is_err());
}
