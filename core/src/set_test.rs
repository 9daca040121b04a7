//! Tests for the set-like helpers

use super::*;
use crate::vec;
use pretty_assertions::assert_eq;

#[derive(Debug, Clone, PartialEq)]
struct Point {
    x: f64,
    y: f64,
}

fn pt(x: f64, y: f64) -> Point {
    Point { x, y }
}

// ============================================================================
// contains Tests
// ============================================================================

#[test]
fn test_contains() {
    assert!(contains(&[1, 2, 3], &2));
    assert!(!contains(&[1, 2, 3], &4));
    assert!(!contains(&[] as &[i32], &1));
}

#[test]
fn test_contains_uses_partial_eq() {
    let points = [pt(0.0, 0.0), pt(1.5, -2.0)];
    assert!(contains(&points, &pt(1.5, -2.0)));
    assert!(!contains(&points, &pt(1.5, 2.0)));

    // NaN never compares equal, so it is never contained.
    assert!(!contains(&[f64::NAN], &f64::NAN));
}

// ============================================================================
// difference Tests
// ============================================================================

#[test]
fn test_difference() {
    assert_eq!(difference(&[1, 2, 3, 4], &[2, 4]), vec![1, 3]);
    assert_eq!(difference(&[1, 2, 3], &[1, 2, 3]), Vec::<i32>::new());
    assert_eq!(difference(&[] as &[i32], &[1, 2]), Vec::<i32>::new());
}

#[test]
fn test_difference_with_empty_other_is_identity() {
    let seq = ["c", "a", "b", "a"];
    assert_eq!(difference(&seq, &[]), seq.to_vec());
}

#[test]
fn test_difference_keeps_order_and_duplicates() {
    assert_eq!(difference(&[3, 1, 3, 2, 1], &[2]), vec![3, 1, 3, 1]);
}

#[test]
fn test_difference_excludes_everything_in_other() {
    let a = [5, 1, 4, 1, 5, 9, 2, 6];
    let b = [1, 9];
    let result = difference(&a, &b);

    for x in &result {
        assert!(contains(&a, x));
        assert!(!contains(&b, x));
    }
    assert_eq!(result, vec![5, 4, 5, 2, 6]);
}

// ============================================================================
// intersection Tests
// ============================================================================

#[test]
fn test_intersection() {
    assert_eq!(intersection(&[1, 2, 3], &[5, 2, 1, 4]), vec![1, 2]);
    assert_eq!(intersection(&[1, 2, 3], &[4, 5]), Vec::<i32>::new());
    assert_eq!(intersection(&[1, 2, 3], &[]), Vec::<i32>::new());
}

#[test]
fn test_intersection_with_self_is_identity() {
    let seq = [2, 7, 2, 8];
    assert_eq!(intersection(&seq, &seq), seq.to_vec());
}

#[test]
fn test_intersection_keeps_each_matching_occurrence() {
    assert_eq!(intersection(&[1, 1, 2, 1], &[1]), vec![1, 1, 1]);
}

#[test]
fn test_intersection_with_structs() {
    let a = [pt(0.0, 0.0), pt(1.0, 1.0), pt(2.0, 2.0)];
    let b = [pt(2.0, 2.0), pt(0.0, 0.0)];
    assert_eq!(intersection(&a, &b), vec![pt(0.0, 0.0), pt(2.0, 2.0)]);
}
