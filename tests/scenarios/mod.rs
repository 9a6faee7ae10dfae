use pretty_assertions::assert_eq;
use relp_num::RB;

use sparse_features::distance::{
    cosine_distance, euclidean_distance, infinite_distance, Metric, taxicab_distance, zero_distance,
};
use sparse_features::error::ArithmeticError;
use sparse_features::SparseVector;

fn vector(data: &[(&'static str, i32)]) -> SparseVector<&'static str, i32> {
    data.iter().cloned().collect()
}

#[test]
fn two_overlapping_vectors() {
    let left = vector(&[("a", 1), ("b", 2)]);
    let right = vector(&[("b", 3), ("c", 4)]);

    assert_eq!(&left + &right, vector(&[("a", 1), ("b", 5), ("c", 4)]));
    assert_eq!(&left - &right, vector(&[("a", 1), ("b", -1), ("c", -4)]));
    assert_eq!(taxicab_distance(&left, &right), 6_f64);
    assert_eq!(euclidean_distance(&left, &right), 18_f64.sqrt());
    assert_eq!(zero_distance(&left, &right), 2);
    assert_eq!(infinite_distance(&left, &right), 4_f64);
}

#[test]
fn scaling_an_empty_vector() {
    let empty = SparseVector::<&str, i32>::new();

    assert!((&empty * 5).is_empty());
    assert_eq!(empty.divide(&5), Ok(SparseVector::new()));
    assert_eq!(empty.rational_scale(&5), Ok(SparseVector::new()));
}

#[test]
fn cosine_of_parallel_and_opposite_vectors() {
    let x = vector(&[("x", 1)]);
    let minus_x = vector(&[("x", -1)]);

    assert_eq!(cosine_distance(&x, &x), 0_f64);
    assert_eq!(cosine_distance(&x, &minus_x), 2_f64);
}

#[test]
fn term_frequencies() {
    let mut document: SparseVector<String, u32> = SparseVector::new();
    for word in "the cat sat on the mat".split_whitespace() {
        let count = document.get(word);
        document.set(word.to_string(), count + 1);
    }
    let query: SparseVector<String, u32> = [("cat".to_string(), 1), ("dog".to_string(), 1)]
        .into_iter()
        .collect();

    assert_eq!(document.get("the"), 2);
    assert_eq!(document.len(), 5);
    assert_eq!(zero_distance(&document, &query), 5);

    let frequencies = document.rational_scale(&6).unwrap();
    assert_eq!(frequencies.get("the"), RB!(1, 3));
    assert_eq!(frequencies.values().cloned().fold(RB!(0), |total, value| total + value), RB!(1));
}

#[test]
fn exact_division_reports_zero() {
    let v = vector(&[("a", 1)]);

    assert_eq!(v.divide(&0), Err(ArithmeticError::DivisionByZero));
    assert_eq!(v.rational_scale(&0), Err(ArithmeticError::DivisionByZero));
}

#[test]
fn metric_from_configuration() {
    let metric: Metric = "euclidean".parse().unwrap();
    let left = vector(&[("a", 3)]);
    let right = vector(&[("b", 4)]);

    assert_eq!(metric.distance(&left, &right), 5_f64);
}
