use rstest::rstest;

use sparse_features::distance::{euclidean_distance, infinite_distance, taxicab_distance, zero_distance};
use sparse_features::SparseVector;

type T = SparseVector<u32, i64>;

fn vector(data: &[(u32, i64)]) -> T {
    data.iter().cloned().collect()
}

#[rstest]
#[case(vector(&[]), vector(&[]))]
#[case(vector(&[(1, 5)]), vector(&[]))]
#[case(vector(&[(1, 5), (2, -3)]), vector(&[(2, 3), (9, 1)]))]
#[case(vector(&[(0, 0), (1, 7)]), vector(&[(0, -2), (4, 0)]))]
#[case(vector(&[(3, -1), (4, -1), (5, -1)]), vector(&[(3, 1), (4, 1), (5, 1)]))]
fn algebra(#[case] left: T, #[case] right: T) {
    // Commutative addition
    assert_eq!(&left + &right, &right + &left);
    // Subtraction adds the negation
    assert_eq!(&left - &right, &left + &(&right * -1));
    // Scalar multiplication distributes
    assert_eq!((&left + &right) * 7, &left * 7 + &right * 7);
}

#[rstest]
#[case(vector(&[]), vector(&[]))]
#[case(vector(&[(1, 5)]), vector(&[]))]
#[case(vector(&[(1, 5), (2, -3)]), vector(&[(2, 3), (9, 1)]))]
#[case(vector(&[(0, 0), (1, 7)]), vector(&[(0, -2), (4, 0)]))]
#[case(vector(&[(3, -1), (4, -1), (5, -1)]), vector(&[(3, 1), (4, 1), (5, 1)]))]
fn metrics(#[case] left: T, #[case] right: T) {
    assert_eq!(euclidean_distance(&left, &left), 0_f64);
    assert_eq!(zero_distance(&left, &left), 0);
    assert_eq!(taxicab_distance(&left, &right), taxicab_distance(&right, &left));
    assert!(infinite_distance(&left, &right) <= euclidean_distance(&left, &right));
    assert!(euclidean_distance(&left, &right) <= taxicab_distance(&left, &right));
}

#[rstest]
#[case(vector(&[(1, 5)]), 1)]
#[case(vector(&[(1, 5), (2, -3)]), 2)]
fn absent_dimensions_are_zero(#[case] v: T, #[case] len: usize) {
    assert_eq!(v.len(), len);
    for key in 100..110 {
        assert_eq!(v.get(&key), 0);
        assert!(!v.contains_key(&key));
    }
    assert!(!v.is_empty());
}
