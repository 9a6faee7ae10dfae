//! # Distances between sparse vectors
//!
//! All metrics treat dimensions that are not stored as zero and compute in `f64`, whatever the
//! value type of the vectors.
//!
//! The taxicab, Euclidean and infinite distances need the difference at each dimension in the
//! union of both key sets. That union is traversed in two phases: first all dimensions of the left
//! vector, then those dimensions of the right vector that the left vector doesn't store.
use std::fmt;
use std::fmt::Display;
use std::hash::Hash;
use std::str::FromStr;

use num_traits::{ToPrimitive, Zero};

use crate::error::ParseMetricError;
use crate::number::as_float;
use crate::vector::SparseVector;


/// A cosine larger than `1 - COSINE_ROUNDING_TOLERANCE` is considered to be exactly one.
pub const COSINE_ROUNDING_TOLERANCE: f64 = 1e-15;

/// Fold over the differences `left[k] - right[k]` for each dimension `k` stored in either vector.
///
/// Each dimension is visited exactly once.
fn fold_differences<K, V, A>(
    left: &SparseVector<K, V>,
    right: &SparseVector<K, V>,
    initial: A,
    mut step: impl FnMut(A, f64) -> A,
) -> A
where
    K: Hash + Eq,
    V: Zero + Clone + ToPrimitive,
{
    let mut accumulator = initial;
    for (key, value) in left {
        accumulator = step(accumulator, as_float(value) - as_float(&right.get(key)));
    }
    for (key, value) in right {
        if !left.contains_key(key) {
            accumulator = step(accumulator, -as_float(value));
        }
    }

    accumulator
}

/// Inner product, summed over the dimensions stored in `left`.
///
/// Dimensions only stored in `right` meet an implicit zero in `left` and are skipped.
pub fn dot_product<K, V>(left: &SparseVector<K, V>, right: &SparseVector<K, V>) -> f64
where
    K: Hash + Eq,
    V: Zero + Clone + ToPrimitive,
{
    left.iter()
        .map(|(key, value)| as_float(value) * as_float(&right.get(key)))
        .sum()
}

/// Sum of the squares of all stored values.
pub fn squared_norm<K, V: ToPrimitive>(vector: &SparseVector<K, V>) -> f64 {
    vector.values()
        .map(as_float)
        .map(|value| value * value)
        .sum()
}

/// Euclidean length of the vector.
pub fn norm<K, V: ToPrimitive>(vector: &SparseVector<K, V>) -> f64 {
    squared_norm(vector).sqrt()
}

/// One minus the cosine of the angle between two vectors.
///
/// The result lies in `[0, 2]`: zero for vectors pointing the same way, two for opposite vectors.
///
/// If either vector has length zero, the angle is undefined and the result is NaN. This is not an
/// error; the NaN propagates into whatever uses the distance.
pub fn cosine_distance<K, V>(left: &SparseVector<K, V>, right: &SparseVector<K, V>) -> f64
where
    K: Hash + Eq,
    V: Zero + Clone + ToPrimitive,
{
    let dot = dot_product(left, right);
    let left_squared = squared_norm(left);
    let right_squared = squared_norm(right);
    if left_squared.is_zero() || right_squared.is_zero() {
        tracing::warn!(
            left_len = left.len(),
            right_len = right.len(),
            "cosine distance with a zero length vector is undefined",
        );
    }

    let cosine = dot / (left_squared.sqrt() * right_squared.sqrt());
    // Rounding can push the cosine of parallel vectors slightly over one
    let cosine = if cosine > 1_f64 - COSINE_ROUNDING_TOLERANCE { 1_f64 } else { cosine };

    1_f64 - cosine
}

/// Number of dimensions where exactly one of the two vectors is nonzero.
///
/// Zero-ness is determined by value, so an explicitly stored zero counts the same as an absent
/// dimension.
pub fn zero_distance<K, V>(left: &SparseVector<K, V>, right: &SparseVector<K, V>) -> usize
where
    K: Hash + Eq,
    V: Zero + Clone,
{
    let only_left = left.keys()
        .filter(|&key| !left.get(key).is_zero() && right.get(key).is_zero())
        .count();
    let only_right = right.keys()
        .filter(|&key| !right.get(key).is_zero() && left.get(key).is_zero())
        .count();

    only_left + only_right
}

/// Sum of the absolute differences, also known as the Manhattan distance.
pub fn taxicab_distance<K, V>(left: &SparseVector<K, V>, right: &SparseVector<K, V>) -> f64
where
    K: Hash + Eq,
    V: Zero + Clone + ToPrimitive,
{
    fold_differences(left, right, 0_f64, |total, difference| total + difference.abs())
}

/// Square root of the sum of the squared differences.
pub fn euclidean_distance<K, V>(left: &SparseVector<K, V>, right: &SparseVector<K, V>) -> f64
where
    K: Hash + Eq,
    V: Zero + Clone + ToPrimitive,
{
    fold_differences(left, right, 0_f64, |total, difference| total + difference * difference)
        .sqrt()
}

/// Largest absolute difference, also known as the Chebyshev distance.
///
/// Zero for two empty vectors.
pub fn infinite_distance<K, V>(left: &SparseVector<K, V>, right: &SparseVector<K, V>) -> f64
where
    K: Hash + Eq,
    V: Zero + Clone + ToPrimitive,
{
    fold_differences(left, right, 0_f64, |maximum, difference| maximum.max(difference.abs()))
}

/// Choice of one of the distance functions in this module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    /// See `cosine_distance`.
    Cosine,
    /// See `euclidean_distance`.
    Euclidean,
    /// See `taxicab_distance`.
    Taxicab,
    /// See `infinite_distance`.
    Infinite,
    /// See `zero_distance`.
    Zero,
}

impl Metric {
    /// All metrics.
    pub const ALL: [Metric; 5] = [
        Metric::Cosine,
        Metric::Euclidean,
        Metric::Taxicab,
        Metric::Infinite,
        Metric::Zero,
    ];

    /// Compute the distance between two vectors with this metric.
    ///
    /// The count of `zero_distance` is converted to a float.
    pub fn distance<K, V>(self, left: &SparseVector<K, V>, right: &SparseVector<K, V>) -> f64
    where
        K: Hash + Eq,
        V: Zero + Clone + ToPrimitive,
    {
        match self {
            Metric::Cosine => cosine_distance(left, right),
            Metric::Euclidean => euclidean_distance(left, right),
            Metric::Taxicab => taxicab_distance(left, right),
            Metric::Infinite => infinite_distance(left, right),
            Metric::Zero => zero_distance(left, right) as f64,
        }
    }
}

impl Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Metric::Cosine => "cosine",
            Metric::Euclidean => "euclidean",
            Metric::Taxicab => "taxicab",
            Metric::Infinite => "infinite",
            Metric::Zero => "zero",
        })
    }
}

impl FromStr for Metric {
    type Err = ParseMetricError;

    /// Case insensitive; also accepts "manhattan" and "chebyshev".
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text.trim().to_ascii_lowercase().as_str() {
            "cosine" => Ok(Metric::Cosine),
            "euclidean" => Ok(Metric::Euclidean),
            "taxicab" | "manhattan" => Ok(Metric::Taxicab),
            "infinite" | "chebyshev" => Ok(Metric::Infinite),
            "zero" => Ok(Metric::Zero),
            _ => Err(ParseMetricError::new(text)),
        }
    }
}
