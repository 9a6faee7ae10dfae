//! # Combining vectors of different types
//!
//! Before two vectors with different key or value types can be added, subtracted or compared,
//! both are converted to the common type of their elements. See `number::promotion` for which
//! types have a common type.
use std::hash::Hash;

use crate::number::promotion::{CommonType, Promote};
use crate::vector::SparseVector;

impl<K, V> SparseVector<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    /// Convert the values of this vector to the common type with `W`.
    #[must_use]
    pub fn promote<W>(&self) -> SparseVector<K, CommonType<V, W>>
    where
        V: Promote<W>,
    {
        self.iter()
            .map(|(key, value)| (key.clone(), value.clone().promote_left()))
            .collect()
    }
}

/// Convert two vectors to the common type of their values.
///
/// An empty vector converts trivially, so the result types are those of the non-empty vector
/// whenever the other vector holds a type that it promotes into.
///
/// # Return value
///
/// Copies of both vectors, in the order of the arguments.
pub fn common_type<K, V, W>(
    left: &SparseVector<K, V>,
    right: &SparseVector<K, W>,
) -> (SparseVector<K, CommonType<V, W>>, SparseVector<K, CommonType<V, W>>)
where
    K: Hash + Eq + Clone,
    V: Promote<W> + Clone,
    W: Clone,
{
    let right = right.iter()
        .map(|(key, value)| (key.clone(), V::promote_right(value.clone())))
        .collect();

    (left.promote::<W>(), right)
}

/// Convert two vectors to the common type of both their keys and their values.
///
/// Promotions are lossless and therefore injective, so no two keys of the same vector are merged.
pub fn common_key_type<K, L, V, W>(
    left: &SparseVector<K, V>,
    right: &SparseVector<L, W>,
) -> (
    SparseVector<CommonType<K, L>, CommonType<V, W>>,
    SparseVector<CommonType<K, L>, CommonType<V, W>>,
)
where
    K: Promote<L> + Clone,
    L: Clone,
    CommonType<K, L>: Hash + Eq,
    V: Promote<W> + Clone,
    W: Clone,
{
    let left = left.iter()
        .map(|(key, value)| (key.clone().promote_left(), value.clone().promote_left()))
        .collect();
    let right = right.iter()
        .map(|(key, value)| (K::promote_right(key.clone()), V::promote_right(value.clone())))
        .collect();

    (left, right)
}
