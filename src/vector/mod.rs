//! # Sparse vector
//!
//! Wrapping a `HashMap` from dimension keys to values. Dimensions that are not stored are zero.
use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map::{IntoIter, Iter, IterMut, Keys, Values};
use std::fmt;
use std::fmt::Display;
use std::hash::Hash;

use itertools::Itertools;
use num_traits::{One, Zero};

use crate::number::DefaultNumber;

pub mod ops;
pub mod unify;


/// A sparse vector keyed by arbitrary hashable dimensions.
///
/// Values that are explicitly set to zero stay stored. They count for `len` and `is_empty`, and
/// are visited when iterating, but contribute nothing to any magnitude or distance.
#[derive(Clone, Debug)]
pub struct SparseVector<K, V = DefaultNumber> {
    data: HashMap<K, V>,
}

impl<K, V> SparseVector<K, V> {
    /// Create an empty vector.
    #[must_use]
    pub fn new() -> Self {
        Self { data: HashMap::new(), }
    }

    /// Number of values stored, including explicit zeros.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether no value is stored at all.
    ///
    /// A vector with a single dimension explicitly set to zero is not empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Stored dimensions, in no particular order.
    pub fn keys(&self) -> Keys<K, V> {
        self.data.keys()
    }

    /// Stored values, in the same order as `keys`.
    pub fn values(&self) -> Values<K, V> {
        self.data.values()
    }

    /// Iterate over the stored (dimension, value) pairs.
    pub fn iter(&self) -> Iter<K, V> {
        self.data.iter()
    }

    /// Iterate over the stored (dimension, value) pairs, with mutable access to the values.
    pub fn iter_mut(&mut self) -> IterMut<K, V> {
        self.data.iter_mut()
    }

    /// Unwrap the underlying map.
    pub fn into_map(self) -> HashMap<K, V> {
        self.data
    }
}

impl<K: Hash + Eq, V> SparseVector<K, V> {
    /// Create a vector from a copy of existing data.
    ///
    /// # Arguments
    ///
    /// * `data`: Map from dimension to value. Is only read; the vector owns its own copy.
    #[must_use]
    pub fn from_map(data: &HashMap<K, V>) -> Self
    where
        K: Clone,
        V: Clone,
    {
        Self { data: data.clone(), }
    }

    /// Create a `SparseVector` representation of a standard basis unit vector.
    ///
    /// # Arguments
    ///
    /// * `key`: Only dimension where there should be a 1.
    #[must_use]
    pub fn standard_basis_vector(key: K) -> Self
    where
        V: One,
    {
        let mut data = HashMap::with_capacity(1);
        data.insert(key, V::one());

        Self { data, }
    }

    /// Retrieve the value at a dimension.
    ///
    /// # Return value
    ///
    /// The stored value, or zero if nothing is stored for this dimension.
    pub fn get<Q>(&self, key: &Q) -> V
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Zero + Clone,
    {
        match self.data.get(key) {
            Some(value) => value.clone(),
            None => V::zero(),
        }
    }

    /// Set the value at a dimension, overwriting any previous value.
    ///
    /// Setting a value to zero stores that zero explicitly; use `remove` to drop a dimension.
    pub fn set(&mut self, key: K, value: V) {
        self.data.insert(key, value);
    }

    /// Whether a value, possibly zero, is stored for a dimension.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.data.contains_key(key)
    }

    /// Stop storing a dimension.
    ///
    /// # Return value
    ///
    /// The value that was stored, if any.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.data.remove(key)
    }
}

impl<K, V> Default for SparseVector<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq, V: PartialEq> PartialEq for SparseVector<K, V> {
    /// Vectors are equal when they store the same values for the same dimensions.
    ///
    /// An explicitly stored zero is not equal to an absent dimension.
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<K: Hash + Eq, V: Eq> Eq for SparseVector<K, V> {}

impl<K, V> From<HashMap<K, V>> for SparseVector<K, V> {
    fn from(data: HashMap<K, V>) -> Self {
        Self { data, }
    }
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for SparseVector<K, V> {
    /// Later values overwrite earlier values for the same dimension.
    fn from_iter<I: IntoIterator<Item=(K, V)>>(iter: I) -> Self {
        Self { data: iter.into_iter().collect(), }
    }
}

impl<K: Hash + Eq, V> Extend<(K, V)> for SparseVector<K, V> {
    fn extend<I: IntoIterator<Item=(K, V)>>(&mut self, iter: I) {
        self.data.extend(iter);
    }
}

impl<K, V> IntoIterator for SparseVector<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a SparseVector<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<K: Display, V: Display> Display for SparseVector<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        write!(f, "{}", self.data.iter().format_with(", ", |(key, value), g| {
            g(&format_args!("({} {})", key, value))
        }))?;
        write!(f, "]")
    }
}
