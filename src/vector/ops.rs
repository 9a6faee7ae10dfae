//! # Arithmetic
//!
//! Vector addition and subtraction, multiplication and division by a scalar, and scaling into
//! exact rationals.
//!
//! The binary operators produce a new vector and never change their operands. They are
//! implemented both for owned vectors and for references; the owned variants reuse the storage of
//! the left operand.
use std::collections::hash_map::Entry;
use std::hash::Hash;
use std::mem;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::Zero;
use relp_num::RationalBig;

use crate::error::ArithmeticError;
use crate::number::Number;
use crate::number::rational::{divide_exact, ExactRational};
use crate::vector::SparseVector;

impl<K, V> SparseVector<K, V>
where
    K: Hash + Eq + Clone,
    V: Number,
{
    /// Add the multiple of another vector to this vector.
    ///
    /// # Arguments
    ///
    /// * `multiple`: Constant that all elements of the `other` vector are multiplied with.
    /// * `other`: Vector to add a multiple of to this vector.
    pub fn add_multiple_of(&mut self, multiple: &V, other: &SparseVector<K, V>) {
        for (key, value) in &other.data {
            let term = value.clone() * multiple.clone();
            match self.data.entry(key.clone()) {
                Entry::Occupied(mut entry) => {
                    let current = mem::replace(entry.get_mut(), V::zero());
                    *entry.get_mut() = current + term;
                },
                Entry::Vacant(entry) => {
                    entry.insert(term);
                },
            }
        }
    }

    /// Divide each element of the vector by a value.
    ///
    /// # Arguments
    ///
    /// * `divisor`: Value to divide by.
    ///
    /// # Return value
    ///
    /// A new vector. An empty vector is returned as is, whatever the divisor.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` if the divisor is zero and the number type can't represent the quotient.
    /// Floats produce infinities and NaN instead.
    pub fn divide(&self, divisor: &V) -> Result<Self, ArithmeticError> {
        self.data.iter()
            .map(|(key, value)| Ok((key.clone(), value.clone().checked_divide(divisor)?)))
            .collect()
    }

    /// Scale this vector into exact rationals.
    ///
    /// Each value is converted to a rational number without loss and divided exactly by the
    /// converted `divisor`, giving fractions instead of floating point approximations. An empty
    /// vector scales to an empty vector, whatever the divisor.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` if the divisor is zero, `NotFinite` if the divisor or any value is a NaN or
    /// infinite float. Neither applies to an empty vector.
    pub fn rational_scale(
        &self,
        divisor: &V,
    ) -> Result<SparseVector<K, RationalBig>, ArithmeticError>
    where
        V: ExactRational,
    {
        if self.is_empty() {
            return Ok(SparseVector::new());
        }

        let divisor = divisor.to_rational()?;
        if divisor.is_zero() {
            tracing::debug!(len = self.len(), "rational scaling by zero");
            return Err(ArithmeticError::DivisionByZero);
        }

        self.data.iter()
            .map(|(key, value)| Ok((key.clone(), divide_exact(value.to_rational()?, &divisor)?)))
            .collect()
    }
}

impl<K, V> AddAssign<&SparseVector<K, V>> for SparseVector<K, V>
where
    K: Hash + Eq + Clone,
    V: Number,
{
    fn add_assign(&mut self, rhs: &SparseVector<K, V>) {
        for (key, value) in &rhs.data {
            match self.data.entry(key.clone()) {
                Entry::Occupied(mut entry) => {
                    let current = mem::replace(entry.get_mut(), V::zero());
                    *entry.get_mut() = current + value.clone();
                },
                Entry::Vacant(entry) => {
                    entry.insert(value.clone());
                },
            }
        }
    }
}

impl<K, V> SubAssign<&SparseVector<K, V>> for SparseVector<K, V>
where
    K: Hash + Eq + Clone,
    V: Number,
{
    /// Dimensions only stored in `rhs` get the negation of its value.
    fn sub_assign(&mut self, rhs: &SparseVector<K, V>) {
        for (key, value) in &rhs.data {
            match self.data.entry(key.clone()) {
                Entry::Occupied(mut entry) => {
                    let current = mem::replace(entry.get_mut(), V::zero());
                    *entry.get_mut() = current - value.clone();
                },
                Entry::Vacant(entry) => {
                    entry.insert(V::zero() - value.clone());
                },
            }
        }
    }
}

impl<K, V> MulAssign<V> for SparseVector<K, V>
where
    V: Number,
{
    fn mul_assign(&mut self, rhs: V) {
        for value in self.data.values_mut() {
            let current = mem::replace(value, V::zero());
            *value = current * rhs.clone();
        }
    }
}

impl<K, V> DivAssign<V> for SparseVector<K, V>
where
    K: Hash + Eq + Clone,
    V: Number,
{
    /// # Panics
    ///
    /// When `divide` would fail, see there. The vector is left unchanged in that case.
    fn div_assign(&mut self, rhs: V) {
        match self.divide(&rhs) {
            Ok(quotient) => *self = quotient,
            Err(error) => panic!("{}", error),
        }
    }
}

/// Implement a binary operator between vectors for all combinations of owned and borrowed
/// operands, through the corresponding assigning operator.
macro_rules! vector_operator {
    ($op_trait:ident, $op:ident, $assign:ident) => {
        impl<K, V> $op_trait<&SparseVector<K, V>> for &SparseVector<K, V>
        where
            K: Hash + Eq + Clone,
            V: Number,
        {
            type Output = SparseVector<K, V>;

            fn $op(self, rhs: &SparseVector<K, V>) -> Self::Output {
                let mut result = self.clone();
                result.$assign(rhs);
                result
            }
        }

        impl<K, V> $op_trait<SparseVector<K, V>> for SparseVector<K, V>
        where
            K: Hash + Eq + Clone,
            V: Number,
        {
            type Output = SparseVector<K, V>;

            fn $op(mut self, rhs: SparseVector<K, V>) -> Self::Output {
                self.$assign(&rhs);
                self
            }
        }

        impl<K, V> $op_trait<&SparseVector<K, V>> for SparseVector<K, V>
        where
            K: Hash + Eq + Clone,
            V: Number,
        {
            type Output = SparseVector<K, V>;

            fn $op(mut self, rhs: &SparseVector<K, V>) -> Self::Output {
                self.$assign(rhs);
                self
            }
        }

        impl<K, V> $op_trait<SparseVector<K, V>> for &SparseVector<K, V>
        where
            K: Hash + Eq + Clone,
            V: Number,
        {
            type Output = SparseVector<K, V>;

            fn $op(self, rhs: SparseVector<K, V>) -> Self::Output {
                $op_trait::$op(self, &rhs)
            }
        }
    };
}
vector_operator!(Add, add, add_assign);
vector_operator!(Sub, sub, sub_assign);

/// Implement a scalar operator for owned and borrowed vectors.
macro_rules! scalar_operator {
    ($op_trait:ident, $op:ident, $assign:ident) => {
        impl<K, V> $op_trait<V> for &SparseVector<K, V>
        where
            K: Hash + Eq + Clone,
            V: Number,
        {
            type Output = SparseVector<K, V>;

            fn $op(self, rhs: V) -> Self::Output {
                let mut result = self.clone();
                result.$assign(rhs);
                result
            }
        }

        impl<K, V> $op_trait<V> for SparseVector<K, V>
        where
            K: Hash + Eq + Clone,
            V: Number,
        {
            type Output = SparseVector<K, V>;

            fn $op(mut self, rhs: V) -> Self::Output {
                self.$assign(rhs);
                self
            }
        }
    };
}
scalar_operator!(Mul, mul, mul_assign);
scalar_operator!(Div, div, div_assign);

impl<K, V> Neg for SparseVector<K, V>
where
    K: Hash + Eq,
    V: Neg<Output=V>,
{
    type Output = SparseVector<K, V>;

    fn neg(self) -> Self::Output {
        Self { data: self.data.into_iter().map(|(key, value)| (key, -value)).collect(), }
    }
}

impl<K, V> Neg for &SparseVector<K, V>
where
    K: Hash + Eq + Clone,
    V: Neg<Output=V> + Clone,
{
    type Output = SparseVector<K, V>;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}
