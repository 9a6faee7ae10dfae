//! # Number types
//!
//! The values stored in a sparse vector. Any type that behaves like a number under addition,
//! subtraction and multiplication can be stored; division is where the number types differ. Floats
//! divide by zero to an infinity or NaN, integers and rationals can't.
use std::fmt::{Debug, Display};
use std::ops::{Add, Mul, Sub};

use num_traits::{CheckedDiv, ToPrimitive, Zero};
use relp_num::{Rational64, RationalBig};

use crate::error::ArithmeticError;

pub mod promotion;
pub mod rational;

/// The value type of a `SparseVector` when nothing else determines it.
pub type DefaultNumber = f64;

/// Operations needed to store a type in a `SparseVector` and to do arithmetic with it.
///
/// The overflow behavior of the operations is that of the type: primitive integers panic in debug
/// builds and wrap in release builds, floats follow IEEE 754.
pub trait Number:
    Zero +
    Add<Self, Output=Self> +
    Sub<Self, Output=Self> +
    Mul<Self, Output=Self> +

    PartialEq +
    Clone +
    Debug +
    Display +
{
    /// Divide this value by another.
    ///
    /// # Arguments
    ///
    /// * `divisor`: Value to divide by.
    ///
    /// # Return value
    ///
    /// The quotient. For floats, division by zero results in an infinity or NaN.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` when the type has no representation of the quotient by zero.
    fn checked_divide(self, divisor: &Self) -> Result<Self, ArithmeticError>;
}

macro_rules! integer_number {
    ($($t:ty),*) => {
        $(
            impl Number for $t {
                fn checked_divide(self, divisor: &Self) -> Result<Self, ArithmeticError> {
                    if divisor.is_zero() {
                        return Err(ArithmeticError::DivisionByZero);
                    }

                    CheckedDiv::checked_div(&self, divisor).ok_or(ArithmeticError::Overflow)
                }
            }
        )*
    }
}
integer_number!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! float_number {
    ($($t:ty),*) => {
        $(
            impl Number for $t {
                fn checked_divide(self, divisor: &Self) -> Result<Self, ArithmeticError> {
                    Ok(self / divisor)
                }
            }
        )*
    }
}
float_number!(f32, f64);

macro_rules! rational_number {
    ($($t:ty),*) => {
        $(
            impl Number for $t {
                fn checked_divide(self, divisor: &Self) -> Result<Self, ArithmeticError> {
                    if divisor.is_zero() {
                        Err(ArithmeticError::DivisionByZero)
                    } else {
                        Ok(self / divisor.clone())
                    }
                }
            }
        )*
    }
}
rational_number!(Rational64, RationalBig);

/// Value as a float, for the distance computations.
///
/// All primitive number types can be represented (possibly with rounding), a value that can't is
/// mapped to NaN such that it propagates into the distance.
pub(crate) fn as_float<V: ToPrimitive>(value: &V) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
