//! # Type unification
//!
//! Two vectors holding different number types can be combined after both are converted to a
//! common type that represents the values of each without loss. The common type is determined at
//! compile time: a pair of types without such a common type has no `Promote` implementation, and
//! code combining them is rejected where it is written.
//!
//! For example, `i64` and `f64` have no common type, as neither represents all values of the
//! other.
use relp_num::{Rational64, RationalBig};

/// Lossless conversion of two types into a common type.
///
/// Implemented symmetrically: if `A: Promote<B>` then `B: Promote<A>` with the same `Output`.
pub trait Promote<Rhs = Self> {
    /// Type that can represent all values of both `Self` and `Rhs`.
    type Output;

    /// Convert a value of the left-hand side type.
    fn promote_left(self) -> Self::Output;
    /// Convert a value of the right-hand side type.
    fn promote_right(rhs: Rhs) -> Self::Output;
}

/// The type that values of `A` and `B` are converted to when combined.
pub type CommonType<A, B> = <A as Promote<B>>::Output;

macro_rules! reflexive {
    ($($t:ty),*) => {
        $(
            impl Promote for $t {
                type Output = $t;

                fn promote_left(self) -> Self::Output {
                    self
                }

                fn promote_right(rhs: $t) -> Self::Output {
                    rhs
                }
            }
        )*
    }
}
reflexive!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    Rational64, RationalBig
);

/// Implement `Promote` in both directions through `From`.
macro_rules! promote {
    ($left:ty, $right:ty => $output:ty) => {
        impl Promote<$right> for $left {
            type Output = $output;

            fn promote_left(self) -> Self::Output {
                <$output>::from(self)
            }

            fn promote_right(rhs: $right) -> Self::Output {
                <$output>::from(rhs)
            }
        }

        impl Promote<$left> for $right {
            type Output = $output;

            fn promote_left(self) -> Self::Output {
                <$output>::from(self)
            }

            fn promote_right(rhs: $left) -> Self::Output {
                <$output>::from(rhs)
            }
        }
    };
}

// Signed integers
promote!(i8, i16 => i16);
promote!(i8, i32 => i32);
promote!(i8, i64 => i64);
promote!(i8, i128 => i128);
promote!(i16, i32 => i32);
promote!(i16, i64 => i64);
promote!(i16, i128 => i128);
promote!(i32, i64 => i64);
promote!(i32, i128 => i128);
promote!(i64, i128 => i128);

// Unsigned integers
promote!(u8, u16 => u16);
promote!(u8, u32 => u32);
promote!(u8, u64 => u64);
promote!(u8, u128 => u128);
promote!(u16, u32 => u32);
promote!(u16, u64 => u64);
promote!(u16, u128 => u128);
promote!(u32, u64 => u64);
promote!(u32, u128 => u128);
promote!(u64, u128 => u128);

// Mixed signedness, into the smallest signed type holding both
promote!(u8, i8 => i16);
promote!(u8, i16 => i16);
promote!(u8, i32 => i32);
promote!(u8, i64 => i64);
promote!(u16, i8 => i32);
promote!(u16, i16 => i32);
promote!(u16, i32 => i32);
promote!(u16, i64 => i64);
promote!(u32, i8 => i64);
promote!(u32, i16 => i64);
promote!(u32, i32 => i64);
promote!(u32, i64 => i64);
promote!(u64, i8 => i128);
promote!(u64, i16 => i128);
promote!(u64, i32 => i128);
promote!(u64, i64 => i128);

// Integers with floats, only where the mantissa is wide enough
promote!(i8, f32 => f32);
promote!(i16, f32 => f32);
promote!(u8, f32 => f32);
promote!(u16, f32 => f32);
promote!(i8, f64 => f64);
promote!(i16, f64 => f64);
promote!(i32, f64 => f64);
promote!(u8, f64 => f64);
promote!(u16, f64 => f64);
promote!(u32, f64 => f64);
promote!(f32, f64 => f64);
promote!(i32, f32 => f64);
promote!(u32, f32 => f64);

/// Implement `Promote` between an integer type and the arbitrary precision rational.
macro_rules! promote_rational {
    ($($t:ty),*) => {
        $(
            impl Promote<RationalBig> for $t {
                type Output = RationalBig;

                fn promote_left(self) -> Self::Output {
                    RationalBig::from(self)
                }

                fn promote_right(rhs: RationalBig) -> Self::Output {
                    rhs
                }
            }

            impl Promote<$t> for RationalBig {
                type Output = RationalBig;

                fn promote_left(self) -> Self::Output {
                    self
                }

                fn promote_right(rhs: $t) -> Self::Output {
                    RationalBig::from(rhs)
                }
            }
        )*
    }
}
promote_rational!(i8, i16, i32, i64, u8, u16, u32, u64);
