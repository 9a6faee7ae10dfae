//! # Exact rational conversion
//!
//! Values of any primitive type can be represented exactly as an arbitrary precision rational,
//! except for the non-finite floats.
use relp_num::{NonZero, RationalBig, RB};

use crate::error::ArithmeticError;

/// Conversion into an arbitrary precision rational number without loss.
pub trait ExactRational {
    /// The exact value of `self`.
    ///
    /// # Errors
    ///
    /// `NotFinite` when `self` is a NaN or infinite float.
    fn to_rational(&self) -> Result<RationalBig, ArithmeticError>;
}

macro_rules! integer_exact {
    ($($t:ty),*) => {
        $(
            impl ExactRational for $t {
                fn to_rational(&self) -> Result<RationalBig, ArithmeticError> {
                    Ok(RationalBig::from(*self))
                }
            }
        )*
    }
}
integer_exact!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! float_exact {
    ($($t:ty),*) => {
        $(
            impl ExactRational for $t {
                fn to_rational(&self) -> Result<RationalBig, ArithmeticError> {
                    if self.is_finite() {
                        Ok(RB!(*self))
                    } else {
                        tracing::debug!(value = %self, "non-finite float has no rational value");
                        Err(ArithmeticError::NotFinite(self.to_string()))
                    }
                }
            }
        )*
    }
}
float_exact!(f32, f64);

impl ExactRational for RationalBig {
    fn to_rational(&self) -> Result<RationalBig, ArithmeticError> {
        Ok(self.clone())
    }
}

/// Divide one exact rational by another.
///
/// # Errors
///
/// `DivisionByZero` if the `divisor` is zero.
pub(crate) fn divide_exact(
    value: RationalBig,
    divisor: &RationalBig,
) -> Result<RationalBig, ArithmeticError> {
    if divisor.is_not_zero() {
        Ok(value / divisor.clone())
    } else {
        Err(ArithmeticError::DivisionByZero)
    }
}

#[cfg(test)]
mod test {
    use relp_num::{RationalBig, RB};

    use crate::error::ArithmeticError;
    use crate::number::rational::{divide_exact, ExactRational};

    #[test]
    fn integers() {
        assert_eq!(3_u8.to_rational(), Ok(RB!(3)));
        assert_eq!((-7_i32).to_rational(), Ok(RB!(-7)));
        assert_eq!(0_i64.to_rational(), Ok(RB!(0)));
    }

    /// Integers that don't fit in a float's mantissa are converted without rounding.
    #[test]
    fn large_integers() {
        let value = (1_u64 << 53) + 1;
        let expected = RB!(9_007_199_254_740_992_f64) + RB!(1);
        assert_eq!(value.to_rational(), Ok(expected.clone()));
        assert_eq!((-((1_i64 << 53) + 1)).to_rational(), Ok(-expected));
    }

    #[test]
    fn integer_extremes() {
        let two_to_the_32 = RB!(4_294_967_296_f64);
        let two_to_the_64 = two_to_the_32.clone() * two_to_the_32;
        assert_eq!(u64::MAX.to_rational(), Ok(two_to_the_64.clone() - RB!(1)));
        assert_eq!(i64::MIN.to_rational(), Ok(-(two_to_the_64 / RB!(2))));
        assert_eq!(usize::MAX.to_rational(), u64::MAX.to_rational());
    }

    #[test]
    fn floats() {
        assert_eq!(0.25_f64.to_rational(), Ok(RB!(1, 4)));
        assert_eq!((-1.5_f32).to_rational(), Ok(RB!(-3, 2)));
        assert!(matches!(f64::NAN.to_rational(), Err(ArithmeticError::NotFinite(_))));
        assert!(matches!(f32::INFINITY.to_rational(), Err(ArithmeticError::NotFinite(_))));
    }

    #[test]
    fn division() {
        let third: RationalBig = divide_exact(RB!(1), &RB!(3)).unwrap();
        assert_eq!(third * RB!(3), RB!(1));
        assert_eq!(divide_exact(RB!(1), &RB!(0)), Err(ArithmeticError::DivisionByZero));
    }
}
