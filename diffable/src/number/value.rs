use super::Number;
use std::fmt::{Debug, Display};

/// A Rust number type a number style can edit.
pub trait NumericValue:
    Copy + PartialEq + PartialOrd + Debug + Display + Send + Sync + 'static
{
    /// Whether the type has no fraction digits.
    const INTEGER: bool;
    /// Whether the type cannot be negative.
    const UNSIGNED: bool;
    /// Significant decimal digits the type represents faithfully.
    const PRECISION: usize;
    const MIN: Self;
    const MAX: Self;
    const ZERO: Self;

    /// Convert `number`, saturating at the type bounds.
    fn from_number(number: &Number) -> Self;

    fn to_number(self) -> Number;
}

const fn decimal_digits(mut value: u128) -> usize {
    let mut digits = 1;
    while value >= 10 {
        value /= 10;
        digits += 1;
    }
    digits
}

macro_rules! integer {
    ($($ty:ty),* $(,)?) => {$(
        impl NumericValue for $ty {
            const INTEGER: bool = true;
            const UNSIGNED: bool = <$ty>::MIN == 0;
            const PRECISION: usize = decimal_digits(<$ty>::MAX as u128);
            const MIN: Self = <$ty>::MIN;
            const MAX: Self = <$ty>::MAX;
            const ZERO: Self = 0;

            fn from_number(number: &Number) -> Self {
                let mut text = String::with_capacity(number.integer.len() + 1);
                if number.is_negative() {
                    text.push('-');
                }
                text.push_str(&number.integer.to_string());
                text.parse().unwrap_or(if number.is_negative() {
                    <$ty>::MIN
                } else {
                    <$ty>::MAX
                })
            }

            fn to_number(self) -> Number {
                Number::from_ascii(&self.to_string()).unwrap_or_default()
            }
        }
    )*};
}

macro_rules! float {
    ($($ty:ty => $precision:literal),* $(,)?) => {$(
        impl NumericValue for $ty {
            const INTEGER: bool = false;
            const UNSIGNED: bool = false;
            const PRECISION: usize = $precision;
            const MIN: Self = <$ty>::MIN;
            const MAX: Self = <$ty>::MAX;
            const ZERO: Self = 0.0;

            fn from_number(number: &Number) -> Self {
                number
                    .to_ascii()
                    .parse::<$ty>()
                    .map(|value| value.clamp(<$ty>::MIN, <$ty>::MAX))
                    .unwrap_or(0.0)
            }

            fn to_number(self) -> Number {
                if !self.is_finite() {
                    return Number::zero();
                }
                Number::from_ascii(&self.to_string()).unwrap_or_default()
            }
        }
    )*};
}

integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
float!(f32 => 7, f64 => 15);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precision_counts_digits_of_max() {
        assert_eq!(u8::PRECISION, 3);
        assert_eq!(i32::PRECISION, 10);
        assert_eq!(u64::PRECISION, 20);
        assert_eq!(f64::PRECISION, 15);
        assert!(u16::UNSIGNED && !i16::UNSIGNED);
    }

    #[test]
    fn integer_overflow_saturates() {
        let number = Number::from_ascii("999").unwrap();
        assert_eq!(u8::from_number(&number), u8::MAX);
        let number = Number::from_ascii("-999").unwrap();
        assert_eq!(i8::from_number(&number), i8::MIN);
    }

    #[test]
    fn integers_ignore_fraction_digits() {
        let number = Number::from_ascii("-42.9").unwrap();
        assert_eq!(i32::from_number(&number), -42);
    }

    #[test]
    fn float_conversion() {
        let number = Number::from_ascii("-12.5").unwrap();
        assert_eq!(f64::from_number(&number), -12.5);
        assert_eq!(0.25f32.to_number().to_ascii(), "0.25");
        assert_eq!(f64::NAN.to_number(), Number::zero());
    }

    #[test]
    fn unsigned_negative_zero() {
        let number = Number::from_ascii("-0").unwrap();
        assert_eq!(u32::from_number(&number), 0);
    }
}
