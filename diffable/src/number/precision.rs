use super::{Number, NumericValue, Separator};
use std::ops::RangeInclusive;

/// Digit counts: significant digits overall, integer digits and fraction digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Count {
    pub value: usize,
    pub integer: usize,
    pub fraction: usize,
}

/// How many digits a number style shows and accepts.
///
/// `upper` limits what can be typed. `lower` is what formatted values are padded to,
/// which is how a currency shows `12.00` for a value of twelve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Precision {
    pub lower: Count,
    pub upper: Count,
}

impl Precision {
    pub fn standard<T: NumericValue>() -> Self {
        Self {
            lower: Count {
                value: 1,
                integer: 1,
                fraction: 0,
            },
            upper: Count {
                value: T::PRECISION,
                integer: T::PRECISION,
                fraction: if T::INTEGER { 0 } else { T::PRECISION },
            },
        }
    }

    /// Limit integer digits to `range`, within what the value type can hold.
    pub fn integer(mut self, range: RangeInclusive<usize>) -> Self {
        let upper = (*range.end()).clamp(1, self.upper.value);
        self.lower.integer = (*range.start()).clamp(1, upper);
        self.upper.integer = upper;
        self
    }

    /// Limit fraction digits to `range`, within what the value type can hold.
    pub fn fraction(mut self, range: RangeInclusive<usize>) -> Self {
        let upper = (*range.end()).min(self.upper.value.saturating_sub(1));
        self.lower.fraction = (*range.start()).min(upper);
        self.upper.fraction = upper;
        self
    }

    fn fraction_limit(&self, number: &Number) -> usize {
        let integer = number.significant_integer_digits();
        self.upper
            .fraction
            .min(self.upper.value.saturating_sub(integer))
    }

    /// Fit an edited number into the upper limits.
    ///
    /// Digits typed past a limit are dropped silently, keeping the leading ones, so an
    /// extra keystroke in a full field does nothing.
    pub fn autocorrect(&self, number: &mut Number) {
        number.trim_leading_zeros();

        let limit = self.upper.integer.min(self.upper.value);
        if number.significant_integer_digits() > limit {
            number.integer.truncate(limit);
        }

        number.fraction.truncate(self.fraction_limit(number));
        if self.upper.fraction == 0 {
            number.separator = None;
        }
    }

    /// Shape a number for display: round to the upper limits and pad to the lower.
    pub fn showcase(&self, number: &mut Number) {
        number.trim_leading_zeros();
        number.round(self.fraction_limit(number));
        number.fraction.trim_trailing_zeros(self.lower.fraction);
        number.fraction.pad_trailing_zeros(self.lower.fraction);
        number.integer.pad_leading_zeros(self.lower.integer);
        number.separator = (!number.fraction.is_empty()).then_some(Separator::Fraction);
    }
}
