use super::{Number, NumericValue, Sign};
use std::ops::RangeInclusive;

/// The closed range of values a number style accepts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<T> {
    pub min: T,
    pub max: T,
}

impl<T: NumericValue> Bounds<T> {
    pub fn standard() -> Self {
        Self {
            min: T::MIN,
            max: T::MAX,
        }
    }

    /// # Panics
    ///
    /// Panics if the range is empty.
    pub fn new(range: RangeInclusive<T>) -> Self {
        let (min, max) = range.into_inner();
        assert!(min <= max, "bounds {min}..={max} are empty");
        Self { min, max }
    }

    pub fn clamp(&self, value: T) -> T {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }

    pub fn allows_negative(&self) -> bool {
        self.min < T::ZERO
    }

    /// Make the sign agree with the range: no negatives when `min` is not negative,
    /// always negative when `max` is not positive.
    pub fn autocorrect_sign(&self, number: &mut Number) {
        if self.min >= T::ZERO {
            if number.is_negative() {
                number.sign = None;
            }
        } else if self.max <= T::ZERO {
            number.sign = Some(Sign::Negative);
        }
    }
}

impl<T: NumericValue> Default for Bounds<T> {
    fn default() -> Self {
        Self::standard()
    }
}
