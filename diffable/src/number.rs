//! Numbers as sequences of digits.
//!
//! Values are never parsed straight into floats while editing. A [`Number`] keeps the
//! digits the user typed, so precision rules can count them and formatting can show
//! exactly what was entered (`"12."`, `"0.50"`).

mod bounds;
mod digits;
mod precision;
mod reader;
mod style;
mod value;

pub use bounds::Bounds;
pub use digits::{Digit, Digits};
pub use precision::{Count, Precision};
pub use style::NumberTextStyle;
pub use value::NumericValue;

use crate::{
    error::{Error, Result},
    lexicon::Lexicon,
    snapshot::Snapshot,
    symbol::Symbol,
};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Positive,
    Negative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Separator {
    Fraction,
    Grouping,
}

/// What [`Number::parse`] accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Reject a negative sign.
    pub unsigned: bool,
    /// Stop after the integer digits, so a fraction separator is unexpected.
    pub integer: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Number {
    pub sign: Option<Sign>,
    pub integer: Digits,
    pub separator: Option<Separator>,
    pub fraction: Digits,
}

impl Default for Number {
    fn default() -> Self {
        Self::zero()
    }
}

impl Number {
    pub fn zero() -> Self {
        Self {
            sign: None,
            integer: [Digit::Zero].into_iter().collect(),
            separator: None,
            fraction: Digits::new(),
        }
    }

    /// Parse the nonvirtual symbols of `symbols`.
    ///
    /// Grammar: `sign? digit* (fraction-separator digit*)?`. Missing integer digits
    /// read as zero, so an empty field parses to zero.
    pub fn parse<'a>(
        symbols: impl IntoIterator<Item = &'a Symbol>,
        options: ParseOptions,
        lexicon: &Lexicon,
    ) -> Result<Self> {
        let mut characters = symbols
            .into_iter()
            .filter(|symbol| symbol.is_nonvirtual())
            .map(|symbol| symbol.character)
            .peekable();

        let sign = characters.peek().and_then(|&c| lexicon.sign(c));
        if sign.is_some() {
            characters.next();
        }
        if options.unsigned && sign == Some(Sign::Negative) {
            return Err(Error::Unsigned);
        }

        let mut integer = Digits::new();
        while let Some(digit) = characters.peek().and_then(|&c| lexicon.digit(c)) {
            integer.push(digit);
            characters.next();
        }
        if integer.is_empty() {
            integer.push(Digit::Zero);
        }

        let mut separator = None;
        let mut fraction = Digits::new();
        if !options.integer
            && characters.peek().and_then(|&c| lexicon.separator(c)) == Some(Separator::Fraction)
        {
            separator = Some(Separator::Fraction);
            characters.next();
            while let Some(digit) = characters.peek().and_then(|&c| lexicon.digit(c)) {
                fraction.push(digit);
                characters.next();
            }
        }

        if let Some(character) = characters.next() {
            return Err(Error::Unexpected { character });
        }

        Ok(Self {
            sign,
            integer,
            separator,
            fraction,
        })
    }

    /// Parse plain ASCII such as `"-12.50"`.
    pub fn from_ascii(text: &str) -> Result<Self> {
        Self::parse(
            Snapshot::content(text).iter(),
            ParseOptions::default(),
            Lexicon::ascii(),
        )
    }

    /// ASCII text that Rust number types parse.
    pub fn to_ascii(&self) -> String {
        self.to_string()
    }

    pub fn is_negative(&self) -> bool {
        self.sign == Some(Sign::Negative)
    }

    pub fn is_zero(&self) -> bool {
        self.integer.is_zero() && self.fraction.is_zero()
    }

    /// Apply a sign keystroke: the sign already shown switches off, the other one on.
    pub fn toggle(&mut self, sign: Sign) {
        self.sign = match (sign, self.sign) {
            (Sign::Negative, Some(Sign::Negative)) => None,
            (Sign::Negative, _) => Some(Sign::Negative),
            (Sign::Positive, _) => None,
        };
    }

    /// Remove leading integer zeros, leaving a single `0` for numbers below one.
    pub fn trim_leading_zeros(&mut self) {
        self.integer.trim_leading_zeros(1);
        if self.integer.is_empty() {
            self.integer.push(Digit::Zero);
        }
    }

    /// Number of integer digits that carry magnitude (`0` has none).
    pub fn significant_integer_digits(&self) -> usize {
        self.integer.len() - self.integer.count_leading_zeros()
    }

    /// Round half up to at most `fraction_digits` fraction digits.
    pub fn round(&mut self, fraction_digits: usize) {
        if self.fraction.len() <= fraction_digits {
            return;
        }
        let first_dropped = self.fraction.as_slice()[fraction_digits];
        self.fraction.truncate(fraction_digits);
        if first_dropped >= Digit::Five {
            self.increment_last();
        }
        if self.fraction.is_empty() {
            self.separator = None;
        }
    }

    pub fn rounded(mut self, fraction_digits: usize) -> Self {
        self.round(fraction_digits);
        self
    }

    fn increment_last(&mut self) {
        for part in [&mut self.fraction, &mut self.integer] {
            let mut carried = Digits::new();
            while let Some(digit) = part.pop() {
                match digit.incremented() {
                    Some(next) => {
                        part.push(next);
                        part.append(&carried);
                        return;
                    },
                    None => carried.push(Digit::Zero),
                }
            }
            part.append(&carried);
        }
        self.integer.insert(0, Digit::One);
    }

    /// Multiply by `10^by`, moving digits across the separator.
    pub fn shift(&mut self, by: isize) {
        let count = by.unsigned_abs();
        if by > 0 {
            self.fraction.pad_trailing_zeros(count);
            let moved = self.fraction.split_front(count);
            self.integer.append(&moved);
        } else if by < 0 {
            self.integer.pad_leading_zeros(count);
            let moved = self.integer.split_back(count);
            self.fraction.prepend(&moved);
        }
        self.trim_leading_zeros();
        self.fraction.trim_trailing_zeros(0);
        self.separator = (!self.fraction.is_empty()).then_some(Separator::Fraction);
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            f.write_str("-")?;
        }
        write!(f, "{}", self.integer)?;
        if self.separator.is_some() {
            write!(f, ".{}", self.fraction)?;
        }
        Ok(())
    }
}
