use smallvec::SmallVec;
use std::{fmt, slice};

/// A decimal digit, independent of how a locale writes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    Zero = 0,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
}

impl Digit {
    pub const ALL: [Digit; 10] = [
        Digit::Zero,
        Digit::One,
        Digit::Two,
        Digit::Three,
        Digit::Four,
        Digit::Five,
        Digit::Six,
        Digit::Seven,
        Digit::Eight,
        Digit::Nine,
    ];

    pub fn from_ascii(character: char) -> Option<Self> {
        if !character.is_ascii_digit() {
            return None;
        }
        character
            .to_digit(10)
            .map(|value| Self::ALL[value as usize])
    }

    pub fn to_ascii(self) -> char {
        char::from(b'0' + self as u8)
    }

    pub fn value(self) -> u8 {
        self as u8
    }

    /// The next digit up, or `None` when this is nine and the increment carries.
    pub fn incremented(self) -> Option<Self> {
        Self::ALL.get(self as usize + 1).copied()
    }
}

/// Digits of one part of a number, most significant first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Digits(SmallVec<[Digit; 20]>);

impl Digits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Digit] {
        &self.0
    }

    pub fn iter(&self) -> slice::Iter<'_, Digit> {
        self.0.iter()
    }

    pub fn first(&self) -> Option<Digit> {
        self.0.first().copied()
    }

    pub fn last(&self) -> Option<Digit> {
        self.0.last().copied()
    }

    pub fn push(&mut self, digit: Digit) {
        self.0.push(digit);
    }

    pub fn pop(&mut self) -> Option<Digit> {
        self.0.pop()
    }

    pub fn insert(&mut self, index: usize, digit: Digit) {
        self.0.insert(index, digit);
    }

    pub fn truncate(&mut self, len: usize) {
        self.0.truncate(len);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Take the first `count` digits out, leaving the rest.
    pub fn split_front(&mut self, count: usize) -> Digits {
        let count = count.min(self.len());
        Digits(self.0.drain(..count).collect())
    }

    /// Take the last `count` digits out, leaving the rest.
    pub fn split_back(&mut self, count: usize) -> Digits {
        let start = self.len() - count.min(self.len());
        Digits(self.0.drain(start..).collect())
    }

    pub fn prepend(&mut self, digits: &Digits) {
        self.0.insert_many(0, digits.iter().copied());
    }

    pub fn append(&mut self, digits: &Digits) {
        self.0.extend_from_slice(digits.as_slice());
    }

    pub fn count_leading_zeros(&self) -> usize {
        self.iter().take_while(|&&digit| digit == Digit::Zero).count()
    }

    pub fn count_trailing_zeros(&self) -> usize {
        self.iter()
            .rev()
            .take_while(|&&digit| digit == Digit::Zero)
            .count()
    }

    pub fn is_zero(&self) -> bool {
        self.iter().all(|&digit| digit == Digit::Zero)
    }

    /// Remove leading zeros, keeping at least `keep` digits.
    pub fn trim_leading_zeros(&mut self, keep: usize) {
        let removable = self.count_leading_zeros().min(self.len().saturating_sub(keep));
        self.0.drain(..removable);
    }

    /// Remove trailing zeros, keeping at least `keep` digits.
    pub fn trim_trailing_zeros(&mut self, keep: usize) {
        let removable = self.count_trailing_zeros().min(self.len().saturating_sub(keep));
        self.0.truncate(self.len() - removable);
    }

    pub fn pad_leading_zeros(&mut self, len: usize) {
        while self.len() < len {
            self.0.insert(0, Digit::Zero);
        }
    }

    pub fn pad_trailing_zeros(&mut self, len: usize) {
        while self.len() < len {
            self.0.push(Digit::Zero);
        }
    }
}

impl FromIterator<Digit> for Digits {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Digits {
    type Item = &'a Digit;
    type IntoIter = slice::Iter<'a, Digit>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Digits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.iter()
            .try_for_each(|digit| fmt::Write::write_char(f, digit.to_ascii()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(text: &str) -> Digits {
        text.chars().filter_map(Digit::from_ascii).collect()
    }

    #[test]
    fn ascii_conversion() {
        assert_eq!(Digit::from_ascii('7'), Some(Digit::Seven));
        assert_eq!(Digit::from_ascii('٧'), None);
        assert_eq!(Digit::Nine.to_ascii(), '9');
        assert_eq!(Digit::Nine.incremented(), None);
    }

    #[test]
    fn zero_trimming_respects_keep() {
        let mut integer = digits("000");
        integer.trim_leading_zeros(1);
        assert_eq!(integer.to_string(), "0");

        let mut fraction = digits("5000");
        fraction.trim_trailing_zeros(2);
        assert_eq!(fraction.to_string(), "50");
    }

    #[test]
    fn splitting_moves_digits() {
        let mut integer = digits("12345");
        let front = integer.split_front(2);
        let back = integer.split_back(5);
        assert_eq!(front.to_string(), "12");
        assert_eq!(back.to_string(), "345");
        assert!(integer.is_empty());
    }
}
