//! A raw edit that a style has not accepted yet.

use crate::{snapshot::Snapshot, symbol::Symbol};
use std::ops::Range;

/// "Replace `range` of `base` with `replacement`", as reported by a widget.
///
/// `range` is in symbol indices of `base`. The replacement is typed content until a
/// style decides otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proposal {
    pub base: Snapshot,
    pub range: Range<usize>,
    pub replacement: Snapshot,
}

impl Proposal {
    pub fn new(base: Snapshot, range: Range<usize>, replacement: Snapshot) -> Self {
        let end = range.end.min(base.len());
        let start = range.start.min(end);
        Self {
            base,
            range: start..end,
            replacement,
        }
    }

    /// Proposal that types `text` over `range`.
    pub fn typing(base: Snapshot, range: Range<usize>, text: &str) -> Self {
        Self::new(base, range, Snapshot::content(text))
    }

    /// The single replacement symbol, when exactly one character was typed.
    pub fn single(&self) -> Option<Symbol> {
        match self.replacement.symbols() {
            [symbol] => Some(*symbol),
            _ => None,
        }
    }

    /// Base with the replacement applied.
    pub fn merged(&self) -> Snapshot {
        self.base.replace(self.range.clone(), &self.replacement)
    }

    /// Drop the replacement and leave the base untouched.
    pub fn consume_replacement(&mut self) {
        self.replacement = Snapshot::new();
        self.range = self.range.end..self.range.end;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merged_applies_replacement() {
        let proposal = Proposal::typing(Snapshot::content("1234"), 1..3, "9");
        assert_eq!(proposal.merged().characters(), "194");
        assert_eq!(proposal.single().map(|s| s.character), Some('9'));
    }

    #[test]
    fn range_is_clamped_to_base() {
        let proposal = Proposal::typing(Snapshot::content("12"), 5..9, "3");
        assert_eq!(proposal.range, 2..2);
        assert_eq!(proposal.merged().characters(), "123");
    }

    #[test]
    fn consumed_replacement_leaves_base() {
        let mut proposal = Proposal::typing(Snapshot::content("12"), 0..1, "-");
        proposal.consume_replacement();
        assert_eq!(proposal.merged().characters(), "12");
        assert_eq!(proposal.single(), None);
    }
}
