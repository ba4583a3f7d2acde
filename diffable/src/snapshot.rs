//! The formatted content of a field.

use crate::symbol::{Attribute, Symbol};
use std::{fmt, ops::Range};

/// An ordered run of [`Symbol`]s with an optional caret anchor.
///
/// Styles build a fresh snapshot for every commit. The anchor, when present, is the
/// index every caret snaps to regardless of where the user left it, which is how a
/// style points at "the next thing to type" when the content is empty or partial.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    symbols: Vec<Symbol>,
    anchor: Option<usize>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            symbols: Vec::with_capacity(capacity),
            anchor: None,
        }
    }

    /// Snapshot where every character of `text` carries `attribute`.
    pub fn from_text(text: &str, attribute: Attribute) -> Self {
        let mut snapshot = Self::with_capacity(text.len());
        snapshot.append_text(text, attribute);
        snapshot
    }

    /// Snapshot of typed content, as produced by a raw keystroke or paste.
    pub fn content(text: &str) -> Self {
        Self::from_text(text, Attribute::CONTENT)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn get(&self, index: usize) -> Option<&Symbol> {
        self.symbols.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Symbol> {
        self.symbols.iter()
    }

    pub fn anchor(&self) -> Option<usize> {
        self.anchor
    }

    pub fn append(&mut self, symbol: Symbol) {
        self.symbols.push(symbol);
    }

    pub fn append_text(&mut self, text: &str, attribute: Attribute) {
        self.symbols
            .extend(text.chars().map(|character| Symbol::new(character, attribute)));
    }

    pub fn extend(&mut self, symbols: impl IntoIterator<Item = Symbol>) {
        self.symbols.extend(symbols);
    }

    /// Anchor the caret at `index`, clamped to the end.
    pub fn anchor_at(&mut self, index: usize) {
        self.anchor = Some(index.min(self.len()));
    }

    /// Anchor the caret after the last symbol appended so far.
    pub fn anchor_at_end(&mut self) {
        self.anchor = Some(self.len());
    }

    pub fn clear_anchor(&mut self) {
        self.anchor = None;
    }

    /// All characters, virtual ones included.
    pub fn characters(&self) -> String {
        self.symbols.iter().map(|symbol| symbol.character).collect()
    }

    /// Symbols that make up the logical value.
    pub fn nonvirtuals(&self) -> impl DoubleEndedIterator<Item = &Symbol> + '_ {
        self.symbols.iter().filter(|symbol| symbol.is_nonvirtual())
    }

    pub fn nonvirtual_characters(&self) -> String {
        self.nonvirtuals().map(|symbol| symbol.character).collect()
    }

    /// Replace `range` with the symbols of `replacement`, returning a new snapshot.
    ///
    /// The anchor is dropped: it belonged to the layout being replaced.
    pub fn replace(&self, range: Range<usize>, replacement: &Snapshot) -> Snapshot {
        let start = range.start.min(self.len());
        let end = range.end.clamp(start, self.len());

        let mut symbols = Vec::with_capacity(self.len() - (end - start) + replacement.len());
        symbols.extend_from_slice(&self.symbols[..start]);
        symbols.extend_from_slice(&replacement.symbols);
        symbols.extend_from_slice(&self.symbols[end..]);

        Snapshot {
            symbols,
            anchor: None,
        }
    }

    /// Rewrite the attributes of every symbol in `range`.
    pub fn update_attributes(&mut self, range: Range<usize>, update: impl Fn(&mut Attribute)) {
        let end = range.end.min(self.len());
        let start = range.start.min(end);
        for symbol in &mut self.symbols[start..end] {
            update(&mut symbol.attribute);
        }
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

impl FromIterator<Symbol> for Snapshot {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        Self {
            symbols: iter.into_iter().collect(),
            anchor: None,
        }
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a Symbol;
    type IntoIter = std::slice::Iter<'a, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grouped() -> Snapshot {
        let mut snapshot = Snapshot::new();
        snapshot.append(Symbol::content('1'));
        snapshot.append(Symbol::phantom(','));
        snapshot.append_text("234", Attribute::CONTENT);
        snapshot
    }

    #[test]
    fn nonvirtuals_skip_phantoms() {
        let snapshot = grouped();
        assert_eq!(snapshot.characters(), "1,234");
        assert_eq!(snapshot.nonvirtual_characters(), "1234");
    }

    #[test]
    fn replace_splices_and_drops_anchor() {
        let mut snapshot = grouped();
        snapshot.anchor_at_end();

        let replaced = snapshot.replace(2..4, &Snapshot::content("9"));
        assert_eq!(replaced.characters(), "1,94");
        assert_eq!(replaced.anchor(), None);
        // The original is untouched.
        assert_eq!(snapshot.characters(), "1,234");
    }

    #[test]
    fn replace_clamps_out_of_range() {
        let snapshot = grouped();
        let replaced = snapshot.replace(7..9, &Snapshot::content("5"));
        assert_eq!(replaced.characters(), "1,2345");
    }

    #[test]
    fn update_attributes_rewrites_range() {
        let mut snapshot = Snapshot::content("kr.5");
        snapshot.update_attributes(0..3, |attribute| *attribute = Attribute::PHANTOM);
        assert_eq!(snapshot.nonvirtual_characters(), "5");
    }

    #[test]
    fn anchor_is_clamped() {
        let mut snapshot = Snapshot::content("12");
        snapshot.anchor_at(10);
        assert_eq!(snapshot.anchor(), Some(2));
    }
}
