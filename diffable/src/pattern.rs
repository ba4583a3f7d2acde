//! Fixed-layout text such as phone numbers, dates or card numbers.
//!
//! A pattern is a template string where some characters are placeholders. Typed
//! characters fill placeholders in order and every other pattern character is a
//! phantom literal.

use crate::{
    commit::Commit,
    error::{Error, Result},
    lexicon::Locale,
    proposal::Proposal,
    snapshot::Snapshot,
    style::DiffableTextStyle,
    symbol::{Attribute, Symbol},
};
use std::{fmt, sync::Arc};
use tracing::debug;

/// Decides which characters a placeholder accepts.
pub type Predicate = Arc<dyn Fn(char) -> bool + Send + Sync>;

/// Where a walk over the pattern stopped. Offsets are bytes into the pattern: `rest`
/// is where the literals not emitted yet begin, `next` is the placeholder reached.
#[derive(Clone, Copy)]
enum Stop {
    Filled { rest: usize },
    Overflow { rest: usize },
    Exhausted { rest: usize, next: usize },
    Mismatch { rest: usize, next: usize },
}

#[derive(Clone)]
pub struct PatternTextStyle {
    pattern: String,
    placeholders: Vec<(char, Predicate)>,
    visible: bool,
}

impl PatternTextStyle {
    /// Style for `pattern` with no placeholders yet and the pattern shown.
    pub fn new(pattern: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            placeholders: Vec::new(),
            visible: true,
        }
    }

    /// Make `character` a placeholder accepting what `predicate` accepts.
    pub fn placeholder(
        self,
        character: char,
        predicate: impl Fn(char) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.placeholders([character], predicate)
    }

    /// Make every character in `characters` a placeholder sharing `predicate`.
    pub fn placeholders(
        mut self,
        characters: impl IntoIterator<Item = char>,
        predicate: impl Fn(char) -> bool + Send + Sync + 'static,
    ) -> Self {
        let predicate: Predicate = Arc::new(predicate);
        for character in characters {
            self.placeholders.retain(|(existing, _)| *existing != character);
            self.placeholders.push((character, predicate.clone()));
        }
        self
    }

    /// Hide the unfilled part of the pattern.
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.visible = !hidden;
        self
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// How many characters the pattern holds.
    pub fn capacity(&self) -> usize {
        self.pattern
            .chars()
            .filter(|&c| self.predicate(c).is_some())
            .count()
    }

    fn predicate(&self, character: char) -> Option<&Predicate> {
        self.placeholders
            .iter()
            .find(|(placeholder, _)| *placeholder == character)
            .map(|(_, predicate)| predicate)
    }

    /// Walk the pattern, placing value characters into placeholders.
    ///
    /// Literals are only emitted in front of the next placed character, so a partial
    /// value does not drag the following literals along. Returns how many value
    /// characters were placed.
    fn walk(&self, value: &str, mut emit: impl FnMut(Symbol)) -> (Stop, usize) {
        let mut characters = value.chars().peekable();
        let mut queue = String::new();
        let mut placed = 0;

        for (offset, character) in self.pattern.char_indices() {
            let Some(predicate) = self.predicate(character) else {
                queue.push(character);
                continue;
            };
            let rest = offset - queue.len();
            match characters.peek() {
                Some(&next) if predicate(next) => {
                    queue.drain(..).for_each(|c| emit(Symbol::phantom(c)));
                    emit(Symbol::content(next));
                    characters.next();
                    placed += 1;
                },
                Some(_) => return (Stop::Mismatch { rest, next: offset }, placed),
                None => return (Stop::Exhausted { rest, next: offset }, placed),
            }
        }

        let rest = self.pattern.len() - queue.len();
        if characters.peek().is_some() {
            (Stop::Overflow { rest }, placed)
        } else {
            (Stop::Filled { rest }, placed)
        }
    }
}

impl DiffableTextStyle for PatternTextStyle {
    type Value = String;

    fn locale(self, _locale: &Locale) -> Self {
        self
    }

    /// Showcase text. Characters that do not fit are kept after a `|` so the mismatch
    /// stays visible. The text in front of the `|` is what `interpret` shows.
    fn format(&self, value: &String) -> String {
        let mut text = String::with_capacity(self.pattern.len());
        let (stop, placed) = self.walk(value, |symbol| text.push(symbol.character));

        match stop {
            Stop::Filled { rest } | Stop::Overflow { rest } => {
                text.push_str(&self.pattern[rest..]);
            },
            Stop::Exhausted { rest, next } | Stop::Mismatch { rest, next } => {
                let shown = if placed == 0 {
                    text.push_str(&self.pattern[rest..next]);
                    next
                } else {
                    rest
                };
                if self.visible {
                    text.push_str(&self.pattern[shown..]);
                }
            },
        }
        if matches!(stop, Stop::Overflow { .. } | Stop::Mismatch { .. }) {
            text.push('|');
            text.extend(value.chars().skip(placed));
        }
        text
    }

    fn interpret(&self, value: &String) -> Commit<String> {
        let mut snapshot = Snapshot::with_capacity(self.pattern.len());
        let mut placed_value = String::with_capacity(value.len());
        let (stop, placed) = self.walk(value, |symbol| {
            if symbol.is_nonvirtual() {
                placed_value.push(symbol.character);
            }
            snapshot.append(symbol);
        });

        match stop {
            Stop::Filled { rest } | Stop::Overflow { rest } => {
                snapshot.append_text(&self.pattern[rest..], Attribute::PHANTOM);
            },
            Stop::Exhausted { rest, next } | Stop::Mismatch { rest, next } => {
                let shown = if placed == 0 {
                    // Nothing typed yet: show the leading literals and wait behind them.
                    snapshot.append_text(&self.pattern[rest..next], Attribute::PHANTOM);
                    next
                } else {
                    rest
                };
                snapshot.anchor_at_end();
                if self.visible {
                    snapshot.append_text(&self.pattern[shown..], Attribute::PHANTOM);
                }
            },
        }
        if placed < value.chars().count() {
            debug!(placed, "cut characters that do not fit the pattern");
        }

        Commit::new(placed_value, snapshot)
    }

    fn merge(&self, proposal: Proposal) -> Result<Commit<String>> {
        let value: String = proposal.merged().nonvirtual_characters();
        let mut placeholders = self
            .pattern
            .chars()
            .filter_map(|c| self.predicate(c));

        for character in value.chars() {
            match placeholders.next() {
                Some(predicate) if predicate(character) => {},
                Some(_) => return Err(Error::Invalid { character }),
                None => {
                    return Err(Error::PatternCapacity {
                        capacity: self.capacity(),
                    })
                },
            }
        }

        Ok(self.interpret(&value))
    }
}

impl PartialEq for PatternTextStyle {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
            && self.visible == other.visible
            && self.placeholders.len() == other.placeholders.len()
            && self
                .placeholders
                .iter()
                .zip(&other.placeholders)
                .all(|((a, p), (b, q))| a == b && Arc::ptr_eq(p, q))
    }
}

impl fmt::Debug for PatternTextStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let placeholders: String = self.placeholders.iter().map(|(c, _)| *c).collect();
        f.debug_struct("PatternTextStyle")
            .field("pattern", &self.pattern)
            .field("placeholders", &placeholders)
            .field("visible", &self.visible)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHONE: &str = "+## (###) ###-##-##";

    fn phone() -> PatternTextStyle {
        PatternTextStyle::new(PHONE).placeholder('#', |c| c.is_ascii_digit())
    }

    #[test]
    fn capacity_counts_placeholders() {
        assert_eq!(phone().capacity(), 12);
    }

    #[test]
    fn format_partial_value() {
        assert_eq!(phone().format(&"12000345".into()), "+12 (000) 345-##-##");
    }

    #[test]
    fn format_shows_mismatch_tail() {
        assert_eq!(
            phone().format(&"120003456789000".into()),
            "+12 (000) 345-67-89|000"
        );
        assert_eq!(phone().format(&"12a".into()), "+12 (###) ###-##-##|a");
        assert_eq!(phone().hidden(true).format(&"12a".into()), "+12|a");
        assert_eq!(phone().format(&"a".into()), "+## (###) ###-##-##|a");
    }

    #[test]
    fn format_hidden() {
        let style = phone().hidden(true);
        assert_eq!(style.format(&"12000345".into()), "+12 (000) 345");
        assert_eq!(style.format(&String::new()), "+");
    }

    #[test]
    fn interpret_anchors_after_content() {
        let commit = phone().interpret(&"1200".into());
        assert_eq!(commit.snapshot.characters(), "+12 (00#) ###-##-##");
        assert_eq!(commit.snapshot.anchor(), Some(7));
        assert_eq!(commit.value, "1200");
    }

    #[test]
    fn interpret_empty_shows_prefix() {
        let commit = phone().hidden(true).interpret(&String::new());
        assert_eq!(commit.snapshot.characters(), "+");
        assert_eq!(commit.snapshot.anchor(), Some(1));

        let commit = phone().interpret(&String::new());
        assert_eq!(commit.snapshot.characters(), PHONE);
        assert_eq!(commit.snapshot.anchor(), Some(1));
    }

    #[test]
    fn interpret_cuts_mismatch() {
        let commit = phone().interpret(&"120003456789000".into());
        assert_eq!(commit.value, "120003456789");
        assert_eq!(commit.snapshot.characters(), "+12 (000) 345-67-89");
    }

    #[test]
    fn literals_are_phantom() {
        let commit = phone().interpret(&"1".into());
        let symbols = commit.snapshot.symbols();
        assert_eq!(symbols[0], Symbol::phantom('+'));
        assert_eq!(symbols[1], Symbol::content('1'));
        assert!(symbols[2..].iter().all(|symbol| symbol.is_virtual()));
    }

    #[test]
    fn merge_validates_placeholders() {
        let style = phone();
        let base = style.interpret(&"12".into()).snapshot;
        let error = style.merge(Proposal::typing(base.clone(), 3..3, "x"));
        assert_eq!(error, Err(Error::Invalid { character: 'x' }));

        let commit = style.merge(Proposal::typing(base, 3..3, "3")).unwrap();
        assert_eq!(commit.value, "123");
        assert_eq!(commit.snapshot.characters(), "+12 (3##) ###-##-##");
    }

    #[test]
    fn merge_rejects_overflow() {
        let style = phone();
        let base = style.interpret(&"120003456789".into()).snapshot;
        let end = base.len();
        assert_eq!(
            style.merge(Proposal::typing(base, end..end, "0")),
            Err(Error::PatternCapacity { capacity: 12 })
        );
    }

    #[test]
    fn several_placeholders() {
        let style = PatternTextStyle::new("AA-99")
            .placeholder('A', |c| c.is_ascii_uppercase())
            .placeholder('9', |c| c.is_ascii_digit());
        assert_eq!(style.format(&"XY12".into()), "XY-12");
        assert_eq!(
            style.merge(Proposal::typing(Snapshot::new(), 0..0, "X1")),
            Err(Error::Invalid { character: '1' })
        );
    }

    #[test]
    fn equality_compares_predicates_by_identity() {
        let style = phone();
        assert_eq!(style, style.clone());
        assert_ne!(style, phone());
    }
}
