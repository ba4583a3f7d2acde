//! Correspondence between an old and a new snapshot.
//!
//! A style rebuilds the whole snapshot on every edit, so there is no edit script to
//! follow. Instead the text on each side of the caret is matched against the new
//! snapshot: the suffix behind an upper bound is matched from the end, the prefix
//! in front of a lower bound from the start. Symbols the style inserted or removed
//! along the way are skipped when their attributes allow it.

use crate::symbol::Symbol;

/// Matching walks over symbol sequences.
pub struct Mismatches;

impl Mismatches {
    /// Number of `present` symbols matched by `past`, walking both from the start.
    pub fn forwards(past: &[Symbol], present: &[Symbol]) -> usize {
        Self::walk(past.iter(), present.iter())
    }

    /// Number of `present` symbols matched by `past`, walking both from the end.
    pub fn backwards(past: &[Symbol], present: &[Symbol]) -> usize {
        Self::walk(past.iter().rev(), present.iter().rev())
    }

    fn walk<'a>(
        past: impl Iterator<Item = &'a Symbol>,
        present: impl Iterator<Item = &'a Symbol>,
    ) -> usize {
        let mut past = past.peekable();
        let mut present = present.peekable();
        let mut consumed = 0;

        while let (Some(&&old), Some(&&new)) = (past.peek(), present.peek()) {
            if old.character == new.character {
                past.next();
                present.next();
                consumed += 1;
            } else if old.is_removable() {
                past.next();
            } else if new.is_insertable() {
                present.next();
                consumed += 1;
            } else {
                break;
            }
        }

        consumed
    }
}
