//! Attribute-tagged characters.
//!
//! Every character a style produces is a [`Symbol`]: the character itself plus an
//! [`Attribute`] set describing how it takes part in editing. Content symbols are the
//! characters a user typed; phantom symbols are decoration the style inserted.

use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// How a [`Symbol`] participates in parsing, diffing and caret placement.
    ///
    /// The empty set is [`Attribute::CONTENT`]; the full set is [`Attribute::PHANTOM`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Attribute: u8 {
        /// Excluded from the value and from [`Snapshot::nonvirtuals`](crate::Snapshot::nonvirtuals).
        const VIRTUAL     = 0b0001;
        /// Skipped by the diff when it only exists in the new snapshot.
        const INSERTABLE  = 0b0010;
        /// Skipped by the diff when it only exists in the old snapshot.
        const REMOVABLE   = 0b0100;
        /// A caret never comes to rest against it.
        const PASSTHROUGH = 0b1000;
    }
}

impl Attribute {
    /// Real, typed data.
    pub const CONTENT: Self = Self::empty();
    /// Formatting that is shown but never typed.
    pub const PHANTOM: Self = Self::all();
}

impl Default for Attribute {
    fn default() -> Self {
        Self::CONTENT
    }
}

/// A character with its editing attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol {
    pub character: char,
    pub attribute: Attribute,
}

impl Symbol {
    pub const fn new(character: char, attribute: Attribute) -> Self {
        Self {
            character,
            attribute,
        }
    }

    pub const fn content(character: char) -> Self {
        Self::new(character, Attribute::CONTENT)
    }

    pub const fn phantom(character: char) -> Self {
        Self::new(character, Attribute::PHANTOM)
    }

    /// Same attribute, different character.
    pub const fn with_character(self, character: char) -> Self {
        Self::new(character, self.attribute)
    }

    pub fn is_virtual(&self) -> bool {
        self.attribute.contains(Attribute::VIRTUAL)
    }

    pub fn is_nonvirtual(&self) -> bool {
        !self.is_virtual()
    }

    pub fn is_insertable(&self) -> bool {
        self.attribute.contains(Attribute::INSERTABLE)
    }

    pub fn is_removable(&self) -> bool {
        self.attribute.contains(Attribute::REMOVABLE)
    }

    pub fn is_passthrough(&self) -> bool {
        self.attribute.contains(Attribute::PASSTHROUGH)
    }

    /// Whether a caret may come to rest against this symbol.
    pub fn is_nonpassthrough(&self) -> bool {
        !self.is_passthrough()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.character)
    }
}
