//! Bijective character tables.

use crate::{
    error::{Error, Result},
    number::{Digit, Separator, Sign},
};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::{fmt::Debug, hash::Hash};

/// Something a locale spells with exactly one character.
pub trait Component: Copy + Eq + Hash + Debug + 'static {
    /// Name of the table, for error messages.
    const TABLE: &'static str;
    /// Every component, in table order.
    const ALL: &'static [Self];

    /// Position in [`Component::ALL`].
    fn ordinal(self) -> usize;
}

impl Component for Digit {
    const TABLE: &'static str = "digit";
    const ALL: &'static [Self] = &Digit::ALL;

    fn ordinal(self) -> usize {
        self as usize
    }
}

impl Component for Sign {
    const TABLE: &'static str = "sign";
    const ALL: &'static [Self] = &[Sign::Positive, Sign::Negative];

    fn ordinal(self) -> usize {
        match self {
            Sign::Positive => 0,
            Sign::Negative => 1,
        }
    }
}

impl Component for Separator {
    const TABLE: &'static str = "separator";
    const ALL: &'static [Self] = &[Separator::Fraction, Separator::Grouping];

    fn ordinal(self) -> usize {
        match self {
            Separator::Fraction => 0,
            Separator::Grouping => 1,
        }
    }
}

/// Two-way links between components and the characters that spell them.
///
/// Construction rejects tables where one character spells two components, so
/// lookups in either direction are unambiguous afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Links<C: Component> {
    characters: SmallVec<[char; 10]>,
    components: FxHashMap<char, C>,
}

impl<C: Component> Links<C> {
    /// Links from `characters`, given in [`Component::ALL`] order.
    ///
    /// # Panics
    ///
    /// Panics if the number of characters does not match the number of components.
    /// That is a table definition bug, not bad input.
    pub fn new(characters: &[char]) -> Result<Self> {
        assert_eq!(
            characters.len(),
            C::ALL.len(),
            "{} table needs one character per component",
            C::TABLE
        );

        let mut components = FxHashMap::default();
        for (&component, &character) in C::ALL.iter().zip(characters) {
            if components.insert(character, component).is_some() {
                return Err(Error::AmbiguousLexicon {
                    character,
                    table: C::TABLE,
                });
            }
        }

        Ok(Self {
            characters: characters.iter().copied().collect(),
            components,
        })
    }

    /// The character spelling `component`.
    pub fn character(&self, component: C) -> char {
        self.characters[component.ordinal()]
    }

    /// The component spelled by `character`, if any.
    pub fn component(&self, character: char) -> Option<C> {
        self.components.get(&character).copied()
    }

    pub fn contains(&self, character: char) -> bool {
        self.components.contains_key(&character)
    }

    pub fn iter(&self) -> impl Iterator<Item = (C, char)> + '_ {
        C::ALL
            .iter()
            .map(|&component| (component, self.character(component)))
    }
}
