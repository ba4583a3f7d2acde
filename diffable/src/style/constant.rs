use super::DiffableTextStyle;
use crate::{commit::Commit, error::Result, lexicon::Locale, proposal::Proposal};

/// A style whose locale is frozen at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Constant<S> {
    style: S,
}

impl<S: DiffableTextStyle> Constant<S> {
    pub fn new(style: S) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &S {
        &self.style
    }

    pub fn into_inner(self) -> S {
        self.style
    }
}

impl<S: DiffableTextStyle> DiffableTextStyle for Constant<S> {
    type Value = S::Value;

    fn locale(self, _locale: &Locale) -> Self {
        self
    }

    fn format(&self, value: &Self::Value) -> String {
        self.style.format(value)
    }

    fn interpret(&self, value: &Self::Value) -> Commit<Self::Value> {
        self.style.interpret(value)
    }

    fn merge(&self, proposal: Proposal) -> Result<Commit<Self::Value>> {
        self.style.merge(proposal)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        lexicon::{LexiconCache, Locale},
        number::NumberTextStyle,
        style::{DiffableTextStyle, StyleExt},
    };

    #[test]
    fn locale_changes_are_ignored() {
        let cache = LexiconCache::shared();
        let us = Locale::new("en_US").unwrap();
        let style = NumberTextStyle::<f64>::number(&cache, &us).constant();
        let rebound = style.clone().locale(&Locale::new("de_DE").unwrap());
        assert_eq!(rebound, style);
        assert_eq!(rebound.format(&1234.5), "1,234.5");
    }
}
