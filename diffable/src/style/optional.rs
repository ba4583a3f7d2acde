use super::DiffableTextStyle;
use crate::{
    commit::Commit, error::Result, lexicon::Locale, proposal::Proposal, snapshot::Snapshot,
};

/// A style where an empty field means no value.
#[derive(Debug, Clone, PartialEq)]
pub struct Optional<S> {
    style: S,
}

impl<S: DiffableTextStyle> Optional<S> {
    pub fn new(style: S) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &S {
        &self.style
    }
}

impl<S: DiffableTextStyle> DiffableTextStyle for Optional<S> {
    type Value = Option<S::Value>;

    fn locale(self, locale: &Locale) -> Self {
        Self::new(self.style.locale(locale))
    }

    fn format(&self, value: &Self::Value) -> String {
        value
            .as_ref()
            .map(|value| self.style.format(value))
            .unwrap_or_default()
    }

    fn interpret(&self, value: &Self::Value) -> Commit<Self::Value> {
        match value {
            Some(value) => self.style.interpret(value).map(Some),
            None => Commit::new(None, Snapshot::new()),
        }
    }

    fn merge(&self, proposal: Proposal) -> Result<Commit<Self::Value>> {
        if proposal.merged().nonvirtuals().next().is_none() {
            return Ok(Commit::new(None, Snapshot::new()));
        }
        Ok(self.style.merge(proposal)?.map(Some))
    }
}
