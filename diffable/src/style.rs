//! Styles turn values into snapshots and raw edits into values.

mod constant;
mod equals;
mod optional;

pub use constant::Constant;
pub use equals::Equals;
pub use optional::Optional;

use crate::{commit::Commit, error::Result, lexicon::Locale, proposal::Proposal};

/// A formatting style that can be edited as you type.
///
/// `format` is the showcase text for a field that is not being edited. `interpret`
/// is what editing starts from. `merge` validates an edit and is the only place a
/// style can veto one.
pub trait DiffableTextStyle: Clone + PartialEq {
    type Value: Clone + PartialEq;

    /// The same style rebound to `locale`.
    fn locale(self, locale: &Locale) -> Self;

    fn format(&self, value: &Self::Value) -> String;

    fn interpret(&self, value: &Self::Value) -> Commit<Self::Value>;

    fn merge(&self, proposal: Proposal) -> Result<Commit<Self::Value>>;
}

/// Builders for the wrapper styles.
pub trait StyleExt: DiffableTextStyle + Sized {
    /// Ignore locale changes from the environment.
    fn constant(self) -> Constant<Self> {
        Constant::new(self)
    }

    /// Compare by `proxy` instead of by the style itself.
    fn equals<P: Clone + PartialEq>(self, proxy: P) -> Equals<Self, P> {
        Equals::new(self, proxy)
    }

    /// Allow an empty field, read as `None`.
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }
}

impl<S: DiffableTextStyle> StyleExt for S {}
