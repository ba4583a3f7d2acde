use super::DiffableTextStyle;
use crate::{commit::Commit, error::Result, lexicon::Locale, proposal::Proposal};

/// A style compared by a proxy value.
///
/// Context updates are skipped when the style compares equal, so a cheap proxy (an
/// id, a version counter) avoids comparing styles that carry closures or tables.
#[derive(Debug, Clone)]
pub struct Equals<S, P> {
    style: S,
    proxy: P,
}

impl<S: DiffableTextStyle, P: Clone + PartialEq> Equals<S, P> {
    pub fn new(style: S, proxy: P) -> Self {
        Self { style, proxy }
    }

    pub fn style(&self) -> &S {
        &self.style
    }

    pub fn proxy(&self) -> &P {
        &self.proxy
    }
}

impl<S, P: PartialEq> PartialEq for Equals<S, P> {
    fn eq(&self, other: &Self) -> bool {
        self.proxy == other.proxy
    }
}

impl<S: DiffableTextStyle, P: Clone + PartialEq> DiffableTextStyle for Equals<S, P> {
    type Value = S::Value;

    fn locale(self, locale: &Locale) -> Self {
        Self {
            style: self.style.locale(locale),
            proxy: self.proxy,
        }
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
    use crate::{pattern::PatternTextStyle, style::StyleExt};

    #[test]
    fn only_the_proxy_is_compared() {
        let phone = PatternTextStyle::new("###-####").placeholder('#', |c| c.is_ascii_digit());
        let other = PatternTextStyle::new("##").placeholder('#', |c| c.is_ascii_digit());
        assert_eq!(phone.clone().equals(1), other.clone().equals(1));
        assert_ne!(phone.equals(1), other.equals(2));
    }
}
