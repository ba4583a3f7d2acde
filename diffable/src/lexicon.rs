//! Translation between characters and number components.

mod cache;
mod links;
mod locale;

pub use cache::LexiconCache;
pub use links::{Component, Links};
pub use locale::{Affix, Currency, Locale, LocaleBuilder, Placement};

use crate::number::{Digit, Separator, Sign};
use compact_str::CompactString;
use std::sync::LazyLock;

static ASCII: LazyLock<Lexicon> = LazyLock::new(|| Lexicon::new(Locale::posix(), Kind::Number));

/// What a number style displays, which decides the label around the number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Kind {
    Number,
    Currency(Currency),
    Percent,
}

/// Text shown before or after the number, such as `$` or `%`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Label {
    pub text: CompactString,
    pub affix: Affix,
}

/// Everything a number style needs to read and write one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    locale: Locale,
    label: Option<Label>,
}

impl Lexicon {
    pub fn new(locale: Locale, kind: Kind) -> Self {
        let label = match kind {
            Kind::Number => None,
            Kind::Currency(currency) => Some(Label {
                text: currency.label,
                affix: locale.currency_affix().clone(),
            }),
            Kind::Percent => {
                let (text, affix) = locale.percent();
                Some(Label {
                    text: text.into(),
                    affix: affix.clone(),
                })
            },
        };
        Self { locale, label }
    }

    /// Plain ASCII digits, `-` and `.`, for moving values in and out of Rust types.
    pub fn ascii() -> &'static Lexicon {
        &ASCII
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn label(&self) -> Option<&Label> {
        self.label.as_ref()
    }

    pub fn digit(&self, character: char) -> Option<Digit> {
        self.locale.digits().component(character)
    }

    pub fn sign(&self, character: char) -> Option<Sign> {
        self.locale.signs().component(character)
    }

    pub fn separator(&self, character: char) -> Option<Separator> {
        self.locale.separators().component(character)
    }

    pub fn digit_character(&self, digit: Digit) -> char {
        self.locale.digits().character(digit)
    }

    pub fn sign_character(&self, sign: Sign) -> char {
        self.locale.signs().character(sign)
    }

    pub fn separator_character(&self, separator: Separator) -> char {
        self.locale.separators().character(separator)
    }

    pub fn grouping_size(&self) -> usize {
        self.locale.grouping_size()
    }
}
