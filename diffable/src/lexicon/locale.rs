//! Locales and currencies.
//!
//! There is no platform formatter to ask, so the conventions the styles need are kept
//! in a small built-in table. Anything else can be described with [`Locale::builder`].

use super::links::Links;
use crate::{
    error::{Error, Result},
    number::{Digit, Separator, Sign},
};
use compact_str::CompactString;
use tracing::debug;

/// Which side of the number a label goes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placement {
    Prefix,
    Suffix,
}

/// Where a locale puts a label and what separates it from the number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Affix {
    pub placement: Placement,
    pub spacing: CompactString,
}

impl Affix {
    pub fn prefix(spacing: &str) -> Self {
        Self {
            placement: Placement::Prefix,
            spacing: spacing.into(),
        }
    }

    pub fn suffix(spacing: &str) -> Self {
        Self {
            placement: Placement::Suffix,
            spacing: spacing.into(),
        }
    }
}

/// Number conventions of one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    identifier: CompactString,
    digits: Links<Digit>,
    signs: Links<Sign>,
    separators: Links<Separator>,
    grouping_size: usize,
    percent: CompactString,
    percent_affix: Affix,
    currency_affix: Affix,
}

const NBSP: &str = "\u{a0}";
const NNBSP: &str = "\u{202f}";
const ASCII_DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
const ARABIC_INDIC_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];

impl Locale {
    /// A built-in locale.
    ///
    /// Known identifiers: `en_US_POSIX`, `en_US`, `en_GB`, `de_DE`, `de_CH`, `fr_FR`,
    /// `sv_SE`, `da_DK`, `ar_EG`. A `-` may be used instead of `_`.
    pub fn new(identifier: &str) -> Result<Self> {
        let normalized = identifier.replace('-', "_");
        let builder = match normalized.as_str() {
            "en_US_POSIX" => Self::builder("en_US_POSIX").currency_affix(Affix::prefix("")),
            "en_US" | "en_GB" => Self::builder(&normalized).currency_affix(Affix::prefix("")),
            "de_DE" => Self::builder("de_DE")
                .separators(',', '.')
                .percent("%", Affix::suffix(NBSP)),
            "de_CH" => Self::builder("de_CH")
                .separators('.', '\u{2019}')
                .currency_affix(Affix::prefix(NBSP)),
            "fr_FR" => Self::builder("fr_FR")
                .separators(',', '\u{202f}')
                .percent("%", Affix::suffix(NNBSP)),
            "sv_SE" => Self::builder("sv_SE")
                .separators(',', '\u{a0}')
                .signs('\u{2212}', '+')
                .percent("%", Affix::suffix(NBSP)),
            "da_DK" => Self::builder("da_DK")
                .separators(',', '.')
                .percent("%", Affix::suffix(NBSP)),
            "ar_EG" => Self::builder("ar_EG")
                .digits(ARABIC_INDIC_DIGITS)
                .separators('٫', '٬')
                .percent("٪", Affix::suffix("")),
            _ => {
                return Err(Error::UnknownLocale {
                    identifier: identifier.to_string(),
                })
            },
        };
        builder.build()
    }

    /// ASCII conventions with no grouping quirks, used for machine input.
    pub fn posix() -> Self {
        Self::builder("en_US_POSIX")
            .currency_affix(Affix::prefix(""))
            .build()
            .unwrap_or_else(|error| unreachable!("posix locale is well formed: {error}"))
    }

    /// Builder seeded with ASCII digits, `-`/`+`, `.`/`,`, groups of three, a `%`
    /// suffix and a currency suffix separated by a no-break space.
    pub fn builder(identifier: &str) -> LocaleBuilder {
        LocaleBuilder {
            identifier: identifier.into(),
            digits: ASCII_DIGITS,
            minus: '-',
            plus: '+',
            fraction: '.',
            grouping: ',',
            grouping_size: 3,
            percent: "%".into(),
            percent_affix: Affix::suffix(""),
            currency_affix: Affix::suffix(NBSP),
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn digits(&self) -> &Links<Digit> {
        &self.digits
    }

    pub fn signs(&self) -> &Links<Sign> {
        &self.signs
    }

    pub fn separators(&self) -> &Links<Separator> {
        &self.separators
    }

    pub fn grouping_size(&self) -> usize {
        self.grouping_size
    }

    pub fn percent(&self) -> (&str, &Affix) {
        (&self.percent, &self.percent_affix)
    }

    pub fn currency_affix(&self) -> &Affix {
        &self.currency_affix
    }
}

/// Describes a locale that is not in the built-in table.
#[derive(Debug, Clone)]
pub struct LocaleBuilder {
    identifier: CompactString,
    digits: [char; 10],
    minus: char,
    plus: char,
    fraction: char,
    grouping: char,
    grouping_size: usize,
    percent: CompactString,
    percent_affix: Affix,
    currency_affix: Affix,
}

impl LocaleBuilder {
    pub fn digits(mut self, digits: [char; 10]) -> Self {
        self.digits = digits;
        self
    }

    pub fn signs(mut self, minus: char, plus: char) -> Self {
        self.minus = minus;
        self.plus = plus;
        self
    }

    pub fn separators(mut self, fraction: char, grouping: char) -> Self {
        self.fraction = fraction;
        self.grouping = grouping;
        self
    }

    /// Digits per group; `0` disables grouping.
    pub fn grouping_size(mut self, size: usize) -> Self {
        self.grouping_size = size;
        self
    }

    pub fn percent(mut self, label: &str, affix: Affix) -> Self {
        self.percent = label.into();
        self.percent_affix = affix;
        self
    }

    pub fn currency_affix(mut self, affix: Affix) -> Self {
        self.currency_affix = affix;
        self
    }

    /// Validate the tables and build the locale.
    ///
    /// Fails when a character would spell two different things, within one table or
    /// across digits, signs and separators.
    pub fn build(self) -> Result<Locale> {
        let digits = Links::<Digit>::new(&self.digits)?;
        let signs = Links::<Sign>::new(&[self.plus, self.minus])?;
        let separators = Links::<Separator>::new(&[self.fraction, self.grouping])?;

        let shared = signs
            .iter()
            .map(|(_, character)| (character, "sign"))
            .chain(separators.iter().map(|(_, character)| (character, "separator")))
            .find(|(character, _)| digits.contains(*character));
        if let Some((character, table)) = shared {
            return Err(Error::AmbiguousLexicon { character, table });
        }
        if let Some((_, character)) = separators.iter().find(|(_, c)| signs.contains(*c)) {
            return Err(Error::AmbiguousLexicon {
                character,
                table: "separator",
            });
        }

        Ok(Locale {
            identifier: self.identifier,
            digits,
            signs,
            separators,
            grouping_size: self.grouping_size,
            percent: self.percent,
            percent_affix: self.percent_affix,
            currency_affix: self.currency_affix,
        })
    }
}

/// An ISO 4217 currency as the styles display it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Currency {
    pub code: CompactString,
    pub label: CompactString,
    pub fraction_digits: usize,
}

impl Currency {
    /// Currency from the built-in table.
    ///
    /// Unknown codes are displayed with the code itself and two fraction digits.
    pub fn new(code: &str) -> Self {
        let code = code.to_ascii_uppercase();
        let (label, fraction_digits) = match code.as_str() {
            "USD" => ("$", 2),
            "EUR" => ("€", 2),
            "GBP" => ("£", 2),
            "JPY" => ("¥", 0),
            "SEK" => ("kr", 2),
            "DKK" => ("kr.", 2),
            "CHF" => ("CHF", 2),
            "EGP" => ("E£", 2),
            _ => {
                debug!(%code, "unknown currency code, labelling with the code");
                return Self::custom(&code, &code, 2);
            },
        };
        Self::custom(&code, label, fraction_digits)
    }

    pub fn custom(code: &str, label: &str, fraction_digits: usize) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
            fraction_digits,
        }
    }
}

impl From<&str> for Currency {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUILT_IN: [&str; 9] = [
        "en_US_POSIX",
        "en_US",
        "en_GB",
        "de_DE",
        "de_CH",
        "fr_FR",
        "sv_SE",
        "da_DK",
        "ar_EG",
    ];

    #[test]
    fn every_built_in_locale_is_bijective() {
        for identifier in BUILT_IN {
            let locale = Locale::new(identifier).unwrap();
            for (digit, character) in locale.digits().iter() {
                assert_eq!(locale.digits().component(character), Some(digit), "{identifier}");
            }
            for (sign, character) in locale.signs().iter() {
                assert_eq!(locale.signs().component(character), Some(sign), "{identifier}");
            }
            for (separator, character) in locale.separators().iter() {
                assert_eq!(
                    locale.separators().component(character),
                    Some(separator),
                    "{identifier}"
                );
            }
        }
    }

    #[test]
    fn hyphenated_identifiers_are_accepted() {
        assert_eq!(Locale::new("de-DE").unwrap().identifier(), "de_DE");
    }

    #[test]
    fn unknown_locale_is_an_error() {
        assert_eq!(
            Locale::new("xx_YY"),
            Err(Error::UnknownLocale {
                identifier: "xx_YY".into()
            })
        );
    }

    #[test]
    fn separator_shared_with_sign_is_rejected() {
        let error = Locale::builder("broken").separators('-', ',').build().unwrap_err();
        assert!(matches!(error, Error::AmbiguousLexicon { character: '-', .. }));
    }

    #[test]
    fn separator_shared_with_digit_is_rejected() {
        let error = Locale::builder("broken").separators('1', ',').build().unwrap_err();
        assert!(matches!(error, Error::AmbiguousLexicon { character: '1', .. }));
    }

    #[test]
    fn currencies() {
        assert_eq!(Currency::new("usd").label, "$");
        assert_eq!(Currency::new("JPY").fraction_digits, 0);
        let unknown = Currency::new("XTS");
        assert_eq!((unknown.label.as_str(), unknown.fraction_digits), ("XTS", 2));
    }
}
