use super::{
    reader::Reader, Bounds, Digit, Number, NumericValue, ParseOptions, Precision, Separator, Sign,
};
use crate::{
    commit::Commit,
    error::{Error, Result},
    lexicon::{Currency, Kind, Lexicon, LexiconCache, Locale, Placement},
    proposal::Proposal,
    snapshot::Snapshot,
    style::DiffableTextStyle,
    symbol::{Attribute, Symbol},
};
use std::{
    fmt,
    ops::{Range, RangeInclusive},
    sync::Arc,
};
use tracing::debug;

/// Plain numbers, currencies and percentages of the value type `T`.
///
/// Integer digits are content, the sign and the fraction separator can be typed and
/// deleted, and grouping separators and labels are phantom decoration.
#[derive(Clone)]
pub struct NumberTextStyle<T: NumericValue> {
    cache: Arc<LexiconCache>,
    lexicon: Arc<Lexicon>,
    kind: Kind,
    bounds: Bounds<T>,
    precision: Precision,
}

impl<T: NumericValue> NumberTextStyle<T> {
    fn new(cache: &Arc<LexiconCache>, locale: &Locale, kind: Kind) -> Self {
        Self {
            cache: cache.clone(),
            lexicon: cache.lexicon(locale, &kind),
            kind,
            bounds: Bounds::standard(),
            precision: Precision::standard::<T>(),
        }
    }

    pub fn number(cache: &Arc<LexiconCache>, locale: &Locale) -> Self {
        Self::new(cache, locale, Kind::Number)
    }

    /// Currency style, showing the currency's fraction digits.
    pub fn currency(
        cache: &Arc<LexiconCache>,
        locale: &Locale,
        currency: impl Into<Currency>,
    ) -> Self {
        let currency = currency.into();
        let digits = currency.fraction_digits;
        Self::new(cache, locale, Kind::Currency(currency)).precision_fraction(digits..=digits)
    }

    /// Percent style. Floats are fractions of one (`0.5` shows as `50%`); integers are
    /// shown as they are.
    pub fn percent(cache: &Arc<LexiconCache>, locale: &Locale) -> Self {
        Self::new(cache, locale, Kind::Percent)
    }

    pub fn bounds(mut self, bounds: Bounds<T>) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    pub fn precision_integer(mut self, range: RangeInclusive<usize>) -> Self {
        self.precision = self.precision.integer(range);
        self
    }

    /// Fraction digit limits. Integer value types have none and ignore this.
    pub fn precision_fraction(mut self, range: RangeInclusive<usize>) -> Self {
        if !T::INTEGER {
            self.precision = self.precision.fraction(range);
        }
        self
    }

    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    fn scale(&self) -> isize {
        match self.kind {
            Kind::Percent if !T::INTEGER => 2,
            _ => 0,
        }
    }

    fn value(&self, number: &Number) -> T {
        let mut number = number.clone();
        number.shift(-self.scale());
        T::from_number(&number)
    }

    fn to_number(&self, value: T) -> Number {
        let mut number = value.to_number();
        number.shift(self.scale());
        number
    }

    /// The formatted text and the character range of the label in it.
    fn characters(&self, number: &Number) -> (String, Option<Range<usize>>) {
        let lexicon = &self.lexicon;
        let mut text = String::new();
        let mut len = 0;
        let mut label_range = None;
        let mut push = |text: &mut String, s: &str| {
            text.push_str(s);
            len += s.chars().count();
            len
        };

        if number.is_negative() {
            let mut buffer = [0; 4];
            push(&mut text, lexicon.sign_character(Sign::Negative).encode_utf8(&mut buffer));
        }

        let label = lexicon.label();
        if let Some(label) = label.filter(|label| label.affix.placement == Placement::Prefix) {
            let end = push(&mut text, &label.text);
            label_range = Some(end - label.text.chars().count()..end);
            push(&mut text, &label.affix.spacing);
        }

        let grouping = lexicon.separator_character(Separator::Grouping);
        let size = lexicon.grouping_size();
        let mut digits = String::new();
        for (index, &digit) in number.integer.iter().enumerate() {
            let remaining = number.integer.len() - index;
            if size > 0 && index > 0 && remaining % size == 0 {
                digits.push(grouping);
            }
            digits.push(lexicon.digit_character(digit));
        }
        if number.separator.is_some() {
            digits.push(lexicon.separator_character(Separator::Fraction));
            digits.extend(number.fraction.iter().map(|&d| lexicon.digit_character(d)));
        }
        push(&mut text, &digits);

        if let Some(label) = label.filter(|label| label.affix.placement == Placement::Suffix) {
            push(&mut text, &label.affix.spacing);
            let end = push(&mut text, &label.text);
            label_range = Some(end - label.text.chars().count()..end);
        }

        (text, label_range)
    }

    /// Classify formatted text into symbols.
    fn snapshot(&self, number: &Number) -> Snapshot {
        let (text, label) = self.characters(number);
        let lexicon = &self.lexicon;
        let mut snapshot: Snapshot = text
            .chars()
            .map(|character| {
                let attribute = if lexicon.digit(character).is_some() {
                    Attribute::CONTENT
                } else if lexicon.sign(character).is_some() {
                    Attribute::PHANTOM - Attribute::VIRTUAL
                } else if lexicon.separator(character) == Some(Separator::Fraction) {
                    Attribute::REMOVABLE
                } else {
                    Attribute::PHANTOM
                };
                Symbol::new(character, attribute)
            })
            .collect();
        // Labels may reuse number characters, as in "kr." or "Fr.".
        if let Some(label) = label {
            snapshot.update_attributes(label, |attribute| *attribute = Attribute::PHANTOM);
        }
        snapshot
    }

    fn options(&self) -> ParseOptions {
        ParseOptions {
            unsigned: !self.bounds.allows_negative(),
            integer: T::INTEGER,
        }
    }
}

impl<T: NumericValue> DiffableTextStyle for NumberTextStyle<T> {
    type Value = T;

    fn locale(mut self, locale: &Locale) -> Self {
        if locale.identifier() != self.lexicon.locale().identifier() {
            self.lexicon = self.cache.lexicon(locale, &self.kind);
        }
        self
    }

    fn format(&self, value: &T) -> String {
        self.interpret(value).snapshot.characters()
    }

    fn interpret(&self, value: &T) -> Commit<T> {
        let mut number = self.to_number(self.bounds.clamp(*value));
        self.bounds.autocorrect_sign(&mut number);
        self.precision.showcase(&mut number);
        if number.is_zero() && self.bounds.max > T::ZERO {
            number.sign = None;
        }
        Commit::new(self.value(&number), self.snapshot(&number))
    }

    fn merge(&self, mut proposal: Proposal) -> Result<Commit<T>> {
        let sign = Reader::new(&self.lexicon).read(&mut proposal);
        let merged = proposal.merged();

        let mut number = Number::parse(merged.iter(), self.options(), &self.lexicon)?;
        if let Some(sign) = sign {
            number.toggle(sign);
        }
        if number.is_negative() && !self.bounds.allows_negative() {
            return Err(Error::Unsigned);
        }
        self.bounds.autocorrect_sign(&mut number);
        self.precision.autocorrect(&mut number);

        let value = self.value(&number);
        let clamped = self.bounds.clamp(value);
        // Integer types saturate, so "999" can read as an i8 of 127.
        let saturated = T::INTEGER && self.to_number(value).integer != number.integer;
        if clamped != value || saturated {
            debug!(?value, ?clamped, "value out of bounds");
            number = self.to_number(clamped);
            self.bounds.autocorrect_sign(&mut number);
            self.precision.autocorrect(&mut number);
        }

        let mut snapshot = self.snapshot(&number);
        let typed = merged.nonvirtuals().any(|symbol| {
            self.lexicon.digit(symbol.character).is_some()
                || self.lexicon.separator(symbol.character) == Some(Separator::Fraction)
        });
        if !typed {
            let zero = self.lexicon.digit_character(Digit::Zero);
            if let Some(index) = snapshot
                .iter()
                .position(|symbol| symbol.character == zero && symbol.is_nonvirtual())
            {
                snapshot.anchor_at(index + 1);
            }
        }
        Ok(Commit::new(self.value(&number), snapshot))
    }
}

impl<T: NumericValue> PartialEq for NumberTextStyle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.bounds == other.bounds
            && self.precision == other.precision
            && self.lexicon == other.lexicon
    }
}

impl<T: NumericValue> fmt::Debug for NumberTextStyle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumberTextStyle")
            .field("locale", &self.lexicon.locale().identifier())
            .field("kind", &self.kind)
            .field("bounds", &self.bounds)
            .field("precision", &self.precision)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locale(identifier: &str) -> Locale {
        Locale::new(identifier).unwrap()
    }

    fn type_at_end<T: NumericValue>(
        style: &NumberTextStyle<T>,
        base: &Snapshot,
        text: &str,
    ) -> Result<Commit<T>> {
        style.merge(Proposal::typing(base.clone(), base.len()..base.len(), text))
    }

    #[test]
    fn grouping_and_labels() {
        let cache = LexiconCache::shared();
        let style = NumberTextStyle::<f64>::currency(&cache, &locale("en_US"), "USD");
        assert_eq!(style.format(&-1234567.5), "-$1,234,567.50");

        let style = NumberTextStyle::<f64>::currency(&cache, &locale("de_DE"), "EUR");
        assert_eq!(style.format(&1234.5), "1.234,50\u{a0}€");

        let style = NumberTextStyle::<f64>::percent(&cache, &locale("fr_FR"));
        assert_eq!(style.format(&0.125), "12,5\u{202f}%");

        let style = NumberTextStyle::<i64>::number(&cache, &locale("ar_EG"));
        assert_eq!(style.format(&1234), "١٬٢٣٤");
    }

    #[test]
    fn symbols_are_classified() {
        let cache = LexiconCache::shared();
        let style = NumberTextStyle::<f64>::currency(&cache, &locale("en_US"), "USD");
        let snapshot = style.interpret(&-1234.5).snapshot;
        let attributes: Vec<_> = snapshot.iter().map(|symbol| symbol.attribute).collect();
        assert_eq!(attributes[0], Attribute::PHANTOM - Attribute::VIRTUAL);
        assert_eq!(attributes[1], Attribute::PHANTOM);
        assert_eq!(attributes[2], Attribute::CONTENT);
        assert_eq!(attributes[3], Attribute::PHANTOM);
        assert_eq!(attributes[7], Attribute::REMOVABLE);
    }

    #[test]
    fn label_with_separator_character_is_phantom() {
        let cache = LexiconCache::shared();
        let francs = Currency::custom("CHF", "Fr.", 2);
        let style = NumberTextStyle::<f64>::currency(&cache, &locale("de_CH"), francs);
        let commit = style.interpret(&5.0);
        assert_eq!(commit.snapshot.characters(), "Fr.\u{a0}5.00");
        assert_eq!(commit.snapshot.nonvirtual_characters(), "5.00");

        let edited = type_at_end(&style, &commit.snapshot, "1").unwrap();
        assert_eq!(edited.value, 5.0);
    }

    #[test]
    fn merge_regroups() {
        let cache = LexiconCache::shared();
        let style = NumberTextStyle::<i32>::number(&cache, &locale("en_US"));
        let base = style.interpret(&123).snapshot;
        let commit = type_at_end(&style, &base, "4").unwrap();
        assert_eq!(commit.value, 1234);
        assert_eq!(commit.snapshot.characters(), "1,234");
    }

    #[test]
    fn empty_field_is_anchored_zero() {
        let cache = LexiconCache::shared();
        let style = NumberTextStyle::<f64>::currency(&cache, &locale("en_US"), "USD");
        let commit = style.merge(Proposal::typing(Snapshot::new(), 0..0, "")).unwrap();
        assert_eq!(commit.snapshot.characters(), "$0");
        assert_eq!(commit.snapshot.anchor(), Some(2));
        assert_eq!(commit.value, 0.0);
    }

    #[test]
    fn sign_keystroke_toggles() {
        let cache = LexiconCache::shared();
        let style = NumberTextStyle::<i32>::number(&cache, &locale("en_US"));
        let base = style.interpret(&12).snapshot;
        let negative = type_at_end(&style, &base, "-").unwrap();
        assert_eq!((negative.value, negative.snapshot.characters().as_str()), (-12, "-12"));
        let positive = type_at_end(&style, &negative.snapshot, "-").unwrap();
        assert_eq!(positive.value, 12);
    }

    #[test]
    fn unsigned_rejects_negative() {
        let cache = LexiconCache::shared();
        let style = NumberTextStyle::<u8>::number(&cache, &locale("en_US"));
        let base = style.interpret(&12).snapshot;
        assert_eq!(type_at_end(&style, &base, "-"), Err(Error::Unsigned));
    }

    #[test]
    fn extra_integer_digits_are_dropped() {
        let cache = LexiconCache::shared();
        let style =
            NumberTextStyle::<f64>::number(&cache, &locale("en_US")).precision_integer(1..=3);
        let base = style.interpret(&999.0).snapshot;
        let commit = type_at_end(&style, &base, "9").unwrap();
        assert_eq!(commit.value, 999.0);
        assert_eq!(commit.snapshot.characters(), "999");

        let style = NumberTextStyle::<i8>::number(&cache, &locale("en_US"));
        let base = style.interpret(&100).snapshot;
        let commit = type_at_end(&style, &base, "0").unwrap();
        assert_eq!(commit.value, 100);
        assert_eq!(commit.snapshot.characters(), "100");
    }

    #[test]
    fn saturated_integers_show_their_value() {
        let cache = LexiconCache::shared();
        let style = NumberTextStyle::<i8>::number(&cache, &locale("en_US"));
        let base = style.interpret(&99).snapshot;
        let commit = type_at_end(&style, &base, "9").unwrap();
        assert_eq!(commit.value, 127);
        assert_eq!(commit.snapshot.characters(), "127");
    }

    #[test]
    fn out_of_bounds_is_clamped() {
        let cache = LexiconCache::shared();
        let style = NumberTextStyle::<i32>::number(&cache, &locale("en_US"))
            .bounds(Bounds::new(0..=100));
        let base = style.interpret(&50).snapshot;
        let commit = type_at_end(&style, &base, "0").unwrap();
        assert_eq!(commit.value, 100);
        assert_eq!(commit.snapshot.characters(), "100");
    }

    #[test]
    fn percent_scales_floats() {
        let cache = LexiconCache::shared();
        let style = NumberTextStyle::<f64>::percent(&cache, &locale("en_US"));
        let base = style.interpret(&0.5).snapshot;
        assert_eq!(base.characters(), "50%");
        let commit = style.merge(Proposal::typing(base, 2..2, "5")).unwrap();
        assert_eq!(commit.value, 5.05);
        assert_eq!(commit.snapshot.characters(), "505%");
    }

    #[test]
    fn pasted_numbers_keep_their_magnitude() {
        let cache = LexiconCache::shared();
        let style = NumberTextStyle::<f64>::number(&cache, &locale("de_DE"));
        for (pasted, value, text) in [("12.5", 12.5, "12,5"), ("1.234,5", 1234.5, "1.234,5")] {
            let commit = style.merge(Proposal::typing(Snapshot::new(), 0..0, pasted)).unwrap();
            assert_eq!(commit.value, value, "{pasted}");
            assert_eq!(commit.snapshot.characters(), text, "{pasted}");
        }
    }

    #[test]
    fn unexpected_character_vetoes() {
        let cache = LexiconCache::shared();
        let style = NumberTextStyle::<f64>::number(&cache, &locale("en_US"));
        let base = style.interpret(&1.0).snapshot;
        assert_eq!(
            type_at_end(&style, &base, "x"),
            Err(Error::Unexpected { character: 'x' })
        );
    }

    #[test]
    fn locale_rebinding_uses_the_cache() {
        let cache = LexiconCache::shared();
        let style = NumberTextStyle::<f64>::number(&cache, &locale("en_US"));
        let german = style.clone().locale(&locale("de_DE"));
        assert_ne!(style, german);
        assert_eq!(german.format(&1234.5), "1.234,5");
        assert_eq!(cache.len(), 2);
    }
}
