//! Keystroke translation for number styles.
//!
//! Widgets deliver whatever the keyboard produced. Before parsing, the typed text is
//! rewritten in the style's locale so that an ASCII `5` or `.` works on every layout.

use super::{Digit, Separator, Sign};
use crate::{lexicon::Lexicon, proposal::Proposal, snapshot::Snapshot};
use tracing::trace;

const MINUS_SIGN: char = '\u{2212}';

pub(super) struct Reader<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> Reader<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Prepare a proposal for parsing, returning the sign keystroke if that is what
    /// it was.
    pub fn read(&self, proposal: &mut Proposal) -> Option<Sign> {
        let sign = self.consume_single_sign_input(proposal);
        if sign.is_none() {
            self.translate_single_character_input(proposal);
            self.translate_multi_character_input(proposal);
        }
        sign
    }

    fn sign(&self, character: char) -> Option<Sign> {
        if self.lexicon.digit(character).is_some() || self.lexicon.separator(character).is_some() {
            return None;
        }
        self.lexicon.sign(character).or(match character {
            '-' | MINUS_SIGN => Some(Sign::Negative),
            '+' => Some(Sign::Positive),
            _ => None,
        })
    }

    /// A lone sign keystroke is a toggle, not text: take it out of the proposal.
    pub fn consume_single_sign_input(&self, proposal: &mut Proposal) -> Option<Sign> {
        let sign = self.sign(proposal.single()?.character)?;
        trace!(?sign, "sign keystroke");
        proposal.consume_replacement();
        Some(sign)
    }

    /// Map a single ASCII digit or separator keystroke to the locale's character.
    ///
    /// Both `.` and `,` mean the fraction separator, whatever the locale groups with.
    pub fn translate_single_character_input(&self, proposal: &mut Proposal) {
        let Some(symbol) = proposal.single() else {
            return;
        };
        let character = symbol.character;
        let translated = if let Some(digit) = Digit::from_ascii(character) {
            self.lexicon.digit_character(digit)
        } else if matches!(character, '.' | ',') || self.lexicon.separator(character).is_some() {
            self.lexicon.separator_character(Separator::Fraction)
        } else {
            return;
        };
        if translated != character {
            let mut replacement = Snapshot::new();
            replacement.append(symbol.with_character(translated));
            proposal.replacement = replacement;
        }
    }

    /// Map pasted ASCII digits, signs and separators to the locale.
    ///
    /// Separators that read as grouping are dropped and the rest become the fraction
    /// separator, so `12.5` pastes as twelve and a half in every locale.
    pub fn translate_multi_character_input(&self, proposal: &mut Proposal) {
        if proposal.replacement.len() < 2 {
            return;
        }
        let characters: Vec<char> = proposal.replacement.iter().map(|s| s.character).collect();
        let fraction = self.lexicon.separator_character(Separator::Fraction);
        proposal.replacement = proposal
            .replacement
            .iter()
            .enumerate()
            .filter_map(|(index, symbol)| {
                let character = symbol.character;
                let translated = if let Some(digit) = Digit::from_ascii(character) {
                    self.lexicon.digit_character(digit)
                } else if self.is_separator(character) {
                    if self.is_grouping(&characters, index) {
                        return None;
                    }
                    fraction
                } else if let Some(sign) = self.sign(character) {
                    self.lexicon.sign_character(sign)
                } else {
                    character
                };
                Some(symbol.with_character(translated))
            })
            .collect();
        trace!(replacement = %proposal.replacement.characters(), "translated paste");
    }

    fn is_separator(&self, character: char) -> bool {
        matches!(character, '.' | ',') || self.lexicon.separator(character).is_some()
    }

    fn is_digit(&self, character: char) -> bool {
        Digit::from_ascii(character).is_some() || self.lexicon.digit(character).is_some()
    }

    /// A separator groups when a full group of digits follows it up to the end or the
    /// next separator, and it is the locale's grouping character or another separator
    /// comes later.
    fn is_grouping(&self, characters: &[char], index: usize) -> bool {
        let character = characters[index];
        let size = self.lexicon.grouping_size();
        if size == 0 {
            return false;
        }
        let rest = &characters[index + 1..];
        let digits = rest.iter().take_while(|&&c| self.is_digit(c)).count();
        let closed = match rest.get(digits) {
            Some(&c) => self.is_separator(c),
            None => true,
        };
        let later = rest.iter().any(|&c| self.is_separator(c));
        digits == size
            && closed
            && (character == self.lexicon.separator_character(Separator::Grouping) || later)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{Kind, Locale};

    fn lexicon(identifier: &str) -> Lexicon {
        Lexicon::new(Locale::new(identifier).unwrap(), Kind::Number)
    }

    #[test]
    fn sign_keystroke_is_consumed() {
        let lexicon = lexicon("sv_SE");
        let reader = Reader::new(&lexicon);
        let mut proposal = Proposal::typing(Snapshot::content("12"), 2..2, "-");
        assert_eq!(reader.read(&mut proposal), Some(Sign::Negative));
        assert_eq!(proposal.merged().characters(), "12");
    }

    #[test]
    fn ascii_separator_becomes_fraction_separator() {
        let lexicon = lexicon("de_DE");
        let reader = Reader::new(&lexicon);
        for typed in [".", ","] {
            let mut proposal = Proposal::typing(Snapshot::content("12"), 2..2, typed);
            reader.read(&mut proposal);
            assert_eq!(proposal.merged().characters(), "12,");
        }
    }

    #[test]
    fn ascii_digit_becomes_locale_digit() {
        let lexicon = lexicon("ar_EG");
        let reader = Reader::new(&lexicon);
        let mut proposal = Proposal::typing(Snapshot::content("١"), 1..1, "2");
        reader.read(&mut proposal);
        assert_eq!(proposal.merged().characters(), "١٢");
    }

    #[test]
    fn paste_drops_grouping() {
        let lexicon = lexicon("en_US");
        let reader = Reader::new(&lexicon);
        let mut proposal = Proposal::typing(Snapshot::new(), 0..0, "-1,234.5");
        assert_eq!(reader.read(&mut proposal), None);
        assert_eq!(proposal.merged().characters(), "-1234.5");
    }

    #[test]
    fn paste_separators_keep_their_magnitude() {
        for (identifier, pasted, expected) in [
            ("de_DE", "12.5", "12,5"),
            ("de_DE", "1.234,5", "1234,5"),
            ("de_DE", "1.234.567", "1234567"),
            ("en_US", "1,234", "1234"),
            ("en_US", "1,5", "1.5"),
            ("fr_FR", "1,234.5", "1234,5"),
        ] {
            let lexicon = lexicon(identifier);
            let reader = Reader::new(&lexicon);
            let mut proposal = Proposal::typing(Snapshot::new(), 0..0, pasted);
            reader.read(&mut proposal);
            assert_eq!(proposal.merged().characters(), expected, "{identifier} {pasted}");
        }
    }

    #[test]
    fn paste_maps_signs_to_locale() {
        let lexicon = lexicon("sv_SE");
        let reader = Reader::new(&lexicon);
        let mut proposal = Proposal::typing(Snapshot::new(), 0..0, "-12");
        reader.read(&mut proposal);
        assert_eq!(proposal.merged().characters(), "\u{2212}12");
    }
}
