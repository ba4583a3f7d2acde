//! Text with the caret or selection written inline.
//!
//! Tests and the command line describe field states in this notation, so that a
//! whole editing step reads as one string.
//!
//! # Syntax
//!
//! - `|` is a caret
//! - `<|text||>` is a selection with the caret at its end
//! - `<||text|>` is a selection with the caret at its start
//! - `||` is a literal `|`, inside a selection too
//!
//! Offsets are in characters.
//!
//! ```ignore
//! let parsed = notation::parse("$1,2|34").unwrap();
//! assert_eq!(parsed.text, "$1,234");
//! assert_eq!(parsed.selection, 4..4);
//! ```

use std::ops::Range;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed {
    /// Text with the markers removed.
    pub text: String,
    /// Selection in character offsets; empty for a caret.
    pub selection: Range<usize>,
    /// Whether the caret sits at the start of a selection.
    pub caret_at_start: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("no caret or selection in {0:?}")]
    MissingCaret(String),

    #[error("more than one caret or selection")]
    MultipleCarets,

    #[error("selection missing caret marker (use <||text|> or <|text||>)")]
    SelectionMissingCaret,

    #[error("caret must be at a selection boundary")]
    CaretNotAtBoundary,

    #[error("unclosed selection (missing |>)")]
    UnclosedSelection,

    #[error("unexpected |> without matching <|")]
    UnexpectedSelectionEnd,

    #[error("selection has a caret at both ends")]
    CaretAtBothEnds,
}

pub fn parse(input: &str) -> Result<Parsed, ParseError> {
    let mut text = String::with_capacity(input.len());
    let mut offset = 0;
    let mut found: Option<(Range<usize>, bool)> = None;
    // Start offset and whether the caret is at the start.
    let mut open: Option<(usize, bool)> = None;
    let mut characters = input.chars().peekable();

    let place = |found: &mut Option<(Range<usize>, bool)>, range, at_start| {
        if found.replace((range, at_start)).is_some() {
            return Err(ParseError::MultipleCarets);
        }
        Ok(())
    };

    while let Some(character) = characters.next() {
        match (character, characters.peek()) {
            ('|', Some('|')) => {
                characters.next();
                if characters.next_if_eq(&'>').is_some() {
                    match open.take() {
                        Some((_, true)) => return Err(ParseError::CaretAtBothEnds),
                        Some((start, false)) => place(&mut found, start..offset, false)?,
                        None => return Err(ParseError::UnexpectedSelectionEnd),
                    }
                } else {
                    text.push('|');
                    offset += 1;
                }
            },
            ('|', Some('>')) => {
                characters.next();
                match open.take() {
                    Some((start, true)) => place(&mut found, start..offset, true)?,
                    Some((_, false)) => return Err(ParseError::SelectionMissingCaret),
                    None => return Err(ParseError::UnexpectedSelectionEnd),
                }
            },
            ('|', _) => {
                if open.is_some() {
                    return Err(ParseError::CaretNotAtBoundary);
                }
                place(&mut found, offset..offset, false)?;
            },
            ('<', Some('|')) => {
                characters.next();
                if open.is_some() {
                    return Err(ParseError::UnclosedSelection);
                }
                // An odd run of pipes starts with the caret, the rest are literals.
                let mut pipes = 0;
                while characters.next_if_eq(&'|').is_some() {
                    pipes += 1;
                }
                open = Some((offset, pipes % 2 == 1));
                for _ in 0..pipes / 2 {
                    text.push('|');
                    offset += 1;
                }
            },
            (character, _) => {
                text.push(character);
                offset += 1;
            },
        }
    }

    if open.is_some() {
        return Err(ParseError::UnclosedSelection);
    }
    let (selection, caret_at_start) = found.ok_or_else(|| ParseError::MissingCaret(input.into()))?;
    Ok(Parsed {
        text,
        selection,
        caret_at_start,
    })
}

/// Write `text` with `selection` (character offsets) marked, caret at the end.
pub fn render(text: &str, selection: Range<usize>) -> String {
    let mut out = String::with_capacity(text.len() + 4);
    let mut characters = text.chars();
    let mut offset = 0;

    let mut copy_until = |out: &mut String, until: usize| {
        while offset < until {
            match characters.next() {
                Some('|') => out.push_str("||"),
                Some(character) => out.push(character),
                None => break,
            }
            offset += 1;
        }
    };

    copy_until(&mut out, selection.start);
    if selection.is_empty() {
        out.push('|');
    } else {
        out.push_str("<|");
        copy_until(&mut out, selection.end);
        out.push_str("||>");
    }
    copy_until(&mut out, usize::MAX);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caret() {
        let parsed = parse("$1,2|34").unwrap();
        assert_eq!(parsed.text, "$1,234");
        assert_eq!(parsed.selection, 4..4);
    }

    #[test]
    fn selections() {
        let parsed = parse("a<|bc||>d").unwrap();
        assert_eq!((parsed.text.as_str(), parsed.selection), ("abcd", 1..3));
        assert!(!parsed.caret_at_start);

        let parsed = parse("a<||bc|>d").unwrap();
        assert_eq!(parsed.selection, 1..3);
        assert!(parsed.caret_at_start);
    }

    #[test]
    fn offsets_are_characters() {
        let parsed = parse("1\u{a0}234,5|\u{a0}€").unwrap();
        assert_eq!(parsed.selection, 7..7);
    }

    #[test]
    fn escaped_pipe() {
        let parsed = parse("+12||00|").unwrap();
        assert_eq!(parsed.text, "+12|00");
        assert_eq!(parsed.selection, 6..6);
    }

    #[test]
    fn escaped_pipe_in_selection() {
        let parsed = parse("+12<|||000||>").unwrap();
        assert_eq!((parsed.text.as_str(), parsed.selection), ("+12|000", 3..7));

        let parsed = parse("<||||x|||>").unwrap();
        assert_eq!((parsed.text.as_str(), parsed.selection), ("|x|", 0..3));
        assert!(parsed.caret_at_start);
    }

    #[test]
    fn errors() {
        assert_eq!(parse("12"), Err(ParseError::MissingCaret("12".into())));
        assert_eq!(parse("|1|"), Err(ParseError::MultipleCarets));
        assert_eq!(parse("<|12|>"), Err(ParseError::SelectionMissingCaret));
        assert_eq!(parse("<|1|2||>"), Err(ParseError::CaretNotAtBoundary));
        assert_eq!(parse("<|12"), Err(ParseError::UnclosedSelection));
        assert_eq!(parse("12|>"), Err(ParseError::UnexpectedSelectionEnd));
    }

    #[test]
    fn render_round_trips() {
        for marked in [
            "|",
            "12|34",
            "<|12||>",
            "$<|1,2||>34",
            "+1||2|",
            "+1<|2||00||>",
            "<|||x||>",
        ] {
            let parsed = parse(marked).unwrap();
            assert_eq!(render(&parsed.text, parsed.selection), marked);
        }
    }
}
