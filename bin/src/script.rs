//! Scripted keystrokes applied to a [`Context`].

use diffable::{notation, Character, Context, DiffableTextStyle, Error};
use std::{fmt, ops::Range, str::FromStr};
use tracing::info;

/// One user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Type or paste text over the selection.
    Type(String),
    /// Backspace.
    Back,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Select a character range, as a mouse would.
    Select(Range<usize>),
}

#[derive(Debug, PartialEq, Eq)]
pub struct StepParseError(String);

impl fmt::Display for StepParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid step {:?}, expected type:TEXT, back, left, right or select:A..B",
            self.0
        )
    }
}

impl std::error::Error for StepParseError {}

impl FromStr for Step {
    type Err = StepParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || StepParseError(s.to_string());
        match s.split_once(':') {
            Some(("type", text)) => Ok(Step::Type(text.to_string())),
            Some(("select", range)) => {
                let (start, end) = range.split_once("..").ok_or_else(invalid)?;
                let start = start.parse().map_err(|_| invalid())?;
                let end = end.parse().map_err(|_| invalid())?;
                Ok(Step::Select(start..end))
            },
            None if s == "back" => Ok(Step::Back),
            None if s == "left" => Ok(Step::Left),
            None if s == "right" => Ok(Step::Right),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Type(text) => write!(f, "type:{text}"),
            Step::Back => f.write_str("back"),
            Step::Left => f.write_str("left"),
            Step::Right => f.write_str("right"),
            Step::Select(range) => write!(f, "select:{}..{}", range.start, range.end),
        }
    }
}

/// Apply `step`. Rejected edits leave the context as it was and are returned.
pub fn apply<St: DiffableTextStyle>(
    context: &mut Context<St, Character>,
    step: &Step,
) -> Result<(), Error> {
    let selection = context.selection();
    match step {
        Step::Type(text) => {
            context.merge(selection, text)?;
        },
        Step::Back if selection.is_empty() => {
            let Some(previous) = selection.start.checked_sub(1) else {
                return Ok(());
            };
            let over_formatting = context
                .snapshot()
                .get(previous)
                .is_some_and(|symbol| symbol.is_virtual());
            if over_formatting {
                context.select(previous..previous, true);
            } else {
                context.merge(previous..selection.start, "")?;
            }
        },
        Step::Back => {
            context.merge(selection, "")?;
        },
        Step::Left => {
            let caret = if selection.is_empty() {
                selection.start.saturating_sub(1)
            } else {
                selection.start
            };
            context.select(caret..caret, true);
        },
        Step::Right => {
            let caret = if selection.is_empty() {
                selection.end + 1
            } else {
                selection.end
            };
            context.select(caret..caret, true);
        },
        Step::Select(range) => {
            context.select(range.clone(), false);
        },
    }
    Ok(())
}

/// The field in caret notation.
pub fn render<St: DiffableTextStyle>(context: &Context<St, Character>) -> String {
    notation::render(&context.text(), context.selection())
}

/// Apply every step, writing one line per state to `out`.
pub fn run<St>(
    context: &mut Context<St, Character>,
    steps: &[Step],
    out: &mut impl fmt::Write,
) -> fmt::Result
where
    St: DiffableTextStyle,
    St::Value: fmt::Debug,
{
    writeln!(out, "{:<16}{:<28}{:?}", "", render(context), context.value())?;
    for step in steps {
        match apply(context, step) {
            Ok(()) => writeln!(
                out,
                "{:<16}{:<28}{:?}",
                step.to_string(),
                render(context),
                context.value()
            )?,
            Err(error) => {
                info!(%step, %error, "step rejected");
                writeln!(out, "{:<16}{:<28}rejected: {error}", step.to_string(), render(context))?
            },
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use diffable::{LexiconCache, Locale, NumberTextStyle, PatternTextStyle};

    fn dollars(value: f64) -> Context<NumberTextStyle<f64>, Character> {
        let cache = LexiconCache::shared();
        let style = NumberTextStyle::currency(&cache, &Locale::new("en_US").unwrap(), "USD");
        Context::focused(style, value)
    }

    #[test]
    fn steps_parse() {
        assert_eq!("type:12".parse::<Step>(), Ok(Step::Type("12".into())));
        assert_eq!("type:".parse::<Step>(), Ok(Step::Type(String::new())));
        assert_eq!("select:1..3".parse::<Step>(), Ok(Step::Select(1..3)));
        assert_eq!("back".parse::<Step>(), Ok(Step::Back));
        assert!("jump".parse::<Step>().is_err());
        assert!("select:1-3".parse::<Step>().is_err());
    }

    #[test]
    fn typing_regroups() {
        let mut context = dollars(123.0);
        apply(&mut context, &Step::Select(4..4)).unwrap();
        assert_eq!(render(&context), "$123|.00");
        apply(&mut context, &Step::Type("4".into())).unwrap();
        assert_eq!(render(&context), "$1,234|.00");
        assert_eq!(*context.value(), 1234.0);
    }

    #[test]
    fn backspace_deletes_through_grouping() {
        let mut context = dollars(1234.0);
        apply(&mut context, &Step::Select(3..3)).unwrap();
        assert_eq!(render(&context), "$1|,234.00");
        apply(&mut context, &Step::Back).unwrap();
        assert_eq!(render(&context), "$|234.00");
        assert_eq!(*context.value(), 234.0);
    }

    #[test]
    fn backspace_over_label_keeps_text() {
        let mut context = dollars(234.0);
        apply(&mut context, &Step::Select(1..1)).unwrap();
        apply(&mut context, &Step::Back).unwrap();
        assert_eq!(render(&context), "$|234.00");
    }

    #[test]
    fn rejected_steps_are_reported() {
        let cache = LexiconCache::shared();
        let style = NumberTextStyle::<f64>::number(&cache, &Locale::new("en_US").unwrap());
        let mut context = Context::focused(style, 1.0);
        let mut out = String::new();
        run(&mut context, &[Step::Type("x".into())], &mut out).unwrap();
        assert!(out.contains("rejected: unexpected 'x' in number"));
        assert_eq!(context.text(), "1");
    }

    #[test]
    fn pattern_session() {
        let style = PatternTextStyle::new("+## (###)").placeholder('#', |c| c.is_ascii_digit());
        let mut context = Context::<_, Character>::focused(style, String::new());
        assert_eq!(render(&context), "+|## (###)");
        for text in ["1", "2", "3"] {
            apply(&mut context, &Step::Type(text.into())).unwrap();
        }
        assert_eq!(render(&context), "+12 (3|##)");
    }
}
