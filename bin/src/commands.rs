use crate::{
    cli::{Cli, Command, NumberArgs},
    script::{self, Step},
};
use anyhow::{ensure, Context as _};
use diffable::{
    Bounds, Character, Context, DiffableTextStyle, LexiconCache, Locale, NumberTextStyle,
    PatternTextStyle,
};
use std::fmt;
use tracing::debug;

pub fn handle(cli: Cli) -> anyhow::Result<()> {
    let locale =
        Locale::new(&cli.locale).with_context(|| format!("cannot use locale {}", cli.locale))?;
    let cache = LexiconCache::shared();
    debug!(locale = locale.identifier(), command = ?cli.command, "replaying session");

    match cli.command {
        Command::Number(args) => {
            let style = NumberTextStyle::number(&cache, &locale);
            replay_number(style, args)
        },
        Command::Currency { code, number } => {
            let style = NumberTextStyle::currency(&cache, &locale, code.as_str());
            replay_number(style, number)
        },
        Command::Percent(args) => {
            let style = NumberTextStyle::percent(&cache, &locale);
            replay_number(style, args)
        },
        Command::Pattern {
            pattern,
            digit,
            letter,
            hidden,
            value,
            script,
        } => {
            let mut style = PatternTextStyle::new(&pattern)
                .placeholder(digit, |c| c.is_ascii_digit())
                .hidden(hidden);
            if let Some(letter) = letter {
                ensure!(letter != digit, "--letter and --digit are both {letter:?}");
                style = style.placeholder(letter, char::is_alphabetic);
            }
            replay(style, value, &script.steps)
        },
    }
}

fn replay_number(style: NumberTextStyle<f64>, args: NumberArgs) -> anyhow::Result<()> {
    let min = args.min.unwrap_or(f64::MIN);
    let max = args.max.unwrap_or(f64::MAX);
    ensure!(min <= max, "--min {min} is greater than --max {max}");

    let mut style = style.bounds(Bounds::new(min..=max));
    if let Some(fraction) = args.fraction {
        style = style.precision_fraction(0..=fraction);
    }
    replay(style, args.value, &args.script.steps)
}

fn replay<St>(style: St, value: St::Value, steps: &[Step]) -> anyhow::Result<()>
where
    St: DiffableTextStyle,
    St::Value: fmt::Debug,
{
    let mut context = Context::<St, Character>::focused(style, value);
    let mut out = String::new();
    script::run(&mut context, steps, &mut out).context("cannot render session")?;
    print!("{out}");

    context.unfocus();
    println!("{:<16}{}", "unfocused", context.text());
    Ok(())
}
