use crate::script::Step;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Replay an editing session against a text style and print every state.
///
/// Carets are printed inline: `12|34` is a caret, `<|12||>` a selection.
#[derive(Debug, Parser)]
#[command(name = "diffable", version)]
pub struct Cli {
    /// Locale identifier, such as `en_US` or `de_CH`.
    #[arg(short, long, global = true, default_value = "en_US")]
    pub locale: String,

    /// Log file, or a directory for the default log file name.
    #[arg(long, global = true, env = "DIFFABLE_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Plain decimal number.
    Number(NumberArgs),
    /// Currency amount.
    Currency {
        /// ISO 4217 code.
        code: String,
        #[command(flatten)]
        number: NumberArgs,
    },
    /// Percentage, where the value 0.5 shows as 50%.
    Percent(NumberArgs),
    /// Text matching a pattern.
    Pattern {
        /// Template such as `+## (###) ###-##-##`.
        pattern: String,
        /// Placeholder accepting digits.
        #[arg(long, default_value_t = '#')]
        digit: char,
        /// Placeholder accepting letters.
        #[arg(long)]
        letter: Option<char>,
        /// Hide the unfilled part of the pattern.
        #[arg(long)]
        hidden: bool,
        /// Initial value.
        #[arg(long, default_value = "")]
        value: String,
        #[command(flatten)]
        script: ScriptArgs,
    },
}

#[derive(Debug, Args)]
pub struct NumberArgs {
    /// Initial value.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub value: f64,
    /// Smallest accepted value.
    #[arg(long, allow_negative_numbers = true)]
    pub min: Option<f64>,
    /// Largest accepted value.
    #[arg(long, allow_negative_numbers = true)]
    pub max: Option<f64>,
    /// Most fraction digits that can be typed.
    #[arg(long)]
    pub fraction: Option<usize>,
    #[command(flatten)]
    pub script: ScriptArgs,
}

#[derive(Debug, Args)]
pub struct ScriptArgs {
    /// Steps to apply in order: `type:TEXT`, `back`, `left`, `right`, `select:A..B`.
    pub steps: Vec<Step>,
}
