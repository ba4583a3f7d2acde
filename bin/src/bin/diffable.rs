use clap::Parser;
use diffable_bin::{cli::Cli, commands};
use diffable_log::LogConfig;

fn main() {
    let cli = Cli::parse();

    let _log_guard = diffable_log::init(LogConfig {
        log_file_path: cli.log_file.clone(),
    })
    .map_err(|e| eprintln!("Warning: logging disabled: {e}"))
    .ok();

    if let Err(e) = commands::handle(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
