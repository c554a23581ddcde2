//! Webloader command-line entry point.

use clap::{ColorChoice, Parser};
use webloader::cli::{self, Cli};
use webloader::config::LoaderConfig;
use webloader::{log, logger};

fn main() {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let result = LoaderConfig::load(&cli).and_then(|config| cli::run(&config));
    if let Err(err) = result {
        log!("error"; "{:#}", err);
        std::process::exit(1);
    }
}
