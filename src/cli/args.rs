//! Command-line interface definitions.

use clap::{ArgAction, ColorChoice, Parser};
use std::path::PathBuf;

/// Fingerprint assets, rewrite markup, then run a command.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: webloader.toml, optional)
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Copy assets from SRC to DST under fingerprinted names
    #[arg(long, num_args = 2, value_names = ["SRC", "DST"], action = ArgAction::Set)]
    pub assets: Vec<PathBuf>,

    /// Rewrite markup from SRC to DST, linking assets under URL
    #[arg(long, num_args = 3, value_names = ["SRC", "DST", "URL"], action = ArgAction::Set)]
    pub html: Vec<String>,

    /// Enable (`id`) or disable (`!id`) an HTML handle
    #[arg(long = "handle", value_name = "TOKEN", allow_hyphen_values = true)]
    pub handle: Vec<String>,

    /// Working directory for the command
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub path: Option<PathBuf>,

    /// Restart the command after SECS when it fails
    #[arg(long, value_name = "SECS", allow_negative_numbers = true)]
    pub restart: Option<i64>,

    /// Enable verbose output
    #[arg(short = 'V', long)]
    pub verbose: bool,

    /// Command to run after linking
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "CMD")]
    pub command: Vec<String>,
}
