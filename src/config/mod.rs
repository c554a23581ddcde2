//! Loader configuration: `webloader.toml` merged with command-line flags.
//!
//! [`LoaderConfig::load`] reads the file (a missing default file is fine, a
//! missing explicit one is not), overlays the CLI, resolves relative paths
//! against the current directory and validates the result.

mod error;
mod file;

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub use error::ConfigError;
pub use file::{AssetsSection, ConfigFile, HtmlSection, RunSection};

use crate::cli::Cli;
use crate::utils::path::resolve_against;

/// Default config file name.
pub const DEFAULT_CONFIG: &str = "webloader.toml";

/// Validated asset linking settings.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetsConfig {
    pub src: PathBuf,
    pub dst: PathBuf,
}

/// Validated markup linking settings.
#[derive(Debug, Clone, PartialEq)]
pub struct HtmlConfig {
    pub src: PathBuf,
    pub dst: PathBuf,
    pub prefix: String,
    pub handles: Vec<String>,
}

/// Validated supervisor settings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunConfig {
    pub path: Option<PathBuf>,
    /// `None` disables restarting.
    pub restart: Option<Duration>,
    pub command: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoaderConfig {
    pub assets: Option<AssetsConfig>,
    pub html: Option<HtmlConfig>,
    pub run: RunConfig,
    /// Config file that was read, if any.
    pub config_path: Option<PathBuf>,
}

impl LoaderConfig {
    /// Load the config file named by the CLI, overlay the CLI and validate.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let (path, explicit) = match &cli.config {
            Some(path) => (resolve_against(path, &cwd), true),
            None => (cwd.join(DEFAULT_CONFIG), false),
        };

        let (mut file, config_path) = if explicit || path.exists() {
            (Self::read(&path)?, Some(path))
        } else {
            (ConfigFile::default(), None)
        };
        file.merge_cli(cli);

        let mut config = Self::from_file(file, &cwd)?;
        config.config_path = config_path;
        Ok(config)
    }

    fn read(path: &Path) -> Result<ConfigFile, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::parse(&content)
    }

    /// Parse config file contents.
    pub fn parse(content: &str) -> Result<ConfigFile, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Validate a merged file, resolving relative paths against `base`.
    pub fn from_file(file: ConfigFile, base: &Path) -> Result<Self, ConfigError> {
        let resolve = |path: PathBuf| resolve_against(&path, base);

        let assets = match file.assets {
            Some(AssetsSection {
                src: Some(src),
                dst: Some(dst),
            }) => Some(AssetsConfig {
                src: resolve(src),
                dst: resolve(dst),
            }),
            Some(_) => {
                return Err(ConfigError::Validation(
                    "[assets] needs both `src` and `dst`".into(),
                ));
            }
            None => None,
        };

        let html = match file.html {
            Some(HtmlSection {
                src: Some(src),
                dst: Some(dst),
                prefix,
                handles,
            }) => Some(HtmlConfig {
                src: resolve(src),
                dst: resolve(dst),
                prefix,
                handles,
            }),
            Some(_) => {
                return Err(ConfigError::Validation(
                    "[html] needs both `src` and `dst`".into(),
                ));
            }
            None => None,
        };

        let run = RunConfig {
            path: file.run.path.map(resolve),
            restart: file
                .run
                .restart
                .map(|secs| Duration::from_secs(secs.max(0).unsigned_abs())),
            command: file.run.command,
        };

        if assets.is_none() && html.is_none() && run.command.is_empty() {
            return Err(ConfigError::Validation(
                "nothing to do: configure [assets], [html] or a command".into(),
            ));
        }

        Ok(Self {
            assets,
            html,
            run,
            config_path: None,
        })
    }
}
