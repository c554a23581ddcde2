//! Raw `webloader.toml` contents, before validation.
//!
//! ```toml
//! [assets]
//! src = "assets"
//! dst = "public/assets"
//!
//! [html]
//! src = "pages"
//! dst = "public"
//! prefix = "/assets/"
//! handles = ["!zip"]
//!
//! [run]
//! path = "public"
//! restart = 3
//! command = ["python3", "-m", "http.server"]
//! ```

use serde::Deserialize;
use std::path::PathBuf;

use crate::cli::Cli;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub assets: Option<AssetsSection>,
    pub html: Option<HtmlSection>,
    #[serde(default)]
    pub run: RunSection,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssetsSection {
    pub src: Option<PathBuf>,
    pub dst: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HtmlSection {
    pub src: Option<PathBuf>,
    pub dst: Option<PathBuf>,
    /// URL prefix for rewritten asset references.
    #[serde(default)]
    pub prefix: String,
    /// Handle toggles: `id` enables, `!id` disables.
    #[serde(default)]
    pub handles: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunSection {
    /// Working directory of the command.
    pub path: Option<PathBuf>,
    /// Restart delay in seconds; absent disables restarting.
    pub restart: Option<i64>,
    #[serde(default)]
    pub command: Vec<String>,
}

impl ConfigFile {
    /// Overlay command-line values. Given flags replace file values; handle
    /// toggles are appended so they apply after the file's.
    pub fn merge_cli(&mut self, cli: &Cli) {
        if let [src, dst] = cli.assets.as_slice() {
            self.assets = Some(AssetsSection {
                src: Some(src.clone()),
                dst: Some(dst.clone()),
            });
        }

        if let [src, dst, prefix] = cli.html.as_slice() {
            let html = self.html.get_or_insert_with(HtmlSection::default);
            html.src = Some(PathBuf::from(src));
            html.dst = Some(PathBuf::from(dst));
            html.prefix = prefix.clone();
        }
        if !cli.handle.is_empty() {
            self.html
                .get_or_insert_with(HtmlSection::default)
                .handles
                .extend(cli.handle.iter().cloned());
        }

        if let Some(path) = &cli.path {
            self.run.path = Some(path.clone());
        }
        if let Some(restart) = cli.restart {
            self.run.restart = Some(restart);
        }
        if !cli.command.is_empty() {
            self.run.command = cli.command.clone();
        }
    }
}
