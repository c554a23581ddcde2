//! Command-line interface module.
//!
//! Linking runs first (the HTML linker, which loads its attached assets
//! linker, or the assets linker alone), then the optional command is
//! supervised.

mod args;
pub mod run;

use anyhow::Result;
use std::sync::Arc;

pub use args::Cli;

use crate::config::LoaderConfig;
use crate::debug;
use crate::handle::HtmlHandleRegistry;
use crate::linker::{AssetsLinker, HtmlLinker};

/// The linker a configuration asks for.
#[derive(Debug)]
pub enum Linking {
    Assets(AssetsLinker),
    Html(HtmlLinker),
    None,
}

impl Linking {
    /// Build linkers from a validated config.
    ///
    /// When both are configured the HTML linker owns the assets linker.
    pub fn from_config(config: &LoaderConfig, registry: Arc<HtmlHandleRegistry>) -> Self {
        let assets = config
            .assets
            .as_ref()
            .map(|a| AssetsLinker::new(&a.src, &a.dst));

        match (&config.html, assets) {
            (Some(html), assets) => {
                let mut linker = HtmlLinker::new(registry, &html.src, &html.dst, &html.handles);
                linker.set_assets_prefix(html.prefix.as_str());
                if let Some(assets) = assets {
                    linker.set_assets_linker(assets);
                }
                Self::Html(linker)
            }
            (None, Some(assets)) => Self::Assets(assets),
            (None, None) => Self::None,
        }
    }

    pub fn load(&mut self) -> Result<()> {
        match self {
            Self::Assets(linker) => linker.load(),
            Self::Html(linker) => linker.load(),
            Self::None => {
                debug!("run"; "nothing to link");
                Ok(())
            }
        }
    }
}

/// Link, then supervise the command.
pub fn run(config: &LoaderConfig) -> Result<()> {
    let registry = Arc::new(HtmlHandleRegistry::builtin());
    Linking::from_config(config, registry).load()?;
    run::supervise(&config.run)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AssetsConfig, HtmlConfig, RunConfig};
    use std::fs;
    use tempfile::TempDir;

    fn config(root: &std::path::Path, html: bool, assets: bool) -> LoaderConfig {
        LoaderConfig {
            assets: assets.then(|| AssetsConfig {
                src: root.join("assets"),
                dst: root.join("public/assets"),
            }),
            html: html.then(|| HtmlConfig {
                src: root.join("pages"),
                dst: root.join("public"),
                prefix: "/assets".into(),
                handles: vec!["!zip".into()],
            }),
            run: RunConfig::default(),
            config_path: None,
        }
    }

    #[test]
    fn test_html_owns_assets() {
        let dir = TempDir::new().unwrap();
        let registry = Arc::new(HtmlHandleRegistry::builtin());

        let Linking::Html(linker) = Linking::from_config(&config(dir.path(), true, true), registry)
        else {
            panic!("expected an html linker");
        };
        assert!(linker.assets_linker().is_some());
        assert_eq!(linker.assets_prefix(), "/assets/");
        assert!(!linker.handle_status("zip"));
    }

    #[test]
    fn test_assets_only() {
        let dir = TempDir::new().unwrap();
        let registry = Arc::new(HtmlHandleRegistry::builtin());
        let linking = Linking::from_config(&config(dir.path(), false, true), registry);
        assert!(matches!(linking, Linking::Assets(_)));
    }

    #[test]
    fn test_run_links_everything() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("assets")).unwrap();
        fs::create_dir_all(root.join("pages")).unwrap();
        fs::write(root.join("assets/app.js"), "go()").unwrap();
        fs::write(root.join("pages/index.html"), r#"<script src="@/app.js"></script>"#).unwrap();

        run(&config(root, true, true)).unwrap();

        let out = fs::read_to_string(root.join("public/index.html")).unwrap();
        let target = format!("app@{}.js", crate::utils::hash::fingerprint("go()"));
        assert!(out.contains(&format!(r#"src="/assets/{target}""#)), "{out}");
        assert!(root.join("public/assets").join(target).exists());
    }
}
