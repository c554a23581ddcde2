//! Fingerprinting asset copier.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rustc_hash::FxHashMap;

use super::{LinkError, create_dir, require_dir};
use crate::handle::{AssetContext, AssetHandle};
use crate::utils::hash::fingerprint_file;
use crate::utils::path::fingerprinted_path;
use crate::utils::walk::walk;
use crate::{debug, log};

/// Mode used when the source file's mode cannot be read.
#[cfg(unix)]
const FALLBACK_FILE_MODE: u32 = 0o666;

/// Copies a source tree, renaming every file to `<base>@<hash><ext>`.
///
/// After [`load`](Self::load), [`asset_path`](Self::asset_path) maps each
/// original relative path (`/`-separated) to its fingerprinted counterpart.
pub struct AssetsLinker {
    src: PathBuf,
    dst: PathBuf,
    mapping: FxHashMap<String, String>,
    handles: Vec<AssetHandle>,
}

impl fmt::Debug for AssetsLinker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssetsLinker")
            .field("src", &self.src)
            .field("dst", &self.dst)
            .field("mapping", &self.mapping.len())
            .field("handles", &self.handles.len())
            .finish()
    }
}

impl AssetsLinker {
    pub fn new(src: impl Into<PathBuf>, dst: impl Into<PathBuf>) -> Self {
        Self {
            src: src.into(),
            dst: dst.into(),
            mapping: FxHashMap::default(),
            handles: Vec::new(),
        }
    }

    /// Copy every file under the source root into the destination root.
    ///
    /// The mapping is rebuilt from scratch. The first failure aborts the run;
    /// files copied so far stay on disk and in the mapping.
    pub fn load(&mut self) -> Result<()> {
        self.mapping.clear();
        require_dir(&self.src)?;
        create_dir(&self.dst)?;

        for entry in walk(&self.src) {
            let entry = entry.map_err(LinkError::Walk)?;
            if entry.is_dir() {
                create_dir(&self.dst.join(&entry.rel))?;
                continue;
            }

            let hash = fingerprint_file(&entry.path).map_err(LinkError::io(&entry.path))?;
            let rel = entry.rel_slash();
            let target = fingerprinted_path(&entry.parent_slash(), &entry.name, &hash);
            self.mapping.insert(rel.clone(), target.clone());
            self.copy(&entry.path, &rel, &target)?;
            debug!("assets"; "{} -> {}", rel, target);
        }

        log!("assets"; "linked {} files into {}", self.mapping.len(), self.dst.display());
        Ok(())
    }

    fn copy(&self, src: &Path, rel: &str, target: &str) -> Result<()> {
        let mut reader = File::open(src).map_err(LinkError::io(src))?;
        let dst = self.dst.join(target);
        let file = create_file(&dst, source_mode(&reader)).map_err(LinkError::io(&dst))?;

        let ctx = AssetContext {
            src_root: &self.src,
            dst_root: &self.dst,
            rel,
            target,
        };
        let mut writer: Box<dyn Write> = Box::new(file);
        for handle in &self.handles {
            writer = handle(&ctx, src, writer)
                .with_context(|| format!("asset handle failed on `{rel}`"))?;
        }

        io::copy(&mut reader, &mut writer).map_err(LinkError::io(&dst))?;
        writer.flush().map_err(LinkError::io(&dst))?;
        Ok(())
    }

    /// Fingerprinted path for an original relative path, from the last run.
    pub fn asset_path(&self, rel: &str) -> Option<&str> {
        self.mapping.get(rel).map(String::as_str)
    }

    pub fn mapping(&self) -> &FxHashMap<String, String> {
        &self.mapping
    }

    pub fn src(&self) -> &Path {
        &self.src
    }

    pub fn dst(&self) -> &Path {
        &self.dst
    }

    pub fn handles(&self) -> &[AssetHandle] {
        &self.handles
    }

    /// Replace the handle list.
    pub fn set_handles(&mut self, handles: Vec<AssetHandle>) {
        self.handles = handles;
    }

    pub fn add_handle(&mut self, handle: AssetHandle) {
        self.handles.push(handle);
    }

    pub fn add_handles(&mut self, handles: impl IntoIterator<Item = AssetHandle>) {
        self.handles.extend(handles);
    }

    /// Linker with a prebuilt mapping, for exercising handles without a copy.
    #[cfg(test)]
    pub(crate) fn with_mapping(pairs: &[(&str, &str)]) -> Self {
        let mut linker = Self::new("", "");
        linker.mapping = pairs
            .iter()
            .map(|(rel, target)| (rel.to_string(), target.to_string()))
            .collect();
        linker
    }
}

#[cfg(unix)]
fn source_mode(file: &File) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    file.metadata()
        .map(|meta| meta.permissions().mode() & 0o7777)
        .unwrap_or(FALLBACK_FILE_MODE)
}

#[cfg(not(unix))]
fn source_mode(_: &File) -> u32 {
    0
}

/// Create or truncate `path` for writing with `mode` (unix only).
fn create_file(path: &Path, mode: u32) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;
    options.open(path)
}
