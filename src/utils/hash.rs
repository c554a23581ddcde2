//! Content hashing for asset fingerprints using FxHash.
//!
//! `FxHasher` has no per-process seed, so fingerprints are stable across
//! runs. This is a cache-busting checksum, not a security hash.
//!
//! # Usage
//!
//! ```ignore
//! use webloader::utils::hash;
//!
//! let h = hash::compute(b"bytes"); // -> u64
//! let h = hash::compute_reader(File::open("app.js")?)?;
//! let fp = hash::fingerprint("some content"); // -> "a1b2c3d4"
//! let fp = hash::fingerprint_file(Path::new("logo.png"))?;
//! ```

use rustc_hash::FxHasher;
use std::fs::File;
use std::hash::Hasher;
use std::io::{self, Read};
use std::path::Path;

/// Length of a fingerprint in hex characters.
pub const FINGERPRINT_LEN: usize = 8;

/// Block size the hasher is fed with.
///
/// Streamed input is re-chunked into fixed blocks so the result depends
/// only on the bytes, never on how the reader splits them.
const BLOCK: usize = 8192;

/// Hasher fed in fixed-size blocks.
struct BlockHasher {
    inner: FxHasher,
    block: Vec<u8>,
}

impl BlockHasher {
    fn new() -> Self {
        Self {
            inner: FxHasher::default(),
            block: Vec::with_capacity(BLOCK),
        }
    }

    fn update(&mut self, mut data: &[u8]) {
        while !data.is_empty() {
            let take = (BLOCK - self.block.len()).min(data.len());
            self.block.extend_from_slice(&data[..take]);
            data = &data[take..];
            if self.block.len() == BLOCK {
                self.inner.write(&self.block);
                self.block.clear();
            }
        }
    }

    fn finish(mut self) -> u64 {
        if !self.block.is_empty() {
            self.inner.write(&self.block);
        }
        self.inner.finish()
    }
}

/// Compute hash of in-memory bytes.
pub fn compute<T: AsRef<[u8]> + ?Sized>(value: &T) -> u64 {
    let mut hasher = BlockHasher::new();
    hasher.update(value.as_ref());
    hasher.finish()
}

/// Compute hash from a reader (streaming, for large files).
///
/// Produces the same value as [`compute`] over the same bytes.
pub fn compute_reader(mut reader: impl Read) -> io::Result<u64> {
    let mut hasher = BlockHasher::new();
    let mut buffer = [0u8; BLOCK];
    loop {
        match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => hasher.update(&buffer[..n]),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(hasher.finish())
}

/// Format a hash as an 8-char hex fingerprint.
#[inline]
fn to_fingerprint(hash: u64) -> String {
    format!("{:016x}", hash)[..FINGERPRINT_LEN].to_string()
}

/// Compute hash and return as 8-char hex fingerprint.
///
/// Useful for cache-busting filenames (e.g. `style@a1b2c3d4.css`).
#[inline]
pub fn fingerprint<T: AsRef<[u8]> + ?Sized>(value: &T) -> String {
    to_fingerprint(compute(value))
}

/// Fingerprint a file by streaming its content.
pub fn fingerprint_file(path: &Path) -> io::Result<String> {
    let file = File::open(path)?;
    compute_reader(file).map(to_fingerprint)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    /// Reader that hands out at most `step` bytes per call.
    struct Trickle<'a> {
        data: &'a [u8],
        step: usize,
    }

    impl Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = self.step.min(buf.len()).min(self.data.len());
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    #[test]
    fn test_fingerprint_shape() {
        let fp = fingerprint("body { color: red; }");
        assert_eq!(fp.len(), FINGERPRINT_LEN);
        assert!(fp.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_fingerprint_deterministic() {
        assert_eq!(fingerprint("same"), fingerprint("same"));
        assert_ne!(fingerprint("same"), fingerprint("sane"));
    }

    #[test]
    fn test_reader_independent_of_read_size() {
        let data: Vec<u8> = (0..20_000u32).map(|i| (i % 251) as u8).collect();
        let whole = compute_reader(Cursor::new(&data)).unwrap();
        assert_eq!(whole, compute(&data));
        for step in [1, 3, 7, 8, 13, 4096] {
            let trickled = compute_reader(Trickle { data: &data, step }).unwrap();
            assert_eq!(whole, trickled, "step {step}");
        }
    }

    #[test]
    fn test_file_matches_buffer() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("app.js");
        fs::write(&file, "console.log(1)").unwrap();

        assert_eq!(fingerprint_file(&file).unwrap(), fingerprint("console.log(1)"));

        fs::write(&file, "console.log(2)").unwrap();
        assert_ne!(fingerprint_file(&file).unwrap(), fingerprint("console.log(1)"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = fingerprint_file(&dir.path().join("missing.css")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
