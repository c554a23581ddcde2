//! Path utilities.
//!
//! Pure functions for path manipulation. No side effects.
//!
//! - [`fs`]: Resolving relative paths against a base directory
//! - [`name`]: Fingerprinted file names and slash-separated relative paths

pub mod fs;
pub mod name;

pub use fs::resolve_against;
pub use name::{fingerprinted_path, split_name, to_slash};
