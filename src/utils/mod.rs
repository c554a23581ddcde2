//! Utility modules for the linking pipeline.

pub mod exec;
pub mod hash;
pub mod minify;
pub mod path;
pub mod walk;
