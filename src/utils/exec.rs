//! Child process execution with inherited stdio.
//!
//! ```ignore
//! let status = Cmd::from_slice(&["python3", "-m", "http.server"])
//!     .cwd("public")
//!     .status()?;
//! ```

use anyhow::{Context, Result, bail};
use std::{
    ffi::{OsStr, OsString},
    path::{Path, PathBuf},
    process::{Command, ExitStatus},
};

/// A command to run in the foreground, sharing this process's terminal.
#[derive(Debug, Clone, Default)]
pub struct Cmd {
    program: OsString,
    args: Vec<OsString>,
    cwd: Option<PathBuf>,
}

impl Cmd {
    pub fn new<S: AsRef<OsStr>>(program: S) -> Self {
        Self {
            program: program.as_ref().to_owned(),
            ..Default::default()
        }
    }

    /// First element is the program, the rest are passed through verbatim.
    pub fn from_slice<S: AsRef<OsStr>>(cmd: &[S]) -> Self {
        let (program, args) = cmd.split_first().map_or((OsString::new(), Vec::new()), |(p, a)| {
            (
                p.as_ref().to_owned(),
                a.iter().map(|s| s.as_ref().to_owned()).collect(),
            )
        });
        Self {
            program,
            args,
            cwd: None,
        }
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args.extend(args.into_iter().map(|a| a.as_ref().to_owned()));
        self
    }

    /// Working directory of the child.
    pub fn cwd<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.cwd = Some(dir.as_ref().to_owned());
        self
    }

    pub fn program_name(&self) -> String {
        self.program.to_string_lossy().to_string()
    }

    /// Command line for log output.
    pub fn display(&self) -> String {
        std::iter::once(&self.program)
            .chain(&self.args)
            .map(|s| s.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Spawn and wait. Spawn failures are errors; exit codes are not.
    pub fn status(&self) -> Result<ExitStatus> {
        if self.program.is_empty() {
            bail!("empty command");
        }
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        if let Some(dir) = &self.cwd {
            command.current_dir(dir);
        }
        command
            .status()
            .with_context(|| format!("failed to start `{}`", self.program_name()))
    }
}
