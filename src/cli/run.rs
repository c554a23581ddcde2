//! Command supervisor.

use anyhow::{Result, bail};
use std::thread;

use crate::config::RunConfig;
use crate::log;
use crate::utils::exec::Cmd;

/// Run the configured command in the foreground.
///
/// Success ends supervision. A failing exit is restarted after the delay
/// when restarting is enabled, and is an error otherwise. Failing to start
/// the command is always an error.
pub fn supervise(run: &RunConfig) -> Result<()> {
    if run.command.is_empty() {
        return Ok(());
    }
    let mut cmd = Cmd::from_slice(&run.command);
    if let Some(path) = &run.path {
        cmd = cmd.cwd(path);
    }

    loop {
        log!("run"; "{}", cmd.display());
        let status = cmd.status()?;
        if status.success() {
            return Ok(());
        }
        let Some(delay) = run.restart else {
            bail!("`{}` exited with {}", cmd.program_name(), status);
        };
        log!(
            "run";
            "`{}` exited with {}, restarting in {}s",
            cmd.program_name(),
            status,
            delay.as_secs()
        );
        thread::sleep(delay);
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::TempDir;

    fn sh(script: &str, dir: &TempDir, restart: Option<Duration>) -> RunConfig {
        RunConfig {
            path: Some(dir.path().to_path_buf()),
            restart,
            command: vec!["sh".into(), "-c".into(), script.into()],
        }
    }

    #[test]
    fn test_success_ends_supervision() {
        let dir = TempDir::new().unwrap();
        supervise(&sh("touch ran", &dir, None)).unwrap();
        assert!(dir.path().join("ran").exists());
    }

    #[test]
    fn test_failure_without_restart() {
        let dir = TempDir::new().unwrap();
        let err = supervise(&sh("exit 2", &dir, None)).unwrap_err();
        assert!(err.to_string().contains("exited with"));
    }

    #[test]
    fn test_restarts_until_success() {
        let dir = TempDir::new().unwrap();
        // Fails twice, then succeeds
        let script = "echo x >> runs; [ $(wc -l < runs) -ge 3 ]";
        supervise(&sh(script, &dir, Some(Duration::ZERO))).unwrap();
        let runs = std::fs::read_to_string(dir.path().join("runs")).unwrap();
        assert_eq!(runs.lines().count(), 3);
    }

    #[test]
    fn test_spawn_failure_not_restarted() {
        let run = RunConfig {
            path: None,
            restart: Some(Duration::ZERO),
            command: vec!["webloader-no-such-program".into()],
        };
        assert!(supervise(&run).is_err());
    }

    #[test]
    fn test_empty_command_is_noop() {
        supervise(&RunConfig::default()).unwrap();
    }
}
