//! Triggering an nginx reload.
//!
//! # Design Decisions
//! - Reloading is a capability (`Reloader`) so commands can run against a fake
//! - The child process is awaited; its streams are captured, not inherited
//! - A failed reload does not undo anything written before it

use std::fmt;
use std::io;

use thiserror::Error;
use tokio::process::Command;

/// Arguments passed to the nginx binary.
pub const RELOAD_ARGS: [&str; 2] = ["-s", "reload"];

/// Captured output of a reload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReloadOutput {
    pub stdout: String,
    pub stderr: String,
}

#[derive(Debug, Error)]
pub enum ReloadError {
    #[error("failed to run '{program}': {source}")]
    Spawn { program: String, source: io::Error },

    #[error("nginx reload failed ({}){}", Status(.code), Diagnostics(.stdout, .stderr))]
    Failed {
        code: Option<i32>,
        stdout: String,
        stderr: String,
    },
}

struct Status<'a>(&'a Option<i32>);

impl fmt::Display for Status<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(code) => write!(f, "exit code {}", code),
            None => f.write_str("terminated by signal"),
        }
    }
}

struct Diagnostics<'a>(&'a str, &'a str);

impl fmt::Display for Diagnostics<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stream in [self.0.trim(), self.1.trim()] {
            if !stream.is_empty() {
                write!(f, ": {}", stream)?;
            }
        }
        Ok(())
    }
}

/// Something that can make the reverse proxy pick up the new snippet.
#[allow(async_fn_in_trait)]
pub trait Reloader {
    async fn reload(&self) -> Result<ReloadOutput, ReloadError>;
}

/// Runs `<program> -s reload`.
#[derive(Debug, Clone)]
pub struct NginxReloader {
    program: String,
}

impl NginxReloader {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for NginxReloader {
    fn default() -> Self {
        Self::new("nginx")
    }
}

impl Reloader for NginxReloader {
    async fn reload(&self) -> Result<ReloadOutput, ReloadError> {
        tracing::debug!(program = %self.program, "Reloading nginx");

        let output = Command::new(&self.program)
            .args(RELOAD_ARGS)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| ReloadError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            return Err(ReloadError::Failed {
                code: output.status.code(),
                stdout,
                stderr,
            });
        }

        Ok(ReloadOutput { stdout, stderr })
    }
}
