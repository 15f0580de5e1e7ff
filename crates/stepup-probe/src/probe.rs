//! Version probing of database installations.

use crate::runner::{CommandRunner, ProcessRunner};
use std::path::Path;
use stepup_version::{parse_banner, InstalledVersion, ParseError};
use thiserror::Error;
use tracing::debug;

/// Name of the version-reporting binary under `<root>/bin`.
pub const VERSION_BINARY: &str = "postgres";
/// Flag asking the binary for its version banner.
pub const VERSION_FLAG: &str = "--gp-version";

/// Errors produced while retrieving an installation's version.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The version command could not be started.
    #[error("could not start {command:?}: {source}")]
    Spawn {
        /// The command line that failed to start.
        command: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The version command exited non-zero.
    #[error("{command:?} failed with {output:?} (exit code {code:?})")]
    Execution {
        /// The command line that failed.
        command: String,
        /// Combined output captured from the failed run.
        output: String,
        /// Exit code, when the process exited normally.
        code: Option<i32>,
    },

    /// The command succeeded but its banner did not parse.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Retrieves the installed version of a database under a given root.
///
/// The command invocation strategy is injected at construction; production
/// code uses [`ProcessRunner`], tests substitute a scripted runner.
#[derive(Debug)]
pub struct VersionProbe<R = ProcessRunner> {
    runner: R,
}

impl VersionProbe<ProcessRunner> {
    /// Create a probe that invokes the real version binary.
    #[must_use]
    pub fn new() -> Self {
        Self::with_runner(ProcessRunner)
    }
}

impl Default for VersionProbe<ProcessRunner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CommandRunner> VersionProbe<R> {
    /// Create a probe with a specific command runner.
    #[must_use]
    pub fn with_runner(runner: R) -> Self {
        Self { runner }
    }

    /// Retrieve the installed version of the database under `install_root`.
    ///
    /// Invokes `<install_root>/bin/postgres --gp-version` with an empty
    /// environment and parses the captured banner.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::Spawn`] or [`ProbeError::Execution`] if the
    /// command cannot run or exits non-zero, and [`ProbeError::Parse`] if
    /// its banner is not recognized.
    pub async fn installed_version(
        &self,
        install_root: &Path,
    ) -> Result<InstalledVersion, ProbeError> {
        let program = install_root.join("bin").join(VERSION_BINARY);
        let command = format!("{} {}", program.display(), VERSION_FLAG);

        debug!(%command, "executing version command");

        let run = self
            .runner
            .run(&program, &[VERSION_FLAG])
            .await
            .map_err(|source| ProbeError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !run.success {
            return Err(ProbeError::Execution {
                command,
                output: run.output,
                code: run.code,
            });
        }

        let installed = parse_banner(&run.output)?;
        debug!(%installed, root = %install_root.display(), "probed installed version");
        Ok(installed)
    }
}
