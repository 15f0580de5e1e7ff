//! Command invocation strategy for version probes.
//!
//! The trait is the substitution point for tests; the production
//! implementation shells out through `tokio::process`.

use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;

/// Captured result of one external command invocation.
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// Exit code, when the process exited normally.
    pub code: Option<i32>,
    /// Whether the process exited successfully.
    pub success: bool,
    /// Combined stdout and stderr capture, stdout first.
    pub output: String,
}

/// Strategy for invoking an external command and capturing its output.
///
/// Implementations must not inherit the parent environment; the version
/// binary is expected to run against an empty one.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args`, capturing combined output.
    async fn run(&self, program: &Path, args: &[&str]) -> std::io::Result<RunOutput>;
}

/// Production runner over `tokio::process`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, program: &Path, args: &[&str]) -> std::io::Result<RunOutput> {
        let output = tokio::process::Command::new(program)
            .args(args)
            .env_clear()
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        Ok(RunOutput {
            code: output.status.code(),
            success: output.status.success(),
            output: combined,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_process_runner_missing_binary() {
        let runner = ProcessRunner;
        let result = runner
            .run(Path::new("/nonexistent/bin/postgres"), &["--gp-version"])
            .await;
        assert!(result.is_err());
    }
}
