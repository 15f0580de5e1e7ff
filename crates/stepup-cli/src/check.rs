//! The compatibility check itself.
//!
//! This module composes the probe and the validator: retrieve both
//! installed versions, then decide admissibility. The two retrievals are
//! independent and run concurrently.

use anyhow::{Context, Result};
use std::path::Path;
use stepup_core::validate;
use stepup_probe::{CommandRunner, VersionProbe};
use stepup_version::InstalledVersion;
use tracing::info;

/// Outcome of an admissible upgrade check.
#[derive(Debug, Clone)]
pub struct CheckReport {
    /// Identity of the source installation.
    pub source: InstalledVersion,
    /// Identity of the target installation.
    pub target: InstalledVersion,
}

impl CheckReport {
    /// One-line operator-facing verdict.
    #[must_use]
    pub fn verdict(&self) -> String {
        format!(
            "upgrade from {} to {} is supported",
            self.source, self.target
        )
    }
}

/// Retrieve both installed versions and validate the transition.
///
/// # Errors
///
/// Returns an error if either retrieval fails or the transition is
/// rejected; the error message is suitable for direct display.
pub async fn run_check<R: CommandRunner>(
    probe: &VersionProbe<R>,
    source_root: &Path,
    target_root: &Path,
) -> Result<CheckReport> {
    let (source, target) = tokio::join!(
        probe.installed_version(source_root),
        probe.installed_version(target_root),
    );

    let source = source.with_context(|| {
        format!(
            "retrieving source cluster version from {}",
            source_root.display()
        )
    })?;
    let target = target.with_context(|| {
        format!(
            "retrieving target cluster version from {}",
            target_root.display()
        )
    })?;

    info!(%source, %target, "retrieved cluster versions");

    validate(&source, &target)?;

    Ok(CheckReport { source, target })
}
