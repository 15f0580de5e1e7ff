//! # stepup
//!
//! Compatibility gate for in-place database cluster upgrades.
//!
//! ## Usage
//!
//! ```bash
//! # Check an upgrade between two installation roots
//! stepup --source /usr/local/greenplum-db-6 --target /usr/local/greenplum-db-7
//!
//! # Roots can also come from stepup.toml or the environment
//! STEPUP_SOURCE_GPHOME=/opt/gp6 STEPUP_TARGET_GPHOME=/opt/gp7 stepup
//! ```
//!
//! Exits 0 when the upgrade is admissible; prints the rejection reason and
//! exits non-zero otherwise.

mod check;
mod config;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use stepup_probe::VersionProbe;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Check whether an in-place major-version upgrade between two database
/// installations is supported.
#[derive(Debug, Parser)]
#[command(name = "stepup", version)]
struct Args {
    /// Installation root of the source cluster.
    #[arg(long, value_name = "PATH")]
    source: Option<PathBuf>,

    /// Installation root of the target cluster.
    #[arg(long, value_name = "PATH")]
    target: Option<PathBuf>,

    /// Configuration file to use instead of the default search paths.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stepup=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    // Load configuration
    let config = match &args.config {
        Some(path) => config::Config::from_file(path)?,
        None => config::Config::load()?,
    };

    let (source_root, target_root) = config.resolve_roots(args.source, args.target)?;

    tracing::info!(
        source = %source_root.display(),
        target = %target_root.display(),
        "checking upgrade compatibility"
    );

    let probe = VersionProbe::new();
    let report = check::run_check(&probe, &source_root, &target_root).await?;

    println!("{}", report.verdict());

    Ok(())
}
