//! # stepup-probe
//!
//! Installed-version retrieval for the stepup upgrade gate.
//!
//! A probe asks a database installation to report its version by invoking
//! the version binary under the installation root, then hands the captured
//! banner to `stepup-version` for parsing.
//!
//! The command invocation itself sits behind the [`CommandRunner`] trait so
//! tests can script the external process without touching ambient state.

pub mod probe;
pub mod runner;

pub use probe::{ProbeError, VersionProbe, VERSION_BINARY, VERSION_FLAG};
pub use runner::{CommandRunner, ProcessRunner, RunOutput};
