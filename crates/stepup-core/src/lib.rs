//! # stepup-core
//!
//! Upgrade compatibility rules and validation for the stepup upgrade gate.
//!
//! This crate holds the authoritative policy for which in-place
//! major-version upgrades are admissible:
//!
//! - **Rules** - the transition table keyed by family and major version,
//!   with a minimum-version floor per side
//! - **Validation** - the pure decision function over a source and target
//!   [`InstalledVersion`](stepup_version::InstalledVersion)
//!
//! ## Example
//!
//! ```rust
//! use stepup_core::validate;
//! use stepup_version::InstalledVersion;
//!
//! let source: InstalledVersion = "Greenplum 6.21.3".parse().unwrap();
//! let target: InstalledVersion = "Greenplum 7.1.0".parse().unwrap();
//! assert!(validate(&source, &target).is_ok());
//! ```

pub mod rules;
pub mod validate;

pub use rules::{UpgradeRule, MIN_GREENPLUM_5X, MIN_GREENPLUM_6X, MIN_GREENPLUM_7X};
pub use validate::{validate, CompatibilityError};
