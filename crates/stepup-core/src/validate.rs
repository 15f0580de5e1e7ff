//! The upgrade admissibility decision.
//!
//! [`validate`] is a pure decision function: one call, one outcome, no
//! retries and no side effects. Every rejection carries an operator-facing
//! message naming the actual versions and the applicable floor.

use crate::rules;
use stepup_version::{DatabaseFamily, InstalledVersion};
use thiserror::Error;
use tracing::debug;

/// Reasons an upgrade is rejected.
#[derive(Debug, Error)]
pub enum CompatibilityError {
    /// No rule covers this pair of major versions.
    #[error(
        "unsupported upgrade from {source_version} to {target}; supported Greenplum transitions are \
         5 to 6, 6 to 6, 6 to 7, and 7 to 7"
    )]
    UnsupportedTransition {
        /// Source installation identity.
        source_version: InstalledVersion,
        /// Target installation identity.
        target: InstalledVersion,
    },

    /// The source version is below the floor for its line.
    #[error(
        "source cluster version {actual} is not supported; the minimum required version \
         is {minimum}, and we recommend the latest"
    )]
    SourceBelowMinimum {
        /// Source installation identity.
        actual: InstalledVersion,
        /// Floor for the selected source line.
        minimum: &'static str,
    },

    /// The target version is below the floor for its line.
    #[error(
        "target cluster version {actual} is not supported; the minimum required version \
         is {minimum}, and we recommend the latest"
    )]
    TargetBelowMinimum {
        /// Target installation identity.
        actual: InstalledVersion,
        /// Floor for the selected target line.
        minimum: &'static str,
    },

    /// A Cloudberry target on a lower major line than the source.
    #[error(
        "downgrade from {source_version} to {target} is not supported; the target major version \
         must not be lower than the source major version"
    )]
    MajorDowngrade {
        /// Source installation identity.
        source_version: InstalledVersion,
        /// Target installation identity.
        target: InstalledVersion,
    },

    /// No migration path from Greenplum to Cloudberry is defined.
    #[error("upgrade from {source_version} to {target} is not supported")]
    CrossFamily {
        /// Source installation identity.
        source_version: InstalledVersion,
        /// Target installation identity.
        target: InstalledVersion,
    },

    /// No reverse migration path from Cloudberry to Greenplum is defined.
    #[error("cannot upgrade from Cloudberry to Greenplum (found source {source_version}, target {target})")]
    CrossFamilyReverse {
        /// Source installation identity.
        source_version: InstalledVersion,
        /// Target installation identity.
        target: InstalledVersion,
    },

    /// Reserved reject arm for family pairs with no defined policy.
    #[error("upgrade from {source_version} to {target} is not supported")]
    UnsupportedFamilyPair {
        /// Source installation identity.
        source_version: InstalledVersion,
        /// Target installation identity.
        target: InstalledVersion,
    },
}

/// Decide whether an in-place upgrade from `source` to `target` is
/// admissible.
///
/// # Errors
///
/// Returns a [`CompatibilityError`] describing the first check the pair
/// fails; `Ok(())` means the transition is supported.
pub fn validate(
    source: &InstalledVersion,
    target: &InstalledVersion,
) -> Result<(), CompatibilityError> {
    debug!(%source, %target, "validating upgrade compatibility");

    match (source.family, target.family) {
        (DatabaseFamily::Greenplum, DatabaseFamily::Greenplum) => {
            let rule = rules::find_rule(source, target).ok_or_else(|| {
                CompatibilityError::UnsupportedTransition {
                    source_version: source.clone(),
                    target: target.clone(),
                }
            })?;

            if !rule.source_req.matches(&source.version) {
                return Err(CompatibilityError::SourceBelowMinimum {
                    actual: source.clone(),
                    minimum: rule.source_floor,
                });
            }

            if !rule.target_req.matches(&target.version) {
                return Err(CompatibilityError::TargetBelowMinimum {
                    actual: target.clone(),
                    minimum: rule.target_floor,
                });
            }

            Ok(())
        }

        (DatabaseFamily::Cloudberry, DatabaseFamily::Cloudberry) => {
            // Only the major line is ordered here; minor and patch moves
            // within a line are unrestricted at this layer.
            if target.major() < source.major() {
                return Err(CompatibilityError::MajorDowngrade {
                    source_version: source.clone(),
                    target: target.clone(),
                });
            }
            Ok(())
        }

        (DatabaseFamily::Greenplum, DatabaseFamily::Cloudberry) => {
            Err(CompatibilityError::CrossFamily {
                source_version: source.clone(),
                target: target.clone(),
            })
        }

        (DatabaseFamily::Cloudberry, DatabaseFamily::Greenplum) => {
            Err(CompatibilityError::CrossFamilyReverse {
                source_version: source.clone(),
                target: target.clone(),
            })
        }

        _ => Err(CompatibilityError::UnsupportedFamilyPair {
            source_version: source.clone(),
            target: target.clone(),
        }),
    }
}
