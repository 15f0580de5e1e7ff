//! The upgrade transition table.
//!
//! Every supported major-version transition is one entry here, keyed by
//! `(source family, source major, target family, target major)`. The table
//! is the single source of truth for upgrade policy; when no entry matches,
//! the validator rejects.

use once_cell::sync::Lazy;
use semver::VersionReq;
use stepup_version::{DatabaseFamily, InstalledVersion};

// Change these values to bump the minimum supported versions and the
// associated tests.
/// Minimum supported version on the Greenplum 5 line.
pub const MIN_GREENPLUM_5X: &str = "5.29.10";
/// Minimum supported version on the Greenplum 6 line.
pub const MIN_GREENPLUM_6X: &str = "6.0.0";
/// Minimum supported version on the Greenplum 7 line.
pub const MIN_GREENPLUM_7X: &str = "7.0.0";

/// One supported major-version transition.
///
/// `source_req` and `target_req` bound the versions admitted on each side;
/// the floors are the named minimums used in operator-facing messages.
#[derive(Debug, Clone)]
pub struct UpgradeRule {
    /// Source family the rule applies to.
    pub source_family: DatabaseFamily,
    /// Source major version line.
    pub source_major: u64,
    /// Target family the rule applies to.
    pub target_family: DatabaseFamily,
    /// Target major version line.
    pub target_major: u64,
    /// Versions admitted as an upgrade source.
    pub source_req: VersionReq,
    /// Versions admitted as an upgrade target.
    pub target_req: VersionReq,
    /// Minimum supported source version, for messages.
    pub source_floor: &'static str,
    /// Minimum supported target version, for messages.
    pub target_floor: &'static str,
}

impl UpgradeRule {
    fn greenplum(
        source_major: u64,
        target_major: u64,
        source_floor: &'static str,
        target_floor: &'static str,
    ) -> Self {
        Self {
            source_family: DatabaseFamily::Greenplum,
            source_major,
            target_family: DatabaseFamily::Greenplum,
            target_major,
            source_req: line_req(source_floor, source_major + 1),
            target_req: line_req(target_floor, target_major + 1),
            source_floor,
            target_floor,
        }
    }
}

/// Comparator set admitting `>= floor, < next_major.0.0`.
fn line_req(floor: &str, next_major: u64) -> VersionReq {
    VersionReq::parse(&format!(">={floor}, <{next_major}.0.0")).expect("upgrade rule range")
}

/// The supported transitions.
static RULES: Lazy<Vec<UpgradeRule>> = Lazy::new(|| {
    vec![
        UpgradeRule::greenplum(5, 6, MIN_GREENPLUM_5X, MIN_GREENPLUM_6X),
        UpgradeRule::greenplum(6, 6, MIN_GREENPLUM_6X, MIN_GREENPLUM_6X),
        UpgradeRule::greenplum(6, 7, MIN_GREENPLUM_6X, MIN_GREENPLUM_7X),
        UpgradeRule::greenplum(7, 7, MIN_GREENPLUM_7X, MIN_GREENPLUM_7X),
    ]
});

/// Look up the rule covering a source/target pair, if any.
#[must_use]
pub fn find_rule(
    source: &InstalledVersion,
    target: &InstalledVersion,
) -> Option<&'static UpgradeRule> {
    RULES.iter().find(|rule| {
        rule.source_family == source.family
            && rule.source_major == source.major()
            && rule.target_family == target.family
            && rule.target_major == target.major()
    })
}
