//! Database product lineages recognized by the upgrade gate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The product lineage of a database installation.
///
/// The family is determined once, when an installation's version output is
/// parsed, and never changes afterwards. Non-exhaustive: policy code must
/// keep an explicit arm for lineages added later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum DatabaseFamily {
    /// Greenplum Database lineage.
    Greenplum,
    /// Apache Cloudberry / Cloudberry Database lineage.
    Cloudberry,
}

impl DatabaseFamily {
    /// All recognized families.
    pub const ALL: [DatabaseFamily; 2] = [DatabaseFamily::Greenplum, DatabaseFamily::Cloudberry];

    /// Canonical display name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            DatabaseFamily::Greenplum => "Greenplum",
            DatabaseFamily::Cloudberry => "Cloudberry",
        }
    }

    /// Look up a family by name, ignoring ASCII case.
    ///
    /// `"Greenplum"`, `"greenplum"`, and `"GREENPLUM"` all resolve to
    /// [`DatabaseFamily::Greenplum`]; anything outside the closed set of
    /// canonical names resolves to `None`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|family| family.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for DatabaseFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_from_name() {
        assert_eq!(
            DatabaseFamily::from_name("Greenplum"),
            Some(DatabaseFamily::Greenplum)
        );
        assert_eq!(
            DatabaseFamily::from_name("cloudberry"),
            Some(DatabaseFamily::Cloudberry)
        );
        assert_eq!(DatabaseFamily::from_name("postgres"), None);
    }

    #[test]
    fn test_family_from_name_any_casing() {
        assert_eq!(
            DatabaseFamily::from_name("GREENPLUM"),
            Some(DatabaseFamily::Greenplum)
        );
        assert_eq!(
            DatabaseFamily::from_name("CloudBerry"),
            Some(DatabaseFamily::Cloudberry)
        );
    }

    #[test]
    fn test_family_display() {
        assert_eq!(DatabaseFamily::Greenplum.to_string(), "Greenplum");
        assert_eq!(DatabaseFamily::Cloudberry.to_string(), "Cloudberry");
    }
}
