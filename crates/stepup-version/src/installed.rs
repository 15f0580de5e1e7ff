//! The identity of one database installation.

use crate::error::ParseError;
use crate::family::DatabaseFamily;
use semver::Version;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A database installation's identity at a point in time.
///
/// Immutable after creation; comparisons and range tests never modify it.
/// The compact textual form `"<Family> <major.minor.patch>"` round-trips
/// through [`fmt::Display`] and [`FromStr`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstalledVersion {
    /// Product lineage of the installation.
    pub family: DatabaseFamily,
    /// Reported semantic version.
    pub version: Version,
}

impl InstalledVersion {
    /// Create an installed version from its parts.
    #[must_use]
    pub fn new(family: DatabaseFamily, version: Version) -> Self {
        Self { family, version }
    }

    /// Major version line of the installation.
    #[must_use]
    pub fn major(&self) -> u64 {
        self.version.major
    }
}

impl fmt::Display for InstalledVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.family, self.version)
    }
}

impl FromStr for InstalledVersion {
    type Err = ParseError;

    /// Parse the compact `"<Family> <version>"` form.
    ///
    /// The family name is matched case-insensitively and the version is
    /// parsed tolerantly: a leading `v` and missing minor/patch components
    /// are accepted (`"Greenplum v6.2"` parses as `Greenplum 6.2.0`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (family_token, version_token) = trimmed
            .split_once(char::is_whitespace)
            .ok_or_else(|| ParseError::InvalidFormat(s.to_string()))?;

        let family = DatabaseFamily::from_name(family_token.trim())
            .ok_or_else(|| ParseError::UnknownFamily(family_token.to_string()))?;

        let version_token = version_token.trim();
        let version = parse_tolerant(version_token).map_err(|source| ParseError::InvalidVersion {
            input: version_token.to_string(),
            source,
        })?;

        Ok(Self { family, version })
    }
}

/// Parse a semantic version, tolerating a leading `v`/`V` and missing
/// minor or patch components on plain numeric versions.
pub fn parse_tolerant(input: &str) -> Result<Version, semver::Error> {
    let trimmed = input.trim();
    let stripped = trimmed.strip_prefix(['v', 'V']).unwrap_or(trimmed);

    match Version::parse(stripped) {
        Ok(version) => Ok(version),
        Err(err) => {
            // "6" and "6.2" are padded out to a full triple and retried.
            let numeric = !stripped.is_empty()
                && stripped.chars().all(|c| c.is_ascii_digit() || c == '.');
            let dots = stripped.chars().filter(|&c| c == '.').count();
            if numeric && dots < 2 {
                let mut padded = stripped.to_string();
                for _ in dots..2 {
                    padded.push_str(".0");
                }
                return Version::parse(&padded);
            }
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_form_round_trip() {
        let cases = [
            InstalledVersion::new(DatabaseFamily::Greenplum, Version::new(6, 21, 3)),
            InstalledVersion::new(DatabaseFamily::Greenplum, Version::new(0, 0, 0)),
            InstalledVersion::new(DatabaseFamily::Cloudberry, Version::new(1, 5, 2)),
        ];

        for installed in cases {
            let text = installed.to_string();
            let reparsed: InstalledVersion = text.parse().unwrap();
            assert_eq!(installed, reparsed, "round trip through {text:?}");
        }
    }

    #[test]
    fn test_compact_form_case_insensitive_family() {
        let installed: InstalledVersion = "greenplum 6.21.3".parse().unwrap();
        assert_eq!(installed.family, DatabaseFamily::Greenplum);

        let installed: InstalledVersion = "CLOUDBERRY 2.0.0".parse().unwrap();
        assert_eq!(installed.family, DatabaseFamily::Cloudberry);
    }

    #[test]
    fn test_compact_form_tolerant_version() {
        let installed: InstalledVersion = "Greenplum v6.2".parse().unwrap();
        assert_eq!(installed.version, Version::new(6, 2, 0));

        let installed: InstalledVersion = "Cloudberry 2".parse().unwrap();
        assert_eq!(installed.version, Version::new(2, 0, 0));
    }

    #[test]
    fn test_compact_form_rejects_bad_split() {
        let err = "Greenplum6.2.0".parse::<InstalledVersion>().unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(_)));

        let err = "".parse::<InstalledVersion>().unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(_)));
    }

    #[test]
    fn test_compact_form_rejects_unknown_family() {
        let err = "Postgres 15.2.0".parse::<InstalledVersion>().unwrap_err();
        assert!(matches!(err, ParseError::UnknownFamily(_)));
    }

    #[test]
    fn test_compact_form_rejects_bad_version() {
        let err = "Greenplum six.two.one".parse::<InstalledVersion>().unwrap_err();
        assert!(matches!(err, ParseError::InvalidVersion { .. }));
    }

    #[test]
    fn test_parse_tolerant_full_version_unchanged() {
        let version = parse_tolerant("6.21.3").unwrap();
        assert_eq!(version, Version::new(6, 21, 3));

        let version = parse_tolerant("7.0.0-beta.1").unwrap();
        assert_eq!(version.to_string(), "7.0.0-beta.1");
    }

    #[test]
    fn test_parse_tolerant_rejects_garbage() {
        assert!(parse_tolerant("").is_err());
        assert!(parse_tolerant("v").is_err());
        assert!(parse_tolerant("1.2.3.4").is_err());
    }
}
