//! Extraction of an installation's identity from its version banner.
//!
//! The banner is the raw text a database installation prints when asked to
//! report its version. It embeds one of a small set of product markers
//! followed, somewhere later in the text, by a `#.#.#` version token.

use crate::error::ParseError;
use crate::family::DatabaseFamily;
use crate::installed::InstalledVersion;
use once_cell::sync::Lazy;
use regex::Regex;
use semver::Version;

/// Marker printed by Greenplum installations.
pub const GREENPLUM_MARKER: &str = "postgres (Greenplum Database) ";
/// Marker printed by Apache Cloudberry installations.
pub const APACHE_CLOUDBERRY_MARKER: &str = "postgres (Apache Cloudberry) ";
/// Marker printed by older Cloudberry Database installations.
pub const CLOUDBERRY_MARKER: &str = "postgres (Cloudberry Database) ";

/// Markers checked in order; the first match decides the family.
const MARKERS: [(&str, DatabaseFamily); 3] = [
    (GREENPLUM_MARKER, DatabaseFamily::Greenplum),
    (APACHE_CLOUDBERRY_MARKER, DatabaseFamily::Cloudberry),
    (CLOUDBERRY_MARKER, DatabaseFamily::Cloudberry),
];

static VERSION_TRIPLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+\.\d+\.\d+").expect("version triple pattern"));

/// Parse a raw version banner into an [`InstalledVersion`].
///
/// The first recognized marker determines the family; the first `#.#.#`
/// token after the marker is the version.
///
/// # Errors
///
/// Returns [`ParseError::UnrecognizedBanner`] if no marker is present and
/// [`ParseError::NoVersionInBanner`] if a marker is present but no version
/// token follows it.
pub fn parse_banner(raw: &str) -> Result<InstalledVersion, ParseError> {
    let banner = raw.trim();

    let (family, rest) = MARKERS
        .iter()
        .find_map(|&(marker, family)| {
            banner
                .split_once(marker)
                .map(|(_, rest)| (family, rest))
        })
        .ok_or_else(|| ParseError::UnrecognizedBanner(raw.to_string()))?;

    let token = VERSION_TRIPLE
        .find(rest)
        .ok_or_else(|| ParseError::NoVersionInBanner(raw.to_string()))?;

    let version =
        Version::parse(token.as_str()).map_err(|source| ParseError::InvalidVersion {
            input: token.as_str().to_string(),
            source,
        })?;

    Ok(InstalledVersion::new(family, version))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_greenplum_banner() {
        let banner = "postgres (Greenplum Database) 6.21.3 build commit:f7ff4de\n";
        let installed = parse_banner(banner).unwrap();
        assert_eq!(installed.family, DatabaseFamily::Greenplum);
        assert_eq!(installed.version, Version::new(6, 21, 3));
    }

    #[test]
    fn test_parse_apache_cloudberry_banner() {
        let banner = "postgres (Apache Cloudberry) 2.0.0 build dev";
        let installed = parse_banner(banner).unwrap();
        assert_eq!(installed.family, DatabaseFamily::Cloudberry);
        assert_eq!(installed.version, Version::new(2, 0, 0));
    }

    #[test]
    fn test_parse_cloudberry_database_banner() {
        let banner = "postgres (Cloudberry Database) 1.5.4 build commit:9a2b1c";
        let installed = parse_banner(banner).unwrap();
        assert_eq!(installed.family, DatabaseFamily::Cloudberry);
        assert_eq!(installed.version, Version::new(1, 5, 4));
    }

    #[test]
    fn test_parse_banner_with_leading_noise() {
        // Some builds prefix the banner with loader output.
        let banner = "ld warning: ignored\npostgres (Greenplum Database) 5.29.10 build 1";
        let installed = parse_banner(banner).unwrap();
        assert_eq!(installed.family, DatabaseFamily::Greenplum);
        assert_eq!(installed.version, Version::new(5, 29, 10));
    }

    #[test]
    fn test_parse_banner_takes_first_triple_after_marker() {
        let banner = "postgres (Greenplum Database) 6.21.3 (pg 9.4.26)";
        let installed = parse_banner(banner).unwrap();
        assert_eq!(installed.version, Version::new(6, 21, 3));
    }

    #[test]
    fn test_parse_banner_unrecognized() {
        let err = parse_banner("postgres (PostgreSQL) 15.2").unwrap_err();
        assert!(matches!(err, ParseError::UnrecognizedBanner(_)));

        let err = parse_banner("").unwrap_err();
        assert!(matches!(err, ParseError::UnrecognizedBanner(_)));
    }

    #[test]
    fn test_parse_banner_missing_version_token() {
        let err = parse_banner("postgres (Greenplum Database) devel").unwrap_err();
        assert!(matches!(err, ParseError::NoVersionInBanner(_)));

        // A bare major.minor is not a full triple.
        let err = parse_banner("postgres (Greenplum Database) 6.21").unwrap_err();
        assert!(matches!(err, ParseError::NoVersionInBanner(_)));
    }
}
