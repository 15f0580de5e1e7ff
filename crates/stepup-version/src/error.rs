//! Parse errors for family and version text.

use thiserror::Error;

/// Errors produced while turning textual version output into a value.
///
/// Every variant carries the offending input so the message can be shown
/// to an operator as-is.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The banner contains none of the recognized product markers.
    #[error(
        "version banner {0:?} is not of the form \"postgres (Greenplum/Cloudberry Database) #.#.#\""
    )]
    UnrecognizedBanner(String),

    /// A product marker was found but no `#.#.#` token follows it.
    #[error("no #.#.# version found in banner {0:?}")]
    NoVersionInBanner(String),

    /// A compact string did not split into family and version parts.
    #[error("invalid installed version format {0:?}, expected \"<Family> <version>\"")]
    InvalidFormat(String),

    /// The family token is not a recognized product name.
    #[error("unknown database family: {0}")]
    UnknownFamily(String),

    /// The version token is not a parseable semantic version.
    #[error("invalid version {input:?}: {source}")]
    InvalidVersion {
        /// The rejected version token.
        input: String,
        /// The underlying semver error.
        #[source]
        source: semver::Error,
    },
}
