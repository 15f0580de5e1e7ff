//! # stepup-version
//!
//! Database family and version identification for the stepup upgrade gate.
//!
//! This crate turns the textual identity a database installation reports
//! into a structured, comparable value:
//!
//! - **DatabaseFamily** - the product lineage (Greenplum or Cloudberry)
//! - **InstalledVersion** - a family paired with a semantic version
//! - **Banner parsing** - extraction from raw `--gp-version` output
//!
//! ## Example
//!
//! ```rust
//! use stepup_version::{parse_banner, DatabaseFamily, InstalledVersion};
//!
//! let installed = parse_banner("postgres (Greenplum Database) 6.21.0 build commit:abc").unwrap();
//! assert_eq!(installed.family, DatabaseFamily::Greenplum);
//!
//! // The compact form round-trips through Display/FromStr.
//! let compact: InstalledVersion = "Cloudberry 1.5.2".parse().unwrap();
//! assert_eq!(compact.to_string(), "Cloudberry 1.5.2");
//! ```

pub mod banner;
pub mod error;
pub mod family;
pub mod installed;

pub use banner::parse_banner;
pub use error::ParseError;
pub use family::DatabaseFamily;
pub use installed::InstalledVersion;
