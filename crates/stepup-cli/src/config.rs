//! Gate configuration.
//!
//! Configuration can be loaded from:
//! - Environment variables (STEPUP_*)
//! - TOML configuration file
//! - Command line arguments (override both)

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Gate configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Cluster installation roots.
    #[serde(default)]
    pub clusters: ClustersConfig,
}

/// Cluster installation roots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClustersConfig {
    /// Installation root of the source cluster.
    #[serde(default = "default_source_gphome")]
    pub source_gphome: Option<PathBuf>,

    /// Installation root of the target cluster.
    #[serde(default = "default_target_gphome")]
    pub target_gphome: Option<PathBuf>,
}

// Default value functions
fn default_source_gphome() -> Option<PathBuf> {
    std::env::var_os("STEPUP_SOURCE_GPHOME").map(PathBuf::from)
}

fn default_target_gphome() -> Option<PathBuf> {
    std::env::var_os("STEPUP_TARGET_GPHOME").map(PathBuf::from)
}

impl Default for ClustersConfig {
    fn default() -> Self {
        Self {
            source_gphome: default_source_gphome(),
            target_gphome: default_target_gphome(),
        }
    }
}

impl Config {
    /// Load configuration from file or defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        // Try to load from default paths
        let config_paths = [
            "stepup.toml",
            "/etc/stepup/stepup.toml",
            "~/.config/stepup/stepup.toml",
        ];

        for path in &config_paths {
            let expanded = shellexpand::tilde(path);
            if Path::new(expanded.as_ref()).exists() {
                return Self::from_file(expanded.as_ref());
            }
        }

        // Fall back to defaults with environment overrides
        Ok(Self::default())
    }

    /// Load configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Resolve the source and target installation roots, letting command
    /// line values override the configured ones.
    ///
    /// # Errors
    ///
    /// Returns an error naming the missing side if either root is unset.
    pub fn resolve_roots(
        &self,
        source_override: Option<PathBuf>,
        target_override: Option<PathBuf>,
    ) -> Result<(PathBuf, PathBuf)> {
        let source = source_override.or_else(|| self.clusters.source_gphome.clone());
        let target = target_override.or_else(|| self.clusters.target_gphome.clone());

        let Some(source) = source else {
            bail!("source installation root not set; pass --source or set clusters.source_gphome");
        };
        let Some(target) = target else {
            bail!("target installation root not set; pass --target or set clusters.target_gphome");
        };

        Ok((source, target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_toml() {
        let toml_str = r#"
            [clusters]
            source_gphome = "/usr/local/greenplum-db-6"
            target_gphome = "/usr/local/greenplum-db-7"
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.clusters.source_gphome,
            Some(PathBuf::from("/usr/local/greenplum-db-6"))
        );
        assert_eq!(
            config.clusters.target_gphome,
            Some(PathBuf::from("/usr/local/greenplum-db-7"))
        );
    }

    #[test]
    fn test_resolve_roots_overrides_config() {
        let toml_str = r#"
            [clusters]
            source_gphome = "/opt/old-source"
            target_gphome = "/opt/old-target"
        "#;
        let config: Config = toml::from_str(toml_str).unwrap();

        let (source, target) = config
            .resolve_roots(Some(PathBuf::from("/opt/new-source")), None)
            .unwrap();
        assert_eq!(source, PathBuf::from("/opt/new-source"));
        assert_eq!(target, PathBuf::from("/opt/old-target"));
    }

    #[test]
    fn test_resolve_roots_requires_both_sides() {
        let config = Config {
            clusters: ClustersConfig {
                source_gphome: None,
                target_gphome: None,
            },
        };

        let err = config
            .resolve_roots(Some(PathBuf::from("/opt/source")), None)
            .map(|_| ())
            .unwrap_err();
        assert!(err.to_string().contains("target"));
    }
}
