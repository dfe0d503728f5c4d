//! Configuration file loading
//!
//! Values from the file sit below command-line flags and the
//! `TECHTREND_FUZZY_THRESHOLD` environment variable.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use techtrend_fuzzy::MatcherConfig;

/// Locations searched when no `--config` is given
const CANDIDATES: &[&str] = &[
    ".techtrend-fuzzy.toml",
    "techtrend-fuzzy.toml",
    ".config/techtrend-fuzzy.toml",
];

/// Root configuration schema
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigSchema {
    #[serde(default)]
    pub matcher: MatcherConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Output configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Maximum number of results printed by `filter` (unlimited when unset)
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Configuration wrapper
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub schema: ConfigSchema,
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from an explicit path, a standard location, or defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => Some(p.to_path_buf()),
            None => find_config_file(Path::new(".")),
        };

        let schema = match config_path {
            Some(ref p) => load_config_file(p)?,
            None => ConfigSchema::default(),
        };

        tracing::debug!(path = ?config_path, threshold = schema.matcher.threshold, "Configuration loaded");

        Ok(Self {
            schema,
            path: config_path,
        })
    }
}

/// Find configuration file in standard locations under `root`
fn find_config_file(root: &Path) -> Option<PathBuf> {
    CANDIDATES
        .iter()
        .map(|candidate| root.join(candidate))
        .find(|candidate| candidate.is_file())
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &Path) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    let schema: ConfigSchema = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;

    schema
        .matcher
        .validate()
        .with_context(|| format!("Invalid matcher settings in {}", path.display()))?;

    Ok(schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.path.is_none());
        assert_eq!(config.schema.matcher.threshold, 0.35);
        assert_eq!(config.schema.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_parse_full_schema() {
        let schema: ConfigSchema = toml::from_str(
            r#"
            [matcher]
            threshold = 0.2

            [output]
            format = "json"
            limit = 5
            "#,
        )
        .unwrap();

        assert_eq!(schema.matcher.threshold, 0.2);
        assert_eq!(schema.output.format, OutputFormat::Json);
        assert_eq!(schema.output.limit, Some(5));
    }

    #[test]
    fn test_parse_partial_schema() {
        let schema: ConfigSchema = toml::from_str("[output]\nlimit = 3\n").unwrap();
        assert_eq!(schema.matcher.threshold, 0.35);
        assert_eq!(schema.output.limit, Some(3));
    }

    #[test]
    fn test_find_config_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_config_file(dir.path()).is_none());

        fs::create_dir(dir.path().join(".config")).unwrap();
        fs::write(dir.path().join(".config/techtrend-fuzzy.toml"), "").unwrap();
        assert_eq!(
            find_config_file(dir.path()),
            Some(dir.path().join(".config/techtrend-fuzzy.toml"))
        );

        fs::write(dir.path().join(".techtrend-fuzzy.toml"), "").unwrap();
        assert_eq!(
            find_config_file(dir.path()),
            Some(dir.path().join(".techtrend-fuzzy.toml"))
        );
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fuzzy.toml");
        fs::write(&path, "[matcher]\nthreshold = 0.5\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.schema.matcher.threshold, 0.5);
        assert_eq!(config.path.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load(Some(&dir.path().join("missing.toml"))).is_err());
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fuzzy.toml");
        fs::write(&path, "[matcher\nthreshold = ").unwrap();

        let err = Config::load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_load_rejects_nan_threshold() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fuzzy.toml");
        fs::write(&path, "[matcher]\nthreshold = nan\n").unwrap();

        let err = Config::load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Invalid matcher settings"));
    }
}
