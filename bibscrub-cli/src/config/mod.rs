//! Configuration module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Filtering configuration
    #[serde(default)]
    pub filtering: FilteringConfig,

    /// Processing configuration
    #[serde(default)]
    pub processing: ProcessingConfig,
}

/// Filtering-related configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct FilteringConfig {
    /// Minimum occurrence count a feature needs to survive pruning
    pub min_frequency: u32,

    /// Stop-word list path (no stop filtering when absent)
    pub stop_list: Option<PathBuf>,

    /// How multi-line stop lists are read: "last-line" or "union"
    pub stop_list_mode: String,
}

impl Default for FilteringConfig {
    fn default() -> Self {
        Self {
            min_frequency: 2,
            stop_list: None,
            stop_list_mode: "last-line".to_string(),
        }
    }
}

/// Processing-related configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct ProcessingConfig {
    /// Size of the n-grams counted from filtered tokens
    pub ngram_size: usize,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self { ngram_size: 1 }
    }
}

impl CliConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_config_has_sane_values() {
        let config = CliConfig::default();
        assert_eq!(config.filtering.min_frequency, 2);
        assert_eq!(config.filtering.stop_list_mode, "last-line");
        assert_eq!(config.processing.ngram_size, 1);
    }

    #[test]
    fn loads_partial_toml_with_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[filtering]\nmin_frequency = 3\nstop_list_mode = \"union\"").unwrap();
        let config = CliConfig::from_file(file.path()).unwrap();
        assert_eq!(config.filtering.min_frequency, 3);
        assert_eq!(config.filtering.stop_list_mode, "union");
        assert_eq!(config.processing.ngram_size, 1);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not valid toml [").unwrap();
        assert!(CliConfig::from_file(file.path()).is_err());
    }
}
