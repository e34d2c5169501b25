use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::render::Format;

/// Main persona engine configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub log_level: LogLevel,
    pub vocabulary: VocabularyConfig,
    pub output: OutputConfig,
    pub indexer: IndexerConfig,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    Off,
}

impl LogLevel {
    pub fn as_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Off => log::LevelFilter::Off,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_filter())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct VocabularyConfig {
    /// File path or http(s) URL of the trait vocabulary
    pub source: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: Format,
    /// Where `download` writes persona.<ext>
    pub download_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct IndexerConfig {
    /// Profile corpus (JSON array)
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            source: "trait-data-cleaned.json".to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: Format::Markdown,
            download_dir: PathBuf::from("."),
        }
    }
}

impl Default for IndexerConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("../influence-atlas/all-profiles.json"),
            output: PathBuf::from("trait-index.json"),
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // An explicit --config must load
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        if let Ok(env_path) = std::env::var("PERSONA_CONFIG") {
            let path = PathBuf::from(env_path);
            if path.exists() {
                match Self::load_from_file(&path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        log::warn!("Failed to load config from PERSONA_CONFIG: {}", e);
                    }
                }
            }
        }

        if let Ok(persona_dir) = std::env::var("PERSONA_DIR") {
            let path = PathBuf::from(persona_dir).join("persona.yaml");
            if path.exists() {
                match Self::load_from_file(&path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        log::warn!("Failed to load config from PERSONA_DIR: {}", e);
                    }
                }
            }
        }

        if let Some(config_dir) = dirs::config_dir() {
            let path = config_dir.join("persona-engine").join("persona.yaml");
            if path.exists() {
                match Self::load_from_file(&path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        log::warn!("Failed to load config from {}: {}", path.display(), e);
                    }
                }
            }
        }

        // ./persona.yaml (for development)
        let local_config = PathBuf::from("persona.yaml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    log::warn!("Failed to load local config: {}", e);
                }
            }
        }

        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        log::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// Expand a path that may contain ~ or env vars
    pub fn expand_path(path: &Path) -> PathBuf {
        let path_str = path.to_string_lossy();
        let expanded = shellexpand::full(&path_str).unwrap_or_else(|_| path_str.clone());
        PathBuf::from(expanded.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.vocabulary.source, "trait-data-cleaned.json");
        assert_eq!(config.output.format, Format::Markdown);
        assert_eq!(config.indexer.output, PathBuf::from("trait-index.json"));
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = "output:\n  format: yaml\nlog_level: debug\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.output.format, Format::Yaml);
        assert_eq!(config.output.download_dir, PathBuf::from("."));
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.vocabulary.source, "trait-data-cleaned.json");
    }

    #[test]
    fn test_log_level_filter() {
        assert_eq!(LogLevel::Warn.as_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Off.to_string(), "OFF");
    }

    #[test]
    fn test_expand_path_no_expansion() {
        let path = PathBuf::from("/usr/local/share");
        let expanded = Config::expand_path(&path);
        assert_eq!(expanded, PathBuf::from("/usr/local/share"));
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/vocab.json");
        let expanded = Config::expand_path(&path);
        assert!(!expanded.to_string_lossy().contains('~'));
        assert!(expanded.to_string_lossy().contains("vocab.json"));
    }

    #[test]
    fn test_expand_path_with_env_var() {
        // SAFETY: Test runs single-threaded, env var is test-specific
        unsafe {
            std::env::set_var("PERSONA_TEST_VAR", "/custom/path");
        }
        let path = PathBuf::from("$PERSONA_TEST_VAR/traits.json");
        let expanded = Config::expand_path(&path);
        assert_eq!(expanded, PathBuf::from("/custom/path/traits.json"));
        unsafe {
            std::env::remove_var("PERSONA_TEST_VAR");
        }
    }

    #[test]
    fn test_explicit_config_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("persona.yaml");
        fs::write(&path, "vocabulary:\n  source: https://example.com/traits.json\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.vocabulary.source, "https://example.com/traits.json");
    }

    #[test]
    fn test_explicit_config_errors_are_fatal() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.yaml");
        assert!(Config::load(Some(&missing)).is_err());

        let bad = temp.path().join("bad.yaml");
        fs::write(&bad, "output: [not, a, map]\n").unwrap();
        assert!(Config::load(Some(&bad)).is_err());
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let config = Config::default();
        let yaml_str = serde_yaml::to_string(&config).expect("Failed to serialize");
        let parsed: Config = serde_yaml::from_str(&yaml_str).expect("Failed to deserialize");
        assert_eq!(parsed.output.format, config.output.format);
        assert_eq!(parsed.indexer.input, config.indexer.input);
    }
}
