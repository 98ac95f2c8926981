//! Configuration loading for Splice.
//!
//! Configuration is optional: every setting has a default and CLI flags
//! override file values. Resolution order:
//!
//! 1. `~/.splice/config.toml`
//! 2. `./splice.toml` (useful in constrained environments)
//!
//! Unknown strategy or template names are rejected with a descriptive error
//! rather than silently falling back to a default.

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

use splice_types::{ContinuationTemplate, Strategy};

/// Resolved configuration values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpliceConfig {
    pub strategy: Strategy,
    pub template: ContinuationTemplate,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid TOML in config file: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("unknown strategy {0:?} (expected tag-midpoint or sentence-ratio)")]
    UnknownStrategy(String),
    #[error("unknown continuation template {0:?} (expected restate-all or single-option)")]
    UnknownTemplate(String),
}

/// Raw file shape before validation.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    splice: Option<RawSplice>,
}

#[derive(Debug, Default, Deserialize)]
struct RawSplice {
    strategy: Option<String>,
    template: Option<String>,
}

impl SpliceConfig {
    /// Primary config file location.
    #[must_use]
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".splice").join("config.toml"))
    }

    /// Load configuration from the first candidate file that exists.
    ///
    /// Returns `Ok(None)` when no config file is present; that is not an
    /// error, defaults apply.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let mut candidates = Vec::new();
        if let Some(primary) = Self::path() {
            candidates.push(primary);
        }
        candidates.push(PathBuf::from("splice.toml"));

        for candidate in candidates {
            if !candidate.is_file() {
                continue;
            }
            let raw = fs::read_to_string(&candidate).map_err(|source| ConfigError::Io {
                path: candidate.clone(),
                source,
            })?;
            let config = Self::from_toml_str(&raw)?;
            tracing::info!(path = %candidate.display(), "Loaded config");
            return Ok(Some(config));
        }

        Ok(None)
    }

    /// Parse and validate a TOML config document.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let parsed: RawConfig = toml::from_str(raw)?;
        let section = parsed.splice.unwrap_or_default();

        let strategy = match section.strategy {
            Some(name) => {
                Strategy::parse(&name).ok_or(ConfigError::UnknownStrategy(name))?
            }
            None => Strategy::default(),
        };
        let template = match section.template {
            Some(name) => ContinuationTemplate::parse(&name)
                .ok_or(ConfigError::UnknownTemplate(name))?,
            None => ContinuationTemplate::default(),
        };

        Ok(Self { strategy, template })
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, SpliceConfig};
    use splice_types::{ContinuationTemplate, Strategy};

    #[test]
    fn empty_document_yields_defaults() {
        let config = SpliceConfig::from_toml_str("").unwrap();
        assert_eq!(config, SpliceConfig::default());
    }

    #[test]
    fn parses_both_settings() {
        let config = SpliceConfig::from_toml_str(
            "[splice]\nstrategy = \"sentence-ratio\"\ntemplate = \"single-option\"\n",
        )
        .unwrap();
        assert_eq!(config.strategy, Strategy::SentenceRatio);
        assert_eq!(config.template, ContinuationTemplate::SingleOption);
    }

    #[test]
    fn partial_section_fills_in_defaults() {
        let config =
            SpliceConfig::from_toml_str("[splice]\nstrategy = \"sentence-ratio\"\n").unwrap();
        assert_eq!(config.strategy, Strategy::SentenceRatio);
        assert_eq!(config.template, ContinuationTemplate::default());
    }

    #[test]
    fn unknown_strategy_is_rejected() {
        let err = SpliceConfig::from_toml_str("[splice]\nstrategy = \"fuzzy\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownStrategy(name) if name == "fuzzy"));
    }

    #[test]
    fn unknown_template_is_rejected() {
        let err = SpliceConfig::from_toml_str("[splice]\ntemplate = \"verbose\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownTemplate(name) if name == "verbose"));
    }

    #[test]
    fn malformed_toml_is_rejected() {
        assert!(matches!(
            SpliceConfig::from_toml_str("not toml at all ["),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn reads_config_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("splice.toml");
        std::fs::write(&path, "[splice]\ntemplate = \"single-option\"\n").unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let config = SpliceConfig::from_toml_str(&raw).unwrap();
        assert_eq!(config.template, ContinuationTemplate::SingleOption);
    }
}
