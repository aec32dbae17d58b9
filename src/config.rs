//! Configuration for SafeSpeak
//!
//! Settings are layered:
//! 1. Built-in defaults
//! 2. Optional TOML file (`~/.config/safespeak/config.toml` or `--config`)
//! 3. `SAFESPEAK__SECTION__KEY` environment variables

use crate::classifier::ClassifierConfig;
use crate::error::{Result, SafespeakError};
use crate::lifecycle::ProgressConfig;
use crate::reference::ReferenceFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

const ENV_PREFIX: &str = "SAFESPEAK";
const ENV_SEPARATOR: &str = "__";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SafespeakConfig {
    pub classifier: ClassifierConfig,
    pub progress: ProgressConfig,
    pub reference: ReferenceFormat,
}

/// Default config file location using the platform config directory
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("safespeak")
        .join("config.toml")
}

impl SafespeakConfig {
    /// Load configuration
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// used if present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file_source = match path {
            Some(path) => {
                debug!("Loading config from {}", path.display());
                config::File::from(path.to_path_buf()).required(true)
            }
            None => {
                let path = default_config_path();
                debug!("Loading config from {} if present", path.display());
                config::File::from(path).required(false)
            }
        };

        let settings = config::Config::builder()
            .add_source(file_source)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()?;

        let config: SafespeakConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the estimators and generators cannot work with
    pub fn validate(&self) -> Result<()> {
        if !(self.progress.half_life_days.is_finite() && self.progress.half_life_days > 0.0) {
            return Err(invalid("progress.half_life_days must be a positive number"));
        }
        if self.reference.prefix.is_empty() {
            return Err(invalid("reference.prefix must not be empty"));
        }
        if !self
            .reference
            .prefix
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        {
            return Err(invalid(
                "reference.prefix must be uppercase ASCII letters or digits",
            ));
        }
        if self.reference.suffix_len == 0 {
            return Err(invalid("reference.suffix_len must be at least 1"));
        }
        Ok(())
    }

    /// Render as TOML, e.g. to seed a config file
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

fn invalid(message: &str) -> SafespeakError {
    SafespeakError::Config(config::ConfigError::Message(message.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = SafespeakConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.classifier.min_text_length, 15);
        assert_eq!(config.reference.prefix, "RPT");
    }

    #[test]
    #[serial]
    fn test_load_partial_file() {
        let file = write_config("[progress]\nhalf_life_days = 3.5\n");
        let config = SafespeakConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.progress.half_life_days, 3.5);
        assert_eq!(config.classifier, ClassifierConfig::default());
        assert_eq!(config.reference, ReferenceFormat::default());
    }

    #[test]
    #[serial]
    fn test_missing_explicit_file_is_error() {
        let result = SafespeakConfig::load(Some(Path::new("/nonexistent/safespeak.toml")));
        assert!(matches!(result, Err(SafespeakError::Config(_))));
    }

    #[test]
    #[serial]
    fn test_invalid_values_rejected() {
        let file = write_config("[reference]\nprefix = \"rpt\"\n");
        assert!(SafespeakConfig::load(Some(file.path())).is_err());

        let file = write_config("[progress]\nhalf_life_days = 0.0\n");
        assert!(SafespeakConfig::load(Some(file.path())).is_err());
    }

    #[test]
    #[serial]
    fn test_environment_overrides_file() {
        let file = write_config("[classifier]\nmin_text_length = 20\n");
        std::env::set_var("SAFESPEAK__CLASSIFIER__MIN_TEXT_LENGTH", "30");
        let config = SafespeakConfig::load(Some(file.path()));
        std::env::remove_var("SAFESPEAK__CLASSIFIER__MIN_TEXT_LENGTH");

        assert_eq!(config.unwrap().classifier.min_text_length, 30);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = SafespeakConfig::default();
        let rendered = config.to_toml().unwrap();
        assert!(rendered.contains("[classifier]"));
        let parsed: SafespeakConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }
}
