//! Configuration management for LX.
//!
//! Parses `lx.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ```toml
//! [render]
//! escape_text = true
//! headings = false
//!
//! [quiz]
//! passing_percentage = 60.0
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override text escaping.
    pub escape_text: Option<bool>,
    /// Override heading rendering.
    pub headings: Option<bool>,
    /// Override quiz passing percentage.
    pub passing_percentage: Option<f64>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "lx.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Delta rendering configuration.
    pub render: RenderConfig,
    /// Quiz scoring configuration.
    pub quiz: QuizConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Delta rendering configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Escape HTML special characters in text fragments.
    ///
    /// Disable only when the delta source is trusted.
    pub escape_text: bool,
    /// Render header lines as `<h1>`-`<h6>` instead of line breaks.
    pub headings: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            escape_text: true,
            headings: false,
        }
    }
}

/// Quiz scoring configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// Minimum percentage of correct answers to pass.
    pub passing_percentage: f64,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            passing_percentage: 60.0,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `lx.toml` in current directory and parents,
    /// falling back to defaults.
    ///
    /// CLI settings are applied after loading, taking precedence over config
    /// file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(escape_text) = settings.escape_text {
            self.render.escape_text = escape_text;
        }
        if let Some(headings) = settings.headings {
            self.render.headings = headings;
        }
        if let Some(passing_percentage) = settings.passing_percentage {
            self.quiz.passing_percentage = passing_percentage;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        Self::discover_from(current)
    }

    /// Search for config file starting at `dir` and walking up.
    fn discover_from(mut dir: PathBuf) -> Option<PathBuf> {
        loop {
            let candidate = dir.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !dir.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());

        // Validate configuration after loading
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_quiz()?;
        Ok(())
    }

    /// Validate quiz configuration.
    fn validate_quiz(&self) -> Result<(), ConfigError> {
        let passing = self.quiz.passing_percentage;
        if !(0.0..=100.0).contains(&passing) {
            return Err(ConfigError::Validation(format!(
                "quiz.passing_percentage must be between 0 and 100, got {passing}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.render.escape_text);
        assert!(!config.render.headings);
        assert!((config.quiz.passing_percentage - 60.0).abs() < f64::EPSILON);
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.render.escape_text);
        assert!((config.quiz.passing_percentage - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_render_config() {
        let toml = r"
[render]
escape_text = false
headings = true
";
        let config: Config = toml::from_str(toml).unwrap();
        assert!(!config.render.escape_text);
        assert!(config.render.headings);
    }

    #[test]
    fn test_parse_partial_section_keeps_defaults() {
        let toml = r"
[render]
headings = true
";
        let config: Config = toml::from_str(toml).unwrap();
        assert!(config.render.escape_text);
        assert!(config.render.headings);
    }

    #[test]
    fn test_parse_quiz_config() {
        let toml = r"
[quiz]
passing_percentage = 75.5
";
        let config: Config = toml::from_str(toml).unwrap();
        assert!((config.quiz.passing_percentage - 75.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_validate_passing_percentage() {
        let mut config = Config::default();
        config.quiz.passing_percentage = 120.0;
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(_)),
            "Expected ConfigError::Validation, got {err:?}"
        );
        assert!(err.to_string().contains("quiz.passing_percentage"));
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config = Config::default();
        let overrides = CliSettings {
            escape_text: Some(false),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert!(!config.render.escape_text);
        assert!(!config.render.headings); // Unchanged
    }

    #[test]
    fn test_apply_cli_settings_multiple() {
        let mut config = Config::default();
        let overrides = CliSettings {
            escape_text: Some(false),
            headings: Some(true),
            passing_percentage: Some(80.0),
        };

        config.apply_cli_settings(&overrides);

        assert!(!config.render.escape_text);
        assert!(config.render.headings);
        assert!((config.quiz.passing_percentage - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_load_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[render]\nheadings = true\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert!(config.render.headings);
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lx.toml");
        std::fs::write(&path, "[render\n").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lx.toml");
        std::fs::write(&path, "[quiz]\npassing_percentage = -5.0\n").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_cli_settings_are_validated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lx.toml");
        std::fs::write(&path, "").unwrap();
        let overrides = CliSettings {
            passing_percentage: Some(101.0),
            ..Default::default()
        };

        let err = Config::load(Some(&path), Some(&overrides)).unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_discover_from_parent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("course/module");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME), "").unwrap();

        let found = Config::discover_from(nested).unwrap();

        assert_eq!(found, dir.path().join(CONFIG_FILENAME));
    }
}
