//! Configuration System
//!
//! Handles loading site configuration from TOML and environment variables.
//! Every section is optional; missing keys fall back to the defaults the
//! page ships with.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::charts::{CarouselSpeed, ScrollDirection};
use crate::theme::Theme;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scene: SceneConfig,

    #[serde(default)]
    pub animations: AnimationConfig,

    #[serde(default)]
    pub charts: ChartsConfig,

    #[serde(default)]
    pub theme: ThemeConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Decorative scene configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SceneConfig {
    #[serde(default = "default_book_count")]
    pub book_count: usize,

    #[serde(default = "default_document_count")]
    pub document_count: usize,

    #[serde(default = "default_data_point_count")]
    pub data_point_count: usize,

    /// Upper bound for the square canvas edge (CSS pixels)
    #[serde(default = "default_max_canvas_size")]
    pub max_canvas_size: f64,

    /// Seed for the randomised placement of books, documents and points
    #[serde(default = "default_seed")]
    pub seed: u64,
}

fn default_book_count() -> usize {
    6
}

fn default_document_count() -> usize {
    5
}

fn default_data_point_count() -> usize {
    40
}

fn default_max_canvas_size() -> f64 {
    600.0
}

fn default_seed() -> u64 {
    42
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            book_count: default_book_count(),
            document_count: default_document_count(),
            data_point_count: default_data_point_count(),
            max_canvas_size: default_max_canvas_size(),
            seed: default_seed(),
        }
    }
}

/// Entrance animation configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AnimationConfig {
    /// When false every section renders its final, static state
    #[serde(default = "default_animations_enabled")]
    pub enabled: bool,
}

fn default_animations_enabled() -> bool {
    true
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: default_animations_enabled(),
        }
    }
}

/// Chart carousel configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChartsConfig {
    #[serde(default)]
    pub carousel_direction: ScrollDirection,

    #[serde(default)]
    pub carousel_speed: CarouselSpeed,
}

/// Theme configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThemeConfig {
    #[serde(default)]
    pub initial: Theme,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Parse configuration from an in-memory TOML document
    ///
    /// Used by the browser build, which embeds its config at compile time.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::from("<embedded>"),
            error: e.to_string(),
        })
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("early-warning").join("config.toml")),
            Some(PathBuf::from("./ews.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Apply environment variable overrides to an existing config
    pub fn apply_env_overrides(&mut self) {
        if let Ok(level) = std::env::var("EWS_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("EWS_LOG_FORMAT") {
            self.logging.format = format;
        }
        if let Ok(seed) = std::env::var("EWS_SCENE_SEED") {
            if let Ok(s) = seed.parse() {
                self.scene.seed = s;
            }
        }
        if let Ok(enabled) = std::env::var("EWS_ANIMATIONS") {
            if let Ok(e) = enabled.parse() {
                self.animations.enabled = e;
            }
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Early Warning System site configuration
#
# Environment variables override these settings:
# - EWS_LOG_LEVEL
# - EWS_LOG_FORMAT
# - EWS_SCENE_SEED
# - EWS_ANIMATIONS

[scene]
# Objects in the decorative 3D scene
book_count = 6
document_count = 5
data_point_count = 40

# Largest edge of the square scene canvas (CSS pixels)
max_canvas_size = 600.0

# Seed for randomised object placement
seed = 42

[animations]
# Set to false to render every section in its final state
enabled = true

[charts]
# Carousel direction: left or right
carousel_direction = "left"

# Carousel speed: fast, normal or slow
carousel_speed = "slow"

[theme]
# Theme on first load: light or dark
initial = "light"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.scene.book_count, 6);
        assert_eq!(config.scene.document_count, 5);
        assert_eq!(config.scene.data_point_count, 40);
        assert_eq!(config.scene.max_canvas_size, 600.0);
        assert!(config.animations.enabled);
        assert_eq!(config.theme.initial, Theme::Light);
        assert_eq!(config.charts.carousel_speed, CarouselSpeed::Slow);
    }

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config = Config::from_toml_str(&generate_default_config()).unwrap();
        let defaults = Config::default();
        assert_eq!(config.scene.seed, defaults.scene.seed);
        assert_eq!(config.scene.data_point_count, defaults.scene.data_point_count);
        assert_eq!(config.charts.carousel_direction, ScrollDirection::Left);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[scene]\ndata_point_count = 12\n\n[theme]\ninitial = \"dark\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.scene.data_point_count, 12);
        assert_eq!(config.scene.book_count, 6);
        assert_eq!(config.theme.initial, Theme::Dark);
        assert!(config.animations.enabled);
    }

    #[test]
    fn test_parse_error_carries_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[scene\nbook_count = ").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load(Path::new("/definitely/not/here/ews.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
