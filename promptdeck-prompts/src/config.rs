//! Editor configuration using Figment
//!
//! Sources are merged in precedence order (later sources override earlier ones):
//! 1. Built-in defaults
//! 2. Global file `~/.promptdeck/config.{toml,yaml,yml,json}`
//! 3. Project file `./.promptdeck/config.{toml,yaml,yml,json}`
//! 4. Environment variables prefixed with `PROMPTDECK_`
//!
//! No caching is performed; every [`ConfigLoader::load`] reads fresh.

use crate::format::Format;
use figment::{
    providers::{Env, Format as _, Json, Serialized, Toml, Yaml},
    Figment,
};
use promptdeck_common::PromptDeckError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, trace};

/// Directory holding configuration files, relative to home or project root
pub const CONFIG_DIR_NAME: &str = ".promptdeck";
/// Configuration file stem
pub const CONFIG_FILE_STEM: &str = "config";
/// Environment variable prefix
pub const ENV_PREFIX: &str = "PROMPTDECK_";

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration parsing failed
    #[error("Failed to parse configuration: {source}")]
    ParseError {
        /// Underlying figment error
        source: Box<figment::Error>,
    },

    /// Configuration validation failed
    #[error("Configuration validation failed: {message}")]
    ValidationError {
        /// What was wrong
        message: String,
    },
}

impl From<figment::Error> for ConfigError {
    fn from(error: figment::Error) -> Self {
        ConfigError::ParseError {
            source: Box::new(error),
        }
    }
}

impl From<ConfigError> for PromptDeckError {
    fn from(error: ConfigError) -> Self {
        PromptDeckError::config(error.to_string())
    }
}

/// Result type for configuration loading
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Settings that shape a new editor session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Format new slots start in
    pub default_format: Format,
    /// Category used when a draft is saved with a blank category
    pub default_category: String,
    /// Highest rating a prompt can be given
    pub max_rating: u8,
    /// Start the library listing from the bundled sample cards
    pub seed_library: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_format: Format::Json,
            default_category: "general".to_string(),
            max_rating: 5,
            seed_library: false,
        }
    }
}

impl EditorConfig {
    /// Check invariants figment cannot express
    pub fn validate(&self) -> ConfigResult<()> {
        if self.default_category.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "default_category must not be blank".to_string(),
            });
        }
        if self.max_rating == 0 {
            return Err(ConfigError::ValidationError {
                message: "max_rating must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Loads [`EditorConfig`] from defaults, files, and the environment
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    global_dir: Option<PathBuf>,
    project_dir: Option<PathBuf>,
}

impl ConfigLoader {
    /// Search `~/.promptdeck` and `./.promptdeck`
    pub fn new() -> Self {
        Self {
            global_dir: dirs::home_dir().map(|home| home.join(CONFIG_DIR_NAME)),
            project_dir: std::env::current_dir()
                .ok()
                .map(|cwd| cwd.join(CONFIG_DIR_NAME)),
        }
    }

    /// Search explicit configuration directories instead of home and cwd
    pub fn with_search_roots(global_dir: Option<PathBuf>, project_dir: Option<PathBuf>) -> Self {
        Self {
            global_dir,
            project_dir,
        }
    }

    /// Load and validate the effective configuration
    pub fn load(&self) -> ConfigResult<EditorConfig> {
        let config: EditorConfig = self.build_figment().extract()?;
        config.validate()?;
        info!(
            "Loaded editor configuration (default format {})",
            config.default_format
        );
        Ok(config)
    }

    /// Configuration files that exist, lowest precedence first
    pub fn discover_files(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();
        for dir in [&self.global_dir, &self.project_dir].into_iter().flatten() {
            files.extend(Self::search_directory(dir));
        }
        debug!("Discovered {} configuration files", files.len());
        files
    }

    fn build_figment(&self) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(EditorConfig::default()));

        for path in self.discover_files() {
            trace!("Loading config file: {}", path.display());
            figment = match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => figment.merge(Toml::file(&path)),
                Some("yaml") | Some("yml") => figment.merge(Yaml::file(&path)),
                Some("json") => figment.merge(Json::file(&path)),
                _ => figment,
            };
        }

        figment.merge(Env::prefixed(ENV_PREFIX))
    }

    fn search_directory(dir: &Path) -> Vec<PathBuf> {
        ["toml", "yaml", "yml", "json"]
            .iter()
            .map(|ext| dir.join(format!("{CONFIG_FILE_STEM}.{ext}")))
            .filter(|path| path.is_file())
            .collect()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Load configuration from the standard locations
pub fn load_configuration() -> ConfigResult<EditorConfig> {
    ConfigLoader::new().load()
}
