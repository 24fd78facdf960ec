//! Configuration module for gridpick
//!
//! Manages kiosk configuration: where the location store lives and how the
//! picker grids are laid out. Configuration is stored in the user's config
//! directory (`~/.config/gridpick/config.toml` on Linux) and every field can
//! be overridden with a `GRIDPICK_<FIELD>` environment variable.
//!
//! # Example Configuration
//!
//! ```toml
//! store_path = "/srv/kiosk/locations.json"
//! page_size = 16
//! popup_page_size = 16
//! columns = 4
//! prompt = "Select Table \n Number"
//! quiet = false
//! ```

use crate::paginate::{DEFAULT_COLUMNS, DEFAULT_PAGE_SIZE};
use crate::picker::{DEFAULT_PROMPT, PickerConfig};
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct KioskConfig {
    /// Location store file; the data directory is used when unset
    pub store_path: Option<PathBuf>,

    /// Buttons per page on the main delivery grid
    pub page_size: usize,

    /// Buttons per page in the base-location popup
    pub popup_page_size: usize,

    /// Buttons per grid row, shared by both grids
    pub columns: usize,

    /// Status text shown while no table is selected
    pub prompt: String,

    /// Suppress informational output by default
    pub quiet: bool,
}

impl Default for KioskConfig {
    fn default() -> Self {
        Self {
            store_path: None,
            page_size: DEFAULT_PAGE_SIZE.get(),
            popup_page_size: DEFAULT_PAGE_SIZE.get(),
            columns: DEFAULT_COLUMNS.get(),
            prompt: DEFAULT_PROMPT.to_string(),
            quiet: false,
        }
    }
}

impl KioskConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("gridpick").join("config.toml"))
    }

    /// Load configuration from the default location, creating it if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, validated, or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save_to(&config_path)?;
            log::info!("created default configuration at {}", config_path.display());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from `path`, layering environment overrides on top
    ///
    /// A missing file yields the defaults (plus overrides).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be parsed or the result is invalid.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(Environment::with_prefix("GRIDPICK").try_parsing(true))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config path cannot be determined or writing fails.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Reject layouts the pickers cannot display
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any page size or the column count is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("page_size", self.page_size),
            ("popup_page_size", self.popup_page_size),
            ("columns", self.columns),
        ] {
            if value == 0 {
                return Err(ConfigError::Message(format!("{name} must be at least 1")));
            }
        }
        Ok(())
    }

    /// Location store path, falling back to `<data dir>/gridpick/locations.json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if no path is set and the data directory cannot be determined.
    pub fn resolve_store_path(&self) -> Result<PathBuf, ConfigError> {
        if let Some(path) = &self.store_path {
            return Ok(path.clone());
        }
        let data_dir = dirs::data_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine data directory".to_string()))?;
        Ok(data_dir.join("gridpick").join("locations.json"))
    }

    /// Picker settings for the main delivery grid
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the layout is invalid.
    pub fn main_picker(&self) -> Result<PickerConfig, ConfigError> {
        Ok(PickerConfig::default()
            .with_page_size(non_zero("page_size", self.page_size)?)
            .with_columns(non_zero("columns", self.columns)?)
            .with_prompt(self.prompt.clone()))
    }

    /// Picker settings for the base-location popup
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the layout is invalid.
    pub fn popup_picker(&self) -> Result<PickerConfig, ConfigError> {
        Ok(PickerConfig::default()
            .with_page_size(non_zero("popup_page_size", self.popup_page_size)?)
            .with_columns(non_zero("columns", self.columns)?))
    }
}

fn non_zero(name: &str, value: usize) -> Result<NonZeroUsize, ConfigError> {
    NonZeroUsize::new(value).ok_or_else(|| ConfigError::Message(format!("{name} must be at least 1")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = KioskConfig::default();
        assert!(config.store_path.is_none());
        assert_eq!(config.page_size, 16);
        assert_eq!(config.columns, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = KioskConfig {
            store_path: Some(PathBuf::from("/srv/kiosk/locations.json")),
            page_size: 9,
            columns: 3,
            ..KioskConfig::default()
        };
        config.save_to(&path).unwrap();

        let loaded = KioskConfig::load_from(&path).unwrap();
        assert_eq!(loaded.store_path, config.store_path);
        assert_eq!(loaded.page_size, 9);
        assert_eq!(loaded.columns, 3);
        assert_eq!(loaded.prompt, DEFAULT_PROMPT);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = KioskConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(loaded.page_size, KioskConfig::default().page_size);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "popup_page_size = 8\n").unwrap();

        let loaded = KioskConfig::load_from(&path).unwrap();
        assert_eq!(loaded.popup_page_size, 8);
        assert_eq!(loaded.page_size, 16);
        assert!(!loaded.quiet);
    }

    #[test]
    fn test_zero_columns_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "columns = 0\n").unwrap();

        let err = KioskConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("columns must be at least 1"));
    }

    #[test]
    fn test_picker_configs() {
        let config = KioskConfig {
            page_size: 12,
            popup_page_size: 8,
            columns: 4,
            prompt: "Choose".to_string(),
            ..KioskConfig::default()
        };

        let main = config.main_picker().unwrap();
        assert_eq!(main.page_size.get(), 12);
        assert_eq!(main.prompt, "Choose");

        let popup = config.popup_picker().unwrap();
        assert_eq!(popup.page_size.get(), 8);
        assert_eq!(popup.prompt, DEFAULT_PROMPT);
    }

    #[test]
    fn test_explicit_store_path() {
        let config = KioskConfig {
            store_path: Some(PathBuf::from("/tmp/locations.json")),
            ..KioskConfig::default()
        };
        assert_eq!(config.resolve_store_path().unwrap(), PathBuf::from("/tmp/locations.json"));
    }
}
