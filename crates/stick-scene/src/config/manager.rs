//! Configuration manager for loading and saving scene configuration

use std::path::{Path, PathBuf};

use super::SceneConfig;

/// Configuration error types
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
    #[error("Deserialization error: {0}")]
    Deserialize(String),
}

/// Configuration manager handles loading, saving, and accessing scene configuration
pub struct ConfigManager {
    config: SceneConfig,
    config_path: PathBuf,
    dirty: bool,
}

impl ConfigManager {
    /// Create a configuration manager for the default location
    pub fn new() -> Self {
        Self::from_path(Self::default_config_path())
    }

    /// Create a configuration manager for `path`, loading it if present
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let config_path = path.into();
        let config = Self::load_from_path(&config_path).unwrap_or_else(|| {
            tracing::info!("No usable config at {:?}, using defaults", config_path);
            SceneConfig::new()
        });

        Self {
            config,
            config_path,
            dirty: false,
        }
    }

    /// Get the OS-standard configuration directory
    fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("stick-figure")
    }

    /// Get the default configuration file path
    pub fn default_config_path() -> PathBuf {
        Self::config_dir().join("config.ron")
    }

    fn load_from_path(path: &Path) -> Option<SceneConfig> {
        let content = std::fs::read_to_string(path).ok()?;
        match parse_config(&content) {
            Ok(config) => {
                tracing::info!("Loaded config from {:?}", path);
                Some(config)
            }
            Err(e) => {
                tracing::warn!("Failed to parse config file: {}", e);
                None
            }
        }
    }

    /// Get a reference to the current configuration
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Get a mutable reference to the configuration (marks as dirty)
    pub fn config_mut(&mut self) -> &mut SceneConfig {
        self.dirty = true;
        &mut self.config
    }

    /// Check if the configuration has unsaved changes
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Save the configuration to disk if it changed
    pub fn save(&mut self) -> Result<(), ConfigError> {
        if !self.dirty {
            return Ok(());
        }

        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::Io(e.to_string()))?;
        }

        let content = ron::ser::to_string_pretty(&self.config, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;

        std::fs::write(&self.config_path, &content).map_err(|e| ConfigError::Io(e.to_string()))?;

        tracing::info!("Saved config to {:?}", self.config_path);
        self.dirty = false;
        Ok(())
    }

    /// Reset configuration to defaults
    pub fn reset_to_defaults(&mut self) {
        self.config = SceneConfig::new();
        self.dirty = true;
    }

    /// Get the config file path (for display purposes)
    pub fn config_file_path(&self) -> &Path {
        &self.config_path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a configuration from RON text
pub fn parse_config(text: &str) -> Result<SceneConfig, ConfigError> {
    ron::from_str(text).map_err(|e| ConfigError::Deserialize(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("stick-scene-test-{}", uuid::Uuid::new_v4()))
            .join("config.ron")
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let manager = ConfigManager::from_path(temp_config_path());
        assert_eq!(manager.config(), &SceneConfig::new());
        assert!(!manager.is_dirty());
    }

    #[test]
    fn test_save_and_reload() {
        let path = temp_config_path();
        let mut manager = ConfigManager::from_path(&path);
        assert_eq!(manager.config_file_path(), path.as_path());
        manager.config_mut().figure.spacer = 0.2;
        manager.config_mut().camera.orthographic_scale = 6.0;
        assert!(manager.is_dirty());
        manager.save().unwrap();
        assert!(!manager.is_dirty());

        let reloaded = ConfigManager::from_path(&path);
        assert_eq!(reloaded.config().figure.spacer, 0.2);
        assert_eq!(reloaded.config().camera.orthographic_scale, 6.0);

        if let Some(dir) = path.parent() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn test_unparsable_file_falls_back() {
        let path = temp_config_path();
        let dir = path.parent().unwrap().to_path_buf();
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(&path, "not ron at all (").unwrap();

        let manager = ConfigManager::from_path(&path);
        assert_eq!(manager.config(), &SceneConfig::new());
        assert!(matches!(parse_config("not ron at all ("), Err(ConfigError::Deserialize(_))));

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn test_reset_marks_dirty() {
        let mut manager = ConfigManager::from_path(temp_config_path());
        manager.reset_to_defaults();
        assert!(manager.is_dirty());
    }
}
