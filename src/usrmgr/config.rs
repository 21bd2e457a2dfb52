use crate::error::{Result, UsrmgrError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATETIME_FORMAT: &str = "%Y/%-m/%-d %H:%M:%S";

/// Display settings, stored in `config.json` in the usrmgr config directory.
///
/// Records themselves are never written anywhere; only these preferences are.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UsrmgrConfig {
    /// chrono format string for the created column and the dialog
    #[serde(default = "default_datetime_format")]
    pub datetime_format: String,

    /// Ask before deleting a row
    #[serde(default = "default_true")]
    pub confirm_delete: bool,

    /// Colored terminal output
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_datetime_format() -> String {
    DEFAULT_DATETIME_FORMAT.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for UsrmgrConfig {
    fn default() -> Self {
        Self {
            datetime_format: default_datetime_format(),
            confirm_delete: true,
            color: true,
        }
    }
}

impl UsrmgrConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: UsrmgrConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    /// Rejects format strings chrono cannot render.
    pub fn validate(&self) -> Result<()> {
        use chrono::format::{Item, StrftimeItems};

        if StrftimeItems::new(&self.datetime_format).any(|item| matches!(item, Item::Error)) {
            return Err(UsrmgrError::Config(format!(
                "invalid datetime_format '{}'",
                self.datetime_format
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = UsrmgrConfig::default();
        assert_eq!(config.datetime_format, "%Y/%-m/%-d %H:%M:%S");
        assert!(config.confirm_delete);
        assert!(config.color);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = UsrmgrConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, UsrmgrConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested = temp_dir.path().join("nested");

        let config = UsrmgrConfig {
            datetime_format: "%Y-%m-%d".to_string(),
            confirm_delete: false,
            color: false,
        };
        config.save(&nested).unwrap();

        let loaded = UsrmgrConfig::load(&nested).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{ "confirm_delete": false }"#,
        )
        .unwrap();

        let loaded = UsrmgrConfig::load(temp_dir.path()).unwrap();
        assert!(!loaded.confirm_delete);
        assert_eq!(loaded.datetime_format, DEFAULT_DATETIME_FORMAT);
    }

    #[test]
    fn test_invalid_format_rejected() {
        let config = UsrmgrConfig {
            datetime_format: "%Q".to_string(),
            ..UsrmgrConfig::default()
        };
        assert!(matches!(config.validate(), Err(UsrmgrError::Config(_))));
    }
}
