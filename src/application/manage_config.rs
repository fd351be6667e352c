//! Config management use case

use crate::error::{Result, SproutError};
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};

const VALID_KEYS: &str = "snapshot, default_child, created";

/// Service for managing journal configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "snapshot" => Ok(config.snapshot),
            "default_child" => Ok(config.default_child.unwrap_or_default()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(SproutError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}",
                key, VALID_KEYS
            ))),
        }
    }

    /// Set a config value. An empty `default_child` clears it.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "snapshot" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err(SproutError::Config(
                        "Snapshot path cannot be empty".to_string(),
                    ));
                }
                config.snapshot = value.to_string();
            }
            "default_child" => {
                let value = value.trim();
                config.default_child = (!value.is_empty()).then(|| value.to_string());
            }
            "created" => {
                return Err(SproutError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(SproutError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: snapshot, default_child",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn service() -> (TempDir, ConfigService) {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        repo.save_config(&Config::new()).unwrap();
        (temp, ConfigService::new(repo))
    }

    #[test]
    fn test_get_defaults() {
        let (_temp, service) = service();
        assert_eq!(service.get("snapshot").unwrap(), "snapshot.json");
        assert_eq!(service.get("default_child").unwrap(), "");
        assert!(!service.get("created").unwrap().is_empty());
    }

    #[test]
    fn test_set_and_clear_default_child() {
        let (_temp, service) = service();
        service.set("default_child", "c1").unwrap();
        assert_eq!(service.get("default_child").unwrap(), "c1");

        service.set("default_child", "").unwrap();
        assert!(service.list().unwrap().default_child.is_none());
    }

    #[test]
    fn test_set_snapshot() {
        let (_temp, service) = service();
        service.set("snapshot", "exports/all.json").unwrap();
        assert_eq!(service.get("snapshot").unwrap(), "exports/all.json");
        assert!(service.set("snapshot", "  ").is_err());
    }

    #[test]
    fn test_created_is_read_only() {
        let (_temp, service) = service();
        let err = service.set("created", "2024-01-01T00:00:00Z").unwrap_err();
        assert!(err.to_string().contains("read-only"));
    }

    #[test]
    fn test_unknown_key() {
        let (_temp, service) = service();
        assert!(service.get("mode").is_err());
        assert!(service.set("mode", "daily").is_err());
    }
}
