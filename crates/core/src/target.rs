//! Target management
//!
//! Targets are named bundles of object-store credentials and the bucket the
//! clipboard lives in.

use serde::{Deserialize, Serialize};

use crate::config::ConfigManager;
use crate::error::{Error, Result};

/// A target represents one destination for clipboard content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Target {
    /// Unique name for this target
    pub name: String,

    /// Access key ID
    #[serde(rename = "accesskey")]
    pub access_key: String,

    /// Secret access key
    #[serde(rename = "secretaccesskey")]
    pub secret_access_key: String,

    /// Bucket holding the clipboard object
    #[serde(rename = "bucketname")]
    pub bucket_name: String,
}

impl Target {
    /// Create a new target
    pub fn new(
        name: impl Into<String>,
        access_key: impl Into<String>,
        secret_access_key: impl Into<String>,
        bucket_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            access_key: access_key.into(),
            secret_access_key: secret_access_key.into(),
            bucket_name: bucket_name.into(),
        }
    }
}

/// Manager for target operations
pub struct TargetManager {
    config_manager: ConfigManager,
}

impl TargetManager {
    /// Create a new TargetManager with a specific ConfigManager
    pub fn with_config_manager(config_manager: ConfigManager) -> Self {
        Self { config_manager }
    }

    /// Create a new TargetManager using the default config location
    pub fn new() -> Result<Self> {
        let config_manager = ConfigManager::new()?;
        Ok(Self { config_manager })
    }

    /// The underlying config manager
    pub fn config_manager(&self) -> &ConfigManager {
        &self.config_manager
    }

    /// Get a target by name, or the current target when `name` is None
    pub fn get(&self, name: Option<&str>) -> Result<Target> {
        self.config_manager.load()?.resolve(name)
    }

    /// Add or replace a target and make it current
    pub fn set(&self, target: &Target) -> Result<()> {
        self.config_manager.update(
            &target.name,
            &target.access_key,
            &target.secret_access_key,
            &target.bucket_name,
        )
    }

    /// Make an already configured target the current one
    pub fn select(&self, name: &str) -> Result<Target> {
        let config = self.config_manager.load()?;
        let target = config
            .get(name)
            .cloned()
            .ok_or_else(|| Error::TargetNotFound(name.to_string()))?;

        self.set(&target)?;
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_target_manager() -> (TargetManager, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(".copy-pastarc");
        let config_manager = ConfigManager::with_path(config_path);
        let target_manager = TargetManager::with_config_manager(config_manager);
        (target_manager, temp_dir)
    }

    #[test]
    fn test_target_new() {
        let target = Target::new("work", "key", "secret", "work-bucket");
        assert_eq!(target.name, "work");
        assert_eq!(target.access_key, "key");
        assert_eq!(target.secret_access_key, "secret");
        assert_eq!(target.bucket_name, "work-bucket");
        assert_eq!(target, Target::new("work", "key", "secret", "work-bucket"));
    }

    #[test]
    fn test_target_manager_set_and_get() {
        let (manager, _temp_dir) = temp_target_manager();

        manager.set(&Target::new("home", "k", "s", "home-bucket")).unwrap();

        let retrieved = manager.get(Some("home")).unwrap();
        assert_eq!(retrieved.bucket_name, "home-bucket");
        assert_eq!(manager.get(None).unwrap().name, "home");
    }

    #[test]
    fn test_target_manager_targets_sorted_by_name() {
        let (manager, _temp_dir) = temp_target_manager();

        manager.set(&Target::new("b", "k", "s", "bb")).unwrap();
        manager.set(&Target::new("a", "k", "s", "ab")).unwrap();

        let config = manager.config_manager().load().unwrap();
        let names: Vec<&String> = config.targets.keys().collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_target_manager_select() {
        let (manager, _temp_dir) = temp_target_manager();

        manager.set(&Target::new("a", "ka", "sa", "ba")).unwrap();
        manager.set(&Target::new("b", "kb", "sb", "bb")).unwrap();
        assert_eq!(manager.get(None).unwrap().name, "b");

        let selected = manager.select("a").unwrap();
        assert_eq!(selected, Target::new("a", "ka", "sa", "ba"));
        assert_eq!(manager.get(None).unwrap(), selected);
        assert_eq!(manager.config_manager().load().unwrap().targets.len(), 2);
    }

    #[test]
    fn test_target_manager_select_unknown() {
        let (manager, _temp_dir) = temp_target_manager();
        manager.set(&Target::new("a", "k", "s", "b")).unwrap();

        let result = manager.select("nope");
        assert!(matches!(result.unwrap_err(), Error::TargetNotFound(_)));
        assert_eq!(manager.get(None).unwrap().name, "a");
    }

    #[test]
    fn test_target_manager_select_without_config() {
        let (manager, _temp_dir) = temp_target_manager();

        let result = manager.select("a");
        assert!(matches!(result.unwrap_err(), Error::ConfigNotFound { .. }));
    }

    #[test]
    fn test_target_manager_get_not_found() {
        let (manager, _temp_dir) = temp_target_manager();
        manager.set(&Target::new("a", "k", "s", "b")).unwrap();

        let result = manager.get(Some("nonexistent"));
        assert!(matches!(result.unwrap_err(), Error::TargetNotFound(_)));
    }
}
