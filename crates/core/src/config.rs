//! Configuration management
//!
//! This module handles loading and rewriting the copy-pasta run-commands file.
//! The file is stored in YAML format at ~/.copy-pastarc.
//!
//! PROTECTED FILE: the field names below are the on-disk format. Renaming any
//! of them breaks every existing ~/.copy-pastarc.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::target::Target;

/// Name of the config file inside the home directory
pub const CONFIG_FILE_NAME: &str = ".copy-pastarc";

/// Root of the config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Target used when none is named on the command line
    #[serde(
        rename = "currenttarget",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub current_target: Option<Target>,

    /// Every known target, keyed by name
    #[serde(default)]
    pub targets: BTreeMap<String, Target>,
}

impl Config {
    /// Insert or replace `target` and make it the current one
    pub fn upsert(&mut self, target: Target) {
        self.targets.insert(target.name.clone(), target.clone());
        self.current_target = Some(target);
    }

    /// Look up a target by name
    pub fn get(&self, name: &str) -> Option<&Target> {
        self.targets.get(name)
    }

    /// Resolve the named target, or the current one when no name is given
    pub fn resolve(&self, name: Option<&str>) -> Result<Target> {
        match name {
            Some(name) => self
                .get(name)
                .cloned()
                .ok_or_else(|| Error::TargetNotFound(name.to_string())),
            None => self.current_target.clone().ok_or(Error::NoCurrentTarget),
        }
    }
}

/// Configuration manager handles loading and rewriting the config file
#[derive(Debug)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Create a new ConfigManager pointing at ~/.copy-pastarc
    pub fn new() -> Result<Self> {
        let home = dirs::home_dir().ok_or(Error::HomeDirNotFound)?;
        Ok(Self {
            config_path: home.join(CONFIG_FILE_NAME),
        })
    }

    /// Create a ConfigManager with a custom path (useful for testing)
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Get the configuration file path
    pub fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    /// Load configuration from disk
    ///
    /// The file is trusted as written: a current target that disagrees with
    /// its entry in `targets` is returned as is.
    pub fn load(&self) -> Result<Config> {
        let content = match std::fs::read_to_string(&self.config_path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::ConfigNotFound {
                    path: self.config_path.clone(),
                });
            }
            Err(e) => return Err(Error::Io(e)),
        };

        serde_yaml_ng::from_str(&content).map_err(|source| Error::ConfigParse {
            path: self.config_path.clone(),
            source,
        })
    }

    /// Add or replace a target and make it current
    ///
    /// A missing or unparseable file is replaced by a fresh config holding
    /// only this target. Any other read failure is returned untouched so the
    /// stored targets are not overwritten.
    pub fn update(
        &self,
        name: &str,
        access_key: &str,
        secret_access_key: &str,
        bucket_name: &str,
    ) -> Result<()> {
        let mut config = match self.load() {
            Ok(config) => config,
            Err(Error::ConfigNotFound { .. }) => {
                tracing::debug!(path = %self.config_path.display(), "No config yet, starting fresh");
                Config::default()
            }
            Err(e @ Error::ConfigParse { .. }) => {
                tracing::warn!(path = %self.config_path.display(), "Discarding unusable config: {e}");
                Config::default()
            }
            Err(Error::Io(e)) if e.kind() == std::io::ErrorKind::InvalidData => {
                tracing::warn!(path = %self.config_path.display(), "Discarding config that is not UTF-8: {e}");
                Config::default()
            }
            Err(e) => return Err(e),
        };

        config.upsert(Target::new(
            name,
            access_key,
            secret_access_key,
            bucket_name,
        ));
        self.save(&config)
    }

    /// Save configuration to disk
    ///
    /// The file is written to a sibling temporary file and renamed over the
    /// old one, so readers see either the previous or the new content.
    /// Sets file permissions to 600 (owner read/write only).
    pub fn save(&self, config: &Config) -> Result<()> {
        let content = serde_yaml_ng::to_string(config)
            .map_err(|e| Error::General(format!("Failed to serialize config: {e}")))?;

        self.write_atomically(content.as_bytes())
            .map_err(|source| Error::ConfigWrite {
                path: self.config_path.clone(),
                source,
            })?;

        tracing::debug!(path = %self.config_path.display(), targets = config.targets.len(), "Config saved");
        Ok(())
    }

    fn write_atomically(&self, content: &[u8]) -> std::io::Result<()> {
        let dir = match self.config_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir)?;

        let mut file = tempfile::NamedTempFile::new_in(dir)?;
        file.write_all(content)?;
        file.as_file().sync_all()?;

        // Set restrictive permissions on Unix systems
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = std::fs::Permissions::from_mode(0o600);
            file.as_file().set_permissions(permissions)?;
        }

        file.persist(&self.config_path).map_err(|e| e.error)?;
        Ok(())
    }
}
