//! CLI configuration (`navtree.toml`).
//!
//! Parses `navtree.toml` with serde and provides auto-discovery of the
//! config file in the input file's directory and its ancestors.
//!
//! ```toml
//! [validation]
//! strict = true            # promote validation warnings to errors
//!
//! [sync]
//! on_message = "..."       # override the sync-enabled tooltip on output
//! off_message = "..."      # override the sync-disabled tooltip on output
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use navtree::SyncMessages;
use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "navtree.toml";

/// Configuration error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct Config {
    /// Validation behavior.
    pub(crate) validation: ValidationConfig,
    /// Sync tooltip overrides.
    pub(crate) sync: SyncConfig,
}

/// Validation configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ValidationConfig {
    /// Treat validation warnings as errors.
    pub(crate) strict: bool,
}

/// Sync tooltip overrides applied to emitted output.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct SyncConfig {
    /// Override for the sync-enabled tooltip.
    pub(crate) on_message: Option<String>,
    /// Override for the sync-disabled tooltip.
    pub(crate) off_message: Option<String>,
}

impl SyncConfig {
    /// Apply configured overrides to a message pair.
    pub(crate) fn apply(&self, sync: &mut SyncMessages) {
        if let Some(on) = &self.on_message {
            sync.on = on.clone();
        }
        if let Some(off) = &self.off_message {
            sync.off = off.clone();
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// With an explicit path, that file must exist. Otherwise
    /// `navtree.toml` is searched for in `start_dir` and its ancestors;
    /// when none is found, defaults apply.
    pub(crate) fn load(explicit: Option<&Path>, start_dir: &Path) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(ConfigError::NotFound(path.to_path_buf()));
                }
                path.to_path_buf()
            }
            None => match Self::discover(start_dir) {
                Some(path) => path,
                None => return Ok(Self::default()),
            },
        };

        tracing::debug!(path = %path.display(), "loading config");

        let text = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse { path, source })
    }

    /// Walk up from `start` looking for the config file.
    fn discover(start: &Path) -> Option<PathBuf> {
        let mut dir = Some(start);
        while let Some(d) = dir {
            let candidate = d.join(CONFIG_FILENAME);
            if candidate.is_file() {
                return Some(candidate);
            }
            dir = d.parent();
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();

        let config = Config::load(None, dir.path()).unwrap();

        assert!(!config.validation.strict);
        assert!(config.sync.on_message.is_none());
    }

    #[test]
    fn test_explicit_missing_path_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("navtree.toml");

        let err = Config::load(Some(&path), dir.path()).unwrap_err();

        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_discovers_config_in_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("navtree.toml"),
            "[validation]\nstrict = true\n",
        )
        .unwrap();
        let nested = dir.path().join("docs/html");
        fs::create_dir_all(&nested).unwrap();

        let config = Config::load(None, &nested).unwrap();

        assert!(config.validation.strict);
    }

    #[test]
    fn test_parse_error_names_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("navtree.toml");
        fs::write(&path, "not toml [").unwrap();

        let err = Config::load(Some(&path), dir.path()).unwrap_err();

        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("navtree.toml"));
    }

    #[test]
    fn test_sync_overrides_apply_selectively() {
        let config: Config =
            toml::from_str("[sync]\non_message = \"stop syncing\"\n").unwrap();
        let mut sync = SyncMessages::default();

        config.sync.apply(&mut sync);

        assert_eq!(sync.on, "stop syncing");
        assert_eq!(sync.off, SyncMessages::default().off);
    }
}
