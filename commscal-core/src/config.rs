//! Global commscal configuration.

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::error::{CommsCalError, CommsCalResult};
use crate::view::CalendarView;

static DEFAULT_ENTRIES_FILE: &str = "~/commscal/entries.json";

fn default_entries_file() -> PathBuf {
    PathBuf::from(DEFAULT_ENTRIES_FILE)
}

fn is_default_entries_file(p: &PathBuf) -> bool {
    *p == default_entries_file()
}

fn is_default_view(v: &CalendarView) -> bool {
    *v == CalendarView::default()
}

/// Configuration at ~/.config/commscal/config.toml
///
/// Layout constants (slot height, minimum event height, week start) are not
/// configurable; see [`crate::constants`].
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CommscalConfig {
    /// JSON file holding the communication entries
    #[serde(default = "default_entries_file", skip_serializing_if = "is_default_entries_file")]
    pub entries_file: PathBuf,

    /// View shown by `commscal show`
    #[serde(default, skip_serializing_if = "is_default_view")]
    pub default_view: CalendarView,
}

impl Default for CommscalConfig {
    fn default() -> Self {
        CommscalConfig {
            entries_file: default_entries_file(),
            default_view: CalendarView::default(),
        }
    }
}

impl CommscalConfig {
    pub fn config_path() -> CommsCalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CommsCalError::Config("Could not determine config directory".into()))?
            .join("commscal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, creating a commented-out config on first run.
    pub fn load() -> CommsCalResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> CommsCalResult<Self> {
        if !path.exists() {
            Self::create_default_config(path)?;
        }

        let config: CommscalConfig = Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .build()
            .map_err(|e| CommsCalError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CommsCalError::Config(e.to_string()))?;

        tracing::debug!(path = %path.display(), "loaded config");

        Ok(config)
    }

    /// Entries file with `~` expanded.
    pub fn entries_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.entries_file.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    pub fn save_to(&self, path: &Path) -> CommsCalResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| CommsCalError::Config(e.to_string()))?;

        std::fs::write(path, content)
            .map_err(|e| CommsCalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CommsCalResult<()> {
        let contents = format!(
            "\
# commscal configuration

# JSON file with your communication entries:
# entries_file = \"{}\"

# View shown by `commscal show` (day, week or month):
# default_view = \"month\"
",
            DEFAULT_ENTRIES_FILE
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CommsCalError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CommsCalError::Config(format!("Could not write config file: {e}")))?;

        tracing::info!(path = %path.display(), "created default config");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn first_load_creates_commented_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("commscal").join("config.toml");

        let config = CommscalConfig::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config, CommscalConfig::default());

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("# entries_file"));
    }

    #[test]
    fn reads_values_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "entries_file = \"/data/entries.json\"\ndefault_view = \"week\"\n").unwrap();

        let config = CommscalConfig::load_from(&path).unwrap();
        assert_eq!(config.entries_file, PathBuf::from("/data/entries.json"));
        assert_eq!(config.default_view, CalendarView::Week);
    }

    #[test]
    fn invalid_view_is_a_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "default_view = \"year\"\n").unwrap();

        assert!(matches!(
            CommscalConfig::load_from(&path),
            Err(CommsCalError::Config(_))
        ));
    }

    #[test]
    fn save_skips_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = CommscalConfig {
            default_view: CalendarView::Day,
            ..Default::default()
        };
        config.save_to(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("default_view = \"day\""));
        assert!(!written.contains("entries_file"));
        assert_eq!(CommscalConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn entries_path_keeps_absolute_paths() {
        let config = CommscalConfig {
            entries_file: PathBuf::from("/srv/comms/entries.json"),
            ..Default::default()
        };
        assert_eq!(config.entries_path(), PathBuf::from("/srv/comms/entries.json"));
    }
}
