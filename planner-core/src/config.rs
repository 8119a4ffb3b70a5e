//! Planner configuration at ~/.config/planner/config.toml

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, PlannerResult};
use crate::store::FileBackend;
use crate::time::TimeOfDay;

static DEFAULT_DATA_FILE: &str = "~/.planner/myPlannerEvents.json";

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_start() -> TimeOfDay {
    TimeOfDay::from_hm(9, 0).unwrap_or_default()
}

fn default_end() -> TimeOfDay {
    TimeOfDay::from_hm(10, 0).unwrap_or_default()
}

/// User configuration.
///
/// Every field is optional in the file. `PLANNER_DATA_FILE` (and the other
/// `PLANNER_*` variables) override the file.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PlannerConfig {
    /// Where the events blob lives. `~` is expanded.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Start time proposed for new events.
    #[serde(default = "default_start")]
    pub default_start: TimeOfDay,

    /// End time proposed for new events.
    #[serde(default = "default_end")]
    pub default_end: TimeOfDay,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        PlannerConfig {
            data_file: default_data_file(),
            default_start: default_start(),
            default_end: default_end(),
        }
    }
}

impl PlannerConfig {
    pub fn config_path() -> PlannerResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| PlannerError::Config("Could not determine config directory".into()))?
            .join("planner");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the user config, writing a commented default file on first run.
    pub fn load() -> PlannerResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load config from `path` plus the environment. A missing file is fine.
    pub fn load_from(path: &Path) -> PlannerResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("PLANNER"))
            .build()
            .map_err(|e| PlannerError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| PlannerError::Config(e.to_string()))
    }

    /// Data file path with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_file.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    pub fn backend(&self) -> FileBackend {
        FileBackend::new(self.data_path())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> PlannerResult<()> {
        let defaults = toml::to_string_pretty(&PlannerConfig::default())
            .map_err(|e| PlannerError::Config(e.to_string()))?;

        let mut contents = String::from("# planner configuration\n\n");
        for line in defaults.lines().filter(|l| !l.is_empty()) {
            contents.push_str("# ");
            contents.push_str(line);
            contents.push('\n');
        }

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                PlannerError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| PlannerError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PlannerConfig::default();
        assert_eq!(config.default_start.to_string(), "09:00");
        assert_eq!(config.default_end.to_string(), "10:00");
        assert_eq!(config.data_file, PathBuf::from(DEFAULT_DATA_FILE));
    }

    #[test]
    fn test_default_config_file_parses_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("planner/config.toml");

        PlannerConfig::create_default_config(&path).unwrap();
        let config = PlannerConfig::load_from(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("# data_file = \"~/.planner/myPlannerEvents.json\""));
        assert!(written.contains("# default_start = \"09:00\""));
        assert!(written.lines().all(|l| l.is_empty() || l.starts_with('#')));

        assert_eq!(config.default_start.to_string(), "09:00");
        assert_eq!(config.default_end.to_string(), "10:00");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "data_file = \"/var/lib/planner/events.json\"\ndefault_start = \"08:30\"\n",
        )
        .unwrap();

        let config = PlannerConfig::load_from(&path).unwrap();
        assert_eq!(config.data_path(), PathBuf::from("/var/lib/planner/events.json"));
        assert_eq!(config.default_start.to_string(), "08:30");
        assert_eq!(config.default_end.to_string(), "10:00");
    }

    #[test]
    fn test_load_rejects_bad_time() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "default_end = \"25:00\"\n").unwrap();

        assert!(matches!(
            PlannerConfig::load_from(&path),
            Err(PlannerError::Config(_))
        ));
    }
}
