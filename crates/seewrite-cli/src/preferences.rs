//! Preference storage in a TOML file.
//!
//! The file is a flat table of string values, read on every load and
//! rewritten on every save, so several runs can share it.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::debug;

use seewrite::{SeewriteError, preferences::PreferenceStore};

const PREFERENCES_FILE: &str = "preferences.toml";

/// Path of the preferences file in the platform data directory.
pub fn default_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "seewrite", "seewrite")
        .map(|dirs| dirs.data_dir().join(PREFERENCES_FILE))
}

/// [`PreferenceStore`] backed by a TOML file.
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    /// Uses the file at `path`. The file is created on the first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_table(&self) -> Result<toml::Table, SeewriteError> {
        if !self.path.exists() {
            debug!(path = self.path.display().to_string(); "No preferences file yet");
            return Ok(toml::Table::new());
        }

        let content = fs::read_to_string(&self.path)?;
        toml::from_str(&content).map_err(|err| {
            SeewriteError::Config(format!(
                "Failed to parse preferences file {}: {err}",
                self.path.display()
            ))
        })
    }
}

impl PreferenceStore for FilePreferences {
    fn load(&self, key: &str) -> Result<Option<String>, SeewriteError> {
        let table = self.read_table()?;
        Ok(table
            .get(key)
            .and_then(toml::Value::as_str)
            .map(str::to_string))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), SeewriteError> {
        let mut table = self.read_table()?;
        table.insert(key.to_string(), toml::Value::String(value.to_string()));

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string(&table).map_err(|err| SeewriteError::Config(err.to_string()))?;
        fs::write(&self.path, content)?;

        debug!(key, value, path = self.path.display().to_string(); "Preference saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use seewrite::{
        model::Tier,
        preferences::{USER_LEVEL_KEY, load_tier, save_tier},
    };
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_missing_file_has_no_values() {
        let dir = tempdir().unwrap();
        let store = FilePreferences::new(dir.path().join(PREFERENCES_FILE));
        assert_eq!(store.load(USER_LEVEL_KEY).unwrap(), None);
    }

    #[test]
    fn test_save_creates_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join(PREFERENCES_FILE);
        let mut store = FilePreferences::new(&path);

        save_tier(&mut store, Tier::Advanced).unwrap();

        assert!(path.exists());
        let reopened = FilePreferences::new(&path);
        assert_eq!(load_tier(&reopened).unwrap(), Some(Tier::Advanced));
    }

    #[test]
    fn test_other_keys_survive_save() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(PREFERENCES_FILE);
        fs::write(&path, "theme = \"dark\"\n").unwrap();

        let mut store = FilePreferences::new(&path);
        store.save(USER_LEVEL_KEY, "beginner").unwrap();

        assert_eq!(store.load("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(store.load(USER_LEVEL_KEY).unwrap().as_deref(), Some("beginner"));
    }

    #[test]
    fn test_corrupt_file_is_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(PREFERENCES_FILE);
        fs::write(&path, "not = [valid").unwrap();

        let store = FilePreferences::new(&path);
        assert!(matches!(store.load(USER_LEVEL_KEY), Err(SeewriteError::Config(_))));
    }
}
