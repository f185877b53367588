//! Key-value preference storage
//!
//! The preset store persists through this trait so it can run against a
//! JSON file on disk or an in-memory map in tests.

use anyhow::{Context, Result};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::constants::config::{APP_DIR, PREFERENCES_FILENAME, TEMP_SUFFIX};

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: String) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Default config directory (e.g. ~/.config/glass-playground)
pub fn default_config_dir() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(APP_DIR);
    path
}

/// Write `contents` to a sibling temp file then rename it over `path`.
/// A failure at any point leaves the existing file as it was.
pub(crate) fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {:?}", parent))?;
    }

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(TEMP_SUFFIX);
    let tmp = PathBuf::from(tmp);

    fs::write(&tmp, contents).with_context(|| format!("Failed to write {:?}", tmp))?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e).with_context(|| format!("Failed to replace {:?}", path));
    }
    Ok(())
}

/// All keys in a single JSON object file
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Preferences file inside `dir`
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(PREFERENCES_FILENAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_contents(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read preferences from {:?}", self.path))?;
        Ok(Some(contents))
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        let Some(contents) = self.read_contents()? else {
            return Ok(BTreeMap::new());
        };
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse preferences JSON from {:?}", self.path))
    }

    /// Current map for a read-modify-write. An undecodable file is replaced
    /// by an empty map so the next write repairs it.
    fn read_for_write(&self) -> Result<BTreeMap<String, String>> {
        let Some(contents) = self.read_contents()? else {
            return Ok(BTreeMap::new());
        };
        match serde_json::from_str(&contents) {
            Ok(values) => Ok(values),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "preferences file is corrupt, overwriting it");
                Ok(BTreeMap::new())
            }
        }
    }

    fn write_all(&self, values: &BTreeMap<String, String>) -> Result<()> {
        let json = serde_json::to_string_pretty(values).context("Failed to serialize preferences")?;
        write_atomic(&self.path, &json)?;
        debug!(path = %self.path.display(), keys = values.len(), "wrote preferences");
        Ok(())
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        let mut values = self.read_for_write()?;
        values.insert(key.to_string(), value);
        self.write_all(&values)?;
        info!(key = key, path = %self.path.display(), "saved preference");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let mut values = self.read_for_write()?;
        if values.remove(key).is_some() {
            self.write_all(&values)?;
        }
        Ok(())
    }
}

/// In-memory store (tests, `--ephemeral`)
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: HashMap<String, String>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Fresh, empty directory under the system temp dir
    pub(crate) fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("glass-playground-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_memory_roundtrip() {
        let mut prefs = MemoryPreferences::new();
        assert_eq!(prefs.get("a").unwrap(), None);
        prefs.set("a", "1".to_string()).unwrap();
        assert_eq!(prefs.get("a").unwrap().as_deref(), Some("1"));
        prefs.remove("a").unwrap();
        assert_eq!(prefs.get("a").unwrap(), None);
    }

    #[test]
    fn test_file_preferences_keep_other_keys() {
        let dir = scratch_dir("prefs-keys");
        let mut prefs = FilePreferences::in_dir(&dir);

        assert_eq!(prefs.get("missing").unwrap(), None);
        prefs.set("one", "1".to_string()).unwrap();
        prefs.set("two", "2".to_string()).unwrap();

        let reopened = FilePreferences::in_dir(&dir);
        assert_eq!(reopened.get("one").unwrap().as_deref(), Some("1"));
        assert_eq!(reopened.get("two").unwrap().as_deref(), Some("2"));

        prefs.remove("one").unwrap();
        assert_eq!(reopened.get("one").unwrap(), None);
        assert!(!dir.join(format!("{}{}", PREFERENCES_FILENAME, TEMP_SUFFIX)).exists());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_file_preferences_report_corrupt_file() {
        let dir = scratch_dir("prefs-corrupt");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(PREFERENCES_FILENAME), "{not json").unwrap();

        let prefs = FilePreferences::in_dir(&dir);
        assert!(prefs.get("anything").is_err());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_write_repairs_corrupt_file() {
        let dir = scratch_dir("prefs-repair");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(PREFERENCES_FILENAME), "][").unwrap();

        let mut prefs = FilePreferences::in_dir(&dir);
        prefs.set("presets", "[]".to_string()).unwrap();

        let reopened = FilePreferences::in_dir(&dir);
        assert_eq!(reopened.get("presets").unwrap().as_deref(), Some("[]"));

        let _ = fs::remove_dir_all(&dir);
    }
}
