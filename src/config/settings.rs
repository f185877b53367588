//! User settings for the playground
//!
//! Stored as JSON next to the preferences file. Every field has a serde
//! default so older or hand-edited files keep loading; environment
//! variables override whatever the file says.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::codegen::Indent;
use crate::config::preferences::write_atomic;
use crate::constants::{config, env, export, history};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaygroundSettings {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,
    #[serde(default)]
    pub use_tabs: bool,
    #[serde(default = "default_view_name")]
    pub view_name: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_history_capacity() -> usize {
    history::DEFAULT_CAPACITY
}

fn default_indent_width() -> usize {
    export::DEFAULT_INDENT_WIDTH
}

fn default_view_name() -> String {
    export::DEFAULT_VIEW_NAME.to_string()
}

impl Default for PlaygroundSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            history_capacity: default_history_capacity(),
            indent_width: default_indent_width(),
            use_tabs: false,
            view_name: default_view_name(),
        }
    }
}

impl PlaygroundSettings {
    pub fn path_in(dir: &Path) -> PathBuf {
        dir.join(config::SETTINGS_FILENAME)
    }

    /// Load from `dir`, apply env overrides and clamp.
    ///
    /// A missing file gives defaults; an unreadable one gives defaults and
    /// a warning.
    pub fn load(dir: &Path) -> Self {
        let path = Self::path_in(dir);
        let mut settings = match Self::read(&path) {
            Ok(Some(settings)) => {
                info!(path = %path.display(), "loaded settings");
                settings
            }
            Ok(None) => Self::default(),
            Err(e) => {
                warn!(path = %path.display(), error = ?e, "failed to load settings, using defaults");
                Self::default()
            }
        };
        settings.apply_overrides(|key| std::env::var(key).ok());
        settings.validate_and_clamp();
        settings
    }

    fn read(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {:?}", path))?;
        let settings = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse settings JSON from {:?}", path))?;
        Ok(Some(settings))
    }

    /// Write these settings to `dir` unless a settings file is already
    /// there. `force` overwrites it. Returns whether anything was written.
    pub fn init(&self, dir: &Path, force: bool) -> Result<bool> {
        let path = Self::path_in(dir);
        if path.exists() && !force {
            info!(path = %path.display(), "settings file already exists, leaving it");
            return Ok(false);
        }
        self.save(dir)?;
        Ok(true)
    }

    pub fn save(&self, dir: &Path) -> Result<()> {
        let path = Self::path_in(dir);
        let json = serde_json::to_string_pretty(self).context("Failed to serialize settings")?;
        write_atomic(&path, &json)?;
        info!(path = %path.display(), "saved settings");
        Ok(())
    }

    /// Apply overrides from a variable lookup (the process environment in
    /// production). Unparsable values are ignored with a warning.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        fn parse<T: std::str::FromStr>(var: &str, raw: String) -> Option<T> {
            match raw.trim().parse() {
                Ok(v) => Some(v),
                Err(_) => {
                    warn!(var = var, value = %raw, "ignoring unparsable environment override");
                    None
                }
            }
        }

        if let Some(v) = lookup(env::HISTORY_CAPACITY).and_then(|raw| parse(env::HISTORY_CAPACITY, raw)) {
            self.history_capacity = v;
        }
        if let Some(v) = lookup(env::INDENT_WIDTH).and_then(|raw| parse(env::INDENT_WIDTH, raw)) {
            self.indent_width = v;
        }
        if let Some(v) = lookup(env::USE_TABS).and_then(|raw| parse(env::USE_TABS, raw)) {
            self.use_tabs = v;
        }
        if let Some(v) = lookup(env::VIEW_NAME) {
            self.view_name = v;
        }
    }

    /// Clamp values to usable ranges
    pub fn validate_and_clamp(&mut self) {
        if self.history_capacity < history::MIN_CAPACITY {
            warn!(history_capacity = self.history_capacity, min = history::MIN_CAPACITY, "history_capacity below minimum, clamping");
            self.history_capacity = history::MIN_CAPACITY;
        } else if self.history_capacity > history::MAX_CAPACITY {
            warn!(history_capacity = self.history_capacity, max = history::MAX_CAPACITY, "history_capacity exceeds maximum, clamping");
            self.history_capacity = history::MAX_CAPACITY;
        }

        if self.indent_width > export::MAX_INDENT_WIDTH {
            warn!(indent_width = self.indent_width, max = export::MAX_INDENT_WIDTH, "indent_width exceeds maximum, clamping");
            self.indent_width = export::MAX_INDENT_WIDTH;
        }

        if self.view_name.trim().is_empty() {
            warn!("view_name is empty, using default");
            self.view_name = default_view_name();
        }
    }

    pub fn indent(&self) -> Indent {
        if self.use_tabs {
            Indent::Tab
        } else {
            Indent::Spaces(self.indent_width)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::preferences::tests::scratch_dir;
    use std::collections::HashMap;

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: PlaygroundSettings = serde_json::from_str(r#"{"use_tabs": true}"#).unwrap();
        assert!(settings.use_tabs);
        assert_eq!(settings.history_capacity, 50);
        assert_eq!(settings.view_name, "GlassView");
        assert_eq!(settings.indent(), Indent::Tab);
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            (env::HISTORY_CAPACITY, "12"),
            (env::INDENT_WIDTH, "wide"),
            (env::VIEW_NAME, "Card"),
        ]);
        let mut settings = PlaygroundSettings::default();
        settings.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(settings.history_capacity, 12);
        assert_eq!(settings.indent_width, 4);
        assert_eq!(settings.view_name, "Card");
    }

    #[test]
    fn test_validate_and_clamp() {
        let mut settings = PlaygroundSettings {
            history_capacity: 0,
            indent_width: 40,
            view_name: "  ".to_string(),
            ..PlaygroundSettings::default()
        };
        settings.validate_and_clamp();
        assert_eq!(settings.history_capacity, 1);
        assert_eq!(settings.indent_width, 8);
        assert_eq!(settings.view_name, "GlassView");

        settings.history_capacity = 100_000;
        settings.validate_and_clamp();
        assert_eq!(settings.history_capacity, 500);
    }

    #[test]
    fn test_save_and_load() {
        let dir = scratch_dir("settings");
        let settings = PlaygroundSettings {
            indent_width: 2,
            view_name: "Panel".to_string(),
            ..PlaygroundSettings::default()
        };
        settings.save(&dir).unwrap();

        let loaded = PlaygroundSettings::read(&PlaygroundSettings::path_in(&dir)).unwrap();
        assert_eq!(loaded, Some(settings));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_init_keeps_existing_file_unless_forced() {
        let dir = scratch_dir("settings-init");
        let first = PlaygroundSettings {
            view_name: "First".to_string(),
            ..PlaygroundSettings::default()
        };
        let second = PlaygroundSettings {
            view_name: "Second".to_string(),
            ..PlaygroundSettings::default()
        };

        assert!(first.init(&dir, false).unwrap());
        assert!(!second.init(&dir, false).unwrap());
        let path = PlaygroundSettings::path_in(&dir);
        assert_eq!(PlaygroundSettings::read(&path).unwrap(), Some(first));

        assert!(second.init(&dir, true).unwrap());
        assert_eq!(PlaygroundSettings::read(&path).unwrap(), Some(second));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_unparsable_file_reports_error() {
        let dir = scratch_dir("settings-bad");
        fs::create_dir_all(&dir).unwrap();
        fs::write(PlaygroundSettings::path_in(&dir), "not json").unwrap();
        assert!(PlaygroundSettings::read(&PlaygroundSettings::path_in(&dir)).is_err());
        let _ = fs::remove_dir_all(&dir);
    }
}
