//! Application-wide constants
//!
//! This module contains all magic numbers and string literals used throughout
//! the application, providing a single source of truth for constant values.

/// Config directory and file names
pub mod config {
    /// Directory under the platform config dir (e.g. ~/.config/glass-playground)
    pub const APP_DIR: &str = "glass-playground";

    /// Key-value preference file (holds the preset list among other keys)
    pub const PREFERENCES_FILENAME: &str = "preferences.json";

    /// User settings file
    pub const SETTINGS_FILENAME: &str = "settings.json";

    /// Suffix of the temporary file written before an atomic rename
    pub const TEMP_SUFFIX: &str = ".tmp";
}

/// Preference store keys (namespaced to avoid collisions)
pub mod keys {
    /// Serialized preset list
    pub const PRESETS: &str = "glass_playground.presets";
}

/// Undo/redo history limits
pub mod history {
    /// Default number of snapshots retained
    pub const DEFAULT_CAPACITY: usize = 50;

    /// Lower bound for a configured capacity
    pub const MIN_CAPACITY: usize = 1;

    /// Upper bound for a configured capacity
    pub const MAX_CAPACITY: usize = 500;
}

/// Code export formatting
pub mod export {
    /// Default indentation width in spaces
    pub const DEFAULT_INDENT_WIDTH: usize = 4;

    /// Largest accepted indentation width
    pub const MAX_INDENT_WIDTH: usize = 8;

    /// View name used when none (or an unusable one) is given
    pub const DEFAULT_VIEW_NAME: &str = "GlassView";
}

/// Environment variable names
pub mod env {
    /// Overrides the log level (trace, debug, info, warn, error)
    pub const LOG_LEVEL: &str = "LOG_LEVEL";

    pub const HISTORY_CAPACITY: &str = "GLASS_HISTORY_CAPACITY";
    pub const INDENT_WIDTH: &str = "GLASS_INDENT_WIDTH";
    pub const USE_TABS: &str = "GLASS_USE_TABS";
    pub const VIEW_NAME: &str = "GLASS_VIEW_NAME";
}
