//! Configuration and persistence for the glass playground
//!
//! - **preferences**: key-value storage backends (JSON file, in-memory)
//! - **preset**: named parameter snapshots and the built-in set
//! - **store**: the preset list persisted through a preference store
//! - **settings**: user settings (indentation, history size, log level)

pub mod preferences;
pub mod preset;
pub mod settings;
pub mod store;

// Re-export commonly used types
pub use preferences::{FilePreferences, MemoryPreferences, PreferenceStore, default_config_dir};
pub use preset::{Preset, builtin_presets};
pub use settings::PlaygroundSettings;
pub use store::PresetStore;
