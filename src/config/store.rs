//! Preset store
//!
//! Holds the ordered preset list in memory and persists the whole list as
//! JSON under a single preference key. Every mutation rewrites the full
//! list. Storage failures are never returned as errors: a bad read falls
//! back to the built-in presets, a bad write leaves the stored list as it
//! was and is reported by `has_unsaved_changes`.
//!
//! Not synchronized; confine a store to one thread.

use anyhow::{Context, Result};
use tracing::{error, info, warn};

use crate::config::preferences::PreferenceStore;
use crate::config::preset::{Preset, builtin_presets};
use crate::constants::keys;

pub struct PresetStore<S: PreferenceStore> {
    storage: S,
    presets: Vec<Preset>,
    /// Set when the last save failed, cleared by a successful save or load
    unsaved: bool,
}

impl<S: PreferenceStore> PresetStore<S> {
    /// Create a store over `storage`. The list starts empty until `load`.
    pub fn new(storage: S) -> Self {
        Self { storage, presets: Vec::new(), unsaved: false }
    }

    /// Create a store and load it immediately
    pub fn open(storage: S) -> Self {
        let mut store = Self::new(storage);
        store.load();
        store
    }

    /// Read the persisted list, replacing the in-memory one.
    ///
    /// Missing or undecodable data yields the built-in presets.
    pub fn load(&mut self) -> Vec<Preset> {
        self.presets = match self.read_persisted() {
            Ok(Some(presets)) => {
                info!(count = presets.len(), "loaded presets");
                presets
            }
            Ok(None) => {
                info!("no saved presets, using built-in set");
                builtin_presets()
            }
            Err(e) => {
                warn!(error = ?e, "failed to decode saved presets, using built-in set");
                builtin_presets()
            }
        };
        self.unsaved = false;
        self.presets.clone()
    }

    fn read_persisted(&self) -> Result<Option<Vec<Preset>>> {
        let Some(json) = self.storage.get(keys::PRESETS)? else {
            return Ok(None);
        };
        let mut presets: Vec<Preset> =
            serde_json::from_str(&json).context("Failed to parse preset list JSON")?;
        for preset in &mut presets {
            preset.parameters.validate();
        }
        Ok(Some(presets))
    }

    /// Persist the full in-memory list. Returns false (after logging) if
    /// encoding or writing failed; stored data is then unchanged.
    pub fn save(&mut self) -> bool {
        self.unsaved = match self.write_persisted() {
            Ok(()) => false,
            Err(e) => {
                error!(error = ?e, "failed to save presets, keeping previous stored state");
                true
            }
        };
        !self.unsaved
    }

    /// True if the in-memory list has changes the last save could not
    /// write. `add`, `remove` and `update` report the mutation only, so
    /// callers that need durability check this afterwards.
    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved
    }

    fn write_persisted(&mut self) -> Result<()> {
        let json = serde_json::to_string(&self.presets).context("Failed to serialize presets")?;
        self.storage
            .set(keys::PRESETS, json)
            .context("Failed to write presets")?;
        info!(count = self.presets.len(), "saved presets");
        Ok(())
    }

    /// Append a preset and save. Rejected if the name is empty or its id
    /// is already taken.
    pub fn add(&mut self, mut preset: Preset) -> bool {
        if preset.id.is_empty() {
            warn!(name = %preset.name, "preset name has no usable characters, not adding");
            return false;
        }
        if self.presets.iter().any(|p| p.id == preset.id) {
            warn!(id = %preset.id, "preset already exists, not adding");
            return false;
        }
        preset.parameters.validate();
        info!(id = %preset.id, name = %preset.name, "adding preset");
        self.presets.push(preset);
        self.save();
        true
    }

    /// Remove by id and save. False if no such preset.
    pub fn remove(&mut self, id: &str) -> bool {
        let Some(index) = self.presets.iter().position(|p| p.id == id) else {
            warn!(id = id, "preset not found, nothing removed");
            return false;
        };
        let removed = self.presets.remove(index);
        info!(id = %removed.id, name = %removed.name, "removed preset");
        self.save();
        true
    }

    /// Replace the preset with the same id, keeping its position, and save.
    /// False if no such preset.
    pub fn update(&mut self, mut preset: Preset) -> bool {
        let Some(slot) = self.presets.iter_mut().find(|p| p.id == preset.id) else {
            warn!(id = %preset.id, "preset not found, nothing updated");
            return false;
        };
        preset.parameters.validate();
        info!(id = %preset.id, "updated preset");
        *slot = preset;
        self.save();
        true
    }

    /// First preset whose name matches, ignoring case
    pub fn find_by_name(&self, name: &str) -> Option<&Preset> {
        let wanted = name.to_lowercase();
        self.presets.iter().find(|p| p.name.to_lowercase() == wanted)
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.id == id)
    }

    /// Replace everything with the built-in set and save
    pub fn reset_to_builtin(&mut self) -> bool {
        info!("resetting presets to built-in set");
        self.presets = builtin_presets();
        self.save()
    }

    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
