//! End-to-end flow: presets on disk, edits with undo, export

use glass_playground::config::{FilePreferences, MemoryPreferences, Preset, PresetStore};
use glass_playground::{CodeGenerator, GlassParameters, HistoryStack, Indent, PlaygroundState, TutorialSequencer};
use std::fs;
use std::path::PathBuf;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("glass-playground-it-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

#[test]
fn test_presets_survive_reopen_on_disk() {
    let dir = scratch_dir("reopen");

    let mut store = PresetStore::open(FilePreferences::in_dir(&dir));
    assert_eq!(store.len(), 20);

    let mut params = GlassParameters::default();
    params.blur_radius = 33.0;
    assert!(store.add(Preset::new("My Card", params)));
    assert!(store.remove("neon"));

    let reopened = PresetStore::open(FilePreferences::in_dir(&dir));
    assert_eq!(reopened.len(), 20);
    assert!(reopened.find_by_name("neon").is_none());
    assert_eq!(
        reopened.find_by_name("MY CARD").map(|p| p.parameters.blur_radius),
        Some(33.0)
    );

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_corrupt_file_on_disk_falls_back_to_builtin() {
    let dir = scratch_dir("corrupt");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("preferences.json"), "][").unwrap();

    let store = PresetStore::open(FilePreferences::in_dir(&dir));
    assert_eq!(store.len(), 20);
    assert_eq!(store.presets()[0].name, "Default");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_corrupt_file_is_repaired_by_next_save() {
    let dir = scratch_dir("repair");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("preferences.json"), "][").unwrap();

    let mut store = PresetStore::open(FilePreferences::in_dir(&dir));
    assert!(store.add(Preset::new("Mine", GlassParameters::default())));
    assert!(!store.has_unsaved_changes());

    let reopened = PresetStore::open(FilePreferences::in_dir(&dir));
    assert_eq!(reopened.len(), 21);
    assert!(reopened.find_by_name("mine").is_some());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_edit_undo_and_export() {
    let store = PresetStore::open(MemoryPreferences::new());
    let frosted = store.find_by_name("Frosted").unwrap().clone();

    let mut state = PlaygroundState::new(GlassParameters::default(), HistoryStack::with_capacity(10));
    state.apply_preset(&frosted);
    state.update(|p| p.border_width = 0.0);
    state.update(|p| p.blur_radius = 20.5);

    let generator = CodeGenerator::new(Indent::Spaces(4));
    let code = generator.export(state.get());
    assert!(code.contains(".blur(radius: 20.50)"));
    assert!(!code.contains(".stroke("));

    assert!(state.undo());
    assert!(state.undo());
    let code = generator.export(state.get());
    assert!(code.contains(".blur(radius: 30)"));
    assert!(code.contains(".stroke("));
    assert!(code.contains(".fill(.thickMaterial)"));
}

#[test]
fn test_fresh_model_export_embeds_defaults() {
    let code = CodeGenerator::default().export_view(&GlassParameters::default(), "GlassCard");
    assert!(code.contains("cornerRadius: 16,"));
    assert!(code.contains(".opacity(0.15)"));
    assert!(code.contains(".blur(radius: 20)"));
    assert!(code.starts_with("import SwiftUI\n\nstruct GlassCard: View {\n"));
}

#[test]
fn test_tutorial_feeds_state() {
    let mut tutorial = TutorialSequencer::default();
    let mut state = PlaygroundState::default();

    let mut visited = 0;
    let mut step = tutorial.start().cloned();
    while let Some(current) = step {
        state.apply_tutorial_step(&current);
        assert_eq!(state.get(), &current.configuration);
        visited += 1;
        step = tutorial.next().cloned();
    }

    assert_eq!(visited, tutorial.step_count());
    assert!(tutorial.is_last_step());
    tutorial.exit();
    assert!(tutorial.current_step().is_none());
}
