//! glass-playground - experiment with glass surface parameters from the shell
//!
//! Usage:
//!   glass-playground export --preset neon --view       # SwiftUI view for a preset
//!   glass-playground export --set blur_radius=30       # tweak and export
//!   glass-playground presets list                      # saved presets
//!   glass-playground tutorial --code                   # walk the tutorial
//!   glass-playground settings init                     # write settings.json

#![forbid(unsafe_code)]

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{Level as TraceLevel, info, warn};
use tracing_subscriber::FmtSubscriber;

use glass_playground::codegen::{CodeGenerator, Indent};
use glass_playground::config::{
    FilePreferences, MemoryPreferences, PlaygroundSettings, PreferenceStore, Preset, PresetStore,
    default_config_dir,
};
use glass_playground::constants::env;
use glass_playground::history::HistoryStack;
use glass_playground::parameters::{GlassParameters, ranges};
use glass_playground::state::PlaygroundState;
use glass_playground::tutorial::TutorialSequencer;

#[derive(Parser)]
#[command(name = "glass-playground")]
#[command(about = "Tune glass surface parameters, manage presets and export SwiftUI code")]
#[command(version)]
struct Cli {
    /// Directory holding preferences.json and settings.json
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    /// Keep presets in memory only (nothing is read from or written to disk)
    #[arg(long, global = true)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print source code for a configuration
    Export {
        /// Start from this preset instead of the defaults
        #[arg(short, long)]
        preset: Option<String>,

        /// Field assignment, e.g. blur_radius=30 or tint_color=#FF8800 (repeatable)
        #[arg(short, long = "set", value_name = "FIELD=VALUE")]
        set: Vec<String>,

        /// Undo this many of the --set edits before exporting
        #[arg(long, default_value_t = 0)]
        undo: usize,

        /// Wrap the code in a named view (name defaults to the settings' view_name)
        #[arg(long, num_args = 0..=1, value_name = "NAME")]
        view: Option<Option<String>>,

        /// Indent with tabs
        #[arg(long, conflicts_with = "indent")]
        tabs: bool,

        /// Indent with this many spaces
        #[arg(long)]
        indent: Option<usize>,
    },

    /// Manage saved presets
    Presets {
        #[command(subcommand)]
        action: PresetAction,
    },

    /// List parameters with their ranges and current values
    Params {
        /// Show values from this preset instead of the defaults
        #[arg(short, long)]
        preset: Option<String>,
    },

    /// Walk through the guided tutorial
    Tutorial {
        /// Show only this step (1-based)
        #[arg(long)]
        step: Option<u32>,

        /// Include the exported code for each step
        #[arg(long)]
        code: bool,
    },

    /// Inspect or create the settings file
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print the effective settings (file plus environment overrides)
    Show,

    /// Write the effective settings to settings.json
    Init {
        /// Overwrite an existing settings file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand)]
enum PresetAction {
    /// List all presets
    List,

    /// Show one preset's parameters
    Show { name: String },

    /// Save a preset (creates it, or updates an existing one with that name)
    Save {
        name: String,

        /// Base the preset on an existing one
        #[arg(long)]
        from: Option<String>,

        /// Field assignment (repeatable)
        #[arg(short, long = "set", value_name = "FIELD=VALUE")]
        set: Vec<String>,
    },

    /// Delete a preset
    Remove { name: String },

    /// Restore the built-in presets
    Reset,
}

fn init_logging(settings: &PlaygroundSettings) -> Result<()> {
    let configured = std::env::var(env::LOG_LEVEL).unwrap_or_else(|_| settings.log_level.clone());
    let log_level = match configured.to_lowercase().as_str() {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn parse_assignment(raw: &str) -> Result<(&str, &str)> {
    raw.split_once('=')
        .map(|(k, v)| (k.trim(), v.trim()))
        .with_context(|| format!("Expected FIELD=VALUE, got '{}'", raw))
}

fn lookup_preset<'a, S: PreferenceStore>(store: &'a PresetStore<S>, name: &str) -> Result<&'a Preset> {
    match store.find_by_name(name).or_else(|| store.find_by_id(name)) {
        Some(preset) => Ok(preset),
        None => bail!("No preset named '{}' (see `glass-playground presets list`)", name),
    }
}

fn starting_parameters<S: PreferenceStore>(store: &PresetStore<S>, preset: Option<&str>) -> Result<GlassParameters> {
    match preset {
        Some(name) => Ok(lookup_preset(store, name)?.parameters.clone()),
        None => Ok(GlassParameters::default()),
    }
}

/// `config_dir` is `None` when running with `--ephemeral`
fn run<S: PreferenceStore>(
    command: Commands,
    mut store: PresetStore<S>,
    settings: &PlaygroundSettings,
    config_dir: Option<&Path>,
) -> Result<()> {
    match command {
        Commands::Export { preset, set, undo, view, tabs, indent } => {
            let initial = starting_parameters(&store, preset.as_deref())?;
            let mut state = PlaygroundState::new(initial, HistoryStack::with_capacity(settings.history_capacity));

            for raw in &set {
                let (field, value) = parse_assignment(raw)?;
                let mut next = state.get().clone();
                next.assign(field, value)?;
                if !state.set(next) {
                    info!(field = field, "assignment left parameters unchanged");
                }
            }
            for _ in 0..undo {
                if !state.undo() {
                    warn!("nothing left to undo");
                    break;
                }
            }

            let indent = match (tabs, indent) {
                (true, _) => Indent::Tab,
                (false, Some(width)) => Indent::Spaces(width),
                (false, None) => settings.indent(),
            };
            let generator = CodeGenerator::new(indent);
            let code = match view {
                Some(name) => generator.export_view(state.get(), name.as_deref().unwrap_or(&settings.view_name)),
                None => generator.export(state.get()),
            };
            print!("{}", code);
        }

        Commands::Presets { action } => run_preset_action(action, &mut store)?,

        Commands::Settings { action } => match config_dir {
            Some(dir) => run_settings_action(&action, settings, dir)?,
            None => bail!("Settings live on disk; drop --ephemeral to use this command"),
        },

        Commands::Params { preset } => {
            let params = starting_parameters(&store, preset.as_deref())?;
            println!("{:<22} {:>8} {:>8} {:>8}", "field", "value", "min", "max");
            for range in ranges::ALL {
                let value = params.get(range.name).unwrap_or(range.default);
                println!("{:<22} {:>8} {:>8} {:>8}", range.name, value, range.min, range.max);
            }
            for (name, color) in params.colors() {
                println!("{:<22} {:>8}", name, color.to_hex());
            }
            println!("{:<22} {:>8}", "blur_style", params.blur_style);
            println!("{:<22} {:>8}", "variant", params.variant);
            println!("{:<22} {:>8}", "animation_curve", params.animation_curve);
            println!("{:<22} {:>8}", "gradient_enabled", params.gradient_enabled);
            println!("{:<22} {:>8}", "animation_enabled", params.animation_enabled);
            println!("{:<22} {:>8}", "interactive", params.interactive);
        }

        Commands::Tutorial { step, code } => {
            let mut tutorial = TutorialSequencer::default();
            let mut state = PlaygroundState::default();
            let generator = CodeGenerator::new(settings.indent());

            if tutorial.start().is_none() {
                bail!("Tutorial has no steps");
            }
            if let Some(wanted) = step {
                if wanted == 0 || wanted as usize > tutorial.step_count() {
                    bail!("Step must be between 1 and {}", tutorial.step_count());
                }
                for _ in 1..wanted {
                    tutorial.next();
                }
            }

            loop {
                let Some(current) = tutorial.current_step().cloned() else {
                    break;
                };
                state.apply_tutorial_step(&current);

                println!("Step {}/{}: {}", current.id, tutorial.step_count(), current.title);
                println!("  {}", current.explanation);
                if let Some(field) = current.highlighted_parameter {
                    println!("  Focus: {}", field);
                }
                if code {
                    println!();
                    print!("{}", generator.export(state.get()));
                }
                println!();

                if step.is_some() || tutorial.next().is_none() {
                    break;
                }
            }
            tutorial.exit();
        }
    }
    Ok(())
}

fn run_preset_action<S: PreferenceStore>(action: PresetAction, store: &mut PresetStore<S>) -> Result<()> {
    match action {
        PresetAction::List => {
            for preset in store.presets() {
                println!("{:<16} {}", preset.name, preset.description());
            }
        }

        PresetAction::Show { name } => {
            let preset = lookup_preset(store, &name)?;
            let json = serde_json::to_string_pretty(preset).context("Failed to format preset")?;
            println!("{}", json);
        }

        PresetAction::Save { name, from, set } => {
            let mut params = starting_parameters(store, from.as_deref())?;
            for raw in &set {
                let (field, value) = parse_assignment(raw)?;
                params.assign(field, value)?;
            }

            let saved = match store.find_by_name(&name).cloned() {
                Some(mut existing) => {
                    existing.parameters = params;
                    store.update(existing)
                }
                None => store.add(Preset::new(name.as_str(), params)),
            };
            if !saved {
                bail!("Could not save preset '{}'", name);
            }
            if store.has_unsaved_changes() {
                bail!("Preset '{}' could not be written to disk", name);
            }
            println!("Saved preset '{}'", name);
        }

        PresetAction::Remove { name } => {
            let id = lookup_preset(store, &name)?.id.clone();
            if !store.remove(&id) {
                bail!("No preset named '{}'", name);
            }
            if store.has_unsaved_changes() {
                bail!("Removal of preset '{}' could not be written to disk", name);
            }
            println!("Removed preset '{}'", name);
        }

        PresetAction::Reset => {
            if !store.reset_to_builtin() {
                bail!("Failed to write built-in presets");
            }
            println!("Restored {} built-in presets", store.len());
        }
    }
    Ok(())
}

fn run_settings_action(action: &SettingsAction, settings: &PlaygroundSettings, config_dir: &Path) -> Result<()> {
    match action {
        SettingsAction::Show => {
            let json = serde_json::to_string_pretty(settings).context("Failed to format settings")?;
            println!("{}", json);
        }

        SettingsAction::Init { force } => {
            let path = PlaygroundSettings::path_in(config_dir);
            if settings.init(config_dir, *force)? {
                println!("Wrote {}", path.display());
            } else {
                println!("{} already exists (use --force to overwrite)", path.display());
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_dir = cli.config_dir.clone().unwrap_or_else(default_config_dir);
    let settings = PlaygroundSettings::load(&config_dir);
    init_logging(&settings)?;
    info!(config_dir = %config_dir.display(), "starting glass-playground");

    if cli.ephemeral {
        run(cli.command, PresetStore::open(MemoryPreferences::new()), &settings, None)
    } else {
        run(
            cli.command,
            PresetStore::open(FilePreferences::in_dir(&config_dir)),
            &settings,
            Some(config_dir.as_path()),
        )
    }
}
