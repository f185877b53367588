//! Glass playground core
//!
//! Parameter model, preset persistence, undo history, code export and the
//! guided tutorial behind the glass playground. Rendering is left to the
//! host UI; this crate only produces and stores values and text.

#![forbid(unsafe_code)]

pub mod codegen;
pub mod color;
pub mod config;
pub mod constants;
pub mod history;
pub mod parameters;
pub mod state;
pub mod tutorial;

pub use codegen::{CodeGenerator, Indent};
pub use color::GlassColor;
pub use config::{PlaygroundSettings, Preset, PresetStore};
pub use history::HistoryStack;
pub use parameters::GlassParameters;
pub use state::{ChangeOrigin, PlaygroundState, StateEvent};
pub use tutorial::{TutorialSequencer, TutorialStep};
