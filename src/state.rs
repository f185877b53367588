//! Observable playground state
//!
//! Holds the current parameters and the undo history. Consumers read with
//! `get`, write with `set`/`update`, and receive a `StateEvent` over a
//! channel for every accepted change.

use std::sync::mpsc::{self, Receiver, Sender};
use tracing::{debug, info};

use crate::config::Preset;
use crate::history::HistoryStack;
use crate::parameters::GlassParameters;
use crate::tutorial::TutorialStep;

/// What caused a change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeOrigin {
    Edit,
    Undo,
    Redo,
    Preset(String),
    Tutorial(u32),
    Reset,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StateEvent {
    pub parameters: GlassParameters,
    pub origin: ChangeOrigin,
}

#[derive(Debug)]
pub struct PlaygroundState {
    current: GlassParameters,
    history: HistoryStack,
    subscribers: Vec<Sender<StateEvent>>,
}

impl Default for PlaygroundState {
    fn default() -> Self {
        Self::new(GlassParameters::default(), HistoryStack::default())
    }
}

impl PlaygroundState {
    /// Start from `initial`, recorded as the first history entry
    pub fn new(initial: GlassParameters, mut history: HistoryStack) -> Self {
        let initial = initial.validated();
        history.clear();
        history.push(initial.clone());
        Self {
            current: initial,
            history,
            subscribers: Vec::new(),
        }
    }

    pub fn get(&self) -> &GlassParameters {
        &self.current
    }

    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    /// Register for change notifications
    pub fn subscribe(&mut self) -> Receiver<StateEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    /// Replace the parameters. Returns false if the (validated) value is
    /// identical to the current one.
    pub fn set(&mut self, parameters: GlassParameters) -> bool {
        self.replace(parameters, ChangeOrigin::Edit)
    }

    /// Edit a copy of the current parameters and apply it
    pub fn update<F>(&mut self, edit: F) -> bool
    where
        F: FnOnce(&mut GlassParameters),
    {
        let mut next = self.current.clone();
        edit(&mut next);
        self.replace(next, ChangeOrigin::Edit)
    }

    pub fn apply_preset(&mut self, preset: &Preset) -> bool {
        info!(preset = %preset.name, "applying preset");
        self.replace(preset.parameters.clone(), ChangeOrigin::Preset(preset.id.clone()))
    }

    pub fn apply_tutorial_step(&mut self, step: &TutorialStep) -> bool {
        debug!(step = step.id, title = step.title, "applying tutorial step");
        self.replace(step.configuration.clone(), ChangeOrigin::Tutorial(step.id))
    }

    /// Back to the default parameters (recorded in history, so undoable)
    pub fn reset(&mut self) -> bool {
        self.replace(GlassParameters::default(), ChangeOrigin::Reset)
    }

    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(previous) => {
                self.current = previous;
                self.notify(ChangeOrigin::Undo);
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(next) => {
                self.current = next;
                self.notify(ChangeOrigin::Redo);
                true
            }
            None => false,
        }
    }

    fn replace(&mut self, parameters: GlassParameters, origin: ChangeOrigin) -> bool {
        let parameters = parameters.validated();
        if parameters == self.current {
            return false;
        }
        self.history.push(parameters.clone());
        self.current = parameters;
        self.notify(origin);
        true
    }

    fn notify(&mut self, origin: ChangeOrigin) {
        let event = StateEvent {
            parameters: self.current.clone(),
            origin,
        };
        let before = self.subscribers.len();
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
        let dropped = before - self.subscribers.len();
        if dropped > 0 {
            debug!(dropped, "pruned disconnected subscribers");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::builtin_presets;
    use crate::tutorial::tutorial_steps;

    #[test]
    fn test_starts_with_one_history_entry() {
        let state = PlaygroundState::default();
        assert_eq!(state.get(), &GlassParameters::default());
        assert_eq!(state.history().len(), 1);
        assert!(!state.history().can_undo());
    }

    #[test]
    fn test_update_notifies_and_records_history() {
        let mut state = PlaygroundState::default();
        let rx = state.subscribe();

        assert!(state.update(|p| p.blur_radius = 30.0));
        let event = rx.try_recv().unwrap();
        assert_eq!(event.origin, ChangeOrigin::Edit);
        assert_eq!(event.parameters.blur_radius, 30.0);
        assert_eq!(state.history().len(), 2);
    }

    #[test]
    fn test_identical_value_is_ignored() {
        let mut state = PlaygroundState::default();
        let rx = state.subscribe();
        assert!(!state.set(GlassParameters::default()));
        assert!(rx.try_recv().is_err());
        assert_eq!(state.history().len(), 1);
    }

    #[test]
    fn test_set_validates() {
        let mut state = PlaygroundState::default();
        state.update(|p| p.corner_radius = 500.0);
        assert_eq!(state.get().corner_radius, 60.0);
    }

    #[test]
    fn test_undo_redo_through_state() {
        let mut state = PlaygroundState::default();
        let rx = state.subscribe();
        state.update(|p| p.blur_radius = 10.0);
        state.update(|p| p.blur_radius = 5.0);

        assert!(state.undo());
        assert_eq!(state.get().blur_radius, 10.0);
        assert!(state.undo());
        assert_eq!(state.get().blur_radius, 20.0);
        assert!(!state.undo());

        assert!(state.redo());
        assert_eq!(state.get().blur_radius, 10.0);

        let origins: Vec<ChangeOrigin> = rx.try_iter().map(|e| e.origin).collect();
        assert_eq!(
            origins,
            vec![ChangeOrigin::Edit, ChangeOrigin::Edit, ChangeOrigin::Undo, ChangeOrigin::Undo, ChangeOrigin::Redo]
        );
    }

    #[test]
    fn test_preset_tutorial_and_reset_origins() {
        let mut state = PlaygroundState::default();
        let rx = state.subscribe();

        let neon = builtin_presets().into_iter().find(|p| p.id == "neon").unwrap();
        assert!(state.apply_preset(&neon));
        let steps = tutorial_steps();
        assert!(state.apply_tutorial_step(&steps[1]));
        assert!(state.reset());

        let origins: Vec<ChangeOrigin> = rx.try_iter().map(|e| e.origin).collect();
        assert_eq!(
            origins,
            vec![ChangeOrigin::Preset("neon".to_string()), ChangeOrigin::Tutorial(2), ChangeOrigin::Reset]
        );
        assert!(state.undo());
        assert_eq!(state.get(), &steps[1].configuration);
    }

    #[test]
    fn test_dropped_subscriber_is_pruned() {
        let mut state = PlaygroundState::default();
        let kept = state.subscribe();
        drop(state.subscribe());

        state.update(|p| p.depth = 4.0);
        state.update(|p| p.depth = 8.0);
        assert_eq!(kept.try_iter().count(), 2);
        assert_eq!(state.subscribers.len(), 1);
    }
}
