//! Guided tutorial
//!
//! A fixed sequence of steps, each pairing an explanation with a complete
//! parameter snapshot. The sequencer is either inactive or positioned on a
//! step; `next` and `previous` clamp at the ends instead of running off.

use tracing::info;

use crate::color::GlassColor;
use crate::parameters::{BlurStyle, GlassParameters};

#[derive(Debug, Clone, PartialEq)]
pub struct TutorialStep {
    /// 1-based, increasing with position
    pub id: u32,
    pub title: &'static str,
    pub explanation: &'static str,
    pub configuration: GlassParameters,
    /// Field the step is about, if any
    pub highlighted_parameter: Option<&'static str>,
}

/// The built-in tutorial, in order
pub fn tutorial_steps() -> Vec<TutorialStep> {
    let base = GlassParameters::default();

    let steps = vec![
        (
            "Welcome to Liquid Glass",
            "Glass surfaces blur and tint whatever sits behind them. This is the default configuration; each step changes one aspect of it.",
            base.clone(),
            None,
        ),
        (
            "Blur Radius",
            "Blur radius controls how much the backdrop is smeared. Small values keep background detail readable, large values turn it into soft color.",
            GlassParameters {
                blur_radius: 40.0,
                blur_style: BlurStyle::Thick,
                ..base.clone()
            },
            Some("blur_radius"),
        ),
        (
            "Tint",
            "A tint layer colors the glass. Keep its opacity low so the surface still reads as translucent.",
            GlassParameters {
                tint_color: GlassColor::rgb(0.3, 0.6, 1.0),
                tint_opacity: 0.35,
                ..base.clone()
            },
            Some("tint_opacity"),
        ),
        (
            "Corner Radius",
            "Rounded corners make glass feel like a physical object. Large radii read as pills, small ones as cards.",
            GlassParameters {
                corner_radius: 32.0,
                ..base.clone()
            },
            Some("corner_radius"),
        ),
        (
            "Border",
            "A thin, light border catches the edge of the surface and separates it from busy backgrounds.",
            GlassParameters {
                border_width: 2.0,
                border_color: GlassColor::WHITE.with_opacity(0.6),
                ..base.clone()
            },
            Some("border_width"),
        ),
        (
            "Shadow",
            "A soft shadow lifts the glass off the page. Offset it downward to suggest light from above.",
            GlassParameters {
                shadow_radius: 24.0,
                shadow_offset_y: 12.0,
                shadow_color: GlassColor::BLACK.with_opacity(0.35),
                depth: 10.0,
                ..base.clone()
            },
            Some("shadow_radius"),
        ),
        (
            "Light & Refraction",
            "Refraction bends the backdrop at the edges while a specular highlight follows the light angle. Together they make the glass feel liquid.",
            GlassParameters {
                refraction_intensity: 0.7,
                refraction_index: 1.8,
                light_intensity: 0.8,
                light_angle: 120.0,
                specular_size: 0.5,
                ..base
            },
            Some("refraction_intensity"),
        ),
    ];

    steps
        .into_iter()
        .enumerate()
        .map(|(i, (title, explanation, configuration, highlighted_parameter))| TutorialStep {
            id: i as u32 + 1,
            title,
            explanation,
            configuration,
            highlighted_parameter,
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TutorialState {
    Inactive,
    Active { index: usize },
}

#[derive(Debug, Clone)]
pub struct TutorialSequencer {
    steps: Vec<TutorialStep>,
    state: TutorialState,
}

impl Default for TutorialSequencer {
    fn default() -> Self {
        Self::new(tutorial_steps())
    }
}

impl TutorialSequencer {
    pub fn new(steps: Vec<TutorialStep>) -> Self {
        Self { steps, state: TutorialState::Inactive }
    }

    /// Activate on the first step. Restarts if already active.
    pub fn start(&mut self) -> Option<&TutorialStep> {
        if self.steps.is_empty() {
            return None;
        }
        self.state = TutorialState::Active { index: 0 };
        info!(steps = self.steps.len(), "tutorial started");
        self.steps.first()
    }

    /// Advance one step. Returns `None` without moving when inactive or
    /// already on the last step.
    pub fn next(&mut self) -> Option<&TutorialStep> {
        let TutorialState::Active { index } = self.state else {
            return None;
        };
        if index + 1 >= self.steps.len() {
            return None;
        }
        self.state = TutorialState::Active { index: index + 1 };
        self.steps.get(index + 1)
    }

    /// Step back one step. Returns `None` without moving when inactive or
    /// already on the first step.
    pub fn previous(&mut self) -> Option<&TutorialStep> {
        let TutorialState::Active { index } = self.state else {
            return None;
        };
        if index == 0 {
            return None;
        }
        self.state = TutorialState::Active { index: index - 1 };
        self.steps.get(index - 1)
    }

    pub fn exit(&mut self) {
        if self.is_active() {
            info!("tutorial exited");
        }
        self.state = TutorialState::Inactive;
    }

    pub fn state(&self) -> TutorialState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, TutorialState::Active { .. })
    }

    pub fn current_step(&self) -> Option<&TutorialStep> {
        match self.state {
            TutorialState::Active { index } => self.steps.get(index),
            TutorialState::Inactive => None,
        }
    }

    pub fn is_last_step(&self) -> bool {
        matches!(self.state, TutorialState::Active { index } if index + 1 == self.steps.len())
    }

    /// Fraction of the tutorial reached, 0 when inactive
    pub fn progress(&self) -> f64 {
        match self.state {
            TutorialState::Active { index } => (index + 1) as f64 / self.steps.len() as f64,
            TutorialState::Inactive => 0.0,
        }
    }

    pub fn steps(&self) -> &[TutorialStep] {
        &self.steps
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_steps() {
        let steps = tutorial_steps();
        assert_eq!(steps.len(), 7);
        for (i, step) in steps.iter().enumerate() {
            assert_eq!(step.id as usize, i + 1);
            assert!(step.configuration.is_valid(), "step {} has invalid configuration", step.id);
            if let Some(field) = step.highlighted_parameter {
                assert!(GlassParameters::is_field_name(field), "unknown field {}", field);
            }
        }
        assert_eq!(steps[0].configuration, GlassParameters::default());
        assert_eq!(steps[0].highlighted_parameter, None);
    }

    #[test]
    fn test_starts_inactive() {
        let mut tutorial = TutorialSequencer::default();
        assert_eq!(tutorial.state(), TutorialState::Inactive);
        assert!(tutorial.current_step().is_none());
        assert!(tutorial.next().is_none());
        assert!(tutorial.previous().is_none());
        assert_eq!(tutorial.progress(), 0.0);
    }

    #[test]
    fn test_walk_through_and_clamp_at_end() {
        let mut tutorial = TutorialSequencer::default();
        assert_eq!(tutorial.start().map(|s| s.id), Some(1));

        for expected in 2..=7 {
            assert_eq!(tutorial.next().map(|s| s.id), Some(expected));
        }
        assert!(tutorial.is_last_step());
        assert_eq!(tutorial.progress(), 1.0);

        // Past the end: stays on the last step
        assert!(tutorial.next().is_none());
        assert_eq!(tutorial.state(), TutorialState::Active { index: 6 });
        assert_eq!(tutorial.current_step().map(|s| s.id), Some(7));
    }

    #[test]
    fn test_previous_clamps_at_first_step() {
        let mut tutorial = TutorialSequencer::default();
        tutorial.start();
        tutorial.next();
        assert_eq!(tutorial.previous().map(|s| s.id), Some(1));
        assert!(tutorial.previous().is_none());
        assert_eq!(tutorial.state(), TutorialState::Active { index: 0 });
    }

    #[test]
    fn test_exit_and_restart() {
        let mut tutorial = TutorialSequencer::default();
        tutorial.start();
        tutorial.next();
        tutorial.exit();
        assert!(!tutorial.is_active());
        assert!(tutorial.current_step().is_none());

        tutorial.start();
        assert_eq!(tutorial.current_step().map(|s| s.id), Some(1));
    }

    #[test]
    fn test_empty_sequence_never_activates() {
        let mut tutorial = TutorialSequencer::new(Vec::new());
        assert!(tutorial.start().is_none());
        assert!(!tutorial.is_active());
    }
}
