//! Glass parameter model
//!
//! `GlassParameters` is a flat value type: every mutation produces a model
//! that is either already in range or is brought back into range by
//! [`GlassParameters::validate`]. Anything read from untrusted storage must
//! be validated before use.

pub mod ranges;
pub mod style;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use tracing::{debug, warn};

use crate::color::{GlassColor, hash_f64, same_f64};
pub use ranges::FloatRange;
pub use style::{AnimationCurve, BlurStyle, GlassVariant};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlassParameters {
    // Surface
    pub blur_radius: f64,
    pub blur_style: BlurStyle,
    pub variant: GlassVariant,
    pub tint_color: GlassColor,
    pub tint_opacity: f64,
    pub corner_radius: f64,

    // Color adjustment
    pub saturation: f64,
    pub brightness: f64,
    pub contrast: f64,

    // Light
    pub light_intensity: f64,
    pub light_angle: f64,
    pub specular_color: GlassColor,
    pub specular_size: f64,
    pub specular_softness: f64,

    // Refraction
    pub refraction_intensity: f64,
    pub refraction_index: f64,

    // Shadow
    pub shadow_color: GlassColor,
    pub shadow_radius: f64,
    pub shadow_offset_x: f64,
    pub shadow_offset_y: f64,

    // Border
    pub border_color: GlassColor,
    pub border_width: f64,

    // Gradient overlay
    pub gradient_enabled: bool,
    pub gradient_secondary_color: GlassColor,
    pub gradient_angle: f64,

    // Motion & depth
    pub animation_enabled: bool,
    pub animation_curve: AnimationCurve,
    pub animation_duration: f64,
    pub interactive: bool,
    pub depth: f64,
    pub parallax_intensity: f64,
}

/// Generates the name → field tables for the numeric fields so the list
/// lives in one place
macro_rules! numeric_fields {
    ($($field:ident => $range:ident),* $(,)?) => {
        impl GlassParameters {
            /// Every numeric field with its range descriptor
            pub fn numeric_values(&self) -> Vec<(&'static FloatRange, f64)> {
                vec![$((&ranges::$range, self.$field)),*]
            }

            fn numeric_slots(&mut self) -> Vec<(&'static FloatRange, &mut f64)> {
                vec![$((&ranges::$range, &mut self.$field)),*]
            }
        }
    };
}

numeric_fields! {
    blur_radius => BLUR_RADIUS,
    tint_opacity => TINT_OPACITY,
    corner_radius => CORNER_RADIUS,
    saturation => SATURATION,
    brightness => BRIGHTNESS,
    contrast => CONTRAST,
    light_intensity => LIGHT_INTENSITY,
    light_angle => LIGHT_ANGLE,
    specular_size => SPECULAR_SIZE,
    specular_softness => SPECULAR_SOFTNESS,
    refraction_intensity => REFRACTION_INTENSITY,
    refraction_index => REFRACTION_INDEX,
    shadow_radius => SHADOW_RADIUS,
    shadow_offset_x => SHADOW_OFFSET_X,
    shadow_offset_y => SHADOW_OFFSET_Y,
    border_width => BORDER_WIDTH,
    animation_duration => ANIMATION_DURATION,
    depth => DEPTH,
    parallax_intensity => PARALLAX_INTENSITY,
    gradient_angle => GRADIENT_ANGLE,
}

/// Names of the color fields
pub const COLOR_FIELDS: [&str; 5] = [
    "tint_color",
    "specular_color",
    "shadow_color",
    "border_color",
    "gradient_secondary_color",
];

/// Names of the enum and boolean fields
pub const OTHER_FIELDS: [&str; 6] = [
    "blur_style",
    "variant",
    "animation_curve",
    "gradient_enabled",
    "animation_enabled",
    "interactive",
];

impl Default for GlassParameters {
    fn default() -> Self {
        Self {
            blur_radius: ranges::BLUR_RADIUS.default,
            blur_style: BlurStyle::default(),
            variant: GlassVariant::default(),
            tint_color: GlassColor::WHITE,
            tint_opacity: ranges::TINT_OPACITY.default,
            corner_radius: ranges::CORNER_RADIUS.default,
            saturation: ranges::SATURATION.default,
            brightness: ranges::BRIGHTNESS.default,
            contrast: ranges::CONTRAST.default,
            light_intensity: ranges::LIGHT_INTENSITY.default,
            light_angle: ranges::LIGHT_ANGLE.default,
            specular_color: GlassColor::WHITE,
            specular_size: ranges::SPECULAR_SIZE.default,
            specular_softness: ranges::SPECULAR_SOFTNESS.default,
            refraction_intensity: ranges::REFRACTION_INTENSITY.default,
            refraction_index: ranges::REFRACTION_INDEX.default,
            shadow_color: GlassColor::BLACK.with_opacity(0.2),
            shadow_radius: ranges::SHADOW_RADIUS.default,
            shadow_offset_x: ranges::SHADOW_OFFSET_X.default,
            shadow_offset_y: ranges::SHADOW_OFFSET_Y.default,
            border_color: GlassColor::WHITE.with_opacity(0.3),
            border_width: ranges::BORDER_WIDTH.default,
            gradient_enabled: false,
            gradient_secondary_color: GlassColor::rgba(0.4, 0.6, 1.0, 0.2),
            gradient_angle: ranges::GRADIENT_ANGLE.default,
            animation_enabled: true,
            animation_curve: AnimationCurve::default(),
            animation_duration: ranges::ANIMATION_DURATION.default,
            interactive: false,
            depth: ranges::DEPTH.default,
            parallax_intensity: ranges::PARALLAX_INTENSITY.default,
        }
    }
}

impl GlassParameters {
    /// Clamp every ranged field and color component into range.
    /// Idempotent; never fails.
    pub fn validate(&mut self) {
        let mut corrected = 0usize;

        for (range, slot) in self.numeric_slots() {
            let clamped = range.clamp(*slot);
            if clamped.to_bits() != slot.to_bits() {
                warn!(field = range.name, value = *slot, min = range.min, max = range.max, "value out of range, clamping");
                *slot = clamped;
                corrected += 1;
            }
        }

        for (name, color) in self.color_slots() {
            if color.clamp_components(name) {
                corrected += 1;
            }
        }

        if corrected > 0 {
            debug!(corrected, "validated glass parameters");
        }
    }

    /// By-value form of [`validate`](Self::validate)
    pub fn validated(mut self) -> Self {
        self.validate();
        self
    }

    /// True if every field is already within range
    pub fn is_valid(&self) -> bool {
        self.numeric_values().iter().all(|(range, v)| range.contains(*v))
            && self
                .colors()
                .iter()
                .all(|(_, c)| c.components().iter().all(|v| (0.0..=1.0).contains(v)))
    }

    /// Read a numeric field by name
    pub fn get(&self, name: &str) -> Option<f64> {
        self.numeric_values()
            .into_iter()
            .find(|(range, _)| range.name == name)
            .map(|(_, v)| v)
    }

    /// Write a numeric field by name, clamped into its range.
    /// Returns the value actually stored.
    pub fn set(&mut self, name: &str, value: f64) -> Result<f64> {
        let Some((range, slot)) = self
            .numeric_slots()
            .into_iter()
            .find(|(range, _)| range.name == name)
        else {
            bail!("Unknown numeric parameter '{}'", name);
        };

        let clamped = range.clamp(value);
        if clamped.to_bits() != value.to_bits() {
            warn!(field = name, value, stored = clamped, "value out of range, clamping");
        }
        *slot = clamped;
        Ok(clamped)
    }

    pub fn colors(&self) -> [(&'static str, GlassColor); 5] {
        [
            (COLOR_FIELDS[0], self.tint_color),
            (COLOR_FIELDS[1], self.specular_color),
            (COLOR_FIELDS[2], self.shadow_color),
            (COLOR_FIELDS[3], self.border_color),
            (COLOR_FIELDS[4], self.gradient_secondary_color),
        ]
    }

    fn color_slots(&mut self) -> [(&'static str, &mut GlassColor); 5] {
        [
            (COLOR_FIELDS[0], &mut self.tint_color),
            (COLOR_FIELDS[1], &mut self.specular_color),
            (COLOR_FIELDS[2], &mut self.shadow_color),
            (COLOR_FIELDS[3], &mut self.border_color),
            (COLOR_FIELDS[4], &mut self.gradient_secondary_color),
        ]
    }

    /// Apply a textual `name = value` assignment to any field.
    ///
    /// Numbers are clamped, colors take `#RRGGBB[AA]`, enums take their
    /// snake_case tag and booleans take `true`/`false`.
    pub fn assign(&mut self, name: &str, value: &str) -> Result<()> {
        let name = name.trim();
        let value = value.trim();

        if ranges::find(name).is_some() {
            let number: f64 = value
                .parse()
                .with_context(|| format!("Invalid number '{}' for {}", value, name))?;
            self.set(name, number)?;
            return Ok(());
        }

        if let Some((_, slot)) = self.color_slots().into_iter().find(|(n, _)| *n == name) {
            *slot = GlassColor::parse(value)
                .with_context(|| format!("Invalid color '{}' for {} (expected #RRGGBB or #RRGGBBAA)", value, name))?;
            return Ok(());
        }

        let parse_bool = |v: &str| -> Result<bool> {
            v.parse::<bool>()
                .with_context(|| format!("Invalid boolean '{}' for {}", v, name))
        };

        match name {
            "blur_style" => self.blur_style = value.parse()?,
            "variant" => self.variant = value.parse()?,
            "animation_curve" => self.animation_curve = value.parse()?,
            "gradient_enabled" => self.gradient_enabled = parse_bool(value)?,
            "animation_enabled" => self.animation_enabled = parse_bool(value)?,
            "interactive" => self.interactive = parse_bool(value)?,
            _ => bail!("Unknown parameter '{}'", name),
        }
        Ok(())
    }

    /// True if `name` names any field of the model
    pub fn is_field_name(name: &str) -> bool {
        ranges::find(name).is_some() || COLOR_FIELDS.contains(&name) || OTHER_FIELDS.contains(&name)
    }

    /// One-line human readable summary
    pub fn summary(&self) -> String {
        format!(
            "{} blur {}, {}% tint, radius {}",
            self.blur_style.label(),
            crate::codegen::format_number(self.blur_radius),
            (self.tint_opacity * 100.0).round() as i64,
            crate::codegen::format_number(self.corner_radius),
        )
    }
}

// NaN fields compare equal so unvalidated models keep `Eq` reflexive
impl PartialEq for GlassParameters {
    fn eq(&self, other: &Self) -> bool {
        self.numeric_values()
            .into_iter()
            .zip(other.numeric_values())
            .all(|((_, a), (_, b))| same_f64(a, b))
            && self.colors() == other.colors()
            && self.blur_style == other.blur_style
            && self.variant == other.variant
            && self.animation_curve == other.animation_curve
            && self.gradient_enabled == other.gradient_enabled
            && self.animation_enabled == other.animation_enabled
            && self.interactive == other.interactive
    }
}

impl Eq for GlassParameters {}

impl Hash for GlassParameters {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for (_, v) in self.numeric_values() {
            hash_f64(v, state);
        }
        for (_, c) in self.colors() {
            c.hash(state);
        }
        self.blur_style.hash(state);
        self.variant.hash(state);
        self.animation_curve.hash(state);
        self.gradient_enabled.hash(state);
        self.animation_enabled.hash(state);
        self.interactive.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn wild() -> GlassParameters {
        let mut p = GlassParameters::default();
        p.blur_radius = 400.0;
        p.tint_opacity = -1.0;
        p.brightness = 9.0;
        p.contrast = 0.0;
        p.refraction_index = 0.2;
        p.shadow_offset_x = -120.0;
        p.light_angle = f64::NAN;
        p.border_color = GlassColor::rgba(2.0, -1.0, 0.5, 7.0);
        p
    }

    #[test]
    fn test_defaults_match_documented_values() {
        let p = GlassParameters::default();
        assert_eq!(p.blur_radius, 20.0);
        assert_eq!(p.tint_opacity, 0.15);
        assert_eq!(p.corner_radius, 16.0);
        assert!(p.is_valid());
    }

    #[test]
    fn test_validate_brings_every_field_into_range() {
        let mut p = wild();
        assert!(!p.is_valid());
        p.validate();
        assert!(p.is_valid());

        for (range, value) in p.numeric_values() {
            assert!(value >= range.min && value <= range.max, "{} = {}", range.name, value);
        }
        assert_eq!(p.blur_radius, 50.0);
        assert_eq!(p.tint_opacity, 0.0);
        assert_eq!(p.contrast, 0.5);
        assert_eq!(p.shadow_offset_x, -50.0);
        assert_eq!(p.light_angle, ranges::LIGHT_ANGLE.default);
        assert_eq!(p.border_color, GlassColor::rgba(1.0, 0.0, 0.5, 1.0));
    }

    #[test]
    fn test_validate_is_idempotent() {
        let once = wild().validated();
        let twice = once.clone().validated();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_validate_leaves_valid_model_untouched() {
        let p = GlassParameters::default();
        assert_eq!(p.clone().validated(), p);
    }

    #[test]
    fn test_get_and_set_by_name() {
        let mut p = GlassParameters::default();
        assert_eq!(p.get("corner_radius"), Some(16.0));
        assert_eq!(p.set("corner_radius", 99.0).unwrap(), 60.0);
        assert_eq!(p.corner_radius, 60.0);
        assert!(p.set("nope", 1.0).is_err());
        assert_eq!(p.get("nope"), None);
    }

    #[test]
    fn test_assign_parses_each_kind() {
        let mut p = GlassParameters::default();
        p.assign("blur_radius", "12.5").unwrap();
        p.assign("tint_color", "#FF0000").unwrap();
        p.assign("blur_style", "ultra_thin").unwrap();
        p.assign("gradient_enabled", "true").unwrap();

        assert_eq!(p.blur_radius, 12.5);
        assert_eq!(p.tint_color, GlassColor::rgb(1.0, 0.0, 0.0));
        assert_eq!(p.blur_style, BlurStyle::UltraThin);
        assert!(p.gradient_enabled);

        assert!(p.assign("blur_radius", "lots").is_err());
        assert!(p.assign("tint_color", "red").is_err());
        assert!(p.assign("interactive", "maybe").is_err());
        assert!(p.assign("sparkle", "1").is_err());
    }

    #[test]
    fn test_equal_models_hash_equal() {
        let mut a = GlassParameters::default();
        let mut b = GlassParameters::default();
        a.brightness = 0.0;
        b.brightness = -0.0;

        let set: HashSet<_> = [a.clone(), b].into_iter().collect();
        assert_eq!(set.len(), 1);

        a.blur_radius = 1.0;
        assert_ne!(a, GlassParameters::default());
    }

    #[test]
    fn test_unvalidated_nan_model_is_reflexive() {
        let mut a = GlassParameters::default();
        a.light_angle = f64::NAN;
        a.tint_color.red = f64::NAN;
        let mut b = a.clone();
        b.light_angle = -f64::NAN;

        assert_eq!(a, a.clone());
        assert_eq!(a, b);
        let set: HashSet<_> = [a.clone(), b].into_iter().collect();
        assert_eq!(set.len(), 1);
        assert_ne!(a, GlassParameters::default());
    }

    #[test]
    fn test_serde_fills_missing_fields_with_defaults() {
        let p: GlassParameters = serde_json::from_str(r#"{"blur_radius": 7}"#).unwrap();
        assert_eq!(p.blur_radius, 7.0);
        assert_eq!(p.corner_radius, 16.0);
    }

    #[test]
    fn test_field_names() {
        assert!(GlassParameters::is_field_name("blur_radius"));
        assert!(GlassParameters::is_field_name("border_color"));
        assert!(GlassParameters::is_field_name("blur_style"));
        assert!(!GlassParameters::is_field_name("blurRadius"));
    }

    #[test]
    fn test_summary() {
        assert_eq!(GlassParameters::default().summary(), "Regular blur 20, 15% tint, radius 16");
    }
}
