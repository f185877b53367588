//! Named parameter snapshots and the built-in preset set

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::color::GlassColor;
use crate::parameters::{AnimationCurve, BlurStyle, GlassParameters, GlassVariant};

/// A named snapshot of parameter values.
///
/// Identity is the `id`, which is derived from the name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preset {
    pub id: String,
    pub name: String,
    pub parameters: GlassParameters,
    pub created_at: DateTime<Utc>,
}

impl PartialEq for Preset {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Preset {}

impl Preset {
    /// New preset stamped with the current time
    pub fn new(name: impl Into<String>, parameters: GlassParameters) -> Self {
        Self::with_timestamp(name, parameters, Utc::now())
    }

    pub fn with_timestamp(name: impl Into<String>, parameters: GlassParameters, created_at: DateTime<Utc>) -> Self {
        let name = name.into();
        Self {
            id: slugify(&name),
            name,
            parameters: parameters.validated(),
            created_at,
        }
    }

    /// Derived from the parameters, never stored
    pub fn description(&self) -> String {
        self.parameters.summary()
    }
}

/// Lowercased alphanumerics (any script); any other run becomes a single `-`
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for ch in name.trim().chars() {
        if ch.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(ch.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// The 20 built-in presets, in display order
pub fn builtin_presets() -> Vec<Preset> {
    let base = GlassParameters::default();
    let entries: Vec<(&str, GlassParameters)> = vec![
        ("Default", base.clone()),
        (
            "Frosted",
            GlassParameters {
                blur_radius: 30.0,
                blur_style: BlurStyle::Thick,
                tint_opacity: 0.25,
                saturation: 0.9,
                ..base.clone()
            },
        ),
        (
            "Crystal Clear",
            GlassParameters {
                blur_radius: 5.0,
                blur_style: BlurStyle::UltraThin,
                variant: GlassVariant::Clear,
                tint_opacity: 0.05,
                border_width: 0.5,
                refraction_intensity: 0.6,
                ..base.clone()
            },
        ),
        (
            "Neon",
            GlassParameters {
                tint_color: GlassColor::rgb(1.0, 0.0, 0.8),
                tint_opacity: 0.3,
                border_color: GlassColor::rgba(0.0, 1.0, 1.0, 0.8),
                border_width: 2.0,
                saturation: 1.8,
                shadow_color: GlassColor::rgba(1.0, 0.0, 0.8, 0.5),
                shadow_radius: 20.0,
                shadow_offset_y: 0.0,
                ..base.clone()
            },
        ),
        (
            "Midnight",
            GlassParameters {
                tint_color: GlassColor::rgb(0.05, 0.05, 0.2),
                tint_opacity: 0.6,
                brightness: -0.2,
                border_color: GlassColor::WHITE.with_opacity(0.1),
                ..base.clone()
            },
        ),
        (
            "Ocean",
            GlassParameters {
                tint_color: GlassColor::rgb(0.0, 0.5, 0.8),
                tint_opacity: 0.25,
                corner_radius: 24.0,
                gradient_enabled: true,
                gradient_secondary_color: GlassColor::rgba(0.0, 0.8, 0.7, 0.3),
                ..base.clone()
            },
        ),
        (
            "Sunset",
            GlassParameters {
                tint_color: GlassColor::rgb(1.0, 0.5, 0.2),
                tint_opacity: 0.3,
                gradient_enabled: true,
                gradient_secondary_color: GlassColor::rgba(0.9, 0.2, 0.5, 0.3),
                gradient_angle: 90.0,
                ..base.clone()
            },
        ),
        (
            "Forest",
            GlassParameters {
                tint_color: GlassColor::rgb(0.1, 0.5, 0.2),
                tint_opacity: 0.3,
                saturation: 1.1,
                contrast: 1.1,
                ..base.clone()
            },
        ),
        (
            "Aurora",
            GlassParameters {
                tint_color: GlassColor::rgb(0.3, 1.0, 0.6),
                tint_opacity: 0.2,
                gradient_enabled: true,
                gradient_secondary_color: GlassColor::rgba(0.6, 0.3, 1.0, 0.35),
                gradient_angle: 45.0,
                saturation: 1.6,
                ..base.clone()
            },
        ),
        (
            "Minimal",
            GlassParameters {
                blur_radius: 10.0,
                blur_style: BlurStyle::Thin,
                tint_opacity: 0.05,
                border_width: 0.0,
                shadow_radius: 0.0,
                shadow_offset_y: 0.0,
                ..base.clone()
            },
        ),
        (
            "Bold",
            GlassParameters {
                blur_radius: 35.0,
                tint_opacity: 0.4,
                border_width: 3.0,
                border_color: GlassColor::WHITE.with_opacity(0.7),
                contrast: 1.4,
                ..base.clone()
            },
        ),
        (
            "Soft Light",
            GlassParameters {
                blur_radius: 25.0,
                brightness: 0.15,
                light_intensity: 0.9,
                specular_softness: 0.9,
                ..base.clone()
            },
        ),
        (
            "Deep Shadow",
            GlassParameters {
                shadow_color: GlassColor::BLACK.with_opacity(0.5),
                shadow_radius: 40.0,
                shadow_offset_y: 20.0,
                depth: 30.0,
                ..base.clone()
            },
        ),
        (
            "Prism",
            GlassParameters {
                refraction_intensity: 0.9,
                refraction_index: 1.9,
                specular_size: 0.6,
                light_angle: 200.0,
                gradient_enabled: true,
                ..base.clone()
            },
        ),
        (
            "Ice",
            GlassParameters {
                blur_radius: 28.0,
                tint_color: GlassColor::rgb(0.8, 0.95, 1.0),
                tint_opacity: 0.35,
                brightness: 0.1,
                refraction_intensity: 0.5,
                ..base.clone()
            },
        ),
        (
            "Smoke",
            GlassParameters {
                tint_color: GlassColor::rgb(0.3, 0.3, 0.3),
                tint_opacity: 0.45,
                saturation: 0.3,
                blur_style: BlurStyle::UltraThick,
                ..base.clone()
            },
        ),
        (
            "Rose Gold",
            GlassParameters {
                tint_color: GlassColor::rgb(0.9, 0.7, 0.65),
                tint_opacity: 0.3,
                border_color: GlassColor::rgba(1.0, 0.85, 0.75, 0.6),
                border_width: 1.5,
                ..base.clone()
            },
        ),
        (
            "Cyber",
            GlassParameters {
                tint_color: GlassColor::rgb(0.0, 1.0, 0.4),
                tint_opacity: 0.2,
                corner_radius: 4.0,
                border_color: GlassColor::rgba(0.0, 1.0, 0.4, 0.9),
                border_width: 1.0,
                contrast: 1.5,
                animation_curve: AnimationCurve::Linear,
                ..base.clone()
            },
        ),
        (
            "Paper",
            GlassParameters {
                blur_radius: 8.0,
                tint_color: GlassColor::rgb(0.98, 0.97, 0.94),
                tint_opacity: 0.7,
                saturation: 0.8,
                corner_radius: 8.0,
                refraction_intensity: 0.0,
                ..base.clone()
            },
        ),
        (
            "Vapor",
            GlassParameters {
                blur_radius: 45.0,
                blur_style: BlurStyle::UltraThin,
                tint_opacity: 0.1,
                parallax_intensity: 0.6,
                animation_curve: AnimationCurve::Spring,
                animation_duration: 0.6,
                ..base
            },
        ),
    ];

    entries
        .into_iter()
        .map(|(name, parameters)| Preset::with_timestamp(name, parameters, DateTime::<Utc>::UNIX_EPOCH))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Crystal Clear"), "crystal-clear");
        assert_eq!(slugify("  Rose   Gold!! "), "rose-gold");
        assert_eq!(slugify("NEON"), "neon");
        assert_eq!(slugify("***"), "");
    }

    #[test]
    fn test_slugify_keeps_non_ascii_letters() {
        assert_eq!(slugify("Ölfilm"), "ölfilm");
        assert_ne!(slugify("Ölfilm"), slugify("Ülfilm"));
        assert_eq!(slugify("夜"), "夜");
        assert_eq!(slugify("Café Crème"), "café-crème");
    }

    #[test]
    fn test_builtin_set() {
        let presets = builtin_presets();
        let names: Vec<&str> = presets.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Default", "Frosted", "Crystal Clear", "Neon", "Midnight", "Ocean", "Sunset",
                "Forest", "Aurora", "Minimal", "Bold", "Soft Light", "Deep Shadow", "Prism",
                "Ice", "Smoke", "Rose Gold", "Cyber", "Paper", "Vapor",
            ]
        );

        for preset in &presets {
            assert!(preset.parameters.is_valid(), "{} is out of range", preset.name);
            assert_eq!(preset.created_at, DateTime::<Utc>::UNIX_EPOCH);
        }

        // Ids are unique
        for (i, a) in presets.iter().enumerate() {
            assert!(presets[i + 1..].iter().all(|b| b.id != a.id));
        }
    }

    #[test]
    fn test_equality_is_by_id() {
        let a = Preset::new("Glass", GlassParameters::default());
        let mut b = Preset::new("glass", GlassParameters::default());
        b.parameters.blur_radius = 3.0;
        assert_eq!(a, b);
        assert_ne!(a, Preset::new("Other", GlassParameters::default()));
    }

    #[test]
    fn test_new_validates_parameters() {
        let mut params = GlassParameters::default();
        params.blur_radius = 1000.0;
        let preset = Preset::new("Huge", params);
        assert_eq!(preset.parameters.blur_radius, 50.0);
    }

    #[test]
    fn test_description_is_derived() {
        let preset = Preset::new("Plain", GlassParameters::default());
        assert_eq!(preset.description(), GlassParameters::default().summary());
    }
}
