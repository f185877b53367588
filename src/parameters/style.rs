//! Closed enumerations used by the glass parameters

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Thickness of the backdrop material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlurStyle {
    UltraThin,
    Thin,
    #[default]
    Regular,
    Thick,
    UltraThick,
}

impl BlurStyle {
    pub const ALL: [BlurStyle; 5] = [
        BlurStyle::UltraThin,
        BlurStyle::Thin,
        BlurStyle::Regular,
        BlurStyle::Thick,
        BlurStyle::UltraThick,
    ];

    /// Material name as used in exported code
    pub fn material(&self) -> &'static str {
        match self {
            BlurStyle::UltraThin => ".ultraThinMaterial",
            BlurStyle::Thin => ".thinMaterial",
            BlurStyle::Regular => ".regularMaterial",
            BlurStyle::Thick => ".thickMaterial",
            BlurStyle::UltraThick => ".ultraThickMaterial",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BlurStyle::UltraThin => "Ultra Thin",
            BlurStyle::Thin => "Thin",
            BlurStyle::Regular => "Regular",
            BlurStyle::Thick => "Thick",
            BlurStyle::UltraThick => "Ultra Thick",
        }
    }

    fn key(&self) -> &'static str {
        match self {
            BlurStyle::UltraThin => "ultra_thin",
            BlurStyle::Thin => "thin",
            BlurStyle::Regular => "regular",
            BlurStyle::Thick => "thick",
            BlurStyle::UltraThick => "ultra_thick",
        }
    }
}

/// Timing curve for state animations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationCurve {
    Linear,
    EaseIn,
    EaseOut,
    #[default]
    EaseInOut,
    Spring,
}

impl AnimationCurve {
    pub const ALL: [AnimationCurve; 5] = [
        AnimationCurve::Linear,
        AnimationCurve::EaseIn,
        AnimationCurve::EaseOut,
        AnimationCurve::EaseInOut,
        AnimationCurve::Spring,
    ];

    /// Animation expression for the given duration, as used in exported code
    pub fn expression(&self, duration: &str) -> String {
        match self {
            AnimationCurve::Linear => format!(".linear(duration: {duration})"),
            AnimationCurve::EaseIn => format!(".easeIn(duration: {duration})"),
            AnimationCurve::EaseOut => format!(".easeOut(duration: {duration})"),
            AnimationCurve::EaseInOut => format!(".easeInOut(duration: {duration})"),
            AnimationCurve::Spring => format!(".spring(duration: {duration})"),
        }
    }

    fn key(&self) -> &'static str {
        match self {
            AnimationCurve::Linear => "linear",
            AnimationCurve::EaseIn => "ease_in",
            AnimationCurve::EaseOut => "ease_out",
            AnimationCurve::EaseInOut => "ease_in_out",
            AnimationCurve::Spring => "spring",
        }
    }
}

/// Overall glass treatment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlassVariant {
    #[default]
    Regular,
    Clear,
    Tinted,
}

impl GlassVariant {
    pub const ALL: [GlassVariant; 3] = [GlassVariant::Regular, GlassVariant::Clear, GlassVariant::Tinted];

    fn key(&self) -> &'static str {
        match self {
            GlassVariant::Regular => "regular",
            GlassVariant::Clear => "clear",
            GlassVariant::Tinted => "tinted",
        }
    }
}

macro_rules! keyed_enum {
    ($ty:ident, $what:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(self.key())
            }
        }

        impl FromStr for $ty {
            type Err = anyhow::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
                $ty::ALL
                    .into_iter()
                    .find(|v| v.key() == wanted)
                    .ok_or_else(|| anyhow::anyhow!("Unknown {} '{}'", $what, s))
            }
        }
    };
}

keyed_enum!(BlurStyle, "blur style");
keyed_enum!(AnimationCurve, "animation curve");
keyed_enum!(GlassVariant, "glass variant");
