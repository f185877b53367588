//! Normalized RGBA colors used by the glass parameters
//!
//! Components are stored as `f64` in `[0, 1]`. Hex strings are accepted in
//! `RRGGBB` or `RRGGBBAA` form with an optional leading `#`; 6-digit input
//! gets full opacity.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use tracing::warn;

/// Equality and hashing treat NaN components as equal to each other, so an
/// unvalidated color is still a well-behaved map key.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GlassColor {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub opacity: f64,
}

impl GlassColor {
    pub const WHITE: GlassColor = GlassColor::rgba(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: GlassColor = GlassColor::rgba(0.0, 0.0, 0.0, 1.0);

    pub const fn rgba(red: f64, green: f64, blue: f64, opacity: f64) -> Self {
        Self { red, green, blue, opacity }
    }

    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Same color with a different opacity
    pub const fn with_opacity(self, opacity: f64) -> Self {
        Self { opacity, ..self }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA`
    pub fn parse(hex: &str) -> Option<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();

        let (r, g, b, a) = match digits.len() {
            6 => (channel(0)?, channel(2)?, channel(4)?, 0xFF),
            8 => (channel(0)?, channel(2)?, channel(4)?, channel(6)?),
            _ => return None,
        };

        Some(Self::rgba(
            r as f64 / 255.0,
            g as f64 / 255.0,
            b as f64 / 255.0,
            a as f64 / 255.0,
        ))
    }

    /// Format as `#RRGGBBAA`
    pub fn to_hex(&self) -> String {
        let byte = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02X}{:02X}{:02X}{:02X}",
            byte(self.red),
            byte(self.green),
            byte(self.blue),
            byte(self.opacity)
        )
    }

    /// Clamp every component into `[0, 1]`; NaN becomes 0.
    /// Returns true if anything changed.
    pub fn clamp_components(&mut self, field: &str) -> bool {
        let before = *self;
        for component in [
            &mut self.red,
            &mut self.green,
            &mut self.blue,
            &mut self.opacity,
        ] {
            *component = if component.is_nan() { 0.0 } else { (*component).clamp(0.0, 1.0) };
        }

        // NaN != NaN, so compare bitwise
        let changed = before.components().map(f64::to_bits) != self.components().map(f64::to_bits);
        if changed {
            warn!(field = field, before = ?before, after = ?self, "color component out of range, clamping");
        }
        changed
    }

    pub fn components(&self) -> [f64; 4] {
        [self.red, self.green, self.blue, self.opacity]
    }
}

impl PartialEq for GlassColor {
    fn eq(&self, other: &Self) -> bool {
        self.components()
            .into_iter()
            .zip(other.components())
            .all(|(a, b)| same_f64(a, b))
    }
}

impl Eq for GlassColor {}

impl Hash for GlassColor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for c in self.components() {
            hash_f64(c, state);
        }
    }
}

/// `==` on floats, except that any two NaNs compare equal
pub(crate) fn same_f64(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

/// Hash an `f64` consistently with `same_f64`: `-0.0` and `0.0` share a
/// hash, as do all NaN payloads.
pub(crate) fn hash_f64<H: Hasher>(value: f64, state: &mut H) {
    let normalized = if value.is_nan() {
        f64::NAN
    } else if value == 0.0 {
        0.0
    } else {
        value
    };
    normalized.to_bits().hash(state);
}
