//! Range descriptors for the numeric glass parameters.
//!
//! Each descriptor defines the closed range a field is clamped into and the
//! value a fresh model starts with.

/// Descriptor for a floating-point parameter with bounded range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatRange {
    pub name: &'static str,
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub description: &'static str,
}

impl FloatRange {
    /// Saturating clamp into `[min, max]`. NaN maps to the default.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            self.default
        } else {
            value.max(self.min).min(self.max)
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

// ==================== SURFACE ====================

pub const BLUR_RADIUS: FloatRange = FloatRange {
    name: "blur_radius",
    min: 0.0,
    max: 50.0,
    default: 20.0,
    description: "Radius of the backdrop blur in points",
};

pub const TINT_OPACITY: FloatRange = FloatRange {
    name: "tint_opacity",
    min: 0.0,
    max: 1.0,
    default: 0.15,
    description: "Opacity of the tint layer",
};

pub const CORNER_RADIUS: FloatRange = FloatRange {
    name: "corner_radius",
    min: 0.0,
    max: 60.0,
    default: 16.0,
    description: "Corner radius of the glass shape",
};

// ==================== COLOR ADJUSTMENT ====================

pub const SATURATION: FloatRange = FloatRange {
    name: "saturation",
    min: 0.0,
    max: 2.0,
    default: 1.2,
    description: "Saturation multiplier (1 = unchanged)",
};

pub const BRIGHTNESS: FloatRange = FloatRange {
    name: "brightness",
    min: -0.5,
    max: 0.5,
    default: 0.0,
    description: "Brightness offset",
};

pub const CONTRAST: FloatRange = FloatRange {
    name: "contrast",
    min: 0.5,
    max: 2.0,
    default: 1.0,
    description: "Contrast multiplier (1 = unchanged)",
};

// ==================== LIGHT ====================

pub const LIGHT_INTENSITY: FloatRange = FloatRange {
    name: "light_intensity",
    min: 0.0,
    max: 1.0,
    default: 0.5,
    description: "Strength of the simulated light source",
};

pub const LIGHT_ANGLE: FloatRange = FloatRange {
    name: "light_angle",
    min: 0.0,
    max: 360.0,
    default: 45.0,
    description: "Direction of the light source in degrees",
};

pub const SPECULAR_SIZE: FloatRange = FloatRange {
    name: "specular_size",
    min: 0.0,
    max: 1.0,
    default: 0.3,
    description: "Relative size of the specular highlight",
};

pub const SPECULAR_SOFTNESS: FloatRange = FloatRange {
    name: "specular_softness",
    min: 0.0,
    max: 1.0,
    default: 0.5,
    description: "Edge softness of the specular highlight",
};

// ==================== REFRACTION ====================

pub const REFRACTION_INTENSITY: FloatRange = FloatRange {
    name: "refraction_intensity",
    min: 0.0,
    max: 1.0,
    default: 0.3,
    description: "How strongly the backdrop is distorted",
};

pub const REFRACTION_INDEX: FloatRange = FloatRange {
    name: "refraction_index",
    min: 1.0,
    max: 2.0,
    default: 1.5,
    description: "Index of refraction (1 = air, 1.5 = glass)",
};

// ==================== SHADOW & BORDER ====================

pub const SHADOW_RADIUS: FloatRange = FloatRange {
    name: "shadow_radius",
    min: 0.0,
    max: 50.0,
    default: 10.0,
    description: "Blur radius of the drop shadow",
};

pub const SHADOW_OFFSET_X: FloatRange = FloatRange {
    name: "shadow_offset_x",
    min: -50.0,
    max: 50.0,
    default: 0.0,
    description: "Horizontal shadow offset",
};

pub const SHADOW_OFFSET_Y: FloatRange = FloatRange {
    name: "shadow_offset_y",
    min: -50.0,
    max: 50.0,
    default: 5.0,
    description: "Vertical shadow offset",
};

pub const BORDER_WIDTH: FloatRange = FloatRange {
    name: "border_width",
    min: 0.0,
    max: 10.0,
    default: 1.0,
    description: "Stroke width of the border (0 = no border)",
};

// ==================== MOTION & DEPTH ====================

pub const ANIMATION_DURATION: FloatRange = FloatRange {
    name: "animation_duration",
    min: 0.0,
    max: 3.0,
    default: 0.3,
    description: "Duration of state animations in seconds",
};

pub const DEPTH: FloatRange = FloatRange {
    name: "depth",
    min: 0.0,
    max: 50.0,
    default: 0.0,
    description: "Perceived elevation of the surface",
};

pub const PARALLAX_INTENSITY: FloatRange = FloatRange {
    name: "parallax_intensity",
    min: 0.0,
    max: 1.0,
    default: 0.0,
    description: "Strength of the motion parallax effect",
};

pub const GRADIENT_ANGLE: FloatRange = FloatRange {
    name: "gradient_angle",
    min: 0.0,
    max: 360.0,
    default: 135.0,
    description: "Direction of the gradient overlay in degrees",
};

/// Every numeric parameter, in declaration order
pub static ALL: [FloatRange; 20] = [
    BLUR_RADIUS,
    TINT_OPACITY,
    CORNER_RADIUS,
    SATURATION,
    BRIGHTNESS,
    CONTRAST,
    LIGHT_INTENSITY,
    LIGHT_ANGLE,
    SPECULAR_SIZE,
    SPECULAR_SOFTNESS,
    REFRACTION_INTENSITY,
    REFRACTION_INDEX,
    SHADOW_RADIUS,
    SHADOW_OFFSET_X,
    SHADOW_OFFSET_Y,
    BORDER_WIDTH,
    ANIMATION_DURATION,
    DEPTH,
    PARALLAX_INTENSITY,
    GRADIENT_ANGLE,
];

/// Look up a descriptor by field name
pub fn find(name: &str) -> Option<&'static FloatRange> {
    ALL.iter().find(|r| r.name == name)
}
