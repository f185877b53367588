//! Source code export
//!
//! Turns a parameter model into SwiftUI-shaped source text by substituting
//! field values into a fixed skeleton. Output is deterministic: the same
//! parameters and indentation always produce byte-identical text.

use serde::{Deserialize, Serialize};

use crate::color::GlassColor;
use crate::constants::export::{DEFAULT_INDENT_WIDTH, DEFAULT_VIEW_NAME};
use crate::parameters::GlassParameters;

/// Indentation unit applied once per nesting level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Indent {
    Spaces(usize),
    Tab,
}

impl Default for Indent {
    fn default() -> Self {
        Indent::Spaces(DEFAULT_INDENT_WIDTH)
    }
}

impl Indent {
    fn unit(&self) -> String {
        match self {
            Indent::Spaces(n) => " ".repeat(*n),
            Indent::Tab => "\t".to_string(),
        }
    }
}

/// Format a number for export: integral values get no decimals, everything
/// else gets exactly two.
pub fn format_number(value: f64) -> String {
    // Avoid printing "-0"
    let value = if value == 0.0 { 0.0 } else { value };
    if value == value.round() {
        format!("{:.0}", value)
    } else {
        let formatted = format!("{:.2}", value);
        // Values like -0.001 round to "-0.00"
        if formatted == "-0.00" { "0.00".to_string() } else { formatted }
    }
}

fn color_expression(color: &GlassColor) -> String {
    format!(
        "Color(red: {}, green: {}, blue: {})",
        format_number(color.red),
        format_number(color.green),
        format_number(color.blue)
    )
}

/// Make `name` usable as a type name; falls back to the default view name
pub fn sanitize_view_name(name: &str) -> String {
    let mut out = String::new();
    let mut upper_next = true;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if upper_next {
                out.push(ch.to_ascii_uppercase());
            } else {
                out.push(ch);
            }
            upper_next = false;
        } else {
            upper_next = true;
        }
    }

    match out.chars().next() {
        None => DEFAULT_VIEW_NAME.to_string(),
        Some(c) if c.is_ascii_digit() => format!("Glass{}", out),
        Some(_) => out,
    }
}

#[derive(Debug, Clone, Default)]
pub struct CodeGenerator {
    pub indent: Indent,
}

/// Line buffer that tracks nesting depth
struct Lines {
    unit: String,
    depth: usize,
    out: Vec<String>,
}

impl Lines {
    fn new(indent: Indent) -> Self {
        Self { unit: indent.unit(), depth: 0, out: Vec::new() }
    }

    fn line(&mut self, text: impl AsRef<str>) {
        self.out.push(format!("{}{}", self.unit.repeat(self.depth), text.as_ref()));
    }

    fn open(&mut self, text: impl AsRef<str>) {
        self.line(text);
        self.depth += 1;
    }

    fn close(&mut self, text: impl AsRef<str>) {
        self.depth = self.depth.saturating_sub(1);
        self.line(text);
    }

    fn finish(self) -> String {
        let mut text = self.out.join("\n");
        text.push('\n');
        text
    }
}

impl CodeGenerator {
    pub fn new(indent: Indent) -> Self {
        Self { indent }
    }

    /// Export the modifier chain for `params`
    pub fn export(&self, params: &GlassParameters) -> String {
        let mut lines = Lines::new(self.indent);
        self.write_body(&mut lines, params);
        lines.finish()
    }

    /// Export wrapped in a named view plus a preview block
    pub fn export_view(&self, params: &GlassParameters, view_name: &str) -> String {
        let name = sanitize_view_name(view_name);
        let unit = self.indent.unit();
        let inner = unit.repeat(2);

        let mut out = String::new();
        out.push_str("import SwiftUI\n\n");
        out.push_str(&format!("struct {}: View {{\n", name));
        if params.interactive {
            out.push_str(&format!("{}@State private var isPressed = false\n\n", unit));
        }
        out.push_str(&format!("{}var body: some View {{\n", unit));
        for line in self.export(params).lines() {
            if line.is_empty() {
                out.push('\n');
            } else {
                out.push_str(&format!("{}{}\n", inner, line));
            }
        }
        out.push_str(&format!("{}}}\n", unit));
        out.push_str("}\n\n");
        out.push_str("#Preview {\n");
        out.push_str(&format!("{}{}()\n", unit, name));
        out.push_str("}\n");
        out
    }

    fn write_body(&self, lines: &mut Lines, p: &GlassParameters) {
        let radius = format_number(p.corner_radius);
        let shape = format!("RoundedRectangle(cornerRadius: {}, style: .continuous)", radius);

        lines.line(&shape);
        lines.depth += 1;
        lines.line(format!(".fill({})", p.blur_style.material()));

        lines.open(".background(");
        lines.line(color_expression(&p.tint_color));
        lines.depth += 1;
        lines.line(format!(".opacity({})", format_number(p.tint_opacity)));
        lines.line(format!(".blur(radius: {})", format_number(p.blur_radius)));
        lines.depth -= 1;
        lines.close(")");

        if p.border_width > 0.0 {
            lines.open(".overlay(");
            lines.line(&shape);
            lines.depth += 1;
            lines.line(format!(
                ".stroke({}.opacity({}), lineWidth: {})",
                color_expression(&p.border_color),
                format_number(p.border_color.opacity),
                format_number(p.border_width)
            ));
            lines.depth -= 1;
            lines.close(")");
        }

        if p.gradient_enabled {
            lines.open(".overlay(");
            lines.open("LinearGradient(");
            lines.line(format!(
                "colors: [{}.opacity({}), {}.opacity({})],",
                color_expression(&p.tint_color),
                format_number(p.tint_opacity),
                color_expression(&p.gradient_secondary_color),
                format_number(p.gradient_secondary_color.opacity)
            ));
            lines.line("startPoint: .top,");
            lines.line("endPoint: .bottom");
            lines.close(")");
            lines.depth += 1;
            lines.line(format!(".rotationEffect(.degrees({}))", format_number(p.gradient_angle)));
            lines.line(format!(".clipShape({})", shape));
            lines.depth -= 1;
            lines.close(")");
        }

        lines.line(format!(".saturation({})", format_number(p.saturation)));
        lines.line(format!(".brightness({})", format_number(p.brightness)));
        lines.line(format!(".contrast({})", format_number(p.contrast)));
        lines.line(format!(
            ".shadow(color: {}.opacity({}), radius: {}, x: {}, y: {})",
            color_expression(&p.shadow_color),
            format_number(p.shadow_color.opacity),
            format_number(p.shadow_radius),
            format_number(p.shadow_offset_x),
            format_number(p.shadow_offset_y)
        ));

        if p.interactive {
            let animation = if p.animation_enabled {
                p.animation_curve.expression(&format_number(p.animation_duration))
            } else {
                "nil".to_string()
            };
            lines.line(".scaleEffect(isPressed ? 0.97 : 1)");
            lines.line(format!(".animation({}, value: isPressed)", animation));
            lines.line(".onLongPressGesture(minimumDuration: 0, pressing: { isPressed = $0 }, perform: {})");
        }
        lines.depth -= 1;
    }
}
