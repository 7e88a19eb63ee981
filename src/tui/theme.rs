use std::collections::HashMap;

use ratatui::style::Color;

use crate::model::UiConfig;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub dim: Color,
    pub selection_bg: Color,
    pub selection_marker: Color,
    pub preview_bg: Color,
    /// Checkbox fill when unchecked
    pub checkbox_off: Color,
    /// Per-tag checkbox colors
    pub tag_colors: HashMap<String, Color>,
    /// Fallback for unknown color tags
    pub tag_default: Color,
}

impl Default for Theme {
    fn default() -> Self {
        let mut tag_colors = HashMap::new();
        tag_colors.insert("red".into(), Color::Rgb(0xEF, 0x44, 0x44));
        tag_colors.insert("pink".into(), Color::Rgb(0xEC, 0x48, 0x99));
        tag_colors.insert("purple".into(), Color::Rgb(0xA8, 0x55, 0xF7));
        tag_colors.insert("indigo".into(), Color::Rgb(0x63, 0x66, 0xF1));
        tag_colors.insert("blue".into(), Color::Rgb(0x3B, 0x82, 0xF6));
        tag_colors.insert("cyan".into(), Color::Rgb(0x06, 0xB6, 0xD4));
        tag_colors.insert("teal".into(), Color::Rgb(0x14, 0xB8, 0xA6));
        tag_colors.insert("green".into(), Color::Rgb(0x22, 0xC5, 0x5E));
        tag_colors.insert("yellow".into(), Color::Rgb(0xEA, 0xB3, 0x08));
        tag_colors.insert("orange".into(), Color::Rgb(0xF9, 0x73, 0x16));
        tag_colors.insert("brown".into(), Color::Rgb(0x92, 0x40, 0x0E));
        tag_colors.insert("gray".into(), Color::Rgb(0xD1, 0xD5, 0xDB));
        tag_colors.insert("black".into(), Color::Rgb(0x4B, 0x55, 0x63));

        Theme {
            background: Color::Rgb(0x11, 0x18, 0x27),
            text: Color::Rgb(0xD1, 0xD5, 0xDB),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            dim: Color::Rgb(0x6B, 0x72, 0x80),
            selection_bg: Color::Rgb(0x1F, 0x29, 0x37),
            selection_marker: Color::Rgb(0x3B, 0x82, 0xF6),
            preview_bg: Color::Rgb(0x31, 0x2E, 0x81),
            checkbox_off: Color::Rgb(0xD1, 0xD5, 0xDB),
            tag_colors,
            tag_default: Color::Rgb(0x6B, 0x72, 0x80),
        }
    }
}

/// Parse a hex color string like "#EF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from the UI config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "text" => theme.text = color,
                    "text_bright" => theme.text_bright = color,
                    "dim" => theme.dim = color,
                    "selection_bg" => theme.selection_bg = color,
                    "selection_marker" => theme.selection_marker = color,
                    "preview_bg" => theme.preview_bg = color,
                    "checkbox_off" => theme.checkbox_off = color,
                    _ => {}
                }
            }
        }

        for (tag, value) in &ui.tag_colors {
            if let Some(color) = parse_hex_color(value) {
                theme.tag_colors.insert(tag.clone(), color);
            }
        }

        theme
    }

    /// Get the checkbox color for a tag, falling back to the default
    pub fn tag_color(&self, tag: &str) -> Color {
        self.tag_colors.get(tag).copied().unwrap_or(self.tag_default)
    }
}
