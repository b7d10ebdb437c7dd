use ratatui::style::Color;

use crate::io::config_io::ConfigError;
use crate::model::UiConfig;

/// Parsed color theme for the TUI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    /// Title and marker of completed tasks
    pub done: Color,
    /// Border of the empty checkbox
    pub marker: Color,
    pub selection_bg: Color,
    pub input_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x1F, 0x1F, 0x1F),
            text: Color::Rgb(0xD0, 0xD0, 0xD0),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0x88, 0x84, 0xFF),
            dim: Color::Rgb(0x7A, 0x7A, 0x7A),
            done: Color::Rgb(0x1D, 0xB8, 0x63),
            marker: Color::Rgb(0xB2, 0xB2, 0xB2),
            selection_bg: Color::Rgb(0x2E, 0x2B, 0x4A),
            input_bg: Color::Rgb(0x2A, 0x2A, 0x2A),
        }
    }
}

/// Parse a hex color string like "#1DB863" into an RGB Color
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
    /// Create a theme from the `[ui.colors]` table, falling back to defaults.
    /// Unknown slots are ignored; a malformed color is an error.
    pub fn from_config(ui: &UiConfig) -> Result<Self, ConfigError> {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            let slot = match key.as_str() {
                "background" => &mut theme.background,
                "text" => &mut theme.text,
                "text_bright" => &mut theme.text_bright,
                "highlight" => &mut theme.highlight,
                "dim" => &mut theme.dim,
                "done" => &mut theme.done,
                "marker" => &mut theme.marker,
                "selection_bg" => &mut theme.selection_bg,
                "input_bg" => &mut theme.input_bg,
                _ => continue,
            };
            *slot = parse_hex_color(value).ok_or_else(|| ConfigError::InvalidColor {
                key: key.clone(),
                value: value.clone(),
            })?;
        }

        Ok(theme)
    }

    /// Title color for a task row
    pub fn title_color(&self, done: bool) -> Color {
        if done { self.done } else { self.text }
    }
}
