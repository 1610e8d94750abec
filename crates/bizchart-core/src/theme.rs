// File: crates/bizchart-core/src/theme.rs
// Summary: Color themes for chart chrome (axes, assist lines, text, border).

use crate::color::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub border: Color,
    pub caption: Color,
    pub axis_line: Color,
    pub tick: Color,
    pub assist_line: Color,
    pub axis_label: Color,
    pub legend_text: Color,
    /// Pie labels and value labels without their own color.
    pub text: Color,
}

impl Default for Theme {
    fn default() -> Self { Self::classic() }
}

impl Theme {
    /// White background, red axes, silver dotted assist lines.
    pub fn classic() -> Self {
        Self {
            name: "classic",
            background: Color::WHITE,
            border: Color::GRAY,
            caption: Color::BLACK,
            axis_line: Color::RED,
            tick: Color::RED,
            assist_line: Color::SILVER,
            axis_label: Color::BLACK,
            legend_text: Color::BLACK,
            text: Color::BLACK,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::from_rgb(250, 250, 252),
            border: Color::from_rgb(210, 210, 218),
            caption: Color::from_rgb(20, 20, 30),
            axis_line: Color::from_rgb(60, 60, 70),
            tick: Color::from_rgb(100, 100, 110),
            assist_line: Color::from_rgb(220, 220, 228),
            axis_label: Color::from_rgb(20, 20, 30),
            legend_text: Color::from_rgb(20, 20, 30),
            text: Color::from_rgb(20, 20, 30),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from_rgb(18, 18, 20),
            border: Color::from_rgb(60, 60, 66),
            caption: Color::from_rgb(235, 235, 245),
            axis_line: Color::from_rgb(180, 180, 190),
            tick: Color::from_rgb(150, 150, 160),
            assist_line: Color::from_rgb(48, 48, 54),
            axis_label: Color::from_rgb(210, 210, 220),
            legend_text: Color::from_rgb(210, 210, 220),
            text: Color::from_rgb(235, 235, 245),
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::classic(), Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to classic.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::classic)
}
