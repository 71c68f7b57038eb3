// File: crates/lumen-core/src/theme.rs
// Summary: Named theme presets for chart rendering colors.

use crate::color::Color;

/// Theme colors resolved once per render pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub text: Color,
    pub muted_text: Color,
    pub grid: Color,
    /// Stroke used to emphasize the hovered shape.
    pub highlight: Color,
    pub tooltip_bg: Color,
    pub tooltip_text: Color,
}

impl Theme {
    pub fn default_light() -> Self {
        Self {
            name: "default",
            background: Color::rgb(0xff, 0xff, 0xff),
            text: Color::rgb(0x33, 0x33, 0x33),
            muted_text: Color::rgb(0x66, 0x66, 0x66),
            grid: Color::rgb(0xe0, 0xe0, 0xe0),
            highlight: Color::rgb(0x33, 0x33, 0x33),
            tooltip_bg: Color::rgba(0x00, 0x00, 0x00, 0xcc),
            tooltip_text: Color::rgb(0xff, 0xff, 0xff),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::rgb(0x1a, 0x1a, 0x1a),
            text: Color::rgb(0xe0, 0xe0, 0xe0),
            muted_text: Color::rgb(0x8a, 0x8a, 0x8a),
            grid: Color::rgb(0x40, 0x40, 0x40),
            highlight: Color::rgb(0xff, 0xff, 0xff),
            tooltip_bg: Color::rgba(0x00, 0x00, 0x00, 0xdd),
            tooltip_text: Color::rgb(0xff, 0xff, 0xff),
        }
    }

    pub fn neon() -> Self {
        Self {
            name: "neon",
            background: Color::rgb(0x0a, 0x0a, 0x0a),
            text: Color::rgb(0x00, 0xff, 0x88),
            muted_text: Color::rgb(0x00, 0xb8, 0x66),
            grid: Color::rgba(0x00, 0xff, 0x88, 0x44),
            highlight: Color::rgb(0xff, 0xff, 0xff),
            tooltip_bg: Color::rgba(0x00, 0x14, 0x0c, 0xdd),
            tooltip_text: Color::rgb(0x00, 0xff, 0x88),
        }
    }

    pub fn minimal() -> Self {
        Self {
            name: "minimal",
            background: Color::rgb(0xff, 0xff, 0xff),
            text: Color::rgb(0x66, 0x66, 0x66),
            muted_text: Color::rgb(0x99, 0x99, 0x99),
            grid: Color::rgb(0xf0, 0xf0, 0xf0),
            highlight: Color::rgb(0x33, 0x33, 0x33),
            tooltip_bg: Color::rgba(0x00, 0x00, 0x00, 0xcc),
            tooltip_text: Color::rgb(0xff, 0xff, 0xff),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_light()
    }
}

/// Return the list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::default_light(), Theme::dark(), Theme::neon(), Theme::minimal()]
}

/// Find a theme by `name`, falling back to the default light theme.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::default_light()
}
