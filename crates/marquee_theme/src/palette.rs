//! Theme color palettes

use marquee_core::Color;
use serde::Serialize;

/// Minimal set of colors a theme declares; everything else is derived.
#[derive(Clone, Copy, Debug)]
pub(crate) struct BasePalette {
    pub background: Color,
    pub foreground: Color,
    pub muted_foreground: Color,
    pub accent: Color,
    pub accent_foreground: Color,
    pub border: Color,
}

/// Concrete colors of a resolved theme
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ThemePalette {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub muted_text: Color,
    pub accent: Color,
    pub button_background: Color,
    pub button_hover: Color,
    pub button_text: Color,
    pub border: Color,
}

impl ThemePalette {
    pub(crate) fn from_base(base: BasePalette) -> Self {
        let luminance = 0.2126 * base.background.r
            + 0.7152 * base.background.g
            + 0.0722 * base.background.b;
        // Hover states move toward the opposite end of the background.
        let state_target = if luminance > 0.5 {
            Color::BLACK
        } else {
            Color::WHITE
        };

        ThemePalette {
            background: base.background,
            surface: blend(base.background, base.foreground, 0.04),
            text: base.foreground,
            muted_text: base.muted_foreground,
            accent: base.accent,
            button_background: base.accent,
            button_hover: blend(base.accent, state_target, 0.12),
            button_text: base.accent_foreground,
            border: base.border,
        }
    }

    /// CSS custom properties consumed by the theme class bundles.
    pub fn css_variables(&self) -> Vec<(&'static str, String)> {
        vec![
            ("--marquee-bg", self.background.to_css()),
            ("--marquee-surface", self.surface.to_css()),
            ("--marquee-text", self.text.to_css()),
            ("--marquee-muted", self.muted_text.to_css()),
            ("--marquee-accent", self.accent.to_css()),
            ("--marquee-button", self.button_background.to_css()),
            ("--marquee-button-hover", self.button_hover.to_css()),
            ("--marquee-button-text", self.button_text.to_css()),
            ("--marquee-border", self.border.to_css()),
        ]
    }
}

fn blend(a: Color, b: Color, t: f32) -> Color {
    Color::lerp(&a, &b, t)
}
