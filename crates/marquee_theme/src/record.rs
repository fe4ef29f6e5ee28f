//! Resolved theme records

use crate::catalog::ThemeId;
use crate::media::MediaThemeId;
use crate::palette::ThemePalette;
use marquee_core::identifier_enum;
use serde::Serialize;

identifier_enum! {
    /// Structural renderer strategy selected by a theme
    pub enum LayoutKind: "layout" {
        /// Full-width strip anchored to the top of the viewport
        BannerTop => "banner_top",
        /// Single tall column with a fixed visual sequence
        Monolith => "monolith",
        /// Media and copy in two unequal columns
        Asymmetric => "asymmetric",
        /// Scattered, rotated copy fragments
        Fragmented => "fragmented",
        /// Media as full-bleed background with copy on top
        Cover => "cover",
        /// Description rendered as a bulleted feature list
        FeatureList => "feature_list",
        /// Time-limited offer with countdown digits
        Countdown => "countdown",
        /// Card inside the shared container shell
        Default => "default",
    }
    default = Default;
}

impl LayoutKind {
    /// Layouts that lay media and copy side by side
    pub fn is_split(self) -> bool {
        matches!(self, LayoutKind::Asymmetric)
    }
}

identifier_enum! {
    /// Where the primary action button sits relative to the copy
    pub enum ButtonPosition: "button position" {
        Top => "top",
        Bottom => "bottom",
    }
    default = Bottom;
}

identifier_enum! {
    /// Decorative accent drawn in the header area
    pub enum HeaderAccent: "header accent" {
        None => "none",
        Bar => "bar",
        Underline => "underline",
        Badge => "badge",
        Gradient => "gradient",
    }
    default = None;
}

impl HeaderAccent {
    /// Classes of the accent element, `None` when no accent is drawn.
    pub fn classes(self) -> Option<&'static str> {
        match self {
            HeaderAccent::None => None,
            HeaderAccent::Bar => Some("h-1 w-12 rounded-full bg-[var(--marquee-accent)]"),
            HeaderAccent::Underline => Some("h-px w-full bg-[var(--marquee-border)]"),
            HeaderAccent::Badge => Some(
                "inline-flex w-fit rounded-full bg-[var(--marquee-accent)] px-2 py-0.5 \
                 text-[10px] font-bold uppercase tracking-widest text-[var(--marquee-button-text)]",
            ),
            HeaderAccent::Gradient => Some(
                "h-1.5 w-full bg-gradient-to-r from-[var(--marquee-accent)] to-transparent",
            ),
        }
    }
}

identifier_enum! {
    /// Decorative effect layered beneath the overlay content
    pub enum SpecialEffect: "special effect" {
        None => "none",
        PulseRed => "pulse_red",
        Sparkles => "sparkles",
        Hearts => "hearts",
        Snow => "snow",
        Confetti => "confetti",
        Matrix => "matrix",
        Glitch => "glitch",
        Scanline => "scanline",
        Bokeh => "bokeh",
        GradientWave => "gradient_wave",
    }
    default = None;
}

/// Rendering family shared by several effect kinds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EffectFamily {
    None,
    Pulse,
    Sparkles,
    Hearts,
    Snow,
    Confetti,
    /// Tech-grid scan (`matrix`, `glitch`, `scanline`)
    TechScan,
    /// Soft gradient (`bokeh`, `gradient_wave`)
    SoftGradient,
}

impl SpecialEffect {
    pub fn family(self) -> EffectFamily {
        match self {
            SpecialEffect::None => EffectFamily::None,
            SpecialEffect::PulseRed => EffectFamily::Pulse,
            SpecialEffect::Sparkles => EffectFamily::Sparkles,
            SpecialEffect::Hearts => EffectFamily::Hearts,
            SpecialEffect::Snow => EffectFamily::Snow,
            SpecialEffect::Confetti => EffectFamily::Confetti,
            SpecialEffect::Matrix | SpecialEffect::Glitch | SpecialEffect::Scanline => {
                EffectFamily::TechScan
            }
            SpecialEffect::Bokeh | SpecialEffect::GradientWave => EffectFamily::SoftGradient,
        }
    }
}

/// Structural class bundle for the copy and chrome of an overlay
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ThemeClasses {
    pub container: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub button: &'static str,
    pub small_note: &'static str,
    pub close: &'static str,
}

/// A fully resolved theme
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ThemeRecord {
    pub id: ThemeId,
    pub layout: LayoutKind,
    pub palette: ThemePalette,
    pub classes: ThemeClasses,
    pub header_accent: HeaderAccent,
    pub button_position: ButtonPosition,
    pub special_effect: SpecialEffect,
    /// Whether the theme renders a media region at all
    pub has_media_slot: bool,
    /// Media treatment used when the config names none
    pub media_theme: MediaThemeId,
}

impl ThemeRecord {
    pub fn is_split(&self) -> bool {
        self.layout.is_split()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_core::Identifier;

    #[test]
    fn test_effect_families() {
        assert_eq!(SpecialEffect::Glitch.family(), EffectFamily::TechScan);
        assert_eq!(SpecialEffect::Scanline.family(), EffectFamily::TechScan);
        assert_eq!(SpecialEffect::GradientWave.family(), EffectFamily::SoftGradient);
        assert_eq!(SpecialEffect::None.family(), EffectFamily::None);
    }

    #[test]
    fn test_layout_kinds() {
        assert_eq!(LayoutKind::all().len(), 8);
        assert_eq!(LayoutKind::default(), LayoutKind::Default);
        assert!(LayoutKind::Asymmetric.is_split());
        assert!(!LayoutKind::Cover.is_split());
    }

    #[test]
    fn test_header_accent_none_has_no_classes() {
        assert!(HeaderAccent::None.classes().is_none());
        assert!(HeaderAccent::Bar.classes().is_some());
    }
}
