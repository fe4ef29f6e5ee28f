//! Built-in theme catalog.

use crate::media::MediaThemeId;
use crate::palette::{BasePalette, ThemePalette};
use crate::record::{
    ButtonPosition, HeaderAccent, LayoutKind, SpecialEffect, ThemeClasses, ThemeRecord,
};
use marquee_core::{identifier_enum, Color, Identifier};

identifier_enum! {
    /// Built-in theme catalog
    pub enum ThemeId: "theme" {
        Default => "default",
        MinimalLight => "minimal_light",
        BreakingNews => "breaking_news",
        CreativeMono => "creative_mono",
        CreativeAsymmetric => "creative_asymmetric",
        CreativeFragmented => "creative_fragmented",
        /// Terminal look; renders no media region
        CreativeTerminal => "creative_terminal",
        TechGrid => "tech_grid",
        MagazineCover => "magazine_cover",
        NeonNight => "neon_night",
        ProductFeatures => "product_features",
        FlashSale => "flash_sale",
        LuxuryGold => "luxury_gold",
        HolidayWinter => "holiday_winter",
        Valentine => "valentine",
    }
    default = Default;
}

impl ThemeId {
    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::MinimalLight => "Minimal Light",
            Self::BreakingNews => "Breaking News",
            Self::CreativeMono => "Creative Mono",
            Self::CreativeAsymmetric => "Creative Asymmetric",
            Self::CreativeFragmented => "Creative Fragmented",
            Self::CreativeTerminal => "Creative Terminal",
            Self::TechGrid => "Tech Grid",
            Self::MagazineCover => "Magazine Cover",
            Self::NeonNight => "Neon Night",
            Self::ProductFeatures => "Product Features",
            Self::FlashSale => "Flash Sale",
            Self::LuxuryGold => "Luxury Gold",
            Self::HolidayWinter => "Holiday Winter",
            Self::Valentine => "Valentine",
        }
    }
}

/// Resolve a theme record. Pure lookup; every id yields a record.
pub fn resolve_theme(id: ThemeId) -> ThemeRecord {
    match id {
        ThemeId::Default => ThemeSpec::new(id, LayoutKind::Default, default_palette())
            .accent(HeaderAccent::Bar)
            .build(),
        ThemeId::MinimalLight => ThemeSpec::new(id, LayoutKind::Default, minimal_palette())
            .classes(MINIMAL_CLASSES)
            .button(ButtonPosition::Top)
            .media(MediaThemeId::Minimal)
            .build(),
        ThemeId::BreakingNews => ThemeSpec::new(id, LayoutKind::BannerTop, breaking_palette())
            .classes(BANNER_CLASSES)
            .accent(HeaderAccent::Badge)
            .effect(SpecialEffect::PulseRed)
            .build(),
        ThemeId::CreativeMono => ThemeSpec::new(id, LayoutKind::Monolith, mono_palette())
            .classes(MONO_CLASSES)
            .accent(HeaderAccent::Underline)
            .media(MediaThemeId::Minimal)
            .build(),
        ThemeId::CreativeAsymmetric => {
            ThemeSpec::new(id, LayoutKind::Asymmetric, asymmetric_palette())
                .classes(EDITORIAL_CLASSES)
                .accent(HeaderAccent::Bar)
                .build()
        }
        ThemeId::CreativeFragmented => {
            ThemeSpec::new(id, LayoutKind::Fragmented, fragmented_palette())
                .classes(FRAGMENTED_CLASSES)
                .button(ButtonPosition::Top)
                .effect(SpecialEffect::Glitch)
                .build()
        }
        ThemeId::CreativeTerminal => ThemeSpec::new(id, LayoutKind::Default, terminal_palette())
            .classes(TERMINAL_CLASSES)
            .effect(SpecialEffect::Scanline)
            .without_media()
            .build(),
        ThemeId::TechGrid => ThemeSpec::new(id, LayoutKind::Asymmetric, tech_palette())
            .classes(TERMINAL_CLASSES)
            .accent(HeaderAccent::Gradient)
            .effect(SpecialEffect::Matrix)
            .media(MediaThemeId::Neon)
            .build(),
        ThemeId::MagazineCover => ThemeSpec::new(id, LayoutKind::Cover, cover_palette())
            .classes(COVER_CLASSES)
            .effect(SpecialEffect::Bokeh)
            .media(MediaThemeId::Cinematic)
            .build(),
        ThemeId::NeonNight => ThemeSpec::new(id, LayoutKind::Cover, neon_palette())
            .classes(COVER_CLASSES)
            .accent(HeaderAccent::Gradient)
            .effect(SpecialEffect::GradientWave)
            .media(MediaThemeId::Neon)
            .build(),
        ThemeId::ProductFeatures => {
            ThemeSpec::new(id, LayoutKind::FeatureList, default_palette())
                .accent(HeaderAccent::Underline)
                .media(MediaThemeId::Rounded)
                .build()
        }
        ThemeId::FlashSale => ThemeSpec::new(id, LayoutKind::Countdown, sale_palette())
            .classes(SALE_CLASSES)
            .accent(HeaderAccent::Badge)
            .effect(SpecialEffect::Confetti)
            .build(),
        ThemeId::LuxuryGold => ThemeSpec::new(id, LayoutKind::Default, gold_palette())
            .classes(LUXURY_CLASSES)
            .accent(HeaderAccent::Underline)
            .effect(SpecialEffect::Sparkles)
            .media(MediaThemeId::Vintage)
            .build(),
        ThemeId::HolidayWinter => ThemeSpec::new(id, LayoutKind::Default, winter_palette())
            .accent(HeaderAccent::Bar)
            .effect(SpecialEffect::Snow)
            .media(MediaThemeId::Polaroid)
            .build(),
        ThemeId::Valentine => ThemeSpec::new(id, LayoutKind::Default, valentine_palette())
            .button(ButtonPosition::Top)
            .effect(SpecialEffect::Hearts)
            .media(MediaThemeId::Rounded)
            .build(),
    }
}

/// Resolve a theme from a raw id; unknown ids resolve to the default theme.
pub fn resolve_theme_id(id: &str) -> ThemeRecord {
    resolve_theme(ThemeId::parse_or_default(id))
}

struct ThemeSpec {
    id: ThemeId,
    layout: LayoutKind,
    base: BasePalette,
    classes: ThemeClasses,
    accent: HeaderAccent,
    button: ButtonPosition,
    effect: SpecialEffect,
    has_media_slot: bool,
    media: MediaThemeId,
}

impl ThemeSpec {
    fn new(id: ThemeId, layout: LayoutKind, base: BasePalette) -> Self {
        Self {
            id,
            layout,
            base,
            classes: DEFAULT_CLASSES,
            accent: HeaderAccent::None,
            button: ButtonPosition::Bottom,
            effect: SpecialEffect::None,
            has_media_slot: true,
            media: MediaThemeId::Default,
        }
    }

    fn classes(mut self, classes: ThemeClasses) -> Self {
        self.classes = classes;
        self
    }

    fn accent(mut self, accent: HeaderAccent) -> Self {
        self.accent = accent;
        self
    }

    fn button(mut self, position: ButtonPosition) -> Self {
        self.button = position;
        self
    }

    fn effect(mut self, effect: SpecialEffect) -> Self {
        self.effect = effect;
        self
    }

    fn media(mut self, media: MediaThemeId) -> Self {
        self.media = media;
        self
    }

    fn without_media(mut self) -> Self {
        self.has_media_slot = false;
        self
    }

    fn build(self) -> ThemeRecord {
        ThemeRecord {
            id: self.id,
            layout: self.layout,
            palette: ThemePalette::from_base(self.base),
            classes: self.classes,
            header_accent: self.accent,
            button_position: self.button,
            special_effect: self.effect,
            has_media_slot: self.has_media_slot,
            media_theme: self.media,
        }
    }
}

// ============================================================================
// Structural class bundles
// ============================================================================

const DEFAULT_CLASSES: ThemeClasses = ThemeClasses {
    container: "bg-[var(--marquee-bg)] text-[var(--marquee-text)] shadow-2xl",
    title: "text-2xl font-bold tracking-tight",
    subtitle: "text-sm font-semibold uppercase tracking-wide text-[var(--marquee-muted)]",
    description: "text-base leading-relaxed text-[var(--marquee-muted)]",
    button: "inline-flex items-center justify-center rounded-lg bg-[var(--marquee-button)] \
             px-5 py-3 font-semibold text-[var(--marquee-button-text)] \
             hover:bg-[var(--marquee-button-hover)] transition-colors",
    small_note: "text-xs text-[var(--marquee-muted)] opacity-80",
    close: "text-[var(--marquee-muted)] hover:text-[var(--marquee-text)]",
};

const MINIMAL_CLASSES: ThemeClasses = ThemeClasses {
    container: "bg-[var(--marquee-bg)] text-[var(--marquee-text)] border border-[var(--marquee-border)]",
    title: "text-xl font-medium",
    subtitle: "text-xs uppercase tracking-widest text-[var(--marquee-muted)]",
    description: "text-sm leading-relaxed text-[var(--marquee-muted)]",
    button: "inline-flex items-center justify-center border border-[var(--marquee-text)] \
             px-4 py-2 text-sm font-medium hover:bg-[var(--marquee-text)] \
             hover:text-[var(--marquee-bg)] transition-colors",
    small_note: "text-[11px] text-[var(--marquee-muted)]",
    close: "text-[var(--marquee-muted)] hover:text-[var(--marquee-text)]",
};

const BANNER_CLASSES: ThemeClasses = ThemeClasses {
    container: "bg-[var(--marquee-bg)] text-[var(--marquee-text)] shadow-lg",
    title: "text-base font-extrabold uppercase tracking-wide",
    subtitle: "text-xs font-bold uppercase text-[var(--marquee-accent)]",
    description: "text-sm text-[var(--marquee-muted)]",
    button: "inline-flex shrink-0 items-center rounded bg-[var(--marquee-button)] px-4 py-1.5 \
             text-sm font-bold text-[var(--marquee-button-text)] hover:bg-[var(--marquee-button-hover)]",
    small_note: "text-[11px] text-[var(--marquee-muted)]",
    close: "text-[var(--marquee-muted)] hover:text-[var(--marquee-text)]",
};

const MONO_CLASSES: ThemeClasses = ThemeClasses {
    container: "bg-[var(--marquee-bg)] text-[var(--marquee-text)] border-2 border-[var(--marquee-text)]",
    title: "text-4xl font-black uppercase leading-none tracking-tighter",
    subtitle: "font-mono text-xs uppercase tracking-[0.3em]",
    description: "font-mono text-sm leading-relaxed",
    button: "block w-full bg-[var(--marquee-button)] py-4 text-center font-black uppercase \
             tracking-widest text-[var(--marquee-button-text)] hover:bg-[var(--marquee-button-hover)]",
    small_note: "font-mono text-[10px] uppercase tracking-widest opacity-60",
    close: "text-[var(--marquee-text)] hover:opacity-60",
};

const EDITORIAL_CLASSES: ThemeClasses = ThemeClasses {
    container: "bg-[var(--marquee-bg)] text-[var(--marquee-text)] shadow-2xl",
    title: "font-serif text-3xl font-bold leading-tight",
    subtitle: "text-xs font-bold uppercase tracking-[0.2em] text-[var(--marquee-accent)]",
    description: "text-base leading-relaxed text-[var(--marquee-muted)]",
    button: "inline-flex items-center gap-2 border-b-2 border-[var(--marquee-accent)] pb-1 \
             font-semibold text-[var(--marquee-text)] hover:text-[var(--marquee-accent)]",
    small_note: "text-xs italic text-[var(--marquee-muted)]",
    close: "bg-[var(--marquee-bg)]/80 text-[var(--marquee-text)] hover:bg-[var(--marquee-bg)]",
};

const FRAGMENTED_CLASSES: ThemeClasses = ThemeClasses {
    container: "bg-[var(--marquee-bg)] text-[var(--marquee-text)]",
    title: "text-5xl font-black uppercase leading-none mix-blend-difference",
    subtitle: "bg-[var(--marquee-accent)] px-2 py-1 text-xs font-bold uppercase \
               text-[var(--marquee-button-text)]",
    description: "max-w-xs bg-[var(--marquee-surface)] p-3 text-sm shadow-lg",
    button: "inline-flex items-center bg-[var(--marquee-button)] px-6 py-3 font-black uppercase \
             text-[var(--marquee-button-text)] shadow-[6px_6px_0_var(--marquee-text)] \
             hover:translate-x-0.5 hover:translate-y-0.5",
    small_note: "font-mono text-[10px] uppercase opacity-70",
    close: "bg-[var(--marquee-text)] text-[var(--marquee-bg)] hover:bg-[var(--marquee-accent)]",
};

const TERMINAL_CLASSES: ThemeClasses = ThemeClasses {
    container: "bg-[var(--marquee-bg)] text-[var(--marquee-text)] font-mono \
                border border-[var(--marquee-border)] shadow-[0_0_40px_rgba(34,197,94,0.25)]",
    title: "text-xl font-bold before:content-['>_']",
    subtitle: "text-xs uppercase text-[var(--marquee-accent)]",
    description: "text-sm leading-relaxed text-[var(--marquee-muted)]",
    button: "inline-flex items-center border border-[var(--marquee-accent)] px-4 py-2 \
             text-[var(--marquee-accent)] hover:bg-[var(--marquee-accent)] \
             hover:text-[var(--marquee-bg)]",
    small_note: "text-[11px] text-[var(--marquee-muted)] opacity-70",
    close: "text-[var(--marquee-accent)] hover:text-[var(--marquee-text)]",
};

const COVER_CLASSES: ThemeClasses = ThemeClasses {
    container: "bg-[var(--marquee-bg)] text-[var(--marquee-text)] shadow-2xl",
    title: "font-serif text-4xl font-bold leading-tight drop-shadow-lg",
    subtitle: "text-xs font-semibold uppercase tracking-[0.25em] text-[var(--marquee-accent)]",
    description: "text-base leading-relaxed text-[var(--marquee-text)]/85",
    button: "inline-flex items-center justify-center rounded-full bg-[var(--marquee-button)] \
             px-6 py-3 font-semibold text-[var(--marquee-button-text)] \
             hover:bg-[var(--marquee-button-hover)]",
    small_note: "text-xs text-[var(--marquee-text)]/60",
    close: "bg-black/40 text-white hover:bg-black/60",
};

const SALE_CLASSES: ThemeClasses = ThemeClasses {
    container: "bg-[var(--marquee-bg)] text-[var(--marquee-text)] shadow-2xl",
    title: "text-3xl font-black uppercase tracking-tight",
    subtitle: "text-sm font-bold uppercase text-[var(--marquee-accent)]",
    description: "text-base text-[var(--marquee-muted)]",
    button: "inline-flex w-full items-center justify-center rounded-xl bg-[var(--marquee-button)] \
             py-4 text-lg font-black uppercase text-[var(--marquee-button-text)] \
             hover:bg-[var(--marquee-button-hover)] animate-pulse",
    small_note: "text-xs text-[var(--marquee-muted)]",
    close: "text-[var(--marquee-muted)] hover:text-[var(--marquee-text)]",
};

const LUXURY_CLASSES: ThemeClasses = ThemeClasses {
    container: "bg-[var(--marquee-bg)] text-[var(--marquee-text)] border border-[var(--marquee-accent)]/40 shadow-2xl",
    title: "font-serif text-3xl tracking-wide",
    subtitle: "text-[11px] uppercase tracking-[0.4em] text-[var(--marquee-accent)]",
    description: "font-serif text-base italic leading-relaxed text-[var(--marquee-muted)]",
    button: "inline-flex items-center justify-center border border-[var(--marquee-accent)] \
             px-8 py-3 text-sm uppercase tracking-[0.3em] text-[var(--marquee-accent)] \
             hover:bg-[var(--marquee-accent)] hover:text-[var(--marquee-button-text)]",
    small_note: "text-[11px] tracking-wide text-[var(--marquee-muted)]",
    close: "text-[var(--marquee-accent)] hover:opacity-70",
};

// ============================================================================
// Palettes
// ============================================================================

fn default_palette() -> BasePalette {
    BasePalette {
        background: Color::from_hex(0xFFFFFF),
        foreground: Color::from_hex(0x0F172A),
        muted_foreground: Color::from_hex(0x64748B),
        accent: Color::from_hex(0x2563EB),
        accent_foreground: Color::from_hex(0xFFFFFF),
        border: Color::from_hex(0xE2E8F0),
    }
}

fn minimal_palette() -> BasePalette {
    BasePalette {
        background: Color::from_hex(0xFAFAFA),
        foreground: Color::from_hex(0x171717),
        muted_foreground: Color::from_hex(0x737373),
        accent: Color::from_hex(0x171717),
        accent_foreground: Color::from_hex(0xFAFAFA),
        border: Color::from_hex(0xE5E5E5),
    }
}

fn breaking_palette() -> BasePalette {
    BasePalette {
        background: Color::from_hex(0x111827),
        foreground: Color::from_hex(0xFFFFFF),
        muted_foreground: Color::from_hex(0xD1D5DB),
        accent: Color::from_hex(0xDC2626),
        accent_foreground: Color::from_hex(0xFFFFFF),
        border: Color::from_hex(0x374151),
    }
}

fn mono_palette() -> BasePalette {
    BasePalette {
        background: Color::from_hex(0xFFFFFF),
        foreground: Color::from_hex(0x000000),
        muted_foreground: Color::from_hex(0x404040),
        accent: Color::from_hex(0x000000),
        accent_foreground: Color::from_hex(0xFFFFFF),
        border: Color::from_hex(0x000000),
    }
}

fn asymmetric_palette() -> BasePalette {
    BasePalette {
        background: Color::from_hex(0xFFFBF5),
        foreground: Color::from_hex(0x1C1917),
        muted_foreground: Color::from_hex(0x57534E),
        accent: Color::from_hex(0xEA580C),
        accent_foreground: Color::from_hex(0xFFFFFF),
        border: Color::from_hex(0xE7E5E4),
    }
}

fn fragmented_palette() -> BasePalette {
    BasePalette {
        background: Color::from_hex(0xFDE047),
        foreground: Color::from_hex(0x0A0A0A),
        muted_foreground: Color::from_hex(0x262626),
        accent: Color::from_hex(0x7C3AED),
        accent_foreground: Color::from_hex(0xFFFFFF),
        border: Color::from_hex(0x0A0A0A),
    }
}

fn terminal_palette() -> BasePalette {
    BasePalette {
        background: Color::from_hex(0x0A0F0A),
        foreground: Color::from_hex(0xD1FAE5),
        muted_foreground: Color::from_hex(0x86EFAC),
        accent: Color::from_hex(0x22C55E),
        accent_foreground: Color::from_hex(0x052E16),
        border: Color::from_hex(0x14532D),
    }
}

fn tech_palette() -> BasePalette {
    BasePalette {
        background: Color::from_hex(0x020617),
        foreground: Color::from_hex(0xE2E8F0),
        muted_foreground: Color::from_hex(0x94A3B8),
        accent: Color::from_hex(0x06B6D4),
        accent_foreground: Color::from_hex(0x020617),
        border: Color::from_hex(0x1E293B),
    }
}

fn cover_palette() -> BasePalette {
    BasePalette {
        background: Color::from_hex(0x0C0A09),
        foreground: Color::from_hex(0xFAFAF9),
        muted_foreground: Color::from_hex(0xD6D3D1),
        accent: Color::from_hex(0xFBBF24),
        accent_foreground: Color::from_hex(0x1C1917),
        border: Color::from_hex(0x292524),
    }
}

fn neon_palette() -> BasePalette {
    BasePalette {
        background: Color::from_hex(0x09090B),
        foreground: Color::from_hex(0xFAFAFA),
        muted_foreground: Color::from_hex(0xC4B5FD),
        accent: Color::from_hex(0xD946EF),
        accent_foreground: Color::from_hex(0xFFFFFF),
        border: Color::from_hex(0x3B0764),
    }
}

fn sale_palette() -> BasePalette {
    BasePalette {
        background: Color::from_hex(0xFFF7ED),
        foreground: Color::from_hex(0x431407),
        muted_foreground: Color::from_hex(0x9A3412),
        accent: Color::from_hex(0xEF4444),
        accent_foreground: Color::from_hex(0xFFFFFF),
        border: Color::from_hex(0xFED7AA),
    }
}

fn gold_palette() -> BasePalette {
    BasePalette {
        background: Color::from_hex(0x0C0A09),
        foreground: Color::from_hex(0xFEF3C7),
        muted_foreground: Color::from_hex(0xD6D3D1),
        accent: Color::from_hex(0xD4AF37),
        accent_foreground: Color::from_hex(0x0C0A09),
        border: Color::from_hex(0x44403C),
    }
}

fn winter_palette() -> BasePalette {
    BasePalette {
        background: Color::from_hex(0xF0F9FF),
        foreground: Color::from_hex(0x0C4A6E),
        muted_foreground: Color::from_hex(0x0369A1),
        accent: Color::from_hex(0xB91C1C),
        accent_foreground: Color::from_hex(0xFFFFFF),
        border: Color::from_hex(0xBAE6FD),
    }
}

fn valentine_palette() -> BasePalette {
    BasePalette {
        background: Color::from_hex(0xFFF1F2),
        foreground: Color::from_hex(0x881337),
        muted_foreground: Color::from_hex(0xBE123C),
        accent: Color::from_hex(0xE11D48),
        accent_foreground: Color::from_hex(0xFFFFFF),
        border: Color::from_hex(0xFECDD3),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_theme_keeps_its_id() {
        for id in ThemeId::all() {
            assert_eq!(resolve_theme(*id).id, *id);
        }
    }

    #[test]
    fn test_terminal_has_no_media_slot() {
        assert!(!resolve_theme(ThemeId::CreativeTerminal).has_media_slot);
        assert!(resolve_theme(ThemeId::Default).has_media_slot);
    }

    #[test]
    fn test_unknown_id_resolves_to_default() {
        assert_eq!(resolve_theme_id("unknown_xyz"), resolve_theme(ThemeId::Default));
        assert_eq!(resolve_theme_id("Creative-Mono").id, ThemeId::CreativeMono);
    }
}
