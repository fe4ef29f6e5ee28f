//! Marquee Theme Catalog
//!
//! Maps a theme identifier to a concrete [`ThemeRecord`]: color palette,
//! structural class bundle, layout kind, header accent, button placement,
//! special effect and media capabilities. Media knobs (media theme, overlay
//! preset, video frame, filter) resolve separately to [`MediaThemeClasses`].
//!
//! Resolution is a pure lookup. Unknown identifiers never fail; they resolve
//! to the default theme.
//!
//! ```rust
//! use marquee_theme::{resolve_theme_id, LayoutKind};
//!
//! let theme = resolve_theme_id("creative_mono");
//! assert_eq!(theme.layout, LayoutKind::Monolith);
//!
//! let fallback = resolve_theme_id("does_not_exist");
//! assert_eq!(fallback.layout, LayoutKind::Default);
//! ```

pub mod catalog;
pub mod media;
pub mod palette;
pub mod record;

pub use catalog::{resolve_theme, resolve_theme_id, ThemeId};
pub use media::{
    resolve_media_theme, MediaFilter, MediaFilterVariant, MediaThemeClasses, MediaThemeId,
    MediaThemeOptions, OverlayPreset, VideoFramePreset,
};
pub use palette::ThemePalette;
pub use record::{
    ButtonPosition, EffectFamily, HeaderAccent, LayoutKind, SpecialEffect, ThemeClasses,
    ThemeRecord,
};
