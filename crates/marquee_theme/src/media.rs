//! Media treatments: container themes, overlay presets, video frames, filters

use crate::record::ThemeRecord;
use marquee_core::{identifier_enum, ClassList};
use serde::Serialize;

identifier_enum! {
    /// Visual treatment of the media container
    pub enum MediaThemeId: "media theme" {
        Default => "default",
        Polaroid => "polaroid",
        Cinematic => "cinematic",
        Rounded => "rounded",
        Neon => "neon",
        Vintage => "vintage",
        Minimal => "minimal",
    }
    default = Default;
}

identifier_enum! {
    /// Layer drawn over the media to keep copy legible
    pub enum OverlayPreset: "overlay preset" {
        None => "none",
        GradientBottom => "gradient_bottom",
        GradientTop => "gradient_top",
        Vignette => "vignette",
        Darken => "darken",
        Tint => "tint",
    }
    default = None;
}

identifier_enum! {
    /// Device-like frame drawn around video media
    pub enum VideoFramePreset: "video frame" {
        None => "none",
        Browser => "browser",
        Phone => "phone",
        Tv => "tv",
        Film => "film",
    }
    default = None;
}

identifier_enum! {
    /// CSS filter applied to the media element
    pub enum MediaFilter: "media filter" {
        None => "none",
        Grayscale => "grayscale",
        Sepia => "sepia",
        Blur => "blur",
        Saturate => "saturate",
        Contrast => "contrast",
        Duotone => "duotone",
    }
    default = None;
}

identifier_enum! {
    /// Intensity of a media filter
    pub enum MediaFilterVariant: "media filter variant" {
        Subtle => "subtle",
        Medium => "medium",
        Strong => "strong",
    }
    default = Medium;
}

/// Media-related knobs read from the overlay config
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MediaThemeOptions {
    /// Explicit media theme; the theme record's default applies when absent
    pub media_theme: Option<MediaThemeId>,
    /// Explicit overlay preset; the media theme's default applies when absent
    pub overlay: Option<OverlayPreset>,
    pub video_frame: VideoFramePreset,
    pub filter: MediaFilter,
    pub filter_variant: MediaFilterVariant,
}

/// Class bundles applied to every media path (images, video, placeholder)
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MediaThemeClasses {
    pub media_theme: MediaThemeId,
    pub container: ClassList,
    /// Overlay layer classes, absent when the preset is `none`
    pub overlay: Option<ClassList>,
    pub video_frame: ClassList,
    pub filter: ClassList,
}

impl MediaThemeId {
    fn container_classes(self) -> &'static str {
        match self {
            MediaThemeId::Default => "relative overflow-hidden bg-slate-100",
            MediaThemeId::Polaroid => {
                "relative overflow-hidden bg-white p-2 pb-8 shadow-lg rotate-[-1deg]"
            }
            MediaThemeId::Cinematic => "relative overflow-hidden bg-black aspect-[21/9]",
            MediaThemeId::Rounded => "relative overflow-hidden rounded-2xl bg-slate-100",
            MediaThemeId::Neon => {
                "relative overflow-hidden bg-black ring-2 ring-fuchsia-500 \
                 shadow-[0_0_24px_rgba(217,70,239,0.6)]"
            }
            MediaThemeId::Vintage => "relative overflow-hidden bg-amber-50 border-4 border-amber-100",
            MediaThemeId::Minimal => "relative overflow-hidden bg-transparent",
        }
    }

    fn default_overlay(self) -> OverlayPreset {
        match self {
            MediaThemeId::Cinematic => OverlayPreset::GradientBottom,
            MediaThemeId::Vintage => OverlayPreset::Vignette,
            MediaThemeId::Neon => OverlayPreset::Tint,
            _ => OverlayPreset::None,
        }
    }
}

impl OverlayPreset {
    fn classes(self) -> Option<&'static str> {
        match self {
            OverlayPreset::None => None,
            OverlayPreset::GradientBottom => Some(
                "pointer-events-none absolute inset-0 bg-gradient-to-t from-black/70 via-black/10 to-transparent",
            ),
            OverlayPreset::GradientTop => Some(
                "pointer-events-none absolute inset-0 bg-gradient-to-b from-black/70 via-black/10 to-transparent",
            ),
            OverlayPreset::Vignette => Some(
                "pointer-events-none absolute inset-0 shadow-[inset_0_0_80px_rgba(0,0,0,0.6)]",
            ),
            OverlayPreset::Darken => Some("pointer-events-none absolute inset-0 bg-black/40"),
            OverlayPreset::Tint => Some(
                "pointer-events-none absolute inset-0 bg-[var(--marquee-accent)] opacity-25 mix-blend-multiply",
            ),
        }
    }
}

impl VideoFramePreset {
    fn classes(self) -> &'static str {
        match self {
            VideoFramePreset::None => "",
            VideoFramePreset::Browser => {
                "rounded-lg border border-slate-300 bg-slate-200 pt-6 shadow-xl"
            }
            VideoFramePreset::Phone => {
                "mx-auto aspect-[9/16] max-w-[240px] rounded-[2rem] border-[10px] border-slate-900 shadow-2xl"
            }
            VideoFramePreset::Tv => "rounded-xl border-[12px] border-neutral-800 shadow-2xl",
            VideoFramePreset::Film => "border-y-[14px] border-dashed border-black bg-black",
        }
    }
}

impl MediaFilter {
    fn classes(self, variant: MediaFilterVariant) -> &'static str {
        use MediaFilterVariant::*;
        match (self, variant) {
            (MediaFilter::None, _) => "",
            (MediaFilter::Grayscale, Subtle) => "grayscale-[35%]",
            (MediaFilter::Grayscale, Medium) => "grayscale-[70%]",
            (MediaFilter::Grayscale, Strong) => "grayscale",
            (MediaFilter::Sepia, Subtle) => "sepia-[30%]",
            (MediaFilter::Sepia, Medium) => "sepia-[60%]",
            (MediaFilter::Sepia, Strong) => "sepia",
            (MediaFilter::Blur, Subtle) => "blur-[1px]",
            (MediaFilter::Blur, Medium) => "blur-sm",
            (MediaFilter::Blur, Strong) => "blur",
            (MediaFilter::Saturate, Subtle) => "saturate-125",
            (MediaFilter::Saturate, Medium) => "saturate-150",
            (MediaFilter::Saturate, Strong) => "saturate-200",
            (MediaFilter::Contrast, Subtle) => "contrast-110",
            (MediaFilter::Contrast, Medium) => "contrast-125",
            (MediaFilter::Contrast, Strong) => "contrast-150",
            (MediaFilter::Duotone, Subtle) => "grayscale contrast-110 mix-blend-luminosity",
            (MediaFilter::Duotone, Medium) => "grayscale contrast-125 mix-blend-luminosity",
            (MediaFilter::Duotone, Strong) => "grayscale contrast-150 mix-blend-luminosity",
        }
    }
}

/// Resolve the media class bundles for a theme and the config's media knobs.
pub fn resolve_media_theme(theme: &ThemeRecord, options: &MediaThemeOptions) -> MediaThemeClasses {
    let media_theme = options.media_theme.unwrap_or(theme.media_theme);
    let overlay = options
        .overlay
        .unwrap_or_else(|| media_theme.default_overlay());
    tracing::trace!(theme = %theme.id, media_theme = %media_theme, "resolved media theme");

    MediaThemeClasses {
        media_theme,
        container: ClassList::from(media_theme.container_classes()),
        overlay: overlay.classes().map(ClassList::from),
        video_frame: ClassList::from(options.video_frame.classes()),
        filter: ClassList::from(options.filter.classes(options.filter_variant)),
    }
}
