//! Overlay configuration model
//!
//! [`PopupConfig`] is authored outside the engine (admin editor, advertiser
//! contract data) and treated as read-only for the lifetime of one mount.
//! Keys are camelCase; every identifier field is lenient and falls back to
//! its default when the id is unknown.

use crate::error::ConfigError;
use marquee_animation::EntranceAnimation;
use marquee_core::identifier_enum;
use marquee_theme::{
    MediaFilter, MediaFilterVariant, MediaThemeId, MediaThemeOptions, OverlayPreset, ThemeId,
    VideoFramePreset,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

identifier_enum! {
    /// Rendering context
    pub enum Mode: "mode" {
        /// Viewport-anchored, interactive rendering
        Live => "live",
        /// Compact, non-anchored rendering for authoring surfaces
        Preview => "preview",
    }
    default = Live;
}

identifier_enum! {
    pub enum MediaType: "media type" {
        Image => "image",
        Video => "video",
    }
    default = Image;
}

identifier_enum! {
    /// How an image set is presented
    pub enum ImagePresentation: "image presentation" {
        /// Hero for one image, slider for several
        Auto => "auto",
        Hero => "hero",
        Slider => "slider",
        Grid => "grid",
    }
    default = Auto;
}

identifier_enum! {
    pub enum Size: "size" {
        Small => "sm",
        Medium => "md",
        Large => "lg",
        ExtraLarge => "xl",
        BannerTop => "banner_top",
        BannerBottom => "banner_bottom",
        SidebarLeft => "sidebar_left",
        SidebarRight => "sidebar_right",
        Fullscreen => "fullscreen",
    }
    default = Medium;
}

impl Size {
    /// Sizes that pin the overlay to a viewport edge in live mode
    pub fn is_anchored(self) -> bool {
        matches!(
            self,
            Size::BannerTop
                | Size::BannerBottom
                | Size::SidebarLeft
                | Size::SidebarRight
                | Size::Fullscreen
        )
    }
}

identifier_enum! {
    pub enum Position: "position" {
        Center => "center",
        Top => "top",
        Bottom => "bottom",
        Left => "left",
        Right => "right",
        TopLeft => "top_left",
        TopRight => "top_right",
        BottomLeft => "bottom_left",
        BottomRight => "bottom_right",
    }
    default = Center;
}

identifier_enum! {
    /// Backdrop treatment behind the overlay
    pub enum OverlayVariant: "overlay" {
        /// No backdrop; the page stays clickable
        Transparent => "transparent",
        Blur => "blur",
        Dark => "dark",
    }
    default = Dark;
}

identifier_enum! {
    pub enum Shape: "shape" {
        Default => "default",
        Square => "square",
        Rounded => "rounded",
        Circle => "circle",
        Leaf => "leaf",
        Heart => "heart",
        Hexagon => "hexagon",
    }
    default = Default;
}

identifier_enum! {
    pub enum CloseButtonStyle: "close button style" {
        Default => "default",
        Minimal => "minimal",
        Filled => "filled",
        Text => "text",
    }
    default = Default;
}

identifier_enum! {
    pub enum FontFamily: "font family" {
        /// Keep the theme's typography
        Theme => "theme",
        Sans => "sans",
        Serif => "serif",
        Mono => "mono",
        Display => "display",
    }
    default = Theme;
}

identifier_enum! {
    pub enum FontSize: "font size" {
        Small => "sm",
        Medium => "md",
        Large => "lg",
    }
    default = Medium;
}

/// Declarative description of one overlay instance
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PopupConfig {
    // Copy
    pub title: String,
    pub subtitle: Option<String>,
    pub description: String,
    pub button_text: String,
    pub small_note: Option<String>,
    pub logo_url: Option<String>,

    // Media
    pub media_type: MediaType,
    pub media_url: Option<String>,
    pub images: Vec<String>,
    pub image_presentation: ImagePresentation,

    // Presentation
    pub theme_id: ThemeId,
    pub media_theme_id: Option<MediaThemeId>,
    pub overlay_preset: Option<OverlayPreset>,
    pub video_frame_preset: VideoFramePreset,
    pub media_filter: MediaFilter,
    pub media_filter_variant: MediaFilterVariant,
    pub shape: Shape,
    pub size: Size,
    pub position: Position,
    pub overlay: OverlayVariant,
    pub animation: EntranceAnimation,
    pub close_button_style: CloseButtonStyle,
    pub font_family: FontFamily,
    pub font_size: FontSize,

    /// Remaining time shown by the countdown layout
    pub countdown_seconds: Option<u32>,
}

impl PopupConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// Load from a `.toml` or `.json` file (anything not `.toml` is read as JSON).
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&raw),
            _ => Self::from_json_str(&raw),
        }
    }

    /// Media knobs in the form the theme catalog consumes.
    pub fn media_theme_options(&self) -> MediaThemeOptions {
        MediaThemeOptions {
            media_theme: self.media_theme_id,
            overlay: self.overlay_preset,
            video_frame: self.video_frame_preset,
            filter: self.media_filter,
            filter_variant: self.media_filter_variant,
        }
    }

    pub fn subtitle_text(&self) -> Option<&str> {
        non_blank(self.subtitle.as_deref())
    }

    pub fn small_note_text(&self) -> Option<&str> {
        non_blank(self.small_note.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_json_camel_case_keys() {
        let config = PopupConfig::from_json_str(
            r#"{
                "title": "Subscribe",
                "buttonText": "Join",
                "mediaType": "video",
                "mediaUrl": "https://youtu.be/dQw4w9WgXcQ",
                "themeId": "creative_mono",
                "size": "banner_top",
                "closeButtonStyle": "filled",
                "countdownSeconds": 90
            }"#,
        )
        .unwrap();

        assert_eq!(config.title, "Subscribe");
        assert_eq!(config.button_text, "Join");
        assert_eq!(config.media_type, MediaType::Video);
        assert_eq!(config.theme_id, ThemeId::CreativeMono);
        assert_eq!(config.size, Size::BannerTop);
        assert_eq!(config.close_button_style, CloseButtonStyle::Filled);
        assert_eq!(config.countdown_seconds, Some(90));
        assert_eq!(config.overlay, OverlayVariant::Dark);
    }

    #[test]
    fn test_unknown_identifiers_fall_back() {
        let config = PopupConfig::from_json_str(
            r#"{"themeId": "unknown_xyz", "shape": "triangle", "position": "middle", "size": null}"#,
        )
        .unwrap();
        assert_eq!(config.theme_id, ThemeId::Default);
        assert_eq!(config.shape, Shape::Default);
        assert_eq!(config.position, Position::Center);
        assert_eq!(config.size, Size::Medium);
    }

    #[test]
    fn test_toml_config() {
        let config = PopupConfig::from_toml_str(
            r#"
            title = "Winter sale"
            images = ["https://cdn.example.com/a.png", "https://cdn.example.com/b.png"]
            themeId = "holiday_winter"
            position = "bottom-right"
            "#,
        )
        .unwrap();
        assert_eq!(config.images.len(), 2);
        assert_eq!(config.theme_id, ThemeId::HolidayWinter);
        assert_eq!(config.position, Position::BottomRight);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let err = PopupConfig::from_json_str("{ title: ").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_blank_optional_text_is_omitted() {
        let config = PopupConfig {
            subtitle: Some("   ".into()),
            small_note: Some("Terms apply".into()),
            ..Default::default()
        };
        assert_eq!(config.subtitle_text(), None);
        assert_eq!(config.small_note_text(), Some("Terms apply"));
    }

    #[test]
    fn test_anchored_sizes() {
        use marquee_core::Identifier;
        let anchored: Vec<&str> = Size::all()
            .iter()
            .filter(|s| s.is_anchored())
            .map(|s| s.id())
            .collect();
        assert_eq!(
            anchored,
            vec!["banner_top", "banner_bottom", "sidebar_left", "sidebar_right", "fullscreen"]
        );
    }
}
