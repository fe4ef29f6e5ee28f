//! Media resolution and rendering
//!
//! Classifies the configured media as one video or an ordered image set,
//! filters every URL through the host's [`UrlPolicy`], and renders the
//! chosen media into a node with the theme's media classes applied.

use crate::config::{ImagePresentation, MediaType, Mode, PopupConfig};
use crate::policy::{filter_safe, UrlPolicy};
use crate::settings::EngineSettings;
use marquee_core::{div, el, span, text, ClassList, Element, EventKind, Node, OverlayEvent};
use marquee_theme::MediaThemeClasses;
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// Glyph shown when there is nothing safe to render
pub const PLACEHOLDER_GLYPH: &str = "\u{1F5BC}";

/// Glyph of the play affordance on video thumbnails
const PLAY_GLYPH: &str = "\u{25B6}";

/// File extensions rendered with a native video element
const DIRECT_VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "ogg", "ogv", "mov", "m4v"];

static VIDEO_ID_REGEX: OnceLock<Regex> = OnceLock::new();

fn video_id_regex() -> &'static Regex {
    VIDEO_ID_REGEX.get_or_init(|| {
        Regex::new(
            r"(?:youtube(?:-nocookie)?\.com/(?:watch\?(?:[^#]*&)?v=|embed/|shorts/|live/|v/)|youtu\.be/)([A-Za-z0-9_-]{11})(?:[^A-Za-z0-9_-]|$)",
        )
        .expect("video id regex should compile")
    })
}

/// Extract an 11-character YouTube-style video id.
pub fn extract_video_id(url: &str) -> Option<&str> {
    video_id_regex()
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|id| id.as_str())
}

/// Whether `url` points at a media file a native video element can play.
pub fn is_direct_video(url: &str) -> bool {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    match path.rsplit_once('.') {
        Some((_, ext)) => {
            let ext = ext.to_ascii_lowercase();
            DIRECT_VIDEO_EXTENSIONS.contains(&ext.as_str())
        }
        None => false,
    }
}

/// Thumbnail shown for an embedded video in preview mode
pub fn video_thumbnail_url(video_id: &str) -> String {
    format!("https://img.youtube.com/vi/{video_id}/hqdefault.jpg")
}

/// Autoplaying, muted, looping embed scoped to one video
pub fn video_embed_url(video_id: &str) -> String {
    format!(
        "https://www.youtube.com/embed/{video_id}?autoplay=1&mute=1&loop=1&playlist={video_id}&controls=0&playsinline=1&rel=0"
    )
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VideoSource {
    /// Platform video identified by id
    Embed { video_id: String },
    /// Direct media file
    Direct { url: String },
}

/// Presentation of a resolved image set
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageMode {
    Hero,
    Slider,
    Grid,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResolvedMedia {
    Video(VideoSource),
    Images { urls: Vec<String>, mode: ImageMode },
    Placeholder,
}

impl ResolvedMedia {
    /// Number of images that take part in rotation.
    pub fn image_count(&self) -> usize {
        match self {
            ResolvedMedia::Images { urls, .. } => urls.len(),
            _ => 0,
        }
    }

    /// Rotation runs only for image sets with more than one entry that
    /// show one image at a time.
    pub fn rotates(&self) -> bool {
        match self {
            ResolvedMedia::Images { urls, mode } => urls.len() > 1 && *mode != ImageMode::Grid,
            _ => false,
        }
    }

    pub fn is_video(&self) -> bool {
        matches!(self, ResolvedMedia::Video(_))
    }

    pub fn images(&self) -> &[String] {
        match self {
            ResolvedMedia::Images { urls, .. } => urls,
            _ => &[],
        }
    }
}

/// Images that pass the policy, in order, capped at `max_images`.
///
/// The explicit list wins; a legacy single `mediaUrl` is used when the list
/// is empty.
pub fn safe_images<P>(config: &PopupConfig, policy: &P, max_images: usize) -> Vec<String>
where
    P: UrlPolicy + ?Sized,
{
    let mut urls = if config.images.is_empty() {
        filter_safe(policy, config.media_url.iter())
    } else {
        filter_safe(policy, config.images.iter())
    };
    if urls.len() > max_images {
        tracing::debug!(kept = max_images, dropped = urls.len() - max_images, "image list capped");
        urls.truncate(max_images);
    }
    urls
}

fn resolve_video<P>(config: &PopupConfig, policy: &P) -> ResolvedMedia
where
    P: UrlPolicy + ?Sized,
{
    let Some(url) = config.media_url.as_deref().filter(|url| policy.is_safe(url)) else {
        tracing::debug!("video url missing or rejected, using placeholder");
        return ResolvedMedia::Placeholder;
    };

    if let Some(video_id) = extract_video_id(url) {
        return ResolvedMedia::Video(VideoSource::Embed {
            video_id: video_id.to_string(),
        });
    }
    if is_direct_video(url) {
        return ResolvedMedia::Video(VideoSource::Direct {
            url: url.to_string(),
        });
    }
    tracing::debug!(url, "unrecognized video url, using placeholder");
    ResolvedMedia::Placeholder
}

/// Classify the configured media.
///
/// A video config never renders images, even when an image list is present.
/// Missing or fully rejected media resolves to the placeholder.
pub fn resolve_media<P>(config: &PopupConfig, policy: &P, settings: &EngineSettings) -> ResolvedMedia
where
    P: UrlPolicy + ?Sized,
{
    if config.media_type == MediaType::Video {
        return resolve_video(config, policy);
    }

    let urls = safe_images(config, policy, settings.max_images);
    if urls.is_empty() {
        return ResolvedMedia::Placeholder;
    }
    let mode = match config.image_presentation {
        ImagePresentation::Hero => ImageMode::Hero,
        ImagePresentation::Slider => ImageMode::Slider,
        ImagePresentation::Grid => ImageMode::Grid,
        ImagePresentation::Auto if urls.len() == 1 => ImageMode::Hero,
        ImagePresentation::Auto => ImageMode::Slider,
    };
    ResolvedMedia::Images { urls, mode }
}

fn image(url: &str, classes: &MediaThemeClasses) -> Element {
    el("img")
        .class("h-full w-full object-cover")
        .class_list(&classes.filter)
        .attr("src", url)
        .attr("alt", "")
        .attr("loading", "lazy")
}

fn render_video(source: &VideoSource, mode: Mode, classes: &MediaThemeClasses) -> Element {
    let player = match (source, mode) {
        (VideoSource::Embed { video_id }, Mode::Preview) => div()
            .class("relative h-full w-full")
            .attr("data-marquee-video-id", video_id.as_str())
            .child(image(&video_thumbnail_url(video_id), classes))
            .child(
                span()
                    .class("absolute inset-0 m-auto flex h-14 w-14 items-center justify-center rounded-full bg-black/60 text-2xl text-white")
                    .attr("aria-hidden", "true")
                    .child(text(PLAY_GLYPH)),
            ),
        (VideoSource::Embed { video_id }, Mode::Live) => el("iframe")
            .class("absolute inset-0 h-full w-full")
            .class_list(&classes.filter)
            .attr("src", video_embed_url(video_id))
            .attr("title", "Promotional video")
            .attr("allow", "autoplay; encrypted-media; picture-in-picture")
            .attr("frameborder", "0")
            .attr("data-marquee-video-id", video_id.as_str()),
        (VideoSource::Direct { url }, _) => el("video")
            .class("h-full w-full object-cover")
            .class_list(&classes.filter)
            .attr("src", url.as_str())
            .flag("autoplay")
            .flag("muted")
            .flag("loop")
            .flag("playsinline"),
    };

    div()
        .class("relative aspect-video w-full")
        .class_list(&classes.video_frame)
        .child(player)
}

fn slide_controls(count: usize, active: usize) -> Element {
    let dots = (0..count).map(|i| {
        let mut dot = el("button")
            .class("h-2 w-2 rounded-full bg-white/50")
            .attr("type", "button")
            .attr("aria-label", format!("Show image {}", i + 1))
            .on_click(OverlayEvent::GoToSlide(i));
        if i == active {
            dot = dot.class("bg-white").attr("aria-current", "true");
        }
        dot
    });

    div()
        .class("absolute inset-x-0 bottom-2 z-10 flex items-center justify-center gap-1.5")
        .attr("data-marquee-part", "slider-controls")
        .child(
            el("button")
                .class("mr-2 text-white/80")
                .attr("type", "button")
                .attr("aria-label", "Previous image")
                .on_click(OverlayEvent::PrevSlide)
                .child(text("\u{2039}")),
        )
        .children(dots)
        .child(
            el("button")
                .class("ml-2 text-white/80")
                .attr("type", "button")
                .attr("aria-label", "Next image")
                .on_click(OverlayEvent::NextSlide)
                .child(text("\u{203A}")),
        )
}

/// `urls` must be non-empty.
fn render_images(
    urls: &[String],
    mode: ImageMode,
    classes: &MediaThemeClasses,
    slide_index: usize,
) -> Element {
    let active = slide_index % urls.len();
    match mode {
        ImageMode::Hero => div()
            .class("relative h-full w-full")
            .child(image(&urls[active], classes)),
        ImageMode::Grid => div()
            .class("grid h-full w-full grid-cols-2 gap-1")
            .children(urls.iter().map(|url| image(url, classes))),
        ImageMode::Slider => {
            let slides = urls.iter().enumerate().map(|(i, url)| {
                let visibility = if i == active { "opacity-100" } else { "opacity-0" };
                div()
                    .class("absolute inset-0 transition-opacity duration-700")
                    .class(visibility)
                    .attr("data-marquee-slide", i.to_string())
                    .child(image(url, classes))
            });
            div()
                .class("relative h-full min-h-[12rem] w-full")
                .children(slides)
                .child(slide_controls(urls.len(), active))
        }
    }
}

fn placeholder(classes: &MediaThemeClasses) -> Element {
    div()
        .class("flex h-full min-h-[10rem] w-full items-center justify-center text-4xl opacity-40")
        .class_list(&classes.filter)
        .attr("aria-hidden", "true")
        .child(text(PLACEHOLDER_GLYPH))
}

/// Render resolved media.
///
/// The media theme's container, overlay and filter classes apply on every
/// path. Multi-image sets bind hover events so the instance can pause
/// rotation.
pub fn render_media(
    media: &ResolvedMedia,
    mode: Mode,
    classes: &MediaThemeClasses,
    shape: &ClassList,
    slide_index: usize,
) -> Node {
    let content = match media {
        ResolvedMedia::Video(source) => render_video(source, mode, classes),
        ResolvedMedia::Images { urls, mode: image_mode } if !urls.is_empty() => {
            render_images(urls, *image_mode, classes, slide_index)
        }
        ResolvedMedia::Images { .. } | ResolvedMedia::Placeholder => placeholder(classes),
    };

    let mut container = div()
        .class_list(&classes.container)
        .class_list(shape)
        .attr("data-marquee-part", "media")
        .attr("data-marquee-media-theme", classes.media_theme.to_string())
        .child(content);

    if let Some(overlay) = &classes.overlay {
        container = container.child(
            div()
                .class("pointer-events-none absolute inset-0")
                .class_list(overlay)
                .attr("aria-hidden", "true"),
        );
    }

    if media.rotates() {
        container = container
            .on(EventKind::PointerEnter, OverlayEvent::HoverStart)
            .on(EventKind::PointerLeave, OverlayEvent::HoverEnd);
    }

    container.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::AllowAll;
    use marquee_theme::{resolve_media_theme, resolve_theme, MediaThemeOptions, ThemeId};
    use pretty_assertions::assert_eq;

    fn no_script(url: &str) -> bool {
        !url.trim_start().to_ascii_lowercase().starts_with("javascript:")
    }

    fn media_classes() -> MediaThemeClasses {
        resolve_media_theme(&resolve_theme(ThemeId::Default), &MediaThemeOptions::default())
    }

    #[test]
    fn test_extract_video_id_variants() {
        for url in [
            "https://youtu.be/dQw4w9WgXcQ",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://www.youtube.com/watch?feature=share&v=dQw4w9WgXcQ&t=10",
            "https://www.youtube.com/embed/dQw4w9WgXcQ?start=3",
            "https://youtube.com/shorts/dQw4w9WgXcQ",
            "https://www.youtube.com/live/dQw4w9WgXcQ",
            "https://www.youtube.com/v/dQw4w9WgXcQ",
            "https://www.youtube-nocookie.com/embed/dQw4w9WgXcQ",
        ] {
            assert_eq!(extract_video_id(url), Some("dQw4w9WgXcQ"), "{url}");
        }
        assert_eq!(extract_video_id("https://cdn.example.com/clip.mp4"), None);
        assert_eq!(extract_video_id("https://youtu.be/short"), None);
    }

    #[test]
    fn test_direct_video_detection() {
        assert!(is_direct_video("https://cdn.example.com/clip.MP4"));
        assert!(is_direct_video("https://cdn.example.com/clip.webm?token=abc"));
        assert!(!is_direct_video("https://cdn.example.com/clip.gif"));
        assert!(!is_direct_video("https://cdn.example.com/watch"));
    }

    #[test]
    fn test_video_wins_over_images() {
        let config = PopupConfig {
            media_type: MediaType::Video,
            media_url: Some("https://youtu.be/dQw4w9WgXcQ".into()),
            images: vec!["https://cdn.example.com/a.png".into()],
            ..Default::default()
        };
        let media = resolve_media(&config, &AllowAll, &EngineSettings::default());
        assert_eq!(
            media,
            ResolvedMedia::Video(VideoSource::Embed {
                video_id: "dQw4w9WgXcQ".into()
            })
        );
        assert!(!media.rotates());
    }

    #[test]
    fn test_unsafe_video_is_placeholder() {
        let config = PopupConfig {
            media_type: MediaType::Video,
            media_url: Some("javascript:alert(1)".into()),
            images: vec!["https://cdn.example.com/a.png".into()],
            ..Default::default()
        };
        let media = resolve_media(&config, &no_script, &EngineSettings::default());
        assert_eq!(media, ResolvedMedia::Placeholder);
    }

    #[test]
    fn test_images_filtered_then_capped() {
        let config = PopupConfig {
            images: vec![
                "javascript:alert(1)".into(),
                "https://cdn.example.com/1.png".into(),
                "https://cdn.example.com/2.png".into(),
                "https://cdn.example.com/3.png".into(),
            ],
            ..Default::default()
        };
        assert_eq!(
            safe_images(&config, &no_script, 2),
            vec!["https://cdn.example.com/1.png", "https://cdn.example.com/2.png"]
        );
    }

    #[test]
    fn test_legacy_media_url_as_single_image() {
        let config = PopupConfig {
            media_url: Some("https://cdn.example.com/hero.jpg".into()),
            ..Default::default()
        };
        let media = resolve_media(&config, &AllowAll, &EngineSettings::default());
        assert_eq!(
            media,
            ResolvedMedia::Images {
                urls: vec!["https://cdn.example.com/hero.jpg".into()],
                mode: ImageMode::Hero,
            }
        );
    }

    #[test]
    fn test_presentation_override() {
        let config = PopupConfig {
            images: vec!["https://a.example/1.png".into(), "https://a.example/2.png".into()],
            image_presentation: ImagePresentation::Grid,
            ..Default::default()
        };
        let media = resolve_media(&config, &AllowAll, &EngineSettings::default());
        assert!(matches!(media, ResolvedMedia::Images { mode: ImageMode::Grid, .. }));
        assert!(!media.rotates());

        let hero = resolve_media(
            &PopupConfig {
                image_presentation: ImagePresentation::Hero,
                ..config
            },
            &AllowAll,
            &EngineSettings::default(),
        );
        assert!(hero.rotates());
    }

    #[test]
    fn test_preview_video_renders_thumbnail_not_player() {
        let media = ResolvedMedia::Video(VideoSource::Embed {
            video_id: "dQw4w9WgXcQ".into(),
        });
        let node = render_media(&media, Mode::Preview, &media_classes(), &ClassList::new(), 0);
        assert!(node.find(|e| e.tag() == "iframe").is_none());
        let thumb = node.find(|e| e.tag() == "img").unwrap();
        assert_eq!(
            thumb.get_attr("src"),
            Some("https://img.youtube.com/vi/dQw4w9WgXcQ/hqdefault.jpg")
        );
    }

    #[test]
    fn test_live_video_renders_looping_embed() {
        let media = ResolvedMedia::Video(VideoSource::Embed {
            video_id: "dQw4w9WgXcQ".into(),
        });
        let node = render_media(&media, Mode::Live, &media_classes(), &ClassList::new(), 0);
        let player = node.find(|e| e.tag() == "iframe").unwrap();
        let src = player.get_attr("src").unwrap();
        assert!(src.starts_with("https://www.youtube.com/embed/dQw4w9WgXcQ?"));
        assert!(src.contains("autoplay=1"));
        assert!(src.contains("mute=1"));
        assert!(src.contains("loop=1&playlist=dQw4w9WgXcQ"));
    }

    #[test]
    fn test_direct_video_has_no_controls() {
        let media = ResolvedMedia::Video(VideoSource::Direct {
            url: "https://cdn.example.com/clip.mp4".into(),
        });
        let node = render_media(&media, Mode::Live, &media_classes(), &ClassList::new(), 0);
        let video = node.find(|e| e.tag() == "video").unwrap();
        assert_eq!(video.get_attr("autoplay"), Some(""));
        assert_eq!(video.get_attr("muted"), Some(""));
        assert_eq!(video.get_attr("loop"), Some(""));
        assert!(video.get_attr("controls").is_none());
    }

    #[test]
    fn test_slider_marks_active_slide_and_binds_hover() {
        let media = ResolvedMedia::Images {
            urls: vec!["https://a.example/1.png".into(), "https://a.example/2.png".into()],
            mode: ImageMode::Slider,
        };
        let node = render_media(&media, Mode::Live, &media_classes(), &ClassList::new(), 1);
        let active = node
            .find(|e| e.get_attr("data-marquee-slide") == Some("1"))
            .unwrap();
        assert!(active.has_class("opacity-100"));

        let root = node.as_element().unwrap();
        assert_eq!(root.handler(EventKind::PointerEnter), Some(OverlayEvent::HoverStart));
        assert_eq!(root.handler(EventKind::PointerLeave), Some(OverlayEvent::HoverEnd));
        assert!(node.events().contains(&OverlayEvent::GoToSlide(0)));
    }

    #[test]
    fn test_placeholder_keeps_theme_container() {
        let classes = media_classes();
        let node = render_media(&ResolvedMedia::Placeholder, Mode::Live, &classes, &ClassList::new(), 0);
        let root = node.as_element().unwrap();
        for token in classes.container.iter() {
            assert!(root.has_class(token));
        }
        assert!(node.text_content().contains(PLACEHOLDER_GLYPH));
    }
}
