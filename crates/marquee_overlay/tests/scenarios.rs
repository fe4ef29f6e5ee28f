//! End-to-end behavior of the overlay engine

use marquee_core::{Identifier, Node};
use marquee_overlay::{
    render_overlay, resolve_overlay, EngineSettings, MediaType, Mode, OverlayCallbacks,
    OverlayInstance, PopupConfig, ResolvedMedia, Size, VideoSource,
};
use marquee_theme::{LayoutKind, ThemeId};
use pretty_assertions::assert_eq;
use std::time::Duration;

fn no_script(url: &str) -> bool {
    let url = url.trim_start().to_ascii_lowercase();
    !(url.starts_with("javascript:") || url.starts_with("data:text"))
}

fn settings() -> EngineSettings {
    EngineSettings::default()
}

fn class_tokens(node: &Node) -> Vec<String> {
    node.elements()
        .into_iter()
        .flat_map(|e| e.classes().iter().map(str::to_string).collect::<Vec<_>>())
        .collect()
}

#[test]
fn scenario_a_youtube_video_in_live_mode() {
    let config = PopupConfig::from_json_str(
        r#"{
            "mediaType": "video",
            "mediaUrl": "https://youtu.be/dQw4w9WgXcQ",
            "themeId": "creative_mono",
            "images": ["https://cdn.example.com/ignored.png"]
        }"#,
    )
    .unwrap();

    let resolved = resolve_overlay(&config, Mode::Live, &no_script, &settings());
    assert_eq!(
        resolved.media,
        ResolvedMedia::Video(VideoSource::Embed {
            video_id: "dQw4w9WgXcQ".to_string()
        })
    );

    let tree = render_overlay(&config, Mode::Live, &no_script, &settings());
    let player = tree.find(|e| e.tag() == "iframe").unwrap();
    let src = player.get_attr("src").unwrap();
    assert!(src.contains("/embed/dQw4w9WgXcQ"));
    assert!(src.contains("autoplay=1"));
    assert!(!tree.to_html().contains("ignored.png"));
}

#[test]
fn scenario_b_unsafe_images_are_dropped() {
    let config = PopupConfig {
        images: vec![
            "javascript:alert(1)".to_string(),
            "https://cdn.example.com/a.png".to_string(),
        ],
        ..Default::default()
    };
    let resolved = resolve_overlay(&config, Mode::Live, &no_script, &settings());
    assert_eq!(resolved.media.images(), ["https://cdn.example.com/a.png"]);

    let html = render_overlay(&config, Mode::Live, &no_script, &settings()).to_html();
    assert!(!html.contains("javascript:"));
}

#[test]
fn scenario_c_banner_preview_is_compact() {
    let config = PopupConfig {
        size: Size::BannerTop,
        ..Default::default()
    };
    let preview = resolve_overlay(&config, Mode::Preview, &no_script, &settings());
    let live = resolve_overlay(&config, Mode::Live, &no_script, &settings());

    assert!(!preview.size.container.contains("fixed"));
    assert!(!preview.size.anchored);
    assert!(live.size.container.contains("fixed"));
    assert!(live.size.container.contains("top-0"));
}

#[test]
fn scenario_d_unknown_theme_uses_default_layout() {
    let config = PopupConfig::from_json_str(r#"{"themeId": "unknown_xyz"}"#).unwrap();
    let resolved = resolve_overlay(&config, Mode::Live, &no_script, &settings());
    assert_eq!(resolved.theme.id, ThemeId::Default);
    assert_eq!(resolved.theme.layout, LayoutKind::Default);

    let tree = render_overlay(&config, Mode::Live, &no_script, &settings());
    let container = tree.find_part("container").unwrap();
    assert_eq!(container.get_attr("data-marquee-layout"), Some("default"));
}

#[test]
fn scenario_e_unmount_stops_rotation() {
    let config = PopupConfig {
        images: vec![
            "https://cdn.example.com/1.png".to_string(),
            "https://cdn.example.com/2.png".to_string(),
            "https://cdn.example.com/3.png".to_string(),
        ],
        ..Default::default()
    };
    let mut instance = OverlayInstance::mount_with_seed(
        config,
        Mode::Live,
        no_script,
        settings(),
        OverlayCallbacks::new(),
        7,
    );
    instance.advance(Duration::from_secs(5));
    assert_eq!(instance.slide_index(), 1);

    instance.unmount();
    assert_eq!(instance.active_tasks(), 0);
    assert!(!instance.advance(Duration::from_secs(30)));
    assert_eq!(instance.slide_index(), 1);
}

#[test]
fn video_always_wins_over_images() {
    for theme in ThemeId::all() {
        let config = PopupConfig {
            theme_id: *theme,
            media_type: MediaType::Video,
            media_url: Some("https://cdn.example.com/promo.webm".to_string()),
            images: vec!["https://cdn.example.com/still.png".to_string()],
            ..Default::default()
        };
        let resolved = resolve_overlay(&config, Mode::Live, &no_script, &settings());
        assert!(resolved.media.is_video(), "{theme}");
        let html = render_overlay(&config, Mode::Live, &no_script, &settings()).to_html();
        assert!(!html.contains("still.png"), "{theme}");
    }
}

#[test]
fn preview_never_anchors_to_viewport() {
    for theme in ThemeId::all() {
        for size in Size::all() {
            let config = PopupConfig {
                theme_id: *theme,
                size: *size,
                ..Default::default()
            };
            let tree = render_overlay(&config, Mode::Preview, &no_script, &settings());
            assert!(
                !class_tokens(&tree).iter().any(|token| token == "fixed"),
                "{theme} / {size}"
            );
        }
    }
}

#[test]
fn rendering_is_deterministic() {
    let config = PopupConfig::from_json_str(
        r#"{
            "title": "Winter sale",
            "description": "Up to 50% off",
            "buttonText": "Shop now",
            "themeId": "holiday_winter",
            "images": ["https://cdn.example.com/1.png", "https://cdn.example.com/2.png"]
        }"#,
    )
    .unwrap();

    let a = render_overlay(&config, Mode::Live, &no_script, &settings());
    let b = render_overlay(&config, Mode::Live, &no_script, &settings());
    assert_eq!(a, b);

    let mount = |seed| {
        OverlayInstance::mount_with_seed(
            config.clone(),
            Mode::Live,
            no_script,
            settings(),
            OverlayCallbacks::new(),
            seed,
        )
    };
    assert_eq!(mount(11).render().to_html(), mount(11).render().to_html());
}

#[test]
fn images_are_capped_after_filtering() {
    let mut images = vec!["javascript:void(0)".to_string()];
    images.extend((0..10).map(|i| format!("https://cdn.example.com/{i}.png")));
    let config = PopupConfig {
        images,
        ..Default::default()
    };
    let resolved = resolve_overlay(&config, Mode::Live, &no_script, &settings());
    assert_eq!(resolved.media.image_count(), 6);
    assert_eq!(resolved.media.images()[0], "https://cdn.example.com/0.png");
}
