//! Marquee Overlay Engine
//!
//! Turns a declarative [`PopupConfig`] into a rendered promotional overlay.
//!
//! # Pipeline
//!
//! 1. The theme catalog resolves the config's theme to a [`ThemeRecord`]
//!    (palette, layout kind, effect, media capability).
//! 2. Size and style resolvers derive container sizing, positioning,
//!    backdrop, entrance animation and shape classes.
//! 3. The media resolver filters URLs through the host's [`UrlPolicy`] and
//!    classifies the media as one video or an image set.
//! 4. The layout renderer for the theme's layout kind composes everything
//!    into a [`Node`] tree with semantic event bindings.
//!
//! Rendering never fails. Unknown identifiers resolve to defaults, unsafe
//! URLs are dropped and missing media becomes a placeholder.
//!
//! # Example
//!
//! ```rust
//! use marquee_overlay::{render_overlay, EngineSettings, Mode, PopupConfig};
//!
//! let config = PopupConfig::from_json_str(r#"{
//!     "title": "Breaking: rates cut",
//!     "buttonText": "Read more",
//!     "themeId": "breaking_news",
//!     "size": "banner_top"
//! }"#).unwrap();
//!
//! let https_only = |url: &str| url.starts_with("https://");
//! let tree = render_overlay(&config, Mode::Preview, &https_only, &EngineSettings::default());
//!
//! let container = tree.find_part("container").unwrap();
//! assert_eq!(container.get_attr("data-marquee-layout"), Some("banner_top"));
//! assert!(tree.to_html().contains("Read more"));
//! ```
//!
//! Mounted overlays with timers and callbacks live in [`OverlayInstance`].
//!
//! [`ThemeRecord`]: marquee_theme::ThemeRecord
//! [`Node`]: marquee_core::Node

pub mod config;
pub mod effects;
pub mod error;
pub mod instance;
pub mod layout;
pub mod media;
pub mod pipeline;
pub mod policy;
pub mod settings;
pub mod size;
pub mod style;

pub use config::{
    CloseButtonStyle, FontFamily, FontSize, ImagePresentation, MediaType, Mode, OverlayVariant,
    PopupConfig, Position, Shape, Size,
};
pub use effects::{render_effects, twinkle_interval, Particle, ParticleField};
pub use error::{ConfigError, Result};
pub use instance::{OverlayCallbacks, OverlayInstance};
pub use layout::{builtin_registry, LayoutContext, LayoutRegistry, LayoutRenderer, OverlayShell};
pub use media::{extract_video_id, render_media, resolve_media, ImageMode, ResolvedMedia, VideoSource};
pub use pipeline::{compose, render_document, render_overlay, resolve_overlay, RenderState, ResolvedOverlay};
pub use policy::{AllowAll, UrlPolicy};
pub use settings::EngineSettings;
pub use size::{resolve_size, SizeClasses};
pub use style::{resolve_style, StyleClasses, StyleInput};

pub use marquee_core::{Node, OverlayEvent};
pub use marquee_theme::ThemeId;
