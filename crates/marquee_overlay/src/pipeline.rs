//! Resolution and composition pipeline
//!
//! [`resolve_overlay`] runs every resolver over a config; [`compose`] hands
//! the result to the layout renderer selected by the theme. Both are pure:
//! the same config, mode and render state always produce the same tree.

use crate::config::{Mode, PopupConfig};
use crate::effects::{render_effects, ParticleField, EFFECT_KEYFRAMES};
use crate::layout::{builtin_registry, LayoutContext, LayoutRegistry};
use crate::media::{render_media, resolve_media, ResolvedMedia};
use crate::policy::UrlPolicy;
use crate::settings::EngineSettings;
use crate::size::{resolve_size, SizeClasses};
use crate::style::{resolve_style, StyleClasses, StyleInput};
use marquee_animation::EntranceAnimation;
use marquee_core::{el, text, Node};
use marquee_theme::{resolve_media_theme, resolve_theme, MediaThemeClasses, ThemeRecord};
use serde::Serialize;

/// Every resolver's output for one config
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResolvedOverlay {
    pub mode: Mode,
    pub theme: ThemeRecord,
    pub media_classes: MediaThemeClasses,
    pub size: SizeClasses,
    pub style: StyleClasses,
    pub animation: EntranceAnimation,
    pub media: ResolvedMedia,
    pub logo_url: Option<String>,
    pub effects_enabled: bool,
}

impl ResolvedOverlay {
    /// CSS the rendered tree relies on beyond utility classes.
    pub fn stylesheet(&self) -> String {
        let mut css = self.animation.stylesheet().unwrap_or_default();
        if self.effects_enabled {
            css.push_str(EFFECT_KEYFRAMES);
        }
        css
    }
}

pub fn resolve_overlay<P>(
    config: &PopupConfig,
    mode: Mode,
    policy: &P,
    settings: &EngineSettings,
) -> ResolvedOverlay
where
    P: UrlPolicy + ?Sized,
{
    let theme = resolve_theme(config.theme_id);
    let split = theme.is_split();

    let size = resolve_size(config.size, mode, split);
    let style = resolve_style(&StyleInput {
        mode,
        position: config.position,
        overlay: config.overlay,
        animation: config.animation,
        shape: config.shape,
        size: config.size,
        split,
    });
    let media_classes = resolve_media_theme(&theme, &config.media_theme_options());
    let media = resolve_media(config, policy, settings);
    let logo_url = config
        .logo_url
        .as_deref()
        .filter(|url| !url.trim().is_empty() && policy.is_safe(url))
        .map(str::to_string);

    tracing::trace!(
        theme = %theme.id,
        layout = %theme.layout,
        %mode,
        images = media.image_count(),
        video = media.is_video(),
        "overlay resolved"
    );

    ResolvedOverlay {
        mode,
        theme,
        media_classes,
        size,
        style,
        animation: config.animation,
        media,
        logo_url,
        effects_enabled: settings.effects_enabled,
    }
}

/// Ephemeral per-instance inputs of a render
#[derive(Clone, Copy, Debug, Default)]
pub struct RenderState<'a> {
    pub slide_index: usize,
    /// Particle placement; effects render without particles when absent
    pub particles: Option<&'a ParticleField>,
}

pub fn compose(
    config: &PopupConfig,
    resolved: &ResolvedOverlay,
    registry: &LayoutRegistry,
    state: RenderState<'_>,
) -> Node {
    let media = resolved.theme.has_media_slot.then(|| {
        render_media(
            &resolved.media,
            resolved.mode,
            &resolved.media_classes,
            &resolved.style.media_shape,
            state.slide_index,
        )
    });

    let effect = resolved.theme.special_effect;
    let effects = if resolved.effects_enabled {
        match state.particles {
            Some(field) => render_effects(effect, field),
            None => render_effects(effect, &ParticleField::empty(effect)),
        }
    } else {
        None
    };

    let ctx = LayoutContext {
        config,
        mode: resolved.mode,
        theme: &resolved.theme,
        size: &resolved.size,
        style: &resolved.style,
        media,
        effects,
        logo_url: resolved.logo_url.as_deref(),
    };
    registry.select(&resolved.theme).render(ctx)
}

/// Resolve and compose with the built-in layouts and no instance state.
pub fn render_overlay<P>(config: &PopupConfig, mode: Mode, policy: &P, settings: &EngineSettings) -> Node
where
    P: UrlPolicy + ?Sized,
{
    let resolved = resolve_overlay(config, mode, policy, settings);
    compose(config, &resolved, builtin_registry(), RenderState::default())
}

/// Standalone HTML page around a rendered overlay.
pub fn render_document(title: &str, resolved: &ResolvedOverlay, overlay: &Node) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         {}\n<script src=\"https://cdn.tailwindcss.com\"></script>\n<style>{}</style>\n\
         </head>\n<body class=\"min-h-screen bg-slate-100\">\n{}\n</body>\n</html>\n",
        el("title").child(text(title)).to_html(),
        resolved.stylesheet(),
        overlay.to_html()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::AllowAll;
    use marquee_theme::{LayoutKind, SpecialEffect, ThemeId};

    #[test]
    fn test_logo_goes_through_policy() {
        let config = PopupConfig {
            logo_url: Some("javascript:alert(1)".into()),
            ..Default::default()
        };
        let https = |url: &str| url.starts_with("https://");
        let resolved = resolve_overlay(&config, Mode::Live, &https, &EngineSettings::default());
        assert_eq!(resolved.logo_url, None);

        let node = compose(&config, &resolved, builtin_registry(), RenderState::default());
        assert!(node.find_part("logo").is_none());
    }

    #[test]
    fn test_effects_can_be_disabled() {
        let config = PopupConfig {
            theme_id: ThemeId::HolidayWinter,
            ..Default::default()
        };
        let settings = EngineSettings {
            effects_enabled: false,
            ..Default::default()
        };
        let resolved = resolve_overlay(&config, Mode::Live, &AllowAll, &settings);
        assert_eq!(resolved.theme.special_effect, SpecialEffect::Snow);
        let node = compose(&config, &resolved, builtin_registry(), RenderState::default());
        assert!(node.find_part("effects").is_none());
        assert!(!resolved.stylesheet().contains("marquee-fall"));
    }

    #[test]
    fn test_split_theme_widens_container() {
        let config = PopupConfig {
            theme_id: ThemeId::TechGrid,
            ..Default::default()
        };
        let resolved = resolve_overlay(&config, Mode::Live, &AllowAll, &EngineSettings::default());
        assert_eq!(resolved.theme.layout, LayoutKind::Asymmetric);
        assert!(resolved.size.container.contains("md:max-w-3xl"));
    }

    #[test]
    fn test_document_contains_overlay_and_styles() {
        let config = PopupConfig {
            title: "Spring <sale>".into(),
            ..Default::default()
        };
        let resolved = resolve_overlay(&config, Mode::Preview, &AllowAll, &EngineSettings::default());
        let node = compose(&config, &resolved, builtin_registry(), RenderState::default());
        let html = render_document(&config.title, &resolved, &node);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Spring &lt;sale&gt;</title>"));
        assert!(html.contains("@keyframes marquee-fade"));
        assert!(html.contains("data-marquee-part=\"container\""));
    }
}
