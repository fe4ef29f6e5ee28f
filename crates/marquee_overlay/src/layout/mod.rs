//! Layout renderers
//!
//! Each [`LayoutKind`] has one [`LayoutRenderer`]. Renderers receive fully
//! resolved inputs in a [`LayoutContext`] and compose them into a node tree;
//! they decide structure, close-control placement and backdrop behavior but
//! never resolve themes or media themselves.

mod asymmetric;
mod banner_top;
mod countdown;
mod cover;
mod default;
mod feature_list;
mod fragmented;
mod monolith;
pub(crate) mod parts;
mod shell;

pub use asymmetric::AsymmetricLayout;
pub use banner_top::BannerTopLayout;
pub use countdown::{split_countdown, CountdownLayout};
pub use cover::CoverLayout;
pub use default::DefaultLayout;
pub use feature_list::{split_features, FeatureListLayout};
pub use fragmented::FragmentedLayout;
pub use monolith::MonolithLayout;
pub use shell::OverlayShell;

use crate::config::{Mode, PopupConfig};
use crate::size::SizeClasses;
use crate::style::StyleClasses;
use marquee_core::{Identifier, Node};
use marquee_theme::{LayoutKind, ThemeRecord};
use rustc_hash::FxHashMap;
use std::sync::OnceLock;

/// Resolved inputs handed to a renderer
pub struct LayoutContext<'a> {
    pub config: &'a PopupConfig,
    pub mode: Mode,
    pub theme: &'a ThemeRecord,
    pub size: &'a SizeClasses,
    pub style: &'a StyleClasses,
    /// Rendered media, absent when the theme has no media slot
    pub media: Option<Node>,
    /// Decorative effect layer
    pub effects: Option<Node>,
    /// Logo URL that passed the URL policy
    pub logo_url: Option<&'a str>,
}

/// Composes one layout kind
pub trait LayoutRenderer: Send + Sync {
    fn kind(&self) -> LayoutKind;

    fn render(&self, ctx: LayoutContext<'_>) -> Node;
}

fn builtin_renderer(kind: LayoutKind) -> Box<dyn LayoutRenderer> {
    match kind {
        LayoutKind::BannerTop => Box::new(BannerTopLayout),
        LayoutKind::Monolith => Box::new(MonolithLayout),
        LayoutKind::Asymmetric => Box::new(AsymmetricLayout),
        LayoutKind::Fragmented => Box::new(FragmentedLayout),
        LayoutKind::Cover => Box::new(CoverLayout),
        LayoutKind::FeatureList => Box::new(FeatureListLayout),
        LayoutKind::Countdown => Box::new(CountdownLayout),
        LayoutKind::Default => Box::new(DefaultLayout),
    }
}

/// Map from layout kind to renderer
pub struct LayoutRegistry {
    renderers: FxHashMap<LayoutKind, Box<dyn LayoutRenderer>>,
    fallback: DefaultLayout,
}

impl LayoutRegistry {
    /// Registry with a renderer for every layout kind.
    pub fn builtin() -> Self {
        let renderers = LayoutKind::all()
            .iter()
            .map(|kind| (*kind, builtin_renderer(*kind)))
            .collect();
        Self {
            renderers,
            fallback: DefaultLayout,
        }
    }

    /// Replace the renderer for `renderer.kind()`, returning the previous one.
    pub fn register(&mut self, renderer: Box<dyn LayoutRenderer>) -> Option<Box<dyn LayoutRenderer>> {
        let kind = renderer.kind();
        tracing::debug!(layout = %kind, "registering layout renderer");
        self.renderers.insert(kind, renderer)
    }

    /// Renderer for `kind`; the default renderer when none is registered.
    pub fn get(&self, kind: LayoutKind) -> &dyn LayoutRenderer {
        match self.renderers.get(&kind) {
            Some(renderer) => renderer.as_ref(),
            None => &self.fallback,
        }
    }

    /// Renderer selected by the theme's layout kind.
    pub fn select(&self, theme: &ThemeRecord) -> &dyn LayoutRenderer {
        self.get(theme.layout)
    }

    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }
}

impl Default for LayoutRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

static BUILTIN_REGISTRY: OnceLock<LayoutRegistry> = OnceLock::new();

/// Shared built-in registry
pub fn builtin_registry() -> &'static LayoutRegistry {
    BUILTIN_REGISTRY.get_or_init(LayoutRegistry::builtin)
}
