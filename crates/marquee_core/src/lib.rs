//! Marquee Core
//!
//! Foundational primitives shared by every Marquee crate:
//!
//! - **Identifiers**: string-keyed knobs from caller configuration parsed into
//!   closed enumerations, with unknown ids falling back to a default
//! - **Colors**: sRGB colors with CSS serialization
//! - **Class lists**: ordered CSS utility class bundles
//! - **Element tree**: a small retained tree of overlay elements that renders
//!   to HTML, carrying semantic event bindings instead of closures
//!
//! # Example
//!
//! ```rust
//! use marquee_core::element::{div, text};
//! use marquee_core::events::OverlayEvent;
//!
//! let node = div()
//!     .class("flex items-center")
//!     .on_click(OverlayEvent::Close)
//!     .child(text("Close"));
//!
//! assert!(node.to_html().contains("data-marquee-click=\"close\""));
//! ```

pub mod class;
pub mod color;
pub mod element;
pub mod events;
pub mod ident;

pub use class::ClassList;
pub use color::Color;
pub use element::{div, el, span, text, Element, Node};
pub use events::{EventKind, OverlayEvent};
pub use ident::Identifier;

#[doc(hidden)]
pub mod __private {
    pub use serde;
    pub use tracing;
}
