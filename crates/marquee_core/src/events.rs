//! Overlay event bindings
//!
//! Elements do not own closures. They carry a semantic [`OverlayEvent`]
//! per [`EventKind`]; the mounted overlay instance routes the event to the
//! caller's callbacks or its own ephemeral state.

use std::fmt::{self, Display, Formatter};

/// DOM-level trigger an element listens for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    PointerEnter,
    PointerLeave,
}

impl EventKind {
    /// HTML attribute carrying the bound event.
    pub fn attr_name(self) -> &'static str {
        match self {
            EventKind::Click => "data-marquee-click",
            EventKind::PointerEnter => "data-marquee-enter",
            EventKind::PointerLeave => "data-marquee-leave",
        }
    }
}

/// Semantic overlay event
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OverlayEvent {
    /// Explicit close control
    Close,
    /// Primary action button
    Action,
    /// Click that landed on the backdrop outside the content
    Backdrop,
    /// Pointer entered the media region (pauses rotation)
    HoverStart,
    /// Pointer left the media region (resumes rotation)
    HoverEnd,
    NextSlide,
    PrevSlide,
    GoToSlide(usize),
}

impl OverlayEvent {
    /// Decode the attribute form produced by `Display`.
    pub fn decode(raw: &str) -> Option<Self> {
        match raw {
            "close" => Some(Self::Close),
            "action" => Some(Self::Action),
            "backdrop" => Some(Self::Backdrop),
            "hover_start" => Some(Self::HoverStart),
            "hover_end" => Some(Self::HoverEnd),
            "next_slide" => Some(Self::NextSlide),
            "prev_slide" => Some(Self::PrevSlide),
            other => other
                .strip_prefix("slide:")
                .and_then(|index| index.parse().ok())
                .map(Self::GoToSlide),
        }
    }
}

impl Display for OverlayEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Close => f.write_str("close"),
            Self::Action => f.write_str("action"),
            Self::Backdrop => f.write_str("backdrop"),
            Self::HoverStart => f.write_str("hover_start"),
            Self::HoverEnd => f.write_str("hover_end"),
            Self::NextSlide => f.write_str("next_slide"),
            Self::PrevSlide => f.write_str("prev_slide"),
            Self::GoToSlide(index) => write!(f, "slide:{index}"),
        }
    }
}
