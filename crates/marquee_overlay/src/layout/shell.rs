//! Shared overlay shell
//!
//! Stage, backdrop and outside-click dismissal around a container. A click
//! that reaches the stage outside the container raises
//! `OverlayEvent::Backdrop` unless the overlay is transparent.

use super::{parts, LayoutContext};
use marquee_core::{Element, Node};

pub struct OverlayShell;

impl OverlayShell {
    pub fn wrap(ctx: &LayoutContext<'_>, container: Element) -> Node {
        parts::dismissing_stage(ctx)
            .child(parts::backdrop(ctx))
            .child(container.stop_propagation())
            .into()
    }
}
