//! Default card layout

use super::{parts, LayoutContext, LayoutRenderer, OverlayShell};
use marquee_core::Node;
use marquee_theme::LayoutKind;

/// Single-column card inside the shared [`OverlayShell`]
pub struct DefaultLayout;

impl LayoutRenderer for DefaultLayout {
    fn kind(&self) -> LayoutKind {
        LayoutKind::Default
    }

    fn render(&self, mut ctx: LayoutContext<'_>) -> Node {
        let card = parts::card(&ctx, "flex flex-col")
            .child_opt(ctx.effects.take())
            .child(parts::close_button(&ctx, "absolute right-3 top-3 z-20"))
            .child_opt(parts::media_region(ctx.media.take(), "relative z-10 h-48 w-full"))
            .child(parts::content("flex flex-col gap-3 p-6").children(parts::copy_stack(&ctx)));

        OverlayShell::wrap(&ctx, card)
    }
}
