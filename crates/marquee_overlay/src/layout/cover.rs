//! Cover layout
//!
//! Media fills the container as a background with a scrim and the copy is
//! anchored to the bottom. Backdrop clicks are ignored.

use super::{parts, LayoutContext, LayoutRenderer};
use marquee_core::{div, Node};
use marquee_theme::LayoutKind;

pub struct CoverLayout;

impl LayoutRenderer for CoverLayout {
    fn kind(&self) -> LayoutKind {
        LayoutKind::Cover
    }

    fn render(&self, mut ctx: LayoutContext<'_>) -> Node {
        let background = parts::media_region(ctx.media.take(), "absolute inset-0");
        let scrim = background.as_ref().map(|_| {
            div()
                .class("pointer-events-none absolute inset-0 bg-gradient-to-t from-black/80 via-black/30 to-transparent")
                .attr("aria-hidden", "true")
        });

        let copy = parts::content("flex min-h-[28rem] flex-col justify-end gap-3 p-8")
            .children(parts::copy_stack(&ctx));

        let card = parts::card(&ctx, "overflow-hidden")
            .child_opt(background)
            .child_opt(scrim)
            .child_opt(ctx.effects.take())
            .child(parts::close_button(&ctx, "absolute right-4 top-4 z-20"))
            .child(copy);

        parts::stage(&ctx)
            .child(parts::backdrop(&ctx))
            .child(card)
            .into()
    }
}
