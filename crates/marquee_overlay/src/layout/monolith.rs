//! Monolith layout
//!
//! Tall single column with heavy typography. The action always comes last
//! and clicks on the backdrop are ignored; only the close control dismisses.

use super::{parts, LayoutContext, LayoutRenderer};
use marquee_core::Node;
use marquee_theme::LayoutKind;

pub struct MonolithLayout;

impl LayoutRenderer for MonolithLayout {
    fn kind(&self) -> LayoutKind {
        LayoutKind::Monolith
    }

    fn render(&self, mut ctx: LayoutContext<'_>) -> Node {
        let body = parts::content("flex flex-col gap-5 p-8")
            .child_opt(parts::header_accent(&ctx))
            .child_opt(parts::logo(&ctx))
            .child_opt(parts::subtitle(&ctx))
            .child(parts::title(&ctx))
            .child_opt(parts::media_region(ctx.media.take(), "relative h-56 w-full"))
            .child(parts::description(&ctx))
            .child_opt(parts::small_note(&ctx))
            .child(parts::action_button(&ctx).class("w-full"));

        let card = parts::card(&ctx, "flex flex-col")
            .child_opt(ctx.effects.take())
            .child(parts::close_button(&ctx, "absolute right-4 top-4 z-20"))
            .child(body);

        parts::stage(&ctx)
            .child(parts::backdrop(&ctx))
            .child(card)
            .into()
    }
}
