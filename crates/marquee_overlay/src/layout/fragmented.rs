//! Fragmented layout
//!
//! Copy blocks scattered across a canvas with slight rotations. The close
//! control sits on the canvas at an offset; the backdrop ignores clicks.

use super::{parts, LayoutContext, LayoutRenderer};
use marquee_core::Node;
use marquee_theme::{ButtonPosition, LayoutKind};

pub struct FragmentedLayout;

impl LayoutRenderer for FragmentedLayout {
    fn kind(&self) -> LayoutKind {
        LayoutKind::Fragmented
    }

    fn render(&self, mut ctx: LayoutContext<'_>) -> Node {
        let button_placement = match ctx.theme.button_position {
            ButtonPosition::Top => "absolute left-6 top-1/2 -rotate-1",
            ButtonPosition::Bottom => "absolute bottom-6 left-6 -rotate-1",
        };

        let canvas = parts::content("min-h-[26rem] w-full p-6")
            .child_opt(parts::header_accent(&ctx).map(|accent| accent.class("absolute left-6 top-2")))
            .child_opt(parts::media_region(
                ctx.media.take(),
                "absolute right-0 top-0 h-2/3 w-2/3 rotate-2 overflow-hidden",
            ))
            .child_opt(parts::logo(&ctx).map(|logo| logo.class("absolute bottom-6 right-6")))
            .child_opt(parts::subtitle(&ctx).map(|subtitle| subtitle.class("absolute left-6 top-6 -rotate-3")))
            .child(parts::title(&ctx).class("relative mt-16 max-w-[70%] -rotate-2"))
            .child(parts::description(&ctx).class("absolute bottom-24 right-6 max-w-[55%] rotate-1"))
            .child(parts::action_button(&ctx).class(button_placement))
            .child_opt(parts::small_note(&ctx).map(|note| note.class("absolute bottom-2 right-6")))
            .child(parts::close_button(&ctx, "absolute left-[62%] top-[38%] z-20"));

        let card = parts::card(&ctx, "overflow-hidden")
            .child_opt(ctx.effects.take())
            .child(canvas);

        parts::stage(&ctx)
            .child(parts::backdrop(&ctx))
            .child(card)
            .into()
    }
}
