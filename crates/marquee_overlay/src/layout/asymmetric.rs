//! Asymmetric split layout
//!
//! Two columns: media on the wide side, copy on the narrow side. The close
//! control sits over the media's top-left corner and the backdrop dismisses.

use super::{parts, LayoutContext, LayoutRenderer};
use marquee_core::Node;
use marquee_theme::LayoutKind;

pub struct AsymmetricLayout;

impl LayoutRenderer for AsymmetricLayout {
    fn kind(&self) -> LayoutKind {
        LayoutKind::Asymmetric
    }

    fn render(&self, mut ctx: LayoutContext<'_>) -> Node {
        let media = parts::media_region(ctx.media.take(), "relative z-10 min-h-[16rem] h-full w-full");
        let columns = if media.is_some() {
            "grid md:grid-cols-[3fr_2fr]"
        } else {
            "grid"
        };

        let copy = parts::content("flex flex-col justify-center gap-4 p-8")
            .children(parts::copy_stack(&ctx));

        let card = parts::card(&ctx, columns)
            .child_opt(ctx.effects.take())
            .child(parts::close_button(&ctx, "absolute left-3 top-3 z-20"))
            .child_opt(media)
            .child(copy)
            .stop_propagation();

        parts::dismissing_stage(&ctx)
            .child(parts::backdrop(&ctx))
            .child(card)
            .into()
    }
}
