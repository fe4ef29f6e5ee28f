//! Banner layout
//!
//! Full-width strip with inline copy, action and close control. There is no
//! backdrop; the page below stays interactive.
//!
//! Live mode always pins the strip to a viewport edge: the bottom edge when
//! the size asks for it, otherwise the top. Preview keeps the resolved
//! compact sizing.

use super::{parts, LayoutContext, LayoutRenderer};
use crate::config::{Mode, Size};
use crate::size::{resolve_size, SizeClasses};
use crate::style::StyleClasses;
use marquee_core::{div, Node};
use marquee_theme::{ButtonPosition, LayoutKind};

fn strip_classes(ctx: &LayoutContext<'_>) -> (SizeClasses, StyleClasses) {
    match ctx.mode {
        Mode::Live => {
            let edge = match ctx.config.size {
                Size::BannerBottom => Size::BannerBottom,
                _ => Size::BannerTop,
            };
            (resolve_size(edge, Mode::Live, false), ctx.style.pinned())
        }
        Mode::Preview => (ctx.size.clone(), ctx.style.clone()),
    }
}

pub struct BannerTopLayout;

impl LayoutRenderer for BannerTopLayout {
    fn kind(&self) -> LayoutKind {
        LayoutKind::BannerTop
    }

    fn render(&self, ctx: LayoutContext<'_>) -> Node {
        let (size, style) = strip_classes(&ctx);
        let mut ctx = LayoutContext {
            size: &size,
            style: &style,
            ..ctx
        };

        let copy = div()
            .class("flex min-w-0 flex-1 flex-col gap-0.5")
            .child_opt(parts::subtitle(&ctx))
            .child(parts::title(&ctx).class("truncate"))
            .child(parts::description(&ctx).class("line-clamp-2"))
            .child_opt(parts::small_note(&ctx));

        let leading_button = ctx.theme.button_position == ButtonPosition::Top;
        let mut row = parts::content("flex w-full items-center gap-4 px-4 py-3")
            .child_opt(parts::header_accent(&ctx))
            .child_opt(parts::logo(&ctx))
            .child_opt(parts::media_region(
                ctx.media.take(),
                "h-12 w-12 shrink-0 overflow-hidden rounded",
            ));
        if leading_button {
            row = row.child(parts::action_button(&ctx));
        }
        row = row.child(copy);
        if !leading_button {
            row = row.child(parts::action_button(&ctx));
        }
        row = row.child(parts::close_button(&ctx, "shrink-0"));

        parts::card(&ctx, "z-50 overflow-hidden")
            .child_opt(ctx.effects.take())
            .child(row)
            .into()
    }
}
