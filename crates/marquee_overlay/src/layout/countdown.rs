//! Countdown layout
//!
//! Shows the configured remaining time as hour, minute and second boxes.
//! The value is rendered as given; it does not tick.

use super::{parts, LayoutContext, LayoutRenderer};
use marquee_core::{div, span, text, Element, Node};
use marquee_theme::{ButtonPosition, LayoutKind};

/// Split seconds into (hours, minutes, seconds).
pub fn split_countdown(total_seconds: u32) -> (u32, u32, u32) {
    (
        total_seconds / 3_600,
        (total_seconds % 3_600) / 60,
        total_seconds % 60,
    )
}

fn unit(value: u32, label: &'static str) -> Element {
    div()
        .class("flex min-w-[4rem] flex-col items-center rounded-lg bg-[var(--marquee-surface)] px-3 py-2")
        .child(
            span()
                .class("font-mono text-3xl font-black tabular-nums text-[var(--marquee-accent)]")
                .child(text(format!("{value:02}"))),
        )
        .child(
            span()
                .class("text-[10px] uppercase tracking-widest text-[var(--marquee-muted)]")
                .child(text(label)),
        )
}

fn timer(seconds: u32) -> Element {
    let (h, m, s) = split_countdown(seconds);
    div()
        .class("flex gap-2")
        .attr("role", "timer")
        .attr("data-marquee-part", "countdown")
        .attr("data-marquee-seconds", seconds.to_string())
        .child(unit(h, "HH"))
        .child(unit(m, "MM"))
        .child(unit(s, "SS"))
}

pub struct CountdownLayout;

impl LayoutRenderer for CountdownLayout {
    fn kind(&self) -> LayoutKind {
        LayoutKind::Countdown
    }

    fn render(&self, mut ctx: LayoutContext<'_>) -> Node {
        let button_first = ctx.theme.button_position == ButtonPosition::Top;
        let mut body = parts::content("flex flex-col items-center gap-4 p-6 text-center")
            .child_opt(parts::header_accent(&ctx))
            .child_opt(parts::logo(&ctx))
            .child_opt(parts::subtitle(&ctx))
            .child(parts::title(&ctx))
            .child(timer(ctx.config.countdown_seconds.unwrap_or(0)));
        if button_first {
            body = body.child(parts::action_button(&ctx));
        }
        body = body.child(parts::description(&ctx));
        if !button_first {
            body = body.child(parts::action_button(&ctx));
        }
        body = body.child_opt(parts::small_note(&ctx));

        let card = parts::card(&ctx, "flex flex-col")
            .child_opt(ctx.effects.take())
            .child(parts::close_button(&ctx, "absolute right-3 top-3 z-20"))
            .child_opt(parts::media_region(ctx.media.take(), "relative z-10 h-40 w-full"))
            .child(body)
            .stop_propagation();

        parts::dismissing_stage(&ctx)
            .child(parts::backdrop(&ctx))
            .child(card)
            .into()
    }
}
