//! Feature list layout
//!
//! The description is split into bullet lines (newlines, `;` or `•`).

use super::{parts, LayoutContext, LayoutRenderer};
use marquee_core::{el, span, text, Element, Node};
use marquee_theme::{ButtonPosition, LayoutKind};

/// Split a description into trimmed, non-empty feature lines.
pub fn split_features(description: &str) -> Vec<&str> {
    description
        .split(['\n', ';', '\u{2022}'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

pub struct FeatureListLayout;

fn feature_list(ctx: &LayoutContext<'_>) -> Element {
    let features = split_features(&ctx.config.description);
    if features.is_empty() {
        return parts::description(ctx);
    }
    let items = features.into_iter().map(|feature| {
        el("li")
            .class("flex items-start gap-2")
            .child(
                span()
                    .class("mt-0.5 text-[var(--marquee-accent)]")
                    .attr("aria-hidden", "true")
                    .child(text("\u{2713}")),
            )
            .child(span().child(text(feature)))
    });
    el("ul")
        .class("flex flex-col gap-2")
        .class(ctx.theme.classes.description)
        .attr("data-marquee-part", "description")
        .children(items)
}

impl LayoutRenderer for FeatureListLayout {
    fn kind(&self) -> LayoutKind {
        LayoutKind::FeatureList
    }

    fn render(&self, mut ctx: LayoutContext<'_>) -> Node {
        let button_first = ctx.theme.button_position == ButtonPosition::Top;
        let mut body = parts::content("flex flex-col gap-4 p-6")
            .child_opt(parts::header_accent(&ctx))
            .child_opt(parts::logo(&ctx))
            .child_opt(parts::subtitle(&ctx))
            .child(parts::title(&ctx));
        if button_first {
            body = body.child(parts::action_button(&ctx));
        }
        body = body.child(feature_list(&ctx));
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
