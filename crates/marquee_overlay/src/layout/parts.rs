//! Building blocks shared by the layout renderers

use super::LayoutContext;
use crate::config::{CloseButtonStyle, FontFamily, FontSize, Mode};
use marquee_core::{div, el, span, text, Element, Node, OverlayEvent};
use marquee_theme::ButtonPosition;

fn font_family(family: FontFamily) -> Option<&'static str> {
    match family {
        FontFamily::Theme => None,
        FontFamily::Sans => Some("font-sans"),
        FontFamily::Serif => Some("font-serif"),
        FontFamily::Mono => Some("font-mono"),
        FontFamily::Display => Some("font-[Oswald,Impact,sans-serif] tracking-tight"),
    }
}

fn font_size(size: FontSize) -> Option<&'static str> {
    match size {
        FontSize::Small => Some("text-sm"),
        FontSize::Medium => None,
        FontSize::Large => Some("text-lg"),
    }
}

fn close_style(style: CloseButtonStyle) -> (&'static str, &'static str) {
    match style {
        CloseButtonStyle::Default => (
            "flex h-8 w-8 items-center justify-center rounded-full bg-black/5 text-lg leading-none",
            "\u{00D7}",
        ),
        CloseButtonStyle::Minimal => ("text-xl leading-none", "\u{00D7}"),
        CloseButtonStyle::Filled => (
            "flex h-9 w-9 items-center justify-center rounded-full bg-[var(--marquee-text)] text-[var(--marquee-bg)] shadow",
            "\u{00D7}",
        ),
        CloseButtonStyle::Text => ("text-xs font-semibold uppercase tracking-wide underline", "Close"),
    }
}

/// Positioning stage holding backdrop and container.
pub(crate) fn stage(ctx: &LayoutContext<'_>) -> Element {
    div()
        .class_list(&ctx.style.wrapper)
        .attr("data-marquee-part", "stage")
}

/// Stage that raises [`OverlayEvent::Backdrop`] for clicks outside the
/// container, unless the overlay is transparent.
pub(crate) fn dismissing_stage(ctx: &LayoutContext<'_>) -> Element {
    let stage = stage(ctx);
    if ctx.style.backdrop_intercepts {
        stage.on_click(OverlayEvent::Backdrop)
    } else {
        stage
    }
}

/// Backdrop layer, visual only; click handling is bound by the renderer.
pub(crate) fn backdrop(ctx: &LayoutContext<'_>) -> Element {
    div()
        .class_list(&ctx.style.backdrop)
        .attr("aria-hidden", "true")
        .attr("data-marquee-part", "backdrop")
}

/// Themed container carrying sizing, shape, palette variables and
/// typography. `layout_classes` are the renderer's structural classes.
pub(crate) fn card(ctx: &LayoutContext<'_>, layout_classes: &'static str) -> Element {
    let mut card = div()
        .class_list(&ctx.size.container)
        .class_list(&ctx.style.container())
        .class(ctx.theme.classes.container)
        .class(layout_classes)
        .attr("role", "dialog")
        .attr("data-marquee-part", "container")
        .attr("data-marquee-layout", ctx.theme.layout.to_string())
        .attr("data-marquee-theme", ctx.theme.id.to_string());
    if ctx.mode == Mode::Live {
        card = card.attr("aria-modal", "true");
    }
    if let Some(family) = font_family(ctx.config.font_family) {
        card = card.class(family);
    }
    if let Some(size) = font_size(ctx.config.font_size) {
        card = card.class(size);
    }
    for (name, value) in ctx.theme.palette.css_variables() {
        card = card.style(name, value);
    }
    card
}

/// Interactive content layer above the effects.
pub(crate) fn content(layout_classes: &'static str) -> Element {
    div()
        .class("relative z-10")
        .class(layout_classes)
        .attr("data-marquee-part", "content")
}

pub(crate) fn title(ctx: &LayoutContext<'_>) -> Element {
    el("h2")
        .class(ctx.theme.classes.title)
        .attr("data-marquee-part", "title")
        .child(text(ctx.config.title.as_str()))
}

pub(crate) fn subtitle(ctx: &LayoutContext<'_>) -> Option<Element> {
    ctx.config.subtitle_text().map(|subtitle| {
        el("p")
            .class(ctx.theme.classes.subtitle)
            .attr("data-marquee-part", "subtitle")
            .child(text(subtitle))
    })
}

pub(crate) fn description(ctx: &LayoutContext<'_>) -> Element {
    el("p")
        .class(ctx.theme.classes.description)
        .attr("data-marquee-part", "description")
        .child(text(ctx.config.description.as_str()))
}

pub(crate) fn small_note(ctx: &LayoutContext<'_>) -> Option<Element> {
    ctx.config.small_note_text().map(|note| {
        el("p")
            .class(ctx.theme.classes.small_note)
            .attr("data-marquee-part", "small-note")
            .child(text(note))
    })
}

pub(crate) fn action_button(ctx: &LayoutContext<'_>) -> Element {
    el("button")
        .class(ctx.theme.classes.button)
        .attr("type", "button")
        .attr("data-marquee-part", "button")
        .on_click(OverlayEvent::Action)
        .child(text(ctx.config.button_text.as_str()))
}

/// Close control; `placement` positions it within the renderer's structure.
pub(crate) fn close_button(ctx: &LayoutContext<'_>, placement: &'static str) -> Element {
    let (classes, label) = close_style(ctx.config.close_button_style);
    el("button")
        .class(classes)
        .class(ctx.theme.classes.close)
        .class(placement)
        .attr("type", "button")
        .attr("aria-label", "Close")
        .attr("data-marquee-part", "close")
        .on_click(OverlayEvent::Close)
        .child(text(label))
}

pub(crate) fn header_accent(ctx: &LayoutContext<'_>) -> Option<Element> {
    ctx.theme.header_accent.classes().map(|classes| {
        span()
            .class(classes)
            .attr("aria-hidden", "true")
            .attr("data-marquee-part", "accent")
    })
}

pub(crate) fn logo(ctx: &LayoutContext<'_>) -> Option<Element> {
    ctx.logo_url.map(|url| {
        el("img")
            .class("h-8 w-auto object-contain")
            .attr("src", url)
            .attr("alt", "")
            .attr("data-marquee-part", "logo")
    })
}

/// Header, copy and action in reading order, honoring the theme's button
/// position.
pub(crate) fn copy_stack(ctx: &LayoutContext<'_>) -> Vec<Node> {
    let button = ctx.theme.button_position;
    let mut nodes: Vec<Node> = Vec::with_capacity(7);
    nodes.extend(header_accent(ctx).map(Node::from));
    nodes.extend(logo(ctx).map(Node::from));
    nodes.extend(subtitle(ctx).map(Node::from));
    nodes.push(title(ctx).into());
    if button == ButtonPosition::Top {
        nodes.push(action_button(ctx).into());
    }
    nodes.push(description(ctx).into());
    if button == ButtonPosition::Bottom {
        nodes.push(action_button(ctx).into());
    }
    nodes.extend(small_note(ctx).map(Node::from));
    nodes
}

/// Media region wrapper, or nothing when the theme has no media slot.
pub(crate) fn media_region(media: Option<Node>, classes: &'static str) -> Option<Element> {
    media.map(|media| div().class(classes).child(media))
}
