//! Style resolution
//!
//! Positioning, backdrop, entrance animation and shape classes for one
//! overlay. Shapes are ignored for fullscreen overlays, and the circle shape
//! is ignored for split layouts where two columns cannot fit a circle.

use crate::config::{Mode, OverlayVariant, Position, Shape, Size};
use marquee_animation::EntranceAnimation;
use marquee_core::ClassList;
use serde::Serialize;

/// Inputs of [`resolve_style`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleInput {
    pub mode: Mode,
    pub position: Position,
    pub overlay: OverlayVariant,
    pub animation: EntranceAnimation,
    pub shape: Shape,
    pub size: Size,
    pub split: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StyleClasses {
    /// Positioning stage that holds backdrop and container
    pub wrapper: ClassList,
    /// Backdrop layer
    pub backdrop: ClassList,
    /// Entrance animation class, if any
    pub animation: Option<String>,
    /// Shape of the container
    pub container_shape: ClassList,
    /// Shape of the media block
    pub media_shape: ClassList,
    /// Pointer handling of the container
    pub container_pointer: ClassList,
    /// The backdrop captures clicks (every variant but transparent)
    pub backdrop_intercepts: bool,
}

impl StyleClasses {
    /// Shape, pointer and animation classes of the container, in that order.
    pub fn container(&self) -> ClassList {
        let mut classes = self
            .container_shape
            .clone()
            .with_list(&self.container_pointer);
        if let Some(animation) = &self.animation {
            classes.add_owned(animation);
        }
        classes
    }

    /// Square-edged variant for a container pinned to a viewport edge.
    pub fn pinned(&self) -> StyleClasses {
        let mut container_pointer = ClassList::new();
        for token in self.container_pointer.iter().filter(|token| *token != "relative") {
            container_pointer.add_owned(token);
        }
        StyleClasses {
            container_shape: ClassList::from(FLAT),
            container_pointer,
            ..self.clone()
        }
    }
}

fn alignment(position: Position) -> &'static str {
    match position {
        Position::Center => "items-center justify-center",
        Position::Top => "items-start justify-center",
        Position::Bottom => "items-end justify-center",
        Position::Left => "items-center justify-start",
        Position::Right => "items-center justify-end",
        Position::TopLeft => "items-start justify-start",
        Position::TopRight => "items-start justify-end",
        Position::BottomLeft => "items-end justify-start",
        Position::BottomRight => "items-end justify-end",
    }
}

fn backdrop_variant(overlay: OverlayVariant) -> &'static str {
    match overlay {
        OverlayVariant::Transparent => "bg-transparent pointer-events-none",
        OverlayVariant::Blur => "bg-black/40 backdrop-blur-sm",
        OverlayVariant::Dark => "bg-black/70",
    }
}

const HEXAGON: &str = "[clip-path:polygon(25%_0,75%_0,100%_50%,75%_100%,25%_100%,0_50%)]";

const FLAT: &str = "rounded-none overflow-hidden";

fn container_shape(shape: Shape) -> ClassList {
    match shape {
        Shape::Default => ClassList::from("rounded-2xl overflow-hidden"),
        Shape::Square => ClassList::from(FLAT),
        Shape::Rounded => ClassList::from("rounded-[2rem] overflow-hidden"),
        Shape::Circle => ClassList::from(
            "rounded-full aspect-square overflow-hidden flex flex-col justify-center text-center p-10",
        ),
        Shape::Leaf => ClassList::from(
            "rounded-tl-[4rem] rounded-br-[4rem] rounded-tr-md rounded-bl-md overflow-hidden",
        ),
        Shape::Heart => ClassList::from(
            "[clip-path:polygon(50%_100%,0_45%,0_15%,15%_0,35%_0,50%_12%,65%_0,85%_0,100%_15%,100%_45%)] pt-12 pb-24",
        ),
        Shape::Hexagon => ClassList::from(HEXAGON).with("px-16"),
    }
}

fn media_shape(shape: Shape) -> &'static str {
    match shape {
        Shape::Default | Shape::Heart => "rounded-xl",
        Shape::Square => "rounded-none",
        Shape::Rounded => "rounded-3xl",
        Shape::Circle => "rounded-full aspect-square",
        Shape::Leaf => "rounded-tl-[3rem] rounded-br-[3rem]",
        Shape::Hexagon => HEXAGON,
    }
}

/// Shape actually applied once fullscreen and split rules are taken into
/// account. `None` means no shape treatment.
pub fn effective_shape(shape: Shape, size: Size, split: bool) -> Option<Shape> {
    if size == Size::Fullscreen {
        return None;
    }
    if split && shape == Shape::Circle {
        return Some(Shape::Default);
    }
    Some(shape)
}

pub fn resolve_style(input: &StyleInput) -> StyleClasses {
    let mut wrapper = ClassList::new();
    wrapper.add(match input.mode {
        Mode::Live => "fixed inset-0 z-50 flex p-4",
        Mode::Preview => "relative flex h-full min-h-[24rem] w-full overflow-hidden p-3",
    });
    wrapper.add(alignment(input.position));

    let transparent = input.overlay == OverlayVariant::Transparent;
    if transparent {
        wrapper.add("pointer-events-none");
    }

    let backdrop = ClassList::new()
        .with("absolute inset-0")
        .with(backdrop_variant(input.overlay));

    let (container_shape, media_shape) = match effective_shape(input.shape, input.size, input.split) {
        Some(shape) => (container_shape(shape), ClassList::from(media_shape(shape))),
        None => (ClassList::from(FLAT), ClassList::new()),
    };

    // A pinned container positions itself; `relative` would override `fixed`.
    let mut container_pointer = ClassList::new();
    if !(input.mode == Mode::Live && input.size.is_anchored()) {
        container_pointer.add("relative");
    }
    if transparent {
        container_pointer.add("pointer-events-auto");
    }

    StyleClasses {
        wrapper,
        backdrop,
        animation: input.animation.class_name(),
        container_shape,
        media_shape,
        container_pointer,
        backdrop_intercepts: !transparent,
    }
}
