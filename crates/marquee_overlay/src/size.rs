//! Size resolution
//!
//! Maps the size knob and mode to container sizing classes. Live mode pins
//! anchored sizes (banners, sidebars, fullscreen) to the viewport; preview
//! mode keeps every size compact and never uses viewport positioning.

use crate::config::{Mode, Size};
use marquee_core::ClassList;
use serde::Serialize;

/// Extra width for two-column (split) layouts
const SPLIT_WIDTH: &str = "w-full md:max-w-3xl";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SizeClasses {
    pub container: ClassList,
    /// The container is pinned to a viewport edge
    pub anchored: bool,
}

fn live_classes(size: Size) -> &'static str {
    match size {
        Size::Small => "w-full max-w-sm",
        Size::Medium => "w-full max-w-md",
        Size::Large => "w-full max-w-lg",
        Size::ExtraLarge => "w-full max-w-2xl",
        Size::BannerTop => "fixed inset-x-0 top-0 w-full rounded-none",
        Size::BannerBottom => "fixed inset-x-0 bottom-0 w-full rounded-none",
        Size::SidebarLeft => "fixed inset-y-0 left-0 h-full w-full max-w-sm rounded-none",
        Size::SidebarRight => "fixed inset-y-0 right-0 h-full w-full max-w-sm rounded-none",
        Size::Fullscreen => "fixed inset-0 h-full w-full rounded-none",
    }
}

fn preview_classes(size: Size) -> &'static str {
    match size {
        Size::Small => "w-full max-w-xs",
        Size::Medium => "w-full max-w-sm",
        Size::Large => "w-full max-w-md",
        Size::ExtraLarge => "w-full max-w-lg",
        Size::BannerTop | Size::BannerBottom => "w-full",
        Size::SidebarLeft | Size::SidebarRight => "h-full w-full max-w-[16rem]",
        Size::Fullscreen => "h-full w-full",
    }
}

/// Sizing classes for `size` in `mode`.
///
/// `split` adds the two-column width constraint unless the size is
/// fullscreen.
pub fn resolve_size(size: Size, mode: Mode, split: bool) -> SizeClasses {
    let mut container = ClassList::new();
    container.add(match mode {
        Mode::Live => live_classes(size),
        Mode::Preview => preview_classes(size),
    });
    if split && size != Size::Fullscreen {
        container.add(SPLIT_WIDTH);
    }
    SizeClasses {
        container,
        anchored: mode == Mode::Live && size.is_anchored(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_core::Identifier;

    #[test]
    fn test_preview_never_uses_viewport_positioning() {
        for size in Size::all() {
            for split in [false, true] {
                let classes = resolve_size(*size, Mode::Preview, split);
                assert!(!classes.container.contains("fixed"), "{size}");
                assert!(!classes.anchored);
            }
        }
    }

    #[test]
    fn test_live_anchored_sizes_pin_to_their_edge() {
        let edges = [
            (Size::BannerTop, ["top-0", "inset-x-0"]),
            (Size::BannerBottom, ["bottom-0", "inset-x-0"]),
            (Size::SidebarLeft, ["left-0", "inset-y-0"]),
            (Size::SidebarRight, ["right-0", "inset-y-0"]),
            (Size::Fullscreen, ["inset-0", "h-full"]),
        ];
        for (size, tokens) in edges {
            let classes = resolve_size(size, Mode::Live, false);
            assert!(classes.anchored, "{size}");
            assert!(classes.container.contains("fixed"), "{size}");
            assert!(classes.container.contains("rounded-none"), "{size}");
            for token in tokens {
                assert!(classes.container.contains(token), "{size} lacks {token}");
            }
        }

        let card = resolve_size(Size::Medium, Mode::Live, false);
        assert!(!card.anchored);
        assert!(card.container.contains("max-w-md"));
    }

    #[test]
    fn test_split_widens_except_fullscreen() {
        assert!(resolve_size(Size::Medium, Mode::Live, true)
            .container
            .contains("md:max-w-3xl"));
        assert!(!resolve_size(Size::Fullscreen, Mode::Live, true)
            .container
            .contains("md:max-w-3xl"));
    }
}
