//! Marquee Animation System
//!
//! Entrance keyframes and mount-scoped task scheduling.
//!
//! # Features
//!
//! - **Entrance presets**: fade, slide, zoom, pop and flip keyframes that
//!   serialize to CSS
//! - **Task scheduler**: interval tasks owned by one overlay instance,
//!   cancelled together on unmount

pub mod easing;
pub mod keyframe;
pub mod presets;
pub mod scheduler;

pub use easing::Easing;
pub use keyframe::{KeyframeProperties, MultiKeyframe, MultiKeyframeAnimation};
pub use presets::{AnimationPreset, EntranceAnimation};
pub use scheduler::{FiredTasks, TaskId, TaskScheduler};
