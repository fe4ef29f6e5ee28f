//! Entrance animation presets
//!
//! Pre-built keyframe animations for overlay entrances, plus the
//! [`EntranceAnimation`] knob that selects one of them by id.

use crate::easing::Easing;
use crate::keyframe::{KeyframeProperties, MultiKeyframeAnimation};
use marquee_core::{identifier_enum, Identifier};

/// Default entrance duration
pub const ENTRANCE_DURATION_MS: u32 = 320;

/// Slide distance for slide entrances
const SLIDE_DISTANCE: f32 = 32.0;

/// Pre-built animation presets for common patterns
pub struct AnimationPreset;

impl AnimationPreset {
    /// Fade in from transparent to opaque
    pub fn fade_in(duration_ms: u32) -> MultiKeyframeAnimation {
        MultiKeyframeAnimation::new(duration_ms)
            .keyframe(0.0, KeyframeProperties::opacity(0.0), Easing::Linear)
            .keyframe(1.0, KeyframeProperties::opacity(1.0), Easing::EaseOut)
    }

    /// Scale in from small to full size with fade
    pub fn scale_in(duration_ms: u32) -> MultiKeyframeAnimation {
        MultiKeyframeAnimation::new(duration_ms)
            .keyframe(
                0.0,
                KeyframeProperties::default()
                    .with_scale(0.9)
                    .with_opacity(0.0),
                Easing::Linear,
            )
            .keyframe(
                1.0,
                KeyframeProperties::default()
                    .with_scale(1.0)
                    .with_opacity(1.0),
                Easing::EaseOutCubic,
            )
    }

    /// Pop in with slight overshoot
    pub fn pop_in(duration_ms: u32) -> MultiKeyframeAnimation {
        MultiKeyframeAnimation::new(duration_ms)
            .keyframe(
                0.0,
                KeyframeProperties::default()
                    .with_scale(0.5)
                    .with_opacity(0.0),
                Easing::Linear,
            )
            .keyframe(
                0.7,
                KeyframeProperties::default()
                    .with_scale(1.05)
                    .with_opacity(1.0),
                Easing::EaseOut,
            )
            .keyframe(
                1.0,
                KeyframeProperties::default()
                    .with_scale(1.0)
                    .with_opacity(1.0),
                Easing::EaseInOut,
            )
    }

    /// Slide in from an offset (`dx`, `dy`) with fade
    pub fn slide_in(duration_ms: u32, dx: f32, dy: f32) -> MultiKeyframeAnimation {
        MultiKeyframeAnimation::new(duration_ms)
            .keyframe(
                0.0,
                KeyframeProperties::default()
                    .with_translate(dx, dy)
                    .with_opacity(0.0),
                Easing::Linear,
            )
            .keyframe(
                1.0,
                KeyframeProperties::default()
                    .with_translate(0.0, 0.0)
                    .with_opacity(1.0),
                Easing::EaseOutCubic,
            )
    }

    /// Flip down around the X axis
    pub fn flip_in(duration_ms: u32) -> MultiKeyframeAnimation {
        MultiKeyframeAnimation::new(duration_ms)
            .keyframe(
                0.0,
                KeyframeProperties::default()
                    .with_rotate_x(-80.0)
                    .with_opacity(0.0),
                Easing::Linear,
            )
            .keyframe(
                1.0,
                KeyframeProperties::default()
                    .with_rotate_x(0.0)
                    .with_opacity(1.0),
                Easing::EaseOutBack,
            )
    }
}

identifier_enum! {
    /// Entrance animation of the overlay container
    pub enum EntranceAnimation: "animation" {
        None => "none",
        Fade => "fade",
        SlideUp => "slide_up",
        SlideDown => "slide_down",
        SlideLeft => "slide_left",
        SlideRight => "slide_right",
        Zoom => "zoom",
        Pop => "pop",
        Flip => "flip",
    }
    default = Fade;
}

impl EntranceAnimation {
    /// Keyframes of this entrance, `None` for no animation.
    pub fn keyframes(self) -> Option<MultiKeyframeAnimation> {
        let d = ENTRANCE_DURATION_MS;
        Some(match self {
            EntranceAnimation::None => return None,
            EntranceAnimation::Fade => AnimationPreset::fade_in(d),
            // "slide up" enters from below
            EntranceAnimation::SlideUp => AnimationPreset::slide_in(d, 0.0, SLIDE_DISTANCE),
            EntranceAnimation::SlideDown => AnimationPreset::slide_in(d, 0.0, -SLIDE_DISTANCE),
            EntranceAnimation::SlideLeft => AnimationPreset::slide_in(d, SLIDE_DISTANCE, 0.0),
            EntranceAnimation::SlideRight => AnimationPreset::slide_in(d, -SLIDE_DISTANCE, 0.0),
            EntranceAnimation::Zoom => AnimationPreset::scale_in(d),
            EntranceAnimation::Pop => AnimationPreset::pop_in(d + 80),
            EntranceAnimation::Flip => AnimationPreset::flip_in(d + 180),
        })
    }

    fn keyframes_name(self) -> String {
        format!("marquee-{}", self.id().replace('_', "-"))
    }

    /// Class applied to the animated container.
    pub fn class_name(self) -> Option<String> {
        match self {
            EntranceAnimation::None => None,
            _ => Some(format!("{}-enter", self.keyframes_name())),
        }
    }

    /// Stylesheet (keyframes plus class rule) for this entrance.
    pub fn stylesheet(self) -> Option<String> {
        let keyframes = self.keyframes()?;
        let class = self.class_name()?;
        let name = self.keyframes_name();
        Some(format!(
            "{}.{class}{{animation:{name} {}ms both;}}",
            keyframes.to_css(&name),
            keyframes.duration_ms()
        ))
    }
}
