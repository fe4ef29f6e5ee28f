//! Multi-property keyframe animations
//!
//! Keyframes are declared in offset order and serialize to a CSS
//! `@keyframes` block.

use crate::easing::Easing;
use std::fmt::Write;

/// Properties that can be animated in a keyframe
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KeyframeProperties {
    /// Opacity (0.0 to 1.0)
    pub opacity: Option<f32>,
    /// Uniform scale factor
    pub scale: Option<f32>,
    /// Translation X in pixels
    pub translate_x: Option<f32>,
    /// Translation Y in pixels
    pub translate_y: Option<f32>,
    /// Rotation X in degrees (3D tilt)
    pub rotate_x: Option<f32>,
}

impl KeyframeProperties {
    /// Create properties with only opacity set
    pub fn opacity(value: f32) -> Self {
        Self {
            opacity: Some(value),
            ..Default::default()
        }
    }

    pub fn with_opacity(mut self, value: f32) -> Self {
        self.opacity = Some(value);
        self
    }

    pub fn with_scale(mut self, value: f32) -> Self {
        self.scale = Some(value);
        self
    }

    pub fn with_translate(mut self, x: f32, y: f32) -> Self {
        self.translate_x = Some(x);
        self.translate_y = Some(y);
        self
    }

    pub fn with_rotate_x(mut self, degrees: f32) -> Self {
        self.rotate_x = Some(degrees);
        self
    }

    /// CSS declarations (`opacity:..;transform:..`) for this keyframe.
    pub fn to_css(&self) -> String {
        let mut out = String::new();
        if let Some(opacity) = self.opacity {
            let _ = write!(out, "opacity:{opacity};");
        }

        let mut transforms = Vec::new();
        if self.translate_x.is_some() || self.translate_y.is_some() {
            transforms.push(format!(
                "translate({}px, {}px)",
                self.translate_x.unwrap_or(0.0),
                self.translate_y.unwrap_or(0.0)
            ));
        }
        if let Some(scale) = self.scale {
            transforms.push(format!("scale({scale})"));
        }
        if let Some(degrees) = self.rotate_x {
            transforms.push(format!("perspective(800px) rotateX({degrees}deg)"));
        }
        if !transforms.is_empty() {
            let _ = write!(out, "transform:{};", transforms.join(" "));
        }
        out
    }
}

/// A keyframe in a multi-property animation
#[derive(Clone, Debug, PartialEq)]
pub struct MultiKeyframe {
    /// Time position (0.0 to 1.0)
    pub time: f32,
    pub properties: KeyframeProperties,
    /// Easing used when transitioning TO this keyframe
    pub easing: Easing,
}

/// Animation over several properties at once
#[derive(Clone, Debug, PartialEq)]
pub struct MultiKeyframeAnimation {
    duration_ms: u32,
    keyframes: Vec<MultiKeyframe>,
}

impl MultiKeyframeAnimation {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            duration_ms,
            keyframes: Vec::new(),
        }
    }

    /// Add a keyframe; `time` is clamped to `0.0..=1.0`.
    pub fn keyframe(mut self, time: f32, properties: KeyframeProperties, easing: Easing) -> Self {
        self.keyframes.push(MultiKeyframe {
            time: time.clamp(0.0, 1.0),
            properties,
            easing,
        });
        self
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    pub fn keyframes(&self) -> &[MultiKeyframe] {
        &self.keyframes
    }

    /// `@keyframes <name>` block.
    ///
    /// CSS applies a keyframe's timing function to the segment that leaves
    /// it, so each frame carries the easing of the following keyframe.
    pub fn to_css(&self, name: &str) -> String {
        let mut out = format!("@keyframes {name}{{");
        for (i, frame) in self.keyframes.iter().enumerate() {
            let percent = (frame.time * 100.0).round() as u32;
            let _ = write!(out, "{percent}%{{{}", frame.properties.to_css());
            if let Some(next) = self.keyframes.get(i + 1) {
                let _ = write!(out, "animation-timing-function:{};", next.easing);
            }
            out.push('}');
        }
        out.push('}');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_properties_css() {
        let props = KeyframeProperties::opacity(0.0)
            .with_translate(0.0, 24.0)
            .with_scale(0.95);
        assert_eq!(
            props.to_css(),
            "opacity:0;transform:translate(0px, 24px) scale(0.95);"
        );
        assert_eq!(KeyframeProperties::default().to_css(), "");
    }

    #[test]
    fn test_keyframes_block() {
        let anim = MultiKeyframeAnimation::new(300)
            .keyframe(0.0, KeyframeProperties::opacity(0.0), Easing::Linear)
            .keyframe(1.0, KeyframeProperties::opacity(1.0), Easing::EaseOut);
        assert_eq!(
            anim.to_css("fade"),
            "@keyframes fade{0%{opacity:0;animation-timing-function:ease-out;}100%{opacity:1;}}"
        );
        assert_eq!(anim.duration_ms(), 300);
    }
}
