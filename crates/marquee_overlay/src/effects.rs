//! Special effects layer
//!
//! Decorative, non-interactive visuals drawn behind the overlay content.
//! Randomized particle placement is generated once per mount and kept in a
//! [`ParticleField`], so re-renders of the same instance stay stable.

use marquee_core::{div, span, text, Element, Node};
use marquee_theme::{EffectFamily, SpecialEffect};
use rand::Rng;
use std::time::Duration;

/// One decorative particle, positioned in percent of the container
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    /// Size in pixels
    pub size: f32,
    pub delay_ms: u32,
    pub duration_ms: u32,
    /// Hue for colored particles (confetti)
    pub hue: u16,
}

impl Particle {
    fn random<R: Rng + ?Sized>(rng: &mut R, size: (f32, f32), duration: (u32, u32)) -> Self {
        Self {
            x: rng.gen_range(0.0..100.0),
            y: rng.gen_range(0.0..100.0),
            size: rng.gen_range(size.0..=size.1),
            delay_ms: rng.gen_range(0..3_000),
            duration_ms: rng.gen_range(duration.0..=duration.1),
            hue: rng.gen_range(0..360),
        }
    }
}

/// Particle count, size range and animation duration range per effect
fn particle_profile(effect: SpecialEffect) -> (usize, (f32, f32), (u32, u32)) {
    match effect {
        SpecialEffect::Sparkles => (14, (8.0, 16.0), (1_200, 2_400)),
        SpecialEffect::Hearts => (10, (12.0, 22.0), (3_000, 6_000)),
        SpecialEffect::Snow => (28, (3.0, 7.0), (6_000, 12_000)),
        SpecialEffect::Confetti => (24, (4.0, 9.0), (2_500, 5_000)),
        SpecialEffect::Matrix => (12, (10.0, 12.0), (4_000, 9_000)),
        SpecialEffect::Glitch => (5, (2.0, 6.0), (400, 1_200)),
        SpecialEffect::Bokeh => (7, (60.0, 140.0), (8_000, 14_000)),
        SpecialEffect::None
        | SpecialEffect::PulseRed
        | SpecialEffect::Scanline
        | SpecialEffect::GradientWave => (0, (0.0, 0.0), (0, 0)),
    }
}

/// How often a twinkling effect relocates one particle
pub fn twinkle_interval(effect: SpecialEffect) -> Option<Duration> {
    match effect {
        SpecialEffect::Sparkles => Some(Duration::from_millis(1_800)),
        SpecialEffect::Snow => Some(Duration::from_millis(2_500)),
        SpecialEffect::Glitch => Some(Duration::from_millis(3_000)),
        _ => None,
    }
}

/// Randomized particle placement for one mounted overlay
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleField {
    effect: SpecialEffect,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn empty(effect: SpecialEffect) -> Self {
        Self {
            effect,
            particles: Vec::new(),
        }
    }

    pub fn generate<R: Rng + ?Sized>(effect: SpecialEffect, rng: &mut R) -> Self {
        let (count, size, duration) = particle_profile(effect);
        let particles = (0..count)
            .map(|_| Particle::random(rng, size, duration))
            .collect();
        Self { effect, particles }
    }

    pub fn effect(&self) -> SpecialEffect {
        self.effect
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Move one randomly chosen particle. Returns false for empty fields.
    pub fn relocate_one<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if self.particles.is_empty() {
            return false;
        }
        let (_, size, duration) = particle_profile(self.effect);
        let index = rng.gen_range(0..self.particles.len());
        self.particles[index] = Particle::random(rng, size, duration);
        true
    }
}

fn positioned(particle: &Particle, classes: &'static str) -> Element {
    span()
        .class("absolute")
        .class(classes)
        .style("left", format!("{:.1}%", particle.x))
        .style("top", format!("{:.1}%", particle.y))
        .style("animation-delay", format!("{}ms", particle.delay_ms))
        .style("animation-duration", format!("{}ms", particle.duration_ms))
}

fn glyphs(field: &ParticleField, classes: &'static str, glyph: &'static str) -> Vec<Node> {
    field
        .particles
        .iter()
        .map(|p| {
            positioned(p, classes)
                .style("font-size", format!("{:.0}px", p.size))
                .child(text(glyph))
                .into()
        })
        .collect()
}

fn dots(field: &ParticleField, classes: &'static str) -> Vec<Node> {
    field
        .particles
        .iter()
        .map(|p| {
            positioned(p, classes)
                .style("width", format!("{:.0}px", p.size))
                .style("height", format!("{:.0}px", p.size))
                .into()
        })
        .collect()
}

fn layer_children(effect: SpecialEffect, field: &ParticleField) -> Vec<Node> {
    match effect {
        SpecialEffect::None => Vec::new(),
        SpecialEffect::PulseRed => vec![
            div()
                .class("absolute inset-0 rounded-[inherit] ring-4 ring-inset ring-red-600/70 animate-pulse")
                .into(),
            span()
                .class("absolute left-3 top-3 h-2.5 w-2.5 rounded-full bg-red-600 animate-ping")
                .into(),
        ],
        SpecialEffect::Sparkles => glyphs(field, "text-amber-300 animate-ping", "\u{2726}"),
        SpecialEffect::Hearts => glyphs(field, "text-rose-400/70 animate-bounce", "\u{2665}"),
        SpecialEffect::Snow => dots(field, "rounded-full bg-white/80 animate-[marquee-fall_linear_infinite]"),
        SpecialEffect::Confetti => field
            .particles
            .iter()
            .map(|p| {
                positioned(p, "h-2 rotate-45 animate-[marquee-fall_linear_infinite]")
                    .style("width", format!("{:.0}px", p.size))
                    .style("background", format!("hsl({}, 85%, 60%)", p.hue))
                    .into()
            })
            .collect(),
        SpecialEffect::Matrix => {
            let mut nodes = vec![grid_lines()];
            nodes.extend(glyphs(
                field,
                "font-mono text-emerald-400/40 [writing-mode:vertical-rl] animate-[marquee-fall_linear_infinite]",
                "01101",
            ));
            nodes
        }
        SpecialEffect::Glitch => field
            .particles
            .iter()
            .map(|p| {
                div()
                    .class("absolute inset-x-0 bg-fuchsia-500/40 mix-blend-screen animate-pulse")
                    .style("top", format!("{:.1}%", p.y))
                    .style("height", format!("{:.0}px", p.size))
                    .style("transform", format!("translateX({:.0}px)", p.x / 10.0 - 5.0))
                    .into()
            })
            .collect(),
        SpecialEffect::Scanline => vec![
            grid_lines(),
            div()
                .class("absolute inset-x-0 h-8 bg-gradient-to-b from-transparent via-emerald-400/20 to-transparent animate-[marquee-scan_3s_linear_infinite]")
                .into(),
        ],
        SpecialEffect::Bokeh => dots(field, "rounded-full bg-white/30 blur-2xl"),
        SpecialEffect::GradientWave => vec![div()
            .class("absolute -inset-1/2 bg-[conic-gradient(from_0deg,#ec4899,#8b5cf6,#06b6d4,#ec4899)] opacity-30 animate-[spin_12s_linear_infinite]")
            .into()],
    }
}

fn grid_lines() -> Node {
    div()
        .class("absolute inset-0 bg-[linear-gradient(to_right,rgba(16,185,129,0.15)_1px,transparent_1px),linear-gradient(to_bottom,rgba(16,185,129,0.15)_1px,transparent_1px)] bg-[size:24px_24px]")
        .into()
}

/// Decorative layer for `effect`, or `None` when there is nothing to draw.
///
/// The layer never receives pointer events, is hidden from assistive
/// technology, and sits at `z-0` beneath the `z-10` content.
pub fn render_effects(effect: SpecialEffect, field: &ParticleField) -> Option<Node> {
    if effect.family() == EffectFamily::None {
        return None;
    }
    Some(
        div()
            .class("pointer-events-none absolute inset-0 z-0 overflow-hidden")
            .attr("aria-hidden", "true")
            .attr("data-marquee-part", "effects")
            .attr("data-marquee-effect", effect.to_string())
            .children(layer_children(effect, field))
            .into(),
    )
}

/// Keyframes referenced by the effect classes
pub const EFFECT_KEYFRAMES: &str = "@keyframes marquee-fall{0%{transform:translateY(-10%)}100%{transform:translateY(110%)}}@keyframes marquee-scan{0%{top:-2rem}100%{top:100%}}";

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_core::Identifier;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generation_is_seeded() {
        let a = ParticleField::generate(SpecialEffect::Snow, &mut StdRng::seed_from_u64(7));
        let b = ParticleField::generate(SpecialEffect::Snow, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert_eq!(a.particles().len(), 28);
        for p in a.particles() {
            assert!((0.0..100.0).contains(&p.x));
            assert!((3.0..=7.0).contains(&p.size));
        }
    }

    #[test]
    fn test_layer_is_decorative() {
        let mut rng = StdRng::seed_from_u64(1);
        for effect in SpecialEffect::all() {
            let field = ParticleField::generate(*effect, &mut rng);
            let Some(layer) = render_effects(*effect, &field) else {
                assert_eq!(*effect, SpecialEffect::None);
                continue;
            };
            let root = layer.as_element().unwrap();
            assert!(root.has_class("pointer-events-none"));
            assert!(root.has_class("z-0"));
            assert_eq!(root.get_attr("aria-hidden"), Some("true"));
            assert!(layer.events().is_empty(), "{effect} binds events");
        }
    }

    #[test]
    fn test_relocate_one_moves_a_particle() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut field = ParticleField::generate(SpecialEffect::Sparkles, &mut rng);
        let before = field.clone();
        assert!(field.relocate_one(&mut rng));
        let moved = before
            .particles()
            .iter()
            .zip(field.particles())
            .filter(|(a, b)| a != b)
            .count();
        assert_eq!(moved, 1);

        let mut empty = ParticleField::empty(SpecialEffect::PulseRed);
        assert!(!empty.relocate_one(&mut rng));
    }

    #[test]
    fn test_twinkle_effects() {
        let twinkling: Vec<SpecialEffect> = SpecialEffect::all()
            .iter()
            .copied()
            .filter(|e| twinkle_interval(*e).is_some())
            .collect();
        assert_eq!(
            twinkling,
            vec![SpecialEffect::Sparkles, SpecialEffect::Snow, SpecialEffect::Glitch]
        );
    }
}
