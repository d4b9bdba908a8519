// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drifting background particles and their links to the pointer.

use alloc::vec::Vec;

use kurbo::{Point, Size, Vec2};
use rand::Rng;

/// Particles wrap this far beyond each viewport edge.
pub const EDGE_MARGIN: f64 = 40.0;
/// Particles closer than this to the pointer are linked to it.
pub const LINK_DISTANCE: f64 = 170.0;
/// Link opacity at zero distance.
pub const LINK_ALPHA: f64 = 0.34;
/// Viewport width per particle.
const WIDTH_PER_PARTICLE: f64 = 24.0;
const MIN_PARTICLES: f64 = 28.0;
const MAX_PARTICLES: f64 = 70.0;
/// Velocities are expressed per 1/60 s.
const REFERENCE_FPS: f64 = 60.0;

/// One particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Center in viewport coordinates.
    pub pos: Point,
    /// Radius in CSS pixels.
    pub radius: f64,
    /// Drift per 1/60 s.
    pub velocity: Vec2,
    /// Fill opacity.
    pub alpha: f64,
}

/// A line from a particle to the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    /// Particle end of the line.
    pub from: Point,
    /// Stroke opacity, fading to zero at [`LINK_DISTANCE`].
    pub alpha: f64,
}

/// Number of particles for a viewport `width`.
#[must_use]
#[expect(
    clippy::cast_possible_truncation,
    reason = "clamped to a small positive integer first"
)]
pub fn count_for(width: f64, reduced_motion: bool) -> usize {
    if reduced_motion || !width.is_finite() {
        return 0;
    }
    libm::floor(width / WIDTH_PER_PARTICLE).clamp(MIN_PARTICLES, MAX_PARTICLES) as usize
}

/// Canvas backing-store scale for a device pixel ratio, clamped to `[1, 2]`.
#[must_use]
pub fn canvas_scale(device_pixel_ratio: f64) -> f64 {
    if device_pixel_ratio.is_finite() {
        device_pixel_ratio.clamp(1.0, 2.0)
    } else {
        1.0
    }
}

/// Opacity of the link between a particle at distance `d` and the pointer.
#[must_use]
pub fn link_alpha(d: f64) -> Option<f64> {
    (d < LINK_DISTANCE).then(|| (1.0 - d / LINK_DISTANCE) * LINK_ALPHA)
}

/// The particle field covering the viewport.
#[derive(Clone, Debug)]
pub struct ParticleField {
    size: Size,
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Seeds a field for a viewport of `size`.
    ///
    /// The field is empty under reduced motion.
    pub fn new<R: Rng>(size: Size, reduced_motion: bool, rng: &mut R) -> Self {
        let count = count_for(size.width, reduced_motion);
        let w = size.width.max(0.0);
        let h = size.height.max(0.0);
        let particles = (0..count)
            .map(|_| Particle {
                pos: Point::new(rng.random_range(0.0..=w), rng.random_range(0.0..=h)),
                radius: rng.random_range(1.3..=2.8),
                velocity: Vec2::new(rng.random_range(-0.18..=0.18), rng.random_range(-0.14..=0.14)),
                alpha: rng.random_range(0.22..=0.55),
            })
            .collect();
        Self { size, particles }
    }

    /// Viewport size the field wraps within.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Every particle, in draw order.
    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Whether there is nothing to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Follows a viewport resize. Particles keep their positions and wrap
    /// into the new bounds as they drift.
    pub fn resize(&mut self, size: Size) {
        self.size = size;
    }

    /// Drifts every particle by `dt` seconds and wraps it around the
    /// viewport edges.
    pub fn step(&mut self, dt: f64) {
        let frames = dt * REFERENCE_FPS;
        let (w, h) = (self.size.width, self.size.height);
        for p in &mut self.particles {
            p.pos += p.velocity * frames;
            p.pos.x = wrap_edge(p.pos.x, w);
            p.pos.y = wrap_edge(p.pos.y, h);
        }
    }

    /// Lines from nearby particles to `pointer`.
    pub fn links(&self, pointer: Point) -> impl Iterator<Item = Link> + '_ {
        self.particles.iter().filter_map(move |p| {
            let d = libm::hypot(p.pos.x - pointer.x, p.pos.y - pointer.y);
            link_alpha(d).map(|alpha| Link { from: p.pos, alpha })
        })
    }
}

fn wrap_edge(v: f64, extent: f64) -> f64 {
    if v < -EDGE_MARGIN {
        extent + EDGE_MARGIN
    } else if v > extent + EDGE_MARGIN {
        -EDGE_MARGIN
    } else {
        v
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(7)
    }

    #[test]
    fn count_scales_with_width_within_bounds() {
        assert_eq!(count_for(320.0, false), 28, "floor");
        assert_eq!(count_for(1200.0, false), 50);
        assert_eq!(count_for(3840.0, false), 70, "ceiling");
        assert_eq!(count_for(1200.0, true), 0, "reduced motion");
    }

    #[test]
    fn seeded_particles_respect_ranges() {
        let size = Size::new(1000.0, 700.0);
        let field = ParticleField::new(size, false, &mut rng());
        assert_eq!(field.particles().len(), 41);
        for p in field.particles() {
            assert!((0.0..=1000.0).contains(&p.pos.x), "x {}", p.pos.x);
            assert!((0.0..=700.0).contains(&p.pos.y), "y {}", p.pos.y);
            assert!((1.3..=2.8).contains(&p.radius), "radius {}", p.radius);
            assert!(p.velocity.x.abs() <= 0.18 && p.velocity.y.abs() <= 0.14);
            assert!((0.22..=0.55).contains(&p.alpha), "alpha {}", p.alpha);
        }
    }

    #[test]
    fn reduced_motion_field_is_empty() {
        let field = ParticleField::new(Size::new(1000.0, 700.0), true, &mut rng());
        assert!(field.is_empty());
        assert_eq!(field.links(Point::new(500.0, 300.0)).count(), 0);
    }

    #[test]
    fn step_moves_per_sixtieth_of_a_second() {
        let mut field = ParticleField::new(Size::new(800.0, 600.0), false, &mut rng());
        let before = field.particles()[0];
        field.step(0.5);
        let after = field.particles()[0];
        let expected = before.pos + before.velocity * 30.0;
        assert!((after.pos - expected).hypot() < 1e-9, "30 reference frames");
    }

    #[test]
    fn particles_wrap_beyond_the_margin() {
        assert_eq!(wrap_edge(-41.0, 800.0), 840.0);
        assert_eq!(wrap_edge(841.0, 800.0), -40.0);
        assert_eq!(wrap_edge(-40.0, 800.0), -40.0, "on the margin stays");
    }

    #[test]
    fn links_fade_with_distance() {
        assert_eq!(link_alpha(0.0), Some(LINK_ALPHA));
        let half = link_alpha(85.0).unwrap();
        assert!((half - 0.17).abs() < 1e-9, "halfway fades to half: {half}");
        assert_eq!(link_alpha(170.0), None, "exclusive cutoff");
    }

    #[test]
    fn canvas_scale_is_clamped() {
        assert_eq!(canvas_scale(0.5), 1.0);
        assert_eq!(canvas_scale(3.0), 2.0);
        assert_eq!(canvas_scale(f64::NAN), 1.0);
        assert_eq!(canvas_scale(1.5), 1.5);
    }
}
