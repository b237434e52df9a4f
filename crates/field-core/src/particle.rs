//! One animated field particle and its per-frame step.

use crate::constants::*;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// Oscillation that pins a particle around a captured base position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resonance {
    pub base: Vec2,
    pub amplitude: f32,
}

impl Resonance {
    /// Position dictated by the oscillation at the given phase.
    #[inline]
    pub fn position_at(&self, phase: f32) -> Vec2 {
        self.base
            + Vec2::new(
                (phase * RESONANCE_X_HARMONIC).sin() * self.amplitude,
                (phase * RESONANCE_Y_HARMONIC).cos() * self.amplitude * RESONANCE_Y_RATIO,
            )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Radians in `[0, 2π)`.
    pub phase: f32,
    /// Phase advance per frame.
    pub frequency: f32,
    pub size: f32,
    pub target: Option<Vec2>,
    pub resonance: Option<Resonance>,
}

impl Particle {
    /// Random particle somewhere on a `width` x `height` surface.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32) -> Self {
        Self {
            position: Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height),
            velocity: Vec2::new(
                (rng.gen::<f32>() - 0.5) * INITIAL_SPEED_SPAN,
                (rng.gen::<f32>() - 0.5) * INITIAL_SPEED_SPAN,
            ),
            phase: rng.gen::<f32>() * TAU,
            frequency: FREQUENCY_MIN + rng.gen::<f32>() * FREQUENCY_SPAN,
            size: SIZE_MIN + rng.gen::<f32>() * SIZE_SPAN,
            target: None,
            resonance: None,
        }
    }

    /// Advance one frame. `bounds` is the surface size.
    pub fn step(&mut self, pointer: Vec2, bounds: Vec2) {
        self.velocity += attraction(self.position, pointer);

        self.phase = wrap_phase(self.phase + self.frequency);
        let orbit = Vec2::new(self.phase.cos(), self.phase.sin()) * ORBIT_AMPLITUDE;

        match (self.resonance, self.target) {
            (Some(res), _) => {
                self.position = res.position_at(self.phase);
            }
            (None, Some(target)) => {
                self.velocity += (target - self.position) * TARGET_GAIN;
                self.position += self.velocity + orbit;
            }
            (None, None) => {
                self.position += self.velocity + orbit;
            }
        }

        self.velocity *= FRICTION;
        self.position = Vec2::new(
            wrap_coord(self.position.x, bounds.x),
            wrap_coord(self.position.y, bounds.y),
        );
    }
}

/// Velocity impulse pulling `position` toward `pointer`.
///
/// Zero outside the attraction radius and when the two coincide.
#[inline]
pub fn attraction(position: Vec2, pointer: Vec2) -> Vec2 {
    let delta = pointer - position;
    let distance = delta.length();
    if distance <= 0.0 || distance >= ATTRACT_RADIUS || !distance.is_finite() {
        return Vec2::ZERO;
    }
    let force = (ATTRACT_RADIUS - distance) / ATTRACT_RADIUS;
    delta / distance * force * ATTRACT_GAIN
}

#[inline]
pub fn wrap_phase(phase: f32) -> f32 {
    let p = phase.rem_euclid(TAU);
    if p >= TAU {
        0.0
    } else {
        p
    }
}

/// Re-enter from the opposite edge so `0 <= v < extent`.
#[inline]
pub fn wrap_coord(v: f32, extent: f32) -> f32 {
    if extent <= 0.0 || !v.is_finite() {
        return 0.0;
    }
    if (0.0..extent).contains(&v) {
        return v;
    }
    let w = v.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negatives
    if w >= extent {
        0.0
    } else {
        w
    }
}
