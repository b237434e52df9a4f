//! Field state: the particle set plus everything a frame reads.

use crate::constants::*;
use crate::particle::{Particle, Resonance};
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// Which arrangement the particles were last asked to take.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FieldMode {
    /// Free drift with pointer attraction only.
    #[default]
    Drift,
    /// Ring of widening radius around the centre.
    Geometry,
    /// Golden-angle (phyllotaxis) spiral around the centre.
    Spiral,
    /// Each particle oscillates around where it was when activated.
    Resonance,
}

impl FieldMode {
    pub fn name(self) -> &'static str {
        match self {
            FieldMode::Drift => "drift",
            FieldMode::Geometry => "geometry",
            FieldMode::Spiral => "spiral",
            FieldMode::Resonance => "resonance",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "drift" | "none" => Some(FieldMode::Drift),
            "geometry" => Some(FieldMode::Geometry),
            "spiral" => Some(FieldMode::Spiral),
            "resonance" => Some(FieldMode::Resonance),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldState {
    /// Render order; earlier particles are drawn underneath.
    pub particles: Vec<Particle>,
    pub pointer: Vec2,
    /// Timestamp (ms) of the previous tick.
    pub last_tick: Option<f64>,
    pub mode: FieldMode,
    pub width: f32,
    pub height: f32,
}

impl FieldState {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            particles: Vec::new(),
            // far away until the first pointer event
            pointer: Vec2::splat(f32::MAX),
            last_tick: None,
            mode: FieldMode::Drift,
            width,
            height,
        }
    }

    pub fn populate<R: Rng + ?Sized>(&mut self, rng: &mut R, count: usize) {
        self.particles.reserve(count);
        for _ in 0..count {
            self.particles
                .push(Particle::random(rng, self.width, self.height));
        }
    }

    #[inline]
    pub fn bounds(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.bounds() * 0.5
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
    }

    /// Step every particle once, in order.
    pub fn advance(&mut self) {
        let pointer = self.pointer;
        let bounds = self.bounds();
        for p in &mut self.particles {
            p.step(pointer, bounds);
        }
    }

    /// Assign the per-particle fields for `mode`.
    ///
    /// Targets and resonance may both be set afterwards; a tick resolves
    /// them with resonance first.
    pub fn set_mode<R: Rng + ?Sized>(&mut self, mode: FieldMode, rng: &mut R) {
        let center = self.center();
        let count = self.particles.len();
        match mode {
            FieldMode::Drift => {
                for p in &mut self.particles {
                    p.target = None;
                    p.resonance = None;
                }
            }
            FieldMode::Geometry => {
                for (i, p) in self.particles.iter_mut().enumerate() {
                    p.target = Some(center + geometry_offset(i, count));
                }
            }
            FieldMode::Spiral => {
                for (i, p) in self.particles.iter_mut().enumerate() {
                    p.target = Some(center + spiral_offset(i));
                }
            }
            FieldMode::Resonance => {
                for p in &mut self.particles {
                    p.resonance = Some(Resonance {
                        base: p.position,
                        amplitude: RESONANCE_AMPLITUDE_MIN
                            + rng.gen::<f32>() * RESONANCE_AMPLITUDE_SPAN,
                    });
                }
            }
        }
        self.mode = mode;
    }
}

/// Offset from the centre of ring slot `index` out of `count`.
#[inline]
pub fn geometry_offset(index: usize, count: usize) -> Vec2 {
    let radius = GEOMETRY_BASE_RADIUS + index as f32 * GEOMETRY_RADIUS_STEP;
    let angle = if count == 0 {
        0.0
    } else {
        index as f32 / count as f32 * TAU
    };
    Vec2::from_angle(angle) * radius
}

/// Offset from the centre of spiral slot `index`.
#[inline]
pub fn spiral_offset(index: usize) -> Vec2 {
    let angle = index as f32 * GOLDEN_ANGLE;
    let radius = SPIRAL_SCALE * (index as f32).sqrt();
    Vec2::from_angle(angle) * radius
}
