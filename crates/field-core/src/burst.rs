//! Click bursts.
//!
//! Every click gets a glyph that rises, spins, shrinks and fades. Clicks
//! that pass the harmonic throttle also fan one symbol out radially.

use crate::constants::{
    BURST_LIFETIME_SEC, BURST_RISE_PX, DEFAULT_SYMBOLS, HARMONIC_BURST_COUNT, HARMONIC_END_SCALE,
    HARMONIC_LIFETIME_SEC, HARMONIC_RADIUS_RATIO, HARMONIC_SYMBOLS,
};
use crate::host::GlyphSprite;
use glam::Vec2;
use rand::seq::SliceRandom;
use rand::Rng;
use std::f32::consts::TAU;

/// How a burst glyph moves over its lifetime.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GlyphPath {
    /// Up by [`BURST_RISE_PX`] with one full turn, shrinking to nothing.
    Rise,
    /// Out to `origin + end`, shrinking to half size.
    Radial { end: Vec2 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Glyph {
    pub origin: Vec2,
    pub symbol: char,
    pub path: GlyphPath,
    pub age: f32,
    pub lifetime: f32,
}

impl Glyph {
    /// Eased progress in `[0, 1]`.
    #[inline]
    pub fn progress(&self) -> f32 {
        let t = (self.age / self.lifetime).clamp(0.0, 1.0);
        ease_out(t)
    }

    pub fn sprite(&self) -> GlyphSprite {
        let e = self.progress();
        match self.path {
            GlyphPath::Rise => GlyphSprite {
                symbol: self.symbol,
                position: self.origin - Vec2::new(0.0, BURST_RISE_PX * e),
                scale: 1.0 - e,
                rotation: TAU * e,
                alpha: 1.0 - e,
            },
            GlyphPath::Radial { end } => GlyphSprite {
                symbol: self.symbol,
                position: self.origin + end * e,
                scale: 1.0 - (1.0 - HARMONIC_END_SCALE) * e,
                rotation: 0.0,
                alpha: 1.0 - e,
            },
        }
    }

    #[inline]
    pub fn expired(&self) -> bool {
        self.age >= self.lifetime
    }
}

/// Harmonic burst radius for a `width` x `height` surface.
#[inline]
pub fn harmonic_radius(width: f32, height: f32) -> f32 {
    width.min(height).max(0.0) * HARMONIC_RADIUS_RATIO
}

#[inline]
fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

#[derive(Clone, Debug, Default)]
pub struct BurstSystem {
    glyphs: Vec<Glyph>,
}

impl BurstSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn<R: Rng + ?Sized>(&mut self, x: f32, y: f32, rng: &mut R) {
        let symbol = *DEFAULT_SYMBOLS.choose(rng).unwrap_or(&'◆');
        self.glyphs.push(Glyph {
            origin: Vec2::new(x, y),
            symbol,
            path: GlyphPath::Rise,
            age: 0.0,
            lifetime: BURST_LIFETIME_SEC,
        });
    }

    /// Fan [`HARMONIC_BURST_COUNT`] copies of one symbol out from `(x, y)`
    /// at equal angles, ending `radius` away.
    pub fn spawn_harmonic<R: Rng + ?Sized>(&mut self, x: f32, y: f32, radius: f32, rng: &mut R) {
        let symbol = *HARMONIC_SYMBOLS.choose(rng).unwrap_or(&'◊');
        let origin = Vec2::new(x, y);
        for i in 0..HARMONIC_BURST_COUNT {
            let angle = i as f32 / HARMONIC_BURST_COUNT as f32 * TAU;
            self.glyphs.push(Glyph {
                origin,
                symbol,
                path: GlyphPath::Radial {
                    end: Vec2::from_angle(angle) * radius.max(0.0),
                },
                age: 0.0,
                lifetime: HARMONIC_LIFETIME_SEC,
            });
        }
    }

    /// Age every glyph by `dt` seconds and drop the finished ones.
    pub fn update(&mut self, dt: f32) {
        for g in &mut self.glyphs {
            g.age += dt.max(0.0);
        }
        self.glyphs.retain(|g| !g.expired());
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    pub fn iter(&self) -> impl Iterator<Item = GlyphSprite> + '_ {
        self.glyphs.iter().map(Glyph::sprite)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn clear(&mut self) {
        self.glyphs.clear();
    }
}
