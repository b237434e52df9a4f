//! Quantum glyphs: click-spawned symbols with a wave phase, jitter,
//! boundary tunnelling, pairwise entanglement and observer collapse.
//!
//! Particles lose a little energy every frame and disappear once it falls
//! below [`QUANTUM_ENERGY_FLOOR`]; a vanishing particle frees its partner.

use crate::constants::*;
use crate::host::GlyphSprite;
use fnv::FnvHashMap;
use glam::Vec2;
use rand::seq::SliceRandom;
use rand::Rng;
use std::f32::consts::TAU;

#[derive(Clone, Debug, PartialEq)]
pub struct QuantumParticle {
    pub id: u32,
    pub position: Vec2,
    pub momentum: Vec2,
    pub symbol: char,
    pub wave: f32,
    /// `|sin(wave)|`, reset to 1 when observed.
    pub probability: f32,
    pub spin: i8,
    pub energy: f32,
    pub partner: Option<u32>,
}

impl QuantumParticle {
    fn random<R: Rng + ?Sized>(id: u32, position: Vec2, rng: &mut R) -> Self {
        Self {
            id,
            position,
            momentum: Vec2::new(
                (rng.gen::<f32>() - 0.5) * 2.0,
                (rng.gen::<f32>() - 0.5) * 2.0,
            ),
            symbol: *DEFAULT_SYMBOLS.choose(rng).unwrap_or(&'◆'),
            wave: rng.gen::<f32>() * TAU,
            probability: 1.0,
            spin: if rng.gen_bool(0.5) { 1 } else { -1 },
            energy: QUANTUM_ENERGY_MIN + rng.gen::<f32>() * QUANTUM_ENERGY_SPAN,
            partner: None,
        }
    }

    pub fn sprite(&self) -> GlyphSprite {
        GlyphSprite {
            symbol: self.symbol,
            position: self.position,
            scale: 0.5 + self.probability * 0.5,
            rotation: self.wave,
            alpha: 0.3 + self.probability * 0.7,
        }
    }
}

/// Line drawn between two entangled particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntanglementLink {
    pub from: Vec2,
    pub to: Vec2,
    pub alpha: f32,
}

/// A recent observation point, kept for [`QUANTUM_OBSERVATION_TTL_SEC`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Observation {
    pub at: Vec2,
    pub radius: f32,
    pub age: f32,
}

#[derive(Clone, Debug, Default)]
pub struct QuantumField {
    particles: Vec<QuantumParticle>,
    observations: Vec<Observation>,
    next_id: u32,
    fluctuation_clock: f32,
}

impl QuantumField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn particles(&self) -> &[QuantumParticle] {
        &self.particles
    }

    /// Observations younger than [`QUANTUM_OBSERVATION_TTL_SEC`], oldest first.
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
        self.observations.clear();
        self.fluctuation_clock = 0.0;
    }

    /// Add a particle at `(x, y)` and maybe entangle it with a free one.
    pub fn spawn<R: Rng + ?Sized>(&mut self, x: f32, y: f32, rng: &mut R) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        let mut particle = QuantumParticle::random(id, Vec2::new(x, y), rng);

        if !self.particles.is_empty() && rng.gen_bool(QUANTUM_ENTANGLE_CHANCE) {
            let other = rng.gen_range(0..self.particles.len());
            let other = &mut self.particles[other];
            if other.partner.is_none() {
                other.partner = Some(id);
                particle.partner = Some(other.id);
            }
        }

        self.particles.push(particle);
        id
    }

    /// Collapse particles near an observation point; returns how many did.
    pub fn observe<R: Rng + ?Sized>(&mut self, x: f32, y: f32, radius: f32, rng: &mut R) -> usize {
        if radius <= 0.0 {
            return 0;
        }
        let at = Vec2::new(x, y);
        self.observations.push(Observation {
            at,
            radius,
            age: 0.0,
        });
        let mut collapsed = 0;
        for p in &mut self.particles {
            let distance = p.position.distance(at);
            if distance < radius {
                let chance = f64::from(1.0 - distance / radius);
                if rng.gen_bool(chance.clamp(0.0, 1.0)) {
                    p.probability = 1.0;
                    collapsed += 1;
                }
            }
        }
        collapsed
    }

    /// Advance every particle by `dt` seconds on a `bounds` sized surface.
    pub fn update<R: Rng + ?Sized>(&mut self, dt: f32, bounds: Vec2, rng: &mut R) {
        for p in &mut self.particles {
            p.wave += dt * p.energy;

            let uncertainty = QUANTUM_UNCERTAINTY / p.energy.sqrt();
            let jitter = Vec2::new(
                (rng.gen::<f32>() - 0.5) * uncertainty,
                (rng.gen::<f32>() - 0.5) * uncertainty,
            );
            p.position += p.momentum + jitter;

            if p.position.x < 0.0 || p.position.x > bounds.x {
                if rng.gen_bool(QUANTUM_TUNNEL_CHANCE) {
                    p.position.x = bounds.x - p.position.x;
                } else {
                    p.momentum.x = -p.momentum.x;
                }
            }
            if p.position.y < 0.0 || p.position.y > bounds.y {
                if rng.gen_bool(QUANTUM_TUNNEL_CHANCE) {
                    p.position.y = bounds.y - p.position.y;
                } else {
                    p.momentum.y = -p.momentum.y;
                }
            }

            p.probability = p.wave.sin().abs();
        }

        for o in &mut self.observations {
            o.age += dt.max(0.0);
        }
        self.observations.retain(|o| o.age < QUANTUM_OBSERVATION_TTL_SEC);

        self.flip_entangled_spins(rng);
        self.decay();
    }

    /// Once per elapsed second, maybe spawn a particle at a random point.
    pub fn fluctuate<R: Rng + ?Sized>(&mut self, dt: f32, bounds: Vec2, rng: &mut R) {
        self.fluctuation_clock += dt.max(0.0);
        while self.fluctuation_clock >= 1.0 {
            self.fluctuation_clock -= 1.0;
            if self.particles.len() < QUANTUM_FLUCTUATION_CAP
                && rng.gen_bool(QUANTUM_FLUCTUATION_CHANCE)
            {
                let x = rng.gen::<f32>() * bounds.x;
                let y = rng.gen::<f32>() * bounds.y;
                self.spawn(x, y, rng);
            }
        }
    }

    pub fn sprites(&self) -> impl Iterator<Item = GlyphSprite> + '_ {
        self.particles.iter().map(QuantumParticle::sprite)
    }

    /// One link per entangled pair.
    pub fn links(&self) -> Vec<EntanglementLink> {
        let index = self.index_by_id();
        self.particles
            .iter()
            .filter_map(|p| {
                let partner = p.partner.filter(|&q| p.id < q)?;
                let other = &self.particles[*index.get(&partner)?];
                let distance = p.position.distance(other.position);
                Some(EntanglementLink {
                    from: p.position,
                    to: other.position,
                    alpha: (1.0 - distance / QUANTUM_LINK_FADE_PX).max(0.0),
                })
            })
            .collect()
    }

    fn index_by_id(&self) -> FnvHashMap<u32, usize> {
        self.particles
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id, i))
            .collect()
    }

    fn flip_entangled_spins<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let index = self.index_by_id();
        for i in 0..self.particles.len() {
            let Some(partner) = self.particles[i].partner else {
                continue;
            };
            if !rng.gen_bool(QUANTUM_SPIN_FLIP_CHANCE) {
                continue;
            }
            let spin = -self.particles[i].spin;
            self.particles[i].spin = spin;
            if let Some(&j) = index.get(&partner) {
                self.particles[j].spin = -spin;
            }
        }
    }

    fn decay(&mut self) {
        let mut gone = Vec::new();
        self.particles.retain_mut(|p| {
            if p.energy < QUANTUM_ENERGY_FLOOR {
                gone.push(p.id);
                return false;
            }
            p.energy *= QUANTUM_ENERGY_DECAY;
            true
        });
        if gone.is_empty() {
            return;
        }
        log::debug!("[quantum] {} particle(s) decayed", gone.len());
        for p in &mut self.particles {
            if p.partner.is_some_and(|q| gone.contains(&q)) {
                p.partner = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const BOUNDS: Vec2 = Vec2::new(800.0, 600.0);

    #[test]
    fn spawned_particles_are_in_range() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut field = QuantumField::new();
        for i in 0..50 {
            field.spawn(i as f32, 10.0, &mut rng);
        }
        for p in field.particles() {
            assert!(p.energy >= 1.0 && p.energy < 11.0);
            assert!(p.momentum.x.abs() <= 1.0 && p.momentum.y.abs() <= 1.0);
            assert!(p.spin == 1 || p.spin == -1);
        }
    }

    #[test]
    fn entanglement_is_symmetric() {
        let mut rng = StdRng::seed_from_u64(12);
        let mut field = QuantumField::new();
        for _ in 0..40 {
            field.spawn(100.0, 100.0, &mut rng);
        }
        let by_id: FnvHashMap<u32, &QuantumParticle> =
            field.particles().iter().map(|p| (p.id, p)).collect();
        let mut linked = 0;
        for p in field.particles() {
            if let Some(q) = p.partner {
                assert_eq!(by_id[&q].partner, Some(p.id));
                linked += 1;
            }
        }
        assert!(linked > 0, "expected at least one entangled pair");
        assert_eq!(field.links().len() * 2, linked);
    }

    #[test]
    fn observe_at_particle_always_collapses() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut field = QuantumField::new();
        field.spawn(50.0, 50.0, &mut rng);
        field.particles[0].probability = 0.2;
        assert_eq!(field.observe(50.0, 50.0, 100.0, &mut rng), 1);
        assert_eq!(field.particles[0].probability, 1.0);
        assert_eq!(field.observe(500.0, 500.0, 100.0, &mut rng), 0);
    }

    #[test]
    fn low_energy_particles_decay_and_unlink() {
        let mut rng = StdRng::seed_from_u64(14);
        let mut field = QuantumField::new();
        let a = field.spawn(100.0, 100.0, &mut rng);
        let b = field.spawn(200.0, 200.0, &mut rng);
        field.particles[0].partner = Some(b);
        field.particles[1].partner = Some(a);
        field.particles[0].energy = 0.05;
        field.update(1.0 / 60.0, BOUNDS, &mut rng);
        assert_eq!(field.len(), 1);
        assert_eq!(field.particles()[0].id, b);
        assert_eq!(field.particles()[0].partner, None);
    }

    #[test]
    fn energy_decays_every_frame() {
        let mut rng = StdRng::seed_from_u64(15);
        let mut field = QuantumField::new();
        field.spawn(400.0, 300.0, &mut rng);
        let before = field.particles()[0].energy;
        field.update(1.0 / 60.0, BOUNDS, &mut rng);
        let after = field.particles()[0].energy;
        assert!((after - before * QUANTUM_ENERGY_DECAY).abs() < 1e-5);
    }

    #[test]
    fn probability_follows_wave() {
        let mut rng = StdRng::seed_from_u64(16);
        let mut field = QuantumField::new();
        field.spawn(400.0, 300.0, &mut rng);
        field.update(0.1, BOUNDS, &mut rng);
        let p = &field.particles()[0];
        assert!((p.probability - p.wave.sin().abs()).abs() < 1e-6);
    }

    #[test]
    fn fluctuation_respects_cap() {
        let mut rng = StdRng::seed_from_u64(17);
        let mut field = QuantumField::new();
        for _ in 0..QUANTUM_FLUCTUATION_CAP {
            field.spawn(1.0, 1.0, &mut rng);
        }
        field.fluctuate(500.0, BOUNDS, &mut rng);
        assert_eq!(field.len(), QUANTUM_FLUCTUATION_CAP);
    }

    #[test]
    fn fluctuation_needs_a_full_second() {
        let mut rng = StdRng::seed_from_u64(18);
        let mut field = QuantumField::new();
        for _ in 0..100 {
            field.fluctuate(0.009, BOUNDS, &mut rng);
        }
        assert!(field.is_empty());
    }

    #[test]
    fn boundary_crossing_tunnels_or_reflects() {
        let mut tunnelled = 0;
        let mut reflected = 0;
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut field = QuantumField::new();
            field.spawn(2.0, 300.0, &mut rng);
            {
                let p = &mut field.particles[0];
                p.momentum = Vec2::new(-10.0, 0.0);
                // near-zero jitter
                p.energy = 1.0e6;
            }
            field.update(1.0 / 60.0, BOUNDS, &mut rng);
            let p = &field.particles()[0];
            if p.momentum.x > 0.0 {
                assert_eq!(p.momentum.x, 10.0);
                assert!((p.position.x + 8.0).abs() < 0.01, "x={}", p.position.x);
                reflected += 1;
            } else {
                assert_eq!(p.momentum.x, -10.0);
                assert!((p.position.x - (BOUNDS.x + 8.0)).abs() < 0.01, "x={}", p.position.x);
                tunnelled += 1;
            }
        }
        assert!(tunnelled > 0 && reflected > tunnelled);
    }

    #[test]
    fn spin_flip_leaves_partner_opposite() {
        let mut rng = StdRng::seed_from_u64(19);
        let mut field = QuantumField::new();
        let a = field.spawn(100.0, 100.0, &mut rng);
        let b = field.spawn(300.0, 300.0, &mut rng);
        for p in &mut field.particles {
            p.partner = Some(if p.id == a { b } else { a });
            p.spin = 1;
            p.energy = 1.0e3;
        }
        let mut flipped = false;
        for _ in 0..2000 {
            field.update(1.0 / 60.0, BOUNDS, &mut rng);
            let (sa, sb) = (field.particles[0].spin, field.particles[1].spin);
            if !flipped && sa != sb {
                flipped = true;
            }
            if flipped {
                assert_eq!(sa, -sb);
            }
        }
        assert!(flipped, "no spin flip in 2000 frames");
    }

    #[test]
    fn observations_expire_after_a_second() {
        let mut rng = StdRng::seed_from_u64(20);
        let mut field = QuantumField::new();
        field.observe(10.0, 20.0, 50.0, &mut rng);
        assert_eq!(field.observations().len(), 1);
        assert_eq!(field.observations()[0].at, Vec2::new(10.0, 20.0));
        field.update(0.6, BOUNDS, &mut rng);
        field.observe(30.0, 40.0, 100.0, &mut rng);
        field.update(0.6, BOUNDS, &mut rng);
        assert_eq!(field.observations().len(), 1);
        assert_eq!(field.observations()[0].radius, 100.0);
    }
}
