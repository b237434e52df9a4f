//! Field tuning constants.
//!
//! These express intended behavior (radii, gains, decay factors) and keep
//! magic numbers out of the physics code.

use std::f32::consts::TAU;

// Defaults
pub const DEFAULT_PARTICLE_COUNT: i64 = 8;
pub const MAX_PARTICLE_COUNT: i64 = 1000;
pub const DEFAULT_SURFACE_WIDTH: f32 = 1280.0;
pub const DEFAULT_SURFACE_HEIGHT: f32 = 720.0;

// Initial particle ranges (min, span)
pub const INITIAL_SPEED_SPAN: f32 = 0.2; // each axis in [-span/2, span/2)
pub const SIZE_MIN: f32 = 0.5;
pub const SIZE_SPAN: f32 = 1.5;
pub const FREQUENCY_MIN: f32 = 0.005; // radians per frame
pub const FREQUENCY_SPAN: f32 = 0.01;

// Pointer attraction
pub const ATTRACT_RADIUS: f32 = 100.0;
pub const ATTRACT_GAIN: f32 = 0.01;

// Orbital drift derived from the phase
pub const ORBIT_AMPLITUDE: f32 = 0.5;

// Target seeking (geometry / spiral)
pub const TARGET_GAIN: f32 = 0.01;

// Per-frame velocity decay, must stay in (0, 1)
pub const FRICTION: f32 = 0.99;

// Geometry ring
pub const GEOMETRY_BASE_RADIUS: f32 = 100.0;
pub const GEOMETRY_RADIUS_STEP: f32 = 10.0;

// Golden-angle spiral
pub const GOLDEN_RATIO: f32 = 1.618_034;
pub const GOLDEN_ANGLE: f32 = TAU / (GOLDEN_RATIO * GOLDEN_RATIO); // ~137.5 degrees
pub const SPIRAL_SCALE: f32 = 5.0;

// Resonance oscillation
pub const RESONANCE_AMPLITUDE_MIN: f32 = 20.0;
pub const RESONANCE_AMPLITUDE_SPAN: f32 = 30.0;
pub const RESONANCE_X_HARMONIC: f32 = 3.0;
pub const RESONANCE_Y_HARMONIC: f32 = 2.0;
pub const RESONANCE_Y_RATIO: f32 = 0.5;

// Click bursts
pub const BURST_LIFETIME_SEC: f32 = 1.0;
pub const BURST_RISE_PX: f32 = 100.0;
pub const BURST_GLYPH_PX: f32 = 32.0; // 2rem

// Harmonic bursts: one symbol fanned out radially
pub const HARMONIC_SYMBOLS: [char; 4] = ['◊', '○', '●', '△'];
pub const HARMONIC_BURST_COUNT: usize = 4;
pub const HARMONIC_LIFETIME_SEC: f32 = 0.8;
pub const HARMONIC_RADIUS_RATIO: f32 = 0.05; // of the smaller surface side
pub const HARMONIC_END_SCALE: f32 = 0.5;
pub const HARMONIC_CLICK_THROTTLE_MS: f64 = 500.0;

// Quantum glyphs
pub const QUANTUM_ENERGY_MIN: f32 = 1.0;
pub const QUANTUM_ENERGY_SPAN: f32 = 10.0;
pub const QUANTUM_ENERGY_DECAY: f32 = 0.999; // per frame
pub const QUANTUM_ENERGY_FLOOR: f32 = 0.1;
pub const QUANTUM_UNCERTAINTY: f32 = 0.5;
pub const QUANTUM_TUNNEL_CHANCE: f64 = 0.1;
pub const QUANTUM_ENTANGLE_CHANCE: f64 = 0.3;
pub const QUANTUM_SPIN_FLIP_CHANCE: f64 = 0.01;
pub const QUANTUM_LINK_FADE_PX: f32 = 500.0;
pub const QUANTUM_FLUCTUATION_CHANCE: f64 = 0.1; // per elapsed second
pub const QUANTUM_FLUCTUATION_CAP: usize = 20;
pub const QUANTUM_CLICK_OBSERVE_RADIUS: f32 = 100.0;
pub const QUANTUM_HOVER_OBSERVE_RADIUS: f32 = 50.0;
pub const QUANTUM_HOVER_THROTTLE_MS: f64 = 100.0;
pub const QUANTUM_OBSERVATION_TTL_SEC: f32 = 1.0;

// Frame timing
pub const MAX_FRAME_DT_SEC: f32 = 0.25; // clamp after tab switches

// Frame-rate watchdog
pub const MIN_FPS: f64 = 20.0;
pub const FPS_WINDOW_MS: f64 = 1000.0;

// Motion profile
pub const MIN_FULL_MOTION_WIDTH: f32 = 768.0;
pub const MIN_DEVICE_MEMORY_GB: f64 = 4.0;

pub const DEFAULT_SYMBOLS: [char; 11] = [
    '◆', '◊', '○', '●', '□', '■', '△', '▽', '※', '◉', '◈',
];
