//! Frame-driven animator owning the field and its optional flourishes.

use crate::burst::{harmonic_radius, BurstSystem};
use crate::config::FieldConfig;
use crate::constants::*;
use crate::error::Result;
use crate::field::{FieldMode, FieldState};
use crate::host::{DrawingSurface, FrameToken, Host};
use crate::input::{mode_for_key, InputEvent};
use crate::quantum::QuantumField;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub struct Animator<H: Host> {
    host: H,
    surface: Option<H::Surface>,
    state: FieldState,
    bursts: Option<BurstSystem>,
    quantum: Option<QuantumField>,
    rng: StdRng,
    pending_frame: Option<FrameToken>,
    last_hover_observe: Option<f64>,
    last_harmonic_burst: Option<f64>,
    fps_window: FpsWindow,
    running: bool,
}

/// Frames counted since `start` (ms) for the frame-rate watchdog.
#[derive(Clone, Copy, Debug, Default)]
struct FpsWindow {
    start: Option<f64>,
    frames: u32,
}

impl FpsWindow {
    /// Count a frame at `now` and return the average rate once a window of
    /// [`FPS_WINDOW_MS`] completes. A single gap that long restarts the
    /// window instead, so a backgrounded tab is not mistaken for a slow one.
    fn record(&mut self, now: f64, prev: Option<f64>) -> Option<f64> {
        let start = match (self.start, prev) {
            (Some(start), Some(prev)) if now - prev < FPS_WINDOW_MS => start,
            _ => {
                self.start = Some(now);
                self.frames = 0;
                return None;
            }
        };
        self.frames += 1;
        let elapsed = now - start;
        if elapsed < FPS_WINDOW_MS {
            return None;
        }
        let fps = f64::from(self.frames) * 1000.0 / elapsed;
        self.start = Some(now);
        self.frames = 0;
        Some(fps)
    }
}

impl<H: Host> Animator<H> {
    /// Validate `config`, take a surface, subscribe to input and request the
    /// first frame. Randomness is seeded from `config.seed` or entropy.
    pub fn start(config: &FieldConfig, host: H) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::start_with_rng(config, host, rng)
    }

    /// Like [`Animator::start`] with a caller-supplied random source.
    ///
    /// Nothing is left behind on failure: no particles, no listeners.
    pub fn start_with_rng(config: &FieldConfig, mut host: H, mut rng: StdRng) -> Result<Self> {
        let count = config.validate()?;
        let surface = host.acquire_surface(config.width, config.height)?;
        if let Err(e) = host.attach_inputs() {
            host.detach_inputs();
            return Err(e);
        }

        let mut state = FieldState::new(config.width, config.height);
        state.populate(&mut rng, count);

        let mut animator = Self {
            host,
            surface: Some(surface),
            state,
            bursts: config.bursts.then(BurstSystem::new),
            quantum: config.quantum.then(QuantumField::new),
            rng,
            pending_frame: None,
            last_hover_observe: None,
            last_harmonic_burst: None,
            fps_window: FpsWindow::default(),
            running: true,
        };
        animator.pending_frame = animator.host.request_frame();
        if animator.pending_frame.is_none() {
            log::warn!("[field] host refused the first frame request");
        }
        log::info!(
            "[field] started: particles={} surface={}x{} bursts={} quantum={}",
            count,
            config.width,
            config.height,
            config.bursts,
            config.quantum
        );
        Ok(animator)
    }

    /// Advance and draw one frame. `now` is a monotonic time in milliseconds.
    pub fn tick(&mut self, now: f64) {
        if !self.running {
            return;
        }
        // the request that invoked this tick has fired
        self.pending_frame = None;

        let prev = self.state.last_tick;
        let dt = match prev {
            Some(prev) => (((now - prev) / 1000.0) as f32).clamp(0.0, MAX_FRAME_DT_SEC),
            None => 0.0,
        };
        self.state.last_tick = Some(now);

        self.apply_input(now);
        self.state.advance();

        let bounds = self.state.bounds();
        if let Some(bursts) = &mut self.bursts {
            bursts.update(dt);
        }
        if let Some(quantum) = &mut self.quantum {
            quantum.update(dt, bounds, &mut self.rng);
            quantum.fluctuate(dt, bounds, &mut self.rng);
        }

        self.render();
        self.pending_frame = self.host.request_frame();

        if let Some(fps) = self.fps_window.record(now, prev) {
            if fps < MIN_FPS {
                log::warn!("[field] {fps:.1} fps is below {MIN_FPS}; stopping");
                self.stop();
            }
        }
    }

    /// Assign every particle's fields for `mode`. Ignored once stopped.
    pub fn set_mode(&mut self, mode: FieldMode) {
        if !self.running {
            return;
        }
        self.state.set_mode(mode, &mut self.rng);
        log::info!(
            "[field] mode={} particles={}",
            mode.name(),
            self.state.particles.len()
        );
    }

    /// Cancel the pending frame, detach input, release the surface and drop
    /// all particles. Safe to call any number of times.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        if let Some(token) = self.pending_frame.take() {
            self.host.cancel_frame(token);
        }
        self.host.detach_inputs();
        self.surface = None;
        self.state.particles.clear();
        if let Some(bursts) = &mut self.bursts {
            bursts.clear();
        }
        if let Some(quantum) = &mut self.quantum {
            quantum.clear();
        }
        log::info!("[field] stopped");
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn state(&self) -> &FieldState {
        &self.state
    }

    /// Direct access for hosts and tests that place particles by hand.
    pub fn state_mut(&mut self) -> &mut FieldState {
        &mut self.state
    }

    pub fn bursts(&self) -> Option<&BurstSystem> {
        self.bursts.as_ref()
    }

    pub fn quantum(&self) -> Option<&QuantumField> {
        self.quantum.as_ref()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn surface(&self) -> Option<&H::Surface> {
        self.surface.as_ref()
    }

    pub fn pending_frame(&self) -> Option<FrameToken> {
        self.pending_frame
    }

    fn apply_input(&mut self, now: f64) {
        let mut moved = false;
        for event in self.host.drain_input() {
            match event {
                InputEvent::PointerMove { x, y } => {
                    self.state.pointer = Vec2::new(x, y);
                    moved = true;
                }
                InputEvent::Click { x, y } => {
                    if let Some(bursts) = &mut self.bursts {
                        bursts.spawn(x, y, &mut self.rng);
                        let due = self
                            .last_harmonic_burst
                            .map_or(true, |t| now - t > HARMONIC_CLICK_THROTTLE_MS);
                        if due {
                            let radius = harmonic_radius(self.state.width, self.state.height);
                            bursts.spawn_harmonic(x, y, radius, &mut self.rng);
                            self.last_harmonic_burst = Some(now);
                        }
                    }
                    if let Some(quantum) = &mut self.quantum {
                        quantum.spawn(x, y, &mut self.rng);
                        quantum.observe(x, y, QUANTUM_CLICK_OBSERVE_RADIUS, &mut self.rng);
                    }
                }
                InputEvent::Resize { width, height } => {
                    self.state.resize(width, height);
                    if let Some(surface) = &mut self.surface {
                        surface.resize(self.state.width, self.state.height);
                    }
                    log::info!("[field] resized to {}x{}", self.state.width, self.state.height);
                }
                InputEvent::Key { key, shift } => {
                    if let Some(mode) = mode_for_key(&key, shift) {
                        log::info!("[keys] {key} -> {}", mode.name());
                        self.set_mode(mode);
                    }
                }
            }
        }
        if moved {
            let pointer = self.state.pointer;
            self.observe_hover(pointer.x, pointer.y, now);
        }
    }

    /// At most one hover observation per [`QUANTUM_HOVER_THROTTLE_MS`].
    fn observe_hover(&mut self, x: f32, y: f32, now: f64) {
        let Some(quantum) = &mut self.quantum else {
            return;
        };
        let due = self
            .last_hover_observe
            .map_or(true, |t| now - t > QUANTUM_HOVER_THROTTLE_MS);
        if due {
            quantum.observe(x, y, QUANTUM_HOVER_OBSERVE_RADIUS, &mut self.rng);
            self.last_hover_observe = Some(now);
        }
    }

    fn render(&mut self) {
        let Some(surface) = &mut self.surface else {
            return;
        };
        surface.clear();
        for p in &self.state.particles {
            surface.fill_circle(p.position.x, p.position.y, p.size);
        }
        if let Some(quantum) = &self.quantum {
            for link in quantum.links() {
                surface.stroke_line(link.from, link.to, link.alpha);
            }
            for sprite in quantum.sprites() {
                surface.draw_glyph(&sprite);
            }
        }
        if let Some(bursts) = &self.bursts {
            for sprite in bursts.iter() {
                surface.draw_glyph(&sprite);
            }
        }
    }
}

impl<H: Host> Drop for Animator<H> {
    fn drop(&mut self) {
        self.stop();
    }
}
