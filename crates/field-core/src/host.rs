//! Collaborator contracts between the animator and the platform.
//!
//! The core never talks to a browser directly. A front-end implements
//! [`Host`] (frame scheduling, listener wiring, input delivery) and hands
//! out a [`DrawingSurface`]; tests implement both with recording fakes.

use crate::error::Result;
use crate::input::InputEvent;
use glam::Vec2;
use smallvec::SmallVec;

/// Handle of a pending frame request, used to cancel it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameToken(pub i32);

/// A text glyph with its transform, drawn centred on `position`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphSprite {
    pub symbol: char,
    pub position: Vec2,
    pub scale: f32,
    pub rotation: f32,
    pub alpha: f32,
}

/// Minimal 2D immediate-mode drawing contract.
///
/// Pixel ratio and styling are the implementor's business.
pub trait DrawingSurface {
    fn clear(&mut self);
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32);

    fn draw_glyph(&mut self, _glyph: &GlyphSprite) {}
    fn stroke_line(&mut self, _from: Vec2, _to: Vec2, _alpha: f32) {}
    fn resize(&mut self, _width: f32, _height: f32) {}
}

/// Batch of input events drained in one frame.
pub type InputBatch = SmallVec<[InputEvent; 8]>;

pub trait Host {
    type Surface: DrawingSurface;

    /// Obtain a surface of the given size.
    fn acquire_surface(&mut self, width: f32, height: f32) -> Result<Self::Surface>;

    /// Subscribe to pointer, resize and key input.
    fn attach_inputs(&mut self) -> Result<()>;

    /// Unsubscribe exactly what `attach_inputs` subscribed.
    fn detach_inputs(&mut self);

    /// Ask for one more frame. `None` when the platform refused.
    fn request_frame(&mut self) -> Option<FrameToken>;

    fn cancel_frame(&mut self, token: FrameToken);

    /// Events delivered since the previous call, oldest first.
    fn drain_input(&mut self) -> InputBatch;
}
