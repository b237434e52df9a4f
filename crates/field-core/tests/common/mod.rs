// Recording fakes for the host collaborators.
// Logs live behind Rc so tests can inspect them after the animator
// has taken ownership of (or dropped) the host and surface.

#![allow(dead_code)]

use field_core::{
    DrawingSurface, FieldError, FrameToken, GlyphSprite, Host, InputBatch, InputEvent, InputQueue,
};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default, Debug)]
pub struct SurfaceLog {
    pub clears: usize,
    /// Circles drawn since the last clear.
    pub circles: Vec<(f32, f32, f32)>,
    pub glyphs: Vec<GlyphSprite>,
    pub lines: Vec<(Vec2, Vec2, f32)>,
    pub size: (f32, f32),
    pub released: bool,
}

pub struct RecordingSurface {
    log: Rc<RefCell<SurfaceLog>>,
}

impl DrawingSurface for RecordingSurface {
    fn clear(&mut self) {
        let mut log = self.log.borrow_mut();
        log.clears += 1;
        log.circles.clear();
        log.glyphs.clear();
        log.lines.clear();
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32) {
        self.log.borrow_mut().circles.push((x, y, radius));
    }

    fn draw_glyph(&mut self, glyph: &GlyphSprite) {
        self.log.borrow_mut().glyphs.push(*glyph);
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, alpha: f32) {
        self.log.borrow_mut().lines.push((from, to, alpha));
    }

    fn resize(&mut self, width: f32, height: f32) {
        self.log.borrow_mut().size = (width, height);
    }
}

impl Drop for RecordingSurface {
    fn drop(&mut self) {
        self.log.borrow_mut().released = true;
    }
}

#[derive(Default, Debug)]
pub struct HostLog {
    pub surfaces_acquired: usize,
    pub attaches: usize,
    pub detaches: usize,
    pub attached: bool,
    pub requested: Vec<FrameToken>,
    pub cancelled: Vec<FrameToken>,
}

#[derive(Default)]
pub struct MockHost {
    pub log: Rc<RefCell<HostLog>>,
    pub surface: Rc<RefCell<SurfaceLog>>,
    pub inputs: Rc<RefCell<InputQueue>>,
    pub fail_surface: bool,
    pub fail_inputs: bool,
    next_token: i32,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: InputEvent) {
        self.inputs.borrow_mut().push(event);
    }
}

impl Host for MockHost {
    type Surface = RecordingSurface;

    fn acquire_surface(&mut self, width: f32, height: f32) -> Result<RecordingSurface, FieldError> {
        if self.fail_surface {
            return Err(FieldError::SurfaceUnavailable("no 2d context".into()));
        }
        self.log.borrow_mut().surfaces_acquired += 1;
        self.surface.borrow_mut().size = (width, height);
        Ok(RecordingSurface {
            log: self.surface.clone(),
        })
    }

    fn attach_inputs(&mut self) -> Result<(), FieldError> {
        if self.fail_inputs {
            return Err(FieldError::InputUnavailable("no window".into()));
        }
        let mut log = self.log.borrow_mut();
        log.attaches += 1;
        log.attached = true;
        Ok(())
    }

    fn detach_inputs(&mut self) {
        let mut log = self.log.borrow_mut();
        if log.attached {
            log.detaches += 1;
            log.attached = false;
        }
    }

    fn request_frame(&mut self) -> Option<FrameToken> {
        self.next_token += 1;
        let token = FrameToken(self.next_token);
        self.log.borrow_mut().requested.push(token);
        Some(token)
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        self.log.borrow_mut().cancelled.push(token);
    }

    fn drain_input(&mut self) -> InputBatch {
        self.inputs.borrow_mut().drain()
    }
}
