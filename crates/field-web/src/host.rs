use crate::events::{self, Listener};
use crate::frame::FrameLoop;
use crate::surface::CanvasSurface;
use field_core::error::Result;
use field_core::{FieldError, FrameToken, Host, InputBatch, InputQueue};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Browser side of the animator: overlay canvas, window listeners and
/// requestAnimationFrame.
pub struct WebHost {
    window: web::Window,
    document: web::Document,
    inputs: Rc<RefCell<InputQueue>>,
    listeners: Vec<Listener>,
    frame: FrameLoop,
}

impl WebHost {
    pub fn new(window: web::Window, document: web::Document) -> Self {
        let frame = FrameLoop::new(window.clone());
        Self {
            window,
            document,
            inputs: Rc::new(RefCell::new(InputQueue::new())),
            listeners: Vec::new(),
            frame,
        }
    }

    pub fn frame_loop(&self) -> &FrameLoop {
        &self.frame
    }
}

impl Host for WebHost {
    type Surface = CanvasSurface;

    fn acquire_surface(&mut self, width: f32, height: f32) -> Result<CanvasSurface> {
        CanvasSurface::new(&self.document, width, height)
            .map_err(|e| FieldError::SurfaceUnavailable(e.to_string()))
    }

    fn attach_inputs(&mut self) -> Result<()> {
        if !self.listeners.is_empty() {
            return Ok(());
        }
        self.listeners = events::wire_input_handlers(&self.window, &self.inputs)
            .map_err(FieldError::InputUnavailable)?;
        Ok(())
    }

    fn detach_inputs(&mut self) {
        events::unwire(&mut self.listeners);
        self.inputs.borrow_mut().clear();
    }

    fn request_frame(&mut self) -> Option<FrameToken> {
        self.frame.request()
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        self.frame.cancel(token);
    }

    fn drain_input(&mut self) -> InputBatch {
        self.inputs.borrow_mut().drain()
    }
}
