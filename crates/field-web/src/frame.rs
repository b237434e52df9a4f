use field_core::FrameToken;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// requestAnimationFrame scheduling around a single reusable callback.
///
/// The callback slot is filled by the owner before the first request; an
/// empty slot makes every request fail.
pub struct FrameLoop {
    window: web::Window,
    callback: FrameCallback,
}

impl FrameLoop {
    pub fn new(window: web::Window) -> Self {
        Self {
            window,
            callback: Rc::new(RefCell::new(None)),
        }
    }

    pub fn install(&self, f: impl FnMut() + 'static) {
        *self.callback.borrow_mut() = Some(Closure::wrap(Box::new(f) as Box<dyn FnMut()>));
    }

    pub fn request(&self) -> Option<FrameToken> {
        let slot = self.callback.borrow();
        let closure = slot.as_ref()?;
        match self
            .window
            .request_animation_frame(closure.as_ref().unchecked_ref())
        {
            Ok(id) => Some(FrameToken(id)),
            Err(e) => {
                log::error!("[frame] requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    pub fn cancel(&self, token: FrameToken) {
        if let Err(e) = self.window.cancel_animation_frame(token.0) {
            log::warn!("[frame] cancelAnimationFrame({}) failed: {:?}", token.0, e);
        }
    }
}
