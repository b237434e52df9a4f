//! DOM listeners that feed the shared input queue.
//!
//! Every closure is kept next to the target and event name it was
//! registered with, so detaching removes exactly the same function.

use field_core::{InputEvent, InputQueue};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    fn attach(
        target: &web::EventTarget,
        kind: &'static str,
        handler: Box<dyn FnMut(web::Event)>,
    ) -> Result<Self, String> {
        let closure = Closure::wrap(handler);
        target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .map_err(|e| format!("{kind}: {e:?}"))?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }

    fn detach(&self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref())
        {
            log::warn!("[events] failed to remove {} listener: {:?}", self.kind, e);
        }
    }
}

/// Register pointer, click, resize and keydown listeners on `window`.
///
/// On failure the listeners registered so far are removed again.
pub fn wire_input_handlers(
    window: &web::Window,
    queue: &Rc<RefCell<InputQueue>>,
) -> Result<Vec<Listener>, String> {
    let target: &web::EventTarget = window.as_ref();

    let pointer_queue = queue.clone();
    let click_queue = queue.clone();
    let resize_queue = queue.clone();
    let resize_window = window.clone();
    let key_queue = queue.clone();
    let handlers: [(&'static str, Box<dyn FnMut(web::Event)>); 4] = [
        (
            "pointermove",
            Box::new(move |ev: web::Event| {
                if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
                    pointer_queue.borrow_mut().push(InputEvent::PointerMove {
                        x: ev.client_x() as f32,
                        y: ev.client_y() as f32,
                    });
                }
            }),
        ),
        (
            "click",
            Box::new(move |ev: web::Event| {
                if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
                    click_queue.borrow_mut().push(InputEvent::Click {
                        x: ev.client_x() as f32,
                        y: ev.client_y() as f32,
                    });
                }
            }),
        ),
        (
            "resize",
            Box::new(move |_: web::Event| {
                let (width, height) = crate::dom::viewport_size(&resize_window);
                resize_queue
                    .borrow_mut()
                    .push(InputEvent::Resize { width, height });
            }),
        ),
        (
            "keydown",
            Box::new(move |ev: web::Event| {
                if let Some(ev) = ev.dyn_ref::<web::KeyboardEvent>() {
                    key_queue.borrow_mut().push(InputEvent::Key {
                        key: ev.key(),
                        shift: ev.shift_key(),
                    });
                }
            }),
        ),
    ];

    let mut listeners = Vec::with_capacity(handlers.len());
    for (kind, handler) in handlers {
        match Listener::attach(target, kind, handler) {
            Ok(l) => listeners.push(l),
            Err(e) => {
                unwire(&mut listeners);
                return Err(e);
            }
        }
    }
    Ok(listeners)
}

/// Remove and drop every listener.
pub fn unwire(listeners: &mut Vec<Listener>) {
    for l in listeners.iter() {
        l.detach();
    }
    listeners.clear();
}
