#![cfg(target_arch = "wasm32")]
//! Browser front-end: an overlay canvas driven by `field_core::Animator`.

mod constants;
mod dom;
mod events;
mod frame;
mod host;
mod surface;

use field_core::{Animator, FieldConfig, FieldMode};
use host::WebHost;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

type SharedAnimator = Rc<RefCell<Option<Animator<WebHost>>>>;

#[wasm_bindgen(start)]
pub fn boot() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("field-web loaded");
    Ok(())
}

/// Start a field on a fresh overlay canvas.
///
/// `config` is an optional object such as `{ particleCount: 12, quantum: true }`.
/// Returns `undefined` when the viewport asks for minimal motion.
#[wasm_bindgen]
pub fn start(config: JsValue) -> Result<Option<FieldHandle>, JsValue> {
    launch(config).map_err(|e| {
        log::error!("[field] start failed: {e:#}");
        JsValue::from_str(&e.to_string())
    })
}

fn launch(config: JsValue) -> anyhow::Result<Option<FieldHandle>> {
    let (window, document) =
        dom::window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;

    let profile = dom::motion_profile(&window);
    if !profile.animates() {
        log::info!("[field] motion profile {:?}; not starting", profile);
        return Ok(None);
    }

    let mut config = parse_config(config)?;
    let (width, height) = dom::viewport_size(&window);
    config.width = width;
    config.height = height;

    let cell: SharedAnimator = Rc::new(RefCell::new(None));
    let host = WebHost::new(window, document);

    // The first frame is requested inside `Animator::start`, so the
    // callback must exist before the animator does.
    let weak = Rc::downgrade(&cell);
    let epoch = Instant::now();
    host.frame_loop().install(move || {
        let Some(cell) = weak.upgrade() else {
            return;
        };
        let Ok(mut slot) = cell.try_borrow_mut() else {
            log::warn!("[frame] animator busy; skipping frame");
            return;
        };
        if let Some(animator) = slot.as_mut() {
            animator.tick(epoch.elapsed().as_secs_f64() * 1000.0);
        }
    });

    let animator = Animator::start(&config, host)?;
    *cell.borrow_mut() = Some(animator);
    Ok(Some(FieldHandle { cell }))
}

#[allow(deprecated)]
fn parse_config(value: JsValue) -> anyhow::Result<FieldConfig> {
    if value.is_undefined() || value.is_null() {
        return Ok(FieldConfig::default());
    }
    value
        .into_serde::<FieldConfig>()
        .map_err(|e| anyhow::anyhow!("invalid config: {e}"))
}

/// Handle to a running field. Dropping it from JS (`free()`) stops the field.
#[wasm_bindgen]
pub struct FieldHandle {
    cell: SharedAnimator,
}

#[wasm_bindgen]
impl FieldHandle {
    pub fn stop(&self) {
        // take first so the animator is dropped outside the borrow
        let animator = self.cell.borrow_mut().take();
        if let Some(mut animator) = animator {
            animator.stop();
        }
    }

    /// Switch arrangement by name (`drift`, `geometry`, `spiral`,
    /// `resonance`). Returns false for unknown names or a stopped field.
    pub fn set_mode(&self, name: &str) -> bool {
        let Some(mode) = FieldMode::from_name(name) else {
            log::warn!("[field] unknown mode {name:?}");
            return false;
        };
        match self.cell.borrow_mut().as_mut() {
            Some(animator) if animator.is_running() => {
                animator.set_mode(mode);
                true
            }
            _ => false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.cell
            .borrow()
            .as_ref()
            .map_or(false, |a| a.is_running())
    }

    pub fn particle_count(&self) -> usize {
        self.cell
            .borrow()
            .as_ref()
            .map_or(0, |a| a.state().particles.len())
    }
}
