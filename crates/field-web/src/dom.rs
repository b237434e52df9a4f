use anyhow::anyhow;
use field_core::{is_mobile_user_agent, MotionProfile};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

/// Viewport size in CSS pixels.
pub fn viewport_size(window: &web::Window) -> (f32, f32) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w as f32, h as f32)
}

pub fn prefers_reduced_motion(window: &web::Window) -> bool {
    window
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn motion_profile(window: &web::Window) -> MotionProfile {
    let (width, _) = viewport_size(window);
    let mobile = window
        .navigator()
        .user_agent()
        .map(|ua| is_mobile_user_agent(&ua))
        .unwrap_or(false);
    MotionProfile::detect(
        width,
        prefers_reduced_motion(window),
        mobile,
        device_memory_gb(window),
    )
}

/// `navigator.deviceMemory`, which only Chromium exposes.
pub fn device_memory_gb(window: &web::Window) -> Option<f64> {
    js_sys::Reflect::get(&window.navigator(), &JsValue::from_str("deviceMemory"))
        .ok()
        .and_then(|v| v.as_f64())
}

/// Append a fixed, full-viewport, click-through canvas to `<body>`.
pub fn create_overlay_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    let body = document.body().ok_or_else(|| anyhow!("no <body>"))?;
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!("{:?}", e))?;
    canvas.set_class_name("resonance-field");
    let style = canvas.style();
    for (k, v) in [
        ("position", "fixed"),
        ("top", "0"),
        ("left", "0"),
        ("width", "100%"),
        ("height", "100%"),
        ("pointer-events", "none"),
        ("z-index", "1"),
        ("opacity", "0.2"),
    ] {
        style.set_property(k, v).map_err(|e| anyhow!("{:?}", e))?;
    }
    body.append_child(&canvas).map_err(|e| anyhow!("{:?}", e))?;
    Ok(canvas)
}

pub fn context_2d(
    canvas: &web::HtmlCanvasElement,
) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow!("2d context not supported"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow!("{:?}", e))
}

/// Match the backing store to `css_w` x `css_h` at the device pixel ratio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, css_w: f32, css_h: f32) -> f64 {
    let dpr = web::window()
        .map(|w| w.device_pixel_ratio())
        .filter(|d| *d > 0.0)
        .unwrap_or(1.0);
    let w_px = (css_w as f64 * dpr) as u32;
    let h_px = (css_h as f64 * dpr) as u32;
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
    dpr
}
