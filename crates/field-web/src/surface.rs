use crate::constants::{GLYPH_FONT, LINK_RGB, PARTICLE_FILL};
use crate::dom;
use field_core::{DrawingSurface, GlyphSprite};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Overlay canvas with a 2D context, removed from the page on drop.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    width: f32,
    height: f32,
}

impl CanvasSurface {
    pub fn new(document: &web::Document, width: f32, height: f32) -> anyhow::Result<Self> {
        let canvas = dom::create_overlay_canvas(document)?;
        let ctx = match dom::context_2d(&canvas) {
            Ok(ctx) => ctx,
            Err(e) => {
                canvas.remove();
                return Err(e);
            }
        };
        let mut surface = Self {
            canvas,
            ctx,
            width,
            height,
        };
        surface.resize(width, height);
        Ok(surface)
    }

    #[allow(deprecated)]
    fn apply_styles(&self) {
        self.ctx.set_fill_style(&JsValue::from_str(PARTICLE_FILL));
        self.ctx.set_font(GLYPH_FONT);
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        self.ctx.set_line_width(1.0);
    }
}

impl DrawingSurface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.width as f64, self.height as f64);
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32) {
        self.ctx.begin_path();
        if self
            .ctx
            .arc(x as f64, y as f64, radius.max(0.0) as f64, 0.0, TAU)
            .is_ok()
        {
            self.ctx.fill();
        }
    }

    fn draw_glyph(&mut self, glyph: &GlyphSprite) {
        if glyph.alpha <= 0.0 || glyph.scale <= 0.0 {
            return;
        }
        let ctx = &self.ctx;
        ctx.save();
        ctx.set_global_alpha(glyph.alpha.clamp(0.0, 1.0) as f64);
        _ = ctx.translate(glyph.position.x as f64, glyph.position.y as f64);
        _ = ctx.rotate(glyph.rotation as f64);
        _ = ctx.scale(glyph.scale as f64, glyph.scale as f64);
        let mut buf = [0u8; 4];
        _ = ctx.fill_text(glyph.symbol.encode_utf8(&mut buf), 0.0, 0.0);
        ctx.restore();
    }

    #[allow(deprecated)]
    fn stroke_line(&mut self, from: Vec2, to: Vec2, alpha: f32) {
        if alpha <= 0.0 {
            return;
        }
        let ctx = &self.ctx;
        ctx.save();
        let [r, g, b] = LINK_RGB;
        ctx.set_stroke_style(&JsValue::from_str(&format!(
            "rgba({r}, {g}, {b}, {:.3})",
            alpha.clamp(0.0, 1.0) * 0.5
        )));
        ctx.begin_path();
        ctx.move_to(from.x as f64, from.y as f64);
        ctx.line_to(to.x as f64, to.y as f64);
        ctx.stroke();
        ctx.restore();
    }

    fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        let dpr = dom::sync_canvas_backing_size(&self.canvas, width, height);
        // resizing resets the context state
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        self.apply_styles();
    }
}

impl Drop for CanvasSurface {
    fn drop(&mut self) {
        self.canvas.remove();
    }
}
