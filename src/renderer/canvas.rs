//! Canvas2D scene renderer
//!
//! Pure read-side: draws a `SceneState` onto the 2D context, never mutates it.
//! Draw calls that return `Result` are non-fatal and discarded.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::palette::{BG, INK, SUBTLE};
use crate::consts::*;
use crate::settings::Settings;
use crate::sim::{FloatingShape, Ripple, SceneState, ShapeKind};

const TITLE: &str = "Hello Web";
const SUBTITLE: &str = "Animation Interactive";

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }

    /// Draw one full frame: background, shapes, ripples, title
    pub fn render(&self, state: &SceneState, settings: &Settings) {
        self.clear();

        for shape in &state.shapes {
            self.draw_shape(shape);
        }
        for ripple in &state.ripples {
            self.draw_ripple(ripple);
        }

        self.draw_title(state, settings);
    }

    fn clear(&self) {
        self.ctx.set_fill_style_str(&BG.rgba(255.0));
        self.ctx
            .fill_rect(0.0, 0.0, CANVAS_WIDTH as f64, CANVAS_HEIGHT as f64);
    }

    /// Filled circle or center-anchored square in a translate/rotate scope
    fn draw_shape(&self, shape: &FloatingShape) {
        self.ctx.save();
        let _ = self.ctx.translate(shape.pos.x as f64, shape.pos.y as f64);
        let _ = self.ctx.rotate(shape.rotation as f64);

        self.ctx.set_fill_style_str(&INK.rgba(shape.alpha));
        let size = shape.size as f64;
        match shape.kind {
            ShapeKind::Circle => {
                self.ctx.begin_path();
                let _ = self
                    .ctx
                    .arc(0.0, 0.0, size / 2.0, 0.0, std::f64::consts::TAU);
                self.ctx.fill();
            }
            ShapeKind::Square => {
                self.ctx.fill_rect(-size / 2.0, -size / 2.0, size, size);
            }
        }

        self.ctx.restore();
    }

    /// Unfilled ring; stroke opacity tracks remaining life
    fn draw_ripple(&self, ripple: &Ripple) {
        if !ripple.started || ripple.life <= 0.0 {
            return;
        }

        self.ctx
            .set_stroke_style_str(&INK.rgba(ripple.life * RIPPLE_STROKE_ALPHA));
        self.ctx.set_line_width(1.0);
        self.ctx.begin_path();
        let _ = self.ctx.arc(
            ripple.pos.x as f64,
            ripple.pos.y as f64,
            ripple.radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.stroke();
    }

    fn draw_title(&self, state: &SceneState, settings: &Settings) {
        // Subtle breathing once the fade has mostly landed
        let breathe = if state.text_alpha > BREATHE_THRESHOLD && !settings.reduced_motion {
            (state.time * BREATHE_FREQUENCY).sin() * BREATHE_AMPLITUDE + 1.0
        } else {
            1.0
        };
        let title_size = BASE_TEXT_SIZE * breathe * state.text_scale;

        let cx = (CANVAS_WIDTH / 2.0) as f64;
        let cy = (CANVAS_HEIGHT / 2.0) as f64;

        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");

        self.ctx
            .set_font(&format!("{:.1}px system-ui, sans-serif", title_size));
        self.ctx.set_fill_style_str(&INK.rgba(state.text_alpha));
        let _ = self.ctx.fill_text(TITLE, cx, cy);

        // Subtitle trails the title fade
        let subtitle_alpha = (state.text_alpha - 100.0).max(0.0);
        self.ctx.set_font(&format!(
            "{:.1}px system-ui, sans-serif",
            SUBTITLE_SIZE * state.text_scale
        ));
        self.ctx.set_fill_style_str(&SUBTLE.rgba(subtitle_alpha));
        let _ = self
            .ctx
            .fill_text(SUBTITLE, cx, cy + SUBTITLE_OFFSET as f64);
    }
}
