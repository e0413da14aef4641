use std::f64::consts::PI;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::field::ParticleField;
use crate::error::SurfaceError;
use crate::theme::Rgb;

pub const LINK_WIDTH: f64 = 0.5;

/// The drawing operations one frame needs.
pub trait Painter {
    fn clear(&mut self, width: f64, height: f64);
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str);
    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: &str);
}

/// Clears the surface, draws every particle, then every link.
pub fn paint_frame<P: Painter + ?Sized>(painter: &mut P, field: &ParticleField, accent: Rgb) {
    let (width, height) = field.size();
    painter.clear(width, height);
    for particle in field.particles() {
        painter.fill_circle(particle.x, particle.y, particle.radius, &accent.rgba(particle.alpha));
    }
    for link in field.links() {
        painter.stroke_line(link.from, link.to, LINK_WIDTH, &accent.rgba(link.opacity));
    }
}

pub struct CanvasPainter {
    ctx: CanvasRenderingContext2d,
}

impl CanvasPainter {
    pub fn for_canvas(canvas: &HtmlCanvasElement) -> Result<Self, SurfaceError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| SurfaceError::ContextUnavailable(format!("{:?}", e)))?
            .ok_or_else(|| SurfaceError::ContextUnavailable("no 2d context".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SurfaceError::NotTwoDimensional)?;
        Ok(Self { ctx })
    }
}

#[allow(deprecated)]
impl Painter for CanvasPainter {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str) {
        self.ctx.begin_path();
        if self.ctx.arc(x, y, radius, 0.0, PI * 2.0).is_err() {
            return;
        }
        self.ctx.set_fill_style(&JsValue::from_str(color));
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: &str) {
        self.ctx.begin_path();
        self.ctx.move_to(from.0, from.1);
        self.ctx.line_to(to.0, to.1);
        self.ctx.set_stroke_style(&JsValue::from_str(color));
        self.ctx.set_line_width(width);
        self.ctx.stroke();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particles::field::Particle;

    #[derive(Debug, PartialEq)]
    enum Op {
        Clear(f64, f64),
        Circle(f64, f64, String),
        Line(String),
    }

    #[derive(Default)]
    struct Recorder {
        ops: Vec<Op>,
    }

    impl Painter for Recorder {
        fn clear(&mut self, width: f64, height: f64) {
            self.ops.push(Op::Clear(width, height));
        }

        fn fill_circle(&mut self, x: f64, y: f64, _radius: f64, color: &str) {
            self.ops.push(Op::Circle(x, y, color.to_string()));
        }

        fn stroke_line(&mut self, _from: (f64, f64), _to: (f64, f64), width: f64, color: &str) {
            assert_eq!(width, LINK_WIDTH);
            self.ops.push(Op::Line(color.to_string()));
        }
    }

    fn dot(x: f64, y: f64, alpha: f64) -> Particle {
        Particle {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            radius: 1.0,
            alpha,
        }
    }

    #[test]
    fn clears_then_fills_then_strokes() {
        let field = ParticleField::from_particles(
            vec![dot(10.0, 10.0, 0.5), dot(10.0, 60.0, 0.25), dot(400.0, 10.0, 0.5)],
            500.0,
            300.0,
        );
        let mut recorder = Recorder::default();
        paint_frame(&mut recorder, &field, Rgb(0, 255, 200));

        assert_eq!(recorder.ops.len(), 5);
        assert_eq!(recorder.ops[0], Op::Clear(500.0, 300.0));
        assert_eq!(
            recorder.ops[2],
            Op::Circle(10.0, 60.0, "rgba(0, 255, 200, 0.25)".to_string())
        );
        assert_eq!(recorder.ops[4], Op::Line("rgba(0, 255, 200, 0.075)".to_string()));
    }

    #[test]
    fn theme_accent_colors_every_shape() {
        let field = ParticleField::from_particles(vec![dot(1.0, 1.0, 0.5)], 10.0, 10.0);
        let mut recorder = Recorder::default();
        paint_frame(&mut recorder, &field, Rgb(59, 130, 246));
        assert_eq!(
            recorder.ops[1],
            Op::Circle(1.0, 1.0, "rgba(59, 130, 246, 0.5)".to_string())
        );
    }
}
