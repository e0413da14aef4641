use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use super::field::ParticleField;
use super::painter::{paint_frame, CanvasPainter};
use crate::config;
use crate::error::SurfaceError;
use crate::theme::{Rgb, Theme};

/// A running particle animation bound to one canvas.
///
/// The frame callback and the resize listener only hold weak references,
/// so dropping the last `Rc` (or calling `stop`) ends the loop.
pub struct FieldLoop {
    canvas: HtmlCanvasElement,
    painter: RefCell<CanvasPainter>,
    field: RefCell<ParticleField>,
    accent: Rgb,
    frame: RefCell<Option<AnimationFrame>>,
    resize_listener: RefCell<Option<EventListener>>,
    running: RunGate,
}

/// Open until the first `close`; later closes report that nothing changed,
/// which keeps an explicit `stop` followed by `Drop` to one teardown.
#[derive(Debug)]
struct RunGate(Cell<bool>);

impl RunGate {
    fn open() -> Self {
        Self(Cell::new(true))
    }

    fn is_open(&self) -> bool {
        self.0.get()
    }

    /// True only for the call that actually closed the gate.
    fn close(&self) -> bool {
        self.0.replace(false)
    }
}

impl FieldLoop {
    pub fn start(canvas: HtmlCanvasElement, theme: Theme, count: usize) -> Result<Rc<Self>, SurfaceError> {
        let painter = CanvasPainter::for_canvas(&canvas)?;
        let (width, height) = fit_to_container(&canvas);
        let field = ParticleField::seeded(&mut rand::thread_rng(), count, width, height);
        log::info!(
            "Particle field started: {} particles on {}x{}",
            count,
            width,
            height
        );

        let field_loop = Rc::new(Self {
            canvas,
            painter: RefCell::new(painter),
            field: RefCell::new(field),
            accent: theme.particle_accent(),
            frame: RefCell::new(None),
            resize_listener: RefCell::new(None),
            running: RunGate::open(),
        });
        field_loop.listen_for_resize();
        field_loop.render_frame();
        Ok(field_loop)
    }

    pub fn stop(&self) {
        if !self.running.close() {
            return;
        }
        // Dropping the handles cancels the pending frame and removes the listener.
        self.frame.borrow_mut().take();
        self.resize_listener.borrow_mut().take();
        log::info!("Particle field stopped");
    }

    fn listen_for_resize(self: &Rc<Self>) {
        let Some(window) = web_sys::window() else {
            log::warn!("No window, particle field will not follow resizes");
            return;
        };
        let weak = Rc::downgrade(self);
        let listener = EventListener::new(&window, "resize", move |_| {
            if let Some(field_loop) = weak.upgrade() {
                field_loop.resize();
            }
        });
        *self.resize_listener.borrow_mut() = Some(listener);
    }

    fn resize(&self) {
        let (width, height) = fit_to_container(&self.canvas);
        self.field.borrow_mut().resize(width, height);
    }

    fn render_frame(self: &Rc<Self>) {
        self.frame.borrow_mut().take();
        if !self.running.is_open() {
            return;
        }
        {
            let mut field = self.field.borrow_mut();
            field.step();
            paint_frame(&mut *self.painter.borrow_mut(), &field, self.accent);
        }
        self.schedule();
    }

    fn schedule(self: &Rc<Self>) {
        let weak = Rc::downgrade(self);
        let handle = request_animation_frame(move |_timestamp| {
            if let Some(field_loop) = weak.upgrade() {
                field_loop.render_frame();
            }
        });
        *self.frame.borrow_mut() = Some(handle);
    }
}

impl Drop for FieldLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Sizes the backing raster to the element's rendered size.
fn fit_to_container(canvas: &HtmlCanvasElement) -> (f64, f64) {
    let width = canvas.offset_width().max(0) as u32;
    let height = canvas.offset_height().max(0) as u32;
    canvas.set_width(width);
    canvas.set_height(height);
    (f64::from(width), f64::from(height))
}

#[derive(Properties, PartialEq)]
pub struct ParticleCanvasProps {
    pub theme: Theme,
}

/// Decorative background. A theme change tears the loop down and reseeds it.
#[function_component]
pub fn ParticleCanvas(props: &ParticleCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |theme| {
                let started = canvas_ref
                    .cast::<HtmlCanvasElement>()
                    .ok_or(SurfaceError::MissingCanvas)
                    .and_then(|canvas| FieldLoop::start(canvas, *theme, config::particle_count()));
                let field_loop = match started {
                    Ok(field_loop) => Some(field_loop),
                    Err(e) => {
                        log::error!("Particle field disabled: {}", e);
                        None
                    }
                };
                move || {
                    if let Some(field_loop) = field_loop {
                        field_loop.stop();
                    }
                }
            },
            props.theme,
        );
    }

    html! {
        <canvas ref={canvas_ref} class="particle-canvas" aria-hidden="true" />
    }
}

// The canvas, frame and listener halves need a browser; only the
// teardown bookkeeping runs on the host.
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_closes_once() {
        let gate = RunGate::open();
        assert!(gate.is_open());
        assert!(gate.close());
        assert!(!gate.is_open());
        assert!(!gate.close());
        assert!(!gate.is_open());
    }
}
