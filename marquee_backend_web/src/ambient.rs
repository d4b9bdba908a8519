// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Particle canvas, cursor spotlight, parallax variables, and tilt listeners.

use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use core::f64::consts::TAU;

use kurbo::{Point, Size};
use marquee_core::ambient::decor;
use marquee_core::ambient::particles::{self, ParticleField};
use marquee_core::ambient::pointer::{self, PointerTracker};
use marquee_core::ambient::tilt::{PERSPECTIVE_PX, Rotation, TiltKind, TiltPose};
use marquee_core::clock::{FrameClock, FrameTick};
use marquee_core::config::SchedulerConfig;
use rand::Rng;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement, MouseEvent};

/// CSS `transform` value for a tilt rotation.
#[must_use]
pub fn tilt_transform(r: &Rotation) -> String {
    format!(
        "perspective({PERSPECTIVE_PX}px) rotateX({:.2}deg) rotateY({:.2}deg) translateY({}px)",
        r.x_deg, r.y_deg, r.lift
    )
}

/// Writes `pose` to `el` as `--mx` / `--my` and, if present, a transform.
pub fn apply_tilt(el: &HtmlElement, pose: &TiltPose) {
    let s = el.style();
    let _ = s.set_property("--mx", &format!("{}%", pose.hotspot.x));
    let _ = s.set_property("--my", &format!("{}%", pose.hotspot.y));
    if let Some(r) = &pose.rotation {
        let _ = s.set_property("transform", &tilt_transform(r));
    }
}

/// Adds tilt and hotspot tracking to `el`.
pub fn attach_tilt(el: &HtmlElement, kind: TiltKind, reduced_motion: bool) {
    let target = el.clone();
    let on_move = Closure::wrap(Box::new(move |e: MouseEvent| {
        let rect = target.get_bounding_client_rect();
        let local = Point::new(
            f64::from(e.client_x()) - rect.left(),
            f64::from(e.client_y()) - rect.top(),
        );
        let size = Size::new(rect.width(), rect.height());
        if let Some(pose) = TiltPose::at(local, size, kind, reduced_motion) {
            apply_tilt(&target, &pose);
        }
    }) as Box<dyn FnMut(MouseEvent)>);

    let target = el.clone();
    let on_leave = Closure::wrap(Box::new(move |_: MouseEvent| {
        apply_tilt(&target, &TiltPose::REST);
    }) as Box<dyn FnMut(MouseEvent)>);

    let _ = el.add_event_listener_with_callback("pointermove", on_move.as_ref().unchecked_ref());
    let _ = el.add_event_listener_with_callback("pointerleave", on_leave.as_ref().unchecked_ref());
    on_move.forget();
    on_leave.forget();
}

/// The full-viewport particle canvas.
struct ParticleCanvas {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    field: ParticleField,
}

impl ParticleCanvas {
    fn new<R: Rng>(
        doc: &Document,
        viewport: Size,
        reduced_motion: bool,
        rng: &mut R,
    ) -> Result<Self, JsValue> {
        let canvas: HtmlCanvasElement = doc.create_element("canvas")?.dyn_into()?;
        canvas.set_id("particles");
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into()?;
        let mut this = Self {
            canvas,
            ctx,
            field: ParticleField::new(viewport, reduced_motion, rng),
        };
        this.resize(viewport, crate::device_pixel_ratio());
        Ok(this)
    }

    fn resize(&mut self, viewport: Size, device_pixel_ratio: f64) {
        let scale = particles::canvas_scale(device_pixel_ratio);
        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "viewport sizes are small positive values"
        )]
        let (w, h) = (
            (viewport.width * scale) as u32,
            (viewport.height * scale) as u32,
        );
        self.canvas.set_width(w);
        self.canvas.set_height(h);
        let s = self.canvas.style();
        let _ = s.set_property("width", &format!("{}px", viewport.width));
        let _ = s.set_property("height", &format!("{}px", viewport.height));
        let _ = self.ctx.set_transform(scale, 0.0, 0.0, scale, 0.0, 0.0);
        self.field.resize(viewport);
    }

    fn draw(&mut self, dt: f64, pointer: Point) {
        if self.field.is_empty() {
            return;
        }
        let size = self.field.size();
        self.field.step(dt);

        let ctx = &self.ctx;
        ctx.clear_rect(0.0, 0.0, size.width, size.height);
        ctx.set_fill_style_str("rgba(255,255,255,1)");
        for p in self.field.particles() {
            ctx.set_global_alpha(p.alpha);
            ctx.begin_path();
            let _ = ctx.arc(p.pos.x, p.pos.y, p.radius, 0.0, TAU);
            ctx.fill();
        }

        ctx.set_stroke_style_str("rgba(255,255,255,1)");
        ctx.set_line_width(1.6);
        for link in self.field.links(pointer) {
            ctx.set_global_alpha(link.alpha);
            ctx.begin_path();
            ctx.move_to(link.from.x, link.from.y);
            ctx.line_to(pointer.x, pointer.y);
            ctx.stroke();
        }
    }
}

/// Page-wide ambient motion.
pub struct Ambience {
    clock: FrameClock,
    tracker: PointerTracker,
    spotlight: HtmlElement,
    root: Option<HtmlElement>,
    particles: ParticleCanvas,
}

impl core::fmt::Debug for Ambience {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Ambience")
            .field("tracker", &self.tracker)
            .field("particles", &self.particles.field.particles().len())
            .finish_non_exhaustive()
    }
}

impl Ambience {
    /// Adds the spotlight, the background blobs (unless motion is reduced),
    /// and the particle canvas to the page body.
    pub fn install<R: Rng>(
        doc: &Document,
        config: &SchedulerConfig,
        rng: &mut R,
    ) -> Result<Self, JsValue> {
        let body = doc
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;
        let viewport = crate::viewport_size();
        let reduced = config.reduced_motion;

        let spotlight: HtmlElement = doc.create_element("div")?.dyn_into()?;
        spotlight.set_id("spotlight");
        body.append_child(&spotlight)?;

        for class in decor::blobs(reduced) {
            let blob = doc.create_element("div")?;
            blob.set_class_name(class);
            body.append_child(&blob)?;
        }

        let particles = ParticleCanvas::new(doc, viewport, reduced, rng)?;
        body.append_child(&particles.canvas)?;

        let root = doc
            .document_element()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());

        let this = Self {
            clock: FrameClock::new(crate::timebase(), config.max_step),
            tracker: PointerTracker::new(viewport, reduced),
            spotlight,
            root,
            particles,
        };
        this.place_spotlight(pointer::spotlight_rest(viewport));
        if !this.tracker.spotlight_visible() {
            let _ = this.spotlight.style().set_property("opacity", "0");
        }
        Ok(this)
    }

    fn place_spotlight(&self, at: Point) {
        let s = self.spotlight.style();
        let _ = s.set_property("--x", &format!("{}px", at.x));
        let _ = s.set_property("--y", &format!("{}px", at.y));
    }

    /// Draws one particle frame.
    pub fn frame(&mut self, tick: &FrameTick) {
        let dt = self.clock.advance(tick.now);
        self.particles.draw(dt, self.tracker.pointer());
    }

    /// Moves the spotlight and parallax to follow the pointer.
    pub fn pointer_moved(&mut self, at: Point) {
        let Some(update) = self.tracker.move_to(at) else {
            return;
        };
        self.place_spotlight(update.spotlight);
        if let Some(root) = &self.root {
            let s = root.style();
            let _ = s.set_property("--px", &format!("{}px", update.parallax.x));
            let _ = s.set_property("--py", &format!("{}px", update.parallax.y));
        }
    }

    /// Follows a viewport resize.
    pub fn resize(&mut self) {
        let viewport = crate::viewport_size();
        self.tracker.resize(viewport);
        self.particles.resize(viewport, crate::device_pixel_ratio());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilt_transform_has_two_decimals() {
        let css = tilt_transform(&Rotation {
            x_deg: 3.14159,
            y_deg: -6.0,
            lift: -2.0,
        });
        assert_eq!(
            css,
            "perspective(900px) rotateX(3.14deg) rotateY(-6.00deg) translateY(-2px)"
        );
    }

    #[test]
    fn rest_transform_is_flat() {
        assert_eq!(
            tilt_transform(&Rotation::ZERO),
            "perspective(900px) rotateX(0.00deg) rotateY(0.00deg) translateY(0px)"
        );
    }
}
