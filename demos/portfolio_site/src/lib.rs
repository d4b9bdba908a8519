// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web demo: the portfolio site's motion layer.
//!
//! Turns skill tags (every page) and content-card grids (projects, gallery,
//! and resume pages) into conveyor belts, then adds the particle canvas,
//! cursor spotlight, background blobs, parallax, card badges, scroll reveal,
//! and card/button tilt. One [`RafLoop`] drives
//! both the belts and the particles.
//!
//! Build with: `wasm-pack build --target web demos/portfolio_site`
//!
//! Then load the generated module from the site's pages in place of the old
//! script tag.
//!
//! [`RafLoop`]: marquee_backend_web::RafLoop

// This crate only runs in the browser; suppress dead-code warnings when
// cargo-checking on a native host target.
#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use kurbo::Point;
use rand::SeedableRng as _;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, PointerEvent};

use marquee_backend_web::{Ambience, Conveyors, RafLoop, add_badges, attach_tilt, install_reveal};
use marquee_core::ambient::{Reveal, TiltKind};
use marquee_core::config::SchedulerConfig;
use marquee_core::page;

/// Every element matching `selector`, in document order.
fn select_all(doc: &Document, selector: &str) -> Vec<HtmlElement> {
    let Ok(list) = doc.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<HtmlElement>().ok())
        .collect()
}

fn item_count(container: &HtmlElement, selector: &str) -> usize {
    container
        .query_selector_all(selector)
        .map_or(0, |list| list.length() as usize)
}

#[cfg(feature = "trace")]
fn conveyors(config: SchedulerConfig) -> Conveyors {
    Conveyors::with_sink(config, Box::new(marquee_backend_web::ConsoleSink))
}

#[cfg(not(feature = "trace"))]
fn conveyors(config: SchedulerConfig) -> Conveyors {
    Conveyors::new(config)
}

/// Seeds the particle layout from `Math.random`.
fn seed() -> u64 {
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "Math.random is in [0, 1), scaled into the u64 range"
    )]
    let seed = (js_sys::Math::random() * 9_007_199_254_740_992.0) as u64;
    seed
}

/// Calls `f` on every `event` fired at `window`, unless `target` is busy.
fn on_window<T: 'static>(
    window: &web_sys::Window,
    event: &str,
    target: &Rc<RefCell<T>>,
    mut f: impl FnMut(&mut T, &web_sys::Event) + 'static,
) {
    let target = Rc::clone(target);
    let closure = Closure::wrap(Box::new(move |e: web_sys::Event| {
        if let Ok(mut t) = target.try_borrow_mut() {
            f(&mut t, &e);
        }
    }) as Box<dyn FnMut(web_sys::Event)>);
    let _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Entry point, called automatically by `wasm_bindgen(start)`.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let reduced = marquee_backend_web::prefers_reduced_motion();
    let config = SchedulerConfig::site().with_reduced_motion(reduced);

    // Badges and tilt go on before the belts clone the cards.
    add_badges(&document)?;
    for card in select_all(&document, ".card") {
        attach_tilt(&card, TiltKind::Card, reduced);
    }
    for button in select_all(&document, ".btn") {
        attach_tilt(&button, TiltKind::Button, reduced);
    }

    let conveyors = conveyors(config).into_shared();
    let path = marquee_backend_web::page_path();
    for target in page::targets(&path) {
        for container in select_all(&document, target.container) {
            if !target.qualifies(item_count(&container, target.item)) {
                continue;
            }
            if let Some(class) = target.marker_class {
                container.class_list().add_1(class)?;
            }
            let _ = Conveyors::install(&conveyors, container, target.item, target.belt);
        }
    }
    install_reveal(&document, &Reveal::SITE, reduced)?;

    let mut rng = SmallRng::seed_from_u64(seed());
    let ambience = Rc::new(RefCell::new(Ambience::install(
        &document, &config, &mut rng,
    )?));

    on_window(&window, "pointermove", &ambience, |a: &mut Ambience, e| {
        if let Some(e) = e.dyn_ref::<PointerEvent>() {
            a.pointer_moved(Point::new(
                f64::from(e.client_x()),
                f64::from(e.client_y()),
            ));
        }
    });
    on_window(&window, "resize", &ambience, |a: &mut Ambience, _| a.resize());
    on_window(&window, "resize", &conveyors, |c: &mut Conveyors, _| {
        c.resize();
    });

    let raf = RafLoop::new(move |tick| {
        if let Ok(mut c) = conveyors.try_borrow_mut() {
            c.frame(&tick);
        }
        if let Ok(mut a) = ambience.try_borrow_mut() {
            a.frame(&tick);
        }
    });
    raf.start();

    // Keep the RafLoop alive; there is no graceful shutdown on the web.
    core::mem::forget(raf);

    Ok(())
}
