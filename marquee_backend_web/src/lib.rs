// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for marquee.
//!
//! This crate provides integration with browser APIs:
//!
//! - [`RafLoop`]: `requestAnimationFrame` tick source
//! - [`DomTrack`]: belt containers as a [`TrackSurface`](marquee_core::belt::TrackSurface)
//! - [`DomPresenter`]: belt frames written as transforms, classes, and
//!   custom properties
//! - [`Conveyors`]: the page's scheduler plus its event listeners
//! - [`Ambience`]: particle canvas, spotlight, background blobs, parallax, and tilt
//! - [`add_badges`] and [`install_reveal`]: card icon badges and scroll reveal
//! - [`ConsoleSink`]: trace events to the browser console

#![no_std]

extern crate alloc;

mod ambient;
mod console;
mod conveyors;
mod decor;
mod presenter;
mod raf;
mod track;

pub use ambient::{Ambience, apply_tilt, attach_tilt, tilt_transform};
pub use console::ConsoleSink;
pub use conveyors::Conveyors;
pub use decor::{add_badges, badge_markup, install_reveal};
pub use marquee_core::backend::Presenter;
pub use presenter::{DomPresenter, focus_value, translate_x};
pub use raf::RafLoop;
pub use track::{CLONE_ATTR, Controls, DomTrack, READY_ATTR};

use kurbo::Size;
use marquee_core::time::{HostTime, Timebase};

/// Returns the current host time from `performance.now()`.
///
/// The returned [`HostTime`] is in microsecond ticks. Use [`timebase`] to
/// convert to nanoseconds.
#[must_use]
pub fn now() -> HostTime {
    raf::millis_to_host(raf::performance_now())
}

/// Returns the web [`Timebase`]: 1 tick = 1 µs = 1000 ns.
#[must_use]
pub fn timebase() -> Timebase {
    Timebase::MICROS
}

/// Whether the user asked for reduced motion.
///
/// Read once at startup; later changes to the preference are not tracked.
#[must_use]
pub fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .is_some_and(|mq| mq.matches())
}

/// Current viewport size in CSS pixels, floored.
#[must_use]
pub fn viewport_size() -> Size {
    let Some(window) = web_sys::window() else {
        return Size::ZERO;
    };
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).map_or(0.0, libm::floor)
    };
    Size::new(read(window.inner_width()), read(window.inner_height()))
}

/// The window's device pixel ratio (1 when unavailable).
#[must_use]
pub fn device_pixel_ratio() -> f64 {
    web_sys::window().map_or(1.0, |w| w.device_pixel_ratio())
}

/// Lower-cased `location.pathname`, or an empty string.
#[must_use]
pub fn page_path() -> alloc::string::String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|p| p.to_ascii_lowercase())
        .unwrap_or_default()
}
