// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `requestAnimationFrame` tick source.
//!
//! [`RafLoop`] turns the browser's animation-frame callbacks into
//! [`FrameTick`]s. The [`DOMHighResTimeStamp`][mdn] each callback receives is
//! converted to microsecond [`HostTime`] ticks with [`Timebase::MICROS`].
//!
//! [mdn]: https://developer.mozilla.org/en-US/docs/Web/API/DOMHighResTimeStamp

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::{Cell, RefCell};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use marquee_core::clock::FrameTick;
use marquee_core::time::{HostTime, Timebase};

// Global bindings, so the frame path never goes through `web_sys::window()`.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = performance, js_name = "now")]
    pub(crate) fn performance_now() -> f64;

    #[wasm_bindgen(js_name = "requestAnimationFrame")]
    fn request_animation_frame(callback: &JsValue) -> i32;

    #[wasm_bindgen(js_name = "cancelAnimationFrame")]
    fn cancel_animation_frame(id: i32);
}

/// Converts a millisecond timestamp to microsecond [`HostTime`].
///
/// Negative and non-finite inputs map to zero.
pub(crate) fn millis_to_host(ms: f64) -> HostTime {
    if ms.is_finite() && ms > 0.0 {
        HostTime(Timebase::MICROS.millis_to_ticks(ms))
    } else {
        HostTime(0)
    }
}

/// Where the loop is between callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Stopped,
    /// A frame is requested under this id.
    Pending(i32),
}

type FrameCallback = Closure<dyn FnMut(f64)>;

struct Shared {
    phase: Cell<Phase>,
    next_frame: Cell<u64>,
    on_tick: RefCell<Box<dyn FnMut(FrameTick)>>,
    /// Set once by [`RafLoop::start`]; re-requested from inside itself.
    js: RefCell<Option<FrameCallback>>,
}

impl Shared {
    fn request(&self) {
        if let Some(js) = &*self.js.borrow() {
            let id = request_animation_frame(js.as_ref().unchecked_ref());
            self.phase.set(Phase::Pending(id));
        }
    }

    fn fire(&self, timestamp_ms: f64) {
        if self.phase.get() == Phase::Stopped {
            return;
        }
        let frame_index = self.next_frame.get();
        self.next_frame.set(frame_index + 1);
        (self.on_tick.borrow_mut())(FrameTick {
            now: millis_to_host(timestamp_ms),
            frame_index,
        });
        // The callback may have stopped the loop.
        if self.phase.get() != Phase::Stopped {
            self.request();
        }
    }
}

/// A `requestAnimationFrame` loop that emits one [`FrameTick`] per frame.
///
/// The loop is idle until [`start`](Self::start). It keeps re-requesting
/// frames until [`stop`](Self::stop) or drop. Pages with no shutdown path
/// keep it alive with `core::mem::forget`.
pub struct RafLoop {
    shared: Rc<Shared>,
}

impl RafLoop {
    /// Creates an idle loop that will hand each frame to `on_tick`.
    pub fn new(on_tick: impl FnMut(FrameTick) + 'static) -> Self {
        Self {
            shared: Rc::new(Shared {
                phase: Cell::new(Phase::Stopped),
                next_frame: Cell::new(0),
                on_tick: RefCell::new(Box::new(on_tick)),
                js: RefCell::new(None),
            }),
        }
    }

    /// Requests the first frame. No-op while running.
    pub fn start(&self) {
        if self.is_running() {
            return;
        }
        if self.shared.js.borrow().is_none() {
            let shared = Rc::clone(&self.shared);
            let js = Closure::wrap(
                Box::new(move |ms: f64| shared.fire(ms)) as Box<dyn FnMut(f64)>
            );
            *self.shared.js.borrow_mut() = Some(js);
        }
        self.shared.request();
    }

    /// Cancels the pending frame. Frame indices continue after a restart.
    pub fn stop(&self) {
        if let Phase::Pending(id) = self.shared.phase.replace(Phase::Stopped) {
            cancel_animation_frame(id);
        }
    }

    /// Whether a frame is pending.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.shared.phase.get() != Phase::Stopped
    }
}

impl Drop for RafLoop {
    fn drop(&mut self) {
        self.stop();
        // The closure holds an `Rc` to `shared`; release the cycle.
        self.shared.js.borrow_mut().take();
    }
}

impl core::fmt::Debug for RafLoop {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RafLoop")
            .field("phase", &self.shared.phase.get())
            .field("next_frame", &self.shared.next_frame.get())
            .finish_non_exhaustive()
    }
}
