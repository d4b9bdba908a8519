// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page-level belt driver and its DOM event wiring.
//!
//! [`Conveyors`] bundles the [`Scheduler`], the [`DomPresenter`], and a trace
//! sink. It is shared as `Rc<RefCell<Conveyors>>` between the frame loop and
//! the event listeners installed by [`Conveyors::install`]. Listeners only
//! dispatch [`Command`]s; the next frame applies them.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::RefCell;

use marquee_core::belt::BeltId;
use marquee_core::clock::FrameTick;
use marquee_core::config::{BeltConfig, SchedulerConfig};
use marquee_core::interaction::{Command, Direction};
use marquee_core::scheduler::Scheduler;
use marquee_core::trace::{NoopSink, TraceSink, Tracer};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget, HtmlElement};

use crate::presenter::DomPresenter;
use crate::track::DomTrack;

/// Every belt on the page.
pub struct Conveyors {
    scheduler: Scheduler<DomTrack>,
    presenter: DomPresenter,
    sink: Box<dyn TraceSink>,
}

impl core::fmt::Debug for Conveyors {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Conveyors")
            .field("belts", &self.scheduler.len())
            .finish_non_exhaustive()
    }
}

impl Conveyors {
    /// Creates an empty driver using the web timebase.
    #[must_use]
    pub fn new(config: SchedulerConfig) -> Self {
        Self::with_sink(config, Box::new(NoopSink))
    }

    /// Same as [`new`](Self::new), sending trace events to `sink`.
    #[must_use]
    pub fn with_sink(config: SchedulerConfig, sink: Box<dyn TraceSink>) -> Self {
        Self {
            scheduler: Scheduler::new(config, crate::timebase()),
            presenter: DomPresenter::new(),
            sink,
        }
    }

    /// Shares the driver with event listeners.
    #[must_use]
    pub fn into_shared(self) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(self))
    }

    /// The underlying scheduler.
    #[must_use]
    pub fn scheduler(&self) -> &Scheduler<DomTrack> {
        &self.scheduler
    }

    /// Advances every belt to `tick`.
    pub fn frame(&mut self, tick: &FrameTick) {
        let mut tracer = Tracer::new(&mut *self.sink);
        self.scheduler.frame(tick, &mut self.presenter, &mut tracer);
    }

    /// Routes `command` to belt `id`.
    pub fn dispatch(&mut self, id: BeltId, command: Command) -> bool {
        let mut tracer = Tracer::new(&mut *self.sink);
        self.scheduler.dispatch(id, command, &mut tracer)
    }

    /// Rebuilds every strip for the new viewport size.
    pub fn resize(&mut self) {
        let mut tracer = Tracer::new(&mut *self.sink);
        self.scheduler.resize(&mut tracer);
    }

    /// Turns `container` into a belt and wires its listeners.
    ///
    /// Returns `None` if the container was already installed, has too few
    /// items, or motion is reduced.
    pub fn install(
        this: &Rc<RefCell<Self>>,
        container: HtmlElement,
        item_selector: &str,
        belt: BeltConfig,
    ) -> Option<BeltId> {
        let surface = DomTrack::new(container, item_selector, &belt)?;
        let (id, container, controls) = {
            let mut conveyors = this.borrow_mut();
            let conveyors = &mut *conveyors;
            let mut tracer = Tracer::new(&mut *conveyors.sink);
            let id = conveyors.scheduler.register(surface, belt, &mut tracer)?;
            let surface = conveyors.scheduler.surface(id)?;
            (id, surface.container().clone(), surface.controls().cloned())
        };

        listen(this, &container, "mouseenter", id, Command::HoverEnter, false);
        listen(this, &container, "mouseleave", id, Command::HoverLeave, false);

        if let Some(controls) = controls {
            for (button, dir) in [
                (&controls.previous, Direction::Previous),
                (&controls.next, Direction::Next),
            ] {
                listen(this, button, "click", id, Command::Advance(dir), true);
                listen(this, button, "pointerdown", id, Command::HoldStart(dir), true);
                listen(this, button, "pointerup", id, Command::HoldEnd, false);
                listen(this, button, "pointerleave", id, Command::HoldEnd, false);
            }
        }
        Some(id)
    }
}

/// Dispatches `command` to belt `id` whenever `target` fires `event`.
fn listen(
    conveyors: &Rc<RefCell<Conveyors>>,
    target: &EventTarget,
    event: &str,
    id: BeltId,
    command: Command,
    prevent_default: bool,
) {
    let conveyors = Rc::clone(conveyors);
    let closure = Closure::wrap(Box::new(move |e: Event| {
        if prevent_default {
            e.prevent_default();
        }
        // Listeners can fire re-entrantly from inside a frame; drop the
        // command rather than panic on the borrow.
        if let Ok(mut c) = conveyors.try_borrow_mut() {
            c.dispatch(id, command);
        }
    }) as Box<dyn FnMut(Event)>);
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    // Listeners live as long as the page.
    closure.forget();
}
