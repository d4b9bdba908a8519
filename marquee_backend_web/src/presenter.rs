// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Writes belt frames to the DOM.
//!
//! The strip gets a `translateX()` transform, the container toggles the
//! `paused` class, and card items receive a `--focus` custom property plus
//! the `is-center` class on the centered item. Styling reacts to those; the
//! presenter never sets visual properties directly.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use marquee_core::backend::{BeltFrame, Presenter};
use marquee_core::belt::FocusFrame;

use crate::track::DomTrack;

/// CSS `transform` value for a strip offset.
#[must_use]
pub fn translate_x(offset: f64) -> String {
    format!("translateX({offset}px)")
}

/// `--focus` value for a weight, with three decimals.
#[must_use]
pub fn focus_value(weight: f64) -> String {
    format!("{:.3}", weight.clamp(0.0, 1.0))
}

/// Applies [`BeltFrame`]s to [`DomTrack`]s.
///
/// Remembers the last pause state per belt so the class list is only
/// touched when it changes.
#[derive(Debug, Default)]
pub struct DomPresenter {
    paused: Vec<Option<bool>>,
}

impl DomPresenter {
    /// Creates a presenter with no remembered state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `paused` for belt slot `slot`; returns whether it changed.
    fn pause_changed(&mut self, slot: usize, paused: bool) -> bool {
        if self.paused.len() <= slot {
            self.paused.resize(slot + 1, None);
        }
        let changed = self.paused[slot] != Some(paused);
        self.paused[slot] = Some(paused);
        changed
    }

    fn apply_focus(surface: &DomTrack, focus: &FocusFrame) {
        for (i, weight) in focus.weights.iter().enumerate() {
            let Some(el) = surface.item(i) else {
                continue;
            };
            let centered = focus.centered == Some(i);
            let value = if centered {
                String::from("1")
            } else {
                focus_value(*weight)
            };
            let _ = el.style().set_property("--focus", &value);
            let _ = el.class_list().toggle_with_force("is-center", centered);
        }
    }
}

impl Presenter<DomTrack> for DomPresenter {
    fn apply(&mut self, surface: &DomTrack, frame: &BeltFrame<'_>) {
        if frame.moved
            && let Some(track) = surface.track()
        {
            let _ = track
                .style()
                .set_property("transform", &translate_x(frame.offset));
        }

        if self.pause_changed(frame.id.index() as usize, frame.paused) {
            let _ = surface
                .container()
                .class_list()
                .toggle_with_force("paused", frame.paused);
        }

        if let Some(focus) = frame.focus {
            Self::apply_focus(surface, focus);
        }
    }
}
