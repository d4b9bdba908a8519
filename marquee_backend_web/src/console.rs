// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A [`TraceSink`] that logs to the browser console.
//!
//! Per-frame events are not logged; they would flood the console at 60 Hz.

use alloc::format;
use alloc::string::String;

use marquee_core::interaction::Routed;
use marquee_core::trace::{
    BuildEvent, CommandEvent, SkipEvent, SnapBeginEvent, SnapSettledEvent, TraceSink,
};
use wasm_bindgen::JsValue;

/// Logs belt lifecycle, input, and snap events with `console.log`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

fn log(line: &str) {
    web_sys::console::log_1(&JsValue::from_str(line));
}

fn build_line(e: &BuildEvent) -> String {
    format!(
        "[marquee] {:?} {} loop={:.1} speed={:.2} copies={} extent={:.1}",
        e.belt,
        if e.rebuilt { "rebuilt" } else { "built" },
        e.loop_length,
        e.speed,
        e.copies,
        e.extent,
    )
}

fn command_line(e: &CommandEvent) -> String {
    let outcome = match e.routed {
        Routed::Applied => String::from("applied"),
        Routed::Snap { item, target } => format!("snap item={item} target={target:.1}"),
        Routed::Ignored => String::from("ignored"),
    };
    format!("[marquee] {:?} {:?} → {outcome}", e.belt, e.command)
}

impl TraceSink for ConsoleSink {
    fn on_belt_built(&mut self, e: &BuildEvent) {
        log(&build_line(e));
    }

    fn on_belt_skipped(&mut self, e: &SkipEvent) {
        log(&format!(
            "[marquee] skipped ({}) items={}",
            e.reason.as_str(),
            e.items
        ));
    }

    fn on_command(&mut self, e: &CommandEvent) {
        log(&command_line(e));
    }

    fn on_snap_begin(&mut self, e: &SnapBeginEvent) {
        log(&format!(
            "[marquee] {:?} snap {:.1} → {:.1} (item {})",
            e.belt, e.from, e.target, e.item
        ));
    }

    fn on_snap_settled(&mut self, e: &SnapSettledEvent) {
        log(&format!(
            "[marquee] {:?} settled at {:.1} (frame {})",
            e.belt, e.position, e.frame_index
        ));
    }
}
