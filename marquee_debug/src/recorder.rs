// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording.
//!
//! [`RecorderSink`] implements [`TraceSink`] and appends every event, in
//! arrival order, to a `Vec<RecordedEvent>`. Belt events carry no timestamp
//! of their own; they belong to the frame recorded most recently before
//! them.

use marquee_core::trace::{
    BuildEvent, CommandEvent, FrameEvent, SkipEvent, SnapBeginEvent, SnapSettledEvent, TraceSink,
};

/// A single recorded trace event.
#[derive(Clone, Copy, Debug)]
pub enum RecordedEvent {
    /// A scheduler frame.
    Frame(FrameEvent),
    /// A strip build or resize rebuild.
    Built(BuildEvent),
    /// A container that did not become a belt.
    Skipped(SkipEvent),
    /// A dispatched command.
    Command(CommandEvent),
    /// A snap toward an item began.
    SnapBegin(SnapBeginEvent),
    /// A snap reached its target.
    SnapSettled(SnapSettledEvent),
}

/// A [`TraceSink`] that keeps every event in memory.
#[derive(Debug, Default)]
pub struct RecorderSink {
    events: Vec<RecordedEvent>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events in arrival order.
    #[must_use]
    pub fn events(&self) -> &[RecordedEvent] {
        &self.events
    }

    /// Consumes the recorder and returns the recorded events.
    #[must_use]
    pub fn into_events(self) -> Vec<RecordedEvent> {
        self.events
    }

    /// Number of recorded frames.
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, RecordedEvent::Frame(_)))
            .count()
    }

    /// Drops everything recorded so far.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl TraceSink for RecorderSink {
    fn on_frame(&mut self, e: &FrameEvent) {
        self.events.push(RecordedEvent::Frame(*e));
    }

    fn on_belt_built(&mut self, e: &BuildEvent) {
        self.events.push(RecordedEvent::Built(*e));
    }

    fn on_belt_skipped(&mut self, e: &SkipEvent) {
        self.events.push(RecordedEvent::Skipped(*e));
    }

    fn on_command(&mut self, e: &CommandEvent) {
        self.events.push(RecordedEvent::Command(*e));
    }

    fn on_snap_begin(&mut self, e: &SnapBeginEvent) {
        self.events.push(RecordedEvent::SnapBegin(*e));
    }

    fn on_snap_settled(&mut self, e: &SnapSettledEvent) {
        self.events.push(RecordedEvent::SnapSettled(*e));
    }
}
