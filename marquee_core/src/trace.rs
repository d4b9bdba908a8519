// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the frame loop.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! [`Scheduler`](crate::scheduler::Scheduler) calls as belts are built,
//! advanced, and driven by input. All method bodies default to no-ops, so
//! implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per call).

use crate::belt::BeltId;
use crate::clock::FrameTick;
use crate::interaction::{Command, Routed};
use crate::time::HostTime;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Why a container did not become a belt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// The user prefers reduced motion; markup stays static.
    ReducedMotion,
    /// Fewer than two original items; nothing to loop.
    TooFewItems,
}

impl SkipReason {
    /// Short stable name, for log lines and trace exports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ReducedMotion => "reduced-motion",
            Self::TooFewItems => "too-few-items",
        }
    }
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted once per scheduler frame, after every belt has been stepped.
#[derive(Clone, Copy, Debug)]
pub struct FrameEvent {
    /// Monotonic frame counter.
    pub frame_index: u64,
    /// Host time when the tick was generated.
    pub now: HostTime,
    /// Clamped step applied to every belt, in seconds.
    pub dt: f64,
    /// Number of belts whose position was written this frame.
    pub belts_moved: u32,
}

impl FrameEvent {
    /// Creates a `FrameEvent` from a [`FrameTick`] plus the frame's results.
    #[must_use]
    pub fn new(tick: &FrameTick, dt: f64, belts_moved: u32) -> Self {
        Self {
            frame_index: tick.frame_index,
            now: tick.now,
            dt,
            belts_moved,
        }
    }
}

/// Emitted after a belt's strip is (re)built.
#[derive(Clone, Copy, Debug)]
pub struct BuildEvent {
    /// Which belt.
    pub belt: BeltId,
    /// Measured (or fallback) loop length.
    pub loop_length: f64,
    /// Rolling speed derived from the loop length.
    pub speed: f64,
    /// Number of duplicate sets appended.
    pub copies: usize,
    /// Strip extent after duplication.
    pub extent: f64,
    /// `true` for a resize rebuild, `false` for the initial build.
    pub rebuilt: bool,
}

/// Emitted when a container is not turned into a belt.
#[derive(Clone, Copy, Debug)]
pub struct SkipEvent {
    /// Why the container was skipped.
    pub reason: SkipReason,
    /// Number of original items the container had.
    pub items: usize,
}

/// Emitted for every dispatched [`Command`].
#[derive(Clone, Copy, Debug)]
pub struct CommandEvent {
    /// Target belt.
    pub belt: BeltId,
    /// The command.
    pub command: Command,
    /// What the router did with it.
    pub routed: Routed,
}

/// Emitted when a snap toward an item begins.
#[derive(Clone, Copy, Debug)]
pub struct SnapBeginEvent {
    /// Which belt.
    pub belt: BeltId,
    /// Strip index of the item being centered.
    pub item: usize,
    /// Position when the snap began.
    pub from: f64,
    /// Position that centers the item.
    pub target: f64,
}

/// Emitted on the frame a snap reaches its target.
#[derive(Clone, Copy, Debug)]
pub struct SnapSettledEvent {
    /// Which belt.
    pub belt: BeltId,
    /// Frame on which the snap settled.
    pub frame_index: u64,
    /// Final position (equal to the snap target).
    pub position: f64,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the scheduler.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called after every belt has been stepped for a frame.
    fn on_frame(&mut self, e: &FrameEvent) {
        _ = e;
    }

    /// Called after a belt's strip is built or rebuilt.
    fn on_belt_built(&mut self, e: &BuildEvent) {
        _ = e;
    }

    /// Called when a container is not turned into a belt.
    fn on_belt_skipped(&mut self, e: &SkipEvent) {
        _ = e;
    }

    /// Called for every dispatched command.
    fn on_command(&mut self, e: &CommandEvent) {
        _ = e;
    }

    /// Called when a snap begins.
    fn on_snap_begin(&mut self, e: &SnapBeginEvent) {
        _ = e;
    }

    /// Called when a snap settles.
    fn on_snap_settled(&mut self, e: &SnapSettledEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Runs `f` against the sink, if there is one.
    #[inline]
    fn emit(&mut self, f: impl FnOnce(&mut (dyn TraceSink + 'a))) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            f(&mut **s);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = f;
        }
    }

    /// Emits a [`FrameEvent`].
    #[inline]
    pub fn frame(&mut self, e: &FrameEvent) {
        self.emit(|s| s.on_frame(e));
    }

    /// Emits a [`BuildEvent`].
    #[inline]
    pub fn belt_built(&mut self, e: &BuildEvent) {
        self.emit(|s| s.on_belt_built(e));
    }

    /// Emits a [`SkipEvent`].
    #[inline]
    pub fn belt_skipped(&mut self, e: &SkipEvent) {
        self.emit(|s| s.on_belt_skipped(e));
    }

    /// Emits a [`CommandEvent`].
    #[inline]
    pub fn command(&mut self, e: &CommandEvent) {
        self.emit(|s| s.on_command(e));
    }

    /// Emits a [`SnapBeginEvent`].
    #[inline]
    pub fn snap_begin(&mut self, e: &SnapBeginEvent) {
        self.emit(|s| s.on_snap_begin(e));
    }

    /// Emits a [`SnapSettledEvent`].
    #[inline]
    pub fn snap_settled(&mut self, e: &SnapSettledEvent) {
        self.emit(|s| s.on_snap_settled(e));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tick() -> FrameTick {
        FrameTick {
            now: HostTime(1_000_000),
            frame_index: 42,
        }
    }

    #[test]
    fn frame_event_from_tick() {
        let evt = FrameEvent::new(&sample_tick(), 0.016, 3);
        assert_eq!(evt.frame_index, 42);
        assert_eq!(evt.now, HostTime(1_000_000));
        assert_eq!(evt.belts_moved, 3);
    }

    #[test]
    fn skip_reason_names_are_stable() {
        assert_eq!(SkipReason::ReducedMotion.as_str(), "reduced-motion");
        assert_eq!(SkipReason::TooFewItems.as_str(), "too-few-items");
    }

    #[test]
    fn noop_sink_compiles() {
        let mut sink = NoopSink;
        sink.on_frame(&FrameEvent::new(&sample_tick(), 0.0, 0));
        sink.on_belt_skipped(&SkipEvent {
            reason: SkipReason::TooFewItems,
            items: 1,
        });
        sink.on_command(&CommandEvent {
            belt: BeltId(0),
            command: Command::HoverEnter,
            routed: Routed::Applied,
        });
    }

    #[test]
    fn tracer_none_does_nothing() {
        let mut tracer = Tracer::none();
        tracer.frame(&FrameEvent::new(&sample_tick(), 0.0, 0));
        tracer.snap_settled(&SnapSettledEvent {
            belt: BeltId(1),
            frame_index: 0,
            position: 0.0,
        });
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_sink() {
        use alloc::vec::Vec;

        struct RecordingSink {
            frames: Vec<u64>,
            skips: Vec<SkipReason>,
        }
        impl TraceSink for RecordingSink {
            fn on_frame(&mut self, e: &FrameEvent) {
                self.frames.push(e.frame_index);
            }
            fn on_belt_skipped(&mut self, e: &SkipEvent) {
                self.skips.push(e.reason);
            }
        }

        let mut sink = RecordingSink {
            frames: Vec::new(),
            skips: Vec::new(),
        };
        let mut tracer = Tracer::new(&mut sink);
        tracer.frame(&FrameEvent::new(&sample_tick(), 0.0, 0));
        tracer.belt_skipped(&SkipEvent {
            reason: SkipReason::ReducedMotion,
            items: 4,
        });
        // Access sink after tracer is dropped.
        drop(tracer);
        assert_eq!(sink.frames, &[42]);
        assert_eq!(sink.skips, &[SkipReason::ReducedMotion]);
    }
}
