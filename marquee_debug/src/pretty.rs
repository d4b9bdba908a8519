// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr). Timestamps
//! are converted to microseconds using a [`Timebase`].

use std::io::Write;

use marquee_core::interaction::{Command, Routed};
use marquee_core::time::{HostTime, Timebase};
use marquee_core::trace::{
    BuildEvent, CommandEvent, FrameEvent, SkipEvent, SnapBeginEvent, SnapSettledEvent, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
    timebase: Timebase,
    quiet_frames: bool,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink")
            .field("timebase", &self.timebase)
            .field("quiet_frames", &self.quiet_frames)
            .finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr(timebase: Timebase) -> Self {
        Self::new(Box::new(std::io::stderr()), timebase)
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>, timebase: Timebase) -> Self {
        Self::with_writer(writer, timebase)
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W, timebase: Timebase) -> Self {
        Self {
            writer,
            timebase,
            quiet_frames: false,
        }
    }

    /// Skips frames in which no belt moved.
    #[must_use]
    pub fn quiet_frames(mut self, quiet: bool) -> Self {
        self.quiet_frames = quiet;
        self
    }

    /// Consumes the sink and returns the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn host_us(&self, t: HostTime) -> f64 {
        self.timebase.ticks_to_nanos(t.ticks()) as f64 / 1000.0
    }
}

fn command_name(command: Command) -> String {
    match command {
        Command::HoverEnter => "hover-enter".into(),
        Command::HoverLeave => "hover-leave".into(),
        Command::Advance(dir) => format!("advance:{dir:?}"),
        Command::HoldStart(dir) => format!("hold:{dir:?}"),
        Command::HoldEnd => "hold-end".into(),
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_frame(&mut self, e: &FrameEvent) {
        if self.quiet_frames && e.belts_moved == 0 {
            return;
        }
        let _ = writeln!(
            self.writer,
            "[frame] frame={} now={:.1}µs dt={:.2}ms moved={}",
            e.frame_index,
            self.host_us(e.now),
            e.dt * 1000.0,
            e.belts_moved,
        );
    }

    fn on_belt_built(&mut self, e: &BuildEvent) {
        let kind = if e.rebuilt { "rebuild" } else { "build" };
        let _ = writeln!(
            self.writer,
            "[{kind}] belt={} loop={:.1}px speed={:.2}px/s copies={} extent={:.1}px",
            e.belt.index(),
            e.loop_length,
            e.speed,
            e.copies,
            e.extent,
        );
    }

    fn on_belt_skipped(&mut self, e: &SkipEvent) {
        let _ = writeln!(
            self.writer,
            "[skip] reason={} items={}",
            e.reason.as_str(),
            e.items,
        );
    }

    fn on_command(&mut self, e: &CommandEvent) {
        let routed = match e.routed {
            Routed::Applied => "applied".to_string(),
            Routed::Snap { item, target } => format!("snap item={item} target={target:.1}"),
            Routed::Ignored => "ignored".to_string(),
        };
        let _ = writeln!(
            self.writer,
            "[command] belt={} {} -> {routed}",
            e.belt.index(),
            command_name(e.command),
        );
    }

    fn on_snap_begin(&mut self, e: &SnapBeginEvent) {
        let _ = writeln!(
            self.writer,
            "[snap:begin] belt={} item={} from={:.1} to={:.1}",
            e.belt.index(),
            e.item,
            e.from,
            e.target,
        );
    }

    fn on_snap_settled(&mut self, e: &SnapSettledEvent) {
        let _ = writeln!(
            self.writer,
            "[snap:settled] belt={} frame={} at={:.1}",
            e.belt.index(),
            e.frame_index,
            e.position,
        );
    }
}
