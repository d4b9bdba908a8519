// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame ticks and the shared frame clock.
//!
//! A backend tick source (e.g. `requestAnimationFrame`) delivers one
//! [`FrameTick`] per display refresh. [`FrameClock`] turns consecutive ticks
//! into elapsed seconds, clamped so that a long gap (a suspended tab, a
//! debugger pause) never produces a visible jump.

use crate::time::{HostTime, Timebase};

/// A frame opportunity delivered by a backend tick source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameTick {
    /// Host time when the tick was generated.
    pub now: HostTime,
    /// Monotonically increasing frame counter.
    pub frame_index: u64,
}

/// Derives per-frame deltas from monotonically increasing tick timestamps.
#[derive(Clone, Debug)]
pub struct FrameClock {
    timebase: Timebase,
    max_step: f64,
    last: Option<HostTime>,
}

impl FrameClock {
    /// Creates a clock for ticks in `timebase`, clamping each step to
    /// `max_step` seconds.
    #[must_use]
    pub const fn new(timebase: Timebase, max_step: f64) -> Self {
        Self {
            timebase,
            max_step,
            last: None,
        }
    }

    /// Advances to `now` and returns the elapsed seconds since the previous
    /// call, in `[0, max_step]`.
    ///
    /// The first call after construction or [`reset`](Self::reset) returns 0.
    pub fn advance(&mut self, now: HostTime) -> f64 {
        let dt = match self.last {
            Some(prev) => now.secs_since(prev, self.timebase),
            None => 0.0,
        };
        self.last = Some(now);
        dt.clamp(0.0, self.max_step)
    }

    /// Forgets the previous timestamp.
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Returns the timebase ticks are interpreted in.
    #[must_use]
    pub const fn timebase(&self) -> Timebase {
        self.timebase
    }

    /// Timestamp of the most recent tick, if any.
    #[must_use]
    pub const fn last(&self) -> Option<HostTime> {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> HostTime {
        HostTime(v * 1000)
    }

    #[test]
    fn first_advance_is_zero() {
        let mut clock = FrameClock::new(Timebase::MICROS, 0.05);
        assert_eq!(clock.advance(ms(1_000)), 0.0, "no previous tick");
        assert_eq!(clock.last(), Some(ms(1_000)));
    }

    #[test]
    fn steady_frames_report_elapsed_seconds() {
        let mut clock = FrameClock::new(Timebase::MICROS, 0.05);
        clock.advance(ms(0));
        let dt = clock.advance(ms(16));
        assert!((dt - 0.016).abs() < 1e-9, "expected 16 ms, got {dt}");
    }

    #[test]
    fn long_gaps_are_clamped() {
        let mut clock = FrameClock::new(Timebase::MICROS, 0.05);
        clock.advance(ms(0));
        let dt = clock.advance(ms(5_000));
        assert_eq!(dt, 0.05, "tab-suspend gap clamps to max step");
    }

    #[test]
    fn backwards_timestamp_yields_zero() {
        let mut clock = FrameClock::new(Timebase::MICROS, 0.05);
        clock.advance(ms(100));
        assert_eq!(clock.advance(ms(90)), 0.0, "non-monotonic input");
    }

    #[test]
    fn reset_restarts_from_zero() {
        let mut clock = FrameClock::new(Timebase::MICROS, 0.05);
        clock.advance(ms(0));
        clock.reset();
        assert_eq!(clock.advance(ms(40)), 0.0, "reset forgets last tick");
        assert!(clock.advance(ms(50)) > 0.0, "resumes afterwards");
    }
}
