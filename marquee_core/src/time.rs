// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Monotonic host time.
//!
//! [`HostTime`] is a point in time in platform-native ticks. Each backend
//! reports its own [`Timebase`]; the web backend uses microsecond ticks so a
//! `requestAnimationFrame` timestamp converts without loss.

use core::fmt;

/// A point in time expressed as platform-native monotonic ticks.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct HostTime(pub u64);

impl HostTime {
    /// Returns the raw tick value.
    #[inline]
    #[must_use]
    pub const fn ticks(self) -> u64 {
        self.0
    }

    /// Ticks elapsed since `earlier`, or zero if `earlier` is later.
    #[inline]
    #[must_use]
    pub const fn saturating_ticks_since(self, earlier: Self) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    /// Seconds elapsed since `earlier` under `timebase`, never negative.
    #[inline]
    #[must_use]
    pub fn secs_since(self, earlier: Self, timebase: Timebase) -> f64 {
        timebase.ticks_to_secs(self.saturating_ticks_since(earlier))
    }
}

impl fmt::Debug for HostTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HostTime({})", self.0)
    }
}

/// Rational conversion factor from ticks to nanoseconds.
///
/// `nanoseconds = ticks * numer / denom`
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timebase {
    /// Numerator of the ticks-to-nanoseconds ratio.
    pub numer: u32,
    /// Denominator of the ticks-to-nanoseconds ratio.
    pub denom: u32,
}

impl Timebase {
    /// Ticks are nanoseconds.
    pub const NANOS: Self = Self { numer: 1, denom: 1 };

    /// Ticks are microseconds (the web backend).
    pub const MICROS: Self = Self {
        numer: 1000,
        denom: 1,
    };

    /// Creates a new timebase.
    ///
    /// # Panics
    ///
    /// Panics if `denom` is zero.
    #[inline]
    #[must_use]
    pub const fn new(numer: u32, denom: u32) -> Self {
        assert!(denom != 0, "timebase denominator must not be zero");
        Self { numer, denom }
    }

    /// Converts a tick count to nanoseconds.
    #[inline]
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "u128 intermediate avoids overflow; truncation back to u64 is intentional"
    )]
    pub const fn ticks_to_nanos(self, ticks: u64) -> u64 {
        (ticks as u128 * self.numer as u128 / self.denom as u128) as u64
    }

    /// Converts a tick count to fractional seconds.
    #[inline]
    #[must_use]
    pub fn ticks_to_secs(self, ticks: u64) -> f64 {
        self.ticks_to_nanos(ticks) as f64 / 1e9
    }

    /// Converts fractional milliseconds (a `DOMHighResTimeStamp`) to ticks.
    #[inline]
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "timestamps are small positive values; negative input saturates to zero"
    )]
    pub fn millis_to_ticks(self, millis: f64) -> u64 {
        let nanos = millis * 1e6;
        (nanos * f64::from(self.denom) / f64::from(self.numer)) as u64
    }
}

impl fmt::Debug for Timebase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timebase({}/{})", self.numer, self.denom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn micros_timebase_converts_to_seconds() {
        let tb = Timebase::MICROS;
        assert_eq!(tb.ticks_to_nanos(1), 1000, "1 µs tick");
        assert!(
            (tb.ticks_to_secs(500_000) - 0.5).abs() < 1e-12,
            "500k µs is half a second"
        );
    }

    #[test]
    fn raf_millis_become_micro_ticks() {
        let tb = Timebase::MICROS;
        assert_eq!(tb.millis_to_ticks(16.5), 16_500, "16.5 ms");
        assert_eq!(tb.millis_to_ticks(-3.0), 0, "negative saturates");
    }

    #[test]
    fn secs_since_never_goes_negative() {
        let tb = Timebase::NANOS;
        let a = HostTime(2_000_000_000);
        let b = HostTime(1_000_000_000);
        assert!((a.secs_since(b, tb) - 1.0).abs() < 1e-12, "one second");
        assert_eq!(b.secs_since(a, tb), 0.0, "backwards is zero");
    }
}
