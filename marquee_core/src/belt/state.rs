// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-belt state and the per-frame update rule.

use crate::config::SchedulerConfig;

/// Wraps `x` into `[0, m)`.
///
/// Returns 0 for a non-positive modulus or a non-finite `x`.
#[must_use]
pub fn normalize(x: f64, m: f64) -> f64 {
    if m <= 0.0 || !x.is_finite() {
        return 0.0;
    }
    let r = x % m;
    let wrapped = if r < 0.0 { r + m } else { r };
    // `r + m` can round up to exactly `m` for tiny negative remainders.
    if wrapped >= m { 0.0 } else { wrapped }
}

/// Shortest signed distance from `from` to `to` on a loop of length `m`.
///
/// Falls back to the plain difference for a non-positive modulus.
#[must_use]
pub fn wrap_delta(from: f64, to: f64, m: f64) -> f64 {
    if m <= 0.0 {
        return to - from;
    }
    let mut d = (to - from) % m;
    if d > m / 2.0 {
        d -= m;
    }
    if d < -m / 2.0 {
        d += m;
    }
    d
}

/// The mutually exclusive motion modes a belt can be in for one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BeltMode {
    /// Easing toward a snap target (card belts only).
    Snapping,
    /// Paused, but a navigation control is held down (card belts only).
    Scrubbing,
    /// Paused with no hold.
    Idle,
    /// Rolling at the belt's constant speed.
    Rolling,
}

/// What a single [`BeltState::step`] did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepOutcome {
    /// The position was written this frame.
    pub moved: bool,
    /// A snap reached its target this frame.
    pub settled: bool,
    /// The focus calculator should run for this belt.
    pub refocus: bool,
}

/// Scroll state of one belt.
///
/// `position` always lies in `[0, loop_length)`. Event handlers only flip
/// flags (`paused`, `hold`, the snap target); position integration happens
/// exclusively in [`step`](Self::step).
#[derive(Clone, Debug, PartialEq)]
pub struct BeltState {
    loop_length: f64,
    speed: f64,
    position: f64,
    paused: bool,
    hovered: bool,
    hold: i8,
    has_controls: bool,
    snap: Option<f64>,
    needs_focus: bool,
    centered: Option<usize>,
}

impl BeltState {
    /// Creates a rolling belt at position 0.
    #[must_use]
    pub fn new(loop_length: f64, speed: f64, has_controls: bool) -> Self {
        Self {
            loop_length,
            speed,
            position: 0.0,
            paused: false,
            hovered: false,
            hold: 0,
            has_controls,
            snap: None,
            needs_focus: true,
            centered: None,
        }
    }

    /// Distance after which the strip repeats.
    #[must_use]
    pub fn loop_length(&self) -> f64 {
        self.loop_length
    }

    /// Rolling speed in distance per second.
    #[must_use]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Current scroll offset in `[0, loop_length)`.
    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Offset to apply to the strip (content moves opposite to position).
    #[must_use]
    pub fn offset(&self) -> f64 {
        -self.position
    }

    /// Whether rolling is suspended.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Whether the pointer is over the container.
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Active hold direction: -1, 0, or +1.
    #[must_use]
    pub fn hold(&self) -> i8 {
        self.hold
    }

    /// Whether the belt has navigation controls.
    #[must_use]
    pub fn has_controls(&self) -> bool {
        self.has_controls
    }

    /// Target of the snap in progress, if any.
    #[must_use]
    pub fn snap_target(&self) -> Option<f64> {
        self.snap
    }

    /// Whether a snap is in progress.
    #[must_use]
    pub fn is_snapping(&self) -> bool {
        self.snap.is_some()
    }

    /// Item found nearest the center by the last focus pass.
    ///
    /// This is a hint only; geometry may have changed since.
    #[must_use]
    pub fn centered(&self) -> Option<usize> {
        self.centered
    }

    /// The mode [`step`](Self::step) will apply next.
    #[must_use]
    pub fn mode(&self) -> BeltMode {
        if self.has_controls && self.snap.is_some() {
            BeltMode::Snapping
        } else if self.paused {
            if self.has_controls && self.hold != 0 {
                BeltMode::Scrubbing
            } else {
                BeltMode::Idle
            }
        } else {
            BeltMode::Rolling
        }
    }

    /// Advances the belt by `dt` seconds.
    pub fn step(&mut self, dt: f64, config: &SchedulerConfig) -> StepOutcome {
        let mut out = StepOutcome::default();
        if self.loop_length <= 0.0 {
            return out;
        }

        match self.mode() {
            BeltMode::Snapping => {
                let target = self.snap.unwrap_or(self.position);
                let delta = wrap_delta(self.position, target, self.loop_length);
                let k = 1.0 - libm::pow(config.snap_base, dt);
                self.position = normalize(self.position + delta * k, self.loop_length);
                if delta.abs() < config.snap_epsilon {
                    self.position = normalize(target, self.loop_length);
                    self.snap = None;
                    out.settled = true;
                    if !self.hovered {
                        self.paused = false;
                    }
                }
                out.moved = true;
                out.refocus = true;
            }
            BeltMode::Scrubbing => {
                let v = self.speed * config.hold_multiplier * f64::from(self.hold);
                self.position = normalize(self.position + v * dt, self.loop_length);
                out.moved = true;
                out.refocus = true;
            }
            BeltMode::Idle => {
                out.refocus = self.needs_focus;
            }
            BeltMode::Rolling => {
                self.position = normalize(self.position + self.speed * dt, self.loop_length);
                out.moved = true;
                out.refocus = self.has_controls;
            }
        }

        if out.refocus {
            self.needs_focus = false;
        }
        out
    }

    /// Applies a new loop length and speed after a rebuild, keeping the
    /// current position and any snap target congruent in the new loop.
    pub fn remeasure(&mut self, loop_length: f64, speed: f64) {
        self.loop_length = loop_length;
        self.speed = speed;
        self.position = normalize(self.position, loop_length);
        self.snap = self.snap.map(|t| normalize(t, loop_length));
        self.needs_focus = true;
    }

    pub(crate) fn set_position(&mut self, position: f64) {
        self.position = normalize(position, self.loop_length);
    }

    pub(crate) fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub(crate) fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub(crate) fn set_hold(&mut self, hold: i8) {
        self.hold = hold.signum();
    }

    pub(crate) fn request_focus(&mut self) {
        self.needs_focus = true;
    }

    pub(crate) fn set_centered(&mut self, centered: Option<usize>) {
        self.centered = centered;
    }

    /// Starts a snap toward `target`; pauses rolling for the duration.
    pub(crate) fn begin_snap(&mut self, target: f64) {
        self.snap = Some(normalize(target, self.loop_length));
        self.paused = true;
    }
}
