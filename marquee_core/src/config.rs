// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tunables for the scheduler and for individual belts.

/// Motion constants shared by every belt a [`Scheduler`] drives.
///
/// [`Scheduler`]: crate::scheduler::Scheduler
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SchedulerConfig {
    /// Upper bound for a single frame step, in seconds.
    pub max_step: f64,
    /// Hold-to-scrub speed as a multiple of the belt's rolling speed.
    pub hold_multiplier: f64,
    /// Fraction of the remaining snap distance left after one second.
    ///
    /// Each frame covers `1 - snap_base^dt` of the remaining distance.
    pub snap_base: f64,
    /// Distance below which a snap settles exactly on its target.
    pub snap_epsilon: f64,
    /// Minimum strip extent as a multiple of the container width.
    pub overscan: f64,
    /// Lower bound for the loop length when it cannot be measured.
    pub fallback_loop: f64,
    /// Container-width scale for the focus falloff distance.
    pub focus_scale: f64,
    /// Smallest focus falloff distance.
    pub focus_min: f64,
    /// Largest focus falloff distance.
    pub focus_max: f64,
    /// The user asked for reduced motion; no belt is registered.
    pub reduced_motion: bool,
}

impl SchedulerConfig {
    /// Defaults used by the site.
    #[must_use]
    pub const fn site() -> Self {
        Self {
            max_step: 0.05,
            hold_multiplier: 1.25,
            snap_base: 0.0008,
            snap_epsilon: 0.6,
            overscan: 2.2,
            fallback_loop: 320.0,
            focus_scale: 0.55,
            focus_min: 320.0,
            focus_max: 620.0,
            reduced_motion: false,
        }
    }

    /// Same as [`site`](Self::site) with the motion preference applied.
    #[must_use]
    pub const fn with_reduced_motion(mut self, reduced: bool) -> Self {
        self.reduced_motion = reduced;
        self
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self::site()
    }
}

/// Per-belt options.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BeltConfig {
    /// Seconds one full loop takes while rolling.
    pub duration_secs: f64,
    /// Spacing between items, in pixels (applied by the backend).
    pub gap: f64,
    /// Whether the belt has navigation controls (card belts).
    pub controls: bool,
}

impl BeltConfig {
    /// Unified slow speed for every belt on the site.
    pub const DURATION_SECS: f64 = 30.0;

    /// Skill-tag belt: no controls.
    #[must_use]
    pub const fn tags() -> Self {
        Self {
            duration_secs: Self::DURATION_SECS,
            gap: 10.0,
            controls: false,
        }
    }

    /// Large-card belt with previous/next controls.
    #[must_use]
    pub const fn cards() -> Self {
        Self {
            duration_secs: Self::DURATION_SECS,
            gap: 14.0,
            controls: true,
        }
    }

    /// Rolling speed for a loop of `loop_length`.
    ///
    /// A non-positive duration is treated as one second.
    #[must_use]
    pub fn speed_for(&self, loop_length: f64) -> f64 {
        let duration = if self.duration_secs > 0.0 {
            self.duration_secs
        } else {
            1.0
        };
        loop_length / duration
    }
}
