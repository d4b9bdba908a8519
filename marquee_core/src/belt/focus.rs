// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Centering and focus weights for card belts.
//!
//! Every item's center is projected into container space by subtracting the
//! belt position. The item closest to the container's horizontal center is
//! the *centered* item; every item also gets a continuous weight
//! `max(0, 1 - distance / falloff)` so that styling can fade items out
//! smoothly rather than highlighting a single one.

use alloc::vec::Vec;

use crate::config::SchedulerConfig;

use super::TrackSurface;

/// Focus results for one belt at one instant.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FocusFrame {
    /// Index of the item nearest the container center.
    pub centered: Option<usize>,
    /// Focus weight in `[0, 1]` for every item in strip order.
    pub weights: Vec<f64>,
}

impl FocusFrame {
    /// Weight of the item at `index`, or 0 if out of range.
    #[must_use]
    pub fn weight(&self, index: usize) -> f64 {
        self.weights.get(index).copied().unwrap_or(0.0)
    }
}

/// Falloff distance for a container of `width`.
#[must_use]
pub fn falloff(width: f64, config: &SchedulerConfig) -> f64 {
    (width * config.focus_scale).clamp(config.focus_min, config.focus_max)
}

/// Distance of the item at `index` from the container center when the belt
/// sits at `position`.
fn distance_from_center<S: TrackSurface + ?Sized>(
    surface: &S,
    index: usize,
    position: f64,
    half_width: f64,
) -> Option<f64> {
    let rect = surface.item_rect(index)?;
    let screen_center = rect.center().x - position;
    Some((screen_center - half_width).abs())
}

/// Walks the strip once, reporting each item's distance from the center
/// (`None` for items without geometry) and returning the nearest item.
fn scan<S: TrackSurface + ?Sized>(
    surface: &S,
    position: f64,
    half_width: f64,
    mut each: impl FnMut(Option<f64>),
) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for i in 0..surface.len() {
        let d = distance_from_center(surface, i, position, half_width);
        each(d);
        if let Some(d) = d
            && best.is_none_or(|(_, bd)| d < bd)
        {
            best = Some((i, d));
        }
    }
    best.map(|(i, _)| i)
}

/// Finds the item nearest the container center.
///
/// Returns `None` for an empty strip or a container with no width.
#[must_use]
pub fn centered<S: TrackSurface + ?Sized>(surface: &S, position: f64) -> Option<usize> {
    let width = surface.container_width();
    if width <= 0.0 {
        return None;
    }
    scan(surface, position, width / 2.0, |_| {})
}

/// Computes the centered item and every item's focus weight into `out`.
///
/// `out` is cleared first. Nothing is computed for a zero-width container,
/// and `false` is returned.
pub fn compute<S: TrackSurface + ?Sized>(
    surface: &S,
    position: f64,
    config: &SchedulerConfig,
    out: &mut FocusFrame,
) -> bool {
    out.centered = None;
    out.weights.clear();

    let width = surface.container_width();
    if width <= 0.0 {
        return false;
    }
    let falloff = falloff(width, config);
    let weights = &mut out.weights;
    let centered = scan(surface, position, width / 2.0, |d| {
        weights.push(d.map_or(0.0, |d| (1.0 - d / falloff).max(0.0)));
    });

    if let Some(c) = centered {
        out.weights[c] = 1.0;
    }
    out.centered = centered;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::belt::testing::StripDouble;

    fn cfg() -> SchedulerConfig {
        SchedulerConfig::site()
    }

    #[test]
    fn falloff_is_clamped() {
        assert_eq!(falloff(100.0, &cfg()), 320.0, "floor");
        assert_eq!(falloff(2000.0, &cfg()), 620.0, "ceiling");
        assert!((falloff(800.0, &cfg()) - 440.0).abs() < 1e-9, "55% in range");
    }

    #[test]
    fn centered_item_tracks_position() {
        // Items 200 wide, gap 0: centers at 100, 300, 500, ...
        let strip = StripDouble::uniform(600.0, 0.0, 200.0, 5);
        assert_eq!(centered(&strip, 0.0), Some(1), "300 sits on the 300 center");
        assert_eq!(centered(&strip, 200.0), Some(2));
        assert_eq!(centered(&strip, 380.0), Some(3), "nearest wins");
    }

    #[test]
    fn weights_fall_off_with_distance() {
        let strip = StripDouble::uniform(600.0, 0.0, 200.0, 5);
        let mut frame = FocusFrame::default();
        assert!(compute(&strip, 0.0, &cfg(), &mut frame));
        assert_eq!(frame.centered, Some(1));
        assert_eq!(frame.weight(1), 1.0, "centered item forced to full focus");
        // falloff = clamp(330, 320, 620) = 330; item 0 is 200 away.
        assert!((frame.weight(0) - (1.0 - 200.0 / 330.0)).abs() < 1e-9);
        assert_eq!(frame.weight(4), 0.0, "far items fade out completely");
        assert_eq!(frame.weights.len(), 5);
    }

    #[test]
    fn zero_width_container_yields_nothing() {
        let strip = StripDouble::uniform(0.0, 0.0, 200.0, 5);
        let mut frame = FocusFrame {
            centered: Some(3),
            weights: alloc::vec![1.0],
        };
        assert!(!compute(&strip, 0.0, &cfg(), &mut frame));
        assert_eq!(frame, FocusFrame::default(), "stale results cleared");
        assert_eq!(centered(&strip, 0.0), None);
    }

    #[test]
    fn centered_agrees_with_compute() {
        let strip = StripDouble::new(700.0, 12.0, &[180.0, 90.0, 240.0, 130.0, 60.0]);
        let mut frame = FocusFrame::default();
        for step in 0..40 {
            let position = f64::from(step) * 17.5;
            assert!(compute(&strip, position, &cfg(), &mut frame));
            assert_eq!(
                centered(&strip, position),
                frame.centered,
                "position {position}"
            );
        }
    }
}
