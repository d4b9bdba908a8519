// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Strip construction and loop measurement.
//!
//! [`build`] turns a container's original items into a strip long enough
//! that continuous scrolling never exposes an empty gap:
//!
//! 1. Drop any duplicates from a previous build.
//! 2. Append whole copies of the original sequence until the strip extent
//!    exceeds `overscan` times the container width.
//! 3. Measure the loop length as the offset of the first duplicate, the
//!    distance after which the visual sequence repeats exactly.
//!
//! Rebuilding is idempotent: an unchanged container yields the same loop
//! length and the same number of duplicates.

use crate::config::SchedulerConfig;

use super::TrackSurface;

/// Result of a successful [`build`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackGeometry {
    /// Distance after which the strip repeats.
    pub loop_length: f64,
    /// Total rendered extent of the strip after duplication.
    pub extent: f64,
    /// Number of duplicate sets appended.
    pub copies: usize,
    /// Container width the strip was sized against.
    pub container_width: f64,
}

/// Rebuilds the strip on `surface` and measures its loop length.
///
/// Returns `None` when the surface has fewer than two original items; the
/// surface is left untouched in that case. `previous_loop` is the loop
/// length from an earlier build (0 if none) and is reused when the new one
/// cannot be measured.
pub fn build<S: TrackSurface + ?Sized>(
    surface: &mut S,
    previous_loop: f64,
    config: &SchedulerConfig,
) -> Option<TrackGeometry> {
    let originals = surface.original_count();
    if originals < 2 {
        return None;
    }

    surface.remove_duplicates();
    let container_width = surface.container_width().max(0.0);
    let needed = container_width * config.overscan;

    surface.append_duplicate_set();
    let mut copies = 1;
    let mut extent = surface.extent();
    while extent < needed {
        surface.append_duplicate_set();
        copies += 1;
        let grown = surface.extent();
        if grown <= extent {
            // Zero-width items: more copies will never help.
            extent = grown;
            break;
        }
        extent = grown;
    }

    let measured = surface
        .item_rect(originals)
        .map(|r| r.x0)
        .filter(|x| *x > 0.0);
    let loop_length = match measured {
        Some(x) => x,
        None if previous_loop > 0.0 => previous_loop,
        None => config.fallback_loop.max(container_width),
    };

    Some(TrackGeometry {
        loop_length,
        extent,
        copies,
        container_width,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::belt::testing::StripDouble;

    fn cfg() -> SchedulerConfig {
        SchedulerConfig::site()
    }

    #[test]
    fn fewer_than_two_items_is_a_no_op() {
        let mut strip = StripDouble::uniform(800.0, 10.0, 100.0, 1);
        assert!(build(&mut strip, 0.0, &cfg()).is_none(), "one item");
        assert_eq!(strip.len(), 1, "surface untouched");
        assert_eq!(strip.duplicate_passes, 0);

        let mut empty = StripDouble::uniform(800.0, 10.0, 100.0, 0);
        assert!(build(&mut empty, 0.0, &cfg()).is_none(), "no items");
    }

    #[test]
    fn loop_length_is_offset_of_first_duplicate() {
        let mut strip = StripDouble::new(500.0, 10.0, &[100.0, 60.0, 80.0]);
        let geo = build(&mut strip, 0.0, &cfg()).unwrap();
        // 100 + 10 + 60 + 10 + 80 + 10
        assert!((geo.loop_length - 270.0).abs() < 1e-9, "got {}", geo.loop_length);
    }

    #[test]
    fn extent_exceeds_overscan_of_container() {
        for &(width, count, container) in &[
            (100.0, 2, 320.0),
            (40.0, 3, 1280.0),
            (250.0, 7, 390.0),
            (12.0, 2, 1920.0),
        ] {
            let mut strip = StripDouble::uniform(container, 10.0, width, count);
            let geo = build(&mut strip, 0.0, &cfg()).unwrap();
            assert!(
                strip.extent() >= container * 2.2,
                "{count}x{width} in {container}: extent {}",
                strip.extent()
            );
            assert_eq!(geo.extent, strip.extent());
            assert_eq!(strip.len(), count * (geo.copies + 1), "whole copies only");
        }
    }

    #[test]
    fn tiny_items_in_a_wide_container_still_fill_the_overscan() {
        let mut strip = StripDouble::uniform(1920.0, 0.0, 2.0, 2);
        let geo = build(&mut strip, 0.0, &cfg()).unwrap();
        assert!(
            geo.extent >= 1920.0 * 2.2,
            "extent {} < {}",
            geo.extent,
            1920.0 * 2.2
        );
        // 4 px per set; one copy fewer would have fallen short.
        let needed = 1920.0 * cfg().overscan;
        assert!(
            (geo.copies as f64) * 4.0 < needed,
            "{} copies is more than needed",
            geo.copies
        );
        assert!((geo.loop_length - 4.0).abs() < 1e-9, "got {}", geo.loop_length);
    }

    #[test]
    fn rebuild_is_idempotent() {
        let mut strip = StripDouble::uniform(900.0, 14.0, 220.0, 4);
        let first = build(&mut strip, 0.0, &cfg()).unwrap();
        let len = strip.len();
        let second = build(&mut strip, first.loop_length, &cfg()).unwrap();
        assert!((first.loop_length - second.loop_length).abs() < 1e-9, "same loop");
        assert_eq!(strip.len(), len, "no duplicate accumulation");
        assert_eq!(first.copies, second.copies);
    }

    #[test]
    fn rebuild_after_resize_changes_copies_not_loop() {
        let mut strip = StripDouble::uniform(400.0, 10.0, 90.0, 3);
        let narrow = build(&mut strip, 0.0, &cfg()).unwrap();
        strip.container_width = 1600.0;
        let wide = build(&mut strip, narrow.loop_length, &cfg()).unwrap();
        assert!(wide.copies > narrow.copies, "wider container needs more copies");
        assert_eq!(narrow.loop_length, wide.loop_length, "loop depends on items only");
    }

    #[test]
    fn zero_width_items_fall_back_and_terminate() {
        let mut strip = StripDouble::new(500.0, 0.0, &[0.0, 0.0]);
        let geo = build(&mut strip, 0.0, &cfg()).unwrap();
        assert_eq!(geo.loop_length, 500.0, "max(320, container width)");
        assert_eq!(geo.copies, 2, "bailed out once extent stopped growing");

        let mut narrow = StripDouble::new(100.0, 0.0, &[0.0, 0.0]);
        let geo = build(&mut narrow, 0.0, &cfg()).unwrap();
        assert_eq!(geo.loop_length, 320.0, "never below the fallback");
    }

    #[test]
    fn unmeasurable_loop_keeps_previous_value() {
        let mut strip = StripDouble::new(500.0, 0.0, &[0.0, 0.0]);
        let geo = build(&mut strip, 640.0, &cfg()).unwrap();
        assert_eq!(geo.loop_length, 640.0);
    }
}
