// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory [`TrackSurface`] for tests.

use alloc::vec::Vec;

use kurbo::Rect;

use super::TrackSurface;

/// A strip of fixed-width items laid out left to right with a constant gap.
#[derive(Clone, Debug)]
pub(crate) struct StripDouble {
    pub(crate) container_width: f64,
    pub(crate) gap: f64,
    originals: Vec<f64>,
    items: Vec<f64>,
    pub(crate) duplicate_passes: usize,
}

impl StripDouble {
    pub(crate) fn new(container_width: f64, gap: f64, widths: &[f64]) -> Self {
        Self {
            container_width,
            gap,
            originals: widths.to_vec(),
            items: widths.to_vec(),
            duplicate_passes: 0,
        }
    }

    /// `count` items of equal `width`.
    pub(crate) fn uniform(container_width: f64, gap: f64, width: f64, count: usize) -> Self {
        let widths: Vec<f64> = core::iter::repeat_n(width, count).collect();
        Self::new(container_width, gap, &widths)
    }
}

impl TrackSurface for StripDouble {
    fn container_width(&self) -> f64 {
        self.container_width
    }

    fn original_count(&self) -> usize {
        self.originals.len()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn item_rect(&self, index: usize) -> Option<Rect> {
        let width = *self.items.get(index)?;
        let x: f64 = self.items[..index].iter().map(|w| w + self.gap).sum();
        Some(Rect::new(x, 0.0, x + width, 40.0))
    }

    fn extent(&self) -> f64 {
        if self.items.is_empty() {
            return 0.0;
        }
        let widths: f64 = self.items.iter().sum();
        widths + self.gap * (self.items.len() - 1) as f64
    }

    fn remove_duplicates(&mut self) {
        self.items.truncate(self.originals.len());
    }

    fn append_duplicate_set(&mut self) {
        self.items.extend_from_slice(&self.originals);
        self.duplicate_passes += 1;
    }
}
