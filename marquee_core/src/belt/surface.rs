// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout collaborator contract.

use kurbo::Rect;

/// The rendered strip of a belt, as seen by the core.
///
/// Implementations own the strip's elements (originals followed by any
/// duplicates) and answer geometry queries synchronously from committed
/// layout. Item indices run in strip order; indices below
/// [`original_count`](Self::original_count) are the originals.
pub trait TrackSurface {
    /// Visible width of the container.
    fn container_width(&self) -> f64;

    /// Number of original (non-duplicate) items.
    fn original_count(&self) -> usize;

    /// Total number of items in the strip, duplicates included.
    fn len(&self) -> usize;

    /// Whether the strip has no items at all.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bounds of the item at `index`, with `x` measured from the strip start.
    fn item_rect(&self, index: usize) -> Option<Rect>;

    /// Total rendered extent of the strip.
    fn extent(&self) -> f64;

    /// Removes every duplicate, keeping only the originals.
    fn remove_duplicates(&mut self);

    /// Appends one copy of the full original sequence.
    fn append_duplicate_set(&mut self);
}
