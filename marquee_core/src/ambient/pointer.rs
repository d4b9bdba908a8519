// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cursor spotlight and page parallax.

use kurbo::{Point, Size, Vec2};

/// Parallax offset per pixel of pointer distance from the viewport center.
pub const PARALLAX_FACTOR: f64 = 0.02;

/// Where the spotlight rests before the pointer first moves.
#[must_use]
pub fn spotlight_rest(viewport: Size) -> Point {
    Point::new(viewport.width * 0.5, viewport.height * 0.25)
}

/// Where particle links anchor before the pointer first moves.
#[must_use]
pub fn pointer_rest(viewport: Size) -> Point {
    Point::new(viewport.width * 0.5, viewport.height * 0.35)
}

/// Parallax offset for a pointer at `pointer`.
#[must_use]
pub fn parallax(pointer: Point, viewport: Size) -> Vec2 {
    let center = viewport.to_rect().center();
    (pointer - center) * PARALLAX_FACTOR
}

/// Values to write after the pointer moved.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerUpdate {
    /// Spotlight center.
    pub spotlight: Point,
    /// Page parallax offset.
    pub parallax: Vec2,
}

/// Tracks the page pointer for the spotlight, parallax, and particle links.
#[derive(Clone, Copy, Debug)]
pub struct PointerTracker {
    viewport: Size,
    pointer: Point,
    reduced_motion: bool,
}

impl PointerTracker {
    /// Starts with the pointer at its rest position.
    #[must_use]
    pub fn new(viewport: Size, reduced_motion: bool) -> Self {
        Self {
            viewport,
            pointer: pointer_rest(viewport),
            reduced_motion,
        }
    }

    /// Whether the spotlight should be shown at all.
    #[must_use]
    pub fn spotlight_visible(&self) -> bool {
        !self.reduced_motion
    }

    /// Last known pointer position.
    #[must_use]
    pub fn pointer(&self) -> Point {
        self.pointer
    }

    /// Current viewport size.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Records a pointer move. Returns nothing under reduced motion.
    pub fn move_to(&mut self, pointer: Point) -> Option<PointerUpdate> {
        if self.reduced_motion {
            return None;
        }
        self.pointer = pointer;
        Some(PointerUpdate {
            spotlight: pointer,
            parallax: parallax(pointer, self.viewport),
        })
    }

    /// Follows a viewport resize.
    pub fn resize(&mut self, viewport: Size) {
        self.viewport = viewport;
    }
}
