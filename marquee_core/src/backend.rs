// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend contract for platform integrations.
//!
//! Marquee splits browser-specific work into *backend* crates. Each backend
//! provides the following pieces:
//!
//! - **Tick source**: Produces [`FrameTick`] values via a platform mechanism
//!   (e.g. `requestAnimationFrame`). This is backend-specific and not
//!   abstracted by a trait because setup and lifecycle differ across
//!   platforms.
//!
//! - **Time**: `now() -> HostTime` and `timebase() -> Timebase` free
//!   functions that read the platform's monotonic clock.
//!
//! - **Track surface**: Implements
//!   [`TrackSurface`](crate::belt::TrackSurface) over the container and its
//!   items so the geometry builder and focus calculator can query layout.
//!
//! - **Presenter**: Implements the [`Presenter`] trait to write each belt's
//!   offset, pause indicator, and focus styling to the page.
//!
//! - **Input**: Translates pointer and button events into
//!   [`Command`](crate::interaction::Command)s for
//!   [`Scheduler::dispatch`](crate::scheduler::Scheduler::dispatch).
//!
//! # Crate boundaries
//!
//! `marquee_core` owns the data model, the update rules, scheduling, and this
//! contract module. Backend crates depend on `marquee_core` and provide
//! platform glue. Application code depends on both and wires them together
//! in a frame loop.
//!
//! [`FrameTick`]: crate::clock::FrameTick

use crate::belt::{BeltId, FocusFrame};

/// What a presenter needs to render one belt for one frame.
#[derive(Clone, Copy, Debug)]
pub struct BeltFrame<'a> {
    /// Which belt.
    pub id: BeltId,
    /// Horizontal offset to apply to the strip (the negated position).
    pub offset: f64,
    /// The position was written this frame.
    pub moved: bool,
    /// Whether rolling is suspended (drives the `paused` indicator).
    pub paused: bool,
    /// Fresh focus results, when the focus calculator ran this frame.
    pub focus: Option<&'a FocusFrame>,
}

/// Applies belt frames to a platform-native presentation tree.
///
/// DOM-based presenters and test doubles implement this trait, enabling a
/// generic frame loop.
///
/// # Frame loop pseudocode
///
/// A typical frame callback wires the pieces together like this:
///
/// ```rust,ignore
/// fn on_frame(tick: FrameTick) {
///     // Input handlers have already called scheduler.dispatch(...).
///     scheduler.frame(&tick, &mut presenter, &mut tracer);
/// }
/// ```
pub trait Presenter<S: ?Sized> {
    /// Applies `frame` to the belt backed by `surface`.
    fn apply(&mut self, surface: &S, frame: &BeltFrame<'_>);
}
