// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Belt data model.
//!
//! A *belt* is one infinitely scrolling strip of items inside a container.
//! It has:
//!
//! - An identity ([`BeltId`]) handed out by the
//!   [`Scheduler`](crate::scheduler::Scheduler) at registration.
//! - A [`TrackSurface`]: the external layout collaborator that owns the
//!   rendered strip and answers geometry queries.
//! - A [`BeltState`]: position, speed, loop length, and the pause / hold /
//!   snap flags, plus the per-frame update rule.
//!
//! The [`geometry`] builder fills the strip with duplicated items and
//! measures the loop length; [`focus`] finds the item nearest the container
//! center and weights every item by its distance from it.

pub mod focus;
pub mod geometry;
mod id;
mod state;
mod surface;

#[cfg(test)]
pub(crate) mod testing;

pub use focus::FocusFrame;
pub use geometry::TrackGeometry;
pub use id::BeltId;
pub use state::{BeltMode, BeltState, StepOutcome, normalize, wrap_delta};
pub use surface::TrackSurface;
