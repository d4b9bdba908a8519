// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page-wide ambient motion: drifting particles, a cursor spotlight with
//! parallax, pointer-driven tilt, and the decoration (blobs, badges, scroll
//! reveal) that goes with it.
//!
//! Everything here is plain math over viewport and pointer coordinates.
//! Backends own the canvas and elements and write the results out.

pub mod decor;
pub mod particles;
pub mod pointer;
pub mod tilt;

pub use decor::{Reveal, RevealMode};
pub use particles::{Link, Particle, ParticleField};
pub use pointer::{PointerTracker, PointerUpdate};
pub use tilt::{Rotation, TiltKind, TiltPose};
