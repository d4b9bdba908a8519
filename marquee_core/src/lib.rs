// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame-driven conveyor belts and ambient motion for static sites.
//!
//! `marquee_core` holds every piece of the visual-enhancement layer that does
//! not need a browser: the frame clock, the per-belt state machine, the
//! geometry builder that fills a strip with duplicated items, the centering
//! and focus calculator, the interaction router, and the scheduler that ties
//! them together. It is `no_std` compatible (with `alloc`). Layout reads and
//! visual output go through the [`TrackSurface`](belt::TrackSurface) and
//! [`Presenter`](backend::Presenter) traits so backends and tests can supply
//! their own implementations.
//!
//! # Architecture
//!
//! ```text
//!   container + items ──► geometry::build() ──► BeltState
//!                                                   │ (registered)
//!   Backend tick ──► FrameTick ──► Scheduler::frame()
//!                                     │
//!                    ┌────────────────┘
//!                    ▼
//!   BeltState::step() ──► focus::compute() ──► BeltFrame ──► Presenter::apply()
//!
//!   pointer / buttons ──► Command ──► Scheduler::dispatch() (flags only)
//! ```
//!
//! **[`time`]** / **[`clock`]**: Monotonic host time and the
//! [`FrameClock`](clock::FrameClock) that turns ticks into clamped deltas.
//!
//! **[`belt`]**: Belt state, the geometry builder, and the focus
//! calculator.
//!
//! **[`interaction`]**: Commands produced by pointer and button input and
//! the router that applies them.
//!
//! **[`scheduler`]**: The single frame-loop driver owning every belt.
//!
//! **[`backend`]**: The [`Presenter`](backend::Presenter) trait backends
//! implement to apply belt frames.
//!
//! **[`ambient`]**: Particles, spotlight, parallax, and tilt math.
//!
//! **[`page`]**: Which belts a given page gets.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) and the zero-overhead
//! [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod ambient;
pub mod backend;
pub mod belt;
pub mod clock;
pub mod config;
pub mod interaction;
pub mod page;
pub mod scheduler;
pub mod time;
pub mod trace;
