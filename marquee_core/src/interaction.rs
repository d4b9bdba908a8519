// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer and button input as discrete commands.
//!
//! Backends translate DOM events into [`Command`]s and hand them to
//! [`Scheduler::dispatch`](crate::scheduler::Scheduler::dispatch). The
//! router only flips belt flags (pause, hold, snap target); integrating the
//! position is left to the next frame.

use crate::belt::{BeltState, TrackSurface, focus, normalize};

/// Navigation direction along the strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward the head of the strip (the "previous" control).
    Previous,
    /// Toward the tail of the strip (the "next" control).
    Next,
}

impl Direction {
    /// Index step for discrete navigation.
    #[must_use]
    pub const fn step(self) -> isize {
        match self {
            Self::Previous => -1,
            Self::Next => 1,
        }
    }

    /// Position sign while the control is held: the strip moves the way the
    /// control's arrow points.
    #[must_use]
    pub const fn hold_sign(self) -> i8 {
        match self {
            Self::Previous => 1,
            Self::Next => -1,
        }
    }
}

/// A single input event addressed to one belt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// The pointer entered the belt's container.
    HoverEnter,
    /// The pointer left the belt's container.
    HoverLeave,
    /// A navigation control was activated (click).
    Advance(Direction),
    /// A navigation control was pressed and is being held.
    HoldStart(Direction),
    /// The held control was released or the pointer left it.
    HoldEnd,
}

/// What applying a command did, for tracing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Routed {
    /// Flags changed; no snap started.
    Applied,
    /// A snap toward `target` started for the item at `item`.
    Snap {
        /// Strip index of the item being centered.
        item: usize,
        /// Belt position that centers the item.
        target: f64,
    },
    /// The command does not apply to this belt or had nothing to act on.
    Ignored,
}

/// Index of the neighbour of `index` in `dir`, wrapping at both ends.
#[must_use]
pub fn neighbor(index: usize, dir: Direction, len: usize) -> Option<usize> {
    if len == 0 || index >= len {
        return None;
    }
    Some(match dir {
        Direction::Previous if index == 0 => len - 1,
        Direction::Previous => index - 1,
        Direction::Next if index + 1 == len => 0,
        Direction::Next => index + 1,
    })
}

/// Belt position that brings the item at `index` to the container center.
#[must_use]
pub fn snap_target<S: TrackSurface + ?Sized>(
    surface: &S,
    index: usize,
    loop_length: f64,
) -> Option<f64> {
    if loop_length <= 0.0 {
        return None;
    }
    let rect = surface.item_rect(index)?;
    let center = rect.center().x;
    Some(normalize(center - surface.container_width() / 2.0, loop_length))
}

fn snap_to<S: TrackSurface + ?Sized>(state: &mut BeltState, surface: &S, item: usize) -> Routed {
    match snap_target(surface, item, state.loop_length()) {
        Some(target) => {
            state.begin_snap(target);
            Routed::Snap { item, target }
        }
        None => Routed::Ignored,
    }
}

/// Applies `command` to one belt.
pub fn route<S: TrackSurface + ?Sized>(
    state: &mut BeltState,
    surface: &S,
    command: Command,
) -> Routed {
    match command {
        Command::HoverEnter => {
            state.set_paused(true);
            state.set_hold(0);
            state.set_hovered(true);
            if !state.has_controls() {
                return Routed::Applied;
            }
            match focus::centered(surface, state.position()) {
                Some(item) => snap_to(state, surface, item),
                None => {
                    state.request_focus();
                    Routed::Applied
                }
            }
        }
        Command::HoverLeave => {
            state.set_paused(false);
            state.set_hold(0);
            state.set_hovered(false);
            Routed::Applied
        }
        Command::Advance(dir) => {
            if !state.has_controls() {
                return Routed::Ignored;
            }
            let Some(center) = focus::centered(surface, state.position()).or(state.centered())
            else {
                return Routed::Ignored;
            };
            match neighbor(center, dir, surface.len()) {
                Some(next) => snap_to(state, surface, next),
                None => Routed::Ignored,
            }
        }
        Command::HoldStart(dir) => {
            if !state.has_controls() {
                return Routed::Ignored;
            }
            state.set_hold(dir.hold_sign());
            Routed::Applied
        }
        Command::HoldEnd => {
            state.set_hold(0);
            Routed::Applied
        }
    }
}
