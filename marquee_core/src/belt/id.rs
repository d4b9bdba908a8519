// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Belt identity.

use core::fmt;

/// A handle to a belt registered with a
/// [`Scheduler`](crate::scheduler::Scheduler).
///
/// Belts live for the lifetime of the page, so the handle is a plain slot
/// index in registration order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BeltId(pub u32);

impl BeltId {
    /// Returns the raw slot index (for diagnostics only).
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for BeltId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BeltId({})", self.0)
    }
}
