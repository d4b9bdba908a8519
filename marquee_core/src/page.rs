// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Which belts a page gets.
//!
//! Skill-tag belts are installed on every page. Large-card belts only run on
//! the portfolio pages that list many cards, and only for grids with enough
//! cards to make a loop worth watching.

use crate::config::BeltConfig;

/// Pages (by file name) that get card belts.
pub const CARD_BELT_PAGES: [&str; 3] = ["projects.html", "gallery.html", "resume.html"];

/// A kind of container to turn into belts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BeltTarget {
    /// Selector for the containers.
    pub container: &'static str,
    /// Selector for the items inside one container.
    pub item: &'static str,
    /// Belt options.
    pub belt: BeltConfig,
    /// Minimum number of items for the container to qualify.
    pub min_items: usize,
    /// Class added to a qualifying container before the strip is built.
    pub marker_class: Option<&'static str>,
}

impl BeltTarget {
    /// Skill tags: no controls, installed everywhere.
    pub const TAGS: Self = Self {
        container: ".tags",
        item: ".tag",
        belt: BeltConfig::tags(),
        min_items: 2,
        marker_class: None,
    };

    /// Content cards with previous/next controls.
    pub const CARDS: Self = Self {
        container: ".grid",
        item: ".card",
        belt: BeltConfig::cards(),
        min_items: 3,
        marker_class: Some("conveyor"),
    };

    /// Whether a container with `count` items qualifies.
    #[must_use]
    pub const fn qualifies(&self, count: usize) -> bool {
        count >= self.min_items
    }
}

/// Whether the page at `path` gets card belts.
///
/// Matches the file name at the end of the path, ignoring ASCII case.
#[must_use]
pub fn wants_card_belts(path: &str) -> bool {
    let path = path.as_bytes();
    CARD_BELT_PAGES.iter().any(|page| {
        let page = page.as_bytes();
        path.len() >= page.len() && path[path.len() - page.len()..].eq_ignore_ascii_case(page)
    })
}

/// Belt targets for the page at `path`, in installation order.
pub fn targets(path: &str) -> impl Iterator<Item = BeltTarget> {
    let cards = wants_card_belts(path).then_some(BeltTarget::CARDS);
    core::iter::once(BeltTarget::TAGS).chain(cards)
}
