// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Static page decoration: background blobs, card icon badges, and scroll
//! reveal.
//!
//! These only decide *what* goes on the page; backends create the elements
//! and observers.

/// Class lists of the background blobs, in insertion order.
pub const BLOB_CLASSES: [&str; 3] = ["bg-blob b1", "bg-blob b2", "bg-blob b3"];

/// Background blobs to add. None under reduced motion.
#[must_use]
pub fn blobs(reduced_motion: bool) -> &'static [&'static str] {
    if reduced_motion { &[] } else { &BLOB_CLASSES }
}

/// Class of the badge element injected into each card.
pub const BADGE_CLASS: &str = "card-badge";

/// SVG path data for card badges (24×24 view box), assigned round-robin.
pub const BADGE_ICONS: [&str; 5] = [
    "M9 18 3 12l6-6 1.4 1.4L5.8 12l4.6 4.6L9 18Zm6 0-1.4-1.4 4.6-4.6-4.6-4.6L15 6l6 6-6 6Z",
    "M4 19V5h2v14H4Zm6 0V9h2v10h-2Zm6 0v-6h2v6h-2ZM4 21h18v2H2V3h2v18Z",
    "M9 3v2H7v2H5v2H3v6h2v2h2v2h2v2h6v-2h2v-2h2v-2h2V9h-2V7h-2V5h-2V3H9Zm-4 8h14v6H5v-6Zm2 2v2h10v-2H7Z",
    "M12 2 3 6.5v11L12 22l9-4.5v-11L12 2Zm0 2.2 6.8 3.4L12 11 5.2 7.6 12 4.2ZM5 9.4l6 3v7.2l-6-3V9.4Zm14 0v7.2l-6 3v-7.2l6-3Z",
    "M12 2l1.2 4.3L17.5 8 13.2 9.2 12 13.5 10.8 9.2 6.5 8l4.3-1.7L12 2Zm7 9 1 3.3L23 15l-3 1.1-1 3.4-1-3.4L15 15l3-1.7 1-3.3Z",
];

/// Badge icon for the card at `index` in document order.
#[must_use]
pub fn badge_icon(index: usize) -> &'static str {
    BADGE_ICONS[index % BADGE_ICONS.len()]
}

/// Scroll-reveal parameters.
///
/// Matching elements get [`class`](Self::class); once they scroll into view
/// they also get [`shown_class`](Self::shown_class).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reveal {
    /// Elements that reveal on scroll.
    pub selector: &'static str,
    /// Class marking an element as revealable.
    pub class: &'static str,
    /// Class added once the element has been seen.
    pub shown_class: &'static str,
    /// Visible fraction that counts as "seen".
    pub threshold: f64,
    /// Observer root margin (CSS syntax).
    pub root_margin: &'static str,
}

impl Reveal {
    /// The site's reveal settings.
    pub const SITE: Self = Self {
        selector: ".hero, .kicker, .card, .footer",
        class: "reveal",
        shown_class: "in",
        threshold: 0.12,
        root_margin: "0px 0px -6% 0px",
    };

    /// How elements are revealed.
    #[must_use]
    pub const fn mode(&self, reduced_motion: bool) -> RevealMode {
        if reduced_motion {
            RevealMode::Immediate
        } else {
            RevealMode::OnIntersect
        }
    }
}

/// When revealable elements get the shown class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RevealMode {
    /// Right away, with no observer.
    Immediate,
    /// The first time each element intersects the viewport; then it is
    /// no longer observed.
    OnIntersect,
}
