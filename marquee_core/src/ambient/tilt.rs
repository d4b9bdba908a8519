// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer-driven 3D tilt and glow hotspot for cards and buttons.

use kurbo::{Point, Size};

/// Perspective distance used when rendering a tilt, in CSS pixels.
pub const PERSPECTIVE_PX: f64 = 900.0;
/// Hotspot (in percent of the element) when the pointer is elsewhere.
pub const REST_HOTSPOT: Point = Point::new(20.0, 20.0);
/// Vertical lift while the pointer is over the element.
const HOVER_LIFT_PX: f64 = -2.0;

/// What kind of element is tilting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TiltKind {
    /// Content cards.
    Card,
    /// Buttons.
    Button,
}

impl TiltKind {
    /// Largest rotation around either axis, in degrees.
    #[must_use]
    pub const fn max_deg(self) -> f64 {
        match self {
            Self::Card => 6.0,
            Self::Button => 4.0,
        }
    }
}

/// Rotation part of a tilt pose.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotation {
    /// Rotation around the X axis, in degrees.
    pub x_deg: f64,
    /// Rotation around the Y axis, in degrees.
    pub y_deg: f64,
    /// Vertical translation, in CSS pixels.
    pub lift: f64,
}

impl Rotation {
    /// Flat, unlifted.
    pub const ZERO: Self = Self {
        x_deg: 0.0,
        y_deg: 0.0,
        lift: 0.0,
    };
}

/// Hotspot and rotation for one element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltPose {
    /// Glow hotspot in percent of the element's width and height.
    pub hotspot: Point,
    /// Rotation to apply, or `None` to leave the transform alone.
    pub rotation: Option<Rotation>,
}

impl TiltPose {
    /// Pose after the pointer leaves the element.
    pub const REST: Self = Self {
        hotspot: REST_HOTSPOT,
        rotation: Some(Rotation::ZERO),
    };

    /// Pose for a pointer at `local` (relative to the element's top-left
    /// corner) over an element of `size`.
    ///
    /// Returns `None` for an element with no area. Under reduced motion only
    /// the hotspot is tracked.
    #[must_use]
    pub fn at(local: Point, size: Size, kind: TiltKind, reduced_motion: bool) -> Option<Self> {
        if size.width <= 0.0 || size.height <= 0.0 {
            return None;
        }
        let hotspot = Point::new(local.x / size.width * 100.0, local.y / size.height * 100.0);
        if reduced_motion {
            return Some(Self {
                hotspot,
                rotation: None,
            });
        }
        // Pointer mapped into [-1, 1] on both axes.
        let px = local.x / size.width * 2.0 - 1.0;
        let py = local.y / size.height * 2.0 - 1.0;
        let max = kind.max_deg();
        Some(Self {
            hotspot,
            rotation: Some(Rotation {
                x_deg: -py * max,
                y_deg: px * max,
                lift: HOVER_LIFT_PX,
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_reach_full_tilt() {
        let size = Size::new(200.0, 100.0);
        let pose = TiltPose::at(Point::new(200.0, 0.0), size, TiltKind::Card, false).unwrap();
        assert_eq!(pose.hotspot, Point::new(100.0, 0.0));
        let r = pose.rotation.unwrap();
        assert_eq!(r.x_deg, 6.0, "top edge tips toward the viewer");
        assert_eq!(r.y_deg, 6.0, "right edge");
        assert_eq!(r.lift, -2.0);
    }

    #[test]
    fn center_is_flat_but_lifted() {
        let size = Size::new(200.0, 100.0);
        let pose = TiltPose::at(Point::new(100.0, 50.0), size, TiltKind::Button, false).unwrap();
        assert_eq!(pose.hotspot, Point::new(50.0, 50.0));
        let r = pose.rotation.unwrap();
        assert_eq!((r.x_deg, r.y_deg), (0.0, 0.0));
        assert_eq!(r.lift, -2.0);
    }

    #[test]
    fn buttons_tilt_less_than_cards() {
        let size = Size::new(100.0, 100.0);
        let at = Point::new(0.0, 100.0);
        let card = TiltPose::at(at, size, TiltKind::Card, false).unwrap();
        let button = TiltPose::at(at, size, TiltKind::Button, false).unwrap();
        assert_eq!(card.rotation.unwrap().y_deg, -6.0);
        assert_eq!(button.rotation.unwrap().y_deg, -4.0);
        assert_eq!(button.rotation.unwrap().x_deg, -4.0);
    }

    #[test]
    fn reduced_motion_tracks_hotspot_only() {
        let pose = TiltPose::at(
            Point::new(50.0, 25.0),
            Size::new(100.0, 100.0),
            TiltKind::Card,
            true,
        )
        .unwrap();
        assert_eq!(pose.hotspot, Point::new(50.0, 25.0));
        assert_eq!(pose.rotation, None);
    }

    #[test]
    fn degenerate_element_has_no_pose() {
        let pose = TiltPose::at(Point::ZERO, Size::new(0.0, 10.0), TiltKind::Card, false);
        assert_eq!(pose, None);
        assert_eq!(TiltPose::REST.hotspot, Point::new(20.0, 20.0));
    }
}
