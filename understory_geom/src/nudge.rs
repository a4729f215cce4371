// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Edge proximity nudging for auto‑panning.
//!
//! While the user drags something close to the edge of the view, the
//! editor pans a little each frame so the drag can continue past the
//! visible area. [`viewport_nudge`] answers which way to pan.

use kurbo::{Point, Size, Vec2};

/// Distances from each edge of the view, in pixels, inside which a point
/// is considered near that edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NudgePadding {
    /// Distance from the top edge.
    pub top: f64,
    /// Distance from the right edge.
    pub right: f64,
    /// Distance from the bottom edge.
    pub bottom: f64,
    /// Distance from the left edge.
    pub left: f64,
}

impl Default for NudgePadding {
    /// Wider at the top and bottom, where editor toolbars and footers sit.
    fn default() -> Self {
        Self {
            top: 80.0,
            right: 20.0,
            bottom: 50.0,
            left: 20.0,
        }
    }
}

/// Default nudge magnitude per axis, in pixels.
pub const NUDGE_STEP: f64 = 10.0;

/// Nudge vector for a point in a view of the given size, using the default
/// padding and step.
///
/// See [`viewport_nudge_with`].
#[must_use]
pub fn viewport_nudge(point: Point, dimensions: Size) -> Option<Vec2> {
    viewport_nudge_with(point, dimensions, NudgePadding::default(), NUDGE_STEP)
}

/// Nudge vector pointing away from whichever edges `point` is near.
///
/// Each axis contributes independently, so a point near a corner gets a
/// diagonal nudge. Returns `None` when the point is clear of every edge.
#[must_use]
pub fn viewport_nudge_with(
    point: Point,
    dimensions: Size,
    padding: NudgePadding,
    step: f64,
) -> Option<Vec2> {
    let mut x = 0.0;
    let mut y = 0.0;
    if point.x > dimensions.width - padding.right {
        x = -step;
    }
    if point.x < padding.left {
        x = step;
    }
    if point.y > dimensions.height - padding.bottom {
        y = -step;
    }
    if point.y < padding.top {
        y = step;
    }
    if x == 0.0 && y == 0.0 {
        None
    } else {
        Some(Vec2::new(x, y))
    }
}
