// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimum‑area enclosing rectangle.

use alloc::vec::Vec;

use kurbo::Point;
use understory_geo::{Extent, vector};

use crate::edge::rotate_points;
use crate::hull::{centroid, convex_hull};

/// Result of [`smallest_surrounding_rectangle`].
#[derive(Clone, Debug, PartialEq)]
pub struct SurroundingRect {
    /// Closed five‑point ring around the input.
    pub poly: Vec<Point>,
    /// Orientation of the rectangle in radians: the heading of the hull edge
    /// it is aligned with.
    pub angle: f64,
}

/// Smallest‑area rectangle enclosing `points`, or `None` for no points.
///
/// Only orientations parallel to a convex hull edge are tried, which is
/// where the optimum always lies. For each hull edge the hull is rotated so
/// that edge is axis‑aligned, its bounding box measured, and the first
/// strictly smallest box kept. The winner is rotated back into place about
/// the hull centroid.
#[must_use]
pub fn smallest_surrounding_rectangle(points: &[Point]) -> Option<SurroundingRect> {
    let hull = convex_hull(points);
    let first = *hull.first()?;
    let center = centroid(&hull);

    let mut min_area = f64::INFINITY;
    let mut best = Extent::from_point(first);
    let mut best_angle = 0.0;
    let closing = core::iter::once((*hull.last()?, first));
    // Edges in hull order, starting from the first vertex.
    let edges = hull.windows(2).map(|w| (w[0], w[1])).chain(closing);
    for (c1, c2) in edges {
        let angle = vector::angle(c1, c2);
        let extent = Extent::from_points(rotate_points(&hull, -angle, center));
        let area = extent.area();
        if area < min_area {
            min_area = area;
            best = extent;
            best_angle = angle;
        }
    }

    Some(SurroundingRect {
        poly: rotate_points(&best.polygon(), best_angle, center),
        angle: best_angle,
    })
}
