// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Line, Point};
use understory_geo::vector;

/// Returns `true` if the two segments join the same pair of points, in
/// either direction.
#[must_use]
pub fn edge_equal(a: Line, b: Line) -> bool {
    (a.p0 == b.p0 && a.p1 == b.p1) || (a.p0 == b.p1 && a.p1 == b.p0)
}

/// Rotates every point by `angle` radians about `around`.
///
/// Positive angles turn clockwise in screen (y‑down) space. The output has
/// the same length and order as the input.
#[must_use]
pub fn rotate_points(points: &[Point], angle: f64, around: Point) -> Vec<Point> {
    points
        .iter()
        .map(|&p| vector::rotate(p, angle, around))
        .collect()
}
