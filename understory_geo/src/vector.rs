// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point helpers that kurbo does not spell the way we need them.

use kurbo::Point;

/// Rotates `point` by `angle` radians about `pivot`.
///
/// In a y‑down (screen) frame a positive angle turns clockwise.
#[must_use]
pub fn rotate(point: Point, angle: f64, pivot: Point) -> Point {
    let (sin, cos) = (libm::sin(angle), libm::cos(angle));
    let radial = point - pivot;
    Point::new(
        radial.x * cos - radial.y * sin + pivot.x,
        radial.x * sin + radial.y * cos + pivot.y,
    )
}

/// Linear interpolation from `a` (at `t = 0`) to `b` (at `t = 1`).
#[must_use]
pub fn interp(a: Point, b: Point, t: f64) -> Point {
    Point::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
}

/// Heading of the segment `a → b` in radians, in `(-π, π]`.
#[must_use]
pub fn angle(a: Point, b: Point) -> f64 {
    libm::atan2(b.y - a.y, b.x - a.x)
}
