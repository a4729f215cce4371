// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Convex hull and centroid.

use alloc::vec::Vec;

use kurbo::Point;

#[inline]
fn cross(o: Point, a: Point, b: Point) -> f64 {
    (a - o).cross(b - o)
}

/// Convex hull of a point set (Andrew's monotone chain).
///
/// The hull is counter‑clockwise in a y‑up frame and starts at the point
/// with the smallest x (then smallest y). The ring is not closed and
/// colinear points on hull edges are dropped. One or two distinct input
/// points come back as they are.
#[must_use]
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
    let mut pts: Vec<Point> = points.to_vec();
    pts.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    pts.dedup();
    if pts.len() < 3 {
        return pts;
    }

    let mut lower: Vec<Point> = Vec::with_capacity(pts.len());
    for &p in &pts {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], p) <= 0.0 {
            lower.pop();
        }
        lower.push(p);
    }
    let mut upper: Vec<Point> = Vec::with_capacity(pts.len());
    for &p in pts.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], p) <= 0.0 {
            upper.pop();
        }
        upper.push(p);
    }
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

/// Area‑weighted centroid of a polygon ring (open or closed).
///
/// Rings with no area (fewer than three points, or colinear points) fall
/// back to the mean of their vertices. An empty ring gives NaN.
#[must_use]
pub fn centroid(polygon: &[Point]) -> Point {
    let closing = polygon.last().copied().zip(polygon.first().copied());
    let mut twice_area = 0.0;
    let mut cx = 0.0;
    let mut cy = 0.0;
    for (a, b) in polygon.windows(2).map(|w| (w[0], w[1])).chain(closing) {
        let c = a.x * b.y - b.x * a.y;
        twice_area += c;
        cx += (a.x + b.x) * c;
        cy += (a.y + b.y) * c;
    }
    if twice_area != 0.0 {
        return Point::new(cx / (3.0 * twice_area), cy / (3.0 * twice_area));
    }
    let n = polygon.len() as f64;
    let sum = polygon
        .iter()
        .fold(Point::ZERO, |acc, p| Point::new(acc.x + p.x, acc.y + p.y));
    Point::new(sum.x / n, sum.y / n)
}
