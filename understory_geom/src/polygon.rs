// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point and polygon containment.

use kurbo::{Line, ParamCurveNearest, Point};

use crate::intersect::path_has_intersections;

/// Distance at which a point is considered to lie on a polygon edge.
const BOUNDARY_TOLERANCE: f64 = 1e-9;

/// How [`polygon_intersects_polygon`] decides that two polygons meet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum IntersectMode {
    /// Only test whether a vertex of the inner polygon lies inside the outer one.
    ///
    /// Cheap, but misses an inner polygon that passes straight through the
    /// outer one without leaving a vertex inside it.
    #[default]
    Lax,
    /// Also test every edge pair for a crossing.
    ///
    /// Costs `O(n·m)` segment tests on top of the vertex test.
    Strict,
}

fn edges(polygon: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    let closing = polygon.last().copied().zip(polygon.first().copied());
    polygon
        .windows(2)
        .map(|w| (w[0], w[1]))
        .chain(closing)
}

fn on_boundary(point: Point, polygon: &[Point]) -> bool {
    let tol_sq = BOUNDARY_TOLERANCE * BOUNDARY_TOLERANCE;
    edges(polygon).any(|(a, b)| Line::new(a, b).nearest(point, 0.).distance_sq <= tol_sq)
}

/// Returns `true` if `point` is inside `polygon` or on its boundary.
///
/// Uses the crossing‑number (even–odd) rule, so self‑intersecting rings
/// follow even–odd semantics. The ring may be open or closed.
#[must_use]
pub fn point_in_polygon(point: Point, polygon: &[Point]) -> bool {
    if on_boundary(point, polygon) {
        return true;
    }
    let mut inside = false;
    for (a, b) in edges(polygon) {
        let straddles = (a.y > point.y) != (b.y > point.y);
        if straddles && point.x < (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x {
            inside = !inside;
        }
    }
    inside
}

/// Returns `true` if every vertex of `inner` lies inside `outer`.
///
/// This samples vertices only. An inner polygon whose edges leave and
/// re‑enter `outer` between vertices still counts as contained.
#[must_use]
pub fn polygon_contains_polygon(outer: &[Point], inner: &[Point]) -> bool {
    inner.iter().all(|&p| point_in_polygon(p, outer))
}

/// Returns `true` if `inner` meets `outer` under the given [`IntersectMode`].
#[must_use]
pub fn polygon_intersects_polygon(outer: &[Point], inner: &[Point], mode: IntersectMode) -> bool {
    let vertex_inside = inner.iter().any(|&p| point_in_polygon(p, outer));
    match mode {
        IntersectMode::Lax => vertex_inside,
        IntersectMode::Strict => vertex_inside || path_has_intersections(outer, inner),
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::Point;

    use super::*;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    fn unit_square() -> Vec<Point> {
        pts(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0), (0.0, 0.0)])
    }

    #[test]
    fn point_inside_and_outside() {
        let square = unit_square();
        assert!(point_in_polygon(Point::new(0.5, 0.5), &square));
        assert!(!point_in_polygon(Point::new(0.5, 1.5), &square));
        assert!(!point_in_polygon(Point::new(-0.5, 0.5), &square));
    }

    #[test]
    fn boundary_counts_as_inside() {
        let square = unit_square();
        assert!(point_in_polygon(Point::new(0.0, 0.0), &square));
        assert!(point_in_polygon(Point::new(1.0, 1.0), &square));
        assert!(point_in_polygon(Point::new(0.5, 0.0), &square));
        assert!(point_in_polygon(Point::new(1.0, 0.5), &square));
        assert!(point_in_polygon(Point::new(0.0, 0.5), &square));
        assert!(point_in_polygon(Point::new(0.5, 1.0), &square));
    }

    #[test]
    fn open_ring_is_implicitly_closed() {
        let open = pts(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);
        assert!(point_in_polygon(Point::new(0.5, 0.5), &open));
        assert!(point_in_polygon(Point::new(0.5, 0.0), &open));
    }

    #[test]
    fn concave_polygon() {
        // A "U" shape opening upwards.
        let u = pts(&[
            (0.0, 0.0),
            (0.0, 3.0),
            (1.0, 3.0),
            (1.0, 1.0),
            (2.0, 1.0),
            (2.0, 3.0),
            (3.0, 3.0),
            (3.0, 0.0),
            (0.0, 0.0),
        ]);
        assert!(point_in_polygon(Point::new(0.5, 2.0), &u));
        assert!(!point_in_polygon(Point::new(1.5, 2.0), &u));
        assert!(point_in_polygon(Point::new(1.5, 0.5), &u));
    }

    #[test]
    fn degenerate_polygons() {
        assert!(!point_in_polygon(Point::new(0.0, 0.0), &[]));
        assert!(point_in_polygon(Point::new(1.0, 1.0), &[Point::new(1.0, 1.0)]));
        assert!(!point_in_polygon(Point::new(0.0, 0.0), &[Point::new(1.0, 1.0)]));
    }

    #[test]
    fn contains_polygon_by_vertices() {
        let outer = pts(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0), (0.0, 0.0)]);
        let inner = pts(&[(1.0, 1.0), (1.0, 2.0), (2.0, 2.0), (2.0, 1.0), (1.0, 1.0)]);
        let straddling = pts(&[(5.0, 5.0), (5.0, 15.0), (15.0, 15.0), (15.0, 5.0), (5.0, 5.0)]);
        assert!(polygon_contains_polygon(&outer, &inner));
        assert!(!polygon_contains_polygon(&outer, &straddling));
        assert!(!polygon_contains_polygon(&inner, &outer));
    }

    #[test]
    fn lax_and_strict_differ_on_pass_through() {
        let outer = pts(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0), (0.0, 0.0)]);
        // A thin horizontal bar crossing the square with no vertex inside it.
        let bar = pts(&[(-5.0, 4.0), (-5.0, 6.0), (15.0, 6.0), (15.0, 4.0), (-5.0, 4.0)]);
        assert!(!polygon_intersects_polygon(&outer, &bar, IntersectMode::Lax));
        assert!(polygon_intersects_polygon(&outer, &bar, IntersectMode::Strict));
        assert_eq!(IntersectMode::default(), IntersectMode::Lax);
    }

    #[test]
    fn intersects_when_a_vertex_is_inside() {
        let outer = pts(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0), (0.0, 0.0)]);
        let overlapping = pts(&[(5.0, 5.0), (5.0, 15.0), (15.0, 15.0), (15.0, 5.0), (5.0, 5.0)]);
        let far = pts(&[(20.0, 20.0), (20.0, 30.0), (30.0, 30.0), (20.0, 20.0)]);
        assert!(polygon_intersects_polygon(&outer, &overlapping, IntersectMode::Lax));
        assert!(polygon_intersects_polygon(&outer, &overlapping, IntersectMode::Strict));
        assert!(!polygon_intersects_polygon(&outer, &far, IntersectMode::Lax));
        assert!(!polygon_intersects_polygon(&outer, &far, IntersectMode::Strict));
    }
}
