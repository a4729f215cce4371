// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Segment and path intersection.

use alloc::vec::Vec;

use kurbo::{Line, Point};
use understory_geo::vector;

/// Cross products at or below this magnitude are treated as parallel.
const PARALLEL_EPSILON: f64 = 1e-12;

/// Intersection point of two finite segments.
///
/// Returns `None` when the segments are parallel, including the colinear
/// case whether or not the segments overlap, or when the crossing point of
/// the supporting lines lies outside either segment. Endpoints count as
/// part of the segment.
#[must_use]
pub fn line_intersection(a: Line, b: Line) -> Option<Point> {
    let r = a.p1 - a.p0;
    let s = b.p1 - b.p0;
    let denominator = r.cross(s);
    if denominator.abs() <= PARALLEL_EPSILON {
        return None;
    }
    let qp = b.p0 - a.p0;
    let t = qp.cross(s) / denominator;
    let u = qp.cross(r) / denominator;
    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some(vector::interp(a.p0, a.p1, t))
    } else {
        None
    }
}

fn segments(path: &[Point]) -> impl Iterator<Item = Line> + '_ {
    path.windows(2).map(|w| Line::new(w[0], w[1]))
}

/// Every point where a segment of `a` crosses a segment of `b`.
///
/// Points are reported in segment order of `a`, then of `b`. A crossing at
/// a shared vertex may be reported more than once.
#[must_use]
pub fn path_intersections(a: &[Point], b: &[Point]) -> Vec<Point> {
    segments(a)
        .flat_map(|sa| segments(b).filter_map(move |sb| line_intersection(sa, sb)))
        .collect()
}

/// Returns `true` if any segment of `a` crosses any segment of `b`.
#[must_use]
pub fn path_has_intersections(a: &[Point], b: &[Point]) -> bool {
    segments(a).any(|sa| segments(b).any(|sb| line_intersection(sa, sb).is_some()))
}

/// Returns `true` if two non‑adjacent segments of `path` cross.
///
/// Adjacent segments always share a vertex, so they are skipped. For a
/// closed ring the last segment is adjacent to the first.
#[must_use]
pub fn has_self_intersections(path: &[Point]) -> bool {
    let n = path.len().saturating_sub(1);
    let closed = n > 2 && path.first() == path.last();
    let lines: Vec<Line> = segments(path).collect();
    for (i, &li) in lines.iter().enumerate() {
        for (j, &lj) in lines.iter().enumerate().skip(i + 2) {
            if closed && i == 0 && j == n - 1 {
                continue;
            }
            if line_intersection(li, lj).is_some() {
                return true;
            }
        }
    }
    false
}
