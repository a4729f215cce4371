// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// Total Euclidean length of a polyline.
///
/// Zero for fewer than two points.
#[must_use]
pub fn path_length(path: &[Point]) -> f64 {
    path.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Nearest point on a polyline, as returned by [`project_onto_path`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathProjection {
    /// Index of the end vertex of the nearest segment.
    ///
    /// Inserting a new vertex at this index splits that segment.
    pub index: usize,
    /// Distance from the query point to [`target`](Self::target).
    pub distance: f64,
    /// Closest point on the path.
    pub target: Point,
}

/// Projects `point` onto the nearest segment of `path`.
///
/// Ties keep the earliest segment. Returns `None` for a path with fewer
/// than two points.
#[must_use]
pub fn project_onto_path(point: Point, path: &[Point]) -> Option<PathProjection> {
    let mut best: Option<PathProjection> = None;
    for (i, w) in path.windows(2).enumerate() {
        let (o, end) = (w[0], w[1]);
        let s = end - o;
        let len_sq = s.hypot2();
        let target = if len_sq == 0.0 {
            o
        } else {
            let proj = (point - o).dot(s) / len_sq;
            if proj < 0.0 {
                o
            } else if proj > 1.0 {
                end
            } else {
                o + s * proj
            }
        };
        let distance = point.distance(target);
        if best.is_none_or(|b| distance < b.distance) {
            best = Some(PathProjection {
                index: i + 1,
                distance,
                target,
            });
        }
    }
    best
}
