// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_geom --heading-base-level=0

//! Understory Geom: planar predicates over point sets.
//!
//! Everything in this crate is a pure function over [`kurbo::Point`] slices
//! and [`kurbo::Line`] segments. There is no state and nothing to configure
//! beyond the arguments. The functions are the ones an interactive
//! map editor leans on while the user drags things around:
//! - Segment and path intersection ([`line_intersection`],
//!   [`path_intersections`], [`has_self_intersections`]).
//! - Point/polygon containment with explicit [`IntersectMode`] semantics.
//! - Smallest surrounding rectangle over the convex hull
//!   ([`smallest_surrounding_rectangle`]).
//! - Path length and nearest‑point projection.
//! - Edge‑proximity nudging ([`viewport_nudge`]) for auto‑panning while
//!   dragging near the edge of the view.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Line, Point};
//! use understory_geom::{line_intersection, point_in_polygon};
//!
//! let hit = line_intersection(
//!     Line::new((0.0, 0.0), (10.0, 0.0)),
//!     Line::new((5.0, 10.0), (5.0, -10.0)),
//! );
//! assert_eq!(hit, Some(Point::new(5.0, 0.0)));
//!
//! let square = [
//!     Point::new(0.0, 0.0),
//!     Point::new(0.0, 1.0),
//!     Point::new(1.0, 1.0),
//!     Point::new(1.0, 0.0),
//!     Point::new(0.0, 0.0),
//! ];
//! assert!(point_in_polygon(Point::new(0.5, 0.5), &square));
//! assert!(!point_in_polygon(Point::new(0.5, 1.5), &square));
//! ```
//!
//! Polygons are closed rings (first point equal to last). The predicates
//! also accept an open ring and treat it as implicitly closed.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod edge;
mod hull;
mod intersect;
mod nudge;
mod path;
mod polygon;
mod surround;

pub use edge::{edge_equal, rotate_points};
pub use hull::{centroid, convex_hull};
pub use intersect::{
    has_self_intersections, line_intersection, path_has_intersections, path_intersections,
};
pub use nudge::{NUDGE_STEP, NudgePadding, viewport_nudge, viewport_nudge_with};
pub use path::{PathProjection, path_length, project_onto_path};
pub use polygon::{
    IntersectMode, point_in_polygon, polygon_contains_polygon, polygon_intersects_polygon,
};
pub use surround::{SurroundingRect, smallest_surrounding_rectangle};
