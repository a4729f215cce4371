// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_geo --heading-base-level=0

//! Understory Geo: extents and unit helpers for geographic editing surfaces.
//!
//! This crate provides the small, headless building blocks shared by the
//! geographic viewport and the planar predicates:
//! - [`Extent`]: an axis‑aligned bounding box with set algebra (extend,
//!   intersect, contain) and flat views for interop.
//! - [`scalar`]: clamping and modular wrapping of reals.
//! - [`vector`]: rotation about a pivot and a few point helpers.
//! - [`units`]: meters ↔ degrees and zoom ↔ scale conversion.
//!
//! Points are [`kurbo::Point`] throughout. A point carries no unit tag;
//! callers decide whether it holds `(lon, lat)` degrees or pixels.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_geo::Extent;
//!
//! let a = Extent::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
//! let b = Extent::new(Point::new(5.0, 5.0), Point::new(20.0, 20.0));
//!
//! let both = a.extend(b);
//! assert_eq!(both.rectangle(), [0.0, 0.0, 20.0, 20.0]);
//!
//! let overlap = a.intersection(b);
//! assert_eq!(overlap.to_param(), "5,5,10,10");
//! assert_eq!(a.percent_contained_in(b), 0.25);
//! ```
//!
//! ## Degenerate input
//!
//! Nothing here fails on bad numbers. NaN and infinities flow through the
//! arithmetic and show up in the result rather than panicking. The one
//! fallible operation is parsing an [`Extent`] from its query‑string form,
//! which returns [`ParseExtentError`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod extent;
pub mod scalar;
pub mod units;
pub mod vector;

pub use extent::{BBox, Extent, ParseExtentError};
