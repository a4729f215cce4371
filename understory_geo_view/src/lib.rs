// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_geo_view --heading-base-level=0

//! Understory Geo View: a headless Web Mercator viewport.
//!
//! This crate converts between geographic `(lon, lat)` locations in degrees
//! and device pixels. It focuses on:
//! - Spherical Mercator projection and its inverse.
//! - A translate / scale / rotate [`Transform`] with zoom limits.
//! - The geographic [`Extent`](understory_geo::Extent) currently in view.
//!
//! It does **not** fetch tiles or draw anything. Callers are expected to:
//! - Keep the [dimensions](Viewport::dimensions) in sync with their window.
//! - Drive pan, zoom, and rotation from their own input handling.
//! - Use [`Viewport::extent`] to decide which data to load or cull.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Vec2};
//! use understory_geo_view::Viewport;
//!
//! let mut view = Viewport::new();
//! view.set_dimensions(Rect::new(0.0, 0.0, 800.0, 600.0))
//!     .set_translation(Vec2::new(400.0, 300.0))
//!     .set_zoom(16.0);
//!
//! // The origin sits at the center of the window.
//! let px = view.project(Point::ZERO, true);
//! assert!((px - Point::new(400.0, 300.0)).hypot() < 1e-9);
//!
//! // And round-trips back.
//! let loc = view.unproject(px, true);
//! assert!(loc.x.abs() < 1e-9 && loc.y.abs() < 1e-9);
//!
//! let visible = view.extent();
//! assert!(visible.contains(view.center_loc()));
//! ```
//!
//! ## Design notes
//!
//! - Scale `k` is pixels per radian; zoom `z` relates to it as
//!   `k = 256 · 2^z / 2π`.
//! - Rotation pivots about the center of the dimensions and is kept in
//!   `[0, 2π)`.
//! - Latitudes are clamped to [`MAX_PHI`] so the poles stay finite.
//!
//! This crate is `no_std`.

#![no_std]

mod transform;
mod viewport;

pub use transform::{DEFAULT_K, MAX_ZOOM, MIN_ZOOM, Transform, TransformPatch, ZoomLimits};
pub use viewport::{HALF_PI, MAX_PHI, Viewport, ViewportDebugInfo};
