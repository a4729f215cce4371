// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f64::consts::{FRAC_PI_2, PI, TAU};

use kurbo::{Point, Vec2};
use understory_geo::units::{scale_to_zoom, zoom_to_scale};
use understory_geo::{Extent, scalar, vector};

use crate::transform::{Transform, TransformPatch, ZoomLimits};

/// Quarter turn in radians.
pub const HALF_PI: f64 = FRAC_PI_2;

/// Largest latitude, in radians, that Web Mercator can show (≈ 85.0511°).
///
/// Equal to `2·atan(e^π) − π/2`: the latitude whose Mercator y is `π`,
/// which makes the projected world square.
pub const MAX_PHI: f64 = 1.484_422_229_745_332_4;

/// Geographic viewport over a Web Mercator plane.
///
/// `Viewport` owns a [`Transform`] (translate, scale, rotate) and the pixel
/// rectangle it is drawn into, and converts between `(lon, lat)` degrees
/// and pixels. It can be used to:
/// - Project and unproject points, with or without rotation.
/// - Report the geographic [`Extent`] currently in view.
/// - Configure pan, zoom, and rotation through chained setters.
///
/// Latitude is clamped to [`MAX_PHI`] on the way in and Mercator y to
/// `[−π, π]` on the way out, so the poles never produce non‑finite values.
#[derive(Clone, Debug)]
pub struct Viewport {
    transform: Transform,
    dimensions: Extent,
    limits: ZoomLimits,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewport {
    /// Creates a viewport at zoom 1 with zero‑sized dimensions.
    ///
    /// - The projected origin (lon 0, lat 0) sits at pixel `(0, 0)`.
    /// - There is no rotation.
    /// - Zoom is limited to `[0, 24]`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            transform: Transform::default(),
            dimensions: Extent::from_point(Point::ZERO),
            limits: ZoomLimits::default(),
        }
    }

    /// Creates a default viewport and applies `patch` through the usual
    /// clamping setters.
    #[must_use]
    pub fn with_transform(patch: impl Into<TransformPatch>) -> Self {
        let mut vp = Self::new();
        vp.set_transform(patch);
        vp
    }

    /// Projects a `(lon, lat)` location in degrees to pixels.
    ///
    /// With `include_rotation`, the result is also rotated about the center
    /// of the [dimensions](Self::dimensions).
    #[must_use]
    pub fn project(&self, loc: Point, include_rotation: bool) -> Point {
        let Transform { x, y, k, r } = self.transform;
        let lambda = loc.x.to_radians();
        let phi = scalar::clamp(loc.y.to_radians(), -MAX_PHI, MAX_PHI);
        let mercator_y = libm::log(libm::tan((HALF_PI + phi) / 2.0));
        let point = Point::new(lambda * k + x, y - mercator_y * k);
        if include_rotation && r != 0.0 {
            vector::rotate(point, r, self.dimensions.center())
        } else {
            point
        }
    }

    /// Converts a pixel position back to a `(lon, lat)` location in degrees.
    ///
    /// This is the inverse of [`project`](Self::project) for latitudes within
    /// [`MAX_PHI`]; pass the same `include_rotation` flag.
    #[must_use]
    pub fn unproject(&self, point: Point, include_rotation: bool) -> Point {
        let Transform { x, y, k, r } = self.transform;
        let point = if include_rotation && r != 0.0 {
            vector::rotate(point, -r, self.dimensions.center())
        } else {
            point
        };
        let lambda = (point.x - x) / k;
        let mercator_y = scalar::clamp((y - point.y) / k, -PI, PI);
        let phi = 2.0 * libm::atan(libm::exp(mercator_y)) - HALF_PI;
        Point::new(lambda.to_degrees(), phi.to_degrees())
    }

    /// Returns the current translation in pixels.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        Vec2::new(self.transform.x, self.transform.y)
    }

    /// Sets the translation in pixels. Any value is accepted.
    pub fn set_translation(&mut self, translation: Vec2) -> &mut Self {
        self.transform.x = translation.x;
        self.transform.y = translation.y;
        self
    }

    /// Returns the current scale in pixels per radian.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.transform.k
    }

    /// Sets the scale, clamping it into the configured [`ZoomLimits`].
    pub fn set_scale(&mut self, k: f64) -> &mut Self {
        self.transform.k = scalar::clamp(k, self.limits.min_k(), self.limits.max_k());
        self
    }

    /// Returns the current rotation in radians, in `[0, 2π)`.
    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.transform.r
    }

    /// Sets the rotation, wrapping it into `[0, 2π)`.
    pub fn set_rotation(&mut self, r: f64) -> &mut Self {
        self.transform.r = scalar::wrap(r, 0.0, TAU);
        self
    }

    /// Returns a copy of the current transform.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Applies the fields present in `patch`.
    ///
    /// Scale and rotation go through [`set_scale`](Self::set_scale) and
    /// [`set_rotation`](Self::set_rotation), so they are clamped and wrapped.
    pub fn set_transform(&mut self, patch: impl Into<TransformPatch>) -> &mut Self {
        let patch = patch.into();
        if let Some(x) = patch.x {
            self.transform.x = x;
        }
        if let Some(y) = patch.y {
            self.transform.y = y;
        }
        if let Some(k) = patch.k {
            self.set_scale(k);
        }
        if let Some(r) = patch.r {
            self.set_rotation(r);
        }
        self
    }

    /// Returns the pixel rectangle the map is drawn into.
    #[must_use]
    pub fn dimensions(&self) -> Extent {
        self.dimensions
    }

    /// Sets the pixel rectangle. Its center is the pivot for rotation.
    pub fn set_dimensions(&mut self, dimensions: impl Into<Extent>) -> &mut Self {
        self.dimensions = dimensions.into();
        self
    }

    /// Returns the current scale expressed as a zoom level.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        scale_to_zoom(self.transform.k)
    }

    /// Sets the scale from a zoom level, clamped to the [`ZoomLimits`].
    pub fn set_zoom(&mut self, zoom: f64) -> &mut Self {
        self.set_scale(zoom_to_scale(zoom))
    }

    /// Returns the configured zoom limits.
    #[must_use]
    pub fn zoom_limits(&self) -> ZoomLimits {
        self.limits
    }

    /// Sets the minimum and maximum zoom levels.
    ///
    /// The provided range is normalized so that `min_zoom <= max_zoom`. The
    /// current scale is clamped into the new range.
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) -> &mut Self {
        self.limits = ZoomLimits::new(min_zoom, max_zoom);
        self.set_scale(self.transform.k)
    }

    /// Returns the pixel center of the dimensions.
    #[must_use]
    pub fn center(&self) -> Point {
        self.dimensions.center()
    }

    /// Returns the `(lon, lat)` location under the center of the view.
    #[must_use]
    pub fn center_loc(&self) -> Point {
        self.unproject(self.center(), true)
    }

    /// Returns the geographic extent currently visible.
    ///
    /// Each corner of the dimensions is unprojected with rotation applied,
    /// so a rotated view reports the box around the rotated footprint.
    #[must_use]
    pub fn extent(&self) -> Extent {
        let ring = self.dimensions.polygon();
        ring[..4]
            .iter()
            .map(|&corner| self.unproject(corner, true))
            .collect()
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            transform: self.transform,
            dimensions: self.dimensions,
            zoom: self.zoom(),
            zoom_limits: self.limits,
            visible_extent: self.extent(),
        }
    }
}

/// Debug snapshot of a [`Viewport`] state.
#[derive(Clone, Copy, Debug)]
pub struct ViewportDebugInfo {
    /// Current transform.
    pub transform: Transform,
    /// Current pixel rectangle.
    pub dimensions: Extent,
    /// Current zoom level.
    pub zoom: f64,
    /// Configured zoom limits.
    pub zoom_limits: ZoomLimits,
    /// Geographic extent currently visible.
    pub visible_extent: Extent,
}
