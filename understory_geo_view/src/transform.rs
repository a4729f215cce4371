// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use understory_geo::units::{scale_to_zoom, zoom_to_scale};

/// Scale at zoom level 1 for 256 px tiles: a 512 px world.
pub const DEFAULT_K: f64 = 256.0 / core::f64::consts::PI;

/// Default lowest zoom level.
pub const MIN_ZOOM: f64 = 0.0;

/// Default highest zoom level.
pub const MAX_ZOOM: f64 = 24.0;

/// Translate, scale, and rotate applied after the Mercator projection.
///
/// `x`/`y` are the pixel position of the projected origin (lon 0, lat 0),
/// `k` is pixels per radian, and `r` is the rotation about the viewport
/// center in radians.
///
/// A [`crate::Viewport`] keeps `k` within its [`ZoomLimits`] and `r` in
/// `[0, 2π)`. A bare `Transform` is just data and is not normalized.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Horizontal translation in pixels.
    pub x: f64,
    /// Vertical translation in pixels.
    pub y: f64,
    /// Scale in pixels per radian.
    pub k: f64,
    /// Rotation in radians.
    pub r: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            k: DEFAULT_K,
            r: 0.0,
        }
    }
}

/// Partial update for a [`Transform`].
///
/// `None` leaves the field as it is. `Some(0.0)` really does set zero.
///
/// ```rust
/// use understory_geo_view::{TransformPatch, Viewport};
///
/// let mut view = Viewport::new();
/// view.set_transform(TransformPatch {
///     x: Some(100.0),
///     y: Some(50.0),
///     ..TransformPatch::default()
/// });
/// assert_eq!(view.transform().x, 100.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TransformPatch {
    /// New horizontal translation.
    pub x: Option<f64>,
    /// New vertical translation.
    pub y: Option<f64>,
    /// New scale, clamped by the viewport.
    pub k: Option<f64>,
    /// New rotation, wrapped by the viewport.
    pub r: Option<f64>,
}

impl From<Transform> for TransformPatch {
    fn from(t: Transform) -> Self {
        Self {
            x: Some(t.x),
            y: Some(t.y),
            k: Some(t.k),
            r: Some(t.r),
        }
    }
}

/// Zoom range a viewport is allowed to scale within.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomLimits {
    /// Lowest zoom level.
    pub min_zoom: f64,
    /// Highest zoom level.
    pub max_zoom: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
        }
    }
}

impl ZoomLimits {
    /// Creates limits, swapping the bounds if they are given in the wrong order.
    #[must_use]
    pub fn new(min_zoom: f64, max_zoom: f64) -> Self {
        if min_zoom <= max_zoom {
            Self { min_zoom, max_zoom }
        } else {
            Self {
                min_zoom: max_zoom,
                max_zoom: min_zoom,
            }
        }
    }

    /// Smallest allowed scale.
    #[must_use]
    pub fn min_k(&self) -> f64 {
        zoom_to_scale(self.min_zoom)
    }

    /// Largest allowed scale.
    #[must_use]
    pub fn max_k(&self) -> f64 {
        zoom_to_scale(self.max_zoom)
    }

    /// Returns `true` if the scale `k` falls within these limits.
    #[must_use]
    pub fn contains_scale(&self, k: f64) -> bool {
        let z = scale_to_zoom(k);
        z >= self.min_zoom - 1e-9 && z <= self.max_zoom + 1e-9
    }
}
