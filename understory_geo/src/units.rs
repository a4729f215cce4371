// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Unit conversion between meters, degrees, and web‑map scale.
//!
//! Distances use a spherical approximation with separate equatorial and polar
//! radii: accurate enough for padding a viewport or measuring a sketch, not
//! for surveying.
//!
//! Scale `k` is the number of pixels per radian of longitude, so a world of
//! `tile_size · 2^zoom` pixels has `k = tile_size · 2^zoom / 2π`.

use core::f64::consts::TAU;

use kurbo::Point;

/// WGS84 equatorial radius in meters.
pub const EQUATORIAL_RADIUS: f64 = 6_378_137.0;

/// WGS84 polar radius in meters.
pub const POLAR_RADIUS: f64 = 6_356_752.314_245_179;

/// Default raster tile edge in pixels.
pub const TILE_SIZE: f64 = 256.0;

/// Converts a north/south distance in meters into degrees of latitude.
#[must_use]
pub fn meters_to_lat(meters: f64) -> f64 {
    meters / (TAU * POLAR_RADIUS / 360.0)
}

/// Converts an east/west distance in meters into degrees of longitude at the
/// given latitude (in degrees).
///
/// At or beyond the poles a meter spans no longitude, so this returns `0`.
#[must_use]
pub fn meters_to_lon(meters: f64, at_lat: f64) -> f64 {
    if at_lat.abs() >= 90.0 {
        return 0.0;
    }
    meters / (TAU * EQUATORIAL_RADIUS / 360.0) / libm::cos(at_lat.to_radians()).abs()
}

/// Converts degrees of latitude into meters.
#[must_use]
pub fn lat_to_meters(d_lat: f64) -> f64 {
    d_lat * (TAU * POLAR_RADIUS / 360.0)
}

/// Converts degrees of longitude at `at_lat` (degrees) into meters.
#[must_use]
pub fn lon_to_meters(d_lon: f64, at_lat: f64) -> f64 {
    if at_lat.abs() >= 90.0 {
        return 0.0;
    }
    d_lon * (TAU * EQUATORIAL_RADIUS / 360.0) * libm::cos(at_lat.to_radians()).abs()
}

/// Approximate distance in meters between two `(lon, lat)` points.
///
/// Longitude is measured at the mean latitude of the two points. This
/// holds up well for the short spans an editor deals with.
#[must_use]
pub fn spherical_distance(a: Point, b: Point) -> f64 {
    let x = lon_to_meters(a.x - b.x, (a.y + b.y) / 2.0);
    let y = lat_to_meters(a.y - b.y);
    libm::sqrt(x * x + y * y)
}

/// Converts a zoom level into a projection scale for [`TILE_SIZE`] tiles.
#[must_use]
pub fn zoom_to_scale(zoom: f64) -> f64 {
    zoom_to_scale_with_tile_size(zoom, TILE_SIZE)
}

/// Converts a zoom level into a projection scale for tiles of `tile_size` pixels.
#[must_use]
pub fn zoom_to_scale_with_tile_size(zoom: f64, tile_size: f64) -> f64 {
    tile_size * libm::exp2(zoom) / TAU
}

/// Converts a projection scale back into a zoom level for [`TILE_SIZE`] tiles.
#[must_use]
pub fn scale_to_zoom(k: f64) -> f64 {
    scale_to_zoom_with_tile_size(k, TILE_SIZE)
}

/// Converts a projection scale back into a zoom level for tiles of `tile_size` pixels.
#[must_use]
pub fn scale_to_zoom_with_tile_size(k: f64, tile_size: f64) -> f64 {
    libm::log2(k * TAU) - libm::log2(tile_size)
}
