// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar helpers.
//!
//! Both functions propagate NaN and never panic, unlike [`f64::clamp`]
//! with `min > max`.

/// Saturates `value` into `[min, max]`.
///
/// Computed as `min(max(value, min), max)`, so when `min > max` the result is
/// `max`.
#[must_use]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    let v = if value < min { min } else { value };
    if v > max { max } else { v }
}

/// Wraps `value` into the half‑open range `[min, max)`.
///
/// An empty range returns `min`.
#[must_use]
pub fn wrap(value: f64, min: f64, max: f64) -> f64 {
    let range = max - min;
    if range == 0.0 {
        return min;
    }
    ((value - min) % range + range) % range + min
}
