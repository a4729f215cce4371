// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis‑aligned bounding boxes.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use kurbo::{Point, Rect};

use crate::units::{meters_to_lat, meters_to_lon};

// `f64::min`/`max` return the non-NaN operand; these keep the NaN.
fn min_nan(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() { f64::NAN } else { a.min(b) }
}

fn max_nan(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() { f64::NAN } else { a.max(b) }
}

/// An axis‑aligned bounding box over 2D points.
///
/// A valid extent has `min.x <= max.x` and `min.y <= max.y`. The
/// [empty](Self::EMPTY) extent deliberately breaks that rule: its corners sit
/// at `(+∞, +∞)` and `(−∞, −∞)`, which makes it the identity for
/// [`extend`](Self::extend).
///
/// `Extent` is a plain value. Combining operations return a new extent and
/// never touch the receiver.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    /// Minimum corner.
    pub min: Point,
    /// Maximum corner.
    pub max: Point,
}

/// Flat `{min_x, min_y, max_x, max_y}` form of an [`Extent`], as expected by
/// R‑tree style spatial indexes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BBox {
    /// Minimum x.
    pub min_x: f64,
    /// Minimum y.
    pub min_y: f64,
    /// Maximum x.
    pub max_x: f64,
    /// Maximum y.
    pub max_y: f64,
}

impl Default for Extent {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Extent {
    /// The empty extent.
    pub const EMPTY: Self = Self {
        min: Point::new(f64::INFINITY, f64::INFINITY),
        max: Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
    };

    /// Creates an extent from explicit corners.
    ///
    /// The corners are stored as given; no reordering takes place.
    #[must_use]
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Returns the empty extent.
    #[must_use]
    pub const fn empty() -> Self {
        Self::EMPTY
    }

    /// Creates a degenerate extent covering a single point.
    #[must_use]
    pub const fn from_point(p: Point) -> Self {
        Self { min: p, max: p }
    }

    /// Returns the smallest extent containing every point, or the empty
    /// extent for no points.
    #[must_use]
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Self {
        points.into_iter().collect()
    }

    /// Returns `true` if this extent covers no points at all.
    ///
    /// Degenerate (zero‑width or zero‑height) extents are not empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Exact component‑wise equality of both corners.
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        self == other
    }

    /// Returns the smallest extent containing both `self` and `other`.
    ///
    /// A NaN coordinate on either side makes that coordinate NaN.
    #[must_use]
    pub fn extend(&self, other: impl Into<Self>) -> Self {
        let other = other.into();
        Self {
            min: Point::new(
                min_nan(self.min.x, other.min.x),
                min_nan(self.min.y, other.min.y),
            ),
            max: Point::new(
                max_nan(self.max.x, other.max.x),
                max_nan(self.max.y, other.max.y),
            ),
        }
    }

    /// Returns the smallest extent containing both `self` and `p`.
    #[must_use]
    pub fn extend_point(&self, p: Point) -> Self {
        self.extend(Self::from_point(p))
    }

    /// Unsigned area. Infinite when a corner is infinite.
    #[must_use]
    pub fn area(&self) -> f64 {
        ((self.max.x - self.min.x) * (self.max.y - self.min.y)).abs()
    }

    /// Midpoint of the two corners.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

    /// `[min_x, min_y, max_x, max_y]`.
    #[must_use]
    pub fn rectangle(&self) -> [f64; 4] {
        [self.min.x, self.min.y, self.max.x, self.max.y]
    }

    /// Named form of [`rectangle`](Self::rectangle).
    #[must_use]
    pub fn bbox(&self) -> BBox {
        BBox {
            min_x: self.min.x,
            min_y: self.min.y,
            max_x: self.max.x,
            max_y: self.max.y,
        }
    }

    /// Closed ring around the box, starting and ending at `min`.
    ///
    /// The ring runs `min → (min.x, max.y) → max → (max.x, min.y) → min`,
    /// which is clockwise in a y‑up frame.
    #[must_use]
    pub fn polygon(&self) -> [Point; 5] {
        [
            self.min,
            Point::new(self.min.x, self.max.y),
            self.max,
            Point::new(self.max.x, self.min.y),
            self.min,
        ]
    }

    /// Returns `true` if `other` lies entirely inside `self`, boundaries included.
    #[must_use]
    pub fn contains(&self, other: impl Into<Self>) -> bool {
        let other = other.into();
        other.min.x >= self.min.x
            && other.min.y >= self.min.y
            && other.max.x <= self.max.x
            && other.max.y <= self.max.y
    }

    /// Returns `true` if the boxes overlap or touch.
    #[must_use]
    pub fn intersects(&self, other: impl Into<Self>) -> bool {
        let other = other.into();
        other.min.x <= self.max.x
            && other.min.y <= self.max.y
            && other.max.x >= self.min.x
            && other.max.y >= self.min.y
    }

    /// Returns the overlap of the two boxes, or the empty extent if they do
    /// not intersect.
    #[must_use]
    pub fn intersection(&self, other: impl Into<Self>) -> Self {
        let other = other.into();
        if !self.intersects(other) {
            return Self::EMPTY;
        }
        Self {
            min: Point::new(
                max_nan(self.min.x, other.min.x),
                max_nan(self.min.y, other.min.y),
            ),
            max: Point::new(
                min_nan(self.max.x, other.max.x),
                min_nan(self.max.y, other.max.y),
            ),
        }
    }

    /// Fraction of this extent's area that lies inside `other`.
    ///
    /// Returns `0` whenever either area is zero, infinite, or NaN, so the
    /// result is always a finite number in `[0, 1]`. Not symmetric.
    #[must_use]
    pub fn percent_contained_in(&self, other: impl Into<Self>) -> f64 {
        let overlap = self.intersection(other).area();
        let own = self.area();
        let usable = |a: f64| a.is_finite() && a != 0.0;
        if usable(overlap) && usable(own) {
            overlap / own
        } else {
            0.0
        }
    }

    /// Grows a `(lon, lat)` extent by `meters` on every side.
    ///
    /// The longitude padding is measured at the latitude of the center, so
    /// boxes nearer the poles widen by more degrees.
    #[must_use]
    pub fn pad_by_meters(&self, meters: f64) -> Self {
        let d_lat = meters_to_lat(meters);
        let d_lon = meters_to_lon(meters, self.center().y);
        Self {
            min: Point::new(self.min.x - d_lon, self.min.y - d_lat),
            max: Point::new(self.max.x + d_lon, self.max.y + d_lat),
        }
    }

    /// Splits the box into quadrants about its center.
    ///
    /// Order is NW, NE, SW, SE, with "north" meaning larger y.
    #[must_use]
    pub fn split(&self) -> [Self; 4] {
        let c = self.center();
        [
            Self::new(Point::new(self.min.x, c.y), Point::new(c.x, self.max.y)),
            Self::new(c, self.max),
            Self::new(self.min, c),
            Self::new(Point::new(c.x, self.min.y), Point::new(self.max.x, c.y)),
        ]
    }

    /// Converts to a kurbo [`Rect`] with the same corners.
    #[must_use]
    pub fn to_rect(&self) -> Rect {
        Rect::new(self.min.x, self.min.y, self.max.x, self.max.y)
    }

    /// Canonical `"minX,minY,maxX,maxY"` form for query strings.
    #[must_use]
    pub fn to_param(&self) -> String {
        alloc::format!("{self}")
    }
}

impl From<Point> for Extent {
    fn from(p: Point) -> Self {
        Self::from_point(p)
    }
}

impl From<(Point, Point)> for Extent {
    fn from((min, max): (Point, Point)) -> Self {
        Self::new(min, max)
    }
}

impl From<Rect> for Extent {
    fn from(rect: Rect) -> Self {
        let rect = rect.abs();
        Self::new(Point::new(rect.x0, rect.y0), Point::new(rect.x1, rect.y1))
    }
}

impl From<BBox> for Extent {
    fn from(b: BBox) -> Self {
        Self::new(Point::new(b.min_x, b.min_y), Point::new(b.max_x, b.max_y))
    }
}

impl FromIterator<Point> for Extent {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::EMPTY, |acc, p| acc.extend_point(p))
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.min.x, self.min.y, self.max.x, self.max.y
        )
    }
}

/// Error returned when parsing an [`Extent`] from its query‑string form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseExtentError {
    /// The input did not have exactly four comma‑separated fields.
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// The field at `index` is not a number.
    InvalidNumber {
        /// Zero‑based field position.
        index: usize,
    },
}

impl fmt::Display for ParseExtentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongFieldCount { found } => {
                write!(f, "expected 4 comma-separated numbers, found {found} fields")
            }
            Self::InvalidNumber { index } => {
                write!(f, "field {index} of extent is not a number")
            }
        }
    }
}

impl core::error::Error for ParseExtentError {}

impl FromStr for Extent {
    type Err = ParseExtentError;

    /// Parses `"minX,minY,maxX,maxY"` as produced by [`Extent::to_param`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut values = [0.0_f64; 4];
        let mut found = 0;
        for (index, field) in s.split(',').enumerate() {
            found += 1;
            let Some(slot) = values.get_mut(index) else {
                continue;
            };
            *slot = field
                .trim()
                .parse()
                .map_err(|_| ParseExtentError::InvalidNumber { index })?;
        }
        if found != 4 {
            return Err(ParseExtentError::WrongFieldCount { found });
        }
        let [min_x, min_y, max_x, max_y] = values;
        Ok(Self::new(Point::new(min_x, min_y), Point::new(max_x, max_y)))
    }
}
