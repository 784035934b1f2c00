//! Point sampling for the graph polyline
//!
//! X coordinates are deterministic (every multiple of `modulo` inside of `[0, width)`),
//! y coordinates are drawn from the provided random source.
use crate::{utils::clamp, GraphError, Scalar};
use rand::Rng;
use std::{fmt, ops::Deref};

/// Single vertex of the graph polyline in data coordinates
///
/// `y` is a height above the baseline, not a screen coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Ordered (by `x`) list of polyline vertices
///
/// Displayed in the SVG `points` attribute format, every point is followed
/// by a single space including the last one: `"0,10 3,20 6,5 "`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Points(Vec<Point>);

impl Points {
    pub fn new(points: Vec<Point>) -> Self {
        Self(points)
    }

    pub fn into_vec(self) -> Vec<Point> {
        self.0
    }
}

impl Deref for Points {
    type Target = [Point];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromIterator<Point> for Points {
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for point in self.0.iter() {
            write!(f, "{} ", point)?;
        }
        Ok(())
    }
}

/// Validate `modulo` and convert it into a step size
fn step(modulo: i64) -> Result<usize, GraphError> {
    if modulo <= 0 {
        return Err(GraphError::InvalidArgument {
            name: "modulo",
            value: modulo,
        });
    }
    usize::try_from(modulo).map_err(|_| GraphError::InvalidArgument {
        name: "modulo",
        value: modulo,
    })
}

/// Every integer in `[0, width)` divisible by `modulo`, in ascending order
///
/// Non-positive `width` produces an empty series, non-positive `modulo` is an error.
pub fn x_series(width: i64, modulo: i64) -> Result<Vec<i64>, GraphError> {
    let step = step(modulo)?;
    Ok((0..width.max(0)).step_by(step).collect())
}

/// Draw height above the baseline in `[1, max(height, 1)]`
///
/// Computed as `floor(random * height) + 1`, with the result capped at `height`
/// in case of floating point rounding at the upper boundary.
pub fn sample_y(height: i64, rng: &mut impl Rng) -> i64 {
    let random: Scalar = rng.r#gen();
    let y = (random * height as Scalar).floor() as i64 + 1;
    clamp(y, 1, height.max(1))
}

/// Generate polyline points, one point per element of the [`x_series`]
pub fn sample(
    width: i64,
    height: i64,
    modulo: i64,
    rng: &mut impl Rng,
) -> Result<Points, GraphError> {
    let xs = x_series(width, modulo)?;
    tracing::trace!(width, height, modulo, count = xs.len(), "[sample]");
    Ok(xs
        .into_iter()
        .map(|x| Point::new(x, sample_y(height, rng)))
        .collect())
}
