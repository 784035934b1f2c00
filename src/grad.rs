use crate::{Color, Scalar, ScalarFmt, TransformList};
use std::{cmp::Ordering, fmt};

/// Specifies color at a particular parmeter offset of the gradient
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GradStop {
    /// Offset in the range of `[0, 1]`
    pub offset: Scalar,
    pub color: Color,
}

impl GradStop {
    pub fn new(offset: Scalar, color: impl Into<Color>) -> Self {
        Self {
            offset,
            color: color.into(),
        }
    }

    /// Offset formatted as percentage, as used by the `offset` attribute
    pub fn offset_percent(&self) -> impl fmt::Display {
        Percent(self.offset)
    }
}

struct Percent(Scalar);

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", ScalarFmt(self.0 * 100.0))
    }
}

/// List of all `GradStop` in the gradient, sorted by offset
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct GradStops {
    stops: Vec<GradStop>,
}

impl GradStops {
    pub fn new(mut stops: Vec<GradStop>) -> Self {
        stops.sort_by(|s0, s1| s0.offset.partial_cmp(&s1.offset).unwrap_or(Ordering::Greater));
        Self { stops }
    }

    pub fn iter(&self) -> impl Iterator<Item = &GradStop> {
        self.stops.iter()
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

impl From<Vec<GradStop>> for GradStops {
    fn from(stops: Vec<GradStop>) -> Self {
        Self::new(stops)
    }
}

/// Linear gradient definition
///
/// Without a transform the gradient axis runs left-to-right across the
/// bounding box of the element it is applied to.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GradLinear {
    pub id: String,
    pub stops: GradStops,
    pub transform: TransformList,
}

impl GradLinear {
    pub fn new(id: impl Into<String>, stops: impl Into<GradStops>, transform: TransformList) -> Self {
        Self {
            id: id.into(),
            stops: stops.into(),
            transform,
        }
    }

    /// Two stop gradient running from `top` to `bottom` color
    ///
    /// Stops are placed at 20% and 80%, and the axis is rotated by 90 degrees so it
    /// runs top-to-bottom.
    pub fn vertical(id: impl Into<String>, top: Color, bottom: Color) -> Self {
        Self::new(
            id,
            vec![GradStop::new(0.2, top), GradStop::new(0.8, bottom)],
            TransformList::new().rotate(90.0),
        )
    }

    /// Paint server reference usable in `fill` or `stroke` properties
    pub fn url(&self) -> String {
        format!("url(#{})", self.id)
    }
}
