use crate::Color;

/// Graph configuration
///
/// Missing fields take default values, unknown fields are ignored when decoding.
/// Setting `width` to 90 gives 30 points with the default `modulo`, which is
/// handy for month long daily series.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct GraphOptions {
    /// Height of the drawing area
    pub height: i64,
    /// Width of the drawing area
    pub width: i64,
    /// Distance between sampled x coordinates
    pub modulo: i64,
    /// Explicit polyline points `"x0,y0 x1,y1 "`, points are sampled if empty
    pub points: String,
    /// Gradient color at the top of the graph
    pub top_color: Color,
    /// Gradient color at the bottom of the graph
    pub bottom_color: Color,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            height: 90,
            width: 30,
            modulo: 3,
            points: String::new(),
            top_color: Color::new("gold"),
            bottom_color: Color::new("red"),
        }
    }
}

impl GraphOptions {
    pub fn with_height(self, height: i64) -> Self {
        Self { height, ..self }
    }

    pub fn with_width(self, width: i64) -> Self {
        Self { width, ..self }
    }

    pub fn with_modulo(self, modulo: i64) -> Self {
        Self { modulo, ..self }
    }

    pub fn with_points(self, points: impl Into<String>) -> Self {
        Self {
            points: points.into(),
            ..self
        }
    }

    pub fn with_top_color(self, color: impl Into<Color>) -> Self {
        Self {
            top_color: color.into(),
            ..self
        }
    }

    pub fn with_bottom_color(self, color: impl Into<Color>) -> Self {
        Self {
            bottom_color: color.into(),
            ..self
        }
    }

    /// Decode options from JSON object
    #[cfg(feature = "serde")]
    pub fn from_json(text: &str) -> Result<Self, crate::GraphError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Decode options from JSON stream
    #[cfg(feature = "serde")]
    pub fn from_reader(reader: impl std::io::Read) -> Result<Self, crate::GraphError> {
        Ok(serde_json::from_reader(reader)?)
    }
}
