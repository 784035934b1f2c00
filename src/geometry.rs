use std::{fmt, ops::Mul};

pub type Scalar = f64;
pub const EPSILON: f64 = f64::EPSILON;
pub const PI: f64 = std::f64::consts::PI;

/// Format floats in a compact way suitable for SVG attributes
pub fn scalar_fmt(f: &mut fmt::Formatter<'_>, value: Scalar) -> fmt::Result {
    let value_abs = value.abs();
    if value_abs.fract() < EPSILON {
        write!(f, "{}", value.trunc() as i64)
    } else if value_abs > 9999.0 || value_abs <= 0.0001 {
        write!(f, "{:.3e}", value)
    } else {
        let ten: Scalar = 10.0;
        let round = ten.powi(6 - (value_abs.trunc() + 1.0).log10().ceil() as i32);
        write!(f, "{}", (value * round).round() / round)
    }
}

/// Scalar wrapper which is displayed with [`scalar_fmt`]
#[derive(Clone, Copy, PartialEq)]
pub struct ScalarFmt(pub Scalar);

impl fmt::Display for ScalarFmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        scalar_fmt(f, self.0)
    }
}

impl fmt::Debug for ScalarFmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        scalar_fmt(f, self.0)
    }
}

/// 2D affine transformation
///
/// Stored as an array [m00, m01, m02, m10, m11, m12] but semantically corresponds to
/// a matrix:
/// ┌             ┐
/// │ m00 m01 m02 │
/// │ m10 m11 m12 │
/// │   0   0   1 │
/// └             ┘
#[derive(Clone, Copy, PartialEq)]
pub struct Transform([Scalar; 6]);

impl Default for Transform {
    fn default() -> Self {
        Self([1.0, 0.0, 0.0, 0.0, 1.0, 0.0])
    }
}

impl Transform {
    pub fn new(
        m00: Scalar,
        m01: Scalar,
        m02: Scalar,
        m10: Scalar,
        m11: Scalar,
        m12: Scalar,
    ) -> Self {
        Self([m00, m01, m02, m10, m11, m12])
    }

    pub fn identity() -> Self {
        Self::default()
    }

    pub fn new_translate(tx: Scalar, ty: Scalar) -> Self {
        Self([1.0, 0.0, tx, 0.0, 1.0, ty])
    }

    pub fn new_scale(sx: Scalar, sy: Scalar) -> Self {
        Self([sx, 0.0, 0.0, 0.0, sy, 0.0])
    }

    /// Rotation by `a` radians around the origin
    pub fn new_rotate(a: Scalar) -> Self {
        let (sin, cos) = a.sin_cos();
        Self([cos, -sin, 0.0, sin, cos, 0.0])
    }

    /// Apply this transformation to a point
    pub fn apply(&self, point: [Scalar; 2]) -> [Scalar; 2] {
        let Self([m00, m01, m02, m10, m11, m12]) = self;
        let [x, y] = point;
        [x * m00 + y * m01 + m02, x * m10 + y * m11 + m12]
    }

    /// Apply translation by `[tx, ty]` before self
    pub fn translate(&self, tx: Scalar, ty: Scalar) -> Self {
        self.matmul(Self::new_translate(tx, ty))
    }

    /// Apply scale transformatoin by `[sx, sy]` before self
    pub fn scale(&self, sx: Scalar, sy: Scalar) -> Self {
        self.matmul(Self::new_scale(sx, sy))
    }

    /// Apply rotation by `a` radians around the origin before self
    pub fn rotate(&self, a: Scalar) -> Self {
        self.matmul(Self::new_rotate(a))
    }

    /// Multiply transformations in matrix form
    pub fn matmul(&self, other: Transform) -> Self {
        let Self([s00, s01, s02, s10, s11, s12]) = self;
        let Self([o00, o01, o02, o10, o11, o12]) = other;

        // s00, s01, s02 | o00, o01, o02
        // s10, s11, s12 | o10, o11, o12
        // 0  , 0  , 1   | 0  , 0  , 1
        Self([
            s00 * o00 + s01 * o10,
            s00 * o01 + s01 * o11,
            s00 * o02 + s01 * o12 + s02,
            s10 * o00 + s11 * o10,
            s10 * o01 + s11 * o11,
            s10 * o02 + s11 * o12 + s12,
        ])
    }

    /// Check if two transformations are equal within the margin of `eps`
    pub fn is_close_to(&self, other: Transform, eps: Scalar) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(s, o)| (s - o).abs() < eps)
    }
}

impl Mul<Transform> for Transform {
    type Output = Transform;

    fn mul(self, other: Transform) -> Self::Output {
        self.matmul(other)
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self([m00, m01, m02, m10, m11, m12]) = self;
        write!(f, "matrix(")?;
        for (index, value) in [m00, m10, m01, m11, m02, m12].into_iter().enumerate() {
            if index != 0 {
                write!(f, " ")?;
            }
            scalar_fmt(f, *value)?;
        }
        write!(f, ")")
    }
}

/// Single operation of the SVG `transform` attribute
///
/// Unlike [`Transform`] it remembers how it was written, so it can be emitted
/// back exactly in the same form.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TransformOp {
    Translate(Scalar, Scalar),
    Scale(Scalar, Scalar),
    /// Rotation in degrees
    Rotate(Scalar),
}

impl TransformOp {
    /// Matrix form of the operation
    pub fn matrix(&self) -> Transform {
        match *self {
            TransformOp::Translate(tx, ty) => Transform::new_translate(tx, ty),
            TransformOp::Scale(sx, sy) => Transform::new_scale(sx, sy),
            TransformOp::Rotate(deg) => Transform::new_rotate(deg * PI / 180.0),
        }
    }
}

impl fmt::Display for TransformOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            TransformOp::Translate(tx, ty) => {
                write!(f, "translate({},{})", ScalarFmt(tx), ScalarFmt(ty))
            }
            TransformOp::Scale(sx, sy) => write!(f, "scale({},{})", ScalarFmt(sx), ScalarFmt(sy)),
            TransformOp::Rotate(deg) => write!(f, "rotate({})", ScalarFmt(deg)),
        }
    }
}

/// Ordered list of transform operations, value of the SVG `transform` attribute
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TransformList(Vec<TransformOp>);

impl TransformList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn translate(mut self, tx: Scalar, ty: Scalar) -> Self {
        self.0.push(TransformOp::Translate(tx, ty));
        self
    }

    pub fn scale(mut self, sx: Scalar, sy: Scalar) -> Self {
        self.0.push(TransformOp::Scale(sx, sy));
        self
    }

    pub fn rotate(mut self, deg: Scalar) -> Self {
        self.0.push(TransformOp::Rotate(deg));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn ops(&self) -> &[TransformOp] {
        &self.0
    }

    /// Combined matrix, operations are applied right to left as in SVG
    pub fn matrix(&self) -> Transform {
        self.0
            .iter()
            .fold(Transform::identity(), |tr, op| tr * op.matrix())
    }
}

impl fmt::Display for TransformList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ops = self.0.iter();
        if let Some(op) = ops.next() {
            write!(f, "{}", op)?;
        }
        for op in ops {
            write!(f, " {}", op)?;
        }
        Ok(())
    }
}
