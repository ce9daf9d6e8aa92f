//! Destination-to-source mappings used while sampling.

use crate::foundation::core::{Affine, Point};
use crate::foundation::error::{ResampleError, ResampleResult};
use crate::transform::classify::TransformClass;

/// Maps a destination-space point into source space.
pub trait InverseMap: Send + Sync {
    fn map(&self, x: f64, y: f64) -> Point;

    fn class(&self) -> TransformClass;
}

impl InverseMap for Affine {
    #[inline]
    fn map(&self, x: f64, y: f64) -> Point {
        *self * Point::new(x, y)
    }

    fn class(&self) -> TransformClass {
        TransformClass::of_affine(self)
    }
}

/// Row-major 3x3 projective matrix.
///
/// `x' = (m[0] x + m[1] y + m[2]) / w`, `y' = (m[3] x + m[4] y + m[5]) / w`,
/// `w = m[6] x + m[7] y + m[8]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Projective {
    m: [f64; 9],
}

impl Projective {
    pub fn new(m: [f64; 9]) -> ResampleResult<Self> {
        if m.iter().any(|v| !v.is_finite()) {
            return Err(ResampleError::validation(
                "projective matrix coefficients must be finite",
            ));
        }
        if m[8] == 0.0 && m[6] == 0.0 && m[7] == 0.0 {
            return Err(ResampleError::validation(
                "projective matrix has a zero last row",
            ));
        }
        Ok(Self { m })
    }

    pub fn from_affine(a: Affine) -> Self {
        let [a, b, c, d, e, f] = a.as_coeffs();
        Self {
            m: [a, c, e, b, d, f, 0.0, 0.0, 1.0],
        }
    }

    pub fn coeffs(&self) -> [f64; 9] {
        self.m
    }

    pub fn has_perspective(&self) -> bool {
        self.m[6] != 0.0 || self.m[7] != 0.0 || self.m[8] != 1.0
    }

    fn affine_part(&self) -> Affine {
        let m = &self.m;
        Affine::new([m[0], m[3], m[1], m[4], m[2], m[5]])
    }
}

impl InverseMap for Projective {
    #[inline]
    fn map(&self, x: f64, y: f64) -> Point {
        let m = &self.m;
        let w = m[6] * x + m[7] * y + m[8];
        // Points on the vanishing line have no finite preimage.
        if w == 0.0 {
            return Point::new(f64::INFINITY, f64::INFINITY);
        }
        Point::new(
            (m[0] * x + m[1] * y + m[2]) / w,
            (m[3] * x + m[4] * y + m[5]) / w,
        )
    }

    fn class(&self) -> TransformClass {
        if self.has_perspective() {
            return TransformClass::all();
        }
        TransformClass::of_affine(&self.affine_part())
    }
}

/// The inverse map carried by a render state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InverseTransform {
    Affine(Affine),
    Projective(Projective),
}

impl InverseTransform {
    /// Invert a forward (source-to-destination) affine.
    pub fn from_forward(forward: Affine) -> ResampleResult<Self> {
        let det = forward.determinant();
        if !det.is_finite() || det.abs() < f64::EPSILON {
            return Err(ResampleError::validation(
                "forward transform is not invertible",
            ));
        }
        Ok(InverseTransform::Affine(forward.inverse()))
    }
}

impl Default for InverseTransform {
    fn default() -> Self {
        InverseTransform::Affine(Affine::IDENTITY)
    }
}

impl From<Affine> for InverseTransform {
    fn from(value: Affine) -> Self {
        InverseTransform::Affine(value)
    }
}

impl From<Projective> for InverseTransform {
    fn from(value: Projective) -> Self {
        InverseTransform::Projective(value)
    }
}

impl InverseMap for InverseTransform {
    #[inline]
    fn map(&self, x: f64, y: f64) -> Point {
        match self {
            InverseTransform::Affine(a) => a.map(x, y),
            InverseTransform::Projective(p) => p.map(x, y),
        }
    }

    fn class(&self) -> TransformClass {
        match self {
            InverseTransform::Affine(a) => a.class(),
            InverseTransform::Projective(p) => p.class(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/inverse.rs"]
mod tests;
