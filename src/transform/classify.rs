//! Coarse classification of an inverse transform.

use crate::foundation::core::Affine;

const ORTHONORMAL_TOLERANCE: f64 = 1e-12;

bitflags::bitflags! {
    /// Which components a transform carries. The empty set is the identity.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct TransformClass: u8 {
        const TRANSLATE = 0b0001;
        /// The linear part changes lengths (scale or skew).
        const SCALE = 0b0010;
        /// Off-diagonal coefficients are present (rotation or skew).
        const AFFINE = 0b0100;
        const PERSPECTIVE = 0b1000;
    }
}

impl TransformClass {
    /// Classify an affine map `x' = a x + c y + e`, `y' = b x + d y + f`.
    pub fn of_affine(m: &Affine) -> Self {
        let [a, b, c, d, e, f] = m.as_coeffs();
        let mut class = TransformClass::empty();

        if e != 0.0 || f != 0.0 {
            class |= TransformClass::TRANSLATE;
        }
        if b != 0.0 || c != 0.0 {
            class |= TransformClass::AFFINE;
        }

        // A rotation or reflection keeps both columns unit length and orthogonal.
        let col0 = a * a + b * b;
        let col1 = c * c + d * d;
        let dot = a * c + b * d;
        let orthonormal = (col0 - 1.0).abs() <= ORTHONORMAL_TOLERANCE
            && (col1 - 1.0).abs() <= ORTHONORMAL_TOLERANCE
            && dot.abs() <= ORTHONORMAL_TOLERANCE;
        if !orthonormal {
            class |= TransformClass::SCALE;
        }

        class
    }

    pub fn is_identity(self) -> bool {
        self.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/classify.rs"]
mod tests;
