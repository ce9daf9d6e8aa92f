//! Separable filter shapes and their precomputed weight tables.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{ResampleError, ResampleResult};

/// Number of buckets in a kernel's weight table.
pub const KERNEL_TABLE_SIZE: usize = 128;

/// The closed set of kernel families that can be selected by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KernelKind {
    Mitchell,
    Lanczos,
    Hamming,
    Gaussian,
    Triangle,
    Box,
}

impl KernelKind {
    /// Every kind, in the order they are documented.
    pub const ALL: [KernelKind; 6] = [
        KernelKind::Mitchell,
        KernelKind::Lanczos,
        KernelKind::Hamming,
        KernelKind::Gaussian,
        KernelKind::Triangle,
        KernelKind::Box,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            KernelKind::Mitchell => "mitchell",
            KernelKind::Lanczos => "lanczos",
            KernelKind::Hamming => "hamming",
            KernelKind::Gaussian => "gaussian",
            KernelKind::Triangle => "triangle",
            KernelKind::Box => "box",
        }
    }
}

impl fmt::Display for KernelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KernelKind {
    type Err = ResampleError;

    fn from_str(s: &str) -> ResampleResult<Self> {
        KernelKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| {
                ResampleError::invalid_configuration(format!(
                    "unknown bitmap filter '{s}' (expected one of mitchell, lanczos, hamming, gaussian, triangle, box)"
                ))
            })
    }
}

/// Analytic filter functions, parameterized per family.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KernelShape {
    /// Mitchell-Netravali cubic with shape parameters `b` and `c`.
    Mitchell { b: f64, c: f64 },
    /// Windowed sinc, window = radius.
    Lanczos { radius: f64 },
    /// Sinc with a Hamming window.
    Hamming { radius: f64 },
    /// Gaussian shifted down so that it reaches zero at the radius.
    Gaussian { alpha: f64, radius: f64 },
    Triangle { radius: f64 },
    Box { radius: f64 },
}

impl KernelShape {
    pub fn radius(&self) -> f64 {
        match *self {
            KernelShape::Mitchell { .. } => 2.0,
            KernelShape::Lanczos { radius }
            | KernelShape::Hamming { radius }
            | KernelShape::Gaussian { radius, .. }
            | KernelShape::Triangle { radius }
            | KernelShape::Box { radius } => radius,
        }
    }

    /// Exact weight at signed distance `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        let x = x.abs();
        match *self {
            KernelShape::Mitchell { b, c } => {
                if x > 2.0 {
                    0.0
                } else if x > 1.0 {
                    ((-b - 6.0 * c) * x * x * x
                        + (6.0 * b + 30.0 * c) * x * x
                        + (-12.0 * b - 48.0 * c) * x
                        + (8.0 * b + 24.0 * c))
                        / 6.0
                } else {
                    ((12.0 - 9.0 * b - 6.0 * c) * x * x * x
                        + (-18.0 + 12.0 * b + 6.0 * c) * x * x
                        + (6.0 - 2.0 * b))
                        / 6.0
                }
            }
            KernelShape::Lanczos { radius } => {
                if x >= radius {
                    0.0
                } else {
                    sinc(x) * sinc(x / radius)
                }
            }
            KernelShape::Hamming { radius } => {
                if x >= radius {
                    0.0
                } else {
                    sinc(x) * (0.54 + 0.46 * (PI * x / radius).cos())
                }
            }
            KernelShape::Gaussian { alpha, radius } => {
                let floor = (-alpha * radius * radius).exp();
                ((-alpha * x * x).exp() - floor).max(0.0)
            }
            KernelShape::Triangle { radius } => (radius - x).max(0.0),
            KernelShape::Box { radius } => {
                if x <= radius {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }
}

fn sinc(x: f64) -> f64 {
    if x.abs() < f64::EPSILON {
        return 1.0;
    }
    let xpi = x * PI;
    xpi.sin() / xpi
}

/// An immutable, named filter with a precomputed weight table.
///
/// `lookup(d)` is zero for `|d| > radius`; inside the support it returns the
/// shape sampled at the centre of the bucket `|d|` falls into.
#[derive(Clone, Debug)]
pub struct Kernel {
    kind: KernelKind,
    shape: KernelShape,
    lookup_multiplier: f64,
    table: Box<[f64]>,
}

impl Kernel {
    pub(crate) fn new(kind: KernelKind, shape: KernelShape) -> Self {
        let radius = shape.radius();
        let table = (0..KERNEL_TABLE_SIZE)
            .map(|i| shape.evaluate((i as f64 + 0.5) * radius / KERNEL_TABLE_SIZE as f64))
            .collect::<Vec<_>>()
            .into_boxed_slice();
        Self {
            kind,
            shape,
            lookup_multiplier: KERNEL_TABLE_SIZE as f64 / radius,
            table,
        }
    }

    pub fn kind(&self) -> KernelKind {
        self.kind
    }

    pub fn shape(&self) -> KernelShape {
        self.shape
    }

    /// Half-width beyond which every weight is zero.
    pub fn radius(&self) -> f64 {
        self.shape.radius()
    }

    /// Tabulated weight at signed distance `d`.
    #[inline]
    pub fn lookup(&self, d: f64) -> f64 {
        let d = d.abs();
        if d > self.radius() {
            return 0.0;
        }
        let idx = ((d * self.lookup_multiplier) as usize).min(KERNEL_TABLE_SIZE - 1);
        self.table[idx]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/shape.rs"]
mod tests;
