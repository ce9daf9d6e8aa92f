//! Per-scanline high-quality resampling.
//!
//! Each destination pixel centre is mapped into source space and every source
//! pixel within the kernel's support is blended with separable weights.

use std::sync::Arc;

use crate::foundation::core::Rgba8Premul;
use crate::foundation::math::{clamp_max, round_to_int};
use crate::kernel::shape::Kernel;
use crate::source::pixmap::PixelSource;
use crate::transform::inverse::{InverseMap, InverseTransform};

/// Produces a run of destination pixels for one scanline.
///
/// `out.len()` pixels are written, for destination `(x, y)`, `(x + 1, y)`, ...
pub trait ScanlineFilter: Send + Sync {
    fn filter_span(&self, src: &dyn PixelSource, x: i32, y: i32, out: &mut [Rgba8Premul]);
}

/// The convolution filter returned by selection for scaled draws.
#[derive(Clone, Debug)]
pub struct HighQualityFilter {
    kernel: Arc<Kernel>,
    inverse: InverseTransform,
}

impl HighQualityFilter {
    pub fn new(kernel: Arc<Kernel>, inverse: InverseTransform) -> Self {
        Self { kernel, inverse }
    }

    pub fn kernel(&self) -> &Arc<Kernel> {
        &self.kernel
    }

    pub fn inverse(&self) -> &InverseTransform {
        &self.inverse
    }
}

impl ScanlineFilter for HighQualityFilter {
    fn filter_span(&self, src: &dyn PixelSource, x: i32, y: i32, out: &mut [Rgba8Premul]) {
        filter_scanline(&self.kernel, &self.inverse, src, x, y, out);
    }
}

/// Convolve `out.len()` destination pixels starting at `(x, y)`.
pub fn filter_scanline<M, S>(
    kernel: &Kernel,
    inverse: &M,
    src: &S,
    x: i32,
    y: i32,
    out: &mut [Rgba8Premul],
) where
    M: InverseMap + ?Sized,
    S: PixelSource + ?Sized,
{
    // An empty source has nothing to sample.
    if src.width() == 0 || src.height() == 0 {
        out.fill(Rgba8Premul::transparent());
        return;
    }
    let dy = f64::from(y) + 0.5;
    for (i, slot) in out.iter_mut().enumerate() {
        let dx = f64::from(x) + i as f64 + 0.5;
        let p = inverse.map(dx, dy);
        *slot = convolve_at(kernel, src, p.x - 0.5, p.y - 0.5);
    }
}

/// Weighted average around the source-space point `(sx, sy)`, already shifted
/// to pixel-centre convention. `src` must not be empty.
pub(crate) fn convolve_at<S>(kernel: &Kernel, src: &S, sx: f64, sy: f64) -> Rgba8Premul
where
    S: PixelSource + ?Sized,
{
    let max_x = last_index(src.width());
    let max_y = last_index(src.height());
    let radius = kernel.radius();

    let y0 = clamp_max((sy - radius).ceil() as i32, max_y);
    let y1 = clamp_max((sy + radius).floor() as i32, max_y);
    let x0 = clamp_max((sx - radius).ceil() as i32, max_x);
    let x1 = clamp_max((sx + radius).floor() as i32, max_x);

    let mut weight = 0.0f64;
    let (mut fr, mut fg, mut fb, mut fa) = (0.0f64, 0.0f64, 0.0f64, 0.0f64);

    for src_y in y0..=y1 {
        let wy = kernel.lookup(sy - f64::from(src_y));
        if wy == 0.0 {
            continue;
        }
        for src_x in x0..=x1 {
            let wx = kernel.lookup(sx - f64::from(src_x));
            let w = wx * wy;
            if w == 0.0 {
                continue;
            }
            let c = src.pixel(src_x as u32, src_y as u32);
            fr += w * f64::from(c.r);
            fg += w * f64::from(c.g);
            fb += w * f64::from(c.b);
            fa += w * f64::from(c.a);
            weight += w;
        }
    }

    // Nothing in the clamped window lies inside the support (the point is far
    // outside the bitmap): use the nearest edge pixel, as clamp tiling would.
    if weight.abs() <= f64::EPSILON {
        let nx = clamp_max(round_to_int(sx), max_x);
        let ny = clamp_max(round_to_int(sy), max_y);
        return src.pixel(nx as u32, ny as u32);
    }

    let a = clamp_max(round_to_int(fa / weight), 255);
    let r = clamp_max(round_to_int(fr / weight), a);
    let g = clamp_max(round_to_int(fg / weight), a);
    let b = clamp_max(round_to_int(fb / weight), a);

    Rgba8Premul::new(r as u8, g as u8, b as u8, a as u8)
}

/// Largest addressable index along an axis of `len` pixels, saturating at `i32::MAX`.
#[inline]
pub(crate) fn last_index(len: u32) -> i32 {
    i32::try_from(len).unwrap_or(i32::MAX) - 1
}

#[cfg(test)]
#[path = "../../tests/unit/render/convolve.rs"]
mod tests;
