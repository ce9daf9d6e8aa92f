use crate::foundation::core::Rgba8Premul;
use crate::foundation::math::scale_by_alpha256;
use crate::render::convolve::ScanlineFilter;
use crate::render::state::{FULL_ALPHA_SCALE, RenderState, TileMode};
use crate::source::pixmap::PixelSource;
use crate::transform::inverse::{InverseMap, InverseTransform};

/// Point sampling used whenever the high-quality path is not selected.
#[derive(Clone, Debug)]
pub struct NearestFilter {
    inverse: InverseTransform,
    tile_x: TileMode,
    tile_y: TileMode,
    alpha_scale: u16,
}

impl NearestFilter {
    pub fn new(state: &RenderState) -> Self {
        Self {
            inverse: state.inverse,
            tile_x: state.tile_x,
            tile_y: state.tile_y,
            alpha_scale: state.alpha_scale.min(FULL_ALPHA_SCALE),
        }
    }
}

impl ScanlineFilter for NearestFilter {
    fn filter_span(&self, src: &dyn PixelSource, x: i32, y: i32, out: &mut [Rgba8Premul]) {
        let (w, h) = (i64::from(src.width()), i64::from(src.height()));
        if w == 0 || h == 0 {
            out.fill(Rgba8Premul::transparent());
            return;
        }
        let dy = f64::from(y) + 0.5;
        for (i, slot) in out.iter_mut().enumerate() {
            let dx = f64::from(x) + i as f64 + 0.5;
            let p = self.inverse.map(dx, dy);
            let sx = tile(p.x.floor() as i64, w, self.tile_x);
            let sy = tile(p.y.floor() as i64, h, self.tile_y);
            let c = src.pixel(sx as u32, sy as u32);
            *slot = if self.alpha_scale == FULL_ALPHA_SCALE {
                c
            } else {
                Rgba8Premul::new(
                    scale_by_alpha256(c.r, self.alpha_scale),
                    scale_by_alpha256(c.g, self.alpha_scale),
                    scale_by_alpha256(c.b, self.alpha_scale),
                    scale_by_alpha256(c.a, self.alpha_scale),
                )
            };
        }
    }
}

/// Map an integer coordinate into `[0, len)`.
pub(crate) fn tile(v: i64, len: i64, mode: TileMode) -> i64 {
    match mode {
        TileMode::Clamp => v.clamp(0, len - 1),
        TileMode::Repeat => v.rem_euclid(len),
        TileMode::Mirror => {
            let m = v.rem_euclid(2 * len);
            if m >= len { 2 * len - 1 - m } else { m }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/nearest.rs"]
mod tests;
