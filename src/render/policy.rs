//! Decides whether a draw takes the high-quality convolution path.

use std::fmt;
use std::sync::Arc;

use crate::foundation::error::ResampleResult;
use crate::kernel::select::select_kernel;
use crate::render::convolve::HighQualityFilter;
use crate::render::state::{FULL_ALPHA_SCALE, FilterQuality, RenderState, TileMode};
use crate::source::pixmap::PixelFormat;
use crate::transform::classify::TransformClass;

/// Why a state cannot use the high-quality path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ineligible {
    QualityNotHigh,
    PartialAlpha,
    UnsupportedFormat,
    NonClampTile,
}

impl fmt::Display for Ineligible {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Ineligible::QualityNotHigh => "filter quality is not high",
            Ineligible::PartialAlpha => "alpha scale is not opaque",
            Ineligible::UnsupportedFormat => "source format is not 32-bit ARGB",
            Ineligible::NonClampTile => "tile mode is not clamp",
        })
    }
}

/// First failing eligibility condition, in check order.
pub fn ineligibility(state: &RenderState) -> Option<Ineligible> {
    if state.quality != FilterQuality::High {
        return Some(Ineligible::QualityNotHigh);
    }
    if state.alpha_scale != FULL_ALPHA_SCALE {
        return Some(Ineligible::PartialAlpha);
    }
    // TODO: 565 and A8 sources could be expanded to 32-bit before convolving.
    if state.format != PixelFormat::Argb8888 {
        return Some(Ineligible::UnsupportedFormat);
    }
    if state.tile_x != TileMode::Clamp || state.tile_y != TileMode::Clamp {
        return Some(Ineligible::NonClampTile);
    }
    None
}

pub fn is_high_quality_path_eligible(state: &RenderState) -> bool {
    ineligibility(state).is_none()
}

/// Pick the scanline filter for a draw.
///
/// An ineligible state yields `Ok(None)` and is left untouched. An eligible
/// state whose inverse has an affine or scale component gets a freshly built
/// kernel cached on it; the convolution filter itself is only returned when
/// the inverse scales. A bad kernel tag fails before the cached kernel is
/// replaced.
#[tracing::instrument(skip(state), fields(quality = ?state.quality, class = ?state.inverse_class()))]
pub fn choose_filter_proc(state: &mut RenderState) -> ResampleResult<Option<HighQualityFilter>> {
    if let Some(reason) = ineligibility(state) {
        tracing::debug!(%reason, "high-quality path not eligible");
        return Ok(None);
    }

    let class = state.inverse_class();
    if class.intersects(TransformClass::AFFINE | TransformClass::SCALE) {
        let kernel = Arc::new(select_kernel(&state.config.kernel)?);
        tracing::debug!(kernel = %kernel.kind(), radius = kernel.radius(), "allocated bitmap filter");
        state.set_kernel(kernel);
    }

    if !class.contains(TransformClass::SCALE) {
        return Ok(None);
    }
    Ok(state
        .kernel()
        .map(|kernel| HighQualityFilter::new(kernel.clone(), state.inverse)))
}

#[cfg(test)]
#[path = "../../tests/unit/render/policy.rs"]
mod tests;
