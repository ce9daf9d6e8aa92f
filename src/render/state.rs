use std::sync::Arc;

use crate::config::settings::FilterConfig;
use crate::kernel::shape::Kernel;
use crate::source::pixmap::PixelFormat;
use crate::transform::classify::TransformClass;
use crate::transform::inverse::{InverseMap, InverseTransform};

/// Alpha scale meaning "no global alpha applied".
pub const FULL_ALPHA_SCALE: u16 = 256;

/// Requested sampling quality tier.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum FilterQuality {
    #[default]
    None,
    Low,
    Medium,
    High,
}

/// How source coordinates outside the bitmap are addressed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileMode {
    #[default]
    Clamp,
    Repeat,
    Mirror,
}

/// Per-draw state read by filter selection and sampling.
///
/// Selection only ever writes the cached kernel.
#[derive(Clone, Debug)]
pub struct RenderState {
    pub quality: FilterQuality,
    /// Global alpha in `0..=256`; [`FULL_ALPHA_SCALE`] is opaque.
    pub alpha_scale: u16,
    pub format: PixelFormat,
    pub tile_x: TileMode,
    pub tile_y: TileMode,
    /// Destination-to-source map.
    pub inverse: InverseTransform,
    pub config: FilterConfig,
    kernel: Option<Arc<Kernel>>,
}

impl Default for RenderState {
    fn default() -> Self {
        Self {
            quality: FilterQuality::default(),
            alpha_scale: FULL_ALPHA_SCALE,
            format: PixelFormat::default(),
            tile_x: TileMode::default(),
            tile_y: TileMode::default(),
            inverse: InverseTransform::default(),
            config: FilterConfig::default(),
            kernel: None,
        }
    }
}

impl RenderState {
    pub fn new(inverse: impl Into<InverseTransform>) -> Self {
        Self {
            inverse: inverse.into(),
            ..Self::default()
        }
    }

    pub fn with_quality(mut self, quality: FilterQuality) -> Self {
        self.quality = quality;
        self
    }

    pub fn with_alpha_scale(mut self, alpha_scale: u16) -> Self {
        self.alpha_scale = alpha_scale;
        self
    }

    pub fn with_format(mut self, format: PixelFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_tile_modes(mut self, tile_x: TileMode, tile_y: TileMode) -> Self {
        self.tile_x = tile_x;
        self.tile_y = tile_y;
        self
    }

    pub fn with_config(mut self, config: FilterConfig) -> Self {
        self.config = config;
        self
    }

    pub fn inverse_class(&self) -> TransformClass {
        self.inverse.class()
    }

    /// The kernel cached by the last successful selection, if any.
    pub fn kernel(&self) -> Option<&Arc<Kernel>> {
        self.kernel.as_ref()
    }

    pub(crate) fn set_kernel(&mut self, kernel: Arc<Kernel>) {
        self.kernel = Some(kernel);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/state.rs"]
mod tests;
