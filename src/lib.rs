//! High-quality bitmap resampling for transformed draws.
//!
//! When a bitmap is drawn under a scale, skew or rotation and high filter
//! quality is requested, each destination pixel is produced by convolving the
//! source pixels around its preimage with a separable kernel.
//!
//! # Pipeline overview
//!
//! 1. **Select**: [`choose_filter_proc`] inspects a [`RenderState`] once per draw and
//!    returns a [`HighQualityFilter`] when the state is eligible and the inverse
//!    transform scales, caching the selected [`Kernel`] on the state.
//! 2. **Filter**: a [`ScanlineFilter`] fills runs of destination pixels. Callers that
//!    got no filter fall back to [`NearestFilter`].
//! 3. **Draw** (optional): [`draw_bitmap`] does both for a whole destination, serially
//!    or with rayon over disjoint rows.
//!
//! Pixels are **premultiplied** RGBA8 end-to-end, and every produced pixel keeps
//! `r, g, b <= a`.
#![forbid(unsafe_code)]

mod config;
mod foundation;
mod kernel;
mod render;
mod source;
mod transform;

pub use config::settings::{DEFAULT_KERNEL, FilterConfig};
pub use foundation::core::{Affine, Point, Rgba8Premul, Vec2};
pub use foundation::error::{ResampleError, ResampleResult};
pub use kernel::select::{kernel_for, select_kernel, shape_for};
pub use kernel::shape::{KERNEL_TABLE_SIZE, Kernel, KernelKind, KernelShape};
pub use render::convolve::{HighQualityFilter, ScanlineFilter, filter_scanline};
pub use render::nearest::NearestFilter;
pub use render::pipeline::{ActiveFilter, RenderThreading, draw_bitmap, fill_rows};
pub use render::policy::{
    Ineligible, choose_filter_proc, ineligibility, is_high_quality_path_eligible,
};
pub use render::state::{FULL_ALPHA_SCALE, FilterQuality, RenderState, TileMode};
pub use source::pixmap::{PixelFormat, PixelSource, Pixmap};
pub use transform::classify::TransformClass;
pub use transform::inverse::{InverseMap, InverseTransform, Projective};
