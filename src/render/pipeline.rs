use rayon::prelude::*;

use crate::foundation::core::Rgba8Premul;
use crate::foundation::error::{ResampleError, ResampleResult};
use crate::render::convolve::{HighQualityFilter, ScanlineFilter};
use crate::render::nearest::NearestFilter;
use crate::render::policy::choose_filter_proc;
use crate::render::state::RenderState;
use crate::source::pixmap::{PixelSource, Pixmap};

#[derive(Clone, Debug)]
/// Threading and chunking controls for filling a destination.
pub struct RenderThreading {
    /// Fill rows in parallel when `true`.
    pub parallel: bool,
    /// Rows handed to a worker at a time.
    pub chunk_rows: usize,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
}

impl Default for RenderThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_rows: 16,
            threads: None,
        }
    }
}

/// The filter a draw ended up using.
#[derive(Clone, Debug)]
pub enum ActiveFilter {
    HighQuality(HighQualityFilter),
    Nearest(NearestFilter),
}

impl ActiveFilter {
    /// Run selection on `state`, falling back to point sampling.
    pub fn select(state: &mut RenderState) -> ResampleResult<Self> {
        Ok(match choose_filter_proc(state)? {
            Some(hq) => ActiveFilter::HighQuality(hq),
            None => ActiveFilter::Nearest(NearestFilter::new(state)),
        })
    }

    pub fn is_high_quality(&self) -> bool {
        matches!(self, ActiveFilter::HighQuality(_))
    }
}

impl ScanlineFilter for ActiveFilter {
    fn filter_span(&self, src: &dyn PixelSource, x: i32, y: i32, out: &mut [Rgba8Premul]) {
        match self {
            ActiveFilter::HighQuality(f) => f.filter_span(src, x, y, out),
            ActiveFilter::Nearest(f) => f.filter_span(src, x, y, out),
        }
    }
}

/// Draw `src` under `state` into a new `width` x `height` pixmap.
///
/// Filter selection runs once; every destination row is then filled through
/// the selected scanline filter.
#[tracing::instrument(skip(state, src, threading), fields(src_w = src.width(), src_h = src.height()))]
pub fn draw_bitmap(
    state: &mut RenderState,
    src: &Pixmap,
    width: u32,
    height: u32,
    threading: &RenderThreading,
) -> ResampleResult<Pixmap> {
    let filter = ActiveFilter::select(state)?;
    tracing::debug!(high_quality = filter.is_high_quality(), "scanline filter selected");
    let mut dst = Pixmap::new(width, height)?;
    fill_rows(&filter, src, &mut dst, threading)?;
    Ok(dst)
}

/// Fill every row of `dst` with `filter` applied to `src`.
pub fn fill_rows(
    filter: &dyn ScanlineFilter,
    src: &dyn PixelSource,
    dst: &mut Pixmap,
    threading: &RenderThreading,
) -> ResampleResult<()> {
    let width = dst.width() as usize;
    if !threading.parallel {
        let mut scratch = vec![Rgba8Premul::transparent(); width];
        for (y, row) in dst.rows_mut().enumerate() {
            fill_row(filter, src, y, row, &mut scratch);
        }
        return Ok(());
    }

    let pool = build_thread_pool(threading.threads)?;
    let stride = dst.stride();
    let chunk_bytes = stride * threading.chunk_rows.max(1);
    let data = dst.data_mut();
    pool.install(|| {
        data.par_chunks_mut(chunk_bytes)
            .enumerate()
            .for_each_init(
                || vec![Rgba8Premul::transparent(); width],
                |scratch, (chunk_idx, chunk)| {
                    let first_row = chunk_idx * threading.chunk_rows.max(1);
                    for (i, row) in chunk.chunks_exact_mut(stride).enumerate() {
                        fill_row(filter, src, first_row + i, row, scratch);
                    }
                },
            );
    });
    Ok(())
}

fn fill_row(
    filter: &dyn ScanlineFilter,
    src: &dyn PixelSource,
    y: usize,
    row: &mut [u8],
    scratch: &mut [Rgba8Premul],
) {
    filter.filter_span(src, 0, y as i32, scratch);
    for (px, out) in scratch.iter().zip(row.chunks_exact_mut(4)) {
        out.copy_from_slice(&px.to_array());
    }
}

fn build_thread_pool(threads: Option<usize>) -> ResampleResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(ResampleError::validation(
            "'threads' must be >= 1 when set",
        ));
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| ResampleError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
