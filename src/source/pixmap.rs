use crate::foundation::core::Rgba8Premul;
use crate::foundation::error::{ResampleError, ResampleResult};

/// Storage format tag of a source bitmap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PixelFormat {
    /// 32-bit premultiplied ARGB (stored here as RGBA8 bytes).
    #[default]
    Argb8888,
    Rgb565,
    Index8,
    Gray8,
    Alpha8,
}

/// Read-only 2D grid of premultiplied pixels.
///
/// Callers must keep `x < width()` and `y < height()`.
pub trait PixelSource: Sync {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    fn pixel(&self, x: u32, y: u32) -> Rgba8Premul;
}

/// Owned premultiplied RGBA8 pixel buffer, row-major, no padding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pixmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Pixmap {
    /// A fully transparent pixmap.
    pub fn new(width: u32, height: u32) -> ResampleResult<Self> {
        let len = byte_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0; len],
        })
    }

    /// Wrap premultiplied RGBA8 bytes.
    pub fn from_premul_rgba8(width: u32, height: u32, data: Vec<u8>) -> ResampleResult<Self> {
        let len = byte_len(width, height)?;
        if data.len() != len {
            return Err(ResampleError::validation(format!(
                "pixmap expects {len} bytes for {width}x{height}, got {}",
                data.len()
            )));
        }
        if data.chunks_exact(4).any(|px| !Rgba8Premul::from_slice(px).is_valid()) {
            return Err(ResampleError::validation(
                "pixmap data is not premultiplied (channel exceeds alpha)",
            ));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Premultiply straight-alpha RGBA8 bytes.
    pub fn from_straight_rgba8(width: u32, height: u32, data: &[u8]) -> ResampleResult<Self> {
        let len = byte_len(width, height)?;
        if data.len() != len {
            return Err(ResampleError::validation(format!(
                "pixmap expects {len} bytes for {width}x{height}, got {}",
                data.len()
            )));
        }
        let mut out = Vec::with_capacity(len);
        for px in data.chunks_exact(4) {
            let p = Rgba8Premul::from_straight_rgba(px[0], px[1], px[2], px[3]);
            out.extend_from_slice(&p.to_array());
        }
        Ok(Self {
            width,
            height,
            data: out,
        })
    }

    /// A pixmap where every pixel is `color`.
    pub fn filled(width: u32, height: u32, color: Rgba8Premul) -> ResampleResult<Self> {
        let mut pm = Self::new(width, height)?;
        for px in pm.data.chunks_exact_mut(4) {
            px.copy_from_slice(&color.to_array());
        }
        Ok(pm)
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Straight-alpha RGBA8 copy of the buffer.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        self.data
            .chunks_exact(4)
            .flat_map(|px| Rgba8Premul::from_slice(px).to_straight_rgba())
            .collect()
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba8Premul) {
        let idx = self.index(x, y);
        self.data[idx..idx + 4].copy_from_slice(&color.to_array());
    }

    /// Mutable rows of `width * 4` bytes each.
    pub fn rows_mut(&mut self) -> std::slice::ChunksExactMut<'_, u8> {
        let stride = self.stride();
        self.data.chunks_exact_mut(stride)
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub(crate) fn stride(&self) -> usize {
        (self.width as usize) * 4
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * self.stride() + (x as usize) * 4
    }
}

impl PixelSource for Pixmap {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn pixel(&self, x: u32, y: u32) -> Rgba8Premul {
        let idx = self.index(x, y);
        Rgba8Premul::from_slice(&self.data[idx..idx + 4])
    }
}

fn byte_len(width: u32, height: u32) -> ResampleResult<usize> {
    if width == 0 || height == 0 {
        return Err(ResampleError::validation("pixmap dimensions must be > 0"));
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| ResampleError::validation("pixmap size overflow"))
}

#[cfg(test)]
#[path = "../../tests/unit/source/pixmap.rs"]
mod tests;
