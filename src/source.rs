pub mod image;

use crate::foundation::{
    core::Size,
    error::{WarpError, WarpResult},
    math::bits_for_size,
};

/// Largest width or height a source may have.
pub const MAX_SOURCE_DIM: u32 = 1 << 15;

/// Metadata a pixel source exposes alongside its pixels.
///
/// Read once when a warp texture is built; a source must keep these stable for its lifetime.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SourceDescriptor {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Smallest `b` with `1 << b >= width`.
    pub width_bits: u32,
    /// Smallest `b` with `1 << b >= height`.
    pub height_bits: u32,
    /// Horizontal draw offset.
    pub left_offset: i32,
    /// Vertical draw offset.
    pub top_offset: i32,
    /// Horizontal scale factor (1.0 = unscaled).
    pub scale_x: f64,
    /// Vertical scale factor (1.0 = unscaled).
    pub scale_y: f64,
    /// Suppress decals on surfaces using this texture.
    pub no_decals: bool,
    /// Sprite rotation group, if any.
    pub rotations: Option<u16>,
}

impl SourceDescriptor {
    /// Descriptor for a plain `width x height` source with computed bit widths.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            width_bits: bits_for_size(width),
            height_bits: bits_for_size(height),
            left_offset: 0,
            top_offset: 0,
            scale_x: 1.0,
            scale_y: 1.0,
            no_decals: false,
            rotations: None,
        }
    }

    /// Dimensions only.
    pub fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    /// `2^width_bits - 1`.
    pub fn width_mask(&self) -> u32 {
        (1u32 << self.width_bits) - 1
    }

    /// Check dimensions and bit widths against each other.
    pub fn validate(&self) -> WarpResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(WarpError::validation(format!(
                "source must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width > MAX_SOURCE_DIM || self.height > MAX_SOURCE_DIM {
            return Err(WarpError::validation(format!(
                "source {}x{} exceeds {MAX_SOURCE_DIM} on an axis",
                self.width, self.height
            )));
        }
        if self.width_bits != bits_for_size(self.width) {
            return Err(WarpError::validation(format!(
                "width_bits {} does not match width {}",
                self.width_bits, self.width
            )));
        }
        if self.height_bits != bits_for_size(self.height) {
            return Err(WarpError::validation(format!(
                "height_bits {} does not match height {}",
                self.height_bits, self.height
            )));
        }
        if !self.scale_x.is_finite() || !self.scale_y.is_finite() {
            return Err(WarpError::validation("source scale must be finite"));
        }
        Ok(())
    }
}

/// Anything that can hand out a decoded, column-major, 8-bit indexed pixel buffer.
pub trait PixelSource {
    /// Stable metadata for this source.
    fn descriptor(&self) -> SourceDescriptor;

    /// Full `width * height` buffer, column-major. May load lazily.
    fn pixels(&mut self) -> WarpResult<&[u8]>;

    /// Release whatever the source cached. The next `pixels` call reloads.
    fn unload(&mut self);
}

impl<S: PixelSource + ?Sized> PixelSource for Box<S> {
    fn descriptor(&self) -> SourceDescriptor {
        (**self).descriptor()
    }

    fn pixels(&mut self) -> WarpResult<&[u8]> {
        (**self).pixels()
    }

    fn unload(&mut self) {
        (**self).unload()
    }
}

/// Transpose a column-major buffer into row-major order.
pub fn columns_to_rows(pixels: &[u8], width: u32, height: u32) -> Vec<u8> {
    let (w, h) = (width as usize, height as usize);
    let mut out = vec![0u8; w * h];
    for (x, col) in pixels.chunks_exact(h.max(1)).take(w).enumerate() {
        for (y, &p) in col.iter().enumerate() {
            out[y * w + x] = p;
        }
    }
    out
}

/// Transpose a row-major buffer into column-major order.
pub fn rows_to_columns(pixels: &[u8], width: u32, height: u32) -> Vec<u8> {
    let (w, h) = (width as usize, height as usize);
    let mut out = vec![0u8; w * h];
    for (y, row) in pixels.chunks_exact(w.max(1)).take(h).enumerate() {
        for (x, &p) in row.iter().enumerate() {
            out[x * h + y] = p;
        }
    }
    out
}

#[cfg(test)]
#[path = "../tests/unit/source/descriptor.rs"]
mod tests;
