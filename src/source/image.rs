use std::sync::Arc;

use crate::{
    foundation::error::{WarpError, WarpResult},
    source::{PixelSource, SourceDescriptor, rows_to_columns},
};

/// In-memory indexed image, stored column-major.
///
/// The pixel bytes are the image itself, so `unload` has nothing to evict.
#[derive(Clone, Debug)]
pub struct IndexedImage {
    desc: SourceDescriptor,
    columns: Arc<Vec<u8>>,
}

impl IndexedImage {
    /// Wrap an existing column-major buffer of `width * height` bytes.
    pub fn from_columns(width: u32, height: u32, columns: Vec<u8>) -> WarpResult<Self> {
        let desc = SourceDescriptor::new(width, height);
        desc.validate()?;
        let expected = desc
            .size()
            .pixel_count()
            .ok_or_else(|| WarpError::validation("image size overflow"))?;
        if columns.len() != expected {
            return Err(WarpError::validation(format!(
                "expected {expected} pixels for {width}x{height}, got {}",
                columns.len()
            )));
        }
        Ok(Self {
            desc,
            columns: Arc::new(columns),
        })
    }

    /// Build from a row-major buffer (the usual layout of decoded images).
    pub fn from_rows(width: u32, height: u32, rows: &[u8]) -> WarpResult<Self> {
        let expected = (width as usize).saturating_mul(height as usize);
        if rows.len() != expected {
            return Err(WarpError::validation(format!(
                "expected {expected} pixels for {width}x{height}, got {}",
                rows.len()
            )));
        }
        Self::from_columns(width, height, rows_to_columns(rows, width, height))
    }

    /// Every pixel set to `index`.
    pub fn solid(width: u32, height: u32, index: u8) -> WarpResult<Self> {
        let n = (width as usize).saturating_mul(height as usize);
        Self::from_columns(width, height, vec![index; n])
    }

    /// Build by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> u8) -> WarpResult<Self> {
        let mut columns = Vec::with_capacity((width as usize).saturating_mul(height as usize));
        for x in 0..width {
            for y in 0..height {
                columns.push(f(x, y));
            }
        }
        Self::from_columns(width, height, columns)
    }

    /// Set draw offsets.
    pub fn with_offsets(mut self, left: i32, top: i32) -> Self {
        self.desc.left_offset = left;
        self.desc.top_offset = top;
        self
    }

    /// Set scale factors.
    pub fn with_scale(mut self, x: f64, y: f64) -> Self {
        self.desc.scale_x = x;
        self.desc.scale_y = y;
        self
    }

    /// Set the decal suppression flag.
    pub fn with_no_decals(mut self, no_decals: bool) -> Self {
        self.desc.no_decals = no_decals;
        self
    }

    /// Set the rotation group.
    pub fn with_rotations(mut self, rotations: Option<u16>) -> Self {
        self.desc.rotations = rotations;
        self
    }

    /// Column-major pixel bytes.
    pub fn as_columns(&self) -> &[u8] {
        &self.columns
    }

    /// Pixel at `(x, y)`, if in bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.desc.width || y >= self.desc.height {
            return None;
        }
        self.columns
            .get(x as usize * self.desc.height as usize + y as usize)
            .copied()
    }
}

impl PixelSource for IndexedImage {
    fn descriptor(&self) -> SourceDescriptor {
        self.desc
    }

    fn pixels(&mut self) -> WarpResult<&[u8]> {
        Ok(&self.columns)
    }

    fn unload(&mut self) {}
}

#[cfg(test)]
#[path = "../../tests/unit/source/image.rs"]
mod tests;
