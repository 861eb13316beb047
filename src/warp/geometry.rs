use crate::{foundation::math::is_pow2, source::SourceDescriptor};

/// Wraparound addressing along one axis.
///
/// Power-of-two axes wrap by masking; other sizes fall back to Euclidean remainder so wrapped
/// coordinates always land inside the buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Axis {
    len: usize,
    mask: i32,
    pow2: bool,
}

impl Axis {
    pub(crate) fn new(len: u32, mask: u32) -> Self {
        Self {
            len: len as usize,
            mask: mask as i32,
            pow2: is_pow2(len),
        }
    }

    pub(crate) fn len(self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn wrap(self, v: i32) -> usize {
        if self.pow2 {
            (v & self.mask) as usize
        } else {
            v.rem_euclid(self.len as i32) as usize
        }
    }

    #[inline]
    pub(crate) fn step(self, v: usize) -> usize {
        let next = v + 1;
        if next == self.len { 0 } else { next }
    }

    /// Normalize an out-of-range unsigned index (column lookups).
    #[inline]
    pub(crate) fn wrap_index(self, v: u32) -> usize {
        let v = v as usize;
        if v < self.len {
            v
        } else if self.pow2 {
            v & self.mask as usize
        } else {
            v % self.len
        }
    }
}

/// Resolved addressing for one warp texture; fixed for the texture's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct WarpGeometry {
    pub(crate) x: Axis,
    pub(crate) y: Axis,
}

impl WarpGeometry {
    pub(crate) fn from_descriptor(desc: &SourceDescriptor) -> Self {
        Self {
            x: Axis::new(desc.width, desc.width_mask()),
            y: Axis::new(desc.height, desc.height.saturating_sub(1)),
        }
    }

    pub(crate) fn width(&self) -> usize {
        self.x.len()
    }

    pub(crate) fn height(&self) -> usize {
        self.y.len()
    }

    pub(crate) fn pixel_count(&self) -> usize {
        self.width() * self.height()
    }

    /// Byte range of column `x` in a column-major buffer.
    pub(crate) fn column_range(&self, x: usize) -> std::ops::Range<usize> {
        let h = self.height();
        x * h..(x + 1) * h
    }
}
