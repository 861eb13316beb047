use crate::foundation::error::{WarpError, WarpResult};

/// Animation clock reading, in milliseconds.
///
/// The clock wraps at `u32::MAX`; phase arithmetic on it is wrapping as well.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct AnimTime(pub u32);

impl AnimTime {
    /// Raw millisecond value.
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

impl From<u32> for AnimTime {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Zero-based frame number.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Rational frame rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Frames per `den` seconds.
    pub num: u32,
    /// Must be > 0.
    pub den: u32,
}

impl Fps {
    /// Build a frame rate, rejecting zero numerator or denominator.
    pub fn new(num: u32, den: u32) -> WarpResult<Self> {
        if den == 0 {
            return Err(WarpError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(WarpError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Frames per second as a float.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Start time of `frame`, truncated to whole milliseconds.
    pub fn frame_time(self, frame: FrameIndex) -> AnimTime {
        let ms = u128::from(frame.0) * 1000 * u128::from(self.den) / u128::from(self.num);
        AnimTime(ms as u32)
    }
}

/// Width and height of a texture in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Size {
    /// Columns.
    pub width: u32,
    /// Rows.
    pub height: u32,
}

impl Size {
    /// Number of pixels, or `None` on overflow.
    pub fn pixel_count(self) -> Option<usize> {
        (self.width as usize).checked_mul(self.height as usize)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
