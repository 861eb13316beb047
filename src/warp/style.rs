use std::{fmt, str::FromStr};

use crate::foundation::error::WarpError;

/// Which distortion a warp texture applies.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum WarpStyle {
    /// Two-pass sinusoidal shear: rows slide horizontally, then columns roll vertically.
    #[default]
    Warp1,
    /// Per-pixel additive distortion on both axes.
    Warp2,
}

impl WarpStyle {
    /// Numeric warp id renderers key on (1 or 2).
    pub fn id(self) -> u8 {
        match self {
            Self::Warp1 => 1,
            Self::Warp2 => 2,
        }
    }

    /// Inverse of [`WarpStyle::id`].
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Self::Warp1),
            2 => Some(Self::Warp2),
            _ => None,
        }
    }

    /// Lowercase name used in settings files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Warp1 => "warp1",
            Self::Warp2 => "warp2",
        }
    }
}

impl fmt::Display for WarpStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WarpStyle {
    type Err = WarpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "warp1" | "1" => Ok(Self::Warp1),
            "warp2" | "2" => Ok(Self::Warp2),
            other => Err(WarpError::validation(format!(
                "unknown warp style '{other}' (expected warp1 or warp2)"
            ))),
        }
    }
}
