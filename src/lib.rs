//! warptex generates animated "warped" textures from static indexed images.
//!
//! A [`WarpTexture`] owns a [`PixelSource`] and produces a distorted copy of its pixels for a
//! given [`AnimTime`]. The copy is cached and only rebuilt when it is read at a different time.
//!
//! # Pipeline overview
//!
//! 1. **Source**: a [`PixelSource`] hands out a column-major buffer of 8-bit palette indices.
//! 2. **Warp**: [`WarpStyle::Warp1`] (two-pass shear) or [`WarpStyle::Warp2`] (per-pixel additive
//!    distortion) resamples it through the shared fixed-point sine table ([`tables`]).
//! 3. **Read**: renderers take the whole buffer or single columns, optionally with the column's
//!    opaque [`Span`]s, which are derived lazily from the current buffer.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: output is a pure function of source pixels and time.
//! - **Explicit time**: there is no global clock; callers pass an [`AnimTime`] or an
//!   [`AnimClock`].
//! - **Column-major**: pixel `(x, y)` lives at `x * height + y`.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod clock;
mod foundation;
mod source;
mod spans;
/// Fixed-point sine table shared by every warp.
pub mod tables;
mod warp;

pub use clock::{AnimClock, FrameClock};
pub use foundation::core::{AnimTime, FrameIndex, Fps, Size};
pub use foundation::error::{WarpError, WarpResult};
pub use foundation::math::bits_for_size;
pub use source::image::IndexedImage;
pub use source::{MAX_SOURCE_DIM, PixelSource, SourceDescriptor, columns_to_rows, rows_to_columns};
pub use spans::{Span, SpanTable, TRANSPARENT_INDEX};
pub use warp::settings::WarpSettings;
pub use warp::style::WarpStyle;
pub use warp::texture::{WarpStats, WarpTexture};
pub use warp::warp_frame;
