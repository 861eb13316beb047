pub(crate) mod geometry;
pub mod settings;
pub mod style;
pub mod texture;
mod warp1;
mod warp2;

use crate::{
    foundation::{
        core::AnimTime,
        error::{WarpError, WarpResult},
    },
    source::SourceDescriptor,
    warp::{geometry::WarpGeometry, settings::Executor, style::WarpStyle},
};

/// Run `style` over `src` at `time`, writing into `out`.
///
/// `scratch` is only touched by Warp1 and must hold at least `height` bytes.
pub(crate) fn render_into(
    style: WarpStyle,
    src: &[u8],
    geom: &WarpGeometry,
    time: AnimTime,
    scratch: &mut [u8],
    out: &mut [u8],
    exec: &Executor,
) {
    match style {
        WarpStyle::Warp1 => warp1::generate(src, geom, time, scratch, out),
        WarpStyle::Warp2 => warp2::generate(src, geom, time, out, exec),
    }
}

/// Stateless one-shot warp: returns a freshly allocated column-major buffer.
///
/// Equivalent to what a [`WarpTexture`](crate::WarpTexture) caches for the same inputs.
pub fn warp_frame(
    style: WarpStyle,
    desc: &SourceDescriptor,
    src: &[u8],
    time: AnimTime,
) -> WarpResult<Vec<u8>> {
    desc.validate()?;
    let geom = WarpGeometry::from_descriptor(desc);
    check_source_len(src, &geom)?;
    let mut out = vec![0u8; geom.pixel_count()];
    let mut scratch = vec![0u8; geom.width().max(geom.height())];
    render_into(
        style,
        src,
        &geom,
        time,
        &mut scratch,
        &mut out,
        &Executor::Sequential,
    );
    Ok(out)
}

pub(crate) fn check_source_len(src: &[u8], geom: &WarpGeometry) -> WarpResult<()> {
    if src.len() != geom.pixel_count() {
        return Err(WarpError::load(format!(
            "source returned {} bytes, expected {} ({}x{})",
            src.len(),
            geom.pixel_count(),
            geom.width(),
            geom.height()
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/warp/algorithms.rs"]
mod tests;
