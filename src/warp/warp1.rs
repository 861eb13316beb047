use crate::{foundation::core::AnimTime, tables::fine_sin, warp::geometry::WarpGeometry};

/// Two-pass sinusoidal shear.
///
/// Rows are slid horizontally by a phase that varies with `y`, then each resulting column is
/// rolled vertically by a phase that varies with `x`. `scratch` must hold at least `height` bytes.
pub(crate) fn generate(
    src: &[u8],
    geom: &WarpGeometry,
    time: AnimTime,
    scratch: &mut [u8],
    out: &mut [u8],
) {
    let (w, h) = (geom.width(), geom.height());
    let t = time.0;

    let timebase = t.wrapping_mul(32) / 28;
    for y in (0..h).rev() {
        let angle = timebase.wrapping_add((y as u32).wrapping_mul(128));
        let mut xf = geom.x.wrap(fine_sin(angle) >> 13);
        for x in 0..w {
            out[x * h + y] = src[xf * h + y];
            xf = geom.x.step(xf);
        }
    }

    let scratch = &mut scratch[..h];
    for x in (0..w).rev() {
        let angle = t.wrapping_add((x as u32 + 17).wrapping_mul(128));
        let mut yf = geom.y.wrap(fine_sin(angle) >> 13);
        let col = &mut out[geom.column_range(x)];
        for s in scratch.iter_mut() {
            *s = col[yf];
            yf = geom.y.step(yf);
        }
        col.copy_from_slice(scratch);
    }
}
