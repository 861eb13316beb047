use rayon::prelude::*;

use crate::{
    foundation::core::AnimTime,
    tables::{FRACBITS, fine_sin},
    warp::{geometry::WarpGeometry, settings::Executor},
};

/// Two-axis additive distortion. Every output pixel is independent, so columns can be generated
/// in any order or in parallel with identical results.
pub(crate) fn generate(
    src: &[u8],
    geom: &WarpGeometry,
    time: AnimTime,
    out: &mut [u8],
    exec: &Executor,
) {
    let timebase = time.0.wrapping_mul(40) / 28;
    let h = geom.height().max(1);
    match exec {
        Executor::Sequential => {
            for (x, col) in out.chunks_exact_mut(h).enumerate().rev() {
                column(src, geom, timebase, x, col);
            }
        }
        Executor::Global => par_columns(src, geom, timebase, out, h),
        Executor::Pool(pool) => pool.install(|| par_columns(src, geom, timebase, out, h)),
    }
}

fn par_columns(src: &[u8], geom: &WarpGeometry, timebase: u32, out: &mut [u8], h: usize) {
    out.par_chunks_exact_mut(h)
        .enumerate()
        .for_each(|(x, col)| column(src, geom, timebase, x, col));
}

#[inline]
fn offset(angle: u32) -> i32 {
    (fine_sin(angle) * 2) >> FRACBITS
}

fn column(src: &[u8], geom: &WarpGeometry, timebase: u32, x: usize, col: &mut [u8]) {
    let h = geom.height();
    let xu = x as u32;
    let x_ang = xu.wrapping_mul(256).wrapping_add(timebase.wrapping_mul(4));
    let dx_col = offset(x_ang.wrapping_add(300));
    let dy_col = offset(x_ang.wrapping_add(1200));

    for (y, dst) in col.iter_mut().enumerate().rev() {
        let y_ang = (y as u32).wrapping_mul(128);
        let dx = offset(y_ang.wrapping_add(timebase.wrapping_mul(5)).wrapping_add(900)) + dx_col;
        let dy = offset(y_ang.wrapping_add(timebase.wrapping_mul(3)).wrapping_add(700)) + dy_col;
        let xt = geom.x.wrap(x as i32 + 128 + dx);
        let yt = geom.y.wrap(y as i32 + 128 + dy);
        *dst = src[xt * h + yt];
    }
}
