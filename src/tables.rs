use std::sync::LazyLock;

/// Number of fine angles in one full period.
pub const FINEANGLES: usize = 8192;
/// Mask that reduces any angle index into `[0, FINEANGLES)`.
pub const FINEMASK: u32 = FINEANGLES as u32 - 1;
/// Fractional bits of the fixed-point sine values.
pub const FRACBITS: u32 = 16;
/// Fixed-point one.
pub const FRACUNIT: i32 = 1 << FRACBITS;

static FINESINE: LazyLock<Box<[i32; FINEANGLES]>> = LazyLock::new(|| {
    let mut table = Box::new([0i32; FINEANGLES]);
    for (i, v) in table.iter_mut().enumerate() {
        // Samples sit half a step into each angle bucket, so sin(0) is never exactly zero.
        let angle = (i as f64 + 0.5) * std::f64::consts::TAU / FINEANGLES as f64;
        *v = (f64::from(FRACUNIT) * angle.sin()) as i32;
    }
    table
});

/// Process-wide fixed-point sine table, `FRACUNIT`-scaled.
pub fn finesine() -> &'static [i32; FINEANGLES] {
    &FINESINE
}

/// Table lookup with the angle reduced modulo the period.
#[inline]
pub fn fine_sin(angle: u32) -> i32 {
    FINESINE[(angle & FINEMASK) as usize]
}

#[cfg(test)]
#[path = "../tests/unit/tables/finesine.rs"]
mod tests;
