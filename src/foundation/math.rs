/// Smallest `b` such that `1 << b >= size`. Sizes 0 and 1 both map to 0.
pub fn bits_for_size(size: u32) -> u32 {
    if size <= 1 {
        return 0;
    }
    u32::BITS - (size - 1).leading_zeros()
}

pub(crate) fn is_pow2(size: u32) -> bool {
    size != 0 && size & (size - 1) == 0
}
