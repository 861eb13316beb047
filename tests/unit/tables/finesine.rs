use super::*;

#[test]
fn table_stays_within_fixed_point_unit() {
    for (i, &v) in finesine().iter().enumerate() {
        assert!((-FRACUNIT..=FRACUNIT).contains(&v), "finesine[{i}] = {v}");
    }
}

#[test]
fn quarter_points_match_half_step_sampling() {
    let t = finesine();
    assert_eq!(t[0], 25);
    assert_eq!(t[FINEANGLES / 4 - 1], 65535);
    assert_eq!(t[FINEANGLES / 2], -25);
}

#[test]
fn lookup_wraps_at_period() {
    assert_eq!(fine_sin(FINEANGLES as u32 + 17), fine_sin(17));
    assert_eq!(fine_sin(u32::MAX), finesine()[FINEANGLES - 1]);
}

#[test]
fn shifted_offsets_span_small_range() {
    let mut lo = i32::MAX;
    let mut hi = i32::MIN;
    for &v in finesine().iter() {
        lo = lo.min(v >> 13);
        hi = hi.max(v >> 13);
    }
    assert_eq!(lo, -8);
    assert_eq!(hi, 7);
}
