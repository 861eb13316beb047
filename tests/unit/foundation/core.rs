use super::*;

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(35, 0).is_err());
    assert!(Fps::new(35, 1).is_ok());
}

#[test]
fn frame_time_truncates_to_millis() {
    let fps = Fps::new(35, 1).unwrap();
    assert_eq!(fps.frame_time(FrameIndex(0)), AnimTime(0));
    assert_eq!(fps.frame_time(FrameIndex(1)), AnimTime(28));
    assert_eq!(fps.frame_time(FrameIndex(35)), AnimTime(1000));

    let ntsc = Fps::new(30000, 1001).unwrap();
    assert_eq!(ntsc.frame_time(FrameIndex(30)), AnimTime(1001));
}

#[test]
fn frame_time_wraps_like_the_clock() {
    let fps = Fps::new(1, 1).unwrap();
    let big = FrameIndex(u64::from(u32::MAX) + 1);
    let expected = (u128::from(big.0) * 1000) as u32;
    assert_eq!(fps.frame_time(big), AnimTime(expected));
}

#[test]
fn size_pixel_count() {
    let s = Size {
        width: 64,
        height: 128,
    };
    assert_eq!(s.pixel_count(), Some(8192));
}
