use super::*;
use crate::tables::{FINEMASK, finesine};

fn ramp(width: u32, height: u32) -> (SourceDescriptor, Vec<u8>) {
    let desc = SourceDescriptor::new(width, height);
    let mut px = Vec::with_capacity((width * height) as usize);
    for x in 0..width {
        for y in 0..height {
            px.push((x.wrapping_mul(7) ^ y.wrapping_mul(13)) as u8);
        }
    }
    (desc, px)
}

// Shift-and-mask formulation of Warp1, valid for power-of-two sizes.
fn reference_warp1(src: &[u8], width: usize, height: usize, time: u32) -> Vec<u8> {
    let fs = finesine();
    let xmask = width as i32 - 1;
    let ymask = height as i32 - 1;
    let ybits = height.trailing_zeros();
    let mut out = vec![0u8; width * height];
    let mut buffer = vec![0u8; width.max(height)];

    let timebase = time.wrapping_mul(32) / 28;
    for y in (0..height).rev() {
        let idx = timebase.wrapping_add(y as u32 * 128) & FINEMASK;
        let mut xf = (fs[idx as usize] >> 13) & xmask;
        let mut dest = y;
        for _ in 0..width {
            out[dest] = src[((xf as usize) << ybits) + y];
            xf = (xf + 1) & xmask;
            dest += height;
        }
    }
    for x in (0..width).rev() {
        let idx = time.wrapping_add((x as u32 + 17) * 128) & FINEMASK;
        let mut yf = (fs[idx as usize] >> 13) & ymask;
        let base = x << ybits;
        for b in buffer.iter_mut().take(height) {
            *b = out[base + yf as usize];
            yf = (yf + 1) & ymask;
        }
        out[base..base + height].copy_from_slice(&buffer[..height]);
    }
    out
}

fn reference_warp2(src: &[u8], width: usize, height: usize, time: u32) -> Vec<u8> {
    let fs = finesine();
    let xmask = width as i32 - 1;
    let ymask = height as i32 - 1;
    let ybits = height.trailing_zeros();
    let s = |a: u32| (fs[(a & FINEMASK) as usize] * 2) >> 16;
    let tb = time.wrapping_mul(40) / 28;
    let mut out = vec![0u8; width * height];
    let a = |base: u32, t: u32, k: u32| base.wrapping_add(t.wrapping_mul(k));
    for x in 0..width as u32 {
        for y in 0..height as u32 {
            let xt = (x as i32
                + 128
                + s(a(y * 128, tb, 5).wrapping_add(900))
                + s(a(x * 256, tb, 4).wrapping_add(300)))
                & xmask;
            let yt = (y as i32
                + 128
                + s(a(y * 128, tb, 3).wrapping_add(700))
                + s(a(x * 256, tb, 4).wrapping_add(1200)))
                & ymask;
            out[((x as usize) << ybits) + y as usize] =
                src[((xt as usize) << ybits) + yt as usize];
        }
    }
    out
}

#[test]
fn warp1_matches_shift_and_mask_reference() {
    let (desc, src) = ramp(64, 32);
    for t in [0u32, 1, 28, 1000, 123_456, u32::MAX] {
        let got = warp_frame(WarpStyle::Warp1, &desc, &src, AnimTime(t)).unwrap();
        assert_eq!(got, reference_warp1(&src, 64, 32, t), "t={t}");
    }
}

#[test]
fn warp2_matches_shift_and_mask_reference() {
    let (desc, src) = ramp(32, 64);
    for t in [0u32, 1, 28, 1000, 123_456, u32::MAX] {
        let got = warp_frame(WarpStyle::Warp2, &desc, &src, AnimTime(t)).unwrap();
        assert_eq!(got, reference_warp2(&src, 32, 64, t), "t={t}");
    }
}

#[test]
fn uniform_source_is_invariant() {
    let desc = SourceDescriptor::new(4, 4);
    let src = vec![7u8; 16];
    for style in [WarpStyle::Warp1, WarpStyle::Warp2] {
        let out = warp_frame(style, &desc, &src, AnimTime(0)).unwrap();
        assert_eq!(out, vec![7u8; 16], "{style}");
    }
}

#[test]
fn one_by_one_source_survives_both_warps() {
    let desc = SourceDescriptor::new(1, 1);
    for style in [WarpStyle::Warp1, WarpStyle::Warp2] {
        for t in [0u32, 17, u32::MAX] {
            assert_eq!(
                warp_frame(style, &desc, &[42], AnimTime(t)).unwrap(),
                vec![42]
            );
        }
    }
}

#[test]
fn output_is_a_pure_function_of_source_and_time() {
    let (desc, src) = ramp(64, 64);
    for style in [WarpStyle::Warp1, WarpStyle::Warp2] {
        let a = warp_frame(style, &desc, &src, AnimTime(4321)).unwrap();
        let b = warp_frame(style, &desc, &src, AnimTime(4321)).unwrap();
        assert_eq!(a, b);
        let c = warp_frame(style, &desc, &src, AnimTime(8765)).unwrap();
        assert_ne!(a, c, "{style} should animate");
    }
}

#[test]
fn warps_permute_within_source_values() {
    // Every output pixel is copied from some source pixel.
    let (desc, src) = ramp(16, 16);
    let mut seen = [false; 256];
    for &p in &src {
        seen[p as usize] = true;
    }
    for style in [WarpStyle::Warp1, WarpStyle::Warp2] {
        let out = warp_frame(style, &desc, &src, AnimTime(999)).unwrap();
        assert!(out.iter().all(|&p| seen[p as usize]));
    }
}

#[test]
fn non_power_of_two_sizes_stay_in_bounds() {
    for (w, h) in [(3, 5), (96, 72), (1, 7), (7, 1), (33, 64), (64, 33)] {
        let (desc, src) = ramp(w, h);
        for style in [WarpStyle::Warp1, WarpStyle::Warp2] {
            for t in [0u32, 500, 77_777] {
                let out = warp_frame(style, &desc, &src, AnimTime(t)).unwrap();
                assert_eq!(out.len(), (w * h) as usize);
            }
        }
    }
}

#[test]
fn parallel_warp2_matches_sequential() {
    let (desc, src) = ramp(128, 64);
    let geom = WarpGeometry::from_descriptor(&desc);
    let seq = warp_frame(WarpStyle::Warp2, &desc, &src, AnimTime(31_337)).unwrap();

    let settings = crate::WarpSettings {
        style: WarpStyle::Warp2,
        parallel: true,
        threads: Some(2),
    };
    for exec in [
        Executor::Global,
        Executor::from_settings(&settings).unwrap(),
    ] {
        let mut out = vec![0u8; geom.pixel_count()];
        render_into(
            WarpStyle::Warp2,
            &src,
            &geom,
            AnimTime(31_337),
            &mut [],
            &mut out,
            &exec,
        );
        assert_eq!(out, seq);
    }
}

#[test]
fn short_source_is_a_load_error() {
    let desc = SourceDescriptor::new(4, 4);
    let err = warp_frame(WarpStyle::Warp1, &desc, &[0; 15], AnimTime(0)).unwrap_err();
    assert!(matches!(err, WarpError::Load(_)));
}
