mod common;

use common::synthetic_image::{noise_f32, ramp_x};
use edge_maps::edges::{GradientOperator, SOBEL_KERNEL_X, SOBEL_KERNEL_Y};
use edge_maps::{
    convolve, convolve_into, convolve_separable, pad_replicate, ConvolveError, ImageF32, Kernel,
    SeparableKernel,
};

const SIZES: [(usize, usize); 6] = [(1, 1), (1, 5), (5, 1), (3, 3), (7, 4), (16, 9)];

#[test]
fn output_shape_matches_input_for_every_odd_kernel() {
    for (w, h) in SIZES {
        let img = noise_f32(w, h, 7);
        for side in [1, 3, 5, 7] {
            let out = convolve(&img, &Kernel::filled(side, 0.5)).unwrap();
            assert_eq!(out.dims(), (w, h), "{w}x{h} with {side}x{side} kernel");
        }
    }
}

#[test]
fn identity_kernel_reproduces_input() {
    for (w, h) in SIZES {
        let img = noise_f32(w, h, 11);
        let out = convolve(&img, &Kernel::identity()).unwrap();
        assert_eq!(out, img);
    }
}

#[test]
fn zero_kernel_gives_zero_image() {
    for side in [1, 3, 5] {
        let img = noise_f32(6, 5, 3);
        let out = convolve(&img, &Kernel::filled(side, 0.0)).unwrap();
        assert_eq!(out.dims(), (6, 5));
        assert!(out.data.iter().all(|&v| v == 0.0));
    }
}

#[test]
fn constant_field_cancels_under_sobel() {
    let img = ImageF32::filled(3, 3, 5.0);
    for kernel in [&SOBEL_KERNEL_X, &SOBEL_KERNEL_Y] {
        let out = convolve(&img, &Kernel::from(kernel)).unwrap();
        assert!(out.data.iter().all(|&v| v == 0.0), "{out:?}");
    }
}

#[test]
fn ramp_borders_use_replicated_values() {
    // value = x + 10, so zero padding would be visible at both vertical edges.
    let mut img = ramp_x(5, 3);
    for v in &mut img.data {
        *v += 10.0;
    }
    let out = convolve(&img, &Kernel::from(&SOBEL_KERNEL_X)).unwrap();
    for y in 0..3 {
        // Interior: (x+1) - (x-1) = 2, smoothed by 1+2+1.
        assert_eq!(out.get(2, y), 8.0);
        // Edges see one replicated column: difference 1, weight 4.
        assert_eq!(out.get(0, y), 4.0);
        assert_eq!(out.get(4, y), 4.0);
    }
}

#[test]
fn larger_kernels_on_constant_images() {
    let img = ImageF32::filled(4, 6, 3.0);
    for side in [3, 5, 9] {
        let out = convolve(&img, &Kernel::box_filter(side)).unwrap();
        for &v in &out.data {
            assert!((v - 3.0).abs() < 1e-4, "box {side}: {v}");
        }
    }
}

#[test]
fn repeated_runs_are_bit_identical() {
    let img = noise_f32(31, 17, 5);
    let k = Kernel::from(&SOBEL_KERNEL_Y);
    let a = convolve(&img, &k).unwrap();
    let b = convolve(&img, &k).unwrap();
    let bits = |i: &ImageF32| i.data.iter().map(|v| v.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits(&a), bits(&b));
}

#[test]
fn invalid_shapes_are_rejected() {
    let img = noise_f32(4, 4, 1);
    assert_eq!(
        convolve(&img, &Kernel::filled(4, 1.0)),
        Err(ConvolveError::InvalidKernelShape {
            height: 4,
            width: 4
        })
    );
    let rect = Kernel::new(vec![1.0; 15], 5, 3).unwrap();
    assert_eq!(
        convolve(&img, &rect),
        Err(ConvolveError::InvalidKernelShape {
            height: 3,
            width: 5
        })
    );
}

#[test]
fn convolve_into_matches_convolve() {
    let img = noise_f32(9, 6, 21);
    let k = Kernel::from(&SOBEL_KERNEL_X);
    let mut out = ImageF32::filled(9, 6, f32::NAN);
    convolve_into(&img, &k, &mut out).unwrap();
    assert_eq!(out, convolve(&img, &k).unwrap());
}

#[test]
fn convolve_into_rejects_wrong_buffer() {
    let img = noise_f32(9, 6, 21);
    let mut out = ImageF32::new(6, 9);
    assert_eq!(
        convolve_into(&img, &Kernel::identity(), &mut out),
        Err(ConvolveError::DimensionMismatch {
            expected: (9, 6),
            found: (6, 9)
        })
    );
}

#[test]
fn padded_image_layout() {
    let img = ImageF32::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
    let padded = pad_replicate(&img, 2).unwrap();
    assert_eq!(padded.dims(), (7, 6));
    // Corners replicate the corner pixels.
    assert_eq!(padded.get(0, 0), 1.0);
    assert_eq!(padded.get(6, 0), 3.0);
    assert_eq!(padded.get(0, 5), 4.0);
    assert_eq!(padded.get(6, 5), 6.0);
    // Interior is a verbatim copy.
    assert_eq!(padded.get(2, 2), 1.0);
    assert_eq!(padded.get(4, 3), 6.0);
}

#[test]
fn separable_path_matches_direct_definition() {
    let img = noise_f32(23, 14, 99);
    for op in GradientOperator::ALL {
        let (dx, dy) = op.dense();
        let (sx, sy) = op.separable();
        for (dense, sep) in [(&dx, &sx), (&dy, &sy)] {
            let a = convolve(&img, dense).unwrap();
            let b = convolve_separable(&img, sep).unwrap();
            for (p, q) in a.data.iter().zip(&b.data) {
                assert!((p - q).abs() < 1e-3, "{op}: {p} vs {q}");
            }
        }
    }

    let blur = SeparableKernel::new(
        [0.0625, 0.25, 0.375, 0.25, 0.0625],
        [0.0625, 0.25, 0.375, 0.25, 0.0625],
    );
    let a = convolve(&img, &blur.to_kernel()).unwrap();
    let b = convolve_separable(&img, &blur).unwrap();
    for (p, q) in a.data.iter().zip(&b.data) {
        assert!((p - q).abs() < 1e-3, "blur: {p} vs {q}");
    }
}
