use super::*;

#[test]
fn crossfade_t_0_is_a_and_t_1_is_b() {
    let a = [10, 20, 30, 40];
    let b = [200, 210, 220, 230];
    assert_eq!(crossfade(a, b, 0.0), a);
    assert_eq!(crossfade(a, b, 1.0), b);
}

#[test]
fn crossfade_of_equal_pixels_is_identity_for_any_t() {
    let p = [13, 77, 200, 255];
    for t in [0.0, 0.1, 0.25, 0.5, 0.75, 0.9, 1.0] {
        assert_eq!(crossfade(p, p, t), p);
    }
}

#[test]
fn crossfade_clamps_t() {
    let a = [10, 20, 30, 40];
    let b = [200, 210, 220, 230];
    assert_eq!(crossfade(a, b, -1.0), a);
    assert_eq!(crossfade(a, b, 2.0), b);
}

#[test]
fn dissolve_midpoint_of_red_and_blue() {
    let red = FrameRgba::new(2, 2, [255, 0, 0, 255]).unwrap();
    let blue = FrameRgba::new(2, 2, [0, 0, 255, 255]).unwrap();

    let mid = dissolve(&red, &blue, 0.5).unwrap();
    for px in mid.data().chunks_exact(4) {
        assert_eq!(px, crossfade([255, 0, 0, 255], [0, 0, 255, 255], 0.5));
        assert_eq!(px[3], 255);
        assert!(px[0] > 0 && px[0] < 255);
        assert!(px[2] > 0 && px[2] < 255);
    }
}

#[test]
fn dissolve_endpoints_are_exact() {
    let mut a = FrameRgba::new(3, 1, [0, 0, 0, 255]).unwrap();
    a.put(1, 0, [50, 100, 150, 255]);
    let b = FrameRgba::new(3, 1, [9, 8, 7, 255]).unwrap();

    assert_eq!(dissolve(&a, &b, 0.0).unwrap(), a);
    assert_eq!(dissolve(&a, &b, 1.0).unwrap(), b);
}

#[test]
fn dissolve_rejects_size_mismatch() {
    let a = FrameRgba::new(2, 2, [0, 0, 0, 255]).unwrap();
    let b = FrameRgba::new(3, 2, [0, 0, 0, 255]).unwrap();
    let err = dissolve(&a, &b, 0.5).unwrap_err();
    assert!(err.to_string().contains("size mismatch"));
}
