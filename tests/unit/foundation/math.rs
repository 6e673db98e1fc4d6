use super::*;

#[test]
fn clamp_bounds() {
    for v in [-1e9, -3.5, -0.0, 0.25, 0.999, 7.0, 1e9] {
        let c = clamp(v, 0.0, 1.0);
        if v < 0.0 {
            assert_eq!(c, 0.0);
        } else if v > 1.0 {
            assert_eq!(c, 1.0);
        } else {
            assert_eq!(c, v);
        }
    }
    assert_eq!(clamp(5.0, 2.0, 2.0), 2.0);
    assert_eq!(clamp(-4.0, -10.0, -5.0), -5.0);
}

#[test]
fn lerp_endpoints() {
    for (a, b) in [(0.0, 1.0), (1.0, 90.0), (-20.0, 4.5), (128.0, 16.0)] {
        assert_eq!(lerp(a, b, 0.0), a);
        assert_eq!(lerp(a, b, 1.0), b);
    }
    assert_eq!(lerp(1.0, 21.0, 0.5), 11.0);
}

#[test]
fn cubic_hits_end_control_points() {
    assert_eq!(cubic(0.0, 280.0, 480.0, 720.0, 0.0), 0.0);
    assert_eq!(cubic(0.0, 280.0, 480.0, 720.0, 1.0), 720.0);
    // Flat control polygon stays flat.
    assert!((cubic(5.0, 5.0, 5.0, 5.0, 0.37) - 5.0).abs() < 1e-12);
}

#[test]
fn smoothstep_is_clamped_and_handles_zero_span() {
    assert_eq!(smoothstep(0.0, 1.0, -1.0), 0.0);
    assert_eq!(smoothstep(0.0, 1.0, 2.0), 1.0);
    assert_eq!(smoothstep(0.0, 1.0, 0.5), 0.5);
    assert_eq!(smoothstep(3.0, 3.0, 2.0), 0.0);
    assert_eq!(smoothstep(3.0, 3.0, 3.0), 1.0);
}

#[test]
fn fract_stays_below_one_for_tiny_negatives() {
    assert_eq!(fract(2.25), 0.25);
    assert_eq!(fract(-0.75), 0.25);
    assert_eq!(fract(-3.0), 0.0);
    for v in [-1e-20, -f64::MIN_POSITIVE, -1e-300] {
        let f = fract(v);
        assert!((0.0..1.0).contains(&f), "fract({v}) = {f}");
    }
}

#[test]
fn hashes_are_unit_interval() {
    for i in 0..200 {
        let x = i as f64 * 7.0;
        let h = sine_hash(x, x * 0.5 + 3.0);
        assert!((0.0..1.0).contains(&h));
        let h = sine_hash_t(x, 11.0, 0.016 * i as f64);
        assert!((0.0..1.0).contains(&h));
    }
}

#[test]
fn rng_is_deterministic_and_bounded() {
    let mut a = Rng64::new(123);
    let mut b = Rng64::new(123);
    for _ in 0..32 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
    let mut r = Rng64::new(7);
    for _ in 0..1000 {
        let v = r.range(0.08, 0.22);
        assert!((0.08..0.30).contains(&v));
    }
}
