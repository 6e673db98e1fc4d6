use super::*;

#[test]
fn surface_size_caps_dpr_and_rejects_empty() {
    let s = SurfaceSize::new(800.0, 600.0, 3.0).unwrap();
    assert_eq!(s.dpr, 2.0);
    assert_eq!(s.device_px(), (1600, 1200));

    let s = SurfaceSize::new(800.0, 600.0, 0.0).unwrap();
    assert_eq!(s.dpr, 1.0);

    assert!(SurfaceSize::new(0.0, 600.0, 1.0).is_err());
    assert!(SurfaceSize::new(800.0, f64::NAN, 1.0).is_err());
}

#[test]
fn surface_size_rejects_more_device_px_than_a_raster_surface_holds() {
    let err = SurfaceSize::new(70_000.0, 400.0, 1.0).unwrap_err();
    assert!(err.to_string().starts_with("validation error:"));
    assert!(SurfaceSize::new(100_000.0, 100_000.0, 1.0).is_err());
    // 40 000 CSS px fits at dpr 1 but not at dpr 2.
    assert!(SurfaceSize::new(400.0, 40_000.0, 1.0).is_ok());
    assert!(SurfaceSize::new(400.0, 40_000.0, 2.0).is_err());
    let edge = SurfaceSize::new(65_535.0, 1.0, 1.0).unwrap();
    assert_eq!(edge.device_px(), (65_535, 1));
}

#[test]
fn rgba_fade_clamps_alpha() {
    let c = Rgba::new(10, 20, 30, 0.8);
    assert_eq!(c.fade(2.0).a, 1.0);
    assert!((c.fade(0.5).a - 0.4).abs() < 1e-12);
    assert_eq!(c.fade(-1.0).alpha_u8(), 0);
}

#[test]
fn element_rect_from_document_offset_tracks_scroll() {
    let vp = Viewport::new(1280.0, 800.0).scrolled_to(300.0);
    let r = ElementRect::from_document_offset(1000.0, 400.0, vp);
    assert_eq!(r.top, 700.0);
    assert_eq!(r.bottom(), 1100.0);
}

#[test]
fn millis_seconds_conversion() {
    assert_eq!(Millis(1500).as_secs_f64(), 1.5);
    assert_eq!(Millis(5).saturating_sub(Millis(9)), Millis::ZERO);
}
