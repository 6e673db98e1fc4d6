use super::*;

fn vp() -> Viewport {
    Viewport::new(1280.0, 1000.0)
}

fn rect(top: f64) -> ElementRect {
    ElementRect::new(top, 0.0, 1280.0, 500.0)
}

#[test]
fn ratio_respects_bottom_margin() {
    let w = IntersectionWatch::new(0.1, 0.2);
    // Root bottom is 800.
    assert_eq!(w.ratio(rect(900.0), vp()), 0.0);
    assert!((w.ratio(rect(550.0), vp()) - 0.5).abs() < 1e-12);
    assert_eq!(w.ratio(rect(100.0), vp()), 1.0);
    assert!((w.ratio(rect(-250.0), vp()) - 0.5).abs() < 1e-12);
    assert_eq!(w.ratio(rect(-600.0), vp()), 0.0);
}

#[test]
fn threshold_gates_intersection() {
    let w = IntersectionWatch::new(0.3, 0.0);
    assert!(!w.is_intersecting(rect(900.0), vp()));
    assert!(w.is_intersecting(rect(800.0), vp()));
}

#[test]
fn sticky_latch_never_unsets() {
    let mut l = VisibilityLatch::sticky(IntersectionWatch::new(0.1, 0.0));
    assert_eq!(l.observe(Some(rect(2000.0)), vp()), None);
    assert_eq!(l.observe(Some(rect(200.0)), vp()), Some(true));
    assert_eq!(l.observe(Some(rect(5000.0)), vp()), None);
    assert!(l.is_visible());
}

#[test]
fn live_latch_follows_intersection() {
    let mut l = VisibilityLatch::live(presets::HOW_IT_WORKS);
    assert_eq!(l.observe(Some(rect(200.0)), vp()), Some(true));
    assert_eq!(l.observe(Some(rect(5000.0)), vp()), Some(false));
    assert!(!l.is_visible());
}

#[test]
fn missing_rect_is_ignored() {
    let mut l = VisibilityLatch::live(presets::HOW_IT_WORKS);
    assert_eq!(l.observe(None, vp()), None);
    assert!(!l.is_visible());
}

#[test]
fn reveal_waits_for_delay() {
    let mut l = VisibilityLatch::reveal_section();
    assert_eq!(l.observe(Some(rect(200.0)), vp()), None);
    assert!(!l.is_visible());
    assert_eq!(l.advance(Millis(100)), None);
    // Leaving the viewport does not cancel a pending reveal.
    assert_eq!(l.observe(Some(rect(5000.0)), vp()), None);
    assert_eq!(l.advance(Millis(40)), Some(true));
    assert!(l.is_visible());
    assert_eq!(l.advance(Millis(1000)), None);
}
