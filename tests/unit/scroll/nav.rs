use super::*;

fn offsets(id: &str) -> Option<f64> {
    match id {
        "hero" => Some(0.0),
        "produkt" => Some(900.0),
        "losningar" => Some(2100.0),
        "customers" => Some(3300.0),
        // "security" is not mounted.
        "how-it-works" => Some(4800.0),
        _ => None,
    }
}

#[test]
fn starts_at_hero_unscrolled() {
    let nav = NavTracker::default();
    assert_eq!(nav.state().active, "hero");
    assert!(!nav.state().scrolled);
}

#[test]
fn scrolled_flag_flips_after_threshold() {
    let mut nav = NavTracker::default();
    let vp = Viewport::new(1280.0, 1000.0);
    assert!(nav.update(vp.scrolled_to(12.0), offsets).is_none());
    let s = nav.update(vp.scrolled_to(13.0), offsets).cloned();
    assert_eq!(
        s,
        Some(NavState {
            scrolled: true,
            active: "hero".into()
        })
    );
}

#[test]
fn active_section_uses_reading_cursor() {
    let mut nav = NavTracker::default();
    let vp = Viewport::new(1280.0, 1000.0);
    // Cursor at 580 + 320 = 900 reaches "produkt".
    nav.update(vp.scrolled_to(580.0), offsets);
    assert_eq!(nav.state().active, "produkt");
    nav.update(vp.scrolled_to(579.0), offsets);
    assert_eq!(nav.state().active, "hero");
}

#[test]
fn unmounted_sections_are_skipped() {
    let mut nav = NavTracker::default();
    let vp = Viewport::new(1280.0, 1000.0);
    nav.update(vp.scrolled_to(4000.0), offsets);
    assert_eq!(nav.state().active, "customers");
    nav.update(vp.scrolled_to(9000.0), offsets);
    assert_eq!(nav.state().active, "how-it-works");
}

#[test]
fn unchanged_state_reports_nothing() {
    let mut nav = NavTracker::default();
    let vp = Viewport::new(1280.0, 1000.0).scrolled_to(2000.0);
    assert!(nav.update(vp, offsets).is_some());
    assert!(nav.update(vp, offsets).is_none());
}
