use super::*;

fn rect_at(top: f64) -> ElementRect {
    ElementRect::new(top, 0.0, 1280.0, 900.0)
}

#[test]
fn window_progress_matches_formula() {
    let w = ScrollWindow::new(1.08, 0.46);
    let vh = 1000.0;
    assert_eq!(w.progress(1200.0, vh), 0.0);
    assert_eq!(w.progress(1100.0, vh), 0.0);
    assert_eq!(w.progress(400.0, vh), 1.0);
    assert_eq!(w.progress(-50.0, vh), 1.0);
    let mid = w.progress(770.0, vh);
    assert!((mid - 0.5).abs() < 1e-12);
}

#[test]
fn degenerate_window_is_a_step() {
    let w = ScrollWindow::new(0.5, 0.5);
    assert_eq!(w.progress(600.0, 1000.0), 0.0);
    assert_eq!(w.progress(500.0, 1000.0), 1.0);
}

#[test]
fn tracker_skips_unmounted_element() {
    let mut t = ProgressTracker::new(presets::COPILOT);
    let vp = Viewport::new(1280.0, 1000.0);
    assert_eq!(t.update(None, vp), None);
    assert_eq!(t.progress(), 0.0);

    let p = t.update(Some(rect_at(600.0)), vp).unwrap();
    assert!((p - 0.5).abs() < 1e-12);

    // Unmount keeps the last value.
    assert_eq!(t.update(None, vp), None);
    assert!((t.progress() - 0.5).abs() < 1e-12);
}

#[test]
fn tracker_reports_only_changes() {
    let mut t = ProgressTracker::new(presets::COPILOT);
    let vp = Viewport::new(1280.0, 1000.0);
    assert_eq!(t.update(Some(rect_at(2000.0)), vp), None);
    assert!(t.update(Some(rect_at(100.0)), vp).is_some());
    assert_eq!(t.update(Some(rect_at(50.0)), vp), None);
}

#[test]
fn held_tracker_stays_straight_below_the_fold() {
    // Window starting below the viewport would otherwise already bend.
    let mut t = ProgressTracker::new(ScrollWindow::new(1.5, 0.5)).hold_until_near();
    let vp = Viewport::new(1280.0, 1000.0);
    assert_eq!(t.update(Some(rect_at(1200.0)), vp), None);
    assert_eq!(t.progress(), 0.0);

    let mut free = ProgressTracker::new(ScrollWindow::new(1.5, 0.5));
    assert!(free.update(Some(rect_at(1200.0)), vp).unwrap() > 0.0);
}

#[test]
fn document_trigger_runs_over_range() {
    let trig = presets::HOW_IT_WORKS;
    let vp = Viewport::new(1280.0, 1000.0);
    // trigger_start = 3000 - 950 = 2050; bottom = scroll + 1000.
    assert_eq!(trig.progress(3000.0, vp.scrolled_to(1000.0)), 0.0);
    let half = trig.progress(3000.0, vp.scrolled_to(1410.0));
    assert!((half - 0.5).abs() < 1e-12);
    assert_eq!(trig.progress(3000.0, vp.scrolled_to(5000.0)), 1.0);
}

#[test]
fn pinned_progress_clamps() {
    assert_eq!(pinned_progress(ElementRect::new(100.0, 0.0, 10.0, 800.0)), 0.0);
    assert_eq!(pinned_progress(ElementRect::new(-400.0, 0.0, 10.0, 800.0)), 0.5);
    assert_eq!(pinned_progress(ElementRect::new(-4000.0, 0.0, 10.0, 800.0)), 1.0);
    assert_eq!(pinned_progress(ElementRect::new(-10.0, 0.0, 10.0, 0.0)), 0.0);
}
