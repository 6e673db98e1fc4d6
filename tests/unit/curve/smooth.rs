use super::*;

#[test]
fn short_inputs() {
    assert_eq!(smooth_path(&[]), "");
    assert_eq!(smooth_path(&[Point::new(1.0, 2.0)]), "");
    assert_eq!(
        smooth_path(&[Point::new(0.0, 10.0), Point::new(5.0, 20.0)]),
        "M0 10 L5 20"
    );
}

#[test]
fn collinear_points_keep_controls_on_the_line() {
    let pts = [
        Point::new(0.0, 0.0),
        Point::new(6.0, 6.0),
        Point::new(12.0, 12.0),
    ];
    assert_eq!(smooth_path(&pts), "M0 0 C1 1 4 4 6 6 C8 8 11 11 12 12");
}

#[test]
fn bezpath_has_one_segment_per_gap() {
    let pts: Vec<Point> = (0..12).map(|i| Point::new(i as f64 * 10.0, 5.0)).collect();
    let path = smooth_bezpath(&pts);
    assert_eq!(path.segments().count(), 11);
    assert!(smooth_bezpath(&pts[..1]).elements().is_empty());
}
