use super::*;

fn size(w: f64) -> SurfaceSize {
    SurfaceSize::new(w, 400.0, 1.0).unwrap()
}

#[test]
fn rain_count_follows_width() {
    let opts = BeamOpts::default();
    assert_eq!(CanvasBeam::new(size(320.0), opts).rain_count(), 10);
    assert_eq!(CanvasBeam::new(size(1280.0), opts).rain_count(), 16);
    assert_eq!(CanvasBeam::new(size(4000.0), opts).rain_count(), 24);
}

#[test]
fn beam_radius_clamps() {
    let opts = BeamOpts::default();
    assert_eq!(CanvasBeam::new(size(320.0), opts).beam_radius(), 70.0);
    assert_eq!(CanvasBeam::new(size(1000.0), opts).beam_radius(), 120.0);
    assert_eq!(CanvasBeam::new(size(3000.0), opts).beam_radius(), 180.0);
}

#[test]
fn frame_layers_glow_dots_then_rain() {
    let mut b = CanvasBeam::new(size(1000.0), BeamOpts::default());
    let list = b.frame(0.5);
    assert!(matches!(list.ops[0], DrawOp::VerticalGradient { .. }));
    assert!(matches!(list.ops[1], DrawOp::VerticalGradient { .. }));
    assert!(list.circle_count() > 0);
    let dots_inside_beam = list.ops.iter().all(|op| match op {
        DrawOp::Circle { center, radius, .. } => {
            (center.x - 500.0).abs() <= 120.0 + 1e-9 && (1.0..=2.6).contains(radius)
        }
        _ => true,
    });
    assert!(dots_inside_beam);
    assert!(matches!(list.ops.last(), Some(DrawOp::Line { .. })));
}

#[test]
fn frames_are_reproducible_for_a_seed() {
    let mut a = CanvasBeam::new(size(800.0), BeamOpts::default());
    let mut b = CanvasBeam::new(size(800.0), BeamOpts::default());
    assert_eq!(a.frame(0.016), b.frame(0.016));
    assert_eq!(a.frame(0.032), b.frame(0.032));
}
