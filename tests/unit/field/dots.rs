use super::*;

fn size(w: f64, h: f64, dpr: f64) -> SurfaceSize {
    SurfaceSize::new(w, h, dpr).unwrap()
}

#[test]
fn spacing_scales_with_dpr_and_clamps() {
    let opts = FieldOpts::default();
    assert_eq!(BeamField::new(size(100.0, 100.0, 1.0), opts).spacing(), 7.0);
    assert_eq!(BeamField::new(size(100.0, 100.0, 2.0), opts).spacing(), 12.0);
    let tight = FieldOpts {
        dot_spacing: 2.0,
        ..opts
    };
    assert_eq!(BeamField::new(size(100.0, 100.0, 1.0), tight).spacing(), 6.0);
}

#[test]
fn layout_covers_surface_with_margin() {
    let f = BeamField::new(size(70.0, 100.0, 1.0), FieldOpts::default());
    // Columns -7..=77 step 7 -> 13; rows 6..=107 step 7 -> 15.
    assert_eq!(f.dot_count(), 13 * 15);
    assert_eq!(f.particle_count(), 220);
    for p in f.particle_positions() {
        assert!((0.0..70.0).contains(&p.x));
        assert!((55.0..95.0).contains(&p.y));
    }
}

#[test]
fn frame_starts_with_gradient_wash() {
    let mut f = BeamField::new(size(200.0, 160.0, 1.0), FieldOpts::default());
    let list = f.frame(0.016);
    match &list.ops[0] {
        DrawOp::VerticalGradient { rect, stops, .. } => {
            assert_eq!(stops.len(), 4);
            assert!((rect.y0 - 16.0).abs() < 1e-9);
            assert_eq!(rect.y1, 160.0);
        }
        other => panic!("unexpected first op {other:?}"),
    }
    assert!(list.circle_count() > 0);
}

#[test]
fn dots_respect_radius_bounds() {
    let mut f = BeamField::new(size(320.0, 240.0, 1.0), FieldOpts::default());
    let list = f.frame(1.0);
    let dot_radii: Vec<f64> = list
        .ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Circle { radius, color, .. } if color.r == 120 => Some(*radius),
            _ => None,
        })
        .collect();
    assert!(!dot_radii.is_empty());
    assert!(dot_radii.iter().all(|r| (0.44..=2.2).contains(r)));
}

#[test]
fn particles_rise_between_frames() {
    let mut f = BeamField::new(size(320.0, 240.0, 1.0), FieldOpts::default());
    let before: Vec<_> = f.particle_positions().collect();
    f.frame(0.016);
    let after: Vec<_> = f.particle_positions().collect();
    let risen = before.iter().zip(&after).filter(|(b, a)| a.y < b.y).count();
    assert!(risen > 0);
}

#[test]
fn same_seed_same_frames() {
    let mut a = BeamField::new(size(160.0, 120.0, 1.5), FieldOpts::default());
    let mut b = BeamField::new(size(160.0, 120.0, 1.5), FieldOpts::default());
    for i in 1..=5 {
        let t = i as f64 * 0.016;
        assert_eq!(a.frame(t), b.frame(t));
    }
    let mut c = BeamField::new(
        size(160.0, 120.0, 1.5),
        FieldOpts {
            seed: 7,
            ..FieldOpts::default()
        },
    );
    assert_ne!(a.frame(0.1), c.frame(0.1));
}

#[test]
fn resize_relays_out() {
    let mut f = BeamField::new(size(70.0, 100.0, 1.0), FieldOpts::default());
    let n = f.dot_count();
    f.resize(size(140.0, 100.0, 1.0));
    assert!(f.dot_count() > n);
    assert_eq!(f.size().width, 140.0);
}
