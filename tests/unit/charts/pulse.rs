use super::*;

#[test]
fn idle_until_triggered() {
    let mut p = ChartPulse::new();
    assert_eq!(p.flags(), PulseFlags::default());
    assert_eq!(p.advance(Millis(1000)), None);
}

#[test]
fn pulse_timeline() {
    let mut p = ChartPulse::new();
    let f = p.trigger();
    assert!(f.resetting && f.updating && !f.animating);

    assert_eq!(p.advance(Millis(89)), None);
    let f = p.advance(Millis(1)).unwrap();
    assert!(!f.resetting && f.updating);

    let f = p.advance(Millis(130)).unwrap();
    assert!(f.animating && f.updating);

    let f = p.advance(Millis(40)).unwrap();
    assert_eq!(
        f,
        PulseFlags {
            resetting: false,
            animating: true,
            updating: false
        }
    );
    assert_eq!(p.advance(Millis(10_000)), None);
}

#[test]
fn retrigger_restarts_animation() {
    let mut p = ChartPulse::new();
    p.trigger();
    p.advance(Millis(500));
    assert!(p.flags().animating);
    let f = p.trigger();
    assert!(!f.animating && f.resetting);
}
