use super::*;

fn letters() -> Vec<char> {
    vec!['a', 'b', 'c', 'd']
}

#[test]
fn empty_list_is_rejected() {
    assert!(Carousel::<char>::customers(Vec::new()).is_err());
    assert!(Carousel::new(letters(), Millis::ZERO, 0, Autoplay::Always).is_err());
}

#[test]
fn fallback_replaces_empty_list() {
    let c = Carousel::spotlight(Vec::new(), Testimonial::defaults()).unwrap();
    assert_eq!(c.len(), 3);
    assert_eq!(c.current().name, "Rikard Jonsson");
}

#[test]
fn next_and_prev_wrap() {
    let mut c = Carousel::new(letters(), Millis(1000), 0, Autoplay::Always).unwrap();
    for n in 0..10 {
        let mut k = Carousel::new(letters(), Millis(1000), 2, Autoplay::Always).unwrap();
        for _ in 0..n {
            k.go_next();
        }
        assert_eq!(k.index(), (2 + n) % 4);
        let mut k = Carousel::new(letters(), Millis(1000), 2, Autoplay::Always).unwrap();
        for _ in 0..n {
            k.go_prev();
        }
        assert_eq!(k.index(), (2 + 4 * n - n) % 4);
    }
    assert_eq!(c.go_prev(), 3);
    assert_eq!(c.prev_index(), 2);
    assert_eq!(c.next_index(), 0);
}

#[test]
fn select_checks_bounds() {
    let mut c = Carousel::new(letters(), Millis(1000), 0, Autoplay::Always).unwrap();
    assert!(c.select(3).is_ok());
    assert_eq!(*c.current(), 'd');
    assert!(c.select(4).is_err());
    assert_eq!(c.index(), 3);
}

#[test]
fn customers_preset_waits_for_visibility() {
    let mut c = Carousel::customers(letters()).unwrap();
    assert_eq!(c.index(), 1);
    assert_eq!(c.advance(Millis(10_000)), None);
    c.set_visible(true);
    assert_eq!(c.advance(Millis(4599)), None);
    assert_eq!(c.advance(Millis(1)), Some(2));
    c.set_reduced_motion(true);
    assert_eq!(c.advance(Millis(50_000)), None);
}

#[test]
fn manual_navigation_keeps_timer() {
    let mut c = Carousel::spotlight(letters(), Vec::new()).unwrap();
    c.advance(Millis(5000));
    c.go_next();
    assert_eq!(c.advance(Millis(200)), Some(2));
}

#[test]
fn large_steps_advance_multiple_cards() {
    let mut c = Carousel::spotlight(letters(), Vec::new()).unwrap();
    assert_eq!(c.advance(Millis(5200 * 6)), Some(2));
}

#[test]
fn split_quote_separates_lead_sentence() {
    let t = Testimonial::new("First. Second part. Third", "n", "r", "");
    assert_eq!(t.split_quote(), ("First", "Second part. Third".to_owned()));
    let single = Testimonial::new("Only one sentence.", "n", "r", "");
    assert_eq!(single.split_quote(), ("Only one sentence.", String::new()));
}
