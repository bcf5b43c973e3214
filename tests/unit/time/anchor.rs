use super::*;

#[test]
fn elapsed_is_relative_to_last_reset() {
    let mut a = TimeAnchor::new(2.0);
    assert_eq!(a.elapsed(5.0), 3.0);
    assert_eq!(a.reset(10.0), 10.0);
    assert_eq!(a.elapsed(10.5), 0.5);
    assert_eq!(a.elapsed(9.0), -1.0);
}

#[test]
fn text_change_resets_anchor_once() {
    let mut a = TimeAnchor::new(0.0);
    a.activate("hello", 1.0);
    assert_eq!(a.master_text(), Some("hello"));

    assert!(!a.observe_text("hello", 4.0));
    assert_eq!(a.start(), 1.0);

    assert!(a.observe_text("world", 4.0));
    assert_eq!(a.start(), 4.0);
    assert_eq!(a.master_text(), Some("world"));
    assert!(!a.observe_text("world", 6.0));
}

#[test]
fn first_observation_counts_as_change() {
    let mut a = TimeAnchor::default();
    assert!(a.observe_text("", 3.0));
    assert_eq!(a.start(), 3.0);
}
