use super::*;

#[test]
fn threshold_is_exclusive() {
    assert!(!is_scrolled(0.0));
    assert!(!is_scrolled(40.0));
    assert!(is_scrolled(40.5));
    assert!(is_scrolled(900.0));
}

#[test]
fn read_scroll_offset_is_zero_off_browser() {
    assert!(read_scroll_offset().abs() < f64::EPSILON);
}
