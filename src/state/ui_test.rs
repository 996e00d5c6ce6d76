use super::*;

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn theme_parse_accepts_stored_values_only() {
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse("true"), None);
}

#[test]
fn theme_strings_and_labels() {
    assert_eq!(Theme::Dark.as_str(), "dark");
    assert_eq!(Theme::Light.as_str(), "light");
    assert_eq!(Theme::Dark.label(), "Dark");
    assert_eq!(Theme::Light.label(), "Light");
}

#[test]
fn theme_toggled_round_trips() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    assert!(Theme::Dark.is_dark());
    assert!(!Theme::Light.is_dark());
}

// =============================================================
// UiState
// =============================================================

#[test]
fn ui_state_default_closed_and_unscrolled() {
    let state = UiState::default();
    assert_eq!(state.theme, Theme::Light);
    assert!(!state.nav_open);
    assert!(!state.scrolled);
}

#[test]
fn toggle_nav_flips_open_state() {
    let mut state = UiState::default();
    state.toggle_nav();
    assert!(state.nav_open);
    state.toggle_nav();
    assert!(!state.nav_open);
}

#[test]
fn close_nav_is_one_shot() {
    let mut state = UiState::default();
    state.toggle_nav();
    state.close_nav();
    assert!(!state.nav_open);
    state.close_nav();
    assert!(!state.nav_open);
}
