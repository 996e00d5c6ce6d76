use super::*;

fn item(title: &str, description: &str, tags: &[&str]) -> PortfolioItem {
    PortfolioItem {
        title: title.to_owned(),
        description: description.to_owned(),
        image: format!("{}.png", title.to_lowercase()),
        tags: tags.iter().map(|t| (*t).to_owned()).collect(),
        link: None,
    }
}

fn titles(items: &[PortfolioItem]) -> Vec<&str> {
    items.iter().map(|i| i.title.as_str()).collect()
}

// =============================================================
// derive_tags
// =============================================================

#[test]
fn derive_tags_sorts_and_dedups() {
    let items = vec![item("1", "", &["a", "c"]), item("2", "", &["b"]), item("3", "", &[])];
    assert_eq!(derive_tags(&items), vec!["a", "b", "c"]);
}

#[test]
fn derive_tags_is_case_sensitive_ascending() {
    let items = vec![item("1", "", &["web", "Rust", "web"]), item("2", "", &["api"])];
    assert_eq!(derive_tags(&items), vec!["Rust", "api", "web"]);
}

#[test]
fn derive_tags_empty_for_no_items() {
    assert!(derive_tags(&[]).is_empty());
}

// =============================================================
// normalize_query
// =============================================================

#[test]
fn normalize_query_trims_and_lowercases() {
    assert_eq!(normalize_query("  Rust CLI \t"), "rust cli");
    assert_eq!(normalize_query("   "), "");
}

// =============================================================
// matches / apply_filters
// =============================================================

#[test]
fn all_with_empty_query_keeps_everything_in_order() {
    let items = vec![item("B", "", &["y"]), item("A", "", &["x"])];
    assert_eq!(titles(&apply_filters(&items, &TagFilter::All, "")), vec!["B", "A"]);
}

#[test]
fn tag_filter_requires_membership() {
    let items = vec![item("A", "", &["x"]), item("B", "", &["y"]), item("C", "", &["x", "y"])];
    let tag = TagFilter::Tag("x".to_owned());
    assert_eq!(titles(&apply_filters(&items, &tag, "")), vec!["A", "C"]);
}

#[test]
fn query_searches_title_and_description_case_insensitively() {
    let items = vec![
        item("Weather Station", "Sensors on a roof", &[]),
        item("Blog", "Static site about WEATHER", &[]),
        item("Shop", "Payments", &[]),
    ];
    assert_eq!(titles(&apply_filters(&items, &TagFilter::All, "weather")), vec!["Weather Station", "Blog"]);
}

#[test]
fn tag_and_query_must_both_match() {
    let items = vec![item("A", "alpha", &["x"]), item("B", "beta", &["y"])];
    let tag = TagFilter::Tag("x".to_owned());
    assert!(apply_filters(&items, &tag, "b").is_empty());
    assert_eq!(titles(&apply_filters(&items, &tag, "alp")), vec!["A"]);
}

#[test]
fn filtering_is_deterministic() {
    let items = vec![item("A", "one", &["x"]), item("B", "two", &["x"]), item("C", "three", &["z"])];
    let tag = TagFilter::Tag("x".to_owned());
    let first = apply_filters(&items, &tag, "o");
    let second = apply_filters(&items, &tag, "o");
    assert_eq!(first, second);
    assert_eq!(titles(&first), vec!["A", "B"]);
}

#[test]
fn unknown_tag_matches_nothing() {
    let items = vec![item("A", "", &["x"])];
    assert!(!matches(&items[0], &TagFilter::Tag("nope".to_owned()), ""));
}
