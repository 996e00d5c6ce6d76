//! Card text formatting.

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;

/// Maximum rendered description length on a card, ellipsis included.
pub const DESCRIPTION_LIMIT: usize = 180;
/// Entrance delay added per card position, in seconds.
pub const STAGGER_STEP_SECS: f64 = 0.05;
/// Upper bound on the entrance delay, in seconds.
pub const STAGGER_CAP_SECS: f64 = 0.4;

const ELLIPSIS: char = '\u{2026}';

/// Shorten `text` to at most [`DESCRIPTION_LIMIT`] characters.
///
/// Text that already fits is returned unchanged. Longer text is cut, trailing
/// whitespace dropped, and a single ellipsis character appended.
pub fn truncate_description(text: &str) -> String {
    if text.chars().count() <= DESCRIPTION_LIMIT {
        return text.to_owned();
    }
    let cut: String = text.chars().take(DESCRIPTION_LIMIT - 1).collect();
    let mut out = cut.trim_end().to_owned();
    out.push(ELLIPSIS);
    out
}

/// Entrance animation delay for the card at `position`, in seconds.
#[allow(clippy::cast_precision_loss)]
pub fn entrance_delay(position: usize) -> f64 {
    (position as f64 * STAGGER_STEP_SECS).min(STAGGER_CAP_SECS)
}

/// Inline style carrying the entrance delay for a card.
pub fn entrance_style(position: usize) -> String {
    format!("animation-delay: {:.2}s", entrance_delay(position))
}

/// Display label for a tag chip.
pub fn tag_label(tag: &str) -> String {
    format!("#{tag}")
}

/// Status line shown above a non-empty grid.
pub fn showing_summary(visible: usize, total: usize) -> String {
    format!("Showing {visible} of {total} projects")
}

/// Value for boolean ARIA attributes such as `aria-pressed`.
pub fn aria_flag(on: bool) -> &'static str {
    if on { "true" } else { "false" }
}
