//! Pure section renderers: content + width in, `RenderCommand`s out.
//!
//! All coordinates are page-space (y grows downward over the full page).
//! Renderers subtract the scroll offset when painting.

pub mod about;
pub mod contact;
pub mod hero;
pub mod navbar;
pub mod page;
pub mod projects;
pub mod skills;

/// Horizontal page margin.
pub(crate) const MARGIN: f64 = 48.0;
/// Content column is capped so ultra-wide viewports stay readable.
pub(crate) const MAX_CONTENT_WIDTH: f64 = 1100.0;

/// Left edge and width of the centered content column.
pub(crate) fn content_span(page_width: f64) -> (f64, f64) {
    let width = (page_width - 2.0 * MARGIN).clamp(0.0, MAX_CONTENT_WIDTH);
    let left = (page_width - width) / 2.0;
    (left, width)
}

/// Greedy word wrap by character budget. Good enough for layout without
/// font metrics; renderers draw each returned line as-is.
pub(crate) fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > max_chars {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_respects_budget() {
        let lines = wrap_text("alpha beta gamma delta epsilon", 11);
        assert!(lines.iter().all(|l| l.chars().count() <= 11));
        assert_eq!(lines.join(" "), "alpha beta gamma delta epsilon");
    }

    #[test]
    fn wrap_of_empty_text_is_empty() {
        assert!(wrap_text("   ", 10).is_empty());
    }

    #[test]
    fn content_span_is_centered_and_capped() {
        let (left, width) = content_span(3000.0);
        assert!((width - MAX_CONTENT_WIDTH).abs() < f64::EPSILON);
        assert!((left - (3000.0 - width) / 2.0).abs() < f64::EPSILON);

        let (left, width) = content_span(800.0);
        assert!((width - (800.0 - 2.0 * MARGIN)).abs() < f64::EPSILON);
        assert!((left - MARGIN).abs() < f64::EPSILON);
    }
}
