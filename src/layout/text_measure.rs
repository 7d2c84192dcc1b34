//! Text measurement in terminal cells.
//!
//! Backed by the `unicode-width` crate: ASCII is 1 cell, CJK and most
//! emoji are 2, control and zero-width characters are 0.

use unicode_width::UnicodeWidthChar;

fn char_width(c: char) -> u16 {
    UnicodeWidthChar::width(c).unwrap_or(0) as u16
}

/// Display width of a string in terminal cells.
pub fn string_width(s: &str) -> u16 {
    s.chars()
        .fold(0u16, |w, c| w.saturating_add(char_width(c)))
}

/// Number of lines `text` occupies when wrapped to `available_width`.
///
/// Returns 0 for empty text. Explicit newlines always break.
pub fn measure_text_height(text: &str, available_width: u16) -> u16 {
    if text.is_empty() {
        return 0;
    }
    if available_width == 0 {
        return 1;
    }

    let mut lines = 0u16;
    let mut current = 0u16;

    for c in text.chars() {
        if c == '\n' {
            lines = lines.saturating_add(1);
            current = 0;
            continue;
        }

        let w = char_width(c);
        if current + w > available_width && current > 0 {
            lines = lines.saturating_add(1);
            current = w;
        } else {
            current += w;
        }
    }

    if current > 0 || lines == 0 {
        lines = lines.saturating_add(1);
    }

    lines.max(1)
}

/// Wrap text to `width`, breaking at cell boundaries.
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    if text.is_empty() {
        return vec![];
    }
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0u16;

    for c in text.chars() {
        if c == '\n' {
            lines.push(current);
            current = String::new();
            current_width = 0;
            continue;
        }

        let w = char_width(c);
        if current_width + w > width && !current.is_empty() {
            lines.push(current);
            current = String::new();
            current_width = 0;
        }

        current.push(c);
        current_width += w;
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Truncate text to `width` cells, appending an ellipsis when cut.
pub fn truncate_text(text: &str, width: u16) -> String {
    if width == 0 {
        return String::new();
    }
    if string_width(text) <= width {
        return text.to_string();
    }

    let target = width.saturating_sub(1);
    let mut result = String::new();
    let mut current = 0u16;

    for c in text.chars() {
        let w = char_width(c);
        if current + w > target {
            break;
        }
        result.push(c);
        current += w;
    }

    result.push('…');
    result
}
