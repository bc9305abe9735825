//! Width-aware text fitting
//!
//! Widths are display columns (`unicode-width`), so CJK and emoji count as
//! two cells.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const ELLIPSIS: char = '…';

/// Cut `text` to `max_width` columns, ending in an ellipsis when shortened
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push(ELLIPSIS);
    out
}

/// Greedy word wrap; words longer than a line are split
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    if width == 0 {
        return lines;
    }

    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        if current_width > 0 {
            if current_width + 1 + word.width() > width {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            } else {
                current.push(' ');
                current_width += 1;
            }
        }

        for ch in word.chars() {
            let w = ch.width().unwrap_or(0);
            if current_width + w > width && current_width > 0 {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(ch);
            current_width += w;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Wrap and keep at most `max_lines`; the last kept line gets an ellipsis
/// if anything was cut
pub fn clamp_lines(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    let mut lines = wrap_words(text, width);
    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            *last = truncate_to_width(&format!("{last}{ELLIPSIS}"), width);
        }
    }
    lines
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod text_tests;
