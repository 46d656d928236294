//! Display-width helpers for laying out labels and messages.
//!
//! Widths are terminal cells (`unicode-width`), never bytes or chars.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn display_width(s: &str) -> u16 {
    UnicodeWidthStr::width(s).min(u16::MAX as usize) as u16
}

/// Returns how many bytes from the start of `s` fit into `max_width` cells.
pub fn truncate_to_width(s: &str, max_width: usize) -> usize {
    if max_width == 0 || s.is_empty() {
        return 0;
    }

    let mut used = 0usize;
    let mut end = 0usize;
    for (idx, ch) in s.char_indices() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max_width {
            break;
        }
        used += w;
        end = idx + ch.len_utf8();
    }

    end
}

/// Wraps `text` on whitespace so that no line exceeds `width` cells.
///
/// Explicit newlines always break. A word wider than `width` is split at the
/// cell boundary. Empty input yields a single empty line; `width == 0` yields
/// no lines.
pub fn wrap(text: &str, width: u16) -> Vec<String> {
    let width = width as usize;
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_w = 0usize;

        for word in paragraph.split_whitespace() {
            let mut word = word;
            let mut word_w = UnicodeWidthStr::width(word);

            let sep = usize::from(line_w > 0);
            if line_w + sep + word_w <= width {
                if sep == 1 {
                    line.push(' ');
                }
                line.push_str(word);
                line_w += sep + word_w;
                continue;
            }

            if line_w > 0 {
                lines.push(std::mem::take(&mut line));
            }

            while word_w > width {
                let mut end = truncate_to_width(word, width);
                if end == 0 {
                    // A single glyph wider than the line; emit it alone.
                    end = word.chars().next().map(char::len_utf8).unwrap_or(word.len());
                }
                lines.push(word[..end].to_string());
                word = &word[end..];
                word_w = UnicodeWidthStr::width(word);
            }

            line.push_str(word);
            line_w = word_w;
        }

        lines.push(line);
    }

    lines
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/text.rs"]
mod tests;
