//! Width-aware wrapping and truncation for terminal display.
//!
//! Widths are measured in terminal columns with `unicode-width`, so CJK text
//! and emoji occupy the cells they actually render in.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// Wraps `text` at word boundaries so no line exceeds `max_width` columns.
///
/// Existing newlines are kept. Words wider than `max_width` are hard-split.
/// A `max_width` of zero returns the input lines unchanged.
#[must_use]
pub fn wrap_words(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return text.lines().map(ToOwned::to_owned).collect();
    }

    let mut wrapped = Vec::new();
    for line in text.lines() {
        wrap_line_into(line, max_width, &mut wrapped);
    }
    wrapped
}

fn wrap_line_into(line: &str, max_width: usize, wrapped: &mut Vec<String>) {
    let mut current = String::new();
    let mut current_width = 0_usize;

    for word in line.split_whitespace() {
        let word_width = UnicodeWidthStr::width(word);
        let separator = usize::from(!current.is_empty());

        if current_width
            .saturating_add(separator)
            .saturating_add(word_width)
            <= max_width
        {
            if separator == 1 {
                current.push(' ');
            }
            current.push_str(word);
            current_width = current_width
                .saturating_add(separator)
                .saturating_add(word_width);
            continue;
        }

        if !current.is_empty() {
            wrapped.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width <= max_width {
            current.push_str(word);
            current_width = word_width;
        } else {
            let mut pieces = hard_split(word, max_width);
            if let Some(last) = pieces.pop() {
                current_width = UnicodeWidthStr::width(last.as_str());
                current = last;
            }
            wrapped.extend(pieces);
        }
    }

    wrapped.push(current);
}

fn hard_split(word: &str, max_width: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut piece_width = 0_usize;

    for character in word.chars() {
        let character_width = UnicodeWidthChar::width(character).unwrap_or(0);
        if piece_width.saturating_add(character_width) > max_width && !piece.is_empty() {
            pieces.push(std::mem::take(&mut piece));
            piece_width = 0;
        }
        piece.push(character);
        piece_width = piece_width.saturating_add(character_width);
    }

    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}

/// Truncates `text` to `max_width` columns, ending with `…` when cut.
#[must_use]
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(text) <= max_width {
        return text.to_owned();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width.saturating_sub(1);
    let mut output = String::new();
    let mut used = 0_usize;
    for character in text.chars() {
        let character_width = UnicodeWidthChar::width(character).unwrap_or(0);
        if used.saturating_add(character_width) > budget {
            break;
        }
        output.push(character);
        used = used.saturating_add(character_width);
    }
    output.push(ELLIPSIS);
    output
}
