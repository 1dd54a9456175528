//! Reusable UI widget helpers

use crate::state::Tone;
use ratatui::style::Color;

pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Error => Color::Red,
        Tone::Success => Color::Green,
    }
}

/// Word-wrap `text` into rows of at most `width` characters.
///
/// Words longer than `width` are split. Layout heights are derived from the
/// row count, so the rows are rendered as-is without a second wrap pass.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();

        while chars.len() > width {
            if current_len > 0 {
                rows.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = chars.split_off(width);
            rows.push(chars.into_iter().collect());
            chars = rest;
        }

        if current_len > 0 && current_len + 1 + chars.len() > width {
            rows.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current_len += chars.len();
        current.extend(chars);
    }

    if current_len > 0 || rows.is_empty() {
        rows.push(current);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_short_text_is_one_row() {
        assert_eq!(wrap_words("Email cannot be empty.", 40), vec!["Email cannot be empty."]);
    }

    #[test]
    fn test_breaks_between_words() {
        assert_eq!(
            wrap_words("one two three four", 9),
            vec!["one two", "three", "four"]
        );
    }

    #[test]
    fn test_exact_fit_stays_on_one_row() {
        assert_eq!(wrap_words("abc def", 7), vec!["abc def"]);
    }

    #[test]
    fn test_long_word_is_split() {
        assert_eq!(wrap_words("ab abcdefgh", 4), vec!["ab", "abcd", "efgh"]);
    }

    #[test]
    fn test_empty_text_is_one_empty_row() {
        assert_eq!(wrap_words("", 10), vec![""]);
    }

    #[test]
    fn test_zero_width_returns_text() {
        assert_eq!(wrap_words("a b", 0), vec!["a b"]);
    }

    #[test]
    fn test_email_message_wraps_before_example() {
        let rows = wrap_words(
            "Please enter a valid email address (e.g., user@example.com).",
            54,
        );
        assert_eq!(
            rows,
            vec!["Please enter a valid email address (e.g.,", "user@example.com)."]
        );
    }

    #[test]
    fn test_tone_colors() {
        assert_eq!(tone_color(Tone::Error), Color::Red);
        assert_eq!(tone_color(Tone::Success), Color::Green);
    }
}
