//! Approximate text measurement and greedy word wrapping.
//!
//! Widths come from the Helvetica AFM table (thousandths of the point
//! size). The embedded DejaVu Sans family is slightly wider, but the same
//! table is close enough for wrap estimation either way; exact shaping is
//! out of scope.

/// Helvetica advance widths for ASCII 0x20..=0x7E, in 1/1000 of the size.
#[rustfmt::skip]
const ASCII_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, // ' '..')'
    389, 584, 278, 333, 278, 278, 556, 556, 556, 556, // '*'..'3'
    556, 556, 556, 556, 556, 556, 278, 278, 584, 584, // '4'..'='
    584, 556, 1015, 667, 667, 722, 722, 667, 611, 778, // '>'..'G'
    722, 278, 500, 667, 556, 833, 722, 778, 667, 778, // 'H'..'Q'
    722, 667, 611, 722, 667, 944, 667, 667, 611, 278, // 'R'..'['
    278, 278, 469, 556, 333, 556, 556, 500, 556, 556, // '\\'..'e'
    278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // 'f'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, // 'p'..'y'
    500, 334, 260, 334, 584,                          // 'z'..'~'
];

/// Width assumed for characters outside the ASCII table.
const DEFAULT_WIDTH: u16 = 600;

fn char_width(c: char) -> u16 {
    let code = c as u32;
    if (0x20..=0x7E).contains(&code) {
        ASCII_WIDTHS[(code - 0x20) as usize]
    } else {
        DEFAULT_WIDTH
    }
}

/// Returns the approximate rendered width of `text` in points.
pub fn text_width(text: &str, font_size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| char_width(c) as u32).sum();
    units as f32 * font_size / 1000.0
}

/// Wraps `text` into lines no wider than `max_width` points.
///
/// Greedy word wrap on whitespace. A single word wider than the whole line
/// is hard-split at character boundaries so that no text is ever dropped.
/// Always returns at least one line.
pub fn wrap(text: &str, font_size: f32, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate_width = if current.is_empty() {
            text_width(word, font_size)
        } else {
            text_width(&current, font_size)
                + text_width(" ", font_size)
                + text_width(word, font_size)
        };

        if candidate_width <= max_width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        if text_width(word, font_size) <= max_width {
            current.push_str(word);
        } else {
            // Word alone exceeds the line: split it by characters.
            for c in word.chars() {
                let char_w = text_width(&c.to_string(), font_size);
                if !current.is_empty() && text_width(&current, font_size) + char_w > max_width {
                    lines.push(std::mem::take(&mut current));
                }
                current.push(c);
            }
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_width_scales_with_font_size() {
        let narrow = text_width("Hello", 10.0);
        let wide = text_width("Hello", 20.0);
        assert!((wide - narrow * 2.0).abs() < 0.001);
    }

    #[test]
    fn test_text_width_of_empty_string_is_zero() {
        assert_eq!(text_width("", 12.0), 0.0);
    }

    #[test]
    fn test_space_width_matches_table() {
        // 278/1000 of the size.
        assert!((text_width(" ", 12.0) - 3.336).abs() < 0.001);
    }

    #[test]
    fn test_non_ascii_uses_default_width() {
        assert!((text_width("한", 10.0) - 6.0).abs() < 0.001);
    }

    #[test]
    fn test_wrap_short_text_single_line() {
        let lines = wrap("Hello world", 12.0, 500.0);
        assert_eq!(lines, vec!["Hello world"]);
    }

    #[test]
    fn test_wrap_empty_text_returns_one_line() {
        let lines = wrap("", 12.0, 500.0);
        assert_eq!(lines, vec![""]);
    }

    #[test]
    fn test_wrap_breaks_on_word_boundaries() {
        let lines = wrap("one two three four five six seven eight", 12.0, 100.0);
        assert!(lines.len() > 1);
        // No word may be split when each fits a line on its own.
        for line in &lines {
            assert!(text_width(line, 12.0) <= 100.0);
        }
        let rejoined = lines.join(" ");
        assert_eq!(rejoined, "one two three four five six seven eight");
    }

    #[test]
    fn test_wrap_hard_splits_oversized_word() {
        let long_word = "a".repeat(200);
        let lines = wrap(&long_word, 12.0, 100.0);
        assert!(lines.len() > 1);
        let rejoined: String = lines.concat();
        assert_eq!(rejoined, long_word);
    }

    #[test]
    fn test_wrap_preserves_all_words() {
        let text = "The quick brown fox jumps over the lazy dog again and again";
        let lines = wrap(text, 12.0, 120.0);
        let words: Vec<&str> = text.split_whitespace().collect();
        let rewords: Vec<String> = lines
            .iter()
            .flat_map(|l| l.split_whitespace().map(str::to_owned))
            .collect();
        assert_eq!(words.len(), rewords.len());
    }
}
