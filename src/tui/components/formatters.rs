// Text formatters
//
// Shared formatting utilities for numbers, scores and width-limited labels.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Format a number compactly with K/M suffixes
///
/// # Examples
/// ```ignore
/// assert_eq!(format_compact_number(10_000.0), "10K");
/// assert_eq!(format_compact_number(1_500_000.0), "1.5M");
/// assert_eq!(format_compact_number(187.0), "187");
/// ```
pub fn format_compact_number(n: f64) -> String {
    if n >= 1_000_000.0 {
        format!("{:.1}M", n / 1_000_000.0)
    } else if n >= 1_000.0 {
        format!("{:.0}K", n / 1_000.0)
    } else {
        format!("{:.0}", n)
    }
}

/// A fixed-width bar for a 0-100 score, e.g. `"███████░░░"` for 70 at width 10
pub fn score_bar(score: u8, width: usize) -> String {
    let filled = (usize::from(score.min(100)) * width + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Cut `s` to at most `max` display columns, ending with `…` when shortened
pub fn truncate_to_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
