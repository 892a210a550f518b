use std::borrow::Cow;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of a string in terminal columns.
///
/// Unicode-aware: Bangla and CJK glyphs, emoji, and combining marks all
/// measure correctly, which matters for source names like "প্রথম আলো".
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Ellipsis appended when truncation is necessary.
const ELLIPSIS: &str = "...";
const ELLIPSIS_WIDTH: usize = 3;

/// Truncate a string to fit within `max_width` terminal columns, appending
/// "..." when text was cut off.
///
/// Returns `Cow::Borrowed` (no allocation) when the string already fits.
/// For widths of 3 columns or fewer there is no room for "char + ellipsis",
/// so as many whole characters as fit are returned without an ellipsis.
pub fn truncate_to_width(s: &str, max_width: usize) -> Cow<'_, str> {
    if max_width == 0 {
        return Cow::Borrowed("");
    }
    if display_width(s) <= max_width {
        return Cow::Borrowed(s);
    }

    let budget = if max_width <= ELLIPSIS_WIDTH {
        max_width
    } else {
        max_width - ELLIPSIS_WIDTH
    };

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(c);
        used += w;
    }

    if max_width > ELLIPSIS_WIDTH {
        out.push_str(ELLIPSIS);
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_width() {
        assert_eq!(display_width("Prothom Alo"), 11);
    }

    #[test]
    fn wide_glyphs_count_double() {
        assert_eq!(display_width("你好"), 4);
    }

    #[test]
    fn fits_returns_borrowed() {
        let result = truncate_to_width("Short", 10);
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result, "Short");
    }

    #[test]
    fn truncates_with_ellipsis() {
        assert_eq!(truncate_to_width("The Daily Ittefaq", 10), "The Dai...");
    }

    #[test]
    fn zero_width_is_empty() {
        assert_eq!(truncate_to_width("anything", 0), "");
    }

    #[test]
    fn tiny_widths_have_no_ellipsis() {
        assert_eq!(truncate_to_width("abcdef", 2), "ab");
        assert_eq!(truncate_to_width("abcdef", 3), "abc");
    }

    #[test]
    fn truncated_output_never_exceeds_width() {
        for width in 0..20 {
            let out = truncate_to_width("The Financial Express", width);
            assert!(display_width(&out) <= width, "width {} broken", width);
        }
    }

    #[test]
    fn wide_glyph_never_split_past_budget() {
        // Each glyph is 2 columns; at width 5 only two glyphs (4 cols) fit
        // alongside nothing — the ellipsis takes 3, leaving budget 2.
        let out = truncate_to_width("你好你好你好", 5);
        assert!(display_width(&out) <= 5);
    }
}
