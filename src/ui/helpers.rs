//! Helper functions and constants for UI rendering

use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

/// Spinner frames for the loading line
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner frame for a tick count
pub fn spinner_frame(tick: u64) -> &'static str {
    SPINNER_FRAMES[(tick as usize / 4) % SPINNER_FRAMES.len()]
}

/// Get inner rect with margin
pub fn inner_rect(area: Rect, margin: u16) -> Rect {
    Rect {
        x: area.x + margin,
        y: area.y + margin,
        width: area.width.saturating_sub(margin * 2),
        height: area.height.saturating_sub(margin * 2),
    }
}

/// Rect of `width` x `height` centered in `area`, clamped to it.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Truncate to `max_width` display columns, ending with "…" when cut.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Rows `text` takes when word-wrapped to `width` columns.
///
/// Counts each hard line as `ceil(width_of_line / width)` rows, which
/// matches the wrapped paragraph closely enough for bottom anchoring.
pub fn estimate_wrapped_line_count(text: &str, width: u16) -> usize {
    let width = width.max(1) as usize;
    text.split('\n')
        .map(|line| line.width().div_ceil(width).max(1))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("Lobo", 10), "Lobo");
        assert_eq!(truncate_string("Lobo Sombrio", 6), "Lobo …");
        assert_eq!(truncate_string("abc", 0), "");
    }

    #[test]
    fn test_wrapped_line_count() {
        assert_eq!(estimate_wrapped_line_count("", 10), 1);
        assert_eq!(estimate_wrapped_line_count("0123456789", 10), 1);
        assert_eq!(estimate_wrapped_line_count("0123456789a", 10), 2);
        assert_eq!(estimate_wrapped_line_count("a\nb", 10), 2);
    }

    #[test]
    fn test_centered_rect_clamps() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered_rect(area, 10, 4), Rect::new(5, 3, 10, 4));
        assert_eq!(centered_rect(area, 40, 40), area);
    }

    #[test]
    fn test_spinner_cycles() {
        assert_eq!(spinner_frame(0), SPINNER_FRAMES[0]);
        assert_eq!(spinner_frame(4), SPINNER_FRAMES[1]);
        assert_eq!(spinner_frame(40), SPINNER_FRAMES[0]);
    }
}
