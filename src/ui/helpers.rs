//! Shared layout utilities for overlay rendering.

use ratatui::layout::Rect;

/// Create a centered rectangle with the given percentage of the parent area.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let width = area.width * percent_x / 100;
    let height = area.height * percent_y / 100;
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Create a centered rectangle of fixed size, clamped to the parent area.
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width.saturating_sub(2));
    let height = height.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_centered() {
        let area = Rect::new(0, 0, 100, 40);
        let overlay = centered_rect(50, 50, area);
        assert_eq!(overlay.width, 50);
        assert_eq!(overlay.height, 20);
        assert_eq!(overlay.x, 25);
        assert_eq!(overlay.y, 10);
    }

    #[test]
    fn centered_fixed_clamps_to_parent() {
        let area = Rect::new(0, 0, 20, 10);
        let overlay = centered_fixed(60, 30, area);
        assert!(overlay.width <= area.width);
        assert!(overlay.height <= area.height);
    }
}
