//! Settings overlay: dark mode, text size, display mode.
//!
//! The overlay edits preferences through the app's setters, so every change
//! commits, persists, and synchronizes the chrome in the same keypress.

use crate::app::App;
use crate::prefs::TextSize;
use ratatui::{
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::helpers::centered_fixed;

/// Row indices in the settings overlay.
pub const ROW_DARK_MODE: usize = 0;
pub const ROW_TEXT_SIZE: usize = 1;
pub const ROW_DISPLAY: usize = 2;
pub const ROW_COUNT: usize = 3;

pub fn render(f: &mut Frame, app: &App, selected: usize) {
    let area = f.area();
    let overlay = centered_fixed(46, 11, area);
    if overlay.width < 24 || overlay.height < 7 {
        return;
    }

    f.render_widget(Clear, overlay);

    let row_style = |row: usize| {
        if row == selected {
            app.chrome.style("overlay_selected")
        } else {
            app.chrome.style("overlay_text")
        }
    };

    let dark_label = if app.prefs.dark_mode() { "on" } else { "off" };
    let display_label = if app.prefs.fullscreen() {
        "Exit Full Screen"
    } else {
        "Enter Full Screen"
    };

    // Text size selector: the active scale is highlighted.
    let mut size_spans = vec![Span::styled("  Text Size     ", row_style(ROW_TEXT_SIZE))];
    for size in TextSize::ALL {
        let style = if size == app.prefs.text_size() {
            app.chrome.style("tab_active")
        } else {
            row_style(ROW_TEXT_SIZE)
        };
        size_spans.push(Span::styled(format!(" {} ", size.name()), style));
    }

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  Dark Mode      [{}]", dark_label),
            row_style(ROW_DARK_MODE),
        )),
        Line::from(""),
        Line::from(size_spans),
        Line::from(""),
        Line::from(Span::styled(
            format!("  Display Mode   {}", display_label),
            row_style(ROW_DISPLAY),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  j/k move · Enter apply · ←/→ size · Esc close",
            app.chrome.style("overlay_dim"),
        )),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(app.chrome.style("panel_border_focused"))
            .title(" Settings "),
    );

    f.render_widget(paragraph, overlay);
}
