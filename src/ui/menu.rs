//! The "more" menu overlay.
//!
//! Mirrors the app's kebab menu: feedback, sharing, the legal texts, and
//! the more-apps panel. Selection is by index into [`MENU_ITEMS`]; the
//! input handler maps indices to actions.

use crate::app::App;
use ratatui::{
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::helpers::centered_fixed;

/// Menu entries, in display order.
pub const MENU_ITEMS: &[&str] = &[
    "Feedback",
    "Share this app",
    "About",
    "Privacy Policy",
    "Terms of Use",
    "More apps",
];

pub fn render(f: &mut Frame, app: &App, selected: usize) {
    let area = f.area();
    let overlay = centered_fixed(30, MENU_ITEMS.len() as u16 + 4, area);
    if overlay.width < 16 || overlay.height < 5 {
        return;
    }

    f.render_widget(Clear, overlay);

    let mut lines = vec![Line::from("")];
    for (i, item) in MENU_ITEMS.iter().enumerate() {
        let style = if i == selected {
            app.chrome.style("overlay_selected")
        } else {
            app.chrome.style("overlay_text")
        };
        let prefix = if i == selected { "> " } else { "  " };
        lines.push(Line::from(Span::styled(
            format!("{}{}", prefix, item),
            style,
        )));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(app.chrome.style("panel_border_focused"))
            .title(" Menu "),
    );

    f.render_widget(paragraph, overlay);
}
