//! The "more apps" panel: other tools by the same author.

use crate::app::App;
use ratatui::{
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::helpers::centered_fixed;

pub struct AppLink {
    pub name: &'static str,
    pub blurb: &'static str,
    pub url: &'static str,
}

/// Sibling projects shown in the panel.
pub const MORE_APPS: &[AppLink] = &[
    AppLink {
        name: "skim",
        blurb: "Terminal RSS reader with clean article view",
        url: "https://github.com/dhofheinz/skim",
    },
    AppLink {
        name: "patrika",
        blurb: "This app — star it if you find it useful",
        url: "https://github.com/dhofheinz/patrika",
    },
];

pub fn render(f: &mut Frame, app: &App, selected: usize) {
    let area = f.area();
    let overlay = centered_fixed(54, (MORE_APPS.len() as u16) * 3 + 4, area);
    if overlay.width < 24 || overlay.height < 6 {
        return;
    }

    f.render_widget(Clear, overlay);

    let mut lines = vec![Line::from("")];
    for (i, link) in MORE_APPS.iter().enumerate() {
        let (name_style, blurb_style) = if i == selected {
            (
                app.chrome.style("overlay_selected"),
                app.chrome.style("overlay_selected"),
            )
        } else {
            (
                app.chrome.style("overlay_text"),
                app.chrome.style("overlay_dim"),
            )
        };
        let prefix = if i == selected { "> " } else { "  " };
        lines.push(Line::from(Span::styled(
            format!("{}{}", prefix, link.name),
            name_style,
        )));
        lines.push(Line::from(Span::styled(
            format!("    {}", link.blurb),
            blurb_style,
        )));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(app.chrome.style("panel_border_focused"))
            .title(" More Apps "),
    );

    f.render_widget(paragraph, overlay);
}
