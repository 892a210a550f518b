//! Startup splash screen.
//!
//! Shown for two seconds at launch (or until any key), mirroring the app's
//! branded loading state. Skipped entirely with `--no-splash` or
//! `splash = false` in config.

use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    text::Line,
    widgets::Paragraph,
    Frame,
};

pub fn render(f: &mut Frame, app: &App) {
    let area = f.area();
    if area.height < 5 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let title = Paragraph::new(vec![
        Line::from("সকল পত্রিকা"),
        Line::from("P A T R I K A"),
    ])
    .style(app.chrome.style("splash_title"))
    .alignment(Alignment::Center);
    f.render_widget(title, chunks[1]);

    let tagline = Paragraph::new(vec![
        Line::from(""),
        Line::from("All Bangladeshi newspapers in one place"),
        Line::from(""),
        Line::from("press any key"),
    ])
    .style(app.chrome.style("splash_tagline"))
    .alignment(Alignment::Center);
    f.render_widget(tagline, chunks[2]);
}
