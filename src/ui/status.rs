use crate::app::App;
use ratatui::{layout::Rect, widgets::Paragraph, Frame};
use std::borrow::Cow;

/// Render the status bar
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    // Guard against zero-width/height areas
    if area.width < 1 || area.height < 1 {
        return;
    }

    // Cow avoids allocations for the static hint strings
    let text: Cow<'_, str> = if let Some((msg, _)) = &app.status_message {
        Cow::Borrowed(msg.as_ref())
    } else if app.search_mode {
        Cow::Borrowed("Type to filter | ESC clear | ENTER confirm")
    } else if app.overlay.is_some() {
        Cow::Borrowed("[j/k]move [Enter]select [Esc]close")
    } else {
        Cow::Borrowed("[/]search [f]avorite [Tab]view [o]pen [s]ettings [m]enu [?]help [q]uit")
    };

    let paragraph = Paragraph::new(text).style(app.chrome.style("status_bar"));
    f.render_widget(paragraph, area);
}
