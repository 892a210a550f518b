//! Scrollable text overlays: about, privacy policy, terms of use.

use crate::app::App;
use ratatui::{
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::helpers::centered_rect;

pub const ABOUT_TEXT: &str = "\
patrika is a terminal directory of Bangladeshi news sources: national and \
regional dailies, ePapers, online portals, TV channels, magazines, blogs, \
and more, grouped into browsable sections.

The catalog is built into the program. patrika never fetches content on its \
own; selecting a source simply opens its website in your browser.

Favorites and display preferences are stored locally in \
~/.config/patrika and never leave your machine.";

pub const PRIVACY_TEXT: &str = "\
Privacy Policy

patrika collects no personal data, runs no analytics, and makes no network \
requests of its own.

The only data the application stores is your own preferences — favorites, \
theme, and text size — kept in a local database under ~/.config/patrika on \
this machine. Deleting that directory removes everything the application \
knows about you.

Following a link from the directory opens the publisher's website in your \
browser; from that point the publisher's own privacy policy applies. \
patrika is not responsible for the practices of third-party sites.";

pub const TERMS_TEXT: &str = "\
Terms of Use

patrika is a link directory. All newspapers, portals, and channels listed \
in it are the property of their respective publishers; patrika is not \
affiliated with any of them and does not host, cache, or modify their \
content.

The directory is provided in the hope that it is useful, but without \
warranty of any kind. Listings may go stale as publishers move or retire \
their sites.

The software itself is released under the MIT license; see the LICENSE \
file in the source distribution.";

/// Render a scrollable text overlay. `scroll` is clamped to the wrapped
/// line count so over-scrolling from the input handler is harmless.
pub fn render(f: &mut Frame, app: &App, title: &str, text: &str, scroll: usize) {
    let area = f.area();
    let overlay = centered_rect(70, 70, area);
    if overlay.width < 24 || overlay.height < 6 {
        return;
    }

    f.render_widget(Clear, overlay);

    // Rough wrapped-line estimate for the scroll clamp.
    let inner_width = overlay.width.saturating_sub(2).max(1) as usize;
    let total_lines: usize = text
        .lines()
        .map(|l| (crate::util::display_width(l).max(1)).div_ceil(inner_width))
        .sum();
    let visible = overlay.height.saturating_sub(2) as usize;
    let max_scroll = total_lines.saturating_sub(visible);
    let scroll = scroll.min(max_scroll) as u16;

    let paragraph = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .style(app.chrome.style("overlay_text"))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(app.chrome.style("panel_border_focused"))
                .title(title.to_string()),
        );

    f.render_widget(paragraph, overlay);
}
