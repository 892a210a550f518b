//! The sectioned source list — the main directory view.
//!
//! Renders the projection as titled sections (or one flat list), one entry
//! per source with a favorite marker and the site domain. The text-scale
//! preference decides the entry footprint: Small drops the domain, Medium
//! puts it inline, Large gives each entry a second line.

use crate::app::App;
use crate::catalog::SourceRecord;
use crate::filter::{EmptyReason, Projection, ViewMode};
use crate::prefs::TextSize;
use crate::util::links;
use crate::util::truncate_to_width;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// One display line of the list, pre-styled.
struct DisplayLine {
    line: Line<'static>,
    /// Entry index this line belongs to, if it is part of an entry.
    entry: Option<usize>,
}

/// Render the directory list panel.
pub fn render(f: &mut Frame, app: &mut App, area: Rect) {
    if area.width < 4 || area.height < 3 {
        return;
    }

    let projection = app.projection();
    let title = panel_title(app, &projection);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.chrome.style(if app.search_mode {
            "panel_border"
        } else {
            "panel_border_focused"
        }))
        .title(title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    if let Some(reason) = projection.empty {
        render_empty(f, app, inner, reason);
        return;
    }

    let lines = build_lines(app, &projection, inner.width as usize);

    // Keep the selected entry inside the viewport.
    let visible = inner.height as usize;
    let selected_start = lines
        .iter()
        .position(|l| l.entry == Some(app.selected))
        .unwrap_or(0);
    let selected_end = lines
        .iter()
        .rposition(|l| l.entry == Some(app.selected))
        .unwrap_or(selected_start);
    if selected_start < app.scroll_offset {
        app.scroll_offset = selected_start;
    } else if selected_end >= app.scroll_offset + visible {
        app.scroll_offset = selected_end + 1 - visible;
    }
    app.scroll_offset = app
        .scroll_offset
        .min(lines.len().saturating_sub(visible.max(1)));

    // Page size in entries, derived from the actual viewport.
    let lines_per_entry = match app.chrome.text_size() {
        TextSize::Small | TextSize::Medium => 1,
        TextSize::Large => 2,
    };
    app.list_visible_rows = (visible / lines_per_entry).max(1);

    let items: Vec<ListItem> = lines
        .into_iter()
        .skip(app.scroll_offset)
        .take(visible)
        .map(|l| ListItem::new(l.line))
        .collect();

    f.render_widget(List::new(items), inner);
}

/// Panel title for the current view.
fn panel_title(app: &App, projection: &Projection) -> String {
    let count = projection.entry_count();
    match (projection.mode, app.view.query.is_empty()) {
        (_, false) => format!(" Results ({}) ", count),
        (ViewMode::Sections, true) => " Directory ".to_string(),
        (ViewMode::All, true) => format!(" All Sources ({}) ", count),
        (ViewMode::Favorites, true) => format!(" Favorites ({}) ", count),
    }
}

/// Flatten the projection into styled display lines.
fn build_lines(app: &App, projection: &Projection, width: usize) -> Vec<DisplayLine> {
    let mut lines = Vec::new();
    let mut entry_index = 0usize;
    let section_count = projection.sections.len();

    for (si, section) in projection.sections.iter().enumerate() {
        if let Some(title) = section.title {
            lines.push(DisplayLine {
                line: Line::from(Span::styled(
                    title.to_string(),
                    app.chrome.style("section_heading"),
                )),
                entry: None,
            });
        }

        for source in &section.entries {
            push_entry_lines(app, &mut lines, source, entry_index, width);
            entry_index += 1;
        }

        if si + 1 < section_count {
            lines.push(DisplayLine {
                line: Line::from(""),
                entry: None,
            });
        }
    }

    lines
}

/// Push the display line(s) for one entry.
fn push_entry_lines(
    app: &App,
    lines: &mut Vec<DisplayLine>,
    source: &SourceRecord,
    entry_index: usize,
    width: usize,
) {
    let selected = entry_index == app.selected;
    let is_favorite = app.prefs.is_favorite(source.id);

    let marker = if is_favorite { "★ " } else { "  " };
    let marker_style = if selected {
        app.chrome.style("source_selected")
    } else {
        app.chrome.style("source_favorite")
    };
    let name_style = if selected {
        app.chrome.style("source_selected")
    } else {
        app.chrome.style("source_normal")
    };
    let domain_style = if selected {
        app.chrome.style("source_selected")
    } else {
        app.chrome.style("source_domain")
    };

    let domain = links::domain_of(source.website_url).unwrap_or_default();
    let name_budget = width.saturating_sub(2);

    match app.chrome.text_size() {
        TextSize::Small => {
            let name = truncate_to_width(source.name, name_budget).into_owned();
            lines.push(DisplayLine {
                line: Line::from(vec![
                    Span::styled(marker, marker_style),
                    Span::styled(name, name_style),
                ]),
                entry: Some(entry_index),
            });
        }
        TextSize::Medium => {
            // Name plus inline domain, domain sacrificed first when narrow.
            let name = truncate_to_width(source.name, name_budget).into_owned();
            let used = 2 + crate::util::display_width(&name);
            let domain_budget = width.saturating_sub(used + 2);
            let mut spans = vec![
                Span::styled(marker, marker_style),
                Span::styled(name, name_style),
            ];
            if !domain.is_empty() && domain_budget >= 4 {
                spans.push(Span::styled(
                    format!("  {}", truncate_to_width(&domain, domain_budget)),
                    domain_style,
                ));
            }
            lines.push(DisplayLine {
                line: Line::from(spans),
                entry: Some(entry_index),
            });
        }
        TextSize::Large => {
            let name = truncate_to_width(source.name, name_budget).into_owned();
            lines.push(DisplayLine {
                line: Line::from(vec![
                    Span::styled(marker, marker_style),
                    Span::styled(name, name_style),
                ]),
                entry: Some(entry_index),
            });
            let domain_line = format!("    {}", truncate_to_width(&domain, width.saturating_sub(4)));
            lines.push(DisplayLine {
                line: Line::from(Span::styled(domain_line, domain_style)),
                entry: Some(entry_index),
            });
        }
    }
}

/// Render the empty-state message. The two reasons are deliberately worded
/// differently so the user can tell "nothing saved" from "nothing matched".
fn render_empty(f: &mut Frame, app: &App, area: Rect, reason: EmptyReason) {
    let (title, hint) = match reason {
        EmptyReason::NoFavorites => (
            "No favorites yet",
            "Mark sources as favorites to see them here.",
        ),
        EmptyReason::NoMatches => ("No sources found", "Try a different search or view."),
    };

    let top_pad = (area.height.saturating_sub(3) / 2) as usize;
    let mut lines: Vec<Line> = std::iter::repeat_with(|| Line::from(""))
        .take(top_pad)
        .collect();
    lines.push(Line::from(Span::styled(title, app.chrome.style("empty_title"))));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(hint, app.chrome.style("empty_hint"))));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}
