//! Render functions for the TUI.
//!
//! This module handles all rendering logic, dispatching to the appropriate
//! view based on application state.

use crate::app::{App, Overlay};
use crate::filter::ViewMode;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{apps, directory, help, legal, menu, settings, splash, status};

/// Minimum terminal dimensions required for normal operation.
pub(super) const MIN_WIDTH: u16 = 40;
pub(super) const MIN_HEIGHT: u16 = 8;

/// Main render dispatch function.
///
/// Routes to the splash or directory view, then layers the active overlay.
/// Handles terminal size validation before rendering.
pub(super) fn render(f: &mut Frame, app: &mut App) {
    let area = f.area();

    // Guard against zero-width/height to prevent panics
    if area.width < 1 || area.height < 1 {
        return;
    }

    // Minimum terminal size check for a usable UI
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = if area.height < 3 || area.width < 20 {
            Paragraph::new("Too small")
        } else {
            Paragraph::new(format!(
                "Terminal too small\n\nMinimum: {}x{}\nCurrent: {}x{}",
                MIN_WIDTH, MIN_HEIGHT, area.width, area.height
            ))
            .alignment(Alignment::Center)
        };
        f.render_widget(msg, area);
        return;
    }

    if app.splash_visible() {
        splash::render(f, app);
        return;
    }

    render_directory_view(f, app);

    // Layer the active overlay on top
    match app.overlay {
        Some(Overlay::Settings { selected }) => settings::render(f, app, selected),
        Some(Overlay::Menu { selected }) => menu::render(f, app, selected),
        Some(Overlay::Help { scroll }) => help::render(f, app, scroll),
        Some(Overlay::About { scroll }) => {
            legal::render(f, app, " About ", legal::ABOUT_TEXT, scroll)
        }
        Some(Overlay::Privacy { scroll }) => {
            legal::render(f, app, " Privacy Policy ", legal::PRIVACY_TEXT, scroll)
        }
        Some(Overlay::Terms { scroll }) => {
            legal::render(f, app, " Terms of Use ", legal::TERMS_TEXT, scroll)
        }
        Some(Overlay::Apps { selected }) => apps::render(f, app, selected),
        None => {}
    }
}

/// The main view: header + search line + directory list + status bar.
///
/// Fullscreen (zen) hides the header and search chrome, giving the list the
/// whole frame; the flag is the host-confirmed one from the preference store.
fn render_directory_view(f: &mut Frame, app: &mut App) {
    let area = f.area();

    if app.prefs.fullscreen() {
        let chunks = ratatui::layout::Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);
        directory::render(f, app, chunks[0]);
        status::render(f, app, chunks[1]);
        return;
    }

    let chunks = ratatui::layout::Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(f, app, chunks[0]);
    render_search_line(f, app, chunks[1]);
    directory::render(f, app, chunks[2]);
    status::render(f, app, chunks[3]);
}

/// Title line plus the view-mode switcher tabs.
fn render_header(f: &mut Frame, app: &App, area: Rect) {
    if area.height < 2 {
        return;
    }

    let title = Paragraph::new(Line::from(vec![
        Span::styled("পত্রিকা", app.chrome.style("section_heading")),
        Span::styled(
            "  ·  all Bangladeshi newspapers in one place",
            app.chrome.style("source_domain"),
        ),
    ]));
    f.render_widget(title, Rect { height: 1, ..area });

    let mut spans: Vec<Span> = Vec::new();
    for mode in [ViewMode::Sections, ViewMode::All, ViewMode::Favorites] {
        let label = if mode == ViewMode::Favorites && app.prefs.favorite_count() > 0 {
            format!(" {} ({}) ", mode.name(), app.prefs.favorite_count())
        } else {
            format!(" {} ", mode.name())
        };
        let style = if app.view.mode == mode {
            app.chrome.style("tab_active")
        } else {
            app.chrome.style("tab_inactive")
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled("(Tab or 1/2/3)", app.chrome.style("overlay_dim")));

    let tabs = Paragraph::new(Line::from(spans));
    f.render_widget(
        tabs,
        Rect {
            y: area.y + 1,
            height: 1,
            ..area
        },
    );
}

/// The search line under the tabs: active input, a sticky filter, or a hint.
fn render_search_line(f: &mut Frame, app: &App, area: Rect) {
    let line = if app.search_mode {
        Line::from(vec![
            Span::styled("/ ", app.chrome.style("search_prompt")),
            Span::styled(app.view.query.clone(), app.chrome.style("source_normal")),
            Span::styled("_", app.chrome.style("search_prompt")),
        ])
    } else if !app.view.query.is_empty() {
        Line::from(vec![
            Span::styled("/ ", app.chrome.style("search_prompt")),
            Span::styled(app.view.query.clone(), app.chrome.style("source_normal")),
            Span::styled("  (press / to edit)", app.chrome.style("overlay_dim")),
        ])
    } else {
        Line::from(Span::styled(
            "Press / to search",
            app.chrome.style("overlay_dim"),
        ))
    };

    f.render_widget(Paragraph::new(line), area);
}
