//! Keyboard input handling.
//!
//! Routing order: splash (any key dismisses) → active overlay → search mode
//! (plain characters edit the query, so registry lookup only runs for
//! non-character keys) → the directory keybinding registry.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyModifiers};

use crate::app::{App, Overlay};
use crate::filter::ViewMode;
use crate::keybindings::{Action as KeyAction, Context};
use crate::prefs::TextSize;
use crate::util::links;

use super::loop_runner::Action;
use super::{apps, menu, settings};

/// Maximum search query length (UI layer validation). Source names are
/// short; anything longer than this can never match.
const MAX_SEARCH_LENGTH: usize = 64;

/// Handle a key press. Returns `Action::Quit` to terminate the event loop.
pub async fn handle_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Result<Action> {
    // Any key skips the splash.
    if app.splash_visible() {
        app.dismiss_splash();
        return Ok(Action::Continue);
    }

    if app.overlay.is_some() {
        handle_overlay_input(app, code).await;
        return Ok(Action::Continue);
    }

    if app.search_mode {
        handle_search_input(app, code, modifiers);
        return Ok(Action::Continue);
    }

    let Some(action) = app.keybindings.resolve(Context::Directory, code, modifiers) else {
        return Ok(Action::Continue);
    };

    match action {
        KeyAction::Quit => return Ok(Action::Quit),
        KeyAction::NavDown => app.nav_down(),
        KeyAction::NavUp => app.nav_up(),
        KeyAction::PageDown => app.page_down(),
        KeyAction::PageUp => app.page_up(),
        KeyAction::OpenWebsite => app.open_selected_website(),
        KeyAction::ToggleFavorite => app.toggle_favorite_selected().await,
        KeyAction::EnterSearch => app.enter_search(),
        KeyAction::CycleView => app.cycle_mode(),
        KeyAction::ViewSections => app.set_mode(ViewMode::Sections),
        KeyAction::ViewAll => app.set_mode(ViewMode::All),
        KeyAction::ViewFavorites => app.set_mode(ViewMode::Favorites),
        KeyAction::ToggleDarkMode => app.toggle_dark_mode().await,
        KeyAction::ToggleFullscreen => app.toggle_fullscreen(),
        KeyAction::OpenSettings => app.overlay = Some(Overlay::Settings { selected: 0 }),
        KeyAction::OpenMenu => app.overlay = Some(Overlay::Menu { selected: 0 }),
        KeyAction::ShowHelp => app.overlay = Some(Overlay::Help { scroll: 0 }),
        KeyAction::Back => {
            // Esc with a sticky filter clears it; otherwise nothing to do.
            if !app.view.query.is_empty() {
                app.set_search_query(String::new());
            }
        }
        // Search-context actions never reach directory dispatch.
        KeyAction::ExitSearch | KeyAction::CommitSearch => {}
    }

    app.needs_redraw = true;
    Ok(Action::Continue)
}

/// Search mode: characters edit the query live; everything else goes
/// through the Search-context bindings.
fn handle_search_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    match code {
        KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => {
            if app.view.query.chars().count() < MAX_SEARCH_LENGTH {
                app.push_search_char(c);
            }
        }
        KeyCode::Backspace => app.pop_search_char(),
        _ => {
            if let Some(action) = app.keybindings.resolve(Context::Search, code, modifiers) {
                match action {
                    KeyAction::ExitSearch => app.cancel_search(),
                    KeyAction::CommitSearch => app.commit_search(),
                    _ => {}
                }
            }
        }
    }
}

/// Overlay-internal navigation is deliberately hardcoded (j/k/arrows,
/// Enter, Esc) rather than rebindable.
async fn handle_overlay_input(app: &mut App, code: KeyCode) {
    let Some(overlay) = app.overlay else {
        return;
    };
    app.needs_redraw = true;

    match overlay {
        Overlay::Settings { selected } => match code {
            KeyCode::Esc => app.overlay = None,
            KeyCode::Char('j') | KeyCode::Down => {
                app.overlay = Some(Overlay::Settings {
                    selected: (selected + 1).min(settings::ROW_COUNT - 1),
                });
            }
            KeyCode::Char('k') | KeyCode::Up => {
                app.overlay = Some(Overlay::Settings {
                    selected: selected.saturating_sub(1),
                });
            }
            KeyCode::Left if selected == settings::ROW_TEXT_SIZE => {
                app.set_text_size(step_size(app.prefs.text_size(), -1)).await;
            }
            KeyCode::Right if selected == settings::ROW_TEXT_SIZE => {
                app.set_text_size(step_size(app.prefs.text_size(), 1)).await;
            }
            KeyCode::Enter | KeyCode::Char(' ') => match selected {
                settings::ROW_DARK_MODE => app.toggle_dark_mode().await,
                settings::ROW_TEXT_SIZE => {
                    app.set_text_size(cycle_size(app.prefs.text_size())).await;
                }
                settings::ROW_DISPLAY => app.toggle_fullscreen(),
                _ => {}
            },
            _ => {}
        },

        Overlay::Menu { selected } => match code {
            KeyCode::Esc => app.overlay = None,
            KeyCode::Char('j') | KeyCode::Down => {
                app.overlay = Some(Overlay::Menu {
                    selected: (selected + 1).min(menu::MENU_ITEMS.len() - 1),
                });
            }
            KeyCode::Char('k') | KeyCode::Up => {
                app.overlay = Some(Overlay::Menu {
                    selected: selected.saturating_sub(1),
                });
            }
            KeyCode::Enter => activate_menu_item(app, selected),
            _ => {}
        },

        Overlay::Help { scroll } => match code {
            KeyCode::Esc | KeyCode::Char('?') => app.overlay = None,
            KeyCode::Char('j') | KeyCode::Down => {
                app.overlay = Some(Overlay::Help { scroll: scroll + 1 });
            }
            KeyCode::Char('k') | KeyCode::Up => {
                app.overlay = Some(Overlay::Help {
                    scroll: scroll.saturating_sub(1),
                });
            }
            _ => {}
        },

        Overlay::About { scroll } => {
            if let Some(next) = scroll_text_overlay(code, scroll) {
                app.overlay = next.map(|scroll| Overlay::About { scroll });
            }
        }
        Overlay::Privacy { scroll } => {
            if let Some(next) = scroll_text_overlay(code, scroll) {
                app.overlay = next.map(|scroll| Overlay::Privacy { scroll });
            }
        }
        Overlay::Terms { scroll } => {
            if let Some(next) = scroll_text_overlay(code, scroll) {
                app.overlay = next.map(|scroll| Overlay::Terms { scroll });
            }
        }

        Overlay::Apps { selected } => match code {
            KeyCode::Esc => app.overlay = None,
            KeyCode::Char('j') | KeyCode::Down => {
                app.overlay = Some(Overlay::Apps {
                    selected: (selected + 1).min(apps::MORE_APPS.len() - 1),
                });
            }
            KeyCode::Char('k') | KeyCode::Up => {
                app.overlay = Some(Overlay::Apps {
                    selected: selected.saturating_sub(1),
                });
            }
            KeyCode::Enter => {
                if let Some(link) = apps::MORE_APPS.get(selected) {
                    if links::open_in_browser(link.url) {
                        app.set_status(format!("Opening {}", link.name));
                    } else {
                        app.set_status("Could not open browser");
                    }
                }
            }
            _ => {}
        },
    }
}

/// Shared scroll handling for the plain-text overlays.
///
/// Returns `None` if the key was not handled, `Some(None)` to close, and
/// `Some(Some(scroll))` for a new scroll position. Over-scrolling is fine —
/// the renderer clamps to the wrapped line count.
fn scroll_text_overlay(code: KeyCode, scroll: usize) -> Option<Option<usize>> {
    match code {
        KeyCode::Esc => Some(None),
        KeyCode::Char('j') | KeyCode::Down => Some(Some(scroll + 1)),
        KeyCode::Char('k') | KeyCode::Up => Some(Some(scroll.saturating_sub(1))),
        _ => None,
    }
}

fn activate_menu_item(app: &mut App, index: usize) {
    match index {
        0 => {
            // Feedback
            let ok = links::compose_mail(
                links::FEEDBACK_EMAIL,
                "Feedback on patrika",
                "\n\n--\nsent from patrika",
            );
            app.set_status(if ok {
                "Opening mail client"
            } else {
                "Could not open mail client"
            });
            app.overlay = None;
        }
        1 => {
            // Share: the terminal analog of the share-sheet-then-clipboard
            // chain — copy the app link.
            let ok = links::copy_to_clipboard(links::APP_HOME_URL);
            app.set_status(if ok {
                "App link copied to clipboard"
            } else {
                "Clipboard unavailable"
            });
            app.overlay = None;
        }
        2 => app.overlay = Some(Overlay::About { scroll: 0 }),
        3 => app.overlay = Some(Overlay::Privacy { scroll: 0 }),
        4 => app.overlay = Some(Overlay::Terms { scroll: 0 }),
        5 => app.overlay = Some(Overlay::Apps { selected: 0 }),
        _ => {}
    }
}

/// Step the text size within bounds (no wrap) for ←/→ in settings.
fn step_size(current: TextSize, delta: i32) -> TextSize {
    let idx = TextSize::ALL
        .iter()
        .position(|s| *s == current)
        .unwrap_or(1) as i32;
    let next = (idx + delta).clamp(0, TextSize::ALL.len() as i32 - 1) as usize;
    TextSize::ALL[next]
}

/// Cycle the text size with wrap-around for Enter in settings.
fn cycle_size(current: TextSize) -> TextSize {
    let idx = TextSize::ALL
        .iter()
        .position(|s| *s == current)
        .unwrap_or(1);
    TextSize::ALL[(idx + 1) % TextSize::ALL.len()]
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::chrome::TermChrome;
    use crate::config::Config;
    use crate::prefs::PreferenceStore;
    use tokio::sync::mpsc;

    fn test_app(show_splash: bool) -> App {
        // Receiver dropped immediately: chrome sends fail silently, which
        // these tests never observe.
        let (tx, _rx) = mpsc::channel(8);
        let config = Config::default();
        let prefs = PreferenceStore::from_config(&config);
        let chrome = TermChrome::new(tx);
        App::new(Catalog::bundled(), prefs, chrome, &config, show_splash)
    }

    async fn press(app: &mut App, code: KeyCode) -> Action {
        handle_input(app, code, KeyModifiers::NONE).await.unwrap()
    }

    #[tokio::test]
    async fn q_quits_from_directory() {
        let mut app = test_app(false);
        assert!(matches!(press(&mut app, KeyCode::Char('q')).await, Action::Quit));
    }

    #[tokio::test]
    async fn any_key_dismisses_splash_without_acting() {
        let mut app = test_app(true);
        // 'q' during splash dismisses it instead of quitting.
        assert!(matches!(
            press(&mut app, KeyCode::Char('q')).await,
            Action::Continue
        ));
        assert!(!app.splash_visible());
    }

    #[tokio::test]
    async fn typing_q_in_search_does_not_quit() {
        let mut app = test_app(false);
        assert!(matches!(press(&mut app, KeyCode::Char('/')).await, Action::Continue));
        assert!(app.search_mode);

        let action = press(&mut app, KeyCode::Char('q')).await;
        assert!(matches!(action, Action::Continue));
        assert_eq!(app.view.query, "q");
    }

    #[tokio::test]
    async fn esc_clears_search_and_exits() {
        let mut app = test_app(false);
        press(&mut app, KeyCode::Char('/')).await;
        press(&mut app, KeyCode::Char('a')).await;
        press(&mut app, KeyCode::Esc).await;

        assert!(!app.search_mode);
        assert!(app.view.query.is_empty());
    }

    #[tokio::test]
    async fn enter_commits_search_keeping_query() {
        let mut app = test_app(false);
        press(&mut app, KeyCode::Char('/')).await;
        press(&mut app, KeyCode::Char('t')).await;
        press(&mut app, KeyCode::Enter).await;

        assert!(!app.search_mode);
        assert_eq!(app.view.query, "t");
    }

    #[tokio::test]
    async fn settings_overlay_opens_and_toggles_dark_mode() {
        let mut app = test_app(false);
        press(&mut app, KeyCode::Char('s')).await;
        assert!(matches!(app.overlay, Some(Overlay::Settings { selected: 0 })));

        press(&mut app, KeyCode::Enter).await;
        assert!(app.prefs.dark_mode());

        press(&mut app, KeyCode::Esc).await;
        assert!(app.overlay.is_none());
    }

    #[tokio::test]
    async fn menu_routes_to_legal_overlays() {
        let mut app = test_app(false);
        press(&mut app, KeyCode::Char('m')).await;
        assert!(matches!(app.overlay, Some(Overlay::Menu { selected: 0 })));

        // Move to "Privacy Policy" (index 3) and open it.
        for _ in 0..3 {
            press(&mut app, KeyCode::Char('j')).await;
        }
        press(&mut app, KeyCode::Enter).await;
        assert!(matches!(app.overlay, Some(Overlay::Privacy { scroll: 0 })));

        press(&mut app, KeyCode::Esc).await;
        assert!(app.overlay.is_none());
    }

    #[tokio::test]
    async fn view_switch_keys() {
        let mut app = test_app(false);
        press(&mut app, KeyCode::Char('2')).await;
        assert_eq!(app.view.mode, ViewMode::All);
        press(&mut app, KeyCode::Char('3')).await;
        assert_eq!(app.view.mode, ViewMode::Favorites);
        press(&mut app, KeyCode::Tab).await;
        assert_eq!(app.view.mode, ViewMode::Sections);
    }

    #[tokio::test]
    async fn settings_size_row_steps_with_arrows() {
        let mut app = test_app(false);
        press(&mut app, KeyCode::Char('s')).await;
        press(&mut app, KeyCode::Char('j')).await; // to text size row

        press(&mut app, KeyCode::Right).await;
        assert_eq!(app.prefs.text_size(), TextSize::Large);
        press(&mut app, KeyCode::Right).await; // clamped at Large
        assert_eq!(app.prefs.text_size(), TextSize::Large);
        press(&mut app, KeyCode::Left).await;
        assert_eq!(app.prefs.text_size(), TextSize::Medium);
    }

    #[test]
    fn size_stepping_helpers() {
        assert_eq!(step_size(TextSize::Medium, 1), TextSize::Large);
        assert_eq!(step_size(TextSize::Large, 1), TextSize::Large);
        assert_eq!(step_size(TextSize::Small, -1), TextSize::Small);
        assert_eq!(cycle_size(TextSize::Large), TextSize::Small);
    }
}
