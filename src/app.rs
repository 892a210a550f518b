//! Central application state: the view controller.
//!
//! `App` owns the transient view state (mode, search query, selection,
//! overlay stack, splash) and orchestrates the preference store, catalog,
//! and filter engine into the projection the UI renders. Mode and search
//! query are orthogonal dimensions — changing one never clears the other;
//! `filter::compute_view` decides how they interact.

use std::borrow::Cow;
use std::time::Duration;

use tokio::time::Instant;

use crate::catalog::{Catalog, SourceRecord};
use crate::chrome::{Chrome, ChromeEvent, TermChrome};
use crate::config::Config;
use crate::filter::{compute_view, Projection, ViewMode, ViewState};
use crate::keybindings::KeybindingRegistry;
use crate::prefs::PreferenceStore;
use crate::util::links;

/// How long the splash screen stays up before the directory appears.
pub const SPLASH_DURATION: Duration = Duration::from_secs(2);

/// How long a status message stays visible.
const STATUS_DURATION: Duration = Duration::from_secs(3);

// ============================================================================
// Overlays
// ============================================================================

/// Modal overlay stack. At most one overlay is open; input is routed to it
/// instead of the directory while it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    /// Settings: dark mode, text size, fullscreen.
    Settings { selected: usize },
    /// The "more" menu: feedback, share, about, legal, apps.
    Menu { selected: usize },
    /// Keybinding help table.
    Help { scroll: usize },
    /// About text.
    About { scroll: usize },
    /// Privacy policy text.
    Privacy { scroll: usize },
    /// Terms of use text.
    Terms { scroll: usize },
    /// "More apps" panel.
    Apps { selected: usize },
}

// ============================================================================
// Application State
// ============================================================================

/// Central application state.
pub struct App {
    pub catalog: Catalog,
    pub prefs: PreferenceStore,
    pub chrome: TermChrome,
    pub keybindings: KeybindingRegistry,

    // View state (session-only)
    pub view: ViewState,
    /// Whether keystrokes currently edit the search query.
    pub search_mode: bool,
    /// Selection index over the flattened visible entries.
    pub selected: usize,
    /// First visible row of the directory list (kept by the renderer).
    pub scroll_offset: usize,
    /// Rows the directory list can show; updated during rendering so paging
    /// and scroll clamping match the actual viewport.
    pub list_visible_rows: usize,

    pub overlay: Option<Overlay>,

    /// Splash screen deadline; `None` once dismissed.
    splash_deadline: Option<Instant>,

    /// Status message with expiry — Cow avoids allocation for static literals.
    pub status_message: Option<(Cow<'static, str>, Instant)>,

    /// Dirty flag to skip unnecessary frame renders.
    pub needs_redraw: bool,
}

impl App {
    pub fn new(
        catalog: Catalog,
        prefs: PreferenceStore,
        chrome: TermChrome,
        config: &Config,
        show_splash: bool,
    ) -> Self {
        let mut keybindings = KeybindingRegistry::new();
        keybindings.apply_overrides(&config.keybindings);

        Self {
            catalog,
            prefs,
            chrome,
            keybindings,
            view: ViewState::default(),
            search_mode: false,
            selected: 0,
            scroll_offset: 0,
            list_visible_rows: 10,
            overlay: None,
            splash_deadline: show_splash.then(|| Instant::now() + SPLASH_DURATION),
            status_message: None,
            needs_redraw: true,
        }
    }

    // ========================================================================
    // Projection
    // ========================================================================

    /// Derive the current projection. Pure and cheap enough to recompute on
    /// every state change and every frame — no staleness to manage.
    pub fn projection(&self) -> Projection {
        compute_view(&self.catalog, self.prefs.favorites(), &self.view)
    }

    /// Number of selectable entries in the current projection.
    pub fn visible_count(&self) -> usize {
        self.projection().entry_count()
    }

    /// The currently selected source, if any entry is visible.
    pub fn selected_source(&self) -> Option<&'static SourceRecord> {
        self.projection().entries().nth(self.selected)
    }

    /// Clamp the selection to the current projection. Call after any change
    /// that can shrink the visible set (search keystroke, favorite removal,
    /// mode switch).
    pub fn clamp_selection(&mut self) {
        let count = self.visible_count();
        self.selected = if count == 0 {
            0
        } else {
            self.selected.min(count - 1)
        };
    }

    // ========================================================================
    // View Mutations
    // ========================================================================

    /// Switch view mode. Leaves the search query untouched.
    pub fn set_mode(&mut self, mode: ViewMode) {
        if self.view.mode != mode {
            self.view.mode = mode;
            self.selected = 0;
            self.scroll_offset = 0;
            self.needs_redraw = true;
        }
    }

    pub fn cycle_mode(&mut self) {
        self.set_mode(self.view.mode.next());
    }

    /// Replace the search query. Leaves the view mode untouched.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.view.query = query.into();
        self.selected = 0;
        self.scroll_offset = 0;
        self.needs_redraw = true;
    }

    pub fn enter_search(&mut self) {
        self.search_mode = true;
        self.needs_redraw = true;
    }

    /// Append a character to the query (live filtering).
    pub fn push_search_char(&mut self, c: char) {
        self.view.query.push(c);
        self.selected = 0;
        self.scroll_offset = 0;
        self.needs_redraw = true;
    }

    pub fn pop_search_char(&mut self) {
        self.view.query.pop();
        self.selected = 0;
        self.scroll_offset = 0;
        self.needs_redraw = true;
    }

    /// Esc in search mode: clear the query and return to the list.
    pub fn cancel_search(&mut self) {
        self.search_mode = false;
        self.set_search_query(String::new());
    }

    /// Enter in search mode: keep the query, return focus to the list.
    pub fn commit_search(&mut self) {
        self.search_mode = false;
        self.needs_redraw = true;
    }

    // ========================================================================
    // Favorites
    // ========================================================================

    /// Toggle the selected entry's favorite flag. Symmetric, never errors.
    pub async fn toggle_favorite_selected(&mut self) {
        let Some(id) = self.selected_source().map(|s| s.id) else {
            return;
        };
        let now_favorite = self.prefs.toggle_favorite(id).await;
        self.set_status(if now_favorite {
            "Added to favorites"
        } else {
            "Removed from favorites"
        });
        // Removing a favorite inside the favorites view shrinks the list.
        self.clamp_selection();
        self.needs_redraw = true;
    }

    // ========================================================================
    // Preferences / Chrome
    // ========================================================================

    pub async fn toggle_dark_mode(&mut self) {
        let on = !self.prefs.dark_mode();
        self.prefs.set_dark_mode(on, &mut self.chrome).await;
        self.set_status(if on { "Dark theme" } else { "Light theme" });
        self.needs_redraw = true;
    }

    pub async fn set_text_size(&mut self, size: crate::prefs::TextSize) {
        self.prefs.set_text_size(size, &mut self.chrome).await;
        self.needs_redraw = true;
    }

    /// Fire-and-forget fullscreen toggle. The `prefs.fullscreen()` flag does
    /// not change here — only when the chrome confirms via event.
    pub fn toggle_fullscreen(&mut self) {
        if self.prefs.fullscreen() {
            self.chrome.exit_fullscreen();
        } else {
            self.chrome.request_fullscreen();
        }
    }

    /// Apply a chrome notification.
    pub fn handle_chrome_event(&mut self, event: ChromeEvent) {
        match event {
            ChromeEvent::FullscreenChanged(on) => {
                self.prefs.observe_fullscreen(on);
                self.needs_redraw = true;
            }
        }
    }

    // ========================================================================
    // Outbound
    // ========================================================================

    /// Open the selected source's website in the system browser.
    pub fn open_selected_website(&mut self) {
        let Some(source) = self.selected_source() else {
            return;
        };
        let (name, url) = (source.name, source.website_url);
        if links::open_in_browser(url) {
            self.set_status(format!("Opening {}", name));
        } else {
            // Failure is swallowed; the status line stays neutral.
            self.set_status("Could not open browser");
        }
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    pub fn nav_down(&mut self) {
        let count = self.visible_count();
        if count > 0 {
            self.selected = self.selected.saturating_add(1).min(count - 1);
            self.needs_redraw = true;
        }
    }

    pub fn nav_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.needs_redraw = true;
    }

    pub fn page_down(&mut self) {
        let count = self.visible_count();
        if count > 0 {
            let step = self.list_visible_rows.max(1);
            self.selected = self.selected.saturating_add(step).min(count - 1);
            self.needs_redraw = true;
        }
    }

    pub fn page_up(&mut self) {
        let step = self.list_visible_rows.max(1);
        self.selected = self.selected.saturating_sub(step);
        self.needs_redraw = true;
    }

    // ========================================================================
    // Splash
    // ========================================================================

    pub fn splash_visible(&self) -> bool {
        self.splash_deadline.is_some()
    }

    pub fn dismiss_splash(&mut self) {
        if self.splash_deadline.take().is_some() {
            self.needs_redraw = true;
        }
    }

    /// Dismiss the splash once its deadline passes. Returns true if it was
    /// dismissed on this tick.
    pub fn expire_splash(&mut self) -> bool {
        if let Some(deadline) = self.splash_deadline {
            if Instant::now() >= deadline {
                self.splash_deadline = None;
                self.needs_redraw = true;
                return true;
            }
        }
        false
    }

    // ========================================================================
    // Status Line
    // ========================================================================

    /// Set status message (auto-expires after 3 seconds)
    pub fn set_status(&mut self, msg: impl Into<Cow<'static, str>>) {
        self.status_message = Some((msg.into(), Instant::now()));
        self.needs_redraw = true;
    }

    /// Clear status message if expired. Returns true if a message was cleared.
    pub fn clear_expired_status(&mut self) -> bool {
        if let Some((_, since)) = &self.status_message {
            if since.elapsed() >= STATUS_DURATION {
                self.status_message = None;
                return true;
            }
        }
        false
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::EmptyReason;
    use crate::prefs::TextSize;
    use tokio::sync::mpsc;
    use tokio::time::{self, Duration};

    fn test_app() -> (App, mpsc::Receiver<ChromeEvent>) {
        let (tx, rx) = mpsc::channel(8);
        let config = Config::default();
        let prefs = PreferenceStore::from_config(&config);
        let chrome = TermChrome::new(tx);
        let app = App::new(Catalog::bundled(), prefs, chrome, &config, false);
        (app, rx)
    }

    #[tokio::test]
    async fn mode_and_query_are_orthogonal() {
        let (mut app, _rx) = test_app();

        app.set_search_query("alo");
        app.set_mode(ViewMode::All);
        assert_eq!(app.view.query, "alo");

        app.set_mode(ViewMode::Favorites);
        assert_eq!(app.view.query, "alo");

        app.set_search_query("");
        assert_eq!(app.view.mode, ViewMode::Favorites);
    }

    #[tokio::test]
    async fn toggle_favorite_twice_restores_set() {
        let (mut app, _rx) = test_app();
        app.set_mode(ViewMode::All);

        let before: Vec<String> = app.prefs.favorites().to_vec();
        app.toggle_favorite_selected().await;
        assert_eq!(app.prefs.favorite_count(), 1);
        app.toggle_favorite_selected().await;
        assert_eq!(app.prefs.favorites(), &before[..]);
    }

    #[tokio::test]
    async fn empty_favorites_projects_no_favorites_state() {
        let (mut app, _rx) = test_app();
        app.set_mode(ViewMode::Favorites);

        let projection = app.projection();
        assert!(projection.is_empty());
        assert_eq!(projection.empty, Some(EmptyReason::NoFavorites));
    }

    #[tokio::test]
    async fn stale_only_favorites_project_no_matches() {
        let (mut app, _rx) = test_app();
        app.prefs.toggle_favorite("retired-source-id").await;
        app.set_mode(ViewMode::Favorites);

        let projection = app.projection();
        assert_eq!(projection.empty, Some(EmptyReason::NoMatches));
    }

    #[tokio::test]
    async fn selection_clamps_when_favorites_view_shrinks() {
        let (mut app, _rx) = test_app();
        // Favorite the first two catalog entries.
        let ids: Vec<&str> = app.catalog.sources()[..2].iter().map(|s| s.id).collect();
        for id in &ids {
            app.prefs.toggle_favorite(id).await;
        }
        app.set_mode(ViewMode::Favorites);
        app.selected = 1;

        // Unfavorite the selected (last) entry; selection must clamp to 0.
        app.toggle_favorite_selected().await;
        assert_eq!(app.visible_count(), 1);
        assert_eq!(app.selected, 0);
    }

    #[tokio::test]
    async fn search_keystrokes_filter_live() {
        let (mut app, _rx) = test_app();
        app.enter_search();
        for c in "prothom".chars() {
            app.push_search_char(c);
        }
        assert!(app.visible_count() >= 1);
        let names: Vec<&str> = app.projection().entries().map(|s| s.name).collect();
        assert!(names.iter().all(|n| n.to_lowercase().contains("prothom")));

        app.cancel_search();
        assert!(app.view.query.is_empty());
        // Back to the sectioned view; overlapping categories mean the entry
        // count is at least the catalog size minus uncategorized sources.
        assert!(app.visible_count() > 0);
    }

    #[tokio::test]
    async fn commit_search_keeps_query() {
        let (mut app, _rx) = test_app();
        app.enter_search();
        app.push_search_char('t');
        app.push_search_char('v');
        app.commit_search();

        assert!(!app.search_mode);
        assert_eq!(app.view.query, "tv");
    }

    #[tokio::test]
    async fn fullscreen_flag_only_flips_on_confirmation() {
        let (mut app, mut rx) = test_app();

        app.toggle_fullscreen();
        // Request sent, nothing observed yet.
        assert!(!app.prefs.fullscreen());

        let event = rx.recv().await.unwrap();
        app.handle_chrome_event(event);
        assert!(app.prefs.fullscreen());
    }

    #[tokio::test]
    async fn dark_mode_toggle_swaps_chrome_palette() {
        let (mut app, _rx) = test_app();
        let before = app.chrome.variant();
        app.toggle_dark_mode().await;
        assert_ne!(app.chrome.variant(), before);
        assert!(app.prefs.dark_mode());
    }

    #[tokio::test]
    async fn text_size_applies_to_chrome() {
        let (mut app, _rx) = test_app();
        app.set_text_size(TextSize::Large).await;
        assert_eq!(app.chrome.text_size(), TextSize::Large);
        assert_eq!(app.prefs.text_size(), TextSize::Large);
    }

    #[tokio::test]
    async fn nav_clamps_at_ends() {
        let (mut app, _rx) = test_app();
        app.set_mode(ViewMode::All);

        app.nav_up();
        assert_eq!(app.selected, 0);

        let last = app.visible_count() - 1;
        app.selected = last;
        app.nav_down();
        assert_eq!(app.selected, last);
    }

    #[tokio::test(start_paused = true)]
    async fn splash_expires_after_deadline() {
        let (tx, _rx) = mpsc::channel(8);
        let config = Config::default();
        let prefs = PreferenceStore::from_config(&config);
        let chrome = TermChrome::new(tx);
        let mut app = App::new(Catalog::bundled(), prefs, chrome, &config, true);

        assert!(app.splash_visible());
        assert!(!app.expire_splash());

        time::advance(SPLASH_DURATION + Duration::from_millis(10)).await;
        assert!(app.expire_splash());
        assert!(!app.splash_visible());
    }

    #[tokio::test]
    async fn any_key_dismisses_splash_early() {
        let (tx, _rx) = mpsc::channel(8);
        let config = Config::default();
        let prefs = PreferenceStore::from_config(&config);
        let chrome = TermChrome::new(tx);
        let mut app = App::new(Catalog::bundled(), prefs, chrome, &config, true);

        assert!(app.splash_visible());
        app.dismiss_splash();
        assert!(!app.splash_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn status_expires_after_3_seconds() {
        let (mut app, _rx) = test_app();
        app.set_status("Test message");
        assert!(app.status_message.is_some());

        time::advance(Duration::from_secs(2)).await;
        app.clear_expired_status();
        assert!(app.status_message.is_some()); // Still present at 2s

        time::advance(Duration::from_secs(2)).await;
        app.clear_expired_status();
        assert!(app.status_message.is_none()); // Expired after 3s
    }
}
