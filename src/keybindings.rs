//! Keybinding registry — maps actions to key events with config overrides.
//!
//! Replaces hardcoded key match arms with a data-driven registry that
//! supports user customization via config.toml. Overlay-internal navigation
//! (settings selector, menu, legal scroll) stays hardcoded in the input
//! handler; only directory-level actions are rebindable.
use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

// ============================================================================
// Action Enum
// ============================================================================

/// All user-facing actions that can be triggered by keybindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    NavDown,
    NavUp,
    PageDown,
    PageUp,
    OpenWebsite,
    ToggleFavorite,
    EnterSearch,
    ExitSearch,
    CommitSearch,
    Back,
    CycleView,
    ViewSections,
    ViewAll,
    ViewFavorites,
    ToggleDarkMode,
    ToggleFullscreen,
    OpenSettings,
    OpenMenu,
    ShowHelp,
}

impl Action {
    /// Human-readable description for the help screen.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Quit => "Quit application",
            Self::NavDown => "Navigate down",
            Self::NavUp => "Navigate up",
            Self::PageDown => "Page down",
            Self::PageUp => "Page up",
            Self::OpenWebsite => "Open source website in browser",
            Self::ToggleFavorite => "Toggle favorite",
            Self::EnterSearch => "Enter search mode",
            Self::ExitSearch => "Clear and exit search",
            Self::CommitSearch => "Confirm search",
            Self::Back => "Go back / dismiss",
            Self::CycleView => "Cycle view mode",
            Self::ViewSections => "Sections view",
            Self::ViewAll => "All sources view",
            Self::ViewFavorites => "Favorites view",
            Self::ToggleDarkMode => "Toggle dark mode",
            Self::ToggleFullscreen => "Toggle fullscreen",
            Self::OpenSettings => "Open settings",
            Self::OpenMenu => "Open menu",
            Self::ShowHelp => "Show help",
        }
    }

    /// Config override name → action.
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "quit" => Some(Self::Quit),
            "nav_down" => Some(Self::NavDown),
            "nav_up" => Some(Self::NavUp),
            "page_down" => Some(Self::PageDown),
            "page_up" => Some(Self::PageUp),
            "open" => Some(Self::OpenWebsite),
            "favorite" => Some(Self::ToggleFavorite),
            "search" => Some(Self::EnterSearch),
            "back" => Some(Self::Back),
            "cycle_view" => Some(Self::CycleView),
            "view_sections" => Some(Self::ViewSections),
            "view_all" => Some(Self::ViewAll),
            "view_favorites" => Some(Self::ViewFavorites),
            "dark_mode" => Some(Self::ToggleDarkMode),
            "fullscreen" => Some(Self::ToggleFullscreen),
            "settings" => Some(Self::OpenSettings),
            "menu" => Some(Self::OpenMenu),
            "help" => Some(Self::ShowHelp),
            _ => None,
        }
    }

    /// The context an override for this action lands in.
    fn home_context(self) -> Context {
        match self {
            Self::ExitSearch | Self::CommitSearch => Context::Search,
            Self::Quit | Self::Back | Self::ShowHelp => Context::Global,
            _ => Context::Directory,
        }
    }
}

// ============================================================================
// Context Enum
// ============================================================================

/// Dispatch context — determines which bindings are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Context {
    Global,
    Directory,
    Search,
}

// ============================================================================
// Key Specification
// ============================================================================

/// A key event: code + modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeySpec {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeySpec {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub const fn ctrl(c: char) -> Self {
        Self::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }
}

/// Parse a key string from config into a KeySpec.
///
/// Supported formats:
/// - Single char: "q", "j", "/"
/// - Named keys: "Enter", "Esc", "Tab", "Up", "Down", "Backspace"
/// - Modifier combos: "Ctrl+d", "Ctrl+u"
/// - Function keys: "F1" through "F12"
fn parse_key_string(s: &str) -> Option<KeySpec> {
    let s = s.trim();

    // Handle Ctrl+ prefix
    if let Some(rest) = s.strip_prefix("Ctrl+") {
        let rest = rest.trim();
        if rest.len() == 1 {
            let c = rest.chars().next()?;
            return Some(KeySpec::ctrl(c));
        }
        return None;
    }

    // Named keys (case-insensitive)
    match s.to_lowercase().as_str() {
        "enter" | "return" => return Some(KeySpec::plain(KeyCode::Enter)),
        "esc" | "escape" => return Some(KeySpec::plain(KeyCode::Esc)),
        "tab" => return Some(KeySpec::plain(KeyCode::Tab)),
        "up" => return Some(KeySpec::plain(KeyCode::Up)),
        "down" => return Some(KeySpec::plain(KeyCode::Down)),
        "left" => return Some(KeySpec::plain(KeyCode::Left)),
        "right" => return Some(KeySpec::plain(KeyCode::Right)),
        "backspace" => return Some(KeySpec::plain(KeyCode::Backspace)),
        "space" => return Some(KeySpec::plain(KeyCode::Char(' '))),
        _ => {}
    }

    // Function keys
    if s.starts_with('F') || s.starts_with('f') {
        if let Ok(n) = s[1..].parse::<u8>() {
            if (1..=12).contains(&n) {
                return Some(KeySpec::plain(KeyCode::F(n)));
            }
        }
    }

    // Single character
    if s.len() == 1 {
        let c = s.chars().next()?;
        return Some(KeySpec::plain(KeyCode::Char(c)));
    }

    None
}

/// Format a KeySpec as a human-readable string for the help screen.
fn format_key(key: &KeySpec) -> String {
    let modifier = if key.modifiers.contains(KeyModifiers::CONTROL) {
        "Ctrl+"
    } else {
        ""
    };

    let key_name = match key.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        _ => "?".to_string(),
    };

    format!("{}{}", modifier, key_name)
}

// ============================================================================
// Keybinding Registry
// ============================================================================

/// Registry of keybindings, supporting default bindings and config overrides.
///
/// Lookup is O(1) via HashMap. Dispatch is context-aware: the same key can
/// map to different actions in different contexts, and a miss in the active
/// context falls back to `Context::Global`.
pub struct KeybindingRegistry {
    /// Primary lookup: (Context, KeySpec) -> Action
    lookup: HashMap<(Context, KeySpec), Action>,
    /// All bindings for help screen enumeration
    bindings: Vec<(Context, KeySpec, Action)>,
}

impl Default for KeybindingRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingRegistry {
    /// Create a registry with the default bindings.
    pub fn new() -> Self {
        let mut registry = Self {
            lookup: HashMap::new(),
            bindings: Vec::new(),
        };
        registry.register_defaults();
        registry
    }

    /// Register a single binding.
    fn bind(&mut self, context: Context, key: KeySpec, action: Action) {
        self.lookup.insert((context, key), action);
        self.bindings.push((context, key, action));
    }

    fn register_defaults(&mut self) {
        // === Global ===
        self.bind(Context::Global, KeySpec::plain(KeyCode::Char('q')), Action::Quit);
        self.bind(Context::Global, KeySpec::plain(KeyCode::Char('?')), Action::ShowHelp);
        self.bind(Context::Global, KeySpec::plain(KeyCode::Esc), Action::Back);

        // === Directory ===
        self.bind(Context::Directory, KeySpec::plain(KeyCode::Char('j')), Action::NavDown);
        self.bind(Context::Directory, KeySpec::plain(KeyCode::Down), Action::NavDown);
        self.bind(Context::Directory, KeySpec::plain(KeyCode::Char('k')), Action::NavUp);
        self.bind(Context::Directory, KeySpec::plain(KeyCode::Up), Action::NavUp);
        self.bind(Context::Directory, KeySpec::ctrl('d'), Action::PageDown);
        self.bind(Context::Directory, KeySpec::ctrl('u'), Action::PageUp);
        self.bind(Context::Directory, KeySpec::plain(KeyCode::Enter), Action::OpenWebsite);
        self.bind(Context::Directory, KeySpec::plain(KeyCode::Char('o')), Action::OpenWebsite);
        self.bind(Context::Directory, KeySpec::plain(KeyCode::Char('f')), Action::ToggleFavorite);
        self.bind(Context::Directory, KeySpec::plain(KeyCode::Char('/')), Action::EnterSearch);
        self.bind(Context::Directory, KeySpec::plain(KeyCode::Tab), Action::CycleView);
        self.bind(Context::Directory, KeySpec::plain(KeyCode::Char('1')), Action::ViewSections);
        self.bind(Context::Directory, KeySpec::plain(KeyCode::Char('2')), Action::ViewAll);
        self.bind(Context::Directory, KeySpec::plain(KeyCode::Char('3')), Action::ViewFavorites);
        self.bind(Context::Directory, KeySpec::plain(KeyCode::Char('t')), Action::ToggleDarkMode);
        self.bind(Context::Directory, KeySpec::plain(KeyCode::Char('F')), Action::ToggleFullscreen);
        self.bind(Context::Directory, KeySpec::plain(KeyCode::Char('s')), Action::OpenSettings);
        self.bind(Context::Directory, KeySpec::plain(KeyCode::Char('m')), Action::OpenMenu);

        // === Search ===
        self.bind(Context::Search, KeySpec::plain(KeyCode::Esc), Action::ExitSearch);
        self.bind(Context::Search, KeySpec::plain(KeyCode::Enter), Action::CommitSearch);
    }

    /// Apply config overrides: `action_name = "key string"`.
    ///
    /// Unknown action names and unparsable key strings are logged and
    /// skipped — a bad override never breaks the defaults.
    pub fn apply_overrides(&mut self, overrides: &HashMap<String, String>) {
        for (name, key_str) in overrides {
            let Some(action) = Action::from_name(name) else {
                tracing::warn!(action = %name, "Unknown action in keybinding override, ignoring");
                continue;
            };
            let Some(key) = parse_key_string(key_str) else {
                tracing::warn!(action = %name, key = %key_str, "Unparsable key in keybinding override, ignoring");
                continue;
            };

            let context = action.home_context();

            // Drop the default bindings for this action so the help screen
            // shows only the override.
            self.bindings
                .retain(|(c, _, a)| !(*c == context && *a == action));
            self.lookup
                .retain(|(c, _), a| !(*c == context && *a == action));

            self.bind(context, key, action);
            tracing::debug!(action = %name, key = %key_str, "Applied keybinding override");
        }
    }

    /// Resolve a key press in the given context, falling back to Global.
    pub fn resolve(&self, context: Context, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        let key = KeySpec::new(code, modifiers);
        self.lookup
            .get(&(context, key))
            .or_else(|| self.lookup.get(&(Context::Global, key)))
            .copied()
    }

    /// All bindings for the help screen: (context, key label, action, description).
    pub fn all_bindings(&self) -> Vec<(Context, String, Action, &'static str)> {
        self.bindings
            .iter()
            .map(|(context, key, action)| (*context, format_key(key), *action, action.describe()))
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings_resolve() {
        let registry = KeybindingRegistry::new();
        assert_eq!(
            registry.resolve(Context::Directory, KeyCode::Char('j'), KeyModifiers::NONE),
            Some(Action::NavDown)
        );
        assert_eq!(
            registry.resolve(Context::Directory, KeyCode::Char('f'), KeyModifiers::NONE),
            Some(Action::ToggleFavorite)
        );
        assert_eq!(
            registry.resolve(Context::Search, KeyCode::Enter, KeyModifiers::NONE),
            Some(Action::CommitSearch)
        );
    }

    #[test]
    fn directory_context_falls_back_to_global() {
        let registry = KeybindingRegistry::new();
        assert_eq!(
            registry.resolve(Context::Directory, KeyCode::Char('q'), KeyModifiers::NONE),
            Some(Action::Quit)
        );
        assert_eq!(
            registry.resolve(Context::Directory, KeyCode::Char('?'), KeyModifiers::NONE),
            Some(Action::ShowHelp)
        );
    }

    #[test]
    fn shifted_char_is_distinct() {
        let registry = KeybindingRegistry::new();
        assert_eq!(
            registry.resolve(Context::Directory, KeyCode::Char('F'), KeyModifiers::NONE),
            Some(Action::ToggleFullscreen)
        );
        assert_ne!(
            registry.resolve(Context::Directory, KeyCode::Char('f'), KeyModifiers::NONE),
            registry.resolve(Context::Directory, KeyCode::Char('F'), KeyModifiers::NONE),
        );
    }

    #[test]
    fn override_replaces_default() {
        let mut registry = KeybindingRegistry::new();
        let mut overrides = HashMap::new();
        overrides.insert("favorite".to_string(), "Space".to_string());
        registry.apply_overrides(&overrides);

        assert_eq!(
            registry.resolve(Context::Directory, KeyCode::Char(' '), KeyModifiers::NONE),
            Some(Action::ToggleFavorite)
        );
        // The default binding is gone.
        assert_eq!(
            registry.resolve(Context::Directory, KeyCode::Char('f'), KeyModifiers::NONE),
            None
        );
    }

    #[test]
    fn bad_overrides_are_ignored() {
        let mut registry = KeybindingRegistry::new();
        let mut overrides = HashMap::new();
        overrides.insert("teleport".to_string(), "x".to_string());
        overrides.insert("quit".to_string(), "NotAKey+q".to_string());
        registry.apply_overrides(&overrides);

        // Defaults intact.
        assert_eq!(
            registry.resolve(Context::Global, KeyCode::Char('q'), KeyModifiers::NONE),
            Some(Action::Quit)
        );
    }

    #[test]
    fn parse_key_strings() {
        assert_eq!(parse_key_string("q"), Some(KeySpec::plain(KeyCode::Char('q'))));
        assert_eq!(parse_key_string("Ctrl+d"), Some(KeySpec::ctrl('d')));
        assert_eq!(parse_key_string("Enter"), Some(KeySpec::plain(KeyCode::Enter)));
        assert_eq!(parse_key_string("F5"), Some(KeySpec::plain(KeyCode::F(5))));
        assert_eq!(parse_key_string("Space"), Some(KeySpec::plain(KeyCode::Char(' '))));
        assert_eq!(parse_key_string("F13"), None);
        assert_eq!(parse_key_string("Hyper+x"), None);
    }

    #[test]
    fn format_keys_for_help() {
        assert_eq!(format_key(&KeySpec::plain(KeyCode::Char('j'))), "j");
        assert_eq!(format_key(&KeySpec::ctrl('u')), "Ctrl+u");
        assert_eq!(format_key(&KeySpec::plain(KeyCode::Char(' '))), "Space");
    }

    #[test]
    fn all_bindings_enumerates_defaults() {
        let registry = KeybindingRegistry::new();
        let bindings = registry.all_bindings();
        assert!(bindings
            .iter()
            .any(|(c, k, a, _)| *c == Context::Directory && k == "/" && *a == Action::EnterSearch));
        assert!(bindings.iter().all(|(_, _, _, d)| !d.is_empty()));
    }
}
