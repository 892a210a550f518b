//! Durable preference state with chrome synchronization.
//!
//! Config values serve as defaults; the `user_preferences` table overrides
//! them. Writes go to the DB best-effort: if storage is unavailable or a
//! write fails, the in-memory value is still updated so the running session
//! behaves correctly, and the failure is logged and swallowed — persistence
//! is never allowed to surface as a user-facing error.

use crate::chrome::Chrome;
use crate::config::Config;
use crate::storage::Database;

/// The three durable preference keys.
pub mod keys {
    pub const FAVORITES: &str = "favorites";
    pub const THEME: &str = "theme";
    pub const TEXT_SIZE: &str = "text_size";
}

// ============================================================================
// Text Size
// ============================================================================

/// The three text scales. A single value by construction: selecting a new
/// one replaces the old, so two scales can never be active at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl TextSize {
    /// All scales in selector display order.
    pub const ALL: [TextSize; 3] = [TextSize::Small, TextSize::Medium, TextSize::Large];

    /// Parse a stored/config value (case-insensitive).
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "small" => Some(Self::Small),
            "medium" => Some(Self::Medium),
            "large" => Some(Self::Large),
            _ => None,
        }
    }

    /// Storage representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    /// Human-readable name for the settings overlay.
    pub fn name(self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
        }
    }
}

// ============================================================================
// Preference Store
// ============================================================================

/// Owned preference state: the three durable values plus the ephemeral,
/// host-observed fullscreen flag.
///
/// `db: None` means storage was unavailable at startup; the store then runs
/// purely in memory and every persist call is a logged no-op.
pub struct PreferenceStore {
    db: Option<Database>,
    dark_mode: bool,
    text_size: TextSize,
    favorites: Vec<String>,
    fullscreen: bool,
}

impl PreferenceStore {
    /// Build a store from config defaults alone, with no durable storage.
    pub fn from_config(config: &Config) -> Self {
        Self {
            db: None,
            dark_mode: config.theme.eq_ignore_ascii_case("dark"),
            text_size: TextSize::from_str_name(&config.text_size).unwrap_or_default(),
            favorites: Vec::new(),
            fullscreen: false,
        }
    }

    /// Load preferences: config defaults, overridden by whatever the DB has.
    ///
    /// A stored value that fails to parse is treated as absent — the default
    /// applies and a warning is logged. Never a fatal error.
    pub async fn load(config: &Config, db: Option<Database>) -> Self {
        let mut store = Self::from_config(config);
        let Some(db) = db else {
            tracing::warn!("no durable storage; preferences will not persist");
            return store;
        };

        match db.get_preference(keys::THEME).await {
            Ok(Some(value)) => match value.as_str() {
                "dark" => store.dark_mode = true,
                "light" => store.dark_mode = false,
                other => {
                    tracing::warn!(value = %other, "unrecognized stored theme, using default")
                }
            },
            Ok(None) => {}
            Err(e) => tracing::warn!(error = %e, "failed to read stored theme"),
        }

        match db.get_preference(keys::TEXT_SIZE).await {
            Ok(Some(value)) => match TextSize::from_str_name(&value) {
                Some(size) => store.text_size = size,
                None => {
                    tracing::warn!(value = %value, "unrecognized stored text size, using default")
                }
            },
            Ok(None) => {}
            Err(e) => tracing::warn!(error = %e, "failed to read stored text size"),
        }

        match db.get_preference(keys::FAVORITES).await {
            Ok(Some(json)) => match serde_json::from_str::<Vec<String>>(&json) {
                Ok(favorites) => store.favorites = favorites,
                Err(e) => {
                    tracing::warn!(error = %e, "corrupt stored favorites, starting empty")
                }
            },
            Ok(None) => {}
            Err(e) => tracing::warn!(error = %e, "failed to read stored favorites"),
        }

        store.db = Some(db);
        store
    }

    /// Push the current theme and text scale into the chrome. Called once at
    /// startup so the first frame already reflects loaded preferences.
    pub fn apply_to_chrome(&self, chrome: &mut dyn Chrome) {
        chrome.apply_dark(self.dark_mode);
        chrome.apply_text_size(self.text_size);
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn text_size(&self) -> TextSize {
        self.text_size
    }

    /// Favorites in insertion order (storage order, not display order).
    pub fn favorites(&self) -> &[String] {
        &self.favorites
    }

    pub fn favorite_count(&self) -> usize {
        self.favorites.len()
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.iter().any(|f| f == id)
    }

    /// The host-observed fullscreen state.
    pub fn fullscreen(&self) -> bool {
        self.fullscreen
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Set the dark-mode flag: commit in memory, persist best-effort, then
    /// synchronize the chrome so presentation never lags the preference.
    pub async fn set_dark_mode(&mut self, on: bool, chrome: &mut dyn Chrome) {
        self.dark_mode = on;
        self.persist(keys::THEME, if on { "dark" } else { "light" })
            .await;
        chrome.apply_dark(on);
    }

    /// Set the text scale. The chrome replaces the previous scale wholesale.
    pub async fn set_text_size(&mut self, size: TextSize, chrome: &mut dyn Chrome) {
        self.text_size = size;
        self.persist(keys::TEXT_SIZE, size.as_str()).await;
        chrome.apply_text_size(size);
    }

    /// Toggle an id in the favorites set. Symmetric and infallible: present
    /// → removed, absent → appended, even for ids the catalog doesn't know.
    /// Returns whether the id is a favorite afterwards.
    pub async fn toggle_favorite(&mut self, id: &str) -> bool {
        let now_favorite = match self.favorites.iter().position(|f| f == id) {
            Some(pos) => {
                self.favorites.remove(pos);
                false
            }
            None => {
                self.favorites.push(id.to_string());
                true
            }
        };

        match serde_json::to_string(&self.favorites) {
            Ok(json) => self.persist(keys::FAVORITES, &json).await,
            Err(e) => tracing::warn!(error = %e, "failed to encode favorites"),
        }

        now_favorite
    }

    /// Record a host-confirmed fullscreen transition. This is the only way
    /// the flag changes — requests themselves never touch it.
    pub fn observe_fullscreen(&mut self, on: bool) {
        self.fullscreen = on;
    }

    // ========================================================================
    // Internal Helpers
    // ========================================================================

    /// Best-effort write. Failure is logged and swallowed; the in-memory
    /// state has already been committed by the caller.
    async fn persist(&self, key: &str, value: &str) {
        let Some(db) = &self.db else {
            tracing::debug!(key, "no durable storage, preference kept in memory only");
            return;
        };
        if let Err(e) = db.set_preference(key, value).await {
            tracing::warn!(key, error = %e, "failed to persist preference");
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chrome::RecordingChrome;
    use crate::config::Config;
    use crate::storage::Database;

    async fn test_db() -> Database {
        Database::open(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn defaults_from_config() {
        let config = Config::default();
        let store = PreferenceStore::load(&config, Some(test_db().await)).await;

        assert!(!store.dark_mode());
        assert_eq!(store.text_size(), TextSize::Medium);
        assert!(store.favorites().is_empty());
        assert!(!store.fullscreen());
    }

    #[tokio::test]
    async fn db_overrides_config() {
        let db = test_db().await;
        db.set_preference(keys::THEME, "dark").await.unwrap();
        db.set_preference(keys::TEXT_SIZE, "large").await.unwrap();
        db.set_preference(keys::FAVORITES, "[\"prothom-alo\",\"daily-star\"]")
            .await
            .unwrap();

        let store = PreferenceStore::load(&Config::default(), Some(db)).await;
        assert!(store.dark_mode());
        assert_eq!(store.text_size(), TextSize::Large);
        assert_eq!(store.favorites(), ["prothom-alo", "daily-star"]);
    }

    #[tokio::test]
    async fn corrupt_stored_values_fall_back_to_defaults() {
        let db = test_db().await;
        db.set_preference(keys::THEME, "solarized").await.unwrap();
        db.set_preference(keys::TEXT_SIZE, "gigantic").await.unwrap();
        db.set_preference(keys::FAVORITES, "not json {{").await.unwrap();

        let store = PreferenceStore::load(&Config::default(), Some(db)).await;
        assert!(!store.dark_mode());
        assert_eq!(store.text_size(), TextSize::Medium);
        assert!(store.favorites().is_empty());
    }

    #[tokio::test]
    async fn setters_work_without_storage() {
        let config = Config::default();
        let mut store = PreferenceStore::from_config(&config);
        let mut chrome = RecordingChrome::default();

        store.set_dark_mode(true, &mut chrome).await;
        store.set_text_size(TextSize::Small, &mut chrome).await;
        assert!(store.toggle_favorite("prothom-alo").await);

        // In-memory state is authoritative even when nothing persists.
        assert!(store.dark_mode());
        assert_eq!(store.text_size(), TextSize::Small);
        assert!(store.is_favorite("prothom-alo"));
    }

    #[tokio::test]
    async fn chrome_effect_follows_each_commit() {
        let mut store = PreferenceStore::from_config(&Config::default());
        let mut chrome = RecordingChrome::default();

        store.set_dark_mode(true, &mut chrome).await;
        assert_eq!(chrome.dark, Some(true));

        store.set_text_size(TextSize::Large, &mut chrome).await;
        store.set_text_size(TextSize::Small, &mut chrome).await;
        // Exactly one scale active: the last applied.
        assert_eq!(chrome.text_size, Some(TextSize::Small));
        assert_eq!(chrome.calls, ["dark:true", "size:Large", "size:Small"]);
    }

    #[tokio::test]
    async fn toggle_favorite_is_symmetric() {
        let mut store = PreferenceStore::from_config(&Config::default());

        assert!(store.toggle_favorite("ittefaq").await);
        assert!(store.is_favorite("ittefaq"));
        assert!(!store.toggle_favorite("ittefaq").await);
        assert!(!store.is_favorite("ittefaq"));
        assert!(store.favorites().is_empty());
    }

    #[tokio::test]
    async fn toggle_favorite_accepts_unknown_ids() {
        // Ids absent from the catalog are still toggled without error; the
        // filter engine simply never displays them.
        let mut store = PreferenceStore::from_config(&Config::default());
        assert!(store.toggle_favorite("no-such-source").await);
        assert_eq!(store.favorite_count(), 1);
    }

    #[tokio::test]
    async fn favorites_persist_in_insertion_order() {
        let db = test_db().await;
        let mut store = PreferenceStore::load(&Config::default(), Some(db.clone())).await;

        store.toggle_favorite("jugantor").await;
        store.toggle_favorite("daily-star").await;

        let stored = db.get_preference(keys::FAVORITES).await.unwrap().unwrap();
        assert_eq!(stored, "[\"jugantor\",\"daily-star\"]");
    }

    #[tokio::test]
    async fn preferences_survive_reload() {
        let db = test_db().await;
        let mut chrome = RecordingChrome::default();

        let mut store = PreferenceStore::load(&Config::default(), Some(db.clone())).await;
        store.set_dark_mode(true, &mut chrome).await;
        store.set_text_size(TextSize::Large, &mut chrome).await;
        store.toggle_favorite("samakal").await;
        drop(store);

        let reloaded = PreferenceStore::load(&Config::default(), Some(db)).await;
        assert!(reloaded.dark_mode());
        assert_eq!(reloaded.text_size(), TextSize::Large);
        assert_eq!(reloaded.favorites(), ["samakal"]);
    }

    #[tokio::test]
    async fn fullscreen_is_observed_not_persisted() {
        let db = test_db().await;
        let mut store = PreferenceStore::load(&Config::default(), Some(db.clone())).await;

        store.observe_fullscreen(true);
        assert!(store.fullscreen());

        // Nothing lands in storage for fullscreen, and a reload starts false.
        let all = db.get_preferences_by_prefix("").await.unwrap();
        assert!(all.iter().all(|(k, _)| k != "fullscreen"));
        let reloaded = PreferenceStore::load(&Config::default(), Some(db)).await;
        assert!(!reloaded.fullscreen());
    }

    #[test]
    fn text_size_parse_round_trip() {
        for size in TextSize::ALL {
            assert_eq!(TextSize::from_str_name(size.as_str()), Some(size));
        }
        assert_eq!(TextSize::from_str_name("MEDIUM"), Some(TextSize::Medium));
        assert_eq!(TextSize::from_str_name("huge"), None);
    }
}
