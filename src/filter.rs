//! Pure derivation of the visible catalog projection.
//!
//! `compute_view` is the single place that decides what the directory shows
//! for a given {view mode, search query, favorites} triple. It is pure and
//! reentrant: the app recomputes it on every state change instead of caching
//! a projection that could go stale.

use std::collections::HashSet;

use crate::catalog::{Catalog, SourceRecord};

// ============================================================================
// View State
// ============================================================================

/// Which slice of the catalog the directory shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// One titled section per category.
    #[default]
    Sections,
    /// Every source in one flat list.
    All,
    /// Only favorited sources, in catalog order.
    Favorites,
}

impl ViewMode {
    /// Human-readable label for the mode switcher and status line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sections => "Sections",
            Self::All => "All",
            Self::Favorites => "Favorites",
        }
    }

    /// Cycle order for the Tab switcher: Sections → All → Favorites → …
    pub fn next(self) -> Self {
        match self {
            Self::Sections => Self::All,
            Self::All => Self::Favorites,
            Self::Favorites => Self::Sections,
        }
    }
}

/// Session-only view state: mode and search query. The two are orthogonal —
/// changing one never clears the other; their interaction is decided here,
/// in the sectioning rule of [`compute_view`].
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub mode: ViewMode,
    pub query: String,
}

// ============================================================================
// Projection
// ============================================================================

/// Why the projection has nothing to show. The two cases render different
/// empty-state messages, so they must stay distinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    /// Favorites view with no favorites saved at all.
    NoFavorites,
    /// The filter matched nothing (including a favorites set whose ids are
    /// all stale).
    NoMatches,
}

/// One displayed section. `title` is `None` for the flat (unsectioned) list.
///
/// Entries borrow from the compiled-in catalog tables, so the projection is
/// an owned value with no lifetime ties to the `Catalog` it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: Option<&'static str>,
    pub entries: Vec<&'static SourceRecord>,
}

/// The derived, read-only projection the presentation layer renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    pub mode: ViewMode,
    pub sections: Vec<Section>,
    pub empty: Option<EmptyReason>,
}

impl Projection {
    /// Total entries across all sections.
    pub fn entry_count(&self) -> usize {
        self.sections.iter().map(|s| s.entries.len()).sum()
    }

    /// Entries across all sections, in display order.
    pub fn entries(&self) -> impl Iterator<Item = &'static SourceRecord> + '_ {
        self.sections.iter().flat_map(|s| s.entries.iter().copied())
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

// ============================================================================
// Derivation
// ============================================================================

/// Derive the visible projection of `catalog` for the given favorites and
/// view state.
///
/// Rules:
/// 1. Favorites mode restricts candidates to favorited ids, in catalog order
///    (never favorites insertion order). Stale ids are simply absent.
/// 2. A non-empty query keeps candidates whose name contains it
///    case-insensitively; the empty query is the identity filter.
/// 3. A non-empty query, All mode, or Favorites mode flattens the output to
///    a single untitled section. Sections mode with an empty query emits one
///    section per category, omitting categories whose intersection with the
///    candidates is empty.
///
/// Catalog order is the only ordering applied anywhere.
pub fn compute_view(catalog: &Catalog, favorites: &[String], view: &ViewState) -> Projection {
    let favorite_ids: HashSet<&str> = favorites.iter().map(String::as_str).collect();
    let needle = view.query.to_lowercase();

    let candidates: Vec<&'static SourceRecord> = catalog
        .sources()
        .iter()
        .filter(|s| view.mode != ViewMode::Favorites || favorite_ids.contains(s.id))
        .filter(|s| needle.is_empty() || s.name.to_lowercase().contains(&needle))
        .collect();

    let sectioned = view.mode == ViewMode::Sections && view.query.is_empty();
    let sections: Vec<Section> = if sectioned {
        catalog
            .categories()
            .iter()
            .filter_map(|category| {
                let members: HashSet<&str> = category.members.iter().copied().collect();
                let entries: Vec<&'static SourceRecord> = candidates
                    .iter()
                    .copied()
                    .filter(|s| members.contains(s.id))
                    .collect();
                if entries.is_empty() {
                    // A category with nothing to show is omitted outright,
                    // never rendered as a bare header.
                    None
                } else {
                    Some(Section {
                        title: Some(category.title),
                        entries,
                    })
                }
            })
            .collect()
    } else if candidates.is_empty() {
        Vec::new()
    } else {
        vec![Section {
            title: None,
            entries: candidates,
        }]
    };

    let empty = if sections.iter().all(|s| s.entries.is_empty()) {
        // "No favorites yet" is keyed on the raw favorites set, not the
        // filtered result — a non-empty set of stale ids is "no matches".
        if view.mode == ViewMode::Favorites && favorites.is_empty() {
            Some(EmptyReason::NoFavorites)
        } else {
            Some(EmptyReason::NoMatches)
        }
    } else {
        None
    };

    Projection {
        mode: view.mode,
        sections,
        empty,
    }
}

// ============================================================================
// Tests
// ============================================================================
