//! Theme system for the TUI.
//!
//! Provides semantic color roles that map to ratatui `Style` values.
//! The `ThemeVariant` enum selects between Dark and Light palettes,
//! and `StyleMap` resolves role names to concrete styles. The variant is
//! driven by the durable dark-mode preference.

use ratatui::style::{Color, Modifier, Style};
use std::collections::HashMap;

// ============================================================================
// Theme Variant
// ============================================================================

/// Available theme variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariant {
    Dark,
    Light,
}

impl ThemeVariant {
    /// Map the durable dark-mode flag to a variant.
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// Build the `ColorPalette` for this variant.
    pub fn palette(self) -> ColorPalette {
        match self {
            Self::Dark => ColorPalette::dark(),
            Self::Light => ColorPalette::light(),
        }
    }

    /// Human-readable name for status display.
    pub fn name(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }
}

// ============================================================================
// Color Palette — semantic roles to Style
// ============================================================================

/// A complete color palette mapping every semantic UI role to a `Style`.
///
/// Each field corresponds to a specific visual element in the TUI.
#[derive(Debug, Clone)]
pub struct ColorPalette {
    // -- Directory list --
    pub source_normal: Style,
    pub source_selected: Style,
    pub source_favorite: Style,
    pub source_domain: Style,
    pub section_heading: Style,

    // -- Mode switcher --
    pub tab_active: Style,
    pub tab_inactive: Style,

    // -- Search --
    pub search_prompt: Style,

    // -- Empty states --
    pub empty_title: Style,
    pub empty_hint: Style,

    // -- Chrome --
    pub status_bar: Style,
    pub panel_border: Style,
    pub panel_border_focused: Style,

    // -- Overlays --
    pub overlay_text: Style,
    pub overlay_selected: Style,
    pub overlay_dim: Style,

    // -- Splash --
    pub splash_title: Style,
    pub splash_tagline: Style,
}

impl ColorPalette {
    fn dark() -> Self {
        Self {
            // Directory list
            source_normal: Style::default(),
            source_selected: Style::default().bg(Color::DarkGray).fg(Color::White),
            source_favorite: Style::default().fg(Color::Yellow),
            source_domain: Style::default().fg(Color::DarkGray),
            section_heading: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),

            // Mode switcher
            tab_active: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::Gray),

            // Search
            search_prompt: Style::default().fg(Color::Cyan),

            // Empty states
            empty_title: Style::default().add_modifier(Modifier::BOLD),
            empty_hint: Style::default().fg(Color::DarkGray),

            // Chrome
            status_bar: Style::default().bg(Color::DarkGray).fg(Color::White),
            panel_border: Style::default(),
            panel_border_focused: Style::default().fg(Color::Cyan),

            // Overlays
            overlay_text: Style::default(),
            overlay_selected: Style::default()
                .bg(Color::DarkGray)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            overlay_dim: Style::default().fg(Color::DarkGray),

            // Splash
            splash_title: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            splash_tagline: Style::default().fg(Color::Gray),
        }
    }

    /// Light palette — adapted for light terminal backgrounds.
    fn light() -> Self {
        Self {
            // Directory list
            source_normal: Style::default().fg(Color::Black),
            source_selected: Style::default().bg(Color::Blue).fg(Color::White),
            source_favorite: Style::default().fg(Color::Magenta),
            source_domain: Style::default().fg(Color::DarkGray),
            section_heading: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),

            // Mode switcher
            tab_active: Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::DarkGray),

            // Search
            search_prompt: Style::default().fg(Color::Blue),

            // Empty states
            empty_title: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            empty_hint: Style::default().fg(Color::DarkGray),

            // Chrome
            status_bar: Style::default().bg(Color::White).fg(Color::Black),
            panel_border: Style::default().fg(Color::DarkGray),
            panel_border_focused: Style::default().fg(Color::Blue),

            // Overlays
            overlay_text: Style::default().fg(Color::Black),
            overlay_selected: Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            overlay_dim: Style::default().fg(Color::DarkGray),

            // Splash
            splash_title: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            splash_tagline: Style::default().fg(Color::DarkGray),
        }
    }
}

// ============================================================================
// Style Map — string-keyed lookup
// ============================================================================

/// String-keyed style lookup built from a `ColorPalette`.
///
/// Allows resolving role names (e.g. `"section_heading"`) to their concrete
/// `Style` at runtime without threading the palette struct everywhere.
#[derive(Debug, Clone)]
pub struct StyleMap {
    map: HashMap<&'static str, Style>,
}

/// All semantic role names, in declaration order.
const ROLE_NAMES: [&str; 18] = [
    "source_normal",
    "source_selected",
    "source_favorite",
    "source_domain",
    "section_heading",
    "tab_active",
    "tab_inactive",
    "search_prompt",
    "empty_title",
    "empty_hint",
    "status_bar",
    "panel_border",
    "panel_border_focused",
    "overlay_text",
    "overlay_selected",
    "overlay_dim",
    "splash_title",
    "splash_tagline",
];

impl StyleMap {
    /// Build a `StyleMap` from a `ColorPalette`.
    pub fn from_palette(p: &ColorPalette) -> Self {
        let styles: [Style; 18] = [
            p.source_normal,
            p.source_selected,
            p.source_favorite,
            p.source_domain,
            p.section_heading,
            p.tab_active,
            p.tab_inactive,
            p.search_prompt,
            p.empty_title,
            p.empty_hint,
            p.status_bar,
            p.panel_border,
            p.panel_border_focused,
            p.overlay_text,
            p.overlay_selected,
            p.overlay_dim,
            p.splash_title,
            p.splash_tagline,
        ];

        let mut map = HashMap::with_capacity(ROLE_NAMES.len());
        for (name, style) in ROLE_NAMES.iter().zip(styles.iter()) {
            map.insert(*name, *style);
        }

        Self { map }
    }

    /// Resolve a role name to its `Style`. Returns `Style::default()` for unknown roles.
    pub fn resolve(&self, role: &str) -> Style {
        self.map.get(role).copied().unwrap_or_default()
    }
}

// ============================================================================
// Tests
// ============================================================================
