//! Host chrome synchronization.
//!
//! The preference store never talks to the terminal directly; it drives the
//! [`Chrome`] trait as a side effect of each preference commit. The terminal
//! implementation applies theme styles and text scale, and mirrors
//! fullscreen transitions back to the app as [`ChromeEvent`]s — the app's
//! fullscreen flag only changes when the confirmation event is observed,
//! never on the request itself.

use tokio::sync::mpsc;

use crate::prefs::TextSize;
use crate::theme::{StyleMap, ThemeVariant};

// ============================================================================
// Events
// ============================================================================

/// Notifications from the chrome back to the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromeEvent {
    /// The host completed a fullscreen transition.
    FullscreenChanged(bool),
}

// ============================================================================
// Chrome Trait
// ============================================================================

/// Presentation hooks the preference store drives after each state commit.
///
/// `apply_dark` and `apply_text_size` must take effect atomically with the
/// call — presentation reads the chrome on the next frame and must never lag
/// a render cycle behind the preference. Fullscreen calls are requests, not
/// commands: the implementation confirms (or ignores) them asynchronously.
pub trait Chrome {
    fn apply_dark(&mut self, on: bool);
    fn apply_text_size(&mut self, size: TextSize);
    fn request_fullscreen(&mut self);
    fn exit_fullscreen(&mut self);
}

// ============================================================================
// Terminal Chrome
// ============================================================================

/// The terminal implementation of [`Chrome`].
///
/// Holds the active `StyleMap` and text scale that all rendering reads.
/// Fullscreen maps to the zen layout (header and hint chrome hidden); a
/// granted transition is reported through the event channel. A dropped or
/// full channel means the request is silently lost, which is the contract:
/// the requester never assumes success.
pub struct TermChrome {
    variant: ThemeVariant,
    styles: StyleMap,
    text_size: TextSize,
    fullscreen: bool,
    events: mpsc::Sender<ChromeEvent>,
}

impl TermChrome {
    pub fn new(events: mpsc::Sender<ChromeEvent>) -> Self {
        let variant = ThemeVariant::Light;
        Self {
            variant,
            styles: StyleMap::from_palette(&variant.palette()),
            text_size: TextSize::default(),
            fullscreen: false,
            events,
        }
    }

    /// Resolve a semantic role name to its `Style`.
    pub fn style(&self, role: &str) -> ratatui::style::Style {
        self.styles.resolve(role)
    }

    pub fn variant(&self) -> ThemeVariant {
        self.variant
    }

    pub fn text_size(&self) -> TextSize {
        self.text_size
    }

    /// What the host has actually granted (not what was requested).
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    fn notify(&self, event: ChromeEvent) -> bool {
        match self.events.try_send(event) {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!(error = %e, "chrome event dropped");
                false
            }
        }
    }
}

impl Chrome for TermChrome {
    fn apply_dark(&mut self, on: bool) {
        // Rebuild the style map in the same call so the next frame already
        // renders with the new palette.
        self.variant = ThemeVariant::from_dark(on);
        self.styles = StyleMap::from_palette(&self.variant.palette());
        tracing::debug!(theme = self.variant.name(), "applied theme");
    }

    fn apply_text_size(&mut self, size: TextSize) {
        // A single value, replaced wholesale: two scales can never be
        // active at once.
        self.text_size = size;
        tracing::debug!(text_size = size.name(), "applied text scale");
    }

    fn request_fullscreen(&mut self) {
        if self.fullscreen {
            return;
        }
        // Only flip local state once the confirmation is actually on its
        // way; a failed send leaves the chrome un-fullscreened.
        if self.notify(ChromeEvent::FullscreenChanged(true)) {
            self.fullscreen = true;
        }
    }

    fn exit_fullscreen(&mut self) {
        if !self.fullscreen {
            return;
        }
        if self.notify(ChromeEvent::FullscreenChanged(false)) {
            self.fullscreen = false;
        }
    }
}

// ============================================================================
// Test Double
// ============================================================================

/// Records every hook invocation, for asserting effect order in tests.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingChrome {
    pub dark: Option<bool>,
    pub text_size: Option<TextSize>,
    pub calls: Vec<String>,
}

#[cfg(test)]
impl Chrome for RecordingChrome {
    fn apply_dark(&mut self, on: bool) {
        self.dark = Some(on);
        self.calls.push(format!("dark:{on}"));
    }

    fn apply_text_size(&mut self, size: TextSize) {
        self.text_size = Some(size);
        self.calls.push(format!("size:{}", size.name()));
    }

    fn request_fullscreen(&mut self) {
        self.calls.push("fullscreen:request".to_string());
    }

    fn exit_fullscreen(&mut self) {
        self.calls.push("fullscreen:exit".to_string());
    }
}

// ============================================================================
// Tests
// ============================================================================
