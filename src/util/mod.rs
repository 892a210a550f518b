//! Utility functions for common operations.
//!
//! - **Text processing**: Unicode-aware string width calculation and
//!   truncation for terminal rendering.
//! - **Outbound links**: validated, error-swallowing wrappers around
//!   browser, mail, and clipboard launches.

pub mod links;
mod text;

pub use text::{display_width, truncate_to_width};
