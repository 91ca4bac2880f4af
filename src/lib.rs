//! Partial Navigation: scroll the viewport by a configurable fraction
//! of a page.
//!
//! Three commands, registered under the `partial-navigation` prefix:
//! scroll up, scroll down, and a prompt to change the configured ratio.
//! The host editor supplies scrolling, configuration storage, and UI
//! through the traits in [`host`]; [`extension::activate`] registers
//! the commands and hands back the handles to release on deactivation.

pub mod commands;
pub mod core;
pub mod extension;
pub mod host;

#[cfg(test)]
pub mod test_support;

pub use extension::{EditorHost, Extension, activate};
