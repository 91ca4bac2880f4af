//! # Core Decision Logic
//!
//! The extension's own behavior, independent of any particular host:
//!
//! - [`validate`]: is this text a finite number?
//! - [`settings`]: read/write the configured scroll ratio
//! - [`update_flow`]: the prompt → validate → persist state machine
//!
//! Host I/O only enters through the traits in [`crate::host`], so
//! everything here is exercised against fakes in tests.

pub mod settings;
pub mod update_flow;
pub mod validate;
