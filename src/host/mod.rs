//! # Host Editor Surface
//!
//! The seam between this extension and the editor that hosts it. The
//! host supplies four collaborators: a key-value configuration store, a
//! viewport scroll primitive, a modal input box, and a transient status
//! message display. All four are traits here; the extension never
//! implements scrolling, storage, or UI itself.

pub mod memory;
pub mod surfaces;
pub mod types;

pub use memory::MemoryConfigStore;
pub use surfaces::{ConfigStore, HostWindow, InputBoxRequest, StoreError, Viewport};
pub use types::{ConfigScope, STATUS_MESSAGE_DURATION, ScrollDirection, ScrollRequest};
