//! Wire-level types shared with the host editor.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How long a transient status message stays visible in the host UI.
pub const STATUS_MESSAGE_DURATION: Duration = Duration::from_millis(5000);

/// Direction handed to the host's viewport scroll primitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollDirection {
    Up,
    Down,
}

impl fmt::Display for ScrollDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScrollDirection::Up => write!(f, "up"),
            ScrollDirection::Down => write!(f, "down"),
        }
    }
}

/// Argument object for the host scroll primitive.
/// Serializes to the shape the host expects: `{"to":"up","value":0.5}`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScrollRequest {
    pub to: ScrollDirection,
    pub value: f64,
}

/// Where a configuration write lands. This extension only writes
/// globally (the setting applies across all of the user's workspaces).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigScope {
    Global,
    Workspace,
}
