//! # Command Dispatcher
//!
//! A registry mapping fully-qualified command ids to async handlers,
//! standing in for the host's global command registry. Registration is
//! explicit and scoped: [`CommandRegistry::register`] returns a
//! [`Registration`] that unregisters on drop, so an extension that
//! retains its handles and drops them on deactivation cannot leak
//! commands into the host process.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, Weak};

use futures::future::BoxFuture;
use log::debug;

use crate::host::StoreError;

pub mod scroll;

/// Type-erased async command handler. Zero-argument: the host invokes
/// commands in response to discrete user actions, not with payloads.
pub type CommandHandler =
    Box<dyn Fn() -> BoxFuture<'static, Result<(), CommandError>> + Send + Sync>;

type CommandMap = Mutex<HashMap<String, Arc<CommandHandler>>>;

#[derive(Debug)]
pub enum CommandError {
    /// Another handler already owns this id.
    AlreadyRegistered(String),
    /// No handler is registered under this id.
    NotFound(String),
    /// A handler's configuration write failed at the host layer.
    Store(StoreError),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::AlreadyRegistered(id) => {
                write!(f, "command '{id}' is already registered")
            }
            CommandError::NotFound(id) => write!(f, "no command registered as '{id}'"),
            CommandError::Store(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<StoreError> for CommandError {
    fn from(err: StoreError) -> Self {
        CommandError::Store(err)
    }
}

#[derive(Default)]
pub struct CommandRegistry {
    commands: Arc<CommandMap>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` under `id`. The returned handle unregisters
    /// the command when dropped; ids must be unique.
    pub fn register(
        &self,
        id: impl Into<String>,
        handler: CommandHandler,
    ) -> Result<Registration, CommandError> {
        let id = id.into();
        let mut commands = self.commands.lock().expect("command registry lock poisoned");
        if commands.contains_key(&id) {
            return Err(CommandError::AlreadyRegistered(id));
        }
        commands.insert(id.clone(), Arc::new(handler));
        debug!("registered command {id}");
        Ok(Registration { commands: Arc::downgrade(&self.commands), id })
    }

    /// Invokes the handler registered under `id`.
    pub async fn execute(&self, id: &str) -> Result<(), CommandError> {
        // Clone the handler out so the map lock is never held across an await.
        let handler = {
            let commands = self.commands.lock().expect("command registry lock poisoned");
            commands.get(id).cloned()
        };
        match handler {
            Some(handler) => handler().await,
            None => Err(CommandError::NotFound(id.to_string())),
        }
    }

    pub fn is_registered(&self, id: &str) -> bool {
        self.commands
            .lock()
            .expect("command registry lock poisoned")
            .contains_key(id)
    }
}

/// Disposable handle for one registered command.
#[derive(Debug)]
pub struct Registration {
    commands: Weak<CommandMap>,
    id: String,
}

impl Registration {
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Drop for Registration {
    fn drop(&mut self) {
        if let Some(commands) = self.commands.upgrade() {
            if let Ok(mut commands) = commands.lock() {
                commands.remove(&self.id);
                debug!("released command {}", self.id);
            }
        }
    }
}
