//! # Extension Lifecycle
//!
//! Wires the three commands into the host registry on activation and
//! releases them together on deactivation. The registration handles are
//! the only resource the extension owns; there is no other cleanup.

use std::sync::Arc;

use futures::future::BoxFuture;
use log::info;

use crate::commands::scroll::scroll_handler;
use crate::commands::{CommandError, CommandHandler, CommandRegistry, Registration};
use crate::core::settings::RatioSetting;
use crate::core::update_flow;
use crate::host::{ConfigStore, HostWindow, ScrollDirection, Viewport};

/// Namespace prefix for every command and configuration key this
/// extension contributes.
pub const EXTENSION_NAME: &str = "partial-navigation";

/// Fully-qualified id of the set-ratio command.
pub const SET_RATIO_COMMAND: &str = "partial-navigation.scroll";

/// Fully-qualified id of a scroll command
/// (`partial-navigation.up` / `partial-navigation.down`).
pub fn scroll_command_id(direction: ScrollDirection) -> String {
    format!("{EXTENSION_NAME}.{direction}")
}

/// The host surfaces the extension consumes, bundled for activation.
#[derive(Clone)]
pub struct EditorHost {
    pub config: Arc<dyn ConfigStore>,
    pub viewport: Arc<dyn Viewport>,
    pub window: Arc<dyn HostWindow>,
}

/// A live extension instance. Owns the command registrations; dropping
/// it (via [`Extension::deactivate`]) releases them all.
#[derive(Debug)]
pub struct Extension {
    subscriptions: Vec<Registration>,
}

impl Extension {
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Releases every command registration together. Nothing else to
    /// clean up.
    pub fn deactivate(self) {
        info!("deactivating, releasing {} command registrations", self.subscriptions.len());
    }
}

fn set_ratio_handler(ratio: RatioSetting, window: Arc<dyn HostWindow>) -> CommandHandler {
    Box::new(move || -> BoxFuture<'static, Result<(), CommandError>> {
        let ratio = ratio.clone();
        let window = Arc::clone(&window);
        Box::pin(async move {
            update_flow::run(&ratio, window.as_ref()).await?;
            Ok(())
        })
    })
}

/// Registers the scroll-up, scroll-down, and set-ratio commands. Each
/// is registered exactly once; the handles are retained in the returned
/// [`Extension`] and released together by [`Extension::deactivate`].
pub fn activate(registry: &CommandRegistry, host: EditorHost) -> Result<Extension, CommandError> {
    let ratio = RatioSetting::new(Arc::clone(&host.config));

    let up = registry.register(
        scroll_command_id(ScrollDirection::Up),
        scroll_handler(ScrollDirection::Up, ratio.clone(), Arc::clone(&host.viewport)),
    )?;
    let down = registry.register(
        scroll_command_id(ScrollDirection::Down),
        scroll_handler(ScrollDirection::Down, ratio.clone(), Arc::clone(&host.viewport)),
    )?;
    let set_ratio = registry.register(
        SET_RATIO_COMMAND,
        set_ratio_handler(ratio, Arc::clone(&host.window)),
    )?;

    info!("activated with commands {}, {}, {}", up.id(), down.id(), set_ratio.id());
    Ok(Extension { subscriptions: vec![up, down, set_ratio] })
}
