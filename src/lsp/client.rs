//! Client notification routing.
//!
//! `ClientNotifier` wraps `tower_lsp_server::Client` and centralizes how
//! resolver events reach the user: info events go to the log channel,
//! warnings are shown as messages (the resolver guarantees at most one per
//! resolution).

use tower_lsp_server::Client;
use tower_lsp_server::ls_types::MessageType;

use crate::workspace::resolver::{SettingsEvent, SettingsEventKind};

#[derive(Clone)]
pub(crate) struct ClientNotifier {
    client: Client,
}

impl ClientNotifier {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    pub(crate) async fn log_info(&self, message: impl Into<String>) {
        self.client
            .log_message(MessageType::INFO, message.into())
            .await;
    }

    /// Route settings events to the client: `Info` is logged, `Warning` is
    /// shown to the user.
    pub(crate) async fn report_settings_events(&self, events: &[SettingsEvent]) {
        for event in events {
            match event.kind {
                SettingsEventKind::Info => {
                    self.client
                        .log_message(MessageType::INFO, event.message.clone())
                        .await;
                }
                SettingsEventKind::Warning => {
                    self.client
                        .show_message(MessageType::WARNING, event.message.clone())
                        .await;
                }
            }
        }
    }
}
