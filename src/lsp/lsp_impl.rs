use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tower_lsp_server::jsonrpc::Result;
use tower_lsp_server::ls_types::*;
use tower_lsp_server::{Client, LanguageServer};

use crate::completion::{Suggestion, suggest};
use crate::lsp::client::ClientNotifier;
use crate::lsp::settings_manager::SettingsManager;
use crate::workspace::documents::DocumentStore;
use crate::workspace::loader::{ConfigLoader, FsConfigLoader};
use crate::workspace::resolver::{SettingsEvent, SettingsLoadOutcome, resolve_settings};

/// Language ids the completion provider is scoped to.
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "html",
    "vue",
    "react",
    "javascript",
    "javascriptreact",
    "typescriptreact",
];

/// Upper bound on the startup configuration search.
const SETTINGS_RESOLVE_TIMEOUT: Duration = Duration::from_secs(10);

pub struct LuchaoLs {
    client: Client,
    settings_manager: SettingsManager,
    document_store: DocumentStore,
    loader: Arc<dyn ConfigLoader>,
    /// Resolver events collected during `initialize()` and reported in
    /// `initialized()`, once the client is ready to receive notifications.
    pending_events: Mutex<Vec<SettingsEvent>>,
}

impl std::fmt::Debug for LuchaoLs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LuchaoLs")
            .field("settings_manager", &self.settings_manager)
            .field("document_store", &"DocumentStore")
            .finish_non_exhaustive()
    }
}

impl LuchaoLs {
    pub fn new(client: Client) -> Self {
        Self::with_loader(client, Arc::new(FsConfigLoader))
    }

    /// Construct with an injected loader (used by tests).
    pub fn with_loader(client: Client, loader: Arc<dyn ConfigLoader>) -> Self {
        Self {
            client,
            settings_manager: SettingsManager::new(),
            document_store: DocumentStore::new(),
            loader,
            pending_events: Mutex::new(Vec::new()),
        }
    }

    fn notifier(&self) -> ClientNotifier {
        ClientNotifier::new(self.client.clone())
    }

    /// Workspace root from initialize params: workspace folders first, then
    /// the deprecated `root_uri`, then the current working directory.
    fn workspace_root(params: &InitializeParams) -> Option<PathBuf> {
        if let Some(folders) = &params.workspace_folders {
            return folders
                .first()
                .and_then(|folder| folder.uri.to_file_path())
                .map(|path| path.into_owned());
        }

        #[allow(deprecated)] // Support for older LSP clients
        let root_uri = params.root_uri.as_ref();
        if let Some(root_uri) = root_uri {
            return root_uri.to_file_path().map(|path| path.into_owned());
        }

        std::env::current_dir().ok()
    }

    /// Run the configuration search off the protocol thread, bounded by a
    /// timeout so a slow filesystem cannot stall the handshake forever.
    async fn resolve_startup_settings(&self, root_path: Option<PathBuf>) -> SettingsLoadOutcome {
        let loader = Arc::clone(&self.loader);
        let handle =
            tokio::task::spawn_blocking(move || resolve_settings(root_path.as_deref(), &*loader));

        match tokio::time::timeout(SETTINGS_RESOLVE_TIMEOUT, handle).await {
            Ok(Ok(outcome)) => outcome,
            Ok(Err(join_error)) => {
                SettingsLoadOutcome::fallback(format!("Settings resolution failed: {}", join_error))
            }
            Err(_) => SettingsLoadOutcome::fallback("Settings resolution timed out"),
        }
    }
}

impl LanguageServer for LuchaoLs {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        let root_path = Self::workspace_root(&params);
        self.settings_manager.set_root_path(root_path.clone());

        let outcome = self.resolve_startup_settings(root_path).await;
        let trigger = outcome.settings.trigger_string();
        self.settings_manager.apply_settings(outcome.settings);
        self.pending_events.lock().unwrap().extend(outcome.events);

        Ok(InitializeResult {
            server_info: Some(ServerInfo {
                name: "luchaocss-ls".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Kind(
                    TextDocumentSyncKind::FULL,
                )),
                completion_provider: Some(CompletionOptions {
                    trigger_characters: Some(vec![trigger]),
                    ..CompletionOptions::default()
                }),
                ..ServerCapabilities::default()
            },
            offset_encoding: None,
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        let notifier = self.notifier();

        let root_path = self.settings_manager.root_path();
        if let Some(root) = root_path.as_deref() {
            notifier
                .log_info(format!("Using workspace root: {}", root.display()))
                .await;
        }

        let events = std::mem::take(&mut *self.pending_events.lock().unwrap());
        notifier.report_settings_events(&events).await;
        notifier.log_info("luchaocss-ls initialized").await;
    }

    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let document = params.text_document;
        self.document_store.insert(
            document.uri,
            document.text,
            Some(document.language_id),
        );
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        // Full sync: the last content change carries the whole document.
        if let Some(change) = params.content_changes.into_iter().next_back() {
            self.document_store
                .update_text(&params.text_document.uri, change.text);
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        self.document_store.remove(&params.text_document.uri);
    }

    async fn completion(&self, params: CompletionParams) -> Result<Option<CompletionResponse>> {
        let uri = params.text_document_position.text_document.uri;
        let position = params.text_document_position.position;

        let Some(language_id) = self.document_store.language_id(&uri) else {
            return Ok(None);
        };
        if !SUPPORTED_LANGUAGES.contains(&language_id.as_str()) {
            return Ok(None);
        }

        let Some(line_prefix) =
            self.document_store
                .line_prefix(&uri, position.line, position.character)
        else {
            return Ok(None);
        };

        let settings = self.settings_manager.load_settings();
        let Some(suggestions) = suggest(&line_prefix, &settings) else {
            return Ok(None);
        };

        let items = suggestions.into_iter().map(to_completion_item).collect();
        Ok(Some(CompletionResponse::Array(items)))
    }
}

/// Map a suggestion to a plain-text completion item: label plus a
/// description shown next to it, no snippet expansion, no extra edits.
fn to_completion_item(suggestion: Suggestion) -> CompletionItem {
    CompletionItem {
        label_details: Some(CompletionItemLabelDetails {
            detail: None,
            description: Some(suggestion.description),
        }),
        label: suggestion.label,
        kind: Some(CompletionItemKind::TEXT),
        ..CompletionItem::default()
    }
}
