//! Open-document tracking for the LSP surface.

use dashmap::DashMap;
use tower_lsp_server::ls_types::Uri;

/// A tracked text document: full text plus the language id from `didOpen`.
#[derive(Debug, Clone)]
pub struct Document {
    text: String,
    language_id: Option<String>,
}

impl Document {
    pub fn new(text: String, language_id: Option<String>) -> Self {
        Self { text, language_id }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn language_id(&self) -> Option<&str> {
        self.language_id.as_deref()
    }

    /// Text of `line` strictly before `character`.
    ///
    /// `character` counts UTF-16 code units, per the default LSP position
    /// encoding. A character offset landing inside a surrogate pair clamps
    /// to the code point boundary before it. Returns `None` when the line
    /// does not exist.
    pub fn line_prefix(&self, line: u32, character: u32) -> Option<String> {
        let text_line = self.text.split('\n').nth(line as usize)?;
        let text_line = text_line.strip_suffix('\r').unwrap_or(text_line);

        let mut prefix = String::new();
        let mut units: u32 = 0;
        for ch in text_line.chars() {
            let width = ch.len_utf16() as u32;
            if units + width > character {
                break;
            }
            units += width;
            prefix.push(ch);
        }
        Some(prefix)
    }
}

/// The central store for all open documents.
#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: DashMap<Uri, Document>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, uri: Uri, text: String, language_id: Option<String>) {
        self.documents.insert(uri, Document::new(text, language_id));
    }

    /// Replace the text of a tracked document, keeping its language id.
    pub fn update_text(&self, uri: &Uri, text: String) {
        if let Some(mut document) = self.documents.get_mut(uri) {
            document.text = text;
        }
    }

    pub fn remove(&self, uri: &Uri) {
        self.documents.remove(uri);
    }

    pub fn language_id(&self, uri: &Uri) -> Option<String> {
        self.documents
            .get(uri)
            .and_then(|document| document.language_id().map(str::to_string))
    }

    pub fn line_prefix(&self, uri: &Uri, line: u32, character: u32) -> Option<String> {
        self.documents
            .get(uri)
            .and_then(|document| document.line_prefix(line, character))
    }
}
