pub mod completion;
pub mod config;
pub mod lsp;
pub mod workspace;

pub use completion::{Suggestion, suggest};
pub use config::Settings;
pub use lsp::LuchaoLs;
