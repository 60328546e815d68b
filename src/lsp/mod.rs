mod client;
mod lsp_impl;
mod settings_manager;

pub use lsp_impl::{LuchaoLs, SUPPORTED_LANGUAGES};
