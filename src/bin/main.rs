use clap::Parser;
use tokio::io::{stdin, stdout};
use tower_lsp_server::{LspService, Server};

use luchaocss_ls::LuchaoLs;

/// A Language Server Protocol (LSP) server providing luchaocss utility
/// class completion
#[derive(Parser)]
#[command(name = "luchaocss-ls")]
#[command(version)]
#[command(about = "An LSP server providing luchaocss utility class completion")]
struct Cli {}

#[tokio::main]
async fn main() {
    env_logger::init();
    let _cli = Cli::parse();

    let stdin = stdin();
    let stdout = stdout();

    let (service, socket) = LspService::new(LuchaoLs::new);
    Server::new(stdin, stdout, socket).serve(service).await;
}
