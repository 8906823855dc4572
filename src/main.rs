use anyhow::{Context, Result};
use csvtable::{
    config::{Config, OutputFormat},
    render::{JsonTable, TerminalTable, WriterContainer},
    Loader, TableRenderer,
};
use reqwest::Client;
use std::io;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .init();

    // ─── 2) config ───────────────────────────────────────────────────
    let cfg = Config::from_env().context("reading configuration")?;
    info!(base_url = %cfg.base_url, output = ?cfg.output, "startup");

    // ─── 3) pick a renderer ──────────────────────────────────────────
    let renderer: Box<dyn TableRenderer> = match cfg.output {
        OutputFormat::Table => Box::new(
            TerminalTable::new(io::stdout())
                .with_search(cfg.search.clone())
                .with_page(cfg.page),
        ),
        OutputFormat::Json => Box::new(JsonTable::new(io::stdout())),
    };

    // ─── 4) load once ────────────────────────────────────────────────
    let mut loader = Loader::new(
        Client::new(),
        cfg.base_url.clone(),
        renderer,
        WriterContainer::new(io::stderr()),
    );
    loader.start().await;

    info!("all done");
    Ok(())
}
