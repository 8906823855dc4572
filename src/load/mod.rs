// src/load/mod.rs

use crate::{
    error::LoadError,
    fetch::fetch_text,
    parse::parse_csv,
    render::{ErrorContainer, TableOptions, TableRenderer, ERROR_CONTAINER_ID},
};
use anyhow::Context;
use reqwest::Client;
use tracing::{debug, error, info};
use url::Url;

/// Resource loaded by [`Loader::start`].
pub const CSV_PATH: &str = "/data/produits.csv";

/// Shown in the error container when anything goes wrong.
pub const LOAD_FAILED_HTML: &str = "<p>⚠️ Failed to load data table.</p>";

/// Fetches a CSV, parses it and hands the grid to a renderer. Failures end
/// up in the error container, never with the caller.
pub struct Loader<R, E> {
    client: Client,
    base_url: Url,
    renderer: R,
    container: E,
    options: TableOptions,
    started: bool,
}

impl<R: TableRenderer, E: ErrorContainer> Loader<R, E> {
    pub fn new(client: Client, base_url: Url, renderer: R, container: E) -> Self {
        Self {
            client,
            base_url,
            renderer,
            container,
            options: TableOptions::default(),
            started: false,
        }
    }

    /// Startup hook: loads [`CSV_PATH`] the first time it is called and does
    /// nothing afterwards.
    pub async fn start(&mut self) {
        if self.started {
            debug!("already started");
            return;
        }
        self.started = true;
        self.load(CSV_PATH).await;
    }

    /// Load `csv_path` (resolved against the base URL) into the renderer.
    pub async fn load(&mut self, csv_path: &str) {
        match self.try_load(csv_path).await {
            Ok(rows) => info!(path = csv_path, rows, "table rendered"),
            Err(err) => {
                error!(
                    path = csv_path,
                    container = ERROR_CONTAINER_ID,
                    "Error loading CSV: {:#}",
                    err
                );
                self.container.replace_contents(LOAD_FAILED_HTML);
            }
        }
    }

    async fn try_load(&mut self, csv_path: &str) -> Result<usize, LoadError> {
        let url = self
            .base_url
            .join(csv_path)
            .with_context(|| format!("resolving {} against {}", csv_path, self.base_url))?;

        let text = fetch_text(&self.client, &url, csv_path).await?;
        let parsed = parse_csv(&text);
        let rows = parsed.to_grid();

        self.renderer
            .render(&parsed.columns(), &rows, &self.options)
            .context("rendering table")?;
        Ok(rows.len())
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn container(&self) -> &E {
        &self.container
    }

    pub fn into_parts(self) -> (R, E) {
        (self.renderer, self.container)
    }
}
