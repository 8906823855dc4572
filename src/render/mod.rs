// src/render/mod.rs

use anyhow::Result;
use serde::Serialize;

pub mod json;
pub mod terminal;

pub use json::JsonTable;
pub use terminal::{TerminalTable, WriterContainer};

/// Element the table widget is mounted on.
pub const TABLE_ELEMENT_ID: &str = "csv-table";
/// Element whose contents are replaced when loading fails.
pub const ERROR_CONTAINER_ID: &str = "table-container";

/// Column descriptor handed to the widget.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Column {
    pub title: String,
}

impl Column {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// Widget options, serialised with the widget's own key names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableOptions {
    pub page_length: usize,
    pub searching: bool,
    pub scroll_x: bool,
    pub responsive: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            page_length: 10,
            searching: true,
            scroll_x: true,
            responsive: true,
        }
    }
}

/// Whatever actually draws the table.
pub trait TableRenderer {
    fn render(
        &mut self,
        columns: &[Column],
        rows: &[Vec<String>],
        options: &TableOptions,
    ) -> Result<()>;
}

/// Fallback area that receives the warning when loading fails.
pub trait ErrorContainer {
    fn replace_contents(&mut self, html: &str);
}

impl<T: TableRenderer + ?Sized> TableRenderer for Box<T> {
    fn render(
        &mut self,
        columns: &[Column],
        rows: &[Vec<String>],
        options: &TableOptions,
    ) -> Result<()> {
        (**self).render(columns, rows, options)
    }
}
