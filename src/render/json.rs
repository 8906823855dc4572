// src/render/json.rs

use super::{Column, TableOptions, TableRenderer, TABLE_ELEMENT_ID};
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct InitPayload<'a> {
    target: String,
    data: &'a [Vec<String>],
    columns: &'a [Column],
    #[serde(flatten)]
    options: &'a TableOptions,
}

/// Writes the widget's initialisation payload as one JSON document, for a
/// page script to pick up.
pub struct JsonTable<W: Write> {
    out: W,
}

impl<W: Write> JsonTable<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TableRenderer for JsonTable<W> {
    fn render(
        &mut self,
        columns: &[Column],
        rows: &[Vec<String>],
        options: &TableOptions,
    ) -> Result<()> {
        let payload = InitPayload {
            target: format!("#{}", TABLE_ELEMENT_ID),
            data: rows,
            columns,
            options,
        };
        serde_json::to_writer_pretty(&mut self.out, &payload)
            .context("serialising table payload")?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
