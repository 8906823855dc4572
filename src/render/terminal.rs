// src/render/terminal.rs

use super::{Column, ErrorContainer, TableOptions, TableRenderer, ERROR_CONTAINER_ID};
use anyhow::{Context, Result};
use prettytable::{format, Cell, Row, Table};
use std::io::Write;
use tracing::debug;

/// Cell width used when horizontal scrolling is off.
const CLIP_WIDTH: usize = 40;

/// Prints one page of the table with box characters.
pub struct TerminalTable<W: Write> {
    out: W,
    search: Option<String>,
    page: usize,
}

impl<W: Write> TerminalTable<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            search: None,
            page: 1,
        }
    }

    /// Only rows with a cell containing `term` (case-insensitive) are shown.
    pub fn with_search(mut self, term: Option<String>) -> Self {
        self.search = term.filter(|t| !t.trim().is_empty());
        self
    }

    /// 1-based page to show; clamped to the last page.
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn clip(value: &str) -> String {
    if value.chars().count() <= CLIP_WIDTH {
        return value.to_string();
    }
    let mut s: String = value.chars().take(CLIP_WIDTH - 1).collect();
    s.push('…');
    s
}

impl<W: Write> TableRenderer for TerminalTable<W> {
    fn render(
        &mut self,
        columns: &[Column],
        rows: &[Vec<String>],
        options: &TableOptions,
    ) -> Result<()> {
        let needle = match (&self.search, options.searching) {
            (Some(term), true) => Some(term.to_lowercase()),
            _ => None,
        };
        let matching: Vec<&Vec<String>> = rows
            .iter()
            .filter(|row| match &needle {
                Some(n) => row.iter().any(|v| v.to_lowercase().contains(n.as_str())),
                None => true,
            })
            .collect();

        let page_length = options.page_length.max(1);
        let pages = matching.len().div_ceil(page_length).max(1);
        let page = self.page.min(pages);
        let start = (page - 1) * page_length;
        let end = (start + page_length).min(matching.len());
        debug!(page, pages, shown = end - start, "rendering table page");

        let fmt_cell = |v: &str| {
            if options.scroll_x {
                Cell::new(v)
            } else {
                Cell::new(&clip(v))
            }
        };

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(Row::new(
            columns
                .iter()
                .map(|c| fmt_cell(c.title.as_str()).style_spec("b"))
                .collect(),
        ));
        for row in &matching[start..end] {
            table.add_row(Row::new(row.iter().map(|v| fmt_cell(v.as_str())).collect()));
        }

        table
            .print(&mut self.out)
            .context("writing table to terminal")?;

        let first = if end > start { start + 1 } else { 0 };
        write!(
            self.out,
            "Showing {} to {} of {} entries",
            first,
            end,
            matching.len()
        )?;
        if needle.is_some() {
            write!(self.out, " (filtered from {} total entries)", rows.len())?;
        }
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Error container that writes each message as a line to a writer, e.g.
/// stderr. Earlier messages stay in the output.
pub struct WriterContainer<W: Write> {
    out: W,
}

impl<W: Write> WriterContainer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ErrorContainer for WriterContainer<W> {
    fn replace_contents(&mut self, html: &str) {
        // nowhere left to report a failing writer
        let _ = writeln!(self.out, "#{}: {}", ERROR_CONTAINER_ID, html);
        let _ = self.out.flush();
    }
}
