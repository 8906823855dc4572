// src/parse/mod.rs

use crate::render::Column;

/// One data line, aligned positionally with the header list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    values: Vec<String>,
}

impl Record {
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Value for the column called `name`. With duplicate header names the
    /// last one wins.
    pub fn get<'a>(&'a self, headers: &[String], name: &str) -> Option<&'a str> {
        headers
            .iter()
            .rposition(|h| h == name)
            .and_then(|i| self.values.get(i))
            .map(String::as_str)
    }
}

/// Header list plus the rows beneath it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedCsv {
    headers: Vec<String>,
    records: Vec<Record>,
}

impl ParsedCsv {
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// One column descriptor per header, in header order.
    pub fn columns(&self) -> Vec<Column> {
        self.headers.iter().map(|h| Column::new(h.as_str())).collect()
    }

    /// Rows as arrays: `grid[r][i]` is row `r`'s value for the name of
    /// header `i`, so duplicate headers all show the last column's value.
    pub fn to_grid(&self) -> Vec<Vec<String>> {
        self.records
            .iter()
            .map(|r| {
                self.headers
                    .iter()
                    .map(|h| r.get(&self.headers, h).unwrap_or_default().to_string())
                    .collect()
            })
            .collect()
    }
}

/// Split comma-separated, newline-delimited text into headers and rows.
///
/// No quoting or escaping. Short lines are padded with `""`, long lines
/// lose their extra fields, and every header and value is trimmed. Empty
/// input gives a single empty header and no rows.
pub fn parse_csv(text: &str) -> ParsedCsv {
    let mut lines = text.trim().split('\n');

    let headers: Vec<String> = lines
        .next()
        .unwrap_or_default()
        .split(',')
        .map(|h| h.trim().to_string())
        .collect();

    let records = lines
        .map(|line| {
            let mut fields = line.split(',');
            let values = headers
                .iter()
                .map(|_| fields.next().map(str::trim).unwrap_or_default().to_string())
                .collect();
            Record { values }
        })
        .collect();

    ParsedCsv { headers, records }
}
