// src/config.rs

use anyhow::{anyhow, Context, Result};
use std::env;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/";

/// How the table is presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "table" => Some(OutputFormat::Table),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Origin the CSV path is resolved against.
    pub base_url: Url,
    pub output: OutputFormat,
    pub search: Option<String>,
    pub page: usize,
}

impl Config {
    /// Read `CSVTABLE_BASE_URL`, `CSVTABLE_OUTPUT`, `CSVTABLE_SEARCH` and
    /// `CSVTABLE_PAGE` from the environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let base = get("CSVTABLE_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url =
            Url::parse(&base).with_context(|| format!("parsing CSVTABLE_BASE_URL {}", base))?;

        let output = match get("CSVTABLE_OUTPUT") {
            Some(s) => OutputFormat::from_str(&s)
                .ok_or_else(|| anyhow!("CSVTABLE_OUTPUT must be `table` or `json`, got {:?}", s))?,
            None => OutputFormat::Table,
        };

        let page = match get("CSVTABLE_PAGE") {
            Some(s) => s
                .trim()
                .parse::<usize>()
                .with_context(|| format!("parsing CSVTABLE_PAGE {:?}", s))?,
            None => 1,
        };

        Ok(Self {
            base_url,
            output,
            search: get("CSVTABLE_SEARCH"),
            page,
        })
    }
}
