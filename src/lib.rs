pub mod config;
pub mod error;
pub mod fetch;
pub mod load;
pub mod parse;
pub mod render;

pub use error::LoadError;
pub use load::Loader;
pub use parse::{parse_csv, ParsedCsv, Record};
pub use render::{Column, ErrorContainer, TableOptions, TableRenderer};
