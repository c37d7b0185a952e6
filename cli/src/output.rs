//! Output formatting

use clap::ValueEnum;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Parse a format name from a config file
    pub fn parse(name: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(name, true).ok()
    }

    /// Print `data` as JSON or YAML, or `rows` as a table.
    pub fn print<T, R>(&self, data: &T, rows: impl FnOnce(&T) -> Vec<R>)
    where
        T: Serialize,
        R: Tabled,
    {
        match self {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(data).unwrap_or_default());
            }
            OutputFormat::Yaml => {
                println!("{}", serde_yaml::to_string(data).unwrap_or_default());
            }
            OutputFormat::Table => {
                println!("{}", render_table(rows(data)));
            }
        }
    }
}

pub fn render_table<R: Tabled>(rows: Vec<R>) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

/// Display helper for optional table cells
pub fn cell(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}
