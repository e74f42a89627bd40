// Output formatting for the CLI

use clap::ValueEnum;
use serde::Serialize;

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn is_text(self) -> bool {
        matches!(self, OutputFormat::Text)
    }

    /// Structured formats print the whole value; text output is per command
    pub fn print_value<T: Serialize>(self, value: &T) {
        match self {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
            }
            OutputFormat::Yaml => {
                println!("{}", serde_yaml::to_string(value).unwrap_or_default());
            }
            OutputFormat::Text => {}
        }
    }
}

/// Fixed-width column layout for text output; prints its own header row
pub struct Table {
    widths: Vec<usize>,
}

impl Table {
    pub fn new(columns: &[(&str, usize)]) -> Self {
        let table = Self {
            widths: columns.iter().map(|(_, width)| *width).collect(),
        };
        table.row(
            &columns
                .iter()
                .map(|(name, _)| name.to_string())
                .collect::<Vec<_>>(),
        );
        table
    }

    pub fn row(&self, values: &[String]) {
        let line = values
            .iter()
            .zip(&self.widths)
            .map(|(value, width)| {
                let cell = if value.chars().count() > *width {
                    let kept: String = value.chars().take(width.saturating_sub(3)).collect();
                    format!("{}...", kept)
                } else {
                    value.clone()
                };
                format!("{:<width$}", cell, width = width)
            })
            .collect::<Vec<_>>()
            .join("  ");
        println!("{}", line.trim_end());
    }
}

/// Print a key-value line for text output
pub fn print_field(label: &str, value: &str) {
    println!("{:<12} {}", format!("{}:", label), value);
}
