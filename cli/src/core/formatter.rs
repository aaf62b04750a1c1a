use clap::ValueEnum;
use serde::Serialize;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

pub struct Formatter {
    engine: OutputFormat,
}

impl Formatter {
    pub fn new(engine: OutputFormat) -> Self {
        Self { engine }
    }

    /// Errors are rendered on stdout only in JSON mode; text mode reports
    /// them on stderr alone.
    pub fn format_error<T: Serialize>(&self, error: &T) -> Option<String> {
        match self.engine {
            OutputFormat::Text => None,
            OutputFormat::Json => Some(serde_json::to_string_pretty(error).unwrap_or_default()),
        }
    }

    /// Text output puts one item per line; an empty list prints `empty_msg`.
    pub fn format_list<T: Serialize + Display>(&self, list: &[T], empty_msg: &str) -> String {
        match self.engine {
            OutputFormat::Text => {
                if list.is_empty() {
                    return format!("{empty_msg}\n");
                }
                list.iter().map(|item| format!("{item}\n")).collect()
            }
            OutputFormat::Json => {
                serde_json::to_string_pretty(list).unwrap_or_else(|_| "[]".to_string())
            }
        }
    }
}

pub fn get_formatter(output_format: &OutputFormat) -> Formatter {
    Formatter::new(*output_format)
}
