use crate::commands::validators;
use crate::core::error::JslexError;
use crate::core::formatter::OutputFormat;
use clap::Args;
use std::io::Read;

#[derive(Debug, Args)]
pub struct OutputArgs {
    #[arg(
        short = 'o',
        long = "output",
        help = "Output format: text or json",
        default_value_t = OutputFormat::Text,
        value_enum,
        ignore_case = true
    )]
    pub output: OutputFormat,

    #[arg(long = "escape-html", help = "Escape '&' and '<' in the rendered output")]
    pub escape_html: bool,
}

#[derive(Debug, Args)]
pub struct InputArgs {
    #[arg(
        short = 's',
        long = "source",
        help = "Path to the source file (reads stdin when neither --source nor --text is given)",
        conflicts_with = "text"
    )]
    pub source: Option<String>,

    #[arg(short = 't', long = "text", help = "Source text to tokenize")]
    pub text: Option<String>,
}

/// Source text together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceInput {
    pub file_path: Option<String>,
    pub text: String,
}

impl SourceInput {
    pub fn label(&self) -> &str {
        self.file_path.as_deref().unwrap_or("<input>")
    }
}

impl InputArgs {
    pub fn read(&self) -> Result<SourceInput, JslexError> {
        if let Some(text) = &self.text {
            return Ok(SourceInput {
                file_path: None,
                text: text.clone(),
            });
        }
        if let Some(path) = &self.source {
            validators::validate_file_exists(path).map_err(JslexError::File)?;
            return Ok(SourceInput {
                file_path: Some(path.clone()),
                text: std::fs::read_to_string(path)?,
            });
        }
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(SourceInput {
            file_path: None,
            text,
        })
    }
}
