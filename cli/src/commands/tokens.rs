use crate::commands::shared::{InputArgs, OutputArgs};
use crate::core::error::{JslexError, SourceError};
use crate::core::formatter::get_formatter;
use crate::core::html::escape_html;
use crate::debug_log;
use clap::Args;
use jslex_lib::tokenize;

#[derive(Debug, Args)]
pub struct TokensArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn execute(args: &TokensArgs) -> Result<(), Box<dyn std::error::Error>> {
    let input = args.input.read()?;
    debug_log!(
        "Tokenizing {} characters from {}",
        input.text.chars().count(),
        input.label()
    );

    let formatter = get_formatter(&args.output.output);
    match tokenize(&input.text) {
        Ok(tokens) => {
            debug_log!("Produced {} tokens", tokens.len());
            emit(
                &formatter.format_list(&tokens, "No tokens"),
                args.output.escape_html,
            );
            Ok(())
        }
        Err(error) => {
            debug_log!("Tokenizing failed: {error}");
            if let Some(rendered) = formatter.format_error(&error) {
                emit(&rendered, args.output.escape_html);
            }
            let located = SourceError::new(error, &input.text, input.file_path.clone());
            Err(JslexError::Syntax(located).into())
        }
    }
}

fn emit(rendered: &str, escape: bool) {
    let rendered = if escape {
        escape_html(rendered)
    } else {
        rendered.to_string()
    };
    if rendered.ends_with('\n') {
        print!("{rendered}");
    } else {
        println!("{rendered}");
    }
}
