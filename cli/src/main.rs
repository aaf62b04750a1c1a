use clap::Parser;

mod commands;
mod core;

use commands::Commands;
use core::exit_code::ExitCode;

#[derive(Parser)]
#[command(name = "jslex")]
#[command(
    about = "Tokenize JavaScript-like source text. Defaults to 'tokens' if no subcommand is provided."
)]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
struct Args {
    #[arg(
        short,
        long,
        help = "Enable debug logging",
        global = true,
        env = "JSLEX_DEBUG"
    )]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    tokens_args: commands::tokens::TokensArgs,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        let exit_code = ExitCode::from(&e);
        std::process::exit(exit_code.code());
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    crate::core::logger::Logger::init(args.debug);

    match args.command {
        Some(Commands::Tokens(tokens_args)) => commands::tokens::execute(&tokens_args),
        None => commands::tokens::execute(&args.tokens_args),
    }
}
