pub mod shared;
pub mod tokens;
pub mod validators;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Print the token stream of a source")]
    Tokens(tokens::TokensArgs),
}
