pub mod annotate;
pub mod error;
pub mod operators;
pub mod position;
pub mod rules;
pub mod scanner;
pub mod token;
pub mod tokenize;

pub use annotate::{annotate, Located, Position};
pub use error::{ErrorKind, SyntaxError};
pub use position::line_col;
pub use rules::RuleKind;
pub use scanner::{Lexeme, Scanner};
pub use token::{Token, TokenKind, TokenValue};
pub use tokenize::tokenize;
