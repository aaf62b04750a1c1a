//! Lexical front end for a small JavaScript-like language.
//!
//! [`tokenize`] turns source text into [`Token`]s tagged with character
//! offsets, or fails with the first [`SyntaxError`]. [`annotate`] builds the
//! same error shape for any located record, so a parser layered on top can
//! report failures that render identically.

pub mod syntax;

pub use syntax::{
    annotate, line_col, tokenize, ErrorKind, Lexeme, Located, Position, RuleKind, Scanner,
    SyntaxError, Token, TokenKind, TokenValue,
};
