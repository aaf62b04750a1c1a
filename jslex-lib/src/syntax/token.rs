use serde::Serialize;
use std::fmt;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    Name,
    String,
    Number,
    Operator,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Name => write!(f, "Name"),
            TokenKind::String => write!(f, "String"),
            TokenKind::Number => write!(f, "Number"),
            TokenKind::Operator => write!(f, "Operator"),
        }
    }
}

/// The payload of a token, keyed by its kind. Only `Number` carries a
/// numeric value; every other kind carries text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value")]
pub enum TokenValue {
    Name(String),
    /// Literal content with the outer quotes stripped. Backslash sequences
    /// are kept verbatim.
    String(String),
    Number(f64),
    Operator(String),
}

impl TokenValue {
    pub fn kind(&self) -> TokenKind {
        match self {
            TokenValue::Name(_) => TokenKind::Name,
            TokenValue::String(_) => TokenKind::String,
            TokenValue::Number(_) => TokenKind::Number,
            TokenValue::Operator(_) => TokenKind::Operator,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            TokenValue::Name(s) | TokenValue::String(s) | TokenValue::Operator(s) => Some(s),
            TokenValue::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            TokenValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Number(n) => write!(f, "{n}"),
            TokenValue::String(s) => write!(f, "\"{s}\""),
            TokenValue::Name(s) | TokenValue::Operator(s) => write!(f, "{s}"),
        }
    }
}

/// A classified lexeme. `from`/`to` are character offsets into the source,
/// `to` exclusive, and always include string delimiters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    #[serde(flatten)]
    pub value: TokenValue,
    pub from: usize,
    pub to: usize,
}

impl Token {
    pub fn new(value: TokenValue, from: usize, to: usize) -> Self {
        Self { value, from, to }
    }

    pub fn kind(&self) -> TokenKind {
        self.value.kind()
    }

    pub fn span(&self) -> Range<usize> {
        self.from..self.to
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({}, {})", self.kind(), self.value, self.from, self.to)
    }
}
