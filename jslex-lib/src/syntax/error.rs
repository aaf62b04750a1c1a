use serde::Serialize;
use std::fmt;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    UnrecognizedCharacter,
    UnterminatedString,
    UnterminatedComment,
    InvalidNumber,
    /// Raised by the parser layer, which shares this error shape.
    SyntaxError,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::UnrecognizedCharacter => write!(f, "UnrecognizedCharacter"),
            ErrorKind::UnterminatedString => write!(f, "UnterminatedString"),
            ErrorKind::UnterminatedComment => write!(f, "UnterminatedComment"),
            ErrorKind::InvalidNumber => write!(f, "InvalidNumber"),
            ErrorKind::SyntaxError => write!(f, "SyntaxError"),
        }
    }
}

/// Uniform error record shared by the lexer and the parser. Field names
/// match [`Token`](super::token::Token) so either can be rendered the same way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyntaxError {
    pub kind: ErrorKind,
    pub message: String,
    pub from: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<usize>,
}

impl SyntaxError {
    pub fn new(kind: ErrorKind, message: String, from: usize, to: Option<usize>) -> Self {
        Self {
            kind,
            message,
            from,
            to,
        }
    }

    /// The offending span. Errors without an end cover a single character.
    pub fn span(&self) -> Range<usize> {
        self.from..self.to.unwrap_or(self.from + 1)
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to {
            Some(to) => write!(
                f,
                "{} at {}..{}: {}",
                self.kind, self.from, to, self.message
            ),
            None => write!(f, "{} at {}: {}", self.kind, self.from, self.message),
        }
    }
}

impl std::error::Error for SyntaxError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_span() {
        let err = SyntaxError::new(ErrorKind::InvalidNumber, "Bad number".into(), 0, Some(5));
        assert_eq!(err.to_string(), "InvalidNumber at 0..5: Bad number");
    }

    #[test]
    fn test_display_without_end() {
        let err = SyntaxError::new(ErrorKind::SyntaxError, "Expected ';'".into(), 7, None);
        assert_eq!(err.to_string(), "SyntaxError at 7: Expected ';'");
        assert_eq!(err.span(), 7..8);
    }

    #[test]
    fn test_serialize_omits_missing_end() {
        let err = SyntaxError::new(ErrorKind::SyntaxError, "oops".into(), 3, None);
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "kind": "SyntaxError", "message": "oops", "from": 3 })
        );
    }
}
