use super::{
    error::{ErrorKind, SyntaxError},
    scanner::Lexeme,
    token::Token,
};
use serde::Serialize;

/// A bare position marker, for errors raised where no token exists yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Position {
    pub from: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<usize>,
}

impl Position {
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to: Some(to) }
    }

    pub fn at(from: usize) -> Self {
        Self { from, to: None }
    }
}

/// Records that may carry a source location.
pub trait Located {
    fn location(&self) -> Option<Position>;
}

impl Located for Position {
    fn location(&self) -> Option<Position> {
        Some(*self)
    }
}

impl Located for Token {
    fn location(&self) -> Option<Position> {
        Some(Position::new(self.from, self.to))
    }
}

impl Located for Lexeme<'_> {
    fn location(&self) -> Option<Position> {
        Some(Position::new(self.from, self.to))
    }
}

impl Located for SyntaxError {
    fn location(&self) -> Option<Position> {
        Some(Position {
            from: self.from,
            to: self.to,
        })
    }
}

impl<T: Located> Located for Option<T> {
    fn location(&self) -> Option<Position> {
        self.as_ref().and_then(|record| record.location())
    }
}

impl<T: Located + ?Sized> Located for &T {
    fn location(&self) -> Option<Position> {
        (**self).location()
    }
}

/// Builds the error value for `record`. It is returned, not raised; callers
/// signal it through `Err`. Records without a location produce an error at
/// offset 0 with no end.
pub fn annotate<R: Located + ?Sized>(
    record: &R,
    message: impl Into<String>,
    kind: ErrorKind,
) -> SyntaxError {
    let position = record.location().unwrap_or_default();
    SyntaxError::new(kind, message.into(), position.from, position.to)
}
