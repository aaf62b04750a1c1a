use super::{
    annotate::{annotate, Position},
    error::{ErrorKind, SyntaxError},
    rules::{RuleKind, RULES},
};
use std::iter::FusedIterator;

/// One scanning step: the rule that matched and the exact text it consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexeme<'a> {
    pub rule: RuleKind,
    pub text: &'a str,
    pub from: usize,
    pub to: usize,
}

impl Lexeme<'_> {
    pub fn is_trivia(&self) -> bool {
        self.rule.is_trivia()
    }
}

/// Cursor over a single source string. Yields every lexeme, trivia included,
/// and stops after the first error.
///
/// `offset` indexes bytes of `source`; `position` counts characters and is
/// what lexemes and errors report.
pub struct Scanner<'a> {
    source: &'a str,
    offset: usize,
    position: usize,
    failed: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            offset: 0,
            position: 0,
            failed: false,
        }
    }

    fn step(&mut self, remaining: &'a str) -> Result<Lexeme<'a>, SyntaxError> {
        let from = self.position;
        for rule in RULES.iter() {
            if let Some(len) = rule.matcher.match_len(remaining) {
                let text = &remaining[..len];
                let to = from + text.chars().count();
                self.offset += len;
                self.position = to;
                return Ok(Lexeme {
                    rule: rule.kind,
                    text,
                    from,
                    to,
                });
            }
            if let Some(unterminated) = rule.unterminated.as_ref() {
                if unterminated.opens(remaining) {
                    let to = from + remaining.chars().count();
                    return Err(annotate(
                        &Position::new(from, to),
                        unterminated.message,
                        unterminated.kind,
                    ));
                }
            }
        }

        let ch = remaining.chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
        Err(annotate(
            &Position::new(from, from + 1),
            format!("Unrecognized character '{ch}'"),
            ErrorKind::UnrecognizedCharacter,
        ))
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Result<Lexeme<'a>, SyntaxError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let remaining = self.source.get(self.offset..).filter(|r| !r.is_empty())?;
        let result = self.step(remaining);
        self.failed = result.is_err();
        Some(result)
    }
}

impl FusedIterator for Scanner<'_> {}
