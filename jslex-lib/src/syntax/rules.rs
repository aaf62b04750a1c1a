use super::{error::ErrorKind, operators};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RuleKind {
    Whitespace,
    LineComment,
    BlockComment,
    Name,
    Number,
    String,
    Operator,
}

impl RuleKind {
    /// Trivia is consumed by the scanner but never becomes a token.
    pub fn is_trivia(&self) -> bool {
        matches!(
            self,
            RuleKind::Whitespace | RuleKind::LineComment | RuleKind::BlockComment
        )
    }
}

pub enum Matcher {
    /// An anchored pattern. Patterns never match the empty string.
    Pattern(Regex),
    /// Maximal munch over the operator table.
    Operators,
}

impl Matcher {
    /// Byte length of the match at the start of `input`, if any.
    pub fn match_len(&self, input: &str) -> Option<usize> {
        match self {
            Matcher::Pattern(re) => re.find(input).map(|m| m.end()),
            Matcher::Operators => operators::longest_operator(input).map(str::len),
        }
    }
}

/// Failure raised when a rule's opening delimiter is present but its
/// matcher cannot find the closing one.
pub struct Unterminated {
    pub openers: &'static [&'static str],
    pub kind: ErrorKind,
    pub message: &'static str,
}

impl Unterminated {
    pub fn opens(&self, input: &str) -> bool {
        self.openers.iter().any(|opener| input.starts_with(opener))
    }
}

pub struct Rule {
    pub kind: RuleKind,
    pub matcher: Matcher,
    pub unterminated: Option<Unterminated>,
}

impl Rule {
    fn new(kind: RuleKind, pattern: &str) -> Self {
        Self {
            kind,
            matcher: Matcher::Pattern(Regex::new(pattern).unwrap()),
            unterminated: None,
        }
    }

    fn unterminated(
        mut self,
        openers: &'static [&'static str],
        kind: ErrorKind,
        message: &'static str,
    ) -> Self {
        self.unterminated = Some(Unterminated {
            openers,
            kind,
            message,
        });
        self
    }
}

lazy_static! {
    /// Scanning rules in priority order. The first rule that matches at the
    /// cursor wins.
    pub static ref RULES: Vec<Rule> = vec![
        Rule::new(RuleKind::Whitespace, r"^[\s\x{FEFF}]+"),
        Rule::new(RuleKind::LineComment, r"^//[^\r\n\x{2028}\x{2029}]*"),
        Rule::new(RuleKind::BlockComment, r"^/\*(?s:.)*?\*/").unterminated(
            &["/*"],
            ErrorKind::UnterminatedComment,
            "Unterminated comment",
        ),
        Rule::new(RuleKind::Name, r"^[A-Za-z_][A-Za-z0-9_]*"),
        Rule::new(
            RuleKind::Number,
            r"^[0-9]+(?:\.[0-9]*)?(?:[eE][+-]?[0-9]+)?"
        ),
        Rule::new(
            RuleKind::String,
            r#"^(?:'(?:[^'\\]|\\(?s:.))*'|"(?:[^"\\]|\\(?s:.))*")"#
        )
        .unterminated(
            &["'", "\""],
            ErrorKind::UnterminatedString,
            "Unterminated string",
        ),
        Rule {
            kind: RuleKind::Operator,
            matcher: Matcher::Operators,
            unterminated: None,
        },
    ];
}
