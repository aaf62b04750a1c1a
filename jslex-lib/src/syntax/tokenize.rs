use super::{
    annotate::annotate,
    error::{ErrorKind, SyntaxError},
    rules::RuleKind,
    scanner::{Lexeme, Scanner},
    token::{Token, TokenValue},
};

/// Converts `source` into its token stream. Whitespace and comments are
/// dropped; the first lexical error aborts the whole call.
pub fn tokenize(source: &str) -> Result<Vec<Token>, SyntaxError> {
    let mut tokens = Vec::new();
    for lexeme in Scanner::new(source) {
        if let Some(token) = cook(lexeme?)? {
            tokens.push(token);
        }
    }
    Ok(tokens)
}

fn cook(lexeme: Lexeme<'_>) -> Result<Option<Token>, SyntaxError> {
    let value = match lexeme.rule {
        RuleKind::Whitespace | RuleKind::LineComment | RuleKind::BlockComment => return Ok(None),
        RuleKind::Name => TokenValue::Name(lexeme.text.to_string()),
        RuleKind::Number => TokenValue::Number(parse_number(&lexeme)?),
        RuleKind::String => TokenValue::String(strip_quotes(lexeme.text).to_string()),
        RuleKind::Operator => TokenValue::Operator(lexeme.text.to_string()),
    };
    Ok(Some(Token::new(value, lexeme.from, lexeme.to)))
}

fn parse_number(lexeme: &Lexeme<'_>) -> Result<f64, SyntaxError> {
    match lexeme.text.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(annotate(
            lexeme,
            format!("Bad number '{}'", lexeme.text),
            ErrorKind::InvalidNumber,
        )),
    }
}

// Delimiters are single ASCII quotes.
fn strip_quotes(text: &str) -> &str {
    text.get(1..text.len().saturating_sub(1)).unwrap_or_default()
}
