use jslex_lib::{tokenize, ErrorKind, Lexeme, Scanner, TokenKind, TokenValue};

const CORPUS: &[&str] = &[
    "",
    "   \n\t",
    "x = 1 + 2;",
    "var s = 'it\\'s'; // trailing\nvar t = \"two\nlines\";",
    "/* header */\nfunction f(a, b) {\n  return a >>> b !== 0 ? a : -b;\n}\n",
    "a.b[c] = {d: 1.5e+3, e: [1, 2, 3]};",
    "while (i <= 10) { i += 1; j--; k = ~k ^ 0x; }",
    "'héllo wörld' + \"ünïcode\"",
    "x/*a*//*b*/y//c",
];

fn lexemes(source: &str) -> Vec<Lexeme<'_>> {
    Scanner::new(source)
        .collect::<Result<_, _>>()
        .unwrap_or_else(|e| panic!("scan failed for {source:?}: {e}"))
}

#[test]
fn lexemes_cover_source_without_gaps() {
    for source in CORPUS {
        let mut expected_from = 0;
        for lexeme in lexemes(source) {
            assert_eq!(lexeme.from, expected_from, "gap or overlap in {source:?}");
            assert!(lexeme.from < lexeme.to, "empty lexeme in {source:?}");
            expected_from = lexeme.to;
        }
        assert_eq!(expected_from, source.chars().count(), "{source:?} not fully covered");
    }
}

#[test]
fn lexeme_text_matches_span() {
    for source in CORPUS {
        let chars: Vec<char> = source.chars().collect();
        for lexeme in lexemes(source) {
            let text: String = chars[lexeme.from..lexeme.to].iter().collect();
            assert_eq!(lexeme.text, text);
        }
    }
}

#[test]
fn tokens_are_the_non_trivia_lexemes() {
    for source in CORPUS {
        let tokens = tokenize(source).unwrap();
        let spans: Vec<(usize, usize)> = lexemes(source)
            .into_iter()
            .filter(|l| !l.is_trivia())
            .map(|l| (l.from, l.to))
            .collect();
        let token_spans: Vec<(usize, usize)> = tokens.iter().map(|t| (t.from, t.to)).collect();
        assert_eq!(token_spans, spans);
    }
}

#[test]
fn token_spans_are_ordered_and_in_bounds() {
    for source in CORPUS {
        let len = source.chars().count();
        let tokens = tokenize(source).unwrap();
        for pair in tokens.windows(2) {
            assert!(pair[0].to <= pair[1].from);
        }
        for token in &tokens {
            assert!(token.from < token.to && token.to <= len);
        }
    }
}

#[test]
fn string_span_includes_delimiters() {
    let tokens = tokenize("'héllo wörld' + \"ünïcode\"").unwrap();
    assert_eq!(tokens[0].value, TokenValue::String("héllo wörld".into()));
    assert_eq!(tokens[0].span(), 0..13);
    assert_eq!(tokens[1].span(), 14..15);
    assert_eq!(tokens[2].value, TokenValue::String("ünïcode".into()));
    assert_eq!(tokens[2].span(), 16..25);
}

#[test]
fn statement_kinds() {
    let kinds: Vec<TokenKind> = tokenize("a.b[c] = {d: 1.5e+3};")
        .unwrap()
        .iter()
        .map(|t| t.kind())
        .collect();
    use TokenKind::*;
    assert_eq!(
        kinds,
        vec![
            Name, Operator, Name, Operator, Name, Operator, Operator, Operator, Name, Operator,
            Number, Operator, Operator
        ]
    );
}

#[test]
fn concurrent_calls_do_not_interfere() {
    let expected: Vec<_> = CORPUS.iter().map(|s| tokenize(s)).collect();
    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(|| CORPUS.iter().map(|s| tokenize(s)).collect::<Vec<_>>())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn errors_abort_with_no_tokens() {
    let cases = [
        ("a = @", ErrorKind::UnrecognizedCharacter, 4),
        ("a = 'b", ErrorKind::UnterminatedString, 4),
        ("a /* b", ErrorKind::UnterminatedComment, 2),
        ("a = 9e999", ErrorKind::InvalidNumber, 4),
    ];
    for (source, kind, from) in cases {
        let err = tokenize(source).unwrap_err();
        assert_eq!(err.kind, kind, "{source:?}");
        assert_eq!(err.from, from, "{source:?}");
    }
}

#[test]
fn error_json_shape() {
    let err = tokenize("#").unwrap_err();
    let json = serde_json::to_value(&err).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "kind": "UnrecognizedCharacter",
            "message": "Unrecognized character '#'",
            "from": 0,
            "to": 1
        })
    );
}
