/// 1-based line and column of the character at `offset`. Offsets past the
/// end of `source` resolve to the position just after the last character.
pub fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let mut line = 1;
    let mut column = 1;
    for ch in source.chars().take(offset) {
        if ch == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }
    (line, column)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_col_first_line() {
        assert_eq!(line_col("abc", 0), (1, 1));
        assert_eq!(line_col("abc", 2), (1, 3));
    }

    #[test]
    fn test_line_col_after_newlines() {
        let source = "a\nbc\nd";
        assert_eq!(line_col(source, 2), (2, 1));
        assert_eq!(line_col(source, 3), (2, 2));
        assert_eq!(line_col(source, 5), (3, 1));
    }

    #[test]
    fn test_line_col_counts_characters() {
        assert_eq!(line_col("é#", 1), (1, 2));
    }

    #[test]
    fn test_line_col_past_end() {
        assert_eq!(line_col("ab", 10), (1, 3));
    }
}
