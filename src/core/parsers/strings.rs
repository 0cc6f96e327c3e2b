//! Apple `.strings` file parsing.
//!
//! The format is a sequence of `"key" = "value";` pairs with C-style
//! comments. Keys may be unquoted when they contain no whitespace or special
//! characters. Values support the usual escape sequences. Entries keep file
//! order; duplicate keys are preserved here and resolved later by the tree
//! builder (last one wins).

use std::iter::Peekable;
use std::str::Chars;

use thiserror::Error;

use crate::core::entry::LocalizationEntry;

/// Fatal `.strings` syntax errors, reported with a 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StringsParseError {
    #[error("line {line}: unexpected character '{found}'")]
    UnexpectedCharacter { line: usize, found: char },

    #[error("line {line}: unterminated string literal")]
    UnterminatedString { line: usize },

    #[error("line {line}: unterminated block comment")]
    UnterminatedComment { line: usize },

    #[error("line {line}: invalid escape sequence '\\{found}'")]
    InvalidEscape { line: usize, found: char },

    #[error("line {line}: expected '=' after key \"{key}\"")]
    MissingEquals { line: usize, key: String },

    #[error("line {line}: expected quoted value for key \"{key}\"")]
    MissingValue { line: usize, key: String },

    #[error("line {line}: expected ';' after entry for key \"{key}\"")]
    MissingSemicolon { line: usize, key: String },
}

/// Parse a whole `.strings` document into entries in file order.
pub fn parse_table(content: &str) -> Result<Vec<LocalizationEntry>, StringsParseError> {
    let mut scanner = Scanner::new(content);
    let mut entries = Vec::new();

    loop {
        scanner.skip_trivia()?;
        let Some(first) = scanner.peek() else {
            return Ok(entries);
        };

        let key = if first == '"' {
            scanner.read_quoted()?
        } else if is_unquoted_key_char(first) {
            scanner.read_unquoted()
        } else {
            return Err(StringsParseError::UnexpectedCharacter {
                line: scanner.line,
                found: first,
            });
        };

        scanner.skip_trivia()?;
        if scanner.peek() != Some('=') {
            return Err(StringsParseError::MissingEquals {
                line: scanner.line,
                key,
            });
        }
        scanner.bump();

        scanner.skip_trivia()?;
        if scanner.peek() != Some('"') {
            return Err(StringsParseError::MissingValue {
                line: scanner.line,
                key,
            });
        }
        let value = scanner.read_quoted()?;

        scanner.skip_trivia()?;
        if scanner.peek() != Some(';') {
            return Err(StringsParseError::MissingSemicolon {
                line: scanner.line,
                key,
            });
        }
        scanner.bump();

        entries.push(LocalizationEntry::new(key, value));
    }
}

fn is_unquoted_key_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '.' || c == '-'
}

struct Scanner<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
}

impl<'a> Scanner<'a> {
    fn new(content: &'a str) -> Self {
        Self {
            chars: content.chars().peekable(),
            line: 1,
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next();
        if c == Some('\n') {
            self.line += 1;
        }
        c
    }

    /// Skip whitespace and both comment styles.
    fn skip_trivia(&mut self) -> Result<(), StringsParseError> {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() => {
                    self.bump();
                }
                Some('/') => {
                    let mut lookahead = self.chars.clone();
                    lookahead.next();
                    match lookahead.peek() {
                        Some('/') => self.skip_line_comment(),
                        Some('*') => self.skip_block_comment()?,
                        _ => return Ok(()),
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn skip_line_comment(&mut self) {
        while let Some(c) = self.bump() {
            if c == '\n' {
                break;
            }
        }
    }

    fn skip_block_comment(&mut self) -> Result<(), StringsParseError> {
        let start_line = self.line;
        self.bump(); // '/'
        self.bump(); // '*'
        loop {
            match self.bump() {
                Some('*') if self.peek() == Some('/') => {
                    self.bump();
                    return Ok(());
                }
                Some(_) => {}
                None => {
                    return Err(StringsParseError::UnterminatedComment { line: start_line });
                }
            }
        }
    }

    /// Read a double-quoted string literal, resolving escape sequences.
    fn read_quoted(&mut self) -> Result<String, StringsParseError> {
        let start_line = self.line;
        self.bump(); // opening quote
        let mut text = String::new();

        loop {
            match self.bump() {
                Some('"') => return Ok(text),
                Some('\\') => text.push(self.read_escape()?),
                Some(c) => text.push(c),
                None => return Err(StringsParseError::UnterminatedString { line: start_line }),
            }
        }
    }

    fn read_escape(&mut self) -> Result<char, StringsParseError> {
        let line = self.line;
        match self.bump() {
            Some('"') => Ok('"'),
            Some('\\') => Ok('\\'),
            Some('n') => Ok('\n'),
            Some('t') => Ok('\t'),
            Some('r') => Ok('\r'),
            Some('0') => Ok('\0'),
            // Apple tooling writes \Uxxxx; accept the lowercase form too.
            Some('u') | Some('U') => self.read_unicode_escape(line),
            Some(found) => Err(StringsParseError::InvalidEscape { line, found }),
            None => Err(StringsParseError::UnterminatedString { line }),
        }
    }

    fn read_unicode_escape(&mut self, line: usize) -> Result<char, StringsParseError> {
        let mut code = 0u32;
        for _ in 0..4 {
            let digit = self
                .bump()
                .and_then(|c| c.to_digit(16))
                .ok_or(StringsParseError::UnterminatedString { line })?;
            code = code * 16 + digit;
        }
        char::from_u32(code).ok_or(StringsParseError::InvalidEscape { line, found: 'U' })
    }

    /// Read an unquoted key token.
    fn read_unquoted(&mut self) -> String {
        let mut text = String::new();
        while let Some(c) = self.peek() {
            if is_unquoted_key_char(c) {
                text.push(c);
                self.bump();
            } else {
                break;
            }
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_single_entry() {
        let entries = parse_table(r#""hello" = "Hello";"#).unwrap();
        assert_eq!(entries, vec![LocalizationEntry::new("hello", "Hello")]);
    }

    #[test]
    fn test_multiple_entries_keep_order() {
        let entries = parse_table(
            r#"
            "b.second" = "2";
            "a.first" = "1";
            "#,
        )
        .unwrap();
        assert_eq!(
            entries,
            vec![
                LocalizationEntry::new("b.second", "2"),
                LocalizationEntry::new("a.first", "1"),
            ]
        );
    }

    #[test]
    fn test_unquoted_key() {
        let entries = parse_table(r#"settings.title = "Settings";"#).unwrap();
        assert_eq!(
            entries,
            vec![LocalizationEntry::new("settings.title", "Settings")]
        );
    }

    #[test]
    fn test_comments_are_skipped() {
        let entries = parse_table(
            r#"
            /* Block comment
               over two lines */
            "a" = "1";
            // line comment
            "b" = "2"; /* trailing */
            "#,
        )
        .unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_escape_sequences() {
        let entries = parse_table(r#""key" = "line1\nline2 \"quoted\" \\ \t";"#).unwrap();
        assert_eq!(entries[0].value, "line1\nline2 \"quoted\" \\ \t");
    }

    #[test]
    fn test_unicode_escape() {
        let entries = parse_table(r#""key" = "snowman \U2603";"#).unwrap();
        assert_eq!(entries[0].value, "snowman ☃");
        let entries = parse_table(r#""key" = "snowman ☃";"#).unwrap();
        assert_eq!(entries[0].value, "snowman ☃");
    }

    #[test]
    fn test_format_specifiers_pass_through() {
        let entries = parse_table(r#""welcome" = "Hello %@, %d new";"#).unwrap();
        assert_eq!(entries[0].value, "Hello %@, %d new");
    }

    #[test]
    fn test_duplicate_keys_are_kept() {
        let entries = parse_table(
            r#"
            "a" = "1";
            "a" = "2";
            "#,
        )
        .unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_table("").unwrap().is_empty());
        assert!(parse_table("  /* nothing */  ").unwrap().is_empty());
    }

    #[test]
    fn test_missing_semicolon() {
        let err = parse_table(r#""a" = "1""#).unwrap_err();
        assert_eq!(
            err,
            StringsParseError::MissingSemicolon {
                line: 1,
                key: "a".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_equals() {
        let err = parse_table(r#""a" "1";"#).unwrap_err();
        assert!(matches!(err, StringsParseError::MissingEquals { .. }));
    }

    #[test]
    fn test_unterminated_string_reports_start_line() {
        let err = parse_table("\n\n\"key\" = \"no end").unwrap_err();
        assert_eq!(err, StringsParseError::UnterminatedString { line: 3 });
    }

    #[test]
    fn test_unterminated_comment() {
        let err = parse_table("/* never closed").unwrap_err();
        assert_eq!(err, StringsParseError::UnterminatedComment { line: 1 });
    }

    #[test]
    fn test_invalid_escape() {
        let err = parse_table(r#""a" = "bad \x escape";"#).unwrap_err();
        assert_eq!(
            err,
            StringsParseError::InvalidEscape {
                line: 1,
                found: 'x',
            }
        );
    }

    #[test]
    fn test_error_line_numbers_count_comments() {
        let input = "/* one\n   two */\n\"a\" @ \"1\";";
        let err = parse_table(input).unwrap_err();
        assert!(matches!(
            err,
            StringsParseError::MissingEquals { line: 3, .. }
        ));
    }
}
