/// A single key/value row from a localization table.
///
/// The key may contain delimiter characters that define nesting
/// (e.g. `screen.button.title`). Entries keep the order they appeared in the
/// input file so generated code is stable across runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizationEntry {
    /// The raw translation key (e.g. `"Common.submit"`).
    pub key: String,
    /// The translation value for the base language.
    pub value: String,
}

impl LocalizationEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Split a key into path segments on `delimiter`, dropping empty segments.
///
/// Empty segments come from leading/trailing delimiters or doubled delimiters
/// in the middle (`.a.b`, `a..b`), and collapse to the same path as `a.b`.
/// A delimiter-only key yields an empty vector; callers are expected to skip
/// such entries.
pub fn split_key_path<'a>(key: &'a str, delimiter: &str) -> Vec<&'a str> {
    key.split(delimiter).filter(|s| !s.is_empty()).collect()
}
