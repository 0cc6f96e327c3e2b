//! Identifier sanitization for generated code.
//!
//! Key segments can contain anything; generated struct/method/property names
//! cannot. Sanitization replaces non-alphanumeric characters with `_`,
//! optionally CamelCases multi-segment names, and prefixes `_` when the
//! result would start with a digit or collide with a reserved word of the
//! output language. The transformation is idempotent: feeding a sanitized,
//! non-colliding identifier back in returns it unchanged.

use crate::config::OutputLanguage;

const SWIFT_KEYWORDS: &[&str] = &[
    "class",
    "deinit",
    "enum",
    "extension",
    "func",
    "import",
    "init",
    "inout",
    "internal",
    "let",
    "operator",
    "private",
    "protocol",
    "public",
    "static",
    "struct",
    "subscript",
    "typealias",
    "var",
    "break",
    "case",
    "continue",
    "default",
    "defer",
    "do",
    "else",
    "fallthrough",
    "for",
    "guard",
    "if",
    "in",
    "repeat",
    "return",
    "switch",
    "where",
    "while",
    "as",
    "catch",
    "dynamicType",
    "false",
    "is",
    "nil",
    "rethrows",
    "super",
    "self",
    "Self",
    "throw",
    "throws",
    "true",
    "try",
    "type",
    "__COLUMN__",
    "__FILE__",
    "__FUNCTION__",
    "__LINE__",
];

const OBJC_KEYWORDS: &[&str] = &[
    "auto",
    "break",
    "case",
    "char",
    "const",
    "continue",
    "default",
    "do",
    "double",
    "else",
    "enum",
    "extern",
    "float",
    "for",
    "goto",
    "if",
    "inline",
    "int",
    "long",
    "register",
    "restrict",
    "return",
    "short",
    "signed",
    "sizeof",
    "static",
    "struct",
    "switch",
    "typedef",
    "union",
    "unsigned",
    "void",
    "volatile",
    "while",
    "BOOL",
    "Class",
    "bycopy",
    "byref",
    "id",
    "IMP",
    "in",
    "inout",
    "nil",
    "NO",
    "NULL",
    "oneway",
    "out",
    "Protocol",
    "SEL",
    "self",
    "super",
    "YES",
];

/// Per-run naming state: output language (for reserved words) and whether
/// identifiers are CamelCased. Read-only after construction.
#[derive(Debug, Clone, Copy)]
pub struct NamingContext {
    pub language: OutputLanguage,
    pub autocapitalize: bool,
}

impl NamingContext {
    pub fn new(language: OutputLanguage, autocapitalize: bool) -> Self {
        Self {
            language,
            autocapitalize,
        }
    }

    /// Turn one raw key segment into a legal identifier.
    pub fn identifier(&self, raw: &str) -> String {
        let sanitized = replace_non_alphanumeric(raw);
        let name = if self.autocapitalize {
            camel_case(&sanitized)
        } else {
            sanitized
        };

        if starts_with_digit(&name) || is_reserved(&name, self.language) {
            format!("_{name}")
        } else {
            name
        }
    }
}

fn replace_non_alphanumeric(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect()
}

/// Uppercase the first letter of each alphanumeric run and join the runs.
///
/// The remainder of each run is kept as written (not lowercased), so an
/// already-CamelCased name passes through unchanged.
fn camel_case(text: &str) -> String {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(capitalize_first)
        .collect()
}

fn capitalize_first(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn starts_with_digit(text: &str) -> bool {
    text.chars().next().is_some_and(|c| c.is_ascii_digit())
}

fn is_reserved(name: &str, language: OutputLanguage) -> bool {
    let keywords = match language {
        OutputLanguage::Swift => SWIFT_KEYWORDS,
        OutputLanguage::ObjC => OBJC_KEYWORDS,
    };
    keywords.contains(&name)
}
