//! printf-style format specifier scanning.
//!
//! Translation strings embed placeholders such as `%@`, `%d` or `%2$0.3f`.
//! This module extracts them, in order, as structured [`FormatSpecifier`]
//! values. Scanning is purely textual: a `%%` literal is skipped, and a `%`
//! followed by anything that does not form a recognized specifier is simply
//! not matched (no error is raised here).

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// One `%...` occurrence: `%[N$][flags][width][.precision][length]type`.
static SPECIFIER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        (?P<escape>%%)
        |
        %
        (?:(?P<pos>\d+)\$)?              # explicit argument position
        (?P<flags>['+\-\x20\#0]*)        # flag characters (\x20 is the space flag)
        (?P<width>\d+|\*(?:\d+\$)?)?     # literal width, * or *N$
        (?P<dot>\.(?P<prec>\d+|\*(?:\d+\$)?)?)?  # precision, bare . means zero
        (?P<length>hh|ll|h|l|q|L|z|t|j)? # length modifier
        (?P<kind>[@dDiuUxXoOfFeEgGaAcCp])
        ",
    )
    .unwrap()
});

/// Semantic kind of a specifier's terminal type character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecifierKind {
    /// `%@`: object / string.
    Object,
    /// `%d`, `%D`, `%i`: signed decimal integer.
    Int,
    /// `%u`, `%U`: unsigned decimal integer.
    UInt,
    /// `%x`, `%X`: unsigned hexadecimal integer.
    Hex,
    /// `%o`, `%O`: unsigned octal integer.
    Octal,
    /// `%f`, `%F`: decimal floating point.
    Float,
    /// `%e`, `%E`, `%g`, `%G`: scientific / shortest floating point.
    Scientific,
    /// `%a`, `%A`: hexadecimal scientific floating point.
    HexFloat,
    /// `%c`: character.
    Char,
    /// `%C`: unicode scalar.
    UnicodeScalar,
    /// `%p`: raw pointer.
    Pointer,
}

impl SpecifierKind {
    fn from_type_char(c: char) -> Option<Self> {
        match c {
            '@' => Some(Self::Object),
            'd' | 'D' | 'i' => Some(Self::Int),
            'u' | 'U' => Some(Self::UInt),
            'x' | 'X' => Some(Self::Hex),
            'o' | 'O' => Some(Self::Octal),
            'f' | 'F' => Some(Self::Float),
            'e' | 'E' | 'g' | 'G' => Some(Self::Scientific),
            'a' | 'A' => Some(Self::HexFloat),
            'c' => Some(Self::Char),
            'C' => Some(Self::UnicodeScalar),
            'p' => Some(Self::Pointer),
            _ => None,
        }
    }
}

/// Flag characters present on a specifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    /// `'`: thousands grouping.
    pub thousands: bool,
    /// `-`: left alignment.
    pub left_align: bool,
    /// `+`: always print the sign.
    pub plus: bool,
    /// ` `: space for positive numbers.
    pub space: bool,
    /// `#`: alternate form.
    pub alternate: bool,
    /// `0`: zero padding.
    pub zero_pad: bool,
}

impl Flags {
    fn parse(text: &str) -> Self {
        let mut flags = Self::default();
        for c in text.chars() {
            match c {
                '\'' => flags.thousands = true,
                '-' => flags.left_align = true,
                '+' => flags.plus = true,
                ' ' => flags.space = true,
                '#' => flags.alternate = true,
                '0' => flags.zero_pad = true,
                _ => {}
            }
        }
        flags
    }
}

/// Width portion of a specifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Width {
    #[default]
    None,
    /// Literal digits: `%10d`.
    Fixed(usize),
    /// Supplied by the next sequential argument: `%*d`.
    Star,
    /// Supplied by an explicit argument position: `%*2$d`.
    StarPosition(usize),
}

/// Precision portion of a specifier. A bare `.` means precision zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Precision {
    #[default]
    None,
    Fixed(usize),
    Star,
    StarPosition(usize),
}

/// Length modifier preceding the type character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthModifier {
    /// `hh`
    Char,
    /// `h`
    Short,
    /// `l`
    Long,
    /// `ll`
    LongLong,
    /// `q`
    Quad,
    /// `L`
    LongDouble,
    /// `z`
    Size,
    /// `t`
    Ptrdiff,
    /// `j`
    IntMax,
}

impl LengthModifier {
    fn parse(text: &str) -> Option<Self> {
        match text {
            "hh" => Some(Self::Char),
            "h" => Some(Self::Short),
            "l" => Some(Self::Long),
            "ll" => Some(Self::LongLong),
            "q" => Some(Self::Quad),
            "L" => Some(Self::LongDouble),
            "z" => Some(Self::Size),
            "t" => Some(Self::Ptrdiff),
            "j" => Some(Self::IntMax),
            _ => None,
        }
    }

    /// Whether this modifier widens an integer to 64 bits.
    pub fn is_long(self) -> bool {
        matches!(
            self,
            Self::Long | Self::LongLong | Self::Quad | Self::Size | Self::Ptrdiff | Self::IntMax
        )
    }
}

impl fmt::Display for LengthModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Char => "hh",
            Self::Short => "h",
            Self::Long => "l",
            Self::LongLong => "ll",
            Self::Quad => "q",
            Self::LongDouble => "L",
            Self::Size => "z",
            Self::Ptrdiff => "t",
            Self::IntMax => "j",
        };
        f.write_str(text)
    }
}

/// One parsed `%...` occurrence in a translation string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatSpecifier {
    /// Explicit argument position for `%N$...` forms.
    pub position: Option<usize>,
    pub flags: Flags,
    pub width: Width,
    pub precision: Precision,
    pub length: Option<LengthModifier>,
    pub kind: SpecifierKind,
}

/// Scan `text` and return every recognized specifier in order of occurrence.
///
/// `%%` is consumed but never reported; malformed specifiers are skipped.
pub fn parse_specifiers(text: &str) -> Vec<FormatSpecifier> {
    let mut specifiers = Vec::new();

    for captures in SPECIFIER_REGEX.captures_iter(text) {
        if captures.name("escape").is_some() {
            continue;
        }

        let kind = captures
            .name("kind")
            .and_then(|m| m.as_str().chars().next())
            .and_then(SpecifierKind::from_type_char);
        let Some(kind) = kind else { continue };

        let position = captures
            .name("pos")
            .and_then(|m| m.as_str().parse::<usize>().ok());

        let flags = captures
            .name("flags")
            .map(|m| Flags::parse(m.as_str()))
            .unwrap_or_default();

        let width = match captures.name("width") {
            Some(m) => parse_star_field(m.as_str(), Width::Star, Width::StarPosition, Width::Fixed),
            None => Width::None,
        };

        let precision = if captures.name("dot").is_some() {
            match captures.name("prec") {
                Some(m) => parse_star_field(
                    m.as_str(),
                    Precision::Star,
                    Precision::StarPosition,
                    Precision::Fixed,
                ),
                // A bare '.' means precision zero.
                None => Precision::Fixed(0),
            }
        } else {
            Precision::None
        };

        let length = captures
            .name("length")
            .and_then(|m| LengthModifier::parse(m.as_str()));

        specifiers.push(FormatSpecifier {
            position,
            flags,
            width,
            precision,
            length,
            kind,
        });
    }

    specifiers
}

/// Parse a width/precision capture: digits, `*`, or `*N$`.
fn parse_star_field<T>(
    text: &str,
    star: T,
    star_position: impl Fn(usize) -> T,
    fixed: impl Fn(usize) -> T,
) -> T {
    if let Some(rest) = text.strip_prefix('*') {
        match rest.strip_suffix('$').and_then(|n| n.parse().ok()) {
            Some(n) => star_position(n),
            None => star,
        }
    } else {
        // The regex only captures digits here.
        fixed(text.parse().unwrap_or(0))
    }
}
