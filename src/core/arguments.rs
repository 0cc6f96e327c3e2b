//! Argument inference for parsed format specifiers.
//!
//! Given the ordered specifier list of one translation string, this module
//! decides which logical function parameters the generated accessor must
//! declare: how many, their types, and their left-to-right order. Sequential
//! (`%@ %d`) and positional (`%2$@ %1$d`) strings follow different rules and
//! must not be mixed within one string.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use thiserror::Error;

use super::specifier::{FormatSpecifier, Precision, SpecifierKind, Width};

/// Type of a generated accessor parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentType {
    String,
    Int,
    Int64,
    UInt,
    UInt64,
    Double,
    Char,
    UnicodeScalar,
    Pointer,
}

impl ArgumentType {
    /// Whether the type can also serve as a width/precision supplier.
    pub fn is_integer(self) -> bool {
        matches!(self, Self::Int | Self::Int64 | Self::UInt | Self::UInt64)
    }
}

impl fmt::Display for ArgumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::String => "String",
            Self::Int => "Int",
            Self::Int64 => "Int64",
            Self::UInt => "UInt",
            Self::UInt64 => "UInt64",
            Self::Double => "Double",
            Self::Char => "Char",
            Self::UnicodeScalar => "UnicodeScalar",
            Self::Pointer => "Pointer",
        };
        f.write_str(text)
    }
}

/// A logical parameter of the generated accessor function.
///
/// `groups` links the argument to the specifier group(s) it affects: its own
/// value, or the width/precision of another specifier's group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferredArgument {
    pub name: String,
    pub ty: ArgumentType,
    pub groups: BTreeSet<usize>,
}

/// Fatal inference failures for a single translation string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InferenceError {
    /// Positional (`%N$`) and sequential specifiers in the same string.
    #[error("cannot mix positional (%N$) and sequential format specifiers")]
    MixedArguments,

    /// The same argument position is used with two incompatible types.
    #[error("conflicting types for argument {position}: {first} and {second}")]
    ConflictingTypes {
        position: usize,
        first: ArgumentType,
        second: ArgumentType,
    },

    /// Explicit positions do not form a contiguous `1..N` range.
    #[error("positional arguments are not contiguous: missing position {missing}")]
    SparsePositions { missing: usize },
}

/// Infer the declared parameter list for one string's specifiers.
///
/// The mode is decided by the first specifier: an explicit position switches
/// the whole string to positional inference.
pub fn infer_arguments(
    specifiers: &[FormatSpecifier],
) -> Result<Vec<InferredArgument>, InferenceError> {
    let Some(first) = specifiers.first() else {
        return Ok(Vec::new());
    };

    if first.position.is_some() {
        infer_positional(specifiers)
    } else {
        infer_sequential(specifiers)
    }
}

/// The concrete type a specifier's own value requires.
fn value_type(spec: &FormatSpecifier) -> ArgumentType {
    let long = spec.length.is_some_and(|m| m.is_long());
    match spec.kind {
        SpecifierKind::Object => ArgumentType::String,
        SpecifierKind::Int => {
            if long {
                ArgumentType::Int64
            } else {
                ArgumentType::Int
            }
        }
        SpecifierKind::UInt | SpecifierKind::Hex | SpecifierKind::Octal => {
            if long {
                ArgumentType::UInt64
            } else {
                ArgumentType::UInt
            }
        }
        SpecifierKind::Float | SpecifierKind::Scientific | SpecifierKind::HexFloat => {
            ArgumentType::Double
        }
        SpecifierKind::Char => ArgumentType::Char,
        SpecifierKind::UnicodeScalar => ArgumentType::UnicodeScalar,
        SpecifierKind::Pointer => ArgumentType::Pointer,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Roles {
    value: bool,
    width: bool,
    precision: bool,
}

impl Roles {
    fn base_name(self) -> &'static str {
        if self.value {
            "value"
        } else if self.width && self.precision {
            "options"
        } else if self.width {
            "width"
        } else {
            "precision"
        }
    }
}

fn argument_name(roles: Roles, groups: &BTreeSet<usize>, total_groups: usize) -> String {
    let base = roles.base_name();
    if total_groups > 1 {
        let suffix: Vec<String> = groups.iter().map(|g| g.to_string()).collect();
        format!("{}{}", base, suffix.join("_"))
    } else {
        base.to_string()
    }
}

/// Sequential mode: each specifier's value opens a new group numbered by its
/// 1-based position in the list; a `*` width or precision inserts an extra
/// integer argument into the same group, ahead of the value.
fn infer_sequential(
    specifiers: &[FormatSpecifier],
) -> Result<Vec<InferredArgument>, InferenceError> {
    let total_groups = specifiers.len();
    let mut arguments = Vec::new();

    for (index, spec) in specifiers.iter().enumerate() {
        // An explicit position anywhere makes the string mixed, as does a
        // `*N$` width/precision reference.
        if spec.position.is_some()
            || matches!(spec.width, Width::StarPosition(_))
            || matches!(spec.precision, Precision::StarPosition(_))
        {
            return Err(InferenceError::MixedArguments);
        }

        let group = index + 1;
        let groups = BTreeSet::from([group]);

        if spec.width == Width::Star {
            arguments.push(InferredArgument {
                name: argument_name(
                    Roles {
                        width: true,
                        ..Roles::default()
                    },
                    &groups,
                    total_groups,
                ),
                ty: ArgumentType::Int,
                groups: groups.clone(),
            });
        }
        if spec.precision == Precision::Star {
            arguments.push(InferredArgument {
                name: argument_name(
                    Roles {
                        precision: true,
                        ..Roles::default()
                    },
                    &groups,
                    total_groups,
                ),
                ty: ArgumentType::Int,
                groups: groups.clone(),
            });
        }

        arguments.push(InferredArgument {
            name: argument_name(
                Roles {
                    value: true,
                    ..Roles::default()
                },
                &groups,
                total_groups,
            ),
            ty: value_type(spec),
            groups,
        });
    }

    Ok(arguments)
}

/// Accumulated knowledge about one explicit argument position.
#[derive(Debug, Default)]
struct PositionEntry {
    /// Type demanded by a value use of this position, if any.
    value_ty: Option<ArgumentType>,
    /// Set when the position is referenced as a `*N$` width or precision,
    /// which demands an integer-kind argument.
    needs_integer: bool,
    roles: Roles,
    groups: BTreeSet<usize>,
}

impl PositionEntry {
    fn add_value(&mut self, position: usize, ty: ArgumentType) -> Result<(), InferenceError> {
        if let Some(existing) = self.value_ty {
            if existing != ty {
                return Err(InferenceError::ConflictingTypes {
                    position,
                    first: existing,
                    second: ty,
                });
            }
        } else if self.needs_integer && !ty.is_integer() {
            return Err(InferenceError::ConflictingTypes {
                position,
                first: ArgumentType::Int,
                second: ty,
            });
        }
        self.value_ty = Some(ty);
        self.roles.value = true;
        Ok(())
    }

    fn add_integer_reference(&mut self, position: usize) -> Result<(), InferenceError> {
        if let Some(existing) = self.value_ty
            && !existing.is_integer()
        {
            return Err(InferenceError::ConflictingTypes {
                position,
                first: existing,
                second: ArgumentType::Int,
            });
        }
        self.needs_integer = true;
        Ok(())
    }
}

/// Positional mode: every specifier must carry a position; a position used by
/// several specifier values must agree on type and yields a single argument.
/// Groups are numbered by value position; width/precision reference positions
/// join the group of the value they parameterize.
fn infer_positional(
    specifiers: &[FormatSpecifier],
) -> Result<Vec<InferredArgument>, InferenceError> {
    let mut entries: BTreeMap<usize, PositionEntry> = BTreeMap::new();

    for spec in specifiers {
        let Some(position) = spec.position else {
            return Err(InferenceError::MixedArguments);
        };
        // In positional mode a bare `*` has no argument to draw from.
        if spec.width == Width::Star || spec.precision == Precision::Star {
            return Err(InferenceError::MixedArguments);
        }

        // The value position is its own group.
        let group = position;
        let entry = entries.entry(position).or_default();
        entry.add_value(position, value_type(spec))?;
        entry.groups.insert(group);

        if let Width::StarPosition(reference) = spec.width {
            let entry = entries.entry(reference).or_default();
            entry.add_integer_reference(reference)?;
            entry.roles.width = true;
            entry.groups.insert(group);
        }
        if let Precision::StarPosition(reference) = spec.precision {
            let entry = entries.entry(reference).or_default();
            entry.add_integer_reference(reference)?;
            entry.roles.precision = true;
            entry.groups.insert(group);
        }
    }

    // Positions must cover exactly 1..=N with no gaps.
    let max_position = entries.keys().next_back().copied().unwrap_or(0);
    for position in 1..=max_position {
        if !entries.contains_key(&position) {
            return Err(InferenceError::SparsePositions { missing: position });
        }
    }

    let total_groups = entries.values().filter(|e| e.roles.value).count();

    Ok(entries
        .into_values()
        .map(|entry| InferredArgument {
            name: argument_name(entry.roles, &entry.groups, total_groups),
            ty: entry.value_ty.unwrap_or(ArgumentType::Int),
            groups: entry.groups,
        })
        .collect())
}
