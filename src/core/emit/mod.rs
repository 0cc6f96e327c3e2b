//! Code emission.
//!
//! The tree walk and argument inference are output-language independent; the
//! per-language emitters only differ in their leaf/group templates and the
//! surrounding boilerplate (imports, base-class wiring). Everything is
//! rendered into memory first; callers write the buffers out in one step, so
//! a late inference failure never leaves a half-written file behind.

use anyhow::{Context, Result};
use enum_dispatch::enum_dispatch;

use crate::config::{Config, OutputLanguage};
use crate::core::arguments::{InferredArgument, infer_arguments};
use crate::core::specifier::parse_specifiers;
use crate::core::tree::{Group, Leaf};

mod objc;
mod swift;

pub use objc::ObjCEmitter;
pub use swift::SwiftEmitter;

/// Fully rendered output. `header` is set by languages that split
/// declarations into a companion header file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSource {
    pub implementation: String,
    pub header: Option<String>,
}

/// Where the rendered source will land. Objective-C needs the implementation
/// file stem to emit its own `#import "<stem>.h"` line; in stdout mode there
/// is no file and the base class name is used instead.
#[derive(Debug, Clone, Default)]
pub struct OutputTarget {
    pub file_stem: Option<String>,
}

#[enum_dispatch]
pub trait RenderLanguage {
    fn render(&self, tree: &Group, config: &Config, target: &OutputTarget)
    -> Result<RenderedSource>;
}

#[enum_dispatch(RenderLanguage)]
pub enum Emitter {
    Swift(SwiftEmitter),
    ObjC(ObjCEmitter),
}

impl Emitter {
    pub fn for_language(language: OutputLanguage) -> Self {
        match language {
            OutputLanguage::Swift => SwiftEmitter.into(),
            OutputLanguage::ObjC => ObjCEmitter.into(),
        }
    }
}

/// Render the whole tree for the configured language.
pub fn emit(tree: &Group, config: &Config, target: &OutputTarget) -> Result<RenderedSource> {
    Emitter::for_language(config.language).render(tree, config, target)
}

/// Banner placed at the top of every generated file.
pub(crate) fn banner() -> &'static str {
    "//\n// Generated by locgen - do not change this file manually!\n//\n"
}

pub(crate) fn mark(name: &str) -> String {
    format!("\n\n// MARK: - {name}\n\n")
}

pub(crate) fn indent(level: usize) -> String {
    "    ".repeat(level)
}

/// Escape a string for embedding in a double-quoted source literal.
pub(crate) fn escape_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}

/// Collapse newlines so a translation fits on a one-line doc comment.
pub(crate) fn single_line(text: &str) -> String {
    text.split(['\n', '\r'])
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse and infer the arguments a leaf's accessor must declare.
///
/// Inference failures are fatal for the whole run; the offending key and
/// translation are attached here so the report can point at them.
pub(crate) fn leaf_arguments(leaf: &Leaf) -> Result<Vec<InferredArgument>> {
    infer_arguments(&parse_specifiers(&leaf.value)).with_context(|| {
        format!(
            "in key \"{}\" with translation \"{}\"",
            leaf.key,
            single_line(&leaf.value)
        )
    })
}
