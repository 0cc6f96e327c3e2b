//! Swift output: a flat namespace of nested `public struct`s.
//!
//! Argument-free keys become `public static var` accessors wrapping
//! `NSLocalizedString`; keys with placeholders become `public static func`
//! accessors that format the localized template with their typed parameters.

use anyhow::Result;

use crate::config::{Config, OutputLanguage};
use crate::core::arguments::{ArgumentType, InferredArgument};
use crate::core::naming::NamingContext;
use crate::core::tree::{Group, Leaf, TreeNode};

use super::{
    OutputTarget, RenderLanguage, RenderedSource, banner, escape_literal, indent, leaf_arguments,
    mark, single_line,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct SwiftEmitter;

impl RenderLanguage for SwiftEmitter {
    fn render(
        &self,
        tree: &Group,
        config: &Config,
        _target: &OutputTarget,
    ) -> Result<RenderedSource> {
        let naming = NamingContext::new(OutputLanguage::Swift, config.autocapitalize);
        let content = codify(tree, config, &naming, 1)?;
        let root = struct_template(&naming.identifier(&config.base_class_name), &content, 0);

        let mut out = String::new();
        out.push_str(banner());
        out.push_str(&mark("Imports"));
        out.push_str("import Foundation\n");
        out.push_str(&mark("Localizations"));
        out.push_str(&root);
        out.push('\n');

        Ok(RenderedSource {
            implementation: out,
            header: None,
        })
    }
}

/// Render one group's members: leaf accessors first, nested structs after,
/// each child in insertion order.
fn codify(group: &Group, config: &Config, naming: &NamingContext, level: usize) -> Result<String> {
    let mut parts: Vec<String> = Vec::new();

    for (name, node) in group.children() {
        if let TreeNode::Leaf(leaf) = node {
            let arguments = leaf_arguments(leaf)?;
            let accessor = if arguments.is_empty() {
                static_var_template(&naming.identifier(name), leaf, config, level)
            } else {
                func_template(&naming.identifier(name), leaf, &arguments, config, level)
            };
            parts.push(accessor);
        }
    }

    for (name, node) in group.children() {
        if let TreeNode::Group(child) = node {
            let content = codify(child, config, naming, level + 1)?;
            parts.push(struct_template(&naming.identifier(name), &content, level));
        }
    }

    Ok(parts.join("\n"))
}

fn struct_template(name: &str, content: &str, level: usize) -> String {
    let indent = indent(level);
    format!("\n{indent}public struct {name} {{\n\n{content}\n{indent}}}")
}

/// The `tableName:` argument when a strings table is configured.
fn table_argument(config: &Config) -> String {
    match &config.table {
        Some(table) => format!("tableName: \"{}\", ", escape_literal(table)),
        None => String::new(),
    }
}

fn static_var_template(name: &str, leaf: &Leaf, config: &Config, level: usize) -> String {
    let indent = indent(level);
    format!(
        "{indent}/// Base translation: {base}\n\
         {indent}public static var {name}: String = NSLocalizedString(\"{key}\", {table}comment: \"\")\n",
        base = single_line(&leaf.value),
        key = escape_literal(&leaf.key),
        table = table_argument(config),
    )
}

fn func_template(
    name: &str,
    leaf: &Leaf,
    arguments: &[InferredArgument],
    config: &Config,
    level: usize,
) -> String {
    let outer = indent(level);
    let inner = indent(level + 1);
    let params: Vec<String> = arguments
        .iter()
        .map(|a| format!("_ {}: {}", a.name, swift_type(a.ty)))
        .collect();
    let forwarded: Vec<String> = arguments.iter().map(|a| a.name.clone()).collect();

    format!(
        "{outer}/// Base translation: {base}\n\
         {outer}public static func {name}({params}) -> String {{\n\
         {inner}return String(format: NSLocalizedString(\"{key}\", {table}comment: \"\"), {forwarded})\n\
         {outer}}}\n",
        base = single_line(&leaf.value),
        params = params.join(", "),
        key = escape_literal(&leaf.key),
        table = table_argument(config),
        forwarded = forwarded.join(", "),
    )
}

fn swift_type(ty: ArgumentType) -> &'static str {
    match ty {
        ArgumentType::String => "String",
        ArgumentType::Int => "Int",
        ArgumentType::Int64 => "Int64",
        ArgumentType::UInt => "UInt",
        ArgumentType::UInt64 => "UInt64",
        ArgumentType::Double => "Double",
        ArgumentType::Char => "CChar",
        ArgumentType::UnicodeScalar => "unichar",
        ArgumentType::Pointer => "UnsafeRawPointer",
    }
}
