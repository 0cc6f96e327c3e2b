//! Objective-C output: a class hierarchy split into header and
//! implementation.
//!
//! Every group becomes a class named by concatenating the base class name
//! with each sanitized path segment, all carrying a `_` prefix; group
//! accessors return fresh child class instances and parameterized accessors
//! return blocks. The base class exposes a `sharedInstance` singleton and
//! the header defines a convenience macro so call sites can write
//! `Localizations.settings.title`.

use anyhow::Result;

use crate::config::{Config, OutputLanguage};
use crate::core::arguments::{ArgumentType, InferredArgument};
use crate::core::naming::NamingContext;
use crate::core::tree::{Group, Leaf, TreeNode};

use super::{
    OutputTarget, RenderLanguage, RenderedSource, banner, escape_literal, leaf_arguments, mark,
    single_line,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct ObjCEmitter;

impl RenderLanguage for ObjCEmitter {
    fn render(
        &self,
        tree: &Group,
        config: &Config,
        target: &OutputTarget,
    ) -> Result<RenderedSource> {
        let naming = NamingContext::new(OutputLanguage::ObjC, config.autocapitalize);
        let base = naming.identifier(&config.base_class_name);

        let implementation_body = codify(tree, &base, true, config, &naming, false)?;
        let header_body = codify(tree, &base, true, config, &naming, true)?;

        // In stdout mode there is no output file to name the import after.
        let header_stem = target.file_stem.clone().unwrap_or_else(|| base.clone());

        let mut implementation = String::new();
        implementation.push_str(banner());
        implementation.push_str(&mark("Imports"));
        implementation.push_str(&format!("#import \"{header_stem}.h\"\n"));
        implementation.push_str(&mark("Localizations"));
        implementation.push_str(&implementation_body);

        let mut header = String::new();
        header.push_str(banner());
        header.push_str(&mark("Imports"));
        header.push_str("@import Foundation;\n");
        if let Some(superclass) = &config.custom_superclass {
            header.push_str(&format!("#import \"{superclass}.h\"\n"));
        }
        header.push_str(&mark("Localizations"));
        header.push_str(&header_body);
        header.push_str(&mark("Macros"));
        header.push_str("// Make localization to be easily accessible\n");
        header.push_str(&format!("#define {base} [_{base} sharedInstance]\n"));

        Ok(RenderedSource {
            implementation,
            header: Some(header),
        })
    }
}

/// Render a group and every class below it. Child classes are emitted before
/// their parent so each class is declared before the accessor returning it;
/// within a class, child accessors sit ahead of the leaf accessors.
fn codify(
    group: &Group,
    class_path: &str,
    is_root: bool,
    config: &Config,
    naming: &NamingContext,
    header: bool,
) -> Result<String> {
    let mut output: Vec<String> = Vec::new();
    let mut content: Vec<String> = Vec::new();

    for (name, node) in group.children() {
        if let TreeNode::Leaf(leaf) = node {
            let arguments = leaf_arguments(leaf)?;
            let accessor = if arguments.is_empty() {
                static_var_template(&naming.identifier(name), leaf, config, header)
            } else {
                method_template(&naming.identifier(name), leaf, &arguments, config, header)
            };
            content.push(accessor);
        }
    }

    for (name, node) in group.children() {
        if let TreeNode::Group(child) = node {
            let child_class = format!("{class_path}{}", naming.identifier(name));
            output.push(codify(child, &child_class, false, config, naming, header)?);
            content.insert(
                0,
                class_var_template(&naming.identifier(name), &child_class, header),
            );
        }
    }

    if is_root {
        content.push(if header {
            base_class_header_template(class_path)
        } else {
            base_class_implementation_template(class_path)
        });
    }

    output.push(class_template(
        class_path,
        &content.join("\n"),
        config,
        header,
    ));
    Ok(output.join("\n"))
}

fn class_template(name: &str, content: &str, config: &Config, header: bool) -> String {
    if header {
        let superclass = config.custom_superclass.as_deref().unwrap_or("NSObject");
        format!("@interface _{name} : {superclass}\n\n{content}\n@end\n")
    } else {
        format!("@implementation _{name}\n\n{content}\n@end\n")
    }
}

/// The table expression in `NSLocalizedStringFromTable` calls.
fn table_argument(config: &Config) -> String {
    match &config.table {
        Some(table) => format!("@\"{}\"", escape_literal(table)),
        None => "nil".to_string(),
    }
}

fn static_var_template(name: &str, leaf: &Leaf, config: &Config, header: bool) -> String {
    if header {
        format!(
            "/// Base translation: {base}\n- (NSString *){name};\n",
            base = single_line(&leaf.value),
        )
    } else {
        format!(
            "- (NSString *){name} {{\n    return NSLocalizedStringFromTable(@\"{key}\", {table}, nil);\n}}\n",
            key = escape_literal(&leaf.key),
            table = table_argument(config),
        )
    }
}

fn method_template(
    name: &str,
    leaf: &Leaf,
    arguments: &[InferredArgument],
    config: &Config,
    header: bool,
) -> String {
    let types: Vec<&str> = arguments.iter().map(|a| objc_type(a.ty)).collect();
    let types = types.join(", ");

    if header {
        return format!(
            "/// Base translation: {base}\n- (NSString *(^)({types})){name};\n",
            base = single_line(&leaf.value),
        );
    }

    let typed_params: Vec<String> = arguments
        .iter()
        .map(|a| parameter_declaration(a.ty, &a.name))
        .collect();
    let forwarded: Vec<String> = arguments.iter().map(|a| a.name.clone()).collect();

    format!(
        "- (NSString *(^)({types})){name} {{\n    return ^({typed_params}) {{\n        return [NSString stringWithFormat: NSLocalizedStringFromTable(@\"{key}\", {table}, nil), {forwarded}];\n    }};\n}}\n",
        typed_params = typed_params.join(", "),
        key = escape_literal(&leaf.key),
        table = table_argument(config),
        forwarded = forwarded.join(", "),
    )
}

fn class_var_template(name: &str, class_name: &str, header: bool) -> String {
    if header {
        format!("- (_{class_name} *){name};\n")
    } else {
        format!("- (_{class_name} *){name} {{\n    return [_{class_name} new];\n}}\n")
    }
}

fn base_class_header_template(name: &str) -> String {
    format!("+ (_{name} *)sharedInstance;\n")
}

fn base_class_implementation_template(name: &str) -> String {
    format!(
        "+ (_{name} *)sharedInstance {{\n\n    static dispatch_once_t once;\n    static _{name} *instance;\n    dispatch_once(&once, ^{{\n        instance = [[_{name} alloc] init];\n    }});\n    return instance;\n}}\n"
    )
}

fn objc_type(ty: ArgumentType) -> &'static str {
    match ty {
        ArgumentType::String => "NSString *",
        ArgumentType::Int => "int",
        ArgumentType::Int64 => "long",
        ArgumentType::UInt => "unsigned int",
        ArgumentType::UInt64 => "unsigned long",
        ArgumentType::Double => "double",
        ArgumentType::Char => "char",
        ArgumentType::UnicodeScalar => "unichar",
        ArgumentType::Pointer => "void *",
    }
}

/// Join a type and parameter name, avoiding a space after pointer types.
fn parameter_declaration(ty: ArgumentType, name: &str) -> String {
    let ty = objc_type(ty);
    if ty.ends_with('*') {
        format!("{ty}{name}")
    } else {
        format!("{ty} {name}")
    }
}
