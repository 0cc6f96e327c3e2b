//! Core generation pipeline.
//!
//! The pipeline is a single-threaded batch transform: the input table is
//! read fully into memory, expanded into a key tree, and rendered in one
//! pass. Leaves first go through specifier parsing and argument inference to
//! decide their accessor shape.

pub mod arguments;
pub mod emit;
pub mod entry;
pub mod naming;
pub mod parsers;
pub mod specifier;
pub mod tree;

pub use arguments::{ArgumentType, InferenceError, InferredArgument, infer_arguments};
pub use emit::{Emitter, OutputTarget, RenderLanguage, RenderedSource, emit};
pub use entry::{LocalizationEntry, split_key_path};
pub use naming::NamingContext;
pub use specifier::{FormatSpecifier, SpecifierKind, parse_specifiers};
pub use tree::{BuiltTree, Group, Leaf, TreeNode, build_tree};
