//! CLI argument definitions using clap.
//!
//! Locgen is a single-purpose tool, so the surface is a flat set of flags
//! rather than subcommands: a required input table, an optional output path,
//! and overrides for the generation options that can also live in
//! `.locgenrc.json`.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, OutputLanguage};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Path to the localization table (.strings or .json)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path to the output file; prints to stdout when omitted. For objc the
    /// header is written next to it with the extension swapped to .h
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output language of the generated accessors (overrides config file)
    #[arg(short, long, value_enum)]
    pub language: Option<OutputLanguage>,

    /// Delimiter separating the segments of each key (overrides config file)
    #[arg(short, long)]
    pub delimiter: Option<String>,

    /// CamelCase all generated structure/method/property names
    #[arg(short = 'c', long = "capitalize")]
    pub capitalize: bool,

    /// Name of the outermost generated struct/class (overrides config file)
    #[arg(short, long)]
    pub base_class_name: Option<String>,

    /// Strings table name passed to every lookup (overrides config file)
    #[arg(short, long)]
    pub table: Option<String>,

    /// Custom Objective-C superclass name (overrides config file)
    #[arg(short = 's', long)]
    pub custom_superclass: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Arguments {
    /// Layer the CLI overrides on top of config-file (or default) values.
    pub fn merged_config(&self, mut config: Config) -> Config {
        if let Some(language) = self.language {
            config.language = language;
        }
        if let Some(delimiter) = &self.delimiter {
            config.delimiter = delimiter.clone();
        }
        if self.capitalize {
            config.autocapitalize = true;
        }
        if let Some(name) = &self.base_class_name {
            config.base_class_name = name.clone();
        }
        if let Some(table) = &self.table {
            config.table = Some(table.clone());
        }
        if let Some(superclass) = &self.custom_superclass {
            config.custom_superclass = Some(superclass.clone());
        }
        config
    }
}
