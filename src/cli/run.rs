//! Command orchestration.
//!
//! A run is a one-shot batch transform: load configuration, read and parse
//! the input table, build the key tree, render everything into memory, then
//! write once. A failure anywhere aborts before any output file is touched.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::args::Arguments;
use super::report;
use crate::config;
use crate::core::{OutputTarget, build_tree, emit, parsers};

/// What a successful run produced, for the final summary line.
pub struct RunSummary {
    pub entry_count: usize,
    /// Files written, in write order; empty in stdout mode.
    pub written: Vec<PathBuf>,
}

pub fn run(args: &Arguments) -> Result<RunSummary> {
    let current_dir = env::current_dir().context("failed to resolve current directory")?;
    let loaded = config::load_config(&current_dir)?;
    if loaded.from_file {
        report::print_verbose(
            args.verbose,
            &format!("Using configuration from {}", config::CONFIG_FILE_NAME),
        );
    }
    let config = args.merged_config(loaded.config);
    config.validate()?;

    let content = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read input file {}", args.input.display()))?;
    let entries = parsers::parse_table(&args.input, &content, &config.delimiter)
        .with_context(|| format!("failed to parse input file {}", args.input.display()))?;
    report::print_verbose(
        args.verbose,
        &format!(
            "Parsed {} entries from {}",
            entries.len(),
            args.input.display()
        ),
    );

    let tree = build_tree(&entries, &config.delimiter);
    for key in &tree.skipped_keys {
        report::print_warning(&format!("skipping key \"{key}\": no usable segments"));
    }

    let target = OutputTarget {
        file_stem: output_file_stem(args.output.as_deref()),
    };
    // Render everything up front; nothing is written if any leaf fails.
    let rendered = emit(&tree.root, &config, &target)?;

    let mut written = Vec::new();
    match &args.output {
        Some(output) => {
            fs::write(output, &rendered.implementation)
                .with_context(|| format!("failed to write output file {}", output.display()))?;
            written.push(output.clone());

            if let Some(header) = &rendered.header {
                let header_path = output.with_extension("h");
                fs::write(&header_path, header).with_context(|| {
                    format!("failed to write header file {}", header_path.display())
                })?;
                written.push(header_path);
            }
        }
        None => {
            // Header first: declarations precede their use.
            if let Some(header) = &rendered.header {
                print!("{header}");
            }
            print!("{}", rendered.implementation);
        }
    }

    Ok(RunSummary {
        entry_count: entries.len(),
        written,
    })
}

fn output_file_stem(output: Option<&Path>) -> Option<String> {
    output
        .and_then(|path| path.file_stem())
        .and_then(|stem| stem.to_str())
        .map(str::to_string)
}
