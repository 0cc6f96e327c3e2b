//! Locgen - typed localization accessor generator
//!
//! Locgen is a CLI tool and library that reads a flat localization table
//! (`.strings` or `.json`), rebuilds the nested key namespace, infers the
//! arguments required by printf-style placeholders in each translation, and
//! generates typed accessor code in Swift or Objective-C.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, orchestration, reporting)
//! - `config`: Configuration file loading and CLI override merging
//! - `core`: Generation pipeline (parsers, key tree, argument inference, emitters)

pub mod cli;
pub mod config;
pub mod core;
