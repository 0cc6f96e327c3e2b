use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = ".locgenrc.json";

/// Output language of the generated accessors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
pub enum OutputLanguage {
    /// Flat namespace of nested structs with typed static accessors.
    #[default]
    #[serde(rename = "swift")]
    #[value(name = "swift")]
    Swift,
    /// Class hierarchy with separate header and implementation files.
    #[serde(rename = "objc")]
    #[value(name = "objc")]
    ObjC,
}

impl fmt::Display for OutputLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputLanguage::Swift => write!(f, "swift"),
            OutputLanguage::ObjC => write!(f, "objc"),
        }
    }
}

/// Errors from loading or validating configuration. These are user
/// configuration mistakes and map to the usage exit code.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config file {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("delimiter must not be empty")]
    EmptyDelimiter,

    #[error("invalid base class name: \"{0}\"")]
    InvalidBaseClassName(String),
}

/// Generation options, assembled from `.locgenrc.json` defaults and CLI
/// overrides. Passed explicitly into the emitter; there is no global state.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Key segment delimiter.
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    /// Output language.
    #[serde(default)]
    pub language: OutputLanguage,

    /// CamelCase all generated structure/method/property names.
    #[serde(default)]
    pub autocapitalize: bool,

    /// Name of the outermost generated struct/class.
    #[serde(default = "default_base_class_name")]
    pub base_class_name: String,

    /// Strings table name threaded into every lookup.
    #[serde(default)]
    pub table: Option<String>,

    /// Custom Objective-C superclass (defaults to NSObject in the output).
    #[serde(default)]
    pub custom_superclass: Option<String>,
}

fn default_delimiter() -> String {
    ".".to_string()
}

fn default_base_class_name() -> String {
    "Localizations".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            language: OutputLanguage::default(),
            autocapitalize: false,
            base_class_name: default_base_class_name(),
            table: None,
            custom_superclass: None,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// The delimiter must be non-empty (splitting on an empty string is
    /// meaningless) and the base class name must already be a legal
    /// identifier since it names the outermost generated type.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.delimiter.is_empty() {
            return Err(ConfigError::EmptyDelimiter);
        }

        let name = &self.base_class_name;
        let starts_with_digit = name.chars().next().is_some_and(|c| c.is_ascii_digit());
        if name.is_empty()
            || starts_with_digit
            || !name.chars().all(|c| c.is_alphanumeric() || c == '_')
        {
            return Err(ConfigError::InvalidBaseClassName(name.clone()));
        }

        Ok(())
    }
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> anyhow::Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config =
                serde_json::from_str(&content).map_err(|err| ConfigError::Parse {
                    path: path.clone(),
                    message: err.to_string(),
                })?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
