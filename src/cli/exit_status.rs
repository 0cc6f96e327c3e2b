use std::process::ExitCode;

use crate::config::ConfigError;
use crate::core::InferenceError;

/// Exit status for the CLI, following the BSD sysexits convention.
///
/// - `Success` (0): output was generated.
/// - `Usage` (64, EX_USAGE): bad flags or invalid configuration.
/// - `DataError` (65, EX_DATAERR): the input table was readable but a
///   translation's placeholders could not be turned into arguments.
/// - `IoError` (74, EX_IOERR): missing/unreadable/malformed input, or the
///   output could not be written.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Usage,
    DataError,
    IoError,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Usage => 64,
            ExitStatus::DataError => 65,
            ExitStatus::IoError => 74,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}

/// Classify a failed run by its root cause: inference failures are data
/// errors, configuration mistakes are usage errors, everything else (missing
/// files, malformed tables, write failures) is I/O.
pub fn exit_status_for_error(error: &anyhow::Error) -> ExitStatus {
    let root = error.root_cause();
    if root.downcast_ref::<InferenceError>().is_some() {
        ExitStatus::DataError
    } else if root.downcast_ref::<ConfigError>().is_some() {
        ExitStatus::Usage
    } else {
        ExitStatus::IoError
    }
}
