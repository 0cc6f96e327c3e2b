use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use locgen::cli::{Arguments, ExitStatus, run_cli};

fn main() -> ExitCode {
    let args = match Arguments::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // clap renders help/version on stdout and usage errors on stderr.
            let status = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitStatus::Success,
                _ => ExitStatus::Usage,
            };
            let _ = err.print();
            return status.into();
        }
    };

    run_cli(args).into()
}
