mod args;
mod exit_status;
mod report;
mod run;

pub use args::Arguments;
pub use exit_status::ExitStatus;

/// Run a full generation pass and turn the outcome into an exit status.
pub fn run_cli(args: Arguments) -> ExitStatus {
    match run::run(&args) {
        Ok(summary) => {
            if !summary.written.is_empty() {
                let files: Vec<String> = summary
                    .written
                    .iter()
                    .map(|path| path.display().to_string())
                    .collect();
                report::print_success(&format!(
                    "Generated {} ({} keys)",
                    files.join(", "),
                    summary.entry_count
                ));
            }
            ExitStatus::Success
        }
        Err(error) => {
            report::print_error(&error);
            exit_status::exit_status_for_error(&error)
        }
    }
}
