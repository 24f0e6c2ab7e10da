use std::path::PathBuf;

use wordguard_core::error::WordguardError;
use wordguard_core::validator::Validator;

use crate::commands::ConfigArgs;
use crate::output::{self, FileReport};

/// Exit status when at least one file was judged invalid.
const EXIT_INVALID: i32 = 2;
/// Exit status when at least one file could not be read.
const EXIT_FAULT: i32 = 1;

pub fn run(files: &[PathBuf], args: &ConfigArgs, output_format: &str) -> Result<i32, WordguardError> {
    let validator = Validator::new(args.resolve()?)?;
    tracing::debug!(files = files.len(), "validating files");

    let reports = check_files(&validator, files);

    match output_format {
        "json" => output::json::print(&reports)?,
        _ => output::table::print(&reports),
    }

    Ok(exit_code(&reports))
}

/// Validate every file; a failure is recorded in its report and the next
/// file is still checked.
fn check_files(validator: &Validator, files: &[PathBuf]) -> Vec<FileReport> {
    files
        .iter()
        .map(|path| FileReport {
            path: path.clone(),
            outcome: validator.validate_file(path).map_err(|e| e.to_string()),
        })
        .collect()
}

fn exit_code(reports: &[FileReport]) -> i32 {
    if reports.iter().any(|r| r.outcome.is_err()) {
        EXIT_FAULT
    } else if reports
        .iter()
        .any(|r| matches!(r.outcome, Ok(ref v) if !v.valid))
    {
        EXIT_INVALID
    } else {
        0
    }
}
