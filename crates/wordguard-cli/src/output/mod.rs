pub mod json;
pub mod table;

use std::path::PathBuf;
use wordguard_core::policy::ValidationResult;

/// Outcome of validating one file from the command line.
pub struct FileReport {
    pub path: PathBuf,
    /// The verdict, or the rendered fault if the file could not be read.
    pub outcome: Result<ValidationResult, String>,
}
