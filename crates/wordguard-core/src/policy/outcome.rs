use serde::{Deserialize, Serialize};
use std::fmt;

/// Verdict for one validated file.
///
/// `reason` is a human-readable diagnostic, never a machine code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether the file passed the column-scoped word policy.
    pub valid: bool,
    /// Why the verdict was reached. Always non-empty.
    pub reason: String,
}

impl ValidationResult {
    pub fn accept(reason: impl Into<String>) -> Self {
        Self {
            valid: true,
            reason: reason.into(),
        }
    }

    pub fn reject(reason: impl Into<String>) -> Self {
        Self {
            valid: false,
            reason: reason.into(),
        }
    }

    pub fn unsupported_file_type() -> Self {
        Self::reject("Unsupported file type")
    }

    pub fn empty_target_word() -> Self {
        Self::reject("Target word is empty")
    }

    pub fn found_in_text(word: &str) -> Self {
        Self::accept(format!("Word '{word}' found in text"))
    }

    pub fn not_found_in_text(word: &str) -> Self {
        Self::reject(format!("Word '{word}' not found in text"))
    }

    pub fn missing_column(column: &str) -> Self {
        Self::reject(format!("Missing column '{column}'"))
    }

    pub fn found_outside_column(word: &str, column: &str) -> Self {
        Self::reject(format!(
            "Word '{word}' found outside column '{column}', file is invalid"
        ))
    }

    pub fn no_data_rows() -> Self {
        Self::reject("No data rows")
    }

    pub fn found_in_column(word: &str, column: &str) -> Self {
        Self::accept(format!("Word '{word}' found in column '{column}'"))
    }

    pub fn not_found_in_column(word: &str, column: &str) -> Self {
        Self::reject(format!("Word '{word}' not found in column '{column}'"))
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.valid { "valid" } else { "invalid" };
        write!(f, "{status}: {}", self.reason)
    }
}
