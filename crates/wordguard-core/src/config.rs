use std::path::Path;

use encoding_rs::Encoding;
use serde::{Deserialize, Serialize};

use crate::error::WordguardError;

pub const DEFAULT_TARGET_WORD: &str = "Quantori";
pub const DEFAULT_COMPANY_COLUMN: &str = "Company Name";
pub const DEFAULT_CHUNK_SIZE: usize = 1024 * 1024;
pub const DEFAULT_ENCODING: &str = "utf-8";

/// Environment variable names read by [`ValidatorConfig::from_env`].
pub const ENV_TARGET_WORD: &str = "TARGET_WORD";
pub const ENV_COMPANY_COLUMN: &str = "COMPANY_NAME_COL";
pub const ENV_CHUNK_SIZE: &str = "DEFAULT_TXT_CHUNK";

/// Process-wide validation settings.
///
/// Built once at startup and handed to [`crate::validator::Validator`]; the
/// engine never re-reads configuration while a file is being validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// The word whose placement decides validity. May be empty, in which
    /// case every file is reported invalid.
    #[serde(default = "default_target_word")]
    pub target_word: String,
    /// Logical name of the column where the target word is allowed.
    #[serde(default = "default_company_column")]
    pub company_column: String,
    /// Bytes read per chunk when streaming plain text.
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
    /// Encoding label for `.txt` files.
    #[serde(default = "default_encoding")]
    pub text_encoding: String,
    /// Encoding label for `.csv` files. A leading BOM is always stripped.
    #[serde(default = "default_encoding")]
    pub delimited_encoding: String,
}

fn default_target_word() -> String {
    DEFAULT_TARGET_WORD.to_string()
}

fn default_company_column() -> String {
    DEFAULT_COMPANY_COLUMN.to_string()
}

fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

fn default_encoding() -> String {
    DEFAULT_ENCODING.to_string()
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            target_word: default_target_word(),
            company_column: default_company_column(),
            chunk_size: default_chunk_size(),
            text_encoding: default_encoding(),
            delimited_encoding: default_encoding(),
        }
    }
}

impl ValidatorConfig {
    /// Convenience constructor for a target word and column with default
    /// chunking and encodings.
    pub fn new(target_word: impl Into<String>, company_column: impl Into<String>) -> Self {
        Self {
            target_word: target_word.into(),
            company_column: company_column.into(),
            ..Default::default()
        }
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Read `TARGET_WORD`, `COMPANY_NAME_COL` and `DEFAULT_TXT_CHUNK` from the
    /// process environment. Unset variables keep their defaults.
    ///
    /// Only the chunk size is parsed here; call [`Self::validate`] once any
    /// overrides have been applied.
    pub fn from_env() -> Result<Self, WordguardError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, WordguardError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(word) = lookup(ENV_TARGET_WORD) {
            config.target_word = word;
        }
        if let Some(column) = lookup(ENV_COMPANY_COLUMN) {
            config.company_column = column;
        }
        if let Some(raw) = lookup(ENV_CHUNK_SIZE) {
            config.chunk_size = raw.trim().parse().map_err(|_| {
                WordguardError::ConfigInvalid(format!(
                    "{ENV_CHUNK_SIZE} must be a positive integer, got '{raw}'"
                ))
            })?;
        }

        Ok(config)
    }

    /// Check that the configuration can drive a validation run.
    ///
    /// An empty target word passes: it is reported per file as an invalid
    /// verdict rather than rejected up front.
    pub fn validate(&self) -> Result<(), WordguardError> {
        if self.chunk_size == 0 {
            return Err(WordguardError::ConfigInvalid(
                "chunk_size must be at least 1".into(),
            ));
        }

        if self.company_column.trim().is_empty() {
            return Err(WordguardError::ConfigInvalid(
                "company_column must not be empty".into(),
            ));
        }

        resolve_encoding(&self.text_encoding)?;
        resolve_encoding(&self.delimited_encoding)?;

        Ok(())
    }
}

/// Look up an `encoding_rs` encoding by its WHATWG label.
pub fn resolve_encoding(label: &str) -> Result<&'static Encoding, WordguardError> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| WordguardError::ConfigInvalid(format!("unknown encoding '{label}'")))
}

/// Load and validate a configuration from a JSON file.
pub fn load_config(path: &Path) -> Result<ValidatorConfig, WordguardError> {
    let config = read_config(path)?;
    config.validate()?;
    Ok(config)
}

/// Read a JSON configuration file without validating it, so callers can
/// layer overrides on top first.
pub fn read_config(path: &Path) -> Result<ValidatorConfig, WordguardError> {
    let content = std::fs::read_to_string(path).map_err(|e| WordguardError::ConfigLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let config: ValidatorConfig =
        serde_json::from_str(&content).map_err(|e| WordguardError::ConfigLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    Ok(config)
}

/// Parse a configuration from a JSON string (no file path context).
pub fn parse_config_str(json: &str) -> Result<ValidatorConfig, WordguardError> {
    let config: ValidatorConfig = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
}
