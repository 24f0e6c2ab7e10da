pub mod check;
pub mod config;

use clap::Args;
use std::path::PathBuf;
use wordguard_core::config::{read_config, ValidatorConfig};
use wordguard_core::error::WordguardError;

/// Configuration sources shared by the subcommands.
///
/// Without `--config`, settings come from the environment (and `.env`).
/// Flags override either source.
#[derive(Args)]
pub struct ConfigArgs {
    /// JSON configuration file
    #[arg(long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Word to search for
    #[arg(short = 'w', long)]
    pub target_word: Option<String>,

    /// Column where the word is allowed
    #[arg(short = 'c', long)]
    pub column: Option<String>,

    /// Chunk size in bytes for streaming plain text
    #[arg(long)]
    pub chunk_size: Option<usize>,
}

impl ConfigArgs {
    pub fn resolve(&self) -> Result<ValidatorConfig, WordguardError> {
        self.resolve_with(|key| std::env::var(key).ok())
    }

    /// Layer the flags over the file or `lookup`, validating only the result.
    fn resolve_with<F>(&self, lookup: F) -> Result<ValidatorConfig, WordguardError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match &self.config_file {
            Some(path) => read_config(path)?,
            None => ValidatorConfig::from_lookup(lookup)?,
        };

        if let Some(ref word) = self.target_word {
            config.target_word = word.clone();
        }
        if let Some(ref column) = self.column {
            config.company_column = column.clone();
        }
        if let Some(chunk_size) = self.chunk_size {
            config.chunk_size = chunk_size;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn no_flags() -> ConfigArgs {
        ConfigArgs {
            config_file: None,
            target_word: None,
            column: None,
            chunk_size: None,
        }
    }

    fn env(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_environment_used_without_flags() {
        let config = no_flags()
            .resolve_with(env(&[("TARGET_WORD", "Acme"), ("DEFAULT_TXT_CHUNK", "64")]))
            .unwrap();
        assert_eq!(config.target_word, "Acme");
        assert_eq!(config.chunk_size, 64);
        assert_eq!(config.company_column, "Company Name");
    }

    #[test]
    fn test_flags_override_environment() {
        let args = ConfigArgs {
            target_word: Some("Initech".into()),
            column: Some("Employer".into()),
            chunk_size: Some(4096),
            ..no_flags()
        };
        let config = args
            .resolve_with(env(&[
                ("TARGET_WORD", "Acme"),
                ("COMPANY_NAME_COL", " "),
                ("DEFAULT_TXT_CHUNK", "0"),
            ]))
            .unwrap();
        assert_eq!(config.target_word, "Initech");
        assert_eq!(config.company_column, "Employer");
        assert_eq!(config.chunk_size, 4096);
    }

    #[test]
    fn test_bad_environment_without_override_rejected() {
        let err = no_flags()
            .resolve_with(env(&[("DEFAULT_TXT_CHUNK", "0")]))
            .unwrap_err();
        assert!(matches!(err, WordguardError::ConfigInvalid(_)));
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("wordguard.json");
        std::fs::write(&path, r#"{ "target_word": "Acme", "chunk_size": 0 }"#).unwrap();

        let args = ConfigArgs {
            config_file: Some(path),
            chunk_size: Some(512),
            ..no_flags()
        };
        let config = args
            .resolve_with(env(&[("TARGET_WORD", "ignored")]))
            .unwrap();
        assert_eq!(config.target_word, "Acme");
        assert_eq!(config.chunk_size, 512);
    }
}
