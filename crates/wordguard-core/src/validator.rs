use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::Path;

use encoding_rs::Encoding;

use crate::config::{resolve_encoding, ValidatorConfig};
use crate::error::WordguardError;
use crate::normalize::fold_case;
use crate::policy::outcome::ValidationResult;
use crate::policy::tabular::TabularPolicy;
use crate::readers::delimited::DelimitedReader;
use crate::readers::plaintext::PlainTextReader;
use crate::readers::{spreadsheet, FileFormat};

/// Entry point of the engine: maps a file to its reader and policy.
///
/// Holds only read-only configuration, so one instance can serve any number
/// of concurrent validation calls.
#[derive(Debug, Clone)]
pub struct Validator {
    config: ValidatorConfig,
    text_encoding: &'static Encoding,
    delimited_encoding: &'static Encoding,
    policy: TabularPolicy,
}

impl Validator {
    pub fn new(config: ValidatorConfig) -> Result<Self, WordguardError> {
        config.validate()?;
        let text_encoding = resolve_encoding(&config.text_encoding)?;
        let delimited_encoding = resolve_encoding(&config.delimited_encoding)?;
        let policy = TabularPolicy::new(&config.target_word, &config.company_column);

        Ok(Self {
            config,
            text_encoding,
            delimited_encoding,
            policy,
        })
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate a file on disk, choosing the reader by extension.
    ///
    /// Unsupported extensions and an empty target word are reported as
    /// verdicts without opening the file. Read and parse failures are errors.
    pub fn validate_file(&self, path: &Path) -> Result<ValidationResult, WordguardError> {
        let Some(format) = FileFormat::from_path(path) else {
            tracing::debug!(path = %path.display(), "unsupported file type");
            return Ok(ValidationResult::unsupported_file_type());
        };
        if self.target_is_empty() {
            return Ok(ValidationResult::empty_target_word());
        }

        tracing::debug!(path = %path.display(), %format, "validating file");
        let file = File::open(path)?;
        let result = match format {
            FileFormat::PlainText => self.text_reader().validate(file, &self.config.target_word)?,
            FileFormat::Delimited => self.policy.evaluate(self.delimited_reader().read_rows(file)?)?,
            FileFormat::Spreadsheet => {
                let rows = spreadsheet::read_rows(BufReader::new(file))?;
                self.policy.evaluate_rows(rows)
            }
        };

        tracing::info!(
            path = %path.display(),
            valid = result.valid,
            reason = %result.reason,
            "validation finished"
        );
        Ok(result)
    }

    /// Validate an arbitrary byte stream of a known format.
    pub fn validate_reader<R: Read>(
        &self,
        format: FileFormat,
        mut reader: R,
    ) -> Result<ValidationResult, WordguardError> {
        if self.target_is_empty() {
            return Ok(ValidationResult::empty_target_word());
        }

        match format {
            FileFormat::PlainText => Ok(self.text_reader().validate(reader, &self.config.target_word)?),
            FileFormat::Delimited => self.policy.evaluate(self.delimited_reader().read_rows(reader)?),
            FileFormat::Spreadsheet => {
                let mut bytes = Vec::new();
                reader.read_to_end(&mut bytes)?;
                let rows = spreadsheet::read_rows(Cursor::new(bytes))?;
                Ok(self.policy.evaluate_rows(rows))
            }
        }
    }

    /// Stream a text file with a per-call chunk size and encoding label,
    /// regardless of its extension.
    pub fn validate_text_with(
        &self,
        path: &Path,
        chunk_size: usize,
        encoding: &str,
    ) -> Result<ValidationResult, WordguardError> {
        if chunk_size == 0 {
            return Err(WordguardError::ConfigInvalid(
                "chunk_size must be at least 1".into(),
            ));
        }
        let encoding = resolve_encoding(encoding)?;
        if self.target_is_empty() {
            return Ok(ValidationResult::empty_target_word());
        }

        let file = File::open(path)?;
        let result =
            PlainTextReader::new(chunk_size, encoding).validate(file, &self.config.target_word)?;
        Ok(result)
    }

    fn target_is_empty(&self) -> bool {
        fold_case(&self.config.target_word).is_empty()
    }

    fn text_reader(&self) -> PlainTextReader {
        PlainTextReader::new(self.config.chunk_size, self.text_encoding)
    }

    fn delimited_reader(&self) -> DelimitedReader {
        DelimitedReader::new(self.delimited_encoding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> Validator {
        Validator::new(ValidatorConfig::default()).unwrap()
    }

    #[test]
    fn test_unsupported_extension_not_opened() {
        // The path does not exist; an attempt to open it would be an IO error.
        let r = validator()
            .validate_file(Path::new("/nonexistent/report.pdf"))
            .unwrap();
        assert!(!r.valid);
        assert_eq!(r.reason, "Unsupported file type");
    }

    #[test]
    fn test_missing_supported_file_is_io_error() {
        let err = validator()
            .validate_file(Path::new("/nonexistent/report.csv"))
            .unwrap_err();
        assert!(matches!(err, WordguardError::Io(_)));
    }

    #[test]
    fn test_empty_target_word_not_opened() {
        let v = Validator::new(ValidatorConfig::new("", "Company Name")).unwrap();
        for name in ["/nonexistent/a.txt", "/nonexistent/a.csv", "/nonexistent/a.xlsx"] {
            let r = v.validate_file(Path::new(name)).unwrap();
            assert_eq!(r, ValidationResult::empty_target_word());
        }
    }

    #[test]
    fn test_validate_reader_plain_text() {
        let r = validator()
            .validate_reader(FileFormat::PlainText, &b"hello quantori"[..])
            .unwrap();
        assert!(r.valid);
    }

    #[test]
    fn test_validate_reader_delimited() {
        let csv = b"User,Company Name\nquantori,Other\n";
        let r = validator()
            .validate_reader(FileFormat::Delimited, &csv[..])
            .unwrap();
        assert!(!r.valid);
        assert!(r.reason.contains("outside column"));
    }

    #[test]
    fn test_rejects_invalid_config() {
        assert!(Validator::new(ValidatorConfig::default().with_chunk_size(0)).is_err());
    }

    #[test]
    fn test_validator_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Validator>();
    }
}
