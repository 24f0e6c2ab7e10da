pub mod config;
pub mod error;
pub mod normalize;
pub mod policy;
pub mod readers;
pub mod validator;

use std::path::Path;

use config::ValidatorConfig;
use error::WordguardError;
use policy::outcome::ValidationResult;
use validator::Validator;

pub use readers::FileFormat;

/// Main API entry point: validate one file against a configuration.
///
/// Builds a throwaway [`Validator`]; callers validating many files should
/// construct one `Validator` and reuse it.
pub fn validate_file(
    path: &Path,
    config: &ValidatorConfig,
) -> Result<ValidationResult, WordguardError> {
    let validator = Validator::new(config.clone())?;
    validator.validate_file(path)
}
