pub mod outcome;
pub mod tabular;

pub use outcome::ValidationResult;
pub use tabular::TabularPolicy;
