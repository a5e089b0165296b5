use crate::schema::SchemaVersion;
use crate::shared::{ValidationError, ValidatorError};

/// SchemaValidator port for checking a document against a bundled schema
pub trait SchemaValidator {
    fn schema_version(&self) -> SchemaVersion;

    /// Validates a serialized document
    ///
    /// # Returns
    /// `Ok(None)` if the document is valid, `Ok(Some(_))` with the first
    /// diagnostic if it is not
    ///
    /// # Errors
    /// Returns an error if the validator itself cannot run
    fn validate_str(&self, document: &str) -> Result<Option<ValidationError>, ValidatorError>;
}
