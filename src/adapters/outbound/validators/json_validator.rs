use crate::ports::outbound::SchemaValidator;
use crate::schema::{resources, SchemaVersion};
use crate::shared::{ValidationError, ValidatorError};
#[cfg(feature = "json-validation")]
use std::sync::OnceLock;

/// JsonValidator adapter checking documents against the bundled JSON Schema
///
/// JSON Schemas exist from CycloneDX 1.2 on. Validation uses the
/// `jsonschema` crate, available with the default `json-validation` feature.
/// The schema is compiled on first use and kept for the validator's lifetime.
pub struct JsonValidator {
    schema_version: SchemaVersion,
    #[cfg(feature = "json-validation")]
    compiled: OnceLock<jsonschema::Validator>,
}

impl JsonValidator {
    /// # Errors
    /// Returns `NotImplemented` for schema versions without a JSON Schema (1.0, 1.1)
    pub fn new(schema_version: SchemaVersion) -> Result<Self, ValidatorError> {
        if resources::json_schema(schema_version).is_none() {
            return Err(ValidatorError::NotImplemented {
                format: "JSON".to_string(),
                version: schema_version.to_string(),
            });
        }
        Ok(Self {
            schema_version,
            #[cfg(feature = "json-validation")]
            compiled: OnceLock::new(),
        })
    }

    #[cfg(feature = "json-validation")]
    fn validator(&self) -> Result<&jsonschema::Validator, ValidatorError> {
        if let Some(validator) = self.compiled.get() {
            return Ok(validator);
        }

        let compilation_error = |details: String| ValidatorError::SchemaCompilation {
            version: self.schema_version.to_string(),
            details,
        };
        let text = resources::json_schema(self.schema_version)
            .ok_or_else(|| compilation_error("no bundled schema".to_string()))?;
        let schema: serde_json::Value =
            serde_json::from_str(text).map_err(|e| compilation_error(e.to_string()))?;
        let validator =
            jsonschema::validator_for(&schema).map_err(|e| compilation_error(e.to_string()))?;
        tracing::debug!(version = %self.schema_version, "compiled JSON schema");

        Ok(self.compiled.get_or_init(|| validator))
    }
}

impl SchemaValidator for JsonValidator {
    fn schema_version(&self) -> SchemaVersion {
        self.schema_version
    }

    #[cfg(feature = "json-validation")]
    fn validate_str(&self, document: &str) -> Result<Option<ValidationError>, ValidatorError> {
        let validator = self.validator()?;
        let instance: serde_json::Value = serde_json::from_str(document)
            .map_err(|e| ValidatorError::MalformedDocument(e.to_string()))?;

        let first = validator.iter_errors(&instance).next().map(|error| {
            let path = error.instance_path.to_string();
            if path.is_empty() {
                ValidationError::new(error.to_string())
            } else {
                ValidationError::new(format!("{}: {}", path, error))
            }
        });
        Ok(first)
    }

    #[cfg(not(feature = "json-validation"))]
    fn validate_str(&self, _document: &str) -> Result<Option<ValidationError>, ValidatorError> {
        Err(ValidatorError::MissingOptionalDependency {
            feature: "json-validation".to_string(),
            hint: "Rebuild with the `json-validation` feature to enable JSON schema validation"
                .to_string(),
        })
    }
}
