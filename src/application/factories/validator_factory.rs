use crate::adapters::outbound::validators::{JsonValidator, XmlValidator};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::SchemaValidator;
use crate::schema::SchemaVersion;
use crate::shared::ValidatorError;

/// Factory for creating schema validators
pub struct ValidatorFactory;

impl ValidatorFactory {
    /// Creates a validator for documents of `format` at `schema_version`
    ///
    /// XML validators created here have no schema engine attached; use
    /// [`XmlValidator::with_engine`] to supply one.
    ///
    /// # Errors
    /// Returns `NotImplemented` if no schema exists for the combination
    pub fn create(
        format: OutputFormat,
        schema_version: SchemaVersion,
    ) -> Result<Box<dyn SchemaValidator>, ValidatorError> {
        match format {
            OutputFormat::Json => Ok(Box::new(JsonValidator::new(schema_version)?)),
            OutputFormat::Xml => Ok(Box::new(XmlValidator::new(schema_version)?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_json_validator() {
        let validator = ValidatorFactory::create(OutputFormat::Json, SchemaVersion::V1_3).unwrap();
        assert_eq!(validator.schema_version(), SchemaVersion::V1_3);
    }

    #[test]
    fn test_json_validator_unavailable_for_1_1() {
        assert!(matches!(
            ValidatorFactory::create(OutputFormat::Json, SchemaVersion::V1_1),
            Err(ValidatorError::NotImplemented { .. })
        ));
    }

    #[test]
    fn test_xml_validator_for_every_version() {
        for version in SchemaVersion::ALL {
            let validator = ValidatorFactory::create(OutputFormat::Xml, version).unwrap();
            assert_eq!(validator.schema_version(), version);
        }
    }
}
