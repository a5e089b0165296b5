use crate::adapters::outbound::xml::XmlElement;
use crate::ports::outbound::{CompiledXmlSchema, SchemaValidator, XmlSchemaEngine};
use crate::schema::{resources, SchemaVersion};
use crate::shared::{ValidationError, ValidatorError};
use std::sync::{Arc, OnceLock};

/// XmlValidator adapter checking documents against the bundled XSD
///
/// XSD validation itself is delegated to an [`XmlSchemaEngine`]. Without
/// one, `validate_str` fails with `MissingOptionalDependency`.
pub struct XmlValidator {
    schema_version: SchemaVersion,
    engine: Option<Arc<dyn XmlSchemaEngine>>,
    compiled: OnceLock<Box<dyn CompiledXmlSchema>>,
}

impl XmlValidator {
    pub fn new(schema_version: SchemaVersion) -> Result<Self, ValidatorError> {
        if resources::xml_schema(schema_version).is_none() {
            return Err(ValidatorError::NotImplemented {
                format: "XML".to_string(),
                version: schema_version.to_string(),
            });
        }
        Ok(Self {
            schema_version,
            engine: None,
            compiled: OnceLock::new(),
        })
    }

    pub fn with_engine(
        schema_version: SchemaVersion,
        engine: Arc<dyn XmlSchemaEngine>,
    ) -> Result<Self, ValidatorError> {
        let mut validator = Self::new(schema_version)?;
        validator.engine = Some(engine);
        Ok(validator)
    }

    fn schema(
        &self,
        engine: &dyn XmlSchemaEngine,
    ) -> Result<&dyn CompiledXmlSchema, ValidatorError> {
        if let Some(schema) = self.compiled.get() {
            return Ok(schema.as_ref());
        }

        let xsd = resources::xml_schema(self.schema_version).unwrap_or_default();
        let schema = engine
            .compile(xsd)
            .map_err(|details| ValidatorError::SchemaCompilation {
                version: self.schema_version.to_string(),
                details,
            })?;
        tracing::debug!(version = %self.schema_version, "compiled XML schema");

        Ok(self.compiled.get_or_init(|| schema).as_ref())
    }
}

impl SchemaValidator for XmlValidator {
    fn schema_version(&self) -> SchemaVersion {
        self.schema_version
    }

    fn validate_str(&self, document: &str) -> Result<Option<ValidationError>, ValidatorError> {
        let engine = self
            .engine
            .as_deref()
            .ok_or_else(|| ValidatorError::MissingOptionalDependency {
                feature: "XML schema engine".to_string(),
                hint: "Construct the validator with XmlValidator::with_engine to enable XSD validation"
                    .to_string(),
            })?;

        XmlElement::parse(document)
            .map_err(|e| ValidatorError::MalformedDocument(e.to_string()))?;

        Ok(self
            .schema(engine)?
            .validate(document)
            .map(ValidationError::new))
    }
}
