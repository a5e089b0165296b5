use thiserror::Error;

/// Errors raised while building, reading or rendering a BOM.
#[derive(Debug, Error)]
pub enum BomError {
    /// A dependency edge points at a bom-ref that no component or service declares
    #[error("Dependency references unknown bom-ref: {bom_ref}\n\n💡 Hint: Every `ref` and `dependsOn` entry must match the bom-ref of a component or service in the same BOM")]
    UnknownComponentDependency { bom_ref: String },

    #[error("Invalid BOM version: {0}\n\n💡 Hint: BOM versions start at 1 and increase with each revision of the same BOM")]
    InvalidBomVersion(u32),

    #[error("Invalid composite hash string: {value}\nReason: {reason}")]
    InvalidHashString { value: String, reason: String },

    #[error("Unknown hash algorithm: {0}")]
    UnknownHashAlgorithm(String),

    #[error("Unsupported CycloneDX schema version: {0}")]
    UnsupportedSchemaVersion(String),

    #[error("Failed to parse JSON document\nDetails: {0}")]
    JsonParse(String),

    #[error("Failed to parse XML document\nDetails: {0}")]
    XmlParse(String),

    #[error("Invalid BOM document: {0}")]
    InvalidDocument(String),

    #[error("Failed to generate {format} output\nDetails: {details}")]
    OutputGeneration { format: String, details: String },
}

impl From<serde_json::Error> for BomError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonParse(err.to_string())
    }
}

impl From<quick_xml::Error> for BomError {
    fn from(err: quick_xml::Error) -> Self {
        Self::XmlParse(err.to_string())
    }
}

/// Errors raised by schema validators.
///
/// A document that fails validation is *not* an error: it is reported as
/// `Ok(Some(ValidationError))`. These variants cover the validator itself
/// being unusable.
#[derive(Debug, Error)]
pub enum ValidatorError {
    #[error("{format} validation is not implemented for schema version {version}")]
    NotImplemented { format: String, version: String },

    #[error("This functionality requires an optional dependency: {feature}\n\n💡 Hint: {hint}")]
    MissingOptionalDependency { feature: String, hint: String },

    #[error("Failed to compile schema for version {version}\nDetails: {details}")]
    SchemaCompilation { version: String, details: String },

    #[error("Document could not be parsed for validation\nDetails: {0}")]
    MalformedDocument(String),
}

/// First diagnostic reported by the schema-validation oracle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Raw diagnostic text from the oracle
    pub data: String,
}

impl ValidationError {
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.data)
    }
}
