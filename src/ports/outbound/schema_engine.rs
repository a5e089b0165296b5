/// XmlSchemaEngine port for an external XSD implementation
///
/// No XSD engine ships with this crate. Callers that need XML schema
/// validation plug one in through [`crate::adapters::outbound::validators::XmlValidator::with_engine`].
pub trait XmlSchemaEngine: Send + Sync {
    /// Compiles an XSD document
    ///
    /// # Errors
    /// Returns the engine's diagnostic if the schema cannot be compiled
    fn compile(&self, xsd: &str) -> Result<Box<dyn CompiledXmlSchema>, String>;
}

/// A compiled XSD, ready to validate documents
pub trait CompiledXmlSchema: Send + Sync {
    /// Returns the first diagnostic, or `None` if the document is valid
    fn validate(&self, document: &str) -> Option<String>;
}
