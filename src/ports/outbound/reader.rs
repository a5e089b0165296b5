use crate::model::Bom;
use crate::shared::BomError;

/// BomReader port for reconstructing a BOM from a serialized document
///
/// The schema version is inferred from the document itself.
pub trait BomReader {
    /// # Errors
    /// Returns an error if the document is malformed, declares an unsupported
    /// schema version, or has dependencies on undeclared bom-refs
    fn read(&self, document: &str) -> Result<Bom, BomError>;
}
