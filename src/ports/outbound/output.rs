use crate::application::dto::OutputFormat;
use crate::schema::SchemaVersion;
use crate::shared::BomError;

/// BomOutput port for rendering a BOM at one schema version
///
/// Implementations borrow the BOM and keep the rendered document cached,
/// so repeated calls return the same bytes until regeneration is forced.
pub trait BomOutput {
    fn output_format(&self) -> OutputFormat;

    fn schema_version(&self) -> SchemaVersion;

    /// Renders the document into the cache
    ///
    /// # Arguments
    /// * `force_regeneration` - Render again even if a cached document exists
    ///
    /// # Errors
    /// Returns an error if the BOM fails [`Bom::validate`](crate::model::Bom::validate)
    /// or serialization fails
    fn generate(&mut self, force_regeneration: bool) -> Result<(), BomError>;

    /// Returns the cached document, generating it first if needed
    fn output_as_string(&mut self) -> Result<String, BomError>;
}
