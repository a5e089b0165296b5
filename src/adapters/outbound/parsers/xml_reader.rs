use crate::adapters::outbound::xml::{tree_from_document, XmlElement};
use crate::model::Bom;
use crate::ports::outbound::BomReader;
use crate::shared::BomError;

/// XmlBomReader adapter for CycloneDX XML documents
///
/// The schema version comes from the namespace of the `<bom>` root.
#[derive(Debug, Default, Clone, Copy)]
pub struct XmlBomReader;

impl XmlBomReader {
    pub fn new() -> Self {
        Self
    }
}

impl BomReader for XmlBomReader {
    fn read(&self, document: &str) -> Result<Bom, BomError> {
        let root = XmlElement::parse(document)?;
        let (tree, version) = tree_from_document(&root)?;
        tracing::debug!(%version, "reading XML BOM");
        tree.into_bom(version)
    }
}

impl Bom {
    /// Reads a CycloneDX XML document of any supported version
    pub fn from_xml(document: &str) -> Result<Bom, BomError> {
        XmlBomReader.read(document)
    }
}
