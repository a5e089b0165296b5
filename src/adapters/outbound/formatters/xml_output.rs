use crate::adapters::outbound::tree::BomTree;
use crate::adapters::outbound::xml::document_from_tree;
use crate::application::dto::OutputFormat;
use crate::model::Bom;
use crate::ports::outbound::BomOutput;
use crate::schema::SchemaVersion;
use crate::shared::BomError;
use std::borrow::{Borrow, BorrowMut};

/// XmlOutput adapter rendering CycloneDX XML for one schema version
///
/// Same caching contract as [`super::JsonOutput`].
pub struct XmlOutput<B: Borrow<Bom>> {
    bom: B,
    schema_version: SchemaVersion,
    cached: Option<String>,
}

impl<B: Borrow<Bom>> XmlOutput<B> {
    /// Creates the adapter over a borrowed (`&Bom`) or owned (`Bom`) BOM
    pub fn new(bom: B, schema_version: SchemaVersion) -> Self {
        Self {
            bom,
            schema_version,
            cached: None,
        }
    }

    pub fn bom(&self) -> &Bom {
        <B as Borrow<Bom>>::borrow(&self.bom)
    }

    fn render(&self) -> Result<String, BomError> {
        self.bom().validate()?;
        let tree = BomTree::for_version(self.bom(), self.schema_version);
        document_from_tree(&tree, self.schema_version).to_document()
    }
}

impl<B: BorrowMut<Bom>> XmlOutput<B> {
    /// Mutable access to an owned BOM; the cached document is kept until
    /// `generate(true)` is called
    pub fn bom_mut(&mut self) -> &mut Bom {
        <B as BorrowMut<Bom>>::borrow_mut(&mut self.bom)
    }
}

impl<B: Borrow<Bom>> BomOutput for XmlOutput<B> {
    fn output_format(&self) -> OutputFormat {
        OutputFormat::Xml
    }

    fn schema_version(&self) -> SchemaVersion {
        self.schema_version
    }

    fn generate(&mut self, force_regeneration: bool) -> Result<(), BomError> {
        if self.cached.is_some() && !force_regeneration {
            tracing::debug!(version = %self.schema_version, "reusing cached XML output");
            return Ok(());
        }
        tracing::debug!(version = %self.schema_version, "generating XML output");
        self.cached = Some(self.render()?);
        Ok(())
    }

    fn output_as_string(&mut self) -> Result<String, BomError> {
        self.generate(false)?;
        Ok(self.cached.clone().unwrap_or_default())
    }
}
