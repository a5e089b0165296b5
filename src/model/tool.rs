use super::{ExternalReference, HashType};

/// A tool that took part in producing the BOM
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tool {
    pub vendor: Option<String>,
    pub name: Option<String>,
    pub version: Option<String>,
    pub hashes: Vec<HashType>,
    pub external_references: Vec<ExternalReference>,
}

impl Tool {
    pub fn new(
        vendor: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            vendor: Some(vendor.into()),
            name: Some(name.into()),
            version: Some(version.into()),
            hashes: Vec::new(),
            external_references: Vec::new(),
        }
    }

    /// The entry describing this library, added to every new BOM
    pub fn this_library() -> Self {
        Self::new(
            "CycloneDX",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
        )
    }

    pub fn with_external_reference(mut self, reference: ExternalReference) -> Self {
        self.external_references.push(reference);
        self
    }
}
