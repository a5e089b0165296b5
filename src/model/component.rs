use super::{
    BomRef, ExternalReference, HashType, LicenseChoice, OrganizationalEntity, Property,
    ReleaseNotes,
};
use strum::{Display, EnumString, IntoStaticStr};

/// Classification of a component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum ComponentType {
    Application,
    Framework,
    Library,
    Container,
    OperatingSystem,
    Device,
    Firmware,
    File,
}

impl ComponentType {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Whether a component is needed at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum ComponentScope {
    Required,
    Optional,
    Excluded,
}

impl ComponentScope {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// A piece of software, hardware or data described by the BOM
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub component_type: ComponentType,
    pub mime_type: Option<String>,
    pub bom_ref: BomRef,
    pub supplier: Option<OrganizationalEntity>,
    pub author: Option<String>,
    pub publisher: Option<String>,
    pub group: Option<String>,
    pub name: String,
    /// `None` means "not specified", which CycloneDX 1.4 allows
    pub version: Option<String>,
    pub description: Option<String>,
    pub scope: Option<ComponentScope>,
    pub hashes: Vec<HashType>,
    pub licenses: Vec<LicenseChoice>,
    pub copyright: Option<String>,
    pub cpe: Option<String>,
    pub purl: Option<String>,
    pub external_references: Vec<ExternalReference>,
    pub properties: Vec<Property>,
    pub components: Vec<Component>,
    pub release_notes: Option<ReleaseNotes>,
}

impl Component {
    /// Creates a library component with an unset bom-ref
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            component_type: ComponentType::Library,
            mime_type: None,
            bom_ref: BomRef::unset(),
            supplier: None,
            author: None,
            publisher: None,
            group: None,
            name: name.into(),
            version: None,
            description: None,
            scope: None,
            hashes: Vec::new(),
            licenses: Vec::new(),
            copyright: None,
            cpe: None,
            purl: None,
            external_references: Vec::new(),
            properties: Vec::new(),
            components: Vec::new(),
            release_notes: None,
        }
    }

    pub fn with_type(mut self, component_type: ComponentType) -> Self {
        self.component_type = component_type;
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_bom_ref(mut self, bom_ref: impl Into<BomRef>) -> Self {
        self.bom_ref = bom_ref.into();
        self
    }

    pub fn with_purl(mut self, purl: impl Into<String>) -> Self {
        self.purl = Some(purl.into());
        self
    }

    pub fn with_hash(mut self, hash: HashType) -> Self {
        self.hashes.push(hash);
        self
    }

    pub fn with_license(mut self, license: LicenseChoice) -> Self {
        self.licenses.push(license);
        self
    }

    pub fn with_external_reference(mut self, reference: ExternalReference) -> Self {
        self.external_references.push(reference);
        self
    }

    pub fn with_component(mut self, child: Component) -> Self {
        self.components.push(child);
        self
    }

    /// The component and all of its descendants, depth first
    pub fn walk(&self) -> Vec<&Component> {
        let mut out = vec![self];
        for child in &self.components {
            out.extend(child.walk());
        }
        out
    }
}
