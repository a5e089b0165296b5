use super::SchemaVersion;
use strum::{Display, EnumIter};

/// Structural features that differ between schema generations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Capability {
    BomMetadata,
    BomMetadataTools,
    BomMetadataToolsExternalReferences,
    BomMetadataLicenses,
    BomMetadataProperties,
    BomServices,
    BomDependencies,
    BomExternalReferences,
    BomVulnerabilities,
    ComponentBomRef,
    ComponentAuthor,
    ComponentMimeType,
    ComponentSupplier,
    ComponentExternalReferences,
    ComponentProperties,
    ComponentReleaseNotes,
    ComponentVersionOptional,
    /// `modified` is mandatory in 1.0 and deprecated afterwards
    ComponentModifiedFlag,
    ExternalReferenceHashes,
    LicenseExpression,
    ServiceProperties,
    ServiceReleaseNotes,
}

impl Capability {
    /// Capabilities that are allowed to switch off in a later version
    pub const NON_MONOTONIC: [Capability; 1] = [Capability::ComponentModifiedFlag];
}

/// One row of the capability table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaCapabilities {
    pub bom_metadata: bool,
    pub bom_metadata_tools: bool,
    pub bom_metadata_tools_external_references: bool,
    pub bom_metadata_licenses: bool,
    pub bom_metadata_properties: bool,
    pub bom_services: bool,
    pub bom_dependencies: bool,
    pub bom_external_references: bool,
    pub bom_vulnerabilities: bool,
    pub component_bom_ref: bool,
    pub component_author: bool,
    pub component_mime_type: bool,
    pub component_supplier: bool,
    pub component_external_references: bool,
    pub component_properties: bool,
    pub component_release_notes: bool,
    pub component_version_optional: bool,
    pub component_modified_flag: bool,
    pub external_reference_hashes: bool,
    pub license_expression: bool,
    pub service_properties: bool,
    pub service_release_notes: bool,
}

const V1_0: SchemaCapabilities = SchemaCapabilities {
    bom_metadata: false,
    bom_metadata_tools: false,
    bom_metadata_tools_external_references: false,
    bom_metadata_licenses: false,
    bom_metadata_properties: false,
    bom_services: false,
    bom_dependencies: false,
    bom_external_references: false,
    bom_vulnerabilities: false,
    component_bom_ref: false,
    component_author: false,
    component_mime_type: false,
    component_supplier: false,
    component_external_references: false,
    component_properties: false,
    component_release_notes: false,
    component_version_optional: false,
    component_modified_flag: true,
    external_reference_hashes: false,
    license_expression: false,
    service_properties: false,
    service_release_notes: false,
};

const V1_1: SchemaCapabilities = SchemaCapabilities {
    bom_external_references: true,
    component_bom_ref: true,
    component_external_references: true,
    component_modified_flag: false,
    license_expression: true,
    ..V1_0
};

const V1_2: SchemaCapabilities = SchemaCapabilities {
    bom_metadata: true,
    bom_metadata_tools: true,
    bom_services: true,
    bom_dependencies: true,
    component_author: true,
    component_mime_type: true,
    component_supplier: true,
    ..V1_1
};

const V1_3: SchemaCapabilities = SchemaCapabilities {
    bom_metadata_licenses: true,
    bom_metadata_properties: true,
    component_properties: true,
    external_reference_hashes: true,
    service_properties: true,
    ..V1_2
};

const V1_4: SchemaCapabilities = SchemaCapabilities {
    bom_metadata_tools_external_references: true,
    bom_vulnerabilities: true,
    component_release_notes: true,
    component_version_optional: true,
    service_release_notes: true,
    ..V1_3
};

impl SchemaCapabilities {
    pub fn supports(&self, capability: Capability) -> bool {
        match capability {
            Capability::BomMetadata => self.bom_metadata,
            Capability::BomMetadataTools => self.bom_metadata_tools,
            Capability::BomMetadataToolsExternalReferences => {
                self.bom_metadata_tools_external_references
            }
            Capability::BomMetadataLicenses => self.bom_metadata_licenses,
            Capability::BomMetadataProperties => self.bom_metadata_properties,
            Capability::BomServices => self.bom_services,
            Capability::BomDependencies => self.bom_dependencies,
            Capability::BomExternalReferences => self.bom_external_references,
            Capability::BomVulnerabilities => self.bom_vulnerabilities,
            Capability::ComponentBomRef => self.component_bom_ref,
            Capability::ComponentAuthor => self.component_author,
            Capability::ComponentMimeType => self.component_mime_type,
            Capability::ComponentSupplier => self.component_supplier,
            Capability::ComponentExternalReferences => self.component_external_references,
            Capability::ComponentProperties => self.component_properties,
            Capability::ComponentReleaseNotes => self.component_release_notes,
            Capability::ComponentVersionOptional => self.component_version_optional,
            Capability::ComponentModifiedFlag => self.component_modified_flag,
            Capability::ExternalReferenceHashes => self.external_reference_hashes,
            Capability::LicenseExpression => self.license_expression,
            Capability::ServiceProperties => self.service_properties,
            Capability::ServiceReleaseNotes => self.service_release_notes,
        }
    }
}

impl SchemaVersion {
    /// Capability row for this version
    pub fn capabilities(self) -> &'static SchemaCapabilities {
        match self {
            SchemaVersion::V1_0 => &V1_0,
            SchemaVersion::V1_1 => &V1_1,
            SchemaVersion::V1_2 => &V1_2,
            SchemaVersion::V1_3 => &V1_3,
            SchemaVersion::V1_4 => &V1_4,
        }
    }

    pub fn supports(self, capability: Capability) -> bool {
        self.capabilities().supports(capability)
    }
}
