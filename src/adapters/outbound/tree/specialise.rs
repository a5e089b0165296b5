//! Capability filter: removes or rewrites whatever a schema version cannot
//! express. Operates on an owned tree, never on the caller's model.

use super::wire::*;
use crate::schema::SchemaCapabilities;

pub(crate) fn specialise(tree: &mut BomTree, caps: &SchemaCapabilities) {
    // Metadata rules are ordered: the first one that applies wins.
    if !caps.bom_metadata {
        tree.metadata = None;
    } else if let Some(metadata) = tree.metadata.as_mut() {
        if !caps.bom_metadata_tools {
            metadata.tools.clear();
        } else if !caps.bom_metadata_tools_external_references {
            for tool in &mut metadata.tools {
                tool.external_references.clear();
            }
        }
    }

    if let Some(metadata) = tree.metadata.as_mut() {
        if !caps.bom_metadata_licenses {
            metadata.licenses.clear();
        }
        if !caps.bom_metadata_properties {
            metadata.properties.clear();
        }
        for tool in &mut metadata.tools {
            external_references(&mut tool.external_references, caps);
        }
        if let Some(component) = metadata.component.as_deref_mut() {
            self::component(component, caps);
        }
        licenses(&mut metadata.licenses, caps);
    }

    if !caps.bom_services {
        tree.services.clear();
    }
    if !caps.bom_dependencies {
        tree.dependencies.clear();
    }
    if !caps.bom_vulnerabilities {
        tree.vulnerabilities.clear();
    }
    if !caps.bom_external_references {
        tree.external_references.clear();
    }
    external_references(&mut tree.external_references, caps);

    for component in &mut tree.components {
        self::component(component, caps);
    }
    for service in &mut tree.services {
        self::service(service, caps);
    }
}

fn component(component: &mut ComponentNode, caps: &SchemaCapabilities) {
    if !caps.component_bom_ref {
        component.bom_ref = None;
    }
    if !caps.component_author {
        component.author = None;
    }
    if !caps.component_mime_type {
        component.mime_type = None;
    }
    if !caps.component_supplier {
        component.supplier = None;
    }
    if !caps.component_external_references {
        component.external_references.clear();
    }
    if !caps.component_properties {
        component.properties.clear();
    }
    if !caps.component_release_notes {
        component.release_notes = None;
    }
    if !caps.component_version_optional && component.version.is_none() {
        component.version = Some(String::new());
    }
    component.modified = caps.component_modified_flag.then_some(false);

    external_references(&mut component.external_references, caps);
    licenses(&mut component.licenses, caps);
    for child in &mut component.components {
        self::component(child, caps);
    }
}

fn service(service: &mut ServiceNode, caps: &SchemaCapabilities) {
    if !caps.service_properties {
        service.properties.clear();
    }
    if !caps.service_release_notes {
        service.release_notes = None;
    }

    external_references(&mut service.external_references, caps);
    licenses(&mut service.licenses, caps);
    for child in &mut service.services {
        self::service(child, caps);
    }
}

fn external_references(references: &mut [ExternalReferenceNode], caps: &SchemaCapabilities) {
    if !caps.external_reference_hashes {
        for reference in references {
            reference.hashes.clear();
        }
    }
}

fn licenses(licenses: &mut Vec<LicenseNode>, caps: &SchemaCapabilities) {
    if !caps.license_expression {
        licenses.retain(|l| l.expression.is_none());
    }
}
