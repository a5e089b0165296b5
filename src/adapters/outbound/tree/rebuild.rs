//! Tree to model.
//!
//! Dependencies are resolved only after the whole component and service
//! graph exists, so forward references are fine; a ref that nothing
//! declares fails the read.
//!
//! Versions that require a component version carry `""` for an unknown one;
//! for those versions the placeholder reads back as `None`.

use super::wire::*;
use crate::model::{
    parse_wire, Advisory, Bom, BomRef, Component, DataClassification, Dependency,
    ExternalReference, HashAlgorithm, HashType, License, LicenseChoice, Metadata, Note,
    OrganizationalContact, OrganizationalEntity, Property, ReleaseNotes, Service, Tool,
    Vulnerability, VulnerabilityRating, VulnerabilitySource,
};
use crate::schema::{Capability, SchemaVersion};
use crate::shared::BomError;
use std::collections::HashSet;
use uuid::Uuid;

type Result<T> = std::result::Result<T, BomError>;

impl BomTree {
    pub(crate) fn into_bom(mut self, version: SchemaVersion) -> Result<Bom> {
        if !version.supports(Capability::ComponentVersionOptional) {
            self.clear_version_placeholders();
        }

        let mut bom = Bom::default();
        if let Some(serial) = &self.serial_number {
            let uuid = Uuid::parse_str(serial).map_err(|e| {
                BomError::InvalidDocument(format!("malformed serial number '{}': {}", serial, e))
            })?;
            bom.set_serial_number(uuid);
        }
        bom.version = self.version;
        if let Some(node) = self.metadata {
            bom.metadata = metadata(node)?;
        }
        bom.components = collect(self.components, component)?;
        bom.services = collect(self.services, service)?;
        bom.external_references = collect(self.external_references, external_reference)?;
        bom.vulnerabilities = collect(self.vulnerabilities, vulnerability)?;

        let known = declared_refs(&bom);
        for node in self.dependencies {
            bom.dependencies.push(resolve_dependency(node, &known)?);
        }
        Ok(bom)
    }
}

impl BomTree {
    fn clear_version_placeholders(&mut self) {
        fn clear(nodes: &mut [ComponentNode]) {
            for node in nodes {
                if node.version.as_deref() == Some("") {
                    node.version = None;
                }
                clear(&mut node.components);
            }
        }

        if let Some(component) = self.metadata.as_mut().and_then(|m| m.component.as_mut()) {
            clear(std::slice::from_mut(&mut **component));
        }
        clear(&mut self.components);
    }
}

fn declared_refs(bom: &Bom) -> HashSet<String> {
    let components = bom.all_components().into_iter().map(|c| &c.bom_ref);
    let services = bom.all_services().into_iter().map(|s| &s.bom_ref);
    components
        .chain(services)
        .filter_map(BomRef::get)
        .map(str::to_string)
        .collect()
}

fn resolve_dependency(node: DependencyNode, known: &HashSet<String>) -> Result<Dependency> {
    let resolve = |value: String| {
        if known.contains(&value) {
            Ok(BomRef::new(value))
        } else {
            Err(BomError::UnknownComponentDependency { bom_ref: value })
        }
    };
    Ok(Dependency {
        bom_ref: resolve(node.bom_ref)?,
        depends_on: node
            .depends_on
            .into_iter()
            .map(resolve)
            .collect::<Result<_>>()?,
    })
}

fn collect<N, T>(nodes: Vec<N>, convert: fn(N) -> Result<T>) -> Result<Vec<T>> {
    nodes.into_iter().map(convert).collect()
}

fn bom_ref(value: Option<String>) -> BomRef {
    value.map(BomRef::new).unwrap_or_default()
}

fn metadata(node: MetadataNode) -> Result<Metadata> {
    Ok(Metadata {
        timestamp: node.timestamp,
        tools: collect(node.tools, tool)?,
        authors: node.authors.into_iter().map(contact).collect(),
        component: node.component.map(|c| component(*c)).transpose()?,
        manufacture: node.manufacture.map(entity),
        supplier: node.supplier.map(entity),
        licenses: node.licenses.into_iter().map(license).collect(),
        properties: node.properties.into_iter().map(property).collect(),
    })
}

fn tool(node: ToolNode) -> Result<Tool> {
    Ok(Tool {
        vendor: node.vendor,
        name: node.name,
        version: node.version,
        hashes: collect(node.hashes, hash)?,
        external_references: collect(node.external_references, external_reference)?,
    })
}

fn hash(node: HashNode) -> Result<HashType> {
    let alg = HashAlgorithm::from_wire(&node.alg)?;
    Ok(HashType::new(alg, node.content))
}

fn contact(node: ContactNode) -> OrganizationalContact {
    OrganizationalContact {
        name: node.name,
        email: node.email,
        phone: node.phone,
    }
}

fn entity(node: EntityNode) -> OrganizationalEntity {
    OrganizationalEntity {
        name: node.name,
        urls: node.url,
        contacts: node.contact.into_iter().map(contact).collect(),
    }
}

fn license(node: LicenseNode) -> LicenseChoice {
    match (node.expression, node.license) {
        (Some(expression), _) => LicenseChoice::Expression(expression),
        (None, body) => {
            let body = body.unwrap_or_default();
            LicenseChoice::License(License {
                id: body.id,
                name: body.name,
                url: body.url,
            })
        }
    }
}

fn property(node: PropertyNode) -> Property {
    Property::new(node.name, node.value)
}

fn external_reference(node: ExternalReferenceNode) -> Result<ExternalReference> {
    Ok(ExternalReference {
        reference_type: parse_wire("external reference type", &node.reference_type)?,
        url: node.url,
        comment: node.comment,
        hashes: collect(node.hashes, hash)?,
    })
}

fn release_notes(node: ReleaseNotesNode) -> ReleaseNotes {
    ReleaseNotes {
        release_type: node.release_type,
        title: node.title,
        featured_image: node.featured_image,
        social_image: node.social_image,
        description: node.description,
        timestamp: node.timestamp,
        aliases: node.aliases,
        tags: node.tags,
        notes: node
            .notes
            .into_iter()
            .map(|n| Note {
                locale: n.locale,
                text: n.text,
            })
            .collect(),
        properties: node.properties.into_iter().map(property).collect(),
    }
}

fn component(node: ComponentNode) -> Result<Component> {
    Ok(Component {
        component_type: parse_wire("component type", &node.component_type)?,
        mime_type: node.mime_type,
        bom_ref: bom_ref(node.bom_ref),
        supplier: node.supplier.map(entity),
        author: node.author,
        publisher: node.publisher,
        group: node.group,
        name: node.name,
        version: node.version,
        description: node.description,
        scope: node
            .scope
            .map(|s| parse_wire("component scope", &s))
            .transpose()?,
        hashes: collect(node.hashes, hash)?,
        licenses: node.licenses.into_iter().map(license).collect(),
        copyright: node.copyright,
        cpe: node.cpe,
        purl: node.purl,
        external_references: collect(node.external_references, external_reference)?,
        properties: node.properties.into_iter().map(property).collect(),
        components: collect(node.components, component)?,
        release_notes: node.release_notes.map(release_notes),
    })
}

fn service(node: ServiceNode) -> Result<Service> {
    Ok(Service {
        bom_ref: bom_ref(node.bom_ref),
        provider: node.provider.map(entity),
        group: node.group,
        name: node.name,
        version: node.version,
        description: node.description,
        endpoints: node.endpoints,
        authenticated: node.authenticated,
        x_trust_boundary: node.x_trust_boundary,
        data: node
            .data
            .into_iter()
            .map(|d| {
                Ok(DataClassification::new(
                    parse_wire("data flow", &d.flow)?,
                    d.classification,
                ))
            })
            .collect::<Result<_>>()?,
        licenses: node.licenses.into_iter().map(license).collect(),
        external_references: collect(node.external_references, external_reference)?,
        properties: node.properties.into_iter().map(property).collect(),
        services: collect(node.services, service)?,
        release_notes: node.release_notes.map(release_notes),
    })
}

fn source(node: SourceNode) -> VulnerabilitySource {
    VulnerabilitySource {
        name: node.name,
        url: node.url,
    }
}

fn rating(node: RatingNode) -> Result<VulnerabilityRating> {
    Ok(VulnerabilityRating {
        source: node.source.map(source),
        score: node.score,
        severity: node
            .severity
            .map(|s| parse_wire("severity", &s))
            .transpose()?,
        method: node
            .method
            .map(|m| parse_wire("score method", &m))
            .transpose()?,
        vector: node.vector,
        justification: node.justification,
    })
}

fn vulnerability(node: VulnerabilityNode) -> Result<Vulnerability> {
    Ok(Vulnerability {
        bom_ref: bom_ref(node.bom_ref),
        id: node.id,
        source: node.source.map(source),
        ratings: collect(node.ratings, rating)?,
        cwes: node.cwes,
        description: node.description,
        detail: node.detail,
        recommendation: node.recommendation,
        advisories: node
            .advisories
            .into_iter()
            .map(|a| Advisory {
                title: a.title,
                url: a.url,
            })
            .collect(),
        created: node.created,
        published: node.published,
        updated: node.updated,
        affects: node
            .affects
            .into_iter()
            .map(|a| BomRef::new(a.target))
            .collect(),
    })
}
