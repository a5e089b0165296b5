//! Model to tree. Every field is carried over; unset bom-refs are
//! materialized here so that the document and the caller's graph agree.

use super::wire::*;
use crate::model::{
    Bom, Component, Dependency, ExternalReference, HashType, LicenseChoice, Metadata,
    OrganizationalContact, OrganizationalEntity, Property, ReleaseNotes, Service, Tool,
    Vulnerability, VulnerabilityRating, VulnerabilitySource,
};

impl BomTree {
    pub(crate) fn from_bom(bom: &Bom) -> Self {
        Self {
            serial_number: Some(bom.urn_uuid()),
            version: bom.version,
            metadata: (!bom.metadata.is_empty()).then(|| metadata(&bom.metadata)),
            components: bom.components.iter().map(component).collect(),
            services: bom.services.iter().map(service).collect(),
            external_references: external_references(&bom.external_references),
            dependencies: bom.dependencies.iter().map(dependency).collect(),
            vulnerabilities: bom.vulnerabilities.iter().map(vulnerability).collect(),
        }
    }
}

fn metadata(metadata: &Metadata) -> MetadataNode {
    MetadataNode {
        timestamp: metadata.timestamp,
        tools: metadata.tools.iter().map(tool).collect(),
        authors: metadata.authors.iter().map(contact).collect(),
        component: metadata.component.as_ref().map(|c| Box::new(component(c))),
        manufacture: metadata.manufacture.as_ref().map(entity),
        supplier: metadata.supplier.as_ref().map(entity),
        licenses: licenses(&metadata.licenses),
        properties: properties(&metadata.properties),
    }
}

fn tool(tool: &Tool) -> ToolNode {
    ToolNode {
        vendor: tool.vendor.clone(),
        name: tool.name.clone(),
        version: tool.version.clone(),
        hashes: hashes(&tool.hashes),
        external_references: external_references(&tool.external_references),
    }
}

fn hashes(hashes: &[HashType]) -> Vec<HashNode> {
    hashes
        .iter()
        .map(|h| HashNode {
            alg: h.alg.as_str().to_string(),
            content: h.content.clone(),
        })
        .collect()
}

fn contact(contact: &OrganizationalContact) -> ContactNode {
    ContactNode {
        name: contact.name.clone(),
        email: contact.email.clone(),
        phone: contact.phone.clone(),
    }
}

fn entity(entity: &OrganizationalEntity) -> EntityNode {
    EntityNode {
        name: entity.name.clone(),
        url: entity.urls.clone(),
        contact: entity.contacts.iter().map(contact).collect(),
    }
}

fn licenses(licenses: &[LicenseChoice]) -> Vec<LicenseNode> {
    licenses
        .iter()
        .map(|choice| match choice {
            LicenseChoice::License(license) => LicenseNode {
                license: Some(LicenseBody {
                    id: license.id.clone(),
                    name: license.name.clone(),
                    url: license.url.clone(),
                }),
                expression: None,
            },
            LicenseChoice::Expression(expression) => LicenseNode {
                license: None,
                expression: Some(expression.clone()),
            },
        })
        .collect()
}

fn properties(properties: &[Property]) -> Vec<PropertyNode> {
    properties
        .iter()
        .map(|p| PropertyNode {
            name: p.name.clone(),
            value: p.value.clone(),
        })
        .collect()
}

fn external_references(references: &[ExternalReference]) -> Vec<ExternalReferenceNode> {
    references
        .iter()
        .map(|r| ExternalReferenceNode {
            reference_type: r.reference_type.as_str().to_string(),
            url: r.url.clone(),
            comment: r.comment.clone(),
            hashes: hashes(&r.hashes),
        })
        .collect()
}

fn release_notes(notes: &ReleaseNotes) -> ReleaseNotesNode {
    ReleaseNotesNode {
        release_type: notes.release_type.clone(),
        title: notes.title.clone(),
        featured_image: notes.featured_image.clone(),
        social_image: notes.social_image.clone(),
        description: notes.description.clone(),
        timestamp: notes.timestamp,
        aliases: notes.aliases.clone(),
        tags: notes.tags.clone(),
        notes: notes
            .notes
            .iter()
            .map(|n| NoteNode {
                locale: n.locale.clone(),
                text: n.text.clone(),
            })
            .collect(),
        properties: properties(&notes.properties),
    }
}

fn component(component: &Component) -> ComponentNode {
    ComponentNode {
        component_type: component.component_type.as_str().to_string(),
        mime_type: component.mime_type.clone(),
        bom_ref: Some(component.bom_ref.value().to_string()),
        supplier: component.supplier.as_ref().map(entity),
        author: component.author.clone(),
        publisher: component.publisher.clone(),
        group: component.group.clone(),
        name: component.name.clone(),
        version: component.version.clone(),
        description: component.description.clone(),
        scope: component.scope.map(|s| s.as_str().to_string()),
        hashes: hashes(&component.hashes),
        licenses: licenses(&component.licenses),
        copyright: component.copyright.clone(),
        cpe: component.cpe.clone(),
        purl: component.purl.clone(),
        modified: None,
        external_references: external_references(&component.external_references),
        properties: properties(&component.properties),
        components: component.components.iter().map(self::component).collect(),
        release_notes: component.release_notes.as_ref().map(release_notes),
    }
}

fn service(service: &Service) -> ServiceNode {
    ServiceNode {
        bom_ref: Some(service.bom_ref.value().to_string()),
        provider: service.provider.as_ref().map(entity),
        group: service.group.clone(),
        name: service.name.clone(),
        version: service.version.clone(),
        description: service.description.clone(),
        endpoints: service.endpoints.clone(),
        authenticated: service.authenticated,
        x_trust_boundary: service.x_trust_boundary,
        data: service
            .data
            .iter()
            .map(|d| DataNode {
                flow: d.flow.as_str().to_string(),
                classification: d.classification.clone(),
            })
            .collect(),
        licenses: licenses(&service.licenses),
        external_references: external_references(&service.external_references),
        properties: properties(&service.properties),
        services: service.services.iter().map(self::service).collect(),
        release_notes: service.release_notes.as_ref().map(release_notes),
    }
}

fn dependency(dependency: &Dependency) -> DependencyNode {
    DependencyNode {
        bom_ref: dependency.bom_ref.value().to_string(),
        depends_on: dependency
            .depends_on
            .iter()
            .map(|r| r.value().to_string())
            .collect(),
    }
}

fn source(source: &VulnerabilitySource) -> SourceNode {
    SourceNode {
        name: source.name.clone(),
        url: source.url.clone(),
    }
}

fn rating(rating: &VulnerabilityRating) -> RatingNode {
    RatingNode {
        source: rating.source.as_ref().map(source),
        score: rating.score,
        severity: rating.severity.map(|s| s.as_str().to_string()),
        method: rating.method.map(|m| m.as_str().to_string()),
        vector: rating.vector.clone(),
        justification: rating.justification.clone(),
    }
}

fn vulnerability(vulnerability: &Vulnerability) -> VulnerabilityNode {
    VulnerabilityNode {
        bom_ref: Some(vulnerability.bom_ref.value().to_string()),
        id: vulnerability.id.clone(),
        source: vulnerability.source.as_ref().map(source),
        ratings: vulnerability.ratings.iter().map(rating).collect(),
        cwes: vulnerability.cwes.clone(),
        description: vulnerability.description.clone(),
        detail: vulnerability.detail.clone(),
        recommendation: vulnerability.recommendation.clone(),
        advisories: vulnerability
            .advisories
            .iter()
            .map(|a| AdvisoryNode {
                title: a.title.clone(),
                url: a.url.clone(),
            })
            .collect(),
        created: vulnerability.created,
        published: vulnerability.published,
        updated: vulnerability.updated,
        affects: vulnerability
            .affects
            .iter()
            .map(|r| AffectNode {
                target: r.value().to_string(),
            })
            .collect(),
    }
}
