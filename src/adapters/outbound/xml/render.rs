//! BomTree to XML elements, in the element order the CycloneDX XSDs
//! prescribe. The tree is already specialised, so nothing here looks at the
//! schema version except the namespace.

use super::XmlElement;
use crate::adapters::outbound::tree::*;
use crate::schema::SchemaVersion;
use chrono::{DateTime, SecondsFormat, Utc};

pub(crate) fn document_from_tree(tree: &BomTree, version: SchemaVersion) -> XmlElement {
    let mut bom = XmlElement::new("bom").with_attribute("xmlns", version.xml_namespace());
    if let Some(serial) = &tree.serial_number {
        bom = bom.with_attribute("serialNumber", serial.as_str());
    }
    bom = bom.with_attribute("version", tree.version.to_string());

    if let Some(node) = &tree.metadata {
        bom.push(metadata(node));
    }
    bom.push_list(
        "components",
        tree.components.iter().map(component).collect(),
    );
    bom.push_list("services", tree.services.iter().map(service).collect());
    bom.push_list(
        "externalReferences",
        external_references(&tree.external_references),
    );
    bom.push_list(
        "dependencies",
        tree.dependencies.iter().map(dependency).collect(),
    );
    bom.push_list(
        "vulnerabilities",
        tree.vulnerabilities.iter().map(vulnerability).collect(),
    );
    bom
}

fn timestamp(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

fn metadata(node: &MetadataNode) -> XmlElement {
    let mut el = XmlElement::new("metadata");
    el.push_text("timestamp", node.timestamp.as_ref().map(timestamp));
    el.push_list("tools", node.tools.iter().map(tool).collect());
    el.push_list(
        "authors",
        node.authors.iter().map(|c| contact("author", c)).collect(),
    );
    if let Some(c) = &node.component {
        el.push(component(c));
    }
    if let Some(m) = &node.manufacture {
        el.push(entity("manufacture", m));
    }
    if let Some(s) = &node.supplier {
        el.push(entity("supplier", s));
    }
    el.push_list("licenses", licenses(&node.licenses));
    el.push_list("properties", properties(&node.properties));
    el
}

fn tool(node: &ToolNode) -> XmlElement {
    let mut el = XmlElement::new("tool");
    el.push_text("vendor", node.vendor.as_deref());
    el.push_text("name", node.name.as_deref());
    el.push_text("version", node.version.as_deref());
    el.push_list("hashes", hashes(&node.hashes));
    el.push_list(
        "externalReferences",
        external_references(&node.external_references),
    );
    el
}

fn hashes(nodes: &[HashNode]) -> Vec<XmlElement> {
    nodes
        .iter()
        .map(|h| {
            XmlElement::leaf("hash", h.content.as_str()).with_attribute("alg", h.alg.as_str())
        })
        .collect()
}

fn contact(name: &str, node: &ContactNode) -> XmlElement {
    let mut el = XmlElement::new(name);
    el.push_text("name", node.name.as_deref());
    el.push_text("email", node.email.as_deref());
    el.push_text("phone", node.phone.as_deref());
    el
}

fn entity(name: &str, node: &EntityNode) -> XmlElement {
    let mut el = XmlElement::new(name);
    el.push_text("name", node.name.as_deref());
    for url in &node.url {
        el.push(XmlElement::leaf("url", url.as_str()));
    }
    for c in &node.contact {
        el.push(contact("contact", c));
    }
    el
}

fn licenses(nodes: &[LicenseNode]) -> Vec<XmlElement> {
    nodes
        .iter()
        .map(|node| match (&node.expression, &node.license) {
            (Some(expression), _) => XmlElement::leaf("expression", expression.as_str()),
            (None, body) => {
                let mut el = XmlElement::new("license");
                if let Some(body) = body {
                    el.push_text("id", body.id.as_deref());
                    el.push_text("name", body.name.as_deref());
                    el.push_text("url", body.url.as_deref());
                }
                el
            }
        })
        .collect()
}

fn properties(nodes: &[PropertyNode]) -> Vec<XmlElement> {
    nodes
        .iter()
        .map(|p| {
            XmlElement::leaf("property", p.value.as_str()).with_attribute("name", p.name.as_str())
        })
        .collect()
}

fn external_references(nodes: &[ExternalReferenceNode]) -> Vec<XmlElement> {
    nodes
        .iter()
        .map(|r| {
            let mut el =
                XmlElement::new("reference").with_attribute("type", r.reference_type.as_str());
            el.push(XmlElement::leaf("url", r.url.as_str()));
            el.push_text("comment", r.comment.as_deref());
            el.push_list("hashes", hashes(&r.hashes));
            el
        })
        .collect()
}

fn release_notes(node: &ReleaseNotesNode) -> XmlElement {
    let mut el = XmlElement::new("releaseNotes");
    el.push(XmlElement::leaf("type", node.release_type.as_str()));
    el.push_text("title", node.title.as_deref());
    el.push_text("featuredImage", node.featured_image.as_deref());
    el.push_text("socialImage", node.social_image.as_deref());
    el.push_text("description", node.description.as_deref());
    el.push_text("timestamp", node.timestamp.as_ref().map(timestamp));
    el.push_list(
        "aliases",
        node.aliases
            .iter()
            .map(|a| XmlElement::leaf("alias", a.as_str()))
            .collect(),
    );
    el.push_list(
        "tags",
        node.tags
            .iter()
            .map(|t| XmlElement::leaf("tag", t.as_str()))
            .collect(),
    );
    el.push_list(
        "notes",
        node.notes
            .iter()
            .map(|n| {
                let mut note = XmlElement::new("note");
                note.push_text("locale", n.locale.as_deref());
                note.push(XmlElement::leaf("text", n.text.as_str()));
                note
            })
            .collect(),
    );
    el.push_list("properties", properties(&node.properties));
    el
}

fn component(node: &ComponentNode) -> XmlElement {
    let mut el = XmlElement::new("component").with_attribute("type", node.component_type.as_str());
    if let Some(mime_type) = &node.mime_type {
        el = el.with_attribute("mime-type", mime_type.as_str());
    }
    if let Some(bom_ref) = &node.bom_ref {
        el = el.with_attribute("bom-ref", bom_ref.as_str());
    }
    if let Some(supplier) = &node.supplier {
        el.push(entity("supplier", supplier));
    }
    el.push_text("author", node.author.as_deref());
    el.push_text("publisher", node.publisher.as_deref());
    el.push_text("group", node.group.as_deref());
    el.push(XmlElement::leaf("name", node.name.as_str()));
    el.push_text("version", node.version.as_deref());
    el.push_text("description", node.description.as_deref());
    el.push_text("scope", node.scope.as_deref());
    el.push_list("hashes", hashes(&node.hashes));
    el.push_list("licenses", licenses(&node.licenses));
    el.push_text("copyright", node.copyright.as_deref());
    el.push_text("cpe", node.cpe.as_deref());
    el.push_text("purl", node.purl.as_deref());
    el.push_text("modified", node.modified.map(|m| m.to_string()));
    el.push_list(
        "externalReferences",
        external_references(&node.external_references),
    );
    el.push_list("properties", properties(&node.properties));
    el.push_list(
        "components",
        node.components.iter().map(component).collect(),
    );
    if let Some(notes) = &node.release_notes {
        el.push(release_notes(notes));
    }
    el
}

fn service(node: &ServiceNode) -> XmlElement {
    let mut el = XmlElement::new("service");
    if let Some(bom_ref) = &node.bom_ref {
        el = el.with_attribute("bom-ref", bom_ref.as_str());
    }
    if let Some(provider) = &node.provider {
        el.push(entity("provider", provider));
    }
    el.push_text("group", node.group.as_deref());
    el.push(XmlElement::leaf("name", node.name.as_str()));
    el.push_text("version", node.version.as_deref());
    el.push_text("description", node.description.as_deref());
    el.push_list(
        "endpoints",
        node.endpoints
            .iter()
            .map(|e| XmlElement::leaf("endpoint", e.as_str()))
            .collect(),
    );
    el.push_text("authenticated", node.authenticated.map(|b| b.to_string()));
    el.push_text(
        "x-trust-boundary",
        node.x_trust_boundary.map(|b| b.to_string()),
    );
    el.push_list(
        "data",
        node.data
            .iter()
            .map(|d| {
                XmlElement::leaf("classification", d.classification.as_str())
                    .with_attribute("flow", d.flow.as_str())
            })
            .collect(),
    );
    el.push_list("licenses", licenses(&node.licenses));
    el.push_list(
        "externalReferences",
        external_references(&node.external_references),
    );
    el.push_list("properties", properties(&node.properties));
    el.push_list("services", node.services.iter().map(service).collect());
    if let Some(notes) = &node.release_notes {
        el.push(release_notes(notes));
    }
    el
}

fn dependency(node: &DependencyNode) -> XmlElement {
    let mut el = XmlElement::new("dependency").with_attribute("ref", &node.bom_ref);
    for target in &node.depends_on {
        el.push(XmlElement::new("dependency").with_attribute("ref", target));
    }
    el
}

fn source(name: &str, node: &SourceNode) -> XmlElement {
    let mut el = XmlElement::new(name);
    el.push_text("name", node.name.as_deref());
    el.push_text("url", node.url.as_deref());
    el
}

fn vulnerability(node: &VulnerabilityNode) -> XmlElement {
    let mut el = XmlElement::new("vulnerability");
    if let Some(bom_ref) = &node.bom_ref {
        el = el.with_attribute("bom-ref", bom_ref.as_str());
    }
    el.push_text("id", node.id.as_deref());
    if let Some(s) = &node.source {
        el.push(source("source", s));
    }
    el.push_list(
        "ratings",
        node.ratings
            .iter()
            .map(|r| {
                let mut rating = XmlElement::new("rating");
                if let Some(s) = &r.source {
                    rating.push(source("source", s));
                }
                rating.push_text("score", r.score.map(|s| s.to_string()));
                rating.push_text("severity", r.severity.as_deref());
                rating.push_text("method", r.method.as_deref());
                rating.push_text("vector", r.vector.as_deref());
                rating.push_text("justification", r.justification.as_deref());
                rating
            })
            .collect(),
    );
    el.push_list(
        "cwes",
        node.cwes
            .iter()
            .map(|c| XmlElement::leaf("cwe", c.to_string()))
            .collect(),
    );
    el.push_text("description", node.description.as_deref());
    el.push_text("detail", node.detail.as_deref());
    el.push_text("recommendation", node.recommendation.as_deref());
    el.push_list(
        "advisories",
        node.advisories
            .iter()
            .map(|a| {
                let mut advisory = XmlElement::new("advisory");
                advisory.push_text("title", a.title.as_deref());
                advisory.push(XmlElement::leaf("url", a.url.as_str()));
                advisory
            })
            .collect(),
    );
    el.push_text("created", node.created.as_ref().map(timestamp));
    el.push_text("published", node.published.as_ref().map(timestamp));
    el.push_text("updated", node.updated.as_ref().map(timestamp));
    el.push_list(
        "affects",
        node.affects
            .iter()
            .map(|a| {
                let mut target = XmlElement::new("target");
                target.push(XmlElement::leaf("ref", a.target.as_str()));
                target
            })
            .collect(),
    );
    el
}
