//! XML elements to BomTree. Unknown elements are ignored; missing
//! mandatory values are reported as an invalid document.

use super::XmlElement;
use crate::adapters::outbound::tree::*;
use crate::schema::SchemaVersion;
use crate::shared::BomError;
use chrono::{DateTime, Utc};

type Result<T> = std::result::Result<T, BomError>;

/// Returns the tree and the schema version declared by the root namespace
pub(crate) fn tree_from_document(root: &XmlElement) -> Result<(BomTree, SchemaVersion)> {
    if root.name != "bom" {
        return Err(BomError::InvalidDocument(format!(
            "expected <bom> root element, found <{}>",
            root.name
        )));
    }
    let namespace = root
        .attribute("xmlns")
        .ok_or_else(|| BomError::UnsupportedSchemaVersion("<no namespace>".to_string()))?;
    let version = SchemaVersion::from_xml_namespace(namespace)?;

    let tree = BomTree {
        serial_number: root.attribute("serialNumber").map(str::to_string),
        version: match root.attribute("version") {
            Some(v) => v.trim().parse().map_err(|_| {
                BomError::InvalidDocument(format!("invalid document version '{}'", v))
            })?,
            None => 1,
        },
        metadata: root.child("metadata").map(metadata).transpose()?,
        components: each(root.list_items("components", "component"), component)?,
        services: each(root.list_items("services", "service"), service)?,
        external_references: external_references(root)?,
        dependencies: each(root.list_items("dependencies", "dependency"), dependency)?,
        vulnerabilities: each(
            root.list_items("vulnerabilities", "vulnerability"),
            vulnerability,
        )?,
    };
    Ok((tree, version))
}

fn each<T>(elements: Vec<&XmlElement>, convert: fn(&XmlElement) -> Result<T>) -> Result<Vec<T>> {
    elements.into_iter().map(convert).collect()
}

fn required_attribute(el: &XmlElement, key: &str) -> Result<String> {
    el.attribute(key).map(str::to_string).ok_or_else(|| {
        BomError::InvalidDocument(format!("<{}> is missing the '{}' attribute", el.name, key))
    })
}

fn required_text(el: &XmlElement, child: &str) -> Result<String> {
    el.child_text(child).ok_or_else(|| {
        BomError::InvalidDocument(format!("<{}> is missing <{}>", el.name, child))
    })
}

fn timestamp(el: &XmlElement, child: &str) -> Result<Option<DateTime<Utc>>> {
    el.child_text(child)
        .map(|text| {
            DateTime::parse_from_rfc3339(text.trim())
                .map(|t| t.with_timezone(&Utc))
                .map_err(|e| {
                    BomError::InvalidDocument(format!("invalid <{}> '{}': {}", child, text, e))
                })
        })
        .transpose()
}

fn boolean(el: &XmlElement, child: &str) -> Result<Option<bool>> {
    el.child_text(child)
        .map(|text| match text.trim() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            other => Err(BomError::InvalidDocument(format!(
                "invalid boolean in <{}>: '{}'",
                child, other
            ))),
        })
        .transpose()
}

fn metadata(el: &XmlElement) -> Result<MetadataNode> {
    Ok(MetadataNode {
        timestamp: timestamp(el, "timestamp")?,
        tools: each(el.list_items("tools", "tool"), tool)?,
        authors: el
            .list_items("authors", "author")
            .into_iter()
            .map(contact)
            .collect(),
        component: el
            .child("component")
            .map(component)
            .transpose()?
            .map(Box::new),
        manufacture: el.child("manufacture").map(entity),
        supplier: el.child("supplier").map(entity),
        licenses: licenses(el),
        properties: properties(el)?,
    })
}

fn tool(el: &XmlElement) -> Result<ToolNode> {
    Ok(ToolNode {
        vendor: el.child_text("vendor"),
        name: el.child_text("name"),
        version: el.child_text("version"),
        hashes: hashes(el)?,
        external_references: external_references(el)?,
    })
}

fn hashes(el: &XmlElement) -> Result<Vec<HashNode>> {
    each(el.list_items("hashes", "hash"), |h| {
        Ok(HashNode {
            alg: required_attribute(h, "alg")?,
            content: h.text().trim().to_string(),
        })
    })
}

fn contact(el: &XmlElement) -> ContactNode {
    ContactNode {
        name: el.child_text("name"),
        email: el.child_text("email"),
        phone: el.child_text("phone"),
    }
}

fn entity(el: &XmlElement) -> EntityNode {
    EntityNode {
        name: el.child_text("name"),
        url: el.children_named("url").map(XmlElement::text).collect(),
        contact: el.children_named("contact").map(contact).collect(),
    }
}

fn licenses(el: &XmlElement) -> Vec<LicenseNode> {
    let Some(list) = el.child("licenses") else {
        return Vec::new();
    };
    list.children
        .iter()
        .filter_map(|choice| match choice.name.as_str() {
            "expression" => Some(LicenseNode {
                license: None,
                expression: Some(choice.text()),
            }),
            "license" => Some(LicenseNode {
                license: Some(LicenseBody {
                    id: choice.child_text("id"),
                    name: choice.child_text("name"),
                    url: choice.child_text("url"),
                }),
                expression: None,
            }),
            _ => None,
        })
        .collect()
}

fn properties(el: &XmlElement) -> Result<Vec<PropertyNode>> {
    each(el.list_items("properties", "property"), |p| {
        Ok(PropertyNode {
            name: required_attribute(p, "name")?,
            value: p.text(),
        })
    })
}

fn external_references(el: &XmlElement) -> Result<Vec<ExternalReferenceNode>> {
    each(el.list_items("externalReferences", "reference"), |r| {
        Ok(ExternalReferenceNode {
            reference_type: required_attribute(r, "type")?,
            url: required_text(r, "url")?,
            comment: r.child_text("comment"),
            hashes: hashes(r)?,
        })
    })
}

fn release_notes(el: &XmlElement) -> Result<ReleaseNotesNode> {
    Ok(ReleaseNotesNode {
        release_type: required_text(el, "type")?,
        title: el.child_text("title"),
        featured_image: el.child_text("featuredImage"),
        social_image: el.child_text("socialImage"),
        description: el.child_text("description"),
        timestamp: timestamp(el, "timestamp")?,
        aliases: el
            .list_items("aliases", "alias")
            .into_iter()
            .map(XmlElement::text)
            .collect(),
        tags: el
            .list_items("tags", "tag")
            .into_iter()
            .map(XmlElement::text)
            .collect(),
        notes: each(el.list_items("notes", "note"), |n| {
            Ok(NoteNode {
                locale: n.child_text("locale"),
                text: required_text(n, "text")?,
            })
        })?,
        properties: properties(el)?,
    })
}

fn component(el: &XmlElement) -> Result<ComponentNode> {
    Ok(ComponentNode {
        component_type: required_attribute(el, "type")?,
        mime_type: el.attribute("mime-type").map(str::to_string),
        bom_ref: el.attribute("bom-ref").map(str::to_string),
        supplier: el.child("supplier").map(entity),
        author: el.child_text("author"),
        publisher: el.child_text("publisher"),
        group: el.child_text("group"),
        name: required_text(el, "name")?,
        version: el.child_text("version"),
        description: el.child_text("description"),
        scope: el.child_text("scope"),
        hashes: hashes(el)?,
        licenses: licenses(el),
        copyright: el.child_text("copyright"),
        cpe: el.child_text("cpe"),
        purl: el.child_text("purl"),
        modified: boolean(el, "modified")?,
        external_references: external_references(el)?,
        properties: properties(el)?,
        components: each(el.list_items("components", "component"), component)?,
        release_notes: el.child("releaseNotes").map(release_notes).transpose()?,
    })
}

fn service(el: &XmlElement) -> Result<ServiceNode> {
    Ok(ServiceNode {
        bom_ref: el.attribute("bom-ref").map(str::to_string),
        provider: el.child("provider").map(entity),
        group: el.child_text("group"),
        name: required_text(el, "name")?,
        version: el.child_text("version"),
        description: el.child_text("description"),
        endpoints: el
            .list_items("endpoints", "endpoint")
            .into_iter()
            .map(XmlElement::text)
            .collect(),
        authenticated: boolean(el, "authenticated")?,
        x_trust_boundary: boolean(el, "x-trust-boundary")?,
        data: each(el.list_items("data", "classification"), |d| {
            Ok(DataNode {
                flow: required_attribute(d, "flow")?,
                classification: d.text(),
            })
        })?,
        licenses: licenses(el),
        external_references: external_references(el)?,
        properties: properties(el)?,
        services: each(el.list_items("services", "service"), service)?,
        release_notes: el.child("releaseNotes").map(release_notes).transpose()?,
    })
}

fn dependency(el: &XmlElement) -> Result<DependencyNode> {
    Ok(DependencyNode {
        bom_ref: required_attribute(el, "ref")?,
        depends_on: el
            .children_named("dependency")
            .map(|d| required_attribute(d, "ref"))
            .collect::<Result<_>>()?,
    })
}

fn source(el: &XmlElement) -> SourceNode {
    SourceNode {
        name: el.child_text("name"),
        url: el.child_text("url"),
    }
}

fn rating(el: &XmlElement) -> Result<RatingNode> {
    Ok(RatingNode {
        source: el.child("source").map(source),
        score: el
            .child_text("score")
            .map(|s| {
                s.trim()
                    .parse()
                    .map_err(|_| BomError::InvalidDocument(format!("invalid score '{}'", s)))
            })
            .transpose()?,
        severity: el.child_text("severity"),
        method: el.child_text("method"),
        vector: el.child_text("vector"),
        justification: el.child_text("justification"),
    })
}

fn vulnerability(el: &XmlElement) -> Result<VulnerabilityNode> {
    Ok(VulnerabilityNode {
        bom_ref: el.attribute("bom-ref").map(str::to_string),
        id: el.child_text("id"),
        source: el.child("source").map(source),
        ratings: each(el.list_items("ratings", "rating"), rating)?,
        cwes: each(el.list_items("cwes", "cwe"), |c| {
            let text = c.text();
            text.trim()
                .parse()
                .map_err(|_| BomError::InvalidDocument(format!("invalid CWE '{}'", text)))
        })?,
        description: el.child_text("description"),
        detail: el.child_text("detail"),
        recommendation: el.child_text("recommendation"),
        advisories: each(el.list_items("advisories", "advisory"), |a| {
            Ok(AdvisoryNode {
                title: a.child_text("title"),
                url: required_text(a, "url")?,
            })
        })?,
        created: timestamp(el, "created")?,
        published: timestamp(el, "published")?,
        updated: timestamp(el, "updated")?,
        affects: each(el.list_items("affects", "target"), |t| {
            Ok(AffectNode {
                target: required_text(t, "ref")?,
            })
        })?,
    })
}
