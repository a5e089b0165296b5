//! Minimal XML element tree on top of quick-xml, plus the CycloneDX
//! element mapping for [`BomTree`](super::tree::BomTree).

mod read;
mod render;

pub(crate) use read::tree_from_document;
pub(crate) use render::document_from_tree;

use crate::shared::BomError;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct XmlElement {
    /// Local name, without any namespace prefix
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlElement>,
    pub text: Option<String>,
}

impl XmlElement {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            attributes: Vec::new(),
            children: Vec::new(),
            text: None,
        }
    }

    pub fn leaf(name: &str, text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::new(name)
        }
    }

    pub fn with_attribute(mut self, key: &str, value: impl Into<String>) -> Self {
        self.attributes.push((key.to_string(), value.into()));
        self
    }

    pub fn push(&mut self, child: XmlElement) {
        self.children.push(child);
    }

    pub fn push_text(&mut self, name: &str, text: Option<impl Into<String>>) {
        if let Some(text) = text {
            self.children.push(XmlElement::leaf(name, text));
        }
    }

    /// Adds `<name>` wrapping `children`, unless there are none
    pub fn push_list(&mut self, name: &str, children: Vec<XmlElement>) {
        if !children.is_empty() {
            let mut list = XmlElement::new(name);
            list.children = children;
            self.children.push(list);
        }
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.name == name)
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Children of the `<list>` wrapper that are named `item`
    pub fn list_items<'a>(&'a self, list: &str, item: &'a str) -> Vec<&'a XmlElement> {
        self.child(list)
            .map(|l| l.children_named(item).collect())
            .unwrap_or_default()
    }

    /// Text content; a present but empty element yields `""`
    pub fn text(&self) -> String {
        self.text.clone().unwrap_or_default()
    }

    pub fn child_text(&self, name: &str) -> Option<String> {
        self.child(name).map(XmlElement::text)
    }

    /// Parses a document and returns its root element
    pub fn parse(document: &str) -> Result<XmlElement, BomError> {
        let mut reader = Reader::from_str(document);
        let mut stack: Vec<XmlElement> = Vec::new();
        let mut root: Option<XmlElement> = None;

        loop {
            match reader.read_event()? {
                Event::Start(e) => stack.push(start_element(&e)?),
                Event::Empty(e) => {
                    let element = start_element(&e)?;
                    close(element, &mut stack, &mut root)?;
                }
                Event::End(_) => {
                    let element = stack
                        .pop()
                        .ok_or_else(|| BomError::XmlParse("unexpected closing tag".to_string()))?;
                    close(element, &mut stack, &mut root)?;
                }
                Event::Text(t) => {
                    let text = t.unescape()?;
                    append_text(&mut stack, &text)?;
                }
                Event::CData(c) => {
                    let raw = c.into_inner();
                    append_text(&mut stack, &String::from_utf8_lossy(&raw))?;
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(open) = stack.last() {
            let message = format!("unclosed element <{}>", open.name);
            return Err(BomError::XmlParse(message));
        }
        root.ok_or_else(|| BomError::XmlParse("document has no root element".into()))
    }

    /// Serializes this element as a complete, indented document
    pub fn to_document(&self) -> Result<String, BomError> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 4);
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(write_error)?;
        self.write(&mut writer)?;
        String::from_utf8(writer.into_inner()).map_err(write_error)
    }

    fn write(&self, writer: &mut Writer<Vec<u8>>) -> Result<(), BomError> {
        let mut start = BytesStart::new(self.name.as_str());
        for (key, value) in &self.attributes {
            start.push_attribute((key.as_str(), value.as_str()));
        }

        let text = self.text.as_deref().filter(|t| !t.is_empty());
        if self.children.is_empty() && text.is_none() {
            return writer.write_event(Event::Empty(start)).map_err(write_error);
        }

        writer
            .write_event(Event::Start(start))
            .map_err(write_error)?;
        if let Some(text) = text {
            writer
                .write_event(Event::Text(BytesText::new(text)))
                .map_err(write_error)?;
        }
        for child in &self.children {
            child.write(writer)?;
        }
        writer
            .write_event(Event::End(BytesEnd::new(self.name.as_str())))
            .map_err(write_error)
    }
}

fn write_error(err: impl std::fmt::Display) -> BomError {
    BomError::OutputGeneration {
        format: "XML".to_string(),
        details: err.to_string(),
    }
}

fn start_element(e: &BytesStart<'_>) -> Result<XmlElement, BomError> {
    let name = String::from_utf8_lossy(e.local_name().as_ref()).to_string();
    let mut element = XmlElement::new(&name);
    for attr in e.attributes() {
        let attr = attr.map_err(|err| BomError::XmlParse(err.to_string()))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
        let value = attr.unescape_value()?.to_string();
        element.attributes.push((key, value));
    }
    Ok(element)
}

fn close(
    element: XmlElement,
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
) -> Result<(), BomError> {
    let mut element = element;
    // Indentation between child elements is not content
    if !element.children.is_empty() {
        element.text = None;
    }
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_none() => *root = Some(element),
        None => {
            return Err(BomError::XmlParse(
                "document has more than one root element".to_string(),
            ))
        }
    }
    Ok(())
}

fn append_text(stack: &mut [XmlElement], text: &str) -> Result<(), BomError> {
    match stack.last_mut() {
        Some(current) => {
            current.text.get_or_insert_with(String::new).push_str(text);
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None => Err(BomError::XmlParse("text outside of the root element".into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested_document() {
        let doc = r#"<?xml version="1.0"?>
<bom xmlns="http://cyclonedx.org/schema/bom/1.4" version="1">
    <components>
        <component type="library"><name>a &amp; b</name><version/></component>
    </components>
</bom>"#;
        let root = XmlElement::parse(doc).unwrap();
        assert_eq!(root.name, "bom");
        assert_eq!(
            root.attribute("xmlns"),
            Some("http://cyclonedx.org/schema/bom/1.4")
        );
        assert!(root.text.is_none());

        let components = root.list_items("components", "component");
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].attribute("type"), Some("library"));
        assert_eq!(components[0].child_text("name").as_deref(), Some("a & b"));
        assert_eq!(components[0].child_text("version").as_deref(), Some(""));
    }

    #[test]
    fn test_leaf_whitespace_is_preserved() {
        let root = XmlElement::parse("<a><b>  padded  </b></a>").unwrap();
        assert_eq!(root.child_text("b").as_deref(), Some("  padded  "));
    }

    #[test]
    fn test_mismatched_tags_rejected() {
        assert!(matches!(
            XmlElement::parse("<a><b></a>"),
            Err(BomError::XmlParse(_))
        ));
    }

    #[test]
    fn test_unclosed_root_rejected() {
        assert!(matches!(
            XmlElement::parse("<a><b/>"),
            Err(BomError::XmlParse(_))
        ));
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(matches!(XmlElement::parse(""), Err(BomError::XmlParse(_))));
    }

    #[test]
    fn test_write_then_parse() {
        let mut root = XmlElement::new("bom").with_attribute("version", "1");
        root.push_text("name", Some("<escaped>"));
        root.push(XmlElement::new("empty"));
        root.push_list("list", Vec::new());

        let document = root.to_document().unwrap();
        assert!(document.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(document.contains("&lt;escaped&gt;"));

        let parsed = XmlElement::parse(&document).unwrap();
        assert_eq!(parsed, root);
    }
}
