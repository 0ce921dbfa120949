//! Owned element tree for suite manifests.
//!
//! XML shape:
//! <suite version="25">
//!   <xform>
//!     <resource id="c9d5180df5" version="25">
//!       <location authority="local">./modules-0/forms-0.xml</location>
//!       <location authority="remote">./modules-0/forms-0.xml</location>
//!     </resource>
//!   </xform>
//! </suite>
//!
//! Only element nodes are kept. Comments, processing instructions and
//! whitespace between elements are dropped during conversion.

use crate::manifest::error::ManifestError;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestNode {
    pub tag: String,
    pub attributes: BTreeMap<String, String>,
    /// First text child, verbatim. Empty when the element has none.
    pub text: String,
    pub children: Vec<ManifestNode>,
}

impl ManifestNode {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_child(mut self, child: ManifestNode) -> Self {
        self.children.push(child);
        self
    }

    /// Parse manifest XML text into an owned tree rooted at the document element.
    pub fn parse_xml(text: &str) -> Result<Self, ManifestError> {
        let doc = roxmltree::Document::parse(text)?;
        Ok(Self::from_element(doc.root_element()))
    }

    fn from_element(node: roxmltree::Node<'_, '_>) -> Self {
        let attributes = node
            .attributes()
            .map(|a| (a.name().to_string(), a.value().to_string()))
            .collect();
        let children = node
            .children()
            .filter(|c| c.is_element())
            .map(Self::from_element)
            .collect();

        Self {
            tag: node.tag_name().name().to_string(),
            attributes,
            text: node.text().unwrap_or_default().to_string(),
            children,
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Direct children with the given tag, in document order.
    pub fn children_tagged<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a ManifestNode> {
        self.children.iter().filter(move |c| c.tag == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_elements_attributes_and_text() {
        let root = ManifestNode::parse_xml(
            r#"<suite version="25">
                 <!-- comment -->
                 <xform><resource id="a" version="1">
                   <location authority="remote">./a.xml</location>
                 </resource></xform>
               </suite>"#,
        )
        .unwrap();

        assert_eq!(root.tag, "suite");
        assert_eq!(root.attr("version"), Some("25"));
        assert_eq!(root.children.len(), 1);

        let location = &root.children[0].children[0].children[0];
        assert_eq!(location.tag, "location");
        assert_eq!(location.attr("authority"), Some("remote"));
        assert_eq!(location.text, "./a.xml");
    }

    #[test]
    fn rejects_malformed_xml() {
        let err = ManifestNode::parse_xml("<suite>").unwrap_err();
        assert!(matches!(err, ManifestError::Xml(_)));
    }

    #[test]
    fn children_tagged_filters_by_tag() {
        let root = ManifestNode::new("suite")
            .with_child(ManifestNode::new("xform"))
            .with_child(ManifestNode::new("menu"))
            .with_child(ManifestNode::new("xform"));
        assert_eq!(root.children_tagged("xform").count(), 2);
        assert!(!root.has_attr("version"));
    }
}
