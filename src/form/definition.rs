//! Form definition tree (question list extracted from an xform).
//!
//! JSON shape:
//! [
//!   {
//!     "tag": "group",
//!     "value": "/data/group1",      // field path; last segment names the response key
//!     "label": "Group One",
//!     "children": [
//!       { "tag": "select1", "value": "/data/group1/style", "label": "Style",
//!         "options": [{ "label": "Juiced", "value": "juice" }] }
//!     ]
//!   }
//! ]

use crate::form::error::FlattenError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Question kind. Unknown tags are kept and treated as plain leaves.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum Tag {
    Input,
    Group,
    Select,
    Select1,
    Hidden,
    Other(String),
}

impl Tag {
    pub fn as_str(&self) -> &str {
        match self {
            Tag::Input => "input",
            Tag::Group => "group",
            Tag::Select => "select",
            Tag::Select1 => "select1",
            Tag::Hidden => "hidden",
            Tag::Other(s) => s,
        }
    }

    pub fn is_select(&self) -> bool {
        matches!(self, Tag::Select | Tag::Select1)
    }
}

impl From<String> for Tag {
    fn from(s: String) -> Self {
        match s.as_str() {
            "input" => Tag::Input,
            "group" => Tag::Group,
            "select" => Tag::Select,
            "select1" => Tag::Select1,
            "hidden" => Tag::Hidden,
            _ => Tag::Other(s),
        }
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.as_str().to_string()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// One question or group of a form template.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FormDefinitionNode {
    pub tag: Tag,

    #[serde(rename = "value")]
    pub path: String,

    #[serde(default)]
    pub label: String,

    /// Only meaningful for `group`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<FormDefinitionNode>,

    /// Only meaningful for `select`/`select1`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
}

impl FormDefinitionNode {
    fn leaf(tag: Tag, label: &str, path: &str) -> Self {
        Self {
            tag,
            path: path.to_string(),
            label: label.to_string(),
            children: Vec::new(),
            options: Vec::new(),
        }
    }

    pub fn input(label: &str, path: &str) -> Self {
        Self::leaf(Tag::Input, label, path)
    }

    pub fn hidden(label: &str, path: &str) -> Self {
        Self::leaf(Tag::Hidden, label, path)
    }

    pub fn group(label: &str, path: &str, children: Vec<FormDefinitionNode>) -> Self {
        Self {
            children,
            ..Self::leaf(Tag::Group, label, path)
        }
    }

    pub fn select(label: &str, path: &str, options: Vec<SelectOption>) -> Self {
        Self {
            options,
            ..Self::leaf(Tag::Select, label, path)
        }
    }

    pub fn select1(label: &str, path: &str, options: Vec<SelectOption>) -> Self {
        Self {
            options,
            ..Self::leaf(Tag::Select1, label, path)
        }
    }

    /// Final path segment, the key looked up in the submitted response.
    ///
    /// "/data/group1/code3" => "code3"; an empty path yields "".
    pub fn name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or_default()
    }

    /// Check that `children` only appear on groups and `options` only on selects.
    pub fn check_shape(&self) -> Result<(), FlattenError> {
        if !self.children.is_empty() && self.tag != Tag::Group {
            return Err(FlattenError::MalformedDefinition {
                path: self.path.clone(),
                reason: format!("{} question has children", self.tag),
            });
        }
        if !self.options.is_empty() && !self.tag.is_select() {
            return Err(FlattenError::MalformedDefinition {
                path: self.path.clone(),
                reason: format!("{} question has options", self.tag),
            });
        }
        self.children.iter().try_for_each(Self::check_shape)
    }
}

/// Check every node of a definition list.
pub fn check_definition(nodes: &[FormDefinitionNode]) -> Result<(), FlattenError> {
    nodes.iter().try_for_each(FormDefinitionNode::check_shape)
}
