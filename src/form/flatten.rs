//! Reconcile a submission against its form definition.
//!
//! The definition drives the walk: output order is definition order, and
//! response keys the definition does not mention are ignored.
//!
//! Groups are resolved by the shape of the submitted value. The platform
//! serializes a repeat with several occurrences as a sequence of mappings but a
//! repeat with exactly one occurrence as a bare mapping, which is the same
//! shape as a non-repeating group. So:
//! - sequence  => `HumanReadableValue::Repeat`, one inner list per occurrence
//! - mapping   => `HumanReadableValue::Group`, a single flat list

use crate::form::definition::{FormDefinitionNode, SelectOption, Tag};
use crate::form::error::FlattenError;
use crate::form::response::{ResponseMap, ResponseValue};
use serde::{Serialize, Serializer};
use tracing::trace;

/// Rendered in place of unanswered questions.
pub const NO_DATA: &str = "No Data";

#[derive(Debug, Clone, PartialEq)]
pub struct HumanReadableNode {
    pub label: String,
    pub value: HumanReadableValue,
}

#[derive(Debug, Clone, PartialEq)]
pub enum HumanReadableValue {
    /// Missing or empty in the submission.
    NoData,
    /// Labels of the selected options, joined with ", ".
    Text(String),
    /// Leaf answer, passed through untouched.
    Raw(ResponseValue),
    /// One group instance.
    Group(Vec<HumanReadableNode>),
    /// Repeat occurrences, in submission order.
    Repeat(Vec<Vec<HumanReadableNode>>),
}

impl HumanReadableNode {
    pub fn new(label: impl Into<String>, value: HumanReadableValue) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

impl Serialize for HumanReadableNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (&self.label, &self.value).serialize(serializer)
    }
}

impl Serialize for HumanReadableValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            HumanReadableValue::NoData => serializer.serialize_str(NO_DATA),
            HumanReadableValue::Text(s) => serializer.serialize_str(s),
            HumanReadableValue::Raw(v) => v.serialize(serializer),
            HumanReadableValue::Group(nodes) => nodes.serialize(serializer),
            HumanReadableValue::Repeat(occurrences) => occurrences.serialize(serializer),
        }
    }
}

/// Flatten `response` into (label, value) pairs following `definition`.
///
/// Fails on the first question whose submitted value cannot be reconciled with
/// its definition; no partial output is returned.
pub fn flatten(
    definition: &[FormDefinitionNode],
    response: &ResponseMap,
) -> Result<Vec<HumanReadableNode>, FlattenError> {
    definition
        .iter()
        .map(|node| flatten_node(node, response))
        .collect()
}

fn flatten_node(
    node: &FormDefinitionNode,
    response: &ResponseMap,
) -> Result<HumanReadableNode, FlattenError> {
    let value = match response.get(node.name()) {
        Some(value) if value.is_present() => value,
        _ => return Ok(HumanReadableNode::new(&node.label, HumanReadableValue::NoData)),
    };

    let value = match node.tag {
        Tag::Group => flatten_group(node, value)?,
        Tag::Select | Tag::Select1 => HumanReadableValue::Text(selected_labels(node, value)?),
        _ => HumanReadableValue::Raw(value.clone()),
    };

    Ok(HumanReadableNode::new(&node.label, value))
}

fn flatten_group(
    node: &FormDefinitionNode,
    value: &ResponseValue,
) -> Result<HumanReadableValue, FlattenError> {
    match value {
        ResponseValue::Repeat(occurrences) => {
            trace!(path = %node.path, occurrences = occurrences.len(), "flattening repeat");
            let mut out = Vec::with_capacity(occurrences.len());
            for occurrence in occurrences {
                let map = occurrence
                    .as_group()
                    .ok_or_else(|| malformed(node, "mapping per repeat occurrence", occurrence))?;
                out.push(flatten(&node.children, map)?);
            }
            Ok(HumanReadableValue::Repeat(out))
        }
        ResponseValue::Group(map) => {
            trace!(path = %node.path, "flattening group");
            Ok(HumanReadableValue::Group(flatten(&node.children, map)?))
        }
        other => Err(malformed(node, "mapping or sequence of mappings", other)),
    }
}

/// Resolve space-separated option values to their labels, in option order.
fn selected_labels(
    node: &FormDefinitionNode,
    value: &ResponseValue,
) -> Result<String, FlattenError> {
    let text = value
        .as_text()
        .ok_or_else(|| malformed(node, "space-separated option values", value))?;
    let tokens: Vec<&str> = text.split_whitespace().collect();

    let selected: Vec<&SelectOption> = node
        .options
        .iter()
        .filter(|option| tokens.contains(&option.value.as_str()))
        .collect();

    if node.tag == Tag::Select1 && selected.len() > 1 {
        return Err(FlattenError::AmbiguousSingleSelect {
            label: node.label.clone(),
            selected: selected.iter().map(|o| o.value.clone()).collect(),
        });
    }

    let labels: Vec<&str> = selected.iter().map(|o| o.label.as_str()).collect();
    Ok(labels.join(", "))
}

fn malformed(
    node: &FormDefinitionNode,
    expected: &'static str,
    found: &ResponseValue,
) -> FlattenError {
    FlattenError::MalformedResponse {
        path: node.path.clone(),
        expected,
        found: found.kind(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn response(v: serde_json::Value) -> ResponseMap {
        serde_json::from_value(v).unwrap()
    }

    fn raw(label: &str, v: impl Into<ResponseValue>) -> HumanReadableNode {
        HumanReadableNode::new(label, HumanReadableValue::Raw(v.into()))
    }

    fn text(label: &str, s: &str) -> HumanReadableNode {
        HumanReadableNode::new(label, HumanReadableValue::Text(s.to_string()))
    }

    fn no_data(label: &str) -> HumanReadableNode {
        HumanReadableNode::new(label, HumanReadableValue::NoData)
    }

    fn style() -> FormDefinitionNode {
        FormDefinitionNode::select1(
            "Style",
            "/data/code3",
            vec![
                SelectOption::new("Juiced", "juice"),
                SelectOption::new("Sliced", "slice"),
            ],
        )
    }

    #[test]
    fn select1_resolves_option_label() {
        let out = flatten(&[style()], &response(json!({ "code3": "slice" }))).unwrap();
        assert_eq!(out, vec![text("Style", "Sliced")]);
    }

    #[test]
    fn select1_with_two_matches_is_a_contract_violation() {
        let err = flatten(&[style()], &response(json!({ "code3": "juice slice" }))).unwrap_err();
        assert_eq!(
            err,
            FlattenError::AmbiguousSingleSelect {
                label: "Style".to_string(),
                selected: vec!["juice".to_string(), "slice".to_string()],
            }
        );
    }

    #[test]
    fn select_with_unknown_tokens_keeps_only_known_options() {
        let node = FormDefinitionNode::select(
            "Fruit",
            "/data/fruit",
            vec![SelectOption::new("Apple", "a"), SelectOption::new("Pear", "p")],
        );
        let out = flatten(&[node], &response(json!({ "fruit": "zz p" }))).unwrap();
        assert_eq!(out, vec![text("Fruit", "Pear")]);
    }

    #[test]
    fn select_value_must_be_text() {
        let err = flatten(&[style()], &response(json!({ "code3": 7 }))).unwrap_err();
        assert!(matches!(err, FlattenError::MalformedResponse { found: "number", .. }));
    }

    #[test]
    fn empty_group_is_no_data_without_descending() {
        let group = FormDefinitionNode::group(
            "G",
            "/data/g",
            vec![FormDefinitionNode::input("Q", "/data/g/q")],
        );
        for empty in [json!({ "g": {} }), json!({ "g": [] }), json!({ "g": "" }), json!({})] {
            assert_eq!(flatten(&[group.clone()], &response(empty)).unwrap(), vec![no_data("G")]);
        }
    }

    #[test]
    fn zero_reads_as_no_data() {
        let node = FormDefinitionNode::input("Count", "/data/count");
        let out = flatten(&[node], &response(json!({ "count": 0 }))).unwrap();
        assert_eq!(out, vec![no_data("Count")]);
    }

    #[test]
    fn scalar_under_group_is_malformed() {
        let group = FormDefinitionNode::group("G", "/data/g", vec![]);
        let err = flatten(&[group], &response(json!({ "g": "oops" }))).unwrap_err();
        assert_eq!(
            err,
            FlattenError::MalformedResponse {
                path: "/data/g".to_string(),
                expected: "mapping or sequence of mappings",
                found: "text",
            }
        );
    }

    #[test]
    fn repeat_occurrence_must_be_a_mapping() {
        let group = FormDefinitionNode::group("G", "/data/g", vec![]);
        let err = flatten(&[group], &response(json!({ "g": [{ "q": 1 }, "x"] }))).unwrap_err();
        assert!(matches!(err, FlattenError::MalformedResponse { found: "text", .. }));
    }

    #[test]
    fn hidden_and_unknown_tags_pass_values_through() {
        let mut trigger = FormDefinitionNode::input("Ack", "/data/ack");
        trigger.tag = Tag::Other("trigger".to_string());
        let definition = vec![
            FormDefinitionNode::hidden("/data/meta/appVersion", "/data/meta/appVersion"),
            trigger,
        ];
        let out = flatten(
            &definition,
            &response(json!({ "appVersion": { "#text": "v2.9.0" }, "ack": "OK" })),
        )
        .unwrap();

        assert_eq!(
            out,
            vec![
                raw(
                    "/data/meta/appVersion",
                    ResponseValue::from(json!({ "#text": "v2.9.0" }))
                ),
                raw("Ack", "OK"),
            ]
        );
    }

    #[test]
    fn serializes_as_label_value_pairs() {
        let out = vec![
            no_data("A"),
            HumanReadableNode::new(
                "R",
                HumanReadableValue::Repeat(vec![vec![raw("Q", 1i64)], vec![text("S", "x")]]),
            ),
        ];
        assert_eq!(
            serde_json::to_value(&out).unwrap(),
            json!([["A", "No Data"], ["R", [[["Q", 1]], [["S", "x"]]]]])
        );
    }
}
