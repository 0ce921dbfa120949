//! Submitted form data, as returned by the form API under the `form` key.
//!
//! Values are loosely typed: a field holds a scalar, a single group instance
//! (mapping), several repeat instances (sequence of mappings), or nothing.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Field name -> value, one level of a submission.
pub type ResponseMap = BTreeMap<String, ResponseValue>;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
    Repeat(Vec<ResponseValue>),
    Group(ResponseMap),
}

impl ResponseValue {
    /// Whether the field counts as answered.
    ///
    /// Null, false, zero, "", {} and [] all read as "no data". A genuine numeric
    /// answer of 0 is therefore indistinguishable from an unanswered question.
    pub fn is_present(&self) -> bool {
        match self {
            ResponseValue::Null => false,
            ResponseValue::Bool(b) => *b,
            ResponseValue::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
            ResponseValue::Text(s) => !s.is_empty(),
            ResponseValue::Repeat(items) => !items.is_empty(),
            ResponseValue::Group(map) => !map.is_empty(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ResponseValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_group(&self) -> Option<&ResponseMap> {
        match self {
            ResponseValue::Group(map) => Some(map),
            _ => None,
        }
    }

    /// Short variant name for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            ResponseValue::Null => "null",
            ResponseValue::Bool(_) => "boolean",
            ResponseValue::Number(_) => "number",
            ResponseValue::Text(_) => "text",
            ResponseValue::Repeat(_) => "sequence",
            ResponseValue::Group(_) => "mapping",
        }
    }
}

impl From<serde_json::Value> for ResponseValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => ResponseValue::Null,
            Value::Bool(b) => ResponseValue::Bool(b),
            Value::Number(n) => ResponseValue::Number(n),
            Value::String(s) => ResponseValue::Text(s),
            Value::Array(items) => {
                ResponseValue::Repeat(items.into_iter().map(ResponseValue::from).collect())
            }
            Value::Object(map) => ResponseValue::Group(
                map.into_iter()
                    .map(|(k, v)| (k, ResponseValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl<'de> Deserialize<'de> for ResponseValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        serde_json::Value::deserialize(deserializer).map(ResponseValue::from)
    }
}

impl From<&str> for ResponseValue {
    fn from(s: &str) -> Self {
        ResponseValue::Text(s.to_string())
    }
}

impl From<i64> for ResponseValue {
    fn from(n: i64) -> Self {
        ResponseValue::Number(n.into())
    }
}

impl fmt::Display for ResponseValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseValue::Text(s) => f.write_str(s),
            ResponseValue::Number(n) => write!(f, "{n}"),
            ResponseValue::Bool(b) => write!(f, "{b}"),
            ResponseValue::Null => f.write_str("null"),
            other => {
                let json = serde_json::to_string(other).map_err(|_| fmt::Error)?;
                f.write_str(&json)
            }
        }
    }
}
