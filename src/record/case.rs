//! Case record, as served by the case API.

use crate::form::{ResponseMap, ResponseValue};
use crate::record::error::RecordError;
use crate::record::keys::require_keys;

#[derive(Debug, Clone, PartialEq)]
pub struct CaseRecord {
    record: ResponseMap,
}

impl CaseRecord {
    pub const REQUIRED_KEYS: &'static [&'static str] = &[
        "id",
        "case_id",
        "user_id",
        "date_modified",
        "closed",
        "date_closed",
        "server_date_modified",
        "server_date_opened",
        "xform_ids",
        "properties",
        "indices",
    ];
    pub const REQUIRED_PROPERTY_KEYS: &'static [&'static str] =
        &["case_name", "case_type", "date_opened"];

    pub fn new(record: ResponseMap) -> Self {
        Self { record }
    }

    pub fn from_json(text: &str) -> Result<Self, RecordError> {
        Ok(Self::new(serde_json::from_str(text)?))
    }

    pub fn record(&self) -> &ResponseMap {
        &self.record
    }

    pub fn validate(&self) -> Result<(), RecordError> {
        require_keys(&self.record, Self::REQUIRED_KEYS)?;
        let properties = self
            .properties()
            .ok_or(RecordError::NotAMapping("properties"))?;
        require_keys(properties, Self::REQUIRED_PROPERTY_KEYS)
    }

    pub fn case_id(&self) -> Option<&str> {
        self.record.get("case_id").and_then(ResponseValue::as_text)
    }

    /// Ids of the form submissions that touched this case, in record order.
    pub fn xform_ids(&self) -> Vec<&str> {
        match self.record.get("xform_ids") {
            Some(ResponseValue::Repeat(ids)) => {
                ids.iter().filter_map(ResponseValue::as_text).collect()
            }
            _ => Vec::new(),
        }
    }

    pub fn properties(&self) -> Option<&ResponseMap> {
        self.record.get("properties").and_then(ResponseValue::as_group)
    }

    fn property(&self, key: &str) -> Option<&str> {
        self.properties()?.get(key).and_then(ResponseValue::as_text)
    }

    pub fn case_name(&self) -> Option<&str> {
        self.property("case_name")
    }

    pub fn case_type(&self) -> Option<&str> {
        self.property("case_type")
    }
}
