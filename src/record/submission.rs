//! Form submission record, as served by the form API.
//!
//! JSON shape (abridged):
//! {
//!   "id": "...", "type": "data", "received_on": "...", "metadata": {...},
//!   "form": {
//!     "@xmlns": "http://openrosa.org/formdesigner/...", "@version": "153",
//!     "meta": {...},
//!     "case": { "@caseid": "...", "@date_modified": "...", "create": {...}, "update": {...} },
//!     ...question answers...
//!   }
//! }

use crate::form::{FormDefinitionNode, HumanReadableNode, ResponseMap, ResponseValue, flatten};
use crate::key::ResourceKey;
use crate::record::error::RecordError;
use crate::record::keys::require_keys;

#[derive(Debug, Clone, PartialEq)]
pub struct FormSubmission {
    record: ResponseMap,
}

impl FormSubmission {
    pub const REQUIRED_KEYS: &'static [&'static str] =
        &["form", "received_on", "type", "id", "metadata"];
    pub const REQUIRED_FORM_KEYS: &'static [&'static str] = &["case", "@xmlns", "meta", "@version"];

    pub fn new(record: ResponseMap) -> Self {
        Self { record }
    }

    pub fn from_json(text: &str) -> Result<Self, RecordError> {
        Ok(Self::new(serde_json::from_str(text)?))
    }

    pub fn record(&self) -> &ResponseMap {
        &self.record
    }

    /// Check the envelope and the `form` body carry their required keys.
    pub fn validate(&self) -> Result<(), RecordError> {
        require_keys(&self.record, Self::REQUIRED_KEYS)?;
        let form = self.form().ok_or(RecordError::NotAMapping("form"))?;
        require_keys(form, Self::REQUIRED_FORM_KEYS)
    }

    pub fn form(&self) -> Option<&ResponseMap> {
        self.record.get("form").and_then(ResponseValue::as_group)
    }

    fn form_text(&self, key: &str) -> Option<&str> {
        self.form()?.get(key).and_then(ResponseValue::as_text)
    }

    pub fn form_id(&self) -> Option<&str> {
        self.record.get("id").and_then(ResponseValue::as_text)
    }

    pub fn xmlns(&self) -> Option<&str> {
        self.form_text("@xmlns")
    }

    pub fn version(&self) -> Option<&str> {
        self.form_text("@version")
    }

    /// `xmlns + "v" + version`, the key a suite manifest would index this form's
    /// definition under.
    pub fn unique_id(&self) -> Option<ResourceKey> {
        Some(ResourceKey::new(self.xmlns()?, self.version()?))
    }

    pub fn case(&self) -> Option<&ResponseMap> {
        self.form()?.get("case").and_then(ResponseValue::as_group)
    }

    pub fn has_case(&self) -> bool {
        self.case().is_some_and(|case| !case.is_empty())
    }

    pub fn created(&self) -> bool {
        self.case().is_some_and(|case| case.contains_key("create"))
    }

    pub fn updated(&self) -> bool {
        self.case().is_some_and(|case| case.contains_key("update"))
    }

    pub fn date_modified(&self) -> Option<&ResponseValue> {
        self.case()?.get("@date_modified")
    }

    pub fn case_id(&self) -> Option<&str> {
        self.case()?.get("@caseid").and_then(ResponseValue::as_text)
    }

    /// Flatten the `form` body against its definition.
    pub fn human_readable(
        &self,
        definition: &[FormDefinitionNode],
    ) -> Result<Vec<HumanReadableNode>, RecordError> {
        let form = self.form().ok_or(RecordError::NotAMapping("form"))?;
        Ok(flatten(definition, form)?)
    }
}
