use crate::form::ResponseMap;
use crate::record::error::RecordError;

/// Succeeds when every `required` key is present in `record`; extra keys are fine.
pub fn require_keys(record: &ResponseMap, required: &[&str]) -> Result<(), RecordError> {
    let mut missing: Vec<String> = required
        .iter()
        .filter(|key| !record.contains_key(**key))
        .map(|key| key.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        missing.sort();
        Err(RecordError::MissingKeys(missing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(v: serde_json::Value) -> ResponseMap {
        serde_json::from_value(v).unwrap()
    }

    const REQUIRED: &[&str] = &["a", "b", "c"];

    #[test]
    fn exact_and_superset_keys_pass() {
        assert!(require_keys(&record(json!({"a": null, "b": null, "c": null})), REQUIRED).is_ok());
        assert!(
            require_keys(&record(json!({"a": 1, "b": 2, "c": 3, "e": 4})), REQUIRED).is_ok()
        );
    }

    #[test]
    fn differing_keys_report_what_is_missing() {
        let err = require_keys(&record(json!({"a": null, "d": null, "c": null})), REQUIRED)
            .unwrap_err();
        assert!(matches!(&err, RecordError::MissingKeys(keys) if keys == &["b".to_string()]));
        assert_eq!(err.to_string(), "record is missing required keys: b");
    }
}
