//! Remote download locations keyed by versioned resource id.

use crate::key::ResourceKey;
use crate::manifest::error::ManifestError;
use crate::manifest::tree::ManifestNode;
use std::collections::BTreeMap;
use tracing::warn;

/// Resource key -> remote location path, e.g. "c9d5180df5v25" -> "./modules-0/forms-0.xml".
pub type ResourceLocationIndex = BTreeMap<ResourceKey, String>;

/// Collect every `xform/resource/location[@authority="remote"]` into an index.
///
/// Works on unvalidated manifests. A later resource with the same id and
/// version overwrites an earlier one.
pub fn derive_location_index(suite: &ManifestNode) -> ResourceLocationIndex {
    let mut out = ResourceLocationIndex::new();

    for resource in suite
        .children_tagged("xform")
        .flat_map(|xform| xform.children_tagged("resource"))
    {
        for location in resource
            .children_tagged("location")
            .filter(|location| location.attr("authority") == Some("remote"))
        {
            let (Some(id), Some(version)) = (resource.attr("id"), resource.attr("version")) else {
                warn!(
                    location = %location.text,
                    "skipping remote location: resource has no id or version"
                );
                continue;
            };

            let key = ResourceKey::new(id, version);
            if let Some(prev) = out.insert(key.clone(), location.text.clone()) {
                warn!(%key, %prev, now = %location.text, "duplicate resource key; keeping last");
            }
        }
    }

    out
}

/// The suite's `version` attribute, verbatim.
pub fn extract_version(suite: &ManifestNode) -> Result<&str, ManifestError> {
    suite.attr("version").ok_or(ManifestError::MissingVersion)
}
