//! Manifest failure taxonomy.
//!
//! `ManifestFailure` messages are matched on by consumers, so their `Display`
//! text must not change.

use std::fmt;

/// One structural invariant a suite manifest failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ManifestFailure {
    #[error("Suite tag not at root")]
    SuiteNotAtRoot,

    #[error("Missing version attribute on suite")]
    MissingSuiteVersion,

    #[error("Suite does not contain one or more xforms")]
    NoXforms,

    #[error("Missing resource tags in xform")]
    ResourceCountMismatch,

    #[error("Missing id attribute in resource")]
    MissingResourceId,

    #[error("Missing version attribute in resource")]
    MissingResourceVersion,

    #[error("Missing authority attribute in location")]
    MissingLocationAuthority,

    #[error("Missing remote location tags in resource")]
    RemoteLocationCountMismatch,
}

/// Aggregated validation report for one manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestInvalid {
    pub failures: Vec<ManifestFailure>,
}

impl ManifestInvalid {
    pub fn contains(&self, failure: ManifestFailure) -> bool {
        self.failures.contains(&failure)
    }

    /// Failure messages in the order they were found.
    pub fn messages(&self) -> Vec<String> {
        self.failures.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for ManifestInvalid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "suite.xml was not valid. Failures: {}",
            self.messages().join("; ")
        )
    }
}

impl std::error::Error for ManifestInvalid {}

/// Errors from parsing or reading a manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("manifest is not well-formed xml: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error(transparent)]
    Invalid(#[from] ManifestInvalid),

    #[error("suite has no version attribute")]
    MissingVersion,
}
