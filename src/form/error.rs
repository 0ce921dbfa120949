//! Flattening errors.

/// Ways a definition/response pair can fail to flatten.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlattenError {
    /// A single-choice question matched more than one option.
    #[error("{label:?} is single-choice but {selected:?} were all selected")]
    AmbiguousSingleSelect { label: String, selected: Vec<String> },

    /// The submitted value has a shape the question cannot take.
    #[error("{path}: expected {expected}, found {found}")]
    MalformedResponse {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    /// The definition tree breaks the tag/children/options pairing.
    #[error("malformed definition at {path}: {reason}")]
    MalformedDefinition { path: String, reason: String },
}
