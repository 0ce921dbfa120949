//! API record envelopes wrapping submitted data.

pub mod case;
pub mod error;
pub mod keys;
pub mod submission;

pub use case::CaseRecord;
pub use error::RecordError;
pub use keys::require_keys;
pub use submission::FormSubmission;
