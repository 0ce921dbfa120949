//! Suite manifest layer: element tree, structural validation, location index.
//!
//! A suite lists the published form definitions of one application build:
//! suite -> xform -> resource(id, version) -> location(authority, text).

pub mod error;
pub mod index;
pub mod tree;
pub mod validate;

pub use error::{ManifestError, ManifestFailure, ManifestInvalid};
pub use index::{ResourceLocationIndex, derive_location_index, extract_version};
pub use tree::ManifestNode;
pub use validate::{validate, validate_xml};
