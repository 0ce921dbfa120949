//! Form layer: definition trees, submitted responses, and the flattener that
//! pairs them into human-readable output.

pub mod definition;
pub mod error;
pub mod flatten;
pub mod response;

pub use definition::{FormDefinitionNode, SelectOption, Tag, check_definition};
pub use error::FlattenError;
pub use flatten::{HumanReadableNode, HumanReadableValue, NO_DATA, flatten};
pub use response::{ResponseMap, ResponseValue};
