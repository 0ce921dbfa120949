//! Output rendering for flattened submissions.

pub mod text;

pub use text::render_text;
