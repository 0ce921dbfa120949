//! Client-side core for a survey-data collection platform.
//!
//! Two independent pieces:
//! - [`manifest`]: validate a deployment manifest (suite.xml) and index the
//!   remote download location of every form definition it lists.
//! - [`form`]: flatten a submitted form against its definition tree into
//!   ordered (label, value) pairs.
//!
//! [`record`] wraps the API records that carry submissions and cases.

pub mod form;
pub mod key;
pub mod manifest;
pub mod record;
pub mod render;

pub use key::ResourceKey;
