//! jsonmend-util - value utilities shared by the pointer and patch crates.
//!
//! Everything here operates on [`serde_json::Value`], the document model of
//! the workspace.

pub mod json_clone;
pub mod json_equal;
pub mod truthy;

pub use json_clone::clone;
pub use json_equal::deep_equal;
pub use truthy::is_truthy;
