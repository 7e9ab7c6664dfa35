//! JSON cloning utilities.
//!
//! Every mutating patch operation edits a private copy produced here, so the
//! caller's document is never touched.

mod clone;

pub use clone::clone;
