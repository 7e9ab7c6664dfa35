//! JSON equality utilities.
//!
//! Provides the deep structural comparison used by the `test` operation.

mod deep_equal;

pub use deep_equal::deep_equal;
