//! JSON Patch implementation (RFC 6902).
//!
//! # Operations
//!
//! All standard RFC 6902 operations are supported:
//! `add`, `remove`, `replace`, `copy`, `move`, `test`.
//!
//! Each operation is a function of an input document that returns a new
//! document, leaving the input untouched. [`apply_patch`] folds a list of
//! operations left to right and stops at the first failure.

pub mod types;
pub mod apply;
pub mod hooks;
pub mod codec;

pub use types::{ApplyPatchOptions, Op, PatchError, PointerError, UnknownOpPolicy};
pub use apply::{
    apply_add, apply_copy, apply_move, apply_op, apply_ops, apply_patch, apply_remove,
    apply_replace, apply_test,
};
pub use hooks::{HookError, HookFailure, PatchHook};
pub use codec::json::{from_json, from_json_patch, to_json, to_json_patch};
