//! jsonmend — JSON Pointer resolution and JSON Patch application.
//!
//! Applies ordered sequences of structural edit operations (RFC 6902) to
//! [`serde_json::Value`] documents. Every mutating operation works on a
//! private copy of its input, so a failed patch leaves nothing behind and the
//! caller's document is never touched.
//!
//! # Example
//!
//! ```
//! use jsonmend::json_patch::{apply_ops, Op};
//! use serde_json::json;
//!
//! let doc = json!({"foo": "bar"});
//! let ops = vec![
//!     Op::Add { path: "/baz".into(), value: json!(0) },
//!     Op::Remove { path: "/foo".into() },
//!     Op::Test { path: "/baz".into(), value: json!(0) },
//! ];
//! let out = apply_ops(&doc, &ops).unwrap();
//! assert_eq!(*out, json!({"baz": 0}));
//! assert_eq!(doc, json!({"foo": "bar"}));
//! ```

pub mod json_patch;
pub mod text;

pub use jsonmend_json_pointer as json_pointer;
