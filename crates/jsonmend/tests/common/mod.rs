#![allow(dead_code)]

use jsonmend::json_patch::{from_json_patch, ApplyPatchOptions, Op};
use serde_json::Value;

/// Route `tracing` output through the test harness; `RUST_LOG` picks the level.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Decode a patch literal, panicking on malformed fixtures.
pub fn ops(patch: Value) -> Vec<Op> {
    from_json_patch(&patch, &ApplyPatchOptions::default())
        .unwrap_or_else(|e| panic!("bad patch fixture {patch}: {e}"))
}
