//! Post-apply observers for [`apply_patch`](super::apply_patch).

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use super::types::Op;

/// Error type a hook may fail with.
pub type HookError = Box<dyn Error + Send + Sync>;

/// Observer invoked once with the final document after a patch succeeds.
///
/// Hooks run in the order given and only for side effects (auditing,
/// metrics, change feeds). The first failing hook aborts the call and the
/// remaining hooks are not invoked.
///
/// Closures of the shape `Fn(&Value, &[Op]) -> Result<(), HookError>`
/// implement this trait.
pub trait PatchHook {
    fn after_apply(&self, doc: &Value, ops: &[Op]) -> Result<(), HookError>;
}

impl<F> PatchHook for F
where
    F: Fn(&Value, &[Op]) -> Result<(), HookError>,
{
    fn after_apply(&self, doc: &Value, ops: &[Op]) -> Result<(), HookError> {
        self(doc, ops)
    }
}

/// The error a hook failed with, as carried by
/// [`PatchError::Hook`](super::PatchError::Hook).
///
/// Display and [`Error::source`] forward to the hook's error. Clones share
/// it. Two failures are equal when they display the same message.
#[derive(Debug, Clone)]
pub struct HookFailure(Arc<dyn Error + Send + Sync>);

impl HookFailure {
    /// The error the hook returned.
    pub fn get_ref(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.0
    }

    pub fn downcast_ref<E: Error + 'static>(&self) -> Option<&E> {
        self.0.downcast_ref::<E>()
    }
}

impl From<HookError> for HookFailure {
    fn from(err: HookError) -> Self {
        HookFailure(Arc::from(err))
    }
}

impl fmt::Display for HookFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}

impl Error for HookFailure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.0.source()
    }
}

impl PartialEq for HookFailure {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0.to_string() == other.0.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("sink closed")]
    struct SinkClosed;

    #[derive(Debug, thiserror::Error)]
    #[error("audit failed")]
    struct AuditFailed(#[source] SinkClosed);

    #[test]
    fn test_failure_keeps_error_value() {
        let failure = HookFailure::from(HookError::from(AuditFailed(SinkClosed)));
        assert_eq!(failure.to_string(), "audit failed");
        assert!(failure.downcast_ref::<AuditFailed>().is_some());
        assert!(failure.downcast_ref::<SinkClosed>().is_none());
        let source = failure.source().map(|err| err.to_string());
        assert_eq!(source.as_deref(), Some("sink closed"));
    }

    #[test]
    fn test_clones_share_the_error() {
        let failure = HookFailure::from(HookError::from("boom"));
        let copy = failure.clone();
        assert_eq!(failure, copy);
        assert_eq!(failure, HookFailure::from(HookError::from("boom")));
        assert_ne!(failure, HookFailure::from(HookError::from("bang")));
    }
}
