//! Delete executor and its retype-to-confirm gate.
//!
//! Deletion is destructive, so the dialog requires the caller to retype the
//! object's display name before the destructive control enables. The typed
//! text must equal the name exactly after trimming surrounding whitespace;
//! the comparison is case-sensitive.

use serde_json::json;

use super::ExecutorContext;
use crate::actions::ActionCompletion;
use crate::boundary::{MutationKind, Notification};
use crate::domain::ObjectRef;

/// Confirmation state for one delete dialog.
///
/// Created when the dialog opens, fed keystrokes while it is visible, and
/// consulted before the destructive mutation is allowed to fire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteConfirmation {
    expected: String,
    typed: String,
}

impl DeleteConfirmation {
    /// Starts a confirmation against the object's display name.
    pub fn new(expected: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
            typed: String::new(),
        }
    }

    /// Replaces the typed text with the dialog's current input.
    pub fn set_typed(&mut self, typed: impl Into<String>) {
        self.typed = typed.into();
    }

    /// Whether the destructive control may be enabled.
    ///
    /// Surrounding whitespace on either side is ignored; case is not.
    #[must_use]
    pub fn is_confirmed(&self) -> bool {
        self.typed.trim() == self.expected.trim()
    }
}

/// Deletes `target`.
///
/// Callers gate this behind [`DeleteConfirmation::is_confirmed`]; the
/// executor itself performs exactly one mutation and reports a `Delete`
/// completion or one failure notification.
pub async fn delete(ctx: &ExecutorContext<'_>, target: &ObjectRef) -> Option<ActionCompletion> {
    tracing::debug!(target = %target, "deleting object");
    let input = json!({
        "target_kind": target.kind.as_str(),
        "target_id": target.id,
    });

    match ctx.mutator.mutate(MutationKind::Delete, input).await {
        Ok(_) => Some(ActionCompletion::Delete),
        Err(error) => {
            tracing::debug!(%error, "delete failed");
            ctx.notifier
                .publish(Notification::error("DeleteFailed", "Could not delete"));
            None
        }
    }
}
