//! Fork (copy) executor.
//!
//! Copies an object into a caller-owned duplicate. The completion event
//! carries the created object so the caller can navigate to it.

use serde_json::json;

use super::ExecutorContext;
use crate::actions::ActionCompletion;
use crate::boundary::{MutationKind, Notification};
use crate::domain::{DomainObject, ObjectRef};

/// Forks `target` into a copy owned by the caller.
///
/// On success the server's response record is decoded into the new object and
/// returned in a `Fork` completion. On failure (transport or an unreadable
/// response) publishes one notification and returns `None`.
pub async fn copy(ctx: &ExecutorContext<'_>, target: &ObjectRef) -> Option<ActionCompletion> {
    if !target.kind.is_copyable() {
        ctx.notifier.publish(Notification::error(
            "NotCopyable",
            format!("{} objects cannot be forked", target.kind),
        ));
        return None;
    }

    tracing::debug!(target = %target, "forking object");
    let input = json!({
        "target_kind": target.kind.as_str(),
        "target_id": target.id,
    });

    let response = match ctx.mutator.mutate(MutationKind::Copy, input).await {
        Ok(response) => response,
        Err(error) => {
            tracing::debug!(%error, "fork failed");
            ctx.notifier
                .publish(Notification::error("CopyFailed", "Could not fork"));
            return None;
        }
    };

    match serde_json::from_value::<DomainObject>(response) {
        Ok(object) => Some(ActionCompletion::Fork { object }),
        Err(error) => {
            tracing::debug!(%error, "fork response unreadable");
            ctx.notifier
                .publish(Notification::error("CopyFailed", "Could not fork"));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::execute::testing::{
        RecordingSink, ScriptedMutator, ScriptedQuerier, StaticSession,
    };
    use crate::domain::{Entity, ObjectKind};
    use futures_executor::block_on;

    #[test]
    fn successful_fork_returns_created_object() {
        let created = DomainObject::Routine(Entity::new("copy-1"));
        let mutator = ScriptedMutator::respond_ok(serde_json::to_value(&created).unwrap());
        let querier = ScriptedQuerier::default();
        let session = StaticSession::logged_in();
        let sink = RecordingSink::default();
        let ctx = ExecutorContext {
            mutator: &mutator,
            querier: &querier,
            session: &session,
            notifier: &sink,
            disambiguator: None,
            guard: None,
        };

        let target = ObjectRef::new(ObjectKind::Routine, "r1");
        let completion = block_on(copy(&ctx, &target));
        assert_eq!(completion, Some(ActionCompletion::Fork { object: created }));
    }

    #[test]
    fn unreadable_response_notifies() {
        let mutator = ScriptedMutator::respond_ok(serde_json::json!({ "success": true }));
        let querier = ScriptedQuerier::default();
        let session = StaticSession::logged_in();
        let sink = RecordingSink::default();
        let ctx = ExecutorContext {
            mutator: &mutator,
            querier: &querier,
            session: &session,
            notifier: &sink,
            disambiguator: None,
            guard: None,
        };

        let target = ObjectRef::new(ObjectKind::Standard, "s1");
        assert!(block_on(copy(&ctx, &target)).is_none());
        assert_eq!(sink.published.borrow().len(), 1);
    }

    #[test]
    fn uncopyable_kind_never_reaches_transport() {
        let mutator = ScriptedMutator::default();
        let querier = ScriptedQuerier::default();
        let session = StaticSession::logged_in();
        let sink = RecordingSink::default();
        let ctx = ExecutorContext {
            mutator: &mutator,
            querier: &querier,
            session: &session,
            notifier: &sink,
            disambiguator: None,
            guard: None,
        };

        let target = ObjectRef::new(ObjectKind::Comment, "c1");
        assert!(block_on(copy(&ctx, &target)).is_none());
        assert!(mutator.calls.borrow().is_empty());
    }
}
