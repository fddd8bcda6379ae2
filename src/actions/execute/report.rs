//! Report executor.
//!
//! Files a moderation report against a reportable object. The reason is a
//! required category chosen in the dialog; free-form details are optional.

use serde_json::json;

use super::ExecutorContext;
use crate::actions::ActionCompletion;
use crate::boundary::{MutationKind, Notification};
use crate::domain::ObjectRef;

/// Files a report against `target`.
///
/// Rejects kinds that do not accept reports before touching the transport.
pub async fn report(
    ctx: &ExecutorContext<'_>,
    target: &ObjectRef,
    reason: &str,
    details: Option<&str>,
) -> Option<ActionCompletion> {
    if !target.kind.is_reportable() {
        ctx.notifier.publish(Notification::warning(
            "NotReportable",
            format!("{} objects cannot be reported", target.kind),
        ));
        return None;
    }

    tracing::debug!(target = %target, reason, "filing report");
    let input = json!({
        "target_kind": target.kind.as_str(),
        "target_id": target.id,
        "reason": reason,
        "details": details,
    });

    match ctx.mutator.mutate(MutationKind::ReportCreate, input).await {
        Ok(_) => Some(ActionCompletion::Report),
        Err(error) => {
            tracing::debug!(%error, "report failed");
            ctx.notifier
                .publish(Notification::error("ReportFailed", "Could not file report"));
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
    use crate::domain::ObjectKind;
    use futures_executor::block_on;

    fn ctx<'a>(
        mutator: &'a ScriptedMutator,
        querier: &'a ScriptedQuerier,
        session: &'a StaticSession,
        sink: &'a RecordingSink,
    ) -> ExecutorContext<'a> {
        ExecutorContext {
            mutator,
            querier,
            session,
            notifier: sink,
            disambiguator: None,
            guard: None,
        }
    }

    #[test]
    fn report_sends_reason_and_details() {
        let mutator = ScriptedMutator::default();
        let querier = ScriptedQuerier::default();
        let session = StaticSession::logged_in();
        let sink = RecordingSink::default();
        let ctx = ctx(&mutator, &querier, &session, &sink);

        let target = ObjectRef::new(ObjectKind::Comment, "c1");
        let completion = block_on(report(&ctx, &target, "Spam", Some("link farm")));
        assert_eq!(completion, Some(ActionCompletion::Report));

        let calls = mutator.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, MutationKind::ReportCreate);
        assert_eq!(calls[0].1["reason"], "Spam");
        assert_eq!(calls[0].1["details"], "link farm");
    }

    #[test]
    fn unreportable_kind_is_rejected_without_mutation() {
        let mutator = ScriptedMutator::default();
        let querier = ScriptedQuerier::default();
        let session = StaticSession::logged_in();
        let sink = RecordingSink::default();
        let ctx = ctx(&mutator, &querier, &session, &sink);

        let target = ObjectRef::new(ObjectKind::Reminder, "r1");
        assert!(block_on(report(&ctx, &target, "Spam", None)).is_none());
        assert!(mutator.calls.borrow().is_empty());
        assert_eq!(sink.published.borrow().len(), 1);
    }

    #[test]
    fn transport_failure_notifies() {
        let mutator = ScriptedMutator::respond_err("down");
        let querier = ScriptedQuerier::default();
        let session = StaticSession::logged_in();
        let sink = RecordingSink::default();
        let ctx = ctx(&mutator, &querier, &session, &sink);

        let target = ObjectRef::new(ObjectKind::Post, "p1");
        assert!(block_on(report(&ctx, &target, "Abuse", None)).is_none());
        assert_eq!(sink.published.borrow().len(), 1);
    }
}
