//! Reaction (vote) executor.
//!
//! Sets or clears the caller's emoji reaction in a single mutation. The
//! completion kind reported upward is derived from the sign of the *resulting*
//! reaction, not the requested direction, so clearing a downvote still reports
//! a coherent outcome.

use serde_json::json;

use super::ExecutorContext;
use crate::actions::{reaction_score, ActionCompletion};
use crate::boundary::{MutationKind, Notification};
use crate::domain::ObjectRef;

/// Sends `emoji` (or `None` to clear) as the caller's reaction on `target`.
///
/// Returns a `VoteUp` completion when the resulting reaction scores positive
/// and `VoteDown` otherwise (a cleared reaction scores zero). On failure
/// publishes one notification and returns `None`.
pub async fn react(
    ctx: &ExecutorContext<'_>,
    target: &ObjectRef,
    emoji: Option<String>,
) -> Option<ActionCompletion> {
    if !target.kind.is_reactable() {
        ctx.notifier.publish(Notification::error(
            "NotReactable",
            format!("{} objects cannot be voted on", target.kind),
        ));
        return None;
    }

    tracing::debug!(target = %target, ?emoji, "sending reaction");
    let input = json!({
        "target_kind": target.kind.as_str(),
        "target_id": target.id,
        "emoji": emoji,
    });

    match ctx.mutator.mutate(MutationKind::React, input).await {
        Ok(_) => {
            if reaction_score(emoji.as_deref()) > 0 {
                Some(ActionCompletion::VoteUp { reaction: emoji })
            } else {
                Some(ActionCompletion::VoteDown { reaction: emoji })
            }
        }
        Err(error) => {
            tracing::debug!(%error, "reaction failed");
            ctx.notifier
                .publish(Notification::error("ReactFailed", "Could not vote"));
            None
        }
    }
}
