//! Bookmark add/remove executor.
//!
//! Adding attaches the bookmark to the caller's first existing list or asks
//! the server to create a default list inline, in one mutation, so one press
//! can never race two default-list creations. Removing looks up the matching
//! record(s) first: zero matches notify, exactly one deletes, and more than
//! one suspends on the injected disambiguator rather than guessing a target.

use serde_json::json;

use super::ExecutorContext;
use crate::actions::ActionCompletion;
use crate::boundary::{BookmarkMatch, MutationKind, Notification, QueryVariables};
use crate::domain::{DomainObject, ObjectRef};

/// Query endpoint used to look up existing bookmark records.
const BOOKMARK_ENDPOINT: &str = "bookmarks";

/// Creates a bookmark on `target` for the current caller.
///
/// Returns `Some(ActionCompletion::Bookmark { bookmarked: true })` on success;
/// on any failure publishes one notification and returns `None`.
pub async fn add(ctx: &ExecutorContext<'_>, target: &ObjectRef) -> Option<ActionCompletion> {
    if !target.kind.is_bookmarkable() {
        ctx.notifier.publish(Notification::error(
            "NotBookmarkable",
            format!("{} objects cannot be bookmarked", target.kind),
        ));
        return None;
    }

    let list_id = ctx.session.bookmark_list_ids().into_iter().next();
    let create_default_list = list_id.is_none();
    tracing::debug!(target = %target, ?list_id, create_default_list, "creating bookmark");

    let input = json!({
        "target_kind": target.kind.as_str(),
        "target_id": target.id,
        "list_id": list_id,
        "create_default_list": create_default_list,
    });

    match ctx.mutator.mutate(MutationKind::BookmarkCreate, input).await {
        Ok(_) => Some(ActionCompletion::Bookmark { bookmarked: true }),
        Err(error) => {
            tracing::debug!(%error, "bookmark create failed");
            ctx.notifier.publish(Notification::error(
                "BookmarkCreateFailed",
                "Could not bookmark",
            ));
            None
        }
    }
}

/// Removes the caller's bookmark on `target`.
///
/// Looks up matching bookmark records for `(target, caller)` first. Zero
/// matches publish a "could not find bookmark" notification and delete
/// nothing, so pressing undo twice is safe. Multiple matches suspend on the
/// disambiguator; dismissing the prompt (or having no disambiguator wired)
/// aborts without deleting.
pub async fn remove(ctx: &ExecutorContext<'_>, target: &ObjectRef) -> Option<ActionCompletion> {
    let matches = match find_matches(ctx, target).await {
        Ok(matches) => matches,
        Err(error) => {
            tracing::debug!(%error, "bookmark lookup failed");
            ctx.notifier.publish(Notification::error(
                "BookmarkLookupFailed",
                "Could not look up bookmark",
            ));
            return None;
        }
    };

    let bookmark_id = match matches.len() {
        0 => {
            ctx.notifier.publish(Notification::error(
                "BookmarkNotFound",
                "Could not find bookmark",
            ));
            return None;
        }
        1 => matches[0].id.clone(),
        ambiguous => {
            tracing::warn!(target = %target, count = ambiguous, "multiple bookmarks matched");
            let choice = match ctx.disambiguator {
                Some(disambiguator) => disambiguator.choose(&matches).await,
                None => None,
            };
            match choice {
                Some(id) => id,
                None => {
                    ctx.notifier.publish(Notification::warning(
                        "BookmarkAmbiguous",
                        "Multiple bookmarks matched; nothing was removed",
                    ));
                    return None;
                }
            }
        }
    };

    let input = json!({ "id": bookmark_id });
    match ctx.mutator.mutate(MutationKind::BookmarkDelete, input).await {
        Ok(_) => Some(ActionCompletion::Bookmark { bookmarked: false }),
        Err(error) => {
            tracing::debug!(%error, "bookmark delete failed");
            ctx.notifier.publish(Notification::error(
                "BookmarkDeleteFailed",
                "Could not remove bookmark",
            ));
            None
        }
    }
}

/// Fetches the caller's bookmark records pointing at `target`.
async fn find_matches(
    ctx: &ExecutorContext<'_>,
    target: &ObjectRef,
) -> crate::domain::Result<Vec<BookmarkMatch>> {
    let variables = QueryVariables {
        text: None,
        sort: "Newest".to_string(),
        after: None,
        time_range: None,
        advanced: Some(json!({
            "target_kind": target.kind.as_str(),
            "target_id": target.id,
            "user_id": ctx.session.user_id(),
        })),
        take: 25,
    };

    let page = ctx.querier.query(BOOKMARK_ENDPOINT, variables).await?;
    Ok(page
        .items
        .iter()
        .filter(|item| matches!(item, DomainObject::Bookmark(_)))
        .map(|item| BookmarkMatch {
            id: item.id().to_string(),
            list_id: None,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::execute::testing::{
        FixedChoice, RecordingSink, ScriptedMutator, ScriptedQuerier, StaticSession,
    };
    use crate::boundary::{PageInfo, QueryPage, Severity};
    use crate::domain::{LinkWrapper, ObjectKind};
    use futures_executor::block_on;

    fn bookmark_page(ids: &[&str]) -> QueryPage {
        QueryPage {
            items: ids
                .iter()
                .map(|id| {
                    DomainObject::Bookmark(LinkWrapper {
                        id: (*id).to_string(),
                        target: None,
                    })
                })
                .collect(),
            page_info: PageInfo::default(),
        }
    }

    fn target() -> ObjectRef {
        ObjectRef::new(ObjectKind::Routine, "r1")
    }

    #[test]
    fn add_creates_default_list_when_caller_has_none() {
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

        let completion = block_on(add(&ctx, &target()));
        assert_eq!(
            completion,
            Some(ActionCompletion::Bookmark { bookmarked: true })
        );
        assert!(sink.published.borrow().is_empty());

        let calls = mutator.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, MutationKind::BookmarkCreate);
        assert_eq!(calls[0].1["create_default_list"], true);
    }

    #[test]
    fn add_attaches_to_first_existing_list() {
        let mutator = ScriptedMutator::default();
        let querier = ScriptedQuerier::default();
        let session = StaticSession {
            user: Some("user-1".to_string()),
            lists: vec!["list-a".to_string(), "list-b".to_string()],
        };
        let sink = RecordingSink::default();
        let ctx = ExecutorContext {
            mutator: &mutator,
            querier: &querier,
            session: &session,
            notifier: &sink,
            disambiguator: None,
            guard: None,
        };

        block_on(add(&ctx, &target()));
        let calls = mutator.calls.borrow();
        assert_eq!(calls[0].1["list_id"], "list-a");
        assert_eq!(calls[0].1["create_default_list"], false);
    }

    #[test]
    fn add_failure_notifies_without_completion() {
        let mutator = ScriptedMutator::respond_err("boom");
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

        assert!(block_on(add(&ctx, &target())).is_none());
        let published = sink.published.borrow();
        assert_eq!(published.len(), 1);
        assert_eq!(published[0].severity, Severity::Error);
    }

    #[test]
    fn remove_with_zero_matches_notifies_not_found() {
        let mutator = ScriptedMutator::default();
        let querier = ScriptedQuerier::with_pages(vec![Ok(bookmark_page(&[]))]);
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

        assert!(block_on(remove(&ctx, &target())).is_none());
        assert!(mutator.calls.borrow().is_empty(), "nothing deleted");
        assert_eq!(sink.published.borrow()[0].key, "BookmarkNotFound");
    }

    #[test]
    fn remove_with_single_match_deletes_it() {
        let mutator = ScriptedMutator::default();
        let querier = ScriptedQuerier::with_pages(vec![Ok(bookmark_page(&["b1"]))]);
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

        let completion = block_on(remove(&ctx, &target()));
        assert_eq!(
            completion,
            Some(ActionCompletion::Bookmark { bookmarked: false })
        );
        let calls = mutator.calls.borrow();
        assert_eq!(calls[0].0, MutationKind::BookmarkDelete);
        assert_eq!(calls[0].1["id"], "b1");
    }

    #[test]
    fn ambiguous_remove_deletes_only_the_chosen_record() {
        let mutator = ScriptedMutator::default();
        let querier = ScriptedQuerier::with_pages(vec![Ok(bookmark_page(&["b1", "b2"]))]);
        let session = StaticSession::logged_in();
        let sink = RecordingSink::default();
        let chooser = FixedChoice(Some("b2".to_string()));
        let ctx = ExecutorContext {
            mutator: &mutator,
            querier: &querier,
            session: &session,
            notifier: &sink,
            disambiguator: Some(&chooser),
            guard: None,
        };

        let completion = block_on(remove(&ctx, &target()));
        assert_eq!(
            completion,
            Some(ActionCompletion::Bookmark { bookmarked: false })
        );
        assert_eq!(mutator.calls.borrow()[0].1["id"], "b2");
    }

    #[test]
    fn ambiguous_remove_without_choice_aborts() {
        let mutator = ScriptedMutator::default();
        let querier = ScriptedQuerier::with_pages(vec![Ok(bookmark_page(&["b1", "b2"]))]);
        let session = StaticSession::logged_in();
        let sink = RecordingSink::default();
        let chooser = FixedChoice(None);
        let ctx = ExecutorContext {
            mutator: &mutator,
            querier: &querier,
            session: &session,
            notifier: &sink,
            disambiguator: Some(&chooser),
            guard: None,
        };

        assert!(block_on(remove(&ctx, &target())).is_none());
        assert!(mutator.calls.borrow().is_empty(), "no deletion inferred");
        assert_eq!(sink.published.borrow()[0].key, "BookmarkAmbiguous");
    }
}
