//! Caller/session and interaction capabilities supplied by the host app.
//!
//! Identity storage, routing, and dialog UI all live outside this crate; these
//! traits are the read-only views and decision points the interaction layer
//! needs from them.

use std::collections::BTreeMap;

use futures_util::future::LocalBoxFuture;

/// Read-only view of the current caller's session.
pub trait SessionView {
    /// The caller's user id, `None` when browsing anonymously.
    fn user_id(&self) -> Option<String>;

    /// Whether the caller is authenticated.
    fn is_logged_in(&self) -> bool {
        self.user_id().is_some()
    }

    /// Ids of the caller's bookmark lists, first list first.
    ///
    /// Empty for anonymous callers and for callers who have never bookmarked
    /// anything; bookmark creation then creates a default list inline.
    fn bookmark_list_ids(&self) -> Vec<String>;
}

/// Asks whether the current view may be navigated away from.
///
/// The Edit action defers to this before leaving; a declining guard makes the
/// press a no-op.
pub trait NavigationGuard {
    fn may_leave(&self) -> bool;
}

/// Receives the shareable location state after each settled filter change.
///
/// The search engine serializes text, sort, and time range into this state
/// whenever one of them changes; hosts typically mirror the map into the URL
/// query string so search state survives reload and link sharing. Keys the
/// engine does not manage are carried through untouched. Implementations take
/// `&self`; sinks that buffer (the test sink does) use interior mutability.
pub trait LocationSink {
    fn publish(&self, state: &BTreeMap<String, String>);
}

/// One bookmark record matching a removal request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkMatch {
    /// Id of the bookmark record itself.
    pub id: String,
    /// Id of the list the bookmark sits in, when known.
    pub list_id: Option<String>,
}

/// Resolves which of several matching bookmark records to remove.
///
/// Invoked only when a removal finds more than one candidate. The future
/// suspends the executor until the caller picks a record id or dismisses the
/// prompt (`None`), in which case nothing is deleted.
pub trait BookmarkDisambiguator {
    fn choose<'a>(
        &'a self,
        candidates: &'a [BookmarkMatch],
    ) -> LocalBoxFuture<'a, Option<String>>;
}
