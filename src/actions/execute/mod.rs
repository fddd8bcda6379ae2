//! Action executors: one self-contained mutation-plus-notification unit per
//! action kind.
//!
//! Every executor receives an [`ExecutorContext`] of injected collaborators,
//! performs exactly one mutation, and guarantees exactly one outcome: a
//! returned completion event XOR a published failure notification. Executors
//! never propagate transport errors upward and never fail silently.
//!
//! # Modules
//!
//! - [`bookmark`]: add (create-or-attach) and remove (lookup-then-delete)
//! - [`vote`]: single-call emoji set/clear
//! - [`fork`]: copy into a caller-owned object
//! - [`delete`]: retype-to-confirm gate and deletion
//! - [`report`]: moderation report submission
//! - [`share`]: link composition (no mutation, no completion event)

pub mod bookmark;
#[cfg(test)]
pub(crate) mod testing;
pub mod delete;
pub mod fork;
pub mod report;
pub mod share;
pub mod vote;

use crate::boundary::{
    BookmarkDisambiguator, Mutator, NavigationGuard, NotificationSink, Querier, SessionView,
};

/// Injected collaborators shared by all executors.
///
/// Built per call site; holding references keeps the orchestrator itself
/// data-only and lets tests substitute any seam independently.
pub struct ExecutorContext<'a> {
    pub mutator: &'a dyn Mutator,
    pub querier: &'a dyn Querier,
    pub session: &'a dyn SessionView,
    pub notifier: &'a dyn NotificationSink,
    /// Resolves multi-match bookmark removals; absent means such removals
    /// abort with a notification.
    pub disambiguator: Option<&'a dyn BookmarkDisambiguator>,
    /// Consulted before Edit navigates away from the current view.
    pub guard: Option<&'a dyn NavigationGuard>,
}
