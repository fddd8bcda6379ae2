//! Action layer: the catalog of offerable actions, the executors that carry
//! them out, and the orchestrator that connects presses to executions.
//!
//! The layer is split the same way the action lifecycle is:
//!
//! - [`catalog`]: which actions exist and which are currently available
//! - [`execute`]: one mutation-plus-notification executor per action
//! - [`orchestrator`]: press handling, dialogs, and optimistic patching

pub mod catalog;
pub mod execute;
pub mod orchestrator;

pub use catalog::{
    available_actions, reaction_score, split_inline, ActionKind, INLINE_ACTION_LIMIT,
};
pub use execute::delete::DeleteConfirmation;
pub use execute::share::{deep_link, share_links, ShareLinks};
pub use execute::ExecutorContext;
pub use orchestrator::{
    ActionOrchestrator, DialogState, MutationJob, Navigation, PressOutcome,
};

use crate::domain::DomainObject;

/// Event an executor reports after its mutation succeeds.
///
/// The orchestrator translates completions into optimistic patches on the
/// displayed object or into navigation, depending on the variant.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionCompletion {
    /// Bookmark was created or removed; carries the resulting state.
    Bookmark { bookmarked: bool },
    /// A positive reaction was set.
    VoteUp { reaction: Option<String> },
    /// A negative reaction was set, or the reaction was cleared.
    VoteDown { reaction: Option<String> },
    /// A copy was created; carries the newly created object.
    Fork { object: DomainObject },
    /// The object was deleted.
    Delete,
    /// A report was filed.
    Report,
}
