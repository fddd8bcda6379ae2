//! External interface seams.
//!
//! Everything the interaction layer needs from the rest of the application is
//! expressed as a trait here: the mutation/query transports, the notification
//! sink, and the session/navigation capabilities. The crate never touches
//! global state; each orchestrator or engine instance receives its
//! collaborators explicitly.
//!
//! # Modules
//!
//! - [`transport`]: [`Mutator`]/[`Querier`] traits and wire shapes
//! - [`notify`]: injected [`NotificationSink`] capability
//! - [`session`]: caller session view, navigation guard, location sink,
//!   bookmark disambiguation

pub mod notify;
pub mod session;
pub mod transport;

pub use notify::{Notification, NotificationSink, Severity};
pub use session::{
    BookmarkDisambiguator, BookmarkMatch, LocationSink, NavigationGuard, SessionView,
};
pub use transport::{
    MutationKind, Mutator, PageInfo, Querier, QueryPage, QueryVariables, TimeRange,
};
