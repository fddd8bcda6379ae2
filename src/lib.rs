//! Huddle core: the object interaction and query orchestration layer.
//!
//! Huddle's views render ~30 heterogeneous domain-object kinds. This crate is
//! the part that keeps them uniform:
//! - Pure resolvers deriving permissions, counts, display text, and bookmark
//!   targets from any object, wrapper indirection included
//! - An action catalog with deterministic ordering and authentication gating
//! - Self-contained action executors (bookmark, vote, fork, delete, report,
//!   share) with exactly-one-outcome semantics
//! - An orchestrator composing catalog, executors, dialog state, and
//!   optimistic patching of the displayed object
//! - A cursor-based search engine with filter epochs and shareable
//!   location-state round-tripping

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host application (views, routing, transport impls) │  ← Out of scope
//! └─────────────────────────────────────────────────────┘
//!         │                                  │
//! ┌───────────────────────────┐   ┌───────────────────────────┐
//! │ Action Layer (actions/)   │   │ Query Layer (query/)      │
//! │ - Catalog + availability  │   │ - Descriptors per kind    │
//! │ - Executors               │   │ - Cursor/epoch engine     │
//! │ - Orchestrator + dialogs  │   │ - Location round trip     │
//! └───────────────────────────┘   └───────────────────────────┘
//!         │                                  │
//! ┌─────────────────────────────────────────────────────┐
//! │  Resolver Layer (resolve/)                          │
//! │  - Permissions / counts / display / bookmark target │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Boundary Layers                           │
//! │  - Closed object union (domain/)                    │
//! │  - Transport/session/notification seams (boundary/) │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`domain`]: Closed [`DomainObject`] union, capability sets, error types
//! - [`resolve`]: Total, never-panicking resolvers over any object
//! - [`actions`]: Catalog, executors, and the press orchestrator
//! - [`query`]: Search descriptors, pagination engine, typeahead projection
//! - [`boundary`]: Traits the host implements (transport, session,
//!   notifications)
//! - [`observability`]: Optional `tracing` subscriber setup for hosts
//!
//! # Example
//!
//! ```rust,ignore
//! use huddle_core::actions::{ActionKind, ActionOrchestrator, PressOutcome};
//!
//! let mut orchestrator = ActionOrchestrator::new(vec!["en".to_string()]);
//! orchestrator.set_object(Some(fetched_object));
//! if let PressOutcome::Job(job) = orchestrator.press(ActionKind::Bookmark, &ctx) {
//!     let navigation = orchestrator.run(job, &ctx).await;
//! }
//! ```

pub mod actions;
pub mod boundary;
pub mod domain;
pub mod observability;
pub mod query;
pub mod resolve;

pub use actions::{ActionKind, ActionOrchestrator, PressOutcome};
pub use domain::{CoreError, DomainObject, ObjectKind, ObjectRef, Result};
pub use query::{SearchEngine, SearchKind};
pub use resolve::{
    resolve_bookmark_target, resolve_counts, resolve_display, resolve_permissions,
};
