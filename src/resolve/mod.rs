//! Pure resolvers deriving render-ready values from any domain object.
//!
//! Every function in this layer is total: absent objects, missing fields, and
//! unfetched wrapper targets all degrade to documented defaults instead of
//! failing. Views call these directly; the action orchestrator reuses the same
//! wrapper-aware dispatch when applying optimistic patches, so what is
//! rendered and what is patched can never disagree.
//!
//! # Modules
//!
//! - [`permissions`]: caller capability and reaction resolution
//! - [`counts`]: numeric count resolution
//! - [`display`]: title/subtitle derivation and tag-chip budgeting
//! - [`target`]: bookmark target resolution

pub mod counts;
pub mod display;
pub mod permissions;
pub mod target;

pub use counts::{resolve_counts, Counts};
pub use display::{resolve_display, visible_tags, Display};
pub use permissions::{resolve_permissions, Permissions};
pub use target::resolve_bookmark_target;
