//! Domain layer for the Huddle core.
//!
//! This module contains the core domain types and business rules of the
//! interaction layer, independent of transport or rendering concerns.
//!
//! # Organization
//!
//! - [`error`]: Error taxonomy and result alias
//! - [`object`]: The closed [`DomainObject`] union, wrapper payloads, and
//!   per-kind capability sets
//!
//! # Examples
//!
//! ```
//! use huddle_core::domain::{DomainObject, Entity, ObjectKind};
//!
//! let project = DomainObject::Project(Entity::new("p1"));
//! assert_eq!(project.kind(), ObjectKind::Project);
//! assert!(project.kind().is_bookmarkable());
//! ```

pub mod error;
pub mod object;

pub use error::{CoreError, Result};
pub use object::{
    CountFields, DomainObject, Entity, LinkWrapper, ListItemWrapper, MemberWrapper, ObjectKind,
    ObjectRef, RunWrapper, Translation, You,
};
