//! Permission resolution for domain objects.
//!
//! Derives a fully populated [`Permissions`] struct from any object, however
//! partially it was fetched. Wrapper kinds are unwrapped first, then each field
//! is read from the object's own `you` block, falling back to the root's `you`
//! block, falling back to the documented default. The function is total: it
//! never fails and never leaves a field absent.

use crate::domain::{DomainObject, You};

/// Fully resolved caller permissions and reaction state for one object.
///
/// Defaults are chosen for safe rendering: every capability defaults to
/// `false` except `can_read`, which defaults to `true` because a caller
/// holding the object was able to fetch it in the first place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permissions {
    pub can_comment: bool,
    pub can_copy: bool,
    pub can_delete: bool,
    pub can_read: bool,
    pub can_report: bool,
    pub can_share: bool,
    pub can_bookmark: bool,
    pub can_update: bool,
    pub can_react: bool,
    pub is_bookmarked: bool,
    pub is_viewed: bool,
    /// Emoji the caller currently has on the object, if any.
    pub reaction: Option<String>,
}

impl Default for Permissions {
    fn default() -> Self {
        Self {
            can_comment: false,
            can_copy: false,
            can_delete: false,
            can_read: true,
            can_report: false,
            can_share: false,
            can_bookmark: false,
            can_update: false,
            can_react: false,
            is_bookmarked: false,
            is_viewed: false,
            reaction: None,
        }
    }
}

/// Resolves permissions for any object, absent objects included.
///
/// Wrapper kinds (bookmarks, votes, views, runs, members, list items) are
/// transparent: the result equals the resolution of their wrapped target.
///
/// # Examples
///
/// ```
/// use huddle_core::domain::{DomainObject, Entity};
/// use huddle_core::resolve::resolve_permissions;
///
/// let perms = resolve_permissions(None);
/// assert!(perms.can_read);
/// assert!(!perms.can_update);
///
/// let project = DomainObject::Project(Entity::new("p1"));
/// assert_eq!(resolve_permissions(Some(&project)), perms);
/// ```
#[must_use]
pub fn resolve_permissions(object: Option<&DomainObject>) -> Permissions {
    let defaults = Permissions::default();
    let Some(entity) = object.and_then(DomainObject::entity) else {
        return defaults;
    };

    let own = entity.you.as_ref();
    let root = entity
        .root
        .as_deref()
        .and_then(DomainObject::entity)
        .and_then(|e| e.you.as_ref());

    let pick = |field: fn(&You) -> Option<bool>, default: bool| {
        own.and_then(field)
            .or_else(|| root.and_then(field))
            .unwrap_or(default)
    };

    Permissions {
        can_comment: pick(|y| y.can_comment, defaults.can_comment),
        can_copy: pick(|y| y.can_copy, defaults.can_copy),
        can_delete: pick(|y| y.can_delete, defaults.can_delete),
        can_read: pick(|y| y.can_read, defaults.can_read),
        can_report: pick(|y| y.can_report, defaults.can_report),
        can_share: pick(|y| y.can_share, defaults.can_share),
        can_bookmark: pick(|y| y.can_bookmark, defaults.can_bookmark),
        can_update: pick(|y| y.can_update, defaults.can_update),
        can_react: pick(|y| y.can_react, defaults.can_react),
        is_bookmarked: pick(|y| y.is_bookmarked, defaults.is_bookmarked),
        is_viewed: pick(|y| y.is_viewed, defaults.is_viewed),
        reaction: own
            .and_then(|y| y.reaction.clone())
            .or_else(|| root.and_then(|y| y.reaction.clone())),
    }
}
