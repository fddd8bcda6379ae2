//! Bookmark target resolution.
//!
//! Decides which object a bookmark press actually bookmarks. List and
//! membership kinds have no bookmark target at all; wrapper kinds delegate to
//! their wrapped object; versioned objects bookmark their parent entity via
//! the root back-reference.

use crate::domain::{DomainObject, ObjectKind, ObjectRef};

/// Resolves the kind + id pair a bookmark mutation should reference.
///
/// Returns `None` for absent objects, list/membership kinds
/// (`BookmarkList`, `Member`, `RoutineListItem`), and wrappers whose target
/// was never fetched. A version object resolves against its root, so
/// bookmarking a routine version bookmarks the routine.
///
/// # Examples
///
/// ```
/// use huddle_core::domain::{DomainObject, Entity, ObjectKind};
/// use huddle_core::resolve::resolve_bookmark_target;
///
/// let tag = DomainObject::Tag(Entity::new("t1"));
/// let target = resolve_bookmark_target(Some(&tag));
/// assert_eq!(target.map(|t| t.kind), Some(ObjectKind::Tag));
/// ```
#[must_use]
pub fn resolve_bookmark_target(object: Option<&DomainObject>) -> Option<ObjectRef> {
    let obj = object?;
    if is_unbookmarkable_container(obj.kind()) {
        return None;
    }

    let target = obj.unwrap_target();
    if is_unbookmarkable_container(target.kind()) {
        return None;
    }

    let entity = target.entity()?;
    match entity.root.as_deref() {
        Some(root) => resolve_bookmark_target(Some(root)),
        None => Some(target.object_ref()),
    }
}

/// Kinds that collect other objects rather than being bookmarkable content.
const fn is_unbookmarkable_container(kind: ObjectKind) -> bool {
    matches!(
        kind,
        ObjectKind::BookmarkList | ObjectKind::Member | ObjectKind::RoutineListItem
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Entity, LinkWrapper, MemberWrapper, RunWrapper};

    #[test]
    fn absent_object_has_no_target() {
        assert!(resolve_bookmark_target(None).is_none());
    }

    #[test]
    fn membership_kinds_have_no_target() {
        let member = DomainObject::Member(MemberWrapper {
            id: "m1".to_string(),
            user: Some(Box::new(DomainObject::User(Entity::new("u1")))),
        });
        assert!(resolve_bookmark_target(Some(&member)).is_none());

        let list = DomainObject::BookmarkList(Entity::new("bl1"));
        assert!(resolve_bookmark_target(Some(&list)).is_none());
    }

    #[test]
    fn version_resolves_against_root() {
        let version = DomainObject::ProjectVersion(Entity {
            root: Some(Box::new(DomainObject::Project(Entity::new("p1")))),
            ..Entity::new("pv1")
        });
        let target = resolve_bookmark_target(Some(&version)).unwrap();
        assert_eq!(target, ObjectRef::new(ObjectKind::Project, "p1"));
    }

    #[test]
    fn run_wrapper_resolves_through_version_to_root() {
        let version = DomainObject::RoutineVersion(Entity {
            root: Some(Box::new(DomainObject::Routine(Entity::new("r1")))),
            ..Entity::new("rv1")
        });
        let run = DomainObject::RunRoutine(RunWrapper {
            id: "run1".to_string(),
            version: Some(Box::new(version)),
            ..RunWrapper::default()
        });
        let target = resolve_bookmark_target(Some(&run)).unwrap();
        assert_eq!(target, ObjectRef::new(ObjectKind::Routine, "r1"));
    }

    #[test]
    fn unfetched_wrapper_target_yields_none() {
        let bookmark = DomainObject::Bookmark(LinkWrapper {
            id: "b1".to_string(),
            target: None,
        });
        assert!(resolve_bookmark_target(Some(&bookmark)).is_none());
    }

    #[test]
    fn rootless_object_targets_itself() {
        let user = DomainObject::User(Entity::new("u1"));
        assert_eq!(
            resolve_bookmark_target(Some(&user)),
            Some(ObjectRef::new(ObjectKind::User, "u1"))
        );
    }
}
