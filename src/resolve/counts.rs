//! Count resolution for domain objects.
//!
//! Same dispatch shape as permission resolution: unwrap wrapper kinds, read
//! each field from the object, fall back to its root, fall back to zero.

use crate::domain::{CountFields, DomainObject};

/// Fully resolved count fields for one object.
///
/// Every field is concrete; a count the server never sent resolves to zero.
/// `score` is signed because downvotes can push it negative.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Counts {
    pub comments: u32,
    pub forks: u32,
    pub issues: u32,
    pub labels: u32,
    pub pull_requests: u32,
    pub questions: u32,
    pub reports: u32,
    pub score: i64,
    pub bookmarks: u32,
    pub transfers: u32,
    pub translations: u32,
    pub versions: u32,
    pub views: u32,
}

/// Resolves counts for any object, absent objects included.
///
/// Wrapper kinds are transparent, exactly as in
/// [`resolve_permissions`](crate::resolve::resolve_permissions).
///
/// # Examples
///
/// ```
/// use huddle_core::resolve::resolve_counts;
///
/// assert_eq!(resolve_counts(None).bookmarks, 0);
/// ```
#[must_use]
pub fn resolve_counts(object: Option<&DomainObject>) -> Counts {
    let Some(entity) = object.and_then(DomainObject::entity) else {
        return Counts::default();
    };

    let own = &entity.counts;
    let root_counts = entity
        .root
        .as_deref()
        .and_then(DomainObject::entity)
        .map(|e| &e.counts);

    let pick = |field: fn(&CountFields) -> Option<u32>| {
        field(own)
            .or_else(|| root_counts.and_then(field))
            .unwrap_or(0)
    };

    Counts {
        comments: pick(|c| c.comments),
        forks: pick(|c| c.forks),
        issues: pick(|c| c.issues),
        labels: pick(|c| c.labels),
        pull_requests: pick(|c| c.pull_requests),
        questions: pick(|c| c.questions),
        reports: pick(|c| c.reports),
        score: own
            .score
            .or_else(|| root_counts.and_then(|c| c.score))
            .unwrap_or(0),
        bookmarks: pick(|c| c.bookmarks),
        transfers: pick(|c| c.transfers),
        translations: pick(|c| c.translations),
        versions: pick(|c| c.versions),
        views: pick(|c| c.views),
    }
}
