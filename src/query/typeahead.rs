//! Typeahead projection of accumulated search results.
//!
//! Reuses the resolver stack so typeahead labels match what the full-detail
//! view would render for the same object.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use crate::domain::{DomainObject, ObjectKind};
use crate::resolve::{resolve_counts, resolve_display, resolve_permissions};

/// One typeahead row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeaheadEntry {
    pub kind: ObjectKind,
    pub id: String,
    pub label: String,
    pub bookmarked: bool,
    pub bookmark_count: u32,
}

/// Projects `items` into typeahead rows.
///
/// Rows are sorted by descending bookmark count, stable within equal counts.
/// A non-empty `filter` keeps only rows whose label fuzzy-matches it.
#[must_use]
pub fn typeahead(
    items: &[DomainObject],
    languages: &[String],
    filter: Option<&str>,
) -> Vec<TypeaheadEntry> {
    let matcher = SkimMatcherV2::default();
    let filter = filter.filter(|f| !f.is_empty());

    let mut entries: Vec<TypeaheadEntry> = items
        .iter()
        .map(|object| {
            let target = object.unwrap_target();
            let mut label = resolve_display(Some(object), languages).title;
            if label.is_empty() {
                label = target.id().to_string();
            }
            let perms = resolve_permissions(Some(object));
            let counts = resolve_counts(Some(object));
            TypeaheadEntry {
                kind: target.kind(),
                id: target.id().to_string(),
                label,
                bookmarked: perms.is_bookmarked,
                bookmark_count: counts.bookmarks,
            }
        })
        .filter(|entry| match filter {
            Some(query) => matcher.fuzzy_match(&entry.label, query).is_some(),
            None => true,
        })
        .collect();

    entries.sort_by(|a, b| b.bookmark_count.cmp(&a.bookmark_count));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CountFields, Entity, You};

    fn routine(id: &str, name: &str, bookmarks: u32) -> DomainObject {
        DomainObject::Routine(Entity {
            name: Some(name.to_string()),
            counts: CountFields {
                bookmarks: Some(bookmarks),
                ..CountFields::default()
            },
            ..Entity::new(id)
        })
    }

    #[test]
    fn rows_sort_by_descending_bookmark_count() {
        let items = vec![
            routine("a", "Alpha", 1),
            routine("b", "Beta", 9),
            routine("c", "Gamma", 4),
        ];
        let rows = typeahead(&items, &[], None);
        let ids: Vec<_> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn fuzzy_filter_matches_labels() {
        let items = vec![
            routine("a", "Morning Routine", 0),
            routine("b", "Evening Review", 0),
        ];
        let rows = typeahead(&items, &[], Some("mrn"));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "a");
    }

    #[test]
    fn wrapper_rows_project_the_target() {
        let mut entity = Entity::new("r1");
        entity.name = Some("Wrapped".to_string());
        entity.you = Some(You {
            is_bookmarked: Some(true),
            ..You::default()
        });
        let bookmark = DomainObject::Bookmark(crate::domain::LinkWrapper {
            id: "b1".to_string(),
            target: Some(Box::new(DomainObject::Routine(entity))),
        });

        let rows = typeahead(&[bookmark], &[], None);
        assert_eq!(rows[0].kind, ObjectKind::Routine);
        assert_eq!(rows[0].id, "r1");
        assert_eq!(rows[0].label, "Wrapped");
        assert!(rows[0].bookmarked);
    }

    #[test]
    fn unnamed_objects_fall_back_to_id_label() {
        let items = vec![DomainObject::Routine(Entity::new("r9"))];
        let rows = typeahead(&items, &[], None);
        assert_eq!(rows[0].label, "r9");
    }
}
