//! Display resolution: title and subtitle derivation for any object.
//!
//! Turning ~30 heterogeneous kinds into a uniform `{title, subtitle}` pair is
//! a candidate-chain walk:
//!
//! 1. the object itself,
//! 2. its root,
//! 3. its version flagged latest,
//! 4. remaining versions in descending version-index order,
//!
//! stopping as soon as both a non-empty title and a non-empty subtitle have
//! been found. Per candidate, the title comes from the explicit name field,
//! else the translation matching the caller's preferred language (exact match
//! first, else the first available), else the handle prefixed with `$`. The
//! subtitle walks the translation's `bio`, `description`, `summary`,
//! `details`, `text` fields in that order.
//!
//! Run wrappers are special: their subtitle is synthesized from start and
//! completion timestamps rather than translations.

use crate::domain::{DomainObject, Entity, RunWrapper, Translation};

/// Resolved display strings for one object.
///
/// Either field may be empty when no candidate could supply it; they are never
/// absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Display {
    pub title: String,
    pub subtitle: String,
}

/// Resolves `{title, subtitle}` for any object, absent objects included.
///
/// `languages` lists the caller's preferred languages in priority order.
///
/// # Examples
///
/// ```
/// use huddle_core::domain::{DomainObject, Entity};
/// use huddle_core::resolve::resolve_display;
///
/// let user = DomainObject::User(Entity {
///     handle: Some("ada".to_string()),
///     ..Entity::new("u1")
/// });
/// let display = resolve_display(Some(&user), &["en".to_string()]);
/// assert_eq!(display.title, "$ada");
/// ```
#[must_use]
pub fn resolve_display(object: Option<&DomainObject>, languages: &[String]) -> Display {
    let Some(obj) = object else {
        return Display::default();
    };

    // Unwrap one level at a time: a run anywhere along the indirection chain
    // (including behind a bookmark or view wrapper) routes through run_display
    // instead of falling through to its version's entity.
    let mut target = obj;
    loop {
        if let DomainObject::RunRoutine(run) | DomainObject::RunProject(run) = target {
            return run_display(run, languages);
        }
        match target.wrapped_target() {
            Some(next) => target = next,
            None => break,
        }
    }

    let Some(entity) = target.entity() else {
        return Display::default();
    };

    let mut title = String::new();
    let mut subtitle = String::new();
    for candidate in candidates(entity) {
        if title.is_empty() {
            title = candidate_title(candidate, languages);
        }
        if subtitle.is_empty() {
            subtitle = candidate_subtitle(candidate, languages);
        }
        if !title.is_empty() && !subtitle.is_empty() {
            break;
        }
    }

    Display { title, subtitle }
}

/// Builds the candidate chain for one entity.
///
/// Versions come from the entity itself when present, else from its root, so
/// both a root object and one of its versions walk the same chain.
fn candidates(entity: &Entity) -> Vec<&Entity> {
    let mut chain = vec![entity];

    let root = entity.root.as_deref().and_then(DomainObject::entity);
    if let Some(root) = root {
        chain.push(root);
    }

    let versions: Vec<&Entity> = if entity.versions.is_empty() {
        root.map_or_else(Vec::new, |r| {
            r.versions.iter().filter_map(DomainObject::entity).collect()
        })
    } else {
        entity
            .versions
            .iter()
            .filter_map(DomainObject::entity)
            .collect()
    };

    let mut rest: Vec<&Entity> = Vec::new();
    for version in versions {
        if version.is_latest.unwrap_or(false) {
            chain.push(version);
        } else {
            rest.push(version);
        }
    }
    rest.sort_by_key(|v| std::cmp::Reverse(v.version_index.unwrap_or(i32::MIN)));
    chain.extend(rest);

    chain
}

/// Picks the translation matching the caller's language preferences.
///
/// Exact language-tag match in preference order wins; otherwise the first
/// available translation is used.
fn best_translation<'a>(
    translations: &'a [Translation],
    languages: &[String],
) -> Option<&'a Translation> {
    languages
        .iter()
        .find_map(|lang| translations.iter().find(|t| &t.language == lang))
        .or_else(|| translations.first())
}

fn candidate_title(entity: &Entity, languages: &[String]) -> String {
    if let Some(name) = entity.name.as_deref().filter(|n| !n.is_empty()) {
        return name.to_string();
    }
    if let Some(name) = best_translation(&entity.translations, languages)
        .and_then(|t| t.name.as_deref())
        .filter(|n| !n.is_empty())
    {
        return name.to_string();
    }
    entity
        .handle
        .as_deref()
        .filter(|h| !h.is_empty())
        .map_or_else(String::new, |h| format!("${h}"))
}

fn candidate_subtitle(entity: &Entity, languages: &[String]) -> String {
    let Some(translation) = best_translation(&entity.translations, languages) else {
        return String::new();
    };
    [
        translation.bio.as_deref(),
        translation.description.as_deref(),
        translation.summary.as_deref(),
        translation.details.as_deref(),
        translation.text.as_deref(),
    ]
    .into_iter()
    .flatten()
    .find(|s| !s.is_empty())
    .map_or_else(String::new, ToString::to_string)
}

/// Display for run wrappers: the run's own name (else the wrapped version's
/// title) plus a subtitle synthesized from timestamps.
fn run_display(run: &RunWrapper, languages: &[String]) -> Display {
    let inner = resolve_display(run.version.as_deref(), languages);
    let title = run
        .name
        .clone()
        .filter(|n| !n.is_empty())
        .unwrap_or(inner.title);

    let subtitle = if let Some(completed) = run.completed_at {
        format!("Completed {}", completed.format("%Y-%m-%d %H:%M"))
    } else if let Some(started) = run.started_at {
        format!("Started {}", started.format("%Y-%m-%d %H:%M"))
    } else {
        String::new()
    };

    Display { title, subtitle }
}

/// Selects which tag chips fit within a character budget.
///
/// A tag renders when its length fits the remaining budget (`len <= remaining`,
/// so the budget may be exhausted exactly). An oversized tag is skipped and
/// counted as cut off, but the scan continues so a later shorter tag may still
/// fit.
///
/// # Returns
///
/// The visible tags in original order and the number cut off.
///
/// # Examples
///
/// ```
/// use huddle_core::resolve::visible_tags;
///
/// let tags = vec!["abcdef".to_string(), "ghij".to_string()];
/// let (shown, cut) = visible_tags(&tags, 10);
/// assert_eq!(shown, vec!["abcdef", "ghij"]);
/// assert_eq!(cut, 0);
/// ```
#[must_use]
pub fn visible_tags(tags: &[String], budget: usize) -> (Vec<&str>, usize) {
    let mut remaining = budget;
    let mut shown = Vec::new();
    let mut cut_off = 0;

    for tag in tags {
        let len = tag.chars().count();
        if len <= remaining {
            shown.push(tag.as_str());
            remaining -= len;
        } else {
            cut_off += 1;
        }
    }

    (shown, cut_off)
}
