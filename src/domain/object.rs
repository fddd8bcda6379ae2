//! Domain object model: the closed union of displayable object kinds.
//!
//! This module defines [`DomainObject`], the tagged union covering every object
//! kind the application can display, act on, or search. Most kinds share the
//! common [`Entity`] payload (caller-relative `you` state, a `root`
//! back-reference, per-language translations, count fields). A handful of
//! wrapper kinds carry their own payload holding the wrapped target instead;
//! resolvers unwrap those through [`DomainObject::unwrap_target`] before any
//! permission, count, or display logic applies.
//!
//! # Wrapper indirection
//!
//! Wrapper kinds and their target fields:
//!
//! - `Bookmark` / `View` / `Vote` → `target`
//! - `RunRoutine` / `RunProject` → `version`
//! - `Member` → `user`
//! - `RoutineListItem` → `routine_version`
//!
//! Indirection depth is at most two (a run wraps a version which carries a
//! root) and reference chains are never cyclic, so the unwrap chain always
//! terminates.
//!
//! # Adding a kind
//!
//! Adding a variant to [`DomainObject`] is a compile-time-enforced single-site
//! change: the exhaustive matches in [`DomainObject::kind`],
//! [`DomainObject::entity`] and the wrapper arms of the unwrap helpers are the
//! only dispatch sites in the crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Discriminant for every object kind in the closed union.
///
/// Used wherever a kind must travel without its payload: bookmark targets,
/// mutation descriptors, capability checks, and deep links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    Api,
    ApiVersion,
    Bookmark,
    BookmarkList,
    Comment,
    Issue,
    Label,
    Meeting,
    Member,
    Note,
    NoteVersion,
    Organization,
    Post,
    Project,
    ProjectVersion,
    PullRequest,
    Question,
    QuestionAnswer,
    Quiz,
    Reminder,
    Report,
    Resource,
    Routine,
    RoutineVersion,
    RoutineListItem,
    RunProject,
    RunRoutine,
    SmartContract,
    SmartContractVersion,
    Standard,
    StandardVersion,
    Tag,
    Transfer,
    User,
    View,
    Vote,
}

impl ObjectKind {
    /// Stable string form of the kind, used in deep links and log fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Api => "Api",
            Self::ApiVersion => "ApiVersion",
            Self::Bookmark => "Bookmark",
            Self::BookmarkList => "BookmarkList",
            Self::Comment => "Comment",
            Self::Issue => "Issue",
            Self::Label => "Label",
            Self::Meeting => "Meeting",
            Self::Member => "Member",
            Self::Note => "Note",
            Self::NoteVersion => "NoteVersion",
            Self::Organization => "Organization",
            Self::Post => "Post",
            Self::Project => "Project",
            Self::ProjectVersion => "ProjectVersion",
            Self::PullRequest => "PullRequest",
            Self::Question => "Question",
            Self::QuestionAnswer => "QuestionAnswer",
            Self::Quiz => "Quiz",
            Self::Reminder => "Reminder",
            Self::Report => "Report",
            Self::Resource => "Resource",
            Self::Routine => "Routine",
            Self::RoutineVersion => "RoutineVersion",
            Self::RoutineListItem => "RoutineListItem",
            Self::RunProject => "RunProject",
            Self::RunRoutine => "RunRoutine",
            Self::SmartContract => "SmartContract",
            Self::SmartContractVersion => "SmartContractVersion",
            Self::Standard => "Standard",
            Self::StandardVersion => "StandardVersion",
            Self::Tag => "Tag",
            Self::Transfer => "Transfer",
            Self::User => "User",
            Self::View => "View",
            Self::Vote => "Vote",
        }
    }

    /// Whether this kind is a transient wrapper around another object.
    ///
    /// Wrapper kinds must be unwrapped before permissions, counts, or display
    /// resolution apply.
    #[must_use]
    pub const fn is_wrapper(self) -> bool {
        matches!(
            self,
            Self::Bookmark
                | Self::View
                | Self::Vote
                | Self::RunProject
                | Self::RunRoutine
                | Self::Member
                | Self::RoutineListItem
        )
    }

    /// Kinds that can be bookmarked by a caller.
    ///
    /// Version kinds are included because detail views operate on versions;
    /// target resolution redirects them to their root where one is attached.
    #[must_use]
    pub const fn is_bookmarkable(self) -> bool {
        matches!(
            self,
            Self::Api
                | Self::ApiVersion
                | Self::Comment
                | Self::Issue
                | Self::Meeting
                | Self::Note
                | Self::NoteVersion
                | Self::Organization
                | Self::Post
                | Self::Project
                | Self::ProjectVersion
                | Self::Question
                | Self::QuestionAnswer
                | Self::Quiz
                | Self::Routine
                | Self::RoutineVersion
                | Self::SmartContract
                | Self::SmartContractVersion
                | Self::Standard
                | Self::StandardVersion
                | Self::Tag
                | Self::User
        )
    }

    /// Kinds that accept emoji reactions (votes).
    #[must_use]
    pub const fn is_reactable(self) -> bool {
        matches!(
            self,
            Self::Api
                | Self::ApiVersion
                | Self::Comment
                | Self::Issue
                | Self::Note
                | Self::NoteVersion
                | Self::Post
                | Self::Project
                | Self::ProjectVersion
                | Self::Question
                | Self::QuestionAnswer
                | Self::Quiz
                | Self::Routine
                | Self::RoutineVersion
                | Self::SmartContract
                | Self::SmartContractVersion
                | Self::Standard
                | Self::StandardVersion
        )
    }

    /// Kinds that can be forked into a caller-owned copy.
    #[must_use]
    pub const fn is_copyable(self) -> bool {
        matches!(
            self,
            Self::Api
                | Self::ApiVersion
                | Self::Note
                | Self::NoteVersion
                | Self::Project
                | Self::ProjectVersion
                | Self::Routine
                | Self::RoutineVersion
                | Self::SmartContract
                | Self::SmartContractVersion
                | Self::Standard
                | Self::StandardVersion
        )
    }

    /// Kinds that host comment threads.
    #[must_use]
    pub const fn is_commentable(self) -> bool {
        matches!(
            self,
            Self::Api
                | Self::ApiVersion
                | Self::Issue
                | Self::Note
                | Self::NoteVersion
                | Self::Post
                | Self::Project
                | Self::ProjectVersion
                | Self::PullRequest
                | Self::Question
                | Self::QuestionAnswer
                | Self::Routine
                | Self::RoutineVersion
                | Self::SmartContract
                | Self::SmartContractVersion
                | Self::Standard
                | Self::StandardVersion
        )
    }

    /// Kinds that can be reported for moderation.
    #[must_use]
    pub const fn is_reportable(self) -> bool {
        matches!(
            self,
            Self::Api
                | Self::Comment
                | Self::Issue
                | Self::Note
                | Self::Organization
                | Self::Post
                | Self::Project
                | Self::Question
                | Self::QuestionAnswer
                | Self::Quiz
                | Self::Routine
                | Self::SmartContract
                | Self::Standard
                | Self::Tag
                | Self::User
        )
    }

    /// Kinds whose detail view offers a statistics dialog.
    ///
    /// Kept as its own hardcoded list rather than derived from the other
    /// capability sets; it sits here so a future merge is a one-site change.
    #[must_use]
    pub const fn has_stats(self) -> bool {
        matches!(
            self,
            Self::Api
                | Self::Organization
                | Self::Project
                | Self::Quiz
                | Self::Routine
                | Self::SmartContract
                | Self::Standard
                | Self::User
        )
    }

    /// Kinds whose detail view is long enough to offer in-page search.
    #[must_use]
    pub const fn has_find_in_page(self) -> bool {
        matches!(
            self,
            Self::Api
                | Self::Note
                | Self::Organization
                | Self::Project
                | Self::Question
                | Self::Routine
                | Self::SmartContract
                | Self::Standard
                | Self::User
        )
    }
}

impl std::fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A kind + id pair referencing an object without carrying its payload.
///
/// Used as the bookmark/mutation target and in typeahead projections.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectRef {
    /// Kind of the referenced object.
    pub kind: ObjectKind,
    /// Server-side identifier of the referenced object.
    pub id: String,
}

impl ObjectRef {
    /// Creates a reference from a kind and id.
    pub fn new(kind: ObjectKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }
}

impl std::fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}

/// Caller-relative state attached to a fetched object.
///
/// Every field is optional because the server only sends the keys the query
/// selected. Resolution fills the gaps with documented defaults; see
/// [`crate::resolve::resolve_permissions`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct You {
    pub can_comment: Option<bool>,
    pub can_copy: Option<bool>,
    pub can_delete: Option<bool>,
    pub can_read: Option<bool>,
    pub can_report: Option<bool>,
    pub can_share: Option<bool>,
    pub can_bookmark: Option<bool>,
    pub can_update: Option<bool>,
    pub can_react: Option<bool>,
    pub is_bookmarked: Option<bool>,
    pub is_viewed: Option<bool>,
    /// Emoji the caller currently has on the object, if any.
    pub reaction: Option<String>,
}

/// Per-language text variant of an object.
///
/// Which text fields are populated depends on the kind; title resolution reads
/// `name`, subtitle resolution tries `bio`, `description`, `summary`,
/// `details`, then `text`, in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Translation {
    /// IETF language tag this variant is written in.
    pub language: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub description: Option<String>,
    pub summary: Option<String>,
    pub details: Option<String>,
    pub text: Option<String>,
}

/// Raw count fields as fetched from the server.
///
/// All optional; [`crate::resolve::resolve_counts`] substitutes zero for any
/// missing field and falls back to the object's root where present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountFields {
    pub comments: Option<u32>,
    pub forks: Option<u32>,
    pub issues: Option<u32>,
    pub labels: Option<u32>,
    pub pull_requests: Option<u32>,
    pub questions: Option<u32>,
    pub reports: Option<u32>,
    pub score: Option<i64>,
    pub bookmarks: Option<u32>,
    pub transfers: Option<u32>,
    pub translations: Option<u32>,
    pub versions: Option<u32>,
    pub views: Option<u32>,
}

/// Shared payload carried by every non-wrapper object kind.
///
/// Versioned kinds (Api, Note, Project, Routine, SmartContract, Standard and
/// their `*Version` counterparts) additionally populate `is_latest`,
/// `version_index`, `versions`, and `root`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Entity {
    /// Server-side identifier.
    pub id: String,

    /// URL handle, displayed with a `$` prefix when no other title exists.
    pub handle: Option<String>,

    /// Explicit title/name/label field, when the kind has one.
    pub name: Option<String>,

    /// Caller-relative state, absent when fetched anonymously or partially.
    pub you: Option<You>,

    /// Back-reference to the parent or version-root object.
    pub root: Option<Box<DomainObject>>,

    /// Per-language text variants.
    pub translations: Vec<Translation>,

    /// Raw count fields.
    pub counts: CountFields,

    /// Whether this version is flagged as the latest one.
    pub is_latest: Option<bool>,

    /// Monotonic version ordinal within the root's version list.
    pub version_index: Option<i32>,

    /// Versions of this object, for versioned root kinds.
    pub versions: Vec<DomainObject>,

    /// Tag labels attached to the object.
    pub tags: Vec<String>,
}

impl Entity {
    /// Creates a minimal entity with the given id and everything else empty.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

/// Payload for the `Bookmark`, `View`, and `Vote` wrapper kinds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkWrapper {
    /// Identifier of the wrapper record itself.
    pub id: String,
    /// The wrapped object, absent when the query did not select it.
    pub target: Option<Box<DomainObject>>,
}

/// Payload for the `RunRoutine` and `RunProject` wrapper kinds.
///
/// Runs carry their own display name and start/completion timestamps; the
/// subtitle is synthesized from those rather than from translations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunWrapper {
    /// Identifier of the run record itself.
    pub id: String,
    /// User-assigned run name, when present.
    pub name: Option<String>,
    /// When the run was started.
    pub started_at: Option<DateTime<Utc>>,
    /// When the run completed, if it has.
    pub completed_at: Option<DateTime<Utc>>,
    /// The routine or project version being run.
    pub version: Option<Box<DomainObject>>,
}

/// Payload for the `Member` wrapper kind (organization membership).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemberWrapper {
    /// Identifier of the membership record itself.
    pub id: String,
    /// The member's user object.
    pub user: Option<Box<DomainObject>>,
}

/// Payload for the `RoutineListItem` wrapper kind (a routine inside a list
/// node of another routine's graph).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListItemWrapper {
    /// Identifier of the list item itself.
    pub id: String,
    /// The routine version the item points at.
    pub routine_version: Option<Box<DomainObject>>,
}

/// Closed union over every object kind the application handles.
///
/// Serialized with an internal `kind` tag so wire payloads stay readable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum DomainObject {
    Api(Entity),
    ApiVersion(Entity),
    Bookmark(LinkWrapper),
    BookmarkList(Entity),
    Comment(Entity),
    Issue(Entity),
    Label(Entity),
    Meeting(Entity),
    Member(MemberWrapper),
    Note(Entity),
    NoteVersion(Entity),
    Organization(Entity),
    Post(Entity),
    Project(Entity),
    ProjectVersion(Entity),
    PullRequest(Entity),
    Question(Entity),
    QuestionAnswer(Entity),
    Quiz(Entity),
    Reminder(Entity),
    Report(Entity),
    Resource(Entity),
    Routine(Entity),
    RoutineVersion(Entity),
    RoutineListItem(ListItemWrapper),
    RunProject(RunWrapper),
    RunRoutine(RunWrapper),
    SmartContract(Entity),
    SmartContractVersion(Entity),
    Standard(Entity),
    StandardVersion(Entity),
    Tag(Entity),
    Transfer(Entity),
    User(Entity),
    View(LinkWrapper),
    Vote(LinkWrapper),
}

impl DomainObject {
    /// Returns the kind discriminant for this object.
    #[must_use]
    pub const fn kind(&self) -> ObjectKind {
        match self {
            Self::Api(_) => ObjectKind::Api,
            Self::ApiVersion(_) => ObjectKind::ApiVersion,
            Self::Bookmark(_) => ObjectKind::Bookmark,
            Self::BookmarkList(_) => ObjectKind::BookmarkList,
            Self::Comment(_) => ObjectKind::Comment,
            Self::Issue(_) => ObjectKind::Issue,
            Self::Label(_) => ObjectKind::Label,
            Self::Meeting(_) => ObjectKind::Meeting,
            Self::Member(_) => ObjectKind::Member,
            Self::Note(_) => ObjectKind::Note,
            Self::NoteVersion(_) => ObjectKind::NoteVersion,
            Self::Organization(_) => ObjectKind::Organization,
            Self::Post(_) => ObjectKind::Post,
            Self::Project(_) => ObjectKind::Project,
            Self::ProjectVersion(_) => ObjectKind::ProjectVersion,
            Self::PullRequest(_) => ObjectKind::PullRequest,
            Self::Question(_) => ObjectKind::Question,
            Self::QuestionAnswer(_) => ObjectKind::QuestionAnswer,
            Self::Quiz(_) => ObjectKind::Quiz,
            Self::Reminder(_) => ObjectKind::Reminder,
            Self::Report(_) => ObjectKind::Report,
            Self::Resource(_) => ObjectKind::Resource,
            Self::Routine(_) => ObjectKind::Routine,
            Self::RoutineVersion(_) => ObjectKind::RoutineVersion,
            Self::RoutineListItem(_) => ObjectKind::RoutineListItem,
            Self::RunProject(_) => ObjectKind::RunProject,
            Self::RunRoutine(_) => ObjectKind::RunRoutine,
            Self::SmartContract(_) => ObjectKind::SmartContract,
            Self::SmartContractVersion(_) => ObjectKind::SmartContractVersion,
            Self::Standard(_) => ObjectKind::Standard,
            Self::StandardVersion(_) => ObjectKind::StandardVersion,
            Self::Tag(_) => ObjectKind::Tag,
            Self::Transfer(_) => ObjectKind::Transfer,
            Self::User(_) => ObjectKind::User,
            Self::View(_) => ObjectKind::View,
            Self::Vote(_) => ObjectKind::Vote,
        }
    }

    /// Returns the object's own identifier (the wrapper's id for wrapper
    /// kinds, not the wrapped target's).
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Bookmark(w) | Self::View(w) | Self::Vote(w) => &w.id,
            Self::RunProject(r) | Self::RunRoutine(r) => &r.id,
            Self::Member(m) => &m.id,
            Self::RoutineListItem(l) => &l.id,
            other => other.entity().map_or("", |e| e.id.as_str()),
        }
    }

    /// Returns a kind + id reference to this object.
    #[must_use]
    pub fn object_ref(&self) -> ObjectRef {
        ObjectRef::new(self.kind(), self.id())
    }

    /// One unwrap step: the directly wrapped target of a wrapper kind.
    ///
    /// `None` for non-wrapper kinds and for wrappers whose target was not
    /// fetched. Callers that need to inspect each level of an indirection
    /// chain (display resolution treats run wrappers specially at any depth)
    /// step through this; everyone else uses [`Self::unwrap_target`].
    #[must_use]
    pub fn wrapped_target(&self) -> Option<&Self> {
        match self {
            Self::Bookmark(w) | Self::View(w) | Self::Vote(w) => w.target.as_deref(),
            Self::RunProject(r) | Self::RunRoutine(r) => r.version.as_deref(),
            Self::Member(m) => m.user.as_deref(),
            Self::RoutineListItem(l) => l.routine_version.as_deref(),
            _ => None,
        }
    }

    /// Follows wrapper indirection to the object resolution applies to.
    ///
    /// Returns the wrapped target for wrapper kinds, recursing until a
    /// non-wrapper kind (or a wrapper with no fetched target) is reached.
    /// Depth is bounded by the data model, so recursion terminates.
    #[must_use]
    pub fn unwrap_target(&self) -> &Self {
        self.wrapped_target().map_or(self, Self::unwrap_target)
    }

    /// Returns the shared entity payload, unwrapping wrapper kinds first.
    ///
    /// `None` only when a wrapper's target was not fetched; resolvers treat
    /// that the same as a missing object and fall back to defaults.
    #[must_use]
    pub fn entity(&self) -> Option<&Entity> {
        match self.unwrap_target() {
            Self::Api(e)
            | Self::ApiVersion(e)
            | Self::BookmarkList(e)
            | Self::Comment(e)
            | Self::Issue(e)
            | Self::Label(e)
            | Self::Meeting(e)
            | Self::Note(e)
            | Self::NoteVersion(e)
            | Self::Organization(e)
            | Self::Post(e)
            | Self::Project(e)
            | Self::ProjectVersion(e)
            | Self::PullRequest(e)
            | Self::Question(e)
            | Self::QuestionAnswer(e)
            | Self::Quiz(e)
            | Self::Reminder(e)
            | Self::Report(e)
            | Self::Resource(e)
            | Self::Routine(e)
            | Self::RoutineVersion(e)
            | Self::SmartContract(e)
            | Self::SmartContractVersion(e)
            | Self::Standard(e)
            | Self::StandardVersion(e)
            | Self::Tag(e)
            | Self::Transfer(e)
            | Self::User(e) => Some(e),
            _ => None,
        }
    }

    /// Mutable access to the caller-relative block of the resolution target.
    ///
    /// This is the typed accessor optimistic patches go through: it follows
    /// the same wrapper chain as [`Self::unwrap_target`], so a patch on a run
    /// wrapper lands on the nested version object, never on the wrapper. The
    /// block is created empty if the server never sent one. Returns `None`
    /// when a wrapper's target is missing, in which case there is nothing
    /// valid to patch.
    pub fn you_mut(&mut self) -> Option<&mut You> {
        match self {
            Self::Bookmark(w) | Self::View(w) | Self::Vote(w) => {
                w.target.as_deref_mut().and_then(Self::you_mut)
            }
            Self::RunProject(r) | Self::RunRoutine(r) => {
                r.version.as_deref_mut().and_then(Self::you_mut)
            }
            Self::Member(m) => m.user.as_deref_mut().and_then(Self::you_mut),
            Self::RoutineListItem(l) => l.routine_version.as_deref_mut().and_then(Self::you_mut),
            Self::Api(e)
            | Self::ApiVersion(e)
            | Self::BookmarkList(e)
            | Self::Comment(e)
            | Self::Issue(e)
            | Self::Label(e)
            | Self::Meeting(e)
            | Self::Note(e)
            | Self::NoteVersion(e)
            | Self::Organization(e)
            | Self::Post(e)
            | Self::Project(e)
            | Self::ProjectVersion(e)
            | Self::PullRequest(e)
            | Self::Question(e)
            | Self::QuestionAnswer(e)
            | Self::Quiz(e)
            | Self::Reminder(e)
            | Self::Report(e)
            | Self::Resource(e)
            | Self::Routine(e)
            | Self::RoutineVersion(e)
            | Self::SmartContract(e)
            | Self::SmartContractVersion(e)
            | Self::Standard(e)
            | Self::StandardVersion(e)
            | Self::Tag(e)
            | Self::Transfer(e)
            | Self::User(e) => Some(e.you.get_or_insert_with(You::default)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn routine(id: &str) -> DomainObject {
        DomainObject::Routine(Entity::new(id))
    }

    #[test]
    fn unwrap_passes_through_non_wrappers() {
        let obj = routine("r1");
        assert_eq!(obj.unwrap_target().id(), "r1");
    }

    #[test]
    fn unwrap_follows_two_levels() {
        let version = DomainObject::RoutineVersion(Entity::new("rv1"));
        let run = DomainObject::RunRoutine(RunWrapper {
            id: "run1".to_string(),
            version: Some(Box::new(version)),
            ..RunWrapper::default()
        });
        let bookmark = DomainObject::Bookmark(LinkWrapper {
            id: "b1".to_string(),
            target: Some(Box::new(run)),
        });
        assert_eq!(bookmark.unwrap_target().kind(), ObjectKind::RoutineVersion);
        assert_eq!(bookmark.unwrap_target().id(), "rv1");
    }

    #[test]
    fn unwrap_stops_at_missing_target() {
        let bookmark = DomainObject::Bookmark(LinkWrapper {
            id: "b1".to_string(),
            target: None,
        });
        assert_eq!(bookmark.unwrap_target().kind(), ObjectKind::Bookmark);
        assert!(bookmark.entity().is_none());
    }

    #[test]
    fn you_mut_creates_block_on_target() {
        let mut run = DomainObject::RunRoutine(RunWrapper {
            id: "run1".to_string(),
            version: Some(Box::new(DomainObject::RoutineVersion(Entity::new("rv1")))),
            ..RunWrapper::default()
        });
        if let Some(you) = run.you_mut() {
            you.is_bookmarked = Some(true);
        }

        let DomainObject::RunRoutine(wrapper) = &run else {
            panic!("kind changed");
        };
        let Some(version) = wrapper.version.as_deref() else {
            panic!("version dropped");
        };
        let Some(entity) = version.entity() else {
            panic!("entity missing");
        };
        assert_eq!(
            entity.you.as_ref().and_then(|y| y.is_bookmarked),
            Some(true)
        );
    }

    #[test]
    fn serde_round_trips_kind_tag() {
        let obj = routine("r1");
        let json = serde_json::to_string(&obj).unwrap();
        assert!(json.contains("\"kind\":\"Routine\""));
        let back: DomainObject = serde_json::from_str(&json).unwrap();
        assert_eq!(back, obj);
    }
}
