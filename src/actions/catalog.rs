//! Action catalog: which actions exist and which are currently available.
//!
//! The catalog owns the closed [`ActionKind`] enum and the availability
//! pipeline: per-kind support predicates, resolved permissions, authentication
//! gating, and an exclude list, all while preserving a fixed deterministic
//! ordering. Renderers rely on that ordering to split the first few actions
//! inline and collapse the rest into an overflow affordance.

use crate::boundary::SessionView;
use crate::domain::DomainObject;
use crate::resolve::resolve_permissions;

/// Number of leading actions renderers show inline; the remainder collapse
/// into an overflow affordance. Ordering from [`available_actions`] is
/// deterministic so this split is stable.
pub const INLINE_ACTION_LIMIT: usize = 4;

/// Every action a view can offer on a domain object.
///
/// `Bookmark`/`BookmarkUndo` and `VoteUp`/`VoteDown` are presented as one
/// slot each, alternating with current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Bookmark,
    BookmarkUndo,
    Comment,
    Delete,
    Donate,
    Edit,
    FindInPage,
    Fork,
    Report,
    Share,
    Stats,
    VoteDown,
    VoteUp,
}

impl ActionKind {
    /// Stable string form, used in notifications and log fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bookmark => "Bookmark",
            Self::BookmarkUndo => "BookmarkUndo",
            Self::Comment => "Comment",
            Self::Delete => "Delete",
            Self::Donate => "Donate",
            Self::Edit => "Edit",
            Self::FindInPage => "FindInPage",
            Self::Fork => "Fork",
            Self::Report => "Report",
            Self::Share => "Share",
            Self::Stats => "Stats",
            Self::VoteDown => "VoteDown",
            Self::VoteUp => "VoteUp",
        }
    }

    /// Whether the action is gated behind authentication.
    ///
    /// Only sharing and in-page search remain available to anonymous callers.
    #[must_use]
    pub const fn requires_auth(self) -> bool {
        !matches!(self, Self::Share | Self::FindInPage)
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Computes the actions currently available for an object and caller.
///
/// The result preserves the fixed ordering Edit, Vote, Bookmark, Comment,
/// Share, FindInPage, Fork, Report, Delete. The Vote slot alternates
/// `VoteUp`/`VoteDown` by the sign of the caller's current reaction, and the
/// Bookmark slot alternates `Bookmark`/`BookmarkUndo` by current bookmark
/// state. Anonymous callers keep at most Share and FindInPage.
///
/// # Parameters
///
/// * `object` - Object the actions would apply to; `None` yields no actions
/// * `session` - Caller session view for authentication gating
/// * `exclude` - Actions the hosting view renders elsewhere
#[must_use]
pub fn available_actions(
    object: Option<&DomainObject>,
    session: &dyn SessionView,
    exclude: &[ActionKind],
) -> Vec<ActionKind> {
    let Some(object) = object else {
        return Vec::new();
    };

    let kind = object.unwrap_target().kind();
    let perms = resolve_permissions(Some(object));

    let vote_slot = if reaction_score(perms.reaction.as_deref()) > 0 {
        ActionKind::VoteDown
    } else {
        ActionKind::VoteUp
    };
    let bookmark_slot = if perms.is_bookmarked {
        ActionKind::BookmarkUndo
    } else {
        ActionKind::Bookmark
    };

    let ordered = [
        ActionKind::Edit,
        vote_slot,
        bookmark_slot,
        ActionKind::Comment,
        ActionKind::Share,
        ActionKind::FindInPage,
        ActionKind::Fork,
        ActionKind::Report,
        ActionKind::Delete,
    ];

    let logged_in = session.is_logged_in();

    ordered
        .into_iter()
        .filter(|action| {
            let supported = match action {
                ActionKind::Edit => perms.can_update,
                ActionKind::VoteUp | ActionKind::VoteDown => {
                    kind.is_reactable() && perms.can_react
                }
                ActionKind::Bookmark | ActionKind::BookmarkUndo => {
                    kind.is_bookmarkable() && perms.can_bookmark
                }
                ActionKind::Comment => kind.is_commentable() && perms.can_comment,
                ActionKind::Share => perms.can_share,
                ActionKind::FindInPage => kind.has_find_in_page(),
                ActionKind::Fork => kind.is_copyable() && perms.can_copy,
                ActionKind::Report => kind.is_reportable() && perms.can_report,
                ActionKind::Delete => perms.can_delete,
                // Donate and Stats are dialog-only kinds, never listed here.
                ActionKind::Donate | ActionKind::Stats => false,
            };
            supported && (logged_in || !action.requires_auth()) && !exclude.contains(action)
        })
        .collect()
}

/// Splits an ordered action list into its inline and overflow halves.
#[must_use]
pub fn split_inline(actions: &[ActionKind]) -> (&[ActionKind], &[ActionKind]) {
    let split = actions.len().min(INLINE_ACTION_LIMIT);
    actions.split_at(split)
}

/// Signed weight of an emoji reaction.
///
/// Positive reactions score `1`, explicit negatives score `-1`, and a missing
/// reaction scores `0`. Vote completions derive their Up/Down kind from this
/// sign.
#[must_use]
pub fn reaction_score(emoji: Option<&str>) -> i64 {
    match emoji {
        None => 0,
        Some("\u{1F44E}") | Some("\u{1F620}") => -1, // 👎 😠
        Some(_) => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Entity, You};

    struct FakeSession {
        user: Option<&'static str>,
    }

    impl SessionView for FakeSession {
        fn user_id(&self) -> Option<String> {
            self.user.map(ToString::to_string)
        }

        fn bookmark_list_ids(&self) -> Vec<String> {
            Vec::new()
        }
    }

    fn full_permission_routine() -> DomainObject {
        DomainObject::Routine(Entity {
            you: Some(You {
                can_comment: Some(true),
                can_copy: Some(true),
                can_delete: Some(true),
                can_report: Some(true),
                can_share: Some(true),
                can_bookmark: Some(true),
                can_update: Some(true),
                can_react: Some(true),
                ..You::default()
            }),
            ..Entity::new("r1")
        })
    }

    #[test]
    fn full_permissions_preserve_fixed_ordering() {
        let obj = full_permission_routine();
        let session = FakeSession { user: Some("u1") };
        let actions = available_actions(Some(&obj), &session, &[]);
        assert_eq!(
            actions,
            vec![
                ActionKind::Edit,
                ActionKind::VoteUp,
                ActionKind::Bookmark,
                ActionKind::Comment,
                ActionKind::Share,
                ActionKind::FindInPage,
                ActionKind::Fork,
                ActionKind::Report,
                ActionKind::Delete,
            ]
        );
    }

    #[test]
    fn anonymous_caller_keeps_only_share_and_find() {
        let obj = full_permission_routine();
        let session = FakeSession { user: None };
        let actions = available_actions(Some(&obj), &session, &[]);
        assert!(actions
            .iter()
            .all(|a| matches!(a, ActionKind::Share | ActionKind::FindInPage)));
    }

    #[test]
    fn slots_alternate_with_current_state() {
        let mut entity = Entity::new("r1");
        entity.you = Some(You {
            can_bookmark: Some(true),
            can_react: Some(true),
            is_bookmarked: Some(true),
            reaction: Some("\u{1F44D}".to_string()),
            ..You::default()
        });
        let obj = DomainObject::Routine(entity);
        let session = FakeSession { user: Some("u1") };
        let actions = available_actions(Some(&obj), &session, &[]);
        assert!(actions.contains(&ActionKind::BookmarkUndo));
        assert!(actions.contains(&ActionKind::VoteDown));
        assert!(!actions.contains(&ActionKind::Bookmark));
        assert!(!actions.contains(&ActionKind::VoteUp));
    }

    #[test]
    fn exclude_list_is_honored() {
        let obj = full_permission_routine();
        let session = FakeSession { user: Some("u1") };
        let actions =
            available_actions(Some(&obj), &session, &[ActionKind::Delete, ActionKind::Edit]);
        assert!(!actions.contains(&ActionKind::Delete));
        assert!(!actions.contains(&ActionKind::Edit));
    }

    #[test]
    fn inline_split_is_stable() {
        let obj = full_permission_routine();
        let session = FakeSession { user: Some("u1") };
        let actions = available_actions(Some(&obj), &session, &[]);
        let (inline, overflow) = split_inline(&actions);
        assert_eq!(inline.len(), INLINE_ACTION_LIMIT);
        assert_eq!(inline[0], ActionKind::Edit);
        assert_eq!(overflow.first(), Some(&ActionKind::Share));
    }

    #[test]
    fn clearing_reaction_scores_zero() {
        assert_eq!(reaction_score(None), 0);
        assert_eq!(reaction_score(Some("\u{1F44E}")), -1);
        assert_eq!(reaction_score(Some("\u{1F44D}")), 1);
    }
}
