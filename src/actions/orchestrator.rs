//! Press-to-completion orchestration.
//!
//! The orchestrator owns the displayed object, the open/closed state of every
//! action dialog, and the in-flight bookkeeping that makes action presses
//! idempotent. A press is handled synchronously and yields a [`PressOutcome`]:
//! either an immediate effect (dialog opened, navigation requested) or a
//! [`MutationJob`] the host drives through [`ActionOrchestrator::run`].
//!
//! Jobs carry the generation of the object they were created against. When a
//! job resolves after the displayed object has been swapped, its completion
//! is discarded instead of patching the wrong object.

use std::collections::HashSet;

use tracing::Instrument;

use crate::actions::execute::{bookmark, delete, fork, report, vote, ExecutorContext};
use crate::actions::{ActionCompletion, ActionKind, DeleteConfirmation};
use crate::boundary::Notification;
use crate::domain::{CoreError, DomainObject, ObjectRef, Result};
use crate::resolve::{resolve_bookmark_target, resolve_display, resolve_permissions};

const THUMBS_UP: &str = "\u{1F44D}";
const THUMBS_DOWN: &str = "\u{1F44E}";

/// Navigation the host should perform after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Leave the object view entirely, used after deletion.
    Home,
    /// Open the edit surface for an object.
    Edit(ObjectRef),
    /// Open another object's view, used after forking.
    Object(ObjectRef),
}

/// Open/closed state of every action dialog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DialogState {
    pub delete: bool,
    pub report: bool,
    pub share: bool,
    pub comment: bool,
    pub stats: bool,
}

/// A deferred mutation produced by a press.
///
/// `generation` pins the job to the object it was created against.
#[derive(Debug, Clone, PartialEq)]
pub struct MutationJob {
    pub kind: ActionKind,
    generation: u64,
    request: MutationRequest,
}

#[derive(Debug, Clone, PartialEq)]
enum MutationRequest {
    BookmarkAdd { target: ObjectRef },
    BookmarkRemove { target: ObjectRef },
    React { target: ObjectRef, emoji: Option<String> },
    Fork { target: ObjectRef },
    Delete { target: ObjectRef },
    Report { target: ObjectRef, reason: String, details: Option<String> },
}

/// Immediate result of an action press.
#[derive(Debug, Clone, PartialEq)]
pub enum PressOutcome {
    /// A dialog opened; the host re-renders from [`ActionOrchestrator::dialogs`].
    DialogOpened(ActionKind),
    /// A mutation is due; drive it through [`ActionOrchestrator::run`].
    Job(MutationJob),
    /// Navigate without any mutation.
    Navigate(Navigation),
    /// The host should open its in-page search affordance.
    OpenFindInPage,
    /// Nothing happened. Any required notification was already published.
    Ignored,
}

/// Owns the displayed object and routes action presses.
#[derive(Debug, Default)]
pub struct ActionOrchestrator {
    object: Option<DomainObject>,
    languages: Vec<String>,
    dialogs: DialogState,
    delete_confirmation: Option<DeleteConfirmation>,
    in_flight: HashSet<ActionKind>,
    generation: u64,
}

impl ActionOrchestrator {
    pub fn new(languages: Vec<String>) -> Self {
        Self {
            languages,
            ..Self::default()
        }
    }

    /// Replaces the displayed object.
    ///
    /// Bumps the generation so completions from jobs created against the
    /// previous object are discarded, and resets all dialog state.
    pub fn set_object(&mut self, object: Option<DomainObject>) {
        self.object = object;
        self.generation += 1;
        self.dialogs = DialogState::default();
        self.delete_confirmation = None;
        self.in_flight.clear();
    }

    #[must_use]
    pub fn object(&self) -> Option<&DomainObject> {
        self.object.as_ref()
    }

    #[must_use]
    pub fn dialogs(&self) -> DialogState {
        self.dialogs
    }

    #[must_use]
    pub fn delete_confirmation(&self) -> Option<&DeleteConfirmation> {
        self.delete_confirmation.as_ref()
    }

    pub fn set_delete_typed(&mut self, typed: impl Into<String>) {
        if let Some(confirmation) = self.delete_confirmation.as_mut() {
            confirmation.set_typed(typed);
        }
    }

    pub fn close_dialogs(&mut self) {
        self.dialogs = DialogState::default();
        self.delete_confirmation = None;
    }

    /// Handles an action press.
    ///
    /// Synchronous by design: presses that need a mutation return a
    /// [`MutationJob`] rather than awaiting it, so a press never blocks and a
    /// re-press of an in-flight action is a no-op.
    pub fn press(&mut self, kind: ActionKind, ctx: &ExecutorContext<'_>) -> PressOutcome {
        if self.in_flight.contains(&kind) {
            tracing::debug!(action = %kind, "press ignored, already in flight");
            return PressOutcome::Ignored;
        }

        let Some(object) = self.object.as_ref() else {
            ctx.notifier.publish(Notification::error(
                "MissingObject",
                "No object is loaded",
            ));
            return PressOutcome::Ignored;
        };
        let target = object.unwrap_target().object_ref();

        match kind {
            ActionKind::Edit => {
                if let Some(guard) = ctx.guard {
                    if !guard.may_leave() {
                        tracing::debug!("edit blocked by navigation guard");
                        return PressOutcome::Ignored;
                    }
                }
                PressOutcome::Navigate(Navigation::Edit(target))
            }
            ActionKind::VoteUp => self.vote_job(kind, target, THUMBS_UP),
            ActionKind::VoteDown => self.vote_job(kind, target, THUMBS_DOWN),
            ActionKind::Bookmark | ActionKind::BookmarkUndo => {
                let Some(target) = resolve_bookmark_target(self.object.as_ref()) else {
                    ctx.notifier.publish(Notification::warning(
                        "NotBookmarkable",
                        "This object cannot be bookmarked",
                    ));
                    return PressOutcome::Ignored;
                };
                let request = if kind == ActionKind::Bookmark {
                    MutationRequest::BookmarkAdd { target }
                } else {
                    MutationRequest::BookmarkRemove { target }
                };
                self.start_job(kind, request)
            }
            ActionKind::Fork => self.start_job(kind, MutationRequest::Fork { target }),
            ActionKind::Delete => {
                let mut title = resolve_display(self.object.as_ref(), &self.languages).title;
                if title.is_empty() {
                    title = target.id.clone();
                }
                self.delete_confirmation = Some(DeleteConfirmation::new(title));
                self.dialogs.delete = true;
                PressOutcome::DialogOpened(kind)
            }
            ActionKind::Report => {
                self.dialogs.report = true;
                PressOutcome::DialogOpened(kind)
            }
            ActionKind::Share => {
                self.dialogs.share = true;
                PressOutcome::DialogOpened(kind)
            }
            ActionKind::Comment => {
                self.dialogs.comment = true;
                PressOutcome::DialogOpened(kind)
            }
            ActionKind::Stats => {
                if target.kind.has_stats() {
                    self.dialogs.stats = true;
                    PressOutcome::DialogOpened(kind)
                } else {
                    ctx.notifier.publish(Notification::warning(
                        "UnsupportedAction",
                        format!("{} objects have no statistics", target.kind),
                    ));
                    PressOutcome::Ignored
                }
            }
            ActionKind::Donate => {
                ctx.notifier.publish(Notification::warning(
                    "UnsupportedAction",
                    "Donations are not available here",
                ));
                PressOutcome::Ignored
            }
            ActionKind::FindInPage => PressOutcome::OpenFindInPage,
        }
    }

    /// Turns a confirmed delete dialog into a mutation job.
    ///
    /// # Errors
    ///
    /// `Validation` when no confirmation is pending or the typed text does
    /// not match the object's name.
    pub fn confirm_delete(&mut self) -> Result<MutationJob> {
        let confirmation = self
            .delete_confirmation
            .as_ref()
            .ok_or_else(|| CoreError::Validation("no delete is pending".to_string()))?;
        if !confirmation.is_confirmed() {
            return Err(CoreError::Validation(
                "typed name does not match".to_string(),
            ));
        }
        let target = self
            .object
            .as_ref()
            .ok_or_else(|| CoreError::MissingObject("delete".to_string()))?
            .unwrap_target()
            .object_ref();

        self.dialogs.delete = false;
        self.delete_confirmation = None;
        self.in_flight.insert(ActionKind::Delete);
        Ok(MutationJob {
            kind: ActionKind::Delete,
            generation: self.generation,
            request: MutationRequest::Delete { target },
        })
    }

    /// Turns a filled-in report dialog into a mutation job.
    ///
    /// # Errors
    ///
    /// `Validation` when a report job from a previous submission has not
    /// settled yet; at most one mutation per action kind may be in flight.
    pub fn submit_report(&mut self, reason: String, details: Option<String>) -> Result<MutationJob> {
        if self.in_flight.contains(&ActionKind::Report) {
            return Err(CoreError::Validation(
                "a report is already in flight".to_string(),
            ));
        }
        let target = self
            .object
            .as_ref()
            .ok_or_else(|| CoreError::MissingObject("report".to_string()))?
            .unwrap_target()
            .object_ref();

        self.dialogs.report = false;
        self.in_flight.insert(ActionKind::Report);
        Ok(MutationJob {
            kind: ActionKind::Report,
            generation: self.generation,
            request: MutationRequest::Report { target, reason, details },
        })
    }

    /// Drives one job to completion and applies its optimistic patch.
    ///
    /// Returns the navigation the host should perform, if any. Completions
    /// from jobs older than the displayed object are dropped.
    pub async fn run(
        &mut self,
        job: MutationJob,
        ctx: &ExecutorContext<'_>,
    ) -> Option<Navigation> {
        let span =
            tracing::debug_span!("run_action", action = %job.kind, generation = job.generation);
        let completion = async {
            match &job.request {
                MutationRequest::BookmarkAdd { target } => bookmark::add(ctx, target).await,
                MutationRequest::BookmarkRemove { target } => bookmark::remove(ctx, target).await,
                MutationRequest::React { target, emoji } => {
                    vote::react(ctx, target, emoji.clone()).await
                }
                MutationRequest::Fork { target } => fork::copy(ctx, target).await,
                MutationRequest::Delete { target } => delete::delete(ctx, target).await,
                MutationRequest::Report { target, reason, details } => {
                    report::report(ctx, target, reason, details.as_deref()).await
                }
            }
        }
        .instrument(span)
        .await;
        self.in_flight.remove(&job.kind);

        if job.generation != self.generation {
            tracing::debug!(action = %job.kind, "discarding stale completion");
            return None;
        }

        self.apply_completion(completion?)
    }

    fn vote_job(&mut self, kind: ActionKind, target: ObjectRef, emoji: &str) -> PressOutcome {
        // Pressing the vote that matches the current reaction clears it.
        let current = resolve_permissions(self.object.as_ref()).reaction;
        let emoji = if current.as_deref() == Some(emoji) {
            None
        } else {
            Some(emoji.to_string())
        };
        self.start_job(kind, MutationRequest::React { target, emoji })
    }

    fn start_job(&mut self, kind: ActionKind, request: MutationRequest) -> PressOutcome {
        self.in_flight.insert(kind);
        PressOutcome::Job(MutationJob {
            kind,
            generation: self.generation,
            request,
        })
    }

    fn apply_completion(&mut self, completion: ActionCompletion) -> Option<Navigation> {
        match completion {
            ActionCompletion::Bookmark { bookmarked } => {
                if let Some(you) = self.object.as_mut().and_then(DomainObject::you_mut) {
                    you.is_bookmarked = Some(bookmarked);
                }
                None
            }
            ActionCompletion::VoteUp { reaction } | ActionCompletion::VoteDown { reaction } => {
                if let Some(you) = self.object.as_mut().and_then(DomainObject::you_mut) {
                    you.reaction = reaction;
                }
                None
            }
            ActionCompletion::Fork { object } => {
                Some(Navigation::Object(object.object_ref()))
            }
            ActionCompletion::Delete => {
                self.object = None;
                Some(Navigation::Home)
            }
            ActionCompletion::Report => {
                self.dialogs.report = false;
                None
            }
        }
    }
}
