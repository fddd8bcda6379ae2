//! Shared test doubles for the action layer.
//!
//! Scripted transports pop pre-loaded responses in order and record every
//! call, so tests can assert both the outcome and the exact wire traffic.

use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};

use futures_util::future::{ready, FutureExt, LocalBoxFuture};
use serde_json::{json, Value};

use crate::boundary::{
    BookmarkDisambiguator, BookmarkMatch, LocationSink, MutationKind, Mutator, NavigationGuard,
    Notification, NotificationSink, Querier, QueryPage, QueryVariables, SessionView,
};
use crate::domain::CoreError;

/// Notification sink that buffers everything published.
#[derive(Default)]
pub struct RecordingSink {
    pub published: RefCell<Vec<Notification>>,
}

impl NotificationSink for RecordingSink {
    fn publish(&self, notification: Notification) {
        self.published.borrow_mut().push(notification);
    }
}

/// Session with a fixed caller and bookmark-list ids.
pub struct StaticSession {
    pub user: Option<String>,
    pub lists: Vec<String>,
}

impl StaticSession {
    pub fn logged_in() -> Self {
        Self {
            user: Some("user-1".to_string()),
            lists: Vec::new(),
        }
    }
}

impl SessionView for StaticSession {
    fn user_id(&self) -> Option<String> {
        self.user.clone()
    }

    fn bookmark_list_ids(&self) -> Vec<String> {
        self.lists.clone()
    }
}

/// Mutator that replays scripted responses and records calls.
#[derive(Default)]
pub struct ScriptedMutator {
    pub responses: RefCell<VecDeque<Result<Value, CoreError>>>,
    pub calls: RefCell<Vec<(MutationKind, Value)>>,
}

impl ScriptedMutator {
    pub fn respond_ok(value: Value) -> Self {
        let mutator = Self::default();
        mutator.responses.borrow_mut().push_back(Ok(value));
        mutator
    }

    pub fn respond_err(message: &str) -> Self {
        let mutator = Self::default();
        mutator
            .responses
            .borrow_mut()
            .push_back(Err(CoreError::Transport(message.to_string())));
        mutator
    }
}

impl Mutator for ScriptedMutator {
    fn mutate(
        &self,
        kind: MutationKind,
        input: Value,
    ) -> LocalBoxFuture<'_, Result<Value, CoreError>> {
        self.calls.borrow_mut().push((kind, input));
        let response = self
            .responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(json!({ "success": true })));
        ready(response).boxed_local()
    }
}

/// Querier that replays scripted pages and records calls.
#[derive(Default)]
pub struct ScriptedQuerier {
    pub pages: RefCell<VecDeque<Result<QueryPage, CoreError>>>,
    pub calls: RefCell<Vec<(String, QueryVariables)>>,
}

impl ScriptedQuerier {
    pub fn with_pages(pages: Vec<Result<QueryPage, CoreError>>) -> Self {
        Self {
            pages: RefCell::new(pages.into()),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl Querier for ScriptedQuerier {
    fn query(
        &self,
        endpoint: &str,
        variables: QueryVariables,
    ) -> LocalBoxFuture<'_, Result<QueryPage, CoreError>> {
        self.calls
            .borrow_mut()
            .push((endpoint.to_string(), variables));
        let page = self
            .pages
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(QueryPage::default()));
        ready(page).boxed_local()
    }
}

/// Location sink that buffers every published state.
#[derive(Default)]
pub struct RecordingLocations {
    pub states: RefCell<Vec<BTreeMap<String, String>>>,
}

impl LocationSink for RecordingLocations {
    fn publish(&self, state: &BTreeMap<String, String>) {
        self.states.borrow_mut().push(state.clone());
    }
}

/// Disambiguator that always answers with the same choice.
pub struct FixedChoice(pub Option<String>);

impl BookmarkDisambiguator for FixedChoice {
    fn choose<'a>(
        &'a self,
        _candidates: &'a [BookmarkMatch],
    ) -> LocalBoxFuture<'a, Option<String>> {
        ready(self.0.clone()).boxed_local()
    }
}

/// Guard with a fixed answer.
pub struct FixedGuard(pub bool);

impl NavigationGuard for FixedGuard {
    fn may_leave(&self) -> bool {
        self.0
    }
}
