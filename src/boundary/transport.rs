//! Mutation and query transport seams.
//!
//! This module defines the [`Mutator`] and [`Querier`] traits that abstract
//! over the application's network layer. The traits are object-safe and return
//! [`LocalBoxFuture`]s: the whole layer is single-threaded and cooperative, so
//! no `Send` bounds are imposed.
//!
//! Transport rejections are returned as [`CoreError::Transport`]; callers in
//! the action layer catch them locally and convert them into user-facing
//! notifications, never panics.

use crate::domain::{CoreError, DomainObject};
use chrono::{DateTime, Utc};
use futures_util::future::LocalBoxFuture;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Server mutation endpoints the action executors can invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MutationKind {
    /// Create a bookmark, optionally creating a default list inline.
    BookmarkCreate,
    /// Delete one bookmark record by id.
    BookmarkDelete,
    /// Set or clear the caller's emoji reaction in a single call.
    React,
    /// Fork an object into a caller-owned copy.
    Copy,
    /// Delete an object.
    Delete,
    /// File a moderation report.
    ReportCreate,
}

/// Performs one server mutation.
///
/// # Contract
///
/// The returned future must settle: resolve with the server's response record
/// (a `{success}` flag or the created/updated record) or reject with
/// [`CoreError::Transport`]. Implementations never panic into the caller.
pub trait Mutator {
    /// Issues the mutation described by `kind` with a JSON input record.
    fn mutate(&self, kind: MutationKind, input: Value)
        -> LocalBoxFuture<'_, Result<Value, CoreError>>;
}

/// An inclusive created-time window applied to a search.
///
/// Either bound may be open.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub after: Option<DateTime<Utc>>,
    pub before: Option<DateTime<Utc>>,
}

/// Variables for one page fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryVariables {
    /// Free-text search string, omitted when empty.
    pub text: Option<String>,
    /// Sort key, already validated against the search kind's allowed set.
    pub sort: String,
    /// Opaque cursor from the previous page, absent on a first page.
    pub after: Option<String>,
    /// Optional created-time window.
    pub time_range: Option<TimeRange>,
    /// Opaque advanced-filter object, schema supplied per search kind.
    pub advanced: Option<Value>,
    /// Page size.
    pub take: u32,
}

/// Pagination metadata reported alongside a page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub has_next_page: bool,
    pub end_cursor: Option<String>,
}

/// One page of search results.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryPage {
    /// Decoded nodes, in server order.
    pub items: Vec<DomainObject>,
    pub page_info: PageInfo,
}

/// Performs one search query.
///
/// The `endpoint` is the query identifier from the search kind's descriptor;
/// a descriptor may also supply a reshape function applied to the raw page
/// before it reaches the engine.
pub trait Querier {
    /// Fetches one page for the given endpoint and variables.
    fn query(
        &self,
        endpoint: &str,
        variables: QueryVariables,
    ) -> LocalBoxFuture<'_, Result<QueryPage, CoreError>>;
}
