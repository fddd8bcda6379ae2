//! Cursor-based search engine with filter epochs.
//!
//! One [`SearchEngine`] instance backs one list-style view. All filter
//! parameters, the opaque cursor, and the accumulated item list live here;
//! any filter change opens a new epoch, which clears the cursor and the list
//! and re-arms `has_more` before the next fetch. Responses carry the epoch
//! they were requested under and are discarded when the epoch has moved on.
//!
//! Each settled filter change is also serialized into the shareable location
//! state and pushed to the host's [`LocationSink`] when one is installed.

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use serde_json::Value;
use tracing::Instrument;

use crate::boundary::{LocationSink, Querier, QueryVariables, TimeRange};
use crate::domain::{DomainObject, Result};
use crate::query::descriptor::SearchDescriptor;
use crate::query::location::{read_location, write_location};
use crate::query::typeahead::{typeahead, TypeaheadEntry};

/// Default page size.
pub const DEFAULT_TAKE: u32 = 25;

/// Stateful pagination engine for one search surface.
pub struct SearchEngine {
    descriptor: SearchDescriptor,
    languages: Vec<String>,
    text: String,
    sort: String,
    time_range: Option<TimeRange>,
    advanced: Option<Value>,
    take: u32,
    cursor: Option<String>,
    items: Vec<DomainObject>,
    has_more: bool,
    loading: bool,
    epoch: u64,
    location: BTreeMap<String, String>,
    location_sink: Option<Rc<dyn LocationSink>>,
}

impl fmt::Debug for SearchEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchEngine")
            .field("endpoint", &self.descriptor.endpoint)
            .field("text", &self.text)
            .field("sort", &self.sort)
            .field("time_range", &self.time_range)
            .field("epoch", &self.epoch)
            .field("items", &self.items.len())
            .field("has_more", &self.has_more)
            .field("loading", &self.loading)
            .finish_non_exhaustive()
    }
}

impl SearchEngine {
    /// Creates an engine with the descriptor's default sort and an empty
    /// first epoch.
    #[must_use]
    pub fn new(descriptor: SearchDescriptor, languages: Vec<String>) -> Self {
        let sort = descriptor.default_sort.clone();
        Self {
            descriptor,
            languages,
            text: String::new(),
            sort,
            time_range: None,
            advanced: None,
            take: DEFAULT_TAKE,
            cursor: None,
            items: Vec::new(),
            has_more: true,
            loading: false,
            epoch: 0,
            location: BTreeMap::new(),
            location_sink: None,
        }
    }

    /// Creates an engine seeded from shareable location state.
    ///
    /// Unknown or malformed keys are ignored; an invalid sort falls back to
    /// the descriptor's default.
    #[must_use]
    pub fn from_location(
        descriptor: SearchDescriptor,
        languages: Vec<String>,
        state: &BTreeMap<String, String>,
    ) -> Self {
        let params = read_location(state);
        let mut engine = Self::new(descriptor, languages);
        engine.location = state.clone();
        engine.text = params.text;
        engine.sort = engine.descriptor.validate_sort(params.sort.as_deref());
        engine.time_range = params.time_range;
        engine
    }

    /// Installs the sink that receives the serialized location state after
    /// each settled filter change.
    pub fn set_location_sink(&mut self, sink: Rc<dyn LocationSink>) {
        self.location_sink = Some(sink);
    }

    #[must_use]
    pub fn items(&self) -> &[DomainObject] {
        &self.items
    }

    #[must_use]
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn sort(&self) -> &str {
        &self.sort
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_take(&mut self, take: u32) {
        self.take = take.max(1);
    }

    /// Sets the free-text filter, opening a new epoch on change.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if self.text != text {
            self.text = text;
            self.reset_epoch();
        }
    }

    /// Sets the sort key, validated against the allowed set, opening a new
    /// epoch on change.
    pub fn set_sort(&mut self, requested: Option<&str>) {
        let sort = self.descriptor.validate_sort(requested);
        if self.sort != sort {
            self.sort = sort;
            self.reset_epoch();
        }
    }

    /// Sets the created-time window, opening a new epoch on change.
    pub fn set_time_range(&mut self, time_range: Option<TimeRange>) {
        if self.time_range != time_range {
            self.time_range = time_range;
            self.reset_epoch();
        }
    }

    /// Sets the opaque advanced-filter object, opening a new epoch on change.
    pub fn set_advanced(&mut self, advanced: Option<Value>) {
        if self.advanced != advanced {
            self.advanced = advanced;
            self.reset_epoch();
        }
    }

    /// Fetches the next page.
    ///
    /// No request is issued while a fetch is in flight or once the previous
    /// page reported no next page. The first page of an epoch replaces the
    /// accumulated list; later pages append. Returns whether new items were
    /// applied.
    ///
    /// # Errors
    ///
    /// Propagates transport failure; filter and cursor state are left as they
    /// were so the caller can re-press.
    pub async fn load_more(&mut self, querier: &dyn Querier) -> Result<bool> {
        if self.loading || !self.has_more {
            return Ok(false);
        }

        let epoch = self.epoch;
        let variables = QueryVariables {
            text: (!self.text.is_empty()).then(|| self.text.clone()),
            sort: self.sort.clone(),
            after: self.cursor.clone(),
            time_range: self.time_range.clone(),
            advanced: self.advanced.clone(),
            take: self.take,
        };
        let span = tracing::debug_span!(
            "load_more",
            endpoint = %self.descriptor.endpoint,
            epoch,
            cursor = ?variables.after,
        );

        self.loading = true;
        let result = querier
            .query(&self.descriptor.endpoint, variables)
            .instrument(span)
            .await;
        self.loading = false;

        let page = result?;
        if epoch != self.epoch {
            tracing::debug!(epoch, current = self.epoch, "discarding stale page");
            return Ok(false);
        }

        let first_page = self.cursor.is_none();
        if first_page {
            self.items = page.items;
        } else {
            self.items.extend(page.items);
        }
        self.has_more = page.page_info.has_next_page;
        self.cursor = page.page_info.end_cursor;
        Ok(true)
    }

    /// Echoes text, sort, and time range into the shareable location state.
    ///
    /// Hosts with an installed [`LocationSink`] receive this state on every
    /// settled filter change and never need to call this.
    pub fn write_location(&self, state: &mut BTreeMap<String, String>) {
        write_location(state, &self.text, &self.sort, self.time_range.as_ref());
    }

    /// Lightweight projection of the accumulated list for typeahead use.
    ///
    /// Sorted by descending bookmark count; an optional fuzzy query filters
    /// on labels.
    #[must_use]
    pub fn typeahead(&self, filter: Option<&str>) -> Vec<TypeaheadEntry> {
        typeahead(&self.items, &self.languages, filter)
    }

    fn reset_epoch(&mut self) {
        self.epoch += 1;
        self.cursor = None;
        self.items.clear();
        self.has_more = true;
        self.sync_location();
    }

    // Keys the engine does not manage survive in self.location, so a state
    // seeded through from_location keeps the host's extra parameters.
    fn sync_location(&mut self) {
        write_location(
            &mut self.location,
            &self.text,
            &self.sort,
            self.time_range.as_ref(),
        );
        if let Some(sink) = &self.location_sink {
            sink.publish(&self.location);
        }
    }
}
