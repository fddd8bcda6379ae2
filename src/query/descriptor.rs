//! Search kinds and their static query descriptors.
//!
//! Every searchable surface is tagged with a [`SearchKind`]; the engine turns
//! that tag into a [`SearchDescriptor`] through the [`DescriptorResolver`]
//! seam. Descriptors are resolved asynchronously because some hosts load them
//! lazily; [`StaticDescriptors`] is the built-in resolver with the default
//! endpoint and sort tables.

use futures_util::future::{ready, FutureExt, LocalBoxFuture};
use serde_json::Value;

use crate::domain::Result;

/// Tag for each searchable surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchKind {
    Api,
    Bookmark,
    Note,
    Organization,
    Project,
    Question,
    Routine,
    SmartContract,
    Standard,
    User,
}

impl SearchKind {
    /// Stable string form, used as the location-state `search` value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Api => "Api",
            Self::Bookmark => "Bookmark",
            Self::Note => "Note",
            Self::Organization => "Organization",
            Self::Project => "Project",
            Self::Question => "Question",
            Self::Routine => "Routine",
            Self::SmartContract => "SmartContract",
            Self::Standard => "Standard",
            Self::User => "User",
        }
    }
}

impl std::fmt::Display for SearchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static query configuration for one search kind.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchDescriptor {
    /// Query identifier handed to the [`crate::boundary::Querier`].
    pub endpoint: String,
    /// Sort applied when none is requested or the request is invalid.
    pub default_sort: String,
    /// Sorts the server accepts for this kind.
    pub allowed_sorts: Vec<String>,
    /// Schema for the opaque advanced-filter object, when the kind has one.
    pub advanced_schema: Option<Value>,
}

impl SearchDescriptor {
    /// Validates a requested sort against the allowed set.
    ///
    /// Invalid or absent requests fall back to the default sort.
    #[must_use]
    pub fn validate_sort(&self, requested: Option<&str>) -> String {
        match requested {
            Some(sort) if self.allowed_sorts.iter().any(|s| s == sort) => sort.to_string(),
            _ => self.default_sort.clone(),
        }
    }
}

/// Resolves a search kind to its descriptor.
pub trait DescriptorResolver {
    fn resolve(&self, kind: SearchKind) -> LocalBoxFuture<'_, Result<SearchDescriptor>>;
}

/// Built-in resolver backed by static endpoint and sort tables.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticDescriptors;

impl StaticDescriptors {
    /// Synchronous lookup behind [`DescriptorResolver::resolve`].
    #[must_use]
    pub fn descriptor(kind: SearchKind) -> SearchDescriptor {
        let common = ["Top", "Newest", "Oldest", "Bookmarks"];
        let (endpoint, default_sort, allowed): (&str, &str, &[&str]) = match kind {
            SearchKind::Api => ("apis", "Top", &common),
            SearchKind::Bookmark => ("bookmarks", "Newest", &["Newest", "Oldest"]),
            SearchKind::Note => ("notes", "Newest", &["Newest", "Oldest", "Updated"]),
            SearchKind::Organization => ("organizations", "Top", &common),
            SearchKind::Project => ("projects", "Top", &common),
            SearchKind::Question => ("questions", "Newest", &["Top", "Newest", "Oldest"]),
            SearchKind::Routine => ("routines", "Top", &common),
            SearchKind::SmartContract => ("smartContracts", "Top", &common),
            SearchKind::Standard => ("standards", "Top", &common),
            SearchKind::User => ("users", "Top", &["Top", "Newest", "Oldest"]),
        };
        SearchDescriptor {
            endpoint: endpoint.to_string(),
            default_sort: default_sort.to_string(),
            allowed_sorts: allowed.iter().map(ToString::to_string).collect(),
            advanced_schema: None,
        }
    }
}

impl DescriptorResolver for StaticDescriptors {
    fn resolve(&self, kind: SearchKind) -> LocalBoxFuture<'_, Result<SearchDescriptor>> {
        ready(Ok(Self::descriptor(kind))).boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_sort_falls_back_to_default() {
        let descriptor = StaticDescriptors::descriptor(SearchKind::Routine);
        assert_eq!(descriptor.validate_sort(Some("Sideways")), "Top");
        assert_eq!(descriptor.validate_sort(None), "Top");
        assert_eq!(descriptor.validate_sort(Some("Newest")), "Newest");
    }

    #[test]
    fn bookmark_search_defaults_to_newest() {
        let descriptor = StaticDescriptors::descriptor(SearchKind::Bookmark);
        assert_eq!(descriptor.default_sort, "Newest");
        assert_eq!(descriptor.endpoint, "bookmarks");
    }
}
