//! Query/pagination engine.
//!
//! Independent of the action layer; list-style views construct one
//! [`SearchEngine`] per surface and drive it through
//! [`SearchEngine::load_more`]. See [`descriptor`] for per-kind query
//! configuration, [`location`] for shareable-state round-tripping, and
//! [`typeahead`] for the lightweight projection.

pub mod descriptor;
pub mod engine;
pub mod location;
pub mod typeahead;

pub use descriptor::{DescriptorResolver, SearchDescriptor, SearchKind, StaticDescriptors};
pub use engine::{SearchEngine, DEFAULT_TAKE};
pub use location::{read_location, write_location, LocationParams};
pub use typeahead::{typeahead, TypeaheadEntry};
