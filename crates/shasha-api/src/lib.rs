//! HTTP clients and aggregation for the shasha media-catalog client.
//!
//! Two upstream adapters (`tmdb`, `jikan`) map heterogeneous API shapes
//! into the shared `CatalogItem` model; the aggregator composes them into
//! the named collections the UI renders, absorbing partial outages into
//! emptier shelves instead of errors.

pub mod aggregator;
pub mod debounce;
pub mod jikan;
pub mod playback;
pub mod servers;
pub mod tmdb;

pub use aggregator::{Aggregator, HomeBundle, SEARCH_MIN_CHARS};
