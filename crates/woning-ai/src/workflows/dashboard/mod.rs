//! Dashboard pipeline: raw CMS records are joined into property summaries,
//! then filtered, sorted, and paginated under a URL-encoded query state.

pub mod analysis;
pub mod filters;
pub mod page;
pub mod query;
pub mod records;
pub mod router;
pub mod service;
pub mod snapshot;
pub mod sort;
pub mod summary;

#[cfg(test)]
mod tests;

pub use analysis::{AnalysisAck, AnalysisError, AnalysisGenerator, PlaceholderAnalysisGenerator};
pub use filters::{
    active_filter_count, filter_properties, normalize_cities, FilterPatch, FilterState,
};
pub use page::{DashboardPage, DashboardStats, PageWindow};
pub use query::{
    filter_pairs, parse_filter_pairs, parse_filters, serialize_filters, DashboardQuery, QueryCodec,
};
pub use records::{PropertyLink, RawAnalysis, RawProperty};
pub use router::dashboard_router;
pub use service::{DashboardService, DashboardServiceError};
pub use snapshot::{InMemorySnapshot, JsonFileSnapshot, Snapshot, SnapshotError, SnapshotSource};
pub use sort::{sort_properties, SortOption};
pub use summary::{map_summaries, PropertySummary};
