use std::sync::Arc;

use tracing::{debug, info};

use super::analysis::{AnalysisAck, AnalysisError, AnalysisGenerator};
use super::filters::{active_filter_count, filter_properties};
use super::page::{DashboardPage, DashboardStats, PageWindow};
use super::query::{DashboardQuery, QueryCodec};
use super::snapshot::{SnapshotError, SnapshotSource};
use super::sort::sort_properties;
use super::summary::{map_summaries, PropertySummary};
use crate::workflows::scoring::{ScoringConfig, ScoringEngine};

/// Service composing the snapshot source, scoring engine, and query codec.
pub struct DashboardService<S, G> {
    source: Arc<S>,
    generator: Arc<G>,
    engine: Arc<ScoringEngine>,
    codec: QueryCodec,
}

impl<S, G> DashboardService<S, G>
where
    S: SnapshotSource + 'static,
    G: AnalysisGenerator + 'static,
{
    pub fn new(source: Arc<S>, generator: Arc<G>, config: ScoringConfig) -> Self {
        let codec = QueryCodec::new(config.default_sort);
        Self {
            source,
            generator,
            engine: Arc::new(ScoringEngine::new(config)),
            codec,
        }
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    pub fn codec(&self) -> QueryCodec {
        self.codec
    }

    /// Every summary in the current snapshot, unfiltered and unsorted.
    pub fn summaries(&self) -> Result<Vec<PropertySummary>, DashboardServiceError> {
        let snapshot = self.source.snapshot()?;
        debug!(
            properties = snapshot.properties.len(),
            analyses = snapshot.analyses.len(),
            "snapshot loaded"
        );
        Ok(map_summaries(
            &snapshot.properties,
            &snapshot.analyses,
            &self.engine,
        ))
    }

    /// Filter, sort, and paginate the current snapshot.
    pub fn dashboard(&self, query: &DashboardQuery) -> Result<DashboardPage, DashboardServiceError> {
        let summaries = self.summaries()?;
        let filters = &query.filters;

        let filtered = filter_properties(&summaries, filters);
        let sorted = sort_properties(&filtered, filters.sort_by);
        let stats = DashboardStats::collect(summaries.len(), &sorted, active_filter_count(filters));
        let window = PageWindow::new(sorted.len(), query.page, self.engine.config().page_size);

        let canonical = DashboardQuery {
            filters: filters.clone(),
            page: 1,
        };

        debug!(
            total = stats.total,
            filtered = stats.filtered,
            page = window.page,
            total_pages = window.total_pages,
            "dashboard page assembled"
        );

        Ok(DashboardPage {
            items: window.slice(&sorted).to_vec(),
            page: window.page,
            per_page: window.per_page,
            total_pages: window.total_pages,
            stats,
            filters: filters.clone(),
            query: self.codec.serialize(&canonical),
        })
    }

    pub fn dashboard_for_query(&self, raw_query: &str) -> Result<DashboardPage, DashboardServiceError> {
        let query = self.codec.parse(raw_query);
        self.dashboard(&query)
    }

    pub fn property(&self, slug: &str) -> Result<PropertySummary, DashboardServiceError> {
        self.summaries()?
            .into_iter()
            .find(|summary| summary.slug == slug)
            .ok_or_else(|| DashboardServiceError::PropertyNotFound(slug.to_string()))
    }

    pub fn request_analysis(&self, property_id: &str) -> Result<AnalysisAck, DashboardServiceError> {
        let ack = self.generator.request(property_id)?;
        info!(property_id = %ack.property_id, "analysis requested");
        Ok(ack)
    }
}

/// Error raised by the dashboard service.
#[derive(Debug, thiserror::Error)]
pub enum DashboardServiceError {
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
    #[error("no property with slug `{0}`")]
    PropertyNotFound(String),
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}
