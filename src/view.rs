//! List view facade
//!
//! Composes extraction, filtering, sorting and pagination into the single
//! call the dashboard table shell makes per render: resolve the query from
//! the parameter snapshot once, then apply it to every record snapshot the
//! fetch layer delivers.

use crate::config::ListingConfig;
use crate::core::params::{ListParams, ParamSource, extract};
use crate::core::pipeline::filter_and_sort;
use crate::core::query::{PaginatedResponse, paginate};
use crate::core::record::GroupRecord;
use crate::core::sort::SortDirective;

/// One resolved listing query, captured from a parameter snapshot
#[derive(Debug, Clone)]
pub struct ListQuery {
    params: ListParams,
    directive: Option<SortDirective>,
    default_limit: usize,
    max_limit: usize,
}

impl ListQuery {
    /// Resolve a query from a parameter snapshot using the configured
    /// keys and prefix
    pub fn from_source(config: &ListingConfig, source: &ParamSource) -> Self {
        let keys: Vec<&str> = config.keys.iter().map(String::as_str).collect();
        let extracted = extract(source, &keys, config.prefix.as_deref());
        let params = ListParams::from_extracted(&extracted);
        let directive = params.order.as_deref().and_then(SortDirective::parse);

        tracing::debug!(
            q = ?params.q,
            order = ?params.order,
            offset = params.offset(),
            "resolved listing query"
        );

        Self {
            params,
            directive,
            default_limit: config.default_limit,
            max_limit: config.max_limit,
        }
    }

    /// The raw extracted parameters
    pub fn params(&self) -> &ListParams {
        &self.params
    }

    /// The parsed sort directive, if the order field was recognized
    pub fn directive(&self) -> Option<SortDirective> {
        self.directive
    }

    /// Effective page offset
    pub fn offset(&self) -> usize {
        self.params.offset()
    }

    /// Effective page size, after defaulting and clamping
    pub fn limit(&self) -> usize {
        self.params.limit_or(self.default_limit, self.max_limit)
    }

    /// Run the full pipeline over one record snapshot
    ///
    /// Filters, sorts and pages without mutating `records`; call again
    /// whenever the fetch layer delivers a new snapshot.
    pub fn apply(&self, records: &[GroupRecord]) -> PaginatedResponse<GroupRecord> {
        let view = filter_and_sort(records, self.params.q.as_deref(), self.params.order.as_deref());

        tracing::debug!(
            total = records.len(),
            matched = view.len(),
            "filtered record snapshot"
        );

        paginate(&view, self.offset(), self.limit())
    }
}
