//! # Admin Listing
//!
//! Client-side list querying toolkit for marketplace admin dashboards.
//!
//! ## Features
//!
//! - **Query-Parameter Extraction**: Read a fixed set of recognized keys
//!   from an externally supplied snapshot, with optional namespacing
//! - **Filter/Sort Pipeline**: Pure, stable, non-mutating filtering and
//!   ordering of fetched record snapshots
//! - **Pagination**: Offset/limit page slicing with table-ready metadata
//! - **Typed Sort Directives**: The `[-]field` URL encoding parsed once at
//!   the boundary
//! - **Store Seam**: Async snapshot source trait with an in-memory
//!   implementation for tests and development
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use admin_listing::prelude::*;
//!
//! let config = ListingConfig::default_config();
//! let source: ParamSource = [("q", "vip"), ("order", "-customers")]
//!     .into_iter()
//!     .collect();
//!
//! let query = ListQuery::from_source(&config, &source);
//! let page = query.apply(&records);
//! ```

pub mod config;
pub mod core;
pub mod store;
pub mod view;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core types ===
    pub use crate::core::{
        error::{ConfigError, ListingError, ListingResult},
        params::{ExtractedParams, ListParams, ParamSource, extract},
        pipeline::filter_and_sort,
        query::{PaginatedResponse, PaginationMeta, paginate},
        record::{CustomerRef, GroupInfo, GroupRecord},
        sort::{SortDirection, SortDirective, SortField},
    };

    // === Config ===
    pub use crate::config::ListingConfig;

    // === Store ===
    pub use crate::store::{GroupStore, InMemoryGroupStore};

    // === View ===
    pub use crate::view::ListQuery;

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;
}
