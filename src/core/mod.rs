//! Core module containing the parameter extractor and the filter/sort pipeline

pub mod error;
pub mod params;
pub mod pipeline;
pub mod query;
pub mod record;
pub mod sort;

pub use error::{ConfigError, ListingError, ListingResult};
pub use params::{ExtractedParams, ListParams, ParamSource, extract};
pub use pipeline::filter_and_sort;
pub use query::{PaginatedResponse, PaginationMeta, paginate};
pub use record::{CustomerRef, GroupInfo, GroupRecord};
pub use sort::{SortDirection, SortDirective, SortField};
