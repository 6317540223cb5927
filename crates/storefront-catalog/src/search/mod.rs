//! Search module.
//!
//! In-memory filters, sorting, pagination and facets over catalog products.

mod filter;
mod query;
mod results;

pub use filter::Filter;
pub use query::{SearchQuery, SortOption};
pub use results::{Facet, FacetValue, Pagination, SearchResults};
