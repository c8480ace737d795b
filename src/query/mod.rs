//! Query construction: predicates, typed filters, sorting and paging

pub mod facet;
pub mod filters;
pub mod page;
pub mod predicate;
pub mod sort;

pub use facet::{Facet, FacetSpec};
pub use filters::{InvestorFilters, StartupFilters};
pub use page::{Page, Pagination, MAX_LIMIT};
pub use predicate::{Predicate, PredicateBuilder};
pub use sort::{SortOrder, SortSpec, StartupSort, StartupSortKey};
