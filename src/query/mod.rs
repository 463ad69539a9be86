//! Query construction
//!
//! Translates filter/sort/page specifications into SQL predicates, ordering
//! and a bounded window.

pub mod filter;
pub mod params;

pub use filter::{FilterExpr, FilterOperator, FilterSet};
pub use params::{
    Pagination, PropertyQuery, PropertySort, SpaceQuery, DEFAULT_LIMIT, MAX_LIMIT,
};
