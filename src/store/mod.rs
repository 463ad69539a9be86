//! # Listing Store
//!
//! Persistence for properties and their spaces.
//!
//! The store provides filtered, ordered and paginated reads with spaces
//! eagerly attached, plus transactional writes of a property together with
//! its spaces. Transactional isolation is SQLite's; nothing above this layer
//! locks.

mod errors;
pub mod schema;
mod sqlite;

pub use errors::{StoreError, StoreResult};
pub use sqlite::SqliteStore;

use crate::model::{NewProperty, PropertyView, SearchPage, SpaceStats, SpaceView};
use crate::query::{PropertyQuery, SpaceQuery};

/// Storage operations consumed by the listing service
pub trait ListingStore: Send + Sync {
    /// Count all matching properties and return one page of them.
    fn search_properties(&self, query: &PropertyQuery) -> StoreResult<SearchPage<PropertyView>>;

    /// Fetch one property with its spaces
    fn get_property(&self, id: i64) -> StoreResult<Option<PropertyView>>;

    /// Insert a property and all its spaces as one unit. Returns the new id.
    fn insert_property(&self, property: &NewProperty) -> StoreResult<i64>;

    /// Replace a property's fields and its whole space collection as one
    /// unit. Returns `false` when no property has this id.
    fn replace_property(&self, id: i64, property: &NewProperty) -> StoreResult<bool>;

    /// Count all matching spaces and return one page, largest first.
    fn search_spaces(&self, query: &SpaceQuery) -> StoreResult<SearchPage<SpaceView>>;

    /// Mean space size overall and per property
    fn space_stats(&self) -> StoreResult<SpaceStats>;
}
