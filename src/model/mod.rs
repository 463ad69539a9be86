//! Domain model: properties, spaces, and the closed type sets.

pub mod request;
pub mod types;
pub mod views;

pub use request::{CreatePropertyRequest, CreateSpaceRequest, NewProperty, NewSpace};
pub use types::{PropertyType, SpaceType, UnknownVariant};
pub use views::{PropertySizeStat, PropertyView, SearchPage, SpaceStats, SpaceView};
