//! Read-side shapes returned by the listing service.
//!
//! These are the exact JSON bodies served over HTTP; field names are
//! camelCase on the wire.

use serde::Serialize;

use super::types::{PropertyType, SpaceType};

/// A property with its spaces attached
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyView {
    pub id: i64,
    pub address: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub price: f64,
    pub description: Option<String>,
    pub spaces: Vec<SpaceView>,
}

/// A space, flattened with its owning property id
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceView {
    pub id: i64,
    pub property_id: i64,
    #[serde(rename = "type")]
    pub space_type: SpaceType,
    pub size: f64,
    pub description: Option<String>,
}

/// One page of a filtered, ordered result set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchPage<T: Serialize> {
    /// Number of matching rows, independent of pagination
    pub total: u64,
    pub items: Vec<T>,
}

impl<T: Serialize> SearchPage<T> {
    pub fn new(total: u64, items: Vec<T>) -> Self {
        Self { total, items }
    }
}

/// Mean space size for one property
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertySizeStat {
    pub property_id: i64,
    pub address: String,
    pub avg_size: f64,
}

/// Space size aggregates.
///
/// `overall` is `None` when no spaces are stored; it serializes as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceStats {
    pub overall: Option<f64>,
    /// Sorted by `avg_size` descending
    pub per_property: Vec<PropertySizeStat>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_view_wire_names() {
        let view = SpaceView {
            id: 3,
            property_id: 1,
            space_type: SpaceType::LivingRoom,
            size: 120.5,
            description: None,
        };

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["propertyId"], 1);
        assert_eq!(json["type"], "living room");
        assert!(json["description"].is_null());
    }

    #[test]
    fn test_empty_stats_serialize_null_overall() {
        let stats = SpaceStats {
            overall: None,
            per_property: vec![],
        };

        let json = serde_json::to_value(&stats).unwrap();
        assert!(json["overall"].is_null());
        assert_eq!(json["perProperty"], serde_json::json!([]));
    }
}
