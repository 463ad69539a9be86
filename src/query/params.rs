//! Search parameters for properties and spaces.
//!
//! These are the validated, typed forms of a search request. Building the
//! SQL predicates lives here too so the store only has to run them.

use crate::model::{PropertyType, SpaceType};

use super::filter::{FilterExpr, FilterSet};

/// Default page size when none is given
pub const DEFAULT_LIMIT: u32 = 10;

/// Largest page a caller may request
pub const MAX_LIMIT: u32 = 100;

/// A clamped page window.
///
/// `page` is 1-based and at least 1; `limit` is within `1..=MAX_LIMIT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    limit: u32,
}

impl Pagination {
    /// Clamp raw values into range. Out-of-range input never fails.
    pub fn new(page: i64, limit: i64) -> Self {
        Self {
            page: page.clamp(1, u32::MAX as i64) as u32,
            limit: limit.clamp(1, MAX_LIMIT as i64) as u32,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Rows to skip before the page starts
    pub fn offset(&self) -> u64 {
        (self.page as u64 - 1) * self.limit as u64
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Property result ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PropertySort {
    /// By id ascending
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
}

impl PropertySort {
    /// Parse a `sort` value. Unrecognized values fall back to the default order.
    pub fn parse(value: &str) -> Self {
        match value {
            "price_asc" => PropertySort::PriceAsc,
            "price_desc" => PropertySort::PriceDesc,
            _ => PropertySort::Default,
        }
    }

    /// `ORDER BY` body. Price orders break ties by id so pages never overlap.
    pub fn order_by(&self) -> &'static str {
        match self {
            PropertySort::Default => "id ASC",
            PropertySort::PriceAsc => "price ASC, id ASC",
            PropertySort::PriceDesc => "price DESC, id ASC",
        }
    }
}

/// Filters, ordering and window for a property search
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyQuery {
    pub property_type: Option<PropertyType>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub sort: PropertySort,
    pub pagination: Pagination,
}

impl PropertyQuery {
    pub fn filters(&self) -> FilterSet {
        FilterSet::new()
            .and_some(self.property_type, |t| {
                FilterExpr::eq("type", t.as_str().to_string())
            })
            .and_some(self.min_price, |p| FilterExpr::gte("price", p))
            .and_some(self.max_price, |p| FilterExpr::lte("price", p))
    }
}

/// Filters and window for a space search. Spaces are always ordered by size
/// descending.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpaceQuery {
    pub property_id: Option<i64>,
    pub space_type: Option<SpaceType>,
    pub min_size: Option<f64>,
    pub pagination: Pagination,
}

impl SpaceQuery {
    pub const ORDER_BY: &'static str = "size DESC, id ASC";

    pub fn filters(&self) -> FilterSet {
        FilterSet::new()
            .and_some(self.property_id, |id| FilterExpr::eq("property_id", id))
            .and_some(self.space_type, |t| {
                FilterExpr::eq("type", t.as_str().to_string())
            })
            .and_some(self.min_size, |s| FilterExpr::gte("size", s))
    }
}
