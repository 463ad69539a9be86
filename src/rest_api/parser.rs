//! # Query Parameter Parser
//!
//! Parses `/properties` and `/spaces` query strings into typed queries.
//!
//! Blank values count as absent. Numbers that do not parse are rejected;
//! `page` and `limit` are clamped rather than rejected; an unrecognized
//! `sort` falls back to the default order. Unknown keys are ignored.

use std::collections::HashMap;
use std::str::FromStr;

use crate::model::{PropertyType, SpaceType};
use crate::query::{Pagination, PropertyQuery, PropertySort, SpaceQuery, DEFAULT_LIMIT};

use super::errors::{RestError, RestResult};

/// Parse `type`, `min_price`, `max_price`, `sort`, `page`, `limit`
pub fn parse_property_query(params: &HashMap<String, String>) -> RestResult<PropertyQuery> {
    let property_type = match value(params, "type") {
        Some(t) => Some(t.parse::<PropertyType>().map_err(|_| {
            RestError::InvalidQueryParam(format!(
                "type must be one of: {}",
                PropertyType::allowed()
            ))
        })?),
        None => None,
    };

    Ok(PropertyQuery {
        property_type,
        min_price: parse_threshold(params, "min_price")?,
        max_price: parse_threshold(params, "max_price")?,
        sort: value(params, "sort")
            .map(PropertySort::parse)
            .unwrap_or_default(),
        pagination: parse_pagination(params)?,
    })
}

/// Parse `property_id`, `type`, `min_size`, `page`, `limit`
pub fn parse_space_query(params: &HashMap<String, String>) -> RestResult<SpaceQuery> {
    let space_type = match value(params, "type") {
        Some(t) => Some(t.parse::<SpaceType>().map_err(|_| {
            RestError::InvalidQueryParam(format!(
                "type must be one of: {}",
                SpaceType::allowed()
            ))
        })?),
        None => None,
    };

    Ok(SpaceQuery {
        property_id: parse_optional::<i64>(params, "property_id")?,
        space_type,
        min_size: parse_threshold(params, "min_size")?,
        pagination: parse_pagination(params)?,
    })
}

/// Trimmed value for `key`, or `None` when missing or blank
fn value<'a>(params: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    params
        .get(key)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
}

fn parse_optional<T: FromStr>(
    params: &HashMap<String, String>,
    key: &str,
) -> RestResult<Option<T>> {
    value(params, key)
        .map(|v| {
            v.parse::<T>()
                .map_err(|_| RestError::InvalidQueryParam(format!("Invalid {}: {}", key, v)))
        })
        .transpose()
}

/// A finite decimal threshold
fn parse_threshold(params: &HashMap<String, String>, key: &str) -> RestResult<Option<f64>> {
    match parse_optional::<f64>(params, key)? {
        Some(v) if !v.is_finite() => Err(RestError::InvalidQueryParam(format!(
            "Invalid {}: {}",
            key, v
        ))),
        other => Ok(other),
    }
}

fn parse_pagination(params: &HashMap<String, String>) -> RestResult<Pagination> {
    let page = parse_optional::<i64>(params, "page")?.unwrap_or(1);
    let limit = parse_optional::<i64>(params, "limit")?.unwrap_or(DEFAULT_LIMIT as i64);
    Ok(Pagination::new(page, limit))
}
