//! Write-side request payloads and their validated forms.
//!
//! The raw request types mirror what clients send: every field is loosely
//! typed so that a bad value reaches validation and is reported with a
//! field-specific message instead of a generic JSON decoding error.

use serde::Deserialize;

use super::types::{PropertyType, SpaceType};

/// Body of `POST /properties` and `PUT /properties/{id}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePropertyRequest {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default, rename = "type")]
    pub property_type: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub spaces: Option<Vec<CreateSpaceRequest>>,
}

/// A nested space inside a property request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateSpaceRequest {
    #[serde(default, rename = "type")]
    pub space_type: Option<String>,
    #[serde(default)]
    pub size: f64,
    #[serde(default)]
    pub description: Option<String>,
}

/// A property that passed validation, ready to persist
#[derive(Debug, Clone, PartialEq)]
pub struct NewProperty {
    pub address: String,
    pub property_type: PropertyType,
    pub price: f64,
    pub description: Option<String>,
    pub spaces: Vec<NewSpace>,
}

/// A space that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct NewSpace {
    pub space_type: SpaceType,
    pub size: f64,
    pub description: Option<String>,
}
