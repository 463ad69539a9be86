//! Closed enumerations for property and space kinds.
//!
//! Both are stored as their lowercase wire names. Parsing is exact and
//! case-sensitive: `"House"` is not a property type.

use std::fmt;
use std::str::FromStr;

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};

/// Kind of listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    #[serde(rename = "house")]
    House,
    #[serde(rename = "apartment")]
    Apartment,
    #[serde(rename = "condo")]
    Condo,
}

impl PropertyType {
    /// All variants in declaration order
    pub const ALL: [PropertyType; 3] = [
        PropertyType::House,
        PropertyType::Apartment,
        PropertyType::Condo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::House => "house",
            PropertyType::Apartment => "apartment",
            PropertyType::Condo => "condo",
        }
    }

    /// Comma-separated list of accepted names, used in error messages
    pub fn allowed() -> String {
        join_names(Self::ALL.iter().map(|t| t.as_str()))
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "house" => Ok(PropertyType::House),
            "apartment" => Ok(PropertyType::Apartment),
            "condo" => Ok(PropertyType::Condo),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

/// Kind of room within a property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpaceType {
    #[serde(rename = "bedroom")]
    Bedroom,
    #[serde(rename = "kitchen")]
    Kitchen,
    #[serde(rename = "bathroom")]
    Bathroom,
    #[serde(rename = "living room")]
    LivingRoom,
}

impl SpaceType {
    /// All variants in declaration order
    pub const ALL: [SpaceType; 4] = [
        SpaceType::Bedroom,
        SpaceType::Kitchen,
        SpaceType::Bathroom,
        SpaceType::LivingRoom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SpaceType::Bedroom => "bedroom",
            SpaceType::Kitchen => "kitchen",
            SpaceType::Bathroom => "bathroom",
            SpaceType::LivingRoom => "living room",
        }
    }

    /// Comma-separated list of accepted names, used in error messages
    pub fn allowed() -> String {
        join_names(Self::ALL.iter().map(|t| t.as_str()))
    }
}

impl fmt::Display for SpaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpaceType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bedroom" => Ok(SpaceType::Bedroom),
            "kitchen" => Ok(SpaceType::Kitchen),
            "bathroom" => Ok(SpaceType::Bathroom),
            "living room" => Ok(SpaceType::LivingRoom),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

/// A string that names no variant of the target enumeration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown variant '{0}'")]
pub struct UnknownVariant(pub String);

fn join_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}

// Storage mapping. The columns are plain TEXT; a value outside the closed
// set surfaces as a conversion error when the row is read back.

impl ToSql for PropertyType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for PropertyType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|e: UnknownVariant| FromSqlError::Other(Box::new(e)))
    }
}

impl ToSql for SpaceType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for SpaceType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|e: UnknownVariant| FromSqlError::Other(Box::new(e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_type_round_trips_through_name() {
        for t in PropertyType::ALL {
            assert_eq!(t.as_str().parse::<PropertyType>().unwrap(), t);
        }
    }

    #[test]
    fn test_space_type_living_room_has_a_space() {
        assert_eq!("living room".parse::<SpaceType>().unwrap(), SpaceType::LivingRoom);
        assert!("living_room".parse::<SpaceType>().is_err());
    }

    #[test]
    fn test_parsing_is_case_sensitive() {
        assert!("House".parse::<PropertyType>().is_err());
        assert!("KITCHEN".parse::<SpaceType>().is_err());
    }

    #[test]
    fn test_allowed_lists() {
        assert_eq!(PropertyType::allowed(), "house, apartment, condo");
        assert_eq!(SpaceType::allowed(), "bedroom, kitchen, bathroom, living room");
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&SpaceType::LivingRoom).unwrap();
        assert_eq!(json, "\"living room\"");

        let parsed: PropertyType = serde_json::from_str("\"condo\"").unwrap();
        assert_eq!(parsed, PropertyType::Condo);
    }
}
