//! Property request validator
//!
//! Rules are checked in declaration order and the first failure wins:
//! address, type, price, then each space in input order (type before size).
//!
//! Validation also normalizes: address and descriptions are trimmed, and a
//! blank description becomes `None`.

use crate::model::{
    CreatePropertyRequest, CreateSpaceRequest, NewProperty, NewSpace, PropertyType, SpaceType,
};

use super::errors::{ValidationError, ValidationResult};

/// Turns raw property requests into validated, typed values.
///
/// Stateless and deterministic.
pub struct PropertyValidator;

impl PropertyValidator {
    /// Validates a create or replace request.
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` encountered.
    pub fn validate(request: &CreatePropertyRequest) -> ValidationResult<NewProperty> {
        let address = request
            .address
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .ok_or(ValidationError::AddressRequired)?;

        let property_type = request
            .property_type
            .as_deref()
            .and_then(|t| t.parse::<PropertyType>().ok())
            .ok_or(ValidationError::InvalidPropertyType)?;

        if !is_positive(request.price) {
            return Err(ValidationError::NonPositivePrice);
        }

        let spaces = request
            .spaces
            .iter()
            .flatten()
            .map(Self::validate_space)
            .collect::<ValidationResult<Vec<_>>>()?;

        Ok(NewProperty {
            address: address.to_string(),
            property_type,
            price: request.price,
            description: normalize_text(request.description.as_deref()),
            spaces,
        })
    }

    fn validate_space(space: &CreateSpaceRequest) -> ValidationResult<NewSpace> {
        let space_type = space
            .space_type
            .as_deref()
            .and_then(|t| t.parse::<SpaceType>().ok())
            .ok_or(ValidationError::InvalidSpaceType)?;

        if !is_positive(space.size) {
            return Err(ValidationError::NonPositiveSize);
        }

        Ok(NewSpace {
            space_type,
            size: space.size,
            description: normalize_text(space.description.as_deref()),
        })
    }
}

/// NaN is not positive.
fn is_positive(value: f64) -> bool {
    value > 0.0 && value.is_finite()
}

fn normalize_text(text: Option<&str>) -> Option<String> {
    text.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreatePropertyRequest {
        CreatePropertyRequest {
            address: Some("1 A St".to_string()),
            property_type: Some("house".to_string()),
            price: 100_000.0,
            description: None,
            spaces: None,
        }
    }

    fn space(space_type: &str, size: f64) -> CreateSpaceRequest {
        CreateSpaceRequest {
            space_type: Some(space_type.to_string()),
            size,
            description: None,
        }
    }

    #[test]
    fn test_valid_request_without_spaces() {
        let property = PropertyValidator::validate(&valid_request()).unwrap();
        assert_eq!(property.address, "1 A St");
        assert_eq!(property.property_type, PropertyType::House);
        assert!(property.spaces.is_empty());
    }

    #[test]
    fn test_blank_address_rejected() {
        for address in [None, Some(""), Some("   \t")] {
            let req = CreatePropertyRequest {
                address: address.map(str::to_string),
                ..valid_request()
            };
            assert_eq!(
                PropertyValidator::validate(&req),
                Err(ValidationError::AddressRequired)
            );
        }
    }

    #[test]
    fn test_unknown_type_rejected() {
        for t in [None, Some(""), Some("villa"), Some("House")] {
            let req = CreatePropertyRequest {
                property_type: t.map(str::to_string),
                ..valid_request()
            };
            assert_eq!(
                PropertyValidator::validate(&req),
                Err(ValidationError::InvalidPropertyType)
            );
        }
    }

    #[test]
    fn test_non_positive_price_rejected() {
        for price in [0.0, -1.0, f64::NAN] {
            let req = CreatePropertyRequest {
                price,
                ..valid_request()
            };
            assert_eq!(
                PropertyValidator::validate(&req),
                Err(ValidationError::NonPositivePrice)
            );
        }
    }

    #[test]
    fn test_first_violation_wins() {
        let req = CreatePropertyRequest {
            address: Some(" ".to_string()),
            property_type: Some("castle".to_string()),
            price: -5.0,
            description: None,
            spaces: Some(vec![space("attic", -1.0)]),
        };
        assert_eq!(
            PropertyValidator::validate(&req),
            Err(ValidationError::AddressRequired)
        );

        let req = CreatePropertyRequest {
            address: Some("1 A St".to_string()),
            ..req
        };
        assert_eq!(
            PropertyValidator::validate(&req),
            Err(ValidationError::InvalidPropertyType)
        );
    }

    #[test]
    fn test_spaces_checked_in_input_order() {
        let req = CreatePropertyRequest {
            spaces: Some(vec![space("kitchen", 10.0), space("kitchen", -1.0), space("attic", 5.0)]),
            ..valid_request()
        };
        assert_eq!(
            PropertyValidator::validate(&req),
            Err(ValidationError::NonPositiveSize)
        );

        let req = CreatePropertyRequest {
            spaces: Some(vec![space("attic", -1.0)]),
            ..valid_request()
        };
        assert_eq!(
            PropertyValidator::validate(&req),
            Err(ValidationError::InvalidSpaceType)
        );
    }

    #[test]
    fn test_text_is_trimmed_and_blank_description_dropped() {
        let req = CreatePropertyRequest {
            address: Some("  12 River Ln  ".to_string()),
            description: Some("   ".to_string()),
            spaces: Some(vec![CreateSpaceRequest {
                space_type: Some("bedroom".to_string()),
                size: 12.0,
                description: Some("  Comfortable bedroom ".to_string()),
            }]),
            ..valid_request()
        };

        let property = PropertyValidator::validate(&req).unwrap();
        assert_eq!(property.address, "12 River Ln");
        assert_eq!(property.description, None);
        assert_eq!(
            property.spaces[0].description.as_deref(),
            Some("Comfortable bedroom")
        );
    }
}
