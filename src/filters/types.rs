use crate::models::PropertyType;
use serde::{Deserialize, Serialize};

/// Max price shown by the filter panel when the field is left blank
pub const FORM_MAX_PRICE: u64 = 2_000_000;
/// Max square footage shown by the filter panel when the field is left blank
pub const FORM_MAX_SQFT: u32 = 5_000;
/// Max building age shown by the filter panel when the field is left blank
pub const FORM_MAX_AGE: u32 = 50;

/// Active filter criteria for the property list
///
/// Every bound is always present. Callers normalize blank form fields to
/// sentinel values before filtering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
    /// Case-insensitive substring of title or location; empty matches all
    pub search: String,
    /// Minimum price (inclusive)
    pub min_price: u64,
    /// Maximum price (inclusive)
    pub max_price: u64,
    /// Minimum number of bedrooms, 0 = any
    pub bedrooms: u32,
    /// Minimum size in square feet (inclusive)
    pub min_sqft: u32,
    /// Maximum size in square feet (inclusive)
    pub max_sqft: u32,
    /// Maximum building age in years (inclusive)
    pub max_age: u32,
    /// Dwelling kind, `None` = any
    #[serde(rename = "type", default)]
    pub property_type: Option<PropertyType>,
}

impl Default for FilterSpec {
    /// The no-op spec: every property passes
    fn default() -> Self {
        Self {
            search: String::new(),
            min_price: 0,
            max_price: u64::MAX,
            bedrooms: 0,
            min_sqft: 0,
            max_sqft: u32::MAX,
            max_age: u32::MAX,
            property_type: None,
        }
    }
}

impl FilterSpec {
    /// State of the filter panel after "Clear Filters"
    pub fn form_defaults() -> Self {
        Self {
            max_price: FORM_MAX_PRICE,
            max_sqft: FORM_MAX_SQFT,
            max_age: FORM_MAX_AGE,
            ..Self::default()
        }
    }

    /// Whether any criterion is narrower than the filter panel's reset state
    pub fn has_active_filters(&self) -> bool {
        !self.search.is_empty()
            || self.min_price > 0
            || self.max_price < FORM_MAX_PRICE
            || self.bedrooms > 0
            || self.min_sqft > 0
            || self.max_sqft < FORM_MAX_SQFT
            || self.max_age < FORM_MAX_AGE
            || self.property_type.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_defaults_are_not_active() {
        assert!(!FilterSpec::form_defaults().has_active_filters());
    }

    #[test]
    fn each_narrowed_criterion_is_active() {
        let narrowed = [
            FilterSpec { search: "loft".into(), ..FilterSpec::form_defaults() },
            FilterSpec { min_price: 1, ..FilterSpec::form_defaults() },
            FilterSpec { max_price: 1_999_999, ..FilterSpec::form_defaults() },
            FilterSpec { bedrooms: 2, ..FilterSpec::form_defaults() },
            FilterSpec { min_sqft: 100, ..FilterSpec::form_defaults() },
            FilterSpec { max_sqft: 4_000, ..FilterSpec::form_defaults() },
            FilterSpec { max_age: 10, ..FilterSpec::form_defaults() },
            FilterSpec {
                property_type: Some(PropertyType::Villa),
                ..FilterSpec::form_defaults()
            },
        ];

        for spec in narrowed {
            assert!(spec.has_active_filters(), "{spec:?}");
        }
    }

    #[test]
    fn deserializes_blank_type_as_any() {
        let spec: FilterSpec = serde_json::from_str(
            r#"{"search":"","minPrice":0,"maxPrice":10,"bedrooms":0,
                "minSqft":0,"maxSqft":10,"maxAge":10}"#,
        )
        .unwrap();
        assert_eq!(spec.property_type, None);
    }
}
