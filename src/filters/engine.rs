use crate::filters::types::FilterSpec;
use crate::models::Property;
use tracing::debug;

impl FilterSpec {
    /// Whether a single property satisfies every criterion
    pub fn matches(&self, property: &Property) -> bool {
        self.matches_search(property)
            && (self.min_price..=self.max_price).contains(&property.price)
            && (self.bedrooms == 0 || property.bedrooms >= self.bedrooms)
            && (self.min_sqft..=self.max_sqft).contains(&property.sqft)
            && property.age <= self.max_age
            && self
                .property_type
                .map_or(true, |wanted| wanted == property.property_type)
    }

    fn matches_search(&self, property: &Property) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        property.title.to_lowercase().contains(&needle)
            || property.location.to_lowercase().contains(&needle)
    }
}

/// Properties matching `spec`, in input order
pub fn filter_properties(properties: &[Property], spec: &FilterSpec) -> Vec<Property> {
    let matched: Vec<Property> = properties
        .iter()
        .filter(|property| spec.matches(property))
        .cloned()
        .collect();

    debug!(
        "Filter kept {} of {} properties",
        matched.len(),
        properties.len()
    );
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::models::PropertyType;

    fn ids(properties: &[Property]) -> Vec<&str> {
        properties.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn noop_spec_is_identity() {
        let properties = fixtures::properties();
        assert_eq!(filter_properties(&properties, &FilterSpec::default()), properties);
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(filter_properties(&[], &FilterSpec::form_defaults()).is_empty());
    }

    #[test]
    fn form_defaults_drop_listings_over_the_panel_bounds() {
        let properties = fixtures::properties();
        let kept = filter_properties(&properties, &FilterSpec::form_defaults());

        // prop-4 has 4,200 sqft and 1.85M price, both under the panel bounds
        assert_eq!(ids(&kept), vec!["prop-1", "prop-2", "prop-3", "prop-4", "prop-5"]);

        let tighter = FilterSpec { max_price: 1_000_000, ..FilterSpec::form_defaults() };
        assert_eq!(
            ids(&filter_properties(&properties, &tighter)),
            vec!["prop-1", "prop-2", "prop-3", "prop-5"]
        );
    }

    #[test]
    fn search_is_case_insensitive_over_title_and_location() {
        let properties = fixtures::properties();

        let by_title = FilterSpec { search: "LOFT".into(), ..FilterSpec::default() };
        assert_eq!(ids(&filter_properties(&properties, &by_title)), vec!["prop-2"]);

        let by_location = FilterSpec { search: "austin".into(), ..FilterSpec::default() };
        assert_eq!(ids(&filter_properties(&properties, &by_location)), vec!["prop-3"]);

        let by_both = FilterSpec { search: "house".into(), ..FilterSpec::default() };
        assert_eq!(
            ids(&filter_properties(&properties, &by_both)),
            vec!["prop-1", "prop-5"]
        );
    }

    #[test]
    fn bounds_are_inclusive() {
        let properties = fixtures::properties();
        let spec = FilterSpec {
            min_price: 320_000,
            max_price: 450_000,
            min_sqft: 850,
            max_sqft: 1_200,
            max_age: 12,
            ..FilterSpec::default()
        };
        assert_eq!(ids(&filter_properties(&properties, &spec)), vec!["prop-1", "prop-2"]);
    }

    #[test]
    fn bedrooms_is_a_minimum_and_zero_means_any() {
        let properties = fixtures::properties();

        let three_plus = FilterSpec { bedrooms: 3, ..FilterSpec::default() };
        assert_eq!(
            ids(&filter_properties(&properties, &three_plus)),
            vec!["prop-1", "prop-4", "prop-5"]
        );

        let any = FilterSpec { bedrooms: 0, ..FilterSpec::default() };
        assert_eq!(filter_properties(&properties, &any).len(), properties.len());
    }

    #[test]
    fn type_filter_is_exact() {
        let properties = fixtures::properties();
        let spec = FilterSpec {
            property_type: Some(PropertyType::House),
            ..FilterSpec::default()
        };
        assert_eq!(ids(&filter_properties(&properties, &spec)), vec!["prop-1", "prop-5"]);
    }

    #[test]
    fn result_is_conjunction_of_all_predicates() {
        let properties = fixtures::properties();
        let specs = [
            FilterSpec { search: "a".into(), bedrooms: 2, ..FilterSpec::form_defaults() },
            FilterSpec { max_age: 10, min_sqft: 1_000, ..FilterSpec::default() },
            FilterSpec {
                property_type: Some(PropertyType::Condo),
                max_price: 300_000,
                ..FilterSpec::default()
            },
            FilterSpec { search: "zzz".into(), ..FilterSpec::default() },
        ];

        for spec in &specs {
            let matched = filter_properties(&properties, spec);
            let kept = ids(&matched);
            for p in &properties {
                let needle = spec.search.to_lowercase();
                let expected = (spec.search.is_empty()
                    || p.title.to_lowercase().contains(&needle)
                    || p.location.to_lowercase().contains(&needle))
                    && p.price >= spec.min_price
                    && p.price <= spec.max_price
                    && (spec.bedrooms == 0 || p.bedrooms >= spec.bedrooms)
                    && p.sqft >= spec.min_sqft
                    && p.sqft <= spec.max_sqft
                    && p.age <= spec.max_age
                    && spec.property_type.map_or(true, |t| t == p.property_type);
                assert_eq!(kept.contains(&p.id.as_str()), expected, "{} / {spec:?}", p.id);
            }
        }
    }

    #[test]
    fn input_is_left_untouched() {
        let properties = fixtures::properties();
        let before = properties.clone();
        let spec = FilterSpec {
            bedrooms: 5,
            ..FilterSpec::default()
        };
        let _ = filter_properties(&properties, &spec);
        assert_eq!(properties, before);
    }
}
