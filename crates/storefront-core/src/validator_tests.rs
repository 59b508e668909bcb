//! Tests for validator module

#[cfg(test)]
mod tests {
    use crate::config::CatalogConfig;
    use crate::error::Error;
    use crate::query::SortMode;
    use crate::validator::*;
    use serde_json::json;

    fn invalid_field(result: crate::Result<()>) -> String {
        match result {
            Err(Error::InvalidFilter { field, .. }) => field,
            other => panic!("expected InvalidFilter, got {other:?}"),
        }
    }

    #[test]
    fn test_from_json_parses_descriptor() {
        // Arrange
        let value = json!({
            "color": ["white", "blue"],
            "size": ["L"],
            "price": [0, 100],
            "sort": "Asc"
        });

        // Act
        let filter = ProductFilter::from_json(value).unwrap();

        // Assert
        assert_eq!(filter.color, vec!["white", "blue"]);
        assert_eq!(filter.size, vec!["L"]);
        assert_eq!(filter.price, [0.0, 100.0]);
        assert_eq!(filter.sort, SortMode::Ascending);
    }

    #[test]
    fn test_from_json_rejects_unknown_sort() {
        let value = json!({"color": [], "size": [], "price": [0, 100], "sort": "random"});

        let result = ProductFilter::from_json(value);

        assert!(matches!(result, Err(Error::Serialization(_))));
    }

    #[test]
    fn test_from_json_rejects_missing_field() {
        let value = json!({"color": [], "size": [], "sort": "none"});

        assert!(ProductFilter::from_json(value).is_err());
    }

    #[test]
    fn test_from_json_rejects_three_price_bounds() {
        let value = json!({"color": [], "size": [], "price": [0, 50, 100], "sort": "none"});

        assert!(ProductFilter::from_json(value).is_err());
    }

    #[test]
    fn test_default_descriptor_is_valid() {
        // Arrange
        let filter = ProductFilter::default();

        // Act & Assert
        assert_eq!(filter.color.len(), 5);
        assert_eq!(filter.size, vec!["S", "M", "L"]);
        assert_eq!(filter.price, [0.0, 100.0]);
        assert!(filter.validate(&CatalogConfig::default()).is_ok());
    }

    #[test]
    fn test_empty_facets_are_valid() {
        let filter = ProductFilter {
            color: vec![],
            size: vec![],
            ..ProductFilter::default()
        };

        assert!(filter.validate(&CatalogConfig::default()).is_ok());
    }

    #[test]
    fn test_unknown_color_is_rejected() {
        let filter = ProductFilter {
            color: vec!["white".into(), "red".into()],
            ..ProductFilter::default()
        };

        assert_eq!(
            invalid_field(filter.validate(&CatalogConfig::default())),
            "color"
        );
    }

    #[test]
    fn test_unknown_size_is_rejected() {
        let filter = ProductFilter {
            size: vec!["XL".into()],
            ..ProductFilter::default()
        };

        assert_eq!(
            invalid_field(filter.validate(&CatalogConfig::default())),
            "size"
        );
    }

    #[test]
    fn test_inverted_price_range_is_rejected() {
        let filter = ProductFilter {
            price: [40.0, 20.0],
            ..ProductFilter::default()
        };

        assert_eq!(
            invalid_field(filter.validate(&CatalogConfig::default())),
            "price"
        );
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let filter = ProductFilter {
            price: [-1.0, 20.0],
            ..ProductFilter::default()
        };

        assert_eq!(
            invalid_field(filter.validate(&CatalogConfig::default())),
            "price"
        );
    }

    #[test]
    fn test_price_above_catalog_maximum_is_rejected() {
        let filter = ProductFilter {
            price: [0.0, 150.0],
            ..ProductFilter::default()
        };

        assert!(filter.validate(&CatalogConfig::default()).is_err());
    }

    #[test]
    fn test_non_finite_price_is_rejected() {
        let filter = ProductFilter {
            price: [0.0, f64::NAN],
            ..ProductFilter::default()
        };

        assert!(filter.validate(&CatalogConfig::default()).is_err());
    }

    #[test]
    fn test_equal_bounds_are_valid() {
        let filter = ProductFilter {
            price: [20.0, 20.0],
            ..ProductFilter::default()
        };

        assert!(filter.validate(&CatalogConfig::default()).is_ok());
    }

    #[test]
    fn test_custom_catalog_options() {
        // Arrange
        let catalog = CatalogConfig {
            colors: vec!["red".into()],
            ..CatalogConfig::default()
        };
        let filter = ProductFilter {
            color: vec!["red".into()],
            ..ProductFilter::default()
        };

        // Act & Assert
        assert!(filter.validate(&catalog).is_ok());
    }
}
