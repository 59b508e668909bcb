//! Property tests for filter rendering and query assembly.

use proptest::collection::btree_set;
use proptest::prelude::*;
use storefront_core::{FilterBuilder, QueryAssembler, SortMode};

fn color() -> impl Strategy<Value = String> {
    "[a-z]{3,8}".prop_map(|s| format!("c{s}"))
}

fn size() -> impl Strategy<Value = String> {
    "[A-Z]{1,3}".prop_map(|s| format!("s{s}"))
}

fn price_range() -> impl Strategy<Value = [f64; 2]> {
    (0u32..500, 0u32..500).prop_map(|(a, b)| [f64::from(a.min(b)), f64::from(a.max(b))])
}

fn sorted_group(group: &str) -> Vec<String> {
    let mut parts: Vec<String> = group.split(" OR ").map(str::to_string).collect();
    parts.sort();
    parts
}

proptest! {
    #[test]
    fn rendered_groups_follow_color_size_price_order(
        colors in btree_set(color(), 1..5),
        sizes in btree_set(size(), 1..4),
        price in price_range(),
    ) {
        let builder = QueryAssembler::default()
            .filter(&colors, &sizes, price)
            .unwrap();
        let rendered = builder.render();

        let inner = rendered.strip_prefix('(').and_then(|s| s.strip_suffix(')')).unwrap();
        let groups: Vec<&str> = inner.split(") AND (").collect();
        prop_assert_eq!(groups.len(), 3);

        let color_group = colors.iter().map(|c| format!("color = '{c}'")).collect::<Vec<_>>().join(" OR ");
        let size_group = sizes.iter().map(|s| format!("size = '{s}'")).collect::<Vec<_>>().join(" OR ");
        prop_assert_eq!(sorted_group(groups[0]), sorted_group(&color_group));
        prop_assert_eq!(sorted_group(groups[1]), sorted_group(&size_group));
        prop_assert_eq!(
            groups[2].to_string(),
            format!("price >= {} AND price <= {}", price[0], price[1])
        );
    }

    #[test]
    fn empty_colors_leave_size_and_price(
        sizes in btree_set(size(), 1..4),
        price in price_range(),
    ) {
        let no_colors: Vec<String> = Vec::new();
        let rendered = QueryAssembler::default()
            .filter(&no_colors, &sizes, price)
            .unwrap()
            .render();

        prop_assert!(!rendered.contains("color"));
        let (size_part, price_part) = rendered.split_once(") AND (").unwrap();
        let size_inner = size_part.strip_prefix('(').unwrap();
        prop_assert_eq!(
            sorted_group(size_inner),
            sorted_group(&sizes.iter().map(|s| format!("size = '{s}'")).collect::<Vec<_>>().join(" OR "))
        );
        prop_assert!(price_part.starts_with("price >= "));
    }

    #[test]
    fn assembled_request_always_has_filter(
        colors in btree_set(color(), 0..5),
        sizes in btree_set(size(), 0..4),
        price in price_range(),
        sort in prop_oneof![Just(SortMode::None), Just(SortMode::Ascending), Just(SortMode::Descending)],
    ) {
        let request = QueryAssembler::default()
            .assemble(&colors, &sizes, price, sort, 12)
            .unwrap();

        prop_assert!(request.filter.is_some());
        prop_assert_eq!(request.vector.len(), 3);
        prop_assert!(request.vector[..2].iter().all(|&c| c == 0.0));
    }

    #[test]
    fn add_raw_twice_keeps_only_the_last_clause(
        first in price_range(),
        second in price_range(),
    ) {
        let clause = |p: [f64; 2]| format!("price >= {} AND price <= {}", p[0], p[1]);
        let rendered = FilterBuilder::new()
            .add_raw("price", clause(first))
            .add_raw("price", clause(second))
            .render();

        prop_assert_eq!(rendered, format!("({})", clause(second)));
    }

    #[test]
    fn numbers_are_never_quoted(value in 0i64..1_000_000) {
        let rendered = FilterBuilder::new().add("price", "=", value).unwrap().render();

        prop_assert_eq!(rendered, format!("(price = {value})"));
    }
}
