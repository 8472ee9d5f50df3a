use category_splitter::config::Config;
use category_splitter::data::{CategoryPair, CategoryRecord};
use category_splitter::split_categories;
use proptest::prelude::*;

/// Categories named N00.. with random relations between them, plus a valid cluster count
fn split_input() -> impl Strategy<Value = (Vec<CategoryRecord>, Vec<CategoryPair>, usize)> {
    (1usize..16).prop_flat_map(|node_count| {
        let edges = prop::collection::vec((0..node_count, 0..node_count), 0..40);
        (Just(node_count), edges, 1..=node_count)
    })
    .prop_map(|(node_count, edges, n_clusters)| {
        let name = |i: usize| format!("N{:02}", i);
        let categories: Vec<CategoryRecord> = (0..node_count)
            .map(|i| CategoryRecord::new(&name(i), &format!("category {}", i)))
            .collect();
        let pairs: Vec<CategoryPair> = edges
            .into_iter()
            .filter(|(a, b)| a != b)
            .map(|(a, b)| CategoryPair::new(&name(a), &name(b)))
            .collect();
        (categories, pairs, n_clusters)
    })
}

proptest! {
    #[test]
    fn partition_is_valid_and_balanced((categories, pairs, n) in split_input()) {
        let outcome = split_categories(&categories, &pairs, &Config::new(n, None)).unwrap();

        prop_assert_eq!(outcome.partition.len(), n);
        prop_assert!(outcome.partition.covers(&outcome.graph));
        prop_assert!(outcome.initial.covers(&outcome.graph));
        prop_assert!(outcome.partition.size_spread() <= 1);
    }

    #[test]
    fn removed_edges_are_bounded((categories, pairs, n) in split_input()) {
        let outcome = split_categories(&categories, &pairs, &Config::new(n, None)).unwrap();

        prop_assert!(outcome.report.removed_edge_count <= outcome.graph.edge_count());
        prop_assert_eq!(outcome.report.removed_edge_count, outcome.severed_edges.len());
        prop_assert_eq!(outcome.report.edge_count, outcome.graph.edge_count());
    }

    #[test]
    fn split_is_deterministic((categories, pairs, n) in split_input()) {
        let config = Config::new(n, None);

        let first = split_categories(&categories, &pairs, &config).unwrap();
        let mut reversed = categories.clone();
        reversed.reverse();
        let second = split_categories(&reversed, &pairs, &config).unwrap();

        prop_assert_eq!(&first.partition, &second.partition);
        prop_assert_eq!(first.report, second.report);
    }
}
