use proptest::prelude::*;

use datagrid::option::registry;
use datagrid::{pipeline, BundleGraph, MergeMode, ParameterSet, TableConfiguration};

// Strategy for host-style bundle names.
fn bundle_name_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,12}"
}

fn merge_mode_strategy() -> impl Strategy<Value = MergeMode> {
    prop_oneof![
        Just(MergeMode::Set),
        Just(MergeMode::Append),
        Just(MergeMode::Prepend),
    ]
}

proptest! {
    // The ordered bundle list contains every requested name exactly once,
    // in first-request order, whatever the request sequence looks like.
    #[test]
    fn bundle_graph_dedups_in_first_seen_order(
        names in prop::collection::vec(bundle_name_strategy(), 0..20)
    ) {
        let mut graph = BundleGraph::new();
        for name in &names {
            graph.add_named(name.clone());
        }

        let listed = graph.names();

        // No duplicates.
        let mut seen = std::collections::HashSet::new();
        for name in &listed {
            prop_assert!(seen.insert(name.clone()));
        }

        // First-seen order: filtering the request sequence down to first
        // occurrences reproduces the list.
        let mut expected = Vec::new();
        for name in &names {
            if !expected.contains(name) {
                expected.push(name.clone());
            }
        }
        prop_assert_eq!(listed, expected);
    }

    // Key order is always first-write order, regardless of merge modes.
    #[test]
    fn parameter_key_order_is_first_write_order(
        writes in prop::collection::vec(
            ("[abc]", "[a-z]{1,4}", merge_mode_strategy()),
            1..20
        )
    ) {
        let mut params = ParameterSet::new();
        for (key, value, mode) in &writes {
            params.add(key.clone(), value.clone(), *mode);
        }

        let mut expected = Vec::new();
        for (key, _, _) in &writes {
            if !expected.iter().any(|k: &String| k == key) {
                expected.push(key.clone());
            }
        }
        let actual: Vec<String> = params.iter().map(|(k, _)| k.to_string()).collect();
        prop_assert_eq!(actual, expected);
    }

    // String writes under append/prepend never lose content: the final
    // value contains every written fragment.
    #[test]
    fn string_merges_keep_all_fragments(
        first in "[a-z]{1,4}",
        rest in prop::collection::vec(
            ("[a-z]{1,4}", prop_oneof![Just(MergeMode::Append), Just(MergeMode::Prepend)]),
            0..8
        )
    ) {
        let mut params = ParameterSet::new();
        params.add("dom", first.clone(), MergeMode::Set);
        for (value, mode) in &rest {
            params.add("dom", value.clone(), *mode);
        }

        let merged = params.get("dom").unwrap().as_str().unwrap().to_string();
        prop_assert_eq!(
            merged.len(),
            first.len() + rest.iter().map(|(v, _)| v.len()).sum::<usize>()
        );
        prop_assert!(merged.contains(&first));
    }

    // Boolean options parse leniently: no raw value can abort the pass.
    #[test]
    fn boolean_options_never_fail_the_pipeline(raw in "[a-zA-Z0-9]{1,8}") {
        let mut table = TableConfiguration::new("t1");
        table.stage(&registry::AJAX_PIPELINING, raw.clone());
        prop_assert!(pipeline::run(&mut table).is_ok());

        let enabled = raw.eq_ignore_ascii_case("true");
        prop_assert_eq!(table.has_extension("pipelining"), enabled);
    }
}
