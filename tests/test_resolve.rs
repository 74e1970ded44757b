use pretty_assertions::assert_eq;
use routetree::model::{Route, RouteTreeBuilder, RouteTreeItem, RouteTreeNode};
use routetree::resolve_route_structure;
use std::collections::HashSet;

fn grouped(label: &str, group: &str) -> Route {
    Route::new(label, label.to_lowercase().replace(' ', "-")).with_group(group)
}

// --- SCENARIOS ---
#[test]
fn test_flat_routes_give_flat_tree() {
    let routes = vec![
        Route::new("First", "flat-first"),
        Route::new("Second", "flat-second"),
    ];
    let tree = resolve_route_structure(&routes);

    assert_eq!(tree.to_items(), vec![RouteTreeItem::route(0), RouteTreeItem::route(1)]);
    assert_eq!(tree.num_groups(), 0);
}

#[test]
fn test_single_group_with_flat_routes() {
    let routes = vec![
        Route::new("First child", "g-c1").with_group("Group"),
        Route::new("Second child", "g-c2").with_group("Group"),
    ];
    let tree = resolve_route_structure(&routes);

    assert_eq!(
        tree.to_items(),
        vec![RouteTreeItem::group(
            "Group",
            vec![RouteTreeItem::route(0), RouteTreeItem::route(1)]
        )]
    );
}

#[test]
fn test_nested_groups_and_root_route() {
    let routes = vec![
        Route::new("Intro", "intro"),
        Route::new("Input Usage", "inputs-usage").with_group("Inputs"),
        Route::new("Push Button", "push-button").with_group("Inputs/Buttons"),
        Route::new("Reset Button", "reset-button").with_group("Inputs/Buttons"),
    ];
    let tree = resolve_route_structure(&routes);

    assert_eq!(
        tree.to_items(),
        vec![
            RouteTreeItem::route(0),
            RouteTreeItem::group(
                "Inputs",
                vec![
                    RouteTreeItem::route(1),
                    RouteTreeItem::group(
                        "Buttons",
                        vec![RouteTreeItem::route(2), RouteTreeItem::route(3)]
                    ),
                ]
            ),
        ]
    );
}

#[test]
fn test_directly_nested_groups() {
    let routes = vec![Route::new("Item nested in directly nested groups", "item").with_group("A/B/C/D")];
    let tree = resolve_route_structure(&routes);

    assert_eq!(
        tree.to_items(),
        vec![RouteTreeItem::group(
            "A",
            vec![RouteTreeItem::group(
                "B",
                vec![RouteTreeItem::group(
                    "C",
                    vec![RouteTreeItem::group("D", vec![RouteTreeItem::route(0)])]
                )]
            )]
        )]
    );

    // Each level has exactly one child
    let groups: Vec<&RouteTreeNode> = tree.pre_order_iter().filter(|n| n.is_group()).collect();
    assert_eq!(groups.len(), 4);
    assert!(groups.iter().all(|g| g.children().len() == 1));
}

#[test]
fn test_empty_route_list() {
    let routes: Vec<Route> = Vec::new();
    let tree = resolve_route_structure(&routes);

    assert!(tree.is_empty());
    assert!(tree.roots().is_empty());
    assert!(tree.is_valid(0));
}

#[test]
fn test_empty_group_string_is_ungrouped() {
    let routes = vec![
        Route::new("Empty", "empty").with_group(""),
        Route::new("None", "none"),
    ];
    let tree = resolve_route_structure(&routes);

    assert_eq!(tree.to_items(), vec![RouteTreeItem::route(0), RouteTreeItem::route(1)]);
}

// --- PROPERTIES ---
#[test]
fn test_prefix_sharing() {
    let routes = vec![grouped("X", "A/B"), grouped("Y", "A/C")];
    let tree = resolve_route_structure(&routes);

    assert_eq!(tree.roots().len(), 1);
    let a = tree.node(tree.roots()[0]);
    assert_eq!(a.label(), Some("A"));

    let child_labels: Vec<_> = tree.children_of(a.index()).map(|c| c.label()).collect();
    assert_eq!(child_labels, vec![Some("B"), Some("C")]);
}

#[test]
fn test_same_segment_name_under_different_parents_is_not_shared() {
    let routes = vec![grouped("X", "A/Shared"), grouped("Y", "B/Shared")];
    let tree = resolve_route_structure(&routes);

    assert_eq!(tree.num_groups(), 4);
    assert_eq!(
        tree.to_items(),
        vec![
            RouteTreeItem::group("A", vec![RouteTreeItem::group("Shared", vec![RouteTreeItem::route(0)])]),
            RouteTreeItem::group("B", vec![RouteTreeItem::group("Shared", vec![RouteTreeItem::route(1)])]),
        ]
    );
}

#[test]
fn test_equal_groups_share_parent_node() {
    let routes = vec![
        grouped("Kea", "Birds/Parrots"),
        grouped("Tui", "Birds/Honeyeaters"),
        grouped("Kaka", "Birds/Parrots"),
        Route::new("About", "about"),
        grouped("Kakapo", "Birds/Parrots"),
    ];
    let tree = resolve_route_structure(&routes);

    let parent_of = |route_index: usize| {
        tree.pre_order_iter()
            .find(|n| n.route_index() == Some(route_index))
            .and_then(|n| n.parent())
    };
    let parrots = parent_of(0);
    assert!(parrots.is_some());
    assert_eq!(parent_of(2), parrots);
    assert_eq!(parent_of(4), parrots);
    assert_ne!(parent_of(1), parrots);
    assert_eq!(parent_of(3), None);
}

#[test]
fn test_first_occurrence_order() {
    let routes = vec![
        grouped("One", "Later/Deep"),
        Route::new("Two", "two"),
        grouped("Three", "Early"),
        grouped("Four", "Later"),
        grouped("Five", "Later/Deep"),
        grouped("Six", "Later/Other"),
    ];
    let tree = resolve_route_structure(&routes);

    assert_eq!(
        tree.to_items(),
        vec![
            RouteTreeItem::group(
                "Later",
                vec![
                    RouteTreeItem::group("Deep", vec![RouteTreeItem::route(0), RouteTreeItem::route(4)]),
                    RouteTreeItem::route(3),
                    RouteTreeItem::group("Other", vec![RouteTreeItem::route(5)]),
                ]
            ),
            RouteTreeItem::route(1),
            RouteTreeItem::group("Early", vec![RouteTreeItem::route(2)]),
        ]
    );
}

#[test]
fn test_leaf_coverage_on_mixed_input() {
    let groups = ["", "A", "A/B", "C/D/E", "A/B/F", "C", "A//B", "/G/", "C/D"];
    let routes: Vec<Route> = (0..60)
        .map(|i| {
            let group = groups[i % groups.len()];
            Route::new(format!("Route {i}"), format!("route-{i}")).with_group(group)
        })
        .collect();
    let tree = resolve_route_structure(&routes);

    assert_eq!(tree.num_leaves(), routes.len());
    let indices: HashSet<usize> = tree.leaf_indices().into_iter().collect();
    assert_eq!(indices, (0..routes.len()).collect::<HashSet<_>>());
    assert!(tree.is_valid(routes.len()));
}

#[test]
fn test_resolve_is_deterministic() {
    let routes = vec![
        grouped("X", "A/B"),
        Route::new("Y", "y"),
        grouped("Z", "A/C/D"),
        grouped("W", "A/B"),
    ];
    let builder = RouteTreeBuilder::new();

    let first = builder.resolve(&routes).unwrap();
    let second = builder.resolve(&routes).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_resolve_plain_group_strings() {
    let groups = vec![Some("A/B"), None, Some("A")];
    let tree = RouteTreeBuilder::new().resolve(&groups).unwrap();

    assert_eq!(
        tree.to_items(),
        vec![
            RouteTreeItem::group(
                "A",
                vec![RouteTreeItem::group("B", vec![RouteTreeItem::route(0)]), RouteTreeItem::route(2)]
            ),
            RouteTreeItem::route(1),
        ]
    );
}

#[test]
fn test_custom_delimiter() {
    let routes = vec![grouped("X", "A.B"), grouped("Y", "A/B")];
    let tree = RouteTreeBuilder::new().with_delimiter('.').resolve(&routes).unwrap();

    assert_eq!(
        tree.to_items(),
        vec![
            RouteTreeItem::group("A", vec![RouteTreeItem::group("B", vec![RouteTreeItem::route(0)])]),
            RouteTreeItem::group("A/B", vec![RouteTreeItem::route(1)]),
        ]
    );
}

#[test]
fn test_builder_is_shareable_between_threads() {
    let builder = RouteTreeBuilder::new();
    let routes_a = vec![grouped("X", "A/B")];
    let routes_b = vec![grouped("Y", "C"), Route::new("Z", "z")];

    let (tree_a, tree_b) = std::thread::scope(|scope| {
        let a = scope.spawn(|| builder.resolve(&routes_a).unwrap());
        let b = scope.spawn(|| builder.resolve(&routes_b).unwrap());
        (a.join().unwrap(), b.join().unwrap())
    });

    assert_eq!(tree_a.num_groups(), 2);
    assert_eq!(tree_b.leaf_indices(), vec![0, 1]);
}
