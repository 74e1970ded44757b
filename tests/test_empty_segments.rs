use pretty_assertions::assert_eq;
use routetree::config::EmptySegmentPolicy;
use routetree::model::{Route, RouteTreeBuilder, RouteTreeItem};
use routetree::parser::GroupPathErrorType;

fn routes() -> Vec<Route> {
    vec![
        Route::new("Kiwi", "kiwi").with_group("Birds/Ratites"),
        Route::new("Moa", "moa").with_group("Birds//Ratites"),
        Route::new("Weta", "weta").with_group("/Insects"),
        Route::new("Kea", "kea").with_group("Birds/Parrots/"),
        Route::new("Tuatara", "tuatara"),
    ]
}

#[test]
fn test_drop_policy_merges_normalized_paths() {
    let tree = RouteTreeBuilder::new().resolve(&routes()).unwrap();

    assert_eq!(
        tree.to_items(),
        vec![
            RouteTreeItem::group(
                "Birds",
                vec![
                    RouteTreeItem::group("Ratites", vec![RouteTreeItem::route(0), RouteTreeItem::route(1)]),
                    RouteTreeItem::group("Parrots", vec![RouteTreeItem::route(3)]),
                ]
            ),
            RouteTreeItem::group("Insects", vec![RouteTreeItem::route(2)]),
            RouteTreeItem::route(4),
        ]
    );
    assert!(tree.is_valid(5));
}

#[test]
fn test_drop_policy_delimiters_only_goes_to_root() {
    let routes = vec![Route::new("Slash", "slash").with_group("//")];
    let tree = RouteTreeBuilder::new().resolve(&routes).unwrap();

    assert_eq!(tree.to_items(), vec![RouteTreeItem::route(0)]);
}

#[test]
fn test_reject_policy_isolates_and_continues() {
    let error = RouteTreeBuilder::new()
        .with_empty_segment_policy(EmptySegmentPolicy::Reject)
        .resolve(&routes())
        .unwrap_err();

    // All malformed routes are reported, in route order
    let rejected: Vec<(usize, &str)> = error.errors().iter().map(|e| (e.route_index(), e.group())).collect();
    assert_eq!(
        rejected,
        vec![(1, "Birds//Ratites"), (2, "/Insects"), (3, "Birds/Parrots/")]
    );
    assert_eq!(error.errors()[0].kind(), &GroupPathErrorType::EmptySegment { position: 1 });
    assert_eq!(error.errors()[1].kind(), &GroupPathErrorType::LeadingDelimiter);
    assert_eq!(error.errors()[2].kind(), &GroupPathErrorType::TrailingDelimiter);

    // Well-formed routes are resolved, malformed ones sit at the root
    let tree = error.into_tree();
    assert_eq!(
        tree.to_items(),
        vec![
            RouteTreeItem::group(
                "Birds",
                vec![RouteTreeItem::group("Ratites", vec![RouteTreeItem::route(0)])]
            ),
            RouteTreeItem::route(1),
            RouteTreeItem::route(2),
            RouteTreeItem::route(3),
            RouteTreeItem::route(4),
        ]
    );
    assert!(tree.is_valid(5));
}

#[test]
fn test_reject_policy_without_malformed_paths_succeeds() {
    let routes = vec![
        Route::new("Kiwi", "kiwi").with_group("Birds/Ratites"),
        Route::new("Empty", "empty").with_group(""),
    ];
    let tree = RouteTreeBuilder::new()
        .with_empty_segment_policy(EmptySegmentPolicy::Reject)
        .resolve(&routes)
        .unwrap();

    assert_eq!(tree.num_leaves(), 2);
    assert_eq!(tree.num_groups(), 2);
}

#[test]
fn test_error_messages() {
    let routes = vec![Route::new("Moa", "moa").with_group("Birds//Ratites")];
    let error = RouteTreeBuilder::new()
        .with_empty_segment_policy(EmptySegmentPolicy::Reject)
        .resolve(&routes)
        .unwrap_err();

    assert_eq!(error.to_string(), "1 route(s) with invalid group paths");
    assert_eq!(
        error.errors()[0].to_string(),
        "Invalid group path \"Birds//Ratites\" of route 0 - empty segment at position 1"
    );
}
