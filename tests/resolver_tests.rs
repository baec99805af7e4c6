//! Tests for the route resolution algorithm
//!
//! Validates the resolver's contract:
//! - Default-to-`index` normalization for empty and separator-only routes
//! - Segment walking through nested namespaces
//! - Greedy first-handler-wins termination
//! - Action and positional-argument extraction
//! - Referential transparency over an immutable namespace

use routewalk::namespace::StaticNamespace;
use routewalk::resolver::resolve;

fn sample_namespace() -> StaticNamespace {
    StaticNamespace::builder()
        .handler("index")
        .handler("members")
        .handler_at(&["a"], "b")
        .build()
}

#[test]
fn test_empty_route_equals_index_route() {
    let ns = sample_namespace();
    assert_eq!(resolve("", &ns), resolve("index", &ns));
}

#[test]
fn test_separator_only_routes_equal_empty_route() {
    let ns = sample_namespace();
    let empty = resolve("", &ns);
    assert_eq!(resolve("/", &ns), empty);
    assert_eq!(resolve("///", &ns), empty);
}

#[test]
fn test_nested_handler_with_action_and_args() {
    let ns = sample_namespace();
    let res = resolve("a/b/edit/7", &ns);
    assert_eq!(res.handler_name, "b");
    assert_eq!(res.location.namespace, vec!["a".to_string()]);
    assert_eq!(res.location.qualified_name(), "a/b");
    assert_eq!(res.action_name, "edit");
    assert_eq!(res.args, vec!["7".to_string()]);
}

#[test]
fn test_segment_after_handler_becomes_action() {
    // No `view` namespace or handler anywhere: the segment after the
    // matched handler is the action.
    let ns = sample_namespace();
    let res = resolve("members/view", &ns);
    assert_eq!(res.handler_name, "members");
    assert_eq!(res.action_name, "view");
    assert!(res.args.is_empty());
}

#[test]
fn test_unmatched_segment_falls_back_to_index_handler() {
    let ns = sample_namespace();
    let res = resolve("unknown", &ns);
    assert_eq!(res.handler_name, "index");
    assert_eq!(res.action_name, "unknown");
    assert!(res.args.is_empty());
    assert!(res.location.namespace.is_empty());
}

#[test]
fn test_greedy_first_handler_wins() {
    // Both `members` and `index` are handlers at the root. Once `members`
    // matches, the walk stops: the later handler-named segment is demoted
    // to the action.
    let ns = sample_namespace();
    let res = resolve("members/index/5", &ns);
    assert_eq!(res.handler_name, "members");
    assert_eq!(res.action_name, "index");
    assert_eq!(res.args, vec!["5".to_string()]);
}

#[test]
fn test_default_index_located_at_deepest_namespace_reached() {
    let ns = StaticNamespace::builder()
        .namespace_at(&["admin"])
        .handler_at(&["admin"], "index")
        .build();
    let res = resolve("admin/unknown/3", &ns);
    assert_eq!(res.handler_name, "index");
    assert_eq!(res.location.namespace, vec!["admin".to_string()]);
    assert_eq!(res.location.qualified_name(), "admin/index");
    assert_eq!(res.action_name, "unknown");
    assert_eq!(res.args, vec!["3".to_string()]);
}

#[test]
fn test_resolution_is_idempotent() {
    let ns = sample_namespace();
    for route in ["", "a/b/edit/7", "members/view", "unknown/x/y"] {
        assert_eq!(resolve(route, &ns), resolve(route, &ns), "route {route}");
    }
}

#[test]
fn test_matching_is_literal_and_case_sensitive() {
    let ns = sample_namespace();
    let res = resolve("Members", &ns);
    // `Members` does not match the `members` handler.
    assert_eq!(res.handler_name, "index");
    assert_eq!(res.action_name, "Members");
}
