use super::{ensure_route, RouteOutcome, MARKER, ROUTE_BLOCK};

/// Starter-kit pages document with a root route mounting something else.
const PAGES: &str = r"'use strict'

export default {
  '/': {
    Hello: {}
  },

  '/about': {
    About: {}
  }
}
";

#[test]
fn test_registers_route_when_absent() {
    let (text, outcome) = ensure_route(PAGES, MARKER, "/", ROUTE_BLOCK);

    assert_eq!(outcome, RouteOutcome::Registered);
    assert!(text.contains("GridSelection: {}"));
    // the root route block is replaced wholesale
    assert!(!text.contains("Hello: {}"));
    // sibling routes are untouched
    assert!(text.contains("'/about': {"));
    assert!(text.contains("About: {}"));
}

#[test]
fn test_marker_is_idempotent() {
    let (once, first) = ensure_route(PAGES, MARKER, "/", ROUTE_BLOCK);
    let (twice, second) = ensure_route(&once, MARKER, "/", ROUTE_BLOCK);

    assert_eq!(first, RouteOutcome::Registered);
    assert_eq!(second, RouteOutcome::AlreadyRegistered);
    assert_eq!(once, twice);
}

#[test]
fn test_missing_anchor_leaves_document_unchanged() {
    let doc = "export default {\n  '/contact': {\n    Contact: {}\n  }\n}\n";
    let (text, outcome) = ensure_route(doc, MARKER, "/", ROUTE_BLOCK);

    assert_eq!(outcome, RouteOutcome::AnchorMissing);
    assert_eq!(text, doc);
}

#[test]
fn test_marker_present_without_anchor_is_untouched() {
    // An already-registered document is never rescanned for the anchor
    let doc = "export default {\n  '/': {\n    GridSelection: {}\n  }\n}\n";
    let (text, outcome) = ensure_route(doc, MARKER, "/", ROUTE_BLOCK);

    assert_eq!(outcome, RouteOutcome::AlreadyRegistered);
    assert_eq!(text, doc);
}
