//! Route registration in the pages document.
//!
//! A narrower instance of the same find-or-patch logic as [`crate::patch`]:
//! make sure the pages document mounts the generated component on the root
//! route. Registration is best-effort; a pages document whose shape we do
//! not recognize is left alone rather than mangled.

use crate::patch::find_extent;
use serde::{Deserialize, Serialize};

/// Marker line whose verbatim presence means the component is already
/// mounted.
pub const MARKER: &str = "GridSelection: {}";

/// Replacement route block mounting the component at `/`.
pub const ROUTE_BLOCK: &str = "'/': {\n    GridSelection: {}\n  }";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// What route registration did to the pages document.
pub enum RouteOutcome {
    /// The marker was already present; the document is untouched.
    AlreadyRegistered,
    /// The anchored route block was replaced with the registration block.
    Registered,
    /// No route anchor was found; the document is untouched and the caller
    /// should surface a warning.
    AnchorMissing,
}

#[must_use]
/// Idempotently ensure `marker` appears in the pages document.
///
/// When the marker is already present verbatim the document comes back
/// unchanged. Otherwise the block anchored at `'<route_key>':` is located by
/// balanced-brace scan and replaced in full with `insertion`. A missing
/// anchor is an outcome, not an error.
pub fn ensure_route(
    document: &str,
    marker: &str,
    route_key: &str,
    insertion: &str,
) -> (String, RouteOutcome) {
    if document.contains(marker) {
        return (document.to_string(), RouteOutcome::AlreadyRegistered);
    }
    let anchor = format!("'{route_key}':");
    let Some(pos) = document.find(&anchor) else {
        return (document.to_string(), RouteOutcome::AnchorMissing);
    };
    let Some(extent) = find_extent(document, pos) else {
        return (document.to_string(), RouteOutcome::AnchorMissing);
    };
    let mut text = String::with_capacity(document.len() + insertion.len());
    text.push_str(&document[..extent.start]);
    text.push_str(insertion);
    text.push_str(&document[extent.end..]);
    (text, RouteOutcome::Registered)
}

#[cfg(test)]
#[path = "tests/routes.rs"]
mod tests;
