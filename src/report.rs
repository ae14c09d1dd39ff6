//! Machine-readable summary of a `create` run.

use crate::patch::PatchOutcome;
use crate::routes::RouteOutcome;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
/// Everything a `create` invocation did, printed as pretty JSON under
/// `--json` in place of the usual progress messages.
pub struct CreateReport {
    /// Columns in the generated grid.
    pub columns: u32,
    /// Rows in the generated grid.
    pub rows: u32,
    /// Total cell count, `columns * rows`.
    pub total_cells: u64,
    /// What happened to the components document.
    pub components: PatchOutcome,
    /// What happened to the pages document, absent when no pages document
    /// was found.
    pub pages: Option<RouteOutcome>,
}
