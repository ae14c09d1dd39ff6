//! Grid component synthesis for the Symbols framework.
//!
//! Expands a grid size into the source text of a `GridSelection` component:
//! a state initializer, a static header, one row-group block per row with one
//! cell block per column, and a footer reporting the current selection. The
//! output is opaque text to everything else in this crate; nothing here
//! renders, executes, or validates it.

use std::fmt::Write;

/// Name of the generated declaration in the components document.
pub const DECLARATION_NAME: &str = "GridSelection";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Grid dimensions for a generated component.
///
/// Both fields are at least 1; the CLI's argument parser rejects zero before
/// a spec is ever constructed, so the generator does not re-validate.
pub struct GridSpec {
    /// Selectable cells per row.
    pub columns: u32,
    /// Rows of cells.
    pub rows: u32,
}

impl GridSpec {
    #[must_use]
    /// Total number of cells in the grid.
    ///
    /// Widened to `u64` so dimensions near the `u32` limit cannot overflow
    /// the product.
    pub fn total_cells(&self) -> u64 {
        u64::from(self.columns) * u64::from(self.rows)
    }

    #[must_use]
    /// Render the full `export const GridSelection = { ... }` declaration.
    ///
    /// Pure and deterministic: equal specs produce byte-identical output.
    /// The grid is expanded at generation time, one `Row_<r>` block per row
    /// and one `Cell_<c>` block per column, with each cell's indices embedded
    /// as literals in its appearance expression and click handler. Clicking a
    /// cell selects the rectangle from the top-left corner to that cell: a
    /// cell `(col, row)` is active iff `col <= selectedX && row <= selectedY`.
    pub fn render(&self) -> String {
        let mut out = String::new();
        writeln!(out, "export const {DECLARATION_NAME} = {{").unwrap();
        out.push_str(
            "  extend: Flex,
  props: {
    flow: 'column',
    gap: 'B',
    padding: 'C',
    background: 'white',
    borderRadius: '12px',
    boxShadow: '0 4px 24px rgba(0,0,0,0.1)',
    width: 'fit-content',
    maxWidth: '90vw',
    maxHeight: '90vh'
  },

",
        );
        writeln!(
            out,
            "  state: {{
    selectedX: -1,
    selectedY: -1,
    columns: {},
    rows: {}
  }},
",
            self.columns, self.rows
        )
        .unwrap();
        out.push_str(
            "  H2: {
    text: 'Grid Selection',
    props: {
      margin: '0 0 B 0',
      fontSize: '24px',
      fontWeight: '600',
      color: '#333'
    }
  },

",
        );
        out.push_str(
            "  GridContainer: {
    extend: Flex,
    props: {
      flow: 'column',
      gap: '2px',
      background: '#f0f0f0',
      padding: '8px',
      borderRadius: '8px',
      overflow: 'auto'
    },
",
        );
        for row in 0..self.rows {
            push_row(&mut out, row, self.columns);
            if row + 1 < self.rows {
                out.push(',');
            }
            out.push('\n');
        }
        out.push_str("  },\n\n");
        push_footer(&mut out);
        out.push('}');
        out
    }
}

/// Append one `Row_<r>` block containing `columns` cell blocks.
fn push_row(out: &mut String, row: u32, columns: u32) {
    writeln!(
        out,
        "
    Row_{row}: {{
      extend: Flex,
      props: {{ gap: '2px' }},"
    )
    .unwrap();
    for col in 0..columns {
        push_cell(out, col, row);
        if col + 1 < columns {
            out.push(',');
        }
        out.push('\n');
    }
    out.push_str("    }");
}

/// Append one `Cell_<c>` block with its indices baked in as literals.
///
/// The indices are closed over at generation time, not recomputed at click
/// time: the appearance expression compares the literal pair against the
/// selection state and the click handler writes the literal pair back.
fn push_cell(out: &mut String, col: u32, row: u32) {
    write!(
        out,
        "      Cell_{col}: {{
        extend: 'div',
        props: (element, state) => ({{
          width: '32px',
          height: '32px',
          background: ({col} <= state.selectedX && {row} <= state.selectedY) ? '#4A90E2' : '#e8e8e8',
          borderRadius: '4px',
          cursor: 'pointer',
          transition: 'all 0.2s ease',
          border: '1px solid #ddd'
        }}),
        on: {{
          click: (event, element, state) => {{
            state.update({{ selectedX: {col}, selectedY: {row} }})
          }}
        }}
      }}"
    )
    .unwrap();
}

/// Append the footer block: 1-based selected coordinates (or `None`) and the
/// selected-rectangle area (or `0`).
fn push_footer(out: &mut String) {
    out.push_str(
        "  Footer: {
    extend: Flex,
    props: {
      align: 'center space-between',
      minWidth: '100%',
      marginTop: 'B',
      padding: 'A2 0',
      borderTop: '1px solid #eee',
      fontSize: '14px',
      color: '#666'
    },

    SelectionCoords: {
      props: (element, state) => ({
        text: `Selection coordinates: ${state.selectedX >= 0 ? `${state.selectedX + 1},${state.selectedY + 1}` : 'None'}`
      })
    },

    TotalSelected: {
      props: (element, state) => ({
        text: `Total cells selected: ${state.selectedX >= 0 ? (state.selectedX + 1) * (state.selectedY + 1) : 0}`
      })
    }
  }
",
    );
}

#[cfg(test)]
#[path = "tests/component.rs"]
mod tests;
