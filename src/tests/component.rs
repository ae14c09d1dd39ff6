use super::{GridSpec, DECLARATION_NAME};
use crate::patch::find_extent;

fn spec(columns: u32, rows: u32) -> GridSpec {
    GridSpec { columns, rows }
}

#[test]
fn test_row_and_cell_counts() {
    let text = spec(3, 2).render();

    assert_eq!(text.matches("Row_").count(), 2);
    assert_eq!(text.matches("Cell_").count(), 6);

    // Row keys are indexed 0..rows, cell keys 0..columns within each row
    assert!(text.contains("Row_0:"));
    assert!(text.contains("Row_1:"));
    assert!(!text.contains("Row_2:"));
    assert!(text.contains("Cell_2:"));
    assert!(!text.contains("Cell_3:"));
}

#[test]
fn test_embedded_size_literals_equal_inputs() {
    let text = spec(12, 6).render();

    assert!(text.contains("columns: 12"));
    assert!(text.contains("rows: 6"));
    assert!(text.contains("selectedX: -1"));
    assert!(text.contains("selectedY: -1"));
    assert_eq!(spec(12, 6).total_cells(), 72);
}

#[test]
fn test_single_cell_boundary() {
    let text = spec(1, 1).render();

    assert_eq!(text.matches("Row_").count(), 1);
    assert_eq!(text.matches("Cell_").count(), 1);
    assert!(text.contains("state.update({ selectedX: 0, selectedY: 0 })"));
}

#[test]
fn test_total_cells_does_not_overflow_u32() {
    // Dimensions the CLI accepts but whose product exceeds u32::MAX
    let large = spec(70_000, 70_000);
    assert_eq!(large.total_cells(), 4_900_000_000);
}

#[test]
fn test_render_is_deterministic() {
    assert_eq!(spec(7, 4).render(), spec(7, 4).render());
}

#[test]
fn test_click_selects_top_left_rectangle() {
    let text = spec(3, 2).render();

    // Clicking Cell_1 in Row_1 stores (1, 1) unconditionally
    assert!(text.contains("state.update({ selectedX: 1, selectedY: 1 })"));

    // Every cell compares its own literal indices against the selection,
    // so with (selectedX, selectedY) = (1, 1) exactly the four cells in the
    // top-left 2x2 rectangle light up and the right column stays inactive.
    let mut active = Vec::new();
    for row in 0..2u32 {
        for col in 0..3u32 {
            let condition = format!("({col} <= state.selectedX && {row} <= state.selectedY)");
            assert!(
                text.contains(&condition),
                "missing appearance expression for cell ({col}, {row})"
            );
            if col <= 1 && row <= 1 {
                active.push((col, row));
            }
        }
    }
    assert_eq!(active, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
    assert_eq!(active.len(), (1 + 1) * (1 + 1));
}

#[test]
fn test_footer_reports_one_based_coordinates_and_area() {
    let text = spec(4, 4).render();

    assert!(text.contains("${state.selectedX + 1},${state.selectedY + 1}"));
    assert!(text.contains("'None'"));
    assert!(text.contains("(state.selectedX + 1) * (state.selectedY + 1) : 0"));
}

#[test]
fn test_generated_declaration_is_brace_balanced() {
    // The patcher must be able to span the whole declaration it previously
    // inserted, template literals and all.
    let text = spec(2, 2).render();

    assert!(text.starts_with(&format!("export const {DECLARATION_NAME} = {{")));
    let extent = find_extent(&text, 0).unwrap();
    assert_eq!(extent.start, 0);
    assert_eq!(extent.end, text.len());
}
