//! Algebraic properties of the layout stages.

use proptest::prelude::*;
use xltext::grid::{self, Grid};
use xltext::orientation::{classify, LockedCell};
use xltext::render::render_row;
use xltext::{ColumnWidths, RenderOptions};

fn token() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("  ".to_string()),
        "[a-zé0-9 ]{1,8}",
    ]
}

fn ragged_grid() -> impl Strategy<Value = Grid> {
    prop::collection::vec(prop::collection::vec(token(), 0..6), 0..8)
        .prop_map(|rows| Grid::new("P", rows))
}

fn rectangular_grid() -> impl Strategy<Value = Grid> {
    (1usize..6).prop_flat_map(|width| {
        prop::collection::vec(prop::collection::vec(token(), width), 1..8)
            .prop_map(|rows| Grid::new("P", rows))
    })
}

proptest! {
    #[test]
    fn transpose_twice_is_identity(g in rectangular_grid()) {
        prop_assert_eq!(grid::transpose(&grid::transpose(&g)), g);
    }

    #[test]
    fn transpose_twice_pads_ragged_rows(g in ragged_grid()) {
        let back = grid::transpose(&grid::transpose(&g));
        let width = g.max_row_len();
        if width == 0 {
            prop_assert!(back.is_empty());
        } else {
            prop_assert_eq!(back.rows, grid::rectangularize(&g.rows, width));
        }
    }

    #[test]
    fn drop_empty_rows_is_idempotent(g in ragged_grid()) {
        let once = grid::drop_empty_rows(&g);
        let twice = grid::drop_empty_rows(&once);
        prop_assert_eq!(&once, &twice);
        prop_assert!(once.rows.iter().all(|r| r.iter().any(|t| !t.trim().is_empty())));
    }

    #[test]
    fn widening_a_token_never_narrows_a_column(
        g in ragged_grid(),
        pick in any::<prop::sample::Index>(),
        extra in "[a-z]{1,5}",
    ) {
        let cells: Vec<(usize, usize)> = g
            .rows
            .iter()
            .enumerate()
            .flat_map(|(r, row)| (0..row.len()).map(move |c| (r, c)))
            .collect();
        prop_assume!(!cells.is_empty());
        let (r, c) = cells[pick.index(cells.len())];

        let before = ColumnWidths::compute(&g);
        let mut wider = g.clone();
        wider.rows[r][c].push_str(&extra);
        let after = ColumnWidths::compute(&wider);

        for col in 0..before.len().max(after.len()) {
            prop_assert!(after.get(col) >= before.get(col));
        }
        prop_assert!(after.get(c) >= wider.rows[r][c].chars().count());
    }

    #[test]
    fn rendered_fields_match_column_widths(g in rectangular_grid()) {
        let widths = ColumnWidths::compute(&g);
        let options = RenderOptions::default();
        let shown = (0..widths.len()).filter(|&c| widths.get(c) > 0).count();

        for row in &g.rows {
            let mut line = String::new();
            render_row(&mut line, row, &widths, &options);
            let fields: Vec<&str> = line.split(" | ").collect();
            // trailing separator leaves one empty piece
            prop_assert_eq!(fields.len(), shown + 1);

            let mut visible = (0..row.len()).filter(|&c| widths.get(c) > 0);
            for field in &fields[..shown] {
                let col = visible.next().unwrap();
                prop_assert_eq!(field.chars().count(), widths.get(col));
            }
        }
    }

    #[test]
    fn classification_is_deterministic(
        cells in prop::collection::vec((0usize..6, 0usize..6), 0..10),
    ) {
        let locked: Vec<LockedCell> = cells
            .into_iter()
            .map(|(row, col)| LockedCell { row, col })
            .collect();
        prop_assert_eq!(classify(&locked), classify(&locked.clone()));
    }
}
