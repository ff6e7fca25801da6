//! Table row filter

use crate::state::{Context, Diagnostic, Effect, Outcome, UiState};

/// Whether any cell of `row` contains the already case-folded `filter`
pub fn row_matches(row: &[String], filter: &str) -> bool {
    row.iter().any(|cell| cell.to_lowercase().contains(filter))
}

/// Show rows (after the header row) with at least one cell containing `value`
pub fn filter_rows(ctx: &Context, state: &mut UiState, table: usize, value: &str) -> Outcome {
    let Some(rows) = ctx.page.tables.get(table).map(|t| &t.rows) else {
        return Outcome::diagnostic(Diagnostic::UnknownTable {
            table: table.to_string(),
        });
    };

    let filter = value.to_lowercase();
    let hidden = state.hidden_rows.entry(table).or_default();
    let mut outcome = Outcome::none();

    for (index, row) in rows.iter().enumerate().skip(1) {
        let visible = row_matches(row, &filter);
        if visible {
            hidden.remove(&index);
        } else {
            hidden.insert(index);
        }
        outcome.push(Effect::SetRowVisible {
            table,
            row: index,
            visible,
        });
    }

    outcome
}

/// Filter the table with the given element id
pub fn filter_table(ctx: &Context, state: &mut UiState, table_id: &str, value: &str) -> Outcome {
    match ctx.page.table_by_id(table_id) {
        Some(table) => filter_rows(ctx, state, table, value),
        None => Outcome::diagnostic(Diagnostic::UnknownTable {
            table: table_id.to_string(),
        }),
    }
}

/// Filter whatever table a `.table-search` input is bound to
pub fn on_input_keyup(ctx: &Context, state: &mut UiState, input: usize, value: &str) -> Outcome {
    match ctx.page.table_inputs.get(input).and_then(|i| i.table) {
        Some(table) => filter_rows(ctx, state, table, value),
        None => Outcome::diagnostic(Diagnostic::UnknownTable {
            table: format!("input #{input}"),
        }),
    }
}
