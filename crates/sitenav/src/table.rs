use crate::prelude::{println, *};
use crate::render::{banner, output_json};
use colored::Colorize;
use serde::Serialize;
use sitenav_core::controller::Controller;
use std::path::PathBuf;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct TableOptions {
    /// HTML page to load
    #[clap(env = "SITENAV_PAGE")]
    pub file: PathBuf,

    /// Element id of the table
    pub table: String,

    /// Filter text; rows with any cell containing it stay visible
    #[arg(default_value = "")]
    pub filter: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
pub struct TableRow {
    /// Row index within the table, the header row being 0
    pub index: usize,
    pub cells: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct TableOutput {
    pub table: String,
    pub filter: String,
    pub visible: Vec<TableRow>,
    pub hidden: usize,
}

pub async fn run(options: TableOptions, global: crate::Global) -> Result<()> {
    let mut controller = crate::site::controller(&options.file, &global)?;

    let output = table_data(&mut controller, &options.table, &options.filter)?;

    if options.json {
        output_json(&output)?;
    } else {
        output_formatted(&output);
    }

    Ok(())
}

pub fn table_data(
    controller: &mut Controller,
    table_id: &str,
    filter: &str,
) -> Result<TableOutput> {
    let table_index = controller
        .page()
        .table_by_id(table_id)
        .ok_or_else(|| Error::UnknownTable(table_id.to_string()))?;

    controller.filter_table(filter, table_id);

    let state = controller.state();
    let rows = &controller.page().tables[table_index].rows;

    let (visible, hidden): (Vec<_>, Vec<_>) = rows
        .iter()
        .enumerate()
        .skip(1)
        .partition(|(index, _)| state.is_row_visible(table_index, *index));

    Ok(TableOutput {
        table: table_id.to_string(),
        filter: filter.to_string(),
        visible: visible
            .into_iter()
            .map(|(index, cells)| TableRow {
                index,
                cells: cells.clone(),
            })
            .collect(),
        hidden: hidden.len(),
    })
}

fn output_formatted(output: &TableOutput) {
    println!(
        "{}",
        banner(&f!("TABLE #{} FILTER \"{}\"", output.table, output.filter))
    );

    if output.visible.is_empty() {
        println!("\n{}", "No matching rows.".yellow());
    } else {
        let mut table = new_table();
        for row in &output.visible {
            let mut cells = vec![prettytable::Cell::new(&row.index.to_string())];
            cells.extend(row.cells.iter().map(|cell| prettytable::Cell::new(cell)));
            table.add_row(prettytable::Row::new(cells));
        }
        table.printstd();
    }

    println!(
        "\n{} {} {} {}",
        output.visible.len().to_string().bright_cyan().bold(),
        "visible,".bright_white(),
        output.hidden.to_string().bright_cyan().bold(),
        "hidden".bright_white()
    );
}
