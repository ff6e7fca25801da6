use crate::prelude::{println, *};
use crate::render::{banner, output_json};
use colored::Colorize;
use serde::Serialize;
use sitenav_core::config::SiteConfig;
use sitenav_core::page::Page;
use sitenav_core::router::progress_for;
use sitenav_core::state::Context;
use std::path::PathBuf;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct SectionsOptions {
    /// HTML page to inspect
    #[clap(env = "SITENAV_PAGE")]
    pub file: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
pub struct SectionRow {
    pub ordinal: usize,
    pub id: String,
    pub label: String,
    pub title: Option<String>,
    /// Navigation controls pointing at this section
    pub controls: usize,
    /// Progress indicator width once the section is active
    pub progress: f64,
}

#[derive(Debug, Serialize)]
pub struct SectionsOutput {
    pub sections: Vec<SectionRow>,
    pub has_overlay: bool,
    pub has_search: bool,
}

pub async fn run(options: SectionsOptions, global: crate::Global) -> Result<()> {
    let config = crate::site::load_config(&global)?;
    let page = crate::site::load_page(&options.file)?;

    let output = sections_data(&page, &config);

    if options.json {
        output_json(&output)?;
    } else {
        output_formatted(&output);
    }

    Ok(())
}

pub fn sections_data(page: &Page, config: &SiteConfig) -> SectionsOutput {
    let ctx = Context::new(page, config);

    let sections = page
        .sections
        .iter()
        .filter(|section| !section.id.is_empty())
        .map(|section| {
            let control = page.first_control_for(&section.id).map(|nav| nav.index);
            SectionRow {
                ordinal: section.ordinal,
                id: section.id.clone(),
                label: config.label_for(&section.id).to_string(),
                title: section.title.clone(),
                controls: page
                    .controls
                    .iter()
                    .filter(|nav| nav.section == section.id)
                    .count(),
                progress: progress_for(&ctx, section.ordinal, control),
            }
        })
        .collect();

    SectionsOutput {
        sections,
        has_overlay: page.has_overlay(),
        has_search: page.has_search(),
    }
}

fn output_formatted(output: &SectionsOutput) {
    println!("{}", banner(&f!("SECTIONS ({})", output.sections.len())));

    if output.sections.is_empty() {
        println!("{}", "No sections found.".yellow());
        return;
    }

    let mut table = new_table();
    table.add_row(prettytable::row![
        "#", "Id", "Label", "Title", "Controls", "Progress"
    ]);

    for section in &output.sections {
        table.add_row(prettytable::row![
            section.ordinal,
            &section.id,
            &section.label,
            section.title.as_deref().unwrap_or("-"),
            section.controls,
            f!("{:.1}%", section.progress)
        ]);
    }

    table.printstd();

    println!(
        "\n{}: {} | {}: {}",
        "Mobile overlay".green(),
        if output.has_overlay { "yes" } else { "no" }.bright_white(),
        "Search".green(),
        if output.has_search { "yes" } else { "no" }.bright_white()
    );
}
