use crate::prelude::{println, *};
use crate::render::{banner, output_json};
use colored::Colorize;
use serde::Serialize;
use sitenav_core::config::SiteConfig;
use sitenav_core::page::Page;
use sitenav_core::search::{search, SearchResult, NO_RESULTS};
use sitenav_core::state::Context;
use std::path::PathBuf;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct SearchOptions {
    /// HTML page to search
    #[clap(env = "SITENAV_PAGE")]
    pub file: PathBuf,

    /// Search term (case-insensitive)
    pub term: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
pub struct SearchOutput {
    /// Case-folded term
    pub term: String,
    /// `true` when the term is below the minimum query length and nothing was searched
    pub too_short: bool,
    pub results: Vec<SearchResult>,
}

pub async fn run(options: SearchOptions, global: crate::Global) -> Result<()> {
    let config = crate::site::load_config(&global)?;
    let page = crate::site::load_page(&options.file)?;

    let output = search_data(&page, &config, &options.term);
    log::debug!(
        "Search for {:?} returned {} result(s)",
        output.term,
        output.results.len()
    );

    if options.json {
        output_json(&output)?;
    } else {
        output_formatted(&output, config.min_query_len);
    }

    Ok(())
}

pub fn search_data(page: &Page, config: &SiteConfig, term: &str) -> SearchOutput {
    let term = term.to_lowercase();

    if term.chars().count() < config.min_query_len {
        return SearchOutput {
            term,
            too_short: true,
            results: Vec::new(),
        };
    }

    let ctx = Context::new(page, config);
    let results = search(&ctx, &term);

    SearchOutput {
        term,
        too_short: false,
        results,
    }
}

/// Emphasize every occurrence of the (case-folded) term in a case-folded excerpt
fn emphasize(excerpt: &str, term: &str) -> String {
    excerpt
        .split(term)
        .map(str::to_string)
        .collect::<Vec<_>>()
        .join(&term.black().on_yellow().to_string())
}

fn output_formatted(output: &SearchOutput, min_query_len: usize) {
    println!("{}", banner(&f!("SEARCH \"{}\"", output.term)));

    if output.too_short {
        println!(
            "\n{}",
            f!("Queries need at least {min_query_len} characters.").yellow()
        );
        return;
    }

    if output.results.is_empty() {
        println!("\n{}", NO_RESULTS.yellow());
        return;
    }

    for (idx, result) in output.results.iter().enumerate() {
        println!(
            "\n{} {} {}",
            f!("[{}]", idx + 1).yellow().bold(),
            result.title.white().bold(),
            f!("#{}", result.section).bright_black()
        );
        println!("    {}", emphasize(&result.excerpt, &output.term));
        println!(
            "    {}: {}",
            "Open".green(),
            f!("sitenav nav <FILE> {}", result.section).cyan()
        );
    }
}
