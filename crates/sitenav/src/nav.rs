use crate::prelude::{print, println, *};
use crate::render::{banner, format_effects, format_state, output_json};
use colored::Colorize;
use serde::Serialize;
use sitenav_core::controller::Controller;
use sitenav_core::state::{Effect, UiState};
use std::path::PathBuf;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct NavOptions {
    /// HTML page to load
    #[clap(env = "SITENAV_PAGE")]
    pub file: PathBuf,

    /// Section id to activate
    pub section: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
pub struct NavOutput {
    pub section: String,
    pub label: String,
    /// Effects emitted at startup, before the activation
    pub boot: Vec<Effect>,
    pub effects: Vec<Effect>,
    pub state: UiState,
}

pub async fn run(options: NavOptions, global: crate::Global) -> Result<()> {
    let mut controller = crate::site::controller(&options.file, &global)?;

    let output = nav_data(&mut controller, &options.section)?;

    if options.json {
        output_json(&output)?;
    } else {
        output_formatted(&output, global.verbose);
    }

    Ok(())
}

/// Boot the page and activate `section`
pub fn nav_data(controller: &mut Controller, section: &str) -> Result<NavOutput> {
    if section.is_empty() || controller.page().section(section).is_none() {
        return Err(Error::UnknownSection(section.to_string()).into());
    }

    let boot = controller.boot();
    let effects = controller.navigate_to_section(section);

    Ok(NavOutput {
        section: section.to_string(),
        label: controller.config().label_for(section).to_string(),
        boot,
        effects,
        state: controller.state().clone(),
    })
}

fn output_formatted(output: &NavOutput, verbose: bool) {
    println!(
        "{}",
        banner(&f!("SECTION {} ({})", output.label.to_uppercase(), output.section))
    );

    if verbose {
        println!("\n{}", "Boot effects".bright_yellow().bold());
        print!("{}", format_effects(&output.boot));
    }

    println!("\n{}", "Effects".bright_yellow().bold());
    print!("{}", format_effects(&output.effects));

    println!("\n{}", "State".bright_yellow().bold());
    print!("{}", format_state(&output.state));
}
