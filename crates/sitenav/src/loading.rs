use crate::prelude::{println, *};
use crate::render::{describe_effect, output_json};
use colored::Colorize;
use serde::Serialize;
use sitenav_core::controller::Controller;
use sitenav_core::state::Effect;
use std::path::PathBuf;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct LoadingOptions {
    /// HTML page to load
    #[clap(env = "SITENAV_PAGE")]
    pub file: PathBuf,

    /// Element id that receives the placeholder
    pub element: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
pub struct LoadingOutput {
    pub element: String,
    pub effects: Vec<Effect>,
}

pub async fn run(options: LoadingOptions, global: crate::Global) -> Result<()> {
    let mut controller = crate::site::controller(&options.file, &global)?;

    let output = loading_data(&mut controller, &options.element)?;

    if options.json {
        output_json(&output)?;
    } else {
        for effect in &output.effects {
            println!("{}", describe_effect(effect).green());
            if let Effect::ReplaceContent { html, .. } = effect {
                println!("{}", html.bright_black());
            }
        }
    }

    Ok(())
}

pub fn loading_data(controller: &mut Controller, element: &str) -> Result<LoadingOutput> {
    let effects = controller.show_loading(element);
    if effects.is_empty() {
        return Err(Error::UnknownElement(element.to_string()).into());
    }

    Ok(LoadingOutput {
        element: element.to_string(),
        effects,
    })
}
