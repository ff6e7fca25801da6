use crate::prelude::*;
use clap::Parser;
use std::path::PathBuf;

mod error;
mod loading;
mod nav;
mod prelude;
mod render;
mod replay;
mod search;
mod sections;
mod site;
mod table;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Drive the navigation, search and widgets of a single-document knowledge site"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Site configuration file (TOML)
    #[clap(long, env = "SITENAV_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Whether to display additional information.
    #[clap(long, env = "SITENAV_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// List the sections of a page with their labels and progress
    Sections(crate::sections::SectionsOptions),

    /// Activate a section and show the resulting state
    Nav(crate::nav::NavOptions),

    /// Search the content of every section
    Search(crate::search::SearchOptions),

    /// Filter the rows of a table
    Table(crate::table::TableOptions),

    /// Replay a JSON-lines event script against a page
    Replay(crate::replay::ReplayOptions),

    /// Show the loading placeholder for an element
    Loading(crate::loading::LoadingOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Sections(options) => crate::sections::run(options, app.global).await,
        SubCommands::Nav(options) => crate::nav::run(options, app.global).await,
        SubCommands::Search(options) => crate::search::run(options, app.global).await,
        SubCommands::Table(options) => crate::table::run(options, app.global).await,
        SubCommands::Replay(options) => crate::replay::run(options, app.global).await,
        SubCommands::Loading(options) => crate::loading::run(options, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
