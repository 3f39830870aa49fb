//! mdpages - route and link resolution for Markdown documentation sites.

mod cli;
mod config;
mod logger;
mod page;
mod route;
mod scan;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteOptions;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let options = SiteOptions::load(&cli)?;

    match &cli.command {
        Commands::Routes { args } => {
            logger::set_verbose(args.verbose);
            cli::routes::run_routes(args, &options)
        }
        Commands::Links { file, verbose } => {
            logger::set_verbose(*verbose);
            cli::links::run_links(file, &options)
        }
        Commands::Check { args } => {
            logger::set_verbose(args.verbose);
            cli::check::run_check(args, &options)
        }
    }
}
