//! Plannergen CLI Application
//!
//! Command-line interface for the plannergen planner generator.

mod args;
mod cli;
mod renderer;

use anyhow::Result;
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        no_color,
        json,
        command,
    } = Args::parse();

    let cli = Cli::new(TerminalRenderer::new(!no_color), json);

    info!("plannergen started");

    match command {
        Generate(args) => cli.generate(&args),
        Devices => cli.list_devices(),
        Sections => cli.list_sections(),
    }
}
