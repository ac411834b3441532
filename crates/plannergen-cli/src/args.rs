use clap::{Parser, Subcommand};

use crate::cli::GenerateArgs;

/// Command-line interface of the plannergen planner generator
///
/// Plannergen writes LaTeX sources for a hyperlinked yearly planner laid out
/// for an e-ink tablet: annual, quarterly, monthly, weekly and daily pages
/// plus to-do and notes sections, every page linked from a navigation header.
#[derive(Parser)]
#[command(version, about, name = "plannergen")]
pub struct Args {
    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the plannergen CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Generate the planner sources
    #[command(alias = "g")]
    Generate(GenerateArgs),
    /// List supported devices
    Devices,
    /// List planner sections in document order
    Sections,
}
