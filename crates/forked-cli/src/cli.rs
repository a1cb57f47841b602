//! CLI command definitions and argument parsing.

use clap::{Args, Parser, Subcommand};
use forked_domain::SubmissionInput;

/// Forked CLI - Simulate the 10-year trade-offs of a life decision.
#[derive(Debug, Parser)]
#[command(name = "forked")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Disable the score meter animation
    #[arg(long, global = true)]
    pub no_animation: bool,

    /// Server URL (overrides the configured one)
    #[arg(short, long, global = true)]
    pub server: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Styled terminal output (default)
    Pretty,
    /// Parsed narrative as JSON
    Json,
    /// Results view as HTML markup
    Html,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Pretty => crate::config::OutputFormat::Pretty,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Html => crate::config::OutputFormat::Html,
        }
    }
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run one simulation from flags
    Simulate(SimulateArgs),

    /// Fill in the form interactively (default)
    Form,
}

/// Arguments for a one-shot simulation.
#[derive(Debug, Args)]
pub struct SimulateArgs {
    /// Your age (required)
    #[arg(long, default_value = "")]
    pub age: String,

    /// Your current profession
    #[arg(long, default_value = "")]
    pub profession: String,

    /// Where you live
    #[arg(long, default_value = "")]
    pub location: String,

    /// Your risk appetite (e.g. Low / Medium / High)
    #[arg(long, default_value = "")]
    pub risk: String,

    /// The decision you are weighing (required)
    #[arg(long, default_value = "")]
    pub decision: String,
}

impl SimulateArgs {
    /// Convert the parsed flags into a submission.
    ///
    /// Required-field checking happens in the controller, matching the
    /// interactive form path.
    pub fn into_input(self) -> SubmissionInput {
        SubmissionInput {
            age: self.age,
            profession: self.profession,
            location: self.location,
            risk: self.risk,
            decision: self.decision,
        }
    }
}
