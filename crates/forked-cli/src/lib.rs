//! Forked CLI - terminal front-end for the trade-off simulator.
//!
//! The CLI plays the part the browser form played: it collects the five
//! submission fields (flags or an interactive form), posts them to the
//! `/generate` server, runs the extractor over the returned narrative,
//! and presents the timeline with an animated score meter.

pub mod animate;
pub mod cli;
pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod output;

pub use cli::{Cli, CliFormat, Command};
pub use client::GenerateClient;
pub use config::Config;
pub use controller::Controller;
pub use error::{CliError, Result};
pub use output::Formatter;
