//! Forked CLI - simulate the 10-year trade-offs of a life decision.

use clap::Parser;
use forked_cli::{form, Cli, Command, Config, Controller, Formatter, GenerateClient};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> forked_cli::Result<()> {
    let cli = Cli::parse();

    // Load or create config
    let mut config = Config::load().unwrap_or_else(|_| {
        let cfg = Config::default();
        cfg.save().ok();
        cfg
    });

    // Flag overrides
    if let Some(server) = cli.server {
        config.server_url = server;
    }
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let animate = !cli.no_animation && config.settings.animate;

    let formatter = Formatter::new(format, color_enabled, animate);
    let client = GenerateClient::new(&config.server_url);
    let mut controller = Controller::new(client, &formatter);

    match cli.command {
        Some(Command::Simulate(args)) => {
            controller.submit(args.into_input()).await?;
        }
        None | Some(Command::Form) => {
            form::run_form(&mut controller, &formatter).await?;
        }
    }

    Ok(())
}
