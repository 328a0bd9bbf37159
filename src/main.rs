mod cli;
mod commands;
mod degree;
mod error;
mod output_name;
mod page_selection;
mod pdf;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use commands::rotate::RotateOptions;
use degree::Degree;
use page_selection::PageSelection;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(cli).await
}

/// Validate the arguments and rotate. A bad degree is reported and turned into
/// a failing exit code before any file is opened.
async fn run(cli: Cli) -> Result<ExitCode> {
    let degree = match Degree::parse(&cli.degree) {
        Ok(degree) => degree,
        Err(e) => {
            println!("{}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    let (pages, invalid) = PageSelection::parse(&cli.pages);
    for page in &invalid {
        println!("{}", page);
        debug!(token = %page.0, "dropping invalid page");
    }

    let options = RotateOptions {
        path: cli.path,
        degree,
        pages,
        output: cli.output,
    };
    commands::rotate::run(&options, cli.json).await?;

    Ok(ExitCode::SUCCESS)
}

// Logs go to stderr; stdout carries diagnostics and the report.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
