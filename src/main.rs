mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> miette::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env("THEMECUT_LOG").unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match Cli::parse().command {
        Commands::Render {
            resource,
            data,
            engine,
        } => commands::render::run(resource, data, engine),
        Commands::Resolve { resource, engine } => commands::resolve::run(resource, engine),
        Commands::List { namespace, engine } => commands::list::run(namespace, engine),
    }
}
