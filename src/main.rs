use clap::Parser;
use contact_form::config::Config;
use contact_form::{logging, ui};
use std::path::PathBuf;

/// Interactive terminal contact form.
#[derive(Debug, Parser)]
#[command(name = "contact-form", version, about)]
struct Cli {
    /// Path to the config file (defaults to the platform config dir).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    ui::run(config)?;
    Ok(())
}
