use anyhow::Result;
use clap::Parser;
use purindb::cli::{Cli, Commands};
use purindb::commands::browse::{browse, BrowseTarget};
use purindb::commands::{self, init, merge, settings};
use purindb::formatting::FormattingConfig;
use purindb::output::write_output;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let env_filter = EnvFilter::try_from_env("PURINDB_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

fn create_formatting_config(plain: bool) -> FormattingConfig {
    let config = if plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    };
    config.apply();
    config
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let fmt = create_formatting_config(cli.global.plain);

    let output = match cli.command {
        Commands::Search { query, sort, pins } => {
            let mut browser = commands::open_browser(&cli.global)?;
            browse(&mut browser, BrowseTarget::Search { query, sort }, &pins, &fmt)?
        }
        Commands::Categories { pins } => {
            let mut browser = commands::open_browser(&cli.global)?;
            browse(&mut browser, BrowseTarget::Categories, &pins, &fmt)?
        }
        Commands::Category { name, sort, pins } => {
            let mut browser = commands::open_browser(&cli.global)?;
            browse(&mut browser, BrowseTarget::Category { name, sort }, &pins, &fmt)?
        }
        Commands::Show { index, mode, pins } => {
            let mut browser = commands::open_browser(&cli.global)?;
            browse(&mut browser, BrowseTarget::Show { index, mode }, &pins, &fmt)?
        }
        Commands::Settings { action } => {
            let mut manager = commands::open_settings(&cli.global)?;
            settings::handle_settings(&mut manager, action)?
        }
        Commands::Merge { csv, report } => {
            let config = commands::resolve_config(&cli.global)?;
            merge::handle_merge(csv, config.dataset.data, report, &fmt)?
        }
        Commands::Init { force } => {
            init::init_config(&std::env::current_dir()?, force)?;
            return Ok(());
        }
    };

    write_output(&output, None)?;
    Ok(())
}
