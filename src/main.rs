//! Folio - content model and index builder for a markdown static site.

use anyhow::{Result, anyhow};
use clap::Parser;
use folio::{
    build::{build_index, build_site},
    cli::{Cli, Commands},
    config::{SiteConfig, find_config},
    index::CollectionIndex,
    log,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log!("error"; "{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;

    match &cli.command {
        Commands::Check { .. } => build_index(&config).map(|_| ()),
        Commands::Build { .. } => build_site(&config).map(|_| ()),
        Commands::Tags { .. } => {
            let index = build_index(&config)?;
            list_tags(&index, &config);
            Ok(())
        }
        Commands::Posts { tag, .. } => {
            let index = build_index(&config)?;
            let posts: Vec<_> = match tag {
                Some(tag) => index.by_tag(tag).into_iter().filter(|d| d.is_post()).collect(),
                None => index.all_posts(),
            };
            for doc in posts {
                let date = doc.date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default();
                log!("post"; "{date}  {}  ({})", doc.title, doc.path);
            }
            Ok(())
        }
    }
}

/// Load and validate configuration from CLI arguments
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let root = cli.root_dir();
    let config_path = match &cli.config {
        Some(name) => root.join(name),
        None => find_config(&root)
            .ok_or_else(|| anyhow!("Config file not found in {}", root.display()))?,
    };

    let mut config = SiteConfig::from_path(&config_path)?;
    config.update_with_cli(cli, &root)?;

    Ok(config)
}

fn list_tags(index: &CollectionIndex, config: &SiteConfig) {
    for (tag, count) in index.tags() {
        log!("tag"; "{tag} ({count})  {}", config.tag_url(tag));
    }
}
