//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Folio site content indexer CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Site root directory (default: current directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Content directory path (relative to site root)
    #[arg(short, long)]
    pub content: Option<PathBuf>,

    /// Output directory path (relative to site root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file name (default: hugo.toml, then config.toml)
    #[arg(short = 'C', long)]
    pub config: Option<PathBuf>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Publication filter overrides shared by every command
#[derive(clap::Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// include documents marked as draft
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub drafts: Option<bool>,

    /// include documents dated in the future
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub future: Option<bool>,

    /// Override base URL for the site.
    ///
    /// Useful for staging deployments where the URL differs from the one in
    /// the config file.
    #[arg(long = "base-url")]
    pub base_url: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate config and content without writing anything
    Check {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Validate, then write the data files for the renderer
    Build {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// List tags with their document counts
    Tags {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// List posts newest first
    Posts {
        #[command(flatten)]
        filters: FilterArgs,

        /// only posts carrying this tag
        #[arg(short, long)]
        tag: Option<String>,
    },
}

impl Cli {
    pub fn filters(&self) -> &FilterArgs {
        match &self.command {
            Commands::Check { filters }
            | Commands::Build { filters }
            | Commands::Tags { filters }
            | Commands::Posts { filters, .. } => filters,
        }
    }

    /// Site root with `~` expanded.
    pub fn root_dir(&self) -> PathBuf {
        match &self.root {
            Some(root) => {
                PathBuf::from(shellexpand::tilde(&root.to_string_lossy()).into_owned())
            }
            None => PathBuf::from("./"),
        }
    }
}
