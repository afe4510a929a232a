mod fill_cmds;
mod scan;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use vaultseed_config::AppConfig;
use vaultseed_engine::ContentTables;

use crate::fill_cmds::FillOptions;

const DEFAULT_CONFIG_PATH: &str = "config/vaultseed.toml";

#[derive(Debug, Parser)]
#[command(
    name = "vaultseed",
    version,
    about = "Fill empty notes in a Markdown vault with generated starter content"
)]
struct Cli {
    /// Configuration file (missing file means defaults).
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate content for every zero-length note in the vault.
    Fill {
        /// Vault root; overrides `vault.root`.
        #[arg(long)]
        root: Option<PathBuf>,
        /// Report what would be written without touching any file.
        #[arg(long)]
        dry_run: bool,
        /// Continue past per-file failures and report them at the end.
        #[arg(long)]
        keep_going: bool,
        /// Date stamped into generated notes (YYYY-MM-DD); defaults to today.
        #[arg(long, value_name = "DATE")]
        today: Option<NaiveDate>,
        /// Write a JSON summary of the run to this file.
        #[arg(long, value_name = "FILE")]
        report: Option<PathBuf>,
    },
    /// List the zero-length notes a fill would target.
    Scan {
        #[arg(long)]
        root: Option<PathBuf>,
    },
    /// Show which generator a vault-relative path routes to.
    Route {
        #[arg(value_name = "PATH")]
        path: String,
    },
    /// Print the generated content for a vault-relative path.
    Preview {
        #[arg(value_name = "PATH")]
        path: String,
        #[arg(long, value_name = "DATE")]
        today: Option<NaiveDate>,
    },
    /// Show the effective taxonomy and content table sizes.
    Doctor,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = AppConfig::load_from(&cli.config)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.telemetry.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    debug!(config = %cli.config.display(), root = %config.vault.root, "configuration loaded");

    let tables = ContentTables::load(config.content.overlay_path.as_deref())?;

    match cli.command {
        Commands::Fill {
            root,
            dry_run,
            keep_going,
            today,
            report,
        } => {
            let root = fill_cmds::vault_root(&config, root);
            let options = FillOptions {
                dry_run,
                keep_going: keep_going || config.run.keep_going,
                today: fill_cmds::resolve_today(today),
            };
            fill_cmds::run_fill(&config, &tables, &root, options, report.as_deref())?;
        }
        Commands::Scan { root } => {
            let root = fill_cmds::vault_root(&config, root);
            fill_cmds::run_scan(&config, &root)?;
        }
        Commands::Route { path } => {
            fill_cmds::run_route(&config, &tables, &path)?;
        }
        Commands::Preview { path, today } => {
            fill_cmds::run_preview(&config, &tables, &path, fill_cmds::resolve_today(today))?;
        }
        Commands::Doctor => {
            fill_cmds::run_doctor(&config, &tables);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn fill_flags_parse() {
        let cli = Cli::try_parse_from([
            "vaultseed",
            "fill",
            "--root",
            "vault",
            "--dry-run",
            "--keep-going",
            "--today",
            "2025-01-06",
            "--report",
            "out/report.json",
        ])
        .unwrap();
        match cli.command {
            Commands::Fill {
                root,
                dry_run,
                keep_going,
                today,
                report,
            } => {
                assert_eq!(root, Some(PathBuf::from("vault")));
                assert!(dry_run && keep_going);
                assert_eq!(today, NaiveDate::from_ymd_opt(2025, 1, 6));
                assert_eq!(report, Some(PathBuf::from("out/report.json")));
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_PATH));
    }

    #[test]
    fn malformed_date_is_rejected() {
        assert!(Cli::try_parse_from(["vaultseed", "preview", "x.md", "--today", "2025-13-01"]).is_err());
    }
}
