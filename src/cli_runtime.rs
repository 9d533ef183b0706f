use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser};

use plotcombine::logging::{self, LogTarget};

use crate::Commands;

#[derive(Parser)]
#[command(name = "plotcombine")]
#[command(about = "Browse, overlay and merge histograms from an archive", long_about = None)]
pub(crate) struct Cli {
    /// Archive to open when starting the TUI
    archive: Option<PathBuf>,

    /// Config file (defaults to $PLOTCOMBINE_CONFIG)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Append logs to this file
    #[arg(long = "log-file", global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// More logging (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => {
            let target = match cli.log_file {
                Some(path) => LogTarget::File(path),
                None => LogTarget::Discard,
            };
            logging::init(cli.verbose, target)?;
            let config = plotcombine::config::load(cli.config.as_deref())?;
            plotcombine::tui::run_with_options(plotcombine::tui::TuiRunOptions {
                archive: cli.archive,
                config,
            })?;
        }
        Some(command) => {
            if let Some(archive) = cli.archive {
                anyhow::bail!(
                    "unexpected archive {} before a subcommand (pass it to the subcommand)",
                    archive.display()
                );
            }
            let target = match cli.log_file {
                Some(path) => LogTarget::File(path),
                None => LogTarget::Stderr,
            };
            logging::init(cli.verbose, target)?;
            let config = plotcombine::config::load(cli.config.as_deref())?;
            crate::cli_exec::handle_command(command, config)?
        }
    }

    Ok(())
}
