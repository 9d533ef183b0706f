use clap::Subcommand;

mod cli_commands;
mod cli_exec;
mod cli_runtime;

use self::cli_commands::{ComposeArgs, DemoArgs, ListArgs};

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List the histograms in an archive
    List(ListArgs),

    /// Compose selected histograms without the TUI
    Compose(ComposeArgs),

    /// Write a small example archive
    Demo(DemoArgs),
}

fn main() {
    if let Err(err) = cli_runtime::run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
