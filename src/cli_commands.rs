use std::path::PathBuf;

use clap::{Args, ValueEnum};

#[derive(Args)]
pub(crate) struct ListArgs {
    /// Archive file
    pub(crate) archive: PathBuf,
    /// Only show entries whose full path contains this text
    #[arg(long)]
    pub(crate) filter: Option<String>,
    /// Show full paths instead of names
    #[arg(long)]
    pub(crate) show_path: bool,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum ComposeMode {
    Preview,
    Overlay,
    Merge,
}

#[derive(Args)]
pub(crate) struct ComposeArgs {
    /// Archive file
    pub(crate) archive: PathBuf,
    #[arg(long, value_enum)]
    pub(crate) mode: ComposeMode,
    /// Comma-separated distribution ids (see `list`)
    #[arg(long, value_delimiter = ',', required = true)]
    pub(crate) select: Vec<u32>,
    /// Draw each series scaled to unit area
    #[arg(long)]
    pub(crate) normalize: bool,
    /// Show summary boxes
    #[arg(long)]
    pub(crate) stats: bool,
    /// Show the legend
    #[arg(long)]
    pub(crate) legend: bool,
    /// Use the publication style
    #[arg(long)]
    pub(crate) publication: bool,
    /// Title applied to every series
    #[arg(long)]
    pub(crate) title: Option<String>,
    #[arg(
        long,
        num_args = 2,
        value_names = ["MIN", "MAX"],
        allow_negative_numbers = true
    )]
    pub(crate) x_range: Option<Vec<f64>>,
    #[arg(
        long,
        num_args = 2,
        value_names = ["MIN", "MAX"],
        allow_negative_numbers = true
    )]
    pub(crate) y_range: Option<Vec<f64>>,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct DemoArgs {
    /// Where to write the archive
    pub(crate) out: PathBuf,
    /// Overwrite an existing file
    #[arg(long)]
    pub(crate) force: bool,
}
