use std::path::PathBuf;

use anyhow::Result;

use crate::model::AppConfig;

#[derive(Clone, Debug, Default)]
pub struct TuiRunOptions {
    /// Archive opened before the first frame.
    pub archive: Option<PathBuf>,
    pub config: AppConfig,
}

pub fn run() -> Result<()> {
    crate::tui_shell::run()
}

pub fn run_with_options(opts: TuiRunOptions) -> Result<()> {
    crate::tui_shell::run_with_options(opts)
}
