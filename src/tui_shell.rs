use anyhow::Result;

mod app;

mod chart;
mod input;
mod modal;
mod view;
mod views;

// Make core TUI types/helpers available to submodules via `super::...`.
use app::{App, Modal, ModalKind, TextInputAction};
use view::{RenderCtx, View, render_view_chrome};

pub fn run() -> Result<()> {
    run_with_options(crate::tui::TuiRunOptions::default())
}

pub fn run_with_options(opts: crate::tui::TuiRunOptions) -> Result<()> {
    app::run(opts)
}
