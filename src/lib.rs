//! Browse the histograms in an archive, pick a few, and preview, overlay or
//! merge them.

pub mod archive;
pub mod catalog;
pub mod compose;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod render;
pub mod search;
pub mod session;
pub mod style;
pub mod tui;

mod tui_shell;

pub use error::{Error, Result};
