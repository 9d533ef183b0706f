pub(super) mod canvas;
pub(super) mod distributions;

pub(in crate::tui_shell) use canvas::CanvasView;
pub(in crate::tui_shell) use distributions::{DistributionList, DistributionRow};
