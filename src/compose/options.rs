use serde::{Deserialize, Serialize};

use crate::model::{AxisRange, OptionDefaults};

/// Option snapshot taken for one composition.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderOptions {
    pub show_path: bool,
    pub publication_style: bool,
    pub show_stats: bool,
    pub show_legend: bool,
    pub normalize: bool,
    pub custom_title: Option<String>,
    pub x_range: Option<AxisRange>,
    pub y_range: Option<AxisRange>,
}

impl RenderOptions {
    pub fn from_defaults(d: &OptionDefaults) -> Self {
        Self {
            show_path: d.show_path,
            publication_style: d.publication_style,
            show_stats: d.show_stats,
            show_legend: d.show_legend,
            normalize: d.normalize,
            custom_title: None,
            x_range: None,
            y_range: None,
        }
    }
}
