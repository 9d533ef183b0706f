mod color;
mod config;
mod histogram;
mod ids;

pub use self::color::ColorIndex;
pub use self::config::{AppConfig, CanvasSize, OptionDefaults};
pub use self::histogram::{Axis, AxisRange, Histogram};
pub use self::ids::DistributionId;

pub mod colors {
    pub use super::color::{BLACK, BLUE, CYAN, GREEN, MAGENTA, RED, TITLE_FILL, WHITE};
}
