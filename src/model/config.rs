use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    /// Group inside the archive that discovery starts from. `None` walks the
    /// whole document.
    #[serde(default)]
    pub base_group: Option<String>,

    #[serde(default)]
    pub defaults: OptionDefaults,

    #[serde(default)]
    pub canvas: CanvasSize,
}

fn default_version() -> u32 {
    1
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            base_group: None,
            defaults: OptionDefaults::default(),
            canvas: CanvasSize::default(),
        }
    }
}

/// Initial state of the option toggles, applied at startup and whenever an
/// archive is opened.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionDefaults {
    #[serde(default)]
    pub show_path: bool,
    #[serde(default)]
    pub publication_style: bool,
    #[serde(default)]
    pub show_stats: bool,
    #[serde(default)]
    pub show_legend: bool,
    #[serde(default)]
    pub normalize: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: 800,
            height: 400,
        }
    }
}
