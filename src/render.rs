//! Render collaborator and the canvas artifact it produces.
//!
//! Composition talks to a [`Renderer`]. Summary-box stacking depends on where
//! the renderer puts a series' box by default, which is only known after the
//! series has been laid out. So the protocol is draw on the scratch pad,
//! then [`Renderer::locate_default_stat_box`], then stack.

use serde::Serialize;

use crate::model::{CanvasSize, ColorIndex, Histogram};
use crate::style::StyleProfile;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum CompositionKind {
    Preview,
    Overlay,
    Merge,
}

impl CompositionKind {
    pub fn label(self) -> &'static str {
        match self {
            CompositionKind::Preview => "preview",
            CompositionKind::Overlay => "overlay",
            CompositionKind::Merge => "merge",
        }
    }

    fn canvas_title(self) -> &'static str {
        match self {
            CompositionKind::Preview => "Preview Canvas",
            CompositionKind::Overlay | CompositionKind::Merge => "Result",
        }
    }
}

/// Placement in pad coordinates, each in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct StatBox {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl StatBox {
    pub const fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}

/// Where legends go on a pad.
pub const LEGEND_PLACEMENT: StatBox = StatBox::new(0.1, 0.7, 0.48, 0.9);

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DrawnSeries {
    pub histogram: Histogram,
    pub color: ColorIndex,
    pub normalized: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DrawnStatBox {
    pub placement: StatBox,
    /// Text and outline color; `None` keeps the profile's colors.
    pub color: Option<ColorIndex>,
    pub lines: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: ColorIndex,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Legend {
    pub placement: StatBox,
    pub entries: Vec<LegendEntry>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Pad {
    pub series: Vec<DrawnSeries>,
    pub stat_boxes: Vec<DrawnStatBox>,
    pub legend: Option<Legend>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Margins {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

/// A finished composition: one or more pads laid out left to right.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Canvas {
    pub kind: CompositionKind,
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub style: String,
    pub margins: Margins,
    pub pads: Vec<Pad>,
}

pub trait Renderer {
    /// Starts a fresh canvas split into `pads` equal horizontal slots.
    fn begin(&mut self, kind: CompositionKind, pads: usize);

    fn draw(&mut self, pad: usize, series: &Histogram, normalized: bool);

    /// Lays `series` out alone on an off-screen pad.
    fn draw_scratch(&mut self, series: &Histogram);

    /// Default summary-box placement of the series last passed to
    /// [`Renderer::draw_scratch`]. `None` if nothing was laid out or that
    /// series shows no summary box.
    fn locate_default_stat_box(&self) -> Option<StatBox>;

    fn draw_stat_box(
        &mut self,
        pad: usize,
        placement: StatBox,
        color: Option<ColorIndex>,
        series: &Histogram,
    );

    fn draw_legend(&mut self, pad: usize, legend: Legend);
}

/// Renderer that records everything drawn into a [`Canvas`].
pub struct CanvasRecorder<'a> {
    style: &'a StyleProfile,
    size: CanvasSize,
    canvas: Option<Canvas>,
    scratch: Option<StatBox>,
}

impl<'a> CanvasRecorder<'a> {
    pub fn new(style: &'a StyleProfile, size: CanvasSize) -> Self {
        Self {
            style,
            size,
            canvas: None,
            scratch: None,
        }
    }

    pub fn finish(self) -> Option<Canvas> {
        self.canvas
    }

    fn pad_mut(&mut self, pad: usize) -> Option<&mut Pad> {
        let pad_ref = self.canvas.as_mut().and_then(|c| c.pads.get_mut(pad));
        if pad_ref.is_none() {
            tracing::warn!(pad, "draw outside of the current canvas ignored");
        }
        pad_ref
    }
}

impl Renderer for CanvasRecorder<'_> {
    fn begin(&mut self, kind: CompositionKind, pads: usize) {
        self.scratch = None;
        self.canvas = Some(Canvas {
            kind,
            title: kind.canvas_title().to_string(),
            width: self.size.width,
            height: self.size.height,
            style: self.style.name.to_string(),
            margins: Margins {
                top: self.style.pad_top_margin,
                bottom: self.style.pad_bottom_margin,
                left: self.style.pad_left_margin,
                right: self.style.pad_right_margin,
            },
            pads: vec![Pad::default(); pads],
        });
    }

    fn draw(&mut self, pad: usize, series: &Histogram, normalized: bool) {
        let color = series.line_color().unwrap_or(self.style.hist_line_color);
        if let Some(p) = self.pad_mut(pad) {
            p.series.push(DrawnSeries {
                histogram: series.clone(),
                color,
                normalized,
            });
        }
    }

    fn draw_scratch(&mut self, series: &Histogram) {
        let lines = self.style.stat_fields().len();
        self.scratch = if series.stats_visible() && lines > 0 {
            let y_max = self.style.stat_y;
            Some(StatBox {
                x_min: self.style.stat_x - self.style.stat_w,
                y_min: y_max - self.style.stat_box_height(lines),
                x_max: self.style.stat_x,
                y_max,
            })
        } else {
            None
        };
    }

    fn locate_default_stat_box(&self) -> Option<StatBox> {
        self.scratch
    }

    fn draw_stat_box(
        &mut self,
        pad: usize,
        placement: StatBox,
        color: Option<ColorIndex>,
        series: &Histogram,
    ) {
        let lines = self.style.stat_lines(series);
        if let Some(p) = self.pad_mut(pad) {
            p.stat_boxes.push(DrawnStatBox {
                placement,
                color,
                lines,
            });
        }
    }

    fn draw_legend(&mut self, pad: usize, legend: Legend) {
        if let Some(p) = self.pad_mut(pad) {
            p.legend = Some(legend);
        }
    }
}
